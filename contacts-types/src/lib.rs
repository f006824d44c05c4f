//! Core type definitions for the contacts account-type model.
//!
//! This crate defines the small, logic-free types shared by the model:
//! - Resource identifiers with the "unset" sentinel ([`ResId`])
//! - Editor input-type bitmasks ([`InputType`])
//! - Account source identity ([`AccountTypeWithDataSet`])
//! - Well-known data-kind MIME types ([`mime`])
//!
//! Everything that interprets these types (cardinality limits, registries,
//! label resolution) lives in `contacts-model`.

mod ids;
mod input;
pub mod mime;
mod res;

pub use ids::AccountTypeWithDataSet;
pub use input::InputType;
pub use res::{Icon, ResId};

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in type operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid resource id: {0}")]
    InvalidResId(String),
}
