//! Constraint and lookup model for contact account types.
//!
//! Each contact data source (an account type) declares which data kinds it
//! supports and how rows of each kind may be labeled and edited:
//! - [`DataKind`]: one category of data keyed by MIME type, with cardinality
//!   limits, a sort weight and optional text inflaters
//! - [`EditType`] / [`EventEditType`]: a labeled variant of a kind
//! - [`EditField`]: one editable column of a kind's rows
//! - [`AccountType`]: the per-source trait over [`AccountTypeInfo`], which
//!   owns the MIME-indexed [`KindRegistry`]
//! - [`DisplayLabelComparator`]: locale-aware ordering of account types
//!
//! Text, icons and collation come from host-provided collaborators
//! ([`ResourceResolver`], [`Collator`]). Registries are built once and are
//! safe to read concurrently afterwards.

mod account_type;
mod comparator;
mod data_kind;
mod definition;
mod edit_field;
mod edit_type;
mod error;
pub mod fallback;
mod inflater;
mod registry;
pub mod res;
mod resources;
mod set;

pub use account_type::{AccountType, AccountTypeInfo};
pub use comparator::{Collator, DisplayLabelComparator, RootCollator};
pub use data_kind::DataKind;
pub use definition::{
    AccountTypeDefinition, DataKindDefinition, EditFieldDefinition, EditTypeDefinition,
    ExternalAccountType,
};
pub use edit_field::EditField;
pub use edit_type::{EditType, EventEditType};
pub use error::{ModelError, ModelResult};
pub use fallback::FallbackAccountType;
pub use inflater::{ContentValues, DataRow, SimpleInflater, StringInflater, TypeLabelInflater};
pub use registry::KindRegistry;
pub use resources::{InMemoryResources, ResourceResolver, resource_text};
pub use set::AccountTypeSet;
