//! Error types for loading account-type definitions.

use thiserror::Error;

/// Errors raised while turning a definition into an account type.
///
/// Registry lookups never fail; they return `None` instead.
#[derive(Debug, Error)]
pub enum ModelError {
    /// Definition JSON is malformed or has the wrong shape.
    #[error("invalid definition: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A kind was declared without a MIME type.
    #[error("data kind #{index} has an empty MIME type")]
    EmptyMimeType { index: usize },

    /// Two edit types of one kind share a raw value.
    #[error("data kind {mime_type} declares edit type {raw_value} more than once")]
    DuplicateEditType { mime_type: String, raw_value: i32 },
}

/// Result type for model operations.
pub type ModelResult<T> = Result<T, ModelError>;
