//! Schema runtime error types.

use thiserror::Error;

/// Errors raised while building instances from a schema.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SchemaError {
    /// A required field was absent (or supplied as null).
    #[error("missing required field '{field}' on schema '{schema}'")]
    MissingField {
        /// Schema name.
        schema: String,
        /// Field name.
        field: String,
    },

    /// A supplied value did not match the field's declared shape.
    #[error("type mismatch for field '{field}' on schema '{schema}': expected {expected}")]
    TypeMismatch {
        /// Schema name.
        schema: String,
        /// Field name.
        field: String,
        /// Description of the expected shape.
        expected: String,
    },

    /// A nested build went through a reference that is still symbolic.
    #[error("unresolved reference '{target}' for field '{field}' on schema '{schema}'")]
    UnresolvedRef {
        /// Schema name.
        schema: String,
        /// Field name.
        field: String,
        /// The referenced schema name.
        target: String,
    },

    /// An attribute-bearing source was supplied but the schema config
    /// only permits plain mappings.
    #[error("schema '{schema}' does not allow construction from attribute-bearing objects")]
    FromAttributesDisabled {
        /// Schema name.
        schema: String,
    },
}
