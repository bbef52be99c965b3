//! Translation error types.

use ormbridge_model::{RelationTarget, StorageType};
use thiserror::Error;

/// Errors raised during model translation.
///
/// Every failure is fatal to the current translation call; no partial
/// schema is produced or registered. Callers translating a batch of
/// models isolate failures per model themselves.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TranslateError {
    /// A factory path did not resolve to a registered factory.
    #[error("cannot resolve factory path '{path}': {reason}")]
    Resolution {
        /// The dotted path that failed to resolve.
        path: String,
        /// Why resolution failed.
        reason: String,
    },

    /// No value type was derivable for a column.
    #[error("could not infer value type for column '{column}' with storage type {storage}")]
    TypeInference {
        /// Column attribute name.
        column: String,
        /// Display form of the storage type.
        storage: String,
    },

    /// A relationship does not target a single well-defined mapped model.
    #[error("relationship '{attribute}' does not target a single mapped model (targets: {targets:?})")]
    Relationship {
        /// Relationship attribute name.
        attribute: String,
        /// The ambiguous target names.
        targets: Vec<String>,
    },

    /// The input model is not mapped to a table.
    #[error("model '{model}' is not mapped to a table")]
    NotMapped {
        /// Model name.
        model: String,
    },

    /// The caller supplied contradictory translation options.
    #[error("conflicting translation options: {reason}")]
    Config {
        /// Description of the contradiction.
        reason: String,
    },

    /// A reflected attribute is neither a column nor a relationship.
    #[error("attribute '{attribute}' on model '{model}' has unsupported kind '{kind}'")]
    UnknownAttributeKind {
        /// Model name.
        model: String,
        /// Attribute name.
        attribute: String,
        /// Kind name as reported by reflection.
        kind: &'static str,
    },
}

impl TranslateError {
    /// Create a resolution error.
    pub fn resolution(path: impl Into<String>, reason: impl Into<String>) -> Self {
        TranslateError::Resolution {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a type-inference error for a column.
    pub fn type_inference(column: impl Into<String>, storage: &StorageType) -> Self {
        TranslateError::TypeInference {
            column: column.into(),
            storage: storage.to_string(),
        }
    }

    /// Create a relationship-target error.
    pub fn relationship(attribute: impl Into<String>, target: &RelationTarget) -> Self {
        let targets = match target {
            RelationTarget::Model(name) => vec![name.clone()],
            RelationTarget::Polymorphic(names) => names.clone(),
        };
        TranslateError::Relationship {
            attribute: attribute.into(),
            targets,
        }
    }

    /// Create a not-mapped error.
    pub fn not_mapped(model: impl Into<String>) -> Self {
        TranslateError::NotMapped {
            model: model.into(),
        }
    }

    /// Create a config error.
    pub fn config(reason: impl Into<String>) -> Self {
        TranslateError::Config {
            reason: reason.into(),
        }
    }
}
