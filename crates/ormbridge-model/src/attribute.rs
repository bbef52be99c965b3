//! Reflected model attributes as a tagged union.

use crate::column::ColumnDef;
use crate::relationship::RelationshipDef;
use serde::{Deserialize, Serialize};

/// A multi-column value object (composite attribute).
///
/// Reflectable but untranslatable; translation fails fast when it meets
/// one rather than silently dropping schema surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompositeDef {
    /// The column attributes this composite spans.
    pub columns: Vec<String>,
}

impl CompositeDef {
    /// Create a composite over the given column attribute names.
    pub fn new(columns: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
        }
    }
}

/// The kind of one persisted attribute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AttributeKind {
    /// A scalar column.
    Column(ColumnDef),
    /// A relationship to another model.
    Relationship(RelationshipDef),
    /// A composite value object.
    Composite(CompositeDef),
}

impl AttributeKind {
    /// Short name of the kind, for diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            AttributeKind::Column(_) => "column",
            AttributeKind::Relationship(_) => "relationship",
            AttributeKind::Composite(_) => "composite",
        }
    }
}

/// One reflected attribute: name plus kind-specific payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributeDef {
    /// Attribute name.
    pub name: String,
    /// Attribute kind and payload.
    pub kind: AttributeKind,
}

impl AttributeDef {
    /// Create a column attribute.
    pub fn column(name: impl Into<String>, column: ColumnDef) -> Self {
        Self {
            name: name.into(),
            kind: AttributeKind::Column(column),
        }
    }

    /// Create a relationship attribute.
    pub fn relationship(name: impl Into<String>, relationship: RelationshipDef) -> Self {
        Self {
            name: name.into(),
            kind: AttributeKind::Relationship(relationship),
        }
    }

    /// Create a composite attribute.
    pub fn composite(name: impl Into<String>, composite: CompositeDef) -> Self {
        Self {
            name: name.into(),
            kind: AttributeKind::Composite(composite),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::column::StorageType;

    #[test]
    fn test_kind_names() {
        let column = AttributeDef::column("id", ColumnDef::new(StorageType::Integer));
        let relationship =
            AttributeDef::relationship("state", RelationshipDef::many_to_one("StateProvince"));
        let composite =
            AttributeDef::composite("point", CompositeDef::new(["x", "y"]));

        assert_eq!(column.kind.kind_name(), "column");
        assert_eq!(relationship.kind.kind_name(), "relationship");
        assert_eq!(composite.kind.kind_name(), "composite");
    }
}
