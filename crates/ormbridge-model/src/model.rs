//! Model definitions.

use crate::attribute::{AttributeDef, AttributeKind};
use crate::column::ColumnDef;
use crate::relationship::RelationshipDef;
use serde::{Deserialize, Serialize};

/// A reflected ORM model: name, table mapping, and ordered attributes.
///
/// Abstract bases carry no table mapping and cannot be translated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelDef {
    /// Model name (unique within a registry).
    pub name: String,
    /// Mapped table name; `None` for abstract/unmapped bases.
    table: Option<String>,
    /// Attributes, in declaration order.
    attributes: Vec<AttributeDef>,
}

impl ModelDef {
    /// Create a mapped model.
    pub fn new(name: impl Into<String>, table: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            table: Some(table.into()),
            attributes: Vec::new(),
        }
    }

    /// Create an abstract (table-less) base model.
    pub fn abstract_base(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            table: None,
            attributes: Vec::new(),
        }
    }

    /// Add a column attribute.
    pub fn with_column(self, name: impl Into<String>, column: ColumnDef) -> Self {
        self.with_attribute(AttributeDef::column(name, column))
    }

    /// Add a relationship attribute.
    pub fn with_relationship(
        self,
        name: impl Into<String>,
        relationship: RelationshipDef,
    ) -> Self {
        self.with_attribute(AttributeDef::relationship(name, relationship))
    }

    /// Add a reflected attribute.
    pub fn with_attribute(mut self, attribute: AttributeDef) -> Self {
        self.attributes.push(attribute);
        self
    }

    /// Check if this model is mapped to a table.
    pub fn is_mapped(&self) -> bool {
        self.table.is_some()
    }

    /// The mapped table name, if any.
    pub fn table(&self) -> Option<&str> {
        self.table.as_deref()
    }

    /// All attributes, in declaration order.
    pub fn attributes(&self) -> &[AttributeDef] {
        &self.attributes
    }

    /// Get an attribute by name.
    pub fn get_attribute(&self, name: &str) -> Option<&AttributeDef> {
        self.attributes.iter().find(|a| a.name == name)
    }

    /// All column attributes, in declaration order.
    pub fn columns(&self) -> impl Iterator<Item = (&str, &ColumnDef)> {
        self.attributes.iter().filter_map(|a| match &a.kind {
            AttributeKind::Column(column) => Some((a.name.as_str(), column)),
            _ => None,
        })
    }

    /// All relationship attributes, in declaration order.
    pub fn relationships(&self) -> impl Iterator<Item = (&str, &RelationshipDef)> {
        self.attributes.iter().filter_map(|a| match &a.kind {
            AttributeKind::Relationship(relationship) => {
                Some((a.name.as_str(), relationship))
            }
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::column::StorageType;

    fn city_model() -> ModelDef {
        ModelDef::new("City", "city")
            .with_column("id", ColumnDef::new(StorageType::Integer).primary_key())
            .with_column(
                "name",
                ColumnDef::new(StorageType::unicode(255)).not_null(),
            )
            .with_relationship(
                "state_province",
                RelationshipDef::many_to_one("StateProvince"),
            )
    }

    #[test]
    fn test_model_builder_keeps_order() {
        let model = city_model();
        assert!(model.is_mapped());
        assert_eq!(model.table(), Some("city"));

        let names: Vec<&str> = model.attributes().iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["id", "name", "state_province"]);
    }

    #[test]
    fn test_abstract_base_is_unmapped() {
        let base = ModelDef::abstract_base("AbstractBase");
        assert!(!base.is_mapped());
        assert_eq!(base.table(), None);
    }

    #[test]
    fn test_kind_iterators() {
        let model = city_model();
        assert_eq!(model.columns().count(), 2);
        assert_eq!(model.relationships().count(), 1);
        assert!(model.get_attribute("state_province").is_some());
        assert!(model.get_attribute("nope").is_none());
    }

    #[test]
    fn test_model_serializes() {
        let model = city_model();
        let json = serde_json::to_value(&model).unwrap();
        assert_eq!(json["name"], "City");
        assert_eq!(json["table"], "city");
        assert_eq!(json["attributes"][2]["name"], "state_province");
    }
}
