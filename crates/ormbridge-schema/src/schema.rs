//! Schema types - named, ordered field collections with forward-reference
//! resolution.

use crate::field::Field;
use serde::Serialize;
use std::sync::Arc;

/// Configuration bundle for a schema type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct SchemaConfig {
    /// Allow building instances from attribute-bearing sources (ORM-style
    /// objects), not just plain field mappings.
    pub from_attributes: bool,
}

impl SchemaConfig {
    /// The default configuration: mapping construction only.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration for schemas populated from attribute-bearing objects.
    pub fn from_attributes() -> Self {
        Self {
            from_attributes: true,
        }
    }
}

/// A schema type: a named, ordered mapping from field name to field
/// definition, plus its configuration bundle.
///
/// Field insertion is an upsert - a second field with the same name
/// replaces the first in place, keeping the original position.
#[derive(Debug, Clone, Serialize)]
pub struct Schema {
    /// Schema name (the source model's name).
    pub name: String,
    /// Configuration bundle.
    pub config: SchemaConfig,
    fields: Vec<Field>,
}

impl Schema {
    /// Create an empty schema.
    pub fn new(name: impl Into<String>, config: SchemaConfig) -> Self {
        Self {
            name: name.into(),
            config,
            fields: Vec::new(),
        }
    }

    /// Add a field, replacing any existing field of the same name in place.
    pub fn with_field(mut self, field: Field) -> Self {
        self.insert_field(field);
        self
    }

    /// Add a field, replacing any existing field of the same name in place.
    pub fn insert_field(&mut self, field: Field) {
        match self.fields.iter_mut().find(|f| f.name == field.name) {
            Some(slot) => *slot = field,
            None => self.fields.push(field),
        }
    }

    /// Get a field by name.
    pub fn get_field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// All fields, in declaration order.
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Field names, in declaration order.
    pub fn field_names(&self) -> Vec<&str> {
        self.fields.iter().map(|f| f.name.as_str()).collect()
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check if the schema has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Names of references that have not been linked to a target yet.
    pub fn pending_refs(&self) -> Vec<&str> {
        self.fields
            .iter()
            .filter(|f| f.is_pending())
            .filter_map(|f| f.target_name())
            .collect()
    }

    /// Resolve pending forward references against a supplied namespace.
    ///
    /// Best-effort and single-pass: names the lookup cannot supply stay
    /// symbolic and may be linked by a later pass. Returns how many fields
    /// were resolved this pass.
    pub fn resolve_with<F>(&self, lookup: F) -> usize
    where
        F: Fn(&str) -> Option<Arc<Schema>>,
    {
        let mut resolved = 0;
        for field in self.fields.iter().filter(|f| f.is_pending()) {
            let Some(target_name) = field.target_name() else {
                continue;
            };
            if let Some(target) = lookup(target_name) {
                if field.resolve(target) {
                    resolved += 1;
                }
            }
        }
        resolved
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::{FieldSpec, FieldType};
    use crate::value::ScalarType;

    fn city_schema() -> Schema {
        Schema::new("City", SchemaConfig::from_attributes())
            .with_field(Field::new(
                "name",
                FieldType::scalar(ScalarType::String),
                FieldSpec::required(),
            ))
            .with_field(Field::new(
                "zip_code",
                FieldType::scalar(ScalarType::String),
                FieldSpec::optional(),
            ))
            .with_field(Field::new(
                "state_province",
                FieldType::reference("StateProvince"),
                FieldSpec::optional(),
            ))
    }

    #[test]
    fn test_fields_keep_declaration_order() {
        let schema = city_schema();
        assert_eq!(
            schema.field_names(),
            vec!["name", "zip_code", "state_province"]
        );
    }

    #[test]
    fn test_insert_replaces_in_place() {
        let mut schema = city_schema();
        schema.insert_field(Field::new(
            "zip_code",
            FieldType::scalar(ScalarType::Int32),
            FieldSpec::required(),
        ));

        assert_eq!(schema.len(), 3);
        // position preserved
        assert_eq!(
            schema.field_names(),
            vec!["name", "zip_code", "state_province"]
        );
        let replaced = schema.get_field("zip_code").unwrap();
        assert_eq!(replaced.ty, FieldType::Scalar(ScalarType::Int32));
        assert!(replaced.spec.required);
    }

    #[test]
    fn test_schema_description_serializes() {
        let schema = city_schema();
        let json = serde_json::to_value(&schema).unwrap();

        assert_eq!(json["name"], "City");
        assert_eq!(json["config"]["from_attributes"], true);
        assert_eq!(json["fields"][0]["name"], "name");
        assert_eq!(json["fields"][0]["spec"]["required"], true);
        assert_eq!(json["fields"][2]["ty"]["Ref"], "StateProvince");
    }

    #[test]
    fn test_resolve_with_is_best_effort() {
        let schema = city_schema();
        assert_eq!(schema.pending_refs(), vec!["StateProvince"]);

        // lookup that knows nothing resolves nothing
        assert_eq!(schema.resolve_with(|_| None), 0);
        assert_eq!(schema.pending_refs(), vec!["StateProvince"]);

        let state = Arc::new(Schema::new("StateProvince", SchemaConfig::new()));
        let resolved = schema.resolve_with(|name| {
            (name == "StateProvince").then(|| Arc::clone(&state))
        });
        assert_eq!(resolved, 1);
        assert!(schema.pending_refs().is_empty());

        // later passes have nothing left to do
        assert_eq!(schema.resolve_with(|_| Some(Arc::clone(&state))), 0);
    }
}
