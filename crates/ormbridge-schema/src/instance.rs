//! Instance construction from attribute-bearing sources.

use crate::error::SchemaError;
use crate::field::{Field, FieldType};
use crate::schema::Schema;
use crate::value::Value;
use std::collections::BTreeMap;

/// One attribute as exposed by a source object.
pub enum AttrValue<'a> {
    /// A scalar value (or null).
    Scalar(Value),
    /// A nested attribute-bearing object (a to-one relation).
    Object(&'a dyn AttributeSource),
    /// A sequence of attribute-bearing objects (a to-many relation).
    Many(Vec<&'a dyn AttributeSource>),
}

/// Anything instances can be built from: ORM entities, loaded rows, or
/// plain field mappings.
pub trait AttributeSource {
    /// Look up one attribute by name.
    fn attribute(&self, name: &str) -> Option<AttrValue<'_>>;
}

impl AttributeSource for BTreeMap<String, Value> {
    fn attribute(&self, name: &str) -> Option<AttrValue<'_>> {
        self.get(name).map(|v| AttrValue::Scalar(v.clone()))
    }
}

/// A built field value.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// A scalar value (or null).
    Scalar(Value),
    /// A nested instance built through a resolved reference.
    Nested(Instance),
    /// A sequence of nested instances.
    Many(Vec<Instance>),
}

/// A validated instance of a schema: ordered field name -> value.
#[derive(Debug, Clone, PartialEq)]
pub struct Instance {
    schema: String,
    values: Vec<(String, FieldValue)>,
}

impl Instance {
    /// Name of the schema this instance was built from.
    pub fn schema_name(&self) -> &str {
        &self.schema
    }

    /// Get a field value by name.
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.values
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value)
    }

    /// Get a scalar field value by name.
    pub fn scalar(&self, name: &str) -> Option<&Value> {
        match self.get(name)? {
            FieldValue::Scalar(value) => Some(value),
            _ => None,
        }
    }

    /// Get a nested instance by field name.
    pub fn nested(&self, name: &str) -> Option<&Instance> {
        match self.get(name)? {
            FieldValue::Nested(instance) => Some(instance),
            _ => None,
        }
    }

    /// Get a sequence of nested instances by field name.
    pub fn many(&self, name: &str) -> Option<&[Instance]> {
        match self.get(name)? {
            FieldValue::Many(instances) => Some(instances),
            _ => None,
        }
    }

    /// All field values, in schema declaration order.
    pub fn values(&self) -> &[(String, FieldValue)] {
        &self.values
    }
}

impl Schema {
    /// Build an instance from an attribute-bearing source.
    ///
    /// Fields absent from the source fall back to their default policy:
    /// literal defaults are carried verbatim, factories are invoked fresh,
    /// required fields fail with [`SchemaError::MissingField`]. Nested
    /// objects and sequences are built recursively through resolved
    /// references and require `from_attributes` in the schema config.
    pub fn build_from(&self, source: &dyn AttributeSource) -> Result<Instance, SchemaError> {
        let mut values = Vec::with_capacity(self.len());
        for field in self.fields() {
            let value = match source.attribute(&field.name) {
                Some(AttrValue::Scalar(value)) => self.build_scalar(field, value)?,
                Some(AttrValue::Object(object)) => self.build_object(field, object)?,
                Some(AttrValue::Many(objects)) => self.build_many(field, &objects)?,
                None => self.build_default(field)?,
            };
            values.push((field.name.clone(), value));
        }
        Ok(Instance {
            schema: self.name.clone(),
            values,
        })
    }

    fn build_scalar(
        &self,
        field: &Field,
        value: Value,
    ) -> Result<FieldValue, SchemaError> {
        if value.is_null() {
            if field.spec.required {
                return Err(SchemaError::MissingField {
                    schema: self.name.clone(),
                    field: field.name.clone(),
                });
            }
            return Ok(FieldValue::Scalar(Value::Null));
        }
        match &field.ty {
            FieldType::Scalar(scalar) if scalar.accepts(&value) => Ok(FieldValue::Scalar(value)),
            FieldType::Scalar(scalar) => Err(SchemaError::TypeMismatch {
                schema: self.name.clone(),
                field: field.name.clone(),
                expected: format!("{scalar:?} scalar"),
            }),
            FieldType::Ref(target) => Err(SchemaError::TypeMismatch {
                schema: self.name.clone(),
                field: field.name.clone(),
                expected: format!("'{target}' object"),
            }),
            FieldType::RefList(target) => Err(SchemaError::TypeMismatch {
                schema: self.name.clone(),
                field: field.name.clone(),
                expected: format!("sequence of '{target}' objects"),
            }),
        }
    }

    fn build_object(
        &self,
        field: &Field,
        object: &dyn AttributeSource,
    ) -> Result<FieldValue, SchemaError> {
        if !self.config.from_attributes {
            return Err(SchemaError::FromAttributesDisabled {
                schema: self.name.clone(),
            });
        }
        let FieldType::Ref(target) = &field.ty else {
            return Err(SchemaError::TypeMismatch {
                schema: self.name.clone(),
                field: field.name.clone(),
                expected: format!("{:?}", field.ty),
            });
        };
        let target_schema =
            field
                .resolved_target()
                .ok_or_else(|| SchemaError::UnresolvedRef {
                    schema: self.name.clone(),
                    field: field.name.clone(),
                    target: target.clone(),
                })?;
        Ok(FieldValue::Nested(target_schema.build_from(object)?))
    }

    fn build_many(
        &self,
        field: &Field,
        objects: &[&dyn AttributeSource],
    ) -> Result<FieldValue, SchemaError> {
        if !self.config.from_attributes {
            return Err(SchemaError::FromAttributesDisabled {
                schema: self.name.clone(),
            });
        }
        let FieldType::RefList(target) = &field.ty else {
            return Err(SchemaError::TypeMismatch {
                schema: self.name.clone(),
                field: field.name.clone(),
                expected: format!("{:?}", field.ty),
            });
        };
        let target_schema =
            field
                .resolved_target()
                .ok_or_else(|| SchemaError::UnresolvedRef {
                    schema: self.name.clone(),
                    field: field.name.clone(),
                    target: target.clone(),
                })?;
        let instances = objects
            .iter()
            .map(|object| target_schema.build_from(*object))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(FieldValue::Many(instances))
    }

    fn build_default(&self, field: &Field) -> Result<FieldValue, SchemaError> {
        match field.spec.produce_default() {
            Some(value) => Ok(FieldValue::Scalar(value)),
            None => Err(SchemaError::MissingField {
                schema: self.name.clone(),
                field: field.name.clone(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::{Factory, Field, FieldSpec, FieldType};
    use crate::schema::SchemaConfig;
    use crate::value::ScalarType;
    use std::sync::Arc;

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
    }

    fn source(pairs: &[(&str, Value)]) -> BTreeMap<String, Value> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn test_build_from_mapping() {
        let schema = city_schema();
        let instance = schema
            .build_from(&source(&[("name", Value::from("Munich"))]))
            .unwrap();

        assert_eq!(instance.schema_name(), "City");
        assert_eq!(instance.scalar("name"), Some(&Value::String("Munich".into())));
        // optional field fell back to its Null default
        assert_eq!(instance.scalar("zip_code"), Some(&Value::Null));
    }

    #[test]
    fn test_missing_required_field() {
        let schema = city_schema();
        let err = schema.build_from(&source(&[])).unwrap_err();
        assert_eq!(
            err,
            SchemaError::MissingField {
                schema: "City".into(),
                field: "name".into(),
            }
        );
    }

    #[test]
    fn test_null_for_required_field_is_missing() {
        let schema = city_schema();
        let err = schema
            .build_from(&source(&[("name", Value::Null)]))
            .unwrap_err();
        assert!(matches!(err, SchemaError::MissingField { .. }));
    }

    #[test]
    fn test_scalar_type_mismatch() {
        let schema = city_schema();
        let err = schema
            .build_from(&source(&[("name", Value::Int32(1))]))
            .unwrap_err();
        assert!(matches!(err, SchemaError::TypeMismatch { .. }));
    }

    #[test]
    fn test_factory_default_fresh_per_instance() {
        use std::sync::atomic::{AtomicI32, Ordering};
        static COUNTER: AtomicI32 = AtomicI32::new(0);

        let schema = Schema::new("Ticket", SchemaConfig::new()).with_field(Field::new(
            "number",
            FieldType::scalar(ScalarType::Int32),
            FieldSpec::with_factory(Factory::new("tests.next_number", || {
                Value::Int32(COUNTER.fetch_add(1, Ordering::SeqCst))
            })),
        ));

        let first = schema.build_from(&source(&[])).unwrap();
        let second = schema.build_from(&source(&[])).unwrap();
        assert_ne!(first.scalar("number"), second.scalar("number"));
    }

    struct FakeCity {
        name: Value,
    }

    impl AttributeSource for FakeCity {
        fn attribute(&self, name: &str) -> Option<AttrValue<'_>> {
            match name {
                "name" => Some(AttrValue::Scalar(self.name.clone())),
                _ => None,
            }
        }
    }

    struct FakeStreet<'a> {
        name: Value,
        city: &'a FakeCity,
    }

    impl AttributeSource for FakeStreet<'_> {
        fn attribute(&self, name: &str) -> Option<AttrValue<'_>> {
            match name {
                "name" => Some(AttrValue::Scalar(self.name.clone())),
                "city" => Some(AttrValue::Object(self.city)),
                _ => None,
            }
        }
    }

    fn street_schema() -> Schema {
        Schema::new("Street", SchemaConfig::from_attributes())
            .with_field(Field::new(
                "name",
                FieldType::scalar(ScalarType::String),
                FieldSpec::required(),
            ))
            .with_field(Field::new(
                "city",
                FieldType::reference("City"),
                FieldSpec::optional(),
            ))
    }

    #[test]
    fn test_nested_build_through_resolved_ref() {
        let schema = street_schema();
        let city = Arc::new(city_schema());
        schema.resolve_with(|name| (name == "City").then(|| Arc::clone(&city)));

        let fake_city = FakeCity {
            name: Value::from("Munich"),
        };
        let street = FakeStreet {
            name: Value::from("Maximilianstrasse"),
            city: &fake_city,
        };

        let instance = schema.build_from(&street).unwrap();
        let nested = instance.nested("city").unwrap();
        assert_eq!(nested.scalar("name"), Some(&Value::String("Munich".into())));
    }

    #[test]
    fn test_nested_build_through_unresolved_ref_fails() {
        let schema = street_schema();
        let fake_city = FakeCity {
            name: Value::from("Munich"),
        };
        let street = FakeStreet {
            name: Value::from("Maximilianstrasse"),
            city: &fake_city,
        };

        let err = schema.build_from(&street).unwrap_err();
        assert_eq!(
            err,
            SchemaError::UnresolvedRef {
                schema: "Street".into(),
                field: "city".into(),
                target: "City".into(),
            }
        );
    }

    #[test]
    fn test_object_source_requires_from_attributes() {
        let mut schema = street_schema();
        schema.config = SchemaConfig::new();

        let fake_city = FakeCity {
            name: Value::from("Munich"),
        };
        let street = FakeStreet {
            name: Value::from("Maximilianstrasse"),
            city: &fake_city,
        };

        let err = schema.build_from(&street).unwrap_err();
        assert!(matches!(err, SchemaError::FromAttributesDisabled { .. }));
    }
}
