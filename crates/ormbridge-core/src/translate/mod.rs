//! Model translation: reflected ORM metadata to schema definitions.

mod column;
mod relationship;

pub use column::translate_column;
pub use relationship::translate_relationship;

use crate::error::TranslateError;
use crate::factory::FactoryRegistry;
use crate::registry::SchemaRegistry;
use ormbridge_model::{AttributeKind, ModelDef};
use ormbridge_schema::{Field, FieldSpec, FieldType, Schema, SchemaConfig};
use std::collections::BTreeSet;
use std::sync::Arc;
use tracing::debug;

/// Which relationship directions to translate.
///
/// The toggles are independent; enabling both is allowed. One-to-many is
/// off by default so models with large collections do not silently grow
/// unbounded-sequence fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IncludePolicy {
    /// Translate many-to-one relationships.
    pub many_to_one: bool,
    /// Translate one-to-many relationships.
    pub one_to_many: bool,
}

impl Default for IncludePolicy {
    fn default() -> Self {
        Self {
            many_to_one: true,
            one_to_many: false,
        }
    }
}

impl IncludePolicy {
    /// Skip all relationships.
    pub fn none() -> Self {
        Self {
            many_to_one: false,
            one_to_many: false,
        }
    }

    /// Translate both directions.
    pub fn all() -> Self {
        Self {
            many_to_one: true,
            one_to_many: true,
        }
    }

    /// Enable or disable many-to-one translation.
    pub fn with_many_to_one(mut self, enabled: bool) -> Self {
        self.many_to_one = enabled;
        self
    }

    /// Enable or disable one-to-many translation.
    pub fn with_one_to_many(mut self, enabled: bool) -> Self {
        self.one_to_many = enabled;
        self
    }
}

/// Options for one model translation.
#[derive(Debug, Clone)]
pub struct TranslateOptions {
    /// Configuration bundle for the output schema.
    pub config: SchemaConfig,
    /// Attribute names to leave out of the output.
    pub exclude: BTreeSet<String>,
    /// Relationship inclusion policy.
    pub include: IncludePolicy,
    /// Caller-supplied field definitions, merged after translation.
    /// An override replaces a translated field of the same name entirely;
    /// new names are appended in override order.
    pub overrides: Vec<(String, FieldType, FieldSpec)>,
}

impl Default for TranslateOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl TranslateOptions {
    /// Default options: attribute-based construction, no exclusions,
    /// default inclusion policy, no overrides.
    pub fn new() -> Self {
        Self {
            config: SchemaConfig::from_attributes(),
            exclude: BTreeSet::new(),
            include: IncludePolicy::default(),
            overrides: Vec::new(),
        }
    }

    /// Set the schema configuration bundle.
    pub fn with_config(mut self, config: SchemaConfig) -> Self {
        self.config = config;
        self
    }

    /// Exclude an attribute by name.
    pub fn exclude(mut self, name: impl Into<String>) -> Self {
        self.exclude.insert(name.into());
        self
    }

    /// Set the relationship inclusion policy.
    pub fn with_include(mut self, include: IncludePolicy) -> Self {
        self.include = include;
        self
    }

    /// Supply a field definition that takes precedence over translation.
    pub fn with_override(
        mut self,
        name: impl Into<String>,
        ty: FieldType,
        spec: FieldSpec,
    ) -> Self {
        self.overrides.push((name.into(), ty, spec));
        self
    }
}

/// The model translator.
///
/// Borrows the two caller-owned registries: translated schemas are
/// registered for forward-reference resolution, and factory defaults are
/// recovered from the factory table.
pub struct Translator<'a> {
    schemas: &'a SchemaRegistry,
    factories: &'a FactoryRegistry,
}

impl<'a> Translator<'a> {
    /// Create a translator over the given registries.
    pub fn new(schemas: &'a SchemaRegistry, factories: &'a FactoryRegistry) -> Self {
        Self { schemas, factories }
    }

    /// Translate one model into a schema type.
    ///
    /// Walks the model's attributes in declaration order, translates
    /// columns and enabled relationships, merges overrides, resolves the
    /// new schema's forward references against the registry's current
    /// contents, and registers it under the model's name. All-or-nothing:
    /// any failure aborts the call with nothing registered.
    pub fn translate(
        &self,
        model: &ModelDef,
        options: &TranslateOptions,
    ) -> Result<Arc<Schema>, TranslateError> {
        if !model.is_mapped() {
            return Err(TranslateError::not_mapped(&model.name));
        }
        if let Some((name, _, _)) = options
            .overrides
            .iter()
            .find(|(name, _, _)| options.exclude.contains(name))
        {
            return Err(TranslateError::config(format!(
                "override '{name}' is also excluded"
            )));
        }

        let mut schema = Schema::new(&model.name, options.config);
        for attribute in model.attributes() {
            if options.exclude.contains(&attribute.name) {
                continue;
            }
            match &attribute.kind {
                AttributeKind::Column(column) => {
                    let (ty, spec) = translate_column(&attribute.name, column, self.factories)?;
                    schema.insert_field(Field::new(&attribute.name, ty, spec));
                }
                AttributeKind::Relationship(relationship) => {
                    if let Some((ty, spec)) =
                        translate_relationship(&attribute.name, relationship, &options.include)?
                    {
                        schema.insert_field(Field::new(&attribute.name, ty, spec));
                    }
                }
                other => {
                    return Err(TranslateError::UnknownAttributeKind {
                        model: model.name.clone(),
                        attribute: attribute.name.clone(),
                        kind: other.kind_name(),
                    });
                }
            }
        }

        for (name, ty, spec) in &options.overrides {
            schema.insert_field(Field::new(name, ty.clone(), spec.clone()));
        }

        let schema = Arc::new(schema);
        let resolved = self.schemas.resolve(&schema);
        debug!(
            model = %model.name,
            fields = schema.len(),
            resolved,
            "translated model"
        );
        self.schemas.register(Arc::clone(&schema));
        Ok(schema)
    }
}
