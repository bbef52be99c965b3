//! ORMBridge - translate declarative ORM model definitions into
//! validation schemas.
//!
//! Reflected model metadata (columns, defaults, relationships) goes in;
//! a named, ordered schema definition comes out, with forward references
//! between schemas resolved through a caller-owned registry.

pub use ormbridge_core::{
    translate_column, translate_relationship, FactoryRegistry, IncludePolicy, SchemaRegistry,
    TranslateError, TranslateOptions, Translator,
};
pub use ormbridge_model::{
    AttributeDef, AttributeKind, ColumnDef, CompositeDef, DefaultSpec, Direction, ModelDef,
    RelationTarget, RelationshipDef, StorageType,
};
pub use ormbridge_schema::{
    AttrValue, AttributeSource, Factory, Field, FieldSpec, FieldType, FieldValue, Instance,
    ScalarType, Schema, SchemaConfig, SchemaError, Value,
};

/// Re-export the component crates.
pub use ormbridge_model as model;
pub use ormbridge_schema as schema;

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        AttrValue, AttributeSource, ColumnDef, DefaultSpec, Direction, FactoryRegistry, Field,
        FieldSpec, FieldType, FieldValue, IncludePolicy, Instance, ModelDef, RelationshipDef,
        ScalarType, Schema, SchemaConfig, SchemaError, SchemaRegistry, StorageType,
        TranslateError, TranslateOptions, Translator, Value,
    };
}
