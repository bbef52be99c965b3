//! ormbridge-schema - Validation schema runtime.
//!
//! Value types, field definitions, schema types with forward-reference
//! resolution, and instance construction from attribute-bearing sources.

pub mod error;
pub mod field;
pub mod instance;
pub mod schema;
pub mod value;

pub use error::SchemaError;
pub use field::{Factory, Field, FieldSpec, FieldType};
pub use instance::{AttrValue, AttributeSource, FieldValue, Instance};
pub use schema::{Schema, SchemaConfig};
pub use value::{ScalarType, Value};
