//! ormbridge-core - Model-translation engine.
//!
//! Translates reflected ORM model metadata into validation schema
//! definitions: column and relationship translators, the model
//! orchestrator, and the caller-owned schema/factory registries.

pub mod error;
pub mod factory;
pub mod registry;
pub mod translate;

pub use error::TranslateError;
pub use factory::FactoryRegistry;
pub use registry::SchemaRegistry;
pub use translate::{
    translate_column, translate_relationship, IncludePolicy, TranslateOptions, Translator,
};
