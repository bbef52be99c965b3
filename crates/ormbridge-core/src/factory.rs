//! Factory registry for named default factories.
//!
//! Default factories are registered as first-class function values under
//! fully-qualified dotted names ("module.path.attr") and recovered by the
//! column translator when a column declares a factory default. The
//! registry is caller-owned; there is no process-global table.

use crate::error::TranslateError;
use ormbridge_schema::{Factory, Value};
use parking_lot::RwLock;
use std::collections::HashMap;

/// A caller-owned table of named default factories.
#[derive(Default)]
pub struct FactoryRegistry {
    entries: RwLock<HashMap<String, Factory>>,
}

impl FactoryRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a factory under a dotted path, overwriting any previous
    /// entry of the same path.
    pub fn register(
        &self,
        path: impl Into<String>,
        func: impl Fn() -> Value + Send + Sync + 'static,
    ) {
        let path = path.into();
        let factory = Factory::new(path.clone(), func);
        self.entries.write().insert(path, factory);
    }

    /// Resolve a dotted path to its registered factory.
    ///
    /// The path is split at the last separator into (namespace,
    /// attribute). Resolution fails when the namespace has no registered
    /// entries or the attribute is absent from it. No caching; looked up
    /// per call.
    pub fn resolve(&self, path: &str) -> Result<Factory, TranslateError> {
        let entries = self.entries.read();
        if let Some(factory) = entries.get(path) {
            return Ok(factory.clone());
        }

        let Some((namespace, attribute)) = path.rsplit_once('.') else {
            return Err(TranslateError::resolution(
                path,
                "path has no namespace segment",
            ));
        };
        let prefix = format!("{namespace}.");
        if entries.keys().any(|key| key.starts_with(&prefix)) {
            Err(TranslateError::resolution(
                path,
                format!("no entry '{attribute}' in namespace '{namespace}'"),
            ))
        } else {
            Err(TranslateError::resolution(
                path,
                format!("unknown namespace '{namespace}'"),
            ))
        }
    }

    /// Check if a path is registered.
    pub fn contains(&self, path: &str) -> bool {
        self.entries.read().contains_key(path)
    }

    /// Number of registered factories.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_and_resolve() {
        let registry = FactoryRegistry::new();
        registry.register("demo.defaults.house_number", || Value::from("1"));

        let factory = registry.resolve("demo.defaults.house_number").unwrap();
        assert_eq!(factory.name(), "demo.defaults.house_number");
        assert_eq!(factory.invoke(), Value::String("1".into()));
    }

    #[test]
    fn test_reregistration_overwrites() {
        let registry = FactoryRegistry::new();
        registry.register("demo.value", || Value::Int32(1));
        registry.register("demo.value", || Value::Int32(2));

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.resolve("demo.value").unwrap().invoke(), Value::Int32(2));
    }

    #[test]
    fn test_missing_attribute_in_known_namespace() {
        let registry = FactoryRegistry::new();
        registry.register("demo.defaults.house_number", || Value::from("1"));

        let err = registry.resolve("demo.defaults.missing").unwrap_err();
        assert_eq!(
            err,
            TranslateError::resolution(
                "demo.defaults.missing",
                "no entry 'missing' in namespace 'demo.defaults'",
            )
        );
    }

    #[test]
    fn test_unknown_namespace() {
        let registry = FactoryRegistry::new();
        let err = registry.resolve("nowhere.at_all").unwrap_err();
        assert!(matches!(err, TranslateError::Resolution { .. }));
        assert!(err.to_string().contains("unknown namespace 'nowhere'"));
    }

    #[test]
    fn test_path_without_namespace() {
        let registry = FactoryRegistry::new();
        let err = registry.resolve("bare").unwrap_err();
        assert!(err.to_string().contains("no namespace segment"));
    }
}
