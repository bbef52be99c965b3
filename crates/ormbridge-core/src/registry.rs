//! Schema registry for forward-reference resolution.

use ormbridge_schema::Schema;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// A caller-owned mapping from model name to its translated schema.
///
/// Consulted whenever a newly created schema contains references to other
/// schema names. Entries are never evicted; re-registration under the same
/// name overwrites. Translation is expected at startup - the interior lock
/// only makes sharing the registry across readers safe, it does not make
/// concurrent translation a supported mode.
#[derive(Default)]
pub struct SchemaRegistry {
    entries: RwLock<HashMap<String, Arc<Schema>>>,
}

impl SchemaRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a schema under its own name, overwriting any previous
    /// entry. Returns the displaced schema, if there was one.
    pub fn register(&self, schema: Arc<Schema>) -> Option<Arc<Schema>> {
        let name = schema.name.clone();
        let displaced = self.entries.write().insert(name.clone(), schema);
        debug!(schema = %name, displaced = displaced.is_some(), "registered schema");
        displaced
    }

    /// Get a schema by name.
    pub fn get(&self, name: &str) -> Option<Arc<Schema>> {
        self.entries.read().get(name).cloned()
    }

    /// Check if a name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.read().contains_key(name)
    }

    /// All registered names.
    pub fn names(&self) -> Vec<String> {
        self.entries.read().keys().cloned().collect()
    }

    /// Number of registered schemas.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Resolve a schema's pending forward references against current
    /// contents. Unknown names stay symbolic for a later pass. Returns how
    /// many fields were resolved this pass.
    pub fn resolve(&self, schema: &Schema) -> usize {
        schema.resolve_with(|name| self.get(name))
    }
}
