//! Field definitions for schema types.

use crate::schema::Schema;
use crate::value::{ScalarType, Value};
use serde::{Serialize, Serializer};
use std::fmt;
use std::sync::{Arc, OnceLock};

/// A named, zero-argument default factory.
///
/// Invoked fresh for every built instance - results are never memoized.
/// The name is the fully-qualified dotted path the factory was registered
/// under; it is what gets serialized when describing a schema.
#[derive(Clone)]
pub struct Factory {
    name: String,
    func: Arc<dyn Fn() -> Value + Send + Sync>,
}

impl Factory {
    /// Create a factory from a name and a closure.
    pub fn new(name: impl Into<String>, func: impl Fn() -> Value + Send + Sync + 'static) -> Self {
        Self {
            name: name.into(),
            func: Arc::new(func),
        }
    }

    /// The dotted path this factory is known by.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Produce a fresh value.
    pub fn invoke(&self) -> Value {
        (self.func)()
    }
}

impl fmt::Debug for Factory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Factory").field(&self.name).finish()
    }
}

impl PartialEq for Factory {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Serialize for Factory {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.name)
    }
}

/// The value type of a schema field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum FieldType {
    /// A scalar value.
    Scalar(ScalarType),
    /// A forward reference to another schema by name.
    Ref(String),
    /// A sequence of forward references to another schema by name.
    RefList(String),
}

impl FieldType {
    /// Create a scalar field type.
    pub fn scalar(scalar: ScalarType) -> Self {
        FieldType::Scalar(scalar)
    }

    /// Create a forward reference to another schema.
    pub fn reference(name: impl Into<String>) -> Self {
        FieldType::Ref(name.into())
    }

    /// Create a sequence-of-forward-reference type.
    pub fn reference_list(name: impl Into<String>) -> Self {
        FieldType::RefList(name.into())
    }

    /// Check if this type refers to another schema.
    pub fn is_reference(&self) -> bool {
        matches!(self, FieldType::Ref(_) | FieldType::RefList(_))
    }

    /// Get the referenced schema name, if any.
    pub fn target_name(&self) -> Option<&str> {
        match self {
            FieldType::Ref(name) | FieldType::RefList(name) => Some(name),
            FieldType::Scalar(_) => None,
        }
    }

    /// Get the inner scalar type if this is a scalar field.
    pub fn scalar_type(&self) -> Option<&ScalarType> {
        match self {
            FieldType::Scalar(s) => Some(s),
            _ => None,
        }
    }
}

/// Field descriptor: required flag plus default policy.
///
/// Exactly one construction mode holds: required (no default of any kind),
/// literal default, factory default, or optional with default `Null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldSpec {
    /// Whether the field must be supplied when building an instance.
    pub required: bool,
    /// Default value if not provided.
    pub default: Option<Value>,
    /// Default factory, invoked fresh per instance.
    pub default_factory: Option<Factory>,
}

impl FieldSpec {
    /// A required field: no default at all.
    pub fn required() -> Self {
        Self {
            required: true,
            default: None,
            default_factory: None,
        }
    }

    /// An optional field defaulting to `Null`.
    pub fn optional() -> Self {
        Self {
            required: false,
            default: Some(Value::Null),
            default_factory: None,
        }
    }

    /// An optional field with a literal default, carried verbatim.
    pub fn with_default(value: impl Into<Value>) -> Self {
        Self {
            required: false,
            default: Some(value.into()),
            default_factory: None,
        }
    }

    /// An optional field with a default factory.
    pub fn with_factory(factory: Factory) -> Self {
        Self {
            required: false,
            default: None,
            default_factory: Some(factory),
        }
    }

    /// Check if this field has any default (literal or factory).
    pub fn has_default(&self) -> bool {
        self.default.is_some() || self.default_factory.is_some()
    }

    /// Produce the default for one instance.
    ///
    /// The factory takes precedence and is invoked fresh on every call.
    pub fn produce_default(&self) -> Option<Value> {
        if let Some(factory) = &self.default_factory {
            return Some(factory.invoke());
        }
        self.default.clone()
    }
}

/// A field within a schema: name, type, spec, and the resolved target
/// schema once a reference has been linked.
#[derive(Debug, Clone, Serialize)]
pub struct Field {
    /// Field name.
    pub name: String,
    /// Field value type.
    pub ty: FieldType,
    /// Field descriptor.
    pub spec: FieldSpec,
    /// Resolved target for `Ref`/`RefList` fields. Set at most once.
    #[serde(skip)]
    resolved: OnceLock<Arc<Schema>>,
}

impl Field {
    /// Create a new field.
    pub fn new(name: impl Into<String>, ty: FieldType, spec: FieldSpec) -> Self {
        Self {
            name: name.into(),
            ty,
            spec,
            resolved: OnceLock::new(),
        }
    }

    /// The referenced schema name, if this field is a reference.
    pub fn target_name(&self) -> Option<&str> {
        self.ty.target_name()
    }

    /// Check if this field is a still-unresolved reference.
    pub fn is_pending(&self) -> bool {
        self.ty.is_reference() && self.resolved.get().is_none()
    }

    /// The resolved target schema, if resolution has happened.
    pub fn resolved_target(&self) -> Option<&Arc<Schema>> {
        self.resolved.get()
    }

    /// Link this reference field to its target schema.
    ///
    /// Returns `false` if the field was already resolved (first link wins)
    /// or is not a reference at all.
    pub fn resolve(&self, target: Arc<Schema>) -> bool {
        if !self.ty.is_reference() {
            return false;
        }
        self.resolved.set(target).is_ok()
    }
}
