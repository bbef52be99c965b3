//! Scalar column descriptors.

use ormbridge_schema::{ScalarType, Value};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Storage types a column can be declared with.
///
/// `Decorated` models a type decorator wrapping a storage implementation;
/// `Opaque` a vendor type with no derivable value type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum StorageType {
    /// Boolean column.
    Boolean,
    /// 16-bit integer column.
    SmallInt,
    /// 32-bit integer column.
    Integer,
    /// 64-bit integer column.
    BigInt,
    /// 32-bit floating point column.
    Float,
    /// 64-bit floating point column.
    Double,
    /// Fixed-precision decimal column.
    Decimal {
        /// Total number of digits.
        precision: u8,
        /// Number of digits after the decimal point.
        scale: u8,
    },
    /// Variable-length string column.
    Text {
        /// Maximum length, if bounded.
        length: Option<u32>,
    },
    /// Variable-length unicode string column.
    Unicode {
        /// Maximum length, if bounded.
        length: Option<u32>,
    },
    /// Binary data column.
    Bytes,
    /// Timestamp column.
    Timestamp {
        /// Whether the column is timezone-aware.
        timezone: bool,
    },
    /// UUID column.
    Uuid,
    /// A type decorator wrapping a storage implementation.
    Decorated {
        /// Decorator name.
        name: String,
        /// The wrapped storage implementation, if declared.
        impl_type: Option<Box<StorageType>>,
    },
    /// A vendor type with no derivable value type.
    Opaque {
        /// Type name as reported by the ORM.
        name: String,
    },
}

impl StorageType {
    /// Create a bounded string type.
    pub fn text(length: u32) -> Self {
        StorageType::Text {
            length: Some(length),
        }
    }

    /// Create a bounded unicode string type.
    pub fn unicode(length: u32) -> Self {
        StorageType::Unicode {
            length: Some(length),
        }
    }

    /// Create a type decorator around a storage implementation.
    pub fn decorated(name: impl Into<String>, impl_type: StorageType) -> Self {
        StorageType::Decorated {
            name: name.into(),
            impl_type: Some(Box::new(impl_type)),
        }
    }

    /// Create an opaque vendor type.
    pub fn opaque(name: impl Into<String>) -> Self {
        StorageType::Opaque { name: name.into() }
    }

    /// The value type of the wrapped storage implementation, when this
    /// type decorates one.
    pub fn impl_value_type(&self) -> Option<ScalarType> {
        match self {
            StorageType::Decorated {
                impl_type: Some(inner),
                ..
            } => inner.impl_value_type().or_else(|| inner.own_value_type()),
            _ => None,
        }
    }

    /// This storage type's own native value type.
    ///
    /// Decorators and opaque types have none of their own.
    pub fn own_value_type(&self) -> Option<ScalarType> {
        match self {
            StorageType::Boolean => Some(ScalarType::Bool),
            StorageType::SmallInt | StorageType::Integer => Some(ScalarType::Int32),
            StorageType::BigInt => Some(ScalarType::Int64),
            StorageType::Float => Some(ScalarType::Float32),
            StorageType::Double => Some(ScalarType::Float64),
            StorageType::Decimal { .. } => Some(ScalarType::Float64),
            StorageType::Text { .. } | StorageType::Unicode { .. } => Some(ScalarType::String),
            StorageType::Bytes => Some(ScalarType::Bytes),
            StorageType::Timestamp { .. } => Some(ScalarType::Timestamp),
            StorageType::Uuid => Some(ScalarType::Uuid),
            StorageType::Decorated { .. } | StorageType::Opaque { .. } => None,
        }
    }
}

impl fmt::Display for StorageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageType::Boolean => write!(f, "Boolean"),
            StorageType::SmallInt => write!(f, "SmallInt"),
            StorageType::Integer => write!(f, "Integer"),
            StorageType::BigInt => write!(f, "BigInt"),
            StorageType::Float => write!(f, "Float"),
            StorageType::Double => write!(f, "Double"),
            StorageType::Decimal { precision, scale } => {
                write!(f, "Decimal({precision}, {scale})")
            }
            StorageType::Text { length: Some(n) } => write!(f, "Text({n})"),
            StorageType::Text { length: None } => write!(f, "Text"),
            StorageType::Unicode { length: Some(n) } => write!(f, "Unicode({n})"),
            StorageType::Unicode { length: None } => write!(f, "Unicode"),
            StorageType::Bytes => write!(f, "Bytes"),
            StorageType::Timestamp { timezone: true } => write!(f, "Timestamp(tz)"),
            StorageType::Timestamp { timezone: false } => write!(f, "Timestamp"),
            StorageType::Uuid => write!(f, "Uuid"),
            StorageType::Decorated { name, .. } => write!(f, "Decorated({name})"),
            StorageType::Opaque { name } => write!(f, "Opaque({name})"),
        }
    }
}

/// Default specification for a column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DefaultSpec {
    /// An application-side literal, applied when the column is omitted.
    Literal(Value),
    /// A named application-side factory (dotted path into the factory
    /// registry), invoked per insert.
    Factory(String),
    /// A database-side default expression, produced by the database and
    /// opaque to the application.
    Server(String),
}

/// A scalar column descriptor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnDef {
    /// Storage type.
    pub storage: StorageType,
    /// Whether the column accepts NULL.
    pub nullable: bool,
    /// Default specification, if declared.
    pub default: Option<DefaultSpec>,
    /// Whether this column is (part of) the primary key. Not used by
    /// translation.
    pub primary_key: bool,
    /// Whether this column carries a uniqueness constraint. Not used by
    /// translation.
    pub unique: bool,
    /// Whether this column is indexed. Not used by translation.
    pub indexed: bool,
}

impl ColumnDef {
    /// Create a nullable column with no default.
    pub fn new(storage: StorageType) -> Self {
        Self {
            storage,
            nullable: true,
            default: None,
            primary_key: false,
            unique: false,
            indexed: false,
        }
    }

    /// Declare the column NOT NULL.
    pub fn not_null(mut self) -> Self {
        self.nullable = false;
        self
    }

    /// Set an application-side literal default.
    pub fn with_default(mut self, value: impl Into<Value>) -> Self {
        self.default = Some(DefaultSpec::Literal(value.into()));
        self
    }

    /// Set a named application-side default factory.
    pub fn with_factory(mut self, path: impl Into<String>) -> Self {
        self.default = Some(DefaultSpec::Factory(path.into()));
        self
    }

    /// Set a database-side default expression.
    pub fn with_server_default(mut self, expr: impl Into<String>) -> Self {
        self.default = Some(DefaultSpec::Server(expr.into()));
        self
    }

    /// Mark as primary key (implies NOT NULL).
    pub fn primary_key(mut self) -> Self {
        self.primary_key = true;
        self.nullable = false;
        self
    }

    /// Mark as unique.
    pub fn unique(mut self) -> Self {
        self.unique = true;
        self
    }

    /// Mark as indexed.
    pub fn with_index(mut self) -> Self {
        self.indexed = true;
        self
    }

    /// Check if this column declares any default.
    pub fn has_default(&self) -> bool {
        self.default.is_some()
    }
}
