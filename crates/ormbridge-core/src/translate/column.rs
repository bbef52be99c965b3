//! Column translation: one scalar column descriptor to a field definition.

use crate::error::TranslateError;
use crate::factory::FactoryRegistry;
use ormbridge_model::{ColumnDef, DefaultSpec};
use ormbridge_schema::{FieldSpec, FieldType};

/// Translate one scalar column into a (value type, field spec) pair.
///
/// The value type prefers the storage implementation wrapped by a type
/// decorator, then the storage type's own native value type; a column with
/// neither is an upstream modeling bug and fails hard. Requiredness is
/// derived strictly: no applicable default and not nullable.
pub fn translate_column(
    name: &str,
    column: &ColumnDef,
    factories: &FactoryRegistry,
) -> Result<(FieldType, FieldSpec), TranslateError> {
    let value_type = column
        .storage
        .impl_value_type()
        .or_else(|| column.storage.own_value_type())
        .ok_or_else(|| TranslateError::type_inference(name, &column.storage))?;

    let spec = match &column.default {
        None if !column.nullable => FieldSpec::required(),
        Some(DefaultSpec::Literal(value)) => FieldSpec::with_default(value.clone()),
        Some(DefaultSpec::Factory(path)) => FieldSpec::with_factory(factories.resolve(path)?),
        // server-side defaults materialize in the database, never here
        Some(DefaultSpec::Server(_)) if !column.nullable => FieldSpec::required(),
        Some(DefaultSpec::Server(_)) | None => FieldSpec::optional(),
    };

    Ok((FieldType::scalar(value_type), spec))
}
