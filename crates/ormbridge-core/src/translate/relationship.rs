//! Relationship translation: one relationship descriptor to a
//! forward-reference field definition.

use crate::error::TranslateError;
use crate::translate::IncludePolicy;
use ormbridge_model::{Direction, RelationshipDef};
use ormbridge_schema::{FieldSpec, FieldType};

/// Translate one relationship into a (value type, field spec) pair, or
/// nothing when its direction is disabled by the inclusion policy.
///
/// The target must be a single well-defined mapped model; the field type
/// is that model's name as a forward reference (the related schema may not
/// exist yet). Relationships are never required - the default is `Null`.
pub fn translate_relationship(
    name: &str,
    relationship: &RelationshipDef,
    policy: &IncludePolicy,
) -> Result<Option<(FieldType, FieldSpec)>, TranslateError> {
    let target = relationship
        .target_model()
        .ok_or_else(|| TranslateError::relationship(name, &relationship.target))?;

    let translated = match relationship.direction {
        Direction::ManyToOne if policy.many_to_one => {
            Some((FieldType::reference(target), FieldSpec::optional()))
        }
        Direction::OneToMany if policy.one_to_many => {
            Some((FieldType::reference_list(target), FieldSpec::optional()))
        }
        _ => None,
    };
    Ok(translated)
}
