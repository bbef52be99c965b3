//! Relationship descriptors between models.

use serde::{Deserialize, Serialize};

/// Cardinality direction of a relationship attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    /// This model holds one reference to another.
    ManyToOne,
    /// This model holds a sequence of references from another.
    OneToMany,
}

/// The target of a relationship.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RelationTarget {
    /// A single well-defined mapped model.
    Model(String),
    /// An ambiguous target spanning several mapped models (polymorphic
    /// joins). Not translatable.
    Polymorphic(Vec<String>),
}

/// A relationship attribute descriptor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelationshipDef {
    /// The related model.
    pub target: RelationTarget,
    /// Cardinality direction.
    pub direction: Direction,
    /// Back-reference attribute name on the target. Not used by
    /// translation.
    pub backref: Option<String>,
}

impl RelationshipDef {
    /// Create a many-to-one relationship to a mapped model.
    pub fn many_to_one(target: impl Into<String>) -> Self {
        Self {
            target: RelationTarget::Model(target.into()),
            direction: Direction::ManyToOne,
            backref: None,
        }
    }

    /// Create a one-to-many relationship to a mapped model.
    pub fn one_to_many(target: impl Into<String>) -> Self {
        Self {
            target: RelationTarget::Model(target.into()),
            direction: Direction::OneToMany,
            backref: None,
        }
    }

    /// Create a relationship with a polymorphic target.
    pub fn polymorphic(direction: Direction, targets: Vec<String>) -> Self {
        Self {
            target: RelationTarget::Polymorphic(targets),
            direction,
            backref: None,
        }
    }

    /// Set the back-reference attribute name.
    pub fn with_backref(mut self, name: impl Into<String>) -> Self {
        self.backref = Some(name.into());
        self
    }

    /// The single mapped target model, if this relationship has one.
    pub fn target_model(&self) -> Option<&str> {
        match &self.target {
            RelationTarget::Model(name) => Some(name),
            RelationTarget::Polymorphic(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_many_to_one() {
        let rel = RelationshipDef::many_to_one("StateProvince").with_backref("cities");
        assert_eq!(rel.direction, Direction::ManyToOne);
        assert_eq!(rel.target_model(), Some("StateProvince"));
        assert_eq!(rel.backref.as_deref(), Some("cities"));
    }

    #[test]
    fn test_polymorphic_has_no_single_target() {
        let rel = RelationshipDef::polymorphic(
            Direction::ManyToOne,
            vec!["Person".into(), "Company".into()],
        );
        assert_eq!(rel.target_model(), None);
    }
}
