// Entity Catalog - Four concrete entity types
//
// Each entity is built from the same three pieces:
// - Instance attributes: fixed at construction, unique per instance
// - Shared attribute(s): one value per type (scalar default or registry)
// - Behavior set: instance queries, type-level queries/mutators, and
//   pure utility functions namespaced on the type

pub mod book;
pub mod person;
pub mod record;
pub mod rectangle;

pub use book::Book;
pub use person::Person;
pub use record::Record;
pub use rectangle::Rectangle;

// ============================================================================
// CONSTRUCTION ERROR
// ============================================================================

/// The single error kind construction can produce: a required instance
/// attribute was missing (blank) with no declared default, or supplied
/// with an unusable value.
///
/// Reported synchronously to the caller of construction; nothing is
/// registered when construction fails.
#[derive(Debug, Clone, PartialEq)]
pub struct InvalidAttribute {
    pub entity: &'static str,
    pub attribute: &'static str,
    pub message: String,
}

impl InvalidAttribute {
    /// Required attribute absent with no default
    pub fn missing(entity: &'static str, attribute: &'static str) -> Self {
        InvalidAttribute {
            entity,
            attribute,
            message: "required attribute is missing and has no default".to_string(),
        }
    }

    /// Attribute present but unusable
    pub fn invalid(
        entity: &'static str,
        attribute: &'static str,
        message: impl Into<String>,
    ) -> Self {
        InvalidAttribute {
            entity,
            attribute,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for InvalidAttribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}: {}", self.entity, self.attribute, self.message)
    }
}

impl std::error::Error for InvalidAttribute {}

pub type ConstructResult<T> = Result<T, InvalidAttribute>;

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_attribute_display() {
        let err = InvalidAttribute::missing("Book", "title");
        assert_eq!(
            err.to_string(),
            "[Book] title: required attribute is missing and has no default"
        );

        let err = InvalidAttribute::invalid("Rectangle", "length", "must be positive");
        assert_eq!(err.to_string(), "[Rectangle] length: must be positive");
    }

    #[test]
    fn test_invalid_attribute_is_std_error() {
        fn takes_error(_: &dyn std::error::Error) {}
        let err = InvalidAttribute::missing("Person", "name");
        takes_error(&err);
    }
}
