// 🧑 Person Entity - Shared default country
//
// Instance attributes name and age feed the greeting; the default
// country is a scalar shared by every Person and read by the
// type-level info query.

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

use crate::shared::SharedValue;

use super::{ConstructResult, InvalidAttribute};

lazy_static! {
    /// Default country shared by every Person
    static ref DEFAULT_COUNTRY: SharedValue<String> =
        SharedValue::new(Person::DEFAULT_COUNTRY.to_string());
}

// ============================================================================
// PERSON ENTITY
// ============================================================================

/// A person with a name and an age.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    /// Name (required, non-blank)
    pub name: String,

    /// Age in years
    pub age: u32,
}

impl Person {
    /// Type-level default country
    pub const DEFAULT_COUNTRY: &'static str = "Unknown";

    /// Create a new person.
    ///
    /// `name` is required and must be non-blank; there is no default.
    pub fn new(name: &str, age: u32) -> ConstructResult<Person> {
        if name.trim().is_empty() {
            return Err(InvalidAttribute::missing("Person", "name"));
        }

        Ok(Person {
            name: name.to_string(),
            age,
        })
    }

    /// Instance query: greeting built from this person's attributes
    ///
    /// Example: `Hello, my name is Alice and I am 30 years old.`
    pub fn greet(&self) -> String {
        format!(
            "Hello, my name is {} and I am {} years old.",
            self.name, self.age
        )
    }

    /// Type-level query: message built from the shared default country
    pub fn general_info() -> String {
        format!(
            "All persons are from {} by default.",
            DEFAULT_COUNTRY.get()
        )
    }

    /// Type-level mutator: change the default country for every Person
    pub fn set_default_country(country: &str) {
        DEFAULT_COUNTRY.set(country.to_string());
    }

    /// Utility: birth year from explicit age and current year,
    /// independent of instance and shared state
    pub fn calculate_birth_year(age: u32, current_year: i32) -> i32 {
        current_year - age as i32
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_person_greet_format() {
        let alice = Person::new("Alice", 30).unwrap();
        assert_eq!(
            alice.greet(),
            "Hello, my name is Alice and I am 30 years old."
        );

        let bob = Person::new("Bob", 25).unwrap();
        assert_eq!(bob.greet(), "Hello, my name is Bob and I am 25 years old.");

        // Instance queries are pure
        assert_eq!(alice.greet(), alice.greet());
    }

    #[test]
    fn test_person_blank_name_rejected() {
        let err = Person::new("", 30).unwrap_err();
        assert_eq!(err, InvalidAttribute::missing("Person", "name"));

        assert!(Person::new("  ", 30).is_err());
    }

    // The only test that touches the shared default country.
    #[test]
    fn test_person_shared_default_country_mutation() {
        assert_eq!(
            Person::general_info(),
            "All persons are from Unknown by default."
        );

        Person::set_default_country("Iceland");
        assert_eq!(
            Person::general_info(),
            "All persons are from Iceland by default."
        );

        Person::set_default_country(Person::DEFAULT_COUNTRY);
        assert_eq!(
            Person::general_info(),
            "All persons are from Unknown by default."
        );
    }

    #[test]
    fn test_person_calculate_birth_year_is_pure() {
        assert_eq!(Person::calculate_birth_year(30, 2025), 1995);
        assert_eq!(Person::calculate_birth_year(25, 2025), 2000);
        assert_eq!(Person::calculate_birth_year(30, 2023), 1993);
        assert_eq!(Person::calculate_birth_year(0, 2025), 2025);
    }
}
