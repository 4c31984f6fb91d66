// 🗂️ Record Entity - The minimal shared/instance contrast
//
// The simplest entity in the catalog:
// - One shared scalar (class_value, default 42) common to every Record
// - One instance attribute (age) fixed at construction
// - One operation from each behavior category

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

use crate::shared::SharedValue;

lazy_static! {
    /// Shared scalar for the Record type as a whole
    static ref CLASS_VALUE: SharedValue<i64> = SharedValue::new(Record::DEFAULT_CLASS_VALUE);
}

// ============================================================================
// RECORD ENTITY
// ============================================================================

/// A generic record holding a single instance attribute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Instance attribute - unique per Record, fixed at construction
    pub age: i64,
}

impl Record {
    /// Type-level default for the shared scalar
    pub const DEFAULT_CLASS_VALUE: i64 = 42;

    /// Create a new record
    ///
    /// Every attribute is supplied by value, so construction cannot fail.
    pub fn new(age: i64) -> Self {
        Record { age }
    }

    /// Instance query: read this record's own age
    pub fn age(&self) -> i64 {
        self.age
    }

    /// Type-level query: read the shared scalar
    pub fn class_age() -> i64 {
        CLASS_VALUE.get()
    }

    /// Type-level mutator: overwrite the shared scalar for every Record,
    /// existing and future
    pub fn set_class_value(new_value: i64) {
        CLASS_VALUE.set(new_value);
    }

    /// Utility: plain addition, independent of instance and shared state
    pub fn sum_num(a: i64, b: i64) -> i64 {
        a + b
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_instance_query() {
        let record = Record::new(18);
        assert_eq!(record.age(), 18);

        // Instance queries are pure - repeated calls agree
        assert_eq!(record.age(), record.age());
    }

    #[test]
    fn test_record_instances_are_independent() {
        let a = Record::new(18);
        let b = Record::new(25);

        assert_eq!(a.age(), 18);
        assert_eq!(b.age(), 25);
    }

    // The only test that touches the shared scalar: reads the default,
    // mutates, verifies visibility, restores. Keeping it in one function
    // avoids interference under the parallel test harness.
    #[test]
    fn test_record_shared_scalar_default_and_mutation() {
        assert_eq!(Record::class_age(), 42);

        let constructed_before = Record::new(7);

        Record::set_class_value(99);
        // The shared scalar changed for everyone; instance attributes did not
        assert_eq!(Record::class_age(), 99);
        assert_eq!(constructed_before.age(), 7);

        Record::set_class_value(Record::DEFAULT_CLASS_VALUE);
        assert_eq!(Record::class_age(), 42);
    }

    #[test]
    fn test_record_sum_num_is_pure() {
        assert_eq!(Record::sum_num(10, 20), 30);
        assert_eq!(Record::sum_num(3, 4), 7);
        assert_eq!(Record::sum_num(-5, 5), 0);
    }
}
