// 📐 Rectangle Entity - Shared measurement unit
//
// Demonstrates the type-level mutator: `change_unit` overwrites the
// unit for every rectangle, including instances constructed before the
// call. Dimensions are instance attributes fixed at construction.

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

use crate::shared::SharedValue;

use super::{ConstructResult, InvalidAttribute};

lazy_static! {
    /// Measurement unit shared by every Rectangle
    static ref UNIT: SharedValue<String> = SharedValue::new(Rectangle::DEFAULT_UNIT.to_string());
}

// ============================================================================
// RECTANGLE ENTITY
// ============================================================================

/// A rectangle measured in the type-wide shared unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    /// Length (required, finite, positive)
    pub length: f64,

    /// Width (required, finite, positive)
    pub width: f64,
}

impl Rectangle {
    /// Default measurement unit for the type
    pub const DEFAULT_UNIT: &'static str = "cm";

    /// Create a new rectangle.
    ///
    /// Both dimensions are required and must be finite and positive;
    /// there is no default to fall back to.
    pub fn new(length: f64, width: f64) -> ConstructResult<Rectangle> {
        if !length.is_finite() || length <= 0.0 {
            return Err(InvalidAttribute::invalid(
                "Rectangle",
                "length",
                "must be a finite positive number",
            ));
        }
        if !width.is_finite() || width <= 0.0 {
            return Err(InvalidAttribute::invalid(
                "Rectangle",
                "width",
                "must be a finite positive number",
            ));
        }

        Ok(Rectangle { length, width })
    }

    /// Instance query: area in the shared unit
    pub fn area(&self) -> f64 {
        self.length * self.width
    }

    /// Type-level query: the measurement unit currently shared by all
    /// rectangles
    pub fn unit() -> String {
        UNIT.get()
    }

    /// Type-level mutator: change the measurement unit for every
    /// rectangle, existing and future
    pub fn change_unit(new_unit: &str) {
        UNIT.set(new_unit.to_string());
    }

    /// Utility: perimeter from explicit dimensions, independent of any
    /// instance and of the shared unit
    pub fn perimeter(length: f64, width: f64) -> f64 {
        2.0 * (length + width)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rectangle_area() {
        let rect = Rectangle::new(5.0, 3.0).unwrap();
        assert_eq!(rect.area(), 15.0);

        // Instance queries are pure
        assert_eq!(rect.area(), rect.area());
    }

    #[test]
    fn test_rectangle_invalid_dimensions_rejected() {
        let err = Rectangle::new(0.0, 3.0).unwrap_err();
        assert_eq!(err.entity, "Rectangle");
        assert_eq!(err.attribute, "length");

        let err = Rectangle::new(5.0, -1.0).unwrap_err();
        assert_eq!(err.attribute, "width");

        assert!(Rectangle::new(f64::NAN, 3.0).is_err());
        assert!(Rectangle::new(5.0, f64::INFINITY).is_err());
    }

    // The only test that touches the shared unit: reads the default,
    // mutates, verifies visibility for an instance constructed before
    // the mutation, and restores the default.
    #[test]
    fn test_rectangle_shared_unit_mutation() {
        assert_eq!(Rectangle::unit(), "cm");

        let constructed_before = Rectangle::new(5.0, 3.0).unwrap();

        Rectangle::change_unit("inches");
        assert_eq!(Rectangle::unit(), "inches");

        // The pre-existing instance sees the new unit - there is no
        // per-instance shadow copy
        assert_eq!(
            format!("{} {}", constructed_before.area(), Rectangle::unit()),
            "15 inches"
        );

        let constructed_after = Rectangle::new(2.0, 2.0).unwrap();
        assert_eq!(
            format!("{} {}", constructed_after.area(), Rectangle::unit()),
            "4 inches"
        );

        Rectangle::change_unit(Rectangle::DEFAULT_UNIT);
        assert_eq!(Rectangle::unit(), "cm");
    }

    #[test]
    fn test_rectangle_perimeter_is_pure() {
        assert_eq!(Rectangle::perimeter(5.0, 3.0), 16.0);
        assert_eq!(Rectangle::perimeter(1.0, 1.0), 4.0);
        assert_eq!(Rectangle::perimeter(2.5, 0.5), 6.0);
    }
}
