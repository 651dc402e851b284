//! Required-field validation for car write requests.

use std::fmt;

use serde_json::{Map, Value, json};

use super::CarDetails;
use crate::domain::Error;

const BLANK: &str = "cannot be blank";

/// A single violated field and the reason it was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldViolation {
    field: &'static str,
    message: &'static str,
}

impl FieldViolation {
    const fn blank(field: &'static str) -> Self {
        Self {
            field,
            message: BLANK,
        }
    }

    /// Wire name of the offending field.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        self.field
    }

    /// Human-readable reason.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        self.message
    }
}

/// Every field violation found in one request, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub struct CarValidationError {
    violations: Vec<FieldViolation>,
}

impl CarValidationError {
    /// Violations in field declaration order.
    #[must_use]
    pub fn violations(&self) -> &[FieldViolation] {
        &self.violations
    }

    /// Whether `field` is among the violations.
    #[must_use]
    pub fn contains_field(&self, field: &str) -> bool {
        self.violations.iter().any(|v| v.field == field)
    }
}

impl fmt::Display for CarValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for violation in &self.violations {
            if !first {
                f.write_str("; ")?;
            }
            first = false;
            write!(f, "{}: {}", violation.field, violation.message)?;
        }
        Ok(())
    }
}

impl From<CarValidationError> for Error {
    fn from(value: CarValidationError) -> Self {
        let fields: Map<String, Value> = value
            .violations
            .iter()
            .map(|v| (v.field.to_owned(), Value::from(v.message)))
            .collect();
        Self::invalid_request("invalid input").with_details(json!({ "fields": fields }))
    }
}

/// Check that every writable field is present.
///
/// Strings must be non-empty (whitespace counts as present) and integers
/// must be non-zero (negative values count as present).
///
/// # Errors
/// Returns [`CarValidationError`] listing each missing field.
///
/// # Examples
/// ```
/// use car_api::domain::{CarDetails, validate_car_details};
///
/// let details = CarDetails { make: "Toyota".into(), ..CarDetails::default() };
/// let err = validate_car_details(&details).expect_err("mostly blank");
/// assert!(err.contains_field("year"));
/// assert!(!err.contains_field("make"));
/// ```
pub fn validate_car_details(details: &CarDetails) -> Result<(), CarValidationError> {
    let checks = [
        ("make", details.make.is_empty()),
        ("model", details.model.is_empty()),
        ("package", details.package.is_empty()),
        ("color", details.color.is_empty()),
        ("year", details.year == 0),
        ("category", details.category.is_empty()),
        ("mileage", details.mileage == 0),
        ("price", details.price == 0),
        ("identification", details.identification.is_empty()),
    ];

    let violations: Vec<FieldViolation> = checks
        .into_iter()
        .filter(|(_, missing)| *missing)
        .map(|(field, _)| FieldViolation::blank(field))
        .collect();

    if violations.is_empty() {
        Ok(())
    } else {
        Err(CarValidationError { violations })
    }
}
