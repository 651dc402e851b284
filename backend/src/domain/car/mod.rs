//! Car aggregate and its writable field set.
//!
//! A [`Car`] is identified by a store-assigned [`CarId`]. Callers supply the
//! writable [`CarDetails`]; timestamps are stamped by the service. Create and
//! update requests share the same shape, so both decode into `CarDetails`
//! and run through [`validate_car_details`] before reaching the service.

mod validation;

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub use validation::{CarValidationError, FieldViolation, validate_car_details};

/// Store-assigned identifier of a car record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CarId(i64);

impl CarId {
    /// Wrap a raw identifier.
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Raw identifier value as stored.
    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }
}

impl fmt::Display for CarId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for CarId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

/// Writable car attributes shared by create and update requests.
///
/// Every field is required on write; an empty string or a zero integer
/// counts as missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarDetails {
    pub make: String,
    pub model: String,
    pub package: String,
    pub color: String,
    pub year: i64,
    pub category: String,
    pub mileage: i64,
    pub price: i64,
    pub identification: String,
}

/// A car ready for insertion; the store assigns its identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCar {
    pub details: CarDetails,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl NewCar {
    /// Stamp `details` with a single creation instant used for both
    /// timestamps.
    #[must_use]
    pub fn stamped(details: CarDetails, now: DateTime<Utc>) -> Self {
        Self {
            details,
            created_at: now,
            updated_at: now,
        }
    }

    /// Attach the store-assigned identifier.
    #[must_use]
    pub fn into_car(self, id: CarId) -> Car {
        Car {
            id,
            details: self.details,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// A persisted car record.
///
/// Serialises flat, matching the JSON snapshot stored in the list cache:
/// `id`, the detail fields, then `created_at` and `updated_at` as RFC 3339.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Car {
    pub id: CarId,
    #[serde(flatten)]
    pub details: CarDetails,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Car {
    /// Replace every writable field and advance `updated_at`.
    ///
    /// This is a full replace: no field of the previous details survives.
    /// The stored `updated_at` never moves backwards, even if `now` trails it
    /// because of clock skew between service instances.
    pub fn replace_details(&mut self, details: CarDetails, now: DateTime<Utc>) {
        self.details = details;
        self.updated_at = now.max(self.updated_at);
    }
}
