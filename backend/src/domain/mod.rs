//! Domain types, ports and services.
//!
//! Purpose: hold the car aggregate, its validation rules and the use-case
//! service, independent of HTTP, PostgreSQL and Redis. Adapters depend on
//! this module; it depends on none of them.
//!
//! Public surface:
//! - Car, CarDetails, CarId, NewCar: the aggregate and its writable fields.
//! - validate_car_details: required-field check for write requests.
//! - CarService: implements the `CarCommand` and `CarQuery` driving ports.
//! - Error, ErrorCode: transport-agnostic use-case error payload.
//! - TraceId: request-scoped correlation identifier.

pub mod car;
mod car_service;
pub mod error;
pub mod ports;
mod trace_id;

pub use self::car::{
    Car, CarDetails, CarId, CarValidationError, FieldViolation, NewCar, validate_car_details,
};
pub use self::car_service::{CarService, CarServiceSettings};
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};

/// Convenient use-case result alias.
///
/// # Examples
/// ```
/// use car_api::domain::{ApiResult, Car, CarId, Error};
///
/// fn lookup(_id: CarId) -> ApiResult<Car> {
///     Err(Error::not_found("car not found"))
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;
