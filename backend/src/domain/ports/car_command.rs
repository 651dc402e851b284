//! Driving port for car write use-cases.
//!
//! Inbound adapters call this port after request validation. Implementations
//! stamp timestamps, translate missing records to not-found and bound every
//! call with the configured timeout.

use async_trait::async_trait;

use crate::domain::{Car, CarDetails, CarId, Error};

/// Create, replace and remove cars.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CarCommand: Send + Sync {
    /// Persist a new car and return the stored record.
    async fn create(&self, details: CarDetails) -> Result<Car, Error>;

    /// Replace every writable field of an existing car.
    async fn update(&self, id: CarId, details: CarDetails) -> Result<Car, Error>;

    /// Permanently remove a car.
    async fn delete(&self, id: CarId) -> Result<(), Error>;
}
