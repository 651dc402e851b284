//! Driven port for durable car storage.
//!
//! Adapters translate driver failures into [`CarRepositoryError`] exactly
//! once. "No rows" is kept apart from other failures so the service can
//! answer not-found instead of an internal error.

use async_trait::async_trait;

use crate::domain::{Car, CarId, NewCar};

use super::define_port_error;

define_port_error! {
    /// Errors raised by car repository adapters.
    pub enum CarRepositoryError {
        /// No record matched the requested identifier.
        NoRows => "no car record matched the identifier",
        /// A connection could not be obtained or was lost.
        Connection { message: String } => "car repository connection failed: {message}",
        /// The statement failed during execution.
        Query { message: String } => "car repository query failed: {message}",
        /// A single-row write touched some other number of rows.
        UnexpectedRowCount { affected: usize } =>
            "expected to affect one car row, affected {affected}",
    }
}

impl CarRepositoryError {
    /// Whether the failure means the record does not exist.
    #[must_use]
    pub fn is_no_rows(&self) -> bool {
        matches!(self, Self::NoRows)
    }
}

/// CRUD access to car records keyed by numeric identifier.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CarRepository: Send + Sync {
    /// Insert a record and return the identifier assigned by the store.
    ///
    /// Timestamps on `car` are stored verbatim.
    async fn create(&self, car: &NewCar) -> Result<CarId, CarRepositoryError>;

    /// Load a single record, or [`CarRepositoryError::NoRows`] when absent.
    async fn get_by_id(&self, id: CarId) -> Result<Car, CarRepositoryError>;

    /// Load every record in the store's natural order.
    async fn fetch(&self) -> Result<Vec<Car>, CarRepositoryError>;

    /// Replace every mutable field and `updated_at` of the row with `car.id`.
    ///
    /// Fails with [`CarRepositoryError::UnexpectedRowCount`] unless exactly
    /// one row changed.
    async fn update(&self, car: &Car) -> Result<(), CarRepositoryError>;

    /// Remove the row with `id`, applying the same affected-row check as
    /// [`CarRepository::update`].
    async fn delete(&self, id: CarId) -> Result<(), CarRepositoryError>;
}
