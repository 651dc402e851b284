//! Driving port for car read use-cases.
use async_trait::async_trait;

use crate::domain::{Car, CarId, Error};

/// Read access to cars.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CarQuery: Send + Sync {
    /// Fetch one car, failing with a not-found error when absent.
    async fn get_by_id(&self, id: CarId) -> Result<Car, Error>;

    /// Fetch every car. The result may be served from the list cache and
    /// lag recent writes by up to the cache TTL.
    async fn fetch(&self) -> Result<Vec<Car>, Error>;
}
