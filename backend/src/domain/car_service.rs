//! Car domain service.
//!
//! [`CarService`] implements the [`CarCommand`] and [`CarQuery`] driving
//! ports on top of a [`CarRepository`] and a [`KeyValueCache`]. Every call
//! runs under one deadline; when it lapses the in-flight store or cache call
//! is dropped and the caller receives [`ErrorCode::Timeout`].
//!
//! The list read is cache-aside: a readable snapshot under
//! [`CacheKey::car_list`] short-circuits the store, and a store read
//! repopulates it on a best-effort basis. Each cache round trip has its own
//! short deadline; a slow or unreachable cache counts as a miss so the store
//! is still read. Writes leave the snapshot alone, so a list may lag writes
//! by up to the configured TTL.
//!
//! [`ErrorCode::Timeout`]: crate::domain::ErrorCode::Timeout

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use mockable::Clock;
use tracing::{debug, warn};

use crate::domain::ports::{
    CacheKey, CarCommand, CarQuery, CarRepository, CarRepositoryError, KeyValueCache,
};
use crate::domain::{Car, CarDetails, CarId, Error, NewCar};

const CAR_NOT_FOUND: &str = "car not found";

/// Deadlines and expiries applied by [`CarService`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarServiceSettings {
    /// Upper bound on each service call, including every store and cache
    /// round trip it makes.
    pub operation_timeout: Duration,
    /// Time-to-live of the cached list snapshot.
    pub list_cache_ttl: Duration,
    /// Upper bound on a single cache round trip. Keep it well under
    /// `operation_timeout` so a stalled cache leaves room for the store.
    pub cache_timeout: Duration,
}

impl Default for CarServiceSettings {
    fn default() -> Self {
        Self {
            operation_timeout: Duration::from_secs(2),
            list_cache_ttl: Duration::from_secs(30),
            cache_timeout: Duration::from_millis(250),
        }
    }
}

fn map_repository_error(error: CarRepositoryError) -> Error {
    match error {
        CarRepositoryError::NoRows => Error::not_found(CAR_NOT_FOUND),
        other => Error::internal(format!("car repository error: {other}")),
    }
}

/// Car use-case orchestration over the repository and list cache.
#[derive(Clone)]
pub struct CarService<R, C> {
    repository: Arc<R>,
    cache: Arc<C>,
    clock: Arc<dyn Clock>,
    settings: CarServiceSettings,
}

impl<R, C> CarService<R, C> {
    /// Create a service over the supplied adapters.
    pub fn new(
        repository: Arc<R>,
        cache: Arc<C>,
        clock: Arc<dyn Clock>,
        settings: CarServiceSettings,
    ) -> Self {
        Self {
            repository,
            cache,
            clock,
            settings,
        }
    }

    async fn bounded<T, F>(&self, operation: &'static str, work: F) -> Result<T, Error>
    where
        F: Future<Output = Result<T, Error>>,
    {
        let limit = self.settings.operation_timeout;
        match tokio::time::timeout(limit, work).await {
            Ok(result) => result,
            Err(_) => {
                warn!(
                    operation,
                    timeout_ms = limit.as_millis(),
                    "car operation exceeded its deadline"
                );
                Err(Error::timeout(format!("{operation} timed out")))
            }
        }
    }
}

impl<R, C> CarService<R, C>
where
    R: CarRepository,
    C: KeyValueCache,
{
    async fn load(&self, id: CarId) -> Result<Car, Error> {
        self.repository
            .get_by_id(id)
            .await
            .map_err(map_repository_error)
    }

    async fn cached_list(&self, key: &CacheKey) -> Option<Vec<Car>> {
        let limit = self.settings.cache_timeout;
        let raw = match tokio::time::timeout(limit, self.cache.get(key)).await {
            Ok(Ok(Some(raw))) => raw,
            Ok(Ok(None)) => {
                debug!(%key, "car list cache miss");
                return None;
            }
            Ok(Err(error)) => {
                debug!(%key, %error, "car list cache read failed");
                return None;
            }
            Err(_) => {
                warn!(%key, timeout_ms = limit.as_millis(), "car list cache read timed out");
                return None;
            }
        };

        match serde_json::from_str::<Vec<Car>>(&raw) {
            Ok(cars) => Some(cars),
            Err(error) => {
                debug!(%key, %error, "discarding unreadable car list snapshot");
                None
            }
        }
    }

    async fn store_list(&self, key: &CacheKey, cars: &[Car]) {
        let json = match serde_json::to_string(cars) {
            Ok(json) => json,
            Err(error) => {
                warn!(%key, %error, "failed to serialise car list snapshot");
                return;
            }
        };
        let limit = self.settings.cache_timeout;
        let write = self.cache.set(key, json, self.settings.list_cache_ttl);
        match tokio::time::timeout(limit, write).await {
            Ok(Ok(())) => {}
            Ok(Err(error)) => warn!(%key, %error, "failed to populate car list cache"),
            Err(_) => warn!(%key, timeout_ms = limit.as_millis(), "car list cache write timed out"),
        }
    }

    async fn create_car(&self, details: CarDetails) -> Result<Car, Error> {
        let new_car = NewCar::stamped(details, self.clock.utc());
        let id = self
            .repository
            .create(&new_car)
            .await
            .map_err(map_repository_error)?;
        debug!(%id, "car created");
        Ok(new_car.into_car(id))
    }

    async fn update_car(&self, id: CarId, details: CarDetails) -> Result<Car, Error> {
        let mut car = self.load(id).await?;
        car.replace_details(details, self.clock.utc());
        self.repository
            .update(&car)
            .await
            .map_err(map_repository_error)?;
        Ok(car)
    }

    async fn delete_car(&self, id: CarId) -> Result<(), Error> {
        self.load(id).await?;
        self.repository
            .delete(id)
            .await
            .map_err(map_repository_error)
    }

    async fn fetch_cars(&self) -> Result<Vec<Car>, Error> {
        let key = CacheKey::car_list();
        if let Some(cars) = self.cached_list(&key).await {
            debug!(count = cars.len(), "serving car list from cache");
            return Ok(cars);
        }

        let cars = self
            .repository
            .fetch()
            .await
            .map_err(map_repository_error)?;
        self.store_list(&key, &cars).await;
        Ok(cars)
    }
}

#[async_trait]
impl<R, C> CarCommand for CarService<R, C>
where
    R: CarRepository,
    C: KeyValueCache,
{
    async fn create(&self, details: CarDetails) -> Result<Car, Error> {
        self.bounded("create car", self.create_car(details)).await
    }

    async fn update(&self, id: CarId, details: CarDetails) -> Result<Car, Error> {
        self.bounded("update car", self.update_car(id, details)).await
    }

    async fn delete(&self, id: CarId) -> Result<(), Error> {
        self.bounded("delete car", self.delete_car(id)).await
    }
}

#[async_trait]
impl<R, C> CarQuery for CarService<R, C>
where
    R: CarRepository,
    C: KeyValueCache,
{
    async fn get_by_id(&self, id: CarId) -> Result<Car, Error> {
        self.bounded("get car", self.load(id)).await
    }

    async fn fetch(&self) -> Result<Vec<Car>, Error> {
        self.bounded("fetch cars", self.fetch_cars()).await
    }
}

#[cfg(test)]
#[path = "car_service_tests.rs"]
mod tests;
