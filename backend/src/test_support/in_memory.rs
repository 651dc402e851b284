//! In-memory adapters for the car repository and key/value cache ports.

use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, TimeDelta, Utc};
use mockable::Clock;

use crate::domain::ports::{
    CacheError, CacheKey, CarRepository, CarRepositoryError, KeyValueCache,
};
use crate::domain::{Car, CarId, NewCar};

#[derive(Debug, Default)]
struct Rows {
    last_id: i64,
    cars: BTreeMap<CarId, Car>,
}

/// Car repository backed by an ordered map, assigning ids from 1.
///
/// Counts `fetch` calls so cache-aside behaviour can be observed.
#[derive(Debug, Default)]
pub struct InMemoryCarRepository {
    rows: Mutex<Rows>,
    fetch_calls: AtomicUsize,
}

impl InMemoryCarRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of times [`CarRepository::fetch`] has run.
    pub fn fetch_calls(&self) -> usize {
        self.fetch_calls.load(Ordering::SeqCst)
    }

    /// Number of stored cars.
    pub fn len(&self) -> usize {
        self.rows.lock().map_or(0, |rows| rows.cars.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> Result<MutexGuard<'_, Rows>, CarRepositoryError> {
        self.rows
            .lock()
            .map_err(|_| CarRepositoryError::connection("in-memory car store poisoned"))
    }
}

#[async_trait]
impl CarRepository for InMemoryCarRepository {
    async fn create(&self, car: &NewCar) -> Result<CarId, CarRepositoryError> {
        let mut rows = self.lock()?;
        rows.last_id += 1;
        let id = CarId::new(rows.last_id);
        rows.cars.insert(id, car.clone().into_car(id));
        Ok(id)
    }

    async fn get_by_id(&self, id: CarId) -> Result<Car, CarRepositoryError> {
        self.lock()?
            .cars
            .get(&id)
            .cloned()
            .ok_or_else(CarRepositoryError::no_rows)
    }

    async fn fetch(&self) -> Result<Vec<Car>, CarRepositoryError> {
        self.fetch_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.lock()?.cars.values().cloned().collect())
    }

    async fn update(&self, car: &Car) -> Result<(), CarRepositoryError> {
        let mut rows = self.lock()?;
        match rows.cars.get_mut(&car.id) {
            Some(stored) => {
                stored.details = car.details.clone();
                stored.updated_at = car.updated_at;
                Ok(())
            }
            None => Err(CarRepositoryError::unexpected_row_count(0_usize)),
        }
    }

    async fn delete(&self, id: CarId) -> Result<(), CarRepositoryError> {
        match self.lock()?.cars.remove(&id) {
            Some(_) => Ok(()),
            None => Err(CarRepositoryError::unexpected_row_count(0_usize)),
        }
    }
}

/// Key/value cache that honours TTLs against an injected clock.
pub struct InMemoryCache {
    entries: Mutex<HashMap<String, (String, DateTime<Utc>)>>,
    clock: Arc<dyn Clock>,
}

impl InMemoryCache {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            clock,
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, HashMap<String, (String, DateTime<Utc>)>>, CacheError> {
        self.entries
            .lock()
            .map_err(|_| CacheError::backend("in-memory cache poisoned"))
    }
}

#[async_trait]
impl KeyValueCache for InMemoryCache {
    async fn get(&self, key: &CacheKey) -> Result<Option<String>, CacheError> {
        let now = self.clock.utc();
        let mut entries = self.lock()?;
        match entries.get(key.as_str()) {
            Some((value, expires_at)) if *expires_at > now => Ok(Some(value.clone())),
            Some(_) => {
                entries.remove(key.as_str());
                Ok(None)
            }
            None => Ok(None),
        }
    }

    async fn set(&self, key: &CacheKey, value: String, ttl: Duration) -> Result<(), CacheError> {
        let ttl = TimeDelta::from_std(ttl)
            .map_err(|error| CacheError::backend(format!("unrepresentable ttl: {error}")))?;
        let expires_at = self.clock.utc() + ttl;
        self.lock()?
            .insert(key.as_str().to_owned(), (value, expires_at));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use rstest::rstest;

    use super::*;
    use crate::domain::CarDetails;
    use crate::test_support::MutableClock;

    fn instant() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0)
            .single()
            .expect("valid instant")
    }

    #[rstest]
    #[tokio::test]
    async fn repository_assigns_sequential_ids() {
        let repo = InMemoryCarRepository::new();
        let new_car = NewCar::stamped(CarDetails::default(), instant());

        let first = repo.create(&new_car).await.expect("first insert");
        let second = repo.create(&new_car).await.expect("second insert");

        assert_eq!(first, CarId::new(1));
        assert_eq!(second, CarId::new(2));
        assert_eq!(repo.len(), 2);
    }

    #[rstest]
    #[tokio::test]
    async fn repository_writes_to_missing_rows_report_zero_affected() {
        let repo = InMemoryCarRepository::new();

        let err = repo.delete(CarId::new(9)).await.expect_err("missing row");
        assert_eq!(err, CarRepositoryError::unexpected_row_count(0_usize));
        let err = repo.get_by_id(CarId::new(9)).await.expect_err("missing row");
        assert!(err.is_no_rows());
    }

    #[rstest]
    #[tokio::test]
    async fn cache_entries_expire_with_the_clock() {
        let clock = Arc::new(MutableClock::new(instant()));
        let cache = InMemoryCache::new(clock.clone());
        let key = CacheKey::car_list();

        cache
            .set(&key, "[]".to_owned(), Duration::from_secs(30))
            .await
            .expect("set succeeds");
        clock.advance(Duration::from_secs(29));
        assert_eq!(cache.get(&key).await.expect("get"), Some("[]".to_owned()));

        clock.advance(Duration::from_secs(1));
        assert_eq!(cache.get(&key).await.expect("get"), None);
    }
}
