//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on driving ports and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{CarCommand, CarQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub cars: Arc<dyn CarCommand>,
    pub cars_query: Arc<dyn CarQuery>,
}

impl HttpState {
    /// Bundle the car write and read ports.
    pub fn new(cars: Arc<dyn CarCommand>, cars_query: Arc<dyn CarQuery>) -> Self {
        Self { cars, cars_query }
    }

    /// Use one implementation for both the command and query ports.
    ///
    /// # Examples
    /// ```ignore
    /// use std::sync::Arc;
    /// use car_api::inbound::http::state::HttpState;
    /// use car_api::test_support::{InMemoryCache, InMemoryCarRepository};
    /// use car_api::domain::{CarService, CarServiceSettings};
    /// use mockable::DefaultClock;
    ///
    /// let clock = Arc::new(DefaultClock);
    /// let service = CarService::new(
    ///     Arc::new(InMemoryCarRepository::new()),
    ///     Arc::new(InMemoryCache::new(clock.clone())),
    ///     clock,
    ///     CarServiceSettings::default(),
    /// );
    /// let _state = HttpState::from_service(Arc::new(service));
    /// ```
    pub fn from_service<S>(service: Arc<S>) -> Self
    where
        S: CarCommand + CarQuery + 'static,
    {
        Self {
            cars: service.clone(),
            cars_query: service,
        }
    }
}
