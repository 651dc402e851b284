//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driven ports ([`CarRepository`], [`KeyValueCache`]) are implemented by
//! outbound adapters. Driving ports ([`CarCommand`], [`CarQuery`]) are
//! implemented by the domain service and consumed by inbound adapters.

mod macros;
pub(crate) use macros::define_port_error;

mod cache_key;
mod car_command;
mod car_query;
mod car_repository;
mod key_value_cache;

pub use cache_key::{CacheKey, CacheKeyValidationError};
#[cfg(test)]
pub use car_command::MockCarCommand;
pub use car_command::CarCommand;
#[cfg(test)]
pub use car_query::MockCarQuery;
pub use car_query::CarQuery;
#[cfg(test)]
pub use car_repository::MockCarRepository;
pub use car_repository::{CarRepository, CarRepositoryError};
#[cfg(test)]
pub use key_value_cache::MockKeyValueCache;
pub use key_value_cache::{CacheError, KeyValueCache};
