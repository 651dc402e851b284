//! PostgreSQL persistence adapter using Diesel ORM.
//!
//! [`DieselCarRepository`] implements the domain's `CarRepository` port over
//! `diesel-async` with `bb8` pooling. Row structs (`models.rs`) and table
//! definitions (`schema.rs`) stay private to this module; the adapter only
//! translates between them and domain types.
//!
//! # Example
//!
//! ```ignore
//! use car_api::outbound::persistence::{DbPool, DieselCarRepository, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/cars")).await?;
//! let repository = DieselCarRepository::new(pool);
//! ```

mod diesel_car_repository;
mod models;
mod pool;
mod schema;

pub use diesel_car_repository::DieselCarRepository;
pub use pool::{DbPool, PoolConfig, PoolError};
