//! Outbound adapters implementing the driven ports.
//!
//! - **persistence**: PostgreSQL `CarRepository` using Diesel ORM
//! - **cache**: Redis `KeyValueCache` using `bb8-redis`
//!
//! Adapters translate between domain types and infrastructure
//! representations. They contain no business logic.

pub mod cache;
pub mod persistence;
