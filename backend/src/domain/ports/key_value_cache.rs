//! Driven port for a text key/value cache with per-entry expiry.
use std::time::Duration;

use async_trait::async_trait;

use super::{CacheKey, define_port_error};

define_port_error! {
    /// Errors surfaced by cache adapters.
    pub enum CacheError {
        /// Cache backend is unavailable or rejected the command.
        Backend { message: String } => "cache backend failure: {message}",
    }
}

/// Stores caller-serialised text under a key until its time-to-live lapses.
///
/// The cache knows nothing about the shape of the stored value. Callers treat
/// a miss and a retrieval error alike.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait KeyValueCache: Send + Sync {
    /// Read the value stored under `key`, or `None` when absent or expired.
    async fn get(&self, key: &CacheKey) -> Result<Option<String>, CacheError>;

    /// Store `value` under `key`, replacing any previous value, for `ttl`.
    async fn set(&self, key: &CacheKey, value: String, ttl: Duration) -> Result<(), CacheError>;
}
