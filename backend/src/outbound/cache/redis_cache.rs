//! `KeyValueCache` backed by Redis through a `bb8-redis` pool.
//!
//! Values are stored as plain strings with `SET key value EX seconds`.
//! Redis expiries have one second granularity, so shorter TTLs are rounded
//! up to one second.
//!
//! The cache is best-effort: the pool does not retry refused connections,
//! so an unreachable server fails a checkout at once instead of holding the
//! caller until the checkout timeout.

use std::time::Duration;

use async_trait::async_trait;
use bb8_redis::RedisConnectionManager;
use bb8_redis::bb8::{Pool, PooledConnection, RunError};
use bb8_redis::redis::{AsyncCommands, RedisError};
use tracing::debug;

use crate::domain::ports::{CacheError, CacheKey, KeyValueCache};

/// Pool sizing for the Redis connection pool.
#[derive(Debug, Clone)]
pub struct RedisCacheConfig {
    url: String,
    max_size: u32,
    connection_timeout: Duration,
}

impl RedisCacheConfig {
    /// Configuration for `url` with 8 connections and a 500 ms checkout
    /// timeout.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            max_size: 8,
            connection_timeout: Duration::from_millis(500),
        }
    }

    #[must_use]
    pub fn with_max_size(mut self, max_size: u32) -> Self {
        self.max_size = max_size;
        self
    }

    #[must_use]
    pub fn with_connection_timeout(mut self, timeout: Duration) -> Self {
        self.connection_timeout = timeout;
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

/// Redis-backed cache adapter.
#[derive(Clone)]
pub struct RedisCache {
    pool: Pool<RedisConnectionManager>,
}

impl RedisCache {
    /// Build the connection pool.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::Backend`] when the URL is malformed or the
    /// initial connection fails.
    pub async fn connect(config: RedisCacheConfig) -> Result<Self, CacheError> {
        let manager = RedisConnectionManager::new(config.url.as_str()).map_err(map_redis_error)?;
        let pool = Pool::builder()
            .max_size(config.max_size)
            .connection_timeout(config.connection_timeout)
            .retry_connection(false)
            .build(manager)
            .await
            .map_err(map_redis_error)?;
        Ok(Self { pool })
    }

    async fn connection(
        &self,
    ) -> Result<PooledConnection<'_, RedisConnectionManager>, CacheError> {
        self.pool.get().await.map_err(map_run_error)
    }
}

fn map_redis_error(error: RedisError) -> CacheError {
    debug!(%error, "redis command failed");
    CacheError::backend(error.to_string())
}

fn map_run_error(error: RunError<RedisError>) -> CacheError {
    match error {
        RunError::User(inner) => map_redis_error(inner),
        RunError::TimedOut => CacheError::backend("timed out waiting for a redis connection"),
    }
}

/// Whole seconds for `SET ... EX`, never less than one.
fn expiry_seconds(ttl: Duration) -> u64 {
    let whole = ttl.as_secs();
    if ttl.subsec_nanos() > 0 {
        whole.saturating_add(1)
    } else {
        whole.max(1)
    }
}

#[async_trait]
impl KeyValueCache for RedisCache {
    async fn get(&self, key: &CacheKey) -> Result<Option<String>, CacheError> {
        let mut conn = self.connection().await?;
        conn.get::<_, Option<String>>(key.as_str())
            .await
            .map_err(map_redis_error)
    }

    async fn set(&self, key: &CacheKey, value: String, ttl: Duration) -> Result<(), CacheError> {
        let mut conn = self.connection().await?;
        conn.set_ex::<_, _, ()>(key.as_str(), value, expiry_seconds(ttl))
            .await
            .map_err(map_redis_error)
    }
}
