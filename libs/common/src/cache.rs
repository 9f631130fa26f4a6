//! Redis-backed session cache for the photoshare services
//!
//! The auth service keeps refresh sessions and blacklisted tokens here;
//! keys carry a TTL so expired sessions vanish on their own.

use anyhow::Result;
use redis::{AsyncCommands, Client};
use tracing::info;

/// Configuration for the Redis connection
#[derive(Debug, Clone)]
pub struct RedisConfig {
    /// Redis connection URL (e.g., "redis://localhost:6379")
    pub url: String,
}

impl RedisConfig {
    /// Build a RedisConfig from environment variables
    ///
    /// # Environment Variables
    /// - `REDIS_URL`: Redis connection URL (default: "redis://localhost:6379")
    pub fn from_env() -> Result<Self> {
        let url =
            std::env::var("REDIS_URL").unwrap_or_else(|_| "redis://localhost:6379".to_string());

        Ok(RedisConfig { url })
    }
}

/// Handle to the Redis session cache
#[derive(Clone)]
pub struct SessionCache {
    client: Client,
}

impl SessionCache {
    /// Open a client against the configured Redis instance
    pub fn new(config: &RedisConfig) -> Result<Self> {
        let client = Client::open(config.url.clone())?;
        info!("Redis client initialized with URL: {}", config.url);
        Ok(SessionCache { client })
    }

    async fn connection(&self) -> Result<redis::aio::MultiplexedConnection> {
        let conn = self.client.get_multiplexed_async_connection().await?;
        Ok(conn)
    }

    /// Store a value under a key, optionally expiring after `ttl_seconds`
    pub async fn set(&self, key: &str, value: &str, ttl_seconds: Option<u64>) -> Result<()> {
        let mut conn = self.connection().await?;

        if let Some(ttl) = ttl_seconds {
            let _: () = conn.set_ex(key, value, ttl).await?;
        } else {
            let _: () = conn.set(key, value).await?;
        }

        Ok(())
    }

    /// Fetch a value by key
    pub async fn get(&self, key: &str) -> Result<Option<String>> {
        let mut conn = self.connection().await?;
        let value: Option<String> = conn.get(key).await?;
        Ok(value)
    }

    /// Remove a key
    pub async fn delete(&self, key: &str) -> Result<()> {
        let mut conn = self.connection().await?;
        let _: u64 = conn.del(key).await?;
        Ok(())
    }

    /// Check that Redis is reachable
    pub async fn health_check(&self) -> Result<bool> {
        let mut conn = self.connection().await?;
        let pong: String = redis::cmd("PING").query_async(&mut conn).await?;
        Ok(pong == "PONG")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Exercised only when a Redis instance is provided via REDIS_URL.
    #[tokio::test]
    async fn test_set_get_delete() -> Result<()> {
        if std::env::var("REDIS_URL").is_err() {
            return Ok(());
        }

        let config = RedisConfig::from_env()?;
        let cache = SessionCache::new(&config)?;
        assert!(cache.health_check().await?);

        let key = "photoshare_cache_test_key";
        cache.set(key, "test_value", Some(5)).await?;
        assert_eq!(cache.get(key).await?, Some("test_value".to_string()));

        cache.delete(key).await?;
        assert_eq!(cache.get(key).await?, None);

        Ok(())
    }
}
