//! Integration tests for the shared infrastructure
//!
//! These run only when a live PostgreSQL (`DATABASE_URL`) or Redis
//! (`REDIS_URL`) instance is provided through the environment; otherwise
//! they pass without touching anything.

use common::{
    cache::{RedisConfig, SessionCache},
    database::{DatabaseConfig, health_check, init_pool, run_migrations},
};
use sqlx::Row;

#[tokio::test]
async fn test_database_connectivity_and_migrations() -> Result<(), Box<dyn std::error::Error>> {
    if std::env::var("DATABASE_URL").is_err() {
        return Ok(());
    }

    let db_config = DatabaseConfig::from_env()?;
    let pool = init_pool(&db_config).await?;

    assert!(health_check(&pool).await?, "Database health check failed");

    run_migrations(&pool).await?;

    // The photoshare schema must be in place after migrating.
    let row = sqlx::query(
        "SELECT COUNT(*) AS tables FROM information_schema.tables \
         WHERE table_name IN ('users', 'photos', 'comments')",
    )
    .fetch_one(&pool)
    .await?;

    let tables: i64 = row.get("tables");
    assert_eq!(tables, 3, "Expected users, photos and comments tables");

    Ok(())
}

#[tokio::test]
async fn test_session_cache_roundtrip() -> Result<(), Box<dyn std::error::Error>> {
    if std::env::var("REDIS_URL").is_err() {
        return Ok(());
    }

    let redis_config = RedisConfig::from_env()?;
    let cache = SessionCache::new(&redis_config)?;

    assert!(cache.health_check().await?, "Redis health check failed");

    let key = "photoshare_integration_test_key";
    cache.set(key, "integration_test_value", Some(10)).await?;
    assert_eq!(
        cache.get(key).await?,
        Some("integration_test_value".to_string())
    );

    cache.delete(key).await?;
    assert_eq!(cache.get(key).await?, None);

    Ok(())
}
