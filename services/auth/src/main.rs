use anyhow::Result;
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

mod jwt;
mod models;
mod rate_limiter;
mod repositories;
mod routes;
mod session;
mod validation;

use common::cache::{RedisConfig, SessionCache};
use common::database::{DatabaseConfig, init_pool, run_migrations};
use common::settings::HttpSettings;
use sqlx::PgPool;
use tokio::net::TcpListener;

use crate::jwt::{JwtConfig, JwtService};
use crate::rate_limiter::{RateLimiter, RateLimiterConfig};
use crate::repositories::UserRepository;
use crate::session::SessionManager;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    pub session_cache: SessionCache,
    pub jwt_service: JwtService,
    pub user_repository: UserRepository,
    pub session_manager: SessionManager,
    pub rate_limiter: RateLimiter,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    info!("Starting authentication service");

    // Initialize database connection pool and schema
    let db_config = DatabaseConfig::from_env()?;
    let pool = init_pool(&db_config).await?;

    if common::database::health_check(&pool).await? {
        info!("Database connection successful");
    } else {
        anyhow::bail!("Failed to connect to database");
    }

    run_migrations(&pool).await?;

    // Initialize JWT service
    let jwt_config = JwtConfig::from_env()?;
    let jwt_service = JwtService::new(jwt_config)?;

    // Initialize Redis session cache
    let redis_config = RedisConfig::from_env()?;
    let session_cache = SessionCache::new(&redis_config)?;

    let user_repository = UserRepository::new(pool.clone());
    let session_manager = SessionManager::new(session_cache.clone(), jwt_service.clone());
    let rate_limiter = RateLimiter::new(RateLimiterConfig::default());

    info!("Authentication service initialized successfully");

    let app_state = AppState {
        db_pool: pool,
        session_cache,
        jwt_service,
        user_repository,
        session_manager,
        rate_limiter,
    };

    // Start the web server
    let app = routes::create_router(app_state);

    let settings = HttpSettings::load("AUTH", 3000)?;
    let listener = TcpListener::bind(settings.bind_addr()).await?;
    info!("Authentication service listening on {}", settings.bind_addr());

    axum::serve(listener, app).await?;

    Ok(())
}
