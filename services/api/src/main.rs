use anyhow::Result;
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

mod aggregation;
mod error;
mod middleware;
mod models;
mod repositories;
mod routes;
mod state;
mod threading;

use common::database::{DatabaseConfig, init_pool, run_migrations};
use common::settings::HttpSettings;
use tokio::net::TcpListener;

use crate::aggregation::PhotoAggregator;
use crate::middleware::JwtVerifier;
use crate::repositories::{UserRepository, photo::PhotoRepository};
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    info!("Starting photo service");

    // Initialize database connection pool and schema
    let db_config = DatabaseConfig::from_env()?;
    let pool = init_pool(&db_config).await?;

    if common::database::health_check(&pool).await? {
        info!("Database connection successful");
    } else {
        anyhow::bail!("Failed to connect to database");
    }

    run_migrations(&pool).await?;

    // Token verification against the auth service's public key
    let jwt_verifier = JwtVerifier::from_env()?;

    let user_repository = UserRepository::new(pool.clone());
    let photo_repository = PhotoRepository::new(pool.clone());
    let aggregator = PhotoAggregator::new(user_repository, photo_repository);

    info!("Photo service initialized successfully");

    let app_state = AppState {
        db_pool: pool,
        aggregator,
        jwt_verifier,
    };

    // Start the web server
    let app = routes::create_router(app_state);

    let settings = HttpSettings::load("API", 3001)?;
    let listener = TcpListener::bind(settings.bind_addr()).await?;
    info!("Photo service listening on {}", settings.bind_addr());

    axum::serve(listener, app).await?;

    Ok(())
}
