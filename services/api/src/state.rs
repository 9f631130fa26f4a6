//! Application state shared across handlers

use sqlx::PgPool;

use crate::aggregation::PhotoAggregator;
use crate::middleware::JwtVerifier;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    pub aggregator: PhotoAggregator,
    pub jwt_verifier: JwtVerifier,
}
