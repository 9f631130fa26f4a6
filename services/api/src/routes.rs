//! Photo service routes

use axum::{
    Extension, Json, Router,
    extract::{Path, State},
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::{get, post},
};
use axum_extra::extract::WithRejection;
use serde_json::json;
use uuid::Uuid;

use crate::{
    error::ApiError,
    middleware::{AuthUser, auth_middleware},
    models::photo::NewCommentRequest,
    state::AppState,
};

/// Create the router for the photo service
pub fn create_router(state: AppState) -> Router {
    let protected_routes = Router::new()
        .route("/user/list", get(list_users))
        .route("/user/:id", get(get_user))
        .route("/photosOfUser/:id", get(photos_of_user))
        .route("/commentsOfPhoto/:id", post(add_comment))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    Router::new()
        .route("/health", get(health_check))
        .merge(protected_routes)
        .with_state(state)
}

/// Health check endpoint, including a database liveness probe
pub async fn health_check(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    common::database::health_check(&state.db_pool).await?;

    Ok(Json(json!({
        "status": "ok",
        "service": "photo-service"
    })))
}

/// List all users for the navigation sidebar
pub async fn list_users(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let users = state.aggregator.users().list_summaries().await?;

    Ok(Json(users))
}

/// Get a user's profile
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let user = state
        .aggregator
        .users()
        .find_detail(id)
        .await?
        .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

    Ok(Json(user))
}

/// Get a user's photos with threaded comments
pub async fn photos_of_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let photos = state.aggregator.photos_of_user(id).await?;

    Ok(Json(photos))
}

/// Append a comment to a photo as the authenticated caller
pub async fn add_comment(
    State(state): State<AppState>,
    Path(photo_id): Path<Uuid>,
    Extension(caller): Extension<AuthUser>,
    WithRejection(Json(payload), _): WithRejection<Json<NewCommentRequest>, ApiError>,
) -> Result<impl IntoResponse, ApiError> {
    let created = state
        .aggregator
        .add_comment(photo_id, &payload, caller.id)
        .await?;

    Ok((StatusCode::OK, Json(created)))
}
