//! Authentication middleware
//!
//! The photo service never issues tokens; it only verifies RS256 access
//! tokens minted by the auth service, using the public key alone. The
//! verified `sub` claim becomes the caller identity available to every
//! protected handler.

use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::Next,
    response::Response,
};
use jsonwebtoken::{DecodingKey, Validation};
use serde::Deserialize;
use tracing::error;
use uuid::Uuid;

use crate::{error::ApiError, state::AppState};

/// Claims the photo service cares about
#[derive(Debug, Deserialize)]
pub struct Claims {
    /// User ID
    pub sub: Uuid,
    /// Expiration time
    pub exp: u64,
    /// Token type, must be an access token
    pub token_type: TokenType,
}

/// Token type enum, mirroring the auth service's wire value
#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
pub enum TokenType {
    Access,
    Refresh,
}

/// Verified caller identity
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub id: Uuid,
}

/// Verifier for tokens issued by the auth service
#[derive(Clone)]
pub struct JwtVerifier {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtVerifier {
    /// Build a verifier from the `JWT_PUBLIC_KEY` environment variable
    /// (PEM text or a path to a PEM file)
    pub fn from_env() -> anyhow::Result<Self> {
        let value = std::env::var("JWT_PUBLIC_KEY")
            .map_err(|_| anyhow::anyhow!("JWT_PUBLIC_KEY environment variable not set"))?;

        let public_key = if value.starts_with("-----BEGIN") {
            value
        } else {
            std::fs::read_to_string(&value)
                .or_else(|_| {
                    let mut path = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR"));
                    path.push(&value);
                    std::fs::read_to_string(path)
                })
                .map_err(|e| anyhow::anyhow!("Failed to read public key file: {}", e))?
                .trim()
                .to_string()
        };

        Self::from_pem(&public_key)
    }

    /// Build a verifier from PEM-encoded public key material
    pub fn from_pem(public_key: &str) -> anyhow::Result<Self> {
        let decoding_key = DecodingKey::from_rsa_pem(public_key.as_bytes())?;
        let mut validation = Validation::new(jsonwebtoken::Algorithm::RS256);
        validation.validate_exp = true;

        Ok(JwtVerifier {
            decoding_key,
            validation,
        })
    }

    /// Verify a token and return its claims
    pub fn verify(&self, token: &str) -> anyhow::Result<Claims> {
        let token_data = jsonwebtoken::decode::<Claims>(token, &self.decoding_key, &self.validation)?;
        Ok(token_data.claims)
    }
}

/// Authentication middleware guarding the photo routes
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, ApiError> {
    let auth_header = req
        .headers()
        .get(axum::http::header::AUTHORIZATION)
        .and_then(|header| header.to_str().ok())
        .ok_or(ApiError::Unauthorized)?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or(ApiError::Unauthorized)?;

    let claims = state.jwt_verifier.verify(token).map_err(|e| {
        error!("Failed to validate token: {}", e);
        ApiError::Unauthorized
    })?;

    // Refresh tokens only buy new tokens at the auth service.
    if claims.token_type != TokenType::Access {
        return Err(ApiError::Unauthorized);
    }

    req.extensions_mut().insert(AuthUser { id: claims.sub });

    Ok(next.run(req).await)
}
