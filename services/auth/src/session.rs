//! Refresh-session management backed by Redis

use anyhow::Result;
use common::cache::SessionCache;
use tracing::info;
use uuid::Uuid;

use crate::jwt::JwtService;

/// Session manager keeping each user's current refresh token in Redis
#[derive(Clone)]
pub struct SessionManager {
    cache: SessionCache,
    jwt_service: JwtService,
}

impl SessionManager {
    /// Create a new session manager
    pub fn new(cache: SessionCache, jwt_service: JwtService) -> Self {
        Self { cache, jwt_service }
    }

    fn session_key(user_id: Uuid) -> String {
        format!("session:{}", user_id)
    }

    /// Store the current refresh token for a user
    pub async fn create_session(&self, user_id: Uuid, refresh_token: &str) -> Result<()> {
        info!("Creating session for user: {}", user_id);

        self.cache
            .set(
                &Self::session_key(user_id),
                refresh_token,
                Some(self.jwt_service.refresh_token_expiry()),
            )
            .await?;

        Ok(())
    }

    /// Fetch the stored refresh token for a user, if any
    pub async fn get_session(&self, user_id: Uuid) -> Result<Option<String>> {
        let refresh_token = self.cache.get(&Self::session_key(user_id)).await?;
        Ok(refresh_token)
    }

    /// Replace the stored refresh token after a rotation
    pub async fn update_session(&self, user_id: Uuid, refresh_token: &str) -> Result<()> {
        info!("Updating session for user: {}", user_id);

        self.cache
            .set(
                &Self::session_key(user_id),
                refresh_token,
                Some(self.jwt_service.refresh_token_expiry()),
            )
            .await?;

        Ok(())
    }

    /// Drop the session for a user
    pub async fn delete_session(&self, user_id: Uuid) -> Result<()> {
        info!("Deleting session for user: {}", user_id);

        self.cache.delete(&Self::session_key(user_id)).await?;

        Ok(())
    }

    /// Check whether the presented refresh token matches the stored session
    pub async fn is_session_valid(&self, user_id: Uuid, refresh_token: &str) -> Result<bool> {
        let stored_token = self.get_session(user_id).await?;

        match stored_token {
            Some(token) => Ok(token == refresh_token),
            None => Ok(false),
        }
    }
}
