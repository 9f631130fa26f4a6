//! Repositories for the photo service reads and the comment append path

use common::error::StoreResult;
use sqlx::{PgPool, Row};
use std::collections::HashMap;
use uuid::Uuid;

use crate::models::{UserDetail, UserSummary};

pub mod photo;

/// Read access to the user directory
#[derive(Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    /// Create a new user repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Check whether a user exists
    pub async fn exists(&self, id: Uuid) -> StoreResult<bool> {
        let row = sqlx::query("SELECT 1 AS present FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.is_some())
    }

    /// List all users for the navigation sidebar, ordered by name
    pub async fn list_summaries(&self) -> StoreResult<Vec<UserSummary>> {
        let rows = sqlx::query(
            r#"
            SELECT id, first_name, last_name
            FROM users
            ORDER BY last_name, first_name
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        let users = rows
            .into_iter()
            .map(|row| UserSummary {
                id: row.get("id"),
                first_name: row.get("first_name"),
                last_name: row.get("last_name"),
            })
            .collect();

        Ok(users)
    }

    /// Fetch the full profile for a user
    pub async fn find_detail(&self, id: Uuid) -> StoreResult<Option<UserDetail>> {
        let row = sqlx::query(
            r#"
            SELECT id, first_name, last_name, location, description, occupation
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|row| UserDetail {
            id: row.get("id"),
            first_name: row.get("first_name"),
            last_name: row.get("last_name"),
            location: row.get("location"),
            description: row.get("description"),
            occupation: row.get("occupation"),
        }))
    }

    /// Fetch summaries for a set of author ids in one query
    ///
    /// Ids that no longer resolve are simply absent from the map; the
    /// threader renders those as the Unknown User sentinel.
    pub async fn summaries_by_ids(
        &self,
        ids: &[Uuid],
    ) -> StoreResult<HashMap<Uuid, UserSummary>> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows = sqlx::query(
            r#"
            SELECT id, first_name, last_name
            FROM users
            WHERE id = ANY($1)
            "#,
        )
        .bind(ids)
        .fetch_all(&self.pool)
        .await?;

        let summaries = rows
            .into_iter()
            .map(|row| {
                let summary = UserSummary {
                    id: row.get("id"),
                    first_name: row.get("first_name"),
                    last_name: row.get("last_name"),
                };
                (summary.id, summary)
            })
            .collect();

        Ok(summaries)
    }
}
