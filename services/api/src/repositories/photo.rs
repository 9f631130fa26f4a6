//! Photo store access
//!
//! Reads hand back rows in the store's natural order (photos by upload
//! time, comments by append sequence). The one write, `append_comment`,
//! is a single-row INSERT: the storage layer's atomic append primitive,
//! so concurrent appends to the same photo can never lose each other.

use common::error::StoreResult;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::models::photo::{CommentRecord, PhotoRecord};

fn comment_from_row(row: &sqlx::postgres::PgRow) -> CommentRecord {
    CommentRecord {
        id: row.get("id"),
        photo_id: row.get("photo_id"),
        user_id: row.get("user_id"),
        parent_id: row.get("parent_id"),
        comment: row.get("comment"),
        date_time: row.get("date_time"),
    }
}

/// Photo store repository
#[derive(Clone)]
pub struct PhotoRepository {
    pool: PgPool,
}

impl PhotoRepository {
    /// Create a new photo repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Check whether a photo exists
    pub async fn exists(&self, id: Uuid) -> StoreResult<bool> {
        let row = sqlx::query("SELECT 1 AS present FROM photos WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.is_some())
    }

    /// Fetch all photos owned by a user, oldest upload first
    pub async fn photos_by_user(&self, user_id: Uuid) -> StoreResult<Vec<PhotoRecord>> {
        let rows = sqlx::query(
            r#"
            SELECT id, user_id, file_name, date_time
            FROM photos
            WHERE user_id = $1
            ORDER BY date_time, id
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        let photos = rows
            .into_iter()
            .map(|row| PhotoRecord {
                id: row.get("id"),
                user_id: row.get("user_id"),
                file_name: row.get("file_name"),
                date_time: row.get("date_time"),
            })
            .collect();

        Ok(photos)
    }

    /// Fetch the comments of a set of photos in append order
    pub async fn comments_for_photos(&self, photo_ids: &[Uuid]) -> StoreResult<Vec<CommentRecord>> {
        if photo_ids.is_empty() {
            return Ok(Vec::new());
        }

        let rows = sqlx::query(
            r#"
            SELECT id, photo_id, user_id, parent_id, comment, date_time
            FROM comments
            WHERE photo_id = ANY($1)
            ORDER BY photo_id, seq
            "#,
        )
        .bind(photo_ids)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(comment_from_row).collect())
    }

    /// Check whether a comment exists on the given photo
    pub async fn comment_on_photo_exists(
        &self,
        photo_id: Uuid,
        comment_id: Uuid,
    ) -> StoreResult<bool> {
        let row = sqlx::query("SELECT 1 AS present FROM comments WHERE id = $1 AND photo_id = $2")
            .bind(comment_id)
            .bind(photo_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.is_some())
    }

    /// Append one comment to a photo's comment sequence
    pub async fn append_comment(
        &self,
        photo_id: Uuid,
        author_id: Uuid,
        body: &str,
        parent_id: Option<Uuid>,
    ) -> StoreResult<CommentRecord> {
        let row = sqlx::query(
            r#"
            INSERT INTO comments (photo_id, user_id, parent_id, comment)
            VALUES ($1, $2, $3, $4)
            RETURNING id, photo_id, user_id, parent_id, comment, date_time
            "#,
        )
        .bind(photo_id)
        .bind(author_id)
        .bind(parent_id)
        .bind(body)
        .fetch_one(&self.pool)
        .await?;

        Ok(comment_from_row(&row))
    }
}
