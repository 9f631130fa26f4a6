//! Photo aggregation service
//!
//! Produces the "photos + threaded comments" view for a user, and owns
//! the comment append operation. Reads verify the user, pull photos and
//! comments in the store's natural order, prefetch every distinct author
//! once, and hand each photo's comments to the threader.

use std::collections::HashMap;
use uuid::Uuid;

use crate::error::{ApiError, ApiResult};
use crate::models::photo::{CommentCreated, CommentRecord, NewCommentRequest, PhotoRecord, PhotoView};
use crate::repositories::{UserRepository, photo::PhotoRepository};
use crate::threading::{AuthorLookup, thread_comments};

/// Validate and trim a comment body
pub fn validate_comment_body(body: &str) -> ApiResult<&str> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return Err(ApiError::InvalidInput(
            "Comment must not be empty".to_string(),
        ));
    }
    Ok(trimmed)
}

/// Group comments per photo, preserving append order within each photo
fn comments_by_photo(comments: Vec<CommentRecord>) -> HashMap<Uuid, Vec<CommentRecord>> {
    let mut grouped: HashMap<Uuid, Vec<CommentRecord>> = HashMap::new();
    for comment in comments {
        grouped.entry(comment.photo_id).or_default().push(comment);
    }
    grouped
}

/// Assemble the photo views from already-fetched rows
///
/// Pure; separated from the store access so the shape transformation can
/// be tested without a database.
fn assemble_photo_views(
    photos: Vec<PhotoRecord>,
    comments: Vec<CommentRecord>,
    authors: &impl AuthorLookup,
) -> Vec<PhotoView> {
    let mut grouped = comments_by_photo(comments);

    photos
        .into_iter()
        .map(|photo| {
            let photo_comments = grouped.remove(&photo.id).unwrap_or_default();
            PhotoView {
                id: photo.id,
                user_id: photo.user_id,
                file_name: photo.file_name,
                date_time: photo.date_time,
                comments: thread_comments(&photo_comments, authors),
            }
        })
        .collect()
}

/// Orchestrates photo listing and comment appends
#[derive(Clone)]
pub struct PhotoAggregator {
    users: UserRepository,
    photos: PhotoRepository,
}

impl PhotoAggregator {
    /// Create a new aggregator over the two stores
    pub fn new(users: UserRepository, photos: PhotoRepository) -> Self {
        Self { users, photos }
    }

    /// Build the full photo listing for a user
    ///
    /// Fails with `NotFound` when the user does not exist; store failures
    /// surface unchanged, never as partial results.
    pub async fn photos_of_user(&self, user_id: Uuid) -> ApiResult<Vec<PhotoView>> {
        if !self.users.exists(user_id).await? {
            return Err(ApiError::NotFound("User not found".to_string()));
        }

        let photos = self.photos.photos_by_user(user_id).await?;
        let photo_ids: Vec<Uuid> = photos.iter().map(|p| p.id).collect();
        let comments = self.photos.comments_for_photos(&photo_ids).await?;

        // One directory query for every distinct author in the listing.
        let mut author_ids: Vec<Uuid> = comments.iter().map(|c| c.user_id).collect();
        author_ids.sort_unstable();
        author_ids.dedup();
        let authors = self.users.summaries_by_ids(&author_ids).await?;

        Ok(assemble_photo_views(photos, comments, &authors))
    }

    /// Append one comment (top-level or reply) to a photo
    ///
    /// Validation order: photo exists, body non-empty after trimming,
    /// parent (if given) is a comment on this photo. Nothing is written
    /// until all three pass.
    pub async fn add_comment(
        &self,
        photo_id: Uuid,
        request: &NewCommentRequest,
        author_id: Uuid,
    ) -> ApiResult<CommentCreated> {
        if !self.photos.exists(photo_id).await? {
            return Err(ApiError::NotFound("Photo not found".to_string()));
        }

        let body = validate_comment_body(&request.comment)?;

        if let Some(parent_id) = request.parent_id {
            let parent_ok = self
                .photos
                .comment_on_photo_exists(photo_id, parent_id)
                .await?;
            if !parent_ok {
                return Err(ApiError::InvalidInput(
                    "parent_id does not reference a comment on this photo".to_string(),
                ));
            }
        }

        let record = self
            .photos
            .append_comment(photo_id, author_id, body, request.parent_id)
            .await?;

        let authors = self.users.summaries_by_ids(&[author_id]).await?;
        let user = authors.resolve(author_id).into_summary();

        Ok(CommentCreated {
            id: record.id,
            comment: record.comment,
            date_time: record.date_time,
            user,
            parent_id: record.parent_id,
        })
    }

    /// The user directory this aggregator reads from
    pub fn users(&self) -> &UserRepository {
        &self.users
    }
}
