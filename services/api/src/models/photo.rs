//! Photo and comment models
//!
//! `PhotoRecord` and `CommentRecord` mirror storage rows; the `*View`
//! types are the assembled presentation shapes with threaded comments.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::UserSummary;

/// Photo row as stored
#[derive(Debug, Clone)]
pub struct PhotoRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub file_name: String,
    pub date_time: DateTime<Utc>,
}

/// Comment row as stored, in append order
#[derive(Debug, Clone)]
pub struct CommentRecord {
    pub id: Uuid,
    pub photo_id: Uuid,
    pub user_id: Uuid,
    pub parent_id: Option<Uuid>,
    pub comment: String,
    pub date_time: DateTime<Utc>,
}

/// A photo assembled with its threaded comments
#[derive(Debug, Clone, Serialize)]
pub struct PhotoView {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub user_id: Uuid,
    pub file_name: String,
    pub date_time: DateTime<Utc>,
    pub comments: Vec<CommentNode>,
}

/// A top-level comment with its replies
#[derive(Debug, Clone, Serialize)]
pub struct CommentNode {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub comment: String,
    pub date_time: DateTime<Utc>,
    pub user: UserSummary,
    pub replies: Vec<ReplyNode>,
}

/// A reply nested under a top-level comment
#[derive(Debug, Clone, Serialize)]
pub struct ReplyNode {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub comment: String,
    pub date_time: DateTime<Utc>,
    pub user: UserSummary,
    pub parent_id: Uuid,
}

/// Request body for appending a comment to a photo
#[derive(Debug, Clone, Deserialize)]
pub struct NewCommentRequest {
    pub comment: String,
    pub parent_id: Option<Uuid>,
}

/// The freshly appended comment, echoed back to the caller
#[derive(Debug, Clone, Serialize)]
pub struct CommentCreated {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub comment: String,
    pub date_time: DateTime<Utc>,
    pub user: UserSummary,
    pub parent_id: Option<Uuid>,
}
