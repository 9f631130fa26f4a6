//! Wire models for the photo service
//!
//! Field names follow the original client contract: identifiers are
//! serialized as `_id` and timestamps as `date_time`.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod photo;

/// Minimal user record, used in navigation lists and comment authorship
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSummary {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
}

/// Full profile record returned by the user detail endpoint
#[derive(Debug, Clone, Serialize)]
pub struct UserDetail {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub location: String,
    pub description: String,
    pub occupation: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_summary_serializes_with_mongo_style_id() {
        let summary = UserSummary {
            id: Uuid::nil(),
            first_name: "Ellen".to_string(),
            last_name: "Ripley".to_string(),
        };

        let value = serde_json::to_value(&summary).unwrap();
        assert!(value.get("_id").is_some());
        assert!(value.get("id").is_none());
        assert_eq!(value["first_name"], "Ellen");
    }
}
