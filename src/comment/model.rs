use mongodb::bson::oid::ObjectId;
use mongodb::bson::serde_helpers::{
    serialize_bson_datetime_as_rfc3339_string, serialize_object_id_as_hex_string,
};
use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};

use crate::user::model::{OwnerSummary, UserSummary};
use crate::video::model::VideoSummary;

/// A document of the `comments` collection.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub content: String,
    pub video: ObjectId,
    pub owner: ObjectId,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl Comment {
    pub fn new(content: String, video: ObjectId, owner: ObjectId) -> Self {
        let now = DateTime::now();
        Comment {
            id: ObjectId::new(),
            content,
            video,
            owner,
            created_at: now,
            updated_at: now,
        }
    }
}

/// JSON rendering of a stored comment.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentView {
    #[serde(rename = "_id", serialize_with = "serialize_object_id_as_hex_string")]
    pub id: ObjectId,
    pub content: String,
    #[serde(serialize_with = "serialize_object_id_as_hex_string")]
    pub video: ObjectId,
    #[serde(serialize_with = "serialize_object_id_as_hex_string")]
    pub owner: ObjectId,
    #[serde(serialize_with = "serialize_bson_datetime_as_rfc3339_string")]
    pub created_at: DateTime,
    #[serde(serialize_with = "serialize_bson_datetime_as_rfc3339_string")]
    pub updated_at: DateTime,
}

impl From<Comment> for CommentView {
    fn from(comment: Comment) -> Self {
        CommentView {
            id: comment.id,
            content: comment.content,
            video: comment.video,
            owner: comment.owner,
            created_at: comment.created_at,
            updated_at: comment.updated_at,
        }
    }
}

/// One row of a comment listing: the comment joined with its owner.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CommentWithOwner {
    #[serde(rename = "_id", serialize_with = "serialize_object_id_as_hex_string")]
    pub id: ObjectId,
    pub content: String,
    #[serde(serialize_with = "serialize_bson_datetime_as_rfc3339_string")]
    pub created_at: DateTime,
    pub owner: OwnerSummary,
}

/// A comment after an update, with owner and video expanded.
/// A reference that no longer resolves is rendered as `null`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PopulatedComment {
    #[serde(rename = "_id", serialize_with = "serialize_object_id_as_hex_string")]
    pub id: ObjectId,
    pub content: String,
    pub video: Option<VideoSummary>,
    pub owner: Option<UserSummary>,
    #[serde(serialize_with = "serialize_bson_datetime_as_rfc3339_string")]
    pub created_at: DateTime,
    #[serde(serialize_with = "serialize_bson_datetime_as_rfc3339_string")]
    pub updated_at: DateTime,
}

#[derive(Debug, Deserialize)]
pub struct ListCommentsQuery {
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

/// `content` is kept as raw JSON so a non-string value gets the same
/// "content is required" answer as a missing one.
#[derive(Debug, Deserialize)]
pub struct CreateCommentRequest {
    pub content: Option<serde_json::Value>,
}

impl CreateCommentRequest {
    pub fn content(&self) -> Option<&str> {
        self.content.as_ref().and_then(serde_json::Value::as_str)
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdateCommentRequest {
    pub content: Option<serde_json::Value>,
}

impl UpdateCommentRequest {
    pub fn content(&self) -> Option<&str> {
        self.content.as_ref().and_then(serde_json::Value::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_renders_hex_ids_and_rfc3339_dates() {
        let comment = Comment {
            id: ObjectId::parse_str("64b7f0c2a1b2c3d4e5f60718").unwrap(),
            content: "nice video".to_string(),
            video: ObjectId::parse_str("64b7f0c2a1b2c3d4e5f60719").unwrap(),
            owner: ObjectId::parse_str("64b7f0c2a1b2c3d4e5f6071a").unwrap(),
            created_at: DateTime::from_millis(0),
            updated_at: DateTime::from_millis(0),
        };

        let json = serde_json::to_value(CommentView::from(comment)).unwrap();
        assert_eq!(json["_id"], "64b7f0c2a1b2c3d4e5f60718");
        assert_eq!(json["video"], "64b7f0c2a1b2c3d4e5f60719");
        assert_eq!(json["owner"], "64b7f0c2a1b2c3d4e5f6071a");
        assert_eq!(json["content"], "nice video");
        assert!(json["createdAt"].as_str().unwrap().starts_with("1970-01-01T00:00:00"));
    }

    #[test]
    fn request_content_ignores_non_string_values() {
        let body: CreateCommentRequest =
            serde_json::from_value(serde_json::json!({ "content": 42 })).unwrap();
        assert_eq!(body.content(), None);

        let body: UpdateCommentRequest =
            serde_json::from_value(serde_json::json!({ "content": "text" })).unwrap();
        assert_eq!(body.content(), Some("text"));
    }

    #[test]
    fn stored_comment_uses_camel_case_fields() {
        let comment = Comment::new("hi".into(), ObjectId::new(), ObjectId::new());
        let doc = mongodb::bson::to_document(&comment).unwrap();
        assert!(doc.get_object_id("_id").is_ok());
        assert!(doc.get_datetime("createdAt").is_ok());
        assert!(doc.get_datetime("updatedAt").is_ok());
        assert_eq!(doc.get_str("content").unwrap(), "hi");
    }
}
