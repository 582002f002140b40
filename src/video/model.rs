use mongodb::bson::oid::ObjectId;
use mongodb::bson::serde_helpers::serialize_object_id_as_hex_string;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Video {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub title: String,
}

/// Video embedded in an updated comment.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct VideoSummary {
    #[serde(rename = "_id", serialize_with = "serialize_object_id_as_hex_string")]
    pub id: ObjectId,
    pub title: Option<String>,
}

impl From<&Video> for VideoSummary {
    fn from(video: &Video) -> Self {
        VideoSummary {
            id: video.id,
            title: Some(video.title.clone()),
        }
    }
}
