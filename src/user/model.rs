use mongodb::bson::oid::ObjectId;
use mongodb::bson::serde_helpers::serialize_object_id_as_hex_string;
use serde::{Deserialize, Serialize};

/// A document of the `users` collection. Accounts are owned by the auth
/// service; this crate only ever reads them.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub username: String,
    pub fullname: String,
    pub avatar: Option<String>,
}

/// Owner embedded in a listed comment.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct OwnerSummary {
    #[serde(rename = "_id", serialize_with = "serialize_object_id_as_hex_string")]
    pub id: ObjectId,
    pub fullname: Option<String>,
    pub avatar: Option<String>,
}

/// Owner embedded in an updated comment.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct UserSummary {
    #[serde(rename = "_id", serialize_with = "serialize_object_id_as_hex_string")]
    pub id: ObjectId,
    pub username: Option<String>,
    pub avatar: Option<String>,
}

impl From<&User> for OwnerSummary {
    fn from(user: &User) -> Self {
        OwnerSummary {
            id: user.id,
            fullname: Some(user.fullname.clone()),
            avatar: user.avatar.clone(),
        }
    }
}

impl From<&User> for UserSummary {
    fn from(user: &User) -> Self {
        UserSummary {
            id: user.id,
            username: Some(user.username.clone()),
            avatar: user.avatar.clone(),
        }
    }
}
