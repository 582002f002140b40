use async_trait::async_trait;
use futures_util::TryStreamExt;
use log::error;
use mongodb::bson::{DateTime, Document, doc, from_document, oid::ObjectId};
use mongodb::options::ReturnDocument;
use mongodb::{Collection, Database};
use serde::de::DeserializeOwned;

use crate::comment::model::{Comment, CommentWithOwner, PopulatedComment};
use crate::utils::error::CustomError;

/// Storage behind [`CommentService`](crate::comment::service::CommentService).
///
/// Each method is a single store round trip. Missing documents are reported
/// as `Ok(None)` / `Ok(false)`; only store failures come back as errors.
#[async_trait]
pub trait CommentStore: Send + Sync {
    async fn video_exists(&self, video_id: &ObjectId) -> Result<bool, CustomError>;

    /// Comments of a video, newest first, each joined with its owner.
    /// Comments whose owner does not resolve are dropped after paging.
    async fn list_for_video(
        &self,
        video_id: &ObjectId,
        skip: u64,
        limit: i64,
    ) -> Result<Vec<CommentWithOwner>, CustomError>;

    async fn insert(&self, comment: Comment) -> Result<Comment, CustomError>;

    /// Replaces `content`, bumps `updatedAt` and returns the populated result.
    async fn update_content(
        &self,
        comment_id: &ObjectId,
        content: &str,
    ) -> Result<Option<PopulatedComment>, CustomError>;

    async fn delete(&self, comment_id: &ObjectId) -> Result<Option<Comment>, CustomError>;
}

pub fn list_comments_pipeline(video_id: &ObjectId, skip: u64, limit: i64) -> Vec<Document> {
    vec![
        doc! { "$match": { "video": video_id } },
        doc! { "$sort": { "createdAt": -1, "_id": -1 } },
        doc! { "$skip": skip as i64 },
        doc! { "$limit": limit },
        doc! {
            "$lookup": {
                "from": "users",
                "localField": "owner",
                "foreignField": "_id",
                "as": "owner"
            }
        },
        doc! { "$unwind": "$owner" },
        doc! {
            "$project": {
                "_id": 1,
                "content": 1,
                "createdAt": 1,
                "owner": { "_id": 1, "fullname": 1, "avatar": 1 }
            }
        },
    ]
}

pub fn populated_comment_pipeline(comment_id: &ObjectId) -> Vec<Document> {
    vec![
        doc! { "$match": { "_id": comment_id } },
        doc! {
            "$lookup": {
                "from": "users",
                "localField": "owner",
                "foreignField": "_id",
                "as": "owner"
            }
        },
        doc! { "$unwind": { "path": "$owner", "preserveNullAndEmptyArrays": true } },
        doc! {
            "$lookup": {
                "from": "videos",
                "localField": "video",
                "foreignField": "_id",
                "as": "video"
            }
        },
        doc! { "$unwind": { "path": "$video", "preserveNullAndEmptyArrays": true } },
        doc! {
            "$project": {
                "_id": 1,
                "content": 1,
                "createdAt": 1,
                "updatedAt": 1,
                "owner._id": 1,
                "owner.username": 1,
                "owner.avatar": 1,
                "video._id": 1,
                "video.title": 1
            }
        },
    ]
}

pub struct MongoCommentStore {
    comments: Collection<Comment>,
    videos: Collection<Document>,
}

impl MongoCommentStore {
    pub fn new(db: &Database) -> Self {
        MongoCommentStore {
            comments: db.collection::<Comment>("comments"),
            videos: db.collection::<Document>("videos"),
        }
    }

    async fn aggregate<T: DeserializeOwned>(
        &self,
        pipeline: Vec<Document>,
    ) -> Result<Vec<T>, CustomError> {
        let cursor = self.comments.aggregate(pipeline).await.map_err(|e| {
            error!("comment aggregation failed: {}", e);
            CustomError::InternalServerError(format!("Failed to fetch comments: {}", e))
        })?;

        let documents: Vec<Document> = cursor.try_collect().await.map_err(|e| {
            error!("draining comment cursor failed: {}", e);
            CustomError::InternalServerError(format!("Failed to collect comments: {}", e))
        })?;

        documents
            .into_iter()
            .map(|document| {
                from_document::<T>(document).map_err(|e| {
                    error!("undecodable comment document: {}", e);
                    CustomError::InternalServerError(format!("Failed to decode comment: {}", e))
                })
            })
            .collect()
    }
}

#[async_trait]
impl CommentStore for MongoCommentStore {
    async fn video_exists(&self, video_id: &ObjectId) -> Result<bool, CustomError> {
        let video = self
            .videos
            .find_one(doc! { "_id": video_id })
            .projection(doc! { "_id": 1 })
            .await
            .map_err(|e| {
                error!("video lookup failed: {}", e);
                CustomError::InternalServerError(format!("Failed to fetch video: {}", e))
            })?;

        Ok(video.is_some())
    }

    async fn list_for_video(
        &self,
        video_id: &ObjectId,
        skip: u64,
        limit: i64,
    ) -> Result<Vec<CommentWithOwner>, CustomError> {
        self.aggregate(list_comments_pipeline(video_id, skip, limit))
            .await
    }

    async fn insert(&self, comment: Comment) -> Result<Comment, CustomError> {
        self.comments.insert_one(&comment).await.map_err(|e| {
            error!("comment insert failed: {}", e);
            CustomError::InternalServerError(format!("Failed to add comment: {}", e))
        })?;

        Ok(comment)
    }

    async fn update_content(
        &self,
        comment_id: &ObjectId,
        content: &str,
    ) -> Result<Option<PopulatedComment>, CustomError> {
        let updated = self
            .comments
            .find_one_and_update(
                doc! { "_id": comment_id },
                doc! {
                    "$set": {
                        "content": content,
                        "updatedAt": DateTime::now()
                    }
                },
            )
            .return_document(ReturnDocument::After)
            .await
            .map_err(|e| {
                error!("comment update failed: {}", e);
                CustomError::InternalServerError(format!("Failed to update comment: {}", e))
            })?;

        if updated.is_none() {
            return Ok(None);
        }

        let populated: Vec<PopulatedComment> = self
            .aggregate(populated_comment_pipeline(comment_id))
            .await?;

        Ok(populated.into_iter().next())
    }

    async fn delete(&self, comment_id: &ObjectId) -> Result<Option<Comment>, CustomError> {
        self.comments
            .find_one_and_delete(doc! { "_id": comment_id })
            .await
            .map_err(|e| {
                error!("comment delete failed: {}", e);
                CustomError::InternalServerError(format!("Failed to delete comment: {}", e))
            })
    }
}
