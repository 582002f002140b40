use std::sync::Arc;

use log::{debug, warn};
use mongodb::bson::oid::ObjectId;

use crate::comment::model::{Comment, CommentWithOwner, PopulatedComment};
use crate::comment::store::CommentStore;
use crate::utils::error::CustomError;

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_LIMIT: i64 = 10;

pub struct CommentService {
    store: Arc<dyn CommentStore>,
}

/// `Some` only for content with at least one non-whitespace character.
fn non_blank(content: Option<&str>) -> Option<&str> {
    content.filter(|content| !content.trim().is_empty())
}

impl CommentService {
    pub fn new(store: Arc<dyn CommentStore>) -> Self {
        CommentService { store }
    }

    /// A page of a video's comments, newest first.
    ///
    /// An empty page is reported as `NotFoundError`, whether the video has no
    /// comments at all or `page` lies past the last one.
    pub async fn list_comments(
        &self,
        video_id: &str,
        page: i64,
        limit: i64,
    ) -> Result<Vec<CommentWithOwner>, CustomError> {
        let video_id = ObjectId::parse_str(video_id).map_err(|_| {
            CustomError::BadRequestError("Invalid request to get comments".to_string())
        })?;
        if page < 1 {
            return Err(CustomError::BadRequestError("Invalid page number".to_string()));
        }
        if limit < 1 {
            return Err(CustomError::BadRequestError("Invalid limit".to_string()));
        }

        // saturate: an offset past any real collection just yields an empty page
        let skip = (page - 1).checked_mul(limit).unwrap_or(i64::MAX) as u64;

        let comments = self.store.list_for_video(&video_id, skip, limit).await?;
        if comments.is_empty() {
            return Err(CustomError::NotFoundError("No comments found".to_string()));
        }

        debug!(
            "fetched {} comments for video {} (page {}, limit {})",
            comments.len(),
            video_id,
            page,
            limit
        );
        Ok(comments)
    }

    pub async fn add_comment(
        &self,
        video_id: &str,
        content: Option<&str>,
        owner: ObjectId,
    ) -> Result<Comment, CustomError> {
        if video_id.is_empty() {
            return Err(CustomError::BadRequestError(
                "Invalid request to add comment".to_string(),
            ));
        }
        let content = non_blank(content).ok_or_else(|| {
            CustomError::BadRequestError("Content is required to add a comment".to_string())
        })?;

        // the id format is not validated up front; a lookup by a malformed
        // id is a failed store call, not a missing video
        let video_id = ObjectId::parse_str(video_id).map_err(|_| {
            warn!("video lookup with malformed id {:?}", video_id);
            CustomError::InternalServerError(
                "Something went wrong while fetching the video".to_string(),
            )
        })?;
        if !self.store.video_exists(&video_id).await? {
            return Err(CustomError::NotFoundError("Video not found".to_string()));
        }

        let comment = self
            .store
            .insert(Comment::new(content.to_string(), video_id, owner))
            .await?;

        debug!("comment {} added to video {} by {}", comment.id, video_id, owner);
        Ok(comment)
    }

    /// Replaces a comment's content. A missing comment surfaces as
    /// `InternalServerError`, the same as a failed write.
    pub async fn update_comment(
        &self,
        comment_id: &str,
        content: Option<&str>,
    ) -> Result<PopulatedComment, CustomError> {
        if comment_id.is_empty() {
            return Err(CustomError::BadRequestError(
                "Invalid request to update a comment".to_string(),
            ));
        }
        let content = non_blank(content).ok_or_else(|| {
            CustomError::BadRequestError("Content is required to add a comment".to_string())
        })?;

        let updated = match ObjectId::parse_str(comment_id) {
            Ok(id) => self.store.update_content(&id, content).await?,
            Err(_) => None,
        };

        updated.ok_or_else(|| {
            warn!("update of comment {} matched nothing", comment_id);
            CustomError::InternalServerError(
                "Something went wrong while adding the comment".to_string(),
            )
        })
    }

    /// Deletes a comment. A missing comment surfaces as `InternalServerError`.
    pub async fn delete_comment(&self, comment_id: &str) -> Result<Comment, CustomError> {
        if comment_id.is_empty() {
            return Err(CustomError::BadRequestError(
                "Invalid request to delete a comment".to_string(),
            ));
        }

        let deleted = match ObjectId::parse_str(comment_id) {
            Ok(id) => self.store.delete(&id).await?,
            Err(_) => None,
        };

        deleted.ok_or_else(|| {
            warn!("delete of comment {} matched nothing", comment_id);
            CustomError::InternalServerError(
                "Something went wrong while deleting the comment".to_string(),
            )
        })
    }
}
