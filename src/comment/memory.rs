use std::collections::HashMap;

use async_trait::async_trait;
use mongodb::bson::{DateTime, oid::ObjectId};
use tokio::sync::RwLock;

use crate::comment::model::{Comment, CommentWithOwner, PopulatedComment};
use crate::comment::store::CommentStore;
use crate::user::model::{OwnerSummary, User, UserSummary};
use crate::utils::error::CustomError;
use crate::video::model::{Video, VideoSummary};

#[derive(Default)]
struct State {
    comments: Vec<Comment>,
    users: HashMap<ObjectId, User>,
    videos: HashMap<ObjectId, Video>,
}

/// Process-local [`CommentStore`] with the same paging, ordering and join
/// rules as the MongoDB pipelines.
#[derive(Default)]
pub struct InMemoryCommentStore {
    state: RwLock<State>,
}

impl InMemoryCommentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn add_user(&self, user: User) {
        self.state.write().await.users.insert(user.id, user);
    }

    pub async fn add_video(&self, video: Video) {
        self.state.write().await.videos.insert(video.id, video);
    }

    /// Stores a comment as-is, keeping its timestamps.
    pub async fn seed_comment(&self, comment: Comment) {
        self.state.write().await.comments.push(comment);
    }

    pub async fn find_comment(&self, comment_id: &ObjectId) -> Option<Comment> {
        self.state
            .read()
            .await
            .comments
            .iter()
            .find(|comment| comment.id == *comment_id)
            .cloned()
    }
}

#[async_trait]
impl CommentStore for InMemoryCommentStore {
    async fn video_exists(&self, video_id: &ObjectId) -> Result<bool, CustomError> {
        Ok(self.state.read().await.videos.contains_key(video_id))
    }

    async fn list_for_video(
        &self,
        video_id: &ObjectId,
        skip: u64,
        limit: i64,
    ) -> Result<Vec<CommentWithOwner>, CustomError> {
        let state = self.state.read().await;

        let mut matching: Vec<&Comment> = state
            .comments
            .iter()
            .filter(|comment| comment.video == *video_id)
            .collect();
        matching.sort_by(|a, b| {
            b.created_at
                .timestamp_millis()
                .cmp(&a.created_at.timestamp_millis())
                .then_with(|| b.id.bytes().cmp(&a.id.bytes()))
        });

        let skip = usize::try_from(skip).unwrap_or(usize::MAX);
        let limit = usize::try_from(limit).unwrap_or(0);

        Ok(matching
            .into_iter()
            .skip(skip)
            .take(limit)
            .filter_map(|comment| {
                let owner = state.users.get(&comment.owner)?;
                Some(CommentWithOwner {
                    id: comment.id,
                    content: comment.content.clone(),
                    created_at: comment.created_at,
                    owner: OwnerSummary::from(owner),
                })
            })
            .collect())
    }

    async fn insert(&self, comment: Comment) -> Result<Comment, CustomError> {
        self.state.write().await.comments.push(comment.clone());
        Ok(comment)
    }

    async fn update_content(
        &self,
        comment_id: &ObjectId,
        content: &str,
    ) -> Result<Option<PopulatedComment>, CustomError> {
        let mut state = self.state.write().await;

        let Some(comment) = state
            .comments
            .iter_mut()
            .find(|comment| comment.id == *comment_id)
        else {
            return Ok(None);
        };
        comment.content = content.to_string();
        comment.updated_at = DateTime::now();
        let comment = comment.clone();

        Ok(Some(PopulatedComment {
            id: comment.id,
            content: comment.content,
            video: state.videos.get(&comment.video).map(VideoSummary::from),
            owner: state.users.get(&comment.owner).map(UserSummary::from),
            created_at: comment.created_at,
            updated_at: comment.updated_at,
        }))
    }

    async fn delete(&self, comment_id: &ObjectId) -> Result<Option<Comment>, CustomError> {
        let mut state = self.state.write().await;
        let position = state
            .comments
            .iter()
            .position(|comment| comment.id == *comment_id);

        Ok(position.map(|index| state.comments.remove(index)))
    }
}
