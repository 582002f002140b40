use crate::comment::model::{
    CommentView, CommentWithOwner, CreateCommentRequest, ListCommentsQuery, PopulatedComment,
    UpdateCommentRequest,
};
use crate::comment::service::{CommentService, DEFAULT_LIMIT, DEFAULT_PAGE};
use crate::middleware::auth::get_user_id_from_request;
use crate::utils::error::CustomError;
use crate::utils::response::ApiResponse;
use actix_web::{HttpRequest, web};
use mongodb::bson::oid::ObjectId;

/// List a page of comments on a video
/// GET /videos/{video_id}/comments?page=&limit=
pub async fn get_video_comments(
    comment_service: web::Data<CommentService>,
    path: web::Path<String>,
    query: web::Query<ListCommentsQuery>,
) -> Result<ApiResponse<Vec<CommentWithOwner>>, CustomError> {
    let video_id = path.into_inner();
    let page = query.page.unwrap_or(DEFAULT_PAGE);
    let limit = query.limit.unwrap_or(DEFAULT_LIMIT);

    let comments = comment_service
        .list_comments(&video_id, page, limit)
        .await?;

    Ok(ApiResponse::ok(
        comments,
        "Comments are fetched successfully",
    ))
}

/// Add a comment to a video as the authenticated user
/// POST /videos/{video_id}/comments
pub async fn add_comment(
    req: HttpRequest,
    comment_service: web::Data<CommentService>,
    path: web::Path<String>,
    body: web::Json<CreateCommentRequest>,
) -> Result<ApiResponse<CommentView>, CustomError> {
    let user_id_str = get_user_id_from_request(&req)
        .ok_or_else(|| CustomError::UnauthorizedError("Not authenticated".to_string()))?;

    let owner = ObjectId::parse_str(&user_id_str)
        .map_err(|_| CustomError::UnauthorizedError("Invalid user ID in token".to_string()))?;

    let comment = comment_service
        .add_comment(&path.into_inner(), body.content(), owner)
        .await?;

    Ok(ApiResponse::created(
        CommentView::from(comment),
        "Comment is added successfully",
    ))
}

/// Replace a comment's content
/// PATCH /comments/{comment_id}
pub async fn update_comment(
    comment_service: web::Data<CommentService>,
    path: web::Path<String>,
    body: web::Json<UpdateCommentRequest>,
) -> Result<ApiResponse<PopulatedComment>, CustomError> {
    let comment = comment_service
        .update_comment(&path.into_inner(), body.content())
        .await?;

    Ok(ApiResponse::created(
        comment,
        "Comment is updated successfully",
    ))
}

/// Delete a comment
/// DELETE /comments/{comment_id}
pub async fn delete_comment(
    comment_service: web::Data<CommentService>,
    path: web::Path<String>,
) -> Result<ApiResponse<CommentView>, CustomError> {
    let comment = comment_service
        .delete_comment(&path.into_inner())
        .await?;

    Ok(ApiResponse::ok(
        CommentView::from(comment),
        "Comment is deleted successfully",
    ))
}
