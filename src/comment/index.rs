use super::controller::{add_comment, delete_comment, get_video_comments, update_comment};
use crate::middleware::auth::verify_token;
use actix_web::web;
use actix_web_httpauth::middleware::HttpAuthentication;

pub fn comment_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/videos/{video_id}/comments")
            .wrap(HttpAuthentication::bearer(verify_token))
            .route("", web::get().to(get_video_comments))
            .route("", web::post().to(add_comment)),
    );
    cfg.service(
        web::scope("/comments")
            .wrap(HttpAuthentication::bearer(verify_token))
            .route("/{comment_id}", web::patch().to(update_comment))
            .route("/{comment_id}", web::delete().to(delete_comment)),
    );
}
