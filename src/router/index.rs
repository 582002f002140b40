use crate::comment::index::comment_routes;
use crate::middleware::error_handler::{json_error_handler, path_error_handler, query_error_handler};
use actix_web::web;

pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(web::QueryConfig::default().error_handler(query_error_handler))
        .app_data(web::PathConfig::default().error_handler(path_error_handler));
    cfg.configure(comment_routes);
}
