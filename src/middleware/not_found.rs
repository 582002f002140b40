use actix_web::http::StatusCode;
use actix_web::middleware::ErrorHandlerResponse;
use actix_web::{HttpResponse, Result, dev::ServiceResponse};

use crate::middleware::error_handler::is_rendered;
use crate::utils::error::ErrorEnvelope;

pub fn not_found<B>(res: ServiceResponse<B>) -> Result<ErrorHandlerResponse<B>> {
    // "No comments found" and friends are already enveloped
    if is_rendered(&res) {
        return Ok(ErrorHandlerResponse::Response(res.map_into_left_body()));
    }

    let new_response = HttpResponse::build(StatusCode::NOT_FOUND).json(ErrorEnvelope {
        status_code: StatusCode::NOT_FOUND.as_u16(),
        message: "Route does not exist",
        success: false,
        errors: Vec::new(),
    });
    let (req, _) = res.into_parts();
    let res = ServiceResponse::new(req, new_response.map_into_right_body());

    Ok(ErrorHandlerResponse::Response(res))
}
