use actix_web::dev::ServiceResponse;
use actix_web::error::{JsonPayloadError, PathError, QueryPayloadError};
use actix_web::middleware::ErrorHandlerResponse;
use actix_web::{Error, HttpRequest, HttpResponse, Result};

use crate::utils::error::{CustomError, ErrorEnvelope};

/// True when the response was already rendered from a [`CustomError`].
pub fn is_rendered(res: &ServiceResponse<impl Sized>) -> bool {
    res.response()
        .error()
        .and_then(|e| e.as_error::<CustomError>())
        .is_some()
}

/// Rewrite framework-generated error responses (auth rejections, method
/// mismatches, payload limits) into the error envelope.
pub fn handle_error<B>(res: ServiceResponse<B>) -> Result<ErrorHandlerResponse<B>> {
    if is_rendered(&res) {
        return Ok(ErrorHandlerResponse::Response(res.map_into_left_body()));
    }

    let status_code = res.status();
    let message = status_code.canonical_reason().unwrap_or("Unknown error");
    let errors = res
        .response()
        .error()
        .map(|e| e.to_string())
        .filter(|e| !e.is_empty())
        .into_iter()
        .collect();

    let new_response = HttpResponse::build(status_code).json(ErrorEnvelope {
        status_code: status_code.as_u16(),
        message,
        success: false,
        errors,
    });

    let (req, _) = res.into_parts();
    let res = ServiceResponse::new(req, new_response.map_into_right_body());

    Ok(ErrorHandlerResponse::Response(res))
}

pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> Error {
    CustomError::BadRequestError(format!("Invalid request body: {}", err)).into()
}

pub fn query_error_handler(err: QueryPayloadError, _req: &HttpRequest) -> Error {
    CustomError::BadRequestError(format!("Invalid query parameters: {}", err)).into()
}

pub fn path_error_handler(err: PathError, _req: &HttpRequest) -> Error {
    CustomError::BadRequestError(format!("Invalid path parameters: {}", err)).into()
}
