use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CustomError {
    #[error("Unauthorized: {0}")]
    UnauthorizedError(String),

    #[error("Bad Request: {0}")]
    BadRequestError(String),

    #[error("Not Found: {0}")]
    NotFoundError(String),

    #[error("Internal Server Error: {0}")]
    InternalServerError(String),
}

impl CustomError {
    /// Message shown to the caller, without the variant prefix used in logs.
    pub fn message(&self) -> &str {
        match self {
            CustomError::UnauthorizedError(msg)
            | CustomError::BadRequestError(msg)
            | CustomError::NotFoundError(msg)
            | CustomError::InternalServerError(msg) => msg,
        }
    }
}

/// Body of every failed response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorEnvelope<'a> {
    pub status_code: u16,
    pub message: &'a str,
    pub success: bool,
    pub errors: Vec<String>,
}

impl ResponseError for CustomError {
    fn status_code(&self) -> StatusCode {
        match *self {
            CustomError::UnauthorizedError(..) => StatusCode::UNAUTHORIZED,
            CustomError::BadRequestError(..) => StatusCode::BAD_REQUEST,
            CustomError::NotFoundError(..) => StatusCode::NOT_FOUND,
            CustomError::InternalServerError(..) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status_code = self.status_code();

        HttpResponse::build(status_code).json(ErrorEnvelope {
            status_code: status_code.as_u16(),
            message: self.message(),
            success: false,
            errors: Vec::new(),
        })
    }
}
