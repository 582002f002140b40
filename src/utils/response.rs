use actix_web::body::BoxBody;
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, Responder};
use serde::Serialize;

/// Success envelope shared by every handler.
///
/// Handlers return `Result<ApiResponse<T>, CustomError>`; the error side is
/// rendered by `CustomError`'s `ResponseError` impl, so the two envelopes are
/// produced in exactly one place each.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    pub status_code: u16,
    pub data: T,
    pub message: String,
    pub success: bool,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn new(status: StatusCode, data: T, message: impl Into<String>) -> Self {
        ApiResponse {
            status_code: status.as_u16(),
            data,
            message: message.into(),
            success: status.as_u16() < 400,
        }
    }

    pub fn ok(data: T, message: impl Into<String>) -> Self {
        Self::new(StatusCode::OK, data, message)
    }

    pub fn created(data: T, message: impl Into<String>) -> Self {
        Self::new(StatusCode::CREATED, data, message)
    }
}

impl<T: Serialize> Responder for ApiResponse<T> {
    type Body = BoxBody;

    fn respond_to(self, _req: &HttpRequest) -> HttpResponse<Self::Body> {
        let status =
            StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        HttpResponse::build(status).json(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use actix_web::test::TestRequest;

    #[actix_web::test]
    async fn created_envelope_uses_201() {
        let req = TestRequest::default().to_http_request();
        let response = ApiResponse::created(vec!["a"], "Comment is added successfully")
            .respond_to(&req);
        assert_eq!(response.status(), StatusCode::CREATED);

        let body = to_bytes(response.into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "statusCode": 201,
                "data": ["a"],
                "message": "Comment is added successfully",
                "success": true
            })
        );
    }

    #[test]
    fn success_flag_follows_status() {
        assert!(ApiResponse::ok((), "fine").success);
        assert!(!ApiResponse::new(StatusCode::BAD_REQUEST, (), "nope").success);
    }
}
