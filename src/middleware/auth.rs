use actix_web::{Error, HttpMessage, dev::ServiceRequest, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::utils::config::AppConfig;
use crate::utils::error::CustomError;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Hex ObjectId of the authenticated user.
    pub id: String,
    pub exp: usize,
}

/// Verify the bearer JWT and attach its claims to the request.
pub async fn verify_token(
    req: ServiceRequest,
    credentials: BearerAuth,
) -> Result<ServiceRequest, (Error, ServiceRequest)> {
    let secret = match req.app_data::<web::Data<AppConfig>>() {
        Some(config) => config.jwt_secret.clone(),
        None => {
            return Err((
                CustomError::InternalServerError("Authentication is not configured".into())
                    .into(),
                req,
            ));
        }
    };

    match decode::<Claims>(
        credentials.token(),
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    ) {
        Ok(token_data) => {
            req.extensions_mut().insert(token_data.claims);
            Ok(req)
        }
        Err(e) => {
            debug!("rejected bearer token: {}", e);
            Err((
                CustomError::UnauthorizedError("Invalid access token".into()).into(),
                req,
            ))
        }
    }
}

/// Issue a token for `user_id` that expires after `ttl_hours`.
pub fn create_token(user_id: &str, secret: &str, ttl_hours: i64) -> Result<String, CustomError> {
    let expiration = chrono::Utc::now()
        .checked_add_signed(chrono::Duration::hours(ttl_hours))
        .ok_or_else(|| CustomError::InternalServerError("Token expiry out of range".into()))?
        .timestamp() as usize;

    let claims = Claims {
        id: user_id.to_owned(),
        exp: expiration,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|_| CustomError::InternalServerError("Token generation failed".to_string()))
}

/// Get user ID from request extensions (use after auth middleware)
pub fn get_user_id_from_request(req: &actix_web::HttpRequest) -> Option<String> {
    req.extensions()
        .get::<Claims>()
        .map(|claims| claims.id.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issued_token_round_trips_through_validation() {
        let token = create_token("64b7f0c2a1b2c3d4e5f60718", "test-secret", 1).unwrap();
        let decoded = decode::<Claims>(
            &token,
            &DecodingKey::from_secret(b"test-secret"),
            &Validation::default(),
        )
        .unwrap();
        assert_eq!(decoded.claims.id, "64b7f0c2a1b2c3d4e5f60718");
    }

    #[test]
    fn token_signed_with_other_secret_is_rejected() {
        let token = create_token("64b7f0c2a1b2c3d4e5f60718", "one", 1).unwrap();
        let result = decode::<Claims>(
            &token,
            &DecodingKey::from_secret(b"two"),
            &Validation::default(),
        );
        assert!(result.is_err());
    }
}
