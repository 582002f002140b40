use std::env;

use log::warn;

use crate::utils::error::CustomError;

/// Runtime settings, read once at startup and shared as `web::Data<AppConfig>`.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub mongodb_uri: String,
    pub database_name: String,
    pub jwt_secret: String,
    pub service_name: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, CustomError> {
        let port = match env::var("PORT") {
            Ok(raw) => raw.parse::<u16>().map_err(|_| {
                CustomError::InternalServerError(format!("PORT is not a valid port: {}", raw))
            })?,
            Err(_) => 8000,
        };

        let jwt_secret = env::var("JWT_SECRET").unwrap_or_else(|_| {
            warn!("JWT_SECRET is not set, falling back to the development secret");
            "secret".to_string()
        });

        Ok(AppConfig {
            host: env::var("HOST").unwrap_or_else(|_| "localhost".to_string()),
            port,
            mongodb_uri: env::var("MONGODB_URI")
                .unwrap_or_else(|_| "mongodb://localhost:27017".to_string()),
            database_name: env::var("DATABASE_NAME").unwrap_or_else(|_| "videotube".to_string()),
            jwt_secret,
            service_name: env::var("SERVICE_NAME").unwrap_or_else(|_| "Unknown".to_string()),
        })
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            host: "localhost".to_string(),
            port: 8000,
            mongodb_uri: "mongodb://localhost:27017".to_string(),
            database_name: "videotube".to_string(),
            jwt_secret: "secret".to_string(),
            service_name: "Unknown".to_string(),
        }
    }
}
