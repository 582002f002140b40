use log::{error, info};
use mongodb::bson::doc;
use mongodb::{Client, options::ClientOptions};
use std::error::Error;

use crate::utils::config::AppConfig;

pub struct Database {
    pub db: mongodb::Database,
}

impl Database {
    pub async fn init(config: &AppConfig) -> Result<Self, Box<dyn Error>> {
        let mut client_options = ClientOptions::parse(&config.mongodb_uri).await?;
        client_options.app_name = Some(config.service_name.clone());

        let client = Client::with_options(client_options)?;

        // Ping the server to see if you can connect to the cluster
        client
            .database("admin")
            .run_command(doc! {"ping": 1})
            .await?;

        info!("Connected successfully to MongoDB");

        let db = client.database(&config.database_name);
        Ok(Self { db })
    }
}

// This function is a convenience wrapper around Database::init()
pub async fn connect_to_mongo(config: &AppConfig) -> Result<mongodb::Database, Box<dyn Error>> {
    let database = Database::init(config).await.map_err(|e| {
        error!("Failed to initialize database: {:?}", e);
        e
    })?;
    Ok(database.db)
}
