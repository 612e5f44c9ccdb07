#![allow(dead_code)]

use artifact_service::config::{ArtifactConfig, MongoConfig};
use artifact_service::services::DbHandle;
use artifact_service::Application;
use reqwest::Client;
use secrecy::SecretString;
use serde_json::Value;
use service_core::config::Config as CoreConfig;
use uuid::Uuid;

pub fn test_mongodb_uri() -> String {
    std::env::var("TEST_MONGODB_URI").unwrap_or_else(|_| "mongodb://localhost:27017".to_string())
}

pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub db: DbHandle,
    pub db_name: String,
    pub client: Client,
}

impl TestApp {
    pub async fn spawn() -> Self {
        let db_name = format!("artifacts_test_{}", Uuid::new_v4().simple());

        let config = ArtifactConfig {
            common: CoreConfig { port: 0 },
            mongodb: MongoConfig {
                uri: SecretString::new(test_mongodb_uri()),
                database: db_name.clone(),
            },
        };

        let app = Application::build(config)
            .await
            .expect("Failed to build test application");

        let port = app.port();
        let db = app.db().clone();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for HTTP server to be ready by polling the root route
        let client = Client::new();
        for _ in 0..50 {
            if client.get(&address).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }

        TestApp {
            address,
            port,
            db,
            db_name,
            client,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.address, path)
    }

    pub async fn get_json(&self, path: &str) -> (u16, Value) {
        let response = self
            .client
            .get(self.url(path))
            .send()
            .await
            .expect("Failed to execute request");
        let status = response.status().as_u16();
        let body = response.json().await.expect("Failed to parse JSON");
        (status, body)
    }

    /// Inserts an artifact through the API and returns its id.
    pub async fn create_artifact(&self, body: Value) -> String {
        let response: Value = self
            .client
            .post(self.url("/artifacts"))
            .json(&body)
            .send()
            .await
            .expect("Failed to execute request")
            .json()
            .await
            .expect("Failed to parse JSON");

        response["insertedId"]
            .as_str()
            .expect("insertedId should be a hex string")
            .to_string()
    }

    pub async fn cleanup(&self) {
        if let Ok(db) = self.db.get().await {
            let _ = db.client().database(&self.db_name).drop(None).await;
        }
    }
}
