use secrecy::SecretString;
use serde::Deserialize;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;

pub const DEFAULT_CLUSTER: &str = "cluster0.xtebx.mongodb.net";
pub const DEFAULT_APP_NAME: &str = "Cluster0";
pub const DEFAULT_DATABASE: &str = "ArtifactsDB";

#[derive(Debug, Clone, Deserialize)]
pub struct ArtifactConfig {
    #[serde(flatten)]
    pub common: core_config::Config,
    pub mongodb: MongoConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MongoConfig {
    /// Full connection string, credentials included.
    pub uri: SecretString,
    pub database: String,
}

impl ArtifactConfig {
    pub fn load() -> Result<Self, AppError> {
        // Load common config (handles .env, APP__ prefix and PORT)
        let common_config = core_config::Config::load()?;
        let is_prod = env::var("ENVIRONMENT").unwrap_or_else(|_| "dev".to_string()) == "prod";

        let uri = match env::var("MONGODB_URI") {
            Ok(uri) => uri,
            Err(_) => atlas_uri(
                &get_env("DB_USER", None, is_prod)?,
                &get_env("DB_PASS", None, is_prod)?,
                &get_env("MONGODB_CLUSTER", Some(DEFAULT_CLUSTER), is_prod)?,
                &get_env("MONGODB_APP_NAME", Some(DEFAULT_APP_NAME), is_prod)?,
            ),
        };

        Ok(ArtifactConfig {
            common: common_config,
            mongodb: MongoConfig {
                uri: SecretString::new(uri),
                database: get_env("MONGODB_DATABASE", Some(DEFAULT_DATABASE), is_prod)?,
            },
        })
    }
}

/// SRV connection string for a hosted cluster with the credentials embedded.
pub fn atlas_uri(user: &str, password: &str, cluster: &str, app_name: &str) -> String {
    format!(
        "mongodb+srv://{}:{}@{}/?retryWrites=true&w=majority&appName={}",
        user, password, cluster, app_name
    )
}

fn get_env(key: &str, default: Option<&str>, is_prod: bool) -> Result<String, AppError> {
    match env::var(key) {
        Ok(val) => Ok(val),
        Err(_) => {
            if is_prod {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required in production but not set",
                    key
                )))
            } else if let Some(def) = default {
                Ok(def.to_string())
            } else {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required but not set",
                    key
                )))
            }
        }
    }
}
