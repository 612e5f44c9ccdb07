use crate::error::AppError;
use config::{Config as Cfg, File};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_port() -> u16 {
    5000
}

/// An empty `PORT=` counts as unset.
fn port_override(raw: Option<String>) -> Option<String> {
    raw.filter(|p| !p.trim().is_empty())
}

impl Config {
    /// Loads `.env`, an optional `configuration` file, `APP__*` variables and
    /// finally the bare `PORT` variable, in increasing priority.
    pub fn load() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let config = Cfg::builder()
            .add_source(File::with_name("configuration").required(false))
            .add_source(config::Environment::with_prefix("APP").separator("__"))
            .set_override_option("port", port_override(std::env::var("PORT").ok()))?
            .build()?;

        Ok(config.try_deserialize()?)
    }
}
