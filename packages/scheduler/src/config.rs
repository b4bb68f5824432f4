use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

pub use common::config::GenerationConfig;

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub database: DatabaseConfig,
    #[serde(default)]
    pub generation: GenerationConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        let s = Config::builder()
            .set_default("database.url", "postgres://localhost:5432/pageant")?
            .set_default("generation.sweep_interval_secs", 3600_i64)?
            // Load from config/config.toml
            .add_source(File::with_name("config/config").required(false))
            // Override from environment (e.g., PAGEANT__DATABASE__URL)
            .add_source(Environment::with_prefix("PAGEANT").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}
