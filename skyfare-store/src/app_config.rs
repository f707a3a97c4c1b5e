use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub dataset: DatasetConfig,
    pub models: ModelConfig,
    #[serde(default)]
    pub holidays: HolidayConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatasetConfig {
    /// CSV file holding the historical fare table.
    pub path: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ModelConfig {
    pub base_path: String,
    pub holiday_path: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct HolidayConfig {
    /// JSON feed of {date, name} entries. No feed means no holiday pricing.
    #[serde(default)]
    pub feed_url: Option<String>,
    #[serde(default = "default_fetch_timeout")]
    pub fetch_timeout_seconds: u64,
}

impl Default for HolidayConfig {
    fn default() -> Self {
        Self {
            feed_url: None,
            fetch_timeout_seconds: default_fetch_timeout(),
        }
    }
}

fn default_fetch_timeout() -> u64 {
    10
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct DisplayConfig {
    /// Fixed seed for the display enricher; reproducible card fields when set.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            // Start off by merging in the "default" configuration file
            .add_source(config::File::with_name("config/default"))
            // Add in the current environment file
            // Default to 'development' env
            // Note that this file is _optional_
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Add in a local configuration file
            // This file shouldn't be checked in to git
            .add_source(config::File::with_name("config/local").required(false))
            // Add in settings from the environment (with a prefix of SKYFARE)
            // Eg.. `SKYFARE__SERVER__PORT=9090` would set the server port
            .add_source(config::Environment::with_prefix("SKYFARE").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}
