use chrono::NaiveDate;
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
        }
    }
}

fn default_port() -> u16 {
    8080
}

#[derive(Debug, Deserialize, Clone)]
pub struct CatalogConfig {
    /// First calendar day the demo yards publish slots for.
    #[serde(default = "default_first_date")]
    pub first_date: NaiveDate,
    /// How many consecutive days of slots each yard gets.
    #[serde(default = "default_availability_days")]
    pub availability_days: u32,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            first_date: default_first_date(),
            availability_days: default_availability_days(),
        }
    }
}

fn default_first_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 11, 13).expect("valid calendar date")
}

fn default_availability_days() -> u32 {
    30
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            // Start off by merging in the "default" configuration file.
            // Every field has a serde default, so a missing file still boots.
            .add_source(config::File::with_name("config/default").required(false))
            // Add in the current environment file
            // Default to 'development' env
            // Note that this file is _optional_
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Add in a local configuration file
            // This file shouldn't be checked in to git
            .add_source(config::File::with_name("config/local").required(false))
            // Add in settings from the environment (with a prefix of BARKYARD)
            // Eg.. `BARKYARD__SERVER__PORT=9090` would set the server port
            .add_source(config::Environment::with_prefix("BARKYARD").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_cover_every_field() {
        let config: Config = serde_json::from_str("{}").expect("empty object deserializes");
        assert_eq!(config.server.port, 8080);
        assert_eq!(
            config.catalog.first_date,
            NaiveDate::from_ymd_opt(2025, 11, 13).unwrap()
        );
        assert_eq!(config.catalog.availability_days, 30);
    }

    #[test]
    fn test_partial_section_keeps_other_defaults() {
        let config: Config =
            serde_json::from_str(r#"{"server": {"port": 9191}}"#).expect("valid config");
        assert_eq!(config.server.port, 9191);
        assert_eq!(config.catalog.availability_days, 30);
    }
}
