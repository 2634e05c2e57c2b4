//! Application configuration module
//!
//! Type-safe configuration loading from environment variables using the
//! `config` and `dotenvy` crates. Values are read with the `SLIDECAST`
//! prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use slidecast::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! ```

mod engine;
mod error;
mod realtime;
mod telemetry;

pub use engine::EngineConfig;
pub use error::{ConfigError, ValidationError};
pub use realtime::RealtimeConfig;
pub use telemetry::init_tracing;

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Event pipeline tuning (retry limits)
    #[serde(default)]
    pub engine: EngineConfig,

    /// Realtime transport settings (channel capacity)
    #[serde(default)]
    pub realtime: RealtimeConfig,

    /// Rust log filter directive
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// Loads a `.env` file if present, then reads environment variables
    /// with the `SLIDECAST` prefix:
    ///
    /// - `SLIDECAST__ENGINE__CAS_RETRY_LIMIT=5` -> `engine.cas_retry_limit = 5`
    /// - `SLIDECAST__REALTIME__CHANNEL_CAPACITY=256` -> `realtime.channel_capacity = 256`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into the
    /// expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("SLIDECAST")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.engine.validate()?;
        self.realtime.validate()?;
        Ok(())
    }
}

fn default_log_level() -> String {
    "info,slidecast=debug".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Env vars are process-global, so these tests must not interleave.
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn clear_env() {
        env::remove_var("SLIDECAST__ENGINE__CAS_RETRY_LIMIT");
        env::remove_var("SLIDECAST__REALTIME__CHANNEL_CAPACITY");
        env::remove_var("SLIDECAST__LOG_LEVEL");
    }

    #[test]
    fn load_with_no_env_uses_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let config = AppConfig::load().unwrap();

        assert_eq!(config.engine.cas_retry_limit, 3);
        assert_eq!(config.realtime.channel_capacity, 128);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn load_reads_nested_overrides() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("SLIDECAST__ENGINE__CAS_RETRY_LIMIT", "5");
        env::set_var("SLIDECAST__REALTIME__CHANNEL_CAPACITY", "256");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.engine.cas_retry_limit, 5);
        assert_eq!(config.realtime.channel_capacity, 256);
    }

    #[test]
    fn load_reads_log_level() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("SLIDECAST__LOG_LEVEL", "debug");
        let result = AppConfig::load();
        clear_env();

        assert_eq!(result.unwrap().log_level, "debug");
    }

    #[test]
    fn validate_rejects_bad_overrides() {
        let config = AppConfig {
            engine: EngineConfig { cas_retry_limit: 0 },
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
