//! Configuration management for the profile watcher.
//!
//! Provides configuration loading from multiple sources with priority:
//! 1. Default values (hardcoded)
//! 2. Optional TOML config file
//! 3. Environment variables (highest priority)

mod retry;
mod watcher;
pub use retry::*;
pub use watcher::*;


//---
use config::Config;
use config::ConfigError;
use config::Environment;
use config::File;
use serde::Deserialize;

use crate::constants::ENV_PREFIX;
use crate::Result;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Settings {
    /// Core watcher parameters
    #[serde(default)]
    pub watcher: WatcherConfig,
    /// Retry policies for reconcile cycles
    #[serde(default)]
    pub retry: RetryPolicies,
}

impl Settings {
    /// Load configuration with proper priority ordering:
    /// 1. Optional TOML file
    /// 2. `TLS_WATCH_*` environment variables (highest priority)
    ///
    /// # Arguments
    /// * `config_path` - Optional path to a TOML configuration file
    pub fn load(config_path: Option<&str>) -> Result<Self> {
        let mut builder = Config::builder();

        if let Some(path) = config_path {
            builder = builder.add_source(File::with_name(path));
        }

        let merged = builder
            .add_source(Environment::with_prefix(ENV_PREFIX).prefix_separator("_").separator("__"))
            .build()?;

        let settings: Settings = merged.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    /// Cheap structural checks before the watcher starts.
    pub fn validate(&self) -> Result<()> {
        if self.watcher.resource_name.is_empty() {
            return Err(ConfigError::Message("watcher.resource_name must not be empty".to_string()).into());
        }
        if self.watcher.resync_interval_ms == 0 {
            return Err(ConfigError::Message("watcher.resync_interval_ms must be positive".to_string()).into());
        }
        if self.retry.reconcile.timeout_ms == 0 {
            return Err(ConfigError::Message("retry.reconcile.timeout_ms must be positive".to_string()).into());
        }
        Ok(())
    }
}
