use serde::Deserialize;

use crate::constants::TLS_POLICY_RESOURCE_NAME;

/// Core watcher parameters.
#[derive(Debug, Deserialize, Clone)]
pub struct WatcherConfig {
    /// Well-known name of the watched singleton resource
    /// Default: "cluster"
    #[serde(default = "default_resource_name")]
    pub resource_name: String,

    /// Periodic resync interval (unit: milliseconds)
    /// Default: 30000
    #[serde(default = "default_resync_interval_ms")]
    pub resync_interval_ms: u64,
}

impl Default for WatcherConfig {
    fn default() -> Self {
        WatcherConfig {
            resource_name: default_resource_name(),
            resync_interval_ms: default_resync_interval_ms(),
        }
    }
}

// Default implementations
fn default_resource_name() -> String {
    TLS_POLICY_RESOURCE_NAME.to_string()
}
fn default_resync_interval_ms() -> u64 {
    30_000
}
