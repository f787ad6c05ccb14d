// -
// Resource naming

/// Well-known name of the singleton TLS policy resource. The watcher only
/// ever fetches this one object; no other resources are observed.
pub const TLS_POLICY_RESOURCE_NAME: &str = "cluster";

/// Environment variable prefix for settings overrides
pub(crate) const ENV_PREFIX: &str = "TLS_WATCH";
