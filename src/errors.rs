//! TLS Profile Watcher Error Hierarchy
//!
//! Defines error types for the profile change-detection engine, categorized
//! by the phase of a reconcile cycle they belong to (fetch, resolution,
//! retry policy) plus configuration loading failures.

use std::time::Duration;

use config::ConfigError;

#[doc(hidden)]
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Selector could not be resolved into a canonical specification
    #[error(transparent)]
    Resolution(#[from] ResolutionError),

    /// Watched resource could not be retrieved from the store
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// Settings loading and validation failures
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Single reconcile attempt exceeded the per-attempt timeout
    #[error("reconcile attempt timed out after {0:?}")]
    AttemptTimeout(Duration),

    /// Retry policy exhaustion on the reconcile path
    #[error("reconcile failed after {attempts} attempts: {last}")]
    RetriesExhausted {
        attempts: usize,
        #[source]
        last: Box<Error>,
    },

    /// Controller builder finalized without a required component
    #[error("watch controller builder missing required component: {0}")]
    BuilderIncomplete(&'static str),

    #[error("{0}")]
    SignalSendFailed(String),
}

/// Failures turning a profile selector into a canonical specification.
///
/// Resolution failures never mutate watcher state and never notify; the
/// hosting loop retries them with backoff.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolutionError {
    /// Selector references a preset outside the known enumeration
    #[error("unknown TLS security profile type: {0}")]
    UnknownProfile(String),

    /// Custom selector carried no inline specification
    #[error("custom TLS profile selected but no custom settings were provided")]
    MissingCustomProfile,
}

/// Transient failures retrieving the watched resource from the store.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// Store endpoint unavailable (transient infrastructure failure)
    #[error("resource store unavailable: {0}")]
    Unavailable(String),

    /// Store request exceeded its deadline
    #[error("resource fetch timed out after {0:?}")]
    Timeout(Duration),

    /// Stored payload could not be decoded into a policy resource
    #[error("malformed resource payload: {0}")]
    Decode(String),
}
