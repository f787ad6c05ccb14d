//! Seam to the object store holding the watched resource.
//!
//! The watcher owns no storage. Everything it needs from the outside world
//! is a single read path keyed by resource name; [`MemResourceStore`] is the
//! in-process implementation used by the reference daemon and the test
//! harness.

mod mem_store;
mod resource;

pub use mem_store::*;
pub use resource::*;


use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::FetchError;

/// Read access to the object store holding the watched singleton resource.
///
/// `Ok(None)` means the resource does not exist, which is not an error for
/// the watcher. Fetch timeouts and endpoint selection are the implementor's
/// concern.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ResourceClient: Send + Sync + 'static {
    async fn get(
        &self,
        name: &str,
    ) -> std::result::Result<Option<TlsPolicyResource>, FetchError>;
}
