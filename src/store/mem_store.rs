use async_trait::async_trait;
use dashmap::DashMap;
use tokio::sync::watch;
use tracing::debug;

use super::ResourceClient;
use super::TlsPolicyResource;
use crate::FetchError;

/// In-memory object store keyed by resource name.
///
/// Every mutation bumps a revision counter; [`MemResourceStore::subscribe`]
/// hands out a `watch` receiver the controller uses as its change trigger.
/// The revision is a wake-up signal only, never a source of truth: the
/// watcher always re-fetches and re-resolves on every cycle.
pub struct MemResourceStore {
    objects: DashMap<String, TlsPolicyResource>,
    revision_tx: watch::Sender<u64>,
}

impl MemResourceStore {
    pub fn new() -> Self {
        let (revision_tx, _) = watch::channel(0);
        MemResourceStore {
            objects: DashMap::new(),
            revision_tx,
        }
    }

    /// Change-trigger receiver; fires after every `put`/`remove`.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.revision_tx.subscribe()
    }

    /// Create or replace a resource under its own name.
    pub fn put(
        &self,
        resource: TlsPolicyResource,
    ) {
        debug!("store put: {:?}", resource.name);
        self.objects.insert(resource.name.clone(), resource);
        self.bump();
    }

    pub fn remove(
        &self,
        name: &str,
    ) {
        if self.objects.remove(name).is_some() {
            debug!("store remove: {:?}", name);
            self.bump();
        }
    }

    fn bump(&self) {
        self.revision_tx.send_modify(|revision| *revision += 1);
    }
}

impl Default for MemResourceStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ResourceClient for MemResourceStore {
    async fn get(
        &self,
        name: &str,
    ) -> std::result::Result<Option<TlsPolicyResource>, FetchError> {
        Ok(self.objects.get(name).map(|entry| entry.value().clone()))
    }
}
