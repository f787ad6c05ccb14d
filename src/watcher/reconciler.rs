use std::sync::Arc;

use tracing::debug;
use tracing::info;

use super::ChangeCallback;
use super::ChangeDispatcher;
use super::WatcherState;
use crate::metrics;
use crate::resolve;
use crate::ResourceClient;
use crate::Result;
use crate::TlsProfileSpec;

/// Outcome of a single reconcile cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReconcileOutcome {
    /// Semantic transition detected; callback invoked with (previous, current)
    Changed,
    /// Resolved specification matches the last-known one
    Unchanged,
    /// Watched resource does not exist; quiet success, nothing to compare
    ResourceAbsent,
}

/// Watches the singleton TLS policy resource and reports each semantic
/// profile transition exactly once.
///
/// The watcher is safe under concurrent [`SecurityProfileWatcher::reconcile`]
/// invocations even though the hosting loop normally serializes them; it
/// must not depend on that external serialization.
pub struct SecurityProfileWatcher<C>
where
    C: ResourceClient,
{
    client: Arc<C>,
    resource_name: String,
    state: WatcherState,
    dispatcher: ChangeDispatcher,
}

impl<C> SecurityProfileWatcher<C>
where
    C: ResourceClient,
{
    pub fn new(
        client: Arc<C>,
        resource_name: impl Into<String>,
        initial_profile: TlsProfileSpec,
        on_change: ChangeCallback,
    ) -> Self {
        SecurityProfileWatcher {
            client,
            resource_name: resource_name.into(),
            state: WatcherState::new(initial_profile),
            dispatcher: ChangeDispatcher::new(on_change),
        }
    }

    /// Last-known canonical specification.
    pub fn current_profile(&self) -> TlsProfileSpec {
        self.state.snapshot()
    }

    /// One reconcile cycle: fetch, resolve, compare, conditionally swap and
    /// notify.
    ///
    /// Fetch and resolution failures leave the state untouched and bubble up
    /// for the hosting loop's retry policy. A missing resource is a quiet
    /// success. Notification happens outside the state write lock but inside
    /// the dispatch-ordering lock.
    pub async fn reconcile(&self) -> Result<ReconcileOutcome> {
        let resource = match self.client.get(&self.resource_name).await? {
            Some(resource) => resource,
            None => {
                debug!("resource {:?} not found; nothing to reconcile", self.resource_name);
                metrics::observe_reconcile("resource_absent");
                return Ok(ReconcileOutcome::ResourceAbsent);
            }
        };

        let next = resolve(resource.security_profile.as_ref())?;

        // Common case: a resync or duplicate delivery with no semantic change.
        if self.state.snapshot() == next {
            metrics::observe_reconcile("unchanged");
            return Ok(ReconcileOutcome::Unchanged);
        }

        // Taken before the swap so concurrent cycles deliver transitions in
        // the order the state actually moved.
        let _order = self.dispatcher.lock_order();
        match self.state.transition(next) {
            Some(change) => {
                info!(
                    "TLS profile changed: {} ({} ciphers) -> {} ({} ciphers)",
                    change.previous.min_version,
                    change.previous.ciphers.len(),
                    change.current.min_version,
                    change.current.ciphers.len(),
                );
                metrics::observe_reconcile("changed");
                metrics::PROFILE_TRANSITIONS.inc();
                self.dispatcher.dispatch(&change);
                Ok(ReconcileOutcome::Changed)
            }
            None => {
                // A racing cycle already moved the state past this value.
                metrics::observe_reconcile("unchanged");
                Ok(ReconcileOutcome::Unchanged)
            }
        }
    }
}
