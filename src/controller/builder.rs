use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;

use super::WatchController;
use crate::ChangeCallback;
use crate::Error;
use crate::ProfileChange;
use crate::ResourceClient;
use crate::Result;
use crate::SecurityProfileWatcher;
use crate::Settings;
use crate::TlsProfileSpec;

/// Fluent construction of a [`WatchController`].
///
/// Required components: the store client, the initial profile (the assumed
/// steady state before observation begins), and the change callback. The
/// trigger receiver is optional; without one the controller converges on
/// resyncs alone.
pub struct WatchControllerBuilder<C>
where
    C: ResourceClient,
{
    settings: Settings,
    shutdown_signal: watch::Receiver<()>,
    client: Option<Arc<C>>,
    trigger_rx: Option<watch::Receiver<u64>>,
    initial_profile: Option<TlsProfileSpec>,
    on_change: Option<ChangeCallback>,
}

impl<C> WatchControllerBuilder<C>
where
    C: ResourceClient,
{
    pub fn new(
        settings: Settings,
        shutdown_signal: watch::Receiver<()>,
    ) -> Self {
        WatchControllerBuilder {
            settings,
            shutdown_signal,
            client: None,
            trigger_rx: None,
            initial_profile: None,
            on_change: None,
        }
    }

    pub fn client(
        mut self,
        client: Arc<C>,
    ) -> Self {
        self.client = Some(client);
        self
    }

    /// Change-trigger receiver, typically [`crate::MemResourceStore::subscribe`].
    pub fn trigger(
        mut self,
        trigger_rx: watch::Receiver<u64>,
    ) -> Self {
        self.trigger_rx = Some(trigger_rx);
        self
    }

    /// The assumed steady-state specification before observation begins.
    /// Deliberately not derived from the live resource; see
    /// [`crate::WatcherState::new`].
    pub fn initial_profile(
        mut self,
        initial: TlsProfileSpec,
    ) -> Self {
        self.initial_profile = Some(initial);
        self
    }

    pub fn on_change<F>(
        mut self,
        callback: F,
    ) -> Self
    where
        F: Fn(&ProfileChange) -> std::result::Result<(), Box<dyn std::error::Error + Send + Sync>>
            + Send
            + Sync
            + 'static,
    {
        self.on_change = Some(Box::new(callback));
        self
    }

    pub fn build(self) -> Result<WatchController<C>> {
        let client = self.client.ok_or(Error::BuilderIncomplete("client"))?;
        let initial = self.initial_profile.ok_or(Error::BuilderIncomplete("initial_profile"))?;
        let on_change = self.on_change.ok_or(Error::BuilderIncomplete("on_change"))?;

        let watcher = Arc::new(SecurityProfileWatcher::new(
            client,
            self.settings.watcher.resource_name.clone(),
            initial,
            on_change,
        ));

        let (trigger_rx, keepalive) = match self.trigger_rx {
            Some(rx) => (rx, None),
            None => {
                // Receiver pends forever; resync is the only wake-up source.
                let (tx, rx) = watch::channel(0);
                (rx, Some(tx))
            }
        };

        Ok(WatchController {
            watcher,
            trigger_rx,
            _trigger_keepalive: keepalive,
            resync_interval: Duration::from_millis(self.settings.watcher.resync_interval_ms),
            retry: self.settings.retry.reconcile,
            shutdown_signal: self.shutdown_signal,
        })
    }
}
