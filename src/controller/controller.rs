use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::time::interval;
use tracing::debug;
use tracing::info;
use tracing::trace;
use tracing::warn;

use crate::metrics;
use crate::utils::async_task::retry_with_timeout_and_backoff;
use crate::BackoffPolicy;
use crate::ResourceClient;
use crate::Result;
use crate::SecurityProfileWatcher;

/// Drives the watcher from the outside world.
///
/// Wakes on store change triggers and on every resync interval; each wake-up
/// runs one reconcile cycle through the retry policy. The loop never
/// escalates a failed cycle: exhausted retries are logged and the next
/// trigger or resync takes another shot.
pub struct WatchController<C>
where
    C: ResourceClient,
{
    pub(crate) watcher: Arc<SecurityProfileWatcher<C>>,
    pub(crate) trigger_rx: watch::Receiver<u64>,
    // Keeps a trigger-less controller pending instead of erroring out
    pub(crate) _trigger_keepalive: Option<watch::Sender<u64>>,
    pub(crate) resync_interval: Duration,
    pub(crate) retry: BackoffPolicy,
    pub(crate) shutdown_signal: watch::Receiver<()>,
}

impl<C> WatchController<C>
where
    C: ResourceClient,
{
    /// Handle to the underlying watcher (profile snapshots, direct
    /// reconcile in tests).
    pub fn watcher(&self) -> Arc<SecurityProfileWatcher<C>> {
        self.watcher.clone()
    }

    /// Main event processing loop.
    ///
    /// The first resync tick fires immediately, so one reconcile cycle runs
    /// against the live resource right after startup; afterwards the loop
    /// sleeps until a trigger, the next resync, or shutdown.
    pub async fn run(self) -> Result<()> {
        let WatchController {
            watcher,
            mut trigger_rx,
            _trigger_keepalive,
            resync_interval,
            retry,
            mut shutdown_signal,
        } = self;

        let mut resync = interval(resync_interval);
        let mut trigger_alive = true;

        info!("TLS profile watch loop started, resync every {:?}", resync_interval);
        loop {
            tokio::select! {
                _ = shutdown_signal.changed() => {
                    info!("shutdown signal received; stopping TLS profile watch loop");
                    return Ok(());
                }
                _ = resync.tick() => {
                    trace!("periodic resync");
                    Self::reconcile_cycle(&watcher, &retry).await;
                }
                changed = trigger_rx.changed(), if trigger_alive => {
                    match changed {
                        Ok(()) => {
                            debug!("resource change trigger");
                            Self::reconcile_cycle(&watcher, &retry).await;
                        }
                        Err(_) => {
                            // Trigger source dropped; resyncs keep the watcher converging.
                            warn!("change trigger closed; falling back to resync only");
                            trigger_alive = false;
                        }
                    }
                }
            }
        }
    }

    async fn reconcile_cycle(
        watcher: &Arc<SecurityProfileWatcher<C>>,
        retry: &BackoffPolicy,
    ) {
        match retry_with_timeout_and_backoff(|| watcher.reconcile(), *retry).await {
            Ok(outcome) => trace!("reconcile finished: {:?}", outcome),
            Err(e) => {
                metrics::observe_reconcile("error");
                warn!("reconcile cycle abandoned: {:?}; next trigger or resync will retry", e);
            }
        }
    }
}
