use parking_lot::Mutex;
use parking_lot::MutexGuard;
use tracing::error;

use crate::metrics::CALLBACK_FAILURES;
use crate::TlsProfileSpec;

/// A detected semantic transition, delivered to the callback by value.
///
/// Invariant: `previous != current`; a non-change is never dispatched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileChange {
    pub previous: TlsProfileSpec,
    pub current: TlsProfileSpec,
}

/// Callback invoked once per detected transition. Failures belong to the
/// registering collaborator; the watcher logs them and never re-delivers.
pub type ChangeCallback =
    Box<dyn Fn(&ProfileChange) -> std::result::Result<(), Box<dyn std::error::Error + Send + Sync>> + Send + Sync>;

/// Invokes the registered callback synchronously on the reconciling task.
///
/// No queuing and no retry: a slow callback stalls that reconcile cycle,
/// which bounds the number of pending notifications at one.
pub(crate) struct ChangeDispatcher {
    callback: ChangeCallback,
    order: Mutex<()>,
}

impl ChangeDispatcher {
    pub(crate) fn new(callback: ChangeCallback) -> Self {
        ChangeDispatcher {
            callback,
            order: Mutex::new(()),
        }
    }

    /// Serializes transition+notify pairs. The reconcile path acquires this
    /// before swapping state so callbacks observe transitions in the order
    /// the state actually moved.
    pub(crate) fn lock_order(&self) -> MutexGuard<'_, ()> {
        self.order.lock()
    }

    /// Deliver one change event. Callers hold the ordering guard from
    /// [`ChangeDispatcher::lock_order`] across the preceding state swap.
    pub(crate) fn dispatch(
        &self,
        change: &ProfileChange,
    ) {
        if let Err(e) = (self.callback)(change) {
            CALLBACK_FAILURES.inc();
            error!("profile change callback failed: {:?}", e);
        }
    }
}
