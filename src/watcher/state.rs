use parking_lot::RwLock;

use super::ProfileChange;
use crate::TlsProfileSpec;

/// Holds the single last-known canonical specification.
///
/// Read-mostly: observers may call [`WatcherState::snapshot`] concurrently
/// at any rate; only the reconcile path mutates, through
/// [`WatcherState::transition`].
pub struct WatcherState {
    current: RwLock<TlsProfileSpec>,
}

impl WatcherState {
    /// Seeds the state with the caller-supplied steady-state specification.
    /// The live resource is deliberately not consulted here; the caller is
    /// responsible for the seed matching reality at startup.
    pub fn new(initial: TlsProfileSpec) -> Self {
        WatcherState {
            current: RwLock::new(initial),
        }
    }

    /// The current specification, read atomically.
    pub fn snapshot(&self) -> TlsProfileSpec {
        self.current.read().clone()
    }

    /// The only mutation path. Re-compares `next` against the now-current
    /// value under the write lock and swaps only on a semantic difference.
    ///
    /// The re-compare is what keeps racing duplicate reconciliations from
    /// delivering the same logical transition twice: whichever invocation
    /// loses the lock race observes the already-updated value and backs off
    /// with `None`.
    pub(crate) fn transition(
        &self,
        next: TlsProfileSpec,
    ) -> Option<ProfileChange> {
        let mut current = self.current.write();
        if *current == next {
            return None;
        }

        let previous = std::mem::replace(&mut *current, next.clone());
        Some(ProfileChange {
            previous,
            current: next,
        })
    }
}
