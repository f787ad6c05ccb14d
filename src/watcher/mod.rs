//! The change-detection core: last-known state, the reconcile entry point,
//! and exactly-once change dispatch.

mod dispatcher;
mod reconciler;
mod state;

pub use dispatcher::*;
pub use reconciler::*;
pub use state::*;

#[cfg(test)]
mod dispatcher_test;
#[cfg(test)]
mod state_test;
