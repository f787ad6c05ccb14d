//! The hosting loop that drives reconciliation: store change triggers,
//! periodic resyncs, and retry with backoff for failed cycles.

mod builder;
mod controller;

pub use builder::*;
pub use controller::*;
