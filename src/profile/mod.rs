//! Profile selector model and resolution.
//!
//! The selector is the externally observed configuration value (absent, a
//! named preset, or an inline custom specification). Resolution turns every
//! legal selector into a canonical [`TlsProfileSpec`], the only form change
//! detection ever compares.

mod presets;
mod resolver;
mod selector;
mod spec;

pub use presets::*;
pub use resolver::*;
pub use selector::*;
pub use spec::*;

#[cfg(test)]
mod presets_test;
#[cfg(test)]
mod resolver_test;
#[cfg(test)]
mod selector_test;
