//! Configuration types
//!
//! Board-agnostic panel configuration. Built from defaults in code or,
//! with the `toml` feature, parsed from a TOML document.

pub mod hardware;
#[cfg(feature = "toml")]
pub mod loader;
pub mod types;

pub use hardware::*;
pub use types::*;
