//! Board-agnostic core logic for the f451 IoT Logger touch panel
//!
//! This crate contains all panel logic that does not depend on
//! specific hardware implementations:
//!
//! - Capability traits (surface, touch, light, backlight, sound, sensors)
//! - View, button and text area registries
//! - UI state machine
//! - Touch dispatch with per-button debounce
//! - Ambient backlight control
//! - Device coordinator façade used by the application loop
//! - Configuration type definitions

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod backlight;
pub mod config;
pub mod coordinator;
pub mod error;
pub mod geometry;
pub mod layout;
pub mod panel;
pub mod registry;
pub mod state;
pub mod touch;
pub mod traits;

#[cfg(test)]
pub(crate) mod testing;

pub use backlight::BacklightController;
pub use coordinator::{DeviceCoordinator, Diagnostics};
pub use error::{Capability, Error};
pub use panel::Panel;
pub use registry::{AreaId, ButtonId, ViewId};
pub use state::{Transition, UiState};
pub use touch::TouchDispatcher;
