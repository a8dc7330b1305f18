//! Device coordinator
//!
//! Composes the panel, touch dispatcher and backlight controller with the
//! board's peripherals and exposes the façade the application loop drives.

pub mod device;
pub mod diagnostics;
pub mod status;

pub use device::{DeviceCoordinator, SensorFlags, DEVICE_NAME};
pub use diagnostics::{AreaStatus, ButtonStatus, Diagnostics};
pub use status::{format_log, group_thousands, Readings, StatusMessage};
