//! Error taxonomy for the panel core
//!
//! Init-time errors (`DuplicateId`, `CapacityExceeded`, `InvalidConfig`)
//! abort startup. `UnknownId` is fatal during init and skipped in the
//! touch path. Missing hardware is reported as `CapabilityUnavailable`.

use core::fmt;

use crate::config::ConfigError;
use crate::traits::{SensorError, UploadError};

/// External capabilities consumed by the core
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Capability {
    Surface,
    Touch,
    Light,
    Brightness,
    Sound,
    TextRenderer,
    Temperature,
    Uploader,
}

impl Capability {
    pub const ALL: [Capability; 8] = [
        Capability::Surface,
        Capability::Touch,
        Capability::Light,
        Capability::Brightness,
        Capability::Sound,
        Capability::TextRenderer,
        Capability::Temperature,
        Capability::Uploader,
    ];

    pub const fn name(&self) -> &'static str {
        match self {
            Capability::Surface => "surface",
            Capability::Touch => "touchscreen",
            Capability::Light => "light sensor",
            Capability::Brightness => "backlight",
            Capability::Sound => "speaker",
            Capability::TextRenderer => "text renderer",
            Capability::Temperature => "temperature sensor",
            Capability::Uploader => "feed uploader",
        }
    }
}

/// Top-level error type
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// An id was registered twice
    DuplicateId(&'static str),
    /// Referenced view, button or area does not exist
    UnknownId(&'static str),
    /// External collaborator failed to initialize or is not fitted
    CapabilityUnavailable(Capability),
    /// Fixed-size registry or buffer is full
    CapacityExceeded,
    /// Configuration failed validation
    InvalidConfig(ConfigError),
    /// Sensor read failed
    Sensor(SensorError),
    /// Feed upload failed
    Upload(UploadError),
}

impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::InvalidConfig(e)
    }
}

impl From<SensorError> for Error {
    fn from(e: SensorError) -> Self {
        Error::Sensor(e)
    }
}

impl From<UploadError> for Error {
    fn from(e: UploadError) -> Self {
        Error::Upload(e)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::DuplicateId(id) => write!(f, "duplicate id '{id}'"),
            Error::UnknownId(id) => write!(f, "unknown id '{id}'"),
            Error::CapabilityUnavailable(cap) => write!(f, "{} unavailable", cap.name()),
            Error::CapacityExceeded => f.write_str("capacity exceeded"),
            Error::InvalidConfig(e) => write!(f, "invalid config: {e:?}"),
            Error::Sensor(e) => write!(f, "sensor error: {e:?}"),
            Error::Upload(e) => write!(f, "upload error: {e:?}"),
        }
    }
}
