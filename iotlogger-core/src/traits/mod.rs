//! Capability traits
//!
//! These traits define the interface between the panel logic and the
//! hardware-specific collaborators (display surface, touchscreen,
//! sensors, speaker, network uploader).

pub mod board;
pub mod display;
pub mod feed;
pub mod input;
pub mod sensor;
pub mod sound;

pub use board::{Board, Peripherals};
pub use display::{
    BrightnessSink, Surface, TextRenderer, WrappedLine, WrappedLines, MAX_WRAPPED_LINES,
    WRAPPED_LINE_CAP,
};
pub use feed::{FeedId, FeedUploader, UploadError};
pub use input::{TouchSample, TouchSource};
pub use sensor::{LightSource, SensorError, SensorKind, TemperatureSensor};
pub use sound::{CapabilityError, SoundCue, SoundSink};
