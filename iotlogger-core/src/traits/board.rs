//! Board capability bundle
//!
//! A board names one concrete type per capability. Each capability is held
//! as an `Option` so a collaborator that failed to initialize is carried as
//! absent instead of aborting startup.

use super::{
    BrightnessSink, FeedUploader, LightSource, SoundSink, Surface, TemperatureSensor,
    TextRenderer, TouchSource,
};
use crate::error::Capability;

pub trait Board {
    type Surface: Surface;
    type Touch: TouchSource;
    type Light: LightSource;
    type Brightness: BrightnessSink;
    type Sound: SoundSink;
    type Text: TextRenderer;
    type Temperature: TemperatureSensor;
    type Uploader: FeedUploader;
}

/// Initialized collaborators for a board
pub struct Peripherals<B: Board> {
    pub surface: Option<B::Surface>,
    pub touch: Option<B::Touch>,
    pub light: Option<B::Light>,
    pub brightness: Option<B::Brightness>,
    pub sound: Option<B::Sound>,
    pub text: Option<B::Text>,
    pub temperature: Option<B::Temperature>,
    pub uploader: Option<B::Uploader>,
}

impl<B: Board> Default for Peripherals<B> {
    fn default() -> Self {
        Self {
            surface: None,
            touch: None,
            light: None,
            brightness: None,
            sound: None,
            text: None,
            temperature: None,
            uploader: None,
        }
    }
}

impl<B: Board> Peripherals<B> {
    /// Check whether a capability is fitted
    pub fn has(&self, capability: Capability) -> bool {
        match capability {
            Capability::Surface => self.surface.is_some(),
            Capability::Touch => self.touch.is_some(),
            Capability::Light => self.light.is_some(),
            Capability::Brightness => self.brightness.is_some(),
            Capability::Sound => self.sound.is_some(),
            Capability::TextRenderer => self.text.is_some(),
            Capability::Temperature => self.temperature.is_some(),
            Capability::Uploader => self.uploader.is_some(),
        }
    }
}
