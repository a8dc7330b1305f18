//! Audible feedback

/// Generic failure from a fire-and-forget capability
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CapabilityError;

/// Feedback sounds shipped with the device
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SoundCue {
    /// Startup jingle
    Demo,
    /// Momentary button press
    Beep,
    /// Mode or view toggle
    Tab,
}

impl SoundCue {
    /// Asset path on the device filesystem
    pub const fn path(&self) -> &'static str {
        match self {
            SoundCue::Demo => "/sounds/sound.wav",
            SoundCue::Beep => "/sounds/beep.wav",
            SoundCue::Tab => "/sounds/tab.wav",
        }
    }
}

/// Speaker output
pub trait SoundSink {
    /// Start playing a cue. Callers ignore failures.
    fn play(&mut self, cue: SoundCue) -> Result<(), CapabilityError>;
}

impl<S: SoundSink> SoundSink for Option<S> {
    fn play(&mut self, cue: SoundCue) -> Result<(), CapabilityError> {
        match self {
            Some(sink) => sink.play(cue),
            None => Err(CapabilityError),
        }
    }
}
