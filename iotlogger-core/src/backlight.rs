//! Ambient light driven backlight control

use crate::config::{BacklightConfig, ConfigError};
use crate::traits::BrightnessSink;

/// Light band a reading falls into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Band {
    Dark,
    Medium,
    Bright,
}

/// Maps light readings to a brightness level and drives the backlight
///
/// The sink is only written when the level changes.
#[derive(Debug, Clone)]
pub struct BacklightController {
    config: BacklightConfig,
    current: f32,
}

impl BacklightController {
    pub fn new(config: BacklightConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            current: 0.0,
        })
    }

    /// Write the startup level unconditionally
    pub fn init<S: BrightnessSink>(&mut self, level: f32, sink: &mut S) {
        self.current = self.sanitize(level);
        sink.set(self.current);
    }

    pub fn band(&self, light: u16) -> Band {
        if light < self.config.dark_below {
            Band::Dark
        } else if light < self.config.bright_from {
            Band::Medium
        } else {
            Band::Bright
        }
    }

    /// Brightness for a light reading, clamped to 0.0..=1.0
    pub fn level_for(&self, light: u16) -> f32 {
        let level = match self.band(light) {
            Band::Dark => self.config.dim_level,
            Band::Medium => self.config.mid_level,
            Band::Bright => 1.0,
        };
        level.clamp(0.0, 1.0)
    }

    /// Apply a light reading and return the resulting brightness
    pub fn apply<S: BrightnessSink>(&mut self, light: u16, sink: &mut S) -> f32 {
        let level = self.level_for(light);
        self.maybe_set(level, sink);
        level
    }

    /// Override the level until the next reading
    ///
    /// NaN keeps the current level.
    pub fn set_manual<S: BrightnessSink>(&mut self, level: f32, sink: &mut S) -> f32 {
        let level = self.sanitize(level);
        self.maybe_set(level, sink);
        level
    }

    pub fn current(&self) -> f32 {
        self.current
    }

    fn sanitize(&self, level: f32) -> f32 {
        if level.is_nan() {
            self.current
        } else {
            level.clamp(0.0, 1.0)
        }
    }

    fn maybe_set<S: BrightnessSink>(&mut self, level: f32, sink: &mut S) {
        if self.current != level {
            log::debug!("backlight {} -> {}", self.current, level);
            self.current = level;
            sink.set(level);
        }
    }
}
