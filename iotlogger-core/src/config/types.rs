//! Configuration type definitions

use heapless::{String, Vec};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::hardware::{Board, Rotation};
use crate::registry::MAX_LABEL_LEN;

/// Maximum entries per icon or color catalog
pub const MAX_CATALOG: usize = 8;

/// Maximum nickname length
pub const MAX_NICKNAME_LEN: usize = 32;

pub type CatalogEntry = String<MAX_LABEL_LEN>;
pub type Catalog = Vec<CatalogEntry, MAX_CATALOG>;

/// Configuration validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Icon or color catalog has no entries
    EmptyCatalog,
    /// Backlight thresholds out of order or levels outside 0.0..=1.0
    InvalidBacklight,
    /// Upload interval must be 1..=99 seconds
    InvalidInterval,
    /// TOML document could not be parsed
    Toml,
}

/// Ambient light to backlight mapping
///
/// Readings below `dark_below` use `dim_level`, readings below
/// `bright_from` use `mid_level`, everything brighter gets full brightness.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BacklightConfig {
    pub dark_below: u16,
    pub bright_from: u16,
    pub dim_level: f32,
    pub mid_level: f32,
}

impl Default for BacklightConfig {
    fn default() -> Self {
        Self {
            dark_below: 2_000,
            bright_from: 30_000,
            dim_level: 0.2,
            mid_level: 0.5,
        }
    }
}

impl BacklightConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let in_range = |v: f32| (0.0..=1.0).contains(&v);
        if self.dark_below > self.bright_from
            || !in_range(self.dim_level)
            || !in_range(self.mid_level)
            || self.dim_level > self.mid_level
        {
            return Err(ConfigError::InvalidBacklight);
        }
        Ok(())
    }
}

/// Touch handling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TouchConfig {
    /// Consecutive ticks a momentary button must be held before it fires
    pub momentary_settle_ticks: u8,
}

impl Default for TouchConfig {
    fn default() -> Self {
        Self {
            momentary_settle_ticks: 2,
        }
    }
}

/// Temperature display unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TemperatureUnit {
    #[default]
    Celsius,
    Fahrenheit,
}

impl TemperatureUnit {
    /// Convert a Celsius reading into this unit
    pub fn from_celsius(&self, celsius: f32) -> f32 {
        match self {
            TemperatureUnit::Celsius => celsius,
            TemperatureUnit::Fahrenheit => celsius * 1.8 + 32.0,
        }
    }

    pub const fn symbol(&self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "°C",
            TemperatureUnit::Fahrenheit => "°F",
        }
    }
}

/// Complete panel configuration
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PanelConfig {
    pub board: Board,
    pub rotation: Rotation,
    /// Startup backlight level, `None` uses the board default
    pub initial_backlight: Option<f32>,
    pub backlight: BacklightConfig,
    pub touch: TouchConfig,
    /// Names cycled by the icon button
    pub icons: Catalog,
    /// Names cycled by the color mode button
    pub colors: Catalog,
    /// Seconds between feed uploads
    pub upload_interval_s: u8,
    pub temperature_unit: TemperatureUnit,
    pub nickname: String<MAX_NICKNAME_LEN>,
}

fn catalog(entries: &[&str]) -> Catalog {
    let mut out = Catalog::new();
    for entry in entries {
        let mut name = CatalogEntry::new();
        if name.push_str(entry).is_ok() && out.push(name).is_err() {
            break;
        }
    }
    out
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            board: Board::PyPortal,
            rotation: Rotation::Deg0,
            initial_backlight: None,
            backlight: BacklightConfig::default(),
            touch: TouchConfig::default(),
            icons: catalog(&["chart", "list", "pause", "play"]),
            colors: catalog(&["RED", "YELLOW", "GREEN", "BLUE", "PURPLE"]),
            upload_interval_s: 30,
            temperature_unit: TemperatureUnit::Celsius,
            nickname: String::new(),
        }
    }
}

impl PanelConfig {
    /// Default configuration for a board
    pub fn for_board(board: Board) -> Self {
        Self {
            board,
            ..Self::default()
        }
    }

    /// Backlight level applied before the first light reading
    pub fn startup_backlight(&self) -> f32 {
        self.initial_backlight
            .unwrap_or_else(|| self.board.default_backlight())
            .clamp(0.0, 1.0)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.icons.is_empty() || self.colors.is_empty() {
            return Err(ConfigError::EmptyCatalog);
        }
        if self.upload_interval_s == 0 || self.upload_interval_s > 99 {
            return Err(ConfigError::InvalidInterval);
        }
        if self.initial_backlight.is_some_and(|level| !level.is_finite()) {
            return Err(ConfigError::InvalidBacklight);
        }
        self.backlight.validate()
    }
}
