//! Board and screen orientation
//!
//! Screen geometry depends on the board model and the rotation the
//! enclosure mounts it at.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::geometry::Size;

/// Supported board models
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Board {
    /// 3.2" 320x240 panel
    #[default]
    PyPortal,
    /// 3.5" 480x320 panel
    Titano,
}

impl Board {
    /// Native landscape resolution
    pub const fn native_size(&self) -> Size {
        match self {
            Board::PyPortal => Size::new(320, 240),
            Board::Titano => Size::new(480, 320),
        }
    }

    /// Screen size after rotation
    pub const fn screen_size(&self, rotation: Rotation) -> Size {
        let native = self.native_size();
        if rotation.is_portrait() {
            Size::new(native.height, native.width)
        } else {
            native
        }
    }

    /// Startup backlight level
    ///
    /// The Titano panel is unreadable at low brightness.
    pub const fn default_backlight(&self) -> f32 {
        match self {
            Board::PyPortal => 0.5,
            Board::Titano => 1.0,
        }
    }

    pub const fn name(&self) -> &'static str {
        match self {
            Board::PyPortal => "pyportal",
            Board::Titano => "pyportal_titano",
        }
    }
}

/// Display rotation, named by where the power connector ends up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Rotation {
    /// 0 degrees, landscape with power on the right
    #[default]
    Deg0,
    /// 90 degrees, portrait with power on top
    Deg90,
    /// 180 degrees, landscape with power on the left
    Deg180,
    /// 270 degrees, portrait with power at the bottom
    Deg270,
}

impl Rotation {
    pub const fn degrees(&self) -> u16 {
        match self {
            Rotation::Deg0 => 0,
            Rotation::Deg90 => 90,
            Rotation::Deg180 => 180,
            Rotation::Deg270 => 270,
        }
    }

    pub const fn is_portrait(&self) -> bool {
        matches!(self, Rotation::Deg90 | Rotation::Deg270)
    }
}
