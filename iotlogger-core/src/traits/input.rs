//! Touchscreen input

use crate::geometry::Point;

/// One touchscreen reading
///
/// Produced once per tick and never stored beyond a single dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TouchSample {
    /// Contact point, `None` when nothing touches the screen
    pub contact: Option<Point>,
}

impl TouchSample {
    /// No contact
    pub const fn released() -> Self {
        Self { contact: None }
    }

    /// Contact at screen coordinates
    pub const fn at(x: u16, y: u16) -> Self {
        Self {
            contact: Some(Point::new(x, y)),
        }
    }
}

/// Single-touch input source
pub trait TouchSource {
    /// Sample the touchscreen, already calibrated to screen coordinates
    fn sample(&mut self) -> TouchSample;
}

/// A missing touchscreen never reports contact
impl<T: TouchSource> TouchSource for Option<T> {
    fn sample(&mut self) -> TouchSample {
        match self {
            Some(touch) => touch.sample(),
            None => TouchSample::released(),
        }
    }
}
