//! Display-side capabilities: surface groups, backlight and text wrapping

use heapless::{String, Vec};

use crate::layout::LOG_WRAP_WIDTH;
use crate::registry::ViewId;

/// Maximum bytes per wrapped line, a full log line of 4-byte characters
pub const WRAPPED_LINE_CAP: usize = LOG_WRAP_WIDTH as usize * 4;

/// Maximum number of wrapped lines kept for one area
pub const MAX_WRAPPED_LINES: usize = 8;

pub type WrappedLine = String<WRAPPED_LINE_CAP>;
pub type WrappedLines = Vec<WrappedLine, MAX_WRAPPED_LINES>;

/// Physical display group show/hide
///
/// The display acts as a dumb compositor - the core decides which view is
/// mounted and only tells the surface about changes.
pub trait Surface {
    /// Show the group that renders `view`
    fn mount(&mut self, view: ViewId);

    /// Hide the group that renders `view`
    fn unmount(&mut self, view: ViewId);
}

/// An absent surface swallows mount requests
impl<S: Surface> Surface for Option<S> {
    fn mount(&mut self, view: ViewId) {
        if let Some(surface) = self {
            surface.mount(view);
        }
    }

    fn unmount(&mut self, view: ViewId) {
        if let Some(surface) = self {
            surface.unmount(view);
        }
    }
}

/// Backlight brightness control
pub trait BrightnessSink {
    /// Set brightness, 0.0 is off and 1.0 is full
    fn set(&mut self, level: f32);
}

impl<B: BrightnessSink> BrightnessSink for Option<B> {
    fn set(&mut self, level: f32) {
        if let Some(sink) = self {
            sink.set(level);
        }
    }
}

/// Opaque word-wrap function
///
/// The core has no wrapping logic of its own; it hands area text to the
/// renderer together with a width hint in characters.
pub trait TextRenderer {
    fn wrap(&self, text: &str, max_chars: usize) -> WrappedLines;
}
