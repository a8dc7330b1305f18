//! Text areas (header, status line, countdown counter, log panel)

use heapless::{String, Vec};

use super::{AreaId, MAX_AREAS};
use crate::error::Error;
use crate::geometry::Point;
use crate::traits::{WrappedLines, MAX_WRAPPED_LINES, WRAPPED_LINE_CAP};

/// Byte capacity of an area's text buffer
///
/// Caps are counted in characters, so the buffer leaves room for
/// multi-byte characters such as the degree sign.
pub const AREA_TEXT_CAP: usize = 360;

pub type AreaText = String<AREA_TEXT_CAP>;

/// Static definition of an area
#[derive(Debug, Clone, Copy)]
pub struct AreaDef {
    /// Initial text
    pub text: &'static str,
    /// Maximum length in characters
    pub max_len: usize,
    /// Word-wrap width in characters, `None` for single-line areas
    pub wrap_width: Option<u8>,
    /// Top-left corner of the text
    pub origin: Point,
}

/// A text area and its current contents
#[derive(Debug, Clone)]
pub struct Area {
    id: AreaId,
    text: AreaText,
    enabled: bool,
    max_len: usize,
    wrap_width: Option<u8>,
    origin: Point,
    lines: WrappedLines,
}

impl Area {
    fn new(id: AreaId, def: &AreaDef) -> Self {
        let mut area = Self {
            id,
            text: String::new(),
            enabled: true,
            max_len: def.max_len,
            wrap_width: def.wrap_width,
            origin: def.origin,
            lines: Vec::new(),
        };
        area.store(def.text);
        area
    }

    pub fn id(&self) -> AreaId {
        self.id
    }

    pub fn text(&self) -> &str {
        self.text.as_str()
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn max_len(&self) -> usize {
        self.max_len
    }

    pub fn wrap_width(&self) -> Option<u8> {
        self.wrap_width
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Wrapped presentation of the text
    ///
    /// Falls back to splitting on newlines until a renderer has wrapped
    /// the text.
    pub fn lines(&self) -> &WrappedLines {
        &self.lines
    }

    fn store(&mut self, text: &str) {
        self.text.clear();
        for c in text.chars().take(self.max_len) {
            if self.text.push(c).is_err() {
                break;
            }
        }
        self.lines = split_lines(self.text.as_str());
    }
}

/// Split on newlines, truncating each line to the line buffer
fn split_lines(text: &str) -> WrappedLines {
    let mut lines = WrappedLines::new();
    for segment in text.split('\n') {
        let mut line = String::new();
        for c in segment.chars() {
            if line.push(c).is_err() {
                log::debug!("line clipped at {} bytes", WRAPPED_LINE_CAP);
                break;
            }
        }
        if lines.push(line).is_err() {
            log::debug!("text clipped at {} lines", MAX_WRAPPED_LINES);
            break;
        }
    }
    lines
}

/// Registry of all text areas
#[derive(Debug, Clone, Default)]
pub struct AreaRegistry {
    areas: Vec<Area, MAX_AREAS>,
}

impl AreaRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an area. Init time only.
    pub fn register(&mut self, id: AreaId, def: AreaDef) -> Result<(), Error> {
        if self.contains(id) {
            return Err(Error::DuplicateId(id.name()));
        }
        self.areas
            .push(Area::new(id, &def))
            .map_err(|_| Error::CapacityExceeded)
    }

    pub fn contains(&self, id: AreaId) -> bool {
        self.areas.iter().any(|a| a.id == id)
    }

    pub fn get(&self, id: AreaId) -> Result<&Area, Error> {
        self.areas
            .iter()
            .find(|a| a.id == id)
            .ok_or(Error::UnknownId(id.name()))
    }

    fn get_mut(&mut self, id: AreaId) -> Result<&mut Area, Error> {
        self.areas
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or(Error::UnknownId(id.name()))
    }

    /// Replace an area's text, truncating to its cap
    ///
    /// Returns `Ok(false)` when the area is disabled and the text was
    /// ignored.
    pub fn set_text(&mut self, id: AreaId, text: &str) -> Result<bool, Error> {
        let area = self.get_mut(id)?;
        if !area.enabled {
            return Ok(false);
        }
        area.store(text);
        Ok(true)
    }

    /// Store the renderer's wrapped lines for an enabled area
    pub fn set_lines(&mut self, id: AreaId, lines: WrappedLines) -> Result<(), Error> {
        let area = self.get_mut(id)?;
        if area.enabled {
            area.lines = lines;
        }
        Ok(())
    }

    /// Enable or disable an area. Disabled areas keep their last text.
    pub fn set_enabled(&mut self, id: AreaId, enabled: bool) -> Result<(), Error> {
        self.get_mut(id)?.enabled = enabled;
        Ok(())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Area> {
        self.areas.iter()
    }

    pub fn len(&self) -> usize {
        self.areas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }
}
