//! In-memory character grid
//!
//! Holds what a text-mode panel would show. Boards without a character
//! display use it to keep a textual copy of the scene for logging.

use heapless::{String, Vec};

use crate::backend::{DisplayBackend, DisplayError};

/// Widest supported grid (480 px at 8 px per cell)
pub const MAX_COLS: usize = 60;

/// Tallest supported grid (480 px at 16 px per cell)
pub const MAX_ROWS: usize = 30;

/// Bytes per rendered row, leaving room for multi-byte glyphs
const ROW_BYTES: usize = MAX_COLS * 4;

/// Character grid with per-row inverse-video spans
#[derive(Clone)]
pub struct TextGrid {
    cells: [[char; MAX_COLS]; MAX_ROWS],
    inverted: Vec<(u8, u8, u8), MAX_ROWS>,
    cols: u8,
    rows: u8,
    flushes: u32,
}

impl TextGrid {
    /// Create a blank grid, clamped to the supported maximum
    pub fn new(cols: u8, rows: u8) -> Self {
        Self {
            cells: [[' '; MAX_COLS]; MAX_ROWS],
            inverted: Vec::new(),
            cols: cols.min(MAX_COLS as u8),
            rows: rows.min(MAX_ROWS as u8),
            flushes: 0,
        }
    }

    /// Row contents with trailing blanks removed
    pub fn row_text(&self, row: u8) -> String<ROW_BYTES> {
        let mut out = String::new();
        if row >= self.rows {
            return out;
        }
        for c in self.cells[usize::from(row)][..usize::from(self.cols)].iter() {
            let _ = out.push(*c);
        }
        while out.ends_with(' ') {
            out.pop();
        }
        out
    }

    /// Find the first row containing `needle`
    pub fn find(&self, needle: &str) -> Option<(u8, usize)> {
        (0..self.rows).find_map(|row| self.row_text(row).find(needle).map(|col| (row, col)))
    }

    pub fn is_inverted(&self, row: u8, col: u8) -> bool {
        self.inverted
            .iter()
            .any(|(r, start, end)| *r == row && (*start..*end).contains(&col))
    }

    /// Number of completed frames
    pub fn flushes(&self) -> u32 {
        self.flushes
    }
}

impl DisplayBackend for TextGrid {
    fn clear(&mut self) -> Result<(), DisplayError> {
        for row in self.cells.iter_mut() {
            row.fill(' ');
        }
        self.inverted.clear();
        Ok(())
    }

    fn draw_text(&mut self, row: u8, col: u8, text: &str) -> Result<(), DisplayError> {
        if row >= self.rows || col >= self.cols {
            return Err(DisplayError::InvalidCoordinates);
        }
        let line = &mut self.cells[usize::from(row)];
        let start = usize::from(col);
        let end = usize::from(self.cols);
        for (cell, c) in line[start..end].iter_mut().zip(text.chars()) {
            *cell = c;
        }
        Ok(())
    }

    fn invert_region(&mut self, row: u8, start_col: u8, end_col: u8) -> Result<(), DisplayError> {
        if row >= self.rows || start_col > end_col {
            return Err(DisplayError::InvalidCoordinates);
        }
        self.inverted
            .push((row, start_col, end_col.min(self.cols)))
            .map_err(|_| DisplayError::InvalidCoordinates)
    }

    fn flush(&mut self) -> Result<(), DisplayError> {
        self.flushes = self.flushes.wrapping_add(1);
        Ok(())
    }

    fn dimensions(&self) -> (u8, u8) {
        (self.cols, self.rows)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for TextGrid {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "TextGrid[");
        for row in 0..self.rows {
            if row > 0 {
                defmt::write!(f, " | ");
            }
            defmt::write!(f, "{}", self.row_text(row).as_str());
        }
        defmt::write!(f, "]");
    }
}
