//! Character-cell display backend
//!
//! Text-mode displays address the screen in character cells. Pixel
//! positions from the panel layout are mapped onto cells by the scene
//! renderer.

/// Display backend errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Bus transfer to the panel failed
    Communication,
    /// Row or column outside the display
    InvalidCoordinates,
    /// Display not initialized
    NotInitialized,
}

/// Character-cell display
pub trait DisplayBackend {
    /// Blank every cell
    fn clear(&mut self) -> Result<(), DisplayError>;

    /// Write text starting at a cell, clipping at the right edge
    fn draw_text(&mut self, row: u8, col: u8, text: &str) -> Result<(), DisplayError>;

    /// Draw `start_col..end_col` on `row` in inverse video
    fn invert_region(&mut self, row: u8, start_col: u8, end_col: u8) -> Result<(), DisplayError>;

    /// Push buffered cells to the panel
    fn flush(&mut self) -> Result<(), DisplayError>;

    /// (columns, rows) in cells
    fn dimensions(&self) -> (u8, u8);
}
