//! Text-mode rendering of the active view

use iotlogger_core::geometry::Point;
use iotlogger_core::Panel;

use crate::backend::{DisplayBackend, DisplayError};

/// Pixel width of one character cell
pub const CELL_WIDTH: u16 = 8;

/// Pixel height of one character cell
pub const CELL_HEIGHT: u16 = 16;

/// Draws the enabled areas and visible buttons of the active view
#[derive(Debug, Clone, Copy, Default)]
pub struct SceneRenderer;

impl SceneRenderer {
    pub const fn new() -> Self {
        Self
    }

    /// Character cell containing a pixel position
    pub fn cell(point: Point) -> (u8, u8) {
        let row = (point.y / CELL_HEIGHT).min(u16::from(u8::MAX)) as u8;
        let col = (point.x / CELL_WIDTH).min(u16::from(u8::MAX)) as u8;
        (row, col)
    }

    /// Redraw the whole frame
    ///
    /// Content falling outside the backend's grid is clipped.
    pub fn render<D: DisplayBackend>(&self, panel: &Panel, backend: &mut D) -> Result<(), DisplayError> {
        let view = panel.state().active_view;
        let (cols, rows) = backend.dimensions();
        backend.clear()?;

        if let Ok(members) = panel.views().get(view) {
            for area in panel.areas().iter() {
                if !area.is_enabled() || !members.contains_area(area.id()) {
                    continue;
                }
                let (row, col) = Self::cell(area.origin());
                for (i, line) in area.lines().iter().enumerate() {
                    let row = usize::from(row) + i;
                    if row >= usize::from(rows) || col >= cols {
                        break;
                    }
                    backend.draw_text(row as u8, col, line.as_str())?;
                }
            }
        }

        for button in panel.buttons().iter() {
            if !button.is_visible_in(view) {
                continue;
            }
            let rect = button.rect();
            let (row, col) = Self::cell(Point::new(rect.x, rect.center().y));
            if row >= rows || col >= cols {
                continue;
            }
            let width = (rect.width / CELL_WIDTH).min(u16::from(cols - col)) as u8;
            let label_len = button.label().chars().count().min(usize::from(width)) as u8;
            let offset = (width - label_len) / 2;
            backend.draw_text(row, col + offset, button.label())?;
            if button.is_selected() {
                backend.invert_region(row, col, col + width)?;
            }
        }

        backend.flush()
    }
}
