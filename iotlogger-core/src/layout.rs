//! Standard screen layout
//!
//! Buttons stack down the right edge, text areas run down the left. All
//! positions derive from the rotated screen size.

use heapless::Vec;

use crate::geometry::{Point, Rect, Size};
use crate::registry::{
    AreaDef, AreaId, ButtonAction, ButtonDef, ButtonId, ButtonKind, ViewDef, ViewId, MAX_AREAS,
    MAX_BUTTONS, MAX_VIEWS,
};

/// Button edge length in pixels
pub const BTN_SIZE: u16 = 76;

/// Gap between buttons and the screen edge
pub const BTN_MARGIN: u16 = 3;

/// Left inset of the text areas
pub const AREA_X: u16 = 10;

/// Top inset of the header
pub const AREA_Y: u16 = 10;

pub const HEADER_TEXT: &str = "SENSOR DATA";
pub const LOG_TEXT: &str = "- Collecting data ... -";
pub const STATUS_TEXT: &str = "Processing ...";
pub const COUNTER_TEXT: &str = " 0";

/// Character caps per area
pub const LOG_MAX_LEN: usize = 90;
pub const LOG_WRAP_WIDTH: u8 = 30;
pub const STATUS_MAX_LEN: usize = 30;
pub const HEADER_MAX_LEN: usize = 30;
pub const COUNTER_MAX_LEN: usize = 2;

const SPLASH_BUTTONS: &[ButtonId] = &[ButtonId::VIEW, ButtonId::MODE];
const CHART_BUTTONS: &[ButtonId] = &[
    ButtonId::VIEW,
    ButtonId::MODE,
    ButtonId::ICON,
    ButtonId::COLOR,
];
const COMMON_AREAS: &[AreaId] = &[AreaId::COUNTER, AreaId::HEADER, AreaId::STATUS];
const LOG_AREAS: &[AreaId] = &[AreaId::COUNTER, AreaId::HEADER, AreaId::STATUS, AreaId::LOG];

/// Every button, area and view a panel is built from
///
/// Order matters: buttons are hit tested in the order listed and the first
/// view is the one shown at startup.
#[derive(Debug, Clone, Default)]
pub struct Layout {
    pub buttons: Vec<(ButtonId, ButtonDef), MAX_BUTTONS>,
    pub areas: Vec<(AreaId, AreaDef), MAX_AREAS>,
    pub views: Vec<(ViewId, ViewDef), MAX_VIEWS>,
}

impl Layout {
    /// Splash, chart and log views for a screen of the given size
    pub fn standard(screen: Size) -> Self {
        let column = screen.width.saturating_sub(BTN_SIZE + BTN_MARGIN);
        let row = |n: u16| BTN_MARGIN + n * (BTN_SIZE + BTN_MARGIN);
        let bottom = screen.height.saturating_sub(BTN_SIZE / 2);

        let buttons = [
            (
                ButtonId::VIEW,
                ButtonDef {
                    label: "CHART",
                    kind: ButtonKind::Mode,
                    rect: Rect::new(column, row(0), BTN_SIZE, BTN_SIZE),
                    action: ButtonAction::ToggleChartLog,
                },
            ),
            (
                ButtonId::MODE,
                ButtonDef {
                    label: "PAUSE",
                    kind: ButtonKind::Mode,
                    rect: Rect::new(column, row(1), BTN_SIZE, BTN_SIZE),
                    action: ButtonAction::TogglePauseRun,
                },
            ),
            (
                ButtonId::ICON,
                ButtonDef {
                    label: "",
                    kind: ButtonKind::Momentary,
                    rect: Rect::new(column, row(2), BTN_SIZE, BTN_SIZE),
                    action: ButtonAction::CycleIcon,
                },
            ),
            (
                ButtonId::COLOR,
                ButtonDef {
                    label: "",
                    kind: ButtonKind::Momentary,
                    rect: Rect::new(
                        column.saturating_sub(BTN_SIZE + BTN_MARGIN),
                        row(2),
                        BTN_SIZE,
                        BTN_SIZE,
                    ),
                    action: ButtonAction::CycleMode,
                },
            ),
        ];

        let areas = [
            (
                AreaId::HEADER,
                AreaDef {
                    text: HEADER_TEXT,
                    max_len: HEADER_MAX_LEN,
                    wrap_width: None,
                    origin: Point::new(AREA_X, AREA_Y),
                },
            ),
            (
                AreaId::LOG,
                AreaDef {
                    text: LOG_TEXT,
                    max_len: LOG_MAX_LEN,
                    wrap_width: Some(LOG_WRAP_WIDTH),
                    origin: Point::new(AREA_X, AREA_Y * 3),
                },
            ),
            (
                AreaId::STATUS,
                AreaDef {
                    text: STATUS_TEXT,
                    max_len: STATUS_MAX_LEN,
                    wrap_width: None,
                    origin: Point::new(AREA_X, bottom),
                },
            ),
            (
                AreaId::COUNTER,
                AreaDef {
                    text: COUNTER_TEXT,
                    max_len: COUNTER_MAX_LEN,
                    wrap_width: None,
                    origin: Point::new(screen.width.saturating_sub(BTN_SIZE), bottom),
                },
            ),
        ];

        let views = [
            (
                ViewId::SPLASH,
                ViewDef {
                    buttons: SPLASH_BUTTONS,
                    areas: COMMON_AREAS,
                },
            ),
            (
                ViewId::CHART,
                ViewDef {
                    buttons: CHART_BUTTONS,
                    areas: COMMON_AREAS,
                },
            ),
            (
                ViewId::LOG,
                ViewDef {
                    buttons: SPLASH_BUTTONS,
                    areas: LOG_AREAS,
                },
            ),
        ];

        let mut layout = Self::default();
        for entry in buttons {
            let _ = layout.buttons.push(entry);
        }
        for entry in areas {
            let _ = layout.areas.push(entry);
        }
        for entry in views {
            let _ = layout.views.push(entry);
        }
        layout
    }
}
