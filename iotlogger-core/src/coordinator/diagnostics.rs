//! Self-test snapshot

use core::fmt;

use heapless::{String, Vec};

use super::device::SensorFlags;
use crate::config::{Board, Rotation, MAX_NICKNAME_LEN};
use crate::error::Capability;
use crate::geometry::Size;
use crate::registry::{AreaId, AreaText, ButtonId, Label, ViewId, MAX_AREAS, MAX_BUTTONS, MAX_VIEWS};
use crate::state::UiState;

const CAPABILITY_COUNT: usize = Capability::ALL.len();

#[derive(Debug, Clone)]
pub struct ButtonStatus {
    pub id: ButtonId,
    pub label: Label,
    pub selected: bool,
}

#[derive(Debug, Clone)]
pub struct AreaStatus {
    pub id: AreaId,
    pub enabled: bool,
    pub text: AreaText,
}

/// Everything `self_test` reports
///
/// Built from whatever is initialized; absent collaborators show up as
/// disabled rather than failing.
#[derive(Debug, Clone)]
pub struct Diagnostics {
    pub device_name: &'static str,
    pub nickname: String<MAX_NICKNAME_LEN>,
    pub board: Board,
    pub screen: Size,
    pub rotation: Rotation,
    pub brightness: f32,
    pub state: UiState,
    pub mounted_view: Option<ViewId>,
    pub views: Vec<ViewId, MAX_VIEWS>,
    pub buttons: Vec<ButtonStatus, MAX_BUTTONS>,
    pub areas: Vec<AreaStatus, MAX_AREAS>,
    pub capabilities: Vec<(Capability, bool), CAPABILITY_COUNT>,
    pub sensors: SensorFlags,
}

impl Diagnostics {
    pub fn active_view(&self) -> ViewId {
        self.state.active_view
    }

    pub fn area(&self, id: AreaId) -> Option<&AreaStatus> {
        self.areas.iter().find(|a| a.id == id)
    }

    pub fn button(&self, id: ButtonId) -> Option<&ButtonStatus> {
        self.buttons.iter().find(|b| b.id == id)
    }

    pub fn has(&self, capability: Capability) -> bool {
        self.capabilities
            .iter()
            .any(|(cap, present)| *cap == capability && *present)
    }
}

fn on_off(flag: bool) -> &'static str {
    if flag {
        "enabled"
    } else {
        "disabled"
    }
}

impl fmt::Display for Diagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Device Name:    {}", self.device_name)?;
        if !self.nickname.is_empty() {
            writeln!(f, " - Nickname:    {}", self.nickname)?;
        }
        writeln!(
            f,
            "Display Dims:   {}px(W) x {}px(H)",
            self.screen.width, self.screen.height
        )?;
        writeln!(f, " - Board:       {}", self.board.name())?;
        writeln!(f, " - Rotation:    {} degrees", self.rotation.degrees())?;
        writeln!(f, " - Backlight:   {}", self.brightness)?;
        writeln!(f, " - Groups:      {}", self.views.len())?;
        for view in self.views.iter() {
            let marker = if Some(*view) == self.mounted_view { " *" } else { "" };
            writeln!(f, "   - {}{}", view, marker)?;
        }
        for button in self.buttons.iter() {
            writeln!(
                f,
                "Btn '{}': {}{}",
                button.id,
                button.label,
                if button.selected { " (selected)" } else { "" }
            )?;
        }
        for area in self.areas.iter() {
            writeln!(f, "Area '{}': {}", area.id, on_off(area.enabled))?;
        }
        for (capability, present) in self.capabilities.iter() {
            writeln!(f, "{}: {}", capability.name(), on_off(*present))?;
        }
        write!(
            f,
            "Sensors:        temperature {}, light {}",
            on_off(self.sensors.temperature),
            on_off(self.sensors.light)
        )
    }
}
