//! Transitions that mutate the UI state

use crate::registry::ViewId;

/// Field advanced by [`Transition::Cycle`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CycleField {
    Icon,
    Mode,
}

/// State transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Transition {
    /// Make a view active
    SwitchView(ViewId),
    /// Flip between running and paused logging
    TogglePauseRun,
    /// Flip between chart and log presentation
    ToggleChartLog,
    /// Advance an index within `1..=modulus`
    Cycle { field: CycleField, modulus: u8 },
    /// Show a new countdown value
    TickCounter(i32),
}
