//! UI state value and its transition function

use super::events::{CycleField, Transition};
use crate::registry::ViewId;

/// Logging run state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PauseRun {
    #[default]
    Run,
    Pause,
}

impl PauseRun {
    pub fn toggled(self) -> Self {
        match self {
            PauseRun::Run => PauseRun::Pause,
            PauseRun::Pause => PauseRun::Run,
        }
    }
}

/// Data presentation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ChartLog {
    Chart,
    #[default]
    Log,
}

impl ChartLog {
    pub fn toggled(self) -> Self {
        match self {
            ChartLog::Chart => ChartLog::Log,
            ChartLog::Log => ChartLog::Chart,
        }
    }

    /// View that presents this mode
    pub fn view(self) -> ViewId {
        match self {
            ChartLog::Chart => ViewId::CHART,
            ChartLog::Log => ViewId::LOG,
        }
    }
}

/// Next index in `1..=modulus`. A zero modulus behaves as 1.
pub fn cycle_next(current: u8, modulus: u8) -> u8 {
    (current % modulus.max(1)) + 1
}

/// Complete UI state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct UiState {
    pub active_view: ViewId,
    pub pause_run: PauseRun,
    pub chart_log: ChartLog,
    /// Seconds until the next upload, always below 100
    pub countdown: u8,
    /// 1-based index into the icon catalog
    pub icon_index: u8,
    /// 1-based index into the color mode catalog
    pub mode_index: u8,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            active_view: ViewId::SPLASH,
            pause_run: PauseRun::Run,
            chart_log: ChartLog::Log,
            countdown: 0,
            icon_index: 1,
            mode_index: 1,
        }
    }
}

impl UiState {
    pub fn is_paused(&self) -> bool {
        self.pause_run == PauseRun::Pause
    }

    /// Make `target` active. Chart and log views also align `chart_log`.
    pub fn switch_view(self, target: ViewId) -> Self {
        let chart_log = if target == ViewId::CHART {
            ChartLog::Chart
        } else if target == ViewId::LOG {
            ChartLog::Log
        } else {
            self.chart_log
        };
        Self {
            active_view: target,
            chart_log,
            ..self
        }
    }

    pub fn toggle_pause_run(self) -> Self {
        Self {
            pause_run: self.pause_run.toggled(),
            ..self
        }
    }

    /// Flip chart/log and activate the matching view
    pub fn toggle_chart_log(self) -> Self {
        let chart_log = self.chart_log.toggled();
        Self {
            active_view: chart_log.view(),
            chart_log,
            ..self
        }
    }

    pub fn cycle(self, field: CycleField, modulus: u8) -> Self {
        match field {
            CycleField::Icon => Self {
                icon_index: cycle_next(self.icon_index, modulus),
                ..self
            },
            CycleField::Mode => Self {
                mode_index: cycle_next(self.mode_index, modulus),
                ..self
            },
        }
    }

    /// Negative values clamp to zero, larger values wrap at 100
    pub fn tick_counter(self, value: i32) -> Self {
        let countdown = (value.max(0) % 100) as u8;
        Self { countdown, ..self }
    }

    /// Process a transition and return the next state
    pub fn transition(self, transition: Transition) -> Self {
        match transition {
            Transition::SwitchView(target) => self.switch_view(target),
            Transition::TogglePauseRun => self.toggle_pause_run(),
            Transition::ToggleChartLog => self.toggle_chart_log(),
            Transition::Cycle { field, modulus } => self.cycle(field, modulus),
            Transition::TickCounter(value) => self.tick_counter(value),
        }
    }
}
