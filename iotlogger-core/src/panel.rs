//! Panel: registries plus UI state
//!
//! Visual state (button labels, selection, counter text, mounted view) is
//! always re-derived from [`UiState`] after a transition, never edited
//! piecemeal.

use core::fmt::Write;

use heapless::{String, Vec};

use crate::config::{Catalog, PanelConfig};
use crate::error::Error;
use crate::geometry::Size;
use crate::layout::{Layout, COUNTER_MAX_LEN};
use crate::registry::{
    AreaId, AreaRegistry, ButtonAction, ButtonId, ButtonRegistry, ViewId, ViewRegistry,
    MAX_BUTTONS,
};
use crate::state::{ChartLog, CycleField, PauseRun, Transition, UiState};
use crate::traits::{Surface, WrappedLines};

pub const LABEL_PAUSE: &str = "PAUSE";
pub const LABEL_RUN: &str = "RUN";
pub const LABEL_LOG: &str = "LOG";
pub const LABEL_CHART: &str = "CHART";

#[derive(Debug, Clone)]
pub struct Panel {
    state: UiState,
    views: ViewRegistry,
    buttons: ButtonRegistry,
    areas: AreaRegistry,
    icons: Catalog,
    colors: Catalog,
    screen: Size,
}

impl Panel {
    /// Build the standard layout for the configured board
    pub fn new(config: &PanelConfig) -> Result<Self, Error> {
        config.validate()?;
        let screen = config.board.screen_size(config.rotation);
        Self::with_layout(
            screen,
            &Layout::standard(screen),
            config.icons.clone(),
            config.colors.clone(),
        )
    }

    /// Build a panel from an explicit layout
    ///
    /// Every id a view names must be registered. The first view is active.
    pub fn with_layout(
        screen: Size,
        layout: &Layout,
        icons: Catalog,
        colors: Catalog,
    ) -> Result<Self, Error> {
        let mut buttons = ButtonRegistry::new();
        for (id, def) in layout.buttons.iter() {
            buttons.register(*id, *def)?;
        }

        let mut areas = AreaRegistry::new();
        for (id, def) in layout.areas.iter() {
            areas.register(*id, *def)?;
        }

        let mut views = ViewRegistry::new();
        for (view, def) in layout.views.iter() {
            views.register(*view, *def)?;
            for button in def.buttons {
                buttons.add_visibility(*button, *view)?;
            }
            for area in def.areas {
                if !areas.contains(*area) {
                    return Err(Error::UnknownId(area.name()));
                }
            }
        }

        let first = layout
            .views
            .first()
            .map(|(id, _)| *id)
            .ok_or(Error::UnknownId(ViewId::SPLASH.name()))?;

        for button in buttons.iter() {
            match button.action() {
                ButtonAction::SwitchView(target) if !views.contains(target) => {
                    return Err(Error::UnknownId(target.name()));
                }
                ButtonAction::ToggleChartLog => {
                    for target in [ViewId::CHART, ViewId::LOG] {
                        if !views.contains(target) {
                            return Err(Error::UnknownId(target.name()));
                        }
                    }
                }
                _ => {}
            }
        }

        let mut panel = Self {
            state: UiState::default().switch_view(first),
            views,
            buttons,
            areas,
            icons,
            colors,
            screen,
        };
        panel.sync_visuals()?;
        log::info!(
            "panel ready: {} views, {} buttons, {} areas",
            panel.views.len(),
            panel.buttons.len(),
            panel.areas.len()
        );
        Ok(panel)
    }

    pub fn state(&self) -> &UiState {
        &self.state
    }

    pub fn buttons(&self) -> &ButtonRegistry {
        &self.buttons
    }

    pub fn areas(&self) -> &AreaRegistry {
        &self.areas
    }

    pub fn views(&self) -> &ViewRegistry {
        &self.views
    }

    pub fn screen(&self) -> Size {
        self.screen
    }

    /// Name of the selected icon
    pub fn icon(&self) -> &str {
        catalog_entry(&self.icons, self.state.icon_index)
    }

    /// Name of the selected color mode
    pub fn color(&self) -> &str {
        catalog_entry(&self.colors, self.state.mode_index)
    }

    /// Transition bound to a button action
    pub fn transition_for(&self, action: ButtonAction) -> Transition {
        match action {
            ButtonAction::ToggleChartLog => Transition::ToggleChartLog,
            ButtonAction::TogglePauseRun => Transition::TogglePauseRun,
            ButtonAction::CycleIcon => Transition::Cycle {
                field: CycleField::Icon,
                modulus: catalog_len(&self.icons),
            },
            ButtonAction::CycleMode => Transition::Cycle {
                field: CycleField::Mode,
                modulus: catalog_len(&self.colors),
            },
            ButtonAction::SwitchView(view) => Transition::SwitchView(view),
        }
    }

    /// Apply a transition, then bring visuals and the surface in line
    pub fn apply<S: Surface>(&mut self, transition: Transition, surface: &mut S) -> Result<(), Error> {
        let previous = self.state;
        let next = previous.transition(transition);
        if !self.views.contains(next.active_view) {
            return Err(Error::UnknownId(next.active_view.name()));
        }
        self.state = next;
        log::debug!("transition {:?}", transition);
        if previous.active_view != self.state.active_view {
            log::info!(
                "view {} -> {}",
                previous.active_view,
                self.state.active_view
            );
        }
        self.sync_visuals()?;
        self.mount(surface)
    }

    /// Mount the active view on the surface
    pub fn mount<S: Surface>(&mut self, surface: &mut S) -> Result<(), Error> {
        self.views.mount(self.state.active_view, surface)?;
        Ok(())
    }

    pub fn set_area_text(&mut self, id: AreaId, text: &str) -> Result<bool, Error> {
        self.areas.set_text(id, text)
    }

    pub fn set_area_lines(&mut self, id: AreaId, lines: WrappedLines) -> Result<(), Error> {
        self.areas.set_lines(id, lines)
    }

    pub fn set_area_enabled(&mut self, id: AreaId, enabled: bool) -> Result<(), Error> {
        self.areas.set_enabled(id, enabled)
    }

    pub fn set_button_selected(&mut self, id: ButtonId, selected: bool) -> Result<(), Error> {
        self.buttons.set_selected(id, selected)
    }

    /// Deselect every momentary button
    pub fn release_momentary(&mut self) {
        self.buttons.release_momentary();
    }

    fn sync_visuals(&mut self) -> Result<(), Error> {
        let state = self.state;
        let bindings: Vec<(ButtonId, ButtonAction), MAX_BUTTONS> =
            self.buttons.iter().map(|b| (b.id(), b.action())).collect();
        for (id, action) in bindings {
            match action {
                ButtonAction::ToggleChartLog => {
                    let (label, selected) = match state.chart_log {
                        ChartLog::Log => (LABEL_CHART, false),
                        ChartLog::Chart => (LABEL_LOG, true),
                    };
                    self.buttons.set_label(id, label)?;
                    self.buttons.set_selected(id, selected)?;
                }
                ButtonAction::TogglePauseRun => {
                    let (label, selected) = match state.pause_run {
                        PauseRun::Run => (LABEL_PAUSE, true),
                        PauseRun::Pause => (LABEL_RUN, false),
                    };
                    self.buttons.set_label(id, label)?;
                    self.buttons.set_selected(id, selected)?;
                }
                ButtonAction::CycleIcon => {
                    self.buttons
                        .set_label(id, catalog_entry(&self.icons, state.icon_index))?;
                }
                ButtonAction::CycleMode => {
                    self.buttons
                        .set_label(id, catalog_entry(&self.colors, state.mode_index))?;
                }
                ButtonAction::SwitchView(view) => {
                    self.buttons.set_selected(id, state.active_view == view)?;
                }
            }
        }

        if self.areas.contains(AreaId::COUNTER) {
            let text = format_counter(state.countdown);
            self.areas.set_text(AreaId::COUNTER, &text)?;
        }
        Ok(())
    }
}

/// Two digits, right aligned
pub fn format_counter(value: u8) -> String<COUNTER_MAX_LEN> {
    let mut text = String::new();
    let _ = write!(text, "{:>2}", value % 100);
    text
}

fn catalog_len(catalog: &Catalog) -> u8 {
    catalog.len().min(usize::from(u8::MAX)) as u8
}

fn catalog_entry(catalog: &Catalog, index: u8) -> &str {
    usize::from(index)
        .checked_sub(1)
        .and_then(|i| catalog.get(i))
        .map(|s| s.as_str())
        .unwrap_or("")
}
