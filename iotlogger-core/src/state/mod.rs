//! UI state machine
//!
//! A single tagged value holds every piece of UI state. All mutation goes
//! through [`Transition`]s so the panel can re-derive visuals afterwards.

pub mod events;
pub mod machine;

pub use events::{CycleField, Transition};
pub use machine::{cycle_next, ChartLog, PauseRun, UiState};
