//! Hardware-independent display collaborators for the f451 IoT Logger
//!
//! This crate provides:
//! - `WordWrap`, the `TextRenderer` used for the log area
//! - `GroupSurface`, a `Surface` that tracks which view group is shown
//! - `DisplayBackend` trait for character-cell displays
//! - `TextGrid`, an in-memory `DisplayBackend`
//! - `SceneRenderer`, which draws the active view of a `Panel`
//!
//! # Architecture
//!
//! The panel core decides what is visible. A board crate pairs a
//! `GroupSurface` with its vendor display driver, wraps text with
//! `WordWrap` and, on text-mode displays, redraws the scene after each
//! tick through its `DisplayBackend` implementation.

#![cfg_attr(not(test), no_std)]

pub mod backend;
pub mod scene;
pub mod screen;
pub mod surface;
pub mod wrap;

// Re-export key types
pub use backend::{DisplayBackend, DisplayError};
pub use scene::{SceneRenderer, CELL_HEIGHT, CELL_WIDTH};
pub use screen::{TextGrid, MAX_COLS, MAX_ROWS};
pub use surface::GroupSurface;
pub use wrap::WordWrap;
