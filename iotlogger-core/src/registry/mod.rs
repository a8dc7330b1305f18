//! Fixed registries of views, buttons and text areas
//!
//! Entries are registered once at init and live for the process lifetime.
//! Registration order is the priority order used for touch hit testing.

pub mod area;
pub mod button;
pub mod ids;
pub mod view;

pub use area::{Area, AreaDef, AreaRegistry, AreaText, AREA_TEXT_CAP};
pub use button::{Button, ButtonAction, ButtonDef, ButtonKind, ButtonRegistry, Label};
pub use ids::{AreaId, ButtonId, ViewId};
pub use view::{View, ViewDef, ViewRegistry};

/// Maximum views per panel
pub const MAX_VIEWS: usize = 8;

/// Maximum buttons per panel
pub const MAX_BUTTONS: usize = 8;

/// Maximum text areas per panel
pub const MAX_AREAS: usize = 8;

/// Maximum label length in bytes
pub const MAX_LABEL_LEN: usize = 16;
