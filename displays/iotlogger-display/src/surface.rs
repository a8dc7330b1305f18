//! View group tracking

use iotlogger_core::traits::Surface;
use iotlogger_core::ViewId;

/// Tracks which view group is shown
///
/// Board crates call `take_dirty` after each tick to decide whether the
/// vendor display needs a redraw.
#[derive(Debug, Clone, Default)]
pub struct GroupSurface {
    shown: Option<ViewId>,
    mounts: u32,
    unmounts: u32,
    dirty: bool,
}

impl GroupSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shown(&self) -> Option<ViewId> {
        self.shown
    }

    pub fn mounts(&self) -> u32 {
        self.mounts
    }

    pub fn unmounts(&self) -> u32 {
        self.unmounts
    }

    /// Return and clear the redraw flag
    pub fn take_dirty(&mut self) -> bool {
        core::mem::replace(&mut self.dirty, false)
    }
}

impl Surface for GroupSurface {
    fn mount(&mut self, view: ViewId) {
        if let Some(previous) = self.shown {
            if previous != view {
                log::warn!("mount {} while {} still shown", view, previous);
            }
        }
        log::debug!("show group {}", view);
        self.shown = Some(view);
        self.mounts += 1;
        self.dirty = true;
    }

    fn unmount(&mut self, view: ViewId) {
        if self.shown == Some(view) {
            self.shown = None;
        }
        log::debug!("hide group {}", view);
        self.unmounts += 1;
        self.dirty = true;
    }
}
