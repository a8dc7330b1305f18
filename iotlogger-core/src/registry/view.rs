//! Views and mount reconciliation

use heapless::Vec;

use super::{AreaId, ButtonId, ViewId, MAX_AREAS, MAX_BUTTONS, MAX_VIEWS};
use crate::error::Error;
use crate::traits::Surface;

/// Static definition of a view's members
#[derive(Debug, Clone, Copy)]
pub struct ViewDef {
    pub buttons: &'static [ButtonId],
    pub areas: &'static [AreaId],
}

/// A named group of buttons and areas
#[derive(Debug, Clone)]
pub struct View {
    id: ViewId,
    buttons: Vec<ButtonId, MAX_BUTTONS>,
    areas: Vec<AreaId, MAX_AREAS>,
}

impl View {
    pub fn id(&self) -> ViewId {
        self.id
    }

    pub fn buttons(&self) -> &[ButtonId] {
        &self.buttons
    }

    pub fn areas(&self) -> &[AreaId] {
        &self.areas
    }

    pub fn contains_area(&self, area: AreaId) -> bool {
        self.areas.contains(&area)
    }
}

/// Registry of views plus the view currently mounted on the surface
#[derive(Debug, Clone, Default)]
pub struct ViewRegistry {
    views: Vec<View, MAX_VIEWS>,
    mounted: Option<ViewId>,
}

impl ViewRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a view. Member ids are checked by the caller.
    pub fn register(&mut self, id: ViewId, def: ViewDef) -> Result<(), Error> {
        if self.contains(id) {
            return Err(Error::DuplicateId(id.name()));
        }
        let buttons = Vec::from_slice(def.buttons).map_err(|_| Error::CapacityExceeded)?;
        let areas = Vec::from_slice(def.areas).map_err(|_| Error::CapacityExceeded)?;
        self.views
            .push(View { id, buttons, areas })
            .map_err(|_| Error::CapacityExceeded)
    }

    pub fn contains(&self, id: ViewId) -> bool {
        self.views.iter().any(|v| v.id == id)
    }

    pub fn get(&self, id: ViewId) -> Result<&View, Error> {
        self.views
            .iter()
            .find(|v| v.id == id)
            .ok_or(Error::UnknownId(id.name()))
    }

    pub fn mounted(&self) -> Option<ViewId> {
        self.mounted
    }

    /// Bring the surface in line with `target`
    ///
    /// Unmounts the previous view first. Returns `Ok(false)` when `target`
    /// is already mounted and nothing was sent to the surface.
    pub fn mount<S: Surface>(&mut self, target: ViewId, surface: &mut S) -> Result<bool, Error> {
        if !self.contains(target) {
            return Err(Error::UnknownId(target.name()));
        }
        if self.mounted == Some(target) {
            return Ok(false);
        }
        if let Some(previous) = self.mounted.take() {
            surface.unmount(previous);
        }
        surface.mount(target);
        self.mounted = Some(target);
        Ok(true)
    }

    pub fn iter(&self) -> impl Iterator<Item = &View> {
        self.views.iter()
    }

    pub fn len(&self) -> usize {
        self.views.len()
    }

    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingSurface;

    fn registry() -> ViewRegistry {
        let mut views = ViewRegistry::new();
        views
            .register(
                ViewId::SPLASH,
                ViewDef {
                    buttons: &[ButtonId::VIEW],
                    areas: &[AreaId::HEADER],
                },
            )
            .unwrap();
        views
            .register(
                ViewId::LOG,
                ViewDef {
                    buttons: &[ButtonId::VIEW],
                    areas: &[AreaId::HEADER, AreaId::LOG],
                },
            )
            .unwrap();
        views
    }

    #[test]
    fn test_members_kept_in_order() {
        let views = registry();
        let log = views.get(ViewId::LOG).unwrap();
        assert_eq!(log.areas(), &[AreaId::HEADER, AreaId::LOG]);
        assert!(log.contains_area(AreaId::LOG));
        assert!(!views.get(ViewId::SPLASH).unwrap().contains_area(AreaId::LOG));
    }

    #[test]
    fn test_mount_swaps_views() {
        let mut views = registry();
        let mut surface = RecordingSurface::default();

        assert_eq!(views.mount(ViewId::SPLASH, &mut surface), Ok(true));
        assert_eq!(views.mount(ViewId::LOG, &mut surface), Ok(true));
        assert_eq!(views.mounted(), Some(ViewId::LOG));
        assert_eq!(surface.shown.as_slice(), &[ViewId::LOG]);
        assert_eq!(surface.unmounts, 1);
    }

    #[test]
    fn test_mount_idempotent() {
        let mut views = registry();
        let mut surface = RecordingSurface::default();
        views.mount(ViewId::LOG, &mut surface).unwrap();
        assert_eq!(views.mount(ViewId::LOG, &mut surface), Ok(false));
        assert_eq!(surface.mounts, 1);
    }

    #[test]
    fn test_mount_unknown_view() {
        let mut views = registry();
        let mut surface = RecordingSurface::default();
        views.mount(ViewId::SPLASH, &mut surface).unwrap();
        assert_eq!(
            views.mount(ViewId::CHART, &mut surface),
            Err(Error::UnknownId("chart"))
        );
        assert_eq!(views.mounted(), Some(ViewId::SPLASH));
    }

    #[test]
    fn test_duplicate_view() {
        let mut views = registry();
        let def = ViewDef {
            buttons: &[],
            areas: &[],
        };
        assert_eq!(
            views.register(ViewId::LOG, def),
            Err(Error::DuplicateId("log"))
        );
    }
}
