//! On-screen buttons

use heapless::{String, Vec};

use super::{ButtonId, ViewId, MAX_BUTTONS, MAX_LABEL_LEN, MAX_VIEWS};
use crate::error::Error;
use crate::geometry::{Point, Rect};

pub type Label = String<MAX_LABEL_LEN>;

/// How a button reacts to contact
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonKind {
    /// Toggles persistent state; `selected` mirrors that state
    Mode,
    /// One-shot action; selected only while held
    Momentary,
}

/// Transition bound to a button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonAction {
    ToggleChartLog,
    TogglePauseRun,
    CycleIcon,
    CycleMode,
    SwitchView(ViewId),
}

/// Static definition of a button
#[derive(Debug, Clone, Copy)]
pub struct ButtonDef {
    pub label: &'static str,
    pub kind: ButtonKind,
    pub rect: Rect,
    pub action: ButtonAction,
}

/// A registered button
#[derive(Debug, Clone)]
pub struct Button {
    id: ButtonId,
    label: Label,
    selected: bool,
    kind: ButtonKind,
    rect: Rect,
    action: ButtonAction,
    visible_in: Vec<ViewId, MAX_VIEWS>,
}

impl Button {
    pub fn id(&self) -> ButtonId {
        self.id
    }

    pub fn label(&self) -> &str {
        self.label.as_str()
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    pub fn kind(&self) -> ButtonKind {
        self.kind
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn action(&self) -> ButtonAction {
        self.action
    }

    pub fn is_visible_in(&self, view: ViewId) -> bool {
        self.visible_in.contains(&view)
    }

    pub fn visible_in(&self) -> &[ViewId] {
        &self.visible_in
    }
}

/// Copy a label, truncating at the buffer limit
fn to_label(text: &str) -> Label {
    let mut label = Label::new();
    for c in text.chars() {
        if label.push(c).is_err() {
            break;
        }
    }
    label
}

/// Registry of all buttons, in hit-test priority order
#[derive(Debug, Clone, Default)]
pub struct ButtonRegistry {
    buttons: Vec<Button, MAX_BUTTONS>,
}

impl ButtonRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a button. Init time only.
    pub fn register(&mut self, id: ButtonId, def: ButtonDef) -> Result<(), Error> {
        if self.contains(id) {
            return Err(Error::DuplicateId(id.name()));
        }
        let button = Button {
            id,
            label: to_label(def.label),
            selected: false,
            kind: def.kind,
            rect: def.rect,
            action: def.action,
            visible_in: Vec::new(),
        };
        self.buttons
            .push(button)
            .map_err(|_| Error::CapacityExceeded)
    }

    pub fn contains(&self, id: ButtonId) -> bool {
        self.buttons.iter().any(|b| b.id == id)
    }

    pub fn get(&self, id: ButtonId) -> Result<&Button, Error> {
        self.buttons
            .iter()
            .find(|b| b.id == id)
            .ok_or(Error::UnknownId(id.name()))
    }

    fn get_mut(&mut self, id: ButtonId) -> Result<&mut Button, Error> {
        self.buttons
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or(Error::UnknownId(id.name()))
    }

    pub fn set_label(&mut self, id: ButtonId, label: &str) -> Result<(), Error> {
        self.get_mut(id)?.label = to_label(label);
        Ok(())
    }

    pub fn set_selected(&mut self, id: ButtonId, selected: bool) -> Result<(), Error> {
        self.get_mut(id)?.selected = selected;
        Ok(())
    }

    /// Deselect every momentary button
    pub fn release_momentary(&mut self) {
        for button in self.buttons.iter_mut() {
            if button.kind == ButtonKind::Momentary {
                button.selected = false;
            }
        }
    }

    /// Record that a view contains this button
    pub fn add_visibility(&mut self, id: ButtonId, view: ViewId) -> Result<(), Error> {
        let button = self.get_mut(id)?;
        if !button.visible_in.contains(&view) {
            button
                .visible_in
                .push(view)
                .map_err(|_| Error::CapacityExceeded)?;
        }
        Ok(())
    }

    /// First button visible in `view` whose rectangle contains `point`
    pub fn hit_test(&self, point: Point, view: ViewId) -> Option<ButtonId> {
        self.buttons
            .iter()
            .find(|b| b.is_visible_in(view) && b.rect.contains(point))
            .map(|b| b.id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Button> {
        self.buttons.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = ButtonId> + '_ {
        self.buttons.iter().map(|b| b.id)
    }

    pub fn len(&self) -> usize {
        self.buttons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buttons.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn def(rect: Rect) -> ButtonDef {
        ButtonDef {
            label: "CHART",
            kind: ButtonKind::Mode,
            rect,
            action: ButtonAction::ToggleChartLog,
        }
    }

    #[test]
    fn test_register_and_get() {
        let mut buttons = ButtonRegistry::new();
        buttons
            .register(ButtonId::VIEW, def(Rect::new(241, 3, 76, 76)))
            .unwrap();
        let b = buttons.get(ButtonId::VIEW).unwrap();
        assert_eq!(b.label(), "CHART");
        assert!(!b.is_selected());
        assert!(b.visible_in().is_empty());
    }

    #[test]
    fn test_duplicate_rejected() {
        let mut buttons = ButtonRegistry::new();
        buttons.register(ButtonId::VIEW, def(Rect::default())).unwrap();
        assert_eq!(
            buttons.register(ButtonId::VIEW, def(Rect::default())),
            Err(Error::DuplicateId("view"))
        );
    }

    #[test]
    fn test_hit_test_requires_visibility() {
        let mut buttons = ButtonRegistry::new();
        buttons
            .register(ButtonId::ICON, def(Rect::new(0, 0, 50, 50)))
            .unwrap();
        assert_eq!(buttons.hit_test(Point::new(10, 10), ViewId::CHART), None);

        buttons.add_visibility(ButtonId::ICON, ViewId::CHART).unwrap();
        assert_eq!(
            buttons.hit_test(Point::new(10, 10), ViewId::CHART),
            Some(ButtonId::ICON)
        );
        assert_eq!(buttons.hit_test(Point::new(10, 10), ViewId::LOG), None);
        assert_eq!(buttons.hit_test(Point::new(60, 10), ViewId::CHART), None);
    }

    #[test]
    fn test_hit_test_registration_order_wins() {
        let mut buttons = ButtonRegistry::new();
        buttons
            .register(ButtonId::VIEW, def(Rect::new(0, 0, 50, 50)))
            .unwrap();
        buttons
            .register(ButtonId::MODE, def(Rect::new(25, 25, 50, 50)))
            .unwrap();
        for id in [ButtonId::VIEW, ButtonId::MODE] {
            buttons.add_visibility(id, ViewId::SPLASH).unwrap();
        }
        assert_eq!(
            buttons.hit_test(Point::new(30, 30), ViewId::SPLASH),
            Some(ButtonId::VIEW)
        );
        assert_eq!(
            buttons.hit_test(Point::new(60, 60), ViewId::SPLASH),
            Some(ButtonId::MODE)
        );
    }

    #[test]
    fn test_visibility_not_duplicated() {
        let mut buttons = ButtonRegistry::new();
        buttons.register(ButtonId::VIEW, def(Rect::default())).unwrap();
        buttons.add_visibility(ButtonId::VIEW, ViewId::LOG).unwrap();
        buttons.add_visibility(ButtonId::VIEW, ViewId::LOG).unwrap();
        assert_eq!(buttons.get(ButtonId::VIEW).unwrap().visible_in(), &[ViewId::LOG]);
    }

    #[test]
    fn test_label_truncated() {
        let mut buttons = ButtonRegistry::new();
        buttons.register(ButtonId::COLOR, def(Rect::default())).unwrap();
        buttons
            .set_label(ButtonId::COLOR, "A VERY LONG BUTTON LABEL")
            .unwrap();
        assert_eq!(buttons.get(ButtonId::COLOR).unwrap().label(), "A VERY LONG BUTT");
    }

    #[test]
    fn test_unknown_button() {
        let mut buttons = ButtonRegistry::new();
        assert_eq!(
            buttons.set_selected(ButtonId::MODE, true),
            Err(Error::UnknownId("mode"))
        );
    }
}
