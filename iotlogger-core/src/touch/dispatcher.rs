//! Touch sample to transition dispatch

use super::debounce::DebounceTable;
use crate::config::TouchConfig;
use crate::panel::Panel;
use crate::registry::{ButtonId, ButtonKind};
use crate::traits::{SoundCue, SoundSink, Surface, TouchSample};

/// Turns raw touch samples into at most one activation per contact
#[derive(Debug, Clone)]
pub struct TouchDispatcher {
    debounce: DebounceTable,
    settle_ticks: u8,
}

impl TouchDispatcher {
    pub fn new(config: TouchConfig) -> Self {
        Self {
            debounce: DebounceTable::new(),
            settle_ticks: config.momentary_settle_ticks.max(1),
        }
    }

    /// Handle one sample
    ///
    /// Returns the button that activated on this tick, if any.
    pub fn handle<S, K>(
        &mut self,
        sample: TouchSample,
        panel: &mut Panel,
        surface: &mut S,
        sound: &mut K,
    ) -> Option<ButtonId>
    where
        S: Surface,
        K: SoundSink,
    {
        let Some(point) = sample.contact else {
            self.release(panel);
            return None;
        };

        let Some(id) = panel.buttons().hit_test(point, panel.state().active_view) else {
            self.release(panel);
            return None;
        };

        if self.debounce.held() != Some(id) {
            panel.release_momentary();
        }

        let (kind, action) = match panel.buttons().get(id) {
            Ok(button) => (button.kind(), button.action()),
            Err(e) => {
                log::warn!("touch skipped: {}", e);
                return None;
            }
        };

        let required = match kind {
            ButtonKind::Mode => 1,
            ButtonKind::Momentary => self.settle_ticks,
        };
        if !self.debounce.step(id, required) {
            return None;
        }

        let transition = panel.transition_for(action);
        if let Err(e) = panel.apply(transition, surface) {
            log::warn!("touch skipped: {}", e);
            return None;
        }

        if kind == ButtonKind::Momentary {
            if let Err(e) = panel.set_button_selected(id, true) {
                log::warn!("momentary highlight skipped: {}", e);
            }
        }

        let cue = match kind {
            ButtonKind::Mode => SoundCue::Tab,
            ButtonKind::Momentary => SoundCue::Beep,
        };
        if sound.play(cue).is_err() {
            log::trace!("no feedback cue for {}", id);
        }
        log::debug!("button {} activated", id);
        Some(id)
    }

    fn release(&mut self, panel: &mut Panel) {
        self.debounce.release();
        panel.release_momentary();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PanelConfig;
    use crate::registry::ViewId;
    use crate::state::ChartLog;
    use crate::testing::{init_logging, RecordingSound, RecordingSurface};

    const VIEW_BTN: TouchSample = TouchSample::at(270, 30);
    const MODE_BTN: TouchSample = TouchSample::at(270, 110);
    const ICON_BTN: TouchSample = TouchSample::at(270, 190);
    const NOWHERE: TouchSample = TouchSample::at(20, 100);

    struct Rig {
        dispatcher: TouchDispatcher,
        panel: Panel,
        surface: RecordingSurface,
        sound: RecordingSound,
    }

    impl Rig {
        fn new() -> Self {
            init_logging();
            let config = PanelConfig::default();
            Self {
                dispatcher: TouchDispatcher::new(config.touch),
                panel: Panel::new(&config).unwrap(),
                surface: RecordingSurface::default(),
                sound: RecordingSound::default(),
            }
        }

        fn feed(&mut self, sample: TouchSample) -> Option<ButtonId> {
            self.dispatcher
                .handle(sample, &mut self.panel, &mut self.surface, &mut self.sound)
        }
    }

    #[test]
    fn test_release_is_noop() {
        let mut rig = Rig::new();
        let before = *rig.panel.state();
        assert_eq!(rig.feed(TouchSample::released()), None);
        assert_eq!(*rig.panel.state(), before);
        assert!(rig.sound.played.is_empty());
    }

    #[test]
    fn test_miss_is_noop() {
        let mut rig = Rig::new();
        assert_eq!(rig.feed(NOWHERE), None);
        assert!(rig.sound.played.is_empty());
    }

    #[test]
    fn test_view_button_toggles_once_per_contact() {
        let mut rig = Rig::new();
        assert_eq!(rig.feed(VIEW_BTN), Some(ButtonId::VIEW));
        for _ in 0..10 {
            assert_eq!(rig.feed(VIEW_BTN), None);
        }
        assert_eq!(rig.panel.state().chart_log, ChartLog::Chart);
        assert_eq!(rig.panel.state().active_view, ViewId::CHART);
        assert_eq!(rig.sound.played, vec![SoundCue::Tab]);

        rig.feed(TouchSample::released());
        assert_eq!(rig.feed(VIEW_BTN), Some(ButtonId::VIEW));
        assert_eq!(rig.panel.state().active_view, ViewId::LOG);
    }

    #[test]
    fn test_hidden_button_not_hit() {
        let mut rig = Rig::new();
        assert_eq!(rig.panel.state().active_view, ViewId::SPLASH);
        for _ in 0..5 {
            assert_eq!(rig.feed(ICON_BTN), None);
        }
        assert_eq!(rig.panel.state().icon_index, 1);
    }

    #[test]
    fn test_momentary_settles_then_fires() {
        let mut rig = Rig::new();
        rig.feed(VIEW_BTN);
        rig.feed(TouchSample::released());
        assert_eq!(rig.panel.state().active_view, ViewId::CHART);

        assert_eq!(rig.feed(ICON_BTN), None);
        assert!(!rig.panel.buttons().get(ButtonId::ICON).unwrap().is_selected());
        assert_eq!(rig.feed(ICON_BTN), Some(ButtonId::ICON));
        assert_eq!(rig.feed(ICON_BTN), None);
        assert_eq!(rig.panel.state().icon_index, 2);
        assert!(rig.panel.buttons().get(ButtonId::ICON).unwrap().is_selected());
        assert_eq!(rig.sound.played.last(), Some(&SoundCue::Beep));

        rig.feed(TouchSample::released());
        assert!(!rig.panel.buttons().get(ButtonId::ICON).unwrap().is_selected());
    }

    #[test]
    fn test_sliding_off_momentary_deselects() {
        let mut rig = Rig::new();
        rig.feed(VIEW_BTN);
        rig.feed(TouchSample::released());
        rig.feed(ICON_BTN);
        rig.feed(ICON_BTN);
        assert!(rig.panel.buttons().get(ButtonId::ICON).unwrap().is_selected());

        assert_eq!(rig.feed(MODE_BTN), Some(ButtonId::MODE));
        assert!(!rig.panel.buttons().get(ButtonId::ICON).unwrap().is_selected());
        assert!(rig.panel.state().is_paused());
    }

    type Journal = std::rc::Rc<std::cell::RefCell<Vec<&'static str>>>;

    struct JournalSurface(Journal);

    impl Surface for JournalSurface {
        fn mount(&mut self, _view: ViewId) {
            self.0.borrow_mut().push("mount");
        }

        fn unmount(&mut self, _view: ViewId) {
            self.0.borrow_mut().push("unmount");
        }
    }

    struct JournalSound(Journal);

    impl SoundSink for JournalSound {
        fn play(&mut self, _cue: SoundCue) -> Result<(), crate::traits::CapabilityError> {
            self.0.borrow_mut().push("cue");
            Ok(())
        }
    }

    #[test]
    fn test_cue_follows_applied_transition() {
        init_logging();
        let config = PanelConfig::default();
        let mut dispatcher = TouchDispatcher::new(config.touch);
        let mut panel = Panel::new(&config).unwrap();
        let journal = Journal::default();
        let mut surface = JournalSurface(journal.clone());
        let mut sound = JournalSound(journal.clone());
        panel.mount(&mut surface).unwrap();
        journal.borrow_mut().clear();

        assert_eq!(
            dispatcher.handle(VIEW_BTN, &mut panel, &mut surface, &mut sound),
            Some(ButtonId::VIEW)
        );
        assert_eq!(journal.borrow().as_slice(), &["unmount", "mount", "cue"]);
    }

    #[test]
    fn test_missing_speaker_does_not_block() {
        init_logging();
        let config = PanelConfig::default();
        let mut dispatcher = TouchDispatcher::new(config.touch);
        let mut panel = Panel::new(&config).unwrap();
        let mut surface: Option<RecordingSurface> = None;
        let mut sound: Option<RecordingSound> = None;
        assert_eq!(
            dispatcher.handle(MODE_BTN, &mut panel, &mut surface, &mut sound),
            Some(ButtonId::MODE)
        );
        assert!(panel.state().is_paused());
    }
}
