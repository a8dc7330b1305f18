//! Edge-triggered per-button debounce

use heapless::Vec;

use crate::registry::{ButtonId, MAX_BUTTONS};

#[derive(Debug, Clone, Copy)]
struct Latch {
    id: ButtonId,
    held_ticks: u8,
    fired: bool,
}

/// Contact history for every button currently under the finger
///
/// A latch exists from the first tick a button is hit until the contact
/// leaves it. Each latch fires at most once.
#[derive(Debug, Clone, Default)]
pub struct DebounceTable {
    latches: Vec<Latch, MAX_BUTTONS>,
}

impl DebounceTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance one tick with `hit` under the contact
    ///
    /// `required` is the number of consecutive ticks the button must be
    /// held before it fires. Returns `true` on the tick it fires.
    pub fn step(&mut self, hit: ButtonId, required: u8) -> bool {
        self.latches.retain(|l| l.id == hit);
        if self.latches.is_empty()
            && self
                .latches
                .push(Latch {
                    id: hit,
                    held_ticks: 0,
                    fired: false,
                })
                .is_err()
        {
            return false;
        }
        let Some(latch) = self.latches.first_mut() else {
            return false;
        };
        latch.held_ticks = latch.held_ticks.saturating_add(1);
        if !latch.fired && latch.held_ticks >= required.max(1) {
            latch.fired = true;
            return true;
        }
        false
    }

    /// Contact ended or left every button
    pub fn release(&mut self) {
        self.latches.clear();
    }

    /// Button currently latched, if any
    pub fn held(&self) -> Option<ButtonId> {
        self.latches.first().map(|l| l.id)
    }

    pub fn has_fired(&self, id: ButtonId) -> bool {
        self.latches.iter().any(|l| l.id == id && l.fired)
    }
}
