//! WoundState - Physical/stun box counters and stabilization

use super::level::{WoundLevel, WoundTrack};
use crate::types::WoundKind;
use serde::{Deserialize, Serialize};

/// Current wounds of the character
///
/// Holds `0 <= physical <= stun <= total_boxes` after every transition.
/// Transitions take the state by value and return the next one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WoundState {
    pub physical: u32,
    pub stun: u32,
    /// Death saves suspended; only meaningful in a mortal band
    #[serde(default)]
    pub stabilized: bool,
}

impl WoundState {
    /// Unhurt
    pub fn new() -> Self {
        Self::default()
    }

    /// Governing severity, taken from the stun counter
    pub fn level(&self, track: &WoundTrack) -> Option<WoundLevel> {
        track.level(self.stun)
    }

    /// Severity of physical damage alone
    pub fn physical_level(&self, track: &WoundTrack) -> Option<WoundLevel> {
        track.level(self.physical)
    }

    pub fn is_mortal(&self, track: &WoundTrack) -> bool {
        self.level(track).is_some_and(WoundLevel::is_mortal)
    }

    /// Mortal and not stabilized
    pub fn requires_death_save(&self, track: &WoundTrack) -> bool {
        self.is_mortal(track) && !self.stabilized
    }

    /// Add damage
    ///
    /// Physical damage raises stun by the same amount; stun damage raises stun only.
    pub fn apply_damage(self, amount: u32, kind: WoundKind, track: &WoundTrack) -> Self {
        let mut next = self;
        if kind == WoundKind::Physical {
            next.physical = self.physical.saturating_add(amount);
        }
        next.stun = self.stun.saturating_add(amount);
        next.settle(self, track)
    }

    /// Remove damage; healing physical also heals the matching stun
    pub fn heal(self, amount: u32, kind: WoundKind, track: &WoundTrack) -> Self {
        let mut next = self;
        if kind == WoundKind::Physical {
            next.physical = self.physical.saturating_sub(amount);
        }
        next.stun = self.stun.saturating_sub(amount);
        next.settle(self, track)
    }

    /// Set a counter directly (click-to-set wound boxes)
    ///
    /// With `sync_stun`, setting physical makes stun mirror it exactly instead
    /// of only lifting stun to at least the new physical value.
    pub fn set_damage(
        self,
        value: u32,
        kind: WoundKind,
        sync_stun: bool,
        track: &WoundTrack,
    ) -> Self {
        let mut next = self;
        match kind {
            WoundKind::Physical => {
                next.physical = value;
                if sync_stun {
                    next.stun = value;
                }
            }
            WoundKind::Stun => next.stun = value,
        }
        next.settle(self, track)
    }

    /// Set stabilization; stabilizing outside a mortal band has no effect
    pub fn set_stabilized(self, stabilized: bool, track: &WoundTrack) -> Self {
        WoundState {
            stabilized: stabilized && self.is_mortal(track),
            ..self
        }
    }

    /// Repair a state loaded from storage
    ///
    /// Clamps both counters into the track, lifts stun to physical, and drops a
    /// stabilization flag that has no mortal band to apply to.
    pub fn sanitized(self, track: &WoundTrack) -> Self {
        let physical = self.physical.min(track.total_boxes());
        let state = WoundState {
            physical,
            stun: self.stun.clamp(physical, track.total_boxes()),
            stabilized: self.stabilized,
        };
        state.set_stabilized(state.stabilized, track)
    }

    /// Clamp counters, restore `physical <= stun`, and apply the stabilization rules
    fn settle(mut self, before: WoundState, track: &WoundTrack) -> Self {
        let total = track.total_boxes();
        self.physical = self.physical.min(total);
        self.stun = self.stun.clamp(self.physical, total);

        let old_level = before.level(track);
        match self.level(track) {
            // A fresh mortal tier always needs a new stabilization
            Some(level @ WoundLevel::Mortal(_)) if Some(level) > old_level => {
                self.stabilized = false
            }
            Some(WoundLevel::Mortal(_)) => {}
            _ => self.stabilized = false,
        }
        self
    }
}
