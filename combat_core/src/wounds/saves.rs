//! Survival checks - Stun and death save targets from wound severity

use super::level::{WoundLevel, WoundTrack};
use super::tracker::WoundState;
use serde::{Deserialize, Serialize};

/// Penalty to stun saves at a wound level
pub fn stun_save_penalty(level: Option<WoundLevel>) -> u32 {
    match level {
        None | Some(WoundLevel::Light) => 0,
        Some(WoundLevel::Serious) => 1,
        Some(WoundLevel::Critical) => 2,
        Some(WoundLevel::Mortal(tier)) => tier.saturating_add(3),
    }
}

/// Penalty to death saves, `None` outside the mortal bands
pub fn death_save_penalty(level: Option<WoundLevel>) -> Option<u32> {
    level.and_then(WoundLevel::mortal_tier)
}

/// Save targets for the current wounds (roll at or under to pass)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurvivalChecks {
    pub stun_save_target: i32,
    /// Present while a death save is required (mortal, not stabilized)
    pub death_save_target: Option<i32>,
}

impl SurvivalChecks {
    /// Compute save targets from the BODY attribute and wound state
    pub fn for_state(body: u32, state: &WoundState, track: &WoundTrack) -> Self {
        let level = state.level(track);
        let body = i32::try_from(body).unwrap_or(i32::MAX);
        let stun_penalty = i32::try_from(stun_save_penalty(level)).unwrap_or(i32::MAX);

        let death_save_target = if state.stabilized {
            None
        } else {
            death_save_penalty(level)
                .map(|penalty| body.saturating_sub(i32::try_from(penalty).unwrap_or(i32::MAX)))
        };

        SurvivalChecks {
            stun_save_target: body.saturating_sub(stun_penalty),
            death_save_target,
        }
    }
}
