//! Wound levels - Discrete severity bands over a box counter

use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity band of a wound counter
///
/// Ordered: `Light < Serious < Critical < Mortal(0) < ... < Mortal(n)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WoundLevel {
    Light,
    Serious,
    Critical,
    /// Mortal tier, 0-based
    Mortal(u32),
}

impl WoundLevel {
    /// 0-based position in the track
    pub fn index(self) -> u32 {
        match self {
            WoundLevel::Light => 0,
            WoundLevel::Serious => 1,
            WoundLevel::Critical => 2,
            WoundLevel::Mortal(tier) => tier.saturating_add(3),
        }
    }

    fn from_index(index: u32) -> Self {
        match index {
            0 => WoundLevel::Light,
            1 => WoundLevel::Serious,
            2 => WoundLevel::Critical,
            n => WoundLevel::Mortal(n - 3),
        }
    }

    pub fn is_mortal(self) -> bool {
        matches!(self, WoundLevel::Mortal(_))
    }

    pub fn mortal_tier(self) -> Option<u32> {
        match self {
            WoundLevel::Mortal(tier) => Some(tier),
            _ => None,
        }
    }
}

impl fmt::Display for WoundLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WoundLevel::Light => f.write_str("Light"),
            WoundLevel::Serious => f.write_str("Serious"),
            WoundLevel::Critical => f.write_str("Critical"),
            WoundLevel::Mortal(tier) => write!(f, "Mortal {}", tier),
        }
    }
}

/// Shape of the wound track
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WoundTrack {
    /// Boxes in each severity band
    #[serde(default = "default_boxes_per_level")]
    pub boxes_per_level: u32,
    /// Number of mortal tiers after Critical
    #[serde(default = "default_mortal_levels")]
    pub mortal_levels: u32,
}

impl Default for WoundTrack {
    fn default() -> Self {
        WoundTrack {
            boxes_per_level: default_boxes_per_level(),
            mortal_levels: default_mortal_levels(),
        }
    }
}

fn default_boxes_per_level() -> u32 {
    4
}
fn default_mortal_levels() -> u32 {
    7
}

impl WoundTrack {
    /// Light, Serious, Critical plus the mortal tiers
    pub fn level_count(&self) -> u32 {
        self.mortal_levels.saturating_add(3)
    }

    pub fn total_boxes(&self) -> u32 {
        self.level_count().saturating_mul(self.boxes_per_level)
    }

    /// Counter values above this are mortal
    pub fn mortal_threshold(&self) -> u32 {
        self.boxes_per_level.saturating_mul(3)
    }

    /// The most severe level the track can reach
    pub fn terminal_level(&self) -> WoundLevel {
        WoundLevel::from_index(self.level_count().saturating_sub(1))
    }

    /// Classify a counter value, `None` when unhurt
    pub fn level(&self, value: u32) -> Option<WoundLevel> {
        if value == 0 || self.boxes_per_level == 0 {
            return None;
        }
        let index = (value - 1) / self.boxes_per_level;
        let last = self.level_count().saturating_sub(1);
        Some(WoundLevel::from_index(index.min(last)))
    }
}

/// Classify a counter value on the default track
pub fn wound_level(value: u32) -> Option<WoundLevel> {
    WoundTrack::default().level(value)
}
