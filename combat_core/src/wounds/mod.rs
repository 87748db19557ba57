//! Wound tracking - Box counters, severity levels, survival checks

mod level;
mod saves;
mod tracker;

pub use level::{wound_level, WoundLevel, WoundTrack};
pub use saves::{death_save_penalty, stun_save_penalty, SurvivalChecks};
pub use tracker::WoundState;
