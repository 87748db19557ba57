//! combat_core - Combat resolution engine for a tabletop character sheet
//!
//! This library provides:
//! - Armor: Templates, owned instances, proportional SP stacking, layering limits, encumbrance
//! - Hit Resolution: Damage-type SP modifiers, ablation, head multiplier, BTM
//! - Wounds: Physical/stun track, wound levels, stabilization, survival checks
//! - Stats: Wound and encumbrance penalties on current attribute values
//! - Character: The session state holder tying the above together

pub mod armor;
pub mod body;
pub mod character;
pub mod combat;
pub mod config;
pub mod prelude;
pub mod stats;
pub mod types;
pub mod wounds;

// Re-export core types for convenience
pub use armor::{
    effective_sp, ArmorCatalog, ArmorClass, ArmorError, ArmorInstance, ArmorLoadout, ArmorPiece,
    ArmorTemplate, EvResult, LayerError, LayerKind, LayerLimits,
};
pub use body::{body_type_modifier, BodyMap, BodyPart};
pub use character::Character;
pub use combat::{resolve_hit, Hit, HitRecord, HitRules, LayerLoss};
pub use config::{ConfigError, RulesConfig};
pub use stats::{current_attribute, Attribute};
pub use types::{DamageType, InstanceId, PenaltyClass, WoundKind};
pub use wounds::{wound_level, SurvivalChecks, WoundLevel, WoundState, WoundTrack};
