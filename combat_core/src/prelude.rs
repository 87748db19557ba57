//! Prelude module for convenient imports
//!
//! ```rust
//! use combat_core::prelude::*;
//! ```

// Core types
pub use crate::body::{BodyMap, BodyPart};
pub use crate::types::{DamageType, InstanceId, PenaltyClass, WoundKind};

// Armor
pub use crate::armor::{
    ArmorCatalog, ArmorClass, ArmorError, ArmorLoadout, ArmorTemplate, LayerError, LayerKind,
};

// Combat
pub use crate::combat::{resolve_hit, Hit, HitRecord};

// Wounds and stats
pub use crate::stats::Attribute;
pub use crate::wounds::{SurvivalChecks, WoundLevel, WoundState};

// Session
pub use crate::character::Character;

// Config
pub use crate::config::RulesConfig;
