//! Core types shared across the combat engine

use serde::{Deserialize, Serialize};
use std::fmt;

/// Damage type of an incoming hit
///
/// Each type changes how much of the target's SP applies to the hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DamageType {
    #[default]
    Normal,
    /// Armor piercing: half SP, half penetrating damage
    Ap,
    /// Blades: half SP against soft armor only
    Edged,
    /// Monoblades: 1/3 SP against soft, 2/3 SP against hard
    Mono,
    /// Shotgun slugs: half SP, full penetrating damage
    Slug,
    Fire,
    Explosive,
}

impl DamageType {
    /// Get all damage types
    pub fn all() -> &'static [DamageType] {
        &[
            DamageType::Normal,
            DamageType::Ap,
            DamageType::Edged,
            DamageType::Mono,
            DamageType::Slug,
            DamageType::Fire,
            DamageType::Explosive,
        ]
    }

    /// Fire and explosive rules are applied by hand through the SP override
    pub fn needs_manual_adjustment(self) -> bool {
        matches!(self, DamageType::Fire | DamageType::Explosive)
    }

    pub fn display_name(self) -> &'static str {
        match self {
            DamageType::Normal => "normal",
            DamageType::Ap => "AP",
            DamageType::Edged => "edged",
            DamageType::Mono => "mono",
            DamageType::Slug => "slug",
            DamageType::Fire => "fire",
            DamageType::Explosive => "explosive",
        }
    }
}

impl fmt::Display for DamageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Which wound track a damage/heal operation targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WoundKind {
    /// Real damage: raises stun along with it
    Physical,
    /// Stun only (tasers, fists)
    Stun,
}

/// Which wound penalties an attribute is subject to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PenaltyClass {
    /// Unaffected by wounds (BODY, EMP, ...)
    #[default]
    None,
    /// REF: takes every wound penalty, stabilized or not
    RefOnly,
    /// INT and COOL: halved/thirded at critical/mortal, with a capped loss
    RefIntCl,
}

/// Identifier of an owned armor instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InstanceId(pub u32);

impl fmt::Display for InstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl From<u32> for InstanceId {
    fn from(id: u32) -> Self {
        InstanceId(id)
    }
}
