//! HitRecord - Outcome of resolving one hit
//!
//! The record is stored verbatim by the history ledger and replayed for undo,
//! so field names are part of its persisted format.

use crate::body::BodyPart;
use crate::types::{DamageType, InstanceId};
use serde::{Deserialize, Serialize};

/// SP removed from one armor layer by a hit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayerLoss {
    pub instance_id: InstanceId,
    pub amount: u32,
}

/// Result of resolving a hit against the character's armor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HitRecord {
    // === Input ===
    /// Damage rolled by the attacker
    pub raw_damage: u32,
    pub damage_type: DamageType,
    /// Hit location, `None` for non-locational damage
    pub part: Option<BodyPart>,

    // === Armor ===
    /// Stacked SP at the part before the hit
    pub effective_sp: u32,
    /// SP the hit actually had to beat after damage-type modifiers
    pub sp_used: u32,
    /// SP lost per layer
    #[serde(default)]
    pub layer_losses: Vec<LayerLoss>,

    // === Damage ===
    /// Damage that got through the armor (after AP halving)
    pub penetrating: u32,
    /// Damage applied to the wound track
    pub wound_damage: u32,
    /// Body Type Modifier subtracted from the wound damage
    pub btm: u32,

    // === Flags ===
    pub sp_ignored: bool,
    pub head_multiplier_applied: bool,
    /// SP forced by the caller instead of computed
    #[serde(default)]
    pub sp_override: Option<u32>,
    /// Damage type has rules the engine leaves to the player
    #[serde(default)]
    pub manual_adjustment: bool,
}

impl HitRecord {
    /// Create an empty record for a hit
    pub fn new(raw_damage: u32, damage_type: DamageType, part: Option<BodyPart>, btm: u32) -> Self {
        HitRecord {
            raw_damage,
            damage_type,
            part,
            effective_sp: 0,
            sp_used: 0,
            layer_losses: Vec::new(),
            penetrating: 0,
            wound_damage: 0,
            btm,
            sp_ignored: false,
            head_multiplier_applied: false,
            sp_override: None,
            manual_adjustment: damage_type.needs_manual_adjustment(),
        }
    }

    /// Whether any damage reached the wound track
    pub fn penetrated(&self) -> bool {
        self.wound_damage > 0
    }

    /// Total SP removed from all layers
    pub fn total_sp_lost(&self) -> u32 {
        self.layer_losses.iter().map(|l| l.amount).sum()
    }

    /// SP lost by one instance
    pub fn sp_lost_by(&self, id: InstanceId) -> u32 {
        self.layer_losses
            .iter()
            .filter(|l| l.instance_id == id)
            .map(|l| l.amount)
            .sum()
    }

    /// Get a summary string
    pub fn summary(&self) -> String {
        let location = self.part.map_or("body", BodyPart::display_name);
        let mut parts = vec![format!(
            "{} {} damage to {}",
            self.raw_damage, self.damage_type, location
        )];

        if self.sp_ignored {
            parts.push("SP ignored".to_string());
        } else if self.part.is_some() {
            parts.push(format!("SP {}", self.sp_used));
        }

        let lost = self.total_sp_lost();
        if lost > 0 {
            parts.push(format!("{} SP ablated", lost));
        }

        if self.head_multiplier_applied {
            parts.push("head x2".to_string());
        }

        if self.wound_damage > 0 {
            parts.push(format!("{} wounds", self.wound_damage));
        } else {
            parts.push("stopped".to_string());
        }

        if self.manual_adjustment {
            parts.push("apply manually".to_string());
        }

        parts.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_record_flags_manual_types() {
        assert!(!HitRecord::new(10, DamageType::Normal, None, 0).manual_adjustment);
        assert!(HitRecord::new(10, DamageType::Fire, None, 0).manual_adjustment);
        assert!(HitRecord::new(10, DamageType::Explosive, None, 0).manual_adjustment);
    }

    #[test]
    fn test_sp_lost_totals() {
        let mut record = HitRecord::new(30, DamageType::Normal, Some(BodyPart::Torso), 2);
        record.layer_losses.push(LayerLoss { instance_id: InstanceId(1), amount: 3 });
        record.layer_losses.push(LayerLoss { instance_id: InstanceId(2), amount: 1 });

        assert_eq!(record.total_sp_lost(), 4);
        assert_eq!(record.sp_lost_by(InstanceId(1)), 3);
        assert_eq!(record.sp_lost_by(InstanceId(9)), 0);
    }

    #[test]
    fn test_summary() {
        let mut record = HitRecord::new(30, DamageType::Normal, Some(BodyPart::Head), 2);
        record.sp_used = 10;
        record.head_multiplier_applied = true;
        record.wound_damage = 38;

        let summary = record.summary();
        assert!(summary.contains("head"));
        assert!(summary.contains("x2"));
        assert!(summary.contains("38 wounds"));
    }

    #[test]
    fn test_stopped_summary() {
        let record = HitRecord::new(5, DamageType::Normal, Some(BodyPart::Torso), 0);
        assert!(record.summary().contains("stopped"));
        assert!(!record.penetrated());
    }
}
