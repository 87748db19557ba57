//! Hit resolution - Apply a hit to an armor loadout

use super::modifiers::adjust_sp;
use super::result::{HitRecord, LayerLoss};
use crate::armor::{effective_sp, ArmorClass, ArmorLoadout, ArmorPiece};
use crate::body::BodyPart;
use crate::types::{DamageType, InstanceId};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Tunable hit resolution rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HitRules {
    /// Multiplier on penetrating damage to the head or face
    #[serde(default = "default_head_multiplier")]
    pub head_multiplier: u32,
    /// Soft top layer loses `overage / soft_ablation_divisor` extra SP
    #[serde(default = "default_soft_ablation_divisor")]
    pub soft_ablation_divisor: u32,
    /// Hard top layer loses `overage / hard_ablation_divisor` extra SP
    #[serde(default = "default_hard_ablation_divisor")]
    pub hard_ablation_divisor: u32,
}

impl Default for HitRules {
    fn default() -> Self {
        HitRules {
            head_multiplier: default_head_multiplier(),
            soft_ablation_divisor: default_soft_ablation_divisor(),
            hard_ablation_divisor: default_hard_ablation_divisor(),
        }
    }
}

fn default_head_multiplier() -> u32 {
    2
}
fn default_soft_ablation_divisor() -> u32 {
    5
}
fn default_hard_ablation_divisor() -> u32 {
    6
}

impl HitRules {
    /// Extra SP the top layer loses when a hit gets through by `overage`
    pub fn extra_ablation(&self, class: ArmorClass, overage: u32) -> u32 {
        let divisor = match class {
            ArmorClass::Soft => self.soft_ablation_divisor,
            ArmorClass::Hard => self.hard_ablation_divisor,
        };
        overage.checked_div(divisor).unwrap_or(0)
    }
}

/// An incoming hit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hit {
    /// Hit location, `None` for non-locational damage
    pub part: Option<BodyPart>,
    pub raw_damage: u32,
    pub damage_type: DamageType,
    /// Bypass armor entirely
    #[serde(default)]
    pub ignore_sp: bool,
    /// Use this SP instead of the computed one
    #[serde(default)]
    pub sp_override: Option<u32>,
}

impl Hit {
    pub fn new(part: Option<BodyPart>, raw_damage: u32, damage_type: DamageType) -> Self {
        Hit {
            part,
            raw_damage,
            damage_type,
            ignore_sp: false,
            sp_override: None,
        }
    }

    /// Locational hit
    pub fn at(part: BodyPart, raw_damage: u32, damage_type: DamageType) -> Self {
        Hit::new(Some(part), raw_damage, damage_type)
    }

    /// Bypass armor
    pub fn ignoring_sp(mut self) -> Self {
        self.ignore_sp = true;
        self
    }

    /// Force the SP this hit must beat (manual fire/explosive rules)
    pub fn with_sp_override(mut self, sp: u32) -> Self {
        self.sp_override = Some(sp);
        self
    }
}

/// Resolve a hit against a loadout (immutable API)
///
/// Returns the loadout with degraded armor and the hit record. This:
/// 1. Stacks the SP of every active layer at the part
/// 2. Adjusts it for the damage type (or takes the override)
/// 3. Ablates every layer by 1, and the top layer by extra SP for the overage
/// 4. Halves AP penetration, doubles head hits, subtracts BTM (minimum 1)
pub fn resolve_hit(
    loadout: &ArmorLoadout,
    hit: &Hit,
    btm: u32,
    rules: &HitRules,
) -> (ArmorLoadout, HitRecord) {
    let mut new_loadout = loadout.clone();
    let record = resolve_hit_in_place(&mut new_loadout, hit, btm, rules);
    (new_loadout, record)
}

/// Resolve a hit, degrading the loadout in place
pub fn resolve_hit_in_place(
    loadout: &mut ArmorLoadout,
    hit: &Hit,
    btm: u32,
    rules: &HitRules,
) -> HitRecord {
    let mut record = HitRecord::new(hit.raw_damage, hit.damage_type, hit.part, btm);
    record.sp_override = hit.sp_override;

    let Some(part) = hit.part else {
        // Non-locational: armor plays no part
        record.sp_ignored = hit.ignore_sp;
        record.penetrating = hit.raw_damage;
        record.wound_damage = apply_btm(hit.raw_damage, btm);
        debug!(raw = hit.raw_damage, wounds = record.wound_damage, "non-locational hit");
        return record;
    };

    let (effective, top) = {
        let layers = loadout.layers_at(part);
        let values: Vec<u32> = layers.iter().map(|p| p.sp_at(part)).collect();
        (effective_sp(&values), top_layer(&layers, part))
    };
    record.effective_sp = effective;

    let through = if hit.ignore_sp {
        record.sp_ignored = true;
        hit.raw_damage
    } else {
        let adjustment = adjust_sp(hit.damage_type, effective, top.map(|(_, class)| class));
        let sp_used = hit.sp_override.unwrap_or(adjustment.sp);
        record.sp_used = sp_used;

        let overage = hit.raw_damage.saturating_sub(sp_used);
        if overage > 0 {
            record.layer_losses = ablate(loadout, part, top, overage, rules);
        }

        if adjustment.halve_penetration {
            overage / 2
        } else {
            overage
        }
    };
    record.penetrating = through;

    if through > 0 {
        let damage = if part.is_head() {
            record.head_multiplier_applied = true;
            through.saturating_mul(rules.head_multiplier)
        } else {
            through
        };
        record.wound_damage = apply_btm(damage, btm);
    }

    debug!(
        %part,
        damage_type = %hit.damage_type,
        raw = hit.raw_damage,
        sp = record.sp_used,
        penetrating = record.penetrating,
        wounds = record.wound_damage,
        "resolved hit"
    );
    record
}

/// Subtract BTM, a hit that gets through always does at least 1
fn apply_btm(damage: u32, btm: u32) -> u32 {
    if damage == 0 {
        0
    } else {
        damage.saturating_sub(btm).max(1)
    }
}

/// The strongest layer at `part` with SP left. Earlier pieces win ties.
fn top_layer(layers: &[ArmorPiece<'_>], part: BodyPart) -> Option<(InstanceId, ArmorClass)> {
    let mut top: Option<&ArmorPiece> = None;
    for layer in layers.iter().filter(|l| l.sp_at(part) > 0) {
        if top.map_or(true, |t| layer.sp_at(part) > t.sp_at(part)) {
            top = Some(layer);
        }
    }
    top.map(|t| (t.id(), t.class()))
}

/// Every layer with SP at `part` loses 1, the top layer loses extra for the overage
fn ablate(
    loadout: &mut ArmorLoadout,
    part: BodyPart,
    top: Option<(InstanceId, ArmorClass)>,
    overage: u32,
    rules: &HitRules,
) -> Vec<LayerLoss> {
    let ids: Vec<InstanceId> = loadout
        .layers_at(part)
        .iter()
        .filter(|l| l.sp_at(part) > 0)
        .map(|l| l.id())
        .collect();

    ids.into_iter()
        .filter_map(|id| {
            let extra = match top {
                Some((top_id, class)) if top_id == id => rules.extra_ablation(class, overage),
                _ => 0,
            };
            let amount = loadout.degrade(id, part, extra.saturating_add(1));
            (amount > 0).then_some(LayerLoss { instance_id: id, amount })
        })
        .collect()
}
