//! Character - The single in-process state holder for one character session
//!
//! Owns the rules, armor and wounds, and is the query/command surface the sheet
//! UI calls into. Persistence and change notification live outside; the whole
//! struct serializes for whatever store the host uses.

use crate::armor::{
    ArmorCatalog, ArmorError, ArmorInstance, ArmorLoadout, ArmorTemplate, EvResult, LayerError,
};
use crate::body::BodyPart;
use crate::combat::{resolve_hit_in_place, Hit, HitRecord};
use crate::config::RulesConfig;
use crate::stats::{current_attribute, Attribute};
use crate::types::{DamageType, InstanceId, WoundKind};
use crate::wounds::{SurvivalChecks, WoundLevel, WoundState};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Combat state of the character
///
/// Deserialized state is repaired the same way [`Character::from_parts`] does.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "StoredCharacter")]
pub struct Character {
    rules: RulesConfig,
    armor: ArmorLoadout,
    wounds: WoundState,
    /// Body Type Modifier
    btm: u32,
}

/// Serialized shape of a character, before repair
#[derive(Deserialize)]
struct StoredCharacter {
    #[serde(default)]
    rules: RulesConfig,
    #[serde(default)]
    armor: ArmorLoadout,
    #[serde(default)]
    wounds: WoundState,
    #[serde(default)]
    btm: u32,
}

impl From<StoredCharacter> for Character {
    fn from(stored: StoredCharacter) -> Self {
        Character {
            rules: stored.rules,
            armor: stored.armor,
            wounds: stored.wounds.sanitized(&stored.rules.wounds),
            btm: stored.btm,
        }
    }
}

impl Character {
    /// Create an unhurt, unarmored character
    pub fn new(rules: RulesConfig, catalog: ArmorCatalog) -> Self {
        Character {
            rules,
            armor: ArmorLoadout::new(catalog),
            wounds: WoundState::new(),
            btm: 0,
        }
    }

    /// Rebuild a character from stored pieces, repairing anything inconsistent
    pub fn from_parts(
        rules: RulesConfig,
        catalog: ArmorCatalog,
        instances: Vec<ArmorInstance>,
        wounds: WoundState,
        btm: u32,
    ) -> Self {
        Character {
            rules,
            armor: ArmorLoadout::from_parts(catalog, instances),
            wounds: wounds.sanitized(&rules.wounds),
            btm,
        }
    }

    /// Set the Body Type Modifier
    pub fn with_btm(mut self, btm: u32) -> Self {
        self.btm = btm;
        self
    }

    pub fn set_btm(&mut self, btm: u32) {
        self.btm = btm;
    }

    pub fn btm(&self) -> u32 {
        self.btm
    }

    pub fn rules(&self) -> &RulesConfig {
        &self.rules
    }

    pub fn armor(&self) -> &ArmorLoadout {
        &self.armor
    }

    pub fn wounds(&self) -> WoundState {
        self.wounds
    }

    // === Queries ===

    /// Stacked SP at `part`
    pub fn effective_sp(&self, part: BodyPart) -> u32 {
        self.armor.effective_sp(part)
    }

    /// Whether `template` could be worn at `part` right now
    pub fn can_wear(&self, template: &ArmorTemplate, part: BodyPart) -> Result<(), LayerError> {
        self.armor.can_wear(template, part, &self.rules.layering)
    }

    /// Whether `template` could be worn on every part it covers
    pub fn can_wear_all(&self, template: &ArmorTemplate) -> Result<(), LayerError> {
        self.armor.can_wear_all(template, &self.rules.layering)
    }

    pub fn current_ev(&self) -> EvResult {
        self.armor.encumbrance(&self.rules.encumbrance)
    }

    /// Governing wound level
    pub fn wound_level(&self) -> Option<WoundLevel> {
        self.wounds.level(&self.rules.wounds)
    }

    /// Current value of `attribute` given its base (inherent plus cyberware)
    pub fn current_attribute(&self, attribute: Attribute, base: u32) -> u32 {
        let ev = if attribute.takes_ev_penalty() {
            self.current_ev().ev
        } else {
            0
        };
        current_attribute(
            base,
            self.wound_level(),
            attribute.penalty_class(),
            self.wounds.stabilized,
            ev,
        )
    }

    /// Stun and death save targets for a character with `body`
    pub fn survival_checks(&self, body: u32) -> SurvivalChecks {
        SurvivalChecks::for_state(body, &self.wounds, &self.rules.wounds)
    }

    // === Armor commands ===

    /// Take a fresh instance of a template (implants install immediately)
    pub fn acquire_armor(&mut self, template_id: &str) -> Result<InstanceId, ArmorError> {
        self.armor.acquire(template_id, &self.rules.layering)
    }

    /// Install an implant
    pub fn install_implant(&mut self, template_id: &str) -> Result<InstanceId, ArmorError> {
        self.armor.install(template_id, &self.rules.layering)
    }

    pub fn wear_armor(&mut self, id: InstanceId) -> Result<(), ArmorError> {
        self.armor.wear(id, &self.rules.layering)
    }

    pub fn take_off_armor(&mut self, id: InstanceId) -> Result<(), ArmorError> {
        self.armor.take_off(id)
    }

    pub fn discard_armor(&mut self, id: InstanceId) -> Result<ArmorInstance, ArmorError> {
        self.armor.discard(id)
    }

    /// Reset SP at `parts` (all covered parts if empty) to `target_sp`, clamped to max
    pub fn repair_armor(
        &mut self,
        id: InstanceId,
        target_sp: u32,
        parts: &[BodyPart],
    ) -> Result<(), ArmorError> {
        self.armor.repair(id, target_sp, parts)
    }

    // === Combat commands ===

    /// Resolve a hit: degrade armor and take the wound damage as physical
    pub fn resolve_hit(
        &mut self,
        part: Option<BodyPart>,
        raw_damage: u32,
        damage_type: DamageType,
        ignore_sp: bool,
    ) -> HitRecord {
        let mut hit = Hit::new(part, raw_damage, damage_type);
        hit.ignore_sp = ignore_sp;
        self.resolve(&hit)
    }

    /// Resolve a fully specified hit
    pub fn resolve(&mut self, hit: &Hit) -> HitRecord {
        let record = resolve_hit_in_place(&mut self.armor, hit, self.btm, &self.rules.hit);
        if record.wound_damage > 0 {
            self.apply_damage(record.wound_damage, WoundKind::Physical);
        }
        record
    }

    // === Wound commands ===

    pub fn apply_damage(&mut self, amount: u32, kind: WoundKind) -> WoundState {
        let next = self.wounds.apply_damage(amount, kind, &self.rules.wounds);
        self.update_wounds(next)
    }

    pub fn heal_damage(&mut self, amount: u32, kind: WoundKind) -> WoundState {
        let next = self.wounds.heal(amount, kind, &self.rules.wounds);
        self.update_wounds(next)
    }

    pub fn set_damage(&mut self, value: u32, kind: WoundKind, sync_stun: bool) -> WoundState {
        let next = self.wounds.set_damage(value, kind, sync_stun, &self.rules.wounds);
        self.update_wounds(next)
    }

    pub fn set_stabilized(&mut self, stabilized: bool) -> WoundState {
        let next = self.wounds.set_stabilized(stabilized, &self.rules.wounds);
        self.update_wounds(next)
    }

    /// Full heal
    pub fn reset_wounds(&mut self) -> WoundState {
        self.update_wounds(WoundState::new())
    }

    fn update_wounds(&mut self, next: WoundState) -> WoundState {
        let track = &self.rules.wounds;
        let before = self.wounds;
        if before.level(track) != next.level(track) {
            debug!(
                from = ?before.level(track),
                to = ?next.level(track),
                physical = next.physical,
                stun = next.stun,
                "wound level changed"
            );
        }
        if before.stabilized && !next.stabilized {
            debug!("stabilization lost");
        }
        self.wounds = next;
        next
    }
}
