//! ArmorLoadout - Everything the character owns, worn or installed

use super::catalog::ArmorCatalog;
use super::encumbrance::{calculate_ev, EncumbranceRules, EvResult};
use super::instance::{ArmorInstance, ArmorPiece};
use super::layering::{check_all_layers, check_layer, LayerError, LayerLimits};
use super::stacking::effective_sp;
use super::template::ArmorTemplate;
use super::ArmorError;
use crate::body::BodyPart;
use crate::types::InstanceId;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Owned armor and implants plus the templates they were made from
///
/// Deserializing goes through [`ArmorLoadout::from_parts`], so stored data is
/// repaired on load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "StoredLoadout")]
pub struct ArmorLoadout {
    catalog: ArmorCatalog,
    instances: Vec<ArmorInstance>,
    next_id: u32,
}

/// Serialized shape of a loadout, before repair
#[derive(Deserialize)]
struct StoredLoadout {
    #[serde(default)]
    catalog: ArmorCatalog,
    #[serde(default)]
    instances: Vec<ArmorInstance>,
    #[serde(default)]
    next_id: u32,
}

impl From<StoredLoadout> for ArmorLoadout {
    fn from(stored: StoredLoadout) -> Self {
        let mut loadout = ArmorLoadout::from_parts(stored.catalog, stored.instances);
        // Keep ids of discarded pieces retired
        loadout.next_id = loadout.next_id.max(stored.next_id);
        loadout
    }
}

impl Default for ArmorLoadout {
    fn default() -> Self {
        ArmorLoadout::new(ArmorCatalog::new())
    }
}

impl ArmorLoadout {
    /// Create an empty loadout over a template catalog
    pub fn new(catalog: ArmorCatalog) -> Self {
        ArmorLoadout {
            catalog,
            instances: Vec::new(),
            next_id: 1,
        }
    }

    /// Rebuild a loadout from persisted instances
    ///
    /// Instances referencing an unknown template, or whose SP map disagrees
    /// with the template's coverage, are dropped. Out-of-range SP is clamped.
    pub fn from_parts(catalog: ArmorCatalog, instances: Vec<ArmorInstance>) -> Self {
        let mut kept = Vec::with_capacity(instances.len());
        for mut instance in instances {
            let Some(template) = catalog.get(&instance.template_id) else {
                warn!(
                    instance = %instance.id,
                    template = %instance.template_id,
                    "dropping armor with unknown template"
                );
                continue;
            };
            if !instance.matches_coverage(template) {
                warn!(
                    instance = %instance.id,
                    template = %instance.template_id,
                    "dropping armor with mismatched coverage"
                );
                continue;
            }
            if kept.iter().any(|k: &ArmorInstance| k.id == instance.id) {
                warn!(instance = %instance.id, "dropping armor with duplicate id");
                continue;
            }
            instance.clamp_to(template);
            kept.push(instance);
        }

        let next_id = kept.iter().map(|i| i.id.0).max().unwrap_or(0).saturating_add(1);
        ArmorLoadout {
            catalog,
            instances: kept,
            next_id,
        }
    }

    pub fn catalog(&self) -> &ArmorCatalog {
        &self.catalog
    }

    pub fn instances(&self) -> &[ArmorInstance] {
        &self.instances
    }

    pub fn get(&self, id: InstanceId) -> Option<&ArmorInstance> {
        self.instances.iter().find(|i| i.id == id)
    }

    /// Materialize every owned piece
    pub fn pieces(&self) -> Vec<ArmorPiece<'_>> {
        self.instances
            .iter()
            .filter_map(|inst| {
                self.catalog
                    .get(&inst.template_id)
                    .map(|t| ArmorPiece::materialize(t, inst))
            })
            .collect()
    }

    /// Materialize a single piece
    pub fn piece(&self, id: InstanceId) -> Option<ArmorPiece<'_>> {
        let instance = self.get(id)?;
        let template = self.catalog.get(&instance.template_id)?;
        Some(ArmorPiece::materialize(template, instance))
    }

    /// Active pieces covering `part`, in ownership order
    pub fn layers_at(&self, part: BodyPart) -> Vec<ArmorPiece<'_>> {
        self.pieces()
            .into_iter()
            .filter(|p| p.is_active() && p.covers(part))
            .collect()
    }

    /// Effective SP at `part` after proportional stacking
    pub fn effective_sp(&self, part: BodyPart) -> u32 {
        let values: Vec<u32> = self.layers_at(part).iter().map(|p| p.sp_at(part)).collect();
        effective_sp(&values)
    }

    /// Whether `template` could become active at `part` alongside what is active now
    pub fn can_wear(
        &self,
        template: &ArmorTemplate,
        part: BodyPart,
        limits: &LayerLimits,
    ) -> Result<(), LayerError> {
        check_layer(&self.pieces(), template, part, limits)
    }

    /// Whether `template` could become active on every part it covers
    pub fn can_wear_all(
        &self,
        template: &ArmorTemplate,
        limits: &LayerLimits,
    ) -> Result<(), LayerError> {
        check_all_layers(&self.pieces(), template, limits)
    }

    /// Current encumbrance
    pub fn encumbrance(&self, rules: &EncumbranceRules) -> EvResult {
        calculate_ev(&self.pieces(), rules)
    }

    /// Take ownership of a fresh instance of `template_id`
    ///
    /// Worn armor starts off unworn. Implants are installed immediately and are
    /// checked against the layering rules.
    pub fn acquire(
        &mut self,
        template_id: &str,
        limits: &LayerLimits,
    ) -> Result<InstanceId, ArmorError> {
        let template = self.template(template_id)?;
        if template.is_implant() {
            return self.install(template_id, limits);
        }

        let id = self.peek_id();
        let instance = ArmorInstance::new(id, template);
        debug!(instance = %id, template = template_id, "acquired armor");
        self.push(instance);
        Ok(id)
    }

    /// Install an implant (or put on armor immediately)
    pub fn install(
        &mut self,
        template_id: &str,
        limits: &LayerLimits,
    ) -> Result<InstanceId, ArmorError> {
        let template = self.template(template_id)?;
        if let Err(err) = check_all_layers(&self.pieces(), template, limits) {
            debug!(template = template_id, error = %err, "install rejected");
            return Err(err.into());
        }

        let id = self.peek_id();
        let mut instance = ArmorInstance::new(id, template);
        instance.worn = true;
        debug!(instance = %id, template = template_id, "installed");
        self.push(instance);
        Ok(id)
    }

    /// Put on an owned piece
    pub fn wear(&mut self, id: InstanceId, limits: &LayerLimits) -> Result<(), ArmorError> {
        let index = self.position(id)?;
        if self.instances[index].worn {
            return Ok(());
        }

        let template = self.template(&self.instances[index].template_id)?;
        let others: Vec<ArmorPiece> = self.pieces().into_iter().filter(|p| p.id() != id).collect();
        if let Err(err) = check_all_layers(&others, template, limits) {
            debug!(instance = %id, error = %err, "wear rejected");
            return Err(err.into());
        }

        self.instances[index].worn = true;
        Ok(())
    }

    /// Take off an owned piece. Implants stay active until discarded.
    pub fn take_off(&mut self, id: InstanceId) -> Result<(), ArmorError> {
        let index = self.position(id)?;
        self.instances[index].worn = false;
        Ok(())
    }

    /// Discard armor or uninstall an implant
    pub fn discard(&mut self, id: InstanceId) -> Result<ArmorInstance, ArmorError> {
        let index = self.position(id)?;
        debug!(instance = %id, "discarded");
        Ok(self.instances.remove(index))
    }

    /// Reset SP at `parts` (all covered parts if empty) to `target`, clamped to max
    pub fn repair(
        &mut self,
        id: InstanceId,
        target: u32,
        parts: &[BodyPart],
    ) -> Result<(), ArmorError> {
        let index = self.position(id)?;
        let template = self
            .catalog
            .get(&self.instances[index].template_id)
            .ok_or_else(|| ArmorError::UnknownTemplate(self.instances[index].template_id.clone()))?;
        self.instances[index].repair(template, target, parts);
        Ok(())
    }

    /// Remove up to `amount` SP from one instance at one part
    pub(crate) fn degrade(&mut self, id: InstanceId, part: BodyPart, amount: u32) -> u32 {
        self.instances
            .iter_mut()
            .find(|i| i.id == id)
            .map_or(0, |i| i.degrade(part, amount))
    }

    fn template(&self, template_id: &str) -> Result<&ArmorTemplate, ArmorError> {
        self.catalog
            .get(template_id)
            .ok_or_else(|| ArmorError::UnknownTemplate(template_id.to_string()))
    }

    fn position(&self, id: InstanceId) -> Result<usize, ArmorError> {
        self.instances
            .iter()
            .position(|i| i.id == id)
            .ok_or(ArmorError::UnknownInstance(id))
    }

    fn peek_id(&self) -> InstanceId {
        InstanceId(self.next_id.max(1))
    }

    fn push(&mut self, instance: ArmorInstance) {
        self.next_id = instance.id.0.saturating_add(1);
        self.instances.push(instance);
    }
}
