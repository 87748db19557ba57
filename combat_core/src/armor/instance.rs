//! ArmorInstance - An owned piece with its own per-part SP

use super::template::{ArmorClass, ArmorTemplate};
use crate::body::{BodyMap, BodyPart};
use crate::types::InstanceId;
use serde::{Deserialize, Serialize};

/// A mutable, owned piece of armor or an installed implant
///
/// SP is tracked per covered part so damage to one location doesn't wear the
/// rest of the piece. Uncovered parts hold `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArmorInstance {
    pub id: InstanceId,
    /// Id of the [`ArmorTemplate`] this was made from
    pub template_id: String,
    sp: BodyMap<Option<u32>>,
    /// Worn (armor) or installed (implant)
    #[serde(default)]
    pub worn: bool,
}

impl ArmorInstance {
    /// Create a fresh instance with every covered part at full SP
    pub fn new(id: InstanceId, template: &ArmorTemplate) -> Self {
        ArmorInstance {
            id,
            template_id: template.id.clone(),
            sp: BodyMap::from_fn(|part| template.covers(part).then(|| template.part_sp_max(part))),
            worn: false,
        }
    }

    /// Current SP at `part`, 0 if uncovered
    pub fn sp_at(&self, part: BodyPart) -> u32 {
        self.sp[part].unwrap_or(0)
    }

    /// Parts this instance tracks SP for
    pub fn parts(&self) -> impl Iterator<Item = BodyPart> + '_ {
        self.sp.iter().filter(|(_, sp)| sp.is_some()).map(|(part, _)| part)
    }

    /// Remove up to `amount` SP at `part`, returns the SP actually lost
    pub fn degrade(&mut self, part: BodyPart, amount: u32) -> u32 {
        match self.sp.get_mut(part) {
            Some(sp) => {
                let lost = amount.min(*sp);
                *sp -= lost;
                lost
            }
            None => 0,
        }
    }

    /// Set SP at each of `parts` to `target`, clamped to the part maximum
    ///
    /// An empty `parts` slice repairs every covered part. Uncovered parts are ignored.
    pub fn repair(&mut self, template: &ArmorTemplate, target: u32, parts: &[BodyPart]) {
        for (part, sp) in self.sp.iter_mut() {
            if let Some(sp) = sp {
                if parts.is_empty() || parts.contains(&part) {
                    *sp = target.min(template.part_sp_max(part));
                }
            }
        }
    }

    /// Whether the tracked parts match the template's coverage exactly
    pub fn matches_coverage(&self, template: &ArmorTemplate) -> bool {
        self.sp
            .iter()
            .all(|(part, sp)| sp.is_some() == template.covers(part))
    }

    /// Clamp every part to the template's part maximum
    pub fn clamp_to(&mut self, template: &ArmorTemplate) {
        for (part, sp) in self.sp.iter_mut() {
            if let Some(sp) = sp {
                *sp = (*sp).min(template.part_sp_max(part));
            }
        }
    }
}

/// Read-only merged view of a template and one of its instances
///
/// Built on demand, never stored.
#[derive(Debug, Clone, Copy)]
pub struct ArmorPiece<'a> {
    pub template: &'a ArmorTemplate,
    pub instance: &'a ArmorInstance,
}

impl<'a> ArmorPiece<'a> {
    pub fn materialize(template: &'a ArmorTemplate, instance: &'a ArmorInstance) -> Self {
        ArmorPiece { template, instance }
    }

    pub fn id(&self) -> InstanceId {
        self.instance.id
    }

    pub fn name(&self) -> &str {
        &self.template.name
    }

    pub fn class(&self) -> ArmorClass {
        self.template.class
    }

    pub fn covers(&self, part: BodyPart) -> bool {
        self.template.covers(part)
    }

    pub fn sp_at(&self, part: BodyPart) -> u32 {
        self.instance.sp_at(part)
    }

    pub fn part_max(&self, part: BodyPart) -> u32 {
        self.template.part_sp_max(part)
    }

    /// Implants are always active, worn armor only while worn
    pub fn is_active(&self) -> bool {
        self.template.is_implant() || self.instance.worn
    }

    pub fn counts_as_layer(&self) -> bool {
        self.template.counts_as_layer()
    }

    pub fn ev_cost(&self) -> u32 {
        self.template.ev_cost()
    }
}
