//! Encumbrance - Global EV penalty from everything worn and installed

use super::instance::ArmorPiece;
use super::layering::count_layers;
use crate::body::BodyPart;
use serde::{Deserialize, Serialize};

/// Derived encumbrance of the current loadout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EvResult {
    /// Total EV penalty
    pub ev: u32,
    /// Most counted layers found on a single part
    pub max_layers: u32,
    /// The part carrying `max_layers`, if anything is worn
    pub max_location: Option<BodyPart>,
}

/// Layering penalty table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncumbranceRules {
    #[serde(default = "default_two_layer_penalty")]
    pub two_layer_penalty: u32,
    /// Applied at three or more layers
    #[serde(default = "default_three_layer_penalty")]
    pub three_layer_penalty: u32,
}

impl Default for EncumbranceRules {
    fn default() -> Self {
        EncumbranceRules {
            two_layer_penalty: default_two_layer_penalty(),
            three_layer_penalty: default_three_layer_penalty(),
        }
    }
}

fn default_two_layer_penalty() -> u32 {
    1
}
fn default_three_layer_penalty() -> u32 {
    3
}

impl EncumbranceRules {
    /// EV added for the most heavily layered part
    pub fn layer_penalty(&self, layers: u32) -> u32 {
        match layers {
            0 | 1 => 0,
            2 => self.two_layer_penalty,
            _ => self.three_layer_penalty,
        }
    }
}

/// Calculate EV from all owned pieces
///
/// Sums the flat EV of every active piece, then adds the layering penalty of
/// the single part with the most counted layers.
pub fn calculate_ev(pieces: &[ArmorPiece<'_>], rules: &EncumbranceRules) -> EvResult {
    let flat: u32 = pieces
        .iter()
        .filter(|p| p.is_active())
        .fold(0, |total: u32, p| total.saturating_add(p.ev_cost()));

    let mut max_layers = 0;
    let mut max_location = None;
    for part in BodyPart::all() {
        let (count, _) = count_layers(pieces, part);
        if count > max_layers {
            max_layers = count;
            max_location = Some(part);
        }
    }

    EvResult {
        ev: flat.saturating_add(rules.layer_penalty(max_layers)),
        max_layers,
        max_location,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::armor::instance::ArmorInstance;
    use crate::armor::template::{ArmorClass, ArmorTemplate, LayerKind};
    use crate::types::InstanceId;

    fn build(templates: &[ArmorTemplate]) -> Vec<ArmorInstance> {
        templates
            .iter()
            .enumerate()
            .map(|(i, t)| {
                let mut inst = ArmorInstance::new(InstanceId(i as u32), t);
                inst.worn = true;
                inst
            })
            .collect()
    }

    fn ev_of(templates: &[ArmorTemplate], instances: &[ArmorInstance]) -> EvResult {
        let pieces: Vec<ArmorPiece> = templates
            .iter()
            .zip(instances)
            .map(|(t, i)| ArmorPiece::materialize(t, i))
            .collect();
        calculate_ev(&pieces, &EncumbranceRules::default())
    }

    #[test]
    fn test_nothing_worn() {
        let result = calculate_ev(&[], &EncumbranceRules::default());
        assert_eq!(result, EvResult::default());
        assert_eq!(result.max_location, None);
    }

    #[test]
    fn test_single_layer_only_flat_ev() {
        let templates = vec![
            ArmorTemplate::new("vest", "Vest", ArmorClass::Hard, 20, &[BodyPart::Torso]).with_ev(1),
        ];
        let instances = build(&templates);
        let result = ev_of(&templates, &instances);
        assert_eq!(result.ev, 1);
        assert_eq!(result.max_layers, 1);
        assert_eq!(result.max_location, Some(BodyPart::Torso));
    }

    #[test]
    fn test_two_layers_add_one() {
        let templates = vec![
            ArmorTemplate::new("vest", "Vest", ArmorClass::Hard, 20, &[BodyPart::Torso]).with_ev(1),
            ArmorTemplate::new(
                "jacket",
                "Jacket",
                ArmorClass::Soft,
                14,
                &[BodyPart::Torso, BodyPart::LeftArm],
            ),
        ];
        let instances = build(&templates);
        let result = ev_of(&templates, &instances);
        assert_eq!(result.ev, 2);
        assert_eq!(result.max_layers, 2);
    }

    #[test]
    fn test_three_layers_add_three() {
        let templates = vec![
            ArmorTemplate::new("a", "A", ArmorClass::Soft, 10, &[BodyPart::LeftLeg]),
            ArmorTemplate::new("b", "B", ArmorClass::Soft, 10, &[BodyPart::LeftLeg]),
            ArmorTemplate::new("c", "C", ArmorClass::Soft, 10, &[BodyPart::LeftLeg]).with_ev(2),
        ];
        let instances = build(&templates);
        let result = ev_of(&templates, &instances);
        assert_eq!(result.ev, 5);
        assert_eq!(result.max_layers, 3);
        assert_eq!(result.max_location, Some(BodyPart::LeftLeg));
    }

    #[test]
    fn test_unworn_and_exempt_pieces() {
        let templates = vec![
            ArmorTemplate::new("a", "A", ArmorClass::Soft, 10, &[BodyPart::Torso]).with_ev(3),
            ArmorTemplate::new("b", "B", ArmorClass::Soft, 10, &[BodyPart::Torso]),
            ArmorTemplate::new("weave", "Weave", ArmorClass::Soft, 12, &[BodyPart::Torso])
                .with_layer(LayerKind::Skinweave)
                .with_ev(1),
        ];
        let mut instances = build(&templates);
        instances[0].worn = false;

        let result = ev_of(&templates, &instances);
        // Weave EV counts, its layer doesn't
        assert_eq!(result.ev, 1);
        assert_eq!(result.max_layers, 1);
    }

    #[test]
    fn test_ev_saturates() {
        let templates = vec![
            ArmorTemplate::new("a", "A", ArmorClass::Soft, 10, &[BodyPart::Torso])
                .with_ev(u32::MAX),
            ArmorTemplate::new("b", "B", ArmorClass::Soft, 10, &[BodyPart::Torso])
                .with_ev(u32::MAX),
        ];
        let instances = build(&templates);
        assert_eq!(ev_of(&templates, &instances).ev, u32::MAX);
    }
}
