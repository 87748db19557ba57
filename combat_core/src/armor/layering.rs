//! Layering rules - How many layers a body part may carry

use super::instance::ArmorPiece;
use super::template::ArmorTemplate;
use crate::body::BodyPart;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Rejection when a new layer would break the layering rules
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LayerError {
    #[error("{part} already carries {count} armor layers (max {max})")]
    TooManyLayers { part: BodyPart, count: u32, max: u32 },
    #[error("{part} already carries {max} hard armor layer(s)")]
    HardLayerConflict { part: BodyPart, max: u32 },
}

impl LayerError {
    /// The body part that rejected the layer
    pub fn part(&self) -> BodyPart {
        match self {
            LayerError::TooManyLayers { part, .. }
            | LayerError::HardLayerConflict { part, .. } => *part,
        }
    }
}

/// Per-part layer caps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayerLimits {
    /// Counted layers allowed on one part
    #[serde(default = "default_max_layers")]
    pub max_layers: u32,
    /// Hard-class counted layers allowed on one part
    #[serde(default = "default_max_hard_layers")]
    pub max_hard_layers: u32,
}

impl Default for LayerLimits {
    fn default() -> Self {
        LayerLimits {
            max_layers: default_max_layers(),
            max_hard_layers: default_max_hard_layers(),
        }
    }
}

fn default_max_layers() -> u32 {
    3
}
fn default_max_hard_layers() -> u32 {
    1
}

/// Counted layers and hard layers currently active at `part`
pub fn count_layers(pieces: &[ArmorPiece<'_>], part: BodyPart) -> (u32, u32) {
    pieces
        .iter()
        .filter(|p| p.is_active() && p.counts_as_layer() && p.covers(part))
        .fold((0, 0), |(count, hard), p| {
            (count + 1, hard + u32::from(p.class().is_hard()))
        })
}

/// Check whether `template` may become active at `part`
///
/// `pieces` is everything the character owns except the candidate itself.
/// Skin weave and face plates are exempt and always pass.
pub fn check_layer(
    pieces: &[ArmorPiece<'_>],
    template: &ArmorTemplate,
    part: BodyPart,
    limits: &LayerLimits,
) -> Result<(), LayerError> {
    if !template.counts_as_layer() || !template.covers(part) {
        return Ok(());
    }

    let (count, hard) = count_layers(pieces, part);
    if count >= limits.max_layers {
        return Err(LayerError::TooManyLayers {
            part,
            count,
            max: limits.max_layers,
        });
    }
    if template.class.is_hard() && hard >= limits.max_hard_layers {
        return Err(LayerError::HardLayerConflict {
            part,
            max: limits.max_hard_layers,
        });
    }
    Ok(())
}

/// Check every part `template` covers, reporting the first violation
pub fn check_all_layers(
    pieces: &[ArmorPiece<'_>],
    template: &ArmorTemplate,
    limits: &LayerLimits,
) -> Result<(), LayerError> {
    template
        .covers
        .iter()
        .try_for_each(|&part| check_layer(pieces, template, part, limits))
}
