//! Armor system - Templates, owned instances, stacking, layering, encumbrance

mod catalog;
mod encumbrance;
mod instance;
mod layering;
mod loadout;
mod stacking;
mod template;

pub use catalog::ArmorCatalog;
pub use encumbrance::{calculate_ev, EncumbranceRules, EvResult};
pub use instance::{ArmorInstance, ArmorPiece};
pub use layering::{check_all_layers, check_layer, count_layers, LayerError, LayerLimits};
pub use loadout::ArmorLoadout;
pub use stacking::{effective_sp, proportional_bonus};
pub use template::{ArmorClass, ArmorTemplate, LayerKind};

use crate::types::InstanceId;
use thiserror::Error;

/// Armor command failure
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArmorError {
    #[error("Unknown armor template: {0}")]
    UnknownTemplate(String),
    #[error("No owned armor with id {0}")]
    UnknownInstance(InstanceId),
    #[error(transparent)]
    Layer(#[from] LayerError),
}
