//! Rules configuration

use crate::armor::{EncumbranceRules, LayerLimits};
use crate::combat::HitRules;
use crate::wounds::WoundTrack;
use serde::{Deserialize, Serialize};

/// Tunable rules constants
///
/// Every table is optional in TOML; missing values fall back to the reference rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RulesConfig {
    #[serde(default)]
    pub wounds: WoundTrack,
    #[serde(default)]
    pub layering: LayerLimits,
    #[serde(default)]
    pub hit: HitRules,
    #[serde(default)]
    pub encumbrance: EncumbranceRules,
}
