//! ArmorTemplate - Immutable definition of an armor piece or implant

use crate::body::BodyPart;
use serde::{Deserialize, Serialize};

/// Physical class of an armor layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArmorClass {
    #[default]
    Soft,
    Hard,
}

impl ArmorClass {
    pub fn is_hard(self) -> bool {
        self == ArmorClass::Hard
    }
}

/// How a layer is carried
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayerKind {
    /// Ordinary clothing or armor, only active while worn
    Worn,
    /// Body plating implant
    Plating,
    /// Subdermal armor implant
    Subdermal,
    /// Skin weave implant, exempt from the layer cap
    Skinweave,
    /// Face plate implant, exempt from the layer cap
    Faceplate,
}

impl LayerKind {
    /// Implants are always active once installed
    pub fn is_implant(self) -> bool {
        !matches!(self, LayerKind::Worn)
    }

    /// Whether this kind counts toward the per-part layer cap
    pub fn is_counted(self) -> bool {
        matches!(self, LayerKind::Worn | LayerKind::Plating | LayerKind::Subdermal)
    }
}

/// Immutable armor definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArmorTemplate {
    /// Unique template identifier
    pub id: String,
    /// Display name
    pub name: String,
    #[serde(default)]
    pub class: ArmorClass,
    /// Rated stopping power
    pub sp_max: u32,
    /// Body parts this piece covers
    pub covers: Vec<BodyPart>,
    /// Flat encumbrance cost
    #[serde(default)]
    pub ev: Option<u32>,
    /// Layer kind; `None` behaves like worn armor
    #[serde(default)]
    pub layer: Option<LayerKind>,
}

impl ArmorTemplate {
    /// Create a worn armor template
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        class: ArmorClass,
        sp_max: u32,
        covers: &[BodyPart],
    ) -> Self {
        ArmorTemplate {
            id: id.into(),
            name: name.into(),
            class,
            sp_max,
            covers: covers.to_vec(),
            ev: None,
            layer: None,
        }
    }

    /// Set the encumbrance cost
    pub fn with_ev(mut self, ev: u32) -> Self {
        self.ev = Some(ev);
        self
    }

    /// Set the layer kind
    pub fn with_layer(mut self, layer: LayerKind) -> Self {
        self.layer = Some(layer);
        self
    }

    pub fn covers(&self, part: BodyPart) -> bool {
        self.covers.contains(&part)
    }

    pub fn is_implant(&self) -> bool {
        self.layer.is_some_and(LayerKind::is_implant)
    }

    /// Whether this piece counts toward the per-part layer cap
    pub fn counts_as_layer(&self) -> bool {
        self.layer.map_or(true, LayerKind::is_counted)
    }

    pub fn ev_cost(&self) -> u32 {
        self.ev.unwrap_or(0)
    }

    /// Maximum SP this piece provides at `part`
    ///
    /// Worn armor protects the face at half its rated SP. Implants give full SP.
    /// Parts the template does not cover get 0.
    pub fn part_sp_max(&self, part: BodyPart) -> u32 {
        if !self.covers(part) {
            return 0;
        }
        if part == BodyPart::Face && !self.is_implant() {
            self.sp_max / 2
        } else {
            self.sp_max
        }
    }
}
