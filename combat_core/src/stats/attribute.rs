//! Character attributes and the penalties each one takes

use crate::types::PenaltyClass;
use serde::{Deserialize, Serialize};

/// Primary character attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Attribute {
    Intelligence,
    Reflexes,
    Tech,
    Cool,
    Attractiveness,
    Luck,
    Movement,
    Body,
    Empathy,
}

impl Attribute {
    /// Get all attributes
    pub fn all() -> &'static [Attribute] {
        &[
            Attribute::Intelligence,
            Attribute::Reflexes,
            Attribute::Tech,
            Attribute::Cool,
            Attribute::Attractiveness,
            Attribute::Luck,
            Attribute::Movement,
            Attribute::Body,
            Attribute::Empathy,
        ]
    }

    /// Which wound penalties apply
    pub fn penalty_class(self) -> PenaltyClass {
        match self {
            Attribute::Reflexes => PenaltyClass::RefOnly,
            Attribute::Intelligence | Attribute::Cool => PenaltyClass::RefIntCl,
            _ => PenaltyClass::None,
        }
    }

    /// Encumbrance only slows reflexes
    pub fn takes_ev_penalty(self) -> bool {
        self == Attribute::Reflexes
    }

    pub fn abbreviation(self) -> &'static str {
        match self {
            Attribute::Intelligence => "INT",
            Attribute::Reflexes => "REF",
            Attribute::Tech => "TECH",
            Attribute::Cool => "CL",
            Attribute::Attractiveness => "ATT",
            Attribute::Luck => "LK",
            Attribute::Movement => "MA",
            Attribute::Body => "BT",
            Attribute::Empathy => "EMP",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_penalty_classes() {
        assert_eq!(Attribute::Reflexes.penalty_class(), PenaltyClass::RefOnly);
        assert_eq!(Attribute::Intelligence.penalty_class(), PenaltyClass::RefIntCl);
        assert_eq!(Attribute::Cool.penalty_class(), PenaltyClass::RefIntCl);
        assert_eq!(Attribute::Body.penalty_class(), PenaltyClass::None);
    }

    #[test]
    fn test_only_ref_takes_ev() {
        let with_ev: Vec<_> = Attribute::all().iter().filter(|a| a.takes_ev_penalty()).collect();
        assert_eq!(with_ev, vec![&Attribute::Reflexes]);
    }
}
