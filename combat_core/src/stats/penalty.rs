//! Attribute penalties from wounds and encumbrance

use crate::types::PenaltyClass;
use crate::wounds::WoundLevel;

/// Flat REF penalty while stabilized
fn stabilized_ref_penalty(level: WoundLevel) -> u32 {
    match level {
        WoundLevel::Light => 0,
        WoundLevel::Serious => 2,
        WoundLevel::Critical => 4,
        WoundLevel::Mortal(tier) => tier.saturating_add(5),
    }
}

fn div_ceil(value: u32, divisor: u32) -> u32 {
    value / divisor + u32::from(value % divisor != 0)
}

/// Attribute value after wound penalties, before EV
///
/// Unstabilized:
/// - Serious: REF -2
/// - Critical: halved (round up); INT/COOL lose at most 2
/// - Mortal: a third (round up); INT/COOL lose at most 4
///
/// Stabilized wounds only hit REF, with flat penalties.
pub fn wound_adjusted(
    base: u32,
    level: Option<WoundLevel>,
    class: PenaltyClass,
    stabilized: bool,
) -> u32 {
    let Some(level) = level else {
        return base;
    };

    if stabilized {
        return match class {
            PenaltyClass::RefOnly => base.saturating_sub(stabilized_ref_penalty(level)),
            PenaltyClass::None | PenaltyClass::RefIntCl => base,
        };
    }

    match (class, level) {
        (PenaltyClass::None, _) | (_, WoundLevel::Light) => base,
        (PenaltyClass::RefOnly, WoundLevel::Serious) => base.saturating_sub(2),
        (PenaltyClass::RefIntCl, WoundLevel::Serious) => base,
        (PenaltyClass::RefOnly, WoundLevel::Critical) => div_ceil(base, 2),
        (PenaltyClass::RefIntCl, WoundLevel::Critical) => {
            div_ceil(base, 2).max(base.saturating_sub(2))
        }
        (PenaltyClass::RefOnly, WoundLevel::Mortal(_)) => div_ceil(base, 3),
        (PenaltyClass::RefIntCl, WoundLevel::Mortal(_)) => {
            div_ceil(base, 3).max(base.saturating_sub(4))
        }
    }
}

/// Current attribute value shown on the sheet
///
/// `base` is inherent plus cyberware. The EV penalty is subtracted
/// unconditionally, and the result never drops below 1.
pub fn current_attribute(
    base: u32,
    level: Option<WoundLevel>,
    class: PenaltyClass,
    stabilized: bool,
    ev_penalty: u32,
) -> u32 {
    wound_adjusted(base, level, class, stabilized)
        .saturating_sub(ev_penalty)
        .max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unhurt_and_light() {
        assert_eq!(current_attribute(8, None, PenaltyClass::RefOnly, false, 0), 8);
        let light = Some(WoundLevel::Light);
        assert_eq!(current_attribute(8, light, PenaltyClass::RefOnly, false, 0), 8);
    }

    #[test]
    fn test_serious_hits_ref_only() {
        let level = Some(WoundLevel::Serious);
        assert_eq!(current_attribute(8, level, PenaltyClass::RefOnly, false, 0), 6);
        assert_eq!(current_attribute(8, level, PenaltyClass::RefIntCl, false, 0), 8);
        assert_eq!(current_attribute(8, level, PenaltyClass::None, false, 0), 8);
    }

    #[test]
    fn test_critical_halves_rounding_up() {
        let level = Some(WoundLevel::Critical);
        assert_eq!(current_attribute(9, level, PenaltyClass::RefOnly, false, 0), 5);
        assert_eq!(current_attribute(8, level, PenaltyClass::RefOnly, false, 0), 4);
    }

    #[test]
    fn test_critical_int_cool_capped() {
        let level = Some(WoundLevel::Critical);
        // 10 -> 5 would be -5, capped at -2
        assert_eq!(current_attribute(10, level, PenaltyClass::RefIntCl, false, 0), 8);
        // 3 -> 2 is only -1
        assert_eq!(current_attribute(3, level, PenaltyClass::RefIntCl, false, 0), 2);
    }

    #[test]
    fn test_mortal_thirds() {
        let level = Some(WoundLevel::Mortal(2));
        assert_eq!(current_attribute(10, level, PenaltyClass::RefOnly, false, 0), 4);
        assert_eq!(current_attribute(10, level, PenaltyClass::RefIntCl, false, 0), 6);
        assert_eq!(current_attribute(5, level, PenaltyClass::RefIntCl, false, 0), 2);
    }

    #[test]
    fn test_stabilized_flat_ref_penalties() {
        let stable = |level, class| current_attribute(10, Some(level), class, true, 0);
        assert_eq!(stable(WoundLevel::Serious, PenaltyClass::RefOnly), 8);
        assert_eq!(stable(WoundLevel::Critical, PenaltyClass::RefOnly), 6);
        assert_eq!(stable(WoundLevel::Mortal(0), PenaltyClass::RefOnly), 5);
        assert_eq!(stable(WoundLevel::Mortal(2), PenaltyClass::RefOnly), 3);
        assert_eq!(stable(WoundLevel::Mortal(2), PenaltyClass::RefIntCl), 10);
    }

    #[test]
    fn test_ev_subtracted_unconditionally() {
        assert_eq!(current_attribute(8, None, PenaltyClass::RefOnly, false, 3), 5);
        let serious = Some(WoundLevel::Serious);
        assert_eq!(current_attribute(8, serious, PenaltyClass::RefOnly, false, 1), 5);
    }

    #[test]
    fn test_floor_at_one() {
        let mortal = Some(WoundLevel::Mortal(6));
        assert_eq!(current_attribute(3, mortal, PenaltyClass::RefOnly, true, 5), 1);
        assert_eq!(current_attribute(0, None, PenaltyClass::None, false, 0), 1);
    }
}
