//! Damage-type SP modifiers

use crate::armor::ArmorClass;
use crate::types::DamageType;

/// SP that applies to a hit after its damage type is taken into account
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpAdjustment {
    /// SP the hit must beat
    pub sp: u32,
    /// Halve whatever gets through (AP rounds)
    pub halve_penetration: bool,
}

/// Adjust the effective SP of a part for an incoming damage type
///
/// `top_class` is the class of the strongest layer at the part, if any.
/// Fire and explosive are passed through unchanged; their rules go through the
/// SP override on the hit.
pub fn adjust_sp(damage_type: DamageType, sp: u32, top_class: Option<ArmorClass>) -> SpAdjustment {
    let hard = top_class.is_some_and(ArmorClass::is_hard);
    let (sp, halve_penetration) = match damage_type {
        DamageType::Normal | DamageType::Fire | DamageType::Explosive => (sp, false),
        DamageType::Ap => (sp / 2, true),
        DamageType::Slug => (sp / 2, false),
        DamageType::Edged if hard => (sp, false),
        DamageType::Edged => (sp / 2, false),
        DamageType::Mono if hard => (sp / 3 * 2 + sp % 3 * 2 / 3, false),
        DamageType::Mono => (sp / 3, false),
    };
    SpAdjustment { sp, halve_penetration }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normal_full_sp() {
        let adj = adjust_sp(DamageType::Normal, 20, Some(ArmorClass::Soft));
        assert_eq!(adj, SpAdjustment { sp: 20, halve_penetration: false });
    }

    #[test]
    fn test_ap_halves_both() {
        let adj = adjust_sp(DamageType::Ap, 21, Some(ArmorClass::Hard));
        assert_eq!(adj.sp, 10);
        assert!(adj.halve_penetration);
    }

    #[test]
    fn test_slug_halves_sp_only() {
        let adj = adjust_sp(DamageType::Slug, 20, Some(ArmorClass::Soft));
        assert_eq!(adj.sp, 10);
        assert!(!adj.halve_penetration);
    }

    #[test]
    fn test_edged_depends_on_top_layer() {
        assert_eq!(adjust_sp(DamageType::Edged, 20, Some(ArmorClass::Soft)).sp, 10);
        assert_eq!(adjust_sp(DamageType::Edged, 20, Some(ArmorClass::Hard)).sp, 20);
    }

    #[test]
    fn test_mono_depends_on_top_layer() {
        assert_eq!(adjust_sp(DamageType::Mono, 20, Some(ArmorClass::Soft)).sp, 6);
        assert_eq!(adjust_sp(DamageType::Mono, 20, Some(ArmorClass::Hard)).sp, 13);
    }

    #[test]
    fn test_manual_types_pass_through() {
        assert_eq!(adjust_sp(DamageType::Fire, 14, None).sp, 14);
        assert_eq!(adjust_sp(DamageType::Explosive, 14, Some(ArmorClass::Hard)).sp, 14);
    }

    #[test]
    fn test_mono_hard_large_sp() {
        assert_eq!(adjust_sp(DamageType::Mono, 21, Some(ArmorClass::Hard)).sp, 14);
        assert_eq!(adjust_sp(DamageType::Mono, u32::MAX, Some(ArmorClass::Hard)).sp, 2_863_311_530);
    }
}
