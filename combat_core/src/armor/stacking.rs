//! Proportional stacking - Combine overlapping layers into one SP value

/// Bonus added by a lower layer, from the gap between it and the running total
///
/// Close SP values stack well, a much weaker layer adds little or nothing.
pub fn proportional_bonus(diff: u32) -> u32 {
    match diff {
        0..=4 => 5,
        5..=8 => 4,
        9..=14 => 3,
        15..=20 => 2,
        21..=26 => 1,
        _ => 0,
    }
}

/// Effective SP of a stack of layers
///
/// Seeds with the strongest layer, then for each weaker layer in descending
/// order adds `min(layer, bonus(effective - layer))`. Zero-SP layers are skipped.
pub fn effective_sp(values: &[u32]) -> u32 {
    let mut sorted: Vec<u32> = values.iter().copied().filter(|&sp| sp > 0).collect();
    sorted.sort_unstable_by(|a, b| b.cmp(a));

    let Some((&first, rest)) = sorted.split_first() else {
        return 0;
    };

    rest.iter().fold(first, |effective, &sp| {
        let diff = effective.saturating_sub(sp);
        effective.saturating_add(sp.min(proportional_bonus(diff)))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_layers() {
        assert_eq!(effective_sp(&[]), 0);
        assert_eq!(effective_sp(&[0, 0]), 0);
    }

    #[test]
    fn test_single_layer() {
        assert_eq!(effective_sp(&[14]), 14);
    }

    #[test]
    fn test_bonus_table_edges() {
        assert_eq!(proportional_bonus(0), 5);
        assert_eq!(proportional_bonus(4), 5);
        assert_eq!(proportional_bonus(5), 4);
        assert_eq!(proportional_bonus(8), 4);
        assert_eq!(proportional_bonus(14), 3);
        assert_eq!(proportional_bonus(20), 2);
        assert_eq!(proportional_bonus(26), 1);
        assert_eq!(proportional_bonus(27), 0);
    }

    #[test]
    fn test_equal_layers_stack_well() {
        // 20 + 5 (diff 0)
        assert_eq!(effective_sp(&[20, 20]), 25);
    }

    #[test]
    fn test_order_does_not_matter() {
        assert_eq!(effective_sp(&[10, 20, 14]), effective_sp(&[20, 14, 10]));
    }

    #[test]
    fn test_three_layers() {
        // 20, then 14: diff 6 -> +4 = 24, then 10: diff 14 -> +3 = 27
        assert_eq!(effective_sp(&[14, 20, 10]), 27);
    }

    #[test]
    fn test_tiny_layer_capped_by_own_sp() {
        // 20, then 2: diff 18 -> bonus 2, min(2, 2) = 2
        assert_eq!(effective_sp(&[20, 2]), 22);
        // 10, then 1: diff 9 -> bonus 3, min(1, 3) = 1
        assert_eq!(effective_sp(&[10, 1]), 11);
    }

    #[test]
    fn test_mismatched_layer_adds_nothing() {
        // 40, then 4: diff 36 -> no bonus
        assert_eq!(effective_sp(&[40, 4]), 40);
    }

    #[test]
    fn test_saturates_at_max() {
        assert_eq!(effective_sp(&[u32::MAX, u32::MAX]), u32::MAX);
        assert_eq!(effective_sp(&[u32::MAX, 3]), u32::MAX);
    }
}
