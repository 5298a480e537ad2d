use buzzwin_level::{karma_for_level, level_for_karma, progress_to_next_level, LevelTable};
use proptest::prelude::*;

// ── Level is at least 1 ─────────────────────────────────────────────────

proptest! {
    #[test]
    fn level_at_least_one(karma in any::<i64>()) {
        prop_assert!(level_for_karma(karma) >= 1);
    }
}

// ── Monotonically non-decreasing ─────────────────────────────────────────

proptest! {
    #[test]
    fn level_monotonic(a in 0i64..10_000_000, delta in 0i64..100_000) {
        prop_assert!(level_for_karma(a) <= level_for_karma(a + delta));
    }
}

// ── Exact threshold round-trip ──────────────────────────────────────────

proptest! {
    #[test]
    fn threshold_round_trip(level in 1u32..120) {
        prop_assert_eq!(level_for_karma(karma_for_level(level)), level);
    }
}

// ── Just below a threshold is the previous level ────────────────────────

proptest! {
    #[test]
    fn one_below_threshold_is_previous_level(level in 2u32..120) {
        prop_assert_eq!(level_for_karma(karma_for_level(level) - 1), level - 1);
    }
}

// ── Fresh level has zero progress ───────────────────────────────────────

proptest! {
    #[test]
    fn fresh_level_zero_progress(level in 1u32..120) {
        prop_assert_eq!(progress_to_next_level(karma_for_level(level)), 0.0);
    }
}

// ── Progress bounded 0–100 ──────────────────────────────────────────────

proptest! {
    #[test]
    fn progress_bounded(karma in any::<i64>()) {
        let p = progress_to_next_level(karma);
        prop_assert!((0.0..=100.0).contains(&p), "out of bounds: {}", p);
    }
}

// ── Thresholds strictly increasing ──────────────────────────────────────

proptest! {
    #[test]
    fn thresholds_strictly_increasing(level in 1u32..150) {
        prop_assert!(karma_for_level(level) < karma_for_level(level + 1));
    }
}

// ── Table agrees with iteration ─────────────────────────────────────────

proptest! {
    #[test]
    fn table_agrees_with_iteration(karma in 0i64..1_000_000_000) {
        let table = LevelTable::new(40);
        prop_assert_eq!(table.level_for_karma(karma), level_for_karma(karma));
    }
}
