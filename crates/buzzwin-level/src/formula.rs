/// Karma per level in the linear regime.
pub const KARMA_PER_LINEAR_LEVEL: i64 = 100;

/// Highest level reached in the linear regime.
pub const LINEAR_MAX_LEVEL: u32 = 10;

/// Karma at which the geometric regime starts (the threshold for level 11).
pub const GEOMETRIC_BASE_KARMA: i64 = 1000;

/// Threshold growth factor 1.2 expressed as a ratio so flooring is exact.
const GROWTH_NUM: i64 = 6;
const GROWTH_DEN: i64 = 5;

/// `floor(threshold * 1.2)`, saturating at `i64::MAX`.
#[inline]
pub fn next_threshold(threshold: i64) -> i64 {
    match threshold.checked_mul(GROWTH_NUM) {
        Some(scaled) => scaled / GROWTH_DEN,
        None => i64::MAX,
    }
}

/// Level for a karma total. Negative karma is level 1.
///
/// ```text
/// karma < 1000  → karma / 100 + 1
/// karma ≥ 1000  → 10 + number of geometric thresholds ≤ karma
/// ```
pub fn level_for_karma(karma: i64) -> u32 {
    if karma < 0 {
        return 1;
    }
    if karma < GEOMETRIC_BASE_KARMA {
        return (karma / KARMA_PER_LINEAR_LEVEL) as u32 + 1;
    }

    let mut level = LINEAR_MAX_LEVEL;
    let mut threshold = GEOMETRIC_BASE_KARMA;
    while karma >= threshold {
        level += 1;
        if threshold == i64::MAX {
            break;
        }
        threshold = next_threshold(threshold);
    }
    level
}

/// Minimum karma required to be at `level`. Level 0 is treated as level 1.
///
/// Uses the same floor-multiply sequence as [`level_for_karma`] so the two
/// stay inverse at every threshold.
pub fn karma_for_level(level: u32) -> i64 {
    if level <= 1 {
        return 0;
    }
    if level <= LINEAR_MAX_LEVEL {
        return (level as i64 - 1) * KARMA_PER_LINEAR_LEVEL;
    }

    let mut threshold = GEOMETRIC_BASE_KARMA;
    for _ in (LINEAR_MAX_LEVEL + 1)..level {
        threshold = next_threshold(threshold);
    }
    threshold
}

/// Percent progress from the current level's threshold to the next, in [0, 100].
pub fn progress_to_next_level(karma: i64) -> f64 {
    let karma = karma.max(0);
    let level = level_for_karma(karma);
    let current = karma_for_level(level);
    let next = karma_for_level(level + 1);
    progress_between(karma, current, next)
}

/// Karma still needed to reach the next level. Never negative.
pub fn karma_remaining_for_next_level(karma: i64) -> i64 {
    let level = level_for_karma(karma);
    (karma_for_level(level + 1) - karma.max(0)).max(0)
}

pub(crate) fn progress_between(karma: i64, current: i64, next: i64) -> f64 {
    let span = next - current;
    if span <= 0 {
        return 100.0;
    }
    let pct = (karma - current) as f64 / span as f64 * 100.0;
    pct.clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_threshold_floors() {
        assert_eq!(next_threshold(1000), 1200);
        assert_eq!(next_threshold(1728), 2073);
        assert_eq!(next_threshold(2073), 2487);
    }

    #[test]
    fn zero_span_is_full_progress() {
        assert_eq!(progress_between(50, 50, 50), 100.0);
    }
}
