//! Scoring module - line rewards, drop bonuses, levels and gravity speed
//!
//! All functions are pure. Levels are 1-based.

use crate::types::{
    DROP_INTERVALS, HARD_DROP_POINTS, LINES_PER_LEVEL, LINE_SCORES, SOFT_DROP_POINTS,
};

/// Score calculation result for a single lock
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreResult {
    /// Points awarded for the rows cleared by this lock.
    pub points: u32,
    /// Cumulative lines after this lock.
    pub total_lines: u32,
    /// Level after this lock.
    pub level: u32,
    /// Drop interval that applies at `level`.
    pub drop_interval_ms: u32,
}

impl ScoreResult {
    pub fn leveled_up(&self, previous_level: u32) -> bool {
        self.level > previous_level
    }
}

/// Line clear reward: 100/300/500/800 for 1-4 rows, times the level.
pub fn line_clear_score(lines: usize, level: u32) -> u32 {
    LINE_SCORES
        .get(lines)
        .copied()
        .unwrap_or(0)
        .saturating_mul(level)
}

/// Level for a cumulative line count: one step every ten lines, starting at 1.
pub fn calculate_level(total_lines: u32) -> u32 {
    1 + total_lines / LINES_PER_LEVEL
}

/// Gravity interval for a level, clamped to the fastest table entry.
pub fn drop_interval_ms(level: u32) -> u32 {
    let idx = level.saturating_sub(1) as usize;
    DROP_INTERVALS[idx.min(DROP_INTERVALS.len() - 1)]
}

/// Drop bonus: +1 per row for soft drops, +2 per row for hard drops
pub fn calculate_drop_score(rows: u32, is_hard_drop: bool) -> u32 {
    let per_row = if is_hard_drop {
        HARD_DROP_POINTS
    } else {
        SOFT_DROP_POINTS
    };
    rows.saturating_mul(per_row)
}

/// Apply one lock's worth of cleared rows.
///
/// Points use the level in effect *before* the lines are added; the new
/// level and interval are derived from the updated total.
pub fn calculate_score(lines: usize, level: u32, total_lines: u32) -> ScoreResult {
    let total_lines = total_lines.saturating_add(lines as u32);
    let new_level = calculate_level(total_lines);
    ScoreResult {
        points: line_clear_score(lines, level),
        total_lines,
        level: new_level,
        drop_interval_ms: drop_interval_ms(new_level),
    }
}
