//! Scoring module - classic line-clear points, levels, and gravity speed

use crate::types::{GRAVITY_FLOOR_MS, LINES_PER_LEVEL, SCORE_TABLE};

/// Calculate line clear score (Classic rules)
/// lines: number of lines cleared (0-4)
/// level: level before the clear is counted (0-based)
pub fn line_clear_score(lines: usize, level: u32) -> u32 {
    match SCORE_TABLE.get(lines) {
        Some(&base) => base.saturating_mul(level.saturating_add(1)),
        None => 0,
    }
}

/// Level management
/// Level increases every 10 lines cleared
pub fn level_for_lines(total_lines: u32) -> u32 {
    total_lines / LINES_PER_LEVEL
}

/// Gravity interval for a level: `base_ms * decay^level`, floored at 1ms.
pub fn gravity_interval_ms(level: u32, base_ms: u64, decay: f64) -> u64 {
    let exp = level.min(i32::MAX as u32) as i32;
    let interval = (base_ms as f64) * decay.powi(exp);
    if !interval.is_finite() {
        return base_ms.max(GRAVITY_FLOOR_MS);
    }
    (interval as u64).max(GRAVITY_FLOOR_MS)
}
