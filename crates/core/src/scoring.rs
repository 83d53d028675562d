//! Scoring module - line clear points and the speed curve

use crate::types::{
    BASE_DROP_MS, DROP_INTERVAL_MIN_MS, DROP_INTERVAL_STEP_MS, LINE_SCORES, SCORE_PER_SPEED_STEP,
};

/// Points for clearing `lines` rows in one pass.
///
/// More than four rows can only happen on a hand-built board; it is credited
/// like four.
pub fn line_clear_score(lines: usize) -> u32 {
    LINE_SCORES[lines.min(LINE_SCORES.len() - 1)]
}

/// Drop interval for a cumulative score:
/// `max(100, 1000 - floor(score / 1000) * 100)`.
pub fn drop_interval_for_score(score: u32) -> u32 {
    let steps = score / SCORE_PER_SPEED_STEP;
    BASE_DROP_MS
        .saturating_sub(steps.saturating_mul(DROP_INTERVAL_STEP_MS))
        .max(DROP_INTERVAL_MIN_MS)
}
