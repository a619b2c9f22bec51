//! Break deduction: applying a day plan's ordered break rules.
//!
//! Break time comes from two sources: manual break bookings made by the
//! employee and rule-based deductions from the day plan. Rules apply in
//! `sort_order`; each may consume remaining unpaired work time. Total unpaid
//! deduction never exceeds total work-interval duration.

use serde::{Deserialize, Serialize};

use crate::config::{BreakRule, BreakRuleKind};
use crate::models::{BookingPair, DailyWarningCode};

use super::time_base::MINUTES_PER_DAY;

/// The outcome of applying break rules to one day's paired intervals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct BreakResult {
    /// Unpaid break minutes deducted from gross time (manual plus rules).
    pub deducted_minutes: i32,
    /// Paid break minutes; informational, never deducted.
    pub paid_minutes: i32,
    /// Minutes covered by manual break bookings.
    pub manual_minutes: i32,
    /// Warnings raised while applying the rules.
    pub warnings: Vec<DailyWarningCode>,
}

impl BreakResult {
    fn warn(&mut self, code: DailyWarningCode) {
        if !self.warnings.contains(&code) {
            self.warnings.push(code);
        }
    }
}

/// Minutes of overlap between a paired interval and a rule window.
///
/// Rule windows are times of day; a cross-midnight pair is normalized past
/// 1440, so the window is also checked shifted one day forward.
fn window_overlap(pair: &BookingPair, window_start: i32, window_end: i32) -> i32 {
    let overlap = |ws: i32, we: i32| {
        let start = pair.start_minutes.max(ws);
        let end = pair.end_minutes.min(we);
        (end - start).max(0)
    };
    overlap(window_start, window_end)
        + overlap(window_start + MINUTES_PER_DAY, window_end + MINUTES_PER_DAY)
}

/// Applies the plan's ordered break rules to the day's paired intervals.
///
/// * A `Fixed` rule deducts its duration when a work interval overlaps its
///   window and either `auto_deduct` is set or no manual break booking lies
///   in the window.
/// * A `Variable` rule is skipped entirely when any manual break exists.
/// * A `MinimumAfter` rule deducts only the shortfall between break time
///   accumulated so far and its minimum duration, and only once total work
///   time exceeds its threshold.
///
/// Rules marked `paid` accumulate into `paid_minutes` instead of the unpaid
/// deduction. The unpaid deduction is clamped to the total work duration.
pub fn calculate_breaks(
    work_pairs: &[BookingPair],
    manual_breaks: &[BookingPair],
    rules: &[BreakRule],
) -> BreakResult {
    let mut result = BreakResult::default();

    let total_work: i32 = work_pairs.iter().map(|p| p.duration_minutes()).sum();
    result.manual_minutes = manual_breaks.iter().map(|p| p.duration_minutes()).sum();

    // Manual breaks are unpaid time inside the work span.
    result.deducted_minutes = result.manual_minutes;
    let mut breaks_so_far = result.manual_minutes;

    let mut ordered: Vec<&BreakRule> = rules.iter().collect();
    ordered.sort_by_key(|r| r.sort_order);

    for rule in ordered {
        match rule.kind {
            BreakRuleKind::Fixed => {
                let (window_start, window_end) = match (rule.window_start, rule.window_end) {
                    (Some(s), Some(e)) => (s, e),
                    _ => continue,
                };

                let work_overlaps = work_pairs
                    .iter()
                    .any(|p| window_overlap(p, window_start, window_end) > 0);
                if !work_overlaps {
                    continue;
                }

                let manual_in_window = manual_breaks
                    .iter()
                    .any(|p| window_overlap(p, window_start, window_end) > 0);
                if manual_in_window && !rule.auto_deduct {
                    continue;
                }

                apply_deduction(&mut result, rule, rule.duration_minutes);
                breaks_so_far += rule.duration_minutes;
            }
            BreakRuleKind::Variable => {
                if !manual_breaks.is_empty() {
                    continue;
                }

                let applies = match (rule.window_start, rule.window_end) {
                    (Some(s), Some(e)) => work_pairs.iter().any(|p| window_overlap(p, s, e) > 0),
                    _ => total_work > 0,
                };
                if !applies {
                    continue;
                }

                apply_deduction(&mut result, rule, rule.duration_minutes);
                breaks_so_far += rule.duration_minutes;
            }
            BreakRuleKind::MinimumAfter => {
                let threshold = rule.after_work_minutes.unwrap_or(0);
                if total_work <= threshold {
                    continue;
                }

                let shortfall = (rule.duration_minutes - breaks_so_far).max(0);
                if shortfall == 0 {
                    continue;
                }

                if manual_breaks.is_empty() {
                    result.warn(DailyWarningCode::NoBreakRecorded);
                } else {
                    result.warn(DailyWarningCode::ShortBreak);
                }

                apply_deduction(&mut result, rule, shortfall);
                breaks_so_far += shortfall;
            }
        }
    }

    // Deducted break time never exceeds the work it is taken from.
    result.deducted_minutes = result.deducted_minutes.clamp(0, total_work.max(0));
    result
}

fn apply_deduction(result: &mut BreakResult, rule: &BreakRule, minutes: i32) {
    if rule.paid {
        result.paid_minutes += minutes;
    } else {
        result.deducted_minutes += minutes;
    }
    result.warn(DailyWarningCode::AutoBreakApplied);
}
