//! Monthly aggregation: summing daily results and applying the flextime
//! credit policy.
//!
//! The aggregator sums a month's daily results into raw totals, summarizes
//! absences, and applies one of four credit types to the raw flextime
//! change. Whatever the policy discards is tracked in
//! `flextime_forfeited`, never silently dropped.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::{CreditType, FlextimeConfig};
use crate::models::{
    AbsenceDay, AbsenceKind, DailyResult, MonthlyResult, MonthlyWarningCode,
};

/// Fully-resolved input for one employee-month aggregation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyCalcInput {
    /// The month's daily results, one per calculated day.
    pub days: Vec<DailyResult>,
    /// Resolved absence days within the month.
    #[serde(default)]
    pub absences: Vec<AbsenceDay>,
    /// The flextime balance carried in from the previous month.
    pub flextime_start: i32,
    /// The flextime credit policy.
    pub flextime: FlextimeConfig,
}

/// Aggregates one employee-month.
///
/// Sums the daily minute totals and day counts, summarizes absences, then
/// computes `flextime_raw = Σ overtime − Σ undertime` and applies the
/// configured [`CreditType`]:
///
/// * `NoEvaluation` — raw change passes through 1:1.
/// * `CompleteCarryover` — positive change is capped at the monthly cap;
///   the excess is forfeited.
/// * `AfterThreshold` — only the portion of a positive change above the
///   threshold is credited; below the threshold the change resets to zero.
/// * `NoCarryover` — the balance resets to zero at the month boundary.
///
/// `flextime_end = flextime_start + credited`, clipped to the annual caps
/// as the final step regardless of credit type.
pub fn calculate_month(input: &MonthlyCalcInput) -> MonthlyResult {
    let mut result = MonthlyResult {
        flextime_start: input.flextime_start,
        ..Default::default()
    };

    for day in &input.days {
        result.gross_minutes += day.gross_minutes;
        result.net_minutes += day.net_minutes;
        result.target_minutes += day.target_minutes;
        result.overtime_minutes += day.overtime_minutes;
        result.undertime_minutes += day.undertime_minutes;
        result.break_minutes += day.break_minutes;

        if day.net_minutes > 0 {
            result.work_days += 1;
        }
        if day.has_error {
            result.error_days += 1;
        }
    }

    for absence in &input.absences {
        match absence.kind {
            AbsenceKind::Vacation => result.absences.vacation_days += absence.fraction,
            AbsenceKind::Sick => result.absences.sick_days += absence.fraction,
            AbsenceKind::Other => result.absences.other_days += absence.fraction,
        }
    }

    result.flextime_raw = result.overtime_minutes - result.undertime_minutes;

    let cfg = &input.flextime;
    let (credited, forfeited) = match cfg.credit_type {
        CreditType::NoEvaluation => (result.flextime_raw, 0),
        CreditType::CompleteCarryover => {
            let mut credited = result.flextime_raw;
            if let Some(cap) = cfg.monthly_cap {
                if credited > cap {
                    credited = cap;
                    result.push_warning(MonthlyWarningCode::MonthlyCap);
                }
            }
            (credited, result.flextime_raw - credited)
        }
        CreditType::AfterThreshold => {
            let threshold = cfg.threshold_minutes.unwrap_or(0);
            if result.flextime_raw <= 0 {
                // Deficits pass through; the threshold gates credit only.
                (result.flextime_raw, 0)
            } else if result.flextime_raw <= threshold {
                result.push_warning(MonthlyWarningCode::BelowThreshold);
                (0, result.flextime_raw)
            } else {
                (result.flextime_raw - threshold, threshold)
            }
        }
        CreditType::NoCarryover => {
            result.push_warning(MonthlyWarningCode::NoCarryover);
            (
                -input.flextime_start,
                result.flextime_raw + input.flextime_start,
            )
        }
    };

    result.flextime_credited = credited;
    result.flextime_forfeited = forfeited;

    // Final step for every credit type: clip the balance to the annual caps.
    let mut end = input.flextime_start + credited;
    if let Some(upper) = cfg.annual_upper {
        if end > upper {
            result.flextime_forfeited += end - upper;
            end = upper;
            result.push_warning(MonthlyWarningCode::FlextimeCapped);
        }
    }
    if let Some(lower) = cfg.annual_lower {
        if end < lower {
            result.flextime_forfeited += end - lower;
            end = lower;
            result.push_warning(MonthlyWarningCode::FlextimeCapped);
        }
    }
    result.flextime_end = end;

    debug!(
        raw = result.flextime_raw,
        credited = result.flextime_credited,
        end = result.flextime_end,
        "monthly aggregation finished"
    );

    result
}
