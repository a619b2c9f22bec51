//! Monthly aggregation result, absence summary, and monthly warning codes.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Soft anomaly codes produced by the monthly aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MonthlyWarningCode {
    /// The credited flextime change was capped at the per-month maximum.
    MonthlyCap,
    /// The flextime end balance was clipped to the annual caps.
    FlextimeCapped,
    /// The raw flextime change stayed below the credit threshold.
    BelowThreshold,
    /// The credit policy reset the flextime balance to zero.
    NoCarryover,
}

/// The kind of an absence day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AbsenceKind {
    /// Vacation (counted in day fractions).
    Vacation,
    /// Sick leave.
    Sick,
    /// Any other absence type.
    Other,
}

/// A single resolved absence day passed into the monthly aggregation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbsenceDay {
    /// The kind of absence.
    pub kind: AbsenceKind,
    /// The day fraction (1 for a full day, 0.5 for a half day).
    pub fraction: Decimal,
}

/// Summed absences for a month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct AbsenceSummary {
    /// Vacation days taken, in day fractions.
    pub vacation_days: Decimal,
    /// Sick days, in day fractions.
    pub sick_days: Decimal,
    /// Other absence days, in day fractions.
    pub other_days: Decimal,
}

/// The complete result of aggregating one employee-month.
///
/// Invariant: `flextime_end` always lies within the configured annual caps
/// after the credit-type policy has been applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct MonthlyResult {
    /// Summed gross work minutes.
    pub gross_minutes: i32,
    /// Summed net work minutes.
    pub net_minutes: i32,
    /// Summed target minutes.
    pub target_minutes: i32,
    /// Summed overtime minutes.
    pub overtime_minutes: i32,
    /// Summed undertime minutes.
    pub undertime_minutes: i32,
    /// Summed unpaid break minutes.
    pub break_minutes: i32,
    /// Flextime balance carried into the month.
    pub flextime_start: i32,
    /// Raw flextime change: overtime minus undertime.
    pub flextime_raw: i32,
    /// The portion of the raw change credited by the policy.
    pub flextime_credited: i32,
    /// The portion discarded by capping or reset, tracked, never silent.
    pub flextime_forfeited: i32,
    /// Flextime balance carried out of the month.
    pub flextime_end: i32,
    /// Summed absences.
    pub absences: AbsenceSummary,
    /// Number of days with positive net work time.
    pub work_days: u32,
    /// Number of days carrying at least one error code.
    pub error_days: u32,
    /// Monthly warning codes, in detection order.
    pub warnings: Vec<MonthlyWarningCode>,
}

impl MonthlyResult {
    /// Records a warning code, once per code.
    pub fn push_warning(&mut self, code: MonthlyWarningCode) {
        if !self.warnings.contains(&code) {
            self.warnings.push(code);
        }
    }
}
