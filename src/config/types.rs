//! Configuration types for time calculation.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files. All former string-typed
//! switches (rounding type, break type, credit type) are closed sum types
//! with exhaustive matching at each call site.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// How a time-of-day is adjusted onto the rounding grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RoundingType {
    /// No rounding; input passes through unchanged.
    #[default]
    None,
    /// Round up to the next grid point.
    Up,
    /// Round down to the previous grid point.
    Down,
    /// Round to the nearest grid point, ties up.
    Nearest,
    /// Add a fixed offset, ignoring the interval.
    Add,
    /// Subtract a fixed offset, ignoring the interval.
    Subtract,
}

/// The origin the rounding grid is anchored at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RoundingAnchor {
    /// Grid starts at midnight (minute 0).
    #[default]
    Midnight,
    /// Grid starts at the plan's arrival window start.
    PlanStart,
}

/// Rounding configuration for one booking direction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundingConfig {
    /// The rounding mode.
    #[serde(default)]
    pub rounding_type: RoundingType,
    /// The grid interval in minutes; non-positive values disable rounding.
    #[serde(default)]
    pub interval_minutes: i32,
    /// The grid origin.
    #[serde(default)]
    pub anchor: RoundingAnchor,
    /// The fixed offset for `Add`/`Subtract`.
    #[serde(default)]
    pub offset_minutes: i32,
}

/// Grace windows for snapping bookings to plan boundaries, per direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ToleranceConfig {
    /// Minutes after the arrival boundary still snapped back to it.
    #[serde(default)]
    pub come_plus: i32,
    /// Minutes before the arrival boundary still snapped forward to it.
    #[serde(default)]
    pub come_minus: i32,
    /// Minutes after the departure boundary still snapped back to it.
    #[serde(default)]
    pub go_plus: i32,
    /// Minutes before the departure boundary still snapped forward to it.
    #[serde(default)]
    pub go_minus: i32,
}

/// The kind of a break rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BreakRuleKind {
    /// Deducts its duration when work overlaps a fixed time window.
    Fixed,
    /// Deducts its duration within a window unless a manual break exists.
    Variable,
    /// Deducts the shortfall once accumulated work exceeds a threshold.
    MinimumAfter,
}

/// A single break rule within a day plan.
///
/// Rules apply in ascending `sort_order`; each may consume remaining
/// unpaired work time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakRule {
    /// The rule kind.
    pub kind: BreakRuleKind,
    /// Window start in minutes since midnight (`Fixed`/`Variable`).
    #[serde(default)]
    pub window_start: Option<i32>,
    /// Window end in minutes since midnight (`Fixed`/`Variable`).
    #[serde(default)]
    pub window_end: Option<i32>,
    /// Work-minute threshold for `MinimumAfter`.
    #[serde(default)]
    pub after_work_minutes: Option<i32>,
    /// The break duration in minutes.
    pub duration_minutes: i32,
    /// Whether the break is paid (not deducted from net time).
    #[serde(default)]
    pub paid: bool,
    /// Whether the break is deducted even when a manual booking covers it.
    #[serde(default)]
    pub auto_deduct: bool,
    /// Application order; lower values apply first.
    #[serde(default)]
    pub sort_order: u32,
}

/// The full configuration for one day plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayPlanConfig {
    /// Earliest allowed arrival, minutes since midnight.
    pub come_from: i32,
    /// Latest allowed arrival.
    pub come_to: i32,
    /// Earliest allowed departure.
    pub go_from: i32,
    /// Latest allowed departure.
    pub go_to: i32,
    /// Core-time window start, if the plan has one.
    #[serde(default)]
    pub core_start: Option<i32>,
    /// Core-time window end, if the plan has one.
    #[serde(default)]
    pub core_end: Option<i32>,
    /// Target work minutes for the day.
    pub target_minutes: i32,
    /// Grace windows applied before rounding.
    #[serde(default)]
    pub tolerance: Option<ToleranceConfig>,
    /// Rounding applied to arrival times.
    #[serde(default)]
    pub rounding_come: Option<RoundingConfig>,
    /// Rounding applied to departure times.
    #[serde(default)]
    pub rounding_go: Option<RoundingConfig>,
    /// Break rules, applied in `sort_order`.
    #[serde(default)]
    pub break_rules: Vec<BreakRule>,
    /// Minimum net work minutes; shortfall is an error.
    #[serde(default)]
    pub min_net_minutes: Option<i32>,
    /// Maximum net work minutes; excess is capped with a warning.
    #[serde(default)]
    pub max_net_minutes: Option<i32>,
    /// Round every booking instead of only the first come and last go.
    #[serde(default)]
    pub round_all_bookings: bool,
}

/// The monthly flextime credit policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CreditType {
    /// 1:1 pass-through to the next month, no capping.
    #[default]
    NoEvaluation,
    /// Carry over up to the monthly cap; excess is forfeited.
    CompleteCarryover,
    /// Credit only the portion exceeding a threshold.
    AfterThreshold,
    /// Reset flextime to zero at each month boundary.
    NoCarryover,
}

/// Flextime configuration for monthly aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct FlextimeConfig {
    /// The credit policy.
    #[serde(default)]
    pub credit_type: CreditType,
    /// Per-month maximum credited minutes (`CompleteCarryover`).
    #[serde(default)]
    pub monthly_cap: Option<i32>,
    /// Annual upper bound on the flextime balance.
    #[serde(default)]
    pub annual_upper: Option<i32>,
    /// Annual lower bound on the flextime balance.
    #[serde(default)]
    pub annual_lower: Option<i32>,
    /// Credit threshold in minutes (`AfterThreshold`).
    #[serde(default)]
    pub threshold_minutes: Option<i32>,
}

/// A loaded tariff: named day plans plus the flextime policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct TariffConfig {
    /// Day plans keyed by plan name.
    pub day_plans: HashMap<String, DayPlanConfig>,
    /// The flextime credit policy for monthly aggregation.
    #[serde(default)]
    pub flextime: FlextimeConfig,
}
