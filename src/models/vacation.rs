//! Vacation calculation input and output models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The basis on which the entitlement year is anchored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VacationBasis {
    /// Entitlement year runs Jan 1 – Dec 31.
    CalendarYear,
    /// Entitlement year runs from the hire anniversary.
    EntryDate,
}

/// The kind of threshold a special calculation is keyed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpecialCalcType {
    /// Bonus once the employee's age reaches the threshold.
    Age,
    /// Bonus once the employee's tenure in years reaches the threshold.
    Tenure,
    /// Bonus when the disability flag is set (threshold unused).
    Disability,
}

/// A stackable bonus-day rule keyed on age, tenure, or disability status.
///
/// Multiple rules of the same type with different thresholds stack
/// additively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecialCalc {
    /// What the rule is keyed on.
    pub calc_type: SpecialCalcType,
    /// The integer threshold (years of age or tenure; ignored for disability).
    pub threshold: u32,
    /// The bonus days granted when the threshold is met.
    pub bonus_days: Decimal,
}

/// Fully-resolved input for one vacation entitlement calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VacationCalcInput {
    /// The employee's birth date.
    pub birth_date: NaiveDate,
    /// The date employment started.
    pub entry_date: NaiveDate,
    /// The date employment ended, if it has.
    #[serde(default)]
    pub exit_date: Option<NaiveDate>,
    /// The employee's contractual weekly hours.
    pub weekly_hours: Decimal,
    /// Whether the employee has a registered disability.
    #[serde(default)]
    pub disabled: bool,
    /// The annual base vacation entitlement in days.
    pub base_vacation_days: Decimal,
    /// The full-time standard weekly hours used for part-time adjustment.
    pub standard_weekly_hours: Decimal,
    /// How the entitlement year is anchored.
    pub basis: VacationBasis,
    /// Ordered list of stackable bonus rules.
    #[serde(default)]
    pub special_calcs: Vec<SpecialCalc>,
    /// The year the entitlement is computed for.
    pub target_year: i32,
    /// The date age and tenure are evaluated at.
    pub reference_date: NaiveDate,
}

/// The output of one vacation entitlement calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VacationCalcOutput {
    /// The unmodified annual base entitlement.
    pub base_entitlement: Decimal,
    /// Base entitlement pro-rated by months employed / 12.
    pub pro_rated_entitlement: Decimal,
    /// Pro-rated entitlement scaled by the part-time factor.
    pub part_time_adjusted: Decimal,
    /// Total bonus days from age rules (pro-rated and adjusted).
    pub age_bonus: Decimal,
    /// Total bonus days from tenure rules (pro-rated and adjusted).
    pub tenure_bonus: Decimal,
    /// Total bonus days from disability rules (pro-rated and adjusted).
    pub disability_bonus: Decimal,
    /// Final entitlement, rounded to the nearest half day.
    pub total_entitlement: Decimal,
    /// Months employed within the entitlement year (0–12).
    pub months_employed: u32,
    /// The employee's age in whole years at the reference date.
    pub age_at_reference: u32,
    /// The employee's tenure in whole years at the reference date.
    pub tenure_years: u32,
}
