//! Vacation entitlement calculation.
//!
//! Computes annual entitlement from base days, pro-rated by months employed
//! in the entitlement year, scaled by the part-time factor, plus stackable
//! bonus rules keyed on age, tenure, or disability. The total is rounded to
//! the nearest half day. Also provides the carryover clamp and the
//! deduction helper for half/full-day absences.

use chrono::{Datelike, Days, NaiveDate};
use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::{SpecialCalcType, VacationBasis, VacationCalcInput, VacationCalcOutput};

/// Whole years between two dates, zero when `to` precedes `from`.
fn years_between(from: NaiveDate, to: NaiveDate) -> u32 {
    if to < from {
        return 0;
    }
    let mut years = to.year() - from.year();
    if (to.month(), to.day()) < (from.month(), from.day()) {
        years -= 1;
    }
    years.max(0) as u32
}

/// The anniversary of `date` in `year`, clamping Feb 29 to Feb 28. `None`
/// only when `year` is outside chrono's representable range.
fn anniversary_in(date: NaiveDate, year: i32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, date.month(), date.day())
        .or_else(|| NaiveDate::from_ymd_opt(year, date.month(), 28))
}

fn is_last_day_of_month(date: NaiveDate) -> bool {
    match date.checked_add_days(Days::new(1)) {
        Some(next) => next.month() != date.month(),
        None => true,
    }
}

/// Full months employed within the entitlement year (0–12).
///
/// The entitlement year is Jan 1 – Dec 31 of `target_year` for the
/// calendar-year basis, or the hire-anniversary year starting in
/// `target_year` for the entry-date basis. A month counts only when
/// employment covers it from its first through its last day.
fn months_employed(
    entry: NaiveDate,
    exit: Option<NaiveDate>,
    basis: VacationBasis,
    target_year: i32,
) -> u32 {
    let window = match basis {
        VacationBasis::CalendarYear => NaiveDate::from_ymd_opt(target_year, 1, 1)
            .zip(NaiveDate::from_ymd_opt(target_year, 12, 31)),
        VacationBasis::EntryDate => anniversary_in(entry, target_year).map(|start| {
            let end = anniversary_in(entry, target_year + 1)
                .and_then(|d| d.pred_opt())
                .unwrap_or(start);
            (start, end)
        }),
    };
    // An unrepresentable target year means no employment in the window.
    let Some((window_start, window_end)) = window else {
        return 0;
    };

    let effective_start = entry.max(window_start);
    let effective_end = exit.unwrap_or(window_end).min(window_end);
    if effective_start > effective_end {
        return 0;
    }

    // Entry after the 1st starts counting the next month; exit before the
    // month's last day stops counting with the prior month.
    let mut start_index = effective_start.year() * 12 + effective_start.month0() as i32;
    if effective_start.day() != 1 {
        start_index += 1;
    }
    let mut end_index = effective_end.year() * 12 + effective_end.month0() as i32;
    if !is_last_day_of_month(effective_end) {
        end_index -= 1;
    }

    (end_index - start_index + 1).clamp(0, 12) as u32
}

/// Rounds a day value to the nearest half day, half-up.
fn round_half_day(value: Decimal) -> Decimal {
    (value * Decimal::TWO).round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        / Decimal::TWO
}

/// Calculates one employee's vacation entitlement for a year.
///
/// Algorithm:
///
/// 1. Age and tenure in whole years at the reference date.
/// 2. Months employed within the entitlement year per the basis.
/// 3. Base entitlement pro-rated by months / 12.
/// 4. Part-time adjustment by weekly / standard weekly hours (factor 1
///    when standard hours is zero).
/// 5. Each special calculation adds its bonus when the threshold is met;
///    same-type rules stack additively. Bonuses are pro-rated and
///    part-time adjusted like the base.
/// 6. Total rounded to the nearest half day.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use time_engine::calculation::calculate_vacation;
/// use time_engine::models::{VacationBasis, VacationCalcInput};
///
/// let input = VacationCalcInput {
///     birth_date: NaiveDate::from_ymd_opt(1990, 5, 1).unwrap(),
///     entry_date: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
///     exit_date: None,
///     weekly_hours: Decimal::from(40),
///     disabled: false,
///     base_vacation_days: Decimal::from(30),
///     standard_weekly_hours: Decimal::from(40),
///     basis: VacationBasis::CalendarYear,
///     special_calcs: vec![],
///     target_year: 2026,
///     reference_date: NaiveDate::from_ymd_opt(2026, 12, 31).unwrap(),
/// };
///
/// let output = calculate_vacation(&input);
/// assert_eq!(output.total_entitlement, Decimal::from(30));
/// ```
pub fn calculate_vacation(input: &VacationCalcInput) -> VacationCalcOutput {
    let age_at_reference = years_between(input.birth_date, input.reference_date);
    let tenure_years = years_between(input.entry_date, input.reference_date);
    let months = months_employed(
        input.entry_date,
        input.exit_date,
        input.basis,
        input.target_year,
    );

    let pro_rata = Decimal::from(months) / Decimal::from(12);
    let pro_rated_entitlement = input.base_vacation_days * pro_rata;

    let part_time_factor = if input.standard_weekly_hours.is_zero() {
        Decimal::ONE
    } else {
        input.weekly_hours / input.standard_weekly_hours
    };
    let part_time_adjusted = pro_rated_entitlement * part_time_factor;

    let mut age_bonus = Decimal::ZERO;
    let mut tenure_bonus = Decimal::ZERO;
    let mut disability_bonus = Decimal::ZERO;
    for calc in &input.special_calcs {
        let met = match calc.calc_type {
            SpecialCalcType::Age => age_at_reference >= calc.threshold,
            SpecialCalcType::Tenure => tenure_years >= calc.threshold,
            SpecialCalcType::Disability => input.disabled,
        };
        if !met {
            continue;
        }

        let adjusted = calc.bonus_days * pro_rata * part_time_factor;
        match calc.calc_type {
            SpecialCalcType::Age => age_bonus += adjusted,
            SpecialCalcType::Tenure => tenure_bonus += adjusted,
            SpecialCalcType::Disability => disability_bonus += adjusted,
        }
    }

    let total_entitlement =
        round_half_day(part_time_adjusted + age_bonus + tenure_bonus + disability_bonus);

    VacationCalcOutput {
        base_entitlement: input.base_vacation_days,
        pro_rated_entitlement,
        part_time_adjusted,
        age_bonus,
        tenure_bonus,
        disability_bonus,
        total_entitlement,
        months_employed: months,
        age_at_reference,
        tenure_years,
    }
}

/// Clamps an available vacation balance to an optional carryover ceiling.
///
/// Returns `available` unchanged when no ceiling is configured.
pub fn calculate_carryover(available: Decimal, max_carryover: Option<Decimal>) -> Decimal {
    match max_carryover {
        Some(max) => available.min(max),
        None => available,
    }
}

/// Days to deduct for a half/full-day absence.
///
/// Multiplies the daily vacation value by the duration fraction and rounds
/// to two decimal places.
pub fn calculate_vacation_deduction(daily_value: Decimal, duration_fraction: Decimal) -> Decimal {
    (daily_value * duration_fraction)
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SpecialCalc;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn full_year_input() -> VacationCalcInput {
        VacationCalcInput {
            birth_date: date("1985-03-15"),
            entry_date: date("2014-01-01"),
            exit_date: None,
            weekly_hours: dec("40"),
            disabled: false,
            base_vacation_days: dec("30"),
            standard_weekly_hours: dec("40"),
            basis: VacationBasis::CalendarYear,
            special_calcs: vec![],
            target_year: 2026,
            reference_date: date("2026-12-31"),
        }
    }

    /// VC-001: full year, full time -> full base entitlement.
    #[test]
    fn test_full_year_full_time() {
        let output = calculate_vacation(&full_year_input());
        assert_eq!(output.months_employed, 12);
        assert_eq!(output.pro_rated_entitlement, dec("30"));
        assert_eq!(output.total_entitlement, dec("30"));
    }

    /// VC-002: part-time 50% -> half the entitlement.
    #[test]
    fn test_part_time_half() {
        let mut input = full_year_input();
        input.weekly_hours = dec("20");

        let output = calculate_vacation(&input);
        assert_eq!(output.part_time_adjusted, dec("15"));
        assert_eq!(output.total_entitlement, dec("15"));
    }

    /// VC-003: tenure bonuses at 5y and 10y both stack for 12y tenure.
    #[test]
    fn test_tenure_bonus_stacking() {
        let mut input = full_year_input();
        input.special_calcs = vec![
            SpecialCalc {
                calc_type: SpecialCalcType::Tenure,
                threshold: 5,
                bonus_days: dec("1"),
            },
            SpecialCalc {
                calc_type: SpecialCalcType::Tenure,
                threshold: 10,
                bonus_days: dec("2"),
            },
        ];

        let output = calculate_vacation(&input);
        assert_eq!(output.tenure_years, 12);
        assert_eq!(output.tenure_bonus, dec("3"));
        assert_eq!(output.total_entitlement, dec("33"));
    }

    #[test]
    fn test_tenure_bonus_threshold_not_met() {
        let mut input = full_year_input();
        input.entry_date = date("2023-01-01");
        input.special_calcs = vec![SpecialCalc {
            calc_type: SpecialCalcType::Tenure,
            threshold: 5,
            bonus_days: dec("1"),
        }];

        let output = calculate_vacation(&input);
        assert_eq!(output.tenure_years, 3);
        assert_eq!(output.tenure_bonus, dec("0"));
        assert_eq!(output.total_entitlement, dec("30"));
    }

    #[test]
    fn test_age_bonus() {
        let mut input = full_year_input();
        input.special_calcs = vec![SpecialCalc {
            calc_type: SpecialCalcType::Age,
            threshold: 40,
            bonus_days: dec("2"),
        }];

        let output = calculate_vacation(&input);
        // born 1985-03-15, reference 2026-12-31 -> age 41
        assert_eq!(output.age_at_reference, 41);
        assert_eq!(output.age_bonus, dec("2"));
        assert_eq!(output.total_entitlement, dec("32"));
    }

    #[test]
    fn test_disability_bonus_requires_flag() {
        let mut input = full_year_input();
        input.special_calcs = vec![SpecialCalc {
            calc_type: SpecialCalcType::Disability,
            threshold: 0,
            bonus_days: dec("5"),
        }];

        let without = calculate_vacation(&input);
        assert_eq!(without.disability_bonus, dec("0"));

        input.disabled = true;
        let with = calculate_vacation(&input);
        assert_eq!(with.disability_bonus, dec("5"));
        assert_eq!(with.total_entitlement, dec("35"));
    }

    #[test]
    fn test_mid_year_entry_pro_rates() {
        let mut input = full_year_input();
        input.entry_date = date("2026-07-01");

        let output = calculate_vacation(&input);
        assert_eq!(output.months_employed, 6);
        assert_eq!(output.pro_rated_entitlement, dec("15"));
        assert_eq!(output.total_entitlement, dec("15"));
    }

    #[test]
    fn test_entry_mid_month_starts_next_month() {
        let mut input = full_year_input();
        input.entry_date = date("2026-07-15");

        let output = calculate_vacation(&input);
        assert_eq!(output.months_employed, 5);
    }

    #[test]
    fn test_exit_mid_month_stops_prior_month() {
        let mut input = full_year_input();
        input.exit_date = Some(date("2026-06-15"));

        let output = calculate_vacation(&input);
        assert_eq!(output.months_employed, 5);
    }

    #[test]
    fn test_exit_on_last_day_counts_that_month() {
        let mut input = full_year_input();
        input.exit_date = Some(date("2026-06-30"));

        let output = calculate_vacation(&input);
        assert_eq!(output.months_employed, 6);
    }

    #[test]
    fn test_exit_before_target_year_is_zero() {
        let mut input = full_year_input();
        input.exit_date = Some(date("2025-12-31"));

        let output = calculate_vacation(&input);
        assert_eq!(output.months_employed, 0);
        assert_eq!(output.total_entitlement, dec("0"));
    }

    #[test]
    fn test_entry_date_basis_full_anniversary_year() {
        let mut input = full_year_input();
        input.basis = VacationBasis::EntryDate;
        input.entry_date = date("2020-04-01");

        // Window 2026-04-01 .. 2027-03-31, fully employed.
        let output = calculate_vacation(&input);
        assert_eq!(output.months_employed, 12);
        assert_eq!(output.total_entitlement, dec("30"));
    }

    #[test]
    fn test_entry_date_basis_with_exit() {
        let mut input = full_year_input();
        input.basis = VacationBasis::EntryDate;
        input.entry_date = date("2020-04-01");
        input.exit_date = Some(date("2026-09-30"));

        // Window 2026-04-01 .. 2027-03-31; employed Apr-Sep = 6 months.
        let output = calculate_vacation(&input);
        assert_eq!(output.months_employed, 6);
        assert_eq!(output.total_entitlement, dec("15"));
    }

    #[test]
    fn test_zero_standard_hours_defaults_factor_to_one() {
        let mut input = full_year_input();
        input.standard_weekly_hours = dec("0");
        input.weekly_hours = dec("20");

        let output = calculate_vacation(&input);
        assert_eq!(output.total_entitlement, dec("30"));
    }

    #[test]
    fn test_total_rounds_to_half_day() {
        let mut input = full_year_input();
        // 7 of 12 months: 30 * 7/12 = 17.5 exactly
        input.entry_date = date("2026-06-01");
        let output = calculate_vacation(&input);
        assert_eq!(output.months_employed, 7);
        assert_eq!(output.total_entitlement, dec("17.5"));

        // 5 of 12 months: 30 * 5/12 = 12.5
        input.entry_date = date("2026-08-01");
        let output = calculate_vacation(&input);
        assert_eq!(output.total_entitlement, dec("12.5"));

        // 1 of 12 months: 30/12 = 2.5
        input.entry_date = date("2026-12-01");
        let output = calculate_vacation(&input);
        assert_eq!(output.total_entitlement, dec("2.5"));
    }

    #[test]
    fn test_rounding_half_up_on_quarter_days() {
        // 25 * 5/12 = 10.4166.. -> 10.5
        let mut input = full_year_input();
        input.base_vacation_days = dec("25");
        input.entry_date = date("2026-08-01");

        let output = calculate_vacation(&input);
        assert_eq!(output.months_employed, 5);
        assert_eq!(output.total_entitlement, dec("10.5"));
    }

    #[test]
    fn test_age_computed_before_birthday() {
        let mut input = full_year_input();
        input.reference_date = date("2026-03-14"); // day before birthday

        let output = calculate_vacation(&input);
        assert_eq!(output.age_at_reference, 40);
    }

    #[test]
    fn test_carryover_clamps_to_max() {
        assert_eq!(calculate_carryover(dec("12"), Some(dec("10"))), dec("10"));
        assert_eq!(calculate_carryover(dec("8"), Some(dec("10"))), dec("8"));
    }

    #[test]
    fn test_carryover_without_max_is_identity() {
        assert_eq!(calculate_carryover(dec("12"), None), dec("12"));
        assert_eq!(calculate_carryover(dec("-3"), None), dec("-3"));
    }

    #[test]
    fn test_vacation_deduction() {
        assert_eq!(calculate_vacation_deduction(dec("1"), dec("0.5")), dec("0.50"));
        assert_eq!(calculate_vacation_deduction(dec("1"), dec("1")), dec("1.00"));
        assert_eq!(
            calculate_vacation_deduction(dec("1.333"), dec("0.5")),
            dec("0.67")
        );
    }
}
