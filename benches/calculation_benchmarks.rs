//! Performance benchmarks for the Time Calculation Engine.
//!
//! This benchmark suite verifies that the calculation core meets performance
//! targets:
//! - Single day calculation: < 100μs mean
//! - Month of 22 days: < 1ms mean
//! - Batch of 100 employee-days: < 10ms mean
//! - Vacation calculation: < 50μs mean
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rust_decimal::Decimal;
use std::str::FromStr;

use time_engine::calculation::{
    DailyCalcInput, MonthlyCalcInput, calculate_day, calculate_month, calculate_vacation,
};
use time_engine::config::{
    BreakRule, BreakRuleKind, CreditType, DayPlanConfig, FlextimeConfig, RoundingAnchor,
    RoundingConfig, RoundingType, ToleranceConfig,
};
use time_engine::models::{
    Booking, BookingCategory, BookingDirection, VacationBasis, VacationCalcInput,
};

fn standard_plan() -> DayPlanConfig {
    DayPlanConfig {
        come_from: 420,
        come_to: 540,
        go_from: 900,
        go_to: 1140,
        core_start: Some(540),
        core_end: Some(900),
        target_minutes: 480,
        tolerance: Some(ToleranceConfig {
            come_plus: 5,
            come_minus: 10,
            go_plus: 10,
            go_minus: 5,
        }),
        rounding_come: Some(RoundingConfig {
            rounding_type: RoundingType::Up,
            interval_minutes: 15,
            anchor: RoundingAnchor::Midnight,
            offset_minutes: 0,
        }),
        rounding_go: Some(RoundingConfig {
            rounding_type: RoundingType::Down,
            interval_minutes: 15,
            anchor: RoundingAnchor::Midnight,
            offset_minutes: 0,
        }),
        break_rules: vec![BreakRule {
            kind: BreakRuleKind::MinimumAfter,
            window_start: None,
            window_end: None,
            after_work_minutes: Some(360),
            duration_minutes: 30,
            paid: false,
            auto_deduct: false,
            sort_order: 1,
        }],
        min_net_minutes: Some(120),
        max_net_minutes: Some(600),
        round_all_bookings: false,
    }
}

fn booking(id: &str, minutes: i32, direction: BookingDirection, category: BookingCategory) -> Booking {
    Booking {
        id: id.to_string(),
        minutes,
        direction,
        category,
        pair_id: None,
    }
}

/// A realistic day: arrival, manual lunch break, departure.
fn standard_day() -> DailyCalcInput {
    DailyCalcInput {
        bookings: vec![
            booking("come", 487, BookingDirection::In, BookingCategory::Work),
            booking("bs", 720, BookingDirection::In, BookingCategory::Break),
            booking("be", 755, BookingDirection::Out, BookingCategory::Break),
            booking("go", 1024, BookingDirection::Out, BookingCategory::Work),
        ],
        plan: standard_plan(),
    }
}

fn vacation_input() -> VacationCalcInput {
    VacationCalcInput {
        birth_date: chrono::NaiveDate::from_ymd_opt(1985, 3, 15).unwrap(),
        entry_date: chrono::NaiveDate::from_ymd_opt(2014, 6, 1).unwrap(),
        exit_date: None,
        weekly_hours: Decimal::from(40),
        disabled: false,
        base_vacation_days: Decimal::from_str("30").unwrap(),
        standard_weekly_hours: Decimal::from(40),
        basis: VacationBasis::CalendarYear,
        special_calcs: vec![],
        target_year: 2026,
        reference_date: chrono::NaiveDate::from_ymd_opt(2026, 12, 31).unwrap(),
    }
}

fn bench_daily(c: &mut Criterion) {
    let input = standard_day();
    c.bench_function("daily/single_day", |b| {
        b.iter(|| calculate_day(black_box(&input)))
    });
}

fn bench_monthly(c: &mut Criterion) {
    let day = calculate_day(&standard_day());
    let input = MonthlyCalcInput {
        days: vec![day; 22],
        absences: vec![],
        flextime_start: 120,
        flextime: FlextimeConfig {
            credit_type: CreditType::CompleteCarryover,
            monthly_cap: Some(600),
            annual_upper: Some(3000),
            annual_lower: Some(-1200),
            threshold_minutes: None,
        },
    };

    c.bench_function("monthly/22_days", |b| {
        b.iter(|| calculate_month(black_box(&input)))
    });
}

fn bench_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch");
    for size in [10usize, 100, 1000] {
        let inputs: Vec<DailyCalcInput> = (0..size).map(|_| standard_day()).collect();
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("employee_days", size), &inputs, |b, inputs| {
            b.iter(|| {
                inputs
                    .iter()
                    .map(|input| calculate_day(black_box(input)))
                    .filter(|result| !result.has_error)
                    .count()
            })
        });
    }
    group.finish();
}

fn bench_vacation(c: &mut Criterion) {
    let input = vacation_input();
    c.bench_function("vacation/single_employee", |b| {
        b.iter(|| calculate_vacation(black_box(&input)))
    });
}

criterion_group!(benches, bench_daily, bench_monthly, bench_batch, bench_vacation);
criterion_main!(benches);
