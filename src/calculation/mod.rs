//! Calculation logic for the Time Calculation Engine.
//!
//! This module contains all the pure calculation functions: minute-of-day
//! arithmetic, tolerance resolution, configurable time rounding, booking
//! pairing, break deduction, the daily calculator, the monthly aggregator
//! with flextime credit policies, and the vacation-entitlement calculator.

mod breaks;
mod daily;
mod monthly;
mod pairing;
mod rounding;
mod time_base;
mod tolerance;
mod vacation;

pub use breaks::{BreakResult, calculate_breaks};
pub use daily::{DailyCalcInput, calculate_day};
pub use monthly::{MonthlyCalcInput, calculate_month};
pub use pairing::{PairingResult, pair_bookings};
pub use rounding::round_time;
pub use time_base::{LAST_MINUTE, MINUTES_PER_DAY, interval_minutes, is_valid_minute, normalize_out};
pub use tolerance::apply_tolerance;
pub use vacation::{calculate_carryover, calculate_vacation, calculate_vacation_deduction};
