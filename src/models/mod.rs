//! Core data models for the Time Calculation Engine.
//!
//! This module contains all the domain value objects used throughout the
//! engine. Every type is created fresh per calculation call and never
//! mutated after return.

mod booking;
mod daily_result;
mod monthly_result;
mod vacation;

pub use booking::{Booking, BookingCategory, BookingDirection, BookingPair};
pub use daily_result::{DailyErrorCode, DailyResult, DailyWarningCode};
pub use monthly_result::{
    AbsenceDay, AbsenceKind, AbsenceSummary, MonthlyResult, MonthlyWarningCode,
};
pub use vacation::{SpecialCalc, SpecialCalcType, VacationBasis, VacationCalcInput, VacationCalcOutput};
