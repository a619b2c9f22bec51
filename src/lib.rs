//! Time Calculation Engine for workforce time tracking
//!
//! This crate provides the pure calculation core of a time-tracking platform:
//! turning raw clock events and day-plan configuration into payroll-relevant
//! daily and monthly statistics, plus a vacation-entitlement calculator.
//! All calculation functions are deterministic and perform no I/O.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
