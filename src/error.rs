//! Error types for the Time Calculation Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! Note that the calculation functions themselves never fail: anomalies in
//! booking data become error codes on the returned result (see
//! [`crate::models::DailyErrorCode`]). `EngineError` covers the boundary
//! concerns around them, chiefly configuration loading and validation.

use thiserror::Error;

/// The main error type for the Time Calculation Engine.
///
/// # Example
///
/// ```
/// use time_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/file.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/file.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A day plan contained inconsistent or out-of-range configuration.
    #[error("Invalid day plan '{plan}': {message}")]
    InvalidDayPlan {
        /// The identifier of the invalid plan.
        plan: String,
        /// A description of what made the plan invalid.
        message: String,
    },

    /// A vacation calculation input field was invalid.
    #[error("Invalid vacation input field '{field}': {message}")]
    InvalidVacationInput {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
