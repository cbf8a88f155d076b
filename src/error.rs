//! Error types for the fallible parts of the crate.
//!
//! The qualification engine itself never fails. Loading configuration,
//! validating tables and running simulations can.

use thiserror::Error;

/// Errors raised while loading tables, validating formats or simulating.
#[derive(Debug, Error)]
pub enum GroupStageError {
    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid advancement rate {rate} for {points} points (must be within [0, 1])")]
    InvalidRate { points: u32, rate: f64 },

    #[error("Status thresholds must be strictly descending, got safe={safe} likely={likely} border={border} miracle={miracle}")]
    InvalidThresholds {
        safe: u32,
        likely: u32,
        border: u32,
        miracle: u32,
    },

    #[error("Malformed line {line}: {reason}")]
    ParseLine { line: usize, reason: String },

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Invalid match odds: {0}")]
    InvalidOdds(String),
}

/// A win/draw/loss triple that does not describe a full distribution.
///
/// Reported to the caller as a warning; computation still proceeds.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum OddsError {
    #[error("Win/draw/loss must total 100%, got {sum:.1}%")]
    SumMismatch { sum: f64 },
}

pub type Result<T> = std::result::Result<T, GroupStageError>;
