//! Calculation errors
//!
//! Every failure the core can report. All of them are recoverable by the caller.

use serde::Serialize;
use thiserror::Error;

use super::schedule::Stage;
use super::units::Quantity;

/// Classification of a calculation failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// A zero divisor was supplied
    Division,
    /// A unit symbol is not in the conversion table
    UnknownUnit,
    /// A schedule boundary falls outside the representable time range
    TimeOutOfRange,
}

/// Calculation error types
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    #[error("Division error: base amount must not be zero")]
    Division,

    #[error("Unknown {kind} unit: '{unit}'")]
    UnknownUnit { kind: Quantity, unit: String },

    #[error("Time out of range: {stage} would start before the earliest representable date")]
    TimeOutOfRange { stage: Stage },
}

impl CalcError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CalcError::Division => ErrorKind::Division,
            CalcError::UnknownUnit { .. } => ErrorKind::UnknownUnit,
            CalcError::TimeOutOfRange { .. } => ErrorKind::TimeOutOfRange,
        }
    }
}

/// Result type for calculations
pub type CalcResult<T> = Result<T, CalcError>;
