use thiserror::Error;

use crate::units::types::Dimension;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum UnitError {
    #[error("Parse error: {0}")]
    ParseError(String),
    #[error("Unknown unit: {0}")]
    UnknownUnit(String),
    #[error("Incompatible dimensions: expected {expected}, found {found}")]
    IncompatibleDimensions { expected: String, found: String },
    #[error("Negative magnitude: {0}")]
    NegativeMagnitude(f64),
    #[error("Magnitude is not finite")]
    NotFinite,
}

impl UnitError {
    pub(crate) fn mismatch(expected: Dimension, found: impl ToString) -> Self {
        UnitError::IncompatibleDimensions {
            expected: expected.to_string(),
            found: found.to_string(),
        }
    }
}
