//! Parameter validation errors

use thiserror::Error;

/// Rejected model parameter
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParamError {
    #[error("{name} must be a finite number, got {value}")]
    NonFinite { name: &'static str, value: f64 },

    #[error("{name} must be strictly positive, got {value}")]
    NotPositive { name: &'static str, value: f64 },

    #[error("{name} must not be negative, got {value}")]
    Negative { name: &'static str, value: f64 },
}

/// Check that `value` is finite
pub(crate) fn finite(name: &'static str, value: f64) -> Result<f64, ParamError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ParamError::NonFinite { name, value })
    }
}

/// Check that `value` is finite and `> 0`
pub(crate) fn positive(name: &'static str, value: f64) -> Result<f64, ParamError> {
    let value = finite(name, value)?;
    if value > 0.0 {
        Ok(value)
    } else {
        Err(ParamError::NotPositive { name, value })
    }
}

/// Check that `value` is finite and `>= 0`
pub(crate) fn non_negative(name: &'static str, value: f64) -> Result<f64, ParamError> {
    let value = finite(name, value)?;
    if value >= 0.0 {
        Ok(value)
    } else {
        Err(ParamError::Negative { name, value })
    }
}
