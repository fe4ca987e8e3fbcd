//! Closed-form financial and statistical calculators
//!
//! Every calculator validates its inputs before computing and reports the
//! offending field by name. A calculator never returns `NaN` or an
//! infinity; degenerate inputs produce [`CalcError::Undefined`].

pub mod cpm;
pub mod equity;
pub mod ltv;
pub mod margin;
pub mod pricing;
pub mod stats;
pub mod tax;

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum CalcError {
    #[error("{field}: {reason}")]
    InvalidField { field: &'static str, reason: String },

    #[error("Result is undefined: {0}")]
    Undefined(String),
}

impl CalcError {
    pub(crate) fn field(field: &'static str, reason: impl Into<String>) -> Self {
        CalcError::InvalidField {
            field,
            reason: reason.into(),
        }
    }
}

pub(crate) fn finite(field: &'static str, value: f64) -> Result<f64, CalcError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CalcError::field(field, "must be a number"))
    }
}

pub(crate) fn non_negative(field: &'static str, value: f64) -> Result<f64, CalcError> {
    let value = finite(field, value)?;
    if value < 0.0 {
        return Err(CalcError::field(field, "must not be negative"));
    }
    Ok(value)
}

pub(crate) fn positive(field: &'static str, value: f64) -> Result<f64, CalcError> {
    let value = finite(field, value)?;
    if value <= 0.0 {
        return Err(CalcError::field(field, "must be greater than zero"));
    }
    Ok(value)
}

pub(crate) fn percent(field: &'static str, value: f64) -> Result<f64, CalcError> {
    let value = non_negative(field, value)?;
    if value > 100.0 {
        return Err(CalcError::field(field, "must not exceed 100"));
    }
    Ok(value)
}

/// Reject results that escaped validation as non-finite
pub(crate) fn checked(what: &str, value: f64) -> Result<f64, CalcError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CalcError::Undefined(format!("{what} is not a finite number")))
    }
}

/// Fixed two-decimal rendering used for amounts and percentages
pub fn format_amount(value: f64) -> String {
    let rounded = format!("{value:.2}");
    // Avoid rendering "-0.00"
    if rounded == "-0.00" {
        "0.00".to_string()
    } else {
        rounded
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(50.0), "50.00");
        assert_eq!(format_amount(1.005), "1.00");
        assert_eq!(format_amount(-0.001), "0.00");
        assert_eq!(format_amount(1234.567), "1234.57");
    }

    #[test]
    fn test_validators() {
        assert!(finite("x", f64::NAN).is_err());
        assert!(non_negative("x", -1.0).is_err());
        assert!(non_negative("x", 0.0).is_ok());
        assert!(positive("x", 0.0).is_err());
        assert!(percent("x", 100.5).is_err());
        assert_eq!(
            positive("impressions", 0.0).unwrap_err().to_string(),
            "impressions: must be greater than zero"
        );
    }
}
