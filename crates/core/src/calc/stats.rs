//! Confidence intervals and two-event probability

use serde::Serialize;

use super::{checked, finite, non_negative, CalcError};

/// Two-sided z-scores for the supported confidence levels (percent)
pub const Z_SCORES: [(f64, f64); 8] = [
    (80.0, 1.282),
    (85.0, 1.440),
    (90.0, 1.645),
    (95.0, 1.960),
    (98.0, 2.326),
    (99.0, 2.576),
    (99.5, 2.807),
    (99.9, 3.291),
];

pub fn z_score(confidence_level: f64) -> Result<f64, CalcError> {
    Z_SCORES
        .iter()
        .find(|(level, _)| (level - confidence_level).abs() < 1e-9)
        .map(|&(_, z)| z)
        .ok_or_else(|| {
            let supported = Z_SCORES
                .iter()
                .map(|(level, _)| level.to_string())
                .collect::<Vec<_>>()
                .join(", ");
            CalcError::field("confidence_level", format!("must be one of {supported}"))
        })
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ConfidenceInterval {
    pub z: f64,
    pub margin_of_error: f64,
    pub lower: f64,
    pub upper: f64,
}

pub fn confidence_interval(
    mean: f64,
    std_dev: f64,
    sample_size: u64,
    confidence_level: f64,
) -> Result<ConfidenceInterval, CalcError> {
    let mean = finite("mean", mean)?;
    let std_dev = non_negative("std_dev", std_dev)?;
    if sample_size == 0 {
        return Err(CalcError::field("sample_size", "must be greater than zero"));
    }
    let z = z_score(confidence_level)?;

    let margin_of_error = checked("margin_of_error", z * std_dev / (sample_size as f64).sqrt())?;
    Ok(ConfidenceInterval {
        z,
        margin_of_error,
        lower: mean - margin_of_error,
        upper: mean + margin_of_error,
    })
}

/// Probabilities of two independent events
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Probability {
    pub a: f64,
    pub not_a: f64,
    pub b: f64,
    pub not_b: f64,
    pub a_and_b: f64,
    pub a_or_b: f64,
    pub a_xor_b: f64,
    pub neither: f64,
}

/// `a` and `b` are favourable outcome counts out of `total`; A and B are
/// treated as independent.
pub fn probability(total: u64, a: u64, b: u64) -> Result<Probability, CalcError> {
    if total == 0 {
        return Err(CalcError::field("total", "must be greater than zero"));
    }
    if a > total {
        return Err(CalcError::field("a", "must not exceed the total"));
    }
    if b > total {
        return Err(CalcError::field("b", "must not exceed the total"));
    }

    let p_a = a as f64 / total as f64;
    let p_b = b as f64 / total as f64;
    let a_and_b = p_a * p_b;
    let a_or_b = p_a + p_b - a_and_b;

    Ok(Probability {
        a: p_a,
        not_a: 1.0 - p_a,
        b: p_b,
        not_b: 1.0 - p_b,
        a_and_b,
        a_or_b,
        a_xor_b: a_or_b - a_and_b,
        neither: 1.0 - a_or_b,
    })
}
