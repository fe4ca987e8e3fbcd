//! Discounts and everyday percentage math

use serde::Serialize;

use super::{checked, finite, non_negative, percent, CalcError};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Discount {
    pub original_price: f64,
    pub discount_percent: f64,
    pub saving: f64,
    pub final_price: f64,
}

pub fn discount(original_price: f64, discount_percent: f64) -> Result<Discount, CalcError> {
    let original_price = non_negative("original_price", original_price)?;
    let discount_percent = percent("discount_percent", discount_percent)?;
    let saving = checked("saving", original_price * discount_percent / 100.0)?;

    Ok(Discount {
        original_price,
        discount_percent,
        saving,
        final_price: original_price - saving,
    })
}

/// `percent`% of `value`
pub fn percent_of(percent: f64, value: f64) -> Result<f64, CalcError> {
    let percent = finite("percent", percent)?;
    let value = finite("value", value)?;
    checked("result", percent / 100.0 * value)
}

/// What percentage `part` is of `whole`
pub fn what_percent(part: f64, whole: f64) -> Result<f64, CalcError> {
    let part = finite("part", part)?;
    let whole = finite("whole", whole)?;
    if whole == 0.0 {
        return Err(CalcError::field("whole", "must not be zero"));
    }
    checked("result", part / whole * 100.0)
}

/// Percentage change going from `from` to `to`
pub fn percent_change(from: f64, to: f64) -> Result<f64, CalcError> {
    let from = finite("from", from)?;
    let to = finite("to", to)?;
    if from == 0.0 {
        return Err(CalcError::field("from", "must not be zero"));
    }
    checked("result", (to - from) / from.abs() * 100.0)
}
