//! Earnings per share and pre/post-money valuation

use serde::Serialize;

use super::{checked, finite, non_negative, positive, CalcError};

/// `(net_income - preferred_dividends) / common_shares`
pub fn eps(net_income: f64, preferred_dividends: f64, common_shares: f64) -> Result<f64, CalcError> {
    let net_income = finite("net_income", net_income)?;
    let preferred_dividends = non_negative("preferred_dividends", preferred_dividends)?;
    let common_shares = positive("common_shares", common_shares)?;
    checked("eps", (net_income - preferred_dividends) / common_shares)
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Valuation {
    pub pre_money: f64,
    pub post_money: f64,
}

/// Valuation implied by `investment` buying `equity_percent` of the company
///
/// Equity of exactly 0% or 100% has no meaningful valuation and yields
/// [`CalcError::Undefined`]; anything outside that range is a field error.
pub fn pre_post_money(investment: f64, equity_percent: f64) -> Result<Valuation, CalcError> {
    let investment = positive("investment", investment)?;
    let equity_percent = finite("equity_percent", equity_percent)?;

    if !(0.0..=100.0).contains(&equity_percent) {
        return Err(CalcError::field(
            "equity_percent",
            "must be between 0 and 100",
        ));
    }
    if equity_percent == 0.0 || equity_percent >= 100.0 {
        return Err(CalcError::Undefined(format!(
            "valuation at {equity_percent}% equity"
        )));
    }

    let post_money = checked("post_money", investment / (equity_percent / 100.0))?;
    Ok(Valuation {
        pre_money: post_money - investment,
        post_money,
    })
}
