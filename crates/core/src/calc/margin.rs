//! Profit margins
//!
//! [`simple`] is the single-ratio calculator. [`breakdown`] keeps gross,
//! operating and net margin apart, since each subtracts a different set of
//! costs from revenue.

use serde::{Deserialize, Serialize};

use super::{checked, non_negative, positive, CalcError};

/// `net_profit / total_sale * 100`
pub fn simple(net_profit: f64, total_sale: f64) -> Result<f64, CalcError> {
    let net_profit = super::finite("net_profit", net_profit)?;
    let total_sale = positive("total_sale", total_sale)?;
    checked("margin", net_profit / total_sale * 100.0)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MarginInput {
    pub revenue: f64,
    pub cost_of_goods: f64,
    #[serde(default)]
    pub operating_expenses: f64,
    #[serde(default)]
    pub interest_and_taxes: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MarginBreakdown {
    pub gross_profit: f64,
    pub gross_margin: f64,
    pub operating_profit: f64,
    pub operating_margin: f64,
    pub net_profit: f64,
    pub net_margin: f64,
}

pub fn breakdown(input: MarginInput) -> Result<MarginBreakdown, CalcError> {
    let revenue = positive("revenue", input.revenue)?;
    let cost_of_goods = non_negative("cost_of_goods", input.cost_of_goods)?;
    let operating_expenses = non_negative("operating_expenses", input.operating_expenses)?;
    let interest_and_taxes = non_negative("interest_and_taxes", input.interest_and_taxes)?;

    let gross_profit = revenue - cost_of_goods;
    let operating_profit = gross_profit - operating_expenses;
    let net_profit = operating_profit - interest_and_taxes;

    Ok(MarginBreakdown {
        gross_profit,
        gross_margin: simple(gross_profit, revenue)?,
        operating_profit,
        operating_margin: simple(operating_profit, revenue)?,
        net_profit,
        net_margin: simple(net_profit, revenue)?,
    })
}
