use crate::calc::{
    ci_report, cpm_report, discount_report, eps_report, ltv_report, margin_report,
    percent_report, probability_report, tax_report, valuation_report, CiOptions, CpmOptions,
    DiscountOptions, EpsOptions, LtvOptions, MarginOptions, PercentOptions, ProbabilityOptions,
    Report, TaxOptions, ValuationOptions,
};
use serde::de::DeserializeOwned;

use super::{parse_args, tool, tool_output, JsonRpcError, Tool};

fn number(description: &str) -> serde_json::Value {
    serde_json::json!({ "type": "number", "description": description })
}

fn schema(properties: serde_json::Value, required: &[&str]) -> serde_json::Value {
    serde_json::json!({
        "type": "object",
        "properties": properties,
        "required": required
    })
}

pub fn tools() -> Vec<Tool> {
    vec![
        tool(
            "calc_cpm",
            "Cost per mille. Supply exactly two of cost, impressions and cpm; the missing one is solved for.",
            schema(
                serde_json::json!({
                    "cost": number("Total campaign cost"),
                    "impressions": number("Number of impressions"),
                    "cpm": number("Cost per thousand impressions")
                }),
                &[],
            ),
        ),
        tool(
            "calc_ltv",
            "Loan-to-value. Supply exactly two of purchase_price, deposit, loan and ltv_percent.",
            schema(
                serde_json::json!({
                    "purchase_price": number("Purchase price"),
                    "deposit": number("Deposit paid"),
                    "loan": number("Loan amount"),
                    "ltv_percent": number("Loan-to-value ratio in percent")
                }),
                &[],
            ),
        ),
        tool(
            "calc_eps",
            "Earnings per share: (net income - preferred dividends) / common shares.",
            schema(
                serde_json::json!({
                    "net_income": number("Net income"),
                    "preferred_dividends": number("Preferred dividends (default: 0)"),
                    "common_shares": number("Common shares outstanding")
                }),
                &["net_income", "common_shares"],
            ),
        ),
        tool(
            "calc_tax",
            "Add GST / sales tax to a net price, or remove it from a gross price.",
            schema(
                serde_json::json!({
                    "amount": number("Net price (add) or gross price (remove)"),
                    "rate": number("Tax rate in percent"),
                    "mode": { "type": "string", "enum": ["add", "remove"], "description": "Default: add" }
                }),
                &["amount", "rate"],
            ),
        ),
        tool(
            "calc_margin",
            "Profit margin. Give net_profit and total_sale for a single margin, or revenue and cost_of_goods (plus optional operating_expenses and interest_and_taxes) for gross, operating and net margins.",
            schema(
                serde_json::json!({
                    "net_profit": number("Net profit"),
                    "total_sale": number("Total sale"),
                    "revenue": number("Revenue"),
                    "cost_of_goods": number("Cost of goods sold"),
                    "operating_expenses": number("Operating expenses (default: 0)"),
                    "interest_and_taxes": number("Interest and taxes (default: 0)")
                }),
                &[],
            ),
        ),
        tool(
            "calc_ci",
            "Confidence interval around a sample mean using the z-table.",
            schema(
                serde_json::json!({
                    "mean": number("Sample mean"),
                    "std_dev": number("Standard deviation"),
                    "sample_size": { "type": "integer", "description": "Sample size" },
                    "confidence_level": number("80, 85, 90, 95, 98, 99, 99.5 or 99.9 (default: 95)")
                }),
                &["mean", "std_dev", "sample_size"],
            ),
        ),
        tool(
            "calc_probability",
            "Probabilities of two independent events given favourable outcome counts out of a total.",
            schema(
                serde_json::json!({
                    "total": { "type": "integer", "description": "Total outcomes" },
                    "a": { "type": "integer", "description": "Favourable outcomes for A" },
                    "b": { "type": "integer", "description": "Favourable outcomes for B" }
                }),
                &["total", "a", "b"],
            ),
        ),
        tool(
            "calc_valuation",
            "Pre- and post-money valuation implied by an investment buying a percentage of equity.",
            schema(
                serde_json::json!({
                    "investment": number("Investment amount"),
                    "equity_percent": number("Equity bought, in percent (exclusive of 0 and 100)")
                }),
                &["investment", "equity_percent"],
            ),
        ),
        tool(
            "calc_discount",
            "Saving and final price after a percentage discount.",
            schema(
                serde_json::json!({
                    "original_price": number("Original price"),
                    "discount_percent": number("Discount in percent")
                }),
                &["original_price", "discount_percent"],
            ),
        ),
        tool(
            "calc_percent",
            "Percentage math: 'of' gives x% of y, 'what' gives x as a percent of y, 'change' gives the percent change from x to y.",
            schema(
                serde_json::json!({
                    "mode": { "type": "string", "enum": ["of", "what", "change"] },
                    "x": number("First value"),
                    "y": number("Second value")
                }),
                &["mode", "x", "y"],
            ),
        ),
    ]
}

fn run<O: DeserializeOwned>(
    arguments: Option<serde_json::Value>,
    report: impl FnOnce(&O) -> color_eyre::eyre::Result<Report>,
) -> Result<serde_json::Value, JsonRpcError> {
    let options: O = parse_args(arguments)?;
    tool_output(report(&options).map(|report| report.result))
}

pub fn handle_cpm(arguments: Option<serde_json::Value>) -> Result<serde_json::Value, JsonRpcError> {
    run::<CpmOptions>(arguments, cpm_report)
}

pub fn handle_ltv(arguments: Option<serde_json::Value>) -> Result<serde_json::Value, JsonRpcError> {
    run::<LtvOptions>(arguments, ltv_report)
}

pub fn handle_eps(arguments: Option<serde_json::Value>) -> Result<serde_json::Value, JsonRpcError> {
    run::<EpsOptions>(arguments, eps_report)
}

pub fn handle_tax(arguments: Option<serde_json::Value>) -> Result<serde_json::Value, JsonRpcError> {
    run::<TaxOptions>(arguments, tax_report)
}

pub fn handle_margin(arguments: Option<serde_json::Value>) -> Result<serde_json::Value, JsonRpcError> {
    run::<MarginOptions>(arguments, margin_report)
}

pub fn handle_ci(arguments: Option<serde_json::Value>) -> Result<serde_json::Value, JsonRpcError> {
    run::<CiOptions>(arguments, ci_report)
}

pub fn handle_probability(
    arguments: Option<serde_json::Value>,
) -> Result<serde_json::Value, JsonRpcError> {
    run::<ProbabilityOptions>(arguments, probability_report)
}

pub fn handle_valuation(
    arguments: Option<serde_json::Value>,
) -> Result<serde_json::Value, JsonRpcError> {
    run::<ValuationOptions>(arguments, valuation_report)
}

pub fn handle_discount(
    arguments: Option<serde_json::Value>,
) -> Result<serde_json::Value, JsonRpcError> {
    run::<DiscountOptions>(arguments, discount_report)
}

pub fn handle_percent(arguments: Option<serde_json::Value>) -> Result<serde_json::Value, JsonRpcError> {
    run::<PercentOptions>(arguments, percent_report)
}
