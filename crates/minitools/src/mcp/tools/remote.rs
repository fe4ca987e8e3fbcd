use crate::remote::{cpm_data, link_prices_data, paypal_fee_data, RemoteConfig};
use crate::Error;
use minitools_core::remote::{CpmRequest, PaypalFeeRequest};
use serde::Deserialize;

use super::{parse_args, tool, tool_output, JsonRpcError, Tool};

pub fn tools() -> Vec<Tool> {
    vec![
        tool(
            "remote_cpm",
            "Cost per mille computed by the remote calculation service. Requires MINITOOLS_API_URL.",
            serde_json::json!({
                "type": "object",
                "properties": {
                    "cost": { "type": "number" },
                    "impressions": { "type": "number" }
                },
                "required": ["cost", "impressions"]
            }),
        ),
        tool(
            "remote_paypal_fee",
            "PayPal fee for a payment amount, computed by the remote calculation service. Requires MINITOOLS_API_URL.",
            serde_json::json!({
                "type": "object",
                "properties": {
                    "amount": { "type": "number" },
                    "country": { "type": "string", "description": "ISO country code" }
                },
                "required": ["amount"]
            }),
        ),
        tool(
            "remote_link_prices",
            "Estimated link prices for a list of URLs, looked up in concurrent batches of 20. Requires MINITOOLS_API_URL.",
            serde_json::json!({
                "type": "object",
                "properties": {
                    "urls": { "type": "array", "items": { "type": "string" } }
                },
                "required": ["urls"]
            }),
        ),
    ]
}

fn config() -> Result<RemoteConfig, JsonRpcError> {
    RemoteConfig::from_env().map_err(|e| JsonRpcError::internal(format!("Configuration error: {e}")))
}

pub async fn handle_cpm(arguments: Option<serde_json::Value>) -> Result<serde_json::Value, JsonRpcError> {
    #[derive(Deserialize)]
    struct CpmArgs {
        cost: f64,
        impressions: f64,
    }

    let args: CpmArgs = parse_args(arguments)?;
    let request = match CpmRequest::new(args.cost, args.impressions) {
        Ok(request) => request,
        Err(e) => return tool_output::<()>(Err(Error::validation(e).into())),
    };
    tool_output(cpm_data(&config()?, request).await)
}

pub async fn handle_paypal_fee(
    arguments: Option<serde_json::Value>,
) -> Result<serde_json::Value, JsonRpcError> {
    #[derive(Deserialize)]
    struct PaypalFeeArgs {
        amount: f64,
        country: Option<String>,
    }

    let args: PaypalFeeArgs = parse_args(arguments)?;
    let request = match PaypalFeeRequest::new(args.amount, args.country) {
        Ok(request) => request,
        Err(e) => return tool_output::<()>(Err(Error::validation(e).into())),
    };
    tool_output(paypal_fee_data(&config()?, request).await)
}

pub async fn handle_link_prices(
    arguments: Option<serde_json::Value>,
) -> Result<serde_json::Value, JsonRpcError> {
    #[derive(Deserialize)]
    struct LinkPricesArgs {
        urls: Vec<String>,
    }

    let args: LinkPricesArgs = parse_args(arguments)?;
    tool_output(link_prices_data(&config()?, &args.urls).await)
}
