mod calc;
mod calendar;
mod catalog;
mod cms;
mod numeral;
mod remote;
mod text;

use serde::{de::DeserializeOwned, Deserialize, Serialize};

// Re-export types needed by tool handlers
pub use super::{JsonRpcError, Tool};

// MCP Protocol types for tools
#[derive(Debug, Serialize)]
pub struct ServerInfo {
    pub name: String,
    pub version: String,
}

#[derive(Debug, Serialize)]
pub struct ServerCapabilities {
    pub tools: Option<ToolsCapability>,
}

#[derive(Debug, Serialize)]
pub struct ToolsCapability {}

#[derive(Debug, Serialize)]
pub struct InitializeResult {
    #[serde(rename = "protocolVersion")]
    pub protocol_version: String,
    pub capabilities: ServerCapabilities,
    #[serde(rename = "serverInfo")]
    pub server_info: ServerInfo,
}

#[derive(Debug, Serialize)]
pub struct ToolsList {
    pub tools: Vec<Tool>,
}

#[derive(Debug, Deserialize)]
pub struct CallToolParams {
    pub name: String,
    pub arguments: Option<serde_json::Value>,
}

#[derive(Debug, Serialize)]
pub struct CallToolResult {
    pub content: Vec<Content>,
    #[serde(rename = "isError", skip_serializing_if = "Option::is_none")]
    pub is_error: Option<bool>,
}

#[derive(Debug, Serialize)]
#[serde(tag = "type")]
pub enum Content {
    #[serde(rename = "text")]
    Text { text: String },
}

pub fn tool(name: &str, description: &str, input_schema: serde_json::Value) -> Tool {
    Tool {
        name: name.to_string(),
        description: description.to_string(),
        input_schema,
    }
}

/// Deserialize tool arguments; a missing object counts as `{}`
pub fn parse_args<T: DeserializeOwned>(
    arguments: Option<serde_json::Value>,
) -> Result<T, JsonRpcError> {
    serde_json::from_value(arguments.unwrap_or_else(|| serde_json::json!({})))
        .map_err(|e| JsonRpcError::invalid_params(format!("Invalid arguments: {e}")))
}

/// Parse a string argument through its `FromStr` implementation
pub fn parse_field<T>(field: &str, value: &str) -> Result<T, JsonRpcError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value
        .parse()
        .map_err(|e| JsonRpcError::invalid_params(format!("Invalid {field}: {e}")))
}

fn call_result(text: String, is_error: Option<bool>) -> Result<serde_json::Value, JsonRpcError> {
    let result = CallToolResult {
        content: vec![Content::Text { text }],
        is_error,
    };

    serde_json::to_value(result)
        .map_err(|e| JsonRpcError::internal(format!("Internal error: {e}")))
}

/// Wrap a tool's output in the MCP result format
///
/// Validation and domain errors become `isError` results the caller can show
/// inline; anything else is an internal JSON-RPC error.
pub fn tool_output<T: Serialize>(
    output: color_eyre::eyre::Result<T>,
) -> Result<serde_json::Value, JsonRpcError> {
    match output {
        Ok(value) => {
            let json_string = serde_json::to_string_pretty(&value)
                .map_err(|e| JsonRpcError::internal(format!("Serialization error: {e}")))?;
            call_result(json_string, None)
        }
        Err(report) => match report.downcast_ref::<crate::Error>() {
            Some(err @ crate::Error::Validation(_)) => call_result(err.to_string(), Some(true)),
            _ => Err(JsonRpcError::internal(format!(
                "Tool execution error: {report}"
            ))),
        },
    }
}

pub fn handle_initialize() -> Result<serde_json::Value, JsonRpcError> {
    let result = InitializeResult {
        protocol_version: "2024-11-05".to_string(),
        capabilities: ServerCapabilities {
            tools: Some(ToolsCapability {}),
        },
        server_info: ServerInfo {
            name: "minitools".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
    };

    serde_json::to_value(result)
        .map_err(|e| JsonRpcError::internal(format!("Internal error: {e}")))
}

pub fn handle_tools_list() -> Result<serde_json::Value, JsonRpcError> {
    let tools = [
        numeral::tools(),
        calendar::tools(),
        calc::tools(),
        text::tools(),
        catalog::tools(),
        cms::tools(),
        remote::tools(),
    ]
    .into_iter()
    .flatten()
    .collect();

    let result = ToolsList { tools };

    serde_json::to_value(result)
        .map_err(|e| JsonRpcError::internal(format!("Internal error: {e}")))
}

pub async fn handle_tools_call(
    params: Option<serde_json::Value>,
    global: &crate::Global,
) -> Result<serde_json::Value, JsonRpcError> {
    let params: CallToolParams = serde_json::from_value(params.unwrap_or(serde_json::Value::Null))
        .map_err(|e| JsonRpcError::invalid_params(format!("Invalid params: {e}")))?;

    if global.verbose {
        crate::prelude::eprintln!("Calling {}: {:?}", params.name, params.arguments);
    }
    log::debug!("tools/call {}", params.name);

    let args = params.arguments;
    match params.name.as_str() {
        "numeral_convert" => numeral::handle_convert(args),
        "numeral_calc" => numeral::handle_calc(args),
        "calendar_convert" => calendar::handle_convert(args),
        "calendar_roman_date" => calendar::handle_roman_date(args),
        "calendar_roman" => calendar::handle_roman(args),
        "calc_cpm" => calc::handle_cpm(args),
        "calc_ltv" => calc::handle_ltv(args),
        "calc_eps" => calc::handle_eps(args),
        "calc_tax" => calc::handle_tax(args),
        "calc_margin" => calc::handle_margin(args),
        "calc_ci" => calc::handle_ci(args),
        "calc_probability" => calc::handle_probability(args),
        "calc_valuation" => calc::handle_valuation(args),
        "calc_discount" => calc::handle_discount(args),
        "calc_percent" => calc::handle_percent(args),
        "text_case" => text::handle_case(args),
        "text_count" => text::handle_count(args),
        "text_repeat" => text::handle_repeat(args),
        "text_combine" => text::handle_combine(args),
        "tools_list" => catalog::handle_list(args),
        "tools_related" => catalog::handle_related(args),
        "cms_page" => cms::handle_page(args).await,
        "cms_dynamic_page" => cms::handle_dynamic_page(args).await,
        "remote_cpm" => remote::handle_cpm(args).await,
        "remote_paypal_fee" => remote::handle_paypal_fee(args).await,
        "remote_link_prices" => remote::handle_link_prices(args).await,
        _ => Err(JsonRpcError::invalid_params(format!(
            "Unknown tool: {}",
            params.name
        ))),
    }
}
