mod cli;
mod sse;
mod stdio;
mod tools;

pub use cli::App;

use crate::prelude::*;
use serde::{Deserialize, Serialize};

// JSON-RPC 2.0 types
#[derive(Debug, Deserialize)]
struct JsonRpcRequest {
    #[allow(dead_code)]
    jsonrpc: String,
    id: Option<serde_json::Value>,
    method: String,
    params: Option<serde_json::Value>,
}

#[derive(Debug, Serialize)]
pub struct JsonRpcResponse {
    jsonrpc: String,
    id: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<JsonRpcError>,
}

#[derive(Debug, Serialize)]
pub struct JsonRpcError {
    pub code: i32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl JsonRpcError {
    pub fn invalid_params(message: String) -> Self {
        Self {
            code: -32602,
            message,
            data: None,
        }
    }

    pub fn internal(message: String) -> Self {
        Self {
            code: -32603,
            message,
            data: None,
        }
    }
}

// MCP Protocol types
#[derive(Debug, Serialize)]
pub struct Tool {
    pub name: String,
    pub description: String,
    #[serde(rename = "inputSchema")]
    pub input_schema: serde_json::Value,
}

pub async fn run(app: App, global: crate::Global) -> Result<()> {
    match app.command {
        cli::Commands::Stdio => stdio::run_stdio(global).await,
        cli::Commands::Sse(options) => sse::run_sse(options, global).await,
    }
}

/// Like [`handle_request`], but yields nothing for notifications
pub async fn handle_message(request_str: &str, global: &crate::Global) -> Option<JsonRpcResponse> {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(request_str) {
        let is_notification = value.get("id").is_none()
            && value
                .get("method")
                .and_then(|m| m.as_str())
                .is_some_and(|m| m.starts_with("notifications/"));
        if is_notification {
            log::debug!("ignoring notification {}", value["method"]);
            return None;
        }
    }
    Some(handle_request(request_str, global).await)
}

pub async fn handle_request(request_str: &str, global: &crate::Global) -> JsonRpcResponse {
    let request: JsonRpcRequest = match serde_json::from_str(request_str) {
        Ok(req) => req,
        Err(e) => {
            return JsonRpcResponse {
                jsonrpc: "2.0".to_string(),
                id: None,
                result: None,
                error: Some(JsonRpcError {
                    code: -32700,
                    message: format!("Parse error: {e}"),
                    data: None,
                }),
            };
        }
    };

    log::debug!("mcp request: {}", request.method);
    let result = match request.method.as_str() {
        "initialize" => tools::handle_initialize(),
        "ping" => Ok(serde_json::json!({})),
        "tools/list" => tools::handle_tools_list(),
        "tools/call" => tools::handle_tools_call(request.params, global).await,
        method => Err(JsonRpcError {
            code: -32601,
            message: format!("Method not found: {method}"),
            data: None,
        }),
    };

    match result {
        Ok(value) => JsonRpcResponse {
            jsonrpc: "2.0".to_string(),
            id: request.id,
            result: Some(value),
            error: None,
        },
        Err(error) => JsonRpcResponse {
            jsonrpc: "2.0".to_string(),
            id: request.id,
            result: None,
            error: Some(error),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use minitools_core::theme::ThemePreference;

    fn global() -> crate::Global {
        crate::Global {
            verbose: false,
            theme: ThemePreference::Dark,
        }
    }

    async fn call(request: serde_json::Value) -> serde_json::Value {
        let response = handle_request(&request.to_string(), &global()).await;
        serde_json::to_value(response).unwrap()
    }

    async fn call_tool(name: &str, arguments: serde_json::Value) -> serde_json::Value {
        call(serde_json::json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": "tools/call",
            "params": { "name": name, "arguments": arguments }
        }))
        .await
    }

    // ============================================================================
    // protocol tests
    // ============================================================================

    #[tokio::test]
    async fn test_parse_error() {
        let response = handle_request("{not json", &global()).await;
        let value = serde_json::to_value(response).unwrap();
        assert_eq!(value["error"]["code"], -32700);
    }

    #[tokio::test]
    async fn test_method_not_found() {
        let value = call(serde_json::json!({ "jsonrpc": "2.0", "id": 7, "method": "nope" })).await;
        assert_eq!(value["error"]["code"], -32601);
        assert_eq!(value["id"], 7);
    }

    #[tokio::test]
    async fn test_initialize_reports_server_info() {
        let value =
            call(serde_json::json!({ "jsonrpc": "2.0", "id": 1, "method": "initialize" })).await;
        assert_eq!(value["result"]["serverInfo"]["name"], "minitools");
        assert_eq!(value["result"]["protocolVersion"], "2024-11-05");
    }

    #[tokio::test]
    async fn test_notifications_get_no_reply() {
        let message = r#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#;
        assert!(handle_message(message, &global()).await.is_none());
    }

    #[tokio::test]
    async fn test_tools_list_names_are_unique() {
        let value =
            call(serde_json::json!({ "jsonrpc": "2.0", "id": 1, "method": "tools/list" })).await;
        let tools = value["result"]["tools"].as_array().unwrap();
        let names: std::collections::HashSet<_> =
            tools.iter().map(|t| t["name"].as_str().unwrap()).collect();
        assert_eq!(names.len(), tools.len());
        assert!(names.contains("numeral_calc"));
        assert!(names.contains("calendar_convert"));
    }

    // ============================================================================
    // tools/call tests
    // ============================================================================

    #[tokio::test]
    async fn test_unknown_tool() {
        let value = call_tool("nope", serde_json::json!({})).await;
        assert_eq!(value["error"]["code"], -32602);
    }

    #[tokio::test]
    async fn test_numeral_calc_tool() {
        let value = call_tool(
            "numeral_calc",
            serde_json::json!({ "lhs": "1A", "op": "+", "rhs": "2B" }),
        )
        .await;
        let text = value["result"]["content"][0]["text"].as_str().unwrap();
        let output: serde_json::Value = serde_json::from_str(text).unwrap();
        assert_eq!(output["result"], "45");
    }

    #[tokio::test]
    async fn test_domain_error_is_tool_error_result() {
        let value = call_tool(
            "numeral_calc",
            serde_json::json!({ "lhs": "10", "op": "/", "rhs": "0" }),
        )
        .await;
        assert_eq!(value["result"]["isError"], true);
        assert_eq!(value["result"]["content"][0]["text"], "Division by zero");
    }

    #[tokio::test]
    async fn test_missing_argument_is_invalid_params() {
        let value = call_tool("calc_valuation", serde_json::json!({ "investment": 1.0 })).await;
        assert_eq!(value["error"]["code"], -32602);
    }

    #[tokio::test]
    async fn test_calendar_convert_tool() {
        let value = call_tool(
            "calendar_convert",
            serde_json::json!({ "date": "2024-04-14", "calendar": "bengali" }),
        )
        .await;
        let text = value["result"]["content"][0]["text"].as_str().unwrap();
        let output: serde_json::Value = serde_json::from_str(text).unwrap();
        assert_eq!(output["month_name"], "বৈশাখ");
    }

    #[tokio::test]
    async fn test_calc_valuation_tool() {
        let value = call_tool(
            "calc_valuation",
            serde_json::json!({ "investment": 100000, "equity_percent": 20 }),
        )
        .await;
        let text = value["result"]["content"][0]["text"].as_str().unwrap();
        let output: serde_json::Value = serde_json::from_str(text).unwrap();
        assert_eq!(output["post_money"], 500000.0);
    }

    #[tokio::test]
    async fn test_text_case_tool() {
        let value = call_tool(
            "text_case",
            serde_json::json!({ "text": "hello world", "style": "title" }),
        )
        .await;
        let text = value["result"]["content"][0]["text"].as_str().unwrap();
        let output: serde_json::Value = serde_json::from_str(text).unwrap();
        assert_eq!(output["output"], "Hello World");
    }

    #[tokio::test]
    async fn test_tools_related_tool() {
        let value = call_tool(
            "tools_related",
            serde_json::json!({ "slug": "cpm-calculator", "limit": 2 }),
        )
        .await;
        let text = value["result"]["content"][0]["text"].as_str().unwrap();
        let output: serde_json::Value = serde_json::from_str(text).unwrap();
        assert_eq!(output.as_array().unwrap().len(), 2);
    }
}
