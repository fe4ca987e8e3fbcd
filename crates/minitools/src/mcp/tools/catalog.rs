use minitools_core::catalog::{self, Category, ToolEntry};
use serde::Deserialize;

use super::{parse_args, parse_field, tool, tool_output, JsonRpcError, Tool};

pub fn tools() -> Vec<Tool> {
    vec![
        tool(
            "tools_list",
            "List the mini-tools catalog, optionally filtered by category slug (number-converters, date-converters, financial-calculators, statistics-calculators, text-tools).",
            serde_json::json!({
                "type": "object",
                "properties": {
                    "category": { "type": "string", "description": "Category slug" }
                },
                "required": []
            }),
        ),
        tool(
            "tools_related",
            "Suggest tools related to a tool slug: same category first, never the tool itself.",
            serde_json::json!({
                "type": "object",
                "properties": {
                    "slug": { "type": "string", "description": "Tool slug, e.g. 'hex-calculator'" },
                    "limit": { "type": "number", "description": "Maximum suggestions (default: 5)" }
                },
                "required": ["slug"]
            }),
        ),
    ]
}

pub fn handle_list(arguments: Option<serde_json::Value>) -> Result<serde_json::Value, JsonRpcError> {
    #[derive(Deserialize)]
    struct ListArgs {
        category: Option<String>,
    }

    let args: ListArgs = parse_args(arguments)?;
    let tools: Vec<&ToolEntry> = match args.category.as_deref() {
        Some(slug) => {
            let category: Category = parse_field("category", slug)?;
            catalog::by_category(category).collect()
        }
        None => catalog::TOOLS.iter().collect(),
    };
    tool_output(Ok(tools))
}

pub fn handle_related(arguments: Option<serde_json::Value>) -> Result<serde_json::Value, JsonRpcError> {
    #[derive(Deserialize)]
    struct RelatedArgs {
        slug: String,
        limit: Option<usize>,
    }

    let args: RelatedArgs = parse_args(arguments)?;
    tool_output(crate::tools::related_data(&args.slug, args.limit.unwrap_or(5)))
}
