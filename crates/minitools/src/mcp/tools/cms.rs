use crate::cms::{fetch_page_data, CmsConfig, PageKind};
use serde::Deserialize;

use super::{parse_args, tool, tool_output, JsonRpcError, Tool};

pub fn tools() -> Vec<Tool> {
    let schema = serde_json::json!({
        "type": "object",
        "properties": {
            "slug": { "type": "string", "description": "Page slug, e.g. 'hex-calculator'" }
        },
        "required": ["slug"]
    });

    vec![
        tool(
            "cms_page",
            "Fetch a tool page from the CMS and return its resolved SEO metadata, breadcrumbs and article as cleaned HTML and Markdown. Requires MINITOOLS_CMS_URL.",
            schema.clone(),
        ),
        tool(
            "cms_dynamic_page",
            "Fetch a dynamic page from the CMS and return its resolved SEO metadata, breadcrumbs and article. Requires MINITOOLS_CMS_URL.",
            schema,
        ),
    ]
}

#[derive(Deserialize)]
struct PageArgs {
    slug: String,
}

async fn fetch(
    arguments: Option<serde_json::Value>,
    kind: PageKind,
) -> Result<serde_json::Value, JsonRpcError> {
    let args: PageArgs = parse_args(arguments)?;
    let config = CmsConfig::from_env()
        .map_err(|e| JsonRpcError::internal(format!("Configuration error: {e}")))?;
    tool_output(fetch_page_data(&config, kind, &args.slug).await)
}

pub async fn handle_page(arguments: Option<serde_json::Value>) -> Result<serde_json::Value, JsonRpcError> {
    fetch(arguments, PageKind::Page).await
}

pub async fn handle_dynamic_page(
    arguments: Option<serde_json::Value>,
) -> Result<serde_json::Value, JsonRpcError> {
    fetch(arguments, PageKind::Dynamic).await
}
