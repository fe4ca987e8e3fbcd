use crate::text::{case_data, combine_data, count_data, repeat_data, CombineArgs};
use minitools_core::text::{CaseStyle, Separator};
use serde::Deserialize;

use super::{parse_args, parse_field, tool, tool_output, JsonRpcError, Tool};

pub fn tools() -> Vec<Tool> {
    vec![
        tool(
            "text_case",
            "Convert text to sentence, upper, lower, title, alternating or inverse case.",
            serde_json::json!({
                "type": "object",
                "properties": {
                    "text": { "type": "string" },
                    "style": { "type": "string", "enum": ["sentence", "upper", "lower", "title", "alternating", "inverse"] }
                },
                "required": ["text", "style"]
            }),
        ),
        tool(
            "text_count",
            "Count characters, characters without spaces, words, lines, sentences and paragraphs.",
            serde_json::json!({
                "type": "object",
                "properties": { "text": { "type": "string" } },
                "required": ["text"]
            }),
        ),
        tool(
            "text_repeat",
            "Repeat text up to 10000 times with a separator.",
            serde_json::json!({
                "type": "object",
                "properties": {
                    "text": { "type": "string" },
                    "times": { "type": "integer", "description": "Default: 2" },
                    "separator": { "type": "string", "description": "none, space, newline, or a literal string (default: none)" }
                },
                "required": ["text"]
            }),
        ),
        tool(
            "text_combine",
            "Combine every ordered pair of up to 100 words, optionally shuffled and decorated with a prefix, suffix and separator.",
            serde_json::json!({
                "type": "object",
                "properties": {
                    "words": { "type": "array", "items": { "type": "string" } },
                    "allow_self_pairs": { "type": "boolean" },
                    "shuffle": { "type": "boolean" },
                    "seed": { "type": "integer", "description": "Seed for reproducible shuffles" },
                    "prefix": { "type": "string" },
                    "suffix": { "type": "string" },
                    "separator": { "type": "string", "description": "Placed between the two words" }
                },
                "required": ["words"]
            }),
        ),
    ]
}

#[derive(Deserialize)]
struct TextArgs {
    text: String,
}

pub fn handle_case(arguments: Option<serde_json::Value>) -> Result<serde_json::Value, JsonRpcError> {
    #[derive(Deserialize)]
    struct CaseArgs {
        text: String,
        style: String,
    }

    let args: CaseArgs = parse_args(arguments)?;
    let style: CaseStyle = parse_field("style", &args.style)?;
    tool_output(Ok(case_data(&args.text, style)))
}

pub fn handle_count(arguments: Option<serde_json::Value>) -> Result<serde_json::Value, JsonRpcError> {
    let args: TextArgs = parse_args(arguments)?;
    tool_output(Ok(count_data(&args.text)))
}

pub fn handle_repeat(arguments: Option<serde_json::Value>) -> Result<serde_json::Value, JsonRpcError> {
    #[derive(Deserialize)]
    struct RepeatArgs {
        text: String,
        times: Option<usize>,
        separator: Option<String>,
    }

    let args: RepeatArgs = parse_args(arguments)?;
    let separator: Separator = match args.separator.as_deref() {
        Some(separator) => parse_field("separator", separator)?,
        None => Separator::None,
    };
    tool_output(repeat_data(&args.text, args.times.unwrap_or(2), &separator))
}

pub fn handle_combine(arguments: Option<serde_json::Value>) -> Result<serde_json::Value, JsonRpcError> {
    let args: CombineArgs = parse_args(arguments)?;
    tool_output(combine_data(&args))
}
