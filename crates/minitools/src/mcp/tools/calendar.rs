use minitools_core::calendar::{
    roman::{self, Delimiter, FieldOrder},
    CalendarKind, TimeFormat,
};
use serde::Deserialize;

use super::{parse_args, parse_field, tool, tool_output, JsonRpcError, Tool};

pub fn tools() -> Vec<Tool> {
    vec![
        tool(
            "calendar_convert",
            "Convert a Gregorian date (and optional time) to the English, Bengali, Hijri, Roman or Hindi calendar. Digits are written in the target calendar's script.",
            serde_json::json!({
                "type": "object",
                "properties": {
                    "date": { "type": "string", "description": "YYYY-MM-DD (default: today)" },
                    "time": { "type": "string", "description": "HH:MM, 24-hour" },
                    "calendar": { "type": "string", "enum": ["english", "bengali", "hijri", "roman", "hindi"], "description": "Target calendar (default: english)" },
                    "h12": { "type": "boolean", "description": "Render the time on a 12-hour clock" },
                    "clamp_day": { "type": "boolean", "description": "Pull a day past the end of the month back to the last day instead of failing" }
                },
                "required": []
            }),
        ),
        tool(
            "calendar_roman_date",
            "Write a date in Roman numerals with a chosen field order and delimiter.",
            serde_json::json!({
                "type": "object",
                "properties": {
                    "date": { "type": "string", "description": "YYYY-MM-DD (default: today)" },
                    "order": { "type": "string", "enum": ["dmy", "mdy", "ymd"] },
                    "delimiter": { "type": "string", "enum": ["dot", "slash", "dash", "space"] }
                },
                "required": []
            }),
        ),
        tool(
            "calendar_roman",
            "Convert a positive number to Roman numerals, or a canonical Roman numeral back to a number.",
            serde_json::json!({
                "type": "object",
                "properties": {
                    "value": { "type": "string", "description": "e.g. '1994' or 'MCMXCIV'" }
                },
                "required": ["value"]
            }),
        ),
    ]
}

pub fn handle_convert(arguments: Option<serde_json::Value>) -> Result<serde_json::Value, JsonRpcError> {
    #[derive(Deserialize)]
    struct ConvertArgs {
        date: Option<String>,
        time: Option<String>,
        calendar: Option<String>,
        #[serde(default)]
        h12: bool,
        #[serde(default)]
        clamp_day: bool,
    }

    let args: ConvertArgs = parse_args(arguments)?;
    let kind: CalendarKind = match args.calendar.as_deref() {
        Some(calendar) => parse_field("calendar", calendar)?,
        None => CalendarKind::English,
    };
    let time_format = if args.h12 {
        TimeFormat::H12
    } else {
        TimeFormat::H24
    };

    tool_output(crate::calendar::convert_data(
        args.date.as_deref(),
        args.time.as_deref(),
        kind,
        time_format,
        args.clamp_day,
    ))
}

pub fn handle_roman_date(arguments: Option<serde_json::Value>) -> Result<serde_json::Value, JsonRpcError> {
    #[derive(Deserialize)]
    struct RomanDateArgs {
        date: Option<String>,
        order: Option<String>,
        delimiter: Option<String>,
    }

    let args: RomanDateArgs = parse_args(arguments)?;
    let order: FieldOrder = match args.order.as_deref() {
        Some(order) => parse_field("order", order)?,
        None => FieldOrder::default(),
    };
    let delimiter: Delimiter = match args.delimiter.as_deref() {
        Some(delimiter) => parse_field("delimiter", delimiter)?,
        None => Delimiter::default(),
    };

    tool_output(
        crate::calendar::resolve_date(args.date.as_deref(), false)
            .map(|date| roman::format_roman_date(date, order, delimiter)),
    )
}

pub fn handle_roman(arguments: Option<serde_json::Value>) -> Result<serde_json::Value, JsonRpcError> {
    #[derive(Deserialize)]
    struct RomanArgs {
        value: String,
    }

    let args: RomanArgs = parse_args(arguments)?;
    tool_output(crate::calendar::roman_data(&args.value))
}
