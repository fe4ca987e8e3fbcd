use minitools_core::numeral::{ArithmeticOp, Radix, Representation};
use serde::Deserialize;

use super::{parse_args, parse_field, tool, tool_output, JsonRpcError, Tool};

const REPRESENTATIONS: [&str; 6] = ["binary", "octal", "decimal", "hexadecimal", "text", "ascii"];

pub fn tools() -> Vec<Tool> {
    vec![
        tool(
            "numeral_convert",
            "Convert between binary, octal, decimal, hexadecimal, text and ASCII codes. Numbers are whitespace separated; text is encoded as UTF-16 code units. Fails as a whole on the first invalid token.",
            serde_json::json!({
                "type": "object",
                "properties": {
                    "input": { "type": "string", "description": "Value(s) to convert" },
                    "from": { "type": "string", "enum": REPRESENTATIONS },
                    "to": { "type": "string", "enum": REPRESENTATIONS }
                },
                "required": ["input", "from", "to"]
            }),
        ),
        tool(
            "numeral_calc",
            "Add, subtract, multiply or divide two integers written in the same radix (hexadecimal by default). Division truncates toward zero.",
            serde_json::json!({
                "type": "object",
                "properties": {
                    "lhs": { "type": "string", "description": "Left operand, e.g. '1A'" },
                    "op": { "type": "string", "description": "One of + - * /" },
                    "rhs": { "type": "string", "description": "Right operand, e.g. '2B'" },
                    "radix": { "type": "string", "enum": ["binary", "octal", "decimal", "hexadecimal"], "description": "Radix of operands and result (default: hexadecimal)" }
                },
                "required": ["lhs", "op", "rhs"]
            }),
        ),
    ]
}

pub fn handle_convert(arguments: Option<serde_json::Value>) -> Result<serde_json::Value, JsonRpcError> {
    #[derive(Deserialize)]
    struct ConvertArgs {
        input: String,
        from: String,
        to: String,
    }

    let args: ConvertArgs = parse_args(arguments)?;
    let from: Representation = parse_field("from", &args.from)?;
    let to: Representation = parse_field("to", &args.to)?;

    tool_output(crate::numeral::convert_data(&args.input, from, to))
}

pub fn handle_calc(arguments: Option<serde_json::Value>) -> Result<serde_json::Value, JsonRpcError> {
    #[derive(Deserialize)]
    struct CalcArgs {
        lhs: String,
        op: String,
        rhs: String,
        radix: Option<String>,
    }

    let args: CalcArgs = parse_args(arguments)?;
    let op: ArithmeticOp = parse_field("op", &args.op)?;
    let radix: Radix = match args.radix.as_deref() {
        Some(radix) => parse_field("radix", radix)?,
        None => Radix::Hexadecimal,
    };

    tool_output(crate::numeral::calc_data(&args.lhs, op, &args.rhs, radix))
}
