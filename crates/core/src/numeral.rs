//! Pure conversions between numeral systems and character encodings
//!
//! Every converter in the catalog (binary, octal, decimal, hexadecimal,
//! text and ASCII) is a pair of representations fed through [`convert`].
//! A conversion either succeeds for every token or fails as a whole; no
//! partially converted output is ever produced.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors produced by the numeral codec
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NumeralError {
    #[error("'{token}' is not a valid base-{radix} number")]
    InvalidDigit { token: String, radix: u32 },

    #[error("{0} is not a valid character code")]
    InvalidCodePoint(String),

    #[error("Input is empty")]
    EmptyInput,

    #[error("Result does not fit in a 64-bit integer")]
    Overflow,

    #[error("Division by zero")]
    DivisionByZero,

    #[error("Character codes do not form valid text")]
    InvalidText,

    #[error("Unknown representation: {0}")]
    UnknownRepresentation(String),
}

/// Base of a positional numeral system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Radix {
    Binary,
    Octal,
    Decimal,
    Hexadecimal,
}

impl Radix {
    pub fn base(self) -> u32 {
        match self {
            Radix::Binary => 2,
            Radix::Octal => 8,
            Radix::Decimal => 10,
            Radix::Hexadecimal => 16,
        }
    }

    fn prefix(self) -> Option<&'static str> {
        match self {
            Radix::Binary => Some("0b"),
            Radix::Octal => Some("0o"),
            Radix::Decimal => None,
            Radix::Hexadecimal => Some("0x"),
        }
    }
}

impl FromStr for Radix {
    type Err = NumeralError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<Representation>()?
            .radix()
            .ok_or_else(|| NumeralError::UnknownRepresentation(s.to_string()))
    }
}

/// Source or target of a conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Representation {
    Binary,
    Octal,
    Decimal,
    Hexadecimal,
    Text,
    Ascii,
}

impl Representation {
    fn radix(self) -> Option<Radix> {
        match self {
            Representation::Binary => Some(Radix::Binary),
            Representation::Octal => Some(Radix::Octal),
            Representation::Decimal => Some(Radix::Decimal),
            Representation::Hexadecimal => Some(Radix::Hexadecimal),
            Representation::Text | Representation::Ascii => None,
        }
    }
}

impl FromStr for Representation {
    type Err = NumeralError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "bin" | "binary" => Ok(Representation::Binary),
            "oct" | "octal" => Ok(Representation::Octal),
            "dec" | "decimal" => Ok(Representation::Decimal),
            "hex" | "hexadecimal" => Ok(Representation::Hexadecimal),
            "text" => Ok(Representation::Text),
            "ascii" => Ok(Representation::Ascii),
            other => Err(NumeralError::UnknownRepresentation(other.to_string())),
        }
    }
}

impl fmt::Display for Representation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Representation::Binary => "binary",
            Representation::Octal => "octal",
            Representation::Decimal => "decimal",
            Representation::Hexadecimal => "hexadecimal",
            Representation::Text => "text",
            Representation::Ascii => "ascii",
        };
        write!(f, "{name}")
    }
}

/// Arithmetic operations supported by the hex calculator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArithmeticOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl FromStr for ArithmeticOp {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "+" | "add" => Ok(ArithmeticOp::Add),
            "-" | "sub" => Ok(ArithmeticOp::Sub),
            "*" | "x" | "mul" | "mult" => Ok(ArithmeticOp::Mul),
            "/" | "div" => Ok(ArithmeticOp::Div),
            other => Err(format!("Unknown operation: {other}")),
        }
    }
}

/// Format an unsigned value in the given radix
///
/// Hexadecimal digits are upper case.
pub fn format_radix(value: u64, radix: Radix) -> String {
    match radix {
        Radix::Binary => format!("{value:b}"),
        Radix::Octal => format!("{value:o}"),
        Radix::Decimal => value.to_string(),
        Radix::Hexadecimal => format!("{value:X}"),
    }
}

/// Parse a single token in the given radix
///
/// An optional `0b`/`0o`/`0x` prefix matching the radix is accepted. Any
/// digit outside the radix rejects the whole token.
pub fn parse_radix(token: &str, radix: Radix) -> Result<u64, NumeralError> {
    let invalid = || NumeralError::InvalidDigit {
        token: token.to_string(),
        radix: radix.base(),
    };

    let digits = match (radix.prefix(), token.get(..2)) {
        (Some(prefix), Some(head)) if token.len() > 2 && head.eq_ignore_ascii_case(prefix) => {
            &token[2..]
        }
        _ => token,
    };

    // from_str_radix accepts a leading '+', which no converter does
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix.base())) {
        return Err(invalid());
    }

    u64::from_str_radix(digits, radix.base()).map_err(|_| NumeralError::Overflow)
}

/// Convert `input` from one representation to another
///
/// Numeric inputs are split on whitespace (ASCII input also on commas).
/// The first token that fails to parse aborts the conversion.
pub fn convert(
    input: &str,
    from: Representation,
    to: Representation,
) -> Result<String, NumeralError> {
    let units = decode_units(input, from)?;
    let pad_binary = matches!(from, Representation::Text | Representation::Ascii);
    encode_units(&units, to, pad_binary)
}

fn decode_units(input: &str, from: Representation) -> Result<Vec<u64>, NumeralError> {
    // Whitespace is content for text, padding for everything else
    let blank = match from {
        Representation::Text => input.is_empty(),
        _ => input.trim().is_empty(),
    };
    if blank {
        return Err(NumeralError::EmptyInput);
    }

    match from {
        Representation::Text => Ok(input.encode_utf16().map(u64::from).collect()),
        Representation::Ascii => input
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|token| !token.is_empty())
            .map(|token| parse_radix(token, Radix::Decimal))
            .collect(),
        numeric => {
            // radix() is Some for every numeric representation
            let radix = numeric.radix().ok_or(NumeralError::EmptyInput)?;
            input
                .split_whitespace()
                .map(|token| parse_radix(token, radix))
                .collect()
        }
    }
}

fn encode_units(units: &[u64], to: Representation, pad_binary: bool) -> Result<String, NumeralError> {
    match to {
        Representation::Text => {
            let code_units = units
                .iter()
                .map(|&unit| {
                    u16::try_from(unit).map_err(|_| NumeralError::InvalidCodePoint(unit.to_string()))
                })
                .collect::<Result<Vec<u16>, _>>()?;
            String::from_utf16(&code_units).map_err(|_| NumeralError::InvalidText)
        }
        Representation::Ascii => Ok(join(units.iter().map(|unit| unit.to_string()))),
        Representation::Binary if pad_binary => {
            Ok(join(units.iter().map(|unit| format!("{unit:08b}"))))
        }
        numeric => {
            let radix = numeric.radix().ok_or(NumeralError::EmptyInput)?;
            Ok(join(units.iter().map(|&unit| format_radix(unit, radix))))
        }
    }
}

fn join(tokens: impl Iterator<Item = String>) -> String {
    tokens.collect::<Vec<_>>().join(" ")
}

fn parse_signed(token: &str, radix: Radix) -> Result<i64, NumeralError> {
    let token = token.trim();
    let (negative, digits) = match token.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, token),
    };

    let magnitude = parse_radix(digits, radix)?;
    if negative {
        0i64.checked_sub_unsigned(magnitude).ok_or(NumeralError::Overflow)
    } else {
        i64::try_from(magnitude).map_err(|_| NumeralError::Overflow)
    }
}

fn format_signed(value: i64, radix: Radix) -> String {
    let magnitude = format_radix(value.unsigned_abs(), radix);
    if value < 0 {
        format!("-{magnitude}")
    } else {
        magnitude
    }
}

/// Perform integer arithmetic on two operands written in `radix`
///
/// Division truncates toward zero. The result is written back in the same
/// radix, with a leading `-` when negative.
pub fn arithmetic(
    lhs: &str,
    rhs: &str,
    op: ArithmeticOp,
    radix: Radix,
) -> Result<String, NumeralError> {
    let a = parse_signed(lhs, radix)?;
    let b = parse_signed(rhs, radix)?;

    let value = match op {
        ArithmeticOp::Add => a.checked_add(b),
        ArithmeticOp::Sub => a.checked_sub(b),
        ArithmeticOp::Mul => a.checked_mul(b),
        ArithmeticOp::Div => {
            if b == 0 {
                return Err(NumeralError::DivisionByZero);
            }
            a.checked_div(b)
        }
    }
    .ok_or(NumeralError::Overflow)?;

    Ok(format_signed(value, radix))
}

/// Hexadecimal calculator entry point
pub fn hex_arithmetic(lhs: &str, rhs: &str, op: ArithmeticOp) -> Result<String, NumeralError> {
    arithmetic(lhs, rhs, op, Radix::Hexadecimal)
}
