//! Roman numerals and Roman-numeral dates

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::{CalendarError, GregorianDate};

const NUMERALS: [(u32, &str); 13] = [
    (1000, "M"),
    (900, "CM"),
    (500, "D"),
    (400, "CD"),
    (100, "C"),
    (90, "XC"),
    (50, "L"),
    (40, "XL"),
    (10, "X"),
    (9, "IX"),
    (5, "V"),
    (4, "IV"),
    (1, "I"),
];

/// Greedy subtractive encoding. Zero has no Roman form and yields `""`.
pub fn to_roman(mut value: u32) -> String {
    let mut out = String::new();
    for &(amount, symbol) in NUMERALS.iter() {
        while value >= amount {
            out.push_str(symbol);
            value -= amount;
        }
    }
    out
}

/// Parse a numeral written in canonical subtractive form
pub fn from_roman(input: &str) -> Result<u32, CalendarError> {
    let invalid = || CalendarError::InvalidRoman(input.to_string());
    let normalized = input.trim().to_ascii_uppercase();
    if normalized.is_empty() {
        return Err(invalid());
    }

    let mut rest = normalized.as_str();
    let mut value = 0u32;
    for &(amount, symbol) in NUMERALS.iter() {
        while let Some(tail) = rest.strip_prefix(symbol) {
            value = value.checked_add(amount).ok_or_else(invalid)?;
            rest = tail;
        }
    }

    // Leftovers or non-canonical spellings (IIII, VX, ...) do not re-encode
    if !rest.is_empty() || to_roman(value) != normalized {
        return Err(invalid());
    }
    Ok(value)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldOrder {
    #[default]
    DayMonthYear,
    MonthDayYear,
    YearMonthDay,
}

impl FromStr for FieldOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "dmy" | "dd.mm.yyyy" => Ok(FieldOrder::DayMonthYear),
            "mdy" | "mm.dd.yyyy" => Ok(FieldOrder::MonthDayYear),
            "ymd" | "yyyy.mm.dd" => Ok(FieldOrder::YearMonthDay),
            other => Err(format!("Unknown field order: {other}")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Delimiter {
    #[default]
    Dot,
    Slash,
    Dash,
    Space,
}

impl Delimiter {
    fn as_str(self) -> &'static str {
        match self {
            Delimiter::Dot => ".",
            Delimiter::Slash => "/",
            Delimiter::Dash => "-",
            Delimiter::Space => " ",
        }
    }
}

impl FromStr for Delimiter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "." | "dot" => Ok(Delimiter::Dot),
            "/" | "slash" => Ok(Delimiter::Slash),
            "-" | "dash" => Ok(Delimiter::Dash),
            " " | "space" => Ok(Delimiter::Space),
            other => Err(format!("Unknown delimiter: {other}")),
        }
    }
}

/// The same date written with Arabic digits and with Roman numerals
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RomanDate {
    pub arabic: String,
    pub roman: String,
}

pub fn format_roman_date(date: GregorianDate, order: FieldOrder, delimiter: Delimiter) -> RomanDate {
    let (day, month, year) = (date.day(), date.month(), date.year() as u32);
    let fields = match order {
        FieldOrder::DayMonthYear => [day, month, year],
        FieldOrder::MonthDayYear => [month, day, year],
        FieldOrder::YearMonthDay => [year, month, day],
    };

    let sep = delimiter.as_str();
    let arabic = match order {
        FieldOrder::YearMonthDay => format!("{:04}{sep}{:02}{sep}{:02}", fields[0], fields[1], fields[2]),
        _ => format!("{:02}{sep}{:02}{sep}{:04}", fields[0], fields[1], fields[2]),
    };
    let roman = fields.map(to_roman).join(sep);

    RomanDate { arabic, roman }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ============================================================================
    // to_roman tests
    // ============================================================================

    #[test]
    fn test_to_roman_known_values() {
        assert_eq!(to_roman(1994), "MCMXCIV");
        assert_eq!(to_roman(2024), "MMXXIV");
        assert_eq!(to_roman(3999), "MMMCMXCIX");
        assert_eq!(to_roman(4), "IV");
        assert_eq!(to_roman(49), "XLIX");
    }

    #[test]
    fn test_to_roman_zero_is_empty() {
        assert_eq!(to_roman(0), "");
    }

    // ============================================================================
    // from_roman tests
    // ============================================================================

    #[test]
    fn test_from_roman_inverts_to_roman() {
        for value in 1..=3999 {
            assert_eq!(from_roman(&to_roman(value)).unwrap(), value);
        }
    }

    #[test]
    fn test_from_roman_is_case_insensitive() {
        assert_eq!(from_roman("mcmxciv").unwrap(), 1994);
    }

    #[test]
    fn test_from_roman_rejects_non_canonical() {
        assert!(from_roman("IIII").is_err());
        assert!(from_roman("VX").is_err());
        assert!(from_roman("IC").is_err());
        assert!(from_roman("").is_err());
        assert!(from_roman("ABC").is_err());
    }

    #[test]
    fn test_from_roman_rejects_value_past_u32() {
        let huge = "M".repeat(4_300_000);
        assert_eq!(
            from_roman(&huge).unwrap_err(),
            CalendarError::InvalidRoman(huge.clone())
        );
    }

    // ============================================================================
    // format_roman_date tests
    // ============================================================================

    fn sample() -> GregorianDate {
        GregorianDate::new(2024, 3, 9).unwrap()
    }

    #[test]
    fn test_roman_date_default_order() {
        let out = format_roman_date(sample(), FieldOrder::DayMonthYear, Delimiter::Dot);
        assert_eq!(out.arabic, "09.03.2024");
        assert_eq!(out.roman, "IX.III.MMXXIV");
    }

    #[test]
    fn test_roman_date_month_first_with_slash() {
        let out = format_roman_date(sample(), FieldOrder::MonthDayYear, Delimiter::Slash);
        assert_eq!(out.arabic, "03/09/2024");
        assert_eq!(out.roman, "III/IX/MMXXIV");
    }

    #[test]
    fn test_roman_date_year_first_with_dash() {
        let out = format_roman_date(sample(), FieldOrder::YearMonthDay, Delimiter::Dash);
        assert_eq!(out.arabic, "2024-03-09");
        assert_eq!(out.roman, "MMXXIV-III-IX");
    }

    #[test]
    fn test_field_order_and_delimiter_from_str() {
        assert_eq!("MM.DD.YYYY".parse::<FieldOrder>().unwrap(), FieldOrder::MonthDayYear);
        assert_eq!("space".parse::<Delimiter>().unwrap(), Delimiter::Space);
        assert!("xyz".parse::<FieldOrder>().is_err());
    }
}
