//! Gregorian dates written in Hindi with Devanagari digits

use serde::Serialize;
use std::fmt;

use super::numerals::{to_native, Script};
use super::GregorianDate;

pub const MONTHS: [&str; 12] = [
    "जनवरी",
    "फ़रवरी",
    "मार्च",
    "अप्रैल",
    "मई",
    "जून",
    "जुलाई",
    "अगस्त",
    "सितंबर",
    "अक्टूबर",
    "नवंबर",
    "दिसंबर",
];

pub const WEEKDAYS: [&str; 7] = [
    "रविवार",
    "सोमवार",
    "मंगलवार",
    "बुधवार",
    "गुरुवार",
    "शुक्रवार",
    "शनिवार",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HindiDate {
    pub day: String,
    pub month_name: &'static str,
    pub year: String,
    pub weekday: &'static str,
}

impl fmt::Display for HindiDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.day, self.month_name, self.year)
    }
}

pub fn to_hindi(date: GregorianDate) -> HindiDate {
    HindiDate {
        day: to_native(date.day() as u64, Script::Devanagari),
        month_name: MONTHS[date.month() as usize - 1],
        year: to_native(date.year() as u64, Script::Devanagari),
        weekday: WEEKDAYS[date.weekday_index()],
    }
}
