//! Gregorian date conversion into Bengali, Hijri, Roman-numeral and Hindi views
//!
//! A [`GregorianDate`] is always the source representation. Every other
//! calendar is a view computed on demand by [`convert`]; views are never
//! cached or mutated.

pub mod bengali;
pub mod hijri;
pub mod hindi;
pub mod numerals;
pub mod roman;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub use numerals::Script;

/// English month names, January first
pub const ENGLISH_MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// English weekday names, Sunday first
pub const ENGLISH_WEEKDAYS: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CalendarError {
    #[error("Month must be between 1 and 12, got {0}")]
    InvalidMonth(u32),

    #[error("Day {day} is not valid for {year}-{month:02} (the month has {max} days)")]
    InvalidDay {
        year: i32,
        month: u32,
        day: u32,
        max: u32,
    },

    #[error("Year must be between 1 and 9999, got {0}")]
    InvalidYear(i32),

    #[error("Time {hour:02}:{minute:02} is not a valid time of day")]
    InvalidTime { hour: u32, minute: u32 },

    #[error("Date falls before the start of the {0} calendar")]
    BeforeEpoch(&'static str),

    #[error("'{0}' is not a valid Roman numeral")]
    InvalidRoman(String),

    #[error("Could not parse '{0}', expected YYYY-MM-DD")]
    Unparseable(String),
}

pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

pub fn days_in_month(year: i32, month: u32) -> Result<u32, CalendarError> {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => Ok(31),
        4 | 6 | 9 | 11 => Ok(30),
        2 if is_leap_year(year) => Ok(29),
        2 => Ok(28),
        other => Err(CalendarError::InvalidMonth(other)),
    }
}

/// A validated proleptic Gregorian date
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GregorianDate(NaiveDate);

impl GregorianDate {
    /// Build a date, rejecting any day, month or year out of range
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, CalendarError> {
        if !(1..=9999).contains(&year) {
            return Err(CalendarError::InvalidYear(year));
        }
        let max = days_in_month(year, month)?;
        if day == 0 || day > max {
            return Err(CalendarError::InvalidDay {
                year,
                month,
                day,
                max,
            });
        }
        NaiveDate::from_ymd_opt(year, month, day)
            .map(GregorianDate)
            .ok_or(CalendarError::InvalidDay {
                year,
                month,
                day,
                max,
            })
    }

    /// Build a date, pulling a day past the end of the month back to the last day
    ///
    /// This is the only constructor that ever adjusts its input. A day of 0
    /// is still rejected.
    pub fn new_clamped(year: i32, month: u32, day: u32) -> Result<Self, CalendarError> {
        let max = days_in_month(year, month)?;
        Self::new(year, month, day.min(max))
    }

    /// Parse `YYYY-MM-DD` through [`GregorianDate::new_clamped`]
    pub fn parse_clamped(s: &str) -> Result<Self, CalendarError> {
        let (year, month, day) = split_ymd(s)?;
        Self::new_clamped(year, month, day)
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Day of week, 0 = Sunday
    pub fn weekday_index(&self) -> usize {
        self.0.weekday().num_days_from_sunday() as usize
    }

    pub(crate) fn naive(&self) -> NaiveDate {
        self.0
    }
}

fn split_ymd(s: &str) -> Result<(i32, u32, u32), CalendarError> {
    let unparseable = || CalendarError::Unparseable(s.to_string());
    let mut parts = s.trim().splitn(3, '-');
    let mut next = || parts.next().ok_or_else(unparseable);

    let year = next()?.parse::<i32>().map_err(|_| unparseable())?;
    let month = next()?.parse::<u32>().map_err(|_| unparseable())?;
    let day = next()?.parse::<u32>().map_err(|_| unparseable())?;
    Ok((year, month, day))
}

impl FromStr for GregorianDate {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (year, month, day) = split_ymd(s)?;
        GregorianDate::new(year, month, day)
    }
}

impl fmt::Display for GregorianDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeOfDay {
    hour: u32,
    minute: u32,
}

impl TimeOfDay {
    pub fn new(hour: u32, minute: u32) -> Result<Self, CalendarError> {
        if hour > 23 || minute > 59 {
            return Err(CalendarError::InvalidTime { hour, minute });
        }
        Ok(Self { hour, minute })
    }

    pub fn hour(&self) -> u32 {
        self.hour
    }

    pub fn minute(&self) -> u32 {
        self.minute
    }
}

impl FromStr for TimeOfDay {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unparseable = || CalendarError::Unparseable(s.to_string());
        let (hour, minute) = s.trim().split_once(':').ok_or_else(unparseable)?;
        TimeOfDay::new(
            hour.parse().map_err(|_| unparseable())?,
            minute.parse().map_err(|_| unparseable())?,
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeFormat {
    #[default]
    H24,
    H12,
}

/// Render a time of day, digits written in `script`
pub fn format_time(time: TimeOfDay, format: TimeFormat, script: Script) -> String {
    let rendered = match format {
        TimeFormat::H24 => format!("{:02}:{:02}", time.hour, time.minute),
        TimeFormat::H12 => {
            let meridiem = if time.hour < 12 { "AM" } else { "PM" };
            let hour = match time.hour % 12 {
                0 => 12,
                h => h,
            };
            format!("{hour}:{:02} {meridiem}", time.minute)
        }
    };
    numerals::transliterate(&rendered, script)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalendarKind {
    English,
    Bengali,
    Hijri,
    Roman,
    Hindi,
}

impl CalendarKind {
    pub fn script(self) -> Script {
        match self {
            CalendarKind::English | CalendarKind::Roman => Script::Latin,
            CalendarKind::Bengali => Script::Bengali,
            CalendarKind::Hijri => Script::ArabicIndic,
            CalendarKind::Hindi => Script::Devanagari,
        }
    }
}

impl FromStr for CalendarKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "english" | "gregorian" => Ok(CalendarKind::English),
            "bengali" | "bangla" => Ok(CalendarKind::Bengali),
            "hijri" | "arabic" | "islamic" => Ok(CalendarKind::Hijri),
            "roman" => Ok(CalendarKind::Roman),
            "hindi" | "devanagari" => Ok(CalendarKind::Hindi),
            other => Err(format!("Unknown calendar: {other}")),
        }
    }
}

/// A date as seen through one target calendar
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarView {
    pub kind: CalendarKind,
    pub source: String,
    pub day: String,
    pub month: String,
    pub month_name: String,
    pub year: String,
    pub weekday: String,
    pub formatted: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
}

/// Convert a Gregorian date (and optional time) into the target calendar
pub fn convert(
    date: GregorianDate,
    time: Option<TimeOfDay>,
    kind: CalendarKind,
    time_format: TimeFormat,
) -> Result<CalendarView, CalendarError> {
    let script = kind.script();
    let time = time.map(|t| format_time(t, time_format, script));
    let source = date.to_string();

    let view = match kind {
        CalendarKind::English => {
            let month_name = ENGLISH_MONTHS[date.month() as usize - 1].to_string();
            CalendarView {
                kind,
                source,
                day: date.day().to_string(),
                month: date.month().to_string(),
                formatted: format!("{} {} {}", date.day(), month_name, date.year()),
                month_name,
                year: date.year().to_string(),
                weekday: ENGLISH_WEEKDAYS[date.weekday_index()].to_string(),
                time,
            }
        }
        CalendarKind::Bengali => {
            let bengali = bengali::to_bengali(date)?;
            CalendarView {
                kind,
                source,
                day: numerals::to_native(bengali.day as u64, script),
                month: numerals::to_native(bengali.month.number() as u64, script),
                month_name: bengali.month.native_name().to_string(),
                year: numerals::to_native(bengali.year as u64, script),
                weekday: bengali::WEEKDAYS[date.weekday_index()].to_string(),
                formatted: bengali.to_string(),
                time,
            }
        }
        CalendarKind::Hijri => {
            let hijri = hijri::to_hijri(date)?;
            CalendarView {
                kind,
                source,
                day: numerals::to_native(hijri.day as u64, script),
                month: numerals::to_native(hijri.month as u64, script),
                month_name: hijri.native_month_name().to_string(),
                year: numerals::to_native(hijri.year as u64, script),
                weekday: hijri::WEEKDAYS[date.weekday_index()].to_string(),
                formatted: hijri.to_string(),
                time,
            }
        }
        CalendarKind::Roman => {
            let roman = roman::format_roman_date(
                date,
                roman::FieldOrder::DayMonthYear,
                roman::Delimiter::Dot,
            );
            CalendarView {
                kind,
                source,
                day: roman::to_roman(date.day()),
                month: roman::to_roman(date.month()),
                month_name: ENGLISH_MONTHS[date.month() as usize - 1].to_string(),
                year: roman::to_roman(date.year() as u32),
                weekday: ENGLISH_WEEKDAYS[date.weekday_index()].to_string(),
                formatted: roman.roman,
                time,
            }
        }
        CalendarKind::Hindi => {
            let hindi = hindi::to_hindi(date);
            CalendarView {
                kind,
                source,
                day: hindi.day.clone(),
                month: numerals::to_native(date.month() as u64, script),
                month_name: hindi.month_name.to_string(),
                year: hindi.year.clone(),
                weekday: hindi.weekday.to_string(),
                formatted: hindi.to_string(),
                time,
            }
        }
    };

    Ok(view)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> GregorianDate {
        GregorianDate::new(y, m, d).unwrap()
    }

    // ============================================================================
    // GregorianDate validation tests
    // ============================================================================

    #[test]
    fn test_new_rejects_day_past_month_end() {
        assert_eq!(
            GregorianDate::new(2023, 2, 29).unwrap_err(),
            CalendarError::InvalidDay {
                year: 2023,
                month: 2,
                day: 29,
                max: 28
            }
        );
    }

    #[test]
    fn test_new_accepts_leap_day() {
        assert!(GregorianDate::new(2024, 2, 29).is_ok());
        assert!(GregorianDate::new(2000, 2, 29).is_ok());
        assert!(GregorianDate::new(1900, 2, 29).is_err());
    }

    #[test]
    fn test_new_rejects_month_out_of_range() {
        assert_eq!(
            GregorianDate::new(2024, 13, 1).unwrap_err(),
            CalendarError::InvalidMonth(13)
        );
        assert_eq!(
            GregorianDate::new(2024, 0, 1).unwrap_err(),
            CalendarError::InvalidMonth(0)
        );
    }

    #[test]
    fn test_new_rejects_day_zero() {
        assert!(GregorianDate::new(2024, 1, 0).is_err());
        assert!(GregorianDate::new_clamped(2024, 1, 0).is_err());
    }

    #[test]
    fn test_new_clamped_only_pulls_back_overflowing_day() {
        assert_eq!(GregorianDate::new_clamped(2023, 2, 31).unwrap(), date(2023, 2, 28));
        assert_eq!(GregorianDate::new_clamped(2023, 4, 12).unwrap(), date(2023, 4, 12));
    }

    #[test]
    fn test_parse_date() {
        assert_eq!("2024-04-14".parse::<GregorianDate>().unwrap(), date(2024, 4, 14));
        assert!(matches!(
            "2024/04/14".parse::<GregorianDate>(),
            Err(CalendarError::Unparseable(_))
        ));
        assert!(matches!(
            "2024-04-31".parse::<GregorianDate>(),
            Err(CalendarError::InvalidDay { .. })
        ));
    }

    #[test]
    fn test_parse_clamped() {
        assert_eq!(GregorianDate::parse_clamped("2023-02-30").unwrap(), date(2023, 2, 28));
        assert_eq!(GregorianDate::parse_clamped(" 2024-02-31 ").unwrap(), date(2024, 2, 29));
        assert!(matches!(
            GregorianDate::parse_clamped("2023-02"),
            Err(CalendarError::Unparseable(_))
        ));
    }

    #[test]
    fn test_weekday_index() {
        // 2024-04-14 was a Sunday
        assert_eq!(date(2024, 4, 14).weekday_index(), 0);
    }

    // ============================================================================
    // time formatting tests
    // ============================================================================

    #[test]
    fn test_time_rejects_out_of_range() {
        assert!(TimeOfDay::new(24, 0).is_err());
        assert!(TimeOfDay::new(23, 60).is_err());
        assert!("9:05".parse::<TimeOfDay>().is_ok());
    }

    #[test]
    fn test_format_time_24h_and_12h() {
        let t = TimeOfDay::new(0, 5).unwrap();
        assert_eq!(format_time(t, TimeFormat::H24, Script::Latin), "00:05");
        assert_eq!(format_time(t, TimeFormat::H12, Script::Latin), "12:05 AM");

        let t = TimeOfDay::new(13, 30).unwrap();
        assert_eq!(format_time(t, TimeFormat::H12, Script::Latin), "1:30 PM");
    }

    #[test]
    fn test_format_time_native_digits() {
        let t = TimeOfDay::new(9, 45).unwrap();
        assert_eq!(format_time(t, TimeFormat::H24, Script::Bengali), "০৯:৪৫");
    }

    // ============================================================================
    // convert tests
    // ============================================================================

    #[test]
    fn test_convert_english() {
        let view = convert(date(2024, 4, 14), None, CalendarKind::English, TimeFormat::H24).unwrap();
        assert_eq!(view.formatted, "14 April 2024");
        assert_eq!(view.weekday, "Sunday");
        assert!(view.time.is_none());
    }

    #[test]
    fn test_convert_bengali_new_year() {
        let time = TimeOfDay::new(6, 0).ok();
        let view = convert(date(2024, 4, 14), time, CalendarKind::Bengali, TimeFormat::H24).unwrap();
        assert_eq!(view.day, "১");
        assert_eq!(view.month_name, "বৈশাখ");
        assert_eq!(view.year, "১৪৩১");
        assert_eq!(view.time.as_deref(), Some("০৬:০০"));
    }

    #[test]
    fn test_convert_bengali_before_epoch() {
        assert_eq!(
            convert(date(300, 6, 1), None, CalendarKind::Bengali, TimeFormat::H24).unwrap_err(),
            CalendarError::BeforeEpoch("Bengali")
        );
    }

    #[test]
    fn test_convert_hijri() {
        let view = convert(date(2024, 3, 11), None, CalendarKind::Hijri, TimeFormat::H24).unwrap();
        assert_eq!(view.day, "١");
        assert_eq!(view.year, "١٤٤٥");
        assert_eq!(view.month_name, "رمضان");
    }

    #[test]
    fn test_convert_roman() {
        let view = convert(date(1994, 12, 4), None, CalendarKind::Roman, TimeFormat::H24).unwrap();
        assert_eq!(view.formatted, "IV.XII.MCMXCIV");
        assert_eq!(view.year, "MCMXCIV");
    }

    #[test]
    fn test_convert_hindi() {
        let view = convert(date(2024, 1, 26), None, CalendarKind::Hindi, TimeFormat::H24).unwrap();
        assert_eq!(view.formatted, "२६ जनवरी २०२४");
        assert_eq!(view.weekday, "शुक्रवार");
    }

    #[test]
    fn test_calendar_kind_from_str() {
        assert_eq!("Bangla".parse::<CalendarKind>().unwrap(), CalendarKind::Bengali);
        assert_eq!("arabic".parse::<CalendarKind>().unwrap(), CalendarKind::Hijri);
        assert!("mayan".parse::<CalendarKind>().is_err());
    }
}
