//! Bengali (Bangla) calendar, revised Bangladesh variant
//!
//! Each month starts on a fixed Gregorian day. The year begins on
//! 14 April (Pohela Boishakh) and Falgun absorbs the Gregorian leap day.

use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

use super::numerals::{to_native, Script};
use super::{CalendarError, GregorianDate};

/// Offset between the Gregorian and Bengali year after Pohela Boishakh
const YEAR_OFFSET: i32 = 593;

/// (Gregorian month, day) on which each Bengali month begins, Boishakh first.
/// Entries from Magh onwards fall in the following Gregorian year.
const MONTH_STARTS: [(u32, u32); 12] = [
    (4, 14),
    (5, 15),
    (6, 15),
    (7, 16),
    (8, 16),
    (9, 16),
    (10, 17),
    (11, 16),
    (12, 16),
    (1, 15),
    (2, 14),
    (3, 15),
];

/// Index of Magh, the first month that starts in the next Gregorian year
const FIRST_MONTH_OF_NEXT_YEAR: usize = 9;

pub const WEEKDAYS: [&str; 7] = [
    "রবিবার",
    "সোমবার",
    "মঙ্গলবার",
    "বুধবার",
    "বৃহস্পতিবার",
    "শুক্রবার",
    "শনিবার",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BengaliMonth {
    Boishakh,
    Joishtho,
    Asharh,
    Srabon,
    Bhadro,
    Ashwin,
    Kartik,
    Ogrohayon,
    Poush,
    Magh,
    Falgun,
    Chaitra,
}

impl BengaliMonth {
    const ALL: [BengaliMonth; 12] = [
        BengaliMonth::Boishakh,
        BengaliMonth::Joishtho,
        BengaliMonth::Asharh,
        BengaliMonth::Srabon,
        BengaliMonth::Bhadro,
        BengaliMonth::Ashwin,
        BengaliMonth::Kartik,
        BengaliMonth::Ogrohayon,
        BengaliMonth::Poush,
        BengaliMonth::Magh,
        BengaliMonth::Falgun,
        BengaliMonth::Chaitra,
    ];

    fn from_index(index: usize) -> Self {
        Self::ALL[index % 12]
    }

    /// 1-based month number
    pub fn number(self) -> u32 {
        self as u32 + 1
    }

    pub fn native_name(self) -> &'static str {
        match self {
            BengaliMonth::Boishakh => "বৈশাখ",
            BengaliMonth::Joishtho => "জ্যৈষ্ঠ",
            BengaliMonth::Asharh => "আষাঢ়",
            BengaliMonth::Srabon => "শ্রাবণ",
            BengaliMonth::Bhadro => "ভাদ্র",
            BengaliMonth::Ashwin => "আশ্বিন",
            BengaliMonth::Kartik => "কার্তিক",
            BengaliMonth::Ogrohayon => "অগ্রহায়ণ",
            BengaliMonth::Poush => "পৌষ",
            BengaliMonth::Magh => "মাঘ",
            BengaliMonth::Falgun => "ফাল্গুন",
            BengaliMonth::Chaitra => "চৈত্র",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BengaliDate {
    pub year: u32,
    pub month: BengaliMonth,
    pub day: u32,
}

impl fmt::Display for BengaliDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            to_native(self.day as u64, Script::Bengali),
            self.month.native_name(),
            to_native(self.year as u64, Script::Bengali)
        )
    }
}

fn month_start(bengali_year_start: i32, index: usize) -> Option<NaiveDate> {
    let (month, day) = MONTH_STARTS[index];
    let year = if index >= FIRST_MONTH_OF_NEXT_YEAR {
        bengali_year_start + 1
    } else {
        bengali_year_start
    };
    NaiveDate::from_ymd_opt(year, month, day)
}

fn day_offset(date: NaiveDate, start: NaiveDate) -> u32 {
    (date - start).num_days() as u32 + 1
}

/// Fails for dates before 1 Boishakh of year 1 (14 April 594)
pub fn to_bengali(date: GregorianDate) -> Result<BengaliDate, CalendarError> {
    let naive = date.naive();
    let (new_year_month, new_year_day) = MONTH_STARTS[0];
    let before_new_year = (date.month(), date.day()) < (new_year_month, new_year_day);

    // Gregorian year in which this Bengali year began
    let start_year = if before_new_year {
        date.year() - 1
    } else {
        date.year()
    };
    if start_year <= YEAR_OFFSET {
        return Err(CalendarError::BeforeEpoch("Bengali"));
    }
    let year = (start_year - YEAR_OFFSET) as u32;

    let starts: Vec<Option<NaiveDate>> = (0..12).map(|i| month_start(start_year, i)).collect();

    for index in 0..11 {
        if let (Some(start), Some(next)) = (starts[index], starts[index + 1]) {
            if start <= naive && naive < next {
                return Ok(BengaliDate {
                    year,
                    month: BengaliMonth::from_index(index),
                    day: day_offset(naive, start),
                });
            }
        }
    }

    // No bracket matched: the date lies in Chaitra, which runs from its
    // anchor up to the next Pohela Boishakh.
    let chaitra = starts[11].unwrap_or(naive);
    Ok(BengaliDate {
        year,
        month: BengaliMonth::Chaitra,
        day: day_offset(naive, chaitra),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bengali(y: i32, m: u32, d: u32) -> BengaliDate {
        to_bengali(GregorianDate::new(y, m, d).unwrap()).unwrap()
    }

    fn expect(year: u32, month: BengaliMonth, day: u32) -> BengaliDate {
        BengaliDate { year, month, day }
    }

    // ============================================================================
    // Year boundary tests
    // ============================================================================

    #[test]
    fn test_dates_before_year_one_are_rejected() {
        assert_eq!(bengali(594, 4, 14), expect(1, BengaliMonth::Boishakh, 1));
        for (y, m, d) in [(594, 4, 13), (593, 1, 1), (500, 5, 1), (100, 5, 1)] {
            let date = GregorianDate::new(y, m, d).unwrap();
            assert_eq!(
                to_bengali(date).unwrap_err(),
                CalendarError::BeforeEpoch("Bengali")
            );
        }
    }

    #[test]
    fn test_new_year_is_first_of_boishakh() {
        assert_eq!(bengali(2024, 4, 14), expect(1431, BengaliMonth::Boishakh, 1));
    }

    #[test]
    fn test_day_before_new_year_is_last_of_chaitra() {
        assert_eq!(bengali(2024, 4, 13), expect(1430, BengaliMonth::Chaitra, 30));
        assert_eq!(bengali(2026, 4, 13), expect(1432, BengaliMonth::Chaitra, 30));
    }

    #[test]
    fn test_chaitra_first_day() {
        assert_eq!(bengali(2024, 3, 15), expect(1430, BengaliMonth::Chaitra, 1));
    }

    #[test]
    fn test_new_year_eve_in_january_keeps_previous_year() {
        assert_eq!(bengali(2024, 12, 31), expect(1431, BengaliMonth::Poush, 16));
    }

    // ============================================================================
    // Month boundary tests
    // ============================================================================

    #[test]
    fn test_falgun_has_thirty_days_in_leap_year() {
        assert_eq!(bengali(2024, 3, 14), expect(1430, BengaliMonth::Falgun, 30));
    }

    #[test]
    fn test_falgun_has_twenty_nine_days_in_common_year() {
        assert_eq!(bengali(2025, 3, 14), expect(1431, BengaliMonth::Falgun, 29));
    }

    #[test]
    fn test_poush_to_magh_crosses_gregorian_year() {
        assert_eq!(bengali(2024, 12, 16), expect(1431, BengaliMonth::Poush, 1));
        assert_eq!(bengali(2025, 1, 14), expect(1431, BengaliMonth::Poush, 30));
        assert_eq!(bengali(2025, 1, 15), expect(1431, BengaliMonth::Magh, 1));
    }

    #[test]
    fn test_first_six_months_have_thirty_one_days() {
        assert_eq!(bengali(2024, 5, 14), expect(1431, BengaliMonth::Boishakh, 31));
        assert_eq!(bengali(2024, 10, 16), expect(1431, BengaliMonth::Ashwin, 31));
        assert_eq!(bengali(2024, 10, 17), expect(1431, BengaliMonth::Kartik, 1));
    }

    #[test]
    fn test_falgun_starts_on_valentines_day() {
        assert_eq!(bengali(2024, 2, 13), expect(1430, BengaliMonth::Magh, 30));
        assert_eq!(bengali(2024, 2, 14), expect(1430, BengaliMonth::Falgun, 1));
    }

    #[test]
    fn test_every_day_of_a_year_is_consecutive() {
        let mut day = GregorianDate::new(2024, 4, 14).unwrap().naive();
        let mut previous = to_bengali(GregorianDate::new(2024, 4, 14).unwrap()).unwrap();
        for _ in 0..365 {
            day = day.succ_opt().unwrap();
            let current = to_bengali(GregorianDate(day)).unwrap();
            if current.month == previous.month {
                assert_eq!(current.day, previous.day + 1);
            } else {
                assert_eq!(current.day, 1);
            }
            previous = current;
        }
        assert_eq!(previous, expect(1432, BengaliMonth::Boishakh, 1));
    }

    // ============================================================================
    // Formatting tests
    // ============================================================================

    #[test]
    fn test_display_uses_bengali_digits() {
        assert_eq!(bengali(2024, 4, 14).to_string(), "১ বৈশাখ ১৪৩১");
    }

    #[test]
    fn test_month_number() {
        assert_eq!(BengaliMonth::Boishakh.number(), 1);
        assert_eq!(BengaliMonth::Chaitra.number(), 12);
    }
}
