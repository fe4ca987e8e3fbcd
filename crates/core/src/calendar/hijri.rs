//! Tabular Islamic (Hijri) calendar
//!
//! Conversion goes through the Julian Day Number. Integer JDNs are used
//! throughout; the astronomical JD of a date is `jdn - 0.5`.

use serde::Serialize;
use std::fmt;

use super::numerals::{to_native, Script};
use super::{CalendarError, GregorianDate};

/// JDN of 1 Muharram 1 AH (JD 1948439.5)
pub const ISLAMIC_EPOCH_JDN: i64 = 1_948_440;

pub const MONTHS: [&str; 12] = [
    "Muharram",
    "Safar",
    "Rabi al-Awwal",
    "Rabi al-Thani",
    "Jumada al-Ula",
    "Jumada al-Akhirah",
    "Rajab",
    "Sha'ban",
    "Ramadan",
    "Shawwal",
    "Dhu al-Qadah",
    "Dhu al-Hijjah",
];

pub const NATIVE_MONTHS: [&str; 12] = [
    "محرم",
    "صفر",
    "ربيع الأول",
    "ربيع الآخر",
    "جمادى الأولى",
    "جمادى الآخرة",
    "رجب",
    "شعبان",
    "رمضان",
    "شوال",
    "ذو القعدة",
    "ذو الحجة",
];

pub const WEEKDAYS: [&str; 7] = [
    "الأحد",
    "الاثنين",
    "الثلاثاء",
    "الأربعاء",
    "الخميس",
    "الجمعة",
    "السبت",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HijriDate {
    pub year: u32,
    pub month: u32,
    pub day: u32,
}

impl HijriDate {
    pub fn month_name(&self) -> &'static str {
        MONTHS[self.month as usize - 1]
    }

    pub fn native_month_name(&self) -> &'static str {
        NATIVE_MONTHS[self.month as usize - 1]
    }
}

impl fmt::Display for HijriDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} هـ",
            to_native(self.day as u64, Script::ArabicIndic),
            self.native_month_name(),
            to_native(self.year as u64, Script::ArabicIndic)
        )
    }
}

/// Gregorian date to Julian Day Number
pub fn julian_day_number(date: GregorianDate) -> i64 {
    let (year, month, day) = (date.year() as i64, date.month() as i64, date.day() as i64);
    let a = (14 - month) / 12;
    let y = year + 4800 - a;
    let m = month + 12 * a - 3;
    day + (153 * m + 2) / 5 + 365 * y + y.div_euclid(4) - y.div_euclid(100) + y.div_euclid(400)
        - 32045
}

fn ceil_div(numerator: i64, denominator: i64) -> i64 {
    -(-numerator).div_euclid(denominator)
}

/// JDN of a day in the tabular Hijri calendar
fn hijri_to_jdn(year: i64, month: i64, day: i64) -> i64 {
    day + ceil_div(59 * (month - 1), 2)
        + (year - 1) * 354
        + (3 + 11 * year).div_euclid(30)
        + ISLAMIC_EPOCH_JDN
        - 1
}

pub fn from_jdn(jdn: i64) -> Result<HijriDate, CalendarError> {
    if jdn < ISLAMIC_EPOCH_JDN {
        return Err(CalendarError::BeforeEpoch("Hijri"));
    }

    let year = (30 * (jdn - ISLAMIC_EPOCH_JDN) + 10646).div_euclid(10631);
    let elapsed = jdn - (29 + hijri_to_jdn(year, 1, 1));
    let month = (ceil_div(2 * elapsed, 59) + 1).clamp(1, 12);
    let day = jdn - hijri_to_jdn(year, month, 1) + 1;

    Ok(HijriDate {
        year: year as u32,
        month: month as u32,
        day: day as u32,
    })
}

pub fn to_hijri(date: GregorianDate) -> Result<HijriDate, CalendarError> {
    from_jdn(julian_day_number(date))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hijri(y: i32, m: u32, d: u32) -> HijriDate {
        to_hijri(GregorianDate::new(y, m, d).unwrap()).unwrap()
    }

    fn expect(year: u32, month: u32, day: u32) -> HijriDate {
        HijriDate { year, month, day }
    }

    // ============================================================================
    // julian_day_number tests
    // ============================================================================

    #[test]
    fn test_jdn_known_values() {
        let jdn = |y, m, d| julian_day_number(GregorianDate::new(y, m, d).unwrap());
        assert_eq!(jdn(2000, 1, 1), 2_451_545);
        assert_eq!(jdn(1970, 1, 1), 2_440_588);
        assert_eq!(jdn(2024, 3, 11), 2_460_381);
    }

    // ============================================================================
    // to_hijri tests
    // ============================================================================

    #[test]
    fn test_first_of_ramadan_1445() {
        assert_eq!(hijri(2024, 3, 11), expect(1445, 9, 1));
        assert_eq!(hijri(2024, 4, 9), expect(1445, 9, 30));
        assert_eq!(hijri(2024, 4, 10), expect(1445, 10, 1));
    }

    #[test]
    fn test_islamic_new_year_1445() {
        assert_eq!(hijri(2023, 7, 19), expect(1445, 1, 1));
    }

    #[test]
    fn test_historic_dates() {
        assert_eq!(hijri(2000, 1, 1), expect(1420, 9, 24));
        assert_eq!(hijri(1970, 1, 1), expect(1389, 10, 22));
    }

    #[test]
    fn test_last_month_of_year_runs_to_thirty_in_leap_years() {
        assert_eq!(hijri(2024, 7, 7), expect(1445, 12, 30));
        assert_eq!(hijri(2025, 6, 26), expect(1446, 12, 29));
    }

    #[test]
    fn test_day_increases_within_a_month() {
        let mut previous = hijri(2024, 3, 11);
        for day in 12..=31 {
            let current = hijri(2024, 3, day);
            assert_eq!(current.month, previous.month);
            assert!(current.day > previous.day);
            previous = current;
        }
    }

    #[test]
    fn test_before_epoch_is_rejected() {
        let date = GregorianDate::new(600, 1, 1).unwrap();
        assert_eq!(to_hijri(date).unwrap_err(), CalendarError::BeforeEpoch("Hijri"));
    }

    #[test]
    fn test_epoch_is_first_of_muharram_year_one() {
        assert_eq!(from_jdn(ISLAMIC_EPOCH_JDN).unwrap(), expect(1, 1, 1));
    }

    #[test]
    fn test_display_uses_arabic_indic_digits() {
        assert_eq!(hijri(2024, 3, 11).to_string(), "١ رمضان ١٤٤٥ هـ");
        assert_eq!(hijri(2024, 3, 11).month_name(), "Ramadan");
    }
}
