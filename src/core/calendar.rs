//! TARGET2 business-day calendar for direct-debit collection dates.

use chrono::{Datelike, Days, NaiveDate, Weekday};

/// Easter Sunday of the given Gregorian year (anonymous Gregorian algorithm).
pub fn easter_sunday(year: i32) -> NaiveDate {
    let a = year.rem_euclid(19);
    let b = year.div_euclid(100);
    let c = year.rem_euclid(100);
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let month = (h + l - 7 * m + 114) / 31;
    let day = (h + l - 7 * m + 114) % 31 + 1;
    // month is 3 or 4 and day 1..=31 for every year
    NaiveDate::from_ymd_opt(year, month as u32, day as u32).unwrap_or_default()
}

/// TARGET2 closing day: New Year, Good Friday, Easter Monday, 1 May, 25 and 26 December.
pub fn is_target2_holiday(date: NaiveDate) -> bool {
    match (date.month(), date.day()) {
        (1, 1) | (5, 1) | (12, 25) | (12, 26) => return true,
        _ => {}
    }
    let easter = easter_sunday(date.year());
    date == easter - Days::new(2) || date == easter + Days::new(1)
}

/// Monday to Friday and not a TARGET2 closing day.
pub fn is_business_day(date: NaiveDate) -> bool {
    !matches!(date.weekday(), Weekday::Sat | Weekday::Sun) && !is_target2_holiday(date)
}

/// Date that lies `days` business days after `start`. `start` itself is never counted.
pub fn calc_collection_date(days: u32, start: NaiveDate) -> NaiveDate {
    let mut date = start;
    let mut counted = 0;
    while counted < days {
        date = date + Days::new(1);
        if is_business_day(date) {
            counted += 1;
        }
    }
    date
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn easter_dates() {
        assert_eq!(easter_sunday(2019), date(2019, 4, 21));
        assert_eq!(easter_sunday(2020), date(2020, 4, 12));
        assert_eq!(easter_sunday(2024), date(2024, 3, 31));
        assert_eq!(easter_sunday(2025), date(2025, 4, 20));
        assert_eq!(easter_sunday(2026), date(2026, 4, 5));
        assert_eq!(easter_sunday(2038), date(2038, 4, 25));
        assert_eq!(easter_sunday(2285), date(2285, 3, 22));
    }

    #[test]
    fn holidays() {
        assert!(is_target2_holiday(date(2024, 1, 1)));
        assert!(is_target2_holiday(date(2024, 3, 29)));
        assert!(is_target2_holiday(date(2024, 4, 1)));
        assert!(is_target2_holiday(date(2024, 5, 1)));
        assert!(is_target2_holiday(date(2024, 12, 25)));
        assert!(is_target2_holiday(date(2024, 12, 26)));
        assert!(!is_target2_holiday(date(2024, 12, 24)));
        assert!(!is_target2_holiday(date(2024, 3, 31)));
    }

    #[test]
    fn weekends_are_not_business_days() {
        assert!(!is_business_day(date(2024, 6, 15)));
        assert!(!is_business_day(date(2024, 6, 16)));
        assert!(is_business_day(date(2024, 6, 17)));
    }

    #[test]
    fn collection_skips_christmas() {
        // Fri 20 Dec: Mon 23, Tue 24, (25, 26 closed), Fri 27
        assert_eq!(calc_collection_date(3, date(2024, 12, 20)), date(2024, 12, 27));
    }

    #[test]
    fn collection_skips_easter() {
        // Thu 28 Mar 2024: (Good Friday, weekend, Easter Monday), Tue 2 Apr ...
        assert_eq!(calc_collection_date(1, date(2024, 3, 28)), date(2024, 4, 2));
        assert_eq!(calc_collection_date(6, date(2024, 3, 28)), date(2024, 4, 9));
    }

    #[test]
    fn zero_days_is_start() {
        assert_eq!(calc_collection_date(0, date(2024, 6, 15)), date(2024, 6, 15));
    }
}
