//! Brazil (national) calendar.
//!
//! Weekends and the following holidays are observed:
//! * New Year's Day (Jan 1)
//! * Tiradentes Day (Apr 21)
//! * Labour Day (May 1)
//! * Independence Day (Sep 7)
//! * Our Lady of Aparecida (Oct 12)
//! * All Souls' Day (Nov 2)
//! * Republic Day (Nov 15)
//! * Christmas (Dec 25)
//! * Carnival (Easter − 47)
//! * Good Friday (Easter − 2)
//! * Easter Sunday
//! * Corpus Christi (Easter + 60)

use crate::calendar::Calendar;
use crate::date::Date;
use crate::easter::easter_sunday;
use crate::holiday::{HolidayEntry, HolidaySet, Jurisdiction};

/// Holidays on the same month and day every year, as `(month, day, name)`.
const FIXED_HOLIDAYS: [(u8, u8, &str); 8] = [
    (1, 1, "New Year's Day"),
    (4, 21, "Tiradentes Day"),
    (5, 1, "Labour Day"),
    (9, 7, "Independence Day"),
    (10, 12, "Our Lady of Aparecida"),
    (11, 2, "All Souls' Day"),
    (11, 15, "Republic Day"),
    (12, 25, "Christmas Day"),
];

/// Holidays at a fixed offset in days from Easter Sunday.
const EASTER_HOLIDAYS: [(i64, &str); 4] = [
    (0, "Easter Sunday"),
    (-47, "Carnival"),
    (-2, "Good Friday"),
    (60, "Corpus Christi"),
];

/// Name reported by the national calendar.
pub(crate) const NATIONAL_NAME: &str = "Brazil (National)";

/// Brazilian national calendar.
///
/// Each date is checked against the holidays of its own year.
#[derive(Debug, Clone, Copy, Default)]
pub struct Brazil;

impl Brazil {
    /// The national holidays of `year` with their names: the eight fixed
    /// dates first, then the four Easter-based ones.
    pub fn holiday_entries(year: i32) -> Vec<HolidayEntry> {
        let easter = easter_sunday(year);
        let fixed = FIXED_HOLIDAYS.iter().map(|&(m, d, name)| {
            HolidayEntry::with_jurisdiction(
                Date::from_ymd_unchecked(year, m, d),
                name,
                Jurisdiction::Brazil,
            )
        });
        let moving = EASTER_HOLIDAYS.iter().map(|&(offset, name)| {
            HolidayEntry::with_jurisdiction(easter + offset, name, Jurisdiction::Brazil)
        });
        fixed.chain(moving).collect()
    }

    /// The national holiday dates of `year`, always twelve entries. A fixed
    /// and a moving holiday landing on the same day both stay in the set.
    pub fn holidays_for_year(year: i32) -> HolidaySet {
        Self::holiday_entries(year).iter().collect()
    }
}

impl Calendar for Brazil {
    fn name(&self) -> &str {
        NATIONAL_NAME
    }

    fn is_holiday(&self, date: Date) -> bool {
        let (y, m, d) = date.ymd();
        if FIXED_HOLIDAYS.iter().any(|&(hm, hd, _)| hm == m && hd == d) {
            return true;
        }
        let from_easter = date - easter_sunday(y);
        EASTER_HOLIDAYS
            .iter()
            .any(|&(offset, _)| offset == from_easter)
    }

    fn holidays_between(&self, first: Date, last: Date) -> usize {
        if first > last {
            return 0;
        }
        let in_range = |d: &Date| first <= *d && *d <= last;
        (first.year()..=last.year())
            .map(|year| {
                let easter = easter_sunday(year);
                let fixed = FIXED_HOLIDAYS
                    .iter()
                    .map(|&(m, d, _)| Date::from_ymd_unchecked(year, m, d))
                    .filter(in_range)
                    .count();
                let moving = EASTER_HOLIDAYS
                    .iter()
                    .map(|&(offset, _)| easter + offset)
                    .filter(in_range)
                    .count();
                fixed + moving
            })
            .sum()
    }
}

/// The Brazilian national holidays of `year`.
///
/// ```
/// use brcal_time::{holidays_for_year, Date};
/// let h = holidays_for_year(2017);
/// assert_eq!(h.len(), 12);
/// assert!(h.contains(Date::from_ymd(2017, 2, 28).unwrap()));
/// ```
pub fn holidays_for_year(year: i32) -> HolidaySet {
    Brazil::holidays_for_year(year)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn new_years_day() {
        assert!(Brazil.is_holiday(date(2023, 1, 1)));
    }

    #[test]
    fn moving_holidays_2017() {
        // Easter 2017: April 16
        let cal = Brazil;
        assert!(cal.is_holiday(date(2017, 2, 28))); // Carnival
        assert!(cal.is_holiday(date(2017, 4, 14))); // Good Friday
        assert!(cal.is_holiday(date(2017, 4, 16))); // Easter Sunday
        assert!(cal.is_holiday(date(2017, 6, 15))); // Corpus Christi
        assert!(!cal.is_holiday(date(2017, 2, 27)));
    }

    #[test]
    fn tiradentes_day() {
        assert!(!Brazil.is_business_day(date(2023, 4, 21)));
    }

    #[test]
    fn normal_business_day() {
        // 2023-06-15 is a Thursday
        assert!(Brazil.is_business_day(date(2023, 6, 15)));
    }

    #[test]
    fn weekend_is_not_a_holiday() {
        // 2017-01-07 is a Saturday
        assert!(!Brazil.is_holiday(date(2017, 1, 7)));
        assert!(!Brazil.is_business_day(date(2017, 1, 7)));
    }

    #[test]
    fn entries_in_insertion_order() {
        let entries = Brazil::holiday_entries(2017);
        assert_eq!(entries.len(), 12);
        assert_eq!(entries[0].description(), "New Year's Day");
        assert_eq!(entries[8].date(), date(2017, 4, 16));
        assert_eq!(entries[9].date(), date(2017, 2, 28));
        assert_eq!(entries[10].date(), date(2017, 4, 14));
        assert_eq!(entries[11].date(), date(2017, 6, 15));
        assert!(entries.iter().all(|e| e.jurisdiction() == Jurisdiction::Brazil));
    }

    #[test]
    fn holidays_between_spans_years() {
        // Dec 25 2017 and Jan 1 2018
        let n = Brazil.holidays_between(date(2017, 12, 20), date(2018, 1, 5));
        assert_eq!(n, 2);
    }

    #[test]
    fn holidays_between_matches_listed_sets() {
        // 2019: Easter on Tiradentes Day is counted twice
        for (first, last) in [
            (date(2019, 1, 1), date(2019, 12, 31)),
            (date(2019, 4, 21), date(2019, 4, 21)),
            (date(2016, 11, 20), date(2020, 3, 1)),
        ] {
            let listed: usize = (first.year()..=last.year())
                .map(|y| holidays_for_year(y).count_between(first, last))
                .sum();
            assert_eq!(Brazil.holidays_between(first, last), listed, "{first}..{last}");
        }
        assert_eq!(Brazil.holidays_between(date(2019, 4, 21), date(2019, 4, 21)), 2);
        assert_eq!(Brazil.holidays_between(date(2019, 2, 1), date(2019, 1, 1)), 0);
    }

    #[test]
    fn agrees_with_holiday_set() {
        let cal = Brazil;
        let set = holidays_for_year(2024);
        for d in date(2024, 1, 1).each_day(date(2024, 12, 31)) {
            assert_eq!(cal.is_holiday(d), set.contains(d), "{d}");
        }
    }
}
