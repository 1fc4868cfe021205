//! Easter Sunday (Gregorian computus with century corrections).
//!
//! The date comes from Gauss's modular formula. Two constants `x` and `y`
//! shift with the century to track the drift between the lunar cycle and
//! the Gregorian leap-year rule; they are kept in [`CORRECTIONS`] and
//! searched in range order.
//!
//! Only the April 26 case (`d = 29, e = 6`) is moved back to April 19, so
//! every result lands between March 22 and April 25. Where Gauss would also
//! move `d = 28, e = 6` to April 18 (1954, 2049) the plain April 25 date is
//! kept. Gregorian years use the tabulated brackets as they stand. Years before 1582 and after 2299 fall
//! back to the 1900–2099 constants and should be treated as best effort.

use crate::date::Date;
use tracing::debug;

/// One row of the century correction table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EasterCorrection {
    /// First year covered by this row.
    pub first_year: i32,
    /// Last year covered by this row (inclusive).
    pub last_year: i32,
    /// Epact shift added to `19a`.
    pub x: i32,
    /// Weekday shift added to the Sunday search.
    pub y: i32,
}

impl EasterCorrection {
    const fn new(first_year: i32, last_year: i32, x: i32, y: i32) -> Self {
        Self {
            first_year,
            last_year,
            x,
            y,
        }
    }

    /// Return `true` if `year` falls inside this row.
    pub fn covers(&self, year: i32) -> bool {
        (self.first_year..=self.last_year).contains(&year)
    }
}

/// Century correction table, in ascending year order.
pub const CORRECTIONS: [EasterCorrection; 6] = [
    EasterCorrection::new(1582, 1699, 22, 2),
    EasterCorrection::new(1700, 1799, 23, 3),
    EasterCorrection::new(1800, 1899, 24, 4),
    EasterCorrection::new(1900, 2099, 24, 5),
    EasterCorrection::new(2100, 2199, 24, 6),
    EasterCorrection::new(2200, 2299, 25, 7),
];

/// Constants used for years no row covers.
pub const FALLBACK_CORRECTION: (i32, i32) = (24, 5);

/// Return the `(x, y)` constants for `year`.
pub fn correction_for(year: i32) -> (i32, i32) {
    match CORRECTIONS.iter().find(|row| row.covers(year)) {
        Some(row) => (row.x, row.y),
        None => {
            debug!(year, "year outside the Easter correction table, using fallback constants");
            FALLBACK_CORRECTION
        }
    }
}

/// Return `true` if `year` has its own row in [`CORRECTIONS`].
pub fn is_within_tabulated_range(year: i32) -> bool {
    CORRECTIONS.iter().any(|row| row.covers(year))
}

/// Return the date of Easter Sunday in `year`.
///
/// Total over every `i32`; see the module docs for the accuracy window.
///
/// ```
/// use brcal_time::{easter_sunday, Date};
/// assert_eq!(easter_sunday(2017), Date::from_ymd(2017, 4, 16).unwrap());
/// ```
pub fn easter_sunday(year: i32) -> Date {
    let (x, y) = correction_for(year);
    let a = year.rem_euclid(19);
    let b = year.rem_euclid(4);
    let c = year.rem_euclid(7);
    let d = (19 * a + x) % 30;
    let e = (2 * b + 4 * c + 6 * d + y) % 7;

    // d + e = 35 would give April 26; Gauss pulls it back one week.
    if d == 29 && e == 6 {
        return Date::from_ymd_unchecked(year, 4, 19);
    }

    if d + e > 9 {
        Date::from_ymd_unchecked(year, 4, (d + e - 9) as u8)
    } else {
        Date::from_ymd_unchecked(year, 3, (d + e + 22) as u8)
    }
}

/// Easter Sunday of the year `date` falls in.
pub fn easter_sunday_of(date: Date) -> Date {
    easter_sunday(date.year())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::weekday::Weekday;

    fn date(y: i32, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn known_dates() {
        assert_eq!(easter_sunday(2017), date(2017, 4, 16));
        assert_eq!(easter_sunday(2000), date(2000, 4, 23));
        assert_eq!(easter_sunday(2008), date(2008, 3, 23));
        assert_eq!(easter_sunday(2011), date(2011, 4, 24));
        assert_eq!(easter_sunday(2024), date(2024, 3, 31));
        assert_eq!(easter_sunday(2025), date(2025, 4, 20));
    }

    #[test]
    fn gauss_exceptions() {
        // d = 29, e = 6
        assert_eq!(easter_sunday(1981), date(1981, 4, 19));
        assert_eq!(easter_sunday(2076), date(2076, 4, 19));
    }

    #[test]
    fn april_25_is_kept() {
        // d = 28, e = 6 stays on the plain formula's date
        assert_eq!(easter_sunday(1954), date(1954, 4, 25));
        assert_eq!(easter_sunday(2049), date(2049, 4, 25));
    }

    #[test]
    fn table_lookup() {
        assert_eq!(correction_for(1582), (22, 2));
        assert_eq!(correction_for(1799), (23, 3));
        assert_eq!(correction_for(2150), (24, 6));
        assert_eq!(correction_for(2299), (25, 7));
        assert_eq!(correction_for(1000), FALLBACK_CORRECTION);
        assert_eq!(correction_for(3000), FALLBACK_CORRECTION);
        assert!(is_within_tabulated_range(2017));
        assert!(!is_within_tabulated_range(1581));
    }

    #[test]
    fn table_is_ordered_and_contiguous() {
        for pair in CORRECTIONS.windows(2) {
            assert_eq!(pair[0].last_year + 1, pair[1].first_year);
        }
    }

    #[test]
    fn later_centuries_are_sundays() {
        for year in 2100..=2299 {
            assert_eq!(easter_sunday(year).weekday(), Weekday::Sunday, "{year}");
        }
    }

    #[test]
    fn out_of_window_years_still_produce_dates() {
        for year in [i32::MIN, -1, 0, 1000, 9999, i32::MAX] {
            let e = easter_sunday(year);
            assert_eq!(e.year(), year);
            assert!(matches!(e.month(), 3 | 4));
        }
    }

    #[test]
    fn easter_of_date_uses_its_year() {
        assert_eq!(easter_sunday_of(date(2017, 12, 31)), date(2017, 4, 16));
    }
}
