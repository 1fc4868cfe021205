//! `Calendar` trait and the business-day engine.
//!
//! A calendar knows its weekend and its listed holidays. Everything else
//! (business-day tests, stepping, counting) is provided on top of those.

use crate::date::Date;
use crate::holiday::HolidaySet;
use crate::weekday::Weekday;
use crate::weekend::WeekendPolicy;
use brcal_core::errors::{Error, Result};
use tracing::trace;

/// A business-day calendar.
pub trait Calendar: std::fmt::Debug + Send + Sync {
    /// Human-readable name (e.g. `"Brazil (National)"`).
    fn name(&self) -> &str;

    /// Weekdays that are never business days.
    fn weekend(&self) -> WeekendPolicy {
        WeekendPolicy::SATURDAY_SUNDAY
    }

    /// Return `true` if `date` is a listed holiday. Weekends are not
    /// holidays unless listed.
    fn is_holiday(&self, date: Date) -> bool;

    /// Number of listed holiday entries falling in `[first, last]`.
    ///
    /// Duplicated entries count once per copy, and holidays on weekend days
    /// are counted too.
    fn holidays_between(&self, first: Date, last: Date) -> usize;

    /// Return `true` if `date` falls on a weekend day of this calendar.
    fn is_weekend(&self, date: Date) -> bool {
        self.weekend().contains(date.weekday())
    }

    /// Return `true` if `date` is neither a weekend day nor a holiday.
    fn is_business_day(&self, date: Date) -> bool {
        !self.is_weekend(date) && !self.is_holiday(date)
    }

    /// Step `n` business days from `date`, forward for positive `n` and
    /// backward for negative `n`.
    ///
    /// `date` itself is never counted, so `n == 0` returns `date` unchanged
    /// even when it is not a business day. For any other `n` the result is
    /// always a business day.
    ///
    /// A calendar whose weekend covers all seven days has no business days;
    /// stepping on it returns `date` unchanged.
    ///
    /// # Panics
    /// If the walk leaves the representable date range.
    fn advance_business_days(&self, mut date: Date, n: i64) -> Date {
        if n == 0 || self.weekend().len() == 7 {
            return date;
        }
        let start = date;
        let step: i64 = n.signum();
        let mut remaining = n.abs();
        while remaining > 0 {
            date += step;
            if self.is_business_day(date) {
                remaining -= 1;
            }
        }
        trace!(calendar = self.name(), %start, n, %date, "advanced business days");
        date
    }

    /// Count the business days in `[first, last]`, both ends included.
    ///
    /// Weekend days are counted analytically. Every listed holiday in the
    /// range is then subtracted once, including holidays that already fall
    /// on a weekend and repeated entries, so the result can drop to zero or
    /// below for holiday-heavy inputs. It is not clamped.
    ///
    /// # Errors
    /// [`Error::InvalidRange`] if `first > last`.
    fn business_days_until(&self, first: Date, last: Date) -> Result<i64> {
        if first > last {
            return Err(Error::invalid_range(first, last));
        }
        let total = last - first + 1;
        let weekend_days = weekend_days_between(first, last, self.weekend());
        let holidays = self.holidays_between(first, last) as i64;
        let count = total - weekend_days - holidays;
        trace!(
            calendar = self.name(),
            %first,
            %last,
            weekend_days,
            holidays,
            count,
            "counted business days"
        );
        Ok(count)
    }
}

/// Number of days in `[first, last]` falling on a weekend day of `policy`.
///
/// Whole weeks contribute `policy.len()` days each; the partial week left
/// over is inspected by weekday position, so the cost does not depend on
/// the length of the range. Returns 0 when `first > last`.
pub fn weekend_days_between(first: Date, last: Date, policy: WeekendPolicy) -> i64 {
    if first > last {
        return 0;
    }
    let total = last - first + 1;
    let full_weeks = total / 7;
    let remainder = total % 7;
    let partial = if remainder == 0 {
        0
    } else if policy.is_saturday_sunday() {
        saturday_sunday_in_partial_week(first.weekday(), last.weekday())
    } else {
        std::iter::successors(Some(first.weekday()), |w| Some(w.succ()))
            .take(remainder as usize)
            .filter(|w| policy.contains(*w))
            .count() as i64
    };
    full_weeks * policy.len() as i64 + partial
}

/// Saturdays and Sundays in a window of fewer than seven days running from
/// weekday `first` to weekday `last`.
///
/// Positions follow the ISO ordinal (Monday = 1 … Sunday = 7); `last` is
/// shifted a week ahead when the window wraps past Sunday.
fn saturday_sunday_in_partial_week(first: Weekday, last: Weekday) -> i64 {
    let first_pos = first.ordinal() as i64;
    let mut last_pos = last.ordinal() as i64;
    if last_pos < first_pos {
        last_pos += 7;
    }
    if first_pos <= 6 {
        if last_pos >= 7 {
            // Saturday and Sunday
            2
        } else if last_pos >= 6 {
            // Saturday only
            1
        } else {
            0
        }
    } else if last_pos >= 7 {
        // Starts on Sunday
        1
    } else {
        0
    }
}

/// A calendar that treats only Saturdays and Sundays as non-business days,
/// with no holidays.
#[derive(Debug, Clone, Copy, Default)]
pub struct WeekendsOnly;

impl Calendar for WeekendsOnly {
    fn name(&self) -> &str {
        "Weekends Only"
    }

    fn is_holiday(&self, _date: Date) -> bool {
        false
    }

    fn holidays_between(&self, _first: Date, _last: Date) -> usize {
        0
    }
}

/// A bare holiday list is a calendar with the Saturday/Sunday weekend.
impl Calendar for HolidaySet {
    fn name(&self) -> &str {
        "Custom"
    }

    fn is_holiday(&self, date: Date) -> bool {
        self.contains(date)
    }

    fn holidays_between(&self, first: Date, last: Date) -> usize {
        self.count_between(first, last)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    /// Day-by-day reference for the analytic weekend count.
    fn weekend_days_naive(first: Date, last: Date, policy: WeekendPolicy) -> i64 {
        first
            .each_day(last)
            .filter(|d| policy.contains(d.weekday()))
            .count() as i64
    }

    #[test]
    fn weekends_only_saturday() {
        let cal = WeekendsOnly;
        // 2023-09-02 is a Saturday
        assert!(!cal.is_business_day(date(2023, 9, 2)));
        assert!(cal.is_business_day(date(2023, 9, 4)));
        assert!(!cal.is_holiday(date(2023, 9, 2)));
        assert!(cal.is_weekend(date(2023, 9, 3)));
    }

    #[test]
    fn advance_forward_skips_weekend() {
        let cal = WeekendsOnly;
        // Friday 2023-09-01 + 1 → Monday 2023-09-04
        assert_eq!(cal.advance_business_days(date(2023, 9, 1), 1), date(2023, 9, 4));
    }

    #[test]
    fn advance_backward_skips_weekend() {
        let cal = WeekendsOnly;
        assert_eq!(cal.advance_business_days(date(2023, 9, 4), -1), date(2023, 9, 1));
    }

    #[test]
    fn advance_zero_is_identity_on_weekend() {
        let cal = WeekendsOnly;
        let sat = date(2023, 9, 2);
        assert_eq!(cal.advance_business_days(sat, 0), sat);
    }

    #[test]
    fn advance_from_weekend_lands_on_business_day() {
        let cal = WeekendsOnly;
        let sat = date(2023, 9, 2);
        assert_eq!(cal.advance_business_days(sat, 1), date(2023, 9, 4));
        assert_eq!(cal.advance_business_days(sat, -1), date(2023, 9, 1));
    }

    #[test]
    fn all_week_weekend_does_not_hang() {
        #[derive(Debug)]
        struct NeverOpen;
        impl Calendar for NeverOpen {
            fn name(&self) -> &str {
                "Never Open"
            }
            fn weekend(&self) -> WeekendPolicy {
                WeekendPolicy::new(Weekday::ALL)
            }
            fn is_holiday(&self, _date: Date) -> bool {
                false
            }
            fn holidays_between(&self, _first: Date, _last: Date) -> usize {
                0
            }
        }
        let d = date(2023, 9, 4);
        assert_eq!(NeverOpen.advance_business_days(d, 5), d);
        assert_eq!(NeverOpen.business_days_until(d, d + 13).unwrap(), 0);
    }

    #[test]
    fn count_full_week() {
        // 2017-01-01 (Sunday) to 2017-01-07 (Saturday)
        let cal = WeekendsOnly;
        assert_eq!(cal.business_days_until(date(2017, 1, 1), date(2017, 1, 7)).unwrap(), 5);
    }

    #[test]
    fn count_single_days() {
        let cal = WeekendsOnly;
        let mon = date(2023, 9, 4);
        let sat = date(2023, 9, 2);
        assert_eq!(cal.business_days_until(mon, mon).unwrap(), 1);
        assert_eq!(cal.business_days_until(sat, sat).unwrap(), 0);
    }

    #[test]
    fn count_rejects_reversed_range() {
        let cal = WeekendsOnly;
        let err = cal
            .business_days_until(date(2017, 1, 7), date(2017, 1, 1))
            .unwrap_err();
        assert!(matches!(err, Error::InvalidRange { .. }));
    }

    #[test]
    fn count_subtracts_weekend_holidays_and_duplicates() {
        // 2017-01-07 is a Saturday; listing it still subtracts one.
        let sat = date(2017, 1, 7);
        let mon = date(2017, 1, 9);
        let set: HolidaySet = vec![sat, mon, mon].into();
        let count = set.business_days_until(date(2017, 1, 2), date(2017, 1, 13)).unwrap();
        assert_eq!(count, 10 - 3);
    }

    #[test]
    fn count_can_go_negative() {
        let sun = date(2017, 1, 1);
        let set: HolidaySet = vec![sun, sun].into();
        assert_eq!(set.business_days_until(sun, sun).unwrap(), -2);
    }

    #[test]
    fn partial_week_positions() {
        use Weekday::*;
        assert_eq!(saturday_sunday_in_partial_week(Monday, Friday), 0);
        assert_eq!(saturday_sunday_in_partial_week(Monday, Saturday), 1);
        assert_eq!(saturday_sunday_in_partial_week(Friday, Sunday), 2);
        assert_eq!(saturday_sunday_in_partial_week(Friday, Tuesday), 2);
        assert_eq!(saturday_sunday_in_partial_week(Saturday, Saturday), 1);
        assert_eq!(saturday_sunday_in_partial_week(Sunday, Sunday), 1);
        assert_eq!(saturday_sunday_in_partial_week(Sunday, Friday), 1);
    }

    #[test]
    fn analytic_weekend_count_matches_naive() {
        let policies = [
            WeekendPolicy::SATURDAY_SUNDAY,
            WeekendPolicy::new([Weekday::Friday, Weekday::Saturday]),
            WeekendPolicy::new([Weekday::Sunday]),
            WeekendPolicy::NONE,
        ];
        let start = date(2017, 1, 1);
        for offset in 0..14 {
            let first = start + offset;
            for len in 0..30 {
                let last = first + len;
                for policy in policies {
                    assert_eq!(
                        weekend_days_between(first, last, policy),
                        weekend_days_naive(first, last, policy),
                        "{first}..={last} {policy:?}"
                    );
                }
            }
        }
    }
}
