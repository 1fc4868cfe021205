//! Business-day functions over an explicit holiday list.
//!
//! These take any date-like value (`Date`, `chrono::NaiveDate`,
//! `chrono::NaiveDateTime`); time of day is dropped before use. The weekend
//! is Saturday and Sunday. Pass an empty [`HolidaySet`] for a weekend-only
//! check, or [`holidays_for_year`](crate::holidays_for_year) for the
//! national list. For other weekends or a year-aware national list, build a
//! [`BusinessCalendar`](crate::BusinessCalendar).

use crate::calendar::Calendar;
use crate::calendars::brazil::Brazil;
use crate::date::Date;
use crate::holiday::HolidaySet;
use brcal_core::errors::Result;

/// Return `true` if `date` is neither a Saturday, a Sunday, nor listed in
/// `holidays`.
pub fn is_working_day(date: impl Into<Date>, holidays: &HolidaySet) -> bool {
    holidays.is_business_day(date.into())
}

/// Return `true` if `date` is a Saturday or a Sunday.
pub fn is_weekend_day(date: impl Into<Date>) -> bool {
    date.into().weekday().is_weekend()
}

/// Return `true` if `date` is a national holiday of its own year.
pub fn is_national_holiday(date: impl Into<Date>) -> bool {
    Brazil.is_holiday(date.into())
}

/// Step `count` business days from `start`; negative counts step backward.
///
/// `start` is not counted and a zero count returns `start` unchanged.
///
/// ```
/// use brcal_time::{add_work_days, holidays_for_year, Date};
/// let wed = Date::from_ymd(2017, 4, 26).unwrap();
/// // May 1 is Labour Day
/// assert_eq!(add_work_days(wed, 3, &holidays_for_year(2017)), Date::from_ymd(2017, 5, 2).unwrap());
/// ```
///
/// # Panics
/// If the walk would step past [`Date::MIN`] or [`Date::MAX`].
pub fn add_work_days(start: impl Into<Date>, count: i64, holidays: &HolidaySet) -> Date {
    holidays.advance_business_days(start.into(), count)
}

/// Count business days in `[first, last]`, both ends included.
///
/// Each entry of `holidays` inside the range is subtracted, so duplicated
/// entries and holidays on weekends lower the count further; the result is
/// not clamped at zero.
///
/// # Errors
/// [`Error::InvalidRange`](brcal_core::Error::InvalidRange) if `first` is
/// after `last`.
pub fn business_days_until(
    first: impl Into<Date>,
    last: impl Into<Date>,
    holidays: &HolidaySet,
) -> Result<i64> {
    holidays.business_days_until(first.into(), last.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::holidays_for_year;
    use chrono::NaiveDate;

    fn date(y: i32, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn working_day_with_and_without_holidays() {
        let labour_day = date(2017, 5, 1);
        assert!(is_working_day(labour_day, &HolidaySet::new()));
        assert!(!is_working_day(labour_day, &holidays_for_year(2017)));
    }

    #[test]
    fn working_day_ignores_time_of_day() {
        let set: HolidaySet = vec![date(2017, 5, 1)].into();
        let evening = NaiveDate::from_ymd_opt(2017, 5, 1)
            .unwrap()
            .and_hms_opt(18, 30, 0)
            .unwrap();
        assert!(!is_working_day(evening, &set));
    }

    #[test]
    fn weekend_and_national_holiday() {
        assert!(is_weekend_day(date(2017, 1, 1)));
        assert!(!is_weekend_day(date(2017, 1, 2)));
        assert!(is_national_holiday(date(2017, 1, 1)));
        assert!(!is_national_holiday(date(2017, 1, 2)));
    }

    #[test]
    fn add_work_days_over_labour_day() {
        let h = holidays_for_year(2017);
        assert_eq!(add_work_days(date(2017, 4, 26), 3, &h), date(2017, 5, 2));
        assert_eq!(add_work_days(date(2017, 5, 2), -3, &h), date(2017, 4, 26));
    }

    #[test]
    fn add_zero_work_days() {
        let sun = date(2017, 1, 1);
        assert_eq!(add_work_days(sun, 0, &holidays_for_year(2017)), sun);
    }

    #[test]
    fn count_week() {
        assert_eq!(
            business_days_until(date(2017, 1, 1), date(2017, 1, 7), &HolidaySet::new()).unwrap(),
            5
        );
    }

    fn at(y: i32, m: u32, d: u32, hour: u32) -> chrono::NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    #[test]
    fn same_day_evening_to_morning_is_one_day() {
        // Tuesday 18:00 .. Tuesday 08:00 is the same date once truncated
        let set = HolidaySet::new();
        assert_eq!(business_days_until(at(2017, 5, 2, 18), at(2017, 5, 2, 8), &set), Ok(1));
        assert_eq!(
            business_days_until(at(2017, 5, 3, 8), at(2017, 5, 2, 18), &set),
            Err(brcal_core::Error::invalid_range(date(2017, 5, 3), date(2017, 5, 2)))
        );
    }

    #[test]
    fn holiday_listed_with_time_of_day_is_subtracted() {
        let set: HolidaySet = [at(2017, 5, 1, 15)].into_iter().map(Date::from).collect();
        // Mon 2017-05-01 15:00 .. Fri 2017-05-05 09:00
        assert_eq!(business_days_until(at(2017, 5, 1, 15), at(2017, 5, 5, 9), &set), Ok(4));
        assert_eq!(add_work_days(at(2017, 4, 28, 23), 1, &set), date(2017, 5, 2));
    }

    #[test]
    fn count_carnival_week() {
        // Mon 2017-02-27 .. Fri 2017-03-03 with Carnival Tuesday
        let n = business_days_until(date(2017, 2, 27), date(2017, 3, 3), &holidays_for_year(2017))
            .unwrap();
        assert_eq!(n, 4);
    }
}
