//! Lazy, inclusive date and time ranges.
//!
//! Every range is a plain value: cloning it restarts the iteration from the
//! beginning, and the iterators carry no state beyond their bounds.

use crate::date::Date;
use chrono::{Duration, NaiveDateTime};

/// Every calendar day from `from` to `thru`, inclusive.
///
/// Empty when `thru < from`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayRange {
    next: i64,
    last: i64,
}

impl DayRange {
    /// Create the range `[from, thru]`.
    pub fn new(from: Date, thru: Date) -> Self {
        Self {
            next: from.serial(),
            last: thru.serial(),
        }
    }
}

impl Iterator for DayRange {
    type Item = Date;

    fn next(&mut self) -> Option<Date> {
        if self.next > self.last {
            return None;
        }
        let d = Date::from_serial(self.next).ok()?;
        self.next += 1;
        Some(d)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = (self.last - self.next + 1).max(0) as usize;
        (n, Some(n))
    }
}

impl DoubleEndedIterator for DayRange {
    fn next_back(&mut self) -> Option<Date> {
        if self.next > self.last {
            return None;
        }
        let d = Date::from_serial(self.last).ok()?;
        self.last -= 1;
        Some(d)
    }
}

impl ExactSizeIterator for DayRange {}

impl std::iter::FusedIterator for DayRange {}

/// The same day of every month from `from` up to `thru`, inclusive.
///
/// Each element is `from` advanced by a whole number of months, clamped to
/// the end of shorter months, so a range starting on the 31st yields the
/// 31st again whenever the month has one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthRange {
    from: Date,
    thru: Date,
    step: i64,
}

impl MonthRange {
    /// Create the monthly range starting at `from` and ending no later than
    /// `thru`.
    pub fn new(from: Date, thru: Date) -> Self {
        Self { from, thru, step: 0 }
    }
}

impl Iterator for MonthRange {
    type Item = Date;

    fn next(&mut self) -> Option<Date> {
        let d = self.from.add_months(self.step).ok()?;
        if d > self.thru {
            return None;
        }
        self.step += 1;
        Some(d)
    }
}

impl std::iter::FusedIterator for MonthRange {}

/// Every whole hour from `from` to `thru`, inclusive, keeping the minutes
/// and seconds of `from`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HourRange {
    next: Option<NaiveDateTime>,
    thru: NaiveDateTime,
}

impl HourRange {
    /// Create the hourly range `[from, thru]`.
    pub fn new(from: NaiveDateTime, thru: NaiveDateTime) -> Self {
        Self {
            next: Some(from),
            thru,
        }
    }
}

impl Iterator for HourRange {
    type Item = NaiveDateTime;

    fn next(&mut self) -> Option<NaiveDateTime> {
        let current = self.next.filter(|t| *t <= self.thru)?;
        self.next = current.checked_add_signed(Duration::hours(1));
        Some(current)
    }
}

impl std::iter::FusedIterator for HourRange {}

impl Date {
    /// Iterate over every day from `self` to `thru`, inclusive.
    ///
    /// ```
    /// use brcal_time::Date;
    /// let from = Date::from_ymd(2017, 1, 30).unwrap();
    /// let thru = Date::from_ymd(2017, 2, 2).unwrap();
    /// assert_eq!(from.each_day(thru).count(), 4);
    /// ```
    pub fn each_day(self, thru: Date) -> DayRange {
        DayRange::new(self, thru)
    }

    /// Iterate month by month from `self` to `thru`, inclusive.
    pub fn each_month(self, thru: Date) -> MonthRange {
        MonthRange::new(self, thru)
    }
}

/// Iterate hour by hour from `from` to `thru`, inclusive.
pub fn each_hour(from: NaiveDateTime, thru: NaiveDateTime) -> HourRange {
    HourRange::new(from, thru)
}
