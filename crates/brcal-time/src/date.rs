//! `Date` type.
//!
//! Dates are stored as a serial number of days on the proleptic Gregorian
//! calendar. Serial 1 is **January 1, 1900**, a Monday, which keeps the
//! weekday arithmetic a single `rem_euclid`.
//!
//! # Range
//! Any `i32` year is representable, so year-indexed operations such as the
//! Easter computation are total. Arithmetic that would leave the range
//! returns [`Error::Date`].
//!
//! # Time of day
//! `Date` carries no time of day. Converting from [`chrono::NaiveDateTime`]
//! truncates, so equality and ordering only ever see the calendar day.

use crate::weekday::Weekday;
use brcal_core::errors::{Error, Result};
use chrono::{Datelike, NaiveDate, NaiveDateTime};

/// A calendar date represented as a serial number.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date(i64);

/// Serial of 1970-01-01, the epoch of the civil-day conversion below.
const UNIX_EPOCH_SERIAL: i64 = 25_568;

impl Date {
    /// Earliest representable date: January 1 of `i32::MIN`.
    pub const MIN: Date = Date(days_from_civil(i32::MIN as i64, 1, 1) + UNIX_EPOCH_SERIAL);

    /// Latest representable date: December 31 of `i32::MAX`.
    pub const MAX: Date = Date(days_from_civil(i32::MAX as i64, 12, 31) + UNIX_EPOCH_SERIAL);

    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create a date from year, month (1–12), and day-of-month.
    pub fn from_ymd(year: i32, month: u8, day: u8) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(Error::Date(format!("month {month} out of range [1, 12]")));
        }
        let days_in = days_in_month(year, month);
        if day == 0 || day > days_in {
            return Err(Error::Date(format!(
                "day {day} out of range [1, {days_in}] for {year}-{month:02}"
            )));
        }
        Ok(Self::from_ymd_unchecked(year, month, day))
    }

    /// Create a date from components already known to be valid.
    pub(crate) fn from_ymd_unchecked(year: i32, month: u8, day: u8) -> Self {
        debug_assert!(
            (1..=12).contains(&month) && day >= 1 && day <= days_in_month(year, month),
            "invalid date {year}-{month}-{day}"
        );
        Date(days_from_civil(year as i64, month as i64, day as i64) + UNIX_EPOCH_SERIAL)
    }

    /// Create a date from a serial number (1 = 1900-01-01).
    pub fn from_serial(serial: i64) -> Result<Self> {
        let d = Date(serial);
        if d < Self::MIN || d > Self::MAX {
            return Err(Error::Date(format!("serial {serial} out of range")));
        }
        Ok(d)
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Return the serial number.
    pub fn serial(&self) -> i64 {
        self.0
    }

    /// Return the year.
    pub fn year(&self) -> i32 {
        self.ymd().0
    }

    /// Return the month (1–12).
    pub fn month(&self) -> u8 {
        self.ymd().1
    }

    /// Return the day of the month (1–31).
    pub fn day_of_month(&self) -> u8 {
        self.ymd().2
    }

    /// Return `(year, month, day)` in one conversion.
    pub fn ymd(&self) -> (i32, u8, u8) {
        let (y, m, d) = civil_from_days(self.0 - UNIX_EPOCH_SERIAL);
        (y as i32, m as u8, d as u8)
    }

    /// Return the day of the year (1–366).
    pub fn day_of_year(&self) -> u16 {
        let jan1 = Self::from_ymd_unchecked(self.year(), 1, 1);
        (self.0 - jan1.0 + 1) as u16
    }

    /// Return the weekday.
    pub fn weekday(&self) -> Weekday {
        // serial 1 → Monday, serial 2 → Tuesday, …
        let w = ((self.0 - 1).rem_euclid(7) + 1) as u8;
        match Weekday::from_ordinal(w) {
            Some(w) => w,
            None => unreachable!("rem_euclid always in 1..=7"),
        }
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// Advance by `n` days. Returns an error if the result is out of range.
    pub fn add_days(self, n: i64) -> Result<Self> {
        self.0
            .checked_add(n)
            .map(Date)
            .filter(|d| *d >= Self::MIN && *d <= Self::MAX)
            .ok_or_else(|| Error::Date(format!("{self} + {n} days is out of range")))
    }

    /// Advance by `n` months, clamping the day to the end of the target month
    /// (January 31 plus one month is February 28 or 29).
    pub fn add_months(self, n: i64) -> Result<Self> {
        let (y, m, d) = self.ymd();
        let total = y as i64 * 12 + (m as i64 - 1) + n;
        let new_y = i32::try_from(total.div_euclid(12))
            .map_err(|_| Error::Date(format!("{self} + {n} months is out of range")))?;
        let new_m = (total.rem_euclid(12) + 1) as u8;
        let new_d = d.min(days_in_month(new_y, new_m));
        Ok(Self::from_ymd_unchecked(new_y, new_m, new_d))
    }

    /// Return the number of calendar days from `self` to `other`.
    /// Positive if `other > self`.
    pub fn days_between(self, other: Date) -> i64 {
        other.0 - self.0
    }

    /// Return the next date falling on `weekday`, which is `self` when it
    /// already falls on that day.
    ///
    /// ```
    /// use brcal_time::{Date, Weekday};
    /// let wed = Date::from_ymd(2017, 4, 26).unwrap();
    /// assert_eq!(wed.next_weekday(Weekday::Tuesday), Date::from_ymd(2017, 5, 2).unwrap());
    /// assert_eq!(wed.next_weekday(Weekday::Wednesday), wed);
    /// ```
    pub fn next_weekday(self, weekday: Weekday) -> Self {
        self + self.weekday().days_until(weekday) as i64
    }

    // ── chrono interop ───────────────────────────────────────────────────────

    /// Convert to a [`chrono::NaiveDate`], or `None` if the year lies outside
    /// chrono's supported range.
    pub fn to_naive_date(self) -> Option<NaiveDate> {
        let (y, m, d) = self.ymd();
        NaiveDate::from_ymd_opt(y, m as u32, d as u32)
    }
}

impl From<NaiveDate> for Date {
    fn from(d: NaiveDate) -> Self {
        Date::from_ymd_unchecked(d.year(), d.month() as u8, d.day() as u8)
    }
}

impl From<NaiveDateTime> for Date {
    /// Drops the time of day.
    fn from(dt: NaiveDateTime) -> Self {
        Date::from(dt.date())
    }
}

// ── Arithmetic operators ──────────────────────────────────────────────────────

impl std::ops::Add<i64> for Date {
    type Output = Self;
    fn add(self, rhs: i64) -> Self {
        self.add_days(rhs).expect("date addition overflow")
    }
}

impl std::ops::Sub<i64> for Date {
    type Output = Self;
    fn sub(self, rhs: i64) -> Self {
        self.add_days(-rhs).expect("date subtraction underflow")
    }
}

impl std::ops::Sub<Date> for Date {
    type Output = i64;
    fn sub(self, rhs: Date) -> i64 {
        self.0 - rhs.0
    }
}

impl std::ops::AddAssign<i64> for Date {
    fn add_assign(&mut self, rhs: i64) {
        *self = *self + rhs;
    }
}

impl std::ops::SubAssign<i64> for Date {
    fn sub_assign(&mut self, rhs: i64) {
        *self = *self - rhs;
    }
}

// ── Display / parsing ─────────────────────────────────────────────────────────

impl std::fmt::Display for Date {
    /// ISO `YYYY-MM-DD`; negative years carry a leading `-`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (y, m, d) = self.ymd();
        if y < 0 {
            write!(f, "-{:04}-{m:02}-{d:02}", (y as i64).abs())
        } else {
            write!(f, "{y:04}-{m:02}-{d:02}")
        }
    }
}

impl std::fmt::Debug for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Date({self})")
    }
}

impl std::str::FromStr for Date {
    type Err = Error;

    /// Parse an ISO `YYYY-MM-DD` date.
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let (negative, body) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };
        let mut parts = body.splitn(3, '-');
        let bad = || Error::Date(format!("cannot parse {s:?} as YYYY-MM-DD"));
        let year: i64 = parts.next().and_then(|p| p.parse().ok()).ok_or_else(bad)?;
        let year = i32::try_from(if negative { -year } else { year }).map_err(|_| bad())?;
        let month: u8 = parts.next().and_then(|p| p.parse().ok()).ok_or_else(bad)?;
        let day: u8 = parts.next().and_then(|p| p.parse().ok()).ok_or_else(bad)?;
        Date::from_ymd(year, month, day)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Date {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Date {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Whether a given year is a leap year.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a given month/year.
pub fn days_in_month(year: i32, month: u8) -> u8 {
    debug_assert!((1..=12).contains(&month));
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => unreachable!(),
    }
}

/// Days from 1970-01-01 to the given civil date.
///
/// Works in 400-year eras of 146 097 days with the year starting on March 1,
/// so the leap day is always the last day of the shifted year.
const fn days_from_civil(year: i64, month: i64, day: i64) -> i64 {
    let y = if month <= 2 { year - 1 } else { year };
    let era = y.div_euclid(400);
    let yoe = y - era * 400;
    let mp = (month + 9) % 12;
    let doy = (153 * mp + 2) / 5 + day - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146_097 + doe - 719_468
}

/// Inverse of [`days_from_civil`].
fn civil_from_days(days: i64) -> (i64, i64, i64) {
    let z = days + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z - era * 146_097;
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = doy - (153 * mp + 2) / 5 + 1;
    let month = if mp < 10 { mp + 3 } else { mp - 9 };
    let year = yoe + era * 400 + if month <= 2 { 1 } else { 0 };
    (year, month, day)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
