//! # brcal-time
//!
//! Date, weekday, Easter, holiday and business-day calendar types.
//!
//! The business-day engine lives on the [`Calendar`] trait. The free
//! functions in [`business_day`] apply it to an explicit [`HolidaySet`];
//! [`BusinessCalendar`] applies it to a [`CalendarConfig`].

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Business-day functions over an explicit holiday list.
pub mod business_day;

/// Calendar trait and the business-day engine.
pub mod calendar;

/// Concrete calendar implementations.
pub mod calendars;

/// Calendar configuration and the configurable calendar.
pub mod config;

/// `Date` type.
pub mod date;

/// Easter Sunday computation.
pub mod easter;

/// Holiday entries and holiday sets.
pub mod holiday;

/// Day, month and hour ranges.
pub mod range;

/// `Weekday` — day of the week.
pub mod weekday;

/// `WeekendPolicy` — non-business weekdays.
pub mod weekend;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use business_day::{
    add_work_days, business_days_until, is_national_holiday, is_weekend_day, is_working_day,
};
pub use calendar::{weekend_days_between, Calendar, WeekendsOnly};
pub use calendars::brazil::{holidays_for_year, Brazil};
pub use config::{BusinessCalendar, CalendarConfig, CalendarConfigBuilder, HolidaySource};
pub use date::Date;
pub use easter::{easter_sunday, easter_sunday_of};
pub use holiday::{HolidayEntry, HolidaySet, Jurisdiction};
pub use range::{each_hour, DayRange, HourRange, MonthRange};
pub use weekday::Weekday;
pub use weekend::WeekendPolicy;
