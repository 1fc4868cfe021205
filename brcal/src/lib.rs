//! # brcal
//!
//! Brazilian national holidays and business-day arithmetic.
//!
//! This crate is a façade that re-exports the public items of the
//! workspace crates. Application code should depend on this crate rather
//! than on the individual `brcal-*` crates.
//!
//! ## Quick start
//!
//! ```rust
//! use brcal::prelude::*;
//!
//! let wed = Date::from_ymd(2017, 4, 26).unwrap();
//! let holidays = holidays_for_year(2017);
//!
//! // May 1 is Labour Day
//! assert_eq!(add_work_days(wed, 3, &holidays), Date::from_ymd(2017, 5, 2).unwrap());
//! assert_eq!(
//!     business_days_until(
//!         Date::from_ymd(2017, 1, 1).unwrap(),
//!         Date::from_ymd(2017, 1, 7).unwrap(),
//!         &HolidaySet::new(),
//!     ),
//!     Ok(5)
//! );
//!
//! // The national calendar looks up each date's own year.
//! let cal = BusinessCalendar::national();
//! assert!(!cal.is_business_day(Date::from_ymd(2018, 2, 13).unwrap()));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error definitions.
pub use brcal_core as core;

/// Dates, Easter, holidays and calendars.
pub use brcal_time as time;

pub use brcal_core::{Error, Result};

/// The items most applications need.
pub mod prelude {
    pub use brcal_core::{Error, Result};
    pub use brcal_time::{
        add_work_days, business_days_until, each_hour, easter_sunday, easter_sunday_of,
        holidays_for_year, is_national_holiday, is_weekend_day, is_working_day, Brazil,
        BusinessCalendar, Calendar, CalendarConfig, Date, HolidayEntry, HolidaySet,
        HolidaySource, Jurisdiction, Weekday, WeekendPolicy, WeekendsOnly,
    };
}
