//! Calendar configuration.
//!
//! [`CalendarConfig`] is the one place where the holiday list and the
//! weekend are chosen. Its defaults reproduce the national calendar:
//! Brazilian holidays and a Saturday/Sunday weekend.
//!
//! ```
//! use brcal_time::{Calendar, CalendarConfig, Date, HolidaySet, Weekday};
//!
//! let cal = CalendarConfig::builder()
//!     .holidays(HolidaySet::new())
//!     .weekend([Weekday::Friday, Weekday::Saturday])
//!     .build()
//!     .unwrap();
//! // 2017-01-06 is a Friday
//! assert!(!cal.is_business_day(Date::from_ymd(2017, 1, 6).unwrap()));
//! assert!(cal.is_business_day(Date::from_ymd(2017, 1, 8).unwrap()));
//! ```

use crate::calendar::Calendar;
use crate::calendars::brazil::{Brazil, NATIONAL_NAME};
use crate::date::Date;
use crate::holiday::HolidaySet;
use crate::weekday::Weekday;
use crate::weekend::WeekendPolicy;
use brcal_core::ensure;
use brcal_core::errors::Result;
use tracing::debug;

/// Where a calendar takes its holidays from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum HolidaySource {
    /// The Brazilian national holidays of whichever year is being looked at.
    #[default]
    National,
    /// A caller-supplied list, used as given for every year.
    Custom(HolidaySet),
}

/// Holiday list and weekend for a [`BusinessCalendar`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CalendarConfig {
    /// Holidays observed by the calendar.
    pub holidays: HolidaySource,
    /// Weekdays that are never business days.
    pub weekend: WeekendPolicy,
}

impl CalendarConfig {
    /// Start building a configuration from the defaults.
    pub fn builder() -> CalendarConfigBuilder {
        CalendarConfigBuilder::default()
    }

    /// Check the configuration describes a calendar with business days.
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.weekend.len() < 7,
            "weekend policy {:?} leaves no business days",
            self.weekend
        );
        Ok(())
    }
}

/// Builder for [`CalendarConfig`] and [`BusinessCalendar`].
#[derive(Debug, Clone, Default)]
pub struct CalendarConfigBuilder {
    config: CalendarConfig,
}

impl CalendarConfigBuilder {
    /// Use the national holidays (the default).
    pub fn national_holidays(mut self) -> Self {
        self.config.holidays = HolidaySource::National;
        self
    }

    /// Use a caller-supplied holiday list. An empty list gives a
    /// weekend-only calendar.
    pub fn holidays(mut self, holidays: impl Into<HolidaySet>) -> Self {
        self.config.holidays = HolidaySource::Custom(holidays.into());
        self
    }

    /// Set the weekend days.
    pub fn weekend(mut self, days: impl IntoIterator<Item = Weekday>) -> Self {
        self.config.weekend = WeekendPolicy::new(days);
        self
    }

    /// Set the weekend policy.
    pub fn weekend_policy(mut self, policy: WeekendPolicy) -> Self {
        self.config.weekend = policy;
        self
    }

    /// Validate and return the configuration.
    pub fn finish(self) -> Result<CalendarConfig> {
        self.config.validate()?;
        Ok(self.config)
    }

    /// Validate and build the calendar.
    pub fn build(self) -> Result<BusinessCalendar> {
        BusinessCalendar::new(self.finish()?)
    }
}

/// A calendar driven by a [`CalendarConfig`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusinessCalendar {
    config: CalendarConfig,
}

impl BusinessCalendar {
    /// Build a calendar from a configuration.
    pub fn new(config: CalendarConfig) -> Result<Self> {
        config.validate()?;
        debug!(
            national = matches!(config.holidays, HolidaySource::National),
            weekend = ?config.weekend,
            "built business calendar"
        );
        Ok(Self { config })
    }

    /// The national calendar.
    pub fn national() -> Self {
        Self {
            config: CalendarConfig::default(),
        }
    }

    /// The configuration this calendar was built from.
    pub fn config(&self) -> &CalendarConfig {
        &self.config
    }
}

impl Default for BusinessCalendar {
    fn default() -> Self {
        Self::national()
    }
}

impl Calendar for BusinessCalendar {
    fn name(&self) -> &str {
        match self.config.holidays {
            HolidaySource::National => NATIONAL_NAME,
            HolidaySource::Custom(_) => "Custom",
        }
    }

    fn weekend(&self) -> WeekendPolicy {
        self.config.weekend
    }

    fn is_holiday(&self, date: Date) -> bool {
        match &self.config.holidays {
            HolidaySource::National => Brazil.is_holiday(date),
            HolidaySource::Custom(set) => set.contains(date),
        }
    }

    fn holidays_between(&self, first: Date, last: Date) -> usize {
        match &self.config.holidays {
            HolidaySource::National => Brazil.holidays_between(first, last),
            HolidaySource::Custom(set) => set.count_between(first, last),
        }
    }
}
