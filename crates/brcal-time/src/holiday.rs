//! Holiday entries and holiday sets.

use crate::date::Date;
use brcal_core::errors::{Error, Result};
use brcal_core::fail;

/// Jurisdiction a holiday belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Jurisdiction {
    /// Brazilian national holidays.
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "BR"))]
    Brazil,
}

impl Jurisdiction {
    /// ISO 3166-1 alpha-2 country code.
    pub fn code(&self) -> &'static str {
        match self {
            Jurisdiction::Brazil => "BR",
        }
    }
}

impl std::fmt::Display for Jurisdiction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl std::str::FromStr for Jurisdiction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "BR" => Ok(Jurisdiction::Brazil),
            _ => fail!("unknown jurisdiction {s:?}"),
        }
    }
}

/// A labelled holiday.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HolidayEntry {
    date: Date,
    description: String,
    jurisdiction: Jurisdiction,
}

impl HolidayEntry {
    /// Create an entry in the default jurisdiction.
    pub fn new(date: Date, description: impl Into<String>) -> Self {
        Self::with_jurisdiction(date, description, Jurisdiction::default())
    }

    /// Create an entry in an explicit jurisdiction.
    pub fn with_jurisdiction(
        date: Date,
        description: impl Into<String>,
        jurisdiction: Jurisdiction,
    ) -> Self {
        Self {
            date,
            description: description.into(),
            jurisdiction,
        }
    }

    /// The day of the holiday.
    pub fn date(&self) -> Date {
        self.date
    }

    /// Human-readable name.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Jurisdiction observing this holiday.
    pub fn jurisdiction(&self) -> Jurisdiction {
        self.jurisdiction
    }
}

/// An ordered collection of holiday dates.
///
/// Only membership matters to the business-day functions. Duplicates are
/// kept as given; [`count_between`](Self::count_between) counts each copy.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct HolidaySet {
    dates: Vec<Date>,
}

impl HolidaySet {
    /// Create an empty set. Business-day functions given an empty set apply
    /// the weekend rule only.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a date.
    pub fn push(&mut self, date: Date) {
        self.dates.push(date);
    }

    /// Return `true` if `date` is listed.
    pub fn contains(&self, date: Date) -> bool {
        self.dates.contains(&date)
    }

    /// Number of listed entries falling in `[first, last]`, duplicates
    /// included.
    pub fn count_between(&self, first: Date, last: Date) -> usize {
        self.dates
            .iter()
            .filter(|d| first <= **d && **d <= last)
            .count()
    }

    /// The entries in insertion order.
    pub fn dates(&self) -> &[Date] {
        &self.dates
    }

    /// Iterate over the entries in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Date> {
        self.dates.iter()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Return `true` if there are no entries.
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}

impl From<Vec<Date>> for HolidaySet {
    fn from(dates: Vec<Date>) -> Self {
        Self { dates }
    }
}

impl FromIterator<Date> for HolidaySet {
    fn from_iter<I: IntoIterator<Item = Date>>(iter: I) -> Self {
        Self {
            dates: iter.into_iter().collect(),
        }
    }
}

impl Extend<Date> for HolidaySet {
    fn extend<I: IntoIterator<Item = Date>>(&mut self, iter: I) {
        self.dates.extend(iter);
    }
}

impl<'a> FromIterator<&'a HolidayEntry> for HolidaySet {
    fn from_iter<I: IntoIterator<Item = &'a HolidayEntry>>(iter: I) -> Self {
        iter.into_iter().map(HolidayEntry::date).collect()
    }
}

impl<'a> IntoIterator for &'a HolidaySet {
    type Item = &'a Date;
    type IntoIter = std::slice::Iter<'a, Date>;

    fn into_iter(self) -> Self::IntoIter {
        self.dates.iter()
    }
}

impl IntoIterator for HolidaySet {
    type Item = Date;
    type IntoIter = std::vec::IntoIter<Date>;

    fn into_iter(self) -> Self::IntoIter {
        self.dates.into_iter()
    }
}
