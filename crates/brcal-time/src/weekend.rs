//! `WeekendPolicy` — the weekdays that are never business days.

use crate::weekday::Weekday;

/// A set of weekdays treated as non-business days, stored as a bit mask
/// (bit `n - 1` for ISO ordinal `n`).
///
/// The default is Saturday and Sunday.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct WeekendPolicy {
    mask: u8,
}

impl WeekendPolicy {
    /// Saturday and Sunday.
    pub const SATURDAY_SUNDAY: WeekendPolicy = WeekendPolicy {
        mask: (1 << 5) | (1 << 6),
    };

    /// No weekend at all; every weekday can be a business day.
    pub const NONE: WeekendPolicy = WeekendPolicy { mask: 0 };

    /// Build a policy from the given weekdays. Repeated days are ignored.
    pub fn new(days: impl IntoIterator<Item = Weekday>) -> Self {
        let mask = days
            .into_iter()
            .fold(0u8, |mask, w| mask | Self::bit(w));
        Self { mask }
    }

    fn bit(w: Weekday) -> u8 {
        1 << (w.ordinal() - 1)
    }

    /// Return `true` if `weekday` is a weekend day under this policy.
    pub fn contains(&self, weekday: Weekday) -> bool {
        self.mask & Self::bit(weekday) != 0
    }

    /// Number of weekend days per week.
    pub fn len(&self) -> usize {
        self.mask.count_ones() as usize
    }

    /// Return `true` if no weekday is excluded.
    pub fn is_empty(&self) -> bool {
        self.mask == 0
    }

    /// Return `true` for the Saturday/Sunday policy.
    pub fn is_saturday_sunday(&self) -> bool {
        *self == Self::SATURDAY_SUNDAY
    }

    /// The weekend days, Monday first.
    pub fn days(&self) -> impl Iterator<Item = Weekday> + '_ {
        Weekday::ALL.into_iter().filter(move |w| self.contains(*w))
    }
}

impl Default for WeekendPolicy {
    fn default() -> Self {
        Self::SATURDAY_SUNDAY
    }
}

impl std::fmt::Debug for WeekendPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.days()).finish()
    }
}

impl FromIterator<Weekday> for WeekendPolicy {
    fn from_iter<I: IntoIterator<Item = Weekday>>(iter: I) -> Self {
        Self::new(iter)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for WeekendPolicy {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.days())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for WeekendPolicy {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let days = <Vec<Weekday> as serde::Deserialize>::deserialize(deserializer)?;
        Ok(Self::new(days))
    }
}
