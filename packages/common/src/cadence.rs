#[cfg(feature = "sea-orm")]
use sea_orm::prelude::StringLen;

use chrono::{DateTime, Duration, Months, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How often a contest repeats.
///
/// When the `sea-orm` feature is enabled, this enum can be compared directly
/// against string cadence columns in SeaORM queries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(
    feature = "sea-orm",
    derive(sea_orm::DeriveActiveEnum, sea_orm::EnumIter),
    sea_orm(rs_type = "String", db_type = "String(StringLen::None)")
)]
#[serde(rename_all = "lowercase")]
pub enum Cadence {
    /// One-time contest; never spawns successors.
    #[cfg_attr(feature = "sea-orm", sea_orm(string_value = "none"))]
    None,
    /// Repeats every day.
    #[cfg_attr(feature = "sea-orm", sea_orm(string_value = "daily"))]
    Daily,
    /// Repeats every 7 days.
    #[cfg_attr(feature = "sea-orm", sea_orm(string_value = "weekly"))]
    Weekly,
    /// Repeats every calendar month, clamped to month end (Jan 31 -> Feb 28).
    #[cfg_attr(feature = "sea-orm", sea_orm(string_value = "monthly"))]
    Monthly,
}

impl Cadence {
    /// All cadences that spawn successor contests.
    pub const RECURRING: &'static [Cadence] = &[Self::Daily, Self::Weekly, Self::Monthly];

    /// All valid cadence values.
    pub const ALL: &'static [Cadence] = &[Self::None, Self::Daily, Self::Weekly, Self::Monthly];

    /// Returns true if this cadence spawns successor contests.
    pub fn is_recurring(&self) -> bool {
        !matches!(self, Self::None)
    }

    /// Returns the string representation (lowercase).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
        }
    }

    /// Shift a timestamp forward by one cadence step.
    ///
    /// Monthly uses calendar-month arithmetic with month-end clamping.
    /// Returns `None` for [`Cadence::None`] or if the shift overflows the
    /// representable time range.
    pub fn step_forward(&self, t: DateTime<Utc>) -> Option<DateTime<Utc>> {
        match self {
            Self::None => None,
            Self::Daily => t.checked_add_signed(Duration::days(1)),
            Self::Weekly => t.checked_add_signed(Duration::days(7)),
            Self::Monthly => t.checked_add_months(Months::new(1)),
        }
    }

    /// Shift a timestamp backward by one cadence step.
    ///
    /// This is the advance window: a recurring contest opens for joining, and
    /// its successor becomes due for generation, one step before start.
    /// Returns `None` for [`Cadence::None`] or on overflow.
    pub fn step_back(&self, t: DateTime<Utc>) -> Option<DateTime<Utc>> {
        match self {
            Self::None => None,
            Self::Daily => t.checked_sub_signed(Duration::days(1)),
            Self::Weekly => t.checked_sub_signed(Duration::days(7)),
            Self::Monthly => t.checked_sub_months(Months::new(1)),
        }
    }

    /// The instant at which the next instance of a contest starting at
    /// `start_time` should be materialized, or `None` for a one-time contest.
    pub fn next_generation_date(&self, start_time: DateTime<Utc>) -> Option<DateTime<Utc>> {
        self.step_back(start_time)
    }
}

impl fmt::Display for Cadence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Default for Cadence {
    fn default() -> Self {
        Self::None
    }
}

/// Error when parsing an invalid cadence string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseCadenceError {
    invalid: String,
}

impl fmt::Display for ParseCadenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Invalid cadence '{}'. Valid values: {}",
            self.invalid,
            Cadence::ALL
                .iter()
                .map(|c| c.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}

impl std::error::Error for ParseCadenceError {}

impl FromStr for Cadence {
    type Err = ParseCadenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(Self::None),
            "daily" => Ok(Self::Daily),
            "weekly" => Ok(Self::Weekly),
            "monthly" => Ok(Self::Monthly),
            _ => Err(ParseCadenceError {
                invalid: s.to_string(),
            }),
        }
    }
}
