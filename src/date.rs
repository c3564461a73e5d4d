//! Day-precision calendar date used for bounds, selection and grid cells.

use std::cmp::Ordering;
use std::str::FromStr;

use chrono::Datelike;
use serde::{Deserialize, Serialize};

use crate::bounds::ConfigError;
use crate::locale::Locale;
use crate::prelude::*;
use crate::types::{Day, Month, Year};
use crate::{MONTHS_PER_YEAR, ParseError, PartialDate};

/// Calendar unit a date can be truncated to, extended to, or compared at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Unit {
    #[display(fmt = "day")]
    Day,
    #[display(fmt = "month")]
    Month,
    #[display(fmt = "year")]
    Year,
}

impl FromStr for Unit {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "day" => Ok(Self::Day),
            "month" => Ok(Self::Month),
            "year" => Ok(Self::Year),
            other => Err(ConfigError::UnknownUnit(other.to_owned())),
        }
    }
}

/// A concrete calendar date at day precision.
///
/// Values are plain `Copy` data: every operation returns a new date and
/// comparisons only ever look at the three fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}-{:02}-{:02}", "year.get()", "month.get()", "day.get()")]
pub struct DateValue {
    year:  Year,
    month: Month,
    day:   Day,
}

impl DateValue {
    /// Creates a date from its components.
    ///
    /// # Errors
    /// Returns a `ParseError` if any component is out of range for the calendar.
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self, ParseError> {
        Ok(Self {
            year:  Year::new(year)?,
            month: Month::new(month)?,
            day:   Day::new(day, year, month)?,
        })
    }

    /// First day of the given month.
    pub const fn first_of(year: Year, month: Month) -> Self {
        Self {
            year,
            month,
            day: Day::FIRST,
        }
    }

    /// Date from typed parts, pulling a day past the month's end back onto it.
    pub const fn from_parts_clamped(year: Year, month: Month, day: Day) -> Self {
        Self {
            year,
            month,
            day: day.clamped_to(year, month),
        }
    }

    /// Today's date on the local wall clock.
    ///
    /// # Errors
    /// Returns a `ParseError` if the system clock reports a year outside `1..=9999`.
    pub fn today() -> Result<Self, ParseError> {
        Self::from_naive(chrono::Local::now().date_naive())
    }

    /// Converts a `chrono` date.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidYear` for years `chrono` can hold but this type can't.
    pub fn from_naive(date: chrono::NaiveDate) -> Result<Self, ParseError> {
        let year = u16::try_from(date.year()).map_err(|_| ParseError::InvalidYear(0))?;
        // month and day always fit in u8 for a valid NaiveDate
        let month = u8::try_from(date.month()).map_err(|_| ParseError::InvalidMonth(0))?;
        let day = u8::try_from(date.day()).map_err(|_| ParseError::InvalidFormat(date.to_string()))?;
        Self::new(year, month, day)
    }

    pub fn to_naive(self) -> Option<chrono::NaiveDate> {
        chrono::NaiveDate::from_ymd_opt(
            i32::from(self.year.get()),
            u32::from(self.month.get()),
            u32::from(self.day.get()),
        )
    }

    #[inline]
    pub const fn year(self) -> u16 {
        self.year.get()
    }

    #[inline]
    pub const fn month(self) -> u8 {
        self.month.get()
    }

    #[inline]
    pub const fn day(self) -> u8 {
        self.day.get()
    }

    pub const fn year_typed(self) -> Year {
        self.year
    }

    pub const fn month_typed(self) -> Month {
        self.month
    }

    pub const fn day_typed(self) -> Day {
        self.day
    }

    /// Start of the unit containing this date.
    pub const fn truncate_to(self, unit: Unit) -> Self {
        match unit {
            Unit::Day => self,
            Unit::Month => Self::first_of(self.year, self.month),
            Unit::Year => Self::first_of(self.year, Month::JANUARY),
        }
    }

    /// Last day of the unit containing this date.
    pub const fn end_of(self, unit: Unit) -> Self {
        match unit {
            Unit::Day => self,
            Unit::Month => Self {
                year:  self.year,
                month: self.month,
                day:   Day::last_of(self.year, self.month),
            },
            Unit::Year => Self {
                year:  self.year,
                month: Month::DECEMBER,
                day:   Day::last_of(self.year, Month::DECEMBER),
            },
        }
    }

    /// Shifts by `n` calendar months, clamping the day to the target month.
    /// Returns `None` when the result leaves the supported year range.
    pub fn add_months(self, n: i32) -> Option<Self> {
        let months_per_year = i64::try_from(MONTHS_PER_YEAR).ok()?;
        let linear = i64::from(self.year.get()) * months_per_year
            + i64::from(self.month.index0())
            + i64::from(n);
        let year = u16::try_from(linear.div_euclid(months_per_year)).ok()?;
        let month = u8::try_from(linear.rem_euclid(months_per_year) + 1).ok()?;
        self.with_year_month(year, month)
    }

    /// Shifts by `n` years, clamping Feb 29 to Feb 28 in common years.
    /// Returns `None` when the result leaves the supported year range.
    pub fn add_years(self, n: i32) -> Option<Self> {
        let year = i32::from(self.year.get()).checked_add(n)?;
        self.with_year_month(u16::try_from(year).ok()?, self.month.get())
    }

    fn with_year_month(self, year: u16, month: u8) -> Option<Self> {
        let year = Year::new(year).ok()?;
        let month = Month::new(month).ok()?;
        Some(Self {
            year,
            month,
            day: self.day.clamped_to(year, month),
        })
    }

    /// Orders two dates after truncating both to `unit`.
    pub fn compare(self, other: Self, unit: Unit) -> Ordering {
        self.truncate_to(unit).cmp(&other.truncate_to(unit))
    }

    /// Same calendar month of the same year.
    pub fn same_month(self, other: Self) -> bool {
        self.compare(other, Unit::Month) == Ordering::Equal
    }

    pub fn same_year(self, other: Self) -> bool {
        self.year == other.year
    }

    /// Full month name in the given locale.
    pub fn month_name(self, locale: &Locale) -> String {
        locale.month_name(self)
    }
}

impl FromStr for DateValue {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let partial = s.parse::<PartialDate>()?;
        if partial.precision() != Unit::Day {
            return Err(ParseError::InvalidFormat(format!(
                "Expected a full YYYY-MM-DD date, got {partial}"
            )));
        }
        Ok(partial.lower_bound())
    }
}

impl Serialize for DateValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for DateValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
