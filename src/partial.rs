use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::prelude::*;
use crate::types::{Day, Month, Year};
use crate::{DATE_SEPARATOR, DateValue, ParseError, Unit};

/// A calendar date known to year, month or day precision, as written in
/// picker options (`start`, literal `min`/`max`, a fixed window).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum PartialDate {
    /// Full date with day, month, and year
    #[display(fmt = "{:04}-{:02}-{:02}", "year.get()", "month.get()", "day.get()")]
    Day { year: Year, month: Month, day: Day },
    /// Month and year only
    #[display(fmt = "{:04}-{:02}", "year.get()", "month.get()")]
    Month { year: Year, month: Month },
    /// Year only
    #[display(fmt = "{:04}", "year.get()")]
    Year { year: Year },
}

impl PartialDate {
    /// Builds a partial date from loose components.
    ///
    /// # Errors
    /// Returns a `ParseError` for out-of-range components or a day without a month.
    pub fn from_parts(year: u16, month: Option<u8>, day: Option<u8>) -> Result<Self, ParseError> {
        let year_typed = Year::new(year)?;
        match (month, day) {
            (Some(m), Some(d)) => Ok(Self::Day {
                year:  year_typed,
                month: Month::new(m)?,
                day:   Day::new(d, year, m)?,
            }),
            (Some(m), None) => Ok(Self::Month {
                year:  year_typed,
                month: Month::new(m)?,
            }),
            (None, None) => Ok(Self::Year { year: year_typed }),
            (None, Some(d)) => Err(ParseError::InvalidFormat(format!(
                "Cannot have day {d} without month"
            ))),
        }
    }

    pub fn year(&self) -> u16 {
        match self {
            Self::Day { year, .. } | Self::Month { year, .. } | Self::Year { year } => year.get(),
        }
    }

    pub fn month(&self) -> Option<u8> {
        match self {
            Self::Day { month, .. } | Self::Month { month, .. } => Some(month.get()),
            Self::Year { .. } => None,
        }
    }

    pub fn day(&self) -> Option<u8> {
        match self {
            Self::Day { day, .. } => Some(day.get()),
            Self::Month { .. } | Self::Year { .. } => None,
        }
    }

    /// Finest unit this value is known to.
    pub const fn precision(&self) -> Unit {
        match self {
            Self::Day { .. } => Unit::Day,
            Self::Month { .. } => Unit::Month,
            Self::Year { .. } => Unit::Year,
        }
    }

    /// Earliest concrete date represented by this value. Missing fields are 1.
    pub fn lower_bound(&self) -> DateValue {
        match *self {
            Self::Day { year, month, day } => DateValue::from_parts_clamped(year, month, day),
            Self::Month { year, month } => DateValue::first_of(year, month),
            Self::Year { year } => DateValue::first_of(year, Month::JANUARY),
        }
    }

    /// Latest concrete date represented by this value (inclusive).
    pub fn upper_bound_inclusive(&self) -> DateValue {
        self.lower_bound().end_of(self.precision())
    }
}

impl FromStr for PartialDate {
    type Err = ParseError;

    /// Parses ISO `YYYY`, `YYYY-MM` or `YYYY-MM-DD`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).map(str::trim).collect();
        match parts.as_slice() {
            [year] => Self::from_parts(parse_u16(year)?, None, None),
            [year, month] => Self::from_parts(parse_u16(year)?, Some(parse_u8(month)?), None),
            [year, month, day] => Self::from_parts(
                parse_u16(year)?,
                Some(parse_u8(month)?),
                Some(parse_u8(day)?),
            ),
            _ => Err(ParseError::InvalidFormat(format!(
                "Too many {DATE_SEPARATOR} separators: expected 0-2, found {}",
                parts.len() - 1
            ))),
        }
    }
}

fn parse_u16(s: &str) -> Result<u16, ParseError> {
    s.parse::<u16>()
        .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
}

fn parse_u8(s: &str) -> Result<u8, ParseError> {
    s.parse::<u8>()
        .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
}

impl TryFrom<(u16, Option<u8>, Option<u8>)> for PartialDate {
    type Error = ParseError;

    fn try_from(value: (u16, Option<u8>, Option<u8>)) -> Result<Self, Self::Error> {
        Self::from_parts(value.0, value.1, value.2)
    }
}

impl From<DateValue> for PartialDate {
    fn from(date: DateValue) -> Self {
        Self::Day {
            year:  date.year_typed(),
            month: date.month_typed(),
            day:   date.day_typed(),
        }
    }
}

impl Serialize for PartialDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

/// Accepted spellings of a partial date in options: an ISO string or a
/// `{year, month?, day?}` object.
#[derive(Deserialize)]
#[serde(untagged)]
enum PartialDateRepr {
    Text(String),
    Fields {
        year:  u16,
        #[serde(default)]
        month: Option<u8>,
        #[serde(default)]
        day:   Option<u8>,
    },
}

impl<'de> Deserialize<'de> for PartialDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        match PartialDateRepr::deserialize(deserializer)? {
            PartialDateRepr::Text(s) => s.parse().map_err(serde::de::Error::custom),
            PartialDateRepr::Fields { year, month, day } => {
                Self::from_parts(year, month, day).map_err(serde::de::Error::custom)
            },
        }
    }
}
