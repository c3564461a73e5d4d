use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{DateValue, NOW_SENTINEL, ParseError, PartialDate, Unit, prelude::*};

/// The inclusive `[min, max]` window selection and navigation are confined to.
/// `min` is never after `max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{min}/{max}")]
pub struct ResolvedBounds {
    min: DateValue,
    max: DateValue,
}

/// Error raised while turning picker options into bounds.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// Resolved lower bound is after the upper bound.
    #[error("Invalid bounds: min ({min}) is after max ({max})")]
    InvertedBounds { min: DateValue, max: DateValue },

    /// `fixed` named a unit other than day, month or year.
    #[error("Unknown calendar unit: {0:?} (expected \"day\", \"month\" or \"year\")")]
    UnknownUnit(String),

    /// A fixed partial date may only carry a year and an optional month.
    #[error("Unsupported fixed window {0}: expected a year or a year and month")]
    UnsupportedFixedPartial(PartialDate),

    /// `fixed` was neither a unit nor a partial date.
    #[error("Unrecognized fixed window: {0:?}")]
    UnknownFixed(String),

    /// Error parsing a date component.
    #[error(transparent)]
    ParseError(#[from] ParseError),
}

impl ResolvedBounds {
    /// Creates a window, rejecting `min > max`.
    ///
    /// # Errors
    /// Returns `ConfigError::InvertedBounds` if min > max.
    pub fn new(min: DateValue, max: DateValue) -> Result<Self, ConfigError> {
        if min > max {
            return Err(ConfigError::InvertedBounds { min, max });
        }
        Ok(Self { min, max })
    }

    pub const fn min(&self) -> DateValue {
        self.min
    }

    pub const fn max(&self) -> DateValue {
        self.max
    }

    /// Inclusive at both ends, at day precision.
    pub fn contains(&self, date: DateValue) -> bool {
        self.min <= date && date <= self.max
    }

    /// Both ends fall in the same calendar month, leaving nothing to browse.
    pub fn is_single_month(&self) -> bool {
        self.min.same_month(self.max)
    }
}

/// The `fixed` option: either a unit around today or a given year/month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Fixed {
    #[display(fmt = "{_0}")]
    Unit(Unit),
    #[display(fmt = "{_0}")]
    Partial(PartialDate),
}

impl FromStr for Fixed {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(unit) = s.parse::<Unit>() {
            return Ok(Self::Unit(unit));
        }
        s.parse::<PartialDate>()
            .map(Self::Partial)
            .map_err(|_| ConfigError::UnknownFixed(s.to_owned()))
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum FixedRepr {
    Text(String),
    Partial(PartialDate),
}

impl<'de> Deserialize<'de> for Fixed {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        match FixedRepr::deserialize(deserializer)? {
            FixedRepr::Text(s) => s.parse().map_err(serde::de::Error::custom),
            FixedRepr::Partial(partial) => Ok(Self::Partial(partial)),
        }
    }
}

impl Serialize for Fixed {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

/// One end of an explicit window: a literal date or the `"now"` sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum DateField {
    #[display(fmt = "now")]
    Now,
    #[display(fmt = "{_0}")]
    Literal(PartialDate),
}

impl DateField {
    /// Concrete date for this field. A literal missing month or day uses 1.
    pub fn resolve(&self, now: DateValue) -> DateValue {
        match self {
            Self::Now => now.truncate_to(Unit::Day),
            Self::Literal(partial) => partial.lower_bound(),
        }
    }
}

impl From<PartialDate> for DateField {
    fn from(partial: PartialDate) -> Self {
        Self::Literal(partial)
    }
}

impl FromStr for DateField {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim() == NOW_SENTINEL {
            return Ok(Self::Now);
        }
        s.parse().map(Self::Literal)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum DateFieldRepr {
    Text(String),
    Literal(PartialDate),
}

impl<'de> Deserialize<'de> for DateField {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        match DateFieldRepr::deserialize(deserializer)? {
            DateFieldRepr::Text(s) => s.parse().map_err(serde::de::Error::custom),
            DateFieldRepr::Literal(partial) => Ok(Self::Literal(partial)),
        }
    }
}

impl Serialize for DateField {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

/// Where the window comes from, in precedence order. Building this from
/// options drops whatever a higher-precedence source overrides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoundsConfig {
    /// `[now.truncate_to(unit), now.end_of(unit)]`
    FixedUnit(Unit),
    /// From the partial date to the end of its month, or its year when no month is given.
    FixedPartial(PartialDate),
    Explicit { min: DateField, max: DateField },
}

impl BoundsConfig {
    pub fn from_options(fixed: Option<Fixed>, min: DateField, max: DateField) -> Self {
        match fixed {
            Some(Fixed::Unit(unit)) => Self::FixedUnit(unit),
            Some(Fixed::Partial(partial)) => Self::FixedPartial(partial),
            None => Self::Explicit { min, max },
        }
    }

    /// The fixed partial date, which also seeds the initial selection.
    pub const fn fixed_partial(&self) -> Option<&PartialDate> {
        match self {
            Self::FixedPartial(partial) => Some(partial),
            Self::FixedUnit(_) | Self::Explicit { .. } => None,
        }
    }

    /// Computes the concrete window relative to `now`.
    ///
    /// # Errors
    /// Returns `ConfigError` for a fixed partial carrying a day, or when the
    /// resolved min is after the resolved max.
    pub fn resolve(&self, now: DateValue) -> Result<ResolvedBounds, ConfigError> {
        let (min, max) = match *self {
            Self::FixedUnit(unit) => (now.truncate_to(unit), now.end_of(unit)),
            Self::FixedPartial(partial) => {
                let unit = match partial {
                    PartialDate::Year { .. } => Unit::Year,
                    PartialDate::Month { .. } => Unit::Month,
                    PartialDate::Day { .. } => {
                        return Err(ConfigError::UnsupportedFixedPartial(partial));
                    },
                };
                let start = partial.lower_bound();
                (start, start.end_of(unit))
            },
            Self::Explicit { min, max } => (min.resolve(now), max.resolve(now)),
        };

        let bounds = ResolvedBounds::new(min, max)?;
        tracing::debug!(config = ?self, %now, %bounds, "resolved bounds");
        Ok(bounds)
    }
}
