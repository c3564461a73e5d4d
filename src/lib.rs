//! Date-picker engine: resolves a `[min, max]` window from picker options,
//! seeds the initial selection and drives day/month navigation inside it.
//!
//! Rendering is left to the embedding UI. Everything here is a synchronous,
//! pure computation over [`DateValue`]s, with "now" and the [`Locale`]
//! always passed in explicitly.

mod bounds;
mod consts;
mod date;
mod locale;
mod month_grid;
mod navigation;
mod options;
mod partial;
mod picker;
mod prelude;
mod selection;
mod types;

pub use bounds::{BoundsConfig, ConfigError, DateField, Fixed, ResolvedBounds};
pub use consts::*;
pub use date::{DateValue, Unit};
pub use locale::Locale;
pub use month_grid::{MonthCell, is_month_disabled, month_grid};
pub use navigation::{Granularity, NavigationController, NavigationState};
pub use options::PickerOptions;
pub use partial::PartialDate;
pub use picker::{DatePicker, Header, NavButton, TitleButton};
pub use selection::initial_selection;
pub use types::{Day, Month, Year, days_in_month, is_leap_year};

use crate::prelude::*;

/// A date component that failed validation or parsing.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid year: {} (must be 1-{})", "_0", MAX_YEAR)]
    InvalidYear(u16),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { month: u8, day: u8, year: u16 },
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for ParseError {}
