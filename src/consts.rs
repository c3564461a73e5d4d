use crate::PartialDate;
use crate::types::{Day, Month, Year};

/// Maximum valid year (inclusive)
pub const MAX_YEAR: u16 = 9999;

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// Month number for February
pub const FEBRUARY: u8 = 2;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Number of cells in the month-grid view
pub const MONTHS_PER_YEAR: usize = 12;

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: u16 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: u16 = 400;

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';

/// Sentinel accepted by `min`/`max` meaning "today"
pub const NOW_SENTINEL: &str = "now";

/// Locale tag used when none is configured or the configured one is unknown
pub const DEFAULT_LANG: &str = "en-US";
/// Default accessible label of the backward button
pub const DEFAULT_ARIA_PREV: &str = "Previous";
/// Default accessible label of the forward button
pub const DEFAULT_ARIA_NEXT: &str = "Next";

/// Default lower bound when no `min` is configured: 1900-01-01
pub const DEFAULT_MIN: PartialDate = PartialDate::Day {
    year:  Year::from_const(1900),
    month: Month::JANUARY,
    day:   Day::FIRST,
};
/// Default upper bound when no `max` is configured: 2100-12-31
pub const DEFAULT_MAX: PartialDate = PartialDate::Day {
    year:  Year::from_const(2100),
    month: Month::DECEMBER,
    day:   Day::last_of(Year::from_const(2100), Month::DECEMBER),
};
