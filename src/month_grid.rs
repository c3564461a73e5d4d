use crate::types::Month;
use crate::{DateValue, Locale, MONTHS_PER_YEAR, ResolvedBounds, Unit};

/// One button of the month grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthCell {
    /// First day of the month.
    pub date:        DateValue,
    pub label:       String,
    pub disabled:    bool,
    /// Marks the current month, except on the window's first or last month.
    pub highlighted: bool,
}

/// A month cell is disabled when it starts after `max` or lies before `min`'s month.
pub fn is_month_disabled(month: DateValue, bounds: &ResolvedBounds) -> bool {
    month > bounds.max() || month < bounds.min().truncate_to(Unit::Month)
}

/// January through December of `selected`'s year.
///
/// Highlighting is exclusive at both ends: the current month is not marked
/// when it is `min`'s month, and is marked on `max`'s month only while its
/// first day is before `max`.
pub fn month_grid(
    selected: DateValue,
    bounds: &ResolvedBounds,
    now: DateValue,
    locale: &Locale,
) -> [MonthCell; MONTHS_PER_YEAR] {
    let min_month = bounds.min().truncate_to(Unit::Month);
    let max = bounds.max();
    let current_month = now.truncate_to(Unit::Month);
    let year = selected.year_typed();

    Month::ALL.map(|month| {
        let date = DateValue::first_of(year, month);
        MonthCell {
            date,
            label: locale.month_name(date),
            disabled: is_month_disabled(date, bounds),
            highlighted: date == current_month && date > min_month && date < max,
        }
    })
}
