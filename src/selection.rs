use crate::{DateValue, PartialDate, ResolvedBounds, Unit};

/// Picks the date a freshly mounted picker shows.
///
/// In order: the explicit `start`, today if it lies inside `bounds`, the fixed
/// partial date, then `bounds.min()`.
pub fn initial_selection(
    start: Option<&PartialDate>,
    bounds: &ResolvedBounds,
    fixed_partial: Option<&PartialDate>,
    now: DateValue,
) -> DateValue {
    let today = now.truncate_to(Unit::Day);
    let selected = if let Some(start) = start {
        let start = start.lower_bound();
        if !bounds.contains(start) {
            tracing::warn!(%start, %bounds, "explicit start lies outside bounds");
        }
        start
    } else if bounds.contains(today) {
        today
    } else if let Some(partial) = fixed_partial {
        partial.lower_bound()
    } else {
        bounds.min()
    };

    tracing::debug!(%selected, "initial selection");
    selected
}
