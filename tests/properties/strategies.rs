//! Shared input generators.

use datepicker_core::{DateValue, ResolvedBounds};
use proptest::prelude::*;

/// Any date between 1900 and 2100. Days stop at 28 so every month accepts them.
pub fn any_date() -> impl Strategy<Value = DateValue> {
    (1900u16..=2100, 1u8..=12, 1u8..=28)
        .prop_map(|(year, month, day)| DateValue::new(year, month, day).unwrap())
}

/// A valid window, from a single day up to two centuries.
pub fn any_bounds() -> impl Strategy<Value = ResolvedBounds> {
    (any_date(), any_date()).prop_map(|(a, b)| ResolvedBounds::new(a.min(b), a.max(b)).unwrap())
}

/// A window no wider than a few years, so navigation actually reaches its edges.
pub fn narrow_bounds() -> impl Strategy<Value = ResolvedBounds> {
    (any_date(), 0i32..48, 1u8..=28).prop_map(|(min, months, day)| {
        let end = min.add_months(months).unwrap();
        let max = DateValue::new(end.year(), end.month(), day).unwrap().max(min);
        ResolvedBounds::new(min, max).unwrap()
    })
}

/// A narrow window together with a "today" somewhere inside it.
pub fn narrow_bounds_with_now() -> impl Strategy<Value = (ResolvedBounds, DateValue)> {
    (narrow_bounds(), any::<u16>()).prop_map(|(bounds, offset)| {
        let min = bounds.min().to_naive().unwrap();
        let max = bounds.max().to_naive().unwrap();
        let span = u64::try_from((max - min).num_days()).unwrap();
        let now = min + chrono::Days::new(u64::from(offset) % (span + 1));
        (bounds, DateValue::from_naive(now).unwrap())
    })
}
