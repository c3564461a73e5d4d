//! Property tests for the month grid.

use std::collections::HashSet;

use datepicker_core::{Locale, Unit, month_grid};
use proptest::prelude::*;

use crate::strategies::{any_bounds, any_date};

fn locale() -> impl Strategy<Value = Locale> {
    prop_oneof![
        Just(Locale::from_tag("en-US")),
        Just(Locale::from_tag("fr-FR")),
        Just(Locale::from_tag("de-DE")),
        Just(Locale::from_tag("es-ES")),
    ]
}

proptest! {
    /// PROPERTY: twelve ascending first-of-month cells with distinct labels.
    #[test]
    fn property_twelve_unique_ascending_cells(
        selected in any_date(),
        bounds in any_bounds(),
        now in any_date(),
        locale in locale(),
    ) {
        let cells = month_grid(selected, &bounds, now, &locale);

        prop_assert_eq!(cells.len(), 12);
        prop_assert_eq!(cells[0].date, selected.truncate_to(Unit::Year));
        for pair in cells.windows(2) {
            prop_assert!(pair[0].date < pair[1].date);
            prop_assert_eq!(pair[0].date.add_months(1), Some(pair[1].date));
        }

        let labels: HashSet<&str> = cells.iter().map(|cell| cell.label.as_str()).collect();
        prop_assert_eq!(labels.len(), 12);
    }

    /// PROPERTY: at most one highlighted cell, never a disabled one.
    #[test]
    fn property_highlight_is_enabled_current_month(
        selected in any_date(),
        bounds in any_bounds(),
        now in any_date(),
    ) {
        let cells = month_grid(selected, &bounds, now, &Locale::default());
        let highlighted: Vec<_> = cells.iter().filter(|cell| cell.highlighted).collect();

        prop_assert!(highlighted.len() <= 1);
        for cell in highlighted {
            prop_assert!(!cell.disabled);
            prop_assert_eq!(cell.date, now.truncate_to(Unit::Month));
        }
    }
}
