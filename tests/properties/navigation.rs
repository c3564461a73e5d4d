//! Property tests for navigation confinement.

use datepicker_core::{
    DateValue, Granularity, Locale, NavigationController, Unit, initial_selection, month_grid,
};
use proptest::prelude::*;

use crate::strategies::{any_date, narrow_bounds, narrow_bounds_with_now};

#[derive(Debug, Clone)]
enum Op {
    Back,
    Forward,
    Toggle,
    PickMonth(usize),
    PickDay(u8),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        Just(Op::Back),
        Just(Op::Forward),
        Just(Op::Toggle),
        (0usize..12).prop_map(Op::PickMonth),
        (1u8..=28).prop_map(Op::PickDay),
    ]
}

/// Applies `op` the way a UI would: only through enabled controls.
fn apply(nav: &mut NavigationController, op: &Op, now: DateValue) {
    match *op {
        Op::Back => {
            nav.step_backward();
        },
        Op::Forward => {
            nav.step_forward();
        },
        Op::Toggle => {
            nav.toggle_view();
        },
        Op::PickMonth(index) => {
            if nav.granularity() == Granularity::Month {
                let cells = month_grid(nav.selected(), nav.bounds(), now, &Locale::default());
                if !cells[index].disabled {
                    nav.select_month(cells[index].date);
                }
            }
        },
        Op::PickDay(day) => {
            if nav.granularity() == Granularity::Day {
                let selected = nav.selected();
                let candidate = DateValue::new(selected.year(), selected.month(), day).unwrap();
                // the day grid only offers days inside the window
                let bounds = nav.bounds();
                nav.select_date(candidate.clamp(bounds.min(), bounds.max()));
            }
        },
    }
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: enabled transitions never move the selected month outside the window.
    #[test]
    fn property_selection_month_stays_in_window(
        bounds in narrow_bounds(),
        now in any_date(),
        ops in proptest::collection::vec(op(), 0..64),
    ) {
        let selected = initial_selection(None, &bounds, None, now);
        prop_assert!(bounds.contains(selected));

        let mut nav = NavigationController::new(bounds, selected, Granularity::Day);
        let min_month = bounds.min().truncate_to(Unit::Month);
        let max_month = bounds.max().truncate_to(Unit::Month);

        for op in &ops {
            apply(&mut nav, op, now);
            let month = nav.selected().truncate_to(Unit::Month);
            prop_assert!(
                min_month <= month && month <= max_month,
                "{op:?} moved selection to {} outside {bounds}",
                nav.selected()
            );
        }
    }

    /// PROPERTY: disabled steps leave the state untouched.
    #[test]
    fn property_disabled_step_is_noop(
        bounds in narrow_bounds(),
        now in any_date(),
        ops in proptest::collection::vec(op(), 0..32),
    ) {
        let selected = initial_selection(None, &bounds, None, now);
        let mut nav = NavigationController::new(bounds, selected, Granularity::Day);
        for op in &ops {
            apply(&mut nav, op, now);
        }

        let before = nav.state();
        if !nav.can_step_backward() {
            prop_assert!(!nav.step_backward());
            prop_assert_eq!(nav.state(), before);
        }
        if !nav.can_step_forward() {
            prop_assert!(!nav.step_forward());
            prop_assert_eq!(nav.state(), before);
        }
    }

    /// PROPERTY: opening the month grid and picking today's month returns to today.
    #[test]
    fn property_toggle_then_current_month_restores_today(
        (bounds, now) in narrow_bounds_with_now(),
    ) {
        prop_assert!(bounds.contains(now));
        let selected = initial_selection(None, &bounds, None, now);
        prop_assert_eq!(selected, now);

        let mut nav = NavigationController::new(bounds, selected, Granularity::Day);
        if nav.toggle_view() {
            let cells = month_grid(nav.selected(), nav.bounds(), now, &Locale::default());
            let current = cells
                .iter()
                .find(|cell| cell.date == now.truncate_to(Unit::Month))
                .unwrap();
            prop_assert!(!current.disabled);
            nav.select_month(current.date);
        }

        prop_assert_eq!(nav.granularity(), Granularity::Day);
        prop_assert_eq!(nav.selected(), now.truncate_to(Unit::Day));
    }
}
