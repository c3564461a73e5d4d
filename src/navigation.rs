//! Selection and view-granularity state machine.
//!
//! Every transition is gated by a predicate the UI also uses to disable the
//! matching control, so a disabled transition is a no-op here.

use crate::prelude::*;
use crate::{DateValue, ResolvedBounds, Unit};

/// Which grid the picker is browsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display)]
pub enum Granularity {
    /// Day grid of one month; steps move by a month.
    #[default]
    #[display(fmt = "day")]
    Day,
    /// Month grid of one year; steps move by a year.
    #[display(fmt = "month")]
    Month,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NavigationState {
    pub selected:    DateValue,
    pub granularity: Granularity,
}

/// Owns one picker's `NavigationState` and the bounds it is checked against.
#[derive(Debug, Clone)]
pub struct NavigationController {
    state:  NavigationState,
    bounds: ResolvedBounds,
}

impl NavigationController {
    pub fn new(bounds: ResolvedBounds, selected: DateValue, granularity: Granularity) -> Self {
        Self {
            state: NavigationState {
                selected: selected.truncate_to(Unit::Day),
                granularity,
            },
            bounds,
        }
    }

    pub const fn state(&self) -> NavigationState {
        self.state
    }

    pub const fn selected(&self) -> DateValue {
        self.state.selected
    }

    pub const fn granularity(&self) -> Granularity {
        self.state.granularity
    }

    pub const fn bounds(&self) -> &ResolvedBounds {
        &self.bounds
    }

    /// Swaps in freshly resolved bounds; the state itself carries over.
    pub fn set_bounds(&mut self, bounds: ResolvedBounds) {
        self.bounds = bounds;
    }

    /// The view button only opens the month grid, and only when there is
    /// more than one month to choose from.
    pub fn can_toggle_view(&self) -> bool {
        self.state.granularity == Granularity::Day && !self.bounds.is_single_month()
    }

    pub fn toggle_view(&mut self) -> bool {
        if !self.can_toggle_view() {
            return false;
        }
        self.state.granularity = Granularity::Month;
        tracing::debug!(selected = %self.state.selected, "opened month grid");
        true
    }

    pub fn can_step_backward(&self) -> bool {
        !self.at_edge(self.bounds.min())
    }

    pub fn can_step_forward(&self) -> bool {
        !self.at_edge(self.bounds.max())
    }

    // Day view stops at the edge's month, month view at the edge's year.
    fn at_edge(&self, edge: DateValue) -> bool {
        match self.state.granularity {
            Granularity::Day => self.state.selected.same_month(edge),
            Granularity::Month => self.state.selected.same_year(edge),
        }
    }

    /// One month back in day view, one year back in month view.
    ///
    /// A month-view step that lands outside the window is pinned to its
    /// nearest edge, so stepping back and then forward may not return to the
    /// starting date.
    pub fn step_backward(&mut self) -> bool {
        if !self.can_step_backward() {
            return false;
        }
        self.step(-1)
    }

    /// One month forward in day view, one year forward in month view.
    ///
    /// Pins to the window edge like [`Self::step_backward`], so it is not
    /// always undone by the opposite step.
    pub fn step_forward(&mut self) -> bool {
        if !self.can_step_forward() {
            return false;
        }
        self.step(1)
    }

    fn step(&mut self, direction: i32) -> bool {
        let shifted = match self.state.granularity {
            Granularity::Day => self.state.selected.add_months(direction),
            // The month grid only shows the year, so the selection is pinned
            // into the window to keep the month inside it as well.
            Granularity::Month => self
                .state
                .selected
                .add_years(direction)
                .map(|date| date.clamp(self.bounds.min(), self.bounds.max())),
        };
        let Some(selected) = shifted else {
            return false;
        };

        tracing::debug!(
            from = %self.state.selected,
            to = %selected,
            granularity = %self.state.granularity,
            "step"
        );
        self.state.selected = selected;
        true
    }

    /// Day-grid callback. The day grid only offers in-range days, so the
    /// date is taken as is.
    pub fn select_date(&mut self, date: DateValue) {
        self.state.selected = date.truncate_to(Unit::Day);
    }

    /// Month-grid click: back to the day grid on that month. Re-picking the
    /// month already selected keeps the selected day.
    pub fn select_month(&mut self, month: DateValue) {
        if !self.state.selected.same_month(month) {
            self.state.selected = month.truncate_to(Unit::Month);
        }
        self.state.granularity = Granularity::Day;
        tracing::debug!(selected = %self.state.selected, "picked month");
    }
}
