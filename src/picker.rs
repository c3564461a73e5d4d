//! A single picker instance: bounds, navigation, locale and the click callback.

use std::fmt;

use crate::month_grid::{MonthCell, is_month_disabled, month_grid};
use crate::navigation::{Granularity, NavigationController, NavigationState};
use crate::selection::initial_selection;
use crate::{ConfigError, DateValue, Locale, MONTHS_PER_YEAR, PickerOptions, ResolvedBounds, Unit};

/// An arrow button of the header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavButton {
    pub aria_label: String,
    pub disabled:   bool,
}

/// The middle header button, which opens the month grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleButton {
    /// `"June 2024"` on the day grid, `"2024"` on the month grid.
    pub label:    String,
    pub disabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub previous: NavButton,
    pub title:    TitleButton,
    pub next:     NavButton,
}

type DateClick = Box<dyn FnMut(DateValue)>;

/// Engine behind one mounted picker. Each instance owns its state and
/// locale; nothing is shared between pickers.
pub struct DatePicker {
    controller:  NavigationController,
    locale:      Locale,
    months_only: bool,
    aria_prev:   String,
    aria_next:   String,
    on_click:    Option<DateClick>,
}

impl DatePicker {
    /// Resolves bounds and the initial selection from `options`.
    ///
    /// # Errors
    /// Returns `ConfigError` when the options describe no valid window. No
    /// picker is built in that case.
    pub fn new(options: &PickerOptions, now: DateValue) -> Result<Self, ConfigError> {
        let config = options.bounds_config();
        let bounds = config.resolve(now)?;
        let selected = initial_selection(options.start.as_ref(), &bounds, config.fixed_partial(), now);
        let granularity = if options.months_only {
            Granularity::Month
        } else {
            Granularity::Day
        };

        Ok(Self {
            controller: NavigationController::new(bounds, selected, granularity),
            locale: Locale::from_tag(&options.lang),
            months_only: options.months_only,
            aria_prev: options.aria_prev_btn.clone(),
            aria_next: options.aria_next_btn.clone(),
            on_click: None,
        })
    }

    /// Installs the callback run with every picked day, or every picked
    /// month in months-only mode.
    #[must_use]
    pub fn with_date_click(mut self, callback: impl FnMut(DateValue) + 'static) -> Self {
        self.on_click = Some(Box::new(callback));
        self
    }

    /// Applies changed options. Bounds and locale are recomputed while the
    /// selection and view carry over; on error the picker is left untouched.
    ///
    /// # Errors
    /// Returns `ConfigError` when the new options describe no valid window.
    pub fn reconfigure(&mut self, options: &PickerOptions, now: DateValue) -> Result<(), ConfigError> {
        let bounds = options.bounds_config().resolve(now)?;
        self.controller.set_bounds(bounds);
        self.locale = Locale::from_tag(&options.lang);
        self.months_only = options.months_only;
        self.aria_prev.clone_from(&options.aria_prev_btn);
        self.aria_next.clone_from(&options.aria_next_btn);
        Ok(())
    }

    pub const fn state(&self) -> NavigationState {
        self.controller.state()
    }

    pub const fn bounds(&self) -> &ResolvedBounds {
        self.controller.bounds()
    }

    pub const fn locale(&self) -> &Locale {
        &self.locale
    }

    pub const fn is_months_only(&self) -> bool {
        self.months_only
    }

    pub fn header(&self) -> Header {
        let selected = self.controller.selected();
        let label = match self.controller.granularity() {
            Granularity::Day => format!("{} {}", selected.month_name(&self.locale), selected.year()),
            Granularity::Month => selected.year().to_string(),
        };

        Header {
            previous: NavButton {
                aria_label: self.aria_prev.clone(),
                disabled:   !self.controller.can_step_backward(),
            },
            title:    TitleButton {
                label,
                disabled: !self.controller.can_toggle_view(),
            },
            next:     NavButton {
                aria_label: self.aria_next.clone(),
                disabled:   !self.controller.can_step_forward(),
            },
        }
    }

    pub fn step_backward(&mut self) -> bool {
        self.controller.step_backward()
    }

    pub fn step_forward(&mut self) -> bool {
        self.controller.step_forward()
    }

    pub fn toggle_view(&mut self) -> bool {
        self.controller.toggle_view()
    }

    pub fn month_grid(&self, now: DateValue) -> [MonthCell; MONTHS_PER_YEAR] {
        month_grid(self.controller.selected(), self.controller.bounds(), now, &self.locale)
    }

    /// A month-grid click. Disabled months are ignored. In months-only mode
    /// the month goes to the callback, otherwise the day grid opens on it.
    pub fn click_month(&mut self, month: DateValue) -> bool {
        let month = month.truncate_to(Unit::Month);
        if is_month_disabled(month, self.controller.bounds()) {
            return false;
        }

        if self.months_only {
            self.notify(month);
        } else {
            self.controller.select_month(month);
        }
        true
    }

    /// Day-grid click: the day becomes the selection and goes to the callback.
    pub fn click_day(&mut self, date: DateValue) {
        self.controller.select_date(date);
        self.notify(self.controller.selected());
    }

    fn notify(&mut self, date: DateValue) {
        if let Some(callback) = self.on_click.as_mut() {
            callback(date);
        }
    }
}

impl fmt::Debug for DatePicker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatePicker")
            .field("controller", &self.controller)
            .field("locale", &self.locale)
            .field("months_only", &self.months_only)
            .field("aria_prev", &self.aria_prev)
            .field("aria_next", &self.aria_next)
            .field("on_click", &self.on_click.is_some())
            .finish()
    }
}
