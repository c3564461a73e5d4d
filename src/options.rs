//! Construction-time props of a picker.

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_ARIA_NEXT, DEFAULT_ARIA_PREV, DEFAULT_LANG, DEFAULT_MAX, DEFAULT_MIN};
use crate::{BoundsConfig, DateField, Fixed, PartialDate};

/// Picker props as an embedding page passes them, usually as JSON.
///
/// Layout-only keys such as `style`, `fontSize`, `height` and `width` are
/// accepted and ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PickerOptions {
    pub aria_prev_btn: String,
    pub aria_next_btn: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fixed:         Option<Fixed>,
    pub lang:          String,
    pub max:           DateField,
    pub min:           DateField,
    pub months_only:   bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start:         Option<PartialDate>,
}

impl PickerOptions {
    /// The bounds source these options select, `fixed` taking precedence.
    pub fn bounds_config(&self) -> BoundsConfig {
        BoundsConfig::from_options(self.fixed, self.min, self.max)
    }
}

impl Default for PickerOptions {
    fn default() -> Self {
        Self {
            aria_prev_btn: DEFAULT_ARIA_PREV.to_owned(),
            aria_next_btn: DEFAULT_ARIA_NEXT.to_owned(),
            fixed:         None,
            lang:          DEFAULT_LANG.to_owned(),
            max:           DateField::Literal(DEFAULT_MAX),
            min:           DateField::Literal(DEFAULT_MIN),
            months_only:   false,
            start:         None,
        }
    }
}
