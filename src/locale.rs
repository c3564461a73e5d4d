//! Explicit locale value threaded into every month-name call.

use chrono::{NaiveTime, TimeZone, Utc};

use crate::DateValue;
use crate::consts::DEFAULT_LANG;

/// A display locale built from a BCP 47 tag such as `en-US` or `fr`.
///
/// Locales only affect labels. Comparisons and arithmetic never consult them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Locale {
    inner: chrono::Locale,
}

impl Locale {
    /// Resolves a language tag, falling back to `en-US` when it is unknown.
    pub fn from_tag(tag: &str) -> Self {
        match Self::lookup(tag) {
            Some(inner) => Self { inner },
            None => {
                tracing::warn!(tag, fallback = DEFAULT_LANG, "unknown locale tag");
                Self::default()
            },
        }
    }

    fn lookup(tag: &str) -> Option<chrono::Locale> {
        let normalized = tag.trim().replace('-', "_");
        if let Ok(locale) = chrono::Locale::try_from(normalized.as_str()) {
            return Some(locale);
        }

        // bare language subtag: "fr" -> "fr_FR"
        let (language, region) = match normalized.split_once('_') {
            Some((language, region)) => (language.to_ascii_lowercase(), region.to_ascii_uppercase()),
            None => (normalized.to_ascii_lowercase(), normalized.to_ascii_uppercase()),
        };
        chrono::Locale::try_from(format!("{language}_{region}").as_str()).ok()
    }

    /// Full ("long") month name of `date`.
    pub fn month_name(&self, date: DateValue) -> String {
        match date.to_naive() {
            Some(naive) => Utc
                .from_utc_datetime(&naive.and_time(NaiveTime::default()))
                .format_localized("%B", self.inner)
                .to_string(),
            None => date.month().to_string(),
        }
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self {
            inner: chrono::Locale::en_US,
        }
    }
}
