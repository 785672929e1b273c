//! Locale-aware labels for tiles and navigation.
//!
//! Formatting is delegated to chrono's localized strftime. The cache owns the
//! resolved locales and is created once per session by the caller, then passed
//! by reference to whatever renders labels.

use std::collections::HashMap;

use chrono::{Locale, TimeZone, Utc};
use tracing::debug;

use crate::consts::DECADE_LABEL_SEPARATOR;
use crate::dates::begin_of_decade_year;
use crate::granularity::Granularity;
use crate::prelude::*;

/// Label shapes used by the calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatStyle {
    /// Numeric date in the locale's order
    Date,
    /// Day of month
    Day,
    /// Day, month name and year
    LongDate,
    Month,
    MonthYear,
    ShortWeekday,
    Weekday,
    Year,
}

impl FormatStyle {
    const fn pattern(self) -> &'static str {
        match self {
            Self::Date => "%x",
            Self::Day => "%-d",
            Self::LongDate => "%-d %B %Y",
            Self::Month => "%B",
            Self::MonthYear => "%B %Y",
            Self::ShortWeekday => "%a",
            Self::Weekday => "%A",
            Self::Year => "%Y",
        }
    }
}

#[derive(Debug, Clone)]
pub struct FormatterCache {
    default_locale: String,
    locales:        HashMap<String, Locale>,
}

impl FormatterCache {
    /// `default_locale` is a BCP 47 style tag such as `en-US`, used whenever a
    /// call does not name a locale.
    pub fn new(default_locale: impl Into<String>) -> Self {
        Self {
            default_locale: default_locale.into(),
            locales:        HashMap::new(),
        }
    }

    pub fn default_locale(&self) -> &str {
        &self.default_locale
    }

    /// Number of distinct locale tags resolved so far.
    pub fn cached_locales(&self) -> usize {
        self.locales.len()
    }

    pub fn format(&mut self, style: FormatStyle, locale: Option<&str>, date: NaiveDateTime) -> String {
        let locale = self.resolve(locale);
        Utc.from_utc_datetime(&date)
            .format_localized(style.pattern(), locale)
            .to_string()
    }

    /// `"2020 – 2029"` style label for the decade containing `date`.
    pub fn decade_label(&mut self, locale: Option<&str>, date: NaiveDateTime) -> String {
        let first = begin_of_decade_year(date);
        let start = crate::dates::ymd(first, 1, 1);
        let end = crate::dates::end(Granularity::Decade, date);
        format!(
            "{}{DECADE_LABEL_SEPARATOR}{}",
            self.format(FormatStyle::Year, locale, start),
            self.format(FormatStyle::Year, locale, end)
        )
    }

    fn resolve(&mut self, locale: Option<&str>) -> Locale {
        let tag = locale.unwrap_or(&self.default_locale).to_owned();
        *self.locales.entry(tag).or_insert_with_key(|tag| {
            let resolved = parse_locale(tag);
            debug!(%tag, ?resolved, "resolved formatter locale");
            resolved
        })
    }
}

impl Default for FormatterCache {
    fn default() -> Self {
        Self::new(crate::consts::DEFAULT_LOCALE)
    }
}

/// Maps `en-US` style tags onto chrono's `en_US` locales, falling back to POSIX.
fn parse_locale(tag: &str) -> Locale {
    let normalized = tag.trim().replace('-', "_");
    Locale::try_from(normalized.as_str()).unwrap_or(Locale::POSIX)
}
