use serde::{Deserialize, Serialize};

use crate::consts::DEFAULT_LOCALE;
use crate::dates::ymd;
use crate::error::ConfigError;
use crate::granularity::Granularity;
use crate::prelude::*;
use crate::range::Period;
use crate::types::{CalendarType, LooseValue, RangeOrder, ReturnValue};
use crate::value::Detail;
use crate::view::limited_views;

/// Per-session calendar options. Set once when the calendar is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarConfig {
    /// Coarsest reachable view
    pub min_detail: Granularity,
    /// Finest reachable view; committing happens here
    pub max_detail: Granularity,
    /// Week layout; detected from `locale` when absent
    pub calendar_type: Option<CalendarType>,
    pub locale: Option<String>,

    /// Two-phase range selection
    pub select_range: bool,
    /// Report a one-sided range after the first pick
    pub allow_partial_range: bool,
    /// Re-center the view on the range start after the second pick
    pub go_to_range_start_on_select: bool,
    pub return_value: ReturnValue,
    pub range_order: RangeOrder,

    /// Falls back to `show_double_view` when unset
    pub show_fixed_number_of_weeks: Option<bool>,
    pub show_neighboring_month: bool,
    pub show_neighboring_decade: bool,
    pub show_week_numbers: bool,
    pub show_double_view: bool,

    pub min_date: Option<NaiveDateTime>,
    pub max_date: Option<NaiveDateTime>,

    pub initial_view: Option<Granularity>,
    pub initial_value: Option<LooseValue>,
    pub initial_active_start_date: Option<NaiveDateTime>,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            min_detail: Granularity::Decade,
            max_detail: Granularity::Month,
            calendar_type: None,
            locale: None,
            select_range: false,
            allow_partial_range: false,
            go_to_range_start_on_select: true,
            return_value: ReturnValue::Start,
            range_order: RangeOrder::AsPicked,
            show_fixed_number_of_weeks: None,
            show_neighboring_month: true,
            show_neighboring_decade: false,
            show_week_numbers: false,
            show_double_view: false,
            min_date: None,
            max_date: None,
            initial_view: None,
            initial_value: None,
            initial_active_start_date: None,
        }
    }
}

impl CalendarConfig {
    /// Parses and validates a TOML document. Missing keys take their defaults.
    ///
    /// # Errors
    /// Returns `ConfigError::Toml` for malformed documents and any error from
    /// [`CalendarConfig::validate`].
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s).map_err(|e| ConfigError::Toml(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// # Errors
    /// Returns `ConfigError::InvalidDetail` when a detail bound is `day`,
    /// `ConfigError::DetailOrder` when `min_detail` is finer than `max_detail`
    /// and `ConfigError::InvalidBounds` when `min_date > max_date`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, granularity) in [("min_detail", self.min_detail), ("max_detail", self.max_detail)] {
            if !granularity.is_view() {
                return Err(ConfigError::InvalidDetail { field, granularity });
            }
        }
        if self.min_detail > self.max_detail {
            return Err(ConfigError::DetailOrder {
                min: self.min_detail,
                max: self.max_detail,
            });
        }
        Period::new(self.min_date(), self.max_date()).map_err(|_| ConfigError::InvalidBounds {
            min: self.min_date(),
            max: self.max_date(),
        })?;
        Ok(())
    }

    /// Lower instant bound, defaulting to the start of year 1.
    pub fn min_date(&self) -> NaiveDateTime {
        self.min_date.unwrap_or_else(|| ymd(1, 1, 1))
    }

    /// Upper instant bound, defaulting to the largest representable instant.
    pub fn max_date(&self) -> NaiveDateTime {
        self.max_date.unwrap_or(NaiveDateTime::MAX)
    }

    pub fn locale(&self) -> &str {
        self.locale.as_deref().unwrap_or(DEFAULT_LOCALE)
    }

    pub fn calendar_type(&self) -> CalendarType {
        self.calendar_type
            .unwrap_or_else(|| CalendarType::from_locale(self.locale()))
    }

    pub fn show_fixed_number_of_weeks(&self) -> bool {
        self.show_fixed_number_of_weeks.unwrap_or(self.show_double_view)
    }

    /// Views between `min_detail` and `max_detail`, coarsest first.
    pub fn views(&self) -> Vec<Granularity> {
        limited_views(self.min_detail, self.max_detail)
    }

    pub const fn value_type(&self) -> Granularity {
        self.max_detail.value_type()
    }

    pub fn detail(&self) -> Detail {
        Detail {
            max_detail: self.max_detail,
            min_date:   Some(self.min_date()),
            max_date:   Some(self.max_date()),
        }
    }
}
