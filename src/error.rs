use chrono::NaiveDateTime;

use crate::granularity::Granularity;

/// Errors surfaced by value normalization and controller setters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// A date-like input could not be parsed into an instant.
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// A granularity name outside decade/year/month/day.
    #[error("Invalid granularity: {0} (expected decade, year, month or day)")]
    InvalidGranularity(String),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors raised while loading or validating a [`crate::CalendarConfig`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// `min_detail`/`max_detail` must name a view, not `day`.
    #[error("Invalid {field}: {granularity} is not a view")]
    InvalidDetail { field: &'static str, granularity: Granularity },

    #[error("min_detail ({min}) is finer than max_detail ({max})")]
    DetailOrder { min: Granularity, max: Granularity },

    #[error("min_date ({min}) is after max_date ({max})")]
    InvalidBounds { min: NaiveDateTime, max: NaiveDateTime },

    #[error("Invalid configuration: {0}")]
    Toml(String),
}
