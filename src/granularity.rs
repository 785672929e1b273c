use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{CalendarError, prelude::*};

/// Zoom level of the calendar.
///
/// Variants are ordered from coarsest to finest, so `Decade < Day`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    #[display(fmt = "decade")]
    Decade,
    #[display(fmt = "year")]
    Year,
    #[display(fmt = "month")]
    Month,
    #[display(fmt = "day")]
    Day,
}

/// Every granularity, coarsest first.
pub const ALL_GRANULARITIES: [Granularity; 4] = [
    Granularity::Decade,
    Granularity::Year,
    Granularity::Month,
    Granularity::Day,
];

/// Granularities that can be displayed as a view. A day is only ever a tile.
pub const ALL_VIEWS: [Granularity; 3] = [Granularity::Decade, Granularity::Year, Granularity::Month];

impl Granularity {
    /// The next finer granularity, if any.
    pub const fn finer(self) -> Option<Self> {
        match self {
            Self::Decade => Some(Self::Year),
            Self::Year => Some(Self::Month),
            Self::Month => Some(Self::Day),
            Self::Day => None,
        }
    }

    /// The next coarser granularity, if any.
    pub const fn coarser(self) -> Option<Self> {
        match self {
            Self::Decade => None,
            Self::Year => Some(Self::Decade),
            Self::Month => Some(Self::Year),
            Self::Day => Some(Self::Month),
        }
    }

    /// Whether this granularity can be used as a view.
    pub const fn is_view(self) -> bool {
        !matches!(self, Self::Day)
    }

    /// Granularity at which a value selected in this view is measured.
    ///
    /// Selecting in a decade view picks a year, in a year view a month and in a
    /// month view a day. Day is already the finest unit and maps to itself.
    pub const fn value_type(self) -> Self {
        match self.finer() {
            Some(finer) => finer,
            None => Self::Day,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Decade => "decade",
            Self::Year => "year",
            Self::Month => "month",
            Self::Day => "day",
        }
    }
}

impl FromStr for Granularity {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        ALL_GRANULARITIES
            .into_iter()
            .find(|g| g.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| CalendarError::InvalidGranularity(trimmed.to_owned()))
    }
}
