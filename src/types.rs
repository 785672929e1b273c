use serde::{Deserialize, Serialize};

use crate::consts::CALENDAR_TYPE_LOCALES;
use crate::prelude::*;

/// Week layout convention.
///
/// Decides which weekday opens a week row and which two days count as weekend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalendarType {
    /// Weeks start on Sunday
    #[display(fmt = "gregory")]
    Gregory,
    /// Weeks start on Sunday, weekend is Friday and Saturday
    #[display(fmt = "hebrew")]
    Hebrew,
    /// Weeks start on Saturday, weekend is Friday and Saturday
    #[display(fmt = "islamic")]
    Islamic,
    /// Weeks start on Monday
    #[default]
    #[display(fmt = "iso8601")]
    Iso8601,
}

impl CalendarType {
    /// Picks the calendar type conventionally used by a locale such as `en-US`.
    pub fn from_locale(locale: &str) -> Self {
        CALENDAR_TYPE_LOCALES
            .iter()
            .find(|(_, locales)| locales.contains(&locale))
            .map_or(Self::Iso8601, |(calendar_type, _)| *calendar_type)
    }
}

/// How a single committed instant is reduced before it is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReturnValue {
    /// Start of the selected period
    #[default]
    #[display(fmt = "start")]
    Start,
    /// Last instant of the selected period
    #[display(fmt = "end")]
    End,
    /// Both bounds of the selected period
    #[display(fmt = "range")]
    Range,
}

/// Order in which a two-pick range is stored at commit time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RangeOrder {
    /// `(first pick, second pick)`, even when the second pick is earlier
    #[default]
    #[display(fmt = "as_picked")]
    AsPicked,
    /// Earlier instant first
    #[display(fmt = "chronological")]
    Chronological,
}

/// A committed calendar value. Absence of a value is `Option::None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// A single instant. In range mode this is a selection in progress.
    Single(NaiveDateTime),
    /// A pair of instants; either side may be missing for a partial range.
    Range(Option<NaiveDateTime>, Option<NaiveDateTime>),
}

impl Value {
    /// Whether this is a bare instant rather than a pair
    pub const fn is_single(&self) -> bool {
        matches!(self, Self::Single(_))
    }

    /// A single instant, or a pair with both sides present
    pub const fn is_complete(&self) -> bool {
        match self {
            Self::Single(_) => true,
            Self::Range(from, to) => from.is_some() && to.is_some(),
        }
    }

    /// The lower side of the value: the instant itself, or the first element of a pair.
    pub const fn first(&self) -> Option<NaiveDateTime> {
        match *self {
            Self::Single(instant) => Some(instant),
            Self::Range(from, _) => from,
        }
    }

    /// The upper side of the value: the instant itself, or the second element of a pair.
    pub const fn second(&self) -> Option<NaiveDateTime> {
        match *self {
            Self::Single(instant) => Some(instant),
            Self::Range(_, to) => to,
        }
    }
}

impl From<NaiveDateTime> for Value {
    fn from(instant: NaiveDateTime) -> Self {
        Self::Single(instant)
    }
}

impl From<(NaiveDateTime, NaiveDateTime)> for Value {
    fn from((from, to): (NaiveDateTime, NaiveDateTime)) -> Self {
        Self::Range(Some(from), Some(to))
    }
}

/// A date-like input before normalization.
#[derive(Debug, Clone, PartialEq, Eq, Hash, From, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DateInput {
    Instant(NaiveDateTime),
    Text(String),
}

impl From<&str> for DateInput {
    fn from(s: &str) -> Self {
        Self::Text(s.to_owned())
    }
}

impl From<NaiveDate> for DateInput {
    fn from(date: NaiveDate) -> Self {
        Self::Instant(date.and_time(NaiveTime::MIN))
    }
}

/// Loosely typed value accepted from configuration and external setters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LooseValue {
    Range([Option<DateInput>; 2]),
    /// One-element array, read as a single piece
    Wrapped([Option<DateInput>; 1]),
    Piece(Option<DateInput>),
}

impl LooseValue {
    pub const fn null() -> Self {
        Self::Piece(None)
    }

    pub fn single(input: impl Into<DateInput>) -> Self {
        Self::Piece(Some(input.into()))
    }

    pub const fn range(from: Option<DateInput>, to: Option<DateInput>) -> Self {
        Self::Range([from, to])
    }

    /// Raw input at `index` of a pair, or the piece itself for both indexes.
    pub fn piece(&self, index: usize) -> Option<&DateInput> {
        match self {
            Self::Piece(piece) | Self::Wrapped([piece]) => piece.as_ref(),
            Self::Range(pair) => pair.get(index).and_then(Option::as_ref),
        }
    }
}

impl Default for LooseValue {
    fn default() -> Self {
        Self::null()
    }
}

impl From<Value> for LooseValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Single(instant) => Self::single(instant),
            Value::Range(from, to) => Self::range(from.map(DateInput::from), to.map(DateInput::from)),
        }
    }
}
