use crate::{dates, granularity::Granularity, prelude::*};

/// A closed interval of instants, `[start, end]`.
///
/// Built through [`Period::new`] the start is never after the end. Committed
/// range values are classified as given, so the crate also builds unchecked
/// periods internally where the order is caller-determined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{start}/{end}")]
pub struct Period {
    start: NaiveDateTime,
    end:   NaiveDateTime,
}

/// Error type for period construction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    /// Start instant is after end instant.
    #[error("Invalid period: start ({start}) is after end ({end})")]
    InvalidRange { start: NaiveDateTime, end: NaiveDateTime },
}

impl Period {
    /// Creates a new period with validation.
    ///
    /// # Errors
    /// Returns `RangeError::InvalidRange` if start > end.
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Result<Self, RangeError> {
        if start > end {
            return Err(RangeError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// The period of `granularity` that contains `instant`.
    pub fn of(granularity: Granularity, instant: NaiveDateTime) -> Self {
        Self {
            start: dates::begin(granularity, instant),
            end:   dates::end(granularity, instant),
        }
    }

    /// Period spanning both instants, earlier first.
    pub fn spanning(a: NaiveDateTime, b: NaiveDateTime) -> Self {
        Self {
            start: a.min(b),
            end:   a.max(b),
        }
    }

    /// Keeps the bounds in the order given, even when `start > end`.
    /// Such a period contains nothing and overlaps nothing.
    pub(crate) const fn as_given(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self { start, end }
    }

    pub const fn start(&self) -> NaiveDateTime {
        self.start
    }

    pub const fn end(&self) -> NaiveDateTime {
        self.end
    }

    /// Returns both bounds as a tuple
    pub const fn bounds(&self) -> (NaiveDateTime, NaiveDateTime) {
        (self.start, self.end)
    }

    pub fn contains_instant(&self, instant: NaiveDateTime) -> bool {
        self.start <= instant && instant <= self.end
    }

    /// Checks if `other` lies entirely inside this period
    pub fn contains(&self, other: &Self) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// Checks if this period lies entirely inside `other`
    pub fn is_within(&self, other: &Self) -> bool {
        other.contains(self)
    }

    /// Checks if either bound of this period falls inside `other`.
    ///
    /// Unlike a full overlap test this is false when `other` sits strictly
    /// inside `self`; tile classification relies on that distinction.
    pub fn touches(&self, other: &Self) -> bool {
        other.contains_instant(self.start) || other.contains_instant(self.end)
    }

    /// Checks if the two periods share at least one instant
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start <= other.end && other.start <= self.end
    }
}
