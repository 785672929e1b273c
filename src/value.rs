//! Coercion of loosely typed inputs into canonical [`Value`]s.

use chrono::DateTime;
use tracing::warn;

use crate::granularity::Granularity;
use crate::prelude::*;
use crate::types::{DateInput, LooseValue, Value};
use crate::{CalendarError, dates};

const DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];

/// Parses a single date-like input.
///
/// # Errors
/// Returns `CalendarError::InvalidDate` when text matches none of the accepted
/// calendar date formats.
pub fn to_date(input: &DateInput) -> Result<NaiveDateTime, CalendarError> {
    match input {
        DateInput::Instant(instant) => Ok(*instant),
        DateInput::Text(text) => parse_date_text(text),
    }
}

fn parse_date_text(text: &str) -> Result<NaiveDateTime, CalendarError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(CalendarError::InvalidDate(text.to_owned()));
    }

    if let Ok(with_offset) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(with_offset.naive_local());
    }

    DATE_TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).ok())
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|fmt| NaiveDate::parse_from_str(trimmed, fmt).ok())
                .map(|date| date.and_time(NaiveTime::MIN))
        })
        .ok_or_else(|| CalendarError::InvalidDate(text.to_owned()))
}

/// Parsed piece of a loose value: index 0 or 1 of a pair, or the bare value.
///
/// # Errors
/// Propagates `CalendarError::InvalidDate` from [`to_date`].
pub fn value_piece(value: &LooseValue, index: usize) -> Result<Option<NaiveDateTime>, CalendarError> {
    value.piece(index).map(to_date).transpose()
}

/// Coerces a loose value into a canonical one.
///
/// A pair with both sides missing becomes `None`. A pair with exactly one side
/// missing is kept only when `allow_partial_range` is set; otherwise it is
/// dropped to `None`.
///
/// # Errors
/// Returns `CalendarError::InvalidDate` if any present piece fails to parse.
pub fn normalize(value: &LooseValue, allow_partial_range: bool) -> Result<Option<Value>, CalendarError> {
    match value {
        LooseValue::Piece(None) | LooseValue::Wrapped([None]) => Ok(None),
        LooseValue::Piece(Some(input)) | LooseValue::Wrapped([Some(input)]) => {
            to_date(input).map(|d| Some(Value::Single(d)))
        },
        LooseValue::Range(_) => {
            let from = value_piece(value, 0)?;
            let to = value_piece(value, 1)?;
            match (from, to) {
                (None, None) => Ok(None),
                (Some(_), Some(_)) => Ok(Some(Value::Range(from, to))),
                _ if allow_partial_range => Ok(Some(Value::Range(from, to))),
                _ => {
                    warn!(?from, ?to, "partial range without allow_partial_range, dropping value");
                    Ok(None)
                },
            }
        },
    }
}

/// Whether a value is a lone instant, meaning a range selection is in progress.
pub const fn is_single_value(value: Option<&Value>) -> bool {
    matches!(value, Some(Value::Single(_)))
}

/// Clamps `value` into `[min, max]`; missing bounds are open.
pub fn between(value: NaiveDateTime, min: Option<NaiveDateTime>, max: Option<NaiveDateTime>) -> NaiveDateTime {
    match (min, max) {
        (Some(min), _) if min > value => min,
        (_, Some(max)) if max < value => max,
        _ => value,
    }
}

/// Reduces instants to the granularity of committed values, clamped to the
/// configured bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Detail {
    pub max_detail: Granularity,
    pub min_date:   Option<NaiveDateTime>,
    pub max_date:   Option<NaiveDateTime>,
}

impl Detail {
    pub const fn value_type(&self) -> Granularity {
        self.max_detail.value_type()
    }

    /// Start of the value period containing `instant`, clamped.
    pub fn value_from(&self, instant: NaiveDateTime) -> NaiveDateTime {
        between(dates::begin(self.value_type(), instant), self.min_date, self.max_date)
    }

    /// End of the value period containing `instant`, clamped.
    pub fn value_to(&self, instant: NaiveDateTime) -> NaiveDateTime {
        between(dates::end(self.value_type(), instant), self.min_date, self.max_date)
    }

    /// Both clamped bounds of the value period containing `instant`.
    pub fn value_range(&self, instant: NaiveDateTime) -> Value {
        Value::Range(Some(self.value_from(instant)), Some(self.value_to(instant)))
    }

    /// Clamped start derived from the lower side of a committed value.
    pub fn lower_bound_of(&self, value: Option<&Value>) -> Option<NaiveDateTime> {
        value.and_then(Value::first).map(|instant| self.value_from(instant))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{at, at_ms, day};

    #[test]
    fn test_to_date_accepts_common_formats() {
        struct TestCase {
            input:    &'static str,
            expected: NaiveDateTime,
        }

        let cases = [
            TestCase {
                input:    "2024-03-10",
                expected: day(2024, 3, 10),
            },
            TestCase {
                input:    " 2024-03-10 ",
                expected: day(2024, 3, 10),
            },
            TestCase {
                input:    "2024-03-10T08:15:30",
                expected: at(2024, 3, 10, 8, 15, 30),
            },
            TestCase {
                input:    "2024-03-10T08:15:30.250",
                expected: at_ms(2024, 3, 10, 8, 15, 30, 250),
            },
            TestCase {
                input:    "2024-03-10 08:15",
                expected: at(2024, 3, 10, 8, 15, 0),
            },
            TestCase {
                input:    "2024-03-10T08:15:30+02:00",
                expected: at(2024, 3, 10, 8, 15, 30),
            },
            TestCase {
                input:    "03/10/2024",
                expected: day(2024, 3, 10),
            },
            TestCase {
                input:    "2024/03/10",
                expected: day(2024, 3, 10),
            },
        ];

        for case in &cases {
            assert_eq!(
                to_date(&DateInput::from(case.input)).unwrap(),
                case.expected,
                "input {:?}",
                case.input
            );
        }
    }

    #[test]
    fn test_to_date_rejects_garbage() {
        for input in ["", "   ", "not a date", "2024-02-30", "2024-13-01", "10/03"] {
            let result = to_date(&DateInput::from(input));
            assert!(
                matches!(result, Err(CalendarError::InvalidDate(_))),
                "expected InvalidDate for {input:?}"
            );
        }
    }

    #[test]
    fn test_normalize_single() {
        assert_eq!(normalize(&LooseValue::null(), false).unwrap(), None);
        assert_eq!(
            normalize(&LooseValue::single("2024-03-10"), false).unwrap(),
            Some(Value::Single(day(2024, 3, 10)))
        );
        assert_eq!(
            normalize(&LooseValue::single(day(2024, 3, 10)), false).unwrap(),
            Some(Value::Single(day(2024, 3, 10)))
        );
    }

    #[test]
    fn test_normalize_one_element_array() {
        let wrapped: LooseValue = serde_json::from_str("[\"2024-03-10\"]").unwrap();
        assert_eq!(normalize(&wrapped, false).unwrap(), Some(Value::Single(day(2024, 3, 10))));

        let empty: LooseValue = serde_json::from_str("[null]").unwrap();
        assert_eq!(normalize(&empty, true).unwrap(), None);
    }

    #[test]
    fn test_normalize_pair_keeps_order() {
        let loose = LooseValue::range(Some("2024-03-10".into()), Some("2024-03-05".into()));
        assert_eq!(
            normalize(&loose, false).unwrap(),
            Some(Value::Range(Some(day(2024, 3, 10)), Some(day(2024, 3, 5))))
        );
    }

    #[test]
    fn test_normalize_partial_pair() {
        let loose = LooseValue::range(Some("2024-03-10".into()), None);
        assert_eq!(normalize(&loose, false).unwrap(), None);
        assert_eq!(
            normalize(&loose, true).unwrap(),
            Some(Value::Range(Some(day(2024, 3, 10)), None))
        );

        let empty = LooseValue::range(None, None);
        assert_eq!(normalize(&empty, true).unwrap(), None);
    }

    #[test]
    fn test_normalize_propagates_invalid_piece() {
        let loose = LooseValue::range(Some("2024-03-10".into()), Some("garbage".into()));
        assert_eq!(
            normalize(&loose, true),
            Err(CalendarError::InvalidDate("garbage".to_owned()))
        );
    }

    #[test]
    fn test_is_single_value() {
        assert!(is_single_value(Some(&Value::Single(day(2024, 1, 1)))));
        assert!(!is_single_value(Some(&Value::Range(Some(day(2024, 1, 1)), None))));
        assert!(!is_single_value(None));
    }

    #[test]
    fn test_between() {
        let min = Some(day(2024, 1, 1));
        let max = Some(day(2024, 12, 31));

        assert_eq!(between(day(2023, 6, 1), min, max), day(2024, 1, 1));
        assert_eq!(between(day(2025, 6, 1), min, max), day(2024, 12, 31));
        assert_eq!(between(day(2024, 6, 1), min, max), day(2024, 6, 1));
        assert_eq!(between(day(1900, 6, 1), None, None), day(1900, 6, 1));
    }

    #[test]
    fn test_detail_reduces_to_value_type() {
        let detail = Detail {
            max_detail: Granularity::Year,
            min_date:   None,
            max_date:   None,
        };
        let instant = at(2024, 3, 10, 14, 0, 0);

        assert_eq!(detail.value_type(), Granularity::Month);
        assert_eq!(detail.value_from(instant), day(2024, 3, 1));
        assert_eq!(detail.value_to(instant), at_ms(2024, 3, 31, 23, 59, 59, 999));
        assert_eq!(
            detail.value_range(instant),
            Value::Range(Some(day(2024, 3, 1)), Some(at_ms(2024, 3, 31, 23, 59, 59, 999)))
        );
    }

    #[test]
    fn test_detail_clamps_to_bounds() {
        let detail = Detail {
            max_detail: Granularity::Month,
            min_date:   Some(at(2024, 3, 10, 12, 0, 0)),
            max_date:   Some(at(2024, 3, 20, 12, 0, 0)),
        };

        assert_eq!(detail.value_from(day(2024, 3, 10)), at(2024, 3, 10, 12, 0, 0));
        assert_eq!(detail.value_to(day(2024, 3, 20)), at(2024, 3, 20, 12, 0, 0));
        assert_eq!(
            detail.lower_bound_of(Some(&Value::Range(Some(day(2024, 3, 1)), None))),
            Some(at(2024, 3, 10, 12, 0, 0))
        );
        assert_eq!(detail.lower_bound_of(None), None);
    }
}
