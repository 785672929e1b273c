//! Period boundary math.
//!
//! Every function here is total: date construction saturates at the bounds
//! chrono can represent instead of failing.

use crate::consts::{DAYS_IN_WEEK, DECADE_SPAN, DECEMBER, JANUARY, MIN_DAY};
use crate::granularity::Granularity;
use crate::prelude::*;
use crate::range::Period;
use crate::types::CalendarType;

/// First instant of the period containing `instant`.
pub fn begin(granularity: Granularity, instant: NaiveDateTime) -> NaiveDateTime {
    let year = instant.year();
    match granularity {
        Granularity::Decade => ymd(begin_of_decade_year(instant), JANUARY, MIN_DAY),
        Granularity::Year => ymd(year, JANUARY, MIN_DAY),
        Granularity::Month => ymd(year, instant.month(), MIN_DAY),
        Granularity::Day => midnight(instant.date()),
    }
}

/// Last instant (millisecond precision) of the period containing `instant`.
pub fn end(granularity: Granularity, instant: NaiveDateTime) -> NaiveDateTime {
    let next = begin_next(granularity, instant);
    if next == NaiveDateTime::MAX {
        return next;
    }
    before(next)
}

/// First instant of the period following the one containing `instant`.
pub fn begin_next(granularity: Granularity, instant: NaiveDateTime) -> NaiveDateTime {
    let year = instant.year();
    match granularity {
        Granularity::Decade => ymd(begin_of_decade_year(instant) + DECADE_SPAN, JANUARY, MIN_DAY),
        Granularity::Year => ymd(year + 1, JANUARY, MIN_DAY),
        Granularity::Month => {
            let (y, m) = next_month(year, instant.month());
            ymd(y, m, MIN_DAY)
        },
        Granularity::Day => instant
            .date()
            .succ_opt()
            .map_or(NaiveDateTime::MAX, midnight),
    }
}

/// First instant of the period preceding the one containing `instant`.
pub fn begin_previous(granularity: Granularity, instant: NaiveDateTime) -> NaiveDateTime {
    let year = instant.year();
    match granularity {
        Granularity::Decade => ymd(begin_of_decade_year(instant) - DECADE_SPAN, JANUARY, MIN_DAY),
        Granularity::Year => ymd(year - 1, JANUARY, MIN_DAY),
        Granularity::Month => {
            let (y, m) = previous_month(year, instant.month());
            ymd(y, m, MIN_DAY)
        },
        Granularity::Day => instant
            .date()
            .pred_opt()
            .map_or(NaiveDateTime::MIN, midnight),
    }
}

/// Last instant of the period preceding the one containing `instant`.
pub fn end_previous(granularity: Granularity, instant: NaiveDateTime) -> NaiveDateTime {
    before(begin(granularity, instant))
}

/// Both bounds of the period containing `instant`.
pub fn range(granularity: Granularity, instant: NaiveDateTime) -> Period {
    Period::of(granularity, instant)
}

/// First year of the fixed ten-year bucket containing `instant`.
///
/// Buckets are `floor(year / 10) * 10`, so 2020..=2029 share one decade.
pub fn begin_of_decade_year(instant: NaiveDateTime) -> i32 {
    instant.year().div_euclid(DECADE_SPAN) * DECADE_SPAN
}

pub fn days_in_month(instant: NaiveDateTime) -> u32 {
    let first = begin(Granularity::Month, instant);
    let next = begin_next(Granularity::Month, instant);
    u32::try_from((next.date() - first.date()).num_days()).unwrap_or(0)
}

/// Position of `instant`'s weekday in a week row, `0..7`.
pub fn day_of_week(instant: NaiveDateTime, calendar_type: CalendarType) -> u32 {
    let weekday = instant.weekday().num_days_from_sunday();
    match calendar_type {
        CalendarType::Iso8601 => (weekday + 6) % DAYS_IN_WEEK,
        CalendarType::Islamic => (weekday + 1) % DAYS_IN_WEEK,
        CalendarType::Hebrew | CalendarType::Gregory => weekday,
    }
}

/// Midnight of the first day of the week row containing `instant`.
pub fn begin_of_week(instant: NaiveDateTime, calendar_type: CalendarType) -> NaiveDateTime {
    let offset = TimeDelta::days(i64::from(day_of_week(instant, calendar_type)));
    let day = begin(Granularity::Day, instant);
    day.checked_sub_signed(offset).unwrap_or(NaiveDateTime::MIN)
}

/// Week of the year for `instant`.
///
/// Gregorian week one contains January 1st; every other calendar type uses the
/// ISO rule of week one containing January 4th. The week start itself always
/// follows `calendar_type`.
pub fn week_number(instant: NaiveDateTime, calendar_type: CalendarType) -> u32 {
    let anchor_day = if calendar_type == CalendarType::Gregory { 1 } else { 4 };
    let row_start = begin_of_week(instant, calendar_type);

    let mut year = instant.year() + 1;
    let begin_of_first_week = loop {
        let candidate = begin_of_week(ymd(year, JANUARY, anchor_day), calendar_type);
        if instant >= candidate {
            break candidate;
        }
        year -= 1;
    };

    let weeks = (row_start.date() - begin_of_first_week.date()).num_days() / i64::from(DAYS_IN_WEEK);
    u32::try_from(weeks + 1).unwrap_or(1)
}

pub fn is_weekend(instant: NaiveDateTime, calendar_type: CalendarType) -> bool {
    use chrono::Weekday::{Fri, Sat, Sun};

    let weekday = instant.weekday();
    match calendar_type {
        CalendarType::Islamic | CalendarType::Hebrew => matches!(weekday, Fri | Sat),
        CalendarType::Iso8601 | CalendarType::Gregory => matches!(weekday, Sat | Sun),
    }
}

// --- helpers for bounds ---

fn midnight(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

/// Midnight of a calendar day, saturating outside chrono's supported years.
pub(crate) fn ymd(year: i32, month: u32, day: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day).map_or_else(
        || {
            if year < 0 {
                NaiveDateTime::MIN
            } else {
                NaiveDateTime::MAX
            }
        },
        midnight,
    )
}

fn before(instant: NaiveDateTime) -> NaiveDateTime {
    instant
        .checked_sub_signed(TimeDelta::milliseconds(1))
        .unwrap_or(NaiveDateTime::MIN)
}

fn next_month(year: i32, month: u32) -> (i32, u32) {
    debug_assert!((JANUARY..=DECEMBER).contains(&month));
    if month == DECEMBER {
        (year + 1, JANUARY)
    } else {
        (year, month + 1)
    }
}

fn previous_month(year: i32, month: u32) -> (i32, u32) {
    debug_assert!((JANUARY..=DECEMBER).contains(&month));
    if month == JANUARY {
        (year - 1, DECEMBER)
    } else {
        (year, month - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::granularity::ALL_GRANULARITIES;
    use crate::test_utils::{at, at_ms, day, sample_instants};

    #[test]
    fn test_begin_and_end_cases() {
        struct TestCase {
            granularity: Granularity,
            instant:     NaiveDateTime,
            begin:       NaiveDateTime,
            end:         NaiveDateTime,
        }

        let instant = at(2024, 2, 14, 15, 45, 10);
        let cases = [
            TestCase {
                granularity: Granularity::Decade,
                instant,
                begin: day(2020, 1, 1),
                end: at_ms(2029, 12, 31, 23, 59, 59, 999),
            },
            TestCase {
                granularity: Granularity::Year,
                instant,
                begin: day(2024, 1, 1),
                end: at_ms(2024, 12, 31, 23, 59, 59, 999),
            },
            TestCase {
                granularity: Granularity::Month,
                instant,
                begin: day(2024, 2, 1),
                end: at_ms(2024, 2, 29, 23, 59, 59, 999),
            },
            TestCase {
                granularity: Granularity::Day,
                instant,
                begin: day(2024, 2, 14),
                end: at_ms(2024, 2, 14, 23, 59, 59, 999),
            },
            TestCase {
                granularity: Granularity::Month,
                instant: day(2023, 2, 10),
                begin: day(2023, 2, 1),
                end: at_ms(2023, 2, 28, 23, 59, 59, 999),
            },
        ];

        for case in &cases {
            assert_eq!(begin(case.granularity, case.instant), case.begin, "begin {}", case.granularity);
            assert_eq!(end(case.granularity, case.instant), case.end, "end {}", case.granularity);
        }
    }

    #[test]
    fn test_begin_end_enclose_instant() {
        for instant in sample_instants() {
            for g in ALL_GRANULARITIES {
                assert!(begin(g, instant) <= instant, "begin({g}, {instant})");
                assert!(instant <= end(g, instant), "end({g}, {instant})");
            }
        }
    }

    #[test]
    fn test_begin_is_idempotent() {
        for instant in sample_instants() {
            for g in ALL_GRANULARITIES {
                let floored = begin(g, instant);
                assert_eq!(begin(g, floored), floored, "begin({g}) twice on {instant}");
            }
        }
    }

    #[test]
    fn test_periods_tile_without_gap_or_overlap() {
        for instant in sample_instants() {
            for g in ALL_GRANULARITIES {
                let start = begin(g, instant);
                let next = begin_next(g, start);
                assert!(next > start, "begin_next({g}) must advance from {start}");
                assert_eq!(end(g, instant) + TimeDelta::milliseconds(1), next, "{g} at {instant}");
                assert_eq!(begin_next(g, instant), next);
            }
        }
    }

    #[test]
    fn test_previous_period_bounds() {
        for instant in sample_instants() {
            for g in ALL_GRANULARITIES {
                let previous = begin_previous(g, instant);
                assert_eq!(begin_next(g, previous), begin(g, instant), "{g} at {instant}");
                assert_eq!(end_previous(g, instant), end(g, previous), "{g} at {instant}");
            }
        }
    }

    #[test]
    fn test_month_navigation_crosses_year() {
        assert_eq!(begin_next(Granularity::Month, day(2023, 12, 20)), day(2024, 1, 1));
        assert_eq!(begin_previous(Granularity::Month, day(2024, 1, 20)), day(2023, 12, 1));
        assert_eq!(end_previous(Granularity::Month, day(2024, 3, 9)), at_ms(2024, 2, 29, 23, 59, 59, 999));
    }

    #[test]
    fn test_decade_buckets() {
        assert_eq!(begin_of_decade_year(day(2020, 1, 1)), 2020);
        assert_eq!(begin_of_decade_year(day(2029, 12, 31)), 2020);
        assert_eq!(begin_of_decade_year(day(2030, 1, 1)), 2030);
        assert_eq!(begin_of_decade_year(day(1, 6, 1)), 0);
        assert_eq!(begin_of_decade_year(day(-1, 6, 1)), -10);

        assert_eq!(begin_next(Granularity::Decade, day(2024, 5, 5)), day(2030, 1, 1));
        assert_eq!(begin_previous(Granularity::Decade, day(2024, 5, 5)), day(2010, 1, 1));
    }

    #[test]
    fn test_range_matches_begin_end() {
        let instant = at(2024, 3, 15, 10, 30, 0);
        let period = range(Granularity::Month, instant);
        assert_eq!(period.start(), day(2024, 3, 1));
        assert_eq!(period.end(), end(Granularity::Month, instant));
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(day(2024, 2, 10)), 29);
        assert_eq!(days_in_month(day(2023, 2, 10)), 28);
        assert_eq!(days_in_month(day(2024, 4, 30)), 30);
        assert_eq!(days_in_month(day(2024, 12, 1)), 31);
    }

    #[test]
    fn test_day_of_week_by_calendar_type() {
        // 2024-03-10 is a Sunday
        let sunday = day(2024, 3, 10);
        assert_eq!(day_of_week(sunday, CalendarType::Iso8601), 6);
        assert_eq!(day_of_week(sunday, CalendarType::Gregory), 0);
        assert_eq!(day_of_week(sunday, CalendarType::Hebrew), 0);
        assert_eq!(day_of_week(sunday, CalendarType::Islamic), 1);

        let saturday = day(2024, 3, 9);
        assert_eq!(day_of_week(saturday, CalendarType::Islamic), 0);
    }

    #[test]
    fn test_begin_of_week() {
        // Wednesday
        let instant = at(2024, 3, 13, 18, 0, 0);
        assert_eq!(begin_of_week(instant, CalendarType::Iso8601), day(2024, 3, 11));
        assert_eq!(begin_of_week(instant, CalendarType::Gregory), day(2024, 3, 10));
        assert_eq!(begin_of_week(instant, CalendarType::Islamic), day(2024, 3, 9));
    }

    #[test]
    fn test_week_number_iso() {
        assert_eq!(week_number(day(2024, 1, 1), CalendarType::Iso8601), 1);
        assert_eq!(week_number(day(2024, 3, 13), CalendarType::Iso8601), 11);
        // 2021-01-01 belongs to the last ISO week of 2020
        assert_eq!(week_number(day(2021, 1, 1), CalendarType::Iso8601), 53);
        // 2024-12-30 already belongs to week one of 2025
        assert_eq!(week_number(day(2024, 12, 30), CalendarType::Iso8601), 1);
    }

    #[test]
    fn test_week_number_matches_chrono_iso_week() {
        let mut date = day(2019, 12, 1);
        while date < day(2021, 2, 1) {
            assert_eq!(
                week_number(date, CalendarType::Iso8601),
                date.iso_week().week(),
                "iso week of {date}"
            );
            date += TimeDelta::days(1);
        }
    }

    #[test]
    fn test_week_number_gregory() {
        // 2023-01-01 is a Sunday, so it opens week one
        assert_eq!(week_number(day(2023, 1, 1), CalendarType::Gregory), 1);
        assert_eq!(week_number(day(2023, 1, 8), CalendarType::Gregory), 2);
        // 2022-12-31 is a Saturday in the week containing 2022-12-25
        assert_eq!(week_number(day(2022, 12, 31), CalendarType::Gregory), 53);
        // 2024-12-29 (Sunday) starts the week holding 2025-01-01
        assert_eq!(week_number(day(2024, 12, 29), CalendarType::Gregory), 1);
    }

    #[test]
    fn test_is_weekend() {
        let friday = day(2024, 3, 8);
        let saturday = day(2024, 3, 9);
        let sunday = day(2024, 3, 10);

        assert!(!is_weekend(friday, CalendarType::Iso8601));
        assert!(is_weekend(saturday, CalendarType::Iso8601));
        assert!(is_weekend(sunday, CalendarType::Gregory));

        assert!(is_weekend(friday, CalendarType::Islamic));
        assert!(is_weekend(saturday, CalendarType::Hebrew));
        assert!(!is_weekend(sunday, CalendarType::Hebrew));
    }
}
