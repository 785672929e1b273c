//! Shared helpers for unit tests.

use chrono::{NaiveDate, NaiveDateTime};

use crate::clock::FixedClock;
use crate::config::CalendarConfig;

/// Midnight of the given calendar day.
pub fn day(year: i32, month: u32, day: u32) -> NaiveDateTime {
    at(year, month, day, 0, 0, 0)
}

pub fn at(year: i32, month: u32, day: u32, hour: u32, min: u32, sec: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|d| d.and_hms_opt(hour, min, sec))
        .expect("valid test instant")
}

pub fn at_ms(year: i32, month: u32, day: u32, hour: u32, min: u32, sec: u32, milli: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|d| d.and_hms_milli_opt(hour, min, sec, milli))
        .expect("valid test instant")
}

/// Clock frozen at 2024-03-15 10:30.
pub fn fixed_clock() -> FixedClock {
    FixedClock(at(2024, 3, 15, 10, 30, 0))
}

/// Range-mode configuration with everything else at defaults.
pub fn range_config() -> CalendarConfig {
    CalendarConfig {
        select_range: true,
        ..CalendarConfig::default()
    }
}

/// A spread of instants used by the period math property checks.
pub fn sample_instants() -> Vec<NaiveDateTime> {
    vec![
        day(2024, 1, 1),
        at_ms(2024, 2, 29, 23, 59, 59, 999),
        at(2024, 3, 15, 10, 30, 0),
        at(2023, 12, 31, 12, 0, 0),
        day(2000, 2, 29),
        at(1999, 12, 31, 23, 0, 0),
        at(2030, 6, 1, 8, 15, 0),
        day(1, 1, 1),
        at(-45, 7, 4, 6, 0, 0),
    ]
}
