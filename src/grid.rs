//! Tile layouts for each view.

use crate::config::CalendarConfig;
use crate::consts::{DAYS_IN_WEEK, DECADE_SPAN, DECADE_TILES_WITH_NEIGHBORS, FIXED_WEEK_ROWS, JANUARY, MIN_DAY, MONTHS_IN_YEAR};
use crate::dates::{self, ymd};
use crate::format::{FormatStyle, FormatterCache};
use crate::granularity::Granularity;
use crate::prelude::*;
use crate::tile::{TileKind, TileTags};
use crate::types::{CalendarType, Value};

const DECADE_COLUMNS: u32 = 3;
const YEAR_COLUMNS: u32 = 3;

/// Everything tile rendering reads from the controller.
#[derive(Debug, Clone, Copy)]
pub struct GridContext<'a> {
    pub config: &'a CalendarConfig,
    pub value:  Option<&'a Value>,
    pub hover:  Option<NaiveDateTime>,
    pub now:    NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    pub date:        NaiveDateTime,
    pub kind:        TileKind,
    pub label:       String,
    pub title:       String,
    pub tags:        TileTags,
    pub disabled:    bool,
    /// Belongs to the neighboring month or decade
    pub neighboring: bool,
    /// Day tiles only
    pub weekend:     bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekNumber {
    pub number: u32,
    /// First day of the week row
    pub date:   NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekdayHeader {
    pub date:  NaiveDateTime,
    pub short: String,
    pub long:  String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    pub view:              Granularity,
    pub active_start_date: NaiveDateTime,
    pub columns:           u32,
    /// Empty cells before the first tile
    pub offset:            u32,
    pub tiles:             Vec<Tile>,
    /// Month view only
    pub weekdays:          Vec<WeekdayHeader>,
    /// Month view with week numbers enabled
    pub week_numbers:      Vec<WeekNumber>,
}

/// The displayed grid, followed by the next period's grid with a double view.
pub fn build_grids(
    context: &GridContext<'_>,
    view: Granularity,
    active_start_date: NaiveDateTime,
    formatter: &mut FormatterCache,
) -> Vec<Grid> {
    let mut grids = vec![build_grid(context, view, active_start_date, formatter)];
    if context.config.show_double_view {
        let next = dates::begin_next(view, active_start_date);
        grids.push(build_grid(context, view, next, formatter));
    }
    grids
}

pub fn build_grid(
    context: &GridContext<'_>,
    view: Granularity,
    active_start_date: NaiveDateTime,
    formatter: &mut FormatterCache,
) -> Grid {
    let active_start_date = dates::begin(view, active_start_date);
    let config = context.config;
    let calendar_type = config.calendar_type();
    let kind = TileKind::from_view(view);

    let (columns, offset, points) = match kind {
        TileKind::Year => (DECADE_COLUMNS, 0, decade_points(active_start_date, config.show_neighboring_decade)),
        TileKind::Month => (YEAR_COLUMNS, 0, year_points(active_start_date)),
        TileKind::Day => {
            let (offset, points) = month_points(active_start_date, config, calendar_type);
            (DAYS_IN_WEEK, offset, points)
        },
    };

    let locale = Some(config.locale());
    let tiles = points
        .into_iter()
        .map(|date| Tile {
            date,
            kind,
            label: kind.label(formatter, locale, date),
            title: kind.title(formatter, locale, date),
            tags: kind.classify(date, context.value, config.value_type(), context.hover, context.now),
            disabled: kind.is_disabled(date, config.min_date, config.max_date),
            neighboring: is_neighboring(kind, date, active_start_date),
            weekend: kind == TileKind::Day && dates::is_weekend(date, calendar_type),
        })
        .collect();

    let (weekdays, week_numbers) = if kind == TileKind::Day {
        let weekdays = weekday_headers(active_start_date, calendar_type, formatter, locale);
        let week_numbers = if config.show_week_numbers {
            week_numbers(active_start_date, calendar_type, config.show_fixed_number_of_weeks())
        } else {
            Vec::new()
        };
        (weekdays, week_numbers)
    } else {
        (Vec::new(), Vec::new())
    };

    Grid {
        view,
        active_start_date,
        columns,
        offset,
        tiles,
        weekdays,
        week_numbers,
    }
}

fn decade_points(active_start_date: NaiveDateTime, show_neighboring_decade: bool) -> Vec<NaiveDateTime> {
    let first = dates::begin_of_decade_year(active_start_date);
    let count = if show_neighboring_decade {
        DECADE_TILES_WITH_NEIGHBORS
    } else {
        DECADE_SPAN
    };
    (0..count).map(|i| ymd(first + i, JANUARY, MIN_DAY)).collect()
}

fn year_points(active_start_date: NaiveDateTime) -> Vec<NaiveDateTime> {
    let year = active_start_date.year();
    (JANUARY..=MONTHS_IN_YEAR).map(|month| ymd(year, month, MIN_DAY)).collect()
}

/// Leading offset and day tiles of a month grid.
///
/// Showing neighboring days or a fixed number of weeks fills the first row
/// with the end of the previous month. Fixed weeks always yield six full
/// rows; otherwise neighboring days run to the end of the last week.
fn month_points(
    active_start_date: NaiveDateTime,
    config: &CalendarConfig,
    calendar_type: CalendarType,
) -> (u32, Vec<NaiveDateTime>) {
    let show_fixed_weeks = config.show_fixed_number_of_weeks();
    let fills_weeks = show_fixed_weeks || config.show_neighboring_month;
    let day_of_week = dates::day_of_week(active_start_date, calendar_type);
    let days_in_month = i64::from(dates::days_in_month(active_start_date));

    let offset = if fills_weeks { 0 } else { day_of_week };
    let start = if fills_weeks { 1 - i64::from(day_of_week) } else { 1 };
    let end = if show_fixed_weeks {
        start + i64::from(FIXED_WEEK_ROWS * DAYS_IN_WEEK) - 1
    } else if config.show_neighboring_month {
        let last_day = dates::begin(Granularity::Day, dates::end(Granularity::Month, active_start_date));
        days_in_month + i64::from(DAYS_IN_WEEK - dates::day_of_week(last_day, calendar_type) - 1)
    } else {
        days_in_month
    };

    let points = (start..=end)
        .filter_map(|day| active_start_date.checked_add_signed(TimeDelta::days(day - 1)))
        .collect();
    (offset, points)
}

fn is_neighboring(kind: TileKind, date: NaiveDateTime, active_start_date: NaiveDateTime) -> bool {
    match kind {
        TileKind::Year => dates::begin_of_decade_year(date) != dates::begin_of_decade_year(active_start_date),
        TileKind::Month => false,
        TileKind::Day => date.month() != active_start_date.month() || date.year() != active_start_date.year(),
    }
}

fn weekday_headers(
    active_start_date: NaiveDateTime,
    calendar_type: CalendarType,
    formatter: &mut FormatterCache,
    locale: Option<&str>,
) -> Vec<WeekdayHeader> {
    let first = dates::begin_of_week(active_start_date, calendar_type);
    (0..DAYS_IN_WEEK)
        .filter_map(|i| first.checked_add_signed(TimeDelta::days(i64::from(i))))
        .map(|date| WeekdayHeader {
            date,
            short: formatter
                .format(FormatStyle::ShortWeekday, locale, date)
                .replace('.', ""),
            long: formatter.format(FormatStyle::Weekday, locale, date),
        })
        .collect()
}

/// Week numbers for each row of a month grid.
pub fn week_numbers(
    active_start_date: NaiveDateTime,
    calendar_type: CalendarType,
    show_fixed_number_of_weeks: bool,
) -> Vec<WeekNumber> {
    let rows = if show_fixed_number_of_weeks {
        FIXED_WEEK_ROWS
    } else {
        let first_weekday = dates::day_of_week(active_start_date, calendar_type);
        let after_first_row = dates::days_in_month(active_start_date).saturating_sub(DAYS_IN_WEEK - first_weekday);
        1 + after_first_row.div_ceil(DAYS_IN_WEEK)
    };

    (0..rows)
        .filter_map(|row| active_start_date.checked_add_signed(TimeDelta::days(i64::from(row * DAYS_IN_WEEK))))
        .map(|date| {
            let date = dates::begin_of_week(date, calendar_type);
            WeekNumber {
                number: dates::week_number(date, calendar_type),
                date,
            }
        })
        .collect()
}
