use crate::consts::{DECADE_LABEL_SEPARATOR, MIN_NAVIGABLE_YEAR};
use crate::dates;
use crate::events::Action;
use crate::format::{FormatStyle, FormatterCache};
use crate::granularity::Granularity;
use crate::prelude::*;
use crate::view::next_coarser_view;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Previous,
    Next,
}

impl Direction {
    pub const fn action(self) -> Action {
        match self {
            Self::Previous => Action::Prev,
            Self::Next => Action::Next,
        }
    }
}

/// State of the navigation bar for the displayed period.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Navigation {
    pub view:               Granularity,
    pub active_start_date:  NaiveDateTime,
    /// Start of the preceding period
    pub previous:           NaiveDateTime,
    /// Start of the following period
    pub next:               NaiveDateTime,
    pub prev_disabled:      bool,
    pub next_disabled:      bool,
    pub drill_up_available: bool,
}

impl Navigation {
    pub fn new(
        view: Granularity,
        active_start_date: NaiveDateTime,
        views: &[Granularity],
        min_date: Option<NaiveDateTime>,
        max_date: Option<NaiveDateTime>,
    ) -> Self {
        let previous = dates::begin_previous(view, active_start_date);
        let next = dates::begin_next(view, active_start_date);

        let prev_disabled = previous.year() < MIN_NAVIGABLE_YEAR
            || min_date.is_some_and(|min| min >= dates::end_previous(view, active_start_date));
        let next_disabled = max_date.is_some_and(|max| max < next);

        Self {
            view,
            active_start_date,
            previous,
            next,
            prev_disabled,
            next_disabled,
            drill_up_available: next_coarser_view(views, view).is_some(),
        }
    }

    /// Where a navigation button leads, or `None` when the button is inert.
    pub const fn target(&self, direction: Direction) -> Option<NaiveDateTime> {
        match direction {
            Direction::Previous if !self.prev_disabled => Some(self.previous),
            Direction::Next if !self.next_disabled => Some(self.next),
            _ => None,
        }
    }

    /// Title of the drill-up control. With a double view the following period
    /// is appended.
    pub fn label(&self, formatter: &mut FormatterCache, locale: Option<&str>, show_double_view: bool) -> String {
        let label = self.period_label(formatter, locale, self.active_start_date);
        if show_double_view {
            let next = self.period_label(formatter, locale, self.next);
            format!("{label}{DECADE_LABEL_SEPARATOR}{next}")
        } else {
            label
        }
    }

    fn period_label(&self, formatter: &mut FormatterCache, locale: Option<&str>, date: NaiveDateTime) -> String {
        match self.view {
            Granularity::Decade => formatter.decade_label(locale, date),
            Granularity::Year => formatter.format(FormatStyle::Year, locale, date),
            Granularity::Month | Granularity::Day => formatter.format(FormatStyle::MonthYear, locale, date),
        }
    }
}
