//! View and value engine for an embeddable date picker.
//!
//! [`Calendar`] tracks which period is displayed and what is selected, moving
//! between decade, year and month views. Period math lives in [`dates`],
//! tile tags in [`classify`] and label rendering in [`FormatterCache`].

mod calendar;
mod clock;
mod config;
mod consts;
pub mod dates;
mod error;
mod events;
mod format;
mod granularity;
mod grid;
mod navigation;
mod prelude;
mod range;
mod reminder;
mod tile;
mod types;
mod value;
mod view;

#[cfg(test)]
mod test_utils;

pub use calendar::Calendar;
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::CalendarConfig;
pub use consts::*;
pub use error::{CalendarError, ConfigError};
pub use events::{Action, CalendarEvent, CalendarListener, OnArgs};
pub use format::{FormatStyle, FormatterCache};
pub use granularity::{ALL_GRANULARITIES, ALL_VIEWS, Granularity};
pub use grid::{Grid, GridContext, Tile, WeekNumber, WeekdayHeader, build_grid, build_grids, week_numbers};
pub use navigation::{Direction, Navigation};
pub use range::{Period, RangeError};
pub use reminder::{Reminder, ReminderError, ReminderStore};
pub use tile::{TileKind, TileTag, TileTags, classify};
pub use types::{CalendarType, DateInput, LooseValue, RangeOrder, ReturnValue, Value};
pub use value::{Detail, between, is_single_value, normalize, to_date, value_piece};
pub use view::{effective_view, is_view_allowed, limited_views, next_coarser_view, next_finer_view, value_type};
