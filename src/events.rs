//! Notifications emitted by the calendar controller.

use serde::{Deserialize, Serialize};

use crate::granularity::Granularity;
use crate::prelude::*;
use crate::types::Value;

/// What triggered a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Action {
    #[display(fmt = "prev")]
    Prev,
    #[display(fmt = "next")]
    Next,
    #[display(fmt = "onChange")]
    OnChange,
    #[display(fmt = "drillUp")]
    DrillUp,
    #[display(fmt = "drillDown")]
    DrillDown,
}

/// Payload shared by view and active-start notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OnArgs {
    pub action:            Action,
    pub active_start_date: Option<NaiveDateTime>,
    pub value:             Option<Value>,
    pub view:              Granularity,
}

/// Receives controller notifications. Every hook defaults to a no-op.
pub trait CalendarListener {
    /// The displayed period moved to a different instant.
    fn on_active_start_date_change(&mut self, _args: &OnArgs) {}

    /// The displayed granularity changed.
    fn on_view_change(&mut self, _args: &OnArgs) {}

    fn on_drill_down(&mut self, _args: &OnArgs) {}

    fn on_drill_up(&mut self, _args: &OnArgs) {}

    /// A value was committed.
    fn on_change(&mut self, _value: &Value) {}

    /// A tile was activated. `view` is the view the tile belongs to.
    fn on_click_tile(&mut self, _view: Granularity, _date: NaiveDateTime) {}

    fn on_click_week_number(&mut self, _week_number: u32, _date: NaiveDateTime) {}
}

/// Silent listener.
impl CalendarListener for () {}

/// A recorded notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalendarEvent {
    ActiveStartDateChange(OnArgs),
    ViewChange(OnArgs),
    DrillDown(OnArgs),
    DrillUp(OnArgs),
    Change(Value),
    ClickTile { view: Granularity, date: NaiveDateTime },
    ClickWeekNumber { week_number: u32, date: NaiveDateTime },
}

/// Records every notification in order.
impl CalendarListener for Vec<CalendarEvent> {
    fn on_active_start_date_change(&mut self, args: &OnArgs) {
        self.push(CalendarEvent::ActiveStartDateChange(*args));
    }

    fn on_view_change(&mut self, args: &OnArgs) {
        self.push(CalendarEvent::ViewChange(*args));
    }

    fn on_drill_down(&mut self, args: &OnArgs) {
        self.push(CalendarEvent::DrillDown(*args));
    }

    fn on_drill_up(&mut self, args: &OnArgs) {
        self.push(CalendarEvent::DrillUp(*args));
    }

    fn on_change(&mut self, value: &Value) {
        self.push(CalendarEvent::Change(*value));
    }

    fn on_click_tile(&mut self, view: Granularity, date: NaiveDateTime) {
        self.push(CalendarEvent::ClickTile { view, date });
    }

    fn on_click_week_number(&mut self, week_number: u32, date: NaiveDateTime) {
        self.push(CalendarEvent::ClickWeekNumber { week_number, date });
    }
}
