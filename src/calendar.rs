//! The calendar controller.
//!
//! A [`Calendar`] owns the displayed view, the start of the displayed period,
//! the committed value and the hover instant. Every transition runs to
//! completion and reports what changed to the attached [`CalendarListener`].
//! Derived state (reachable views, value granularity, navigation) is
//! recomputed from the canonical fields on every call.
//!
//! The controller is `Send` whenever its listener is; callers sharing one
//! across threads serialize access with a mutex.

use tracing::{debug, trace, warn};

use crate::clock::{Clock, SystemClock};
use crate::config::CalendarConfig;
use crate::dates;
use crate::error::CalendarError;
use crate::events::{Action, CalendarListener, OnArgs};
use crate::format::FormatterCache;
use crate::granularity::Granularity;
use crate::grid::{self, Grid, GridContext};
use crate::navigation::{Direction, Navigation};
use crate::prelude::*;
use crate::types::{LooseValue, RangeOrder, ReturnValue, Value};
use crate::value::{is_single_value, normalize};
use crate::view::{effective_view, next_coarser_view, next_finer_view};

pub struct Calendar<L: CalendarListener = ()> {
    config:            CalendarConfig,
    view:              Granularity,
    active_start_date: NaiveDateTime,
    value:             Option<Value>,
    hover:             Option<NaiveDateTime>,
    clock:             Box<dyn Clock>,
    listener:          L,
}

impl Calendar<()> {
    /// A calendar on the system clock with no listener.
    ///
    /// # Errors
    /// See [`Calendar::build`].
    pub fn new(config: CalendarConfig) -> Result<Self, CalendarError> {
        Self::build(config, SystemClock, ())
    }
}

impl<L: CalendarListener> Calendar<L> {
    /// Validates `config`, normalizes its initial value and derives the
    /// initial view and displayed period.
    ///
    /// # Errors
    /// Returns `CalendarError::Config` for an invalid configuration and
    /// `CalendarError::InvalidDate` when the initial value does not parse.
    pub fn build(config: CalendarConfig, clock: impl Clock + 'static, listener: L) -> Result<Self, CalendarError> {
        config.validate()?;

        let value = match &config.initial_value {
            Some(loose) => normalize(loose, config.allow_partial_range)?,
            None => None,
        };

        let view = effective_view(config.initial_view, config.min_detail, config.max_detail);
        if let Some(requested) = config.initial_view.filter(|requested| *requested != view) {
            warn!(%requested, %view, "initial view outside detail bounds, using max detail");
        }

        let anchor = config.initial_active_start_date.unwrap_or_else(|| {
            config
                .detail()
                .lower_bound_of(value.as_ref())
                .unwrap_or_else(|| clock.now())
        });
        let active_start_date = dates::begin(view, anchor);

        debug!(%view, %active_start_date, ?value, "calendar initialized");

        Ok(Self {
            config,
            view,
            active_start_date,
            value,
            hover: None,
            clock: Box::new(clock),
            listener,
        })
    }

    // --- accessors ---

    pub const fn config(&self) -> &CalendarConfig {
        &self.config
    }

    pub const fn view(&self) -> Granularity {
        self.view
    }

    /// Views reachable by drilling, coarsest first.
    pub fn views(&self) -> Vec<Granularity> {
        self.config.views()
    }

    pub const fn active_start_date(&self) -> NaiveDateTime {
        self.active_start_date
    }

    pub const fn value(&self) -> Option<&Value> {
        self.value.as_ref()
    }

    /// Hover instant; always `None` outside range mode.
    pub const fn hover(&self) -> Option<NaiveDateTime> {
        if self.config.select_range { self.hover } else { None }
    }

    /// Granularity of committed values.
    pub const fn value_type(&self) -> Granularity {
        self.config.value_type()
    }

    pub fn now(&self) -> NaiveDateTime {
        self.clock.now()
    }

    pub fn drill_down_available(&self) -> bool {
        next_finer_view(&self.views(), self.view).is_some()
    }

    pub fn drill_up_available(&self) -> bool {
        next_coarser_view(&self.views(), self.view).is_some()
    }

    pub const fn listener(&self) -> &L {
        &self.listener
    }

    pub const fn listener_mut(&mut self) -> &mut L {
        &mut self.listener
    }

    pub fn into_listener(self) -> L {
        self.listener
    }

    pub fn navigation(&self) -> Navigation {
        Navigation::new(
            self.view,
            self.active_start_date,
            &self.views(),
            Some(self.config.min_date()),
            Some(self.config.max_date()),
        )
    }

    /// Tile grids for the displayed period, plus the following one with a
    /// double view.
    pub fn grids(&self, formatter: &mut FormatterCache) -> Vec<Grid> {
        let context = GridContext {
            config: &self.config,
            value:  self.value.as_ref(),
            hover:  self.hover(),
            now:    self.clock.now(),
        };
        grid::build_grids(&context, self.view, self.active_start_date, formatter)
    }

    // --- transitions ---

    /// Activates a tile: drills down when a finer view exists, commits otherwise.
    pub fn activate(&mut self, date: NaiveDateTime) {
        if self.drill_down_available() {
            self.drill_down(date);
        } else {
            self.commit(date);
        }
    }

    /// Moves one view finer, displaying the period that contains `target`.
    /// A no-op at the finest view.
    pub fn drill_down(&mut self, target: NaiveDateTime) {
        let Some(next_view) = next_finer_view(&self.views(), self.view) else {
            trace!(view = %self.view, "drill down unavailable");
            return;
        };

        self.listener.on_click_tile(self.view, target);
        let args = self.move_to(next_view, dates::begin(next_view, target), Action::DrillDown);
        self.listener.on_drill_down(&args);
    }

    /// Moves one view coarser. A no-op at the coarsest view.
    pub fn drill_up(&mut self) {
        let Some(next_view) = next_coarser_view(&self.views(), self.view) else {
            trace!(view = %self.view, "drill up unavailable");
            return;
        };

        let args = self.move_to(next_view, dates::begin(next_view, self.active_start_date), Action::DrillUp);
        self.listener.on_drill_up(&args);
    }

    /// Commits `target` as the new value, or as one side of a range.
    pub fn commit(&mut self, target: NaiveDateTime) {
        self.listener.on_click_tile(self.view, target);

        let select_range = self.config.select_range;
        let previous = self.value;
        let is_first_pick = select_range && !is_single_value(previous.as_ref());

        let next_value = match (select_range, previous) {
            (false, _) => self.processed_value(target),
            (true, Some(Value::Single(first))) => self.range_of(first, target),
            (true, _) => Value::Single(target),
        };

        let previous_start = self.active_start_date;
        if !select_range || is_first_pick || self.config.go_to_range_start_on_select {
            let anchor = self
                .config
                .detail()
                .lower_bound_of(Some(&next_value))
                .unwrap_or_else(|| self.clock.now());
            self.active_start_date = dates::begin(self.view, anchor);
        }
        self.value = Some(next_value);
        if select_range && !next_value.is_single() {
            self.hover = None;
        }

        debug!(view = %self.view, value = ?next_value, is_first_pick, "value committed");

        let args = self.args(Action::OnChange);
        if previous_start == self.active_start_date {
            trace!("active start date unchanged");
        } else {
            self.listener.on_active_start_date_change(&args);
        }

        if !select_range || !next_value.is_single() {
            self.listener.on_change(&next_value);
        } else if self.config.allow_partial_range {
            self.listener.on_change(&Value::Range(Some(target), None));
        }
    }

    /// Sets the hover instant. Ignored outside range mode.
    pub fn hover_over(&mut self, instant: NaiveDateTime) {
        if self.config.select_range {
            self.hover = Some(instant);
        }
    }

    pub fn clear_hover(&mut self) {
        self.hover = None;
    }

    /// Steps to the adjacent period at the current view.
    ///
    /// Returns `false` when that period lies outside the configured bounds.
    pub fn navigate(&mut self, direction: Direction) -> bool {
        let Some(target) = self.navigation().target(direction) else {
            trace!(?direction, view = %self.view, "navigation disabled");
            return false;
        };
        self.set_active_start_date(target, direction.action());
        true
    }

    /// Displays the period of the current view containing `date`.
    pub fn set_active_start_date(&mut self, date: NaiveDateTime, action: Action) {
        let next = dates::begin(self.view, date);
        let previous = std::mem::replace(&mut self.active_start_date, next);
        if previous == next {
            trace!(%action, "active start date unchanged");
            return;
        }
        debug!(%action, from = %previous, to = %next, "active start date changed");
        self.listener.on_active_start_date_change(&self.args(action));
    }

    /// Replaces the value from loosely typed input. No notification is sent.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidDate` if any piece fails to parse; the
    /// current value is kept in that case.
    pub fn set_value(&mut self, value: &LooseValue) -> Result<(), CalendarError> {
        self.value = normalize(value, self.config.allow_partial_range)?;
        Ok(())
    }

    /// Switches the displayed view without notifying. Views outside the detail
    /// bounds fall back to the finest allowed view.
    pub fn set_view(&mut self, view: Granularity) {
        let resolved = effective_view(Some(view), self.config.min_detail, self.config.max_detail);
        if resolved != view {
            warn!(requested = %view, %resolved, "view outside detail bounds");
        }
        self.view = resolved;
        self.active_start_date = dates::begin(resolved, self.active_start_date);
    }

    pub fn click_week_number(&mut self, week_number: u32, date: NaiveDateTime) {
        self.listener.on_click_week_number(week_number, date);
    }

    // --- internals ---

    fn args(&self, action: Action) -> OnArgs {
        OnArgs {
            action,
            active_start_date: Some(self.active_start_date),
            value: self.value,
            view: self.view,
        }
    }

    /// Applies a drill transition and sends the change notifications it warrants.
    fn move_to(&mut self, view: Granularity, active_start_date: NaiveDateTime, action: Action) -> OnArgs {
        let previous_view = std::mem::replace(&mut self.view, view);
        let previous_start = std::mem::replace(&mut self.active_start_date, active_start_date);
        debug!(%action, from = %previous_view, to = %view, %active_start_date, "view transition");

        let args = self.args(action);
        if previous_start != active_start_date {
            self.listener.on_active_start_date_change(&args);
        }
        if previous_view != view {
            self.listener.on_view_change(&args);
        }
        args
    }

    fn processed_value(&self, target: NaiveDateTime) -> Value {
        let detail = self.config.detail();
        match self.config.return_value {
            ReturnValue::Start => Value::Single(detail.value_from(target)),
            ReturnValue::End => Value::Single(detail.value_to(target)),
            ReturnValue::Range => detail.value_range(target),
        }
    }

    fn range_of(&self, first: NaiveDateTime, second: NaiveDateTime) -> Value {
        match self.config.range_order {
            RangeOrder::AsPicked => Value::Range(Some(first), Some(second)),
            RangeOrder::Chronological => Value::Range(Some(first.min(second)), Some(first.max(second))),
        }
    }
}
