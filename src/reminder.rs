//! Reminders attached to calendar dates.
//!
//! The store is an in-memory list keyed by generated ids. It has no link to
//! the calendar controller; callers pass the date string they display.

use chrono::{DateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};
use uuid::Uuid;

const TIME_FORMAT: &str = "%H:%M";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReminderError {
    #[error("Invalid reminder time: {0} (expected HH:MM)")]
    InvalidTime(String),

    #[error("Reminder text is empty")]
    EmptyText,

    #[error("Duplicate reminder id: {0}")]
    DuplicateId(Uuid),

    #[error("Invalid reminder snapshot: {0}")]
    Json(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reminder {
    pub id:            Uuid,
    /// Date as formatted by the caller
    pub date:          String,
    pub text:          String,
    /// `HH:MM`, 24-hour clock
    pub time:          String,
    pub creation_time: DateTime<Utc>,
}

impl Reminder {
    /// # Errors
    /// Returns `ReminderError::EmptyText` for blank text and
    /// `ReminderError::InvalidTime` when `time` is not `HH:MM`.
    pub fn new(
        date: impl Into<String>,
        text: impl Into<String>,
        time: &str,
        now: DateTime<Utc>,
    ) -> Result<Self, ReminderError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(ReminderError::EmptyText);
        }
        Ok(Self {
            id: Uuid::new_v4(),
            date: date.into(),
            text,
            time: normalize_time(time)?,
            creation_time: now,
        })
    }

    fn validate(&self) -> Result<(), ReminderError> {
        if self.text.trim().is_empty() {
            return Err(ReminderError::EmptyText);
        }
        normalize_time(&self.time).map(|_| ())
    }
}

/// Parses `HH:MM` and renders it back zero-padded.
fn normalize_time(time: &str) -> Result<String, ReminderError> {
    NaiveTime::parse_from_str(time.trim(), TIME_FORMAT)
        .map(|t| t.format(TIME_FORMAT).to_string())
        .map_err(|_| ReminderError::InvalidTime(time.to_owned()))
}

/// Insertion-ordered reminder list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReminderStore {
    reminders: Vec<Reminder>,
}

impl ReminderStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a reminder stamped with the current time and returns its id.
    ///
    /// # Errors
    /// See [`Reminder::new`].
    pub fn add(&mut self, date: impl Into<String>, text: impl Into<String>, time: &str) -> Result<Uuid, ReminderError> {
        let reminder = Reminder::new(date, text, time, Utc::now())?;
        let id = reminder.id;
        debug!(%id, date = %reminder.date, time = %reminder.time, "reminder added");
        self.reminders.push(reminder);
        Ok(id)
    }

    /// Stores a reminder built elsewhere.
    ///
    /// # Errors
    /// Returns `ReminderError::DuplicateId` when the id is taken, or the
    /// validation error of [`Reminder::new`].
    pub fn insert(&mut self, reminder: Reminder) -> Result<(), ReminderError> {
        reminder.validate()?;
        if self.get(reminder.id).is_some() {
            return Err(ReminderError::DuplicateId(reminder.id));
        }
        debug!(id = %reminder.id, "reminder inserted");
        self.reminders.push(reminder);
        Ok(())
    }

    pub fn remove(&mut self, id: Uuid) -> Option<Reminder> {
        let Some(index) = self.reminders.iter().position(|r| r.id == id) else {
            trace!(%id, "no reminder to remove");
            return None;
        };
        debug!(%id, "reminder removed");
        Some(self.reminders.remove(index))
    }

    pub fn get(&self, id: Uuid) -> Option<&Reminder> {
        self.reminders.iter().find(|r| r.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Reminder> {
        self.reminders.iter()
    }

    /// Reminders for one date, earliest time first.
    pub fn for_date(&self, date: &str) -> Vec<&Reminder> {
        let mut reminders: Vec<&Reminder> = self.reminders.iter().filter(|r| r.date == date).collect();
        reminders.sort_by(|a, b| a.time.cmp(&b.time));
        reminders
    }

    pub fn len(&self) -> usize {
        self.reminders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reminders.is_empty()
    }

    /// # Errors
    /// Returns `ReminderError::Json` if serialization fails.
    pub fn to_json(&self) -> Result<String, ReminderError> {
        serde_json::to_string_pretty(self).map_err(|e| ReminderError::Json(e.to_string()))
    }

    /// Loads a snapshot written by [`ReminderStore::to_json`], validating every entry.
    ///
    /// # Errors
    /// Returns `ReminderError::Json` for malformed input, or the first
    /// validation error among the entries.
    pub fn from_json(s: &str) -> Result<Self, ReminderError> {
        let loaded: Vec<Reminder> = serde_json::from_str(s).map_err(|e| ReminderError::Json(e.to_string()))?;
        let mut store = Self::new();
        for reminder in loaded {
            store.insert(reminder)?;
        }
        Ok(store)
    }
}

impl<'a> IntoIterator for &'a ReminderStore {
    type Item = &'a Reminder;
    type IntoIter = std::slice::Iter<'a, Reminder>;

    fn into_iter(self) -> Self::IntoIter {
        self.reminders.iter()
    }
}
