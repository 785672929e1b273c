//! Crate-internal prelude.
//!
//! Pulls in the derive macros from derive_more and the chrono types that
//! nearly every module works with.

#[allow(unused_imports)]
pub use derive_more::{Deref, Display, From};

#[allow(unused_imports)]
pub(crate) use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Timelike};
