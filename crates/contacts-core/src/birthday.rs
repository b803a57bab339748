//! Birthday dates and the upcoming-birthday window.
//!
//! A birthday travels over the wire as a date-time but only its calendar date
//! carries meaning. Input accepts a bare date (`1990-01-01`), a naive
//! date-time with or without seconds (`1990-01-01T08:30:00`, `1990-01-01T08:30`)
//! or an RFC 3339 timestamp; the date is
//! taken as written, with no timezone conversion. Output is always the date
//! at midnight (`1990-01-01T00:00:00`).

use std::{fmt, str::FromStr};

use chrono::{DateTime, Datelike, Days, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{Error, Result};

/// Number of consecutive days, starting today, that count as "upcoming".
pub const BIRTHDAY_WINDOW_DAYS: u64 = 8;

const WIRE_FORMAT: &str = "%Y-%m-%dT00:00:00";

// ─── Birthday ────────────────────────────────────────────────────────────────

/// A contact's date of birth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Birthday(NaiveDate);

impl Birthday {
  pub fn new(date: NaiveDate) -> Self { Self(date) }

  pub fn date(self) -> NaiveDate { self.0 }

  /// The recurring part of the birthday, ignoring the year.
  pub fn month_day(self) -> MonthDay { MonthDay::of(self.0) }
}

impl From<NaiveDate> for Birthday {
  fn from(date: NaiveDate) -> Self { Self(date) }
}

impl FromStr for Birthday {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> {
    let s = s.trim();

    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
      return Ok(Self(date));
    }
    for fmt in [
      "%Y-%m-%dT%H:%M:%S%.f",
      "%Y-%m-%d %H:%M:%S%.f",
      "%Y-%m-%dT%H:%M",
      "%Y-%m-%d %H:%M",
    ] {
      if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
        return Ok(Self(dt.date()));
      }
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
      return Ok(Self(dt.date_naive()));
    }

    Err(Error::InvalidBirthday(s.to_owned()))
  }
}

impl fmt::Display for Birthday {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0.format(WIRE_FORMAT))
  }
}

impl Serialize for Birthday {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(self)
  }
}

impl<'de> Deserialize<'de> for Birthday {
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    let raw = String::deserialize(deserializer)?;
    raw.parse().map_err(serde::de::Error::custom)
  }
}

// ─── MonthDay ────────────────────────────────────────────────────────────────

/// A (month, day) pair — the part of a date that recurs every year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MonthDay {
  pub month: u32,
  pub day:   u32,
}

impl MonthDay {
  pub fn of(date: NaiveDate) -> Self {
    Self { month: date.month(), day: date.day() }
  }
}

/// Renders as `MM-DD`, the same shape as SQLite's `strftime('%m-%d', ...)`.
impl fmt::Display for MonthDay {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{:02}-{:02}", self.month, self.day)
  }
}

/// The (month, day) pairs of `today` and the following seven days, in order.
///
/// Crosses month and year boundaries naturally. February 29 only appears when
/// the window passes through a real leap day, so a Feb 29 birthday is never
/// upcoming in a non-leap year.
pub fn birthday_window(today: NaiveDate) -> Vec<MonthDay> {
  (0..BIRTHDAY_WINDOW_DAYS)
    .filter_map(|offset| today.checked_add_days(Days::new(offset)))
    .map(MonthDay::of)
    .collect()
}
