//! Observation-window computation.
//!
//! A data-retrieval request for a site's time-series is bounded by a start
//! date, a start time-of-day and a named interval. [`compute_window`] turns
//! those three caller-facing strings/values into a [`TimeWindow`] whose end
//! bound can be embedded in the outgoing query. Everything here is a pure
//! function of its inputs: no clock access, no I/O.
//!
//! # Rules
//!
//! - Hour-based intervals ("1 hour" .. "24 hours") use only the hour of the
//!   start time. The end lands on `HH:00:00`, wrapping past midnight onto the
//!   next day when needed. "24 hours" is therefore the same hour, next day.
//! - Day, week and month intervals keep the start time-of-day unchanged and
//!   advance the date. Month arithmetic clamps to the end of shorter months.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use log::debug;
use serde::Serialize;

use crate::error::{self, WindowError};
use crate::interval::IntervalLabel;

/// Format used for the combined date-time bounds of [`TimeWindow::iso8601_interval`].
const ISO_DATETIME: &str = "%Y-%m-%dT%H:%M:%S";

// ── TimeOfDay ───────────────────────────────────────────────────────────────

/// A validated start time-of-day.
///
/// Parsed from `HH`, `HH:MM` or `HH:MM:SS`, where every component is exactly
/// two digits. The hour prefix is mandatory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay(NaiveTime);

impl TimeOfDay {
    pub fn as_naive(&self) -> NaiveTime {
        self.0
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%H:%M:%S"))
    }
}

impl FromStr for TimeOfDay {
    type Err = WindowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let invalid = || WindowError::InvalidTimeOfDay(format!("'{trimmed}'"));

        let parts: Vec<&str> = trimmed.split(':').collect();
        if parts.len() > 3 {
            return Err(invalid());
        }

        let mut fields = [0u32; 3];
        for (slot, part) in fields.iter_mut().zip(&parts) {
            *slot = parse_two_digits(part).ok_or_else(invalid)?;
        }

        let [hour, minute, second] = fields;
        if hour > 23 || minute > 59 || second > 59 {
            return Err(invalid());
        }

        NaiveTime::from_hms_opt(hour, minute, second)
            .map(Self)
            .ok_or_else(invalid)
    }
}

/// Parse exactly two ASCII digits.
fn parse_two_digits(s: &str) -> Option<u32> {
    if s.len() != 2 || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

// ── TimeWindow ──────────────────────────────────────────────────────────────

/// The bounds of one observation request.
///
/// Built fresh for each query and never persisted. The end bound is always
/// strictly after the start bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimeWindow {
    /// The interval the window was computed for.
    pub interval: IntervalLabel,
    pub start_date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_date: NaiveDate,
    pub end_time: NaiveTime,
}

impl TimeWindow {
    /// Combined start instant.
    pub fn start(&self) -> NaiveDateTime {
        self.start_date.and_time(self.start_time)
    }

    /// Combined end instant.
    pub fn end(&self) -> NaiveDateTime {
        self.end_date.and_time(self.end_time)
    }

    /// Length of the window. For hour-based intervals with a non-zero start
    /// minute this is shorter than the nominal interval, since the end is
    /// snapped to the top of the hour.
    pub fn duration(&self) -> chrono::Duration {
        self.end() - self.start()
    }

    /// Whether the window spans more than one calendar date.
    pub fn crosses_midnight(&self) -> bool {
        self.end_date != self.start_date
    }

    /// The window as an ISO 8601 interval, `start/end`
    /// (e.g. `2014-08-01T23:00:00/2014-08-02T00:00:00`).
    pub fn iso8601_interval(&self) -> String {
        format!(
            "{}/{}",
            self.start().format(ISO_DATETIME),
            self.end().format(ISO_DATETIME)
        )
    }
}

impl fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} -> {} {}",
            self.start_date,
            self.start_time.format("%H:%M:%S"),
            self.end_date,
            self.end_time.format("%H:%M:%S")
        )
    }
}

// ── compute_window ──────────────────────────────────────────────────────────

/// Compute the observation window for a named interval.
///
/// # Arguments
///
/// * `interval_label` — One of the supported labels (e.g. `"1 hour"`, `"3 months"`)
/// * `start_date` — The first calendar date of the window
/// * `start_time_of_day` — `HH`, `HH:MM` or `HH:MM:SS`
///
/// # Errors
///
/// Returns [`WindowError::InvalidIntervalLabel`] for an unrecognized label,
/// [`WindowError::InvalidTimeOfDay`] if the time cannot be parsed, or
/// [`WindowError::CalendarOverflow`] if the end date is not representable.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use window_engine::compute_window;
///
/// let start = NaiveDate::from_ymd_opt(2014, 8, 1).unwrap();
/// let window = compute_window("1 hour", start, "23").unwrap();
/// assert_eq!(window.end_date, NaiveDate::from_ymd_opt(2014, 8, 2).unwrap());
/// assert_eq!(window.end_time.to_string(), "00:00:00");
/// ```
pub fn compute_window(
    interval_label: &str,
    start_date: NaiveDate,
    start_time_of_day: &str,
) -> error::Result<TimeWindow> {
    let interval: IntervalLabel = interval_label.parse()?;
    let start_time: TimeOfDay = start_time_of_day.parse()?;
    compute_window_for(interval, start_date, start_time)
}

/// Typed variant of [`compute_window`] for callers that already hold a
/// parsed label and time-of-day.
pub fn compute_window_for(
    interval: IntervalLabel,
    start_date: NaiveDate,
    start_time: TimeOfDay,
) -> error::Result<TimeWindow> {
    let step = interval.step();
    let end = step.advance(start_date, start_time.as_naive())?;

    let window = TimeWindow {
        interval,
        start_date,
        start_time: start_time.as_naive(),
        end_date: end.date(),
        end_time: end.time(),
    };

    debug!(
        "window '{}' ({}): {}{}",
        interval,
        step,
        window,
        if step.is_sub_day() && window.crosses_midnight() {
            " [rolled over midnight]"
        } else {
            ""
        }
    );

    Ok(window)
}

// ── Tests ───────────────────────────────────────────────────────────────────
