//! Interval labels and the step rules they map to.
//!
//! Reporting windows are requested with human-readable labels ("1 hour",
//! "3 months", ...). Each label maps to exactly one [`StepRule`] through
//! [`IntervalLabel::step`], so dispatch happens once instead of being spread
//! over per-label branches.

use std::fmt;
use std::str::FromStr;

use chrono::{Days, Months, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::{self, WindowError};

// ── StepRule ────────────────────────────────────────────────────────────────

/// How far an interval advances from its start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "unit", content = "count", rename_all = "lowercase")]
pub enum StepRule {
    /// Fixed number of hours. Only the hour of the start time is kept; the
    /// result always lands on the top of an hour.
    Hours(u32),
    /// Fixed number of calendar days, keeping the start time-of-day.
    Days(u32),
    /// Calendar months, keeping the start time-of-day. Days past the end of
    /// the target month clamp to its last day (Jan 31 + 1 month = Feb 28).
    Months(u32),
}

impl StepRule {
    /// Advance `date` at `time` by this step and return the end instant.
    ///
    /// # Errors
    ///
    /// Returns [`WindowError::CalendarOverflow`] if the result falls outside
    /// the range chrono can represent.
    pub fn advance(&self, date: NaiveDate, time: NaiveTime) -> error::Result<NaiveDateTime> {
        let end = match *self {
            StepRule::Hours(n) => date
                .and_hms_opt(time.hour(), 0, 0)
                .and_then(|base| base.checked_add_signed(chrono::Duration::hours(i64::from(n)))),
            StepRule::Days(n) => date
                .checked_add_days(Days::new(u64::from(n)))
                .map(|d| d.and_time(time)),
            StepRule::Months(n) => date
                .checked_add_months(Months::new(n))
                .map(|d| d.and_time(time)),
        };

        end.ok_or_else(|| {
            WindowError::CalendarOverflow(format!("{date} {time} advanced by {self}"))
        })
    }

    /// Whether this rule moves by whole hours rather than calendar units.
    pub fn is_sub_day(&self) -> bool {
        matches!(self, StepRule::Hours(n) if *n < 24)
    }
}

impl fmt::Display for StepRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StepRule::Hours(n) => write!(f, "+{n}h"),
            StepRule::Days(n) => write!(f, "+{n}d"),
            StepRule::Months(n) => write!(f, "+{n}mo"),
        }
    }
}

// ── IntervalLabel ───────────────────────────────────────────────────────────

/// A named reporting interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "&'static str", try_from = "String")]
pub enum IntervalLabel {
    OneHour,
    ThreeHours,
    SixHours,
    TwelveHours,
    TwentyFourHours,
    OneDay,
    TwoDays,
    ThreeDays,
    FourDays,
    FiveDays,
    SixDays,
    OneWeek,
    OneMonth,
    ThreeMonths,
    SixMonths,
    TwelveMonths,
}

/// Canonical label text and step rule for every interval, shortest first.
static TABLE: [(IntervalLabel, &str, StepRule); 16] = [
    (IntervalLabel::OneHour, "1 hour", StepRule::Hours(1)),
    (IntervalLabel::ThreeHours, "3 hours", StepRule::Hours(3)),
    (IntervalLabel::SixHours, "6 hours", StepRule::Hours(6)),
    (IntervalLabel::TwelveHours, "12 hours", StepRule::Hours(12)),
    (IntervalLabel::TwentyFourHours, "24 hours", StepRule::Hours(24)),
    (IntervalLabel::OneDay, "1 day", StepRule::Days(1)),
    (IntervalLabel::TwoDays, "2 days", StepRule::Days(2)),
    (IntervalLabel::ThreeDays, "3 days", StepRule::Days(3)),
    (IntervalLabel::FourDays, "4 days", StepRule::Days(4)),
    (IntervalLabel::FiveDays, "5 days", StepRule::Days(5)),
    (IntervalLabel::SixDays, "6 days", StepRule::Days(6)),
    (IntervalLabel::OneWeek, "1 week", StepRule::Days(7)),
    (IntervalLabel::OneMonth, "1 month", StepRule::Months(1)),
    (IntervalLabel::ThreeMonths, "3 months", StepRule::Months(3)),
    (IntervalLabel::SixMonths, "6 months", StepRule::Months(6)),
    (IntervalLabel::TwelveMonths, "12 months", StepRule::Months(12)),
];

impl IntervalLabel {
    /// Every supported label, shortest interval first.
    pub const ALL: [IntervalLabel; 16] = [
        IntervalLabel::OneHour,
        IntervalLabel::ThreeHours,
        IntervalLabel::SixHours,
        IntervalLabel::TwelveHours,
        IntervalLabel::TwentyFourHours,
        IntervalLabel::OneDay,
        IntervalLabel::TwoDays,
        IntervalLabel::ThreeDays,
        IntervalLabel::FourDays,
        IntervalLabel::FiveDays,
        IntervalLabel::SixDays,
        IntervalLabel::OneWeek,
        IntervalLabel::OneMonth,
        IntervalLabel::ThreeMonths,
        IntervalLabel::SixMonths,
        IntervalLabel::TwelveMonths,
    ];

    fn entry(self) -> &'static (IntervalLabel, &'static str, StepRule) {
        // TABLE is ordered like the enum declaration.
        &TABLE[self as usize]
    }

    /// The canonical label text (e.g. `"3 months"`).
    pub fn as_str(self) -> &'static str {
        self.entry().1
    }

    /// The step rule this label advances by.
    pub fn step(self) -> StepRule {
        self.entry().2
    }
}

impl fmt::Display for IntervalLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IntervalLabel {
    type Err = WindowError;

    /// Parse a label. Case-insensitive; surrounding and repeated inner
    /// whitespace is ignored. No abbreviations are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase();

        TABLE
            .iter()
            .find(|(_, text, _)| *text == normalized)
            .map(|(label, _, _)| *label)
            .ok_or_else(|| WindowError::InvalidIntervalLabel(format!("'{}'", s.trim())))
    }
}

impl From<IntervalLabel> for &'static str {
    fn from(label: IntervalLabel) -> Self {
        label.as_str()
    }
}

impl TryFrom<String> for IntervalLabel {
    type Error = WindowError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────
