//! Error types for window-engine operations.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WindowError {
    #[error("Invalid interval label: {0}")]
    InvalidIntervalLabel(String),

    #[error("Invalid time of day: {0}")]
    InvalidTimeOfDay(String),

    #[error("Calendar overflow: {0}")]
    CalendarOverflow(String),
}

pub type Result<T> = std::result::Result<T, WindowError>;
