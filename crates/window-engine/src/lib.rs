//! # window-engine
//!
//! Deterministic observation-window computation for time-series clients.
//!
//! Environmental monitoring endpoints (river level, rainfall, ...) are queried
//! for a window starting at a date and time-of-day and spanning a named
//! interval such as `"6 hours"` or `"3 months"`. This crate turns that triple
//! into concrete start/end bounds a request can carry.
//!
//! ## Modules
//!
//! - [`interval`] — Interval labels and the step rule each one maps to
//! - [`window`] — Time-of-day parsing and window computation
//! - [`error`] — Error types

pub mod error;
pub mod interval;
pub mod window;

pub use error::WindowError;
pub use interval::{IntervalLabel, StepRule};
pub use window::{compute_window, compute_window_for, TimeOfDay, TimeWindow};
