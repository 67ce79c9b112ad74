//! Error types for meeting-slots operations.

use thiserror::Error;

/// Structurally invalid input, rejected before any computation runs.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SlotError {
    /// A range whose start lies after its end.
    #[error("Invalid time range: start {start} is after end {end}")]
    InvalidRange { start: u32, end: u32 },

    /// A range that runs past the end of the day.
    #[error("Time range {start}..{end} runs past the end of the day")]
    OutOfDay { start: u32, end: u32 },

    /// A clock string that is not a valid `HH:MM` time of day.
    #[error("Invalid time of day: {0}")]
    InvalidTime(String),
}

pub type Result<T> = std::result::Result<T, SlotError>;
