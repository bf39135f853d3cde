//! Error types for completion keys and plan catalogs.

use thiserror::Error;

/// Errors that can occur when parsing a completion key.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum KeyError {
    #[error("missing '-' separator in completion key: {0}")]
    MissingSeparator(String),

    #[error("invalid week number in completion key: {0}")]
    BadWeek(String),

    #[error("invalid day number in completion key: {0}")]
    BadDay(String),
}

/// Errors that can occur when validating a plan catalog.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("timeline {0} is missing from the catalog")]
    MissingTimeline(&'static str),

    #[error("timeline {0} appears more than once")]
    DuplicateTimeline(&'static str),

    #[error("{timeline}: expected week {expected}, found week {found}")]
    WeekOutOfSequence {
        timeline: &'static str,
        expected: u32,
        found: u32,
    },

    #[error("{timeline}: week {week} lists day {day} more than once")]
    DuplicateDay {
        timeline: &'static str,
        week: u32,
        day: u32,
    },

    #[error("{timeline}: day number must start at 1 (week {week})")]
    ZeroDay { timeline: &'static str, week: u32 },

    #[error("{timeline}: workout plan has {workout_weeks} weeks but diet plan has {diet_weeks}")]
    WeekCountMismatch {
        timeline: &'static str,
        workout_weeks: usize,
        diet_weeks: usize,
    },
}
