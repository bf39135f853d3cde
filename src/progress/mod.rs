//! Progress module - pure reducers over a plan and a completion set
//!
//! Features:
//! - Completion keys and sets
//! - Workout completion, calories, current week and streaks
//! - Dietary adherence and average intake

pub mod diet;
pub mod key;
pub mod workout;

pub use diet::{DietProgress, DietWeekProgress};
pub use key::{CompletionKey, CompletionSet, toggle};
pub use workout::{Streak, WeekProgress, WorkoutProgress, todays_workout};

/// round(part / total * 100), 0 when total is 0
pub fn percentage(part: u32, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    (part as f64 / total as f64 * 100.0).round() as u32
}
