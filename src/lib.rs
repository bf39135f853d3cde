//! coachtrack - Trainee plan progress and trainer analytics
//!
//! Workout and dietary programs, completion tracking and dashboards.

pub mod analytics;
pub mod config;
pub mod db;
pub mod error;
pub mod plans;
pub mod progress;
pub mod tui;

pub use db::Database;
pub use plans::Catalog;
