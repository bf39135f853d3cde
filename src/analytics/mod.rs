//! Analytics module - per-trainee datasets and trainer dashboards
//!
//! Everything here is recomputed from the current goals document and the
//! selected program on every read; nothing is cached or persisted.

pub mod overview;

pub use overview::{TrainerOverview, WeeklySeriesPoint};

use serde::Serialize;

use crate::db::TraineeRecord;
use crate::plans::{Catalog, Timeline};
use crate::progress::{CompletionSet, DietProgress, Streak, WorkoutProgress};

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyCalories {
    pub week_number: u32,
    pub calories_burned: u32,
    pub workouts_completed: u32,
    pub workouts_scheduled: u32,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyAdherence {
    pub week_number: u32,
    pub adherence_percentage: u32,
    pub days_completed: u32,
}

/// Derived progress for one trainee
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TraineeAnalytics {
    pub uid: String,
    pub user_name: String,
    pub email: String,
    pub timeline: Timeline,
    pub weekly_calories: Vec<WeeklyCalories>,
    pub weekly_dietary_adherence: Vec<WeeklyAdherence>,
    pub total_workouts_completed: u32,
    pub total_workouts_in_plan: u32,
    pub total_calories_burned: u32,
    pub total_meal_days_completed: u32,
    pub total_meal_days_in_plan: u32,
    pub progress_percentage: u32,
    pub current_week: u32,
    pub dietary_adherence_percentage: u32,
    pub avg_daily_calories: u32,
    pub current_streak: u32,
    pub longest_streak: u32,
}

/// Build the analytics dataset for one trainee.
///
/// A trainee without a goals document gets zero progress on the default program.
pub fn generate_analytics_dataset(catalog: &Catalog, record: &TraineeRecord) -> TraineeAnalytics {
    let goals = record.goals.as_ref();
    let program = catalog.select(goals.and_then(|g| g.target_timeline.as_deref()));

    let workouts_done = goals
        .map(|g| CompletionSet::from_keys(&g.completed_workouts))
        .unwrap_or_default();
    let meals_done = goals
        .map(|g| CompletionSet::from_keys(&g.completed_meals))
        .unwrap_or_default();

    let workouts = WorkoutProgress::compute(&program.workout, &workouts_done);
    let diet = DietProgress::compute(&program.diet, &meals_done);
    let streak = Streak::compute(&program.workout, &workouts_done);

    let weekly_calories = workouts
        .weeks
        .iter()
        .map(|w| WeeklyCalories {
            week_number: w.week_number,
            calories_burned: w.calories_burned,
            workouts_completed: w.completed,
            workouts_scheduled: w.total,
        })
        .collect();

    let weekly_dietary_adherence = diet
        .weeks
        .iter()
        .map(|w| WeeklyAdherence {
            week_number: w.week_number,
            adherence_percentage: w.adherence_percentage,
            days_completed: w.completed_days,
        })
        .collect();

    TraineeAnalytics {
        uid: record.user.uid.clone(),
        user_name: record
            .user
            .display_name
            .clone()
            .unwrap_or_else(|| "Unknown".to_string()),
        email: record.user.email.clone().unwrap_or_default(),
        timeline: program.timeline,
        weekly_calories,
        weekly_dietary_adherence,
        total_workouts_completed: workouts.completed_count,
        total_workouts_in_plan: workouts.total_units,
        total_calories_burned: workouts.calories_burned,
        total_meal_days_completed: diet.completed_days,
        total_meal_days_in_plan: diet.total_days,
        progress_percentage: workouts.completion_percentage,
        current_week: workouts.current_week,
        dietary_adherence_percentage: diet.adherence_percentage,
        avg_daily_calories: diet.avg_daily_calories,
        current_streak: streak.current,
        longest_streak: streak.longest,
    }
}

/// Datasets for a whole roster, in roster order
pub fn roster_analytics(catalog: &Catalog, records: &[TraineeRecord]) -> Vec<TraineeAnalytics> {
    records
        .iter()
        .map(|record| generate_analytics_dataset(catalog, record))
        .collect()
}

impl TraineeAnalytics {
    /// Short text block for the CLI
    pub fn format_summary(&self) -> String {
        let mut lines = vec![
            format!("{} <{}>", self.user_name, self.email),
            format!("Plan: {} (week {})", self.timeline.label(), self.current_week),
            format!(
                "Workouts: {}/{} ({}%)",
                self.total_workouts_completed, self.total_workouts_in_plan, self.progress_percentage
            ),
            format!("Calories burned: {}", self.total_calories_burned),
            format!(
                "Meal days: {}/{} ({}%)",
                self.total_meal_days_completed, self.total_meal_days_in_plan, self.dietary_adherence_percentage
            ),
        ];

        if self.avg_daily_calories > 0 {
            lines.push(format!("Avg daily intake: {} kcal", self.avg_daily_calories));
        }
        if self.longest_streak > 0 {
            lines.push(format!(
                "Streak: {} (best {})",
                self.current_streak, self.longest_streak
            ));
        }

        lines.join("\n")
    }
}
