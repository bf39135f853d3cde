//! Trainer dashboard aggregation across several trainees

use serde::Serialize;

use super::TraineeAnalytics;

/// One point of the per-week dashboard chart
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WeeklySeriesPoint {
    pub week_number: u32,
    pub calories_burned: u32,
    pub workouts_completed: u32,
    pub avg_adherence_percentage: u32,
    /// Trainees whose plan reaches this week
    pub trainees: u32,
}

#[derive(Debug, Clone, Default, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TrainerOverview {
    pub active_trainees: u32,
    pub total_workouts_completed: u32,
    pub total_calories_burned: u32,
    pub avg_progress_percentage: u32,
    pub avg_dietary_adherence_percentage: u32,
    pub weekly_series: Vec<WeeklySeriesPoint>,
}

impl TrainerOverview {
    pub fn from_trainees(trainees: &[TraineeAnalytics]) -> Self {
        Self::aggregate(trainees.iter())
    }

    /// Aggregate only the trainees picked on the dashboard
    pub fn for_selection(trainees: &[TraineeAnalytics], selected: &[String]) -> Self {
        Self::aggregate(trainees.iter().filter(|t| selected.contains(&t.uid)))
    }

    fn aggregate<'a>(trainees: impl Iterator<Item = &'a TraineeAnalytics>) -> Self {
        let trainees: Vec<_> = trainees.collect();
        let count = trainees.len() as u32;

        let total_workouts_completed = trainees.iter().map(|t| t.total_workouts_completed).sum();
        let total_calories_burned = trainees
            .iter()
            .fold(0u32, |sum, t| sum.saturating_add(t.total_calories_burned));
        let progress_sum = trainees.iter().map(|t| t.progress_percentage).sum();
        let adherence_sum = trainees.iter().map(|t| t.dietary_adherence_percentage).sum();

        let weeks = trainees
            .iter()
            .map(|t| t.weekly_calories.len().max(t.weekly_dietary_adherence.len()))
            .max()
            .unwrap_or(0);

        let weekly_series = (0..weeks)
            .map(|i| {
                let mut point = WeeklySeriesPoint {
                    week_number: i as u32 + 1,
                    calories_burned: 0,
                    workouts_completed: 0,
                    avg_adherence_percentage: 0,
                    trainees: 0,
                };
                let mut week_adherence = 0;
                let mut adherence_count = 0;

                for t in &trainees {
                    if let Some(w) = t.weekly_calories.get(i) {
                        point.calories_burned = point.calories_burned.saturating_add(w.calories_burned);
                        point.workouts_completed += w.workouts_completed;
                        point.trainees += 1;
                    }
                    if let Some(w) = t.weekly_dietary_adherence.get(i) {
                        week_adherence += w.adherence_percentage;
                        adherence_count += 1;
                    }
                }

                point.avg_adherence_percentage = average(week_adherence, adherence_count);
                point
            })
            .collect();

        Self {
            active_trainees: count,
            total_workouts_completed,
            total_calories_burned,
            avg_progress_percentage: average(progress_sum, count),
            avg_dietary_adherence_percentage: average(adherence_sum, count),
            weekly_series,
        }
    }

    pub fn format_summary(&self) -> String {
        [
            format!("Active trainees: {}", self.active_trainees),
            format!("Workouts completed: {}", self.total_workouts_completed),
            format!("Calories burned: {}", self.total_calories_burned),
            format!("Avg progress: {}%", self.avg_progress_percentage),
            format!("Avg dietary adherence: {}%", self.avg_dietary_adherence_percentage),
        ]
        .join("\n")
    }
}

fn average(sum: u32, count: u32) -> u32 {
    if count == 0 {
        return 0;
    }
    (sum as f64 / count as f64).round() as u32
}
