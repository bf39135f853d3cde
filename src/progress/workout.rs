//! Workout plan progress - completion, calories and streaks

use serde::Serialize;

use super::key::CompletionSet;
use super::percentage;
use crate::plans::{ScheduleDay, WorkoutPlan};

/// Progress within a single plan week
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WeekProgress {
    pub week_number: u32,
    pub focus: String,
    pub total: u32,
    pub completed: u32,
    pub calories_burned: u32,
    pub completion_percentage: u32,
}

/// Progress over a whole workout plan
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutProgress {
    pub weeks: Vec<WeekProgress>,
    pub total_units: u32,
    pub completed_count: u32,
    pub calories_burned: u32,
    pub completion_percentage: u32,
    /// Highest week with any completed day, 1 if none
    pub current_week: u32,
}

impl WorkoutProgress {
    pub fn compute(plan: &WorkoutPlan, completed: &CompletionSet) -> Self {
        let mut weeks = Vec::with_capacity(plan.weeks.len());
        let mut total_units = 0;
        let mut completed_count = 0;
        let mut calories_burned: u32 = 0;
        let mut current_week = None;

        for week in &plan.weeks {
            let total = week.schedule.len() as u32;
            let mut week_completed = 0;
            let mut week_calories: u32 = 0;

            for day in &week.schedule {
                if completed.contains(week.week_number, day.day) {
                    week_completed += 1;
                    week_calories = week_calories.saturating_add(day.calories_burned);
                }
            }

            if week_completed > 0 {
                current_week = current_week.max(Some(week.week_number));
            }

            total_units += total;
            completed_count += week_completed;
            calories_burned = calories_burned.saturating_add(week_calories);

            weeks.push(WeekProgress {
                week_number: week.week_number,
                focus: week.focus.clone(),
                total,
                completed: week_completed,
                calories_burned: week_calories,
                completion_percentage: percentage(week_completed, total),
            });
        }

        Self {
            weeks,
            total_units,
            completed_count,
            calories_burned,
            completion_percentage: percentage(completed_count, total_units),
            current_week: current_week.unwrap_or(1),
        }
    }

    pub fn week(&self, week_number: u32) -> Option<&WeekProgress> {
        self.weeks.iter().find(|w| w.week_number == week_number)
    }
}

/// First day of week 1 not yet completed.
///
/// Only the first week is inspected; once it is done this returns None
/// even if later weeks still have open days.
pub fn todays_workout<'a>(plan: &'a WorkoutPlan, completed: &CompletionSet) -> Option<&'a ScheduleDay> {
    let week = plan.weeks.first()?;
    week.schedule
        .iter()
        .find(|day| !completed.contains(week.week_number, day.day))
}

/// Consecutive completed workout days, rest days skipped
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Streak {
    /// Run containing the most recent completed workout day in plan order
    pub current: u32,
    pub longest: u32,
}

impl Streak {
    pub fn compute(plan: &WorkoutPlan, completed: &CompletionSet) -> Self {
        let mut run = 0;
        let mut streak = Streak::default();

        for week in &plan.weeks {
            for day in week.schedule.iter().filter(|d| !d.is_rest()) {
                if completed.contains(week.week_number, day.day) {
                    run += 1;
                    streak.current = run;
                    streak.longest = streak.longest.max(run);
                } else {
                    run = 0;
                }
            }
        }

        streak
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plans::{Catalog, DayKind, Intensity, Timeline, Week};

    fn one_month() -> WorkoutPlan {
        Catalog::builtin().get(Timeline::OneMonth).workout.clone()
    }

    fn day(day: u32, kind: DayKind, calories: u32) -> ScheduleDay {
        ScheduleDay {
            day,
            kind,
            workout_type: "Session".to_string(),
            description: String::new(),
            duration_minutes: 30,
            calories_burned: calories,
            intensity: Intensity::Moderate,
        }
    }

    #[test]
    fn test_no_completions() {
        let plan = one_month();
        let progress = WorkoutProgress::compute(&plan, &CompletionSet::new());

        assert_eq!(progress.completed_count, 0);
        assert_eq!(progress.calories_burned, 0);
        assert_eq!(progress.completion_percentage, 0);
        assert_eq!(progress.current_week, 1);
        for week in &progress.weeks {
            assert_eq!(week.completed, 0);
            assert_eq!(week.calories_burned, 0);
        }
    }

    #[test]
    fn test_total_units_match_schedule() {
        let catalog = Catalog::builtin();
        for program in catalog.programs() {
            let progress = WorkoutProgress::compute(&program.workout, &CompletionSet::new());
            assert_eq!(progress.total_units as usize, program.workout.total_days());
        }
    }

    #[test]
    fn test_week_one_calories() {
        let plan = one_month();
        let completed = CompletionSet::from_keys(["1-1", "1-2"]);
        let progress = WorkoutProgress::compute(&plan, &completed);

        let week = progress.week(1).unwrap();
        assert_eq!(week.calories_burned, 570);
        assert_eq!(week.completed, 2);
        assert_eq!(week.completion_percentage, 29); // 2/7
    }

    #[test]
    fn test_current_week_is_highest() {
        let plan = one_month();
        let completed = CompletionSet::from_keys(["1-1", "3-1"]);
        let progress = WorkoutProgress::compute(&plan, &completed);
        assert_eq!(progress.current_week, 3);
    }

    #[test]
    fn test_keys_outside_plan_ignored() {
        let plan = one_month();
        let completed = CompletionSet::from_keys(["9-1", "1-8"]);
        let progress = WorkoutProgress::compute(&plan, &completed);
        assert_eq!(progress.completed_count, 0);
        assert_eq!(progress.current_week, 1);
    }

    #[test]
    fn test_overall_percentage() {
        let plan = one_month();
        let keys: Vec<String> = (1..=7).map(|d| format!("1-{}", d)).collect();
        let progress = WorkoutProgress::compute(&plan, &CompletionSet::from_keys(&keys));
        assert_eq!(progress.completed_count, 7);
        assert_eq!(progress.completion_percentage, 25);
    }

    #[test]
    fn test_monotonic() {
        let plan = one_month();
        let mut completed = CompletionSet::new();
        let mut last = WorkoutProgress::compute(&plan, &completed);

        for week in &plan.weeks {
            for d in &week.schedule {
                completed.insert(crate::progress::CompletionKey::new(week.week_number, d.day));
                let next = WorkoutProgress::compute(&plan, &completed);
                assert!(next.completed_count >= last.completed_count);
                assert!(next.calories_burned >= last.calories_burned);
                last = next;
            }
        }
        assert_eq!(last.completion_percentage, 100);
    }

    #[test]
    fn test_idempotent() {
        let plan = one_month();
        let completed = CompletionSet::from_keys(["1-1", "2-4", "4-7"]);
        assert_eq!(
            WorkoutProgress::compute(&plan, &completed),
            WorkoutProgress::compute(&plan, &completed)
        );
    }

    #[test]
    fn test_empty_week_and_plan_guarded() {
        let plan = WorkoutPlan {
            weeks: vec![Week {
                week_number: 1,
                focus: "Empty".to_string(),
                schedule: vec![],
            }],
        };
        let progress = WorkoutProgress::compute(&plan, &CompletionSet::new());
        assert_eq!(progress.weeks[0].completion_percentage, 0);
        assert_eq!(progress.completion_percentage, 0);

        let empty = WorkoutPlan { weeks: vec![] };
        let progress = WorkoutProgress::compute(&empty, &CompletionSet::new());
        assert_eq!(progress.total_units, 0);
        assert_eq!(progress.completion_percentage, 0);
    }

    #[test]
    fn test_calories_saturate_instead_of_overflowing() {
        let plan = WorkoutPlan {
            weeks: vec![Week {
                week_number: 1,
                focus: "Huge".to_string(),
                schedule: vec![
                    day(1, DayKind::Workout, 3_000_000_000),
                    day(2, DayKind::Workout, 3_000_000_000),
                ],
            }],
        };
        let progress = WorkoutProgress::compute(&plan, &CompletionSet::from_keys(["1-1", "1-2"]));

        assert_eq!(progress.weeks[0].calories_burned, u32::MAX);
        assert_eq!(progress.calories_burned, u32::MAX);
        assert_eq!(progress.completed_count, 2);
        assert_eq!(progress.completion_percentage, 100);
    }

    #[test]
    fn test_todays_workout_first_open_day() {
        let plan = one_month();
        let today = todays_workout(&plan, &CompletionSet::from_keys(["1-1", "1-2"])).unwrap();
        assert_eq!(today.day, 3);

        let today = todays_workout(&plan, &CompletionSet::new()).unwrap();
        assert_eq!(today.day, 1);
    }

    #[test]
    fn test_todays_workout_only_week_one() {
        let plan = one_month();
        let keys: Vec<String> = (1..=7).map(|d| format!("1-{}", d)).collect();
        assert!(todays_workout(&plan, &CompletionSet::from_keys(&keys)).is_none());
    }

    #[test]
    fn test_streak_skips_rest_days() {
        let plan = WorkoutPlan {
            weeks: vec![Week {
                week_number: 1,
                focus: "Test".to_string(),
                schedule: vec![
                    day(1, DayKind::Workout, 100),
                    day(2, DayKind::Rest, 0),
                    day(3, DayKind::Workout, 100),
                    day(4, DayKind::Workout, 100),
                    day(5, DayKind::Workout, 100),
                ],
            }],
        };

        let streak = Streak::compute(&plan, &CompletionSet::from_keys(["1-1", "1-3"]));
        assert_eq!(streak, Streak { current: 2, longest: 2 });

        let streak = Streak::compute(&plan, &CompletionSet::from_keys(["1-1", "1-3", "1-5"]));
        assert_eq!(streak, Streak { current: 1, longest: 2 });
    }

    #[test]
    fn test_streak_empty() {
        let streak = Streak::compute(&one_month(), &CompletionSet::new());
        assert_eq!(streak, Streak::default());
    }
}
