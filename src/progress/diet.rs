//! Dietary plan adherence

use serde::Serialize;

use super::key::CompletionSet;
use super::percentage;
use crate::plans::DietaryPlan;

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DietWeekProgress {
    pub week_number: u32,
    pub daily_intake_goal: u32,
    pub total_days: u32,
    pub completed_days: u32,
    pub calories_consumed: u32,
    pub adherence_percentage: u32,
}

/// Adherence over a whole dietary plan
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DietProgress {
    pub weeks: Vec<DietWeekProgress>,
    pub total_days: u32,
    pub completed_days: u32,
    pub calories_consumed: u32,
    pub adherence_percentage: u32,
    /// Average calories over completed days only
    pub avg_daily_calories: u32,
}

impl DietProgress {
    pub fn compute(plan: &DietaryPlan, completed: &CompletionSet) -> Self {
        let mut weeks = Vec::with_capacity(plan.weeks.len());
        let mut total_days = 0;
        let mut completed_days = 0;
        let mut calories_consumed: u32 = 0;

        for week in &plan.weeks {
            let total = week.days.len() as u32;
            let mut week_completed = 0;
            let mut week_calories: u32 = 0;

            for day in &week.days {
                if completed.contains(week.week_number, day.day) {
                    week_completed += 1;
                    week_calories = week_calories.saturating_add(day.total_calories);
                }
            }

            total_days += total;
            completed_days += week_completed;
            calories_consumed = calories_consumed.saturating_add(week_calories);

            weeks.push(DietWeekProgress {
                week_number: week.week_number,
                daily_intake_goal: week.daily_intake_goal,
                total_days: total,
                completed_days: week_completed,
                calories_consumed: week_calories,
                adherence_percentage: percentage(week_completed, total),
            });
        }

        let avg_daily_calories = if completed_days == 0 {
            0
        } else {
            (calories_consumed as f64 / completed_days as f64).round() as u32
        };

        Self {
            weeks,
            total_days,
            completed_days,
            calories_consumed,
            adherence_percentage: percentage(completed_days, total_days),
            avg_daily_calories,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plans::{Catalog, DietWeek, MealDay, Meals, Timeline};

    fn one_month() -> DietaryPlan {
        Catalog::builtin().get(Timeline::OneMonth).diet.clone()
    }

    #[test]
    fn test_one_month_has_28_days() {
        let progress = DietProgress::compute(&one_month(), &CompletionSet::new());
        assert_eq!(progress.total_days, 28);
        assert_eq!(progress.completed_days, 0);
        assert_eq!(progress.adherence_percentage, 0);
        assert_eq!(progress.avg_daily_calories, 0);
    }

    #[test]
    fn test_full_first_week() {
        let keys: Vec<String> = (1..=7).map(|d| format!("1-{}", d)).collect();
        let progress = DietProgress::compute(&one_month(), &CompletionSet::from_keys(&keys));

        assert_eq!(progress.completed_days, 7);
        assert_eq!(progress.adherence_percentage, 25);
        assert_eq!(progress.weeks[0].adherence_percentage, 100);
        assert_eq!(progress.weeks[1].adherence_percentage, 0);
    }

    #[test]
    fn test_avg_daily_calories() {
        let plan = one_month();
        let first = plan.weeks[0].days[0].total_calories;
        let second = plan.weeks[0].days[1].total_calories;

        let progress = DietProgress::compute(&plan, &CompletionSet::from_keys(["1-1", "1-2"]));
        let expected = ((first + second) as f64 / 2.0).round() as u32;
        assert_eq!(progress.avg_daily_calories, expected);
        assert_eq!(progress.calories_consumed, first + second);
    }

    #[test]
    fn test_calories_saturate_instead_of_overflowing() {
        let meal_day = |day| MealDay {
            day,
            meals: Meals {
                breakfast: "Oats".to_string(),
                lunch: "Rice".to_string(),
                dinner: "Fish".to_string(),
                snack: "Nuts".to_string(),
            },
            total_calories: 3_000_000_000,
        };
        let plan = DietaryPlan {
            weeks: vec![DietWeek {
                week_number: 1,
                daily_intake_goal: 2000,
                days: vec![meal_day(1), meal_day(2)],
            }],
        };
        let progress = DietProgress::compute(&plan, &CompletionSet::from_keys(["1-1", "1-2"]));

        assert_eq!(progress.weeks[0].calories_consumed, u32::MAX);
        assert_eq!(progress.calories_consumed, u32::MAX);
        assert_eq!(progress.completed_days, 2);
    }

    #[test]
    fn test_empty_plan_guarded() {
        let progress = DietProgress::compute(&DietaryPlan { weeks: vec![] }, &CompletionSet::new());
        assert_eq!(progress.total_days, 0);
        assert_eq!(progress.adherence_percentage, 0);
    }
}
