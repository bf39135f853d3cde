//! Plan catalog - workout and dietary programs by target timeline
//!
//! The catalog is built once at startup (from the built-in tables or a JSON
//! file) and passed by reference to everything that computes progress.

mod builtin;

use std::collections::HashSet;
use std::fmt;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::CatalogError;

/// Program length a trainee is working towards
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Timeline {
    #[serde(rename = "1_month")]
    OneMonth,
    #[default]
    #[serde(rename = "3_months")]
    ThreeMonths,
    #[serde(rename = "6_months")]
    SixMonths,
}

impl Timeline {
    /// Stored tag, e.g. "3_months"
    pub fn tag(&self) -> &'static str {
        match self {
            Timeline::OneMonth => "1_month",
            Timeline::ThreeMonths => "3_months",
            Timeline::SixMonths => "6_months",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Timeline::OneMonth => "1 month",
            Timeline::ThreeMonths => "3 months",
            Timeline::SixMonths => "6 months",
        }
    }

    /// All timelines for iteration
    pub fn all() -> &'static [Timeline] {
        &[Timeline::OneMonth, Timeline::ThreeMonths, Timeline::SixMonths]
    }

    /// Map a free-text target timeline onto a program.
    ///
    /// Never fails: anything unrecognized falls back to the 3 month program.
    pub fn from_target(target: Option<&str>) -> Self {
        let normalized = target.unwrap_or_default().to_lowercase().replace('_', " ");

        if normalized.contains("1 month") {
            Timeline::OneMonth
        } else if normalized.contains("6 month") || normalized.contains("1 year") {
            Timeline::SixMonths
        } else {
            Timeline::ThreeMonths
        }
    }
}

impl fmt::Display for Timeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// What a scheduled day asks of the trainee
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DayKind {
    Workout,
    Rest,
}

impl DayKind {
    /// Legacy convention: a workout type mentioning "rest" is a rest day
    pub fn infer(workout_type: &str) -> Self {
        if workout_type.to_lowercase().contains("rest") {
            DayKind::Rest
        } else {
            DayKind::Workout
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Intensity {
    Low,
    Moderate,
    High,
}

impl Intensity {
    pub fn label(&self) -> &'static str {
        match self {
            Intensity::Low => "low",
            Intensity::Moderate => "moderate",
            Intensity::High => "high",
        }
    }
}

/// A single day in a workout week
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", from = "RawScheduleDay")]
pub struct ScheduleDay {
    pub day: u32,
    pub kind: DayKind,
    pub workout_type: String,
    pub description: String,
    pub duration_minutes: u32,
    pub calories_burned: u32,
    pub intensity: Intensity,
}

impl ScheduleDay {
    pub fn is_rest(&self) -> bool {
        self.kind == DayKind::Rest
    }
}

/// Catalog files written before `kind` existed omit it
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawScheduleDay {
    day: u32,
    #[serde(default)]
    kind: Option<DayKind>,
    workout_type: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    duration_minutes: u32,
    #[serde(default)]
    calories_burned: u32,
    intensity: Intensity,
}

impl From<RawScheduleDay> for ScheduleDay {
    fn from(raw: RawScheduleDay) -> Self {
        let kind = raw.kind.unwrap_or_else(|| DayKind::infer(&raw.workout_type));
        Self {
            day: raw.day,
            kind,
            workout_type: raw.workout_type,
            description: raw.description,
            duration_minutes: raw.duration_minutes,
            calories_burned: raw.calories_burned,
            intensity: raw.intensity,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Week {
    pub week_number: u32,
    pub focus: String,
    pub schedule: Vec<ScheduleDay>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WorkoutPlan {
    pub weeks: Vec<Week>,
}

impl WorkoutPlan {
    /// Number of scheduled days across all weeks
    pub fn total_days(&self) -> usize {
        self.weeks.iter().map(|w| w.schedule.len()).sum()
    }

    pub fn week(&self, week_number: u32) -> Option<&Week> {
        self.weeks.iter().find(|w| w.week_number == week_number)
    }

    pub fn has_day(&self, week_number: u32, day: u32) -> bool {
        self.week(week_number)
            .is_some_and(|w| w.schedule.iter().any(|d| d.day == day))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Meals {
    pub breakfast: String,
    pub lunch: String,
    pub dinner: String,
    pub snack: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MealDay {
    pub day: u32,
    pub meals: Meals,
    pub total_calories: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DietWeek {
    pub week_number: u32,
    pub daily_intake_goal: u32,
    pub days: Vec<MealDay>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DietaryPlan {
    pub weeks: Vec<DietWeek>,
}

impl DietaryPlan {
    pub fn total_days(&self) -> usize {
        self.weeks.iter().map(|w| w.days.len()).sum()
    }

    pub fn week(&self, week_number: u32) -> Option<&DietWeek> {
        self.weeks.iter().find(|w| w.week_number == week_number)
    }

    pub fn has_day(&self, week_number: u32, day: u32) -> bool {
        self.week(week_number)
            .is_some_and(|w| w.days.iter().any(|d| d.day == day))
    }
}

/// Workout and dietary plans sharing one timeline
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Program {
    pub timeline: Timeline,
    pub workout: WorkoutPlan,
    pub diet: DietaryPlan,
}

#[derive(Serialize, Deserialize)]
struct CatalogFile {
    programs: Vec<Program>,
}

/// Read-only set of programs, one per timeline
#[derive(Debug, Clone)]
pub struct Catalog {
    one_month: Program,
    three_months: Program,
    six_months: Program,
}

impl Catalog {
    /// Programs compiled into the binary
    pub fn builtin() -> Self {
        Self {
            one_month: builtin::build_program(Timeline::OneMonth, builtin::ONE_MONTH),
            three_months: builtin::build_program(Timeline::ThreeMonths, builtin::THREE_MONTHS),
            six_months: builtin::build_program(Timeline::SixMonths, builtin::SIX_MONTHS),
        }
    }

    /// Build a catalog from programs, checking numbering invariants
    pub fn from_programs(programs: Vec<Program>) -> Result<Self, CatalogError> {
        let mut one_month = None;
        let mut three_months = None;
        let mut six_months = None;

        for program in programs {
            validate_program(&program)?;
            let slot = match program.timeline {
                Timeline::OneMonth => &mut one_month,
                Timeline::ThreeMonths => &mut three_months,
                Timeline::SixMonths => &mut six_months,
            };
            if slot.is_some() {
                return Err(CatalogError::DuplicateTimeline(program.timeline.tag()));
            }
            *slot = Some(program);
        }

        Ok(Self {
            one_month: one_month.ok_or(CatalogError::MissingTimeline(Timeline::OneMonth.tag()))?,
            three_months: three_months
                .ok_or(CatalogError::MissingTimeline(Timeline::ThreeMonths.tag()))?,
            six_months: six_months.ok_or(CatalogError::MissingTimeline(Timeline::SixMonths.tag()))?,
        })
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let file: CatalogFile = serde_json::from_str(json).context("invalid catalog JSON")?;
        Ok(Self::from_programs(file.programs)?)
    }

    pub fn to_json(&self) -> Result<String> {
        let file = CatalogFile {
            programs: self.programs().into_iter().cloned().collect(),
        };
        Ok(serde_json::to_string_pretty(&file)?)
    }

    /// Load from a JSON file, or fall back to the built-in programs
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                let json = std::fs::read_to_string(path)
                    .with_context(|| format!("cannot read catalog {}", path.display()))?;
                let catalog = Self::from_json(&json)
                    .with_context(|| format!("cannot load catalog {}", path.display()))?;
                info!("Loaded plan catalog from {}", path.display());
                Ok(catalog)
            }
            None => Ok(Self::builtin()),
        }
    }

    pub fn get(&self, timeline: Timeline) -> &Program {
        match timeline {
            Timeline::OneMonth => &self.one_month,
            Timeline::ThreeMonths => &self.three_months,
            Timeline::SixMonths => &self.six_months,
        }
    }

    /// Pick the program for a trainee's free-text target timeline
    pub fn select(&self, target_timeline: Option<&str>) -> &Program {
        self.get(Timeline::from_target(target_timeline))
    }

    pub fn programs(&self) -> [&Program; 3] {
        [&self.one_month, &self.three_months, &self.six_months]
    }
}

fn validate_program(program: &Program) -> Result<(), CatalogError> {
    let timeline = program.timeline.tag();

    let workout_count = program.workout.weeks.len();
    let diet_count = program.diet.weeks.len();
    if workout_count != diet_count {
        return Err(CatalogError::WeekCountMismatch {
            timeline,
            workout_weeks: workout_count,
            diet_weeks: diet_count,
        });
    }

    let workout_weeks = program
        .workout
        .weeks
        .iter()
        .map(|w| (w.week_number, w.schedule.iter().map(|d| d.day).collect::<Vec<_>>()));
    let diet_weeks = program
        .diet
        .weeks
        .iter()
        .map(|w| (w.week_number, w.days.iter().map(|d| d.day).collect::<Vec<_>>()));

    validate_weeks(timeline, workout_weeks)?;
    validate_weeks(timeline, diet_weeks)
}

fn validate_weeks(
    timeline: &'static str,
    weeks: impl Iterator<Item = (u32, Vec<u32>)>,
) -> Result<(), CatalogError> {
    for (expected, (week, days)) in (1..).zip(weeks) {
        if week != expected {
            return Err(CatalogError::WeekOutOfSequence {
                timeline,
                expected,
                found: week,
            });
        }

        let mut seen = HashSet::new();
        for day in days {
            if day == 0 {
                return Err(CatalogError::ZeroDay { timeline, week });
            }
            if !seen.insert(day) {
                return Err(CatalogError::DuplicateDay {
                    timeline,
                    week,
                    day,
                });
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_one_month() {
        assert_eq!(Timeline::from_target(Some("1 month")), Timeline::OneMonth);
        assert_eq!(Timeline::from_target(Some("1_month")), Timeline::OneMonth);
        assert_eq!(Timeline::from_target(Some("About 1 Month")), Timeline::OneMonth);
    }

    #[test]
    fn test_select_six_months() {
        assert_eq!(Timeline::from_target(Some("6_months")), Timeline::SixMonths);
        assert_eq!(Timeline::from_target(Some("6 Months")), Timeline::SixMonths);
        assert_eq!(Timeline::from_target(Some("1 year")), Timeline::SixMonths);
        assert_eq!(Timeline::from_target(Some("1_YEAR")), Timeline::SixMonths);
    }

    #[test]
    fn test_select_defaults_to_three_months() {
        assert_eq!(Timeline::from_target(None), Timeline::ThreeMonths);
        assert_eq!(Timeline::from_target(Some("")), Timeline::ThreeMonths);
        assert_eq!(Timeline::from_target(Some("3_months")), Timeline::ThreeMonths);
        assert_eq!(Timeline::from_target(Some("whenever")), Timeline::ThreeMonths);
        assert_eq!(Timeline::from_target(Some("2 years")), Timeline::ThreeMonths);
    }

    #[test]
    fn test_one_month_checked_before_six() {
        // "1 month" wins even when "6 month" also appears
        assert_eq!(
            Timeline::from_target(Some("1 month or 6 months")),
            Timeline::OneMonth
        );
    }

    #[test]
    fn test_catalog_select_returns_matching_program() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.select(Some("1_month")).timeline, Timeline::OneMonth);
        assert_eq!(catalog.select(Some("1 year")).timeline, Timeline::SixMonths);
        assert_eq!(catalog.select(None).timeline, Timeline::ThreeMonths);
    }

    #[test]
    fn test_builtin_program_lengths() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.get(Timeline::OneMonth).workout.weeks.len(), 4);
        assert_eq!(catalog.get(Timeline::ThreeMonths).workout.weeks.len(), 12);
        assert_eq!(catalog.get(Timeline::SixMonths).workout.weeks.len(), 24);
        assert_eq!(catalog.get(Timeline::OneMonth).diet.total_days(), 28);
    }

    #[test]
    fn test_builtin_first_days() {
        let catalog = Catalog::builtin();
        let week = catalog.get(Timeline::OneMonth).workout.week(1).unwrap();
        assert_eq!(week.schedule[0].calories_burned, 320);
        assert_eq!(week.schedule[1].calories_burned, 250);
    }

    #[test]
    fn test_has_day() {
        let program = Catalog::builtin().get(Timeline::OneMonth).clone();
        assert!(program.workout.has_day(1, 7));
        assert!(program.diet.has_day(4, 7));
        assert!(!program.workout.has_day(5, 1));
        assert!(!program.diet.has_day(5, 1));
        assert!(!program.diet.has_day(1, 8));
    }

    #[test]
    fn test_builtin_passes_validation() {
        let catalog = Catalog::builtin();
        let programs = catalog.programs().into_iter().cloned().collect();
        assert!(Catalog::from_programs(programs).is_ok());
    }

    #[test]
    fn test_builtin_rest_days_are_tagged() {
        let catalog = Catalog::builtin();
        for program in catalog.programs() {
            for week in &program.workout.weeks {
                for day in &week.schedule {
                    assert_eq!(day.is_rest(), DayKind::infer(&day.workout_type) == DayKind::Rest);
                }
            }
        }
    }

    #[test]
    fn test_json_roundtrip_keeps_programs() {
        let catalog = Catalog::builtin();
        let json = catalog.to_json().unwrap();
        let loaded = Catalog::from_json(&json).unwrap();
        assert_eq!(loaded.get(Timeline::SixMonths), catalog.get(Timeline::SixMonths));
    }

    #[test]
    fn test_missing_kind_is_inferred() {
        let json = r#"{"day": 3, "workoutType": "Rest & Stretch", "intensity": "low"}"#;
        let day: ScheduleDay = serde_json::from_str(json).unwrap();
        assert_eq!(day.kind, DayKind::Rest);

        let json = r#"{"day": 1, "workoutType": "Cardio", "intensity": "high"}"#;
        let day: ScheduleDay = serde_json::from_str(json).unwrap();
        assert_eq!(day.kind, DayKind::Workout);
    }

    #[test]
    fn test_missing_timeline_rejected() {
        let catalog = Catalog::builtin();
        let programs = vec![
            catalog.get(Timeline::OneMonth).clone(),
            catalog.get(Timeline::SixMonths).clone(),
        ];
        assert_eq!(
            Catalog::from_programs(programs).unwrap_err(),
            CatalogError::MissingTimeline("3_months")
        );
    }

    #[test]
    fn test_duplicate_timeline_rejected() {
        let catalog = Catalog::builtin();
        let mut programs: Vec<_> = catalog.programs().into_iter().cloned().collect();
        programs.push(catalog.get(Timeline::OneMonth).clone());
        assert_eq!(
            Catalog::from_programs(programs).unwrap_err(),
            CatalogError::DuplicateTimeline("1_month")
        );
    }

    #[test]
    fn test_week_gap_rejected() {
        let catalog = Catalog::builtin();
        let mut programs: Vec<_> = catalog.programs().into_iter().cloned().collect();
        programs[0].workout.weeks.remove(1);
        assert_eq!(
            Catalog::from_programs(programs).unwrap_err(),
            CatalogError::WeekOutOfSequence {
                timeline: "1_month",
                expected: 2,
                found: 3
            }
        );
    }

    #[test]
    fn test_duplicate_day_rejected() {
        let catalog = Catalog::builtin();
        let mut programs: Vec<_> = catalog.programs().into_iter().cloned().collect();
        programs[1].diet.weeks[0].days[1].day = 1;
        assert_eq!(
            Catalog::from_programs(programs).unwrap_err(),
            CatalogError::DuplicateDay {
                timeline: "3_months",
                week: 1,
                day: 1
            }
        );
    }

    #[test]
    fn test_zero_day_rejected() {
        let catalog = Catalog::builtin();
        let mut programs: Vec<_> = catalog.programs().into_iter().cloned().collect();
        programs[2].workout.weeks[1].schedule[0].day = 0;
        assert_eq!(
            Catalog::from_programs(programs).unwrap_err(),
            CatalogError::ZeroDay {
                timeline: "6_months",
                week: 2
            }
        );
    }

    #[test]
    fn test_short_diet_plan_rejected() {
        let catalog = Catalog::builtin();
        let mut programs: Vec<_> = catalog.programs().into_iter().cloned().collect();
        programs[0].diet.weeks.truncate(2);
        assert_eq!(
            Catalog::from_programs(programs).unwrap_err(),
            CatalogError::WeekCountMismatch {
                timeline: "1_month",
                workout_weeks: 4,
                diet_weeks: 2
            }
        );
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");

        let mut catalog = Catalog::builtin();
        catalog.one_month.workout.weeks[0].focus = "Custom start".to_string();
        std::fs::write(&path, catalog.to_json().unwrap()).unwrap();

        let loaded = Catalog::load(Some(&path)).unwrap();
        assert_eq!(loaded.programs(), catalog.programs());
        assert_eq!(loaded.get(Timeline::OneMonth).workout.weeks[0].focus, "Custom start");
    }

    #[test]
    fn test_load_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = Catalog::load(Some(&dir.path().join("absent.json"))).unwrap_err();
        assert!(err.to_string().contains("cannot read catalog"));
    }

    #[test]
    fn test_load_invalid_catalog_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        std::fs::write(&path, r#"{"programs": []}"#).unwrap();

        let err = Catalog::load(Some(&path)).unwrap_err();
        assert!(err.to_string().contains("cannot load catalog"));
    }

    #[test]
    fn test_load_without_path_is_builtin() {
        let catalog = Catalog::load(None).unwrap();
        assert_eq!(catalog.get(Timeline::OneMonth), Catalog::builtin().get(Timeline::OneMonth));
    }
}
