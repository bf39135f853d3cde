//! Built-in program tables - 1, 3 and 6 month coaching programs

use super::{
    DayKind, DietWeek, DietaryPlan, Intensity, MealDay, Meals, Program, ScheduleDay, Timeline,
    Week, WorkoutPlan,
};

pub(super) struct DayTemplate {
    kind: DayKind,
    workout_type: &'static str,
    description: &'static str,
    duration_minutes: u32,
    calories_burned: u32,
    intensity: Intensity,
}

pub(super) struct MealTemplate {
    breakfast: &'static str,
    lunch: &'static str,
    dinner: &'static str,
    snack: &'static str,
    total_calories: u32,
}

/// A run of identical weeks inside a program
pub(super) struct Phase {
    focus: &'static str,
    weeks: u32,
    workouts: &'static [DayTemplate],
    meals: &'static [MealTemplate],
    daily_intake_goal: u32,
}

const fn workout(
    workout_type: &'static str,
    description: &'static str,
    duration_minutes: u32,
    calories_burned: u32,
    intensity: Intensity,
) -> DayTemplate {
    DayTemplate {
        kind: DayKind::Workout,
        workout_type,
        description,
        duration_minutes,
        calories_burned,
        intensity,
    }
}

const fn rest(
    workout_type: &'static str,
    description: &'static str,
    duration_minutes: u32,
    calories_burned: u32,
) -> DayTemplate {
    DayTemplate {
        kind: DayKind::Rest,
        workout_type,
        description,
        duration_minutes,
        calories_burned,
        intensity: Intensity::Low,
    }
}

const fn meal(
    breakfast: &'static str,
    lunch: &'static str,
    dinner: &'static str,
    snack: &'static str,
    total_calories: u32,
) -> MealTemplate {
    MealTemplate {
        breakfast,
        lunch,
        dinner,
        snack,
        total_calories,
    }
}

// === WORKOUT WEEKS ===

const FOUNDATION_WEEK: &[DayTemplate] = &[
    workout("Full Body Strength", "Goblet squats, push-ups, dumbbell rows, glute bridges", 45, 320, Intensity::Moderate),
    workout("Cardio Intervals", "10 rounds of 1 min brisk jog / 1 min walk", 30, 250, Intensity::High),
    rest("Rest & Mobility", "Hip openers, thoracic rotations, light stretching", 20, 80),
    workout("Upper Body Strength", "Overhead press, bent-over rows, band pull-aparts", 40, 290, Intensity::Moderate),
    workout("Lower Body Strength", "Split squats, Romanian deadlifts, calf raises", 45, 340, Intensity::Moderate),
    workout("Active Recovery Walk", "Easy outdoor walk at conversational pace", 40, 180, Intensity::Low),
    rest("Rest Day", "Full rest, focus on sleep and hydration", 0, 0),
];

const BUILD_WEEK: &[DayTemplate] = &[
    workout("Full Body Strength", "Barbell squats, bench press, pull-ups, planks", 50, 380, Intensity::Moderate),
    workout("Tempo Run", "20 min steady run at a comfortably hard pace", 35, 330, Intensity::High),
    workout("Core & Stability", "Dead bugs, side planks, pallof presses, bird dogs", 30, 190, Intensity::Moderate),
    rest("Rest & Mobility", "Foam rolling and dynamic stretching", 25, 90),
    workout("Push Strength", "Incline press, dips, lateral raises, triceps work", 45, 310, Intensity::Moderate),
    workout("Pull & Legs", "Deadlifts, lat pulldowns, walking lunges", 50, 400, Intensity::High),
    rest("Rest Day", "Full rest, light walking allowed", 0, 0),
];

const INTENSITY_WEEK: &[DayTemplate] = &[
    workout("HIIT Circuit", "Burpees, kettlebell swings, box jumps, mountain climbers", 35, 420, Intensity::High),
    workout("Heavy Lower Body", "Back squats 5x5, hip thrusts, hamstring curls", 55, 430, Intensity::High),
    workout("Steady Cardio", "45 min cycling or rowing in zone 2", 45, 360, Intensity::Moderate),
    workout("Heavy Upper Body", "Bench press 5x5, weighted pull-ups, rows", 55, 390, Intensity::High),
    rest("Rest & Mobility", "Yoga flow and breathing work", 30, 100),
    workout("Metabolic Conditioning", "Sled pushes, battle ropes, farmer carries", 40, 450, Intensity::High),
    rest("Rest Day", "Full rest and recovery nutrition", 0, 0),
];

const DELOAD_WEEK: &[DayTemplate] = &[
    workout("Light Full Body", "Bodyweight circuit at 60% effort", 30, 200, Intensity::Low),
    workout("Easy Cardio", "Relaxed swim or bike ride", 30, 210, Intensity::Low),
    rest("Rest & Mobility", "Long stretching session", 30, 90),
    workout("Technique Practice", "Light-load squat, hinge and press patterns", 35, 220, Intensity::Low),
    rest("Rest Day", "Full rest", 0, 0),
    workout("Recovery Walk", "Easy hike or long walk", 50, 230, Intensity::Low),
    rest("Rest Day", "Full rest", 0, 0),
];

const PEAK_WEEK: &[DayTemplate] = &[
    workout("Strength Test", "Work up to heavy triples on squat and bench", 60, 410, Intensity::High),
    workout("Interval Sprints", "8 x 200m sprints with full recovery", 35, 380, Intensity::High),
    rest("Rest & Mobility", "Mobility flow and soft tissue work", 25, 90),
    workout("Power & Plyometrics", "Jump squats, med-ball throws, broad jumps", 40, 360, Intensity::High),
    workout("Endurance Challenge", "60 min mixed cardio at moderate pace", 60, 520, Intensity::Moderate),
    workout("Full Body Finisher", "Complexes and carries to close the block", 45, 400, Intensity::High),
    rest("Rest Day", "Full rest and progress check-in", 0, 0),
];

// === MEAL WEEKS ===

const BALANCED_MEALS: &[MealTemplate] = &[
    meal("Oatmeal with berries and almonds", "Grilled chicken salad with quinoa", "Baked salmon with roasted vegetables", "Greek yogurt with honey", 1950),
    meal("Scrambled eggs on whole-grain toast", "Turkey and avocado wrap", "Beef stir-fry with brown rice", "Apple with peanut butter", 2050),
    meal("Protein smoothie with banana and spinach", "Lentil soup with a side salad", "Chicken breast with sweet potato and broccoli", "Handful of mixed nuts", 2000),
    meal("Cottage cheese with pineapple", "Tuna pasta salad", "Pork tenderloin with couscous and green beans", "Hummus with carrot sticks", 1980),
    meal("Whole-grain pancakes with fruit", "Chicken burrito bowl", "Shrimp tacos with cabbage slaw", "Protein bar", 2100),
    meal("Veggie omelette with rye bread", "Quinoa and black bean salad", "Turkey meatballs with whole-wheat spaghetti", "Cheese and crackers", 2020),
    meal("Overnight oats with chia seeds", "Grilled fish sandwich", "Vegetable curry with chickpeas and rice", "Dark chocolate and berries", 1900),
];

const LEAN_MEALS: &[MealTemplate] = &[
    meal("Egg white omelette with spinach", "Grilled chicken and mixed greens", "Steamed cod with asparagus", "Celery with almond butter", 1750),
    meal("Greek yogurt with flax seeds", "Turkey lettuce wraps", "Zucchini noodles with lean beef sauce", "Cucumber and hummus", 1700),
    meal("Green smoothie with protein powder", "Shrimp and vegetable soup", "Chicken breast with cauliflower rice", "Boiled eggs", 1720),
    meal("Cottage cheese with berries", "Tuna salad stuffed peppers", "Baked tilapia with green beans", "Small handful of walnuts", 1680),
    meal("Two boiled eggs and grapefruit", "Quinoa salad with feta", "Turkey burger without bun and side salad", "Protein shake", 1800),
    meal("Chia pudding with almond milk", "Grilled salmon salad", "Stir-fried tofu with bok choy", "Edamame", 1760),
    meal("Spinach and mushroom frittata", "Chicken vegetable soup", "Lean steak with roasted Brussels sprouts", "Apple slices", 1740),
];

const PERFORMANCE_MEALS: &[MealTemplate] = &[
    meal("Oats with whey, banana and honey", "Chicken and rice bowl with avocado", "Salmon with pasta and pesto", "Bagel with peanut butter", 2450),
    meal("Three-egg omelette with potatoes", "Beef burrito with beans", "Chicken thighs with couscous and vegetables", "Trail mix", 2500),
    meal("Protein pancakes with maple syrup", "Turkey club sandwich and fruit", "Lean beef lasagna with side salad", "Chocolate milk", 2550),
    meal("Granola with milk and berries", "Tuna pasta bake", "Pork chops with mashed potatoes and peas", "Rice cakes with jam", 2400),
    meal("Breakfast burrito with eggs and beans", "Chicken pesto wrap", "Shrimp fried rice", "Greek yogurt parfait", 2480),
    meal("French toast with fruit", "Quinoa bowl with steak strips", "Baked cod with roasted potatoes", "Banana and almonds", 2420),
    meal("Smoothie bowl with granola", "Lentil and sausage stew", "Turkey meatballs with rice and marinara", "Cottage cheese and honey", 2460),
];

// === PROGRAMS ===

pub(super) const ONE_MONTH: &[Phase] = &[
    Phase { focus: "Foundation", weeks: 1, workouts: FOUNDATION_WEEK, meals: BALANCED_MEALS, daily_intake_goal: 2000 },
    Phase { focus: "Build", weeks: 1, workouts: BUILD_WEEK, meals: BALANCED_MEALS, daily_intake_goal: 2000 },
    Phase { focus: "Intensity", weeks: 1, workouts: INTENSITY_WEEK, meals: PERFORMANCE_MEALS, daily_intake_goal: 2450 },
    Phase { focus: "Peak", weeks: 1, workouts: PEAK_WEEK, meals: PERFORMANCE_MEALS, daily_intake_goal: 2450 },
];

pub(super) const THREE_MONTHS: &[Phase] = &[
    Phase { focus: "Foundation", weeks: 3, workouts: FOUNDATION_WEEK, meals: BALANCED_MEALS, daily_intake_goal: 2000 },
    Phase { focus: "Build", weeks: 4, workouts: BUILD_WEEK, meals: LEAN_MEALS, daily_intake_goal: 1750 },
    Phase { focus: "Deload", weeks: 1, workouts: DELOAD_WEEK, meals: BALANCED_MEALS, daily_intake_goal: 2000 },
    Phase { focus: "Intensity", weeks: 3, workouts: INTENSITY_WEEK, meals: PERFORMANCE_MEALS, daily_intake_goal: 2450 },
    Phase { focus: "Peak", weeks: 1, workouts: PEAK_WEEK, meals: PERFORMANCE_MEALS, daily_intake_goal: 2450 },
];

pub(super) const SIX_MONTHS: &[Phase] = &[
    Phase { focus: "Foundation", weeks: 4, workouts: FOUNDATION_WEEK, meals: BALANCED_MEALS, daily_intake_goal: 2000 },
    Phase { focus: "Build", weeks: 6, workouts: BUILD_WEEK, meals: LEAN_MEALS, daily_intake_goal: 1750 },
    Phase { focus: "Deload", weeks: 1, workouts: DELOAD_WEEK, meals: BALANCED_MEALS, daily_intake_goal: 2000 },
    Phase { focus: "Intensity", weeks: 6, workouts: INTENSITY_WEEK, meals: PERFORMANCE_MEALS, daily_intake_goal: 2450 },
    Phase { focus: "Deload", weeks: 1, workouts: DELOAD_WEEK, meals: BALANCED_MEALS, daily_intake_goal: 2000 },
    Phase { focus: "Peak", weeks: 4, workouts: PEAK_WEEK, meals: PERFORMANCE_MEALS, daily_intake_goal: 2450 },
    Phase { focus: "Consolidation", weeks: 2, workouts: BUILD_WEEK, meals: BALANCED_MEALS, daily_intake_goal: 2000 },
];

/// Expand phase tables into a numbered program
pub(super) fn build_program(timeline: Timeline, phases: &[Phase]) -> Program {
    let mut weeks = Vec::new();
    let mut diet_weeks = Vec::new();
    let mut week_number = 0;

    for phase in phases {
        for _ in 0..phase.weeks {
            week_number += 1;

            let schedule = phase
                .workouts
                .iter()
                .zip(1..)
                .map(|(t, day)| ScheduleDay {
                    day,
                    kind: t.kind,
                    workout_type: t.workout_type.to_string(),
                    description: t.description.to_string(),
                    duration_minutes: t.duration_minutes,
                    calories_burned: t.calories_burned,
                    intensity: t.intensity,
                })
                .collect();
            weeks.push(Week {
                week_number,
                focus: phase.focus.to_string(),
                schedule,
            });

            let days = phase
                .meals
                .iter()
                .zip(1..)
                .map(|(m, day)| MealDay {
                    day,
                    meals: Meals {
                        breakfast: m.breakfast.to_string(),
                        lunch: m.lunch.to_string(),
                        dinner: m.dinner.to_string(),
                        snack: m.snack.to_string(),
                    },
                    total_calories: m.total_calories,
                })
                .collect();
            diet_weeks.push(DietWeek {
                week_number,
                daily_intake_goal: phase.daily_intake_goal,
                days,
            });
        }
    }

    Program {
        timeline,
        workout: WorkoutPlan { weeks },
        diet: DietaryPlan { weeks: diet_weeks },
    }
}
