//! coachtrack - Trainee plan progress and trainer analytics

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use chrono::Utc;
use clap::{Parser, Subcommand};
use tracing::warn;
use tracing_subscriber::EnvFilter;

use coachtrack::analytics::{TrainerOverview, generate_analytics_dataset, roster_analytics};
use coachtrack::config::Config;
use coachtrack::db::{Database, Role, TraineeGoals, TrainerProfile, UserProfile};
use coachtrack::plans::{Catalog, Program, Timeline};
use coachtrack::progress::{CompletionKey, CompletionSet, DietProgress, Streak, WorkoutProgress, todays_workout};
use coachtrack::tui::App;

#[derive(Parser)]
#[command(name = "coachtrack")]
#[command(author, version, about = "Trainee plan progress and trainer analytics")]
struct Cli {
    /// SQLite database path (overrides COACHTRACK_DB)
    #[arg(long, global = true)]
    db: Option<String>,

    /// JSON plan catalog (overrides COACHTRACK_CATALOG)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Register a trainee or trainer
    AddUser {
        uid: String,

        #[arg(short, long)]
        email: Option<String>,

        /// Display name
        #[arg(short, long)]
        name: Option<String>,

        /// Register as a trainer instead of a trainee
        #[arg(long)]
        trainer: bool,

        /// Trainer specialties (repeatable)
        #[arg(long = "specialty")]
        specialties: Vec<String>,
    },

    /// Set a trainee's goals and target timeline (completions are kept)
    SetGoals {
        uid: String,

        /// Target timeline, e.g. "1_month", "6 months", "1 year"
        #[arg(short, long)]
        timeline: String,

        /// Goal (repeatable)
        #[arg(short, long = "goal")]
        goals: Vec<String>,

        /// Sessions per week
        #[arg(short, long)]
        frequency: Option<u32>,

        /// Preferred workout type (repeatable)
        #[arg(short = 'w', long = "workout-type")]
        workout_types: Vec<String>,
    },

    /// Toggle a workout day, e.g. "1-3" = week 1, day 3
    Workout { uid: String, key: CompletionKey },

    /// Toggle a meal day, e.g. "2-5"
    Meal { uid: String, key: CompletionKey },

    /// Show plan progress for a trainee
    Progress { uid: String },

    /// Print a trainee's analytics dataset
    Analytics {
        uid: String,

        #[arg(long)]
        json: bool,
    },

    /// Show a program from the catalog
    Plan {
        /// Target timeline text (default: 3 months)
        timeline: Option<String>,

        #[arg(short, long)]
        week: Option<u32>,
    },

    /// Add a trainee to a trainer's roster
    Assign { trainer: String, trainee: String },

    /// Aggregate analytics over a trainer's roster
    Summary {
        trainer: String,

        #[arg(long)]
        json: bool,

        /// Only include these trainees (repeatable)
        #[arg(long)]
        only: Vec<String>,
    },

    /// Open the trainer dashboard
    Dashboard { trainer: String },

    /// Print the built-in catalog as JSON
    ExportCatalog,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut config = Config::from_env()?;
    if let Some(db) = cli.db {
        config.db_path = db;
    }
    if let Some(catalog) = cli.catalog {
        config.catalog_path = Some(catalog);
    }

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&config.rust_log).unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    if let Commands::ExportCatalog = cli.command {
        println!("{}", Catalog::builtin().to_json()?);
        return Ok(());
    }

    let catalog = Catalog::load(config.catalog_path.as_deref())?;

    if let Commands::Plan { timeline, week } = &cli.command {
        let program = catalog.select(timeline.as_deref());
        print_plan(program, *week);
        return Ok(());
    }

    let db = Database::open(&config.db_path)?;

    match cli.command {
        Commands::AddUser { uid, email, name, trainer, specialties } => {
            let role = if trainer { Role::Trainer } else { Role::Trainee };
            db.upsert_user(&UserProfile {
                uid: uid.clone(),
                email,
                display_name: name,
                role,
            })?;

            if trainer {
                let mut profile = db.get_trainer(&uid)?.unwrap_or_else(|| TrainerProfile {
                    uid: uid.clone(),
                    ..Default::default()
                });
                if !specialties.is_empty() {
                    profile.specialties = specialties;
                }
                db.save_trainer(&profile)?;
            }
            println!("Added {}: {}", role.as_str(), uid);
        }

        Commands::SetGoals { uid, timeline, goals, frequency, workout_types } => {
            require_user(&db, &uid)?;
            let existing = db.get_goals(&uid)?.unwrap_or_default();
            let updated = TraineeGoals {
                goals,
                target_timeline: Some(timeline.clone()),
                frequency_per_week: frequency,
                preferred_workout_types: workout_types,
                updated_at: Some(Utc::now()),
                ..existing
            };
            db.save_goals(&uid, &updated)?;
            println!("Goals saved for {} -> {} plan", uid, Timeline::from_target(Some(timeline.as_str())).label());
        }

        Commands::Workout { uid, key } => {
            require_user(&db, &uid)?;
            let program = program_for(&db, &catalog, &uid)?;
            if !program.workout.has_day(key.week, key.day) {
                warn!("{} is not a workout day in the {} plan", key, program.timeline.label());
            }

            let done = db.toggle_workout(&uid, key)?;
            println!("Workout {}: {}", key, if done { "done" } else { "not done" });
        }

        Commands::Meal { uid, key } => {
            require_user(&db, &uid)?;
            let program = program_for(&db, &catalog, &uid)?;
            if !program.diet.has_day(key.week, key.day) {
                warn!("{} is not a meal day in the {} plan", key, program.timeline.label());
            }

            let done = db.toggle_meal(&uid, key)?;
            println!("Meals {}: {}", key, if done { "done" } else { "not done" });
        }

        Commands::Progress { uid } => {
            require_user(&db, &uid)?;
            let goals = db.get_goals(&uid)?.unwrap_or_default();
            let program = catalog.select(goals.target_timeline.as_deref());
            print_progress(program, &goals);
        }

        Commands::Analytics { uid, json } => {
            let record = db
                .get_trainee_record(&uid)?
                .with_context(|| format!("user {} not found", uid))?;
            let analytics = generate_analytics_dataset(&catalog, &record);

            if json {
                println!("{}", serde_json::to_string_pretty(&analytics)?);
            } else {
                println!("{}", analytics.format_summary());
            }
        }

        Commands::Assign { trainer, trainee } => {
            if db.assign_trainee(&trainer, &trainee)? {
                println!("Assigned {} to {}", trainee, trainer);
            } else {
                println!("{} is already on {}'s roster", trainee, trainer);
            }
        }

        Commands::Summary { trainer, json, only } => {
            let records = db.get_trainer_trainees(&trainer)?;
            let trainees = roster_analytics(&catalog, &records);
            let overview = if only.is_empty() {
                TrainerOverview::from_trainees(&trainees)
            } else {
                TrainerOverview::for_selection(&trainees, &only)
            };

            if json {
                println!("{}", serde_json::to_string_pretty(&overview)?);
            } else {
                println!("Trainer: {}", trainer);
                println!("{:-<40}", "");
                println!("{}", overview.format_summary());
                println!("{:-<40}", "");
                for t in &trainees {
                    println!(
                        "{:20} | {:8} | week {:2} | {:3}% workouts | {:3}% diet",
                        t.user_name,
                        t.timeline.label(),
                        t.current_week,
                        t.progress_percentage,
                        t.dietary_adherence_percentage
                    );
                }
            }
        }

        Commands::Dashboard { trainer } => {
            if db.get_trainer(&trainer)?.is_none() {
                bail!("trainer {} not found", trainer);
            }
            let mut app = App::new(db, &catalog, &trainer, config.refresh_interval)?;
            app.run()?;
        }

        Commands::Plan { .. } | Commands::ExportCatalog => {}
    }

    Ok(())
}

fn require_user(db: &Database, uid: &str) -> Result<()> {
    if db.get_user(uid)?.is_none() {
        bail!("user {} not found (use add-user first)", uid);
    }
    Ok(())
}

fn program_for<'a>(db: &Database, catalog: &'a Catalog, uid: &str) -> Result<&'a Program> {
    let goals = db.get_goals(uid)?;
    Ok(catalog.select(goals.as_ref().and_then(|g| g.target_timeline.as_deref())))
}

fn print_plan(program: &Program, only_week: Option<u32>) {
    println!("{} program", program.timeline.label());
    println!("{:-<60}", "");

    let weeks = program
        .workout
        .weeks
        .iter()
        .filter(|w| only_week.is_none_or(|n| w.week_number == n));

    for week in weeks {
        println!("Week {} - {}", week.week_number, week.focus);
        for day in &week.schedule {
            let marker = if day.is_rest() { "rest" } else { day.intensity.label() };
            println!(
                "  day {} | {:24} | {:3} min | {:3} kcal | {}",
                day.day, day.workout_type, day.duration_minutes, day.calories_burned, marker
            );
        }
        if let Some(diet) = program.diet.week(week.week_number) {
            println!("  daily intake goal: {} kcal", diet.daily_intake_goal);
        }
    }
}

fn print_progress(program: &Program, goals: &TraineeGoals) {
    let workouts_done = CompletionSet::from_keys(&goals.completed_workouts);
    let meals_done = CompletionSet::from_keys(&goals.completed_meals);

    let workouts = WorkoutProgress::compute(&program.workout, &workouts_done);
    let diet = DietProgress::compute(&program.diet, &meals_done);
    let streak = Streak::compute(&program.workout, &workouts_done);

    println!("{} program, current week {}", program.timeline.label(), workouts.current_week);
    println!("{:-<60}", "");

    for w in &workouts.weeks {
        let meals = match diet.weeks.iter().find(|d| d.week_number == w.week_number) {
            Some(d) => format!("{}/{} ({:3}%)", d.completed_days, d.total_days, d.adherence_percentage),
            None => "-".to_string(),
        };
        println!(
            "Week {:2} {:14} | workouts {}/{} ({:3}%) {:4} kcal | meals {}",
            w.week_number, w.focus, w.completed, w.total, w.completion_percentage, w.calories_burned, meals
        );
    }

    println!("{:-<60}", "");
    println!(
        "Workouts: {}/{} ({}%), {} kcal burned",
        workouts.completed_count, workouts.total_units, workouts.completion_percentage, workouts.calories_burned
    );
    println!(
        "Meals: {}/{} ({}%), avg {} kcal/day",
        diet.completed_days, diet.total_days, diet.adherence_percentage, diet.avg_daily_calories
    );
    println!("Streak: {} (best {})", streak.current, streak.longest);

    match todays_workout(&program.workout, &workouts_done) {
        Some(day) => println!(
            "Today: {} - {} ({} min)",
            day.workout_type, day.description, day.duration_minutes
        ),
        None => println!("Today: week 1 complete"),
    }
}
