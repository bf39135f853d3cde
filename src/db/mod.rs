//! Database module - SQLite storage for user, goals and trainer documents
//!
//! List-valued document fields are stored as JSON text so stored records keep
//! the same shape as the hosted document collections.

use anyhow::{Context, Result, bail};
use chrono::{DateTime, Utc};
use rusqlite::{Connection, OptionalExtension, params};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::progress::{CompletionKey, toggle};

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Trainee,
    Trainer,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Trainee => "trainee",
            Role::Trainer => "trainer",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "trainee" => Some(Role::Trainee),
            "trainer" => Some(Role::Trainer),
            _ => None,
        }
    }
}

/// `users/{uid}` document
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub uid: String,
    pub email: Option<String>,
    pub display_name: Option<String>,
    pub role: Role,
}

/// `traineeGoals/{uid}` document
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct TraineeGoals {
    pub goals: Vec<String>,
    pub target_timeline: Option<String>,
    pub frequency_per_week: Option<u32>,
    pub preferred_workout_types: Vec<String>,
    pub completed_workouts: Vec<String>,
    pub completed_meals: Vec<String>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// `trainers/{uid}` document
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct TrainerProfile {
    pub uid: String,
    pub specialties: Vec<String>,
    pub certifications: Vec<String>,
    pub availability: Option<String>,
    pub trainee_ids: Vec<String>,
}

/// A trainee's profile joined with their goals, if any were saved
#[derive(Debug, Clone, PartialEq)]
pub struct TraineeRecord {
    pub user: UserProfile,
    pub goals: Option<TraineeGoals>,
}

#[derive(Debug, Clone, Copy)]
enum CompletionList {
    Workouts,
    Meals,
}

/// Database wrapper
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open or create database
    pub fn open(path: &str) -> Result<Self> {
        let conn = Connection::open(path).with_context(|| format!("cannot open database {}", path))?;
        let db = Self { conn };
        db.init_schema()?;
        Ok(db)
    }

    pub fn open_in_memory() -> Result<Self> {
        let db = Self {
            conn: Connection::open_in_memory()?,
        };
        db.init_schema()?;
        Ok(db)
    }

    /// Initialize database schema
    fn init_schema(&self) -> Result<()> {
        self.conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS users (
                uid TEXT PRIMARY KEY,
                email TEXT,
                display_name TEXT,
                role TEXT NOT NULL
            );
            CREATE TABLE IF NOT EXISTS trainee_goals (
                uid TEXT PRIMARY KEY,
                goals TEXT NOT NULL DEFAULT '[]',
                target_timeline TEXT,
                frequency_per_week INTEGER,
                preferred_workout_types TEXT NOT NULL DEFAULT '[]',
                completed_workouts TEXT NOT NULL DEFAULT '[]',
                completed_meals TEXT NOT NULL DEFAULT '[]',
                updated_at TEXT
            );
            CREATE TABLE IF NOT EXISTS trainers (
                uid TEXT PRIMARY KEY,
                specialties TEXT NOT NULL DEFAULT '[]',
                certifications TEXT NOT NULL DEFAULT '[]',
                availability TEXT,
                trainee_ids TEXT NOT NULL DEFAULT '[]'
            );",
        )?;
        Ok(())
    }

    /// Insert or replace a user profile
    pub fn upsert_user(&self, user: &UserProfile) -> Result<()> {
        self.conn.execute(
            "INSERT INTO users (uid, email, display_name, role) VALUES (?1, ?2, ?3, ?4)
             ON CONFLICT(uid) DO UPDATE SET
                email = excluded.email,
                display_name = excluded.display_name,
                role = excluded.role",
            params![user.uid, user.email, user.display_name, user.role.as_str()],
        )?;
        info!("Saved user {} ({})", user.uid, user.role.as_str());
        Ok(())
    }

    pub fn get_user(&self, uid: &str) -> Result<Option<UserProfile>> {
        let row = self
            .conn
            .query_row(
                "SELECT uid, email, display_name, role FROM users WHERE uid = ?1",
                params![uid],
                |row| {
                    Ok((
                        row.get::<_, String>(0)?,
                        row.get::<_, Option<String>>(1)?,
                        row.get::<_, Option<String>>(2)?,
                        row.get::<_, String>(3)?,
                    ))
                },
            )
            .optional()?;

        row.map(|(uid, email, display_name, role)| -> Result<UserProfile> {
            let role = Role::parse(&role).with_context(|| format!("unknown role '{}' for user {}", role, uid))?;
            Ok(UserProfile {
                uid,
                email,
                display_name,
                role,
            })
        })
        .transpose()
    }

    /// All users with the given role, ordered by uid
    pub fn list_users(&self, role: Role) -> Result<Vec<UserProfile>> {
        let mut stmt = self.conn.prepare(
            "SELECT uid, email, display_name FROM users WHERE role = ?1 ORDER BY uid",
        )?;

        let users = stmt
            .query_map(params![role.as_str()], |row| {
                Ok(UserProfile {
                    uid: row.get(0)?,
                    email: row.get(1)?,
                    display_name: row.get(2)?,
                    role,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(users)
    }

    /// Replace a trainee's goals document
    pub fn save_goals(&self, uid: &str, goals: &TraineeGoals) -> Result<()> {
        self.conn.execute(
            "INSERT OR REPLACE INTO trainee_goals
                (uid, goals, target_timeline, frequency_per_week, preferred_workout_types,
                 completed_workouts, completed_meals, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            params![
                uid,
                serde_json::to_string(&goals.goals)?,
                goals.target_timeline,
                goals.frequency_per_week,
                serde_json::to_string(&goals.preferred_workout_types)?,
                serde_json::to_string(&goals.completed_workouts)?,
                serde_json::to_string(&goals.completed_meals)?,
                goals.updated_at.map(|d| d.to_rfc3339()),
            ],
        )?;
        Ok(())
    }

    pub fn get_goals(&self, uid: &str) -> Result<Option<TraineeGoals>> {
        let row = self
            .conn
            .query_row(
                "SELECT goals, target_timeline, frequency_per_week, preferred_workout_types,
                        completed_workouts, completed_meals, updated_at
                 FROM trainee_goals WHERE uid = ?1",
                params![uid],
                |row| {
                    Ok((
                        row.get::<_, String>(0)?,
                        row.get::<_, Option<String>>(1)?,
                        row.get::<_, Option<u32>>(2)?,
                        row.get::<_, String>(3)?,
                        row.get::<_, String>(4)?,
                        row.get::<_, String>(5)?,
                        row.get::<_, Option<String>>(6)?,
                    ))
                },
            )
            .optional()?;

        let Some((goals, target_timeline, frequency_per_week, preferred, workouts, meals, updated_at)) = row
        else {
            return Ok(None);
        };

        Ok(Some(TraineeGoals {
            goals: json_list(&goals).context("goals")?,
            target_timeline,
            frequency_per_week,
            preferred_workout_types: json_list(&preferred).context("preferredWorkoutTypes")?,
            completed_workouts: json_list(&workouts).context("completedWorkouts")?,
            completed_meals: json_list(&meals).context("completedMeals")?,
            updated_at: updated_at
                .and_then(|s| DateTime::parse_from_rfc3339(&s).ok())
                .map(|d| d.with_timezone(&Utc)),
        }))
    }

    /// Toggle a workout day. Returns true if it is now completed.
    pub fn toggle_workout(&self, uid: &str, key: CompletionKey) -> Result<bool> {
        self.toggle_completion(uid, key, CompletionList::Workouts)
    }

    /// Toggle a meal day. Returns true if it is now completed.
    pub fn toggle_meal(&self, uid: &str, key: CompletionKey) -> Result<bool> {
        self.toggle_completion(uid, key, CompletionList::Meals)
    }

    fn toggle_completion(&self, uid: &str, key: CompletionKey, list: CompletionList) -> Result<bool> {
        let mut goals = self.get_goals(uid)?.unwrap_or_default();
        let keys = match list {
            CompletionList::Workouts => &mut goals.completed_workouts,
            CompletionList::Meals => &mut goals.completed_meals,
        };
        let done = toggle(keys, key);
        goals.updated_at = Some(Utc::now());
        self.save_goals(uid, &goals)?;

        info!("{} {:?} {} for {}", if done { "Completed" } else { "Reopened" }, list, key, uid);
        Ok(done)
    }

    /// Insert or replace a trainer document
    pub fn save_trainer(&self, trainer: &TrainerProfile) -> Result<()> {
        self.conn.execute(
            "INSERT OR REPLACE INTO trainers (uid, specialties, certifications, availability, trainee_ids)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                trainer.uid,
                serde_json::to_string(&trainer.specialties)?,
                serde_json::to_string(&trainer.certifications)?,
                trainer.availability,
                serde_json::to_string(&trainer.trainee_ids)?,
            ],
        )?;
        Ok(())
    }

    pub fn get_trainer(&self, uid: &str) -> Result<Option<TrainerProfile>> {
        let row = self
            .conn
            .query_row(
                "SELECT uid, specialties, certifications, availability, trainee_ids
                 FROM trainers WHERE uid = ?1",
                params![uid],
                |row| {
                    Ok((
                        row.get::<_, String>(0)?,
                        row.get::<_, String>(1)?,
                        row.get::<_, String>(2)?,
                        row.get::<_, Option<String>>(3)?,
                        row.get::<_, String>(4)?,
                    ))
                },
            )
            .optional()?;

        row.map(|(uid, specialties, certifications, availability, trainee_ids)| -> Result<TrainerProfile> {
            Ok(TrainerProfile {
                uid,
                specialties: json_list(&specialties).context("specialties")?,
                certifications: json_list(&certifications).context("certifications")?,
                availability,
                trainee_ids: json_list(&trainee_ids).context("traineeIds")?,
            })
        })
        .transpose()
    }

    /// Add a trainee to a trainer's roster. Returns false if already assigned.
    pub fn assign_trainee(&self, trainer_uid: &str, trainee_uid: &str) -> Result<bool> {
        let Some(mut trainer) = self.get_trainer(trainer_uid)? else {
            bail!("trainer {} not found", trainer_uid);
        };
        if self.get_user(trainee_uid)?.is_none() {
            bail!("trainee {} not found", trainee_uid);
        }
        if trainer.trainee_ids.iter().any(|id| id == trainee_uid) {
            return Ok(false);
        }

        trainer.trainee_ids.push(trainee_uid.to_string());
        self.save_trainer(&trainer)?;
        info!("Assigned trainee {} to trainer {}", trainee_uid, trainer_uid);
        Ok(true)
    }

    pub fn get_trainee_record(&self, uid: &str) -> Result<Option<TraineeRecord>> {
        let Some(user) = self.get_user(uid)? else {
            return Ok(None);
        };
        let goals = self.get_goals(uid)?;
        Ok(Some(TraineeRecord { user, goals }))
    }

    /// Records for every trainee on a trainer's roster, in roster order
    pub fn get_trainer_trainees(&self, trainer_uid: &str) -> Result<Vec<TraineeRecord>> {
        let Some(trainer) = self.get_trainer(trainer_uid)? else {
            bail!("trainer {} not found", trainer_uid);
        };

        let mut records = Vec::with_capacity(trainer.trainee_ids.len());
        for uid in &trainer.trainee_ids {
            match self.get_trainee_record(uid)? {
                Some(record) => records.push(record),
                None => warn!("Trainer {} lists unknown trainee {}", trainer_uid, uid),
            }
        }
        Ok(records)
    }
}

fn json_list(raw: &str) -> Result<Vec<String>> {
    Ok(serde_json::from_str(raw)?)
}
