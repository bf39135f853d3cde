use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result, ensure};

const DEFAULT_DB_PATH: &str = "coachtrack.db";
const DEFAULT_REFRESH_SECS: u64 = 5;

/// Application configuration loaded from environment variables.
/// Every setting has a default; CLI flags override the store and catalog paths.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub db_path: String,
    pub catalog_path: Option<PathBuf>,
    /// How often the dashboard re-reads the store
    pub refresh_interval: Duration,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let refresh_secs = match lookup("COACHTRACK_REFRESH_SECS") {
            Some(raw) => raw
                .parse::<u64>()
                .context("COACHTRACK_REFRESH_SECS must be a whole number of seconds")?,
            None => DEFAULT_REFRESH_SECS,
        };
        ensure!(refresh_secs >= 1, "COACHTRACK_REFRESH_SECS must be at least 1");

        Ok(Config {
            db_path: lookup("COACHTRACK_DB").unwrap_or_else(|| DEFAULT_DB_PATH.to_string()),
            catalog_path: lookup("COACHTRACK_CATALOG")
                .filter(|p| !p.is_empty())
                .map(PathBuf::from),
            refresh_interval: Duration::from_secs(refresh_secs),
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config(&[]).unwrap();
        assert_eq!(config.db_path, "coachtrack.db");
        assert_eq!(config.catalog_path, None);
        assert_eq!(config.refresh_interval, Duration::from_secs(5));
        assert_eq!(config.rust_log, "info");
    }

    #[test]
    fn test_overrides() {
        let config = config(&[
            ("COACHTRACK_DB", "/tmp/coach.db"),
            ("COACHTRACK_CATALOG", "plans.json"),
            ("COACHTRACK_REFRESH_SECS", "10"),
            ("RUST_LOG", "debug"),
        ])
        .unwrap();
        assert_eq!(config.db_path, "/tmp/coach.db");
        assert_eq!(config.catalog_path, Some(PathBuf::from("plans.json")));
        assert_eq!(config.refresh_interval, Duration::from_secs(10));
        assert_eq!(config.rust_log, "debug");
    }

    #[test]
    fn test_empty_catalog_ignored() {
        let config = config(&[("COACHTRACK_CATALOG", "")]).unwrap();
        assert_eq!(config.catalog_path, None);
    }

    #[test]
    fn test_bad_refresh_rejected() {
        assert!(config(&[("COACHTRACK_REFRESH_SECS", "soon")]).is_err());
        assert!(config(&[("COACHTRACK_REFRESH_SECS", "0")]).is_err());
    }
}
