//! Completion keys - "{week}-{day}" markers stored per trainee

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::error::KeyError;

/// Marks one scheduled day as done, e.g. "3-5" = week 3, day 5
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CompletionKey {
    pub week: u32,
    pub day: u32,
}

impl CompletionKey {
    pub fn new(week: u32, day: u32) -> Self {
        Self { week, day }
    }
}

impl fmt::Display for CompletionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.week, self.day)
    }
}

impl FromStr for CompletionKey {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (week, day) = s
            .split_once('-')
            .ok_or_else(|| KeyError::MissingSeparator(s.to_string()))?;

        let week = parse_number(week).ok_or_else(|| KeyError::BadWeek(s.to_string()))?;
        let day = parse_number(day).ok_or_else(|| KeyError::BadDay(s.to_string()))?;

        Ok(Self { week, day })
    }
}

/// 1-based decimal without sign or leading zeros, so stored strings match exactly
fn parse_number(s: &str) -> Option<u32> {
    if s.is_empty() || s.starts_with('0') || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

/// Set of completed days for one trainee and one plan kind
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompletionSet {
    keys: HashSet<CompletionKey>,
}

impl CompletionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse stored key strings, skipping anything malformed
    pub fn from_keys<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let keys = keys
            .into_iter()
            .filter_map(|raw| match raw.as_ref().parse() {
                Ok(key) => Some(key),
                Err(e) => {
                    debug!("Ignoring completion key: {}", e);
                    None
                }
            })
            .collect();
        Self { keys }
    }

    pub fn insert(&mut self, key: CompletionKey) -> bool {
        self.keys.insert(key)
    }

    pub fn contains(&self, week: u32, day: u32) -> bool {
        self.keys.contains(&CompletionKey::new(week, day))
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CompletionKey> {
        self.keys.iter()
    }
}

/// Flip a key in a stored key list. Returns true if the day is now completed.
pub fn toggle(keys: &mut Vec<String>, key: CompletionKey) -> bool {
    let key = key.to_string();
    if keys.contains(&key) {
        keys.retain(|k| *k != key);
        false
    } else {
        keys.push(key);
        true
    }
}
