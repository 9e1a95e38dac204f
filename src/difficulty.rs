use std::fs;
use std::path::Path;
use std::time::Duration;

use clap::ValueEnum;
use serde::Deserialize;

use crate::config::ConfigError;

/// How a score is matched against the level table.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum LevelPolicy {
    /// The level with the highest `min_score` not above the score wins.
    Floor,
    /// The first level whose `[min_score, max_score]` contains the score wins.
    #[default]
    Range,
}

/// One difficulty tier.
#[derive(Debug, Clone, Eq, PartialEq, Deserialize)]
pub struct Level {
    pub name: String,
    pub interval_ms: u64,
    pub min_score: u32,
    #[serde(default = "unbounded")]
    pub max_score: u32,
}

fn unbounded() -> u32 {
    u32::MAX
}

impl Level {
    #[must_use]
    pub fn new(name: &str, interval_ms: u64, min_score: u32, max_score: u32) -> Self {
        Self {
            name: name.to_owned(),
            interval_ms,
            min_score,
            max_score,
        }
    }

    #[must_use]
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    fn contains(&self, score: u32) -> bool {
        self.min_score <= score && score <= self.max_score
    }
}

/// Ordered level list plus the rule used to pick among them.
#[derive(Debug, Clone, Eq, PartialEq, Deserialize)]
pub struct LevelTable {
    #[serde(default)]
    pub policy: LevelPolicy,
    pub levels: Vec<Level>,
}

impl Default for LevelTable {
    fn default() -> Self {
        Self {
            policy: LevelPolicy::Range,
            levels: vec![
                Level::new("easy", 1000, 0, 40),
                Level::new("medium", 800, 50, 90),
                Level::new("hard", 600, 100, 140),
                Level::new("impossible", 400, 140, 1000),
            ],
        }
    }
}

impl LevelTable {
    /// Reads a JSON level table from `path`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let table: Self = serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        table.validate()?;
        Ok(table)
    }

    /// Rejects tables that could never select a usable level.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.levels.is_empty() {
            return Err(ConfigError::EmptyLevelTable);
        }

        for level in &self.levels {
            let reason = if level.interval_ms == 0 {
                "interval must be positive"
            } else if level.min_score > level.max_score {
                "min_score exceeds max_score"
            } else {
                continue;
            };

            return Err(ConfigError::InvalidLevel {
                name: level.name.clone(),
                reason,
            });
        }

        Ok(())
    }

    /// Returns the level `score` falls into, if any.
    #[must_use]
    pub fn select(&self, score: u32) -> Option<&Level> {
        match self.policy {
            LevelPolicy::Floor => self
                .levels
                .iter()
                .filter(|level| level.min_score <= score)
                .max_by_key(|level| level.min_score),
            LevelPolicy::Range => self.levels.iter().find(|level| level.contains(score)),
        }
    }
}

/// Tracks the active tick interval and reports when the score demands another.
#[derive(Debug, Clone)]
pub struct DifficultyController {
    table: LevelTable,
    active_interval: Duration,
    active_level: Option<String>,
}

impl DifficultyController {
    /// Starts at the level matching a zero score, or `fallback` when none matches.
    #[must_use]
    pub fn new(table: LevelTable, fallback: Duration) -> Self {
        let mut controller = Self {
            table,
            active_interval: fallback,
            active_level: None,
        };
        controller.reset(fallback);
        controller
    }

    /// Returns to the zero-score level.
    pub fn reset(&mut self, fallback: Duration) {
        let initial = self.table.select(0).cloned();
        self.active_interval = initial.as_ref().map_or(fallback, Level::interval);
        self.active_level = initial.map(|level| level.name);
    }

    #[must_use]
    pub fn active_interval(&self) -> Duration {
        self.active_interval
    }

    #[must_use]
    pub fn active_level(&self) -> Option<&str> {
        self.active_level.as_deref()
    }

    /// Re-evaluates the level for `score`.
    ///
    /// Returns the new interval when it differs from the active one. A score
    /// that matches no level leaves everything unchanged.
    pub fn evaluate(&mut self, score: u32) -> Option<Duration> {
        let level = self.table.select(score)?;
        if level.interval() == self.active_interval {
            return None;
        }

        self.active_interval = level.interval();
        self.active_level = Some(level.name.clone());
        Some(self.active_interval)
    }
}
