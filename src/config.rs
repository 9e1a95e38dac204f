use std::io;
use std::path::PathBuf;

use clap::ValueEnum;
use ratatui::style::Color;
use ratatui::symbols::border;
use thiserror::Error;

use crate::difficulty::LevelTable;
use crate::input::Direction;

/// Logical grid dimensions passed through the game as a named type.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GridSize {
    pub rows: u16,
    pub cols: u16,
}

impl GridSize {
    /// Returns the total number of cells in the grid.
    #[must_use]
    pub fn total_cells(self) -> usize {
        usize::from(self.rows) * usize::from(self.cols)
    }
}

/// How the score reacts when the snake bites off part of itself.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, ValueEnum)]
pub enum ScorePolicy {
    /// Score only ever grows by the goal reward; truncation leaves it alone.
    RewardOnly,
    /// Goal reward on consumption, and `length - default length` after a truncation.
    #[default]
    RecomputeOnTruncation,
}

/// Failures while building a [`GameConfig`] from user input.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read level table {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed level table {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("level table must contain at least one level")]
    EmptyLevelTable,
    #[error("level `{name}` is invalid: {reason}")]
    InvalidLevel { name: String, reason: &'static str },
    #[error("grid {rows}x{cols} is too small for a snake of length {snake_length}")]
    GridTooSmall {
        rows: u16,
        cols: u16,
        snake_length: usize,
    },
}

/// Complete rule set for one game session.
#[derive(Debug, Clone)]
pub struct GameConfig {
    pub grid: GridSize,
    pub snake_length: usize,
    pub start_direction: Direction,
    pub goal_reward: u32,
    pub score_policy: ScorePolicy,
    pub levels: LevelTable,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid: GridSize {
                rows: DEFAULT_GRID_ROWS,
                cols: DEFAULT_GRID_COLS,
            },
            snake_length: DEFAULT_SNAKE_LENGTH,
            start_direction: Direction::Up,
            goal_reward: GOAL_REWARD,
            score_policy: ScorePolicy::default(),
            levels: LevelTable::default(),
        }
    }
}

impl GameConfig {
    /// Checks that the configuration can host a playable game.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let too_small = |dimension: u16| usize::from(dimension) <= self.snake_length;
        if too_small(self.grid.rows) || too_small(self.grid.cols) {
            return Err(ConfigError::GridTooSmall {
                rows: self.grid.rows,
                cols: self.grid.cols,
                snake_length: self.snake_length,
            });
        }

        self.levels.validate()
    }
}

/// Default number of grid rows.
pub const DEFAULT_GRID_ROWS: u16 = 16;

/// Default number of grid columns.
pub const DEFAULT_GRID_COLS: u16 = 16;

/// Snake length at game start; truncation scoring is measured against it.
pub const DEFAULT_SNAKE_LENGTH: usize = 4;

/// Score granted for every consumed goal.
pub const GOAL_REWARD: u32 = 10;

/// Tick interval used when no level matches a zero score.
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 1000;

/// Default quiet period before a held direction press is released.
pub const DEFAULT_DEBOUNCE_MS: u64 = 200;

/// Frame pacing of the terminal loop.
pub const FRAME_INTERVAL_MS: u64 = 16;

/// Snake cell color.
pub const SNAKE_COLOR: Color = Color::Rgb(0x32, 0xcd, 0x32);

/// Goal cell color.
pub const GOAL_COLOR: Color = Color::Rgb(0x20, 0xb2, 0xaa);

/// Free cell color.
pub const CLEAR_CELL_COLOR: Color = Color::White;

/// Glyph for one board cell; two columns keep cells roughly square.
pub const GLYPH_CELL: &str = "██";

/// Border drawn around the board.
pub const BOARD_BORDER: border::Set = border::ROUNDED;

#[cfg(test)]
mod tests {
    use super::{ConfigError, GameConfig, GridSize};

    #[test]
    fn default_config_is_valid() {
        let config = GameConfig::default();

        assert!(config.validate().is_ok());
        assert_eq!(config.grid.total_cells(), 256);
    }

    #[test]
    fn grid_must_be_larger_than_snake() {
        let config = GameConfig {
            grid: GridSize { rows: 4, cols: 16 },
            ..GameConfig::default()
        };

        assert!(matches!(
            config.validate(),
            Err(ConfigError::GridTooSmall { rows: 4, .. })
        ));
    }
}
