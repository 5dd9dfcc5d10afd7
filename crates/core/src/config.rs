//! Runtime board configuration.

use std::fmt;
use std::time::Duration;

use crate::types::{AUTO_DROP_INTERVAL_MS, BOARD_HEIGHT, BOARD_WIDTH, MOVE_INTERVAL_MS};

/// Narrowest board that fits an I piece lying flat.
pub const MIN_WIDTH: u8 = 4;
/// Pieces occupy two rows at spawn.
pub const MIN_HEIGHT: u8 = 2;
/// Upper bound on either dimension; keeps translated `i8` coordinates in range.
pub const MAX_DIMENSION: u8 = 64;

/// Grid dimensions, timing gates and RNG seed for a [`crate::Board`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardConfig {
    pub width: u8,
    pub height: u8,
    /// Minimum gap between accepted moves
    pub move_interval: Duration,
    /// Gravity interval
    pub auto_drop_interval: Duration,
    /// `None` seeds the piece generator from OS entropy
    pub seed: Option<u64>,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            width: BOARD_WIDTH,
            height: BOARD_HEIGHT,
            move_interval: Duration::from_millis(MOVE_INTERVAL_MS as u64),
            auto_drop_interval: Duration::from_millis(AUTO_DROP_INTERVAL_MS as u64),
            seed: None,
        }
    }
}

impl BoardConfig {
    pub fn with_size(mut self, width: u8, height: u8) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_move_interval(mut self, interval: Duration) -> Self {
        self.move_interval = interval;
        self
    }

    pub fn with_auto_drop_interval(mut self, interval: Duration) -> Self {
        self.auto_drop_interval = interval;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check the dimensions are usable
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_WIDTH..=MAX_DIMENSION).contains(&self.width) {
            return Err(ConfigError::Width(self.width));
        }
        if !(MIN_HEIGHT..=MAX_DIMENSION).contains(&self.height) {
            return Err(ConfigError::Height(self.height));
        }
        Ok(())
    }
}

/// Rejected [`BoardConfig`] values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    Width(u8),
    Height(u8),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Width(w) => write!(
                f,
                "board width {} outside {}..={}",
                w, MIN_WIDTH, MAX_DIMENSION
            ),
            ConfigError::Height(h) => write!(
                f,
                "board height {} outside {}..={}",
                h, MIN_HEIGHT, MAX_DIMENSION
            ),
        }
    }
}

impl std::error::Error for ConfigError {}
