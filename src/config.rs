use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::game::Board;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read settings file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse settings file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid settings: {0}")]
    Invalid(String),
}

/// Window, grid and timing settings. Sizes are in logical pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub width: u32,
    pub height: u32,
    /// Side of one grid cell
    pub unit_size: u32,
    /// Milliseconds between ticks
    pub tick_ms: u64,
    /// Minimum distance between a new apple and the snake
    pub min_apple_distance: f32,
    pub apple_retry_limit: u32,
    /// Ticks allowed per frame when the event loop falls behind
    pub max_catch_up_ticks: u32,
    /// Fixed RNG seed for reproducible games
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            width: 600,
            height: 600,
            unit_size: 10,
            tick_ms: 100,
            min_apple_distance: 20.0,
            apple_retry_limit: 1000,
            max_catch_up_ticks: 5,
            seed: None,
        }
    }
}

impl Settings {
    /// Read settings from a JSON file. Missing fields take their defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.unit_size == 0 {
            return Err(ConfigError::Invalid("unit_size must be positive".into()));
        }
        if self.width < self.unit_size || self.height < self.unit_size {
            return Err(ConfigError::Invalid(format!(
                "window {}x{} is smaller than one {}px cell",
                self.width, self.height, self.unit_size
            )));
        }
        if self.width % self.unit_size != 0 || self.height % self.unit_size != 0 {
            return Err(ConfigError::Invalid(format!(
                "window {}x{} is not a multiple of unit_size {}",
                self.width, self.height, self.unit_size
            )));
        }
        let columns = self.width / self.unit_size;
        let rows = self.height / self.unit_size;
        if i32::try_from(columns).is_err() || i32::try_from(rows).is_err() {
            return Err(ConfigError::Invalid(format!(
                "grid of {columns}x{rows} cells is too large"
            )));
        }
        if self.tick_ms == 0 {
            return Err(ConfigError::Invalid("tick_ms must be positive".into()));
        }
        if !self.min_apple_distance.is_finite() || self.min_apple_distance < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "min_apple_distance {} must be a non-negative number",
                self.min_apple_distance
            )));
        }
        if self.apple_retry_limit == 0 {
            return Err(ConfigError::Invalid("apple_retry_limit must be positive".into()));
        }
        if self.max_catch_up_ticks == 0 {
            return Err(ConfigError::Invalid("max_catch_up_ticks must be positive".into()));
        }
        Ok(())
    }

    /// Cell count across. Only meaningful once [`Settings::validate`] passed.
    pub fn columns(&self) -> i32 {
        (self.width / self.unit_size) as i32
    }

    pub fn rows(&self) -> i32 {
        (self.height / self.unit_size) as i32
    }

    pub fn tick_period(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    /// Grid geometry in cells.
    pub fn board(&self) -> Board {
        Board {
            columns: self.columns(),
            rows: self.rows(),
            min_apple_distance: f64::from(self.min_apple_distance) / f64::from(self.unit_size),
            apple_retry_limit: self.apple_retry_limit,
        }
    }
}
