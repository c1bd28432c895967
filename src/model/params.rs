use std::path::Path;

use serde::{Deserialize, Serialize};

use super::dimensions::{Dimensions, clamp_extent};
use super::error::{Error, Result};
use super::perceptron::DEFAULT_LEARNING_RATE;

/// Default number of points kept in the output chart.
pub const MAX_HISTORY_POINTS: usize = 500;

/// Playground parameters.
///
/// Every field has a default, so a partial JSON file only needs the keys it
/// wants to override.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Params {
    /// Row count at startup and after "apply settings".
    pub initial_rows: usize,
    /// Column count at startup and after "apply settings".
    pub initial_cols: usize,
    /// Learning rate at startup.
    pub initial_learning_rate: f64,
    /// Lower bound of the learning-rate widget.
    pub learning_rate_min: f64,
    /// Upper bound of the learning-rate widget.
    pub learning_rate_max: f64,
    /// Drag step of the learning-rate widget.
    pub learning_rate_step: f64,
    /// Number of entries kept in the recent-actions panel.
    pub action_log_capacity: usize,
    /// Number of points kept in the output chart.
    pub output_history_capacity: usize,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            initial_rows: 3,
            initial_cols: 3,
            initial_learning_rate: DEFAULT_LEARNING_RATE,
            learning_rate_min: 0.0,
            learning_rate_max: 1.0,
            learning_rate_step: 0.1,
            action_log_capacity: 20,
            output_history_capacity: MAX_HISTORY_POINTS,
        }
    }
}

impl Params {
    /// Initial grid shape, clamped into range.
    pub fn initial_dimensions(&self) -> Dimensions {
        Dimensions::new(self.initial_rows, self.initial_cols)
    }

    /// Clamps a learning rate into the widget range.
    pub fn clamp_learning_rate(&self, learning_rate: f64) -> f64 {
        learning_rate.clamp(self.learning_rate_min, self.learning_rate_max)
    }

    /// Repairs out-of-range values in place.
    ///
    /// Non-finite learning-rate settings fall back to their defaults, bounds
    /// are reordered if inverted, and capacities are at least 1.
    pub fn sanitize(&mut self) {
        let defaults = Self::default();

        self.initial_rows = clamp_extent(self.initial_rows);
        self.initial_cols = clamp_extent(self.initial_cols);

        if !self.learning_rate_min.is_finite() {
            self.learning_rate_min = defaults.learning_rate_min;
        }
        if !self.learning_rate_max.is_finite() {
            self.learning_rate_max = defaults.learning_rate_max;
        }
        if self.learning_rate_min > self.learning_rate_max {
            std::mem::swap(&mut self.learning_rate_min, &mut self.learning_rate_max);
        }
        if !self.learning_rate_step.is_finite() || self.learning_rate_step <= 0.0 {
            self.learning_rate_step = defaults.learning_rate_step;
        }
        if !self.initial_learning_rate.is_finite() {
            self.initial_learning_rate = defaults.initial_learning_rate;
        }
        self.initial_learning_rate = self.clamp_learning_rate(self.initial_learning_rate);

        self.action_log_capacity = self.action_log_capacity.max(1);
        self.output_history_capacity = self.output_history_capacity.max(1);
    }

    /// Parses parameters from JSON and sanitizes them.
    pub fn from_json(json: &str) -> Result<Self> {
        let mut params: Params = serde_json::from_str(json)?;
        params.sanitize();
        Ok(params)
    }

    /// Loads parameters from a JSON file.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Saves parameters to a pretty-printed JSON file.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json).map_err(Error::from)
    }
}
