//! Clipboard exchange format for the perceptron state.
//!
//! A snapshot carries the dimensions, both matrices and the learning rate.
//! The output is not stored; it is recomputed on import.

use ndarray::Array2;
use serde::{Deserialize, Serialize};

use super::dimensions::{Dimensions, is_valid_extent};
use super::error::{Error, Result};
use super::perceptron::Perceptron;
use super::signal::Signal;

/// Serializable view of a [`Perceptron`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Row count (N).
    pub rows: usize,
    /// Column count (M).
    pub cols: usize,
    /// Learning rate.
    pub learning_rate: f64,
    /// Input levels, `-1` or `1` per cell.
    pub input: Array2<Signal>,
    /// Weights.
    pub weights: Array2<f64>,
}

impl Snapshot {
    /// Serializes to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parses a snapshot from JSON. The result still has to pass
    /// [`Perceptron::from_snapshot`] before it is usable.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    fn validate(&self) -> Result<Dimensions> {
        if !is_valid_extent(self.rows) || !is_valid_extent(self.cols) {
            return Err(Error::DimensionsOutOfRange {
                rows: self.rows,
                cols: self.cols,
            });
        }

        check_shape("input", self.input.dim(), self.rows, self.cols)?;
        check_shape("weight", self.weights.dim(), self.rows, self.cols)?;

        if !self.learning_rate.is_finite() {
            return Err(Error::NonFinite("learning rate"));
        }
        if self.weights.iter().any(|w| !w.is_finite()) {
            return Err(Error::NonFinite("weight"));
        }

        Ok(Dimensions::new(self.rows, self.cols))
    }
}

fn check_shape(
    matrix: &'static str,
    (actual_rows, actual_cols): (usize, usize),
    rows: usize,
    cols: usize,
) -> Result<()> {
    if (actual_rows, actual_cols) == (rows, cols) {
        Ok(())
    } else {
        Err(Error::ShapeMismatch {
            matrix,
            rows,
            cols,
            actual_rows,
            actual_cols,
        })
    }
}

impl Perceptron {
    /// Captures the current state.
    pub fn snapshot(&self) -> Snapshot {
        let dims = self.dimensions();
        Snapshot {
            rows: dims.rows(),
            cols: dims.cols(),
            learning_rate: self.learning_rate(),
            input: self.input().clone(),
            weights: self.weights().clone(),
        }
    }

    /// Restores a perceptron from a snapshot.
    ///
    /// Weights are rounded to two decimals and the output is recomputed.
    pub fn from_snapshot(snapshot: Snapshot) -> Result<Self> {
        let dims = snapshot.validate()?;
        Ok(Self::from_parts(
            dims,
            snapshot.input,
            snapshot.weights,
            snapshot.learning_rate,
        ))
    }
}
