//! Single perceptron unit with manually driven weight updates.
//!
//! The unit owns an input grid of [`Signal`]s, a weight grid of the same
//! shape and a learning rate. Its output is the weighted sum of the two
//! grids and is recomputed at the end of every mutating method, so readers
//! never observe a value that belongs to an earlier state.

use ndarray::{Array2, Zip};
use tracing::debug;

use super::action::{Action, Feedback};
use super::dimensions::Dimensions;
use super::params::Params;
use super::signal::Signal;

/// Learning rate used when none is configured.
pub const DEFAULT_LEARNING_RATE: f64 = 0.1;

/// Rounds to two decimal places.
///
/// Negative zero is normalized to `0.0` so that it displays as `0.00`.
#[inline]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0 + 0.0
}

/// Weighted sum `Σ input[i][j] × weights[i][j]`.
///
/// Both grids must have the same shape.
pub fn weighted_sum(input: &Array2<Signal>, weights: &Array2<f64>) -> f64 {
    Zip::from(input)
        .and(weights)
        .fold(0.0, |acc, signal, weight| acc + signal.value() * weight)
}

/// State of the perceptron playground.
#[derive(Debug, Clone, PartialEq)]
pub struct Perceptron {
    dims: Dimensions,
    input: Array2<Signal>,
    weights: Array2<f64>,
    learning_rate: f64,
    output: f64,
}

impl Default for Perceptron {
    fn default() -> Self {
        Self::new(Dimensions::default(), DEFAULT_LEARNING_RATE)
    }
}

impl Perceptron {
    /// Creates a perceptron with all inputs off and all weights zero.
    pub fn new(dims: Dimensions, learning_rate: f64) -> Self {
        Self {
            dims,
            input: Array2::from_elem(dims.shape(), Signal::Off),
            weights: Array2::zeros(dims.shape()),
            learning_rate,
            output: 0.0,
        }
    }

    /// Creates a perceptron from the initial values in `params`.
    pub fn from_params(params: &Params) -> Self {
        Self::new(params.initial_dimensions(), params.initial_learning_rate)
    }

    /// Builds a perceptron from already validated parts.
    ///
    /// Weights are rounded and the output is computed.
    pub(crate) fn from_parts(
        dims: Dimensions,
        input: Array2<Signal>,
        weights: Array2<f64>,
        learning_rate: f64,
    ) -> Self {
        debug_assert_eq!(input.dim(), dims.shape());
        debug_assert_eq!(weights.dim(), dims.shape());

        let mut perceptron = Self {
            dims,
            input,
            weights: weights.mapv(round2),
            learning_rate,
            output: 0.0,
        };
        perceptron.recompute_output();
        perceptron
    }

    /// Current grid shape.
    pub fn dimensions(&self) -> Dimensions {
        self.dims
    }

    /// Input grid.
    pub fn input(&self) -> &Array2<Signal> {
        &self.input
    }

    /// Weight grid, same shape as the input.
    pub fn weights(&self) -> &Array2<f64> {
        &self.weights
    }

    /// Step size used by single-weight nudges and accept/reject.
    pub fn learning_rate(&self) -> f64 {
        self.learning_rate
    }

    /// Weighted sum of the current input and weights.
    pub fn output(&self) -> f64 {
        self.output
    }

    /// Input level at `(row, col)`.
    ///
    /// # Panics
    /// If the cell lies outside the grid.
    pub fn input_at(&self, row: usize, col: usize) -> Signal {
        self.check_bounds(row, col);
        self.input[[row, col]]
    }

    /// Weight at `(row, col)`.
    ///
    /// # Panics
    /// If the cell lies outside the grid.
    pub fn weight_at(&self, row: usize, col: usize) -> f64 {
        self.check_bounds(row, col);
        self.weights[[row, col]]
    }

    /// Applies one user interaction.
    ///
    /// Returns `true` when the matrices were reinitialized (dimension change
    /// or explicit reset).
    pub fn apply(&mut self, action: Action) -> bool {
        debug!(?action, "applying action");
        match action {
            Action::Toggle { row, col } => self.toggle(row, col),
            Action::IncreaseWeight { row, col } => self.increase_weight(row, col),
            Action::DecreaseWeight { row, col } => self.decrease_weight(row, col),
            Action::SetWeight { row, col, value } => self.set_weight(row, col, value),
            Action::SetRows(rows) => return self.set_rows(rows),
            Action::SetCols(cols) => return self.set_cols(cols),
            Action::SetLearningRate(lr) => self.set_learning_rate(lr),
            Action::Accept => self.accept(),
            Action::Reject => self.reject(),
            Action::Reset => {
                self.reset();
                return true;
            }
        }
        false
    }

    /// Sets the row count. Returns `true` if it changed, in which case
    /// both matrices are reinitialized.
    pub fn set_rows(&mut self, rows: usize) -> bool {
        self.resize(self.dims.with_rows(rows))
    }

    /// Sets the column count. Returns `true` if it changed, in which case
    /// both matrices are reinitialized.
    pub fn set_cols(&mut self, cols: usize) -> bool {
        self.resize(self.dims.with_cols(cols))
    }

    /// Switches to new dimensions, discarding every input and weight edit.
    ///
    /// Requesting the current dimensions is a no-op and returns `false`.
    pub fn resize(&mut self, dims: Dimensions) -> bool {
        if dims == self.dims {
            return false;
        }
        debug!(
            rows = dims.rows(),
            cols = dims.cols(),
            "dimensions changed, reinitializing matrices"
        );
        self.dims = dims;
        self.reset();
        true
    }

    /// Resets inputs to -1 and weights to 0 at the current dimensions.
    pub fn reset(&mut self) {
        self.input = Array2::from_elem(self.dims.shape(), Signal::Off);
        self.weights = Array2::zeros(self.dims.shape());
        self.recompute_output();
    }

    /// Flips the input cell at `(row, col)`.
    ///
    /// # Panics
    /// If the cell lies outside the grid.
    pub fn toggle(&mut self, row: usize, col: usize) {
        self.check_bounds(row, col);
        let cell = &mut self.input[[row, col]];
        *cell = cell.toggled();
        self.recompute_output();
    }

    /// Adds `delta` to one weight, rounding to two decimals.
    ///
    /// # Panics
    /// If the cell lies outside the grid.
    pub fn adjust_weight(&mut self, row: usize, col: usize, delta: f64) {
        self.check_bounds(row, col);
        let cell = &mut self.weights[[row, col]];
        *cell = round2(*cell + delta);
        self.recompute_output();
    }

    /// Increases one weight by the learning rate.
    pub fn increase_weight(&mut self, row: usize, col: usize) {
        self.adjust_weight(row, col, self.learning_rate);
    }

    /// Decreases one weight by the learning rate.
    pub fn decrease_weight(&mut self, row: usize, col: usize) {
        self.adjust_weight(row, col, -self.learning_rate);
    }

    /// Overwrites one weight, rounding to two decimals.
    ///
    /// # Panics
    /// If the cell lies outside the grid.
    pub fn set_weight(&mut self, row: usize, col: usize, value: f64) {
        self.check_bounds(row, col);
        self.weights[[row, col]] = round2(value);
        self.recompute_output();
    }

    /// Sets the learning rate. No bounds are enforced here; the widget that
    /// edits it owns the range.
    pub fn set_learning_rate(&mut self, learning_rate: f64) {
        self.learning_rate = learning_rate;
    }

    /// Nudges every weight toward the current input pattern.
    pub fn accept(&mut self) {
        self.apply_feedback(Feedback::Accept);
    }

    /// Nudges every weight away from the current input pattern.
    pub fn reject(&mut self) {
        self.apply_feedback(Feedback::Reject);
    }

    /// Batch update `w ← round2(w ± lr × x)` over every cell.
    ///
    /// The new matrix is built from borrows of the pre-batch input and
    /// weights, so every cell sees the same snapshot. The output is
    /// recomputed once, after the whole batch.
    pub fn apply_feedback(&mut self, feedback: Feedback) {
        let lr = self.learning_rate;
        let updated = Zip::from(&self.weights)
            .and(&self.input)
            .map_collect(|&weight, &signal| {
                let adjustment = lr * signal.value();
                match feedback {
                    Feedback::Accept => round2(weight + adjustment),
                    Feedback::Reject => round2(weight - adjustment),
                }
            });

        self.weights = updated;
        self.recompute_output();
    }

    fn recompute_output(&mut self) {
        self.output = weighted_sum(&self.input, &self.weights);
    }

    fn check_bounds(&self, row: usize, col: usize) {
        assert!(
            self.dims.contains(row, col),
            "cell ({row}, {col}) is outside the {}x{} grid",
            self.dims.rows(),
            self.dims.cols()
        );
    }
}
