//! User interactions that drive the perceptron state.

/// Direction of a batch weight update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feedback {
    /// Move every weight toward the current input pattern.
    Accept,
    /// Move every weight away from the current input pattern.
    Reject,
}

/// One discrete interaction emitted by the presentation layer.
///
/// Coordinates are `(row, col)` and must lie inside the current grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    /// Flip an input cell between -1 and +1.
    Toggle {
        /// Row index.
        row: usize,
        /// Column index.
        col: usize,
    },
    /// Add the learning rate to one weight.
    IncreaseWeight {
        /// Row index.
        row: usize,
        /// Column index.
        col: usize,
    },
    /// Subtract the learning rate from one weight.
    DecreaseWeight {
        /// Row index.
        row: usize,
        /// Column index.
        col: usize,
    },
    /// Overwrite one weight.
    SetWeight {
        /// Row index.
        row: usize,
        /// Column index.
        col: usize,
        /// New weight, rounded to two decimals on write.
        value: f64,
    },
    /// Change the row count (clamped); resets both matrices on change.
    SetRows(usize),
    /// Change the column count (clamped); resets both matrices on change.
    SetCols(usize),
    /// Change the learning rate.
    SetLearningRate(f64),
    /// Batch update toward the current input.
    Accept,
    /// Batch update away from the current input.
    Reject,
    /// Reinitialize both matrices at the current dimensions.
    Reset,
}

/// Coarse grouping of actions, used to color the action log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    /// Input toggles.
    Input,
    /// Single-weight edits.
    Weight,
    /// Accept batch update.
    Accept,
    /// Reject batch update.
    Reject,
    /// Dimension, learning-rate and reset changes.
    Setup,
}

impl Action {
    /// Group this action belongs to.
    pub fn kind(&self) -> ActionKind {
        match self {
            Action::Toggle { .. } => ActionKind::Input,
            Action::IncreaseWeight { .. }
            | Action::DecreaseWeight { .. }
            | Action::SetWeight { .. } => ActionKind::Weight,
            Action::Accept => ActionKind::Accept,
            Action::Reject => ActionKind::Reject,
            Action::SetRows(_) | Action::SetCols(_) | Action::SetLearningRate(_) | Action::Reset => {
                ActionKind::Setup
            }
        }
    }

    /// Short human-readable description.
    pub fn describe(&self) -> String {
        match *self {
            Action::Toggle { row, col } => format!("toggle input ({row}, {col})"),
            Action::IncreaseWeight { row, col } => format!("increase weight ({row}, {col})"),
            Action::DecreaseWeight { row, col } => format!("decrease weight ({row}, {col})"),
            Action::SetWeight { row, col, value } => {
                format!("set weight ({row}, {col}) to {value:.2}")
            }
            Action::SetRows(rows) => format!("set rows to {rows}"),
            Action::SetCols(cols) => format!("set cols to {cols}"),
            Action::SetLearningRate(lr) => format!("set learning rate to {lr:.2}"),
            Action::Accept => "accept".to_string(),
            Action::Reject => "reject".to_string(),
            Action::Reset => "reset".to_string(),
        }
    }
}
