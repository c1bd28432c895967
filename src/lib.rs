//! # Perceptron - Single-Unit Playground
//!
//! An interactive visualizer for one perceptron. Inputs are an "LED" grid of
//! -1/+1 cells, each paired with a weight; the output is their weighted sum.
//! Weights can be nudged one at a time, or all at once with accept/reject,
//! which move every weight toward or away from the current input pattern.
//!
//! ## Features
//!
//! - Input and weight grids from 1x1 up to 5x5
//! - Single-weight nudges by the learning rate, or direct edits
//! - Accept/reject batch updates computed from one consistent snapshot
//! - Output recomputed after every change
//! - Recent-actions log and output history chart
//! - JSON snapshot export/import via the clipboard
//! - Real-time UI with egui/macroquad
//!
//! ## Core Modules
//!
//! - [`model::perceptron`] - Perceptron state and transitions
//! - [`model::action`] - User interactions applied to the state
//! - [`model::session`] - Session wrapper with action log
//! - [`model::snapshot`] - Snapshot export/import
//! - [`model::params`] - Playground parameters

/// Perceptron state, transitions and supporting data structures.
pub mod model {
    /// User interactions applied to the perceptron.
    pub mod action;
    /// Bounded log of recently applied actions.
    pub mod action_log;
    /// Grid shape and extent parsing.
    pub mod dimensions;
    /// Error types for parameter and snapshot loading.
    pub mod error;
    /// Playground parameters.
    pub mod params;
    /// The perceptron state machine.
    pub mod perceptron;
    /// Session wrapper that records dispatched actions.
    pub mod session;
    /// Binary input levels.
    pub mod signal;
    /// JSON snapshot export/import.
    pub mod snapshot;
}

/// Logging setup.
pub mod logging;
