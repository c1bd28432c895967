//! Binary input values shown on the LED grid.

use serde::{Deserialize, Serialize};

/// Raw integer that is not a valid input level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("input cell must be -1 or 1, got {0}")]
pub struct InvalidSignal(pub i8);

/// State of one input cell.
///
/// Only two levels exist, so an input matrix can never hold a 0 or any other
/// value. Serializes as the integers `-1` and `1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "i8", into = "i8")]
pub enum Signal {
    /// Inactive input (-1).
    #[default]
    Off,
    /// Active input (+1).
    On,
}

impl Signal {
    /// Numeric level used in the weighted sum.
    #[inline]
    pub fn value(self) -> f64 {
        match self {
            Signal::Off => -1.0,
            Signal::On => 1.0,
        }
    }

    /// Returns the opposite level.
    #[inline]
    pub fn toggled(self) -> Self {
        match self {
            Signal::Off => Signal::On,
            Signal::On => Signal::Off,
        }
    }

    /// Whether the LED is lit.
    pub fn is_on(self) -> bool {
        self == Signal::On
    }
}

impl From<Signal> for i8 {
    fn from(signal: Signal) -> Self {
        match signal {
            Signal::Off => -1,
            Signal::On => 1,
        }
    }
}

impl TryFrom<i8> for Signal {
    type Error = InvalidSignal;

    fn try_from(raw: i8) -> Result<Self, Self::Error> {
        match raw {
            -1 => Ok(Signal::Off),
            1 => Ok(Signal::On),
            other => Err(InvalidSignal(other)),
        }
    }
}
