//! Interactive session: the perceptron plus what the UI shows about its past.

use tracing::debug;

use super::action::Action;
use super::action_log::ActionLog;
use super::error::Result;
use super::params::Params;
use super::perceptron::Perceptron;
use super::snapshot::Snapshot;

/// Result of dispatching one frame's worth of actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameOutcome {
    /// Actions that were applied.
    pub applied: usize,
    /// Actions discarded because an earlier one reinitialized the matrices.
    pub dropped: usize,
    /// Whether the matrices were reinitialized.
    pub reinitialized: bool,
}

/// Owns the perceptron for one run of the playground.
///
/// Every state change goes through [`Session::dispatch`] so that the action
/// log and step counter stay in sync with the perceptron.
#[derive(Debug, Clone)]
pub struct Session {
    /// Current perceptron state.
    pub perceptron: Perceptron,
    /// Recently applied actions.
    pub action_log: ActionLog,
    step: u64,
}

impl Session {
    /// Starts a fresh session from `params`.
    pub fn new(params: &Params) -> Self {
        Self {
            perceptron: Perceptron::from_params(params),
            action_log: ActionLog::new(params.action_log_capacity),
            step: 0,
        }
    }

    /// Number of actions dispatched so far.
    pub fn step(&self) -> u64 {
        self.step
    }

    /// Applies `action` and records it.
    ///
    /// Returns `true` when the matrices were reinitialized.
    pub fn dispatch(&mut self, action: Action) -> bool {
        let reinitialized = self.perceptron.apply(action);
        self.step += 1;
        self.action_log
            .record(self.step, &action, self.perceptron.output());
        reinitialized
    }

    /// Applies the actions collected during one UI frame, in order.
    ///
    /// Cell coordinates in a frame refer to the grid that was drawn. Once an
    /// action reinitializes the matrices, the remaining actions may address
    /// cells that no longer exist, so they are dropped.
    pub fn dispatch_frame(&mut self, actions: impl IntoIterator<Item = Action>) -> FrameOutcome {
        let mut outcome = FrameOutcome::default();
        let mut actions = actions.into_iter();

        for action in actions.by_ref() {
            outcome.applied += 1;
            if self.dispatch(action) {
                outcome.reinitialized = true;
                break;
            }
        }

        outcome.dropped = actions.count();
        if outcome.dropped > 0 {
            debug!(dropped = outcome.dropped, "discarded actions queued before reinitialization");
        }
        outcome
    }

    /// Replaces the perceptron with an imported snapshot.
    ///
    /// On error the current state is left untouched.
    pub fn load_snapshot(&mut self, snapshot: Snapshot) -> Result<()> {
        let perceptron = Perceptron::from_snapshot(snapshot)?;
        let dims = perceptron.dimensions();
        debug!(
            rows = dims.rows(),
            cols = dims.cols(),
            output = perceptron.output(),
            "snapshot loaded"
        );
        self.perceptron = perceptron;
        self.action_log.clear();
        Ok(())
    }
}
