#![allow(missing_docs)]
#![allow(clippy::float_cmp)]

use perceptron::model::action::{Action, ActionKind};
use perceptron::model::action_log::ActionLog;
use perceptron::model::params::Params;
use perceptron::model::session::{FrameOutcome, Session};

#[test]
fn test_dispatch_records_actions_newest_first() {
    let mut session = Session::new(&Params::default());

    session.dispatch(Action::Toggle { row: 0, col: 0 });
    session.dispatch(Action::IncreaseWeight { row: 0, col: 0 });
    session.dispatch(Action::Accept);

    assert_eq!(session.step(), 3);

    let entries = session.action_log.entries();
    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0].step, 3);
    assert_eq!(entries[0].kind, ActionKind::Accept);
    assert_eq!(entries[0].output, session.perceptron.output());
    assert_eq!(entries[1].description, "increase weight (0, 0)");
    assert_eq!(entries[2].kind, ActionKind::Input);
}

#[test]
fn test_dispatch_reports_reinitialization() {
    let mut session = Session::new(&Params::default());

    assert!(!session.dispatch(Action::Toggle { row: 1, col: 1 }));
    assert!(session.dispatch(Action::SetCols(4)));
    assert!(!session.dispatch(Action::SetCols(4)));
    assert!(session.dispatch(Action::Reset));
}

#[test]
fn test_action_log_capacity() {
    let params = Params {
        action_log_capacity: 3,
        ..Params::default()
    };
    let mut session = Session::new(&params);

    for _ in 0..10 {
        session.dispatch(Action::Accept);
    }

    assert_eq!(session.action_log.len(), 3);
    assert_eq!(session.action_log.capacity(), 3);
    assert_eq!(session.action_log.entries()[0].step, 10);
    assert_eq!(session.action_log.entries()[2].step, 8);
}

#[test]
fn test_load_snapshot_replaces_state() {
    let mut source = Session::new(&Params::default());
    source.dispatch(Action::SetRows(2));
    source.dispatch(Action::Toggle { row: 1, col: 0 });
    source.dispatch(Action::Accept);
    let snapshot = source.perceptron.snapshot();

    let mut session = Session::new(&Params::default());
    session.dispatch(Action::Reject);
    session
        .load_snapshot(snapshot)
        .expect("Failed to load snapshot");

    assert_eq!(session.perceptron, source.perceptron);
    assert!(session.action_log.is_empty());
}

#[test]
fn test_failed_load_keeps_state() {
    let mut session = Session::new(&Params::default());
    session.dispatch(Action::Toggle { row: 0, col: 0 });
    let before = session.perceptron.clone();

    let mut snapshot = before.snapshot();
    snapshot.rows = 0;

    assert!(session.load_snapshot(snapshot).is_err());
    assert_eq!(session.perceptron, before);
    assert_eq!(session.action_log.len(), 1);
}

#[test]
fn test_action_log_clear() {
    let mut log = ActionLog::new(5);
    log.record(1, &Action::Reset, 0.0);
    assert!(!log.is_empty());

    log.clear();
    assert!(log.is_empty());
    assert_eq!(ActionLog::default().capacity(), 20);
}

#[test]
fn test_action_descriptions() {
    assert_eq!(Action::SetRows(4).describe(), "set rows to 4");
    assert_eq!(
        Action::SetWeight { row: 1, col: 2, value: 0.5 }.describe(),
        "set weight (1, 2) to 0.50"
    );
    assert_eq!(Action::SetLearningRate(0.3).kind(), ActionKind::Setup);
    assert_eq!(Action::DecreaseWeight { row: 0, col: 0 }.kind(), ActionKind::Weight);
    assert_eq!(Action::Reject.kind(), ActionKind::Reject);
}

#[test]
fn test_frame_drops_actions_after_resize() {
    let params = Params {
        initial_rows: 5,
        ..Params::default()
    };
    let mut session = Session::new(&params);

    // A commit of the rows field and a click on the old bottom row in one frame.
    let outcome = session.dispatch_frame([Action::SetRows(2), Action::Toggle { row: 4, col: 0 }]);

    assert_eq!(
        outcome,
        FrameOutcome {
            applied: 1,
            dropped: 1,
            reinitialized: true,
        }
    );
    assert_eq!(session.perceptron.dimensions().shape(), (2, 3));
    assert!(session.perceptron.input().iter().all(|s| !s.is_on()));
    assert_eq!(session.step(), 1);
    assert_eq!(session.action_log.len(), 1);
}

#[test]
fn test_frame_without_resize_applies_everything() {
    let mut session = Session::new(&Params::default());

    let outcome = session.dispatch_frame([
        Action::Toggle { row: 2, col: 2 },
        Action::IncreaseWeight { row: 2, col: 2 },
        Action::SetRows(3),
    ]);

    assert_eq!(outcome.applied, 3);
    assert_eq!(outcome.dropped, 0);
    assert!(!outcome.reinitialized);
    assert_eq!(session.perceptron.weight_at(2, 2), 0.1);
    assert_eq!(session.step(), 3);
}

#[test]
fn test_empty_frame_is_a_no_op() {
    let mut session = Session::new(&Params::default());
    let outcome = session.dispatch_frame(Vec::new());

    assert_eq!(outcome, FrameOutcome::default());
    assert_eq!(session.step(), 0);
}
