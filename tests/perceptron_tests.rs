#![allow(missing_docs)]
#![allow(clippy::float_cmp)]

use ndarray::{Array2, array};
use perceptron::model::action::Action;
use perceptron::model::dimensions::Dimensions;
use perceptron::model::params::Params;
use perceptron::model::perceptron::{Perceptron, round2, weighted_sum};
use perceptron::model::signal::Signal;

const ON: Signal = Signal::On;
const OFF: Signal = Signal::Off;

/// Builds a perceptron with the given inputs and weights via public actions.
fn perceptron_with(input: &Array2<Signal>, weights: &Array2<f64>, learning_rate: f64) -> Perceptron {
    let (rows, cols) = input.dim();
    let mut perceptron = Perceptron::new(Dimensions::new(rows, cols), learning_rate);
    for ((row, col), &signal) in input.indexed_iter() {
        if signal.is_on() {
            perceptron.toggle(row, col);
        }
    }
    for ((row, col), &weight) in weights.indexed_iter() {
        perceptron.set_weight(row, col, weight);
    }
    perceptron
}

#[test]
fn test_initial_state() {
    let perceptron = Perceptron::default();

    assert_eq!(perceptron.dimensions().shape(), (3, 3));
    assert!(perceptron.input().iter().all(|&s| s == OFF));
    assert!(perceptron.weights().iter().all(|&w| w == 0.0));
    assert_eq!(perceptron.learning_rate(), 0.1);
    assert_eq!(perceptron.output(), 0.0);
}

#[test]
fn test_from_params() {
    let params = Params {
        initial_rows: 2,
        initial_cols: 4,
        initial_learning_rate: 0.25,
        ..Params::default()
    };
    let perceptron = Perceptron::from_params(&params);

    assert_eq!(perceptron.dimensions().shape(), (2, 4));
    assert_eq!(perceptron.learning_rate(), 0.25);
}

#[test]
fn test_checkerboard_output_is_zero() {
    let perceptron = perceptron_with(&array![[ON, OFF], [OFF, ON]], &array![[1.0, 1.0], [1.0, 1.0]], 0.1);

    assert_eq!(perceptron.output(), 0.0);
}

#[test]
fn test_output_tracks_toggles() {
    let mut perceptron = perceptron_with(&array![[OFF, OFF]], &array![[0.5, -0.25]], 0.1);
    // -0.5 + 0.25
    assert_eq!(perceptron.output(), -0.25);

    perceptron.toggle(0, 0);
    assert_eq!(perceptron.input_at(0, 0), ON);
    assert_eq!(perceptron.output(), 0.75);

    perceptron.toggle(0, 1);
    assert_eq!(perceptron.output(), 0.25);
}

#[test]
fn test_toggle_twice_restores_cell() {
    let mut perceptron = Perceptron::default();
    perceptron.toggle(1, 2);
    perceptron.toggle(1, 2);

    assert_eq!(perceptron.input_at(1, 2), OFF);
    assert_eq!(perceptron, Perceptron::default());
}

#[test]
fn test_toggle_does_not_touch_weights() {
    let mut perceptron = perceptron_with(&array![[OFF]], &array![[0.3]], 0.1);
    perceptron.toggle(0, 0);

    assert_eq!(perceptron.weight_at(0, 0), 0.3);
}

#[test]
fn test_increase_and_decrease_weight() {
    let mut perceptron = Perceptron::default();
    perceptron.toggle(0, 0);

    perceptron.increase_weight(0, 0);
    perceptron.increase_weight(0, 0);
    perceptron.increase_weight(0, 0);
    assert_eq!(perceptron.weight_at(0, 0), 0.3);
    assert_eq!(perceptron.output(), 0.3);

    perceptron.decrease_weight(0, 0);
    assert_eq!(perceptron.weight_at(0, 0), 0.2);
}

#[test]
fn test_adjust_and_set_round_to_two_decimals() {
    let mut perceptron = Perceptron::default();

    perceptron.adjust_weight(0, 0, 0.123);
    assert_eq!(perceptron.weight_at(0, 0), 0.12);

    perceptron.set_weight(0, 1, -1.006);
    assert_eq!(perceptron.weight_at(0, 1), -1.01);

    perceptron.set_weight(0, 2, 2.0 / 3.0);
    assert_eq!(perceptron.weight_at(0, 2), 0.67);
}

#[test]
fn test_round2_normalizes_negative_zero() {
    let rounded = round2(-0.001);
    assert_eq!(rounded, 0.0);
    assert!(rounded.is_sign_positive());
    assert_eq!(format!("{rounded:.2}"), "0.00");
}

#[test]
fn test_set_rows_resets_matrices() {
    let mut perceptron = Perceptron::default();
    perceptron.toggle(0, 0);
    perceptron.set_weight(0, 0, 1.5);

    assert!(perceptron.set_rows(4));

    assert_eq!(perceptron.dimensions().shape(), (4, 3));
    assert_eq!(perceptron.input().dim(), (4, 3));
    assert_eq!(perceptron.weights().dim(), (4, 3));
    assert!(perceptron.input().iter().all(|&s| s == OFF));
    assert!(perceptron.weights().iter().all(|&w| w == 0.0));
    assert_eq!(perceptron.output(), 0.0);
}

#[test]
fn test_same_dimension_keeps_state() {
    let mut perceptron = Perceptron::default();
    perceptron.toggle(0, 0);
    perceptron.set_weight(0, 0, 1.5);

    assert!(!perceptron.set_cols(3));
    assert_eq!(perceptron.input_at(0, 0), ON);
    assert_eq!(perceptron.weight_at(0, 0), 1.5);
}

#[test]
fn test_dimension_requests_are_clamped() {
    let mut perceptron = Perceptron::default();
    perceptron.set_rows(0);
    perceptron.set_cols(12);

    assert_eq!(perceptron.dimensions().shape(), (1, 5));
}

#[test]
fn test_learning_rate_is_not_clamped_by_state() {
    let mut perceptron = Perceptron::default();
    perceptron.set_learning_rate(2.5);
    assert_eq!(perceptron.learning_rate(), 2.5);

    perceptron.increase_weight(0, 0);
    assert_eq!(perceptron.weight_at(0, 0), 2.5);
}

#[test]
fn test_reset_keeps_dimensions_and_learning_rate() {
    let mut perceptron = Perceptron::new(Dimensions::new(2, 2), 0.4);
    perceptron.toggle(1, 1);
    perceptron.increase_weight(1, 1);
    perceptron.reset();

    assert_eq!(perceptron, Perceptron::new(Dimensions::new(2, 2), 0.4));
}

#[test]
fn test_apply_dispatches_actions() {
    let mut perceptron = Perceptron::default();

    assert!(!perceptron.apply(Action::Toggle { row: 0, col: 0 }));
    assert!(!perceptron.apply(Action::SetLearningRate(0.5)));
    assert!(!perceptron.apply(Action::IncreaseWeight { row: 0, col: 0 }));
    assert_eq!(perceptron.weight_at(0, 0), 0.5);
    assert!(!perceptron.apply(Action::DecreaseWeight { row: 0, col: 0 }));
    assert_eq!(perceptron.weight_at(0, 0), 0.0);
    assert!(!perceptron.apply(Action::SetWeight { row: 2, col: 2, value: -0.75 }));
    assert_eq!(perceptron.output(), 0.75);

    assert!(!perceptron.apply(Action::Accept));
    assert!(!perceptron.apply(Action::Reject));

    assert!(perceptron.apply(Action::SetRows(2)));
    assert!(!perceptron.apply(Action::SetRows(2)));
    assert!(perceptron.apply(Action::SetCols(5)));
    assert!(perceptron.apply(Action::Reset));
    assert_eq!(perceptron.dimensions().shape(), (2, 5));
    assert_eq!(perceptron.learning_rate(), 0.5);
}

#[test]
fn test_weighted_sum_matches_manual_loop() {
    let input = array![[ON, OFF, ON], [OFF, OFF, ON]];
    let weights = array![[0.5, 0.25, -1.0], [2.0, -0.5, 0.75]];

    let mut expected = 0.0;
    for i in 0..2 {
        for j in 0..3 {
            expected += input[[i, j]].value() * weights[[i, j]];
        }
    }

    assert!((weighted_sum(&input, &weights) - expected).abs() < 1e-12);
}

#[test]
#[should_panic(expected = "outside the 3x3 grid")]
fn test_toggle_out_of_bounds_panics() {
    let mut perceptron = Perceptron::default();
    perceptron.toggle(3, 0);
}

#[test]
#[should_panic(expected = "outside the 1x1 grid")]
fn test_set_weight_out_of_bounds_panics() {
    let mut perceptron = Perceptron::new(Dimensions::new(1, 1), 0.1);
    perceptron.set_weight(0, 1, 1.0);
}

#[test]
fn test_round2_rounds_half_away_from_zero() {
    // 0.015 * 100 evaluates to exactly 1.5, so the tie rounds away from zero.
    assert_eq!(round2(0.015), 0.02);
    assert_eq!(round2(-0.015), -0.02);
    assert_eq!(round2(0.125), 0.13);
}
