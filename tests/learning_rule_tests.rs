#![allow(missing_docs)]
#![allow(clippy::float_cmp)]

use perceptron::model::action::Feedback;
use perceptron::model::dimensions::Dimensions;
use perceptron::model::perceptron::Perceptron;

fn single_cell(on: bool, weight: f64, learning_rate: f64) -> Perceptron {
    let mut perceptron = Perceptron::new(Dimensions::new(1, 1), learning_rate);
    if on {
        perceptron.toggle(0, 0);
    }
    perceptron.set_weight(0, 0, weight);
    perceptron
}

#[test]
fn test_accept_twice_on_active_input() {
    let mut perceptron = single_cell(true, 0.0, 0.1);

    perceptron.accept();
    assert_eq!(perceptron.weight_at(0, 0), 0.1);
    assert_eq!(format!("{:.2}", perceptron.weight_at(0, 0)), "0.10");

    perceptron.accept();
    assert_eq!(perceptron.weight_at(0, 0), 0.2);
    assert_eq!(perceptron.output(), 0.2);
}

#[test]
fn test_reject_on_inactive_input_increases_weight() {
    // adjustment = 0.1 × (-1); reject subtracts it
    let mut perceptron = single_cell(false, 0.5, 0.1);

    perceptron.reject();

    assert_eq!(perceptron.weight_at(0, 0), 0.6);
    assert_eq!(perceptron.output(), -0.6);
}

#[test]
fn test_accept_moves_output_up_reject_moves_it_down() {
    let mut perceptron = Perceptron::new(Dimensions::new(2, 3), 0.2);
    perceptron.toggle(0, 1);
    perceptron.toggle(1, 2);

    let before = perceptron.output();
    perceptron.accept();
    // Every cell contributes lr × x × x = lr.
    assert!((perceptron.output() - (before + 6.0 * 0.2)).abs() < 1e-9);

    perceptron.reject();
    perceptron.reject();
    assert!((perceptron.output() - (before - 6.0 * 0.2)).abs() < 1e-9);
}

#[test]
fn test_batch_uses_pre_batch_snapshot() {
    let mut perceptron = Perceptron::new(Dimensions::new(2, 2), 0.3);
    perceptron.toggle(0, 0);
    perceptron.toggle(1, 1);
    perceptron.set_weight(0, 1, 0.4);
    perceptron.set_weight(1, 0, -0.2);

    let old_input = perceptron.input().clone();
    let old_weights = perceptron.weights().clone();

    perceptron.apply_feedback(Feedback::Accept);

    for ((row, col), &old) in old_weights.indexed_iter() {
        let expected = ((old + 0.3 * old_input[[row, col]].value()) * 100.0).round() / 100.0;
        assert_eq!(perceptron.weight_at(row, col), expected);
    }
    assert_eq!(perceptron.input(), &old_input);
}

#[test]
fn test_accept_then_reject_restores_weights() {
    let mut perceptron = Perceptron::new(Dimensions::new(3, 2), 0.35);
    perceptron.toggle(0, 0);
    perceptron.toggle(2, 1);
    perceptron.set_weight(1, 1, 0.42);
    perceptron.set_weight(2, 0, -1.1);

    let before = perceptron.clone();
    perceptron.accept();
    assert_ne!(perceptron.weights(), before.weights());
    perceptron.reject();

    for (&restored, &original) in perceptron.weights().iter().zip(before.weights().iter()) {
        assert!((restored - original).abs() < 1e-9);
    }
    assert!((perceptron.output() - before.output()).abs() < 1e-9);
}

#[test]
fn test_zero_learning_rate_is_a_no_op() {
    let mut perceptron = single_cell(true, 0.7, 0.0);
    perceptron.accept();
    perceptron.reject();

    assert_eq!(perceptron.weight_at(0, 0), 0.7);
}
