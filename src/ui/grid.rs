use egui_macroquad::egui;
use perceptron::model::action::Action;
use perceptron::model::perceptron::Perceptron;
use perceptron::model::signal::Signal;

use super::ui::UIState;

const LED_SIZE: f32 = 52.0;
const WEIGHT_SIZE: f32 = 68.0;

fn led_color(signal: Signal) -> egui::Color32 {
    match signal {
        Signal::On => egui::Color32::from_rgb(250, 204, 21), // Lit yellow
        Signal::Off => egui::Color32::from_rgb(55, 55, 65),
    }
}

fn weight_color(weight: f64) -> egui::Color32 {
    if weight > 0.0 {
        egui::Color32::from_rgb(22, 163, 74) // Green
    } else if weight < 0.0 {
        egui::Color32::from_rgb(220, 38, 38) // Red
    } else {
        egui::Color32::from_rgb(75, 85, 99) // Gray
    }
}

pub(super) fn draw_grids(ui: &mut egui::Ui, state: &mut UIState, perceptron: &Perceptron) {
    ui.heading("Inputs");
    ui.label("Click a cell to toggle it between -1 and 1");
    ui.add_space(4.0);
    draw_input_grid(ui, state, perceptron);

    ui.add_space(16.0);

    ui.heading("Weights");
    ui.label("Click to increase by the learning rate, right-click to decrease");
    ui.add_space(4.0);
    draw_weight_grid(ui, state, perceptron);

    ui.add_space(16.0);

    ui.collapsing("Edit Weights", |ui| {
        draw_weight_editor(ui, state, perceptron);
    });
}

fn draw_input_grid(ui: &mut egui::Ui, state: &mut UIState, perceptron: &Perceptron) {
    let dims = perceptron.dimensions();
    for row in 0..dims.rows() {
        ui.horizontal(|ui| {
            for col in 0..dims.cols() {
                let signal = perceptron.input_at(row, col);
                let (rect, response) =
                    ui.allocate_exact_size(egui::vec2(LED_SIZE, LED_SIZE), egui::Sense::click());

                let painter = ui.painter();
                painter.rect_filled(rect.shrink(3.0), 8.0, led_color(signal));
                painter.text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    i8::from(signal).to_string(),
                    egui::FontId::monospace(14.0),
                    if signal.is_on() {
                        egui::Color32::BLACK
                    } else {
                        egui::Color32::WHITE
                    },
                );

                if response.clicked() {
                    state.push_action(Action::Toggle { row, col });
                }
            }
        });
    }
}

fn draw_weight_grid(ui: &mut egui::Ui, state: &mut UIState, perceptron: &Perceptron) {
    let dims = perceptron.dimensions();
    let radius = WEIGHT_SIZE / 2.0 - 4.0;

    for row in 0..dims.rows() {
        ui.horizontal(|ui| {
            for col in 0..dims.cols() {
                let weight = perceptron.weight_at(row, col);
                let (rect, response) = ui
                    .allocate_exact_size(egui::vec2(WEIGHT_SIZE, WEIGHT_SIZE), egui::Sense::click());

                let painter = ui.painter();
                painter.circle_filled(rect.center(), radius, weight_color(weight));
                painter.circle_stroke(
                    rect.center(),
                    radius,
                    egui::Stroke::new(1.0, egui::Color32::from_rgb(200, 200, 200)),
                );
                painter.text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    format!("{weight:.2}"),
                    egui::FontId::monospace(13.0),
                    egui::Color32::WHITE,
                );

                let response = response.on_hover_text(format!(
                    "w[{row}][{col}] = {weight:.2}\ninput = {}",
                    i8::from(perceptron.input_at(row, col))
                ));
                if response.clicked() {
                    state.push_action(Action::IncreaseWeight { row, col });
                } else if response.secondary_clicked() {
                    state.push_action(Action::DecreaseWeight { row, col });
                }
            }
        });
    }
}

fn draw_weight_editor(ui: &mut egui::Ui, state: &mut UIState, perceptron: &Perceptron) {
    egui::Grid::new("weight_editor").show(ui, |ui| {
        for ((row, col), &weight) in perceptron.weights().indexed_iter() {
            let mut value = weight;
            if ui
                .add(egui::DragValue::new(&mut value).speed(0.01).fixed_decimals(2))
                .changed()
            {
                state.push_action(Action::SetWeight { row, col, value });
            }
            if col + 1 == perceptron.dimensions().cols() {
                ui.end_row();
            }
        }
    });
}
