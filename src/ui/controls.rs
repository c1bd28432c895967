use egui_macroquad::egui;
use perceptron::model::action::Action;
use perceptron::model::dimensions::{MAX_EXTENT, MIN_EXTENT, parse_extent};
use perceptron::model::params::Params;
use perceptron::model::perceptron::Perceptron;

use super::ui::UIState;

const ACCEPT_COLOR: egui::Color32 = egui::Color32::from_rgb(22, 163, 74);
const REJECT_COLOR: egui::Color32 = egui::Color32::from_rgb(220, 38, 38);
const NEUTRAL_COLOR: egui::Color32 = egui::Color32::from_rgb(156, 163, 175);

/// Color of the output indicator: green above zero, red below, gray at zero.
pub(super) fn output_color(output: f64) -> egui::Color32 {
    if output > 0.0 {
        egui::Color32::from_rgb(34, 197, 94)
    } else if output < 0.0 {
        egui::Color32::from_rgb(239, 68, 68)
    } else {
        NEUTRAL_COLOR
    }
}

pub(super) fn draw_controls_panel(
    egui_ctx: &egui::Context,
    state: &mut UIState,
    perceptron: &Perceptron,
    params: &Params,
) {
    egui::SidePanel::left("controls_panel")
        .default_width(220.0)
        .resizable(false)
        .show(egui_ctx, |ui| {
            ui.heading("Perceptron");
            ui.separator();

            let dims = perceptron.dimensions();

            if let Some(rows) = extent_stepper(ui, "Rows (N)", &mut state.rows_text, dims.rows()) {
                state.push_action(Action::SetRows(rows));
            }
            if let Some(cols) = extent_stepper(ui, "Cols (M)", &mut state.cols_text, dims.cols()) {
                state.push_action(Action::SetCols(cols));
            }

            ui.add_space(8.0);
            ui.separator();

            draw_learning_rate(ui, state, perceptron, params);

            ui.add_space(8.0);
            ui.separator();

            ui.label("Output");
            draw_output_indicator(ui, perceptron.output());

            ui.add_space(8.0);

            ui.horizontal(|ui| {
                if ui
                    .add(egui::Button::new("Accept").fill(ACCEPT_COLOR))
                    .on_hover_text("Move every weight toward the current input")
                    .clicked()
                {
                    state.push_action(Action::Accept);
                }
                if ui
                    .add(egui::Button::new("Reject").fill(REJECT_COLOR))
                    .on_hover_text("Move every weight away from the current input")
                    .clicked()
                {
                    state.push_action(Action::Reject);
                }
            });

            ui.add_space(4.0);
            if ui.button("🔄 Reset").clicked() {
                state.push_action(Action::Reset);
            }

            if let Some(ref msg) = state.status_message {
                ui.add_space(8.0);
                ui.separator();
                ui.label(msg);
            }
        });
}

/// Numeric stepper for a row or column count.
///
/// Returns the requested extent when the user presses a button or commits
/// the text field. Text is normalized with [`parse_extent`].
fn extent_stepper(ui: &mut egui::Ui, label: &str, text: &mut String, current: usize) -> Option<usize> {
    let mut requested = None;

    ui.horizontal(|ui| {
        ui.label(label);

        if ui
            .add_enabled(current > MIN_EXTENT, egui::Button::new("−"))
            .clicked()
        {
            requested = Some(current - 1);
        }

        let response = ui.add(egui::TextEdit::singleline(text).desired_width(28.0));
        if response.lost_focus() {
            let extent = parse_extent(text);
            *text = extent.to_string();
            requested = Some(extent);
        }

        if ui
            .add_enabled(current < MAX_EXTENT, egui::Button::new("+"))
            .clicked()
        {
            requested = Some(current + 1);
        }
    });

    requested
}

fn draw_learning_rate(ui: &mut egui::Ui, state: &mut UIState, perceptron: &Perceptron, params: &Params) {
    let current = perceptron.learning_rate();
    let mut learning_rate = current;
    let mut changed = false;

    ui.label("Learning Rate");
    ui.horizontal(|ui| {
        if ui.button("−").clicked() {
            learning_rate = params.clamp_learning_rate(current - params.learning_rate_step);
            changed = true;
        }
        changed |= ui
            .add(
                egui::DragValue::new(&mut learning_rate)
                    .range(params.learning_rate_min..=params.learning_rate_max)
                    .speed(params.learning_rate_step / 10.0)
                    .fixed_decimals(2),
            )
            .changed();
        if ui.button("+").clicked() {
            learning_rate = params.clamp_learning_rate(current + params.learning_rate_step);
            changed = true;
        }
    });

    if changed {
        // Repeated steps accumulate float error (0.1 + 0.2).
        state.push_action(Action::SetLearningRate((learning_rate * 1000.0).round() / 1000.0));
    }
}

fn draw_output_indicator(ui: &mut egui::Ui, output: f64) {
    let radius = 40.0;
    let (rect, response) =
        ui.allocate_exact_size(egui::vec2(radius * 2.0, radius * 2.0), egui::Sense::hover());

    let painter = ui.painter();
    painter.circle_filled(rect.center(), radius, output_color(output));
    painter.text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        format!("{output:.2}"),
        egui::FontId::monospace(16.0),
        egui::Color32::WHITE,
    );

    response.on_hover_text("Σ input × weight");
}
