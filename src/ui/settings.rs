use egui_macroquad::egui;
use perceptron::model::dimensions::{MAX_EXTENT, MIN_EXTENT};
use perceptron::model::params::Params;

use super::ui::UIState;

/// Collapsible window for editing [`Params`].
///
/// Changes take effect when "Apply" restarts the session.
pub(super) fn draw_settings_window(egui_ctx: &egui::Context, state: &mut UIState, params: &mut Params) {
    egui::Window::new("Settings")
        .default_open(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_BOTTOM, egui::vec2(0.0, -10.0))
        .show(egui_ctx, |ui| {
            ui.collapsing("Initial State", |ui| {
                ui.add(
                    egui::Slider::new(&mut params.initial_rows, MIN_EXTENT..=MAX_EXTENT)
                        .text("Rows"),
                );
                ui.add(
                    egui::Slider::new(&mut params.initial_cols, MIN_EXTENT..=MAX_EXTENT)
                        .text("Cols"),
                );
                let (min, max) = (params.learning_rate_min, params.learning_rate_max);
                ui.add(
                    egui::Slider::new(&mut params.initial_learning_rate, min..=max)
                        .text("Learning Rate"),
                );
            });

            ui.collapsing("Learning Rate Widget", |ui| {
                ui.add(
                    egui::Slider::new(&mut params.learning_rate_min, 0.0..=1.0).text("Minimum"),
                );
                ui.add(
                    egui::Slider::new(&mut params.learning_rate_max, 0.0..=10.0).text("Maximum"),
                );
                ui.add(
                    egui::Slider::new(&mut params.learning_rate_step, 0.01..=1.0).text("Step"),
                );
            });

            ui.collapsing("History", |ui| {
                ui.add(
                    egui::Slider::new(&mut params.action_log_capacity, 5..=200)
                        .text("Recent Actions"),
                );
                ui.add(
                    egui::Slider::new(&mut params.output_history_capacity, 50..=2000)
                        .text("Output Points"),
                );
            });

            ui.add_space(10.0);
            ui.separator();

            ui.horizontal(|ui| {
                if ui.button("Apply (restart)").clicked() {
                    state.apply_settings_requested = true;
                }
                if ui.button("💾 Save").clicked() {
                    state.save_settings_requested = true;
                }
                if ui.button("Defaults").clicked() {
                    *params = Params::default();
                }
            });
        });
}
