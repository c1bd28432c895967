use egui_macroquad::egui;
use egui_plot::{Line, Plot, PlotPoints};
use perceptron::model::action::ActionKind;
use perceptron::model::session::Session;
use std::collections::VecDeque;
use tracing::{info, warn};

use super::ui::UIState;

fn action_color(kind: ActionKind) -> egui::Color32 {
    match kind {
        ActionKind::Input => egui::Color32::from_rgb(255, 200, 100), // Yellow
        ActionKind::Weight => egui::Color32::from_rgb(100, 200, 255), // Blue
        ActionKind::Accept => egui::Color32::from_rgb(100, 255, 100), // Green
        ActionKind::Reject => egui::Color32::from_rgb(255, 100, 100), // Red
        ActionKind::Setup => egui::Color32::from_rgb(150, 150, 150), // Gray
    }
}

pub(super) fn draw_stats_panel(egui_ctx: &egui::Context, state: &mut UIState, session: &Session) {
    egui::SidePanel::right("stats_panel")
        .default_width(320.0)
        .resizable(true)
        .show(egui_ctx, |ui| {
            ui.heading("Stats");
            ui.separator();

            let perceptron = &session.perceptron;
            let dims = perceptron.dimensions();
            let lit = perceptron.input().iter().filter(|s| s.is_on()).count();
            ui.label(format!("Grid: {}x{}", dims.rows(), dims.cols()));
            ui.label(format!("Active inputs: {}/{}", lit, dims.cell_count()));
            ui.label(format!("Actions: {}", session.step()));

            ui.add_space(8.0);
            ui.collapsing("Output History", |ui| {
                draw_output_plot(ui, &state.output_history);
            });

            ui.add_space(8.0);
            ui.collapsing("Recent Actions", |ui| {
                draw_recent_actions(ui, session);
            });

            ui.add_space(8.0);
            ui.collapsing("Snapshot", |ui| {
                ui.horizontal(|ui| {
                    if ui.button("📋 Copy JSON").clicked() {
                        export_snapshot(ui, state, session);
                    }
                    if ui.button("📂 Load JSON").clicked() {
                        state.import_requested = true;
                    }
                });
                ui.add(
                    egui::TextEdit::multiline(&mut state.snapshot_text)
                        .code_editor()
                        .desired_rows(6)
                        .hint_text("Paste a snapshot here"),
                );
            });
        });
}

fn draw_output_plot(ui: &mut egui::Ui, data: &VecDeque<(f64, f64)>) {
    if data.is_empty() {
        ui.label("Collecting data...");
        return;
    }

    let points: PlotPoints = data.iter().map(|&(x, y)| [x, y]).collect();
    let line = Line::new(points)
        .color(egui::Color32::from_rgb(100, 150, 255))
        .name("Output");

    Plot::new("output_plot")
        .height(150.0)
        .show_axes([true, true])
        .label_formatter(|_name, value| format!("Step: {:.0}\nOutput: {:.2}", value.x, value.y))
        .show(ui, |plot_ui| {
            plot_ui.line(line);
        });
}

fn draw_recent_actions(ui: &mut egui::Ui, session: &Session) {
    ui.spacing_mut().item_spacing.y = 4.0;

    let entries = session.action_log.entries();
    if entries.is_empty() {
        ui.label(
            egui::RichText::new("No actions yet...")
                .color(egui::Color32::from_rgb(150, 150, 150))
                .size(12.0),
        );
        return;
    }

    for entry in entries {
        ui.horizontal(|ui| {
            ui.label(
                egui::RichText::new(format!("[#{}]", entry.step))
                    .color(egui::Color32::from_rgb(180, 180, 200))
                    .size(11.0)
                    .monospace(),
            );
            ui.label(
                egui::RichText::new(&entry.description)
                    .color(action_color(entry.kind))
                    .size(11.0),
            );
            ui.label(
                egui::RichText::new(format!("→ {:.2}", entry.output))
                    .size(11.0)
                    .monospace(),
            );
        });
    }
}

fn export_snapshot(ui: &egui::Ui, state: &mut UIState, session: &Session) {
    match session.perceptron.snapshot().to_json() {
        Ok(json) => {
            ui.ctx().copy_text(json.clone());
            state.snapshot_text = json;
            state.status_message = Some("Snapshot copied to clipboard".to_string());
            info!(step = session.step(), "snapshot exported");
        }
        Err(err) => {
            state.status_message = Some(format!("Export failed: {err}"));
            warn!(%err, "snapshot export failed");
        }
    }
}
