use egui_macroquad::egui;
use perceptron::model::action::Action;
use perceptron::model::dimensions::Dimensions;
use perceptron::model::params::Params;
use perceptron::model::session::Session;
use std::collections::VecDeque;

pub struct UIState {
    pub rows_text: String,
    pub cols_text: String,
    pub output_history: VecDeque<(f64, f64)>,
    history_capacity: usize,
    pub snapshot_text: String,
    pub import_requested: bool,
    pub apply_settings_requested: bool,
    pub save_settings_requested: bool,
    pub status_message: Option<String>,
    pending_actions: Vec<Action>,
}

impl UIState {
    pub fn new(session: &Session, params: &Params) -> Self {
        let dims = session.perceptron.dimensions();
        let mut state = Self {
            rows_text: dims.rows().to_string(),
            cols_text: dims.cols().to_string(),
            output_history: VecDeque::new(),
            history_capacity: params.output_history_capacity,
            snapshot_text: String::new(),
            import_requested: false,
            apply_settings_requested: false,
            save_settings_requested: false,
            status_message: None,
            pending_actions: Vec::new(),
        };
        state.reset_history(session.step(), session.perceptron.output());
        state
    }

    /// Queues an action to be dispatched after the frame's UI pass.
    pub fn push_action(&mut self, action: Action) {
        self.pending_actions.push(action);
    }

    pub fn take_actions(&mut self) -> Vec<Action> {
        std::mem::take(&mut self.pending_actions)
    }

    pub fn sync_dimensions(&mut self, dims: Dimensions) {
        self.rows_text = dims.rows().to_string();
        self.cols_text = dims.cols().to_string();
    }

    pub fn record_output(&mut self, step: u64, output: f64) {
        self.output_history.push_back((step as f64, output));
        while self.output_history.len() > self.history_capacity {
            self.output_history.pop_front();
        }
    }

    /// Starts a new output series at `step`.
    pub fn reset_history(&mut self, step: u64, output: f64) {
        self.output_history.clear();
        self.record_output(step, output);
    }

    pub fn set_history_capacity(&mut self, capacity: usize) {
        self.history_capacity = capacity.max(1);
        while self.output_history.len() > self.history_capacity {
            self.output_history.pop_front();
        }
    }
}

/// Draws every panel and returns the actions the user triggered this frame.
pub fn draw_ui(state: &mut UIState, session: &Session, params: &mut Params) -> Vec<Action> {
    egui_macroquad::ui(|egui_ctx| {
        // Configure brighter text and UI
        let mut visuals = egui::Visuals::dark();
        visuals.override_text_color = Some(egui::Color32::from_rgb(240, 240, 240));
        visuals.widgets.noninteractive.fg_stroke.color = egui::Color32::from_rgb(220, 220, 220);
        visuals.widgets.inactive.fg_stroke.color = egui::Color32::from_rgb(200, 200, 200);
        visuals.widgets.hovered.fg_stroke.color = egui::Color32::WHITE;
        visuals.widgets.active.fg_stroke.color = egui::Color32::WHITE;
        egui_ctx.set_visuals(visuals);

        super::controls::draw_controls_panel(egui_ctx, state, &session.perceptron, params);
        super::stats::draw_stats_panel(egui_ctx, state, session);
        super::settings::draw_settings_window(egui_ctx, state, params);

        egui::CentralPanel::default().show(egui_ctx, |ui| {
            super::grid::draw_grids(ui, state, &session.perceptron);
        });
    });

    state.take_actions()
}

pub fn process_egui() {
    egui_macroquad::draw();
}
