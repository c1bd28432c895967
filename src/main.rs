use macroquad::prelude::*;
use perceptron::logging;
use perceptron::model::params::Params;
use perceptron::model::session::Session;
use perceptron::model::snapshot::Snapshot;
use std::path::Path;
use tracing::{info, warn};

mod ui;

/// Optional parameter file read from the working directory at startup.
const PARAMS_FILE: &str = "perceptron.json";

fn load_params() -> Params {
    if !Path::new(PARAMS_FILE).exists() {
        return Params::default();
    }

    match Params::load_from_file(PARAMS_FILE) {
        Ok(params) => {
            info!(path = PARAMS_FILE, "loaded parameters");
            params
        }
        Err(err) => {
            warn!(path = PARAMS_FILE, %err, "failed to load parameters, using defaults");
            Params::default()
        }
    }
}

fn handle_import_request(ui_state: &mut ui::UIState, session: &mut Session) {
    if ui_state.import_requested {
        ui_state.import_requested = false;
        let result =
            Snapshot::from_json(&ui_state.snapshot_text).and_then(|s| session.load_snapshot(s));
        match result {
            Ok(()) => {
                let perceptron = &session.perceptron;
                ui_state.sync_dimensions(perceptron.dimensions());
                ui_state.reset_history(session.step(), perceptron.output());
                ui_state.status_message = Some("Snapshot loaded".to_string());
                info!(output = perceptron.output(), "snapshot imported");
            }
            Err(err) => {
                ui_state.status_message = Some(format!("Load failed: {err}"));
                warn!(%err, "snapshot import failed");
            }
        }
    }
}

fn handle_settings_requests(ui_state: &mut ui::UIState, session: &mut Session, params: &mut Params) {
    if ui_state.apply_settings_requested {
        ui_state.apply_settings_requested = false;
        params.sanitize();
        *session = Session::new(params);
        ui_state.set_history_capacity(params.output_history_capacity);
        ui_state.sync_dimensions(session.perceptron.dimensions());
        ui_state.reset_history(session.step(), session.perceptron.output());
        ui_state.status_message = Some("Settings applied".to_string());
        info!(?params, "session restarted with new settings");
    }

    if ui_state.save_settings_requested {
        ui_state.save_settings_requested = false;
        params.sanitize();
        match params.save_to_file(PARAMS_FILE) {
            Ok(()) => {
                ui_state.status_message = Some(format!("Settings saved to {PARAMS_FILE}"));
                info!(path = PARAMS_FILE, "parameters saved");
            }
            Err(err) => {
                ui_state.status_message = Some(format!("Save failed: {err}"));
                warn!(path = PARAMS_FILE, %err, "failed to save parameters");
            }
        }
    }
}

#[macroquad::main("Perceptron Playground")]
async fn main() {
    if let Err(err) = logging::install_logger() {
        eprintln!("failed to install logger: {err}");
    }

    let mut params = load_params();
    let mut session = Session::new(&params);
    let mut ui_state = ui::UIState::new(&session, &params);

    info!(
        rows = params.initial_rows,
        cols = params.initial_cols,
        learning_rate = params.initial_learning_rate,
        "starting perceptron playground"
    );

    loop {
        clear_background(Color::from_rgba(24, 24, 32, 255));

        let actions = ui::draw_ui(&mut ui_state, &session, &mut params);

        let outcome = session.dispatch_frame(actions);
        let perceptron = &session.perceptron;
        if outcome.reinitialized {
            ui_state.sync_dimensions(perceptron.dimensions());
            ui_state.reset_history(session.step(), perceptron.output());
        } else if outcome.applied > 0 {
            ui_state.record_output(session.step(), perceptron.output());
        }

        handle_import_request(&mut ui_state, &mut session);
        handle_settings_requests(&mut ui_state, &mut session, &mut params);

        ui::process_egui();

        next_frame().await
    }
}
