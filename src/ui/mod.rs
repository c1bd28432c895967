// UI module - handles all user interface rendering

mod controls;
mod grid;
mod settings;
mod stats;
mod ui;

// Re-export the public interface
pub use ui::{UIState, draw_ui, process_egui};
