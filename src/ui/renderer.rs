//! Top-level rendering coordinator.
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → components → stdout
//! ```

use crate::app::AppState;
use crate::ui::components;

/// Renders the plugin pane to stdout.
///
/// Does not clear the screen; Zellij hands the plugin a fresh pane on every
/// render call.
pub fn render(state: &AppState, rows: usize, cols: usize) {
    let viewmodel = state.compute_viewmodel(rows, cols);

    match &viewmodel.overlay {
        Some(overlay) => {
            components::render_open(&viewmodel, overlay, &state.options, &state.theme, cols, rows);
        }
        None => components::render_closed(&viewmodel, &state.options, &state.theme, cols, rows),
    }
}
