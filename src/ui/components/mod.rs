//! Composable UI component renderers.
//!
//! - [`trigger`]: selector line with the chosen code or placeholder
//! - `header`: overlay title with result count
//! - `search`: search box
//! - `table`: country rows
//! - `empty`: "no matches" message
//! - `footer`: keybinding hints
//!
//! Two layouts are exposed: [`render_closed`] (trigger only) and
//! [`render_open`] (trigger plus overlay).

mod empty;
mod footer;
mod header;
mod search;
mod table;
pub mod trigger;

use crate::app::PickerOptions;
use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{OverlayView, UIViewModel};

use empty::render_empty_state;
use footer::render_footer;
use header::render_header;
use search::render_search_bar;
use table::render_table_rows;
use trigger::render_trigger;

/// Renders a horizontal rule at `row` and returns the next free row.
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}{}{}", Theme::fg(color), "─".repeat(cols), Theme::reset());
    row + 1
}

/// Renders the bottom border and footer on the last two rows.
fn render_bottom(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let footer_row = rows.max(2);
    render_border(footer_row - 1, &theme.colors.border, cols);
    render_footer(footer_row, &vm.footer, theme, cols);
}

/// Closed layout.
///
/// ```text
/// [Trigger]
/// ...
/// [Border]
/// [Footer]
/// ```
pub fn render_closed(vm: &UIViewModel, options: &PickerOptions, theme: &Theme, cols: usize, rows: usize) {
    render_trigger(1, &vm.trigger, options, theme, cols);
    render_bottom(vm, theme, cols, rows);
}

/// Open layout.
///
/// ```text
/// [Trigger]
/// [Header]
/// [Border]
/// [Search Bar - 3 lines]
/// [Rows or empty state]
/// [Border]
/// [Footer]
/// ```
pub fn render_open(
    vm: &UIViewModel,
    overlay: &OverlayView,
    options: &PickerOptions,
    theme: &Theme,
    cols: usize,
    rows: usize,
) {
    let mut current_row = render_trigger(1, &vm.trigger, options, theme, cols);
    current_row = render_header(current_row, &overlay.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    current_row = render_search_bar(current_row, &overlay.search_bar, theme, cols);

    let _current_row = match &overlay.empty_state {
        Some(empty) => render_empty_state(current_row, empty, theme, cols),
        None => render_table_rows(current_row, &overlay.display_items, theme, cols),
    };

    render_bottom(vm, theme, cols, rows);
}
