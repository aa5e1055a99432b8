//! Country list component.
//!
//! One row per country: chosen marker, flag, name, dial code. The cursor row
//! gets the selection colours across the full width; other rows show search
//! matches highlighted in the name and code.

use crate::ui::helpers::{highlighted_text, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DisplayItem;

/// Renders every row starting at `row` and returns the next free row.
pub fn render_table_rows(row: usize, items: &[DisplayItem], theme: &Theme, cols: usize) -> usize {
    items
        .iter()
        .fold(row, |current, item| render_table_row(current, item, theme, cols))
}

/// Renders one row.
///
/// ```text
/// ● 🇬🇧 United Kingdom                        +44
/// ```
///
/// Flags are two columns wide in most terminals; width accounting assumes so.
fn render_table_row(row: usize, item: &DisplayItem, theme: &Theme, cols: usize) -> usize {
    const FLAG_WIDTH: usize = 2;

    let base = if item.is_selected {
        format!(
            "{}{}",
            Theme::fg(&theme.colors.selection_fg),
            Theme::bg(&theme.colors.selection_bg)
        )
    } else {
        Theme::fg(&theme.colors.text_normal)
    };

    position_cursor(row, 1);
    print!("{base}");

    if item.is_chosen {
        print!("{}●{base} ", Theme::fg(&theme.colors.chosen_fg));
    } else {
        print!("  ");
    }

    print!("{} ", item.flag);
    print!(
        "{}",
        highlighted_text(&item.name, &item.name_highlights, theme, &base, item.is_selected)
    );

    let name_len = item.name.chars().count();
    print!("{}", " ".repeat(item.name_width.saturating_sub(name_len) + 1));
    print!(
        "{}",
        highlighted_text(&item.code, &item.code_highlights, theme, &base, item.is_selected)
    );

    let line_len = 2 + FLAG_WIDTH + 1 + item.name_width.max(name_len) + 1 + item.code.chars().count();
    print!("{}", " ".repeat(cols.saturating_sub(line_len)));

    print!("{}", Theme::reset());
    row + 1
}
