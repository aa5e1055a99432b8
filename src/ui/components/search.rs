//! Search box component.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SearchBarInfo;

/// Horizontal margin for the search box (spaces on left and right).
const SEARCH_BOX_MARGIN: usize = 2;

/// Renders the 3-line search box at `row` and returns the row after it.
///
/// ```text
/// [margin] ┌─────────────────┐ [margin]
/// [margin] │ Search: Unit█   │ [margin]
/// [margin] └─────────────────┘ [margin]
/// ```
///
/// The block cursor marks where typed characters go; the box is always
/// focused while the overlay is open.
pub fn render_search_bar(row: usize, search: &SearchBarInfo, theme: &Theme, cols: usize) -> usize {
    let box_width = cols.saturating_sub(SEARCH_BOX_MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);
    let margin = " ".repeat(SEARCH_BOX_MARGIN);
    let border = Theme::fg(&theme.colors.search_bar_border);

    position_cursor(row, 1);
    print!("{margin}{border}┌{}┐{}", "─".repeat(inner_width), Theme::reset());

    let search_text = format!(" Search: {}█", search.query);
    let padding = inner_width.saturating_sub(search_text.chars().count());

    position_cursor(row + 1, 1);
    print!("{margin}{border}│");
    print!("{}{search_text}{}", Theme::fg(&theme.colors.text_normal), " ".repeat(padding));
    print!("{border}│{}", Theme::reset());

    position_cursor(row + 2, 1);
    print!("{margin}{border}└{}┘{}", "─".repeat(inner_width), Theme::reset());

    row + 3
}
