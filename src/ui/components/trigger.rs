//! Trigger line component.
//!
//! The selector control: the chosen dial code (or the placeholder) followed by
//! a dropdown arrow. Styling is layered with [`crate::ui::decorate`].

use crate::app::PickerOptions;
use crate::ui::decorate::{self, TextRenderer};
use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::TriggerInfo;

const ARROW_CLOSED: &str = " ▾";
const ARROW_OPEN: &str = " ▴";

/// Builds the renderer stack for the trigger text.
///
/// Innermost first: arrow suffix, line padding, text colour, `text_style`,
/// then the line `style`. The text colour is `placeholder_text_color` for the
/// placeholder; otherwise the theme colour, unless `text_style` sets `fg`.
#[must_use]
pub fn trigger_renderer(
    trigger: &TriggerInfo,
    options: &PickerOptions,
    theme: &Theme,
    cols: usize,
) -> TextRenderer {
    let placeholder_color = options
        .placeholder_text_color
        .as_deref()
        .filter(|_| trigger.is_placeholder);
    let theme_color = if trigger.is_placeholder {
        theme.colors.placeholder_fg.as_str()
    } else {
        theme.colors.trigger_fg.as_str()
    };
    let color = placeholder_color.or_else(|| options.text_style.fg.is_none().then_some(theme_color));

    let mut renderer = decorate::plain();
    if let Some(color) = color {
        renderer = decorate::with_color(renderer, color);
    }
    renderer = decorate::with_padding(renderer, cols.saturating_sub(1));
    renderer = decorate::with_suffix(renderer, if trigger.is_open { ARROW_OPEN } else { ARROW_CLOSED });
    renderer = decorate::with_style(renderer, &options.text_style);
    decorate::with_style(renderer, &options.style)
}

/// Renders the trigger at `row` and returns the next free row.
pub fn render_trigger(
    row: usize,
    trigger: &TriggerInfo,
    options: &PickerOptions,
    theme: &Theme,
    cols: usize,
) -> usize {
    let renderer = trigger_renderer(trigger, options, theme, cols);

    position_cursor(row, 1);
    print!(" {}{}", renderer(&trigger.text), Theme::reset());
    row + 1
}
