//! Composable text renderers for the trigger line.
//!
//! A [`TextRenderer`] turns plain text into the string that gets printed.
//! Decorators take a renderer and return an augmented one, so extra text
//! behaviour (colours, styles, suffixes) is stacked rather than inherited.
//!
//! Decorators only emit "switch on" sequences and never reset. When stacked,
//! the innermost decorator's sequences are printed last and win, so the
//! stacking order encodes precedence:
//!
//! ```text
//! with_style(line style, with_style(text style, with_color(placeholder, plain())))
//! ```
//!
//! Here the placeholder colour beats the text style, which beats the line style.

use crate::ui::style::TextStyle;
use crate::ui::theme::Theme;

/// Renders text into printable output.
pub type TextRenderer = Box<dyn Fn(&str) -> String>;

/// The identity renderer.
#[must_use]
pub fn plain() -> TextRenderer {
    Box::new(str::to_string)
}

/// Prefixes the inner output with `style`'s ANSI sequences.
///
/// A plain style returns `inner` unchanged.
#[must_use]
pub fn with_style(inner: TextRenderer, style: &TextStyle) -> TextRenderer {
    if style.is_plain() {
        return inner;
    }
    let prefix = style.ansi_prefix();
    Box::new(move |text| format!("{prefix}{}", inner(text)))
}

/// Applies a foreground colour to the inner output.
#[must_use]
pub fn with_color(inner: TextRenderer, hex: &str) -> TextRenderer {
    let prefix = Theme::fg(hex);
    Box::new(move |text| format!("{prefix}{}", inner(text)))
}

/// Appends `suffix` to the text before the inner renderer sees it.
#[must_use]
pub fn with_suffix(inner: TextRenderer, suffix: &str) -> TextRenderer {
    let suffix = suffix.to_string();
    Box::new(move |text| inner(&format!("{text}{suffix}")))
}

/// Pads the text with spaces to `width` characters before rendering.
///
/// Lets a background colour from an outer decorator span the whole line.
#[must_use]
pub fn with_padding(inner: TextRenderer, width: usize) -> TextRenderer {
    Box::new(move |text| {
        let pad = width.saturating_sub(text.chars().count());
        inner(&format!("{text}{}", " ".repeat(pad)))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_is_identity() {
        assert_eq!(plain()("+44"), "+44");
    }

    #[test]
    fn plain_style_adds_nothing() {
        let renderer = with_style(plain(), &TextStyle::default());
        assert_eq!(renderer("x"), "x");
    }

    #[test]
    fn inner_decorators_print_last() {
        let text_style = TextStyle {
            bold: true,
            ..TextStyle::default()
        };
        let renderer = with_style(with_color(plain(), "#ff0000"), &text_style);
        assert_eq!(renderer("hi"), "\u{1b}[1m\u{1b}[38;2;255;0;0mhi");
    }

    #[test]
    fn suffix_and_padding_compose() {
        // outer decorators see the text first
        let renderer = with_suffix(with_padding(plain(), 8), " ▾");
        assert_eq!(renderer("+1"), "+1 ▾    ");

        let renderer = with_padding(with_suffix(plain(), " ▾"), 4);
        assert_eq!(renderer("+1"), "+1   ▾");
    }
}
