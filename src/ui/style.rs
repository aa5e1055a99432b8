//! Pass-through text styles from the plugin configuration.
//!
//! The host can restyle the trigger line with two settings, `style` (the
//! whole line) and `text_style` (the text). Both use a compact
//! comma-separated syntax:
//!
//! ```text
//! text_style "bold,underline,fg=#f5c2e7"
//! style "bg=#313244"
//! ```
//!
//! Flags: `bold`, `dim`, `italic`, `underline`. Colours: `fg=#rrggbb`,
//! `bg=#rrggbb`. Styles carry no meaning for filtering or selection.

use crate::domain::{DialpickError, Result};
use crate::ui::theme::Theme;

/// ANSI text attributes for the trigger line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextStyle {
    pub fg: Option<String>,
    pub bg: Option<String>,
    pub bold: bool,
    pub dim: bool,
    pub italic: bool,
    pub underline: bool,
}

impl TextStyle {
    /// Parses a style string such as `"bold,fg=#cdd6f4"`.
    ///
    /// Whitespace around items is ignored and empty items are skipped, so an
    /// empty string yields the default (no-op) style.
    ///
    /// # Errors
    ///
    /// Returns [`DialpickError::Config`] for unknown flags or malformed colours.
    ///
    /// # Examples
    ///
    /// ```
    /// use dialpick::ui::style::TextStyle;
    ///
    /// let style = TextStyle::parse("bold, fg=#f5c2e7")?;
    /// assert!(style.bold);
    /// assert_eq!(style.fg.as_deref(), Some("#f5c2e7"));
    /// assert!(TextStyle::parse("blink").is_err());
    /// # Ok::<(), dialpick::DialpickError>(())
    /// ```
    pub fn parse(raw: &str) -> Result<Self> {
        let mut style = Self::default();

        for item in raw.split(',').map(str::trim).filter(|s| !s.is_empty()) {
            match item.split_once('=') {
                Some(("fg", color)) => style.fg = Some(parse_color(color)?),
                Some(("bg", color)) => style.bg = Some(parse_color(color)?),
                Some((key, _)) => {
                    return Err(DialpickError::Config(format!("unknown style key: {key}")));
                }
                None => match item {
                    "bold" => style.bold = true,
                    "dim" => style.dim = true,
                    "italic" => style.italic = true,
                    "underline" => style.underline = true,
                    other => {
                        return Err(DialpickError::Config(format!("unknown style flag: {other}")));
                    }
                },
            }
        }

        Ok(style)
    }

    /// Returns `true` if the style changes nothing.
    #[must_use]
    pub fn is_plain(&self) -> bool {
        *self == Self::default()
    }

    /// Returns the ANSI sequences that switch this style on.
    ///
    /// No reset is emitted; the caller resets after the styled span.
    #[must_use]
    pub fn ansi_prefix(&self) -> String {
        let mut out = String::new();
        if self.bold {
            out.push_str(Theme::bold());
        }
        if self.dim {
            out.push_str(Theme::dim());
        }
        if self.italic {
            out.push_str("\u{001b}[3m");
        }
        if self.underline {
            out.push_str("\u{001b}[4m");
        }
        if let Some(fg) = &self.fg {
            out.push_str(&Theme::fg(fg));
        }
        if let Some(bg) = &self.bg {
            out.push_str(&Theme::bg(bg));
        }
        out
    }
}

/// Validates a `#rrggbb` colour and returns it normalised with a leading `#`.
pub(crate) fn parse_color(raw: &str) -> Result<String> {
    let hex = raw.trim().trim_start_matches('#');
    if hex.len() == 6 && hex.chars().all(|c| c.is_ascii_hexdigit()) {
        Ok(format!("#{}", hex.to_ascii_lowercase()))
    } else {
        Err(DialpickError::Config(format!("invalid colour: {raw}")))
    }
}
