//! Shared rendering utilities.
//!
//! Everything here writes straight to stdout, which Zellij captures as the
//! plugin pane contents.

use crate::ui::theme::Theme;

/// Moves the cursor to a 1-indexed `row`/`col`.
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Builds `text` with the given char ranges wrapped in match highlight colours.
///
/// Ranges are `(start, end)` char indices with exclusive end; ranges past the
/// end of `text` are clipped. After each highlight the `restore` sequence is
/// re-applied so the row's own colours continue.
///
/// Selected rows are returned unhighlighted so the selection background stays
/// uniform.
#[must_use]
pub fn highlighted_text(
    text: &str,
    ranges: &[(usize, usize)],
    theme: &Theme,
    restore: &str,
    is_selected: bool,
) -> String {
    if ranges.is_empty() || is_selected {
        return text.to_string();
    }

    let chars: Vec<char> = text.chars().collect();
    let mut out = String::new();
    let mut pos = 0;

    for &(start, end) in ranges {
        let start = start.max(pos).min(chars.len());
        let end = end.min(chars.len());
        if start >= end {
            continue;
        }

        out.extend(&chars[pos..start]);
        out.push_str(&Theme::fg(&theme.colors.match_highlight_fg));
        out.push_str(&Theme::bg(&theme.colors.match_highlight_bg));
        out.extend(&chars[start..end]);
        out.push_str(Theme::reset());
        out.push_str(restore);
        pos = end;
    }

    out.extend(&chars[pos..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_ranges_is_verbatim() {
        let theme = Theme::default();
        assert_eq!(highlighted_text("Peru", &[], &theme, "", false), "Peru");
        assert_eq!(highlighted_text("Peru", &[(0, 2)], &theme, "", true), "Peru");
    }

    #[test]
    fn wraps_ranges_and_restores() {
        let theme = Theme::default();
        let on = format!(
            "{}{}",
            Theme::fg(&theme.colors.match_highlight_fg),
            Theme::bg(&theme.colors.match_highlight_bg)
        );
        let out = highlighted_text("Réunion", &[(2, 4)], &theme, "<r>", false);
        assert_eq!(out, format!("Ré{on}un\u{1b}[0m<r>ion"));
    }

    #[test]
    fn clips_out_of_range_spans() {
        let theme = Theme::default();
        let out = highlighted_text("Peru", &[(6, 9)], &theme, "", false);
        assert_eq!(out, "Peru");
    }
}
