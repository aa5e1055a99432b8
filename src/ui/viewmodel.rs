//! View model types representing renderable UI state.
//!
//! View models are computed by `AppState::compute_viewmodel()` and hold
//! display-ready data only: formatted codes, truncated names, highlight
//! ranges and selection flags.

/// Complete UI view model for one frame.
#[derive(Debug, Clone)]
pub struct UIViewModel {
    /// The selector line shown at the top of the pane.
    pub trigger: TriggerInfo,

    /// The country overlay, present only while the picker is open.
    pub overlay: Option<OverlayView>,

    /// Footer keybinding hints.
    pub footer: FooterInfo,
}

/// The selector line.
#[derive(Debug, Clone)]
pub struct TriggerInfo {
    /// `"+code"` or the placeholder.
    pub text: String,

    /// Whether `text` is the placeholder (and takes the placeholder colour).
    pub is_placeholder: bool,

    /// Whether the overlay is open (flips the dropdown arrow).
    pub is_open: bool,
}

/// The searchable country list.
#[derive(Debug, Clone)]
pub struct OverlayView {
    /// Title with result count.
    pub header: HeaderInfo,

    /// Search box contents.
    pub search_bar: SearchBarInfo,

    /// Rows inside the visible window.
    pub display_items: Vec<DisplayItem>,

    /// Cursor position relative to `display_items`.
    pub selected_index: usize,

    /// Message shown instead of rows when nothing matches.
    pub empty_state: Option<EmptyState>,
}

/// One row of the country list.
#[derive(Debug, Clone)]
pub struct DisplayItem {
    /// Flag emoji.
    pub flag: String,

    /// Country name, truncated to `name_width` characters.
    pub name: String,

    /// Dial code with `+` prefix.
    pub code: String,

    /// Width of the name column in characters.
    pub name_width: usize,

    /// Whether the cursor is on this row.
    pub is_selected: bool,

    /// Whether this row's code is the current selection.
    pub is_chosen: bool,

    /// Char ranges of `name` matching the query, `(start, end)` exclusive end.
    pub name_highlights: Vec<(usize, usize)>,

    /// Char ranges of `code` matching the query.
    pub code_highlights: Vec<(usize, usize)>,
}

/// Header display information.
#[derive(Debug, Clone)]
pub struct HeaderInfo {
    pub title: String,
}

/// Footer display information.
#[derive(Debug, Clone)]
pub struct FooterInfo {
    /// Keybinding help text.
    pub keybindings: String,
}

/// Empty result message.
#[derive(Debug, Clone)]
pub struct EmptyState {
    pub message: String,
    pub subtitle: String,
}

/// Search box contents.
#[derive(Debug, Clone)]
pub struct SearchBarInfo {
    pub query: String,
}
