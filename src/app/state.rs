//! Application state management and view model computation.
//!
//! [`AppState`] is the single source of truth for the widget: the ordered
//! country catalog, the current search results, the list cursor and the
//! [`Selection`] holder. The event handler mutates it; the renderer only reads
//! view models computed from it.
//!
//! # State Components
//!
//! - **Catalog**: the dataset in `(code, name)` order, built once at startup
//! - **Display List**: catalog entries matching the search query
//! - **Cursor**: highlighted row within the display list
//! - **Selection**: chosen dial code and overlay state
//! - **Options**: placeholder and pass-through style settings
//!
//! # Example
//!
//! ```rust
//! use dialpick::app::{AppState, PickerOptions};
//! use dialpick::ui::Theme;
//!
//! let options = PickerOptions { selected_value: Some("44".into()), ..Default::default() };
//! let state = AppState::new(options, Theme::default());
//! assert_eq!(state.trigger_text(), "+44");
//! ```

use super::actions::SelectionNotice;
use super::modes::PickerState;
use super::search::{filter_and_sort, match_ranges};
use super::selection::Selection;
use crate::domain::{dataset, CountryRecord};
use crate::ui::style::TextStyle;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    DisplayItem, EmptyState, FooterInfo, HeaderInfo, OverlayView, SearchBarInfo, TriggerInfo,
    UIViewModel,
};

/// Rows used by the overlay chrome: trigger, header, border, 3-line search
/// box, bottom border and footer.
const OVERLAY_CHROME_ROWS: usize = 8;

/// Widest name shown before truncation.
const NAME_COLUMN_WIDTH: usize = 36;

/// Default trigger text when nothing is selected.
pub const DEFAULT_PLACEHOLDER: &str = "Select country code";

/// Host-facing presentation options.
///
/// `style` and `text_style` are passed through to the trigger renderer and
/// have no effect on filtering or selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerOptions {
    /// Text shown while no code is selected.
    pub placeholder: String,
    /// Hex colour applied to the placeholder text only.
    pub placeholder_text_color: Option<String>,
    /// Dial code to preselect.
    pub selected_value: Option<String>,
    /// Style of the trigger line as a whole.
    pub style: TextStyle,
    /// Style of the trigger text.
    pub text_style: TextStyle,
}

impl Default for PickerOptions {
    fn default() -> Self {
        Self {
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            placeholder_text_color: None,
            selected_value: None,
            style: TextStyle::default(),
            text_style: TextStyle::default(),
        }
    }
}

/// Central application state container.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Every country in `(code, name)` order.
    ///
    /// Owned copy of the dataset; search results are always derived from it.
    pub catalog: Vec<CountryRecord>,

    /// Countries matching the current search query.
    ///
    /// Recomputed by `apply_search_filter()` on every query change.
    pub display_list: Vec<CountryRecord>,

    /// Zero-based cursor within `display_list`.
    pub selected_index: usize,

    /// Text typed into the overlay search box.
    pub search_query: String,

    /// Chosen dial code and overlay state.
    pub selection: Selection,

    /// Placeholder and style settings from the plugin configuration.
    pub options: PickerOptions,

    /// Color scheme for UI rendering.
    pub theme: Theme,
}

impl AppState {
    /// Creates a closed picker over the full catalog.
    #[must_use]
    pub fn new(options: PickerOptions, theme: Theme) -> Self {
        let catalog = dataset::initial_order();
        let selection = Selection::new(options.selected_value.clone());

        tracing::debug!(
            countries = catalog.len(),
            selected = ?selection.selected_code(),
            "app state created"
        );

        Self {
            display_list: catalog.clone(),
            catalog,
            selected_index: 0,
            search_query: String::new(),
            selection,
            options,
            theme,
        }
    }

    /// Returns the overlay state.
    #[must_use]
    pub const fn picker_state(&self) -> PickerState {
        self.selection.state()
    }

    /// Returns the trigger text: `"+code"` or the placeholder.
    #[must_use]
    pub fn trigger_text(&self) -> String {
        self.selection.display_text(&self.options.placeholder)
    }

    /// Opens the overlay with an empty search.
    ///
    /// The cursor starts on the currently selected code when it is listed.
    /// Returns `false` if the overlay was already open.
    pub fn open_picker(&mut self) -> bool {
        if !self.selection.open() {
            tracing::debug!("picker already open");
            return false;
        }

        self.search_query.clear();
        self.apply_search_filter();
        self.selected_index = self
            .selection
            .selected_code()
            .and_then(|code| self.display_list.iter().position(|r| r.code == code))
            .unwrap_or(0);

        tracing::debug!(cursor = self.selected_index, "picker opened");
        true
    }

    /// Closes the overlay without choosing. Returns `false` if it was closed.
    pub fn dismiss_picker(&mut self) -> bool {
        let closed = self.selection.close();
        if closed {
            tracing::debug!(query = %self.search_query, "picker dismissed");
        }
        closed
    }

    /// Chooses the highlighted country.
    ///
    /// Returns the notice to publish, or `None` when the overlay is closed or
    /// the search matched nothing.
    pub fn choose_highlighted(&mut self) -> Option<SelectionNotice> {
        let record = *self.selected_country()?;
        self.selection.choose(&record)?;

        tracing::debug!(id = %record.id, code = %record.code, "country chosen");
        Some(SelectionNotice::new(record))
    }

    /// Moves the cursor down by one row, wrapping to the top.
    pub fn move_selection_down(&mut self) {
        if self.display_list.is_empty() {
            return;
        }
        self.selected_index = (self.selected_index + 1) % self.display_list.len();
    }

    /// Moves the cursor up by one row, wrapping to the bottom.
    pub fn move_selection_up(&mut self) {
        if self.display_list.is_empty() {
            return;
        }
        if self.selected_index == 0 {
            self.selected_index = self.display_list.len() - 1;
        } else {
            self.selected_index -= 1;
        }
    }

    /// Returns the highlighted country, if any row is visible.
    #[must_use]
    pub fn selected_country(&self) -> Option<&CountryRecord> {
        self.display_list.get(self.selected_index)
    }

    /// Recomputes `display_list` from the catalog and the current query.
    ///
    /// Clamps the cursor to the new list bounds.
    pub fn apply_search_filter(&mut self) {
        let _span = tracing::debug_span!(
            "apply_search_filter",
            total = self.catalog.len(),
            query_len = self.search_query.len()
        )
        .entered();

        self.display_list = filter_and_sort(&self.catalog, &self.search_query);

        if self.display_list.is_empty() {
            self.selected_index = 0;
        } else {
            self.selected_index = self.selected_index.min(self.display_list.len() - 1);
        }

        tracing::debug!(matches = self.display_list.len(), "search filter applied");
    }

    /// Computes a renderable view model for a `rows` x `cols` pane.
    ///
    /// The overlay list is windowed around the cursor so the highlighted row
    /// stays visible.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let trigger = TriggerInfo {
            text: self.trigger_text(),
            is_placeholder: self.selection.selected_code().is_none(),
            is_open: self.picker_state().is_open(),
        };

        let overlay = self
            .picker_state()
            .is_open()
            .then(|| self.compute_overlay(rows, cols));

        UIViewModel {
            trigger,
            overlay,
            footer: self.compute_footer(),
        }
    }

    fn compute_overlay(&self, rows: usize, cols: usize) -> OverlayView {
        let search_bar = SearchBarInfo {
            query: self.search_query.clone(),
        };

        if self.display_list.is_empty() {
            return OverlayView {
                header: self.compute_header(),
                search_bar,
                display_items: vec![],
                selected_index: 0,
                empty_state: Some(EmptyState {
                    message: "No matching countries".to_string(),
                    subtitle: format!(
                        "Nothing contains \"{}\" (search is case-sensitive)",
                        self.search_query
                    ),
                }),
            };
        }

        let available_rows = rows.saturating_sub(OVERLAY_CHROME_ROWS).max(1);

        let len = self.display_list.len();
        let visible_start = self
            .selected_index
            .saturating_sub(available_rows / 2)
            .min(len.saturating_sub(available_rows));
        let visible_end = (visible_start + available_rows).min(len);

        let display_items = self.display_list[visible_start..visible_end]
            .iter()
            .enumerate()
            .map(|(offset, record)| self.compute_display_item(record, visible_start + offset, cols))
            .collect();

        OverlayView {
            header: self.compute_header(),
            search_bar,
            display_items,
            selected_index: self.selected_index.saturating_sub(visible_start),
            empty_state: None,
        }
    }

    fn compute_display_item(&self, record: &CountryRecord, absolute_idx: usize, cols: usize) -> DisplayItem {
        let name_width = NAME_COLUMN_WIDTH.min(cols.saturating_sub(12)).max(4);
        let name = truncate_chars(record.name, name_width);
        let kept = if name == record.name {
            name.chars().count()
        } else {
            name_width.saturating_sub(ELLIPSIS.len())
        };
        let name_highlights = match_ranges(record.name, &self.search_query)
            .into_iter()
            .filter(|&(start, _)| start < kept)
            .map(|(start, end)| (start, end.min(kept)))
            .collect();

        DisplayItem {
            flag: record.flag.to_string(),
            name_highlights,
            code_highlights: match_ranges(record.code, &self.search_query)
                .into_iter()
                .map(|(start, end)| (start + 1, end + 1))
                .collect(),
            name,
            code: record.dial_code(),
            name_width,
            is_selected: absolute_idx == self.selected_index,
            is_chosen: self.selection.selected_code() == Some(record.code),
        }
    }

    fn compute_header(&self) -> HeaderInfo {
        let title = if self.search_query.is_empty() {
            format!(" Select country ({}) ", self.display_list.len())
        } else {
            format!(
                " Select country ({} of {}) ",
                self.display_list.len(),
                self.catalog.len()
            )
        };
        HeaderInfo { title }
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match self.picker_state() {
            PickerState::Closed => "Enter/Space: choose country  q: quit",
            PickerState::Open => "Type to filter  ↑/↓ or Ctrl+n/p: navigate  Enter: select  Esc: cancel",
        };
        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }
}

const ELLIPSIS: &str = "...";

/// Shortens `text` to at most `max_chars` characters, marking the cut with `...`.
fn truncate_chars(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let kept: String = text.chars().take(max_chars.saturating_sub(ELLIPSIS.len())).collect();
    format!("{kept}{ELLIPSIS}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with(selected: Option<&str>) -> AppState {
        let options = PickerOptions {
            selected_value: selected.map(String::from),
            ..PickerOptions::default()
        };
        AppState::new(options, Theme::default())
    }

    #[test]
    fn starts_closed_with_full_catalog() {
        let state = state_with(None);
        assert_eq!(state.picker_state(), PickerState::Closed);
        assert_eq!(state.display_list.len(), dataset::get_all().len());
        assert_eq!(state.trigger_text(), DEFAULT_PLACEHOLDER);
    }

    #[test]
    fn preselected_value_shows_on_trigger() {
        let state = state_with(Some("44"));
        let vm = state.compute_viewmodel(24, 80);
        assert_eq!(vm.trigger.text, "+44");
        assert!(!vm.trigger.is_placeholder);
        assert!(vm.overlay.is_none());
    }

    #[test]
    fn opening_resets_search_and_jumps_to_selection() {
        let mut state = state_with(Some("49"));
        assert!(state.open_picker());
        state.search_query = "Fra".to_string();
        state.apply_search_filter();
        assert!(state.dismiss_picker());

        assert!(state.open_picker());
        assert!(state.search_query.is_empty());
        assert_eq!(state.display_list.len(), state.catalog.len());
        assert_eq!(state.selected_country().map(|r| r.id), Some("de"));
    }

    #[test]
    fn open_twice_is_a_noop() {
        let mut state = state_with(None);
        assert!(state.open_picker());
        state.move_selection_down();
        assert!(!state.open_picker());
        assert_eq!(state.selected_index, 1);
        assert_eq!(state.picker_state(), PickerState::Open);
    }

    #[test]
    fn choose_highlighted_selects_and_closes() {
        let mut state = state_with(None);
        state.open_picker();
        state.search_query = "United Kingdom".to_string();
        state.apply_search_filter();

        let notice = state.choose_highlighted().expect("a row is highlighted");
        assert_eq!(notice.code, "44");
        assert_eq!(notice.country.id, "gb");
        assert_eq!(state.picker_state(), PickerState::Closed);
        assert_eq!(state.trigger_text(), "+44");
    }

    #[test]
    fn choose_with_no_matches_does_nothing() {
        let mut state = state_with(Some("1"));
        state.open_picker();
        state.search_query = "zzz".to_string();
        state.apply_search_filter();
        assert!(state.choose_highlighted().is_none());
        assert_eq!(state.picker_state(), PickerState::Open);
        assert_eq!(state.selection.selected_code(), Some("1"));
    }

    #[test]
    fn choose_while_closed_does_nothing() {
        let mut state = state_with(None);
        assert!(state.choose_highlighted().is_none());
        assert_eq!(state.trigger_text(), DEFAULT_PLACEHOLDER);
    }

    #[test]
    fn cursor_wraps_both_ways() {
        let mut state = state_with(None);
        state.open_picker();
        state.move_selection_up();
        assert_eq!(state.selected_index, state.display_list.len() - 1);
        state.move_selection_down();
        assert_eq!(state.selected_index, 0);
    }

    #[test]
    fn filtering_clamps_cursor() {
        let mut state = state_with(None);
        state.open_picker();
        state.selected_index = 100;
        state.search_query = "44".to_string();
        state.apply_search_filter();
        assert!(state.selected_index < state.display_list.len());
        assert!(state.display_list.iter().all(|r| r.code.contains("44") || r.name.contains("44")));
    }

    #[test]
    fn overlay_windows_around_cursor() {
        let mut state = state_with(None);
        state.open_picker();
        state.selected_index = 100;
        let vm = state.compute_viewmodel(20, 80);
        let overlay = vm.overlay.expect("overlay is open");
        assert_eq!(overlay.display_items.len(), 20 - OVERLAY_CHROME_ROWS);
        assert!(overlay.display_items[overlay.selected_index].is_selected);
        assert_eq!(overlay.display_items.iter().filter(|i| i.is_selected).count(), 1);
    }

    #[test]
    fn overlay_shows_empty_state_without_matches() {
        let mut state = state_with(None);
        state.open_picker();
        state.search_query = "Atlantis".to_string();
        state.apply_search_filter();
        let overlay = state.compute_viewmodel(24, 80).overlay.expect("overlay is open");
        assert!(overlay.display_items.is_empty());
        assert!(overlay.empty_state.is_some());
        assert_eq!(overlay.header.title, format!(" Select country (0 of {}) ", state.catalog.len()));
    }

    #[test]
    fn display_items_carry_highlights_and_chosen_marker() {
        let mut state = state_with(Some("44"));
        state.open_picker();
        state.search_query = "44".to_string();
        state.apply_search_filter();
        let overlay = state.compute_viewmodel(24, 80).overlay.expect("overlay is open");

        // "1441" (Bermuda) sorts before "44"
        let bermuda = &overlay.display_items[0];
        assert_eq!(bermuda.code, "+1441");
        assert_eq!(bermuda.code_highlights, vec![(2, 4)]);
        assert!(!bermuda.is_chosen);

        let uk_codes: Vec<&DisplayItem> =
            overlay.display_items.iter().filter(|i| i.code == "+44").collect();
        assert_eq!(uk_codes.len(), 4);
        for item in uk_codes {
            assert!(item.is_chosen);
            assert_eq!(item.code_highlights, vec![(1, 3)]);
            assert!(item.name_highlights.is_empty());
        }
    }

    #[test]
    fn short_list_is_shown_whole_with_cursor_at_end() {
        let mut state = state_with(None);
        state.open_picker();
        state.search_query = "Islands".to_string();
        state.apply_search_filter();
        let len = state.display_list.len();
        assert!(len >= 3);
        state.selected_index = len - 1;

        let rows = OVERLAY_CHROME_ROWS + len + 1;
        let overlay = state.compute_viewmodel(rows, 80).overlay.expect("overlay is open");
        assert_eq!(overlay.display_items.len(), len);
        assert_eq!(overlay.selected_index, len - 1);
        assert!(overlay.display_items[len - 1].is_selected);
    }

    #[test]
    fn window_ends_at_list_end_when_cursor_is_last() {
        let mut state = state_with(None);
        state.open_picker();
        state.selected_index = state.display_list.len() - 1;
        let overlay = state.compute_viewmodel(20, 80).overlay.expect("overlay is open");
        assert_eq!(overlay.display_items.len(), 20 - OVERLAY_CHROME_ROWS);
        assert_eq!(overlay.selected_index, overlay.display_items.len() - 1);
    }

    #[test]
    fn ellipsis_is_never_highlighted() {
        let mut state = state_with(None);
        state.open_picker();
        state.search_query = ".".to_string();
        state.apply_search_filter();
        let overlay = state.compute_viewmodel(24, 20).overlay.expect("overlay is open");
        assert!(!overlay.display_items.is_empty());
        for item in overlay.display_items.iter().filter(|i| i.name.ends_with("...")) {
            let visible = item.name.chars().count() - 3;
            assert!(
                item.name_highlights.iter().all(|&(_, end)| end <= visible),
                "{} highlights {:?}",
                item.name,
                item.name_highlights
            );
        }
    }

    #[test]
    fn highlights_are_clipped_to_the_visible_name() {
        let mut state = state_with(None);
        state.open_picker();
        state.search_query = "Islands".to_string();
        state.apply_search_filter();
        // name column is 8 wide at 20 columns: "Cayma..." keeps 5 chars
        let overlay = state.compute_viewmodel(60, 20).overlay.expect("overlay is open");
        let cayman = overlay
            .display_items
            .iter()
            .find(|i| i.name.starts_with("Cayma"))
            .expect("Cayman Islands is listed");
        assert_eq!(cayman.name, "Cayma...");
        assert!(cayman.name_highlights.is_empty());

        let faroe = overlay
            .display_items
            .iter()
            .find(|i| i.name.starts_with("Faroe"))
            .expect("Faroe Islands is listed");
        assert!(faroe.name_highlights.iter().all(|&(_, end)| end <= 5));
    }

    #[test]
    fn truncation_is_char_safe() {
        assert_eq!(truncate_chars("São Tomé and Príncipe", 10), "São Tom...");
        assert_eq!(truncate_chars("Peru", 10), "Peru");
    }
}
