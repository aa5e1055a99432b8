//! Selection state holder.
//!
//! Tracks the chosen dial code and whether the overlay is open. The holder
//! knows nothing about searching or rendering; it only guards the
//! `Closed`/`Open` transitions described in [`super::modes`].

use super::modes::PickerState;
use crate::domain::{format_dial_code, CountryRecord};

/// Currently chosen dial code plus overlay state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Selection {
    selected_code: Option<String>,
    state: PickerState,
}

impl Selection {
    /// Creates a closed holder, preselecting `initial` when given.
    ///
    /// An empty string counts as "no selection". The code is not checked
    /// against the dataset.
    ///
    /// # Examples
    ///
    /// ```
    /// use dialpick::app::Selection;
    ///
    /// let selection = Selection::new(Some("44".to_string()));
    /// assert_eq!(selection.display_text("Pick one"), "+44");
    /// assert_eq!(Selection::new(None).display_text("Pick one"), "Pick one");
    /// ```
    #[must_use]
    pub fn new(initial: Option<String>) -> Self {
        Self {
            selected_code: initial.filter(|code| !code.is_empty()),
            state: PickerState::Closed,
        }
    }

    /// Opens the overlay.
    ///
    /// Returns `true` if the state changed; opening an open overlay is a no-op.
    pub fn open(&mut self) -> bool {
        if self.state.is_open() {
            return false;
        }
        self.state = PickerState::Open;
        true
    }

    /// Records `record` as the selection and closes the overlay.
    ///
    /// Returns the newly selected code, or `None` if the overlay was closed
    /// (in which case nothing changes).
    pub fn choose(&mut self, record: &CountryRecord) -> Option<String> {
        if !self.state.is_open() {
            tracing::debug!(code = %record.code, "choose ignored while picker is closed");
            return None;
        }
        self.selected_code = Some(record.code.to_string());
        self.state = PickerState::Closed;
        self.selected_code.clone()
    }

    /// Closes the overlay without changing the selection.
    ///
    /// Returns `true` if the state changed.
    pub fn close(&mut self) -> bool {
        if !self.state.is_open() {
            return false;
        }
        self.state = PickerState::Closed;
        true
    }

    #[must_use]
    pub const fn state(&self) -> PickerState {
        self.state
    }

    #[must_use]
    pub fn selected_code(&self) -> Option<&str> {
        self.selected_code.as_deref()
    }

    /// Returns `"+" + code` when a code is selected, else `placeholder`.
    #[must_use]
    pub fn display_text(&self, placeholder: &str) -> String {
        self.selected_code
            .as_deref()
            .map_or_else(|| placeholder.to_string(), format_dial_code)
    }
}
