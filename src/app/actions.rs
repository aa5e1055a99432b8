//! Actions representing side effects to be executed by the plugin runtime.
//!
//! The event handler never talks to Zellij directly. It mutates [`AppState`]
//! and returns a list of actions; `main.rs` turns each action into Zellij API
//! calls (hiding the pane, answering `zellij pipe` callers).
//!
//! [`AppState`]: crate::app::AppState

use crate::domain::{CountryRecord, Result};
use serde::Serialize;

/// Commands representing side effects to be executed by the plugin runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Hides the plugin pane.
    CloseFocus,

    /// Makes the plugin pane visible, floating it if it was hidden.
    ///
    /// Emitted when a `zellij pipe` request opens the picker.
    ShowSelf,

    /// Reports a new selection to the host.
    ///
    /// Pending pipe callers receive the notice and are released.
    NotifySelection(SelectionNotice),

    /// Releases pending pipe callers without output.
    ///
    /// Emitted when the overlay is dismissed or the plugin is closed before
    /// anything was chosen.
    ReleasePipes,
}

/// Selection-changed notification.
///
/// # Examples
///
/// ```
/// use dialpick::app::SelectionNotice;
/// use dialpick::domain::CountryRecord;
///
/// let uk = CountryRecord { id: "gb", name: "United Kingdom", code: "44", flag: "🇬🇧" };
/// let notice = SelectionNotice::new(uk);
/// assert_eq!(notice.display, "+44");
/// assert!(notice.to_json()?.contains("\"code\":\"44\""));
/// # Ok::<(), dialpick::DialpickError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectionNotice {
    /// Bare dial code, e.g. `"44"`.
    pub code: String,
    /// Display text, e.g. `"+44"`.
    pub display: String,
    /// The row the user chose.
    pub country: CountryRecord,
}

impl SelectionNotice {
    #[must_use]
    pub fn new(country: CountryRecord) -> Self {
        Self {
            code: country.code.to_string(),
            display: country.dial_code(),
            country,
        }
    }

    /// Encodes the notice as a single JSON line.
    ///
    /// # Errors
    ///
    /// Returns [`crate::DialpickError::Serialization`] if encoding fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
