//! Picker overlay state.
//!
//! The widget is always in one of two states: the trigger line is showing
//! ([`PickerState::Closed`]) or the searchable country overlay is showing
//! ([`PickerState::Open`]). There is no terminal state; the machine is reused
//! for the whole plugin lifetime.
//!
//! ```text
//!            open()                 choose(record) / close()
//!   Closed ─────────► Open   Open ─────────────────────────► Closed
//!                      │ ▲
//!                      └─┘ open() (no-op)
//! ```

/// Whether the picker overlay is visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PickerState {
    /// Only the trigger line is visible.
    ///
    /// Keys: enter/space (open), q/esc (hide plugin).
    #[default]
    Closed,

    /// The overlay with search box and country list is visible.
    ///
    /// Typed characters go to the search box; arrows and Ctrl+n/p move the
    /// cursor; enter chooses; esc closes without choosing.
    Open,
}

impl PickerState {
    /// Returns `true` while the overlay is visible.
    #[must_use]
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }
}
