//! Event handling and state transition logic.
//!
//! [`handle_event`] is the only place where input changes [`AppState`]. Each
//! event is matched, the state is mutated through `AppState` methods, and the
//! resulting side effects are returned as [`Action`]s for the plugin runtime.
//!
//! # Event Types
//!
//! - **Overlay**: `Open`, `Choose`, `Dismiss`, `PipeRequest`
//! - **Navigation**: `KeyDown`, `KeyUp`
//! - **Search input**: `Char`, `Backspace`
//! - **Plugin**: `CloseFocus`
//!
//! Every event is handled synchronously; nothing is queued or retried.

use crate::app::{Action, AppState};
use crate::domain::error::Result;

/// Events triggered by user input or by `zellij pipe` requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Opens the overlay (no-op when already open).
    Open,
    /// Moves the cursor down by one row (wraps to top).
    KeyDown,
    /// Moves the cursor up by one row (wraps to bottom).
    KeyUp,
    /// Appends a character to the search query.
    Char(char),
    /// Removes the last character from the search query.
    Backspace,
    /// Chooses the highlighted country and closes the overlay.
    Choose,
    /// Closes the overlay without choosing.
    Dismiss,
    /// Hides the plugin pane.
    CloseFocus,
    /// A `zellij pipe` caller is waiting for a selection.
    ///
    /// Opens the overlay and brings the pane into view.
    PipeRequest,
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// # Returns
///
/// `(should_render, actions)`: whether the pane needs repainting and the side
/// effects to run, in order.
///
/// # Errors
///
/// The picker core is total, so no current event fails; the `Result` keeps
/// the signature stable for the runtime.
///
/// # Example
///
/// ```rust
/// use dialpick::app::{handle_event, Action, AppState, Event, PickerOptions};
/// use dialpick::ui::Theme;
///
/// let mut state = AppState::new(PickerOptions::default(), Theme::default());
/// handle_event(&mut state, &Event::Open)?;
/// for c in "Unit".chars() {
///     handle_event(&mut state, &Event::Char(c))?;
/// }
/// let (_, actions) = handle_event(&mut state, &Event::Choose)?;
/// assert!(matches!(&actions[0], Action::NotifySelection(n) if n.code == "1"));
/// # Ok::<(), dialpick::DialpickError>(())
/// ```
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::Open => Ok((state.open_picker(), vec![])),
        Event::PipeRequest => {
            let opened = state.open_picker();
            tracing::debug!(opened = opened, "pipe request received");
            Ok((true, vec![Action::ShowSelf]))
        }
        Event::KeyDown => {
            if !state.picker_state().is_open() {
                return Ok((false, vec![]));
            }
            state.move_selection_down();
            Ok((true, vec![]))
        }
        Event::KeyUp => {
            if !state.picker_state().is_open() {
                return Ok((false, vec![]));
            }
            state.move_selection_up();
            Ok((true, vec![]))
        }
        Event::Char(c) => {
            if !state.picker_state().is_open() {
                return Ok((false, vec![]));
            }

            state.search_query.push(*c);
            tracing::trace!(query = %state.search_query, char = %c, "search query updated");
            state.apply_search_filter();

            Ok((true, vec![]))
        }
        Event::Backspace => {
            if !state.picker_state().is_open() || state.search_query.pop().is_none() {
                return Ok((false, vec![]));
            }

            state.apply_search_filter();

            Ok((true, vec![]))
        }
        Event::Choose => state.choose_highlighted().map_or_else(
            || {
                tracing::debug!("nothing to choose");
                Ok((false, vec![]))
            },
            |notice| Ok((true, vec![Action::NotifySelection(notice)])),
        ),
        Event::Dismiss => {
            if state.dismiss_picker() {
                Ok((true, vec![Action::ReleasePipes]))
            } else {
                Ok((false, vec![]))
            }
        }
        Event::CloseFocus => {
            state.dismiss_picker();
            Ok((false, vec![Action::ReleasePipes, Action::CloseFocus]))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{PickerOptions, PickerState};
    use crate::ui::Theme;

    fn new_state(selected: Option<&str>) -> AppState {
        AppState::new(
            PickerOptions {
                selected_value: selected.map(String::from),
                ..PickerOptions::default()
            },
            Theme::default(),
        )
    }

    fn type_query(state: &mut AppState, query: &str) {
        for c in query.chars() {
            handle_event(state, &Event::Char(c)).unwrap();
        }
    }

    #[test]
    fn typing_while_closed_is_ignored() {
        let mut state = new_state(None);
        let (render, actions) = handle_event(&mut state, &Event::Char('x')).unwrap();
        assert!(!render);
        assert!(actions.is_empty());
        assert!(state.search_query.is_empty());
    }

    #[test]
    fn open_type_choose_reports_selection() {
        let mut state = new_state(None);
        let (render, _) = handle_event(&mut state, &Event::Open).unwrap();
        assert!(render);

        type_query(&mut state, "Germ");
        assert_eq!(state.display_list.len(), 1);

        let (render, actions) = handle_event(&mut state, &Event::Choose).unwrap();
        assert!(render);
        match actions.as_slice() {
            [Action::NotifySelection(notice)] => {
                assert_eq!(notice.code, "49");
                assert_eq!(notice.display, "+49");
            }
            other => panic!("unexpected actions: {other:?}"),
        }
        assert_eq!(state.picker_state(), PickerState::Closed);
        assert_eq!(state.trigger_text(), "+49");
    }

    #[test]
    fn second_open_does_not_rerender() {
        let mut state = new_state(None);
        handle_event(&mut state, &Event::Open).unwrap();
        let (render, actions) = handle_event(&mut state, &Event::Open).unwrap();
        assert!(!render);
        assert!(actions.is_empty());
        assert_eq!(state.picker_state(), PickerState::Open);
    }

    #[test]
    fn backspace_widens_results() {
        let mut state = new_state(None);
        handle_event(&mut state, &Event::Open).unwrap();
        type_query(&mut state, "Unit");
        let narrow = state.display_list.len();
        handle_event(&mut state, &Event::Backspace).unwrap();
        assert_eq!(state.search_query, "Uni");
        assert!(state.display_list.len() >= narrow);

        for _ in 0..3 {
            handle_event(&mut state, &Event::Backspace).unwrap();
        }
        let (render, _) = handle_event(&mut state, &Event::Backspace).unwrap();
        assert!(!render);
        assert_eq!(state.display_list.len(), state.catalog.len());
    }

    #[test]
    fn navigation_moves_cursor_only_when_open() {
        let mut state = new_state(None);
        let (render, _) = handle_event(&mut state, &Event::KeyDown).unwrap();
        assert!(!render);
        assert_eq!(state.selected_index, 0);

        handle_event(&mut state, &Event::Open).unwrap();
        handle_event(&mut state, &Event::KeyDown).unwrap();
        handle_event(&mut state, &Event::KeyDown).unwrap();
        handle_event(&mut state, &Event::KeyUp).unwrap();
        assert_eq!(state.selected_index, 1);
    }

    #[test]
    fn dismiss_releases_pipes_and_keeps_selection() {
        let mut state = new_state(Some("33"));
        handle_event(&mut state, &Event::Open).unwrap();
        type_query(&mut state, "Spain");

        let (render, actions) = handle_event(&mut state, &Event::Dismiss).unwrap();
        assert!(render);
        assert_eq!(actions, vec![Action::ReleasePipes]);
        assert_eq!(state.trigger_text(), "+33");

        let (render, actions) = handle_event(&mut state, &Event::Dismiss).unwrap();
        assert!(!render);
        assert!(actions.is_empty());
    }

    #[test]
    fn choose_without_matches_is_a_noop() {
        let mut state = new_state(None);
        handle_event(&mut state, &Event::Open).unwrap();
        type_query(&mut state, "Narnia");
        let (render, actions) = handle_event(&mut state, &Event::Choose).unwrap();
        assert!(!render);
        assert!(actions.is_empty());
        assert_eq!(state.picker_state(), PickerState::Open);
    }

    #[test]
    fn pipe_request_opens_and_shows_pane() {
        let mut state = new_state(None);
        let (render, actions) = handle_event(&mut state, &Event::PipeRequest).unwrap();
        assert!(render);
        assert_eq!(actions, vec![Action::ShowSelf]);
        assert_eq!(state.picker_state(), PickerState::Open);
    }

    #[test]
    fn close_focus_hides_and_releases() {
        let mut state = new_state(None);
        handle_event(&mut state, &Event::Open).unwrap();
        let (_, actions) = handle_event(&mut state, &Event::CloseFocus).unwrap();
        assert_eq!(actions, vec![Action::ReleasePipes, Action::CloseFocus]);
        assert_eq!(state.picker_state(), PickerState::Closed);
    }
}
