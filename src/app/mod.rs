//! Application layer coordinating state, events, and actions.
//!
//! Sits between the Zellij shim (`main.rs`) and the domain/UI layers.
//!
//! ```text
//! Key / pipe → Event → handle_event → AppState mutation → Actions → Zellij calls
//! ```
//!
//! # Modules
//!
//! - [`actions`]: side effects returned by the handler
//! - [`handler`]: event processing
//! - [`modes`]: the `Closed`/`Open` overlay state
//! - [`search`]: literal substring filter and dial-code ordering
//! - [`selection`]: chosen dial code plus overlay state holder
//! - [`state`]: central state container and view model computation

pub mod actions;
pub mod handler;
pub mod modes;
pub mod search;
pub mod selection;
pub mod state;

pub use actions::{Action, SelectionNotice};
pub use handler::{handle_event, Event};
pub use modes::PickerState;
pub use search::filter_and_sort;
pub use selection::Selection;
pub use state::{AppState, PickerOptions};
