//! Terminal rendering layer.
//!
//! Turns view models into ANSI-styled output. Zellij captures stdout of the
//! plugin's `render` call as the pane contents.
//!
//! # Modules
//!
//! - [`viewmodel`]: display-ready snapshots of `AppState`
//! - [`renderer`]: top-level layout switch (closed / open)
//! - [`components`]: trigger, header, search box, table, empty state, footer
//! - [`decorate`]: stackable text renderers for the trigger line
//! - [`style`]: pass-through style strings from the configuration
//! - [`helpers`]: cursor positioning and match highlighting
//! - [`theme`]: color schemes

pub mod components;
pub mod decorate;
pub mod helpers;
pub mod renderer;
pub mod style;
pub mod theme;
pub mod viewmodel;

pub use renderer::render;
pub use style::TextStyle;
pub use theme::Theme;
pub use viewmodel::{
    DisplayItem, EmptyState, FooterInfo, HeaderInfo, OverlayView, SearchBarInfo, TriggerInfo,
    UIViewModel,
};
