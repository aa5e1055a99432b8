//! Dialpick: a Zellij plugin for picking a country dial code.
//!
//! The pane shows a single trigger line with the chosen code (`+44`) or a
//! placeholder. Opening it brings up a searchable list of every country with
//! its flag and dial code; choosing one updates the trigger and notifies any
//! `zellij pipe` caller that is waiting for a selection.

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← keys, pipes, host calls
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │
//! │  - Event handling → Actions                         │
//! │  - Filter/sort engine                               │
//! │  - Selection state (Closed / Open)                  │
//! └─────────────────────────────────────────────────────┘
//!         │                                    │
//! ┌───────────────────────────┐   ┌───────────────────────────┐
//! │ UI Layer (ui/)            │   │ Domain (domain/)          │
//! │ - View models, components │   │ - Country dataset         │
//! │ - Decorators, themes      │   │ - Error type              │
//! └───────────────────────────┘   └───────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │
//! │  - tracing → OpenTelemetry → OTLP/JSON file         │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! ```kdl
//! pane size=1 borderless=true {
//!     plugin location="file:/path/to/dialpick.wasm" {
//!         placeholder "Country code"
//!         placeholder_text_color "#6c7086"
//!         selected_value "44"
//!         text_style "bold"
//!         theme "catppuccin-mocha"
//!         trace_level "info"
//!     }
//! }
//! ```
//!
//! # Library usage
//!
//! ```rust
//! use dialpick::{handle_event, initialize, Action, Config, Event};
//!
//! let mut state = initialize(&Config::default());
//! handle_event(&mut state, &Event::Open)?;
//! for c in "Germany".chars() {
//!     handle_event(&mut state, &Event::Char(c))?;
//! }
//! let (_, actions) = handle_event(&mut state, &Event::Choose)?;
//!
//! assert!(matches!(&actions[..], [Action::NotifySelection(n)] if n.display == "+49"));
//! assert_eq!(state.trigger_text(), "+49");
//! # Ok::<(), dialpick::DialpickError>(())
//! ```

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod ui;

pub use app::{
    handle_event, Action, AppState, Event, PickerOptions, PickerState, Selection, SelectionNotice,
};
pub use domain::{CountryRecord, DialpickError, Result};
pub use ui::{TextStyle, Theme};

use std::collections::BTreeMap;

/// Plugin configuration parsed from the Zellij plugin block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Trigger text while nothing is selected.
    pub placeholder: String,

    /// `#rrggbb` colour for the placeholder. Falls back to the theme.
    pub placeholder_text_color: Option<String>,

    /// Dial code to preselect, without the leading `+`.
    pub selected_value: Option<String>,

    /// Style of the whole trigger line.
    pub style: TextStyle,

    /// Style of the trigger text.
    pub text_style: TextStyle,

    /// Built-in theme name. Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a TOML theme file.
    pub theme_file: Option<String>,

    /// `EnvFilter` directive for tracing. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            placeholder: app::state::DEFAULT_PLACEHOLDER.to_string(),
            placeholder_text_color: None,
            selected_value: None,
            style: TextStyle::default(),
            text_style: TextStyle::default(),
            theme_name: None,
            theme_file: None,
            trace_level: None,
        }
    }
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// Unknown keys are ignored. Values that fail to parse (styles, colours)
    /// are logged and replaced with their defaults, so loading never fails.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use dialpick::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("selected_value".to_string(), "+44".to_string());
    /// map.insert("text_style".to_string(), "bold".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.selected_value.as_deref(), Some("44"));
    /// assert!(config.text_style.bold);
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let placeholder = config
            .get("placeholder")
            .cloned()
            .unwrap_or_else(|| app::state::DEFAULT_PLACEHOLDER.to_string());

        let placeholder_text_color = config.get("placeholder_text_color").and_then(|raw| {
            ui::style::parse_color(raw)
                .map_err(|e| tracing::warn!(error = %e, "ignoring placeholder_text_color"))
                .ok()
        });

        let selected_value = config
            .get("selected_value")
            .map(|v| v.trim().trim_start_matches('+').to_string())
            .filter(|v| !v.is_empty());

        Self {
            placeholder,
            placeholder_text_color,
            selected_value,
            style: parse_style(config, "style"),
            text_style: parse_style(config, "text_style"),
            theme_name: config.get("theme").cloned(),
            theme_file: config.get("theme_file").cloned(),
            trace_level: config.get("trace_level").cloned(),
        }
    }

    fn picker_options(&self) -> PickerOptions {
        PickerOptions {
            placeholder: self.placeholder.clone(),
            placeholder_text_color: self.placeholder_text_color.clone(),
            selected_value: self.selected_value.clone(),
            style: self.style.clone(),
            text_style: self.text_style.clone(),
        }
    }

    fn theme(&self) -> Theme {
        if let Some(theme_file) = &self.theme_file {
            let path = infrastructure::expand_tilde(theme_file);
            return Theme::from_file(&path).unwrap_or_else(|e| {
                tracing::warn!(theme_file = %path, error = %e, "failed to load theme file, using default");
                Theme::default()
            });
        }

        self.theme_name.as_deref().map_or_else(Theme::default, |name| {
            Theme::from_name(name).unwrap_or_else(|| {
                tracing::warn!(theme_name = %name, "unknown theme, using default");
                Theme::default()
            })
        })
    }
}

fn parse_style(config: &BTreeMap<String, String>, key: &str) -> TextStyle {
    config.get(key).map_or_else(TextStyle::default, |raw| {
        TextStyle::parse(raw).unwrap_or_else(|e| {
            tracing::warn!(key, error = %e, "ignoring style");
            TextStyle::default()
        })
    })
}

/// Builds a closed picker from the configuration.
///
/// The theme comes from `theme_file` if set, else `theme`, else the default.
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!("initializing dialpick");
    AppState::new(config.picker_options(), config.theme())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn empty_map_gives_defaults() {
        assert_eq!(Config::from_zellij(&BTreeMap::new()), Config::default());
    }

    #[test]
    fn parses_every_key() {
        let config = Config::from_zellij(&map(&[
            ("placeholder", "Code"),
            ("placeholder_text_color", "#ABCDEF"),
            ("selected_value", "33"),
            ("style", "bg=#313244"),
            ("text_style", "bold,italic"),
            ("theme", "catppuccin-latte"),
            ("trace_level", "debug"),
        ]));

        assert_eq!(config.placeholder, "Code");
        assert_eq!(config.placeholder_text_color.as_deref(), Some("#abcdef"));
        assert_eq!(config.selected_value.as_deref(), Some("33"));
        assert_eq!(config.style.bg.as_deref(), Some("#313244"));
        assert!(config.text_style.bold && config.text_style.italic);
        assert_eq!(config.theme_name.as_deref(), Some("catppuccin-latte"));
        assert_eq!(config.trace_level.as_deref(), Some("debug"));
    }

    #[test]
    fn invalid_values_fall_back() {
        let config = Config::from_zellij(&map(&[
            ("placeholder_text_color", "red"),
            ("text_style", "blink"),
            ("selected_value", "+"),
        ]));

        assert_eq!(config.placeholder_text_color, None);
        assert_eq!(config.text_style, TextStyle::default());
        assert_eq!(config.selected_value, None);
    }

    #[test]
    fn selected_value_sets_initial_display() {
        let state = initialize(&Config::from_zellij(&map(&[("selected_value", "44")])));
        assert_eq!(state.trigger_text(), "+44");
        assert_eq!(state.picker_state(), PickerState::Closed);
    }

    #[test]
    fn unknown_selected_value_is_shown_verbatim() {
        let state = initialize(&Config::from_zellij(&map(&[("selected_value", "999")])));
        assert_eq!(state.trigger_text(), "+999");
    }

    #[test]
    fn placeholder_without_selection() {
        let state = initialize(&Config::from_zellij(&map(&[("placeholder", "Pick one")])));
        assert_eq!(state.trigger_text(), "Pick one");
    }

    #[test]
    fn theme_file_wins_over_name() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let toml = include_str!("../themes/catppuccin-latte.toml").replace(
            "name = \"catppuccin-latte\"",
            "name = \"custom\"",
        );
        file.write_all(toml.as_bytes()).unwrap();

        let config = Config {
            theme_name: Some("catppuccin-frappe".to_string()),
            theme_file: Some(file.path().display().to_string()),
            ..Config::default()
        };
        assert_eq!(initialize(&config).theme.name, "custom");
    }

    #[test]
    fn missing_theme_file_uses_default() {
        let config = Config {
            theme_file: Some("/nonexistent/theme.toml".to_string()),
            ..Config::default()
        };
        assert_eq!(initialize(&config).theme.name, Theme::default().name);
    }
}
