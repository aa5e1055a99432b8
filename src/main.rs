//! Zellij plugin wrapper and entry point.
//!
//! Thin layer between the `dialpick` library and the Zellij plugin API:
//! translates keys and pipe messages into library events, runs the resulting
//! actions through host calls, and forwards `render`.
//!
//! # Pipe protocol
//!
//! ```text
//! $ zellij pipe --name pick-country
//! +44
//! $ zellij pipe --name pick-country --args format=json
//! {"code":"44","display":"+44","country":{...}}
//! ```
//!
//! The CLI stays blocked until the user chooses a country or cancels. A
//! cancel releases the caller with no output.
//!
//! # Keybindings
//!
//! Closed:
//! - `Enter`/`Space`: open the list
//! - `q`/`Esc`: hide the pane
//!
//! Open:
//! - `Down`/`Ctrl+n`, `Up`/`Ctrl+p`: move
//! - `Enter`: choose
//! - `Esc`: cancel
//! - `Backspace` and any other character edit the search query

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use zellij_tile::prelude::*;

use dialpick::{handle_event, Action, AppState, Config, Event, SelectionNotice};

register_plugin!(State);

/// Name `zellij pipe` callers use to request a selection.
const PIPE_NAME: &str = "pick-country";

/// A blocked CLI pipe waiting for the next selection.
struct PendingPipe {
    id: String,
    json: bool,
}

struct State {
    app: AppState,
    pending_pipes: Vec<PendingPipe>,
}

impl Default for State {
    fn default() -> Self {
        Self {
            app: dialpick::initialize(&Config::default()),
            pending_pipes: Vec::new(),
        }
    }
}

impl ZellijPlugin for State {
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        dialpick::observability::init_tracing(&config);

        let _guard = tracing::debug_span!("plugin_load").entered();

        self.app = dialpick::initialize(&config);

        request_permission(&[
            PermissionType::ReadCliPipes,
            PermissionType::ChangeApplicationState,
        ]);
        subscribe(&[EventType::Key, EventType::PermissionRequestResult]);

        tracing::debug!(
            selected = ?config.selected_value,
            theme = %self.app.theme.name,
            "plugin load complete"
        );
    }

    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        match event {
            zellij_tile::prelude::Event::Key(key) => {
                let _guard = tracing::debug_span!("plugin_update", key = ?key.bare_key).entered();
                self.map_key_event(&key)
                    .is_some_and(|event| self.dispatch(&event))
            }
            zellij_tile::prelude::Event::PermissionRequestResult(status) => {
                if matches!(status, PermissionStatus::Denied) {
                    tracing::warn!("permissions denied - pipe requests and hiding unavailable");
                }
                false
            }
            _ => false,
        }
    }

    fn pipe(&mut self, pipe_message: PipeMessage) -> bool {
        let _guard = tracing::debug_span!("plugin_pipe", name = %pipe_message.name).entered();

        if pipe_message.name != PIPE_NAME {
            tracing::debug!("ignoring pipe message");
            return false;
        }

        match pipe_message.source {
            PipeSource::Cli(id) => {
                block_cli_pipe_input(&id);
                let json = pipe_message.args.get("format").is_some_and(|f| f == "json");
                tracing::debug!(pipe_id = %id, json, "cli pipe waiting for selection");
                self.pending_pipes.push(PendingPipe { id, json });
            }
            _ => tracing::debug!("non-cli pipe request, no reply channel"),
        }

        self.dispatch(&Event::PipeRequest)
    }

    fn render(&mut self, rows: usize, cols: usize) {
        dialpick::ui::render(&self.app, rows, cols);
    }
}

impl State {
    /// Runs `event` through the library and executes the resulting actions.
    fn dispatch(&mut self, event: &Event) -> bool {
        match handle_event(&mut self.app, event) {
            Ok((should_render, actions)) => {
                for action in &actions {
                    self.execute_action(action);
                }
                should_render
            }
            Err(e) => {
                tracing::warn!(error = %e, "error handling event");
                false
            }
        }
    }

    fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
        if key.has_modifiers(&[KeyModifier::Ctrl]) {
            return match key.bare_key {
                BareKey::Char('n') => Some(Event::KeyDown),
                BareKey::Char('p') => Some(Event::KeyUp),
                _ => None,
            };
        }

        if !self.app.picker_state().is_open() {
            return match key.bare_key {
                BareKey::Enter | BareKey::Char(' ') => Some(Event::Open),
                BareKey::Char('q') | BareKey::Esc => Some(Event::CloseFocus),
                _ => None,
            };
        }

        Some(match key.bare_key {
            BareKey::Down => Event::KeyDown,
            BareKey::Up => Event::KeyUp,
            BareKey::Enter => Event::Choose,
            BareKey::Esc => Event::Dismiss,
            BareKey::Backspace => Event::Backspace,
            BareKey::Char(c) => Event::Char(c),
            _ => return None,
        })
    }

    fn execute_action(&mut self, action: &Action) {
        tracing::debug!(action = ?action, "executing action");

        match action {
            Action::CloseFocus => hide_self(),
            Action::ShowSelf => show_self(true),
            Action::NotifySelection(notice) => self.reply_to_pipes(notice),
            Action::ReleasePipes => self.release_pipes(),
        }
    }

    fn reply_to_pipes(&mut self, notice: &SelectionNotice) {
        for pipe in self.pending_pipes.drain(..) {
            let line = if pipe.json {
                match notice.to_json() {
                    Ok(json) => json,
                    Err(e) => {
                        tracing::warn!(error = %e, "failed to encode selection, sending plain code");
                        notice.display.clone()
                    }
                }
            } else {
                notice.display.clone()
            };

            cli_pipe_output(&pipe.id, &format!("{line}\n"));
            unblock_cli_pipe_input(&pipe.id);
        }
    }

    fn release_pipes(&mut self) {
        for pipe in self.pending_pipes.drain(..) {
            tracing::debug!(pipe_id = %pipe.id, "releasing pipe without selection");
            unblock_cli_pipe_input(&pipe.id);
        }
    }
}
