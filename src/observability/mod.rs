//! Tracing for the plugin, exported to disk as OTLP/JSON.
//!
//! ```text
//! tracing macros → tracing-opentelemetry → SDK (simple processor) → FileSpanExporter
//!                                                                  → RotatingFile
//! ```
//!
//! Spans are written to `~/.local/share/zellij/dialpick/dialpick-otlp.json`.
//! The file rotates past 5 MB and the two newest backups are kept.
//!
//! The filter comes from the `trace_level` plugin option and defaults to
//! `"info"`. Any `EnvFilter` directive is accepted.

mod exporter;
mod init;
mod otlp;
mod rotating;

pub use init::init_tracing;
