//! Domain layer: the country table and error types.
//!
//! Nothing here depends on Zellij or on the rendering layer.
//!
//! - [`country`]: the `CountryRecord` type
//! - [`dataset`]: the compiled-in table and its initial ordering
//! - [`error`]: error types and result alias
//!
//! # Examples
//!
//! ```
//! use dialpick::domain::dataset;
//!
//! let countries = dataset::get_all();
//! assert!(countries.iter().any(|c| c.id == "us" && c.code == "1"));
//! ```

pub mod country;
pub mod dataset;
pub mod error;

pub use country::{format_dial_code, CountryRecord};
pub use error::{DialpickError, Result};
