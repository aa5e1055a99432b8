//! Infrastructure layer for sandbox filesystem paths.

pub mod paths;

pub use paths::{expand_tilde, get_data_dir};
