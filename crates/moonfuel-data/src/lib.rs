//! Run configuration and puzzle input loading.
//!
//! A run config is an optional RON, TOML, or JSON file (format picked from
//! the extension) holding settings for both solvers. Every field has a
//! default, so an empty file is a valid config.

pub mod config;
pub mod loader;

pub use config::{MoonsConfig, ReactionsConfig, RunConfig, load_config};
pub use loader::{ConfigError, Format, deserialize_file, detect_format, read_input};
