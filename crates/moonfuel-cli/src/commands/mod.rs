//! Subcommand implementations.
//!
//! Each submodule merges its flags over the loaded config, solves, and
//! renders either plain text or JSON.

pub mod moons;
pub mod reactions;
