//! Shelter CLI - Library half of the `shelter` binary
//!
//! Commands and the interactive mode live here so they can be tested
//! without spawning the binary.

pub mod args;
pub mod commands;
pub mod interactive;
pub mod session;
