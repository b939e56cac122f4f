//! Driver for friend recommendation: argument parsing and command execution.

pub mod args;
pub mod run;
