//! matforge CLI library.
//!
//! The binary in `main.rs` is a thin clap wrapper; the command
//! implementations and the conversion pipeline live here so they stay
//! testable without spawning the binary.

pub mod commands;
pub mod pipeline;
