//! Roles command implementation.
//!
//! Prints the effective role-name tables as JSON, after applying any
//! override file. Useful when tuning the tables against a texture pack whose
//! naming scheme doesn't classify cleanly.

use anyhow::Result;
use std::path::Path;
use std::process::ExitCode;

/// Runs the roles command.
pub fn run(roles: Option<&Path>) -> Result<ExitCode> {
    let tables = super::load_tables(roles)?;
    println!("{}", serde_json::to_string_pretty(&tables)?);
    Ok(ExitCode::SUCCESS)
}
