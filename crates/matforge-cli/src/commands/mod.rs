//! Command implementations for the matforge CLI.

pub mod convert;
pub mod roles;

use anyhow::{Context, Result};
use matforge_material::RoleNameTables;
use std::path::Path;

/// Loads the role-name tables, merging a JSON override file over the
/// defaults when one is given.
pub(crate) fn load_tables(path: Option<&Path>) -> Result<RoleNameTables> {
    match path {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read role tables from {}", path.display()))?;
            serde_json::from_str(&json)
                .with_context(|| format!("Failed to parse role tables in {}", path.display()))
        }
        None => Ok(RoleNameTables::default()),
    }
}
