//! VMT material description emission.
//!
//! Emits the Source-engine PBR shader block referencing the three compiled
//! texture names (`_basecolor`, `_bump`, `_mrao`). The layout byte-matches
//! what the engine's loader expects, so rendering is kept separate from any
//! pretty-printing concerns.

use std::path::{Path, PathBuf};

use crate::error::MaterialResult;

/// File extension of material description files.
pub const VMT_EXTENSION: &str = "vmt";

/// Renders the VMT block for a material.
///
/// Pure string rendering; [`write_vmt`] handles file placement.
pub fn render_vmt(material_name: &str) -> String {
    format!(
        "PBR\n{{\n\t$basetexture               \"{name}_basecolor\"\n\t$bumpmap                   \"{name}_bump\"\n\t$mraotexture               \"{name}_mrao\"\n}}",
        name = material_name
    )
}

/// Writes `output_root/<name>/<name>.vmt`, creating parent directories.
///
/// Overwrites any existing file, so reruns are idempotent. The content goes
/// to a sibling temp name first and is renamed into place, so an interrupted
/// write never leaves a truncated file under the final name. Returns the
/// path of the written file.
pub fn write_vmt(material_name: &str, output_root: &Path) -> MaterialResult<PathBuf> {
    let path = output_root
        .join(material_name)
        .join(format!("{}.{}", material_name, VMT_EXTENSION));
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let staging = path.with_extension(format!("{}.tmp", VMT_EXTENSION));
    std::fs::write(&staging, render_vmt(material_name))?;
    std::fs::rename(&staging, &path)?;
    Ok(path)
}
