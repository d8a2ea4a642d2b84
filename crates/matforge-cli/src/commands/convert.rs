//! Convert command implementation.
//!
//! Runs the full batch: assemble materials from the input tree, write every
//! VMT description, then compile each material's textures. A material that
//! fails to compile is reported and skipped; the batch keeps going and the
//! process exits non-zero at the end.

use anyhow::Result;
use colored::Colorize;
use matforge_material::assemble;
use matforge_vtf::{CompilerConfig, VtfCompiler};
use std::path::PathBuf;
use std::process::ExitCode;

use crate::pipeline::{compile_material, write_descriptions};

/// Options for the convert command.
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    /// Input root, one subdirectory per material.
    pub input: PathBuf,
    /// Output root for VMT and compiled VTF files.
    pub output: PathBuf,
    /// Explicit VTFCmd executable path.
    pub vtfcmd: Option<PathBuf>,
    /// VTF format version passed to the compiler.
    pub vtf_version: String,
    /// Compression format for the packed MRAO texture.
    pub mrao_format: String,
    /// Per-invocation compiler timeout in seconds.
    pub timeout_secs: u64,
    /// Optional JSON file overriding the role-name tables.
    pub roles: Option<PathBuf>,
}

/// Runs the convert command.
pub fn run(options: &ConvertOptions) -> Result<ExitCode> {
    let tables = super::load_tables(options.roles.as_deref())?;
    let materials = assemble(&options.input, &tables)?;

    if materials.is_empty() {
        println!(
            "{} no material folders found under {}",
            "INFO".yellow().bold(),
            options.input.display()
        );
        return Ok(ExitCode::SUCCESS);
    }

    println!(
        "Converting {} material(s) from {} to {}",
        materials.len(),
        options.input.display(),
        options.output.display()
    );

    write_descriptions(&materials, &options.output)?;

    let mut config = CompilerConfig::default()
        .vtf_version(options.vtf_version.clone())
        .timeout_secs(options.timeout_secs);
    if let Some(ref path) = options.vtfcmd {
        config = config.vtfcmd_path(path);
    }
    let compiler = VtfCompiler::with_config(config);

    let mut failures: Vec<(String, String)> = Vec::new();
    for material in materials.values() {
        match compile_material(material, &options.output, &compiler, &options.mrao_format) {
            Ok(()) => {
                println!("  {} {}", "OK".green(), material.name);
            }
            Err(e) => {
                println!("  {} {}: {}", "FAILED".red(), material.name, e);
                failures.push((material.name.clone(), e.to_string()));
            }
        }
    }

    println!();
    println!(
        "{} {}",
        "Converted:".green().bold(),
        materials.len() - failures.len()
    );
    println!("{} {}", "Failed:".red().bold(), failures.len());

    if failures.is_empty() {
        Ok(ExitCode::SUCCESS)
    } else {
        println!();
        println!("{}", "Failed materials:".red().bold());
        for (name, error) in &failures {
            println!("  {}: {}", name, error);
        }
        Ok(ExitCode::FAILURE)
    }
}
