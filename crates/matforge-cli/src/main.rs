//! matforge - Source-engine PBR material converter
//!
//! Converts folders of PBR source images (diffuse, roughness, metallic, AO,
//! normal) into Source-engine VMT material descriptions plus compiled VTF
//! textures, packing metallic/roughness/AO into one MRAO texture along the
//! way.

use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use std::process::ExitCode;

use matforge_cli::commands;

/// matforge - PBR source textures to Source-engine materials
#[derive(Parser)]
#[command(name = "matforge")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert an input tree of material folders into VMT + VTF files
    Convert {
        /// Input root, one subdirectory per material
        #[arg(short, long, default_value = "input")]
        input: PathBuf,

        /// Output root for material descriptions and compiled textures
        #[arg(short, long, default_value = "output")]
        output: PathBuf,

        /// Path to the VTFCmd executable (overrides discovery)
        #[arg(long)]
        vtfcmd: Option<PathBuf>,

        /// VTF format version passed to VTFCmd
        #[arg(long, default_value = matforge_vtf::DEFAULT_VTF_VERSION)]
        vtf_version: String,

        /// Compression format for the packed MRAO texture
        #[arg(long, default_value = "dxt1")]
        mrao_format: String,

        /// Timeout per VTFCmd invocation, in seconds
        #[arg(long, default_value_t = matforge_vtf::DEFAULT_TIMEOUT_SECS)]
        timeout_secs: u64,

        /// JSON file overriding the filename-to-role tables
        #[arg(long)]
        roles: Option<PathBuf>,
    },

    /// Print the effective filename-to-role tables as JSON
    Roles {
        /// JSON file overriding the filename-to-role tables
        #[arg(long)]
        roles: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Convert {
            input,
            output,
            vtfcmd,
            vtf_version,
            mrao_format,
            timeout_secs,
            roles,
        } => commands::convert::run(&commands::convert::ConvertOptions {
            input,
            output,
            vtfcmd,
            vtf_version,
            mrao_format,
            timeout_secs,
            roles,
        }),
        Commands::Roles { roles } => commands::roles::run(roles.as_deref()),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{} {:#}", "ERROR".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}
