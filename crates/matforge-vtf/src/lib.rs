//! matforge VTF backend
//!
//! Compiles source images into engine-native `.vtf` textures by driving the
//! external VTFCmd tool as a subprocess.
//!
//! # Overview
//!
//! VTFCmd is invoked once per texture:
//!
//! ```text
//! VTFCmd -file <source> -output <dir> -version 7.4 [-format dxt1]
//! ```
//!
//! It writes one compiled file named after the source with the extension
//! replaced by `.vtf`. The orchestrator checks the exit status, bounds the
//! run with a timeout, verifies the output file exists, and (via
//! [`VtfCompiler::compile_as`]) renames it into the caller's naming
//! convention.
//!
//! The executable is located through, in order: an explicit config path, the
//! `VTFCMD_PATH` environment variable, the system `PATH`, and the
//! conventional `bin/VTFCmd.exe` drop next to the converter.

pub mod compiler;
pub mod error;

pub use compiler::{
    CompilerConfig, VtfCompiler, COMPILED_EXTENSION, DEFAULT_TIMEOUT_SECS, DEFAULT_VTF_VERSION,
};
pub use error::{VtfError, VtfResult};
