//! Error types for the VTF backend.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for VTF backend operations.
pub type VtfResult<T> = Result<T, VtfError>;

/// Errors that can occur while compiling textures through VTFCmd.
#[derive(Debug, Error)]
pub enum VtfError {
    /// VTFCmd executable not found.
    #[error("VTFCmd executable not found. Ensure VTFCmd is installed and in PATH, or set the VTFCMD_PATH environment variable")]
    CompilerNotFound,

    /// Failed to spawn the VTFCmd process.
    #[error("Failed to spawn VTFCmd process: {0}")]
    SpawnFailed(#[source] std::io::Error),

    /// VTFCmd process timed out.
    #[error("VTFCmd process timed out after {timeout_secs} seconds")]
    Timeout { timeout_secs: u64 },

    /// VTFCmd exited with non-zero status.
    #[error("VTFCmd exited with status {exit_code}: {stderr}")]
    CompilerFailed { exit_code: i32, stderr: String },

    /// Source path has no usable file stem.
    #[error("Source image path has no file stem: {path}")]
    InvalidSourcePath { path: PathBuf },

    /// Compiled texture not found after a successful-looking run.
    #[error("Expected compiled texture not found: {path}")]
    OutputMissing { path: PathBuf },

    /// IO error during file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl VtfError {
    /// Creates a new compiler failed error.
    pub fn compiler_failed(exit_code: i32, stderr: impl Into<String>) -> Self {
        Self::CompilerFailed {
            exit_code,
            stderr: stderr.into(),
        }
    }
}
