//! VTFCmd subprocess orchestrator.
//!
//! Spawns VTFCmd to compile one source image into an engine-native `.vtf`
//! texture. VTFCmd names its output after the source file with the extension
//! replaced, so callers rename the result into the convention their material
//! description references.

use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::{Child, Command, ExitStatus, Stdio};
use std::time::{Duration, Instant};

use crate::error::{VtfError, VtfResult};

/// Default timeout for one VTFCmd invocation (2 minutes).
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Default VTF format version understood by current Source branches.
pub const DEFAULT_VTF_VERSION: &str = "7.4";

/// Extension of compiled texture files.
pub const COMPILED_EXTENSION: &str = "vtf";

/// Configuration for the VTF compiler.
#[derive(Debug, Clone)]
pub struct CompilerConfig {
    /// Path to the VTFCmd executable.
    pub vtfcmd_path: Option<PathBuf>,
    /// VTF format version passed to `-version`.
    pub vtf_version: String,
    /// Timeout for one VTFCmd invocation.
    pub timeout: Duration,
    /// Whether to capture VTFCmd's stderr for error reporting.
    pub capture_output: bool,
}

impl Default for CompilerConfig {
    fn default() -> Self {
        Self {
            vtfcmd_path: None,
            vtf_version: DEFAULT_VTF_VERSION.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            capture_output: true,
        }
    }
}

impl CompilerConfig {
    /// Sets the VTFCmd executable path.
    pub fn vtfcmd_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.vtfcmd_path = Some(path.into());
        self
    }

    /// Sets the VTF format version.
    pub fn vtf_version(mut self, version: impl Into<String>) -> Self {
        self.vtf_version = version.into();
        self
    }

    /// Sets the timeout duration.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the timeout in seconds.
    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.timeout = Duration::from_secs(secs);
        self
    }
}

/// The VTFCmd subprocess compiler.
pub struct VtfCompiler {
    config: CompilerConfig,
}

impl VtfCompiler {
    /// Creates a new compiler with default configuration.
    pub fn new() -> Self {
        Self {
            config: CompilerConfig::default(),
        }
    }

    /// Creates a new compiler with the given configuration.
    pub fn with_config(config: CompilerConfig) -> Self {
        Self { config }
    }

    /// Finds the VTFCmd executable path.
    fn find_vtfcmd(&self) -> VtfResult<PathBuf> {
        // Check config override first
        if let Some(ref path) = self.config.vtfcmd_path {
            if path.exists() {
                return Ok(path.clone());
            }
        }

        // Check VTFCMD_PATH environment variable
        if let Ok(path) = std::env::var("VTFCMD_PATH") {
            let path = PathBuf::from(path);
            if path.exists() {
                return Ok(path);
            }
        }

        // Try to find VTFCmd in PATH
        let vtfcmd_names = if cfg!(windows) {
            vec!["VTFCmd.exe", "vtfcmd"]
        } else {
            vec!["vtfcmd", "VTFCmd.exe"]
        };

        for name in vtfcmd_names {
            if let Ok(path) = which::which(name) {
                return Ok(path);
            }
        }

        // Conventional tool drop next to the converter
        let bundled = PathBuf::from("bin/VTFCmd.exe");
        if bundled.exists() {
            return Ok(bundled);
        }

        Err(VtfError::CompilerNotFound)
    }

    /// Compiles one source image into `out_dir`.
    ///
    /// Invokes `VTFCmd -file <source> -output <out_dir> -version <v>` plus
    /// `-format <f>` when a compression format is requested, blocks until
    /// the process exits or the timeout expires, and verifies the compiled
    /// `<stem>.vtf` exists. Returns the compiled file's path.
    pub fn compile(
        &self,
        source: &Path,
        out_dir: &Path,
        format: Option<&str>,
    ) -> VtfResult<PathBuf> {
        let vtfcmd_path = self.find_vtfcmd()?;

        let stem = source
            .file_stem()
            .ok_or_else(|| VtfError::InvalidSourcePath {
                path: source.to_path_buf(),
            })?
            .to_os_string();

        std::fs::create_dir_all(out_dir)?;

        let mut cmd = Command::new(&vtfcmd_path);
        cmd.arg("-file")
            .arg(source)
            .arg("-output")
            .arg(out_dir)
            .arg("-version")
            .arg(&self.config.vtf_version);
        if let Some(format) = format {
            cmd.arg("-format").arg(format);
        }

        if self.config.capture_output {
            // Only stderr is surfaced; keep stdout unpiped so a filled pipe
            // cannot deadlock the subprocess.
            cmd.stdout(Stdio::null()).stderr(Stdio::piped());
        }

        let child = cmd.spawn().map_err(VtfError::SpawnFailed)?;

        let (status, stderr) = wait_with_timeout(child, self.config.timeout)?;

        if !status.success() {
            let exit_code = status.code().unwrap_or(-1);
            return Err(VtfError::compiler_failed(exit_code, stderr));
        }

        let mut compiled = out_dir.join(stem);
        compiled.set_extension(COMPILED_EXTENSION);
        if !compiled.exists() {
            return Err(VtfError::OutputMissing { path: compiled });
        }

        Ok(compiled)
    }

    /// Compiles one source image and renames the result to
    /// `out_dir/<final_stem>.vtf`.
    ///
    /// The compiled file only appears under the final name after a fully
    /// successful run; a failed compile leaves nothing behind under it.
    pub fn compile_as(
        &self,
        source: &Path,
        out_dir: &Path,
        format: Option<&str>,
        final_stem: &str,
    ) -> VtfResult<PathBuf> {
        let compiled = self.compile(source, out_dir, format)?;
        let target = out_dir.join(format!("{}.{}", final_stem, COMPILED_EXTENSION));
        std::fs::rename(&compiled, &target)?;
        Ok(target)
    }
}

impl Default for VtfCompiler {
    fn default() -> Self {
        Self::new()
    }
}

fn wait_with_timeout(mut child: Child, timeout: Duration) -> VtfResult<(ExitStatus, String)> {
    // Drain stderr on a reader thread while polling, so a chatty compiler
    // cannot fill the pipe and stall until the timeout kills it.
    let stderr_reader = child.stderr.take().map(|mut err| {
        std::thread::spawn(move || {
            let mut buf = String::new();
            let _ = err.read_to_string(&mut buf);
            buf
        })
    });

    let start = Instant::now();

    let status = loop {
        match child.try_wait() {
            Ok(Some(status)) => break status,
            Ok(None) => {
                if start.elapsed() > timeout {
                    let _ = child.kill();
                    let _ = child.wait();
                    return Err(VtfError::Timeout {
                        timeout_secs: timeout.as_secs(),
                    });
                }
                std::thread::sleep(Duration::from_millis(50));
            }
            Err(e) => return Err(VtfError::SpawnFailed(e)),
        }
    };

    let stderr = match stderr_reader {
        Some(handle) => handle.join().unwrap_or_default(),
        None => String::new(),
    };

    Ok((status, stderr))
}
