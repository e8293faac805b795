//file-level operations behind the CLI commands:
//validate the source path, read it, translate it, and write or run the result

use crate::config::{is_source_path, output_path_for, SOURCE_EXTENSIONS};
use crate::pipeline::{CompileError, Stage, transpile_observed};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};
use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Error)]
pub enum DriverError {
    #[error("[ERR-CLI-001] Input file must have a .{} extension: {}", SOURCE_EXTENSIONS.join(" or ."), .path.display())]
    UnsupportedExtension { path: PathBuf },
    #[error("[ERR-CLI-002] Cannot read {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error(transparent)]
    Compile(#[from] CompileError),
    #[error("[ERR-CLI-003] Cannot write {}: {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },
    #[error("[ERR-CLI-004] Cannot start runtime `{runtime}`: {source}")]
    RuntimeSpawn { runtime: String, source: io::Error },
    #[error("[ERR-CLI-004] Cannot pass the script to runtime `{runtime}`: {source}")]
    RuntimeInput { runtime: String, source: io::Error },
    #[error("[ERR-CLI-005] Runtime `{runtime}` exited with {status}")]
    RuntimeFailed { runtime: String, status: ExitStatus },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildReport {
    pub output: PathBuf,
    pub bytes: usize,
}

pub fn read_source(path: &Path) -> Result<String, DriverError> {
    if !is_source_path(path) {
        return Err(DriverError::UnsupportedExtension {
            path: path.to_path_buf(),
        });
    }
    fs::read_to_string(path).map_err(|source| DriverError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Translates `input` and writes the script. The output file is only touched
/// once the whole pipeline has succeeded.
pub fn build_file(
    input: &Path,
    output: Option<&Path>,
    observer: impl FnMut(Stage),
) -> Result<BuildReport, DriverError> {
    let source = read_source(input)?;
    let script = transpile_observed(&source, observer)?;

    let output = output.map_or_else(|| output_path_for(input), Path::to_path_buf);
    fs::write(&output, &script).map_err(|source| DriverError::Write {
        path: output.clone(),
        source,
    })?;
    info!(input = %input.display(), output = %output.display(), bytes = script.len(), "wrote script");

    Ok(BuildReport {
        output,
        bytes: script.len(),
    })
}

/// Pipes a generated script into `runtime` on stdin; the runtime's own
/// stdout and stderr go straight to ours. The child is always waited on, and a
/// failing exit status outranks a broken stdin pipe.
pub fn run_script(script: &str, runtime: &str) -> Result<(), DriverError> {
    debug!(runtime, bytes = script.len(), "starting script runtime");
    let mut child = Command::new(runtime)
        .stdin(Stdio::piped())
        .spawn()
        .map_err(|source| DriverError::RuntimeSpawn {
            runtime: runtime.to_string(),
            source,
        })?;

    // stdin is dropped before the wait so the runtime sees EOF
    let written = match child.stdin.take() {
        Some(mut stdin) => stdin.write_all(script.as_bytes()),
        None => Ok(()),
    };
    let status = child.wait().map_err(|source| DriverError::RuntimeSpawn {
        runtime: runtime.to_string(),
        source,
    })?;

    if !status.success() {
        return Err(DriverError::RuntimeFailed {
            runtime: runtime.to_string(),
            status,
        });
    }
    written.map_err(|source| DriverError::RuntimeInput {
        runtime: runtime.to_string(),
        source,
    })
}
