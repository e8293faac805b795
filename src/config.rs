//fixed configuration: file extensions and the default script runtime

use std::path::{Path, PathBuf};

pub const SOURCE_EXTENSIONS: &[&str] = &["f90s", "f70s"];
pub const TARGET_EXTENSION: &str = "js";

pub const DEFAULT_RUNTIME: &str = "node";
pub const RUNTIME_ENV: &str = "FORTSCRIPT_RUNTIME";

pub fn is_source_path(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| SOURCE_EXTENSIONS.contains(&ext))
}

/// Same directory and stem, target extension.
pub fn output_path_for(input: &Path) -> PathBuf {
    input.with_extension(TARGET_EXTENSION)
}
