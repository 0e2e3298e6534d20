//! Executable discovery shared by the config layer and binaries.
//!
//! Centralizes the executable check and PATH search so the default profiler
//! location is resolved the same way everywhere.

use std::env;
use std::path::{Path, PathBuf};

/// Absolute location `system_profiler` ships at on macOS.
pub const SYSTEM_PROFILER_PATH: &str = "/usr/sbin/system_profiler";

/// Bare program name used when nothing better is found.
pub const SYSTEM_PROFILER_NAME: &str = "system_profiler";

/// Returns true when a file exists and has any execute bit set.
pub fn is_executable(path: &Path) -> bool {
    if !path.is_file() {
        return false;
    }
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        if let Ok(meta) = std::fs::metadata(path) {
            return meta.permissions().mode() & 0o111 != 0;
        }
        false
    }
    #[cfg(not(unix))]
    {
        true
    }
}

/// Find an executable by name somewhere on PATH.
pub fn find_on_path(name: &str) -> Option<PathBuf> {
    let paths = env::var_os("PATH")?;
    for dir in env::split_paths(&paths) {
        let candidate = dir.join(name);
        if is_executable(&candidate) {
            return Some(candidate);
        }
    }
    None
}

/// Resolve the profiler executable.
///
/// Search order: the build-time `SYSPROFILER_BIN_HINT`, the stock macOS
/// location, then PATH. Falls back to the bare name so spawning reports a
/// launch failure instead of this function erroring.
pub fn default_profiler_program() -> PathBuf {
    if let Some(hint) = option_env!("SYSPROFILER_BIN_HINT") {
        let hinted = PathBuf::from(hint);
        if is_executable(&hinted) {
            return hinted;
        }
    }

    let stock = PathBuf::from(SYSTEM_PROFILER_PATH);
    if is_executable(&stock) {
        return stock;
    }

    find_on_path(SYSTEM_PROFILER_NAME).unwrap_or_else(|| PathBuf::from(SYSTEM_PROFILER_NAME))
}
