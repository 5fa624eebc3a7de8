// Path resolution utilities
// Input paths are resolved to canonical absolute form exactly once,
// before digesting

use std::fs;
use std::path::{Path, PathBuf};

use super::error::CheckHashError;

/// Resolve an input path to a canonical absolute path, following symlinks
///
/// A path that does not point at an existing, reachable file fails with
/// a FileNotFound or PermissionDenied error carrying the offending path.
pub fn resolve_input_path(path: &Path) -> Result<PathBuf, CheckHashError> {
    fs::canonicalize(path)
        .map_err(|e| CheckHashError::from_io_error(e, "resolving", Some(path.to_path_buf())))
}
