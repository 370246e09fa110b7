//! Filesystem probes

use std::fs;

use log::debug;

/// Check that a path is a regular file whose metadata can be read.
///
/// Used before opening the observation database so a missing or mistyped
/// path is reported as such rather than as a driver error.
pub fn is_readable_file(path: &str) -> bool {
    match fs::metadata(path) {
        Ok(meta) => meta.is_file(),
        Err(e) => {
            debug!("cannot stat {}: {}", path, e);
            false
        }
    }
}
