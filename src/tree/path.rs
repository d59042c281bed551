//! Path canonicalization and segment utilities

use crate::error::StorageError;
use std::path::{Component, Path, PathBuf};
use unicode_normalization::UnicodeNormalization;

/// Canonicalize a directory path
///
/// Uses `dunce` so Windows paths do not come back in UNC form, then strips
/// trailing separators (except on the root).
pub fn canonicalize_path(path: &Path) -> Result<PathBuf, StorageError> {
    let canonical = dunce::canonicalize(path).map_err(|e| {
        StorageError::InvalidPath(format!(
            "Failed to canonicalize {}: {}",
            path.display(),
            e
        ))
    })?;

    // Non-UTF-8 paths are returned untouched rather than lossily rewritten
    let Some(path_str) = canonical.to_str() else {
        return Ok(canonical);
    };
    let mut path_str = path_str.to_string();
    if path_str.len() > 1 {
        while path_str.ends_with('/') || path_str.ends_with('\\') {
            path_str.pop();
        }
    }

    Ok(PathBuf::from(path_str))
}

/// Normalize a single path segment to NFC so tree keys compare equal
/// regardless of how the filesystem reports composed characters.
pub fn normalize_segment(segment: &str) -> String {
    segment.nfc().collect()
}

/// Split a relative path into normalized segments
///
/// Fails on absolute paths, on `..` and on non-UTF-8 names; `.` components
/// are dropped.
pub fn segments(relative: &Path) -> Result<Vec<String>, StorageError> {
    let mut out = Vec::new();
    for component in relative.components() {
        match component {
            Component::Normal(name) => {
                // Lossy conversion could merge two distinct names into one key
                let name = name.to_str().ok_or_else(|| {
                    StorageError::InvalidPath(format!(
                        "Non-UTF-8 segment in {}",
                        relative.display()
                    ))
                })?;
                out.push(normalize_segment(name));
            }
            Component::CurDir => {}
            other => {
                return Err(StorageError::InvalidPath(format!(
                    "Unexpected component {:?} in relative path {}",
                    other,
                    relative.display()
                )))
            }
        }
    }
    Ok(out)
}

/// Segments of `path` relative to `base`
pub fn relative_segments(path: &Path, base: &Path) -> Result<Vec<String>, StorageError> {
    let relative = path.strip_prefix(base).map_err(|_| {
        StorageError::InvalidPath(format!(
            "{} is not under {}",
            path.display(),
            base.display()
        ))
    })?;
    segments(relative)
}
