//! File-system resource helpers.
use std::collections::HashSet;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::LinkError;

/// Kind of an entry found at a path, without following symlinks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// A real directory.
    Directory,
    /// A symbolic link (to anything, including nothing).
    Symlink,
    /// A regular file or any other non-directory entry.
    File,
}

/// Inspect `path` without following a final symlink.
///
/// Returns `Ok(None)` when nothing exists at `path`, including when a parent
/// component is a regular file.
///
/// # Errors
///
/// Returns an error if the metadata cannot be read for any other reason.
pub fn entry_kind(path: &Path) -> Result<Option<EntryKind>, LinkError> {
    match std::fs::symlink_metadata(path) {
        Ok(meta) if meta.file_type().is_symlink() => Ok(Some(EntryKind::Symlink)),
        Ok(meta) if meta.is_dir() => Ok(Some(EntryKind::Directory)),
        Ok(_) => Ok(Some(EntryKind::File)),
        Err(e) if matches!(e.kind(), io::ErrorKind::NotFound | io::ErrorKind::NotADirectory) => {
            Ok(None)
        }
        Err(e) => Err(LinkError::io(path, e)),
    }
}

/// Create `path` and any missing ancestors.
///
/// # Errors
///
/// Returns an error if the directory cannot be created.
pub fn ensure_dir(path: &Path) -> Result<(), LinkError> {
    std::fs::create_dir_all(path).map_err(|e| LinkError::io(path, e))
}

/// Create a symlink at `link` pointing to `target`.
///
/// # Errors
///
/// Returns an error if the link cannot be created.
pub fn create_symlink(target: &Path, link: &Path) -> Result<(), LinkError> {
    #[cfg(unix)]
    let result = std::os::unix::fs::symlink(target, link);

    #[cfg(windows)]
    let result = if target.is_dir() {
        std::os::windows::fs::symlink_dir(target, link)
    } else {
        std::os::windows::fs::symlink_file(target, link)
    };

    result.map_err(|e| LinkError::io(link, e))
}

/// Remove a symlink, handling platform differences.
///
/// On Windows, directory symlinks must be removed with `remove_dir` (not
/// `remove_file`), so the raw `FILE_ATTRIBUTE_DIRECTORY` flag decides.
///
/// # Errors
///
/// Returns an error if the link cannot be removed.
pub fn remove_symlink(path: &Path) -> Result<(), LinkError> {
    let meta = std::fs::symlink_metadata(path).map_err(|e| LinkError::io(path, e))?;
    let result = if is_dir_like(&meta) {
        std::fs::remove_dir(path)
    } else {
        std::fs::remove_file(path)
    };
    result.map_err(|e| LinkError::io(path, e))
}

/// Check if metadata represents a directory-like entry.
/// On Windows, `symlink_metadata().is_dir()` returns `false` for directory
/// symlinks, so we check the raw `FILE_ATTRIBUTE_DIRECTORY` bit instead.
fn is_dir_like(meta: &std::fs::Metadata) -> bool {
    #[cfg(windows)]
    {
        use std::os::windows::fs::MetadataExt;
        meta.file_attributes() & 0x10 != 0 // FILE_ATTRIBUTE_DIRECTORY
    }
    #[cfg(not(windows))]
    {
        meta.is_dir()
    }
}

/// Compare two paths for equality, handling UNC prefix normalization on Windows.
#[must_use]
pub fn paths_equal(a: &Path, b: &Path) -> bool {
    strip_win_prefix(a) == strip_win_prefix(b)
}

fn strip_win_prefix(p: &Path) -> PathBuf {
    let s = p.to_string_lossy();
    s.strip_prefix(r"\\?\")
        .map_or_else(|| p.to_path_buf(), PathBuf::from)
}

/// Whether `dir` holds nothing except entries listed in `gone`.
///
/// `gone` lets a dry run treat entries it would have removed as absent.
///
/// # Errors
///
/// Returns an error if the directory cannot be listed.
pub fn is_effectively_empty(dir: &Path, gone: &HashSet<PathBuf>) -> Result<bool, LinkError> {
    let entries = std::fs::read_dir(dir).map_err(|e| LinkError::io(dir, e))?;
    for entry in entries {
        let entry = entry.map_err(|e| LinkError::io(dir, e))?;
        if !gone.contains(&entry.path()) {
            return Ok(false);
        }
    }
    Ok(true)
}
