//! Source-to-target path translation.
//!
//! Hidden files are stored in the source tree as `dot-name` so they are
//! visible and never collide with ignore patterns aimed at dotfiles.  Every
//! path segment starting with `dot-` is rewritten to start with `.` instead.
use std::ffi::{OsStr, OsString};
use std::path::{Component, Path, PathBuf};

/// Segment prefix that stands for a literal leading dot.
pub const HIDDEN_PREFIX: &str = "dot-";

/// Maps application-relative source paths into the target root.
#[derive(Debug, Clone, Copy)]
pub struct PathTranslator<'a> {
    target_root: &'a Path,
}

impl<'a> PathTranslator<'a> {
    /// Create a translator projecting into `target_root`.
    #[must_use]
    pub const fn new(target_root: &'a Path) -> Self {
        Self { target_root }
    }

    /// Absolute target path for a path relative to the application root.
    #[must_use]
    pub fn to_target(&self, app_relative: &Path) -> PathBuf {
        self.target_root.join(to_target_relative(app_relative))
    }
}

/// Rewrite every `dot-` segment of `app_relative`.
#[must_use]
pub fn to_target_relative(app_relative: &Path) -> PathBuf {
    app_relative
        .components()
        .map(|component| match component {
            Component::Normal(segment) => translate_segment(segment),
            other => other.as_os_str().to_os_string(),
        })
        .collect()
}

/// `dot-bashrc` becomes `.bashrc`; anything else is returned unchanged.
///
/// Segments that are not valid UTF-8 are never rewritten.
#[must_use]
pub fn translate_segment(segment: &OsStr) -> OsString {
    segment
        .to_str()
        .and_then(|s| s.strip_prefix(HIDDEN_PREFIX))
        .map_or_else(
            || segment.to_os_string(),
            |rest| OsString::from(format!(".{rest}")),
        )
}
