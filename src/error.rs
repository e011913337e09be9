//! Domain-specific error types for the linking engine.
//!
//! Internal modules return typed errors ([`ConfigError`], [`LinkError`])
//! while command handlers at the CLI boundary convert them to
//! [`anyhow::Error`] via the standard `?` operator.
//!
//! # Error hierarchy
//!
//! ```text
//! LinkError
//! ├── Config(ConfigError) - missing or malformed `.gldnrc.yml`
//! ├── TargetPathInvalid   - target root unusable
//! ├── InvalidAppName      - name is not a single directory name
//! ├── AppNotFound         - no such application directory
//! ├── TypeMismatch        - source/target kind conflict
//! ├── BadSymlink          - target symlink points elsewhere
//! └── Io                  - unexpected filesystem failure
//! ```

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors that arise from loading the root or per-application configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The root configuration file does not exist.
    #[error("configuration file not found: {}", .path.display())]
    Missing {
        /// Expected location of the file.
        path: PathBuf,
    },

    /// The configuration file exists but is unusable (bad YAML, missing
    /// `target`, invalid glob pattern).
    #[error("invalid configuration in {}: {reason}", .path.display())]
    Invalid {
        /// Path to the offending file.
        path: PathBuf,
        /// Human-readable reason.
        reason: String,
    },

    /// An I/O error occurred while reading a configuration file.
    #[error("IO error reading config file {}: {source}", .path.display())]
    Io {
        /// Path to the file that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
}

impl ConfigError {
    /// Build an [`Invalid`](Self::Invalid) error for `path`.
    #[must_use]
    pub fn invalid(path: &Path, reason: impl Into<String>) -> Self {
        Self::Invalid {
            path: path.to_path_buf(),
            reason: reason.into(),
        }
    }
}

/// Errors that abort a link, unlink, or relink of a single application.
#[derive(Error, Debug)]
pub enum LinkError {
    /// The application's configuration could not be resolved.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The target root exists as a non-directory or could not be created.
    #[error("invalid target path {}: {reason}", .path.display())]
    TargetPathInvalid {
        /// The target root.
        path: PathBuf,
        /// Human-readable reason.
        reason: String,
    },

    /// The application name is not a single plain path component, so it
    /// cannot name a subdirectory of the source root.
    #[error("invalid application name '{app}': expected a single directory name")]
    InvalidAppName {
        /// Application name as given by the caller.
        app: String,
    },

    /// The application has no directory under the source root.
    #[error("application '{app}' not found in {}", .path.display())]
    AppNotFound {
        /// Application name as given by the caller.
        app: String,
        /// Directory that was expected to exist.
        path: PathBuf,
    },

    /// A source node's kind conflicts with the entry already at its target.
    #[error("type mismatch at {}: {detail}", .target.display())]
    TypeMismatch {
        /// Absolute path of the source node.
        source_path: PathBuf,
        /// Absolute path of the conflicting target entry.
        target: PathBuf,
        /// Which way round the conflict is.
        detail: String,
    },

    /// An existing target symlink does not point at the expected source.
    #[error(
        "bad symlink at {}: points to {}, expected {}",
        .target.display(),
        .actual.display(),
        .expected.display()
    )]
    BadSymlink {
        /// Absolute path of the symlink.
        target: PathBuf,
        /// Where the symlink currently points.
        actual: PathBuf,
        /// Where it should point.
        expected: PathBuf,
    },

    /// An unexpected filesystem failure.
    #[error("IO error at {}: {source}", .path.display())]
    Io {
        /// Path the failing operation was applied to.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
}

impl LinkError {
    /// Wrap an I/O error that occurred while operating on `path`.
    #[must_use]
    pub fn io(path: &Path, source: io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Whether this error is a conflict between the source tree and an
    /// existing target entry.
    #[must_use]
    pub const fn is_conflict(&self) -> bool {
        matches!(self, Self::TypeMismatch { .. } | Self::BadSymlink { .. })
    }
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn config_missing_display() {
        let e = ConfigError::Missing {
            path: PathBuf::from("/dots/.gldnrc.yml"),
        };
        assert_eq!(
            e.to_string(),
            "configuration file not found: /dots/.gldnrc.yml"
        );
    }

    #[test]
    fn config_invalid_display() {
        let e = ConfigError::invalid(Path::new("/dots/.gldnrc.yml"), "missing 'target'");
        assert_eq!(
            e.to_string(),
            "invalid configuration in /dots/.gldnrc.yml: missing 'target'"
        );
    }

    #[test]
    fn config_io_has_source() {
        use std::error::Error as StdError;
        let e = ConfigError::Io {
            path: PathBuf::from("/dots/.gldnrc.yml"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"),
        };
        assert!(e.source().is_some());
        assert!(e.to_string().contains("IO error reading config file"));
    }

    #[test]
    fn type_mismatch_display() {
        let e = LinkError::TypeMismatch {
            source_path: PathBuf::from("/dots/nvim/lua"),
            target: PathBuf::from("/home/u/.config/nvim/lua"),
            detail: "directory in source, file/link in target".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "type mismatch at /home/u/.config/nvim/lua: directory in source, file/link in target"
        );
        assert!(e.is_conflict());
    }

    #[test]
    fn bad_symlink_reports_actual_and_expected() {
        let e = LinkError::BadSymlink {
            target: PathBuf::from("/t/init.vim"),
            actual: PathBuf::from("/elsewhere"),
            expected: PathBuf::from("/dots/nvim/init.vim"),
        };
        let msg = e.to_string();
        assert!(msg.contains("/elsewhere"), "actual missing from: {msg}");
        assert!(msg.contains("/dots/nvim/init.vim"), "expected missing from: {msg}");
        assert!(e.is_conflict());
    }

    #[test]
    fn config_error_is_transparent_inside_link_error() {
        let e: LinkError = ConfigError::invalid(Path::new("/a"), "bad").into();
        assert_eq!(e.to_string(), "invalid configuration in /a: bad");
        assert!(!e.is_conflict());
    }

    #[test]
    fn io_error_has_source() {
        use std::error::Error as StdError;
        let e = LinkError::io(
            Path::new("/t"),
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(e.source().is_some());
    }

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn all_error_types_are_send_sync() {
        assert_send_sync::<ConfigError>();
        assert_send_sync::<LinkError>();
    }

    #[test]
    fn link_error_converts_to_anyhow() {
        let e = LinkError::AppNotFound {
            app: "nvim".to_string(),
            path: PathBuf::from("/dots/nvim"),
        };
        let _anyhow_err: anyhow::Error = e.into();
    }
}
