//! Configuration loading.
//!
//! The root `.gldnrc.yml` names the target root and the ignore patterns
//! shared by every application; an optional `.gldnrc.yml` inside an
//! application adds to or replaces those patterns ([`app`], [`ignore`]).
pub mod app;
pub mod ignore;
pub mod yaml_loader;

use serde::{Deserialize, Serialize};
use std::path::{Component, Path, PathBuf};

use crate::error::{ConfigError, LinkError};

/// File name of both the root and the per-application configuration.
pub const CONFIG_FILE_NAME: &str = ".gldnrc.yml";

/// Environment variable supplying the target root when the root file has
/// no `target`.
pub const TARGET_ENV: &str = "GLDN_TARGET";

/// Target root written by `gldn init` when nothing else is specified.
pub const DEFAULT_TARGET: &str = "~/.config";

/// On-disk shape of `<source_root>/.gldnrc.yml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RootFile {
    /// Target root, possibly `~`-prefixed or relative to the source root.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    /// Patterns ignored for every application.
    #[serde(default)]
    pub ignore: Option<Vec<String>>,
}

/// Resolved, read-only configuration for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory holding one subdirectory per application.
    pub source_root: PathBuf,
    /// Directory links are projected into.
    pub target_root: PathBuf,
    /// Patterns applied to every application.
    pub root_ignore: Vec<String>,
}

impl Config {
    /// Build a configuration directly, bypassing the root file.
    #[must_use]
    pub const fn new(source_root: PathBuf, target_root: PathBuf, root_ignore: Vec<String>) -> Self {
        Self {
            source_root,
            target_root,
            root_ignore,
        }
    }

    /// Load `<source_root>/.gldnrc.yml`, falling back to `GLDN_TARGET` when
    /// the file has no `target`.
    ///
    /// # Errors
    ///
    /// See [`load_with_fallback_target`](Self::load_with_fallback_target).
    pub fn load(source_root: &Path) -> Result<Self, ConfigError> {
        let env_target = std::env::var(TARGET_ENV).ok();
        Self::load_with_fallback_target(source_root, env_target.as_deref())
    }

    /// Load `<source_root>/.gldnrc.yml`; a non-empty `fallback_target` is
    /// used only when the file has no `target`.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::Missing`] if the root file does not exist.
    /// - [`ConfigError::Invalid`] if it cannot be parsed or no target is
    ///   available from either the file or the fallback.
    pub fn load_with_fallback_target(
        source_root: &Path,
        fallback_target: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let path = source_root.join(CONFIG_FILE_NAME);
        let file: RootFile = yaml_loader::load_required(&path)?;

        let fallback = fallback_target
            .filter(|t| !t.trim().is_empty())
            .map(str::to_string);
        let target = file
            .target
            .filter(|t| !t.trim().is_empty())
            .or(fallback)
            .ok_or_else(|| ConfigError::invalid(&path, "missing required key 'target'"))?;

        Ok(Self {
            source_root: source_root.to_path_buf(),
            target_root: resolve_target(source_root, &target),
            root_ignore: file.ignore.unwrap_or_default(),
        })
    }

    /// Source directory of `app`, which need not exist.
    ///
    /// # Errors
    ///
    /// Returns [`LinkError::InvalidAppName`] unless `app` is exactly one
    /// plain path component: no `..`, root, nesting, or empty name.
    pub fn app_dir(&self, app: &str) -> Result<PathBuf, LinkError> {
        let mut components = Path::new(app).components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(name)), None) => Ok(self.source_root.join(name)),
            _ => Err(LinkError::InvalidAppName {
                app: app.to_string(),
            }),
        }
    }

    /// Source directory of `app`, which must exist.
    ///
    /// # Errors
    ///
    /// - [`LinkError::InvalidAppName`] as for [`app_dir`](Self::app_dir).
    /// - [`LinkError::AppNotFound`] if the directory does not exist.
    pub fn existing_app_dir(&self, app: &str) -> Result<PathBuf, LinkError> {
        let path = self.app_dir(app)?;
        if !path.is_dir() {
            return Err(LinkError::AppNotFound {
                app: app.to_string(),
                path,
            });
        }
        Ok(path)
    }

    /// Names of every application directory under the source root, sorted.
    ///
    /// Hidden directories are skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if the source root cannot be read.
    pub fn applications(&self) -> std::io::Result<Vec<String>> {
        let mut apps = Vec::new();
        for entry in std::fs::read_dir(&self.source_root)? {
            let entry = entry?;
            let name = entry.file_name().to_string_lossy().into_owned();
            if !name.starts_with('.') && entry.file_type()?.is_dir() {
                apps.push(name);
            }
        }
        apps.sort();
        Ok(apps)
    }
}

/// Expand a leading `~` against `$HOME` and anchor relative paths at
/// `source_root`.
#[must_use]
pub fn resolve_target(source_root: &Path, target: &str) -> PathBuf {
    let expanded = expand_tilde(target);
    if expanded.is_absolute() {
        expanded
    } else {
        source_root.join(expanded)
    }
}

/// Replace a leading `~` or `~/` with the user's home directory.
///
/// Paths are returned unchanged when no home directory is known.
#[must_use]
pub fn expand_tilde(path: &str) -> PathBuf {
    let Ok(home) = std::env::var("HOME").or_else(|_| std::env::var("USERPROFILE")) else {
        return PathBuf::from(path);
    };
    if path == "~" {
        return PathBuf::from(home);
    }
    path.strip_prefix("~/")
        .map_or_else(|| PathBuf::from(path), |rest| PathBuf::from(&home).join(rest))
}


#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::test_helpers::write_root_config;
    use super::*;

    #[test]
    fn load_reads_target_and_ignore() {
        let dir = tempfile::tempdir().unwrap();
        write_root_config(
            dir.path(),
            "target: /home/u/.config\nignore:\n  - '*.bak'\n  - README.md\n",
        );
        let config = Config::load_with_fallback_target(dir.path(), None).unwrap();
        assert_eq!(config.source_root, dir.path());
        assert_eq!(config.target_root, PathBuf::from("/home/u/.config"));
        assert_eq!(config.root_ignore, vec!["*.bak", "README.md"]);
    }

    #[test]
    fn missing_root_file_is_config_missing() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load_with_fallback_target(dir.path(), None).unwrap_err();
        assert!(matches!(err, ConfigError::Missing { .. }), "got {err:?}");
    }

    #[test]
    fn missing_target_is_config_invalid() {
        let dir = tempfile::tempdir().unwrap();
        write_root_config(dir.path(), "ignore: ['*.bak']\n");
        let err = Config::load_with_fallback_target(dir.path(), None).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { .. }), "got {err:?}");
        assert!(err.to_string().contains("target"));
    }

    #[test]
    fn fallback_supplies_missing_target() {
        let dir = tempfile::tempdir().unwrap();
        write_root_config(dir.path(), "");
        let config = Config::load_with_fallback_target(dir.path(), Some("/srv/conf")).unwrap();
        assert_eq!(config.target_root, PathBuf::from("/srv/conf"));
        assert!(config.root_ignore.is_empty());
    }

    #[test]
    fn file_target_wins_over_fallback() {
        let dir = tempfile::tempdir().unwrap();
        write_root_config(dir.path(), "target: /a\n");
        let config = Config::load_with_fallback_target(dir.path(), Some("/b")).unwrap();
        assert_eq!(config.target_root, PathBuf::from("/a"));
    }

    #[test]
    fn blank_file_target_uses_fallback() {
        let dir = tempfile::tempdir().unwrap();
        write_root_config(dir.path(), "target: ''\n");
        let config = Config::load_with_fallback_target(dir.path(), Some("/b")).unwrap();
        assert_eq!(config.target_root, PathBuf::from("/b"));
    }

    #[test]
    fn blank_fallback_is_ignored() {
        let dir = tempfile::tempdir().unwrap();
        write_root_config(dir.path(), "target: /a\n");
        let config = Config::load_with_fallback_target(dir.path(), Some("  ")).unwrap();
        assert_eq!(config.target_root, PathBuf::from("/a"));
    }

    #[test]
    fn null_ignore_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        write_root_config(dir.path(), "target: /a\nignore:\n");
        let config = Config::load_with_fallback_target(dir.path(), None).unwrap();
        assert!(config.root_ignore.is_empty());
    }

    #[test]
    fn relative_target_is_anchored_at_source_root() {
        let root = Path::new("/dots");
        assert_eq!(resolve_target(root, "out"), PathBuf::from("/dots/out"));
        assert_eq!(resolve_target(root, "/abs"), PathBuf::from("/abs"));
    }

    #[test]
    fn tilde_expands_to_home() {
        if let Ok(home) = std::env::var("HOME") {
            assert_eq!(expand_tilde("~"), PathBuf::from(&home));
            assert_eq!(
                expand_tilde("~/.config"),
                PathBuf::from(&home).join(".config")
            );
        }
        assert_eq!(expand_tilde("/etc/xdg"), PathBuf::from("/etc/xdg"));
        assert_eq!(expand_tilde("~user/x"), PathBuf::from("~user/x"));
    }

    #[test]
    fn app_dir_accepts_a_single_name() {
        let config = Config::new(PathBuf::from("/dots"), PathBuf::from("/t"), vec![]);
        assert_eq!(config.app_dir("nvim").unwrap(), PathBuf::from("/dots/nvim"));
        assert_eq!(config.app_dir("nvim/").unwrap(), PathBuf::from("/dots/nvim"));
        assert_eq!(config.app_dir(".hidden").unwrap(), PathBuf::from("/dots/.hidden"));
    }

    #[test]
    fn app_dir_rejects_names_outside_the_source_root() {
        let config = Config::new(PathBuf::from("/dots"), PathBuf::from("/t"), vec![]);
        for name in ["", ".", "..", "/etc", "a/b", "../nvim"] {
            let err = config.app_dir(name).unwrap_err();
            assert!(
                matches!(&err, LinkError::InvalidAppName { app } if app == name),
                "{name:?}: got {err:?}"
            );
        }
    }

    #[test]
    fn existing_app_dir_requires_a_directory() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("nvim")).unwrap();
        std::fs::write(dir.path().join("notes"), "x").unwrap();
        let config = Config::new(dir.path().to_path_buf(), PathBuf::from("/t"), vec![]);
        assert_eq!(config.existing_app_dir("nvim").unwrap(), dir.path().join("nvim"));
        for name in ["zsh", "notes"] {
            let err = config.existing_app_dir(name).unwrap_err();
            assert!(matches!(err, LinkError::AppNotFound { .. }), "got {err:?}");
        }
    }

    #[test]
    fn applications_lists_sorted_visible_directories() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["zsh", "nvim", ".git"] {
            std::fs::create_dir(dir.path().join(name)).unwrap();
        }
        write_root_config(dir.path(), "target: /t\n");
        let config = Config::new(dir.path().to_path_buf(), PathBuf::from("/t"), vec![]);
        assert_eq!(config.applications().unwrap(), vec!["nvim", "zsh"]);
    }

    #[test]
    fn root_file_serializes_for_init() {
        let file = RootFile {
            target: Some("~/.config".to_string()),
            ignore: Some(vec![]),
        };
        let yaml = serde_yaml::to_string(&file).unwrap();
        assert!(yaml.contains("~/.config"), "got: {yaml}");
        let back: RootFile = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(back, file);
    }
}
