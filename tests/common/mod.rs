// Shared helpers for integration tests.
//
// Provides a temporary-directory-backed source/target pair and a fluent
// builder so each integration test can set up an isolated environment
// without repeating filesystem boilerplate.
//
// Used by all integration test binaries that declare `mod common;`.
#![allow(dead_code)]

use std::path::{Path, PathBuf};

use gldn::cli::GlobalOpts;
use gldn::config::Config;
use gldn::logging::Logger;

/// An isolated source root and target root under one [`tempfile::TempDir`].
///
/// Layout:
/// - `source/.gldnrc.yml` pointing `target` at `target/`
/// - `source/<app>/...`   added through the builder methods
/// - `target/`            not created until something links into it
pub struct IntegrationTestContext {
    /// Temporary directory holding both roots.
    pub root: tempfile::TempDir,
}

impl IntegrationTestContext {
    /// Create a context with an empty root configuration.
    pub fn new() -> Self {
        Self::with_root_ignore(&[])
    }

    /// Create a context whose root configuration ignores `patterns`.
    pub fn with_root_ignore(patterns: &[&str]) -> Self {
        let root = tempfile::tempdir().expect("create temp dir");
        let ctx = Self { root };
        std::fs::create_dir_all(ctx.source()).expect("create source dir");
        ctx.write_root_config(patterns);
        ctx
    }

    /// Rewrite the root configuration with a new ignore list.
    pub fn write_root_config(&self, patterns: &[&str]) {
        let mut yaml = format!("target: {}\n", self.target().display());
        if patterns.is_empty() {
            yaml.push_str("ignore: []\n");
        } else {
            yaml.push_str("ignore:\n");
            for pattern in patterns {
                yaml.push_str(&format!("  - '{pattern}'\n"));
            }
        }
        std::fs::write(self.source().join(".gldnrc.yml"), yaml).expect("write root config");
    }

    /// Source root.
    pub fn source(&self) -> PathBuf {
        self.root.path().join("source")
    }

    /// Target root.
    pub fn target(&self) -> PathBuf {
        self.root.path().join("target")
    }

    /// Add a file at `rel` inside `app`, creating parent directories.
    pub fn file(self, app: &str, rel: &str, content: &str) -> Self {
        let path = self.source().join(app).join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("create parent dir");
        }
        std::fs::write(&path, content).expect("write source file");
        self
    }

    /// Add an empty directory at `rel` inside `app`.
    pub fn dir(self, app: &str, rel: &str) -> Self {
        std::fs::create_dir_all(self.source().join(app).join(rel)).expect("create source dir");
        self
    }

    /// Write `<app>/.gldnrc.yml`.
    pub fn app_config(self, app: &str, yaml: &str) -> Self {
        let dir = self.source().join(app);
        std::fs::create_dir_all(&dir).expect("create app dir");
        std::fs::write(dir.join(".gldnrc.yml"), yaml).expect("write app config");
        self
    }

    /// Load the configuration the way the CLI does, minus the environment.
    pub fn config(&self) -> Config {
        Config::load_with_fallback_target(&self.source(), None).expect("load config")
    }

    /// Global options pointing `--source` at this context.
    pub fn global(&self, dry_run: bool) -> GlobalOpts {
        GlobalOpts {
            dry_run,
            source: Some(self.source()),
        }
    }

    /// Source path of `rel` inside `app`.
    pub fn source_path(&self, app: &str, rel: &str) -> PathBuf {
        self.source().join(app).join(rel)
    }

    /// Render the target tree with [`snapshot_tree`].
    pub fn target_tree(&self) -> String {
        snapshot_tree(&self.target(), &self.source())
    }

    /// Where a symlink at `rel` (relative to the target root) points.
    pub fn link_at(&self, rel: &str) -> Option<PathBuf> {
        std::fs::read_link(self.target().join(rel)).ok()
    }
}

/// A logger that writes no log file.
pub fn quiet_logger() -> Logger {
    Logger::with_log_file(None)
}

/// Every entry below `root`, relative and sorted, with a trailing `/` on
/// real directories and ` -> dest` on symlinks.  Link destinations inside
/// `source` are shown as `@source/<rel>`.
pub fn snapshot_tree(root: &Path, source: &Path) -> String {
    if !root.exists() {
        return String::new();
    }
    let mut out = Vec::new();
    for entry in walkdir::WalkDir::new(root)
        .min_depth(1)
        .sort_by_file_name()
        .follow_links(false)
    {
        let entry = entry.expect("walk target");
        let rel = entry
            .path()
            .strip_prefix(root)
            .expect("strip prefix")
            .to_string_lossy()
            .replace('\\', "/");
        let ft = entry.file_type();
        if ft.is_symlink() {
            let dest = std::fs::read_link(entry.path()).expect("read link");
            let shown = dest.strip_prefix(source).map_or_else(
                |_| dest.display().to_string(),
                |r| format!("@source/{}", r.to_string_lossy().replace('\\', "/")),
            );
            out.push(format!("{rel} -> {shown}"));
        } else if ft.is_dir() {
            out.push(format!("{rel}/"));
        } else {
            out.push(rel);
        }
    }
    out.join("\n")
}
