//! Effective ignore-pattern resolution and matching.
//!
//! Every application gets exactly one [`IgnoreSet`] per invocation, built
//! from the root list and the application's own [`AppConfig`].  Patterns are
//! shell globs matched against the whole relative path (`nvim/lua/*.bak`),
//! not just its final segment, and `*` is allowed to cross `/`.
use globset::{Glob, GlobSet, GlobSetBuilder};
use std::path::Path;

use super::CONFIG_FILE_NAME;
use super::app::AppConfig;
use crate::error::ConfigError;

/// Where an application's effective patterns came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreSource {
    /// Only the root list applies.
    Root,
    /// Root list plus the application's `ignore` list.
    Additive,
    /// The application's `ignore!` list replaces the root list.
    Override,
}

/// Resolved, compiled ignore patterns for one application.
#[derive(Debug, Clone)]
pub struct IgnoreSet {
    patterns: Vec<String>,
    source: IgnoreSource,
    matcher: GlobSet,
}

impl IgnoreSet {
    /// Resolve the effective pattern list and compile it.
    ///
    /// 1. `ignore!` present: override list plus the config file name.
    /// 2. `ignore` present: root list, then additive list, then the config
    ///    file name.
    /// 3. Otherwise: root list plus the config file name.
    ///
    /// Duplicates are dropped, first occurrence wins.  `origin` is the file
    /// reported if a pattern fails to compile.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if any pattern is not a valid glob.
    pub fn resolve(root: &[String], app: &AppConfig, origin: &Path) -> Result<Self, ConfigError> {
        let (lists, source): (Vec<&[String]>, IgnoreSource) =
            match (&app.ignore_override, &app.ignore) {
                (Some(over), _) => (vec![over.as_slice()], IgnoreSource::Override),
                (None, Some(extra)) => (vec![root, extra.as_slice()], IgnoreSource::Additive),
                (None, None) => (vec![root], IgnoreSource::Root),
            };

        let mut patterns: Vec<String> = Vec::new();
        let implicit = [CONFIG_FILE_NAME.to_string()];
        for pattern in lists.into_iter().flatten().chain(implicit.iter()) {
            if !patterns.contains(pattern) {
                patterns.push(pattern.clone());
            }
        }

        Self::compile(patterns, source, origin)
    }

    fn compile(
        patterns: Vec<String>,
        source: IgnoreSource,
        origin: &Path,
    ) -> Result<Self, ConfigError> {
        let mut builder = GlobSetBuilder::new();
        for pattern in &patterns {
            let glob = Glob::new(pattern).map_err(|e| {
                ConfigError::invalid(origin, format!("bad ignore pattern '{pattern}': {e}"))
            })?;
            builder.add(glob);
        }
        let matcher = builder
            .build()
            .map_err(|e| ConfigError::invalid(origin, e.to_string()))?;
        Ok(Self {
            patterns,
            source,
            matcher,
        })
    }

    /// The effective patterns, in resolution order.
    #[must_use]
    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    /// Which resolution rule produced this set.
    #[must_use]
    pub const fn source(&self) -> IgnoreSource {
        self.source
    }

    /// Whether `relative_path` (posix-style, relative to the application
    /// root) matches any pattern.
    #[must_use]
    pub fn is_ignored(&self, relative_path: &str) -> bool {
        self.matcher.is_match(relative_path)
    }
}

/// Test `relative_path` against an uncompiled pattern list.
///
/// Patterns that are not valid globs never match.
#[must_use]
pub fn is_ignored(patterns: &[String], relative_path: &str) -> bool {
    patterns.iter().any(|p| {
        Glob::new(p)
            .map(|g| g.compile_matcher().is_match(relative_path))
            .unwrap_or(false)
    })
}
