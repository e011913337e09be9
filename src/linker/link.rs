//! Mirror an application's source tree into the target root.
use std::io;
use std::path::{Path, PathBuf};

use super::walk::{NodeKind, SourceNode, walk};
use super::{LinkReport, Linker};
use crate::error::LinkError;
use crate::resources::directory::DirectoryResource;
use crate::resources::symlink::SymlinkResource;
use crate::resources::{Applicable, Resource, ResourceState};

impl Linker<'_> {
    /// Link every non-ignored node of `app` into the target root.
    ///
    /// Directories are created as real directories; files and source
    /// symlinks become symlinks to the source node.  Entries that are
    /// already correct are left alone, so running this twice is a no-op.
    /// A regular file already sitting where a symlink should go is left
    /// untouched.
    ///
    /// # Errors
    ///
    /// - [`LinkError::InvalidAppName`] if `app` is not a plain directory
    ///   name, before anything is touched.
    /// - [`LinkError::AppNotFound`] if `app` has no source directory.
    /// - [`LinkError::Config`] if its ignore configuration is invalid.
    /// - [`LinkError::TargetPathInvalid`] if the target root is unusable.
    /// - [`LinkError::TypeMismatch`] or [`LinkError::BadSymlink`] on the
    ///   first conflict; earlier changes are kept.
    pub fn link(&self, app: &str) -> Result<LinkReport, LinkError> {
        let app_dir = self.config.existing_app_dir(app)?;
        let ignore = self.resolve_ignore(app)?;
        self.log
            .debug(&format!("{app}: ignore patterns {:?}", ignore.patterns()));
        self.prepare_target_root()?;

        let translator = self.translator();
        let mut report = LinkReport::default();
        for node in walk(&app_dir, Some(&ignore), self.log) {
            let node = node?;
            let target = translator.to_target(&node.relative);
            match node.kind {
                NodeKind::Directory => self.link_directory(&node, target, &mut report)?,
                NodeKind::File | NodeKind::Symlink => {
                    self.link_file(&node, target, &mut report)?;
                }
            }
        }
        Ok(report)
    }

    /// Make sure the target root exists as a directory, creating it and
    /// its ancestors if needed.  A symlink to a directory is accepted.
    fn prepare_target_root(&self) -> Result<(), LinkError> {
        let root = &self.config.target_root;
        let invalid = |reason: String| LinkError::TargetPathInvalid {
            path: root.clone(),
            reason,
        };
        match std::fs::metadata(root) {
            Ok(meta) if meta.is_dir() => Ok(()),
            Ok(_) => Err(invalid("exists and is not a directory".to_string())),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                if self.dry_run {
                    self.log
                        .dry_run(&format!("would create target root {}", root.display()));
                    return Ok(());
                }
                std::fs::create_dir_all(root).map_err(|e| invalid(e.to_string()))?;
                self.log
                    .debug(&format!("created target root {}", root.display()));
                Ok(())
            }
            Err(e) => Err(invalid(e.to_string())),
        }
    }

    fn link_directory(
        &self,
        node: &SourceNode,
        target: PathBuf,
        report: &mut LinkReport,
    ) -> Result<(), LinkError> {
        let resource = DirectoryResource::new(target);
        match resource.current_state()? {
            ResourceState::Missing => {
                if self.dry_run {
                    self.log
                        .dry_run(&format!("would create {}", resource.description()));
                } else {
                    resource.apply()?;
                    self.log.debug(&format!("created {}", resource.description()));
                }
                report.dirs_created += 1;
                Ok(())
            }
            ResourceState::Correct => {
                self.log.debug(&format!("ok: {}", resource.description()));
                Ok(())
            }
            ResourceState::Invalid { reason }
            | ResourceState::Foreign { reason }
            | ResourceState::Incorrect { current: reason } => {
                Err(type_mismatch(&node.path, resource.target, reason))
            }
        }
    }

    fn link_file(
        &self,
        node: &SourceNode,
        target: PathBuf,
        report: &mut LinkReport,
    ) -> Result<(), LinkError> {
        let resource = SymlinkResource::new(node.path.clone(), target);
        match resource.current_state()? {
            ResourceState::Missing => {
                if self.dry_run {
                    self.log
                        .dry_run(&format!("would link {}", resource.description()));
                } else {
                    resource.apply()?;
                    self.log.debug(&format!("linked {}", resource.description()));
                }
                report.symlinks_created += 1;
                Ok(())
            }
            ResourceState::Correct => {
                self.log.debug(&format!("ok: {}", resource.description()));
                Ok(())
            }
            ResourceState::Foreign { reason } => {
                self.log.debug(&format!(
                    "leaving {} alone: {reason}",
                    resource.target.display()
                ));
                Ok(())
            }
            ResourceState::Incorrect { current } => Err(LinkError::BadSymlink {
                target: resource.target,
                actual: PathBuf::from(current),
                expected: resource.source,
            }),
            ResourceState::Invalid { reason } => {
                Err(type_mismatch(&node.path, resource.target, reason))
            }
        }
    }
}

fn type_mismatch(source: &Path, target: PathBuf, detail: String) -> LinkError {
    LinkError::TypeMismatch {
        source_path: source.to_path_buf(),
        target,
        detail,
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::logging::isolated_logger;
    use std::fs;

    fn config(dir: &tempfile::TempDir) -> Config {
        let source = dir.path().join("source");
        fs::create_dir_all(source.join("zsh/dot-zsh")).unwrap();
        fs::write(source.join("zsh/dot-zshrc"), "x").unwrap();
        fs::write(source.join("zsh/dot-zsh/aliases"), "x").unwrap();
        Config::new(source, dir.path().join("target"), vec![])
    }

    #[cfg(unix)]
    #[test]
    fn creates_target_root_and_translates_hidden_names() {
        let dir = tempfile::tempdir().unwrap();
        let config = config(&dir);
        let (log, _tmp, _guard) = isolated_logger();

        let report = Linker::new(&config, &log).link("zsh").unwrap();
        assert_eq!(
            report,
            LinkReport {
                dirs_created: 1,
                symlinks_created: 2
            }
        );
        let target = &config.target_root;
        assert!(target.join(".zsh").is_dir());
        assert_eq!(
            fs::read_link(target.join(".zshrc")).unwrap(),
            config.app_dir("zsh").unwrap().join("dot-zshrc")
        );
    }

    #[cfg(unix)]
    #[test]
    fn second_link_is_a_noop() {
        let dir = tempfile::tempdir().unwrap();
        let config = config(&dir);
        let (log, _tmp, _guard) = isolated_logger();
        let linker = Linker::new(&config, &log);
        linker.link("zsh").unwrap();
        assert!(linker.link("zsh").unwrap().is_noop());
    }

    #[test]
    fn dry_run_touches_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let config = config(&dir);
        let (log, _tmp, _guard) = isolated_logger();

        let report = Linker::new(&config, &log)
            .with_dry_run(true)
            .link("zsh")
            .unwrap();
        assert_eq!(report.symlinks_created, 2);
        assert_eq!(report.dirs_created, 1);
        assert!(!config.target_root.exists());
    }

    #[test]
    fn missing_app_is_app_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let config = config(&dir);
        let (log, _tmp, _guard) = isolated_logger();
        let err = Linker::new(&config, &log).link("nope").unwrap_err();
        assert!(matches!(err, LinkError::AppNotFound { .. }), "got {err:?}");
    }

    #[test]
    fn target_root_that_is_a_file_is_invalid() {
        let dir = tempfile::tempdir().unwrap();
        let config = config(&dir);
        fs::write(&config.target_root, "x").unwrap();
        let (log, _tmp, _guard) = isolated_logger();
        let err = Linker::new(&config, &log).link("zsh").unwrap_err();
        assert!(
            matches!(err, LinkError::TargetPathInvalid { .. }),
            "got {err:?}"
        );
    }

    #[test]
    fn regular_file_in_place_of_link_is_left_alone() {
        let dir = tempfile::tempdir().unwrap();
        let config = config(&dir);
        fs::create_dir_all(&config.target_root).unwrap();
        fs::write(config.target_root.join(".zshrc"), "mine").unwrap();
        let (log, _tmp, _guard) = isolated_logger();

        let report = Linker::new(&config, &log).link("zsh").unwrap();
        assert_eq!(report.symlinks_created, 1);
        assert_eq!(
            fs::read_to_string(config.target_root.join(".zshrc")).unwrap(),
            "mine"
        );
    }

    #[test]
    fn file_where_directory_belongs_is_type_mismatch() {
        let dir = tempfile::tempdir().unwrap();
        let config = config(&dir);
        fs::create_dir_all(&config.target_root).unwrap();
        fs::write(config.target_root.join(".zsh"), "x").unwrap();
        let (log, _tmp, _guard) = isolated_logger();

        let err = Linker::new(&config, &log).link("zsh").unwrap_err();
        let expected_source = config.app_dir("zsh").unwrap().join("dot-zsh");
        let expected_target = config.target_root.join(".zsh");
        assert!(
            matches!(
                &err,
                LinkError::TypeMismatch { source_path, target, .. }
                    if *source_path == expected_source && *target == expected_target
            ),
            "got {err:?}"
        );
    }

    #[cfg(unix)]
    #[test]
    fn foreign_symlink_is_bad_symlink() {
        let dir = tempfile::tempdir().unwrap();
        let config = config(&dir);
        fs::create_dir_all(&config.target_root).unwrap();
        std::os::unix::fs::symlink("/elsewhere", config.target_root.join(".zshrc")).unwrap();
        let (log, _tmp, _guard) = isolated_logger();

        let err = Linker::new(&config, &log).link("zsh").unwrap_err();
        let expected_source = config.app_dir("zsh").unwrap().join("dot-zshrc");
        assert!(
            matches!(
                &err,
                LinkError::BadSymlink { actual, expected, .. }
                    if *actual == PathBuf::from("/elsewhere") && *expected == expected_source
            ),
            "got {err:?}"
        );
    }
}
