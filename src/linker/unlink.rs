//! Remove an application's links from the target root.
use std::collections::HashSet;
use std::path::PathBuf;

use super::walk::walk;
use super::{Linker, UnlinkReport};
use crate::error::LinkError;
use crate::resources::directory::DirectoryResource;
use crate::resources::helpers::fs::{self, EntryKind};
use crate::resources::symlink::SymlinkResource;
use crate::resources::{Applicable, ResourceChange};

impl Linker<'_> {
    /// Remove whatever `link` would have produced for `app`.
    ///
    /// Every symlink at a translated source path is removed, wherever it
    /// points.  Directories at translated paths are removed afterwards,
    /// deepest first, and only when they are empty; anything else in the
    /// target tree is left in place.  Ignore patterns are not applied, so
    /// links created under an older configuration are cleaned up too.
    ///
    /// A missing application is not an error: there is nothing to remove.
    ///
    /// # Errors
    ///
    /// - [`LinkError::InvalidAppName`] if `app` is not a plain directory
    ///   name.
    /// - [`LinkError::Io`] if the source tree cannot be walked or a target
    ///   entry cannot be inspected or removed.
    pub fn unlink(&self, app: &str) -> Result<UnlinkReport, LinkError> {
        let app_dir = self.config.app_dir(app)?;
        if !app_dir.is_dir() {
            self.log.warn(&format!(
                "application '{app}' not found in {}, nothing to unlink",
                self.config.source_root.display()
            ));
            return Ok(UnlinkReport::default());
        }

        let translator = self.translator();
        let mut report = UnlinkReport::default();
        // Target entries already removed, or that a dry run would remove.
        let mut gone: HashSet<PathBuf> = HashSet::new();
        let mut dirs: Vec<(usize, PathBuf)> = Vec::new();

        for node in walk(&app_dir, None, self.log) {
            let node = node?;
            let target = translator.to_target(&node.relative);
            if gone.iter().any(|g| target.starts_with(g)) {
                continue;
            }
            match fs::entry_kind(&target)? {
                Some(EntryKind::Symlink) => {
                    let resource = SymlinkResource::new(node.path, target);
                    if self.dry_run {
                        self.log
                            .dry_run(&format!("would remove {}", resource.target.display()));
                    } else {
                        resource.remove()?;
                        self.log
                            .debug(&format!("removed {}", resource.target.display()));
                    }
                    report.symlinks_removed += 1;
                    gone.insert(resource.target);
                }
                Some(EntryKind::Directory) => dirs.push((node.depth, target)),
                Some(EntryKind::File) | None => {}
            }
        }

        dirs.sort_by(|a, b| b.0.cmp(&a.0));
        for (_, dir) in dirs {
            let resource = DirectoryResource::new(dir);
            match resource.remove_if_empty(&gone, self.dry_run)? {
                ResourceChange::Applied => {
                    if self.dry_run {
                        self.log
                            .dry_run(&format!("would remove {}", resource.description()));
                    } else {
                        self.log.debug(&format!("removed {}", resource.description()));
                    }
                    report.dirs_removed += 1;
                    gone.insert(resource.target);
                }
                ResourceChange::AlreadyCorrect | ResourceChange::Skipped { .. } => {
                    self.log.debug(&format!("kept {}", resource.description()));
                }
            }
        }
        Ok(report)
    }
}
