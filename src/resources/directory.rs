//! Directory resource.
use std::collections::HashSet;
use std::path::PathBuf;

use super::helpers::fs::{self, EntryKind};
use super::{Applicable, Resource, ResourceChange, ResourceState};
use crate::error::LinkError;

/// A real directory that should exist at `target`.
#[derive(Debug, Clone)]
pub struct DirectoryResource {
    /// Where the directory lives.
    pub target: PathBuf,
}

impl DirectoryResource {
    /// Create a new directory resource.
    #[must_use]
    pub const fn new(target: PathBuf) -> Self {
        Self { target }
    }

    /// Remove the directory if it holds nothing except entries in `gone`.
    ///
    /// With `dry_run` set the emptiness check still runs but nothing is
    /// deleted.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be listed or removed.
    pub fn remove_if_empty(
        &self,
        gone: &HashSet<PathBuf>,
        dry_run: bool,
    ) -> Result<ResourceChange, LinkError> {
        if fs::entry_kind(&self.target)? != Some(EntryKind::Directory) {
            return Ok(ResourceChange::Skipped {
                reason: "not a directory".to_string(),
            });
        }
        if !fs::is_effectively_empty(&self.target, gone)? {
            return Ok(ResourceChange::Skipped {
                reason: "not empty".to_string(),
            });
        }
        if !dry_run {
            std::fs::remove_dir(&self.target).map_err(|e| LinkError::io(&self.target, e))?;
        }
        Ok(ResourceChange::Applied)
    }
}

impl Applicable for DirectoryResource {
    fn description(&self) -> String {
        format!("{}/", self.target.display())
    }

    fn apply(&self) -> Result<ResourceChange, LinkError> {
        fs::ensure_dir(&self.target)?;
        Ok(ResourceChange::Applied)
    }

    fn remove(&self) -> Result<ResourceChange, LinkError> {
        self.remove_if_empty(&HashSet::new(), false)
    }
}

impl Resource for DirectoryResource {
    fn current_state(&self) -> Result<ResourceState, LinkError> {
        Ok(match fs::entry_kind(&self.target)? {
            None => ResourceState::Missing,
            Some(EntryKind::Directory) => ResourceState::Correct,
            Some(EntryKind::File | EntryKind::Symlink) => ResourceState::Invalid {
                reason: "directory in source, file/link in target".to_string(),
            },
        })
    }
}
