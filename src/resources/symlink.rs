//! Symlink resource.
use std::path::PathBuf;

use super::helpers::fs::{self, EntryKind};
use super::{Applicable, Resource, ResourceChange, ResourceState};
use crate::error::LinkError;

/// A symlink at `target` that should point at `source`.
#[derive(Debug, Clone)]
pub struct SymlinkResource {
    /// The source node (what the symlink points to), absolute.
    pub source: PathBuf,
    /// Where the symlink lives.
    pub target: PathBuf,
}

impl SymlinkResource {
    /// Create a new symlink resource.
    #[must_use]
    pub const fn new(source: PathBuf, target: PathBuf) -> Self {
        Self { source, target }
    }
}

impl Applicable for SymlinkResource {
    fn description(&self) -> String {
        format!("{} -> {}", self.target.display(), self.source.display())
    }

    fn apply(&self) -> Result<ResourceChange, LinkError> {
        fs::create_symlink(&self.source, &self.target)?;
        Ok(ResourceChange::Applied)
    }

    fn remove(&self) -> Result<ResourceChange, LinkError> {
        if fs::entry_kind(&self.target)? != Some(EntryKind::Symlink) {
            return Ok(ResourceChange::Skipped {
                reason: "not a symlink".to_string(),
            });
        }
        fs::remove_symlink(&self.target)?;
        Ok(ResourceChange::Applied)
    }
}

impl Resource for SymlinkResource {
    fn current_state(&self) -> Result<ResourceState, LinkError> {
        match fs::entry_kind(&self.target)? {
            None => Ok(ResourceState::Missing),
            Some(EntryKind::Directory) => Ok(ResourceState::Invalid {
                reason: "file in source, directory in target".to_string(),
            }),
            Some(EntryKind::File) => Ok(ResourceState::Foreign {
                reason: "regular file in target".to_string(),
            }),
            Some(EntryKind::Symlink) => {
                let existing = std::fs::read_link(&self.target)
                    .map_err(|e| LinkError::io(&self.target, e))?;
                if fs::paths_equal(&existing, &self.source) {
                    Ok(ResourceState::Correct)
                } else {
                    Ok(ResourceState::Incorrect {
                        current: existing.display().to_string(),
                    })
                }
            }
        }
    }
}
