//! Per-application counters reported after each pass.
use std::fmt;

/// What a link pass created (or would create, in a dry run).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LinkReport {
    /// Directories created in the target tree.
    pub dirs_created: usize,
    /// Symlinks created in the target tree.
    pub symlinks_created: usize,
}

/// What an unlink pass removed (or would remove, in a dry run).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UnlinkReport {
    /// Empty directories removed from the target tree.
    pub dirs_removed: usize,
    /// Symlinks removed from the target tree.
    pub symlinks_removed: usize,
}

/// Outcome of an unlink followed by a link.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RelinkReport {
    /// The unlink half.
    pub unlinked: UnlinkReport,
    /// The link half.
    pub linked: LinkReport,
}

impl LinkReport {
    /// Whether the pass left the target tree untouched.
    #[must_use]
    pub const fn is_noop(&self) -> bool {
        self.dirs_created == 0 && self.symlinks_created == 0
    }
}

impl UnlinkReport {
    /// Whether the pass left the target tree untouched.
    #[must_use]
    pub const fn is_noop(&self) -> bool {
        self.dirs_removed == 0 && self.symlinks_removed == 0
    }
}

impl fmt::Display for LinkReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_noop() {
            return write!(f, "already linked");
        }
        write!(
            f,
            "{} symlink(s), {} director(y/ies) created",
            self.symlinks_created, self.dirs_created
        )
    }
}

impl fmt::Display for UnlinkReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_noop() {
            return write!(f, "nothing to unlink");
        }
        write!(
            f,
            "{} symlink(s), {} director(y/ies) removed",
            self.symlinks_removed, self.dirs_removed
        )
    }
}

impl fmt::Display for RelinkReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unlink: {}; link: {}", self.unlinked, self.linked)
    }
}
