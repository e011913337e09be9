//! Idempotent resource primitives (check + apply pattern).
//!
//! The linker only ever creates two kinds of filesystem entry: a real
//! directory and a symlink pointing back into the source tree.  Each is
//! modelled as a resource that can report its [`ResourceState`] without
//! touching the filesystem and then be applied or removed.
pub mod directory;
pub mod helpers;
pub mod symlink;

use crate::error::LinkError;

/// Minimal interface for resources that can be described, applied, and removed.
pub trait Applicable {
    /// Human-readable description of this resource.
    fn description(&self) -> String;

    /// Create the resource.
    ///
    /// Callers are expected to check [`Resource::current_state`] first;
    /// `apply` never replaces an existing entry.
    ///
    /// # Errors
    ///
    /// Returns an error if the entry cannot be created.
    fn apply(&self) -> Result<ResourceChange, LinkError>;

    /// Remove the resource, undoing a previous `apply()`.
    ///
    /// # Errors
    ///
    /// Returns an error if the entry exists but cannot be removed.
    fn remove(&self) -> Result<ResourceChange, LinkError>;
}

/// State of a target entry relative to what the source tree implies.
///
/// # Examples
///
/// ```
/// use gldn::resources::ResourceState;
///
/// let missing = ResourceState::Missing;
/// let wrong = ResourceState::Incorrect { current: "/other/path".into() };
///
/// assert_ne!(missing, ResourceState::Correct);
/// assert_ne!(wrong, ResourceState::Correct);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceState {
    /// Nothing exists at the target path.
    Missing,
    /// The target entry is exactly what the source implies.
    Correct,
    /// The target is a symlink pointing somewhere else.
    Incorrect {
        /// Where the symlink currently points.
        current: String,
    },
    /// The target entry is of the wrong kind.
    Invalid {
        /// Which way round the mismatch is.
        reason: String,
    },
    /// A plain file the tool did not create; left untouched.
    Foreign {
        /// What was found.
        reason: String,
    },
}

/// Result of applying or removing a resource.
///
/// # Examples
///
/// ```
/// use gldn::resources::ResourceChange;
///
/// let applied = ResourceChange::Applied;
/// let skipped = ResourceChange::Skipped { reason: "not empty".into() };
///
/// assert_ne!(applied, skipped);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceChange {
    /// The entry was created or removed.
    Applied,
    /// The entry was already in the desired state.
    AlreadyCorrect,
    /// Nothing was done.
    Skipped {
        /// Why nothing was done.
        reason: String,
    },
}

/// Resources that can determine their own state from the filesystem.
pub trait Resource: Applicable {
    /// Inspect the target entry without modifying it.
    ///
    /// # Errors
    ///
    /// Returns an error if the target's metadata cannot be read for a reason
    /// other than it not existing.
    fn current_state(&self) -> Result<ResourceState, LinkError>;
}
