//! Pre-order traversal of an application's source subtree.
use std::path::{Component, Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

use crate::config::ignore::IgnoreSet;
use crate::error::LinkError;
use crate::logging::Log;

/// Kind of a source node. Symlinks in the source tree are never followed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// Regular file (or any other non-directory, non-symlink entry).
    File,
    /// Directory.
    Directory,
    /// Symbolic link, linked to as-is.
    Symlink,
}

/// A node discovered while walking an application's source tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceNode {
    /// Absolute path of the node.
    pub path: PathBuf,
    /// Path relative to the application root.
    pub relative: PathBuf,
    /// What the node is.
    pub kind: NodeKind,
    /// Depth below the application root (direct children are 1).
    pub depth: usize,
}

impl SourceNode {
    fn from_entry(app_root: &Path, entry: &DirEntry) -> Self {
        let file_type = entry.file_type();
        let kind = if file_type.is_symlink() {
            NodeKind::Symlink
        } else if file_type.is_dir() {
            NodeKind::Directory
        } else {
            NodeKind::File
        };
        Self {
            path: entry.path().to_path_buf(),
            relative: relative_to(app_root, entry.path()),
            kind,
            depth: entry.depth(),
        }
    }
}

fn relative_to(root: &Path, path: &Path) -> PathBuf {
    path.strip_prefix(root)
        .map_or_else(|_| path.to_path_buf(), Path::to_path_buf)
}

/// Render a relative path with `/` separators for glob matching.
#[must_use]
pub fn posix_string(relative: &Path) -> String {
    relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(s) => Some(s.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// Walk everything below `app_root` in pre-order, sorted by file name.
///
/// The application root itself is not yielded.  When `ignore` is given,
/// a matching entry is pruned together with its whole subtree, so nothing
/// below an ignored directory is ever visited.
pub fn walk<'a>(
    app_root: &'a Path,
    ignore: Option<&'a IgnoreSet>,
    log: &'a dyn Log,
) -> impl Iterator<Item = Result<SourceNode, LinkError>> + 'a {
    WalkDir::new(app_root)
        .min_depth(1)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(move |entry| {
            let Some(set) = ignore else {
                return true;
            };
            let relative = posix_string(&relative_to(app_root, entry.path()));
            let ignored = set.is_ignored(&relative);
            if ignored {
                log.debug(&format!("ignored: {relative}"));
            }
            !ignored
        })
        .map(move |entry| {
            entry
                .map(|e| SourceNode::from_entry(app_root, &e))
                .map_err(|e| {
                    let path = e
                        .path()
                        .map_or_else(|| app_root.to_path_buf(), Path::to_path_buf);
                    LinkError::io(&path, e.into())
                })
        })
}
