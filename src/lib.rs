//! Symlink-farm manager.
//!
//! Each application keeps its configuration under
//! `<source_root>/<app>/`; `gldn` mirrors that tree into a single target
//! directory (usually `~/.config`) by creating real directories and
//! symlinking every file back to the source.  Path segments named
//! `dot-foo` become `.foo` in the target, and per-application ignore
//! patterns decide what is left out.
//!
//! The public API is organised into four layers:
//!
//! - **[`config`]**: load `.gldnrc.yml` files and resolve ignore patterns
//! - **[`resources`]**: idempotent `check + apply` primitives (symlinks, directories)
//! - **[`linker`]**: walk an application's tree and link, unlink, or relink it
//! - **[`commands`]**: top-level subcommand orchestration
#![deny(clippy::or_fun_call)]
#![deny(clippy::bool_to_int_with_if)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod exec;
pub mod linker;
pub mod logging;
pub mod resources;
