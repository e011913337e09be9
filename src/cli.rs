//! Command-line interface definitions.
use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Top-level CLI entry point for the symlink-farm manager.
#[derive(Parser, Debug)]
#[command(
    name = "gldn",
    about = "Symlink-farm manager: link application config trees into a target directory",
    version
)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Options shared by every subcommand
    #[command(flatten)]
    pub global: GlobalOpts,
}

/// Options shared across all subcommands.
#[derive(Parser, Debug, Clone, Default)]
pub struct GlobalOpts {
    /// Preview changes without applying
    #[arg(short = 'd', long, global = true)]
    pub dry_run: bool,

    /// Source root holding one directory per application
    /// (defaults to $GLDN_SOURCE, then the current directory)
    #[arg(long, global = true)]
    pub source: Option<PathBuf>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Link applications into the target directory
    Link(AppsOpts),
    /// Remove an application's links from the target directory
    Unlink(AppsOpts),
    /// Unlink, then link again
    Relink(AppsOpts),
    /// Show the effective ignore patterns for an application
    Ignored(AppOpts),
    /// List applications, or show one application's source tree
    List(ListOpts),
    /// Write a root .gldnrc.yml in the source directory
    Init(InitOpts),
    /// Generate shell completions
    Completions(CompletionsOpts),
    /// Print version information
    Version,
}

impl Command {
    /// Name used for the log file of this command.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Link(_) => "link",
            Self::Unlink(_) => "unlink",
            Self::Relink(_) => "relink",
            Self::Ignored(_) => "ignored",
            Self::List(_) => "list",
            Self::Init(_) => "init",
            Self::Completions(_) => "completions",
            Self::Version => "version",
        }
    }
}

/// One or more applications to operate on.
#[derive(Parser, Debug, Clone)]
pub struct AppsOpts {
    /// Application directory names under the source root
    #[arg(required = true, value_name = "APP")]
    pub apps: Vec<String>,
}

/// A single application.
#[derive(Parser, Debug, Clone)]
pub struct AppOpts {
    /// Application directory name under the source root
    #[arg(value_name = "APP")]
    pub app: String,
}

/// Options for the `list` subcommand.
#[derive(Parser, Debug, Clone)]
pub struct ListOpts {
    /// Show this application's tree instead of listing applications
    #[arg(value_name = "APP")]
    pub app: Option<String>,
}

/// Options for the `init` subcommand.
#[derive(Parser, Debug, Clone)]
pub struct InitOpts {
    /// Target directory to record (defaults to $GLDN_TARGET, then ~/.config)
    #[arg(long)]
    pub target: Option<String>,
}

/// Options for the `completions` subcommand.
#[derive(Parser, Debug, Clone)]
pub struct CompletionsOpts {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: clap_complete::Shell,
}
