//! Subcommand handlers.
//!
//! Each handler resolves the source root, loads `.gldnrc.yml`, and runs the
//! linker over the requested applications.
pub mod completions;
pub mod ignored;
pub mod init;
pub mod link;
pub mod list;
pub mod relink;
pub mod unlink;
pub mod version;

use std::fmt::Display;
use std::path::PathBuf;

use anyhow::{Context as _, Result};

use crate::cli::GlobalOpts;
use crate::config::Config;
use crate::error::LinkError;
use crate::linker::Linker;
use crate::logging::{Log, Logger, AppStatus};

/// Environment variable naming the source root when `--source` is absent.
pub const SOURCE_ENV: &str = "GLDN_SOURCE";

/// Shared state produced by the common command setup sequence.
#[derive(Debug)]
pub struct CommandSetup {
    /// Root configuration loaded from the resolved source root.
    pub config: Config,
}

impl CommandSetup {
    /// Resolve the source root and load the root configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the source root does not exist or its
    /// `.gldnrc.yml` is missing or invalid.
    pub fn init(global: &GlobalOpts, log: &Logger) -> Result<Self> {
        let source_root = resolve_source_root(global)?;
        log.debug(&format!("source root: {}", source_root.display()));

        let config = Config::load(&source_root)?;
        log.debug(&format!("target root: {}", config.target_root.display()));
        log.debug(&format!("{} root ignore pattern(s)", config.root_ignore.len()));

        Ok(Self { config })
    }

    /// A linker over this configuration honouring `--dry-run`.
    #[must_use]
    pub fn linker<'a>(&'a self, log: &'a dyn Log, global: &GlobalOpts) -> Linker<'a> {
        Linker::new(&self.config, log).with_dry_run(global.dry_run)
    }
}

/// Resolve the source root from `--source`, `$GLDN_SOURCE`, or the current
/// directory, in that order.
///
/// # Errors
///
/// Returns an error if the chosen directory does not exist.
pub fn resolve_source_root(global: &GlobalOpts) -> Result<PathBuf> {
    let root = match global
        .source
        .clone()
        .or_else(|| std::env::var_os(SOURCE_ENV).map(PathBuf::from))
    {
        Some(root) => root,
        None => std::env::current_dir().context("cannot determine current directory")?,
    };
    dunce::canonicalize(&root)
        .with_context(|| format!("source root not found: {}", root.display()))
}

/// Run `op` for every application in order, record each outcome, print the
/// summary, and bail if any application failed.
///
/// A failing application does not stop the ones after it.
///
/// # Errors
///
/// Returns an error if one or more applications failed.
pub fn run_for_each_app<T: Display>(
    apps: &[String],
    stage: &str,
    dry_run: bool,
    log: &Logger,
    mut op: impl FnMut(&str) -> Result<T, LinkError>,
) -> Result<()> {
    let ok_status = if dry_run {
        AppStatus::DryRun
    } else {
        AppStatus::Ok
    };

    for app in apps {
        log.stage(&format!("{stage} {app}"));
        match op(app) {
            Ok(report) => {
                let summary = report.to_string();
                log.info(&summary);
                log.record_outcome(app, ok_status, Some(&summary));
            }
            Err(e) => {
                log.error(&format!("{app}: {e}"));
                if e.is_conflict() {
                    log.info(&format!(
                        "{app}: links made before the conflict were kept; move the entry aside and run again"
                    ));
                }
                log.record_outcome(app, AppStatus::Failed, Some(&e.to_string()));
            }
        }
    }

    log.print_summary();

    let count = log.failure_count();
    if count > 0 {
        anyhow::bail!("{count} application(s) failed");
    }
    Ok(())
}
