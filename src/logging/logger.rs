//! The [`Logger`] handed to every subcommand.
use std::path::PathBuf;
use std::sync::Mutex;

use super::subscriber::{DRY_RUN_TARGET, STAGE_TARGET};
use super::types::{AppOutcome, AppStatus, Log};
use super::utils::log_file_path;

/// Emits `tracing` events for one subcommand and collects how each
/// application fared, for the summary printed at the end of the run.
///
/// Rendering is up to the installed subscriber; see
/// [`init_subscriber`](super::init_subscriber).
#[derive(Debug)]
pub struct Logger {
    outcomes: Mutex<Vec<AppOutcome>>,
    log_file: Option<PathBuf>,
}

/// Counts by status, in summary order.
#[derive(Debug, Default)]
struct Tally {
    ok: usize,
    dry_run: usize,
    failed: usize,
}

impl Tally {
    const fn add(&mut self, status: AppStatus) {
        match status {
            AppStatus::Ok => self.ok += 1,
            AppStatus::DryRun => self.dry_run += 1,
            AppStatus::Failed => self.failed += 1,
        }
    }

    fn line(&self) -> String {
        format!(
            "{} application(s): \x1b[32m{} ok\x1b[0m, \x1b[37m{} dry-run\x1b[0m, \x1b[31m{} failed\x1b[0m",
            self.ok + self.dry_run + self.failed,
            self.ok,
            self.dry_run,
            self.failed
        )
    }
}

impl Logger {
    /// Logger for `command`, whose summary points at
    /// `<log dir>/<command>.log`.
    #[must_use]
    pub fn new(command: &str) -> Self {
        Self::with_log_file(log_file_path(command))
    }

    /// Logger whose summary points at `log_file`, or at nothing.
    #[must_use]
    pub const fn with_log_file(log_file: Option<PathBuf>) -> Self {
        Self {
            outcomes: Mutex::new(Vec::new()),
            log_file,
        }
    }

    /// The log file named in the summary.
    #[must_use]
    pub const fn log_path(&self) -> Option<&PathBuf> {
        self.log_file.as_ref()
    }

    /// Outcomes recorded so far, in order.
    #[must_use]
    pub fn outcomes(&self) -> Vec<AppOutcome> {
        self.outcomes.lock().map_or_else(|_| Vec::new(), |g| g.clone())
    }

    /// See [`Log::error`].
    pub fn error(&self, msg: &str) {
        tracing::error!("{msg}");
    }

    /// See [`Log::warn`].
    pub fn warn(&self, msg: &str) {
        tracing::warn!("{msg}");
    }

    /// See [`Log::stage`].
    pub fn stage(&self, msg: &str) {
        tracing::info!(target: STAGE_TARGET, "{msg}");
    }

    /// See [`Log::info`].
    pub fn info(&self, msg: &str) {
        tracing::info!("{msg}");
    }

    /// See [`Log::debug`].
    pub fn debug(&self, msg: &str) {
        tracing::debug!("{msg}");
    }

    /// See [`Log::dry_run`].
    pub fn dry_run(&self, msg: &str) {
        tracing::info!(target: DRY_RUN_TARGET, "{msg}");
    }

    /// See [`Log::record_outcome`].
    pub fn record_outcome(&self, app: &str, status: AppStatus, detail: Option<&str>) {
        if let Ok(mut outcomes) = self.outcomes.lock() {
            outcomes.push(AppOutcome {
                app: app.to_string(),
                status,
                detail: detail.map(String::from),
            });
        }
    }

    /// Number of applications recorded as [`AppStatus::Failed`].
    #[must_use]
    pub fn failure_count(&self) -> usize {
        self.outcomes.lock().map_or(0, |outcomes| {
            outcomes
                .iter()
                .filter(|o| o.status == AppStatus::Failed)
                .count()
        })
    }

    /// One line per recorded application, then the totals and the log
    /// file location.  Prints nothing if no application was recorded.
    #[allow(clippy::print_stdout)]
    pub fn print_summary(&self) {
        let outcomes = self.outcomes();
        if outcomes.is_empty() {
            return;
        }

        println!();
        self.stage("Summary");
        let mut tally = Tally::default();
        for outcome in &outcomes {
            tally.add(outcome.status);
            let (marker, colour) = outcome.status.marker();
            let detail = outcome
                .detail
                .as_deref()
                .map_or_else(String::new, |d| format!(" ({d})"));
            self.info(&format!("{colour}{marker} {}{detail}\x1b[0m", outcome.app));
        }
        println!();
        self.info(&tally.line());
        if let Some(path) = &self.log_file {
            self.info(&format!("\x1b[2mlog: {}\x1b[0m", path.display()));
        }
    }
}

impl Log for Logger {
    fn stage(&self, msg: &str) {
        self.stage(msg);
    }

    fn info(&self, msg: &str) {
        self.info(msg);
    }

    fn debug(&self, msg: &str) {
        self.debug(msg);
    }

    fn warn(&self, msg: &str) {
        self.warn(msg);
    }

    fn error(&self, msg: &str) {
        self.error(msg);
    }

    fn dry_run(&self, msg: &str) {
        self.dry_run(msg);
    }

    fn record_outcome(&self, app: &str, status: AppStatus, detail: Option<&str>) {
        self.record_outcome(app, status, detail);
    }
}
