//! Per-application outcomes and the [`Log`] sink the engine writes to.

/// How one application fared in a link, unlink, or relink run.
#[derive(Debug, Clone)]
pub struct AppOutcome {
    /// Application name as given on the command line.
    pub app: String,
    /// Final status.
    pub status: AppStatus,
    /// Report counts on success, the error on failure.
    pub detail: Option<String>,
}

/// Final status of one application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppStatus {
    /// Its target tree now matches the source.
    Ok,
    /// Dry run; the counts say what would have changed.
    DryRun,
    /// Aborted with an error; earlier changes were kept.
    Failed,
}

impl AppStatus {
    /// Summary marker and the ANSI colour it is drawn in.
    pub(super) const fn marker(self) -> (&'static str, &'static str) {
        match self {
            Self::Ok => ("✓", "\x1b[32m"),
            Self::DryRun => ("~", "\x1b[37m"),
            Self::Failed => ("✗", "\x1b[31m"),
        }
    }
}

/// Where the engine sends progress messages and per-application outcomes.
///
/// [`Linker`](crate::linker::Linker) only sees this trait, so tests and
/// other front ends can supply their own sink.
pub trait Log: Send + Sync {
    /// Heading for a new application or phase.
    fn stage(&self, msg: &str);
    /// Normal progress line.
    fn info(&self, msg: &str);
    /// Per-entry detail, shown with `--verbose`.
    fn debug(&self, msg: &str);
    /// Something surprising that did not stop the run.
    fn warn(&self, msg: &str);
    /// Something that aborted an application.
    fn error(&self, msg: &str);
    /// A change a dry run would have made.
    fn dry_run(&self, msg: &str);
    /// Remember how `app` fared for the closing summary.
    fn record_outcome(&self, app: &str, status: AppStatus, detail: Option<&str>);
}
