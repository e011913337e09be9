//! Console and file logging for `gldn` subcommands.
//!
//! Everything goes through `tracing`.  [`init_subscriber`] renders events
//! for the terminal and mirrors them into a per-subcommand log file, and
//! [`Logger`] collects one [`AppOutcome`] per application for the closing
//! summary.

mod logger;
mod subscriber;
mod types;
mod utils;

pub use logger::Logger;
pub use subscriber::init_subscriber;
pub use types::{AppOutcome, AppStatus, Log};

/// A [`Logger`] whose events go only to `test.log` in a fresh temporary
/// directory, through a subscriber scoped to the current thread.
///
/// Keep the guard alive while logging; drop it before reading the file
/// back.
#[cfg(test)]
#[allow(clippy::expect_used)]
pub(crate) fn isolated_logger() -> (Logger, tempfile::TempDir, tracing::dispatcher::DefaultGuard) {
    use tracing_subscriber::{Layer as _, filter::LevelFilter, layer::SubscriberExt as _};
    let tmp = tempfile::tempdir().expect("failed to create temp dir");
    let path = tmp.path().join("test.log");
    let file_layer = subscriber::FileLayer::create(&path, "test").expect("failed to create file layer");
    let log = Logger::with_log_file(Some(path));
    let subscriber =
        tracing_subscriber::registry().with(file_layer.with_filter(LevelFilter::DEBUG));
    let guard = tracing::dispatcher::set_default(&tracing::Dispatch::new(subscriber));
    (log, tmp, guard)
}
