//! Console and log-file rendering of `tracing` events.
use std::fmt::{self, Write as _};
use std::fs;
use std::io::Write as _;
use std::path::Path;
use std::sync::Mutex;

use tracing::Level;

use super::utils::{Stamp, log_file_path, strip_ansi};

pub(super) const STAGE_TARGET: &str = "gldn::stage";
pub(super) const DRY_RUN_TARGET: &str = "gldn::dry_run";

/// How an event is presented, from its level and target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineKind {
    Stage,
    DryRun,
    Info,
    Debug,
    Warn,
    Error,
}

impl LineKind {
    fn of(meta: &tracing::Metadata<'_>) -> Self {
        match (*meta.level(), meta.target()) {
            (Level::ERROR, _) => Self::Error,
            (Level::WARN, _) => Self::Warn,
            (Level::INFO, STAGE_TARGET) => Self::Stage,
            (Level::INFO, DRY_RUN_TARGET) => Self::DryRun,
            (Level::INFO, _) => Self::Info,
            _ => Self::Debug,
        }
    }

    /// Prefix in the log file, after the timestamp.
    const fn file_prefix(self) -> &'static str {
        match self {
            Self::Stage => "==> ",
            Self::DryRun => "    [dry run] ",
            Self::Info => "    ",
            Self::Debug => "    [debug] ",
            Self::Warn => "    [warn] ",
            Self::Error => "    [error] ",
        }
    }

    fn write_console(self, out: &mut impl fmt::Write, msg: &str) -> fmt::Result {
        match self {
            Self::Stage => writeln!(out, "\x1b[1;34m==>\x1b[0m \x1b[1m{msg}\x1b[0m"),
            Self::DryRun => writeln!(out, "  \x1b[33m[DRY RUN]\x1b[0m {msg}"),
            Self::Info => writeln!(out, "  {msg}"),
            Self::Debug => writeln!(out, "  \x1b[2m{msg}\x1b[0m"),
            Self::Warn => writeln!(out, "\x1b[33mWARN\x1b[0m  {msg}"),
            Self::Error => writeln!(out, "\x1b[31mERROR\x1b[0m {msg}"),
        }
    }
}

/// The `message` field of an event.
fn message_of(event: &tracing::Event<'_>) -> String {
    struct Message(String);

    impl tracing::field::Visit for Message {
        fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
            if field.name() == "message" {
                value.clone_into(&mut self.0);
            }
        }

        fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn fmt::Debug) {
            if field.name() == "message" {
                self.0.clear();
                write!(self.0, "{value:?}").ok();
            }
        }
    }

    let mut message = Message(String::new());
    event.record(&mut message);
    message.0
}

/// Appends every event to one subcommand's log file as timestamped plain
/// text, whatever the console verbosity.
#[derive(Debug)]
pub(super) struct FileLayer {
    file: Mutex<fs::File>,
}

impl FileLayer {
    /// Open `<log dir>/<command>.log`, or `None` if that is impossible.
    pub(super) fn new(command: &str) -> Option<Self> {
        Self::create(&log_file_path(command)?, command)
    }

    /// Replace `path` with a fresh file headed by the version, subcommand,
    /// and start time.
    pub(super) fn create(path: &Path, command: &str) -> Option<Self> {
        let version =
            option_env!("GLDN_VERSION").unwrap_or(concat!("dev-", env!("CARGO_PKG_VERSION")));
        let mut file = fs::File::create(path).ok()?;
        writeln!(file, "# gldn {version} {command}, started {}", Stamp::Header.now()).ok()?;
        Some(Self {
            file: Mutex::new(file),
        })
    }
}

impl<S: tracing::Subscriber> tracing_subscriber::Layer<S> for FileLayer {
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: tracing_subscriber::layer::Context<'_, S>) {
        let kind = LineKind::of(event.metadata());
        let msg = strip_ansi(&message_of(event));
        if let Ok(mut file) = self.file.lock() {
            writeln!(file, "[{}] {}{msg}", Stamp::Line.now(), kind.file_prefix()).ok();
        }
    }
}

/// Console rendering: bold stage headings, indented progress lines,
/// dimmed detail, coloured warnings and errors.
struct ConsoleFormat;

impl<S, N> tracing_subscriber::fmt::FormatEvent<S, N> for ConsoleFormat
where
    S: tracing::Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
    N: for<'a> tracing_subscriber::fmt::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        _ctx: &tracing_subscriber::fmt::FmtContext<'_, S, N>,
        mut writer: tracing_subscriber::fmt::format::Writer<'_>,
        event: &tracing::Event<'_>,
    ) -> fmt::Result {
        LineKind::of(event.metadata()).write_console(&mut writer, &message_of(event))
    }
}

/// Install the process-wide subscriber for one `gldn` subcommand.
///
/// Warnings and errors go to stderr, everything else to stdout.  The
/// console shows `info` and up, or `debug` with `verbose`; `RUST_LOG`
/// replaces that choice.  The log file always receives `debug` and up.
///
/// Call once, before the first log line.
pub fn init_subscriber(verbose: bool, command: &str) {
    use tracing_subscriber::fmt::writer::MakeWriterExt as _;
    use tracing_subscriber::{
        EnvFilter, Layer as _, filter::LevelFilter, fmt, layer::SubscriberExt as _,
        util::SubscriberInitExt as _,
    };

    let default_level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };
    let console = fmt::layer()
        .event_format(ConsoleFormat)
        .with_writer(
            std::io::stderr
                .with_max_level(Level::WARN)
                .and(std::io::stdout.with_min_level(Level::INFO)),
        )
        .with_filter(
            EnvFilter::builder()
                .with_default_directive(default_level.into())
                .from_env_lossy(),
        );
    let file = FileLayer::new(command).map(|layer| layer.with_filter(LevelFilter::DEBUG));

    tracing_subscriber::registry().with(console).with(file).init();
}
