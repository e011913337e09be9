//! Command: show an application's effective ignore patterns.
use anyhow::Result;

use crate::cli::{AppOpts, GlobalOpts};
use crate::config::ignore::{IgnoreSet, IgnoreSource};
use crate::logging::Logger;

/// Print the resolved ignore list for one application.
///
/// # Errors
///
/// Returns an error if the application does not exist or its configuration
/// is invalid.
pub fn run(global: &GlobalOpts, opts: &AppOpts, log: &Logger) -> Result<()> {
    let setup = super::CommandSetup::init(global, log)?;
    setup.config.existing_app_dir(&opts.app)?;
    let set = setup.linker(log, global).resolve_ignore(&opts.app)?;
    log.stage(&format!("Ignored in {}", opts.app));
    for line in render(&set).lines() {
        log.info(line);
    }
    Ok(())
}

fn source_label(source: IgnoreSource) -> &'static str {
    match source {
        IgnoreSource::Root => "root list",
        IgnoreSource::Additive => "root list + application 'ignore'",
        IgnoreSource::Override => "application 'ignore!'",
    }
}

/// One pattern per line, followed by where the list came from.
fn render(set: &IgnoreSet) -> String {
    let mut out = String::new();
    for pattern in set.patterns() {
        out.push_str(pattern);
        out.push('\n');
    }
    out.push_str(&format!("(from {})", source_label(set.source())));
    out
}
