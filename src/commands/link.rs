//! Command: link applications into the target root.
use anyhow::Result;

use crate::cli::{AppsOpts, GlobalOpts};
use crate::logging::Logger;

/// Run the link command.
///
/// # Errors
///
/// Returns an error if configuration loading fails or any application
/// fails to link.
pub fn run(global: &GlobalOpts, opts: &AppsOpts, log: &Logger) -> Result<()> {
    let setup = super::CommandSetup::init(global, log)?;
    let linker = setup.linker(log, global);
    super::run_for_each_app(&opts.apps, "Linking", global.dry_run, log, |app| {
        linker.link(app)
    })
}
