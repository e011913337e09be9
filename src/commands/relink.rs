//! Command: unlink and link applications again.
use anyhow::Result;

use crate::cli::{AppsOpts, GlobalOpts};
use crate::logging::Logger;

/// Run the relink command.
///
/// # Errors
///
/// Returns an error if configuration loading fails or any application
/// fails to unlink or link.
pub fn run(global: &GlobalOpts, opts: &AppsOpts, log: &Logger) -> Result<()> {
    let setup = super::CommandSetup::init(global, log)?;
    let linker = setup.linker(log, global);
    super::run_for_each_app(&opts.apps, "Relinking", global.dry_run, log, |app| {
        linker.relink(app)
    })
}
