//! Command: list applications or show one application's source tree.
use anyhow::Result;
use std::path::Path;

use crate::cli::{GlobalOpts, ListOpts};
use crate::exec;
use crate::logging::Logger;

/// List every application, or display the tree of one.
///
/// # Errors
///
/// Returns an error if the source root cannot be read, the application does
/// not exist, or the tree listing program fails.
pub fn run(global: &GlobalOpts, opts: &ListOpts, log: &Logger) -> Result<()> {
    let setup = super::CommandSetup::init(global, log)?;
    match &opts.app {
        None => {
            log.stage("Applications");
            for app in setup.config.applications()? {
                log.info(&app);
            }
        }
        Some(app) => {
            let dir = setup.config.existing_app_dir(app)?;
            log.stage(&format!("Tree of {app}"));
            for line in show_tree(&dir)?.lines() {
                log.info(line);
            }
        }
    }
    Ok(())
}

/// Render `dir` with `tree` when installed, else `ls -lAR`.
fn show_tree(dir: &Path) -> Result<String> {
    let path = dir.to_string_lossy();
    let result = if exec::which("tree") {
        exec::run("tree", &["-a", "--noreport", &path])?
    } else {
        exec::run("ls", &["-lAR", &path])?
    };
    Ok(result.stdout)
}
