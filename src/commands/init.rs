//! Command: write a starter root configuration.
use anyhow::{Context as _, Result, bail};

use crate::cli::{GlobalOpts, InitOpts};
use crate::config::{CONFIG_FILE_NAME, DEFAULT_TARGET, RootFile, TARGET_ENV};
use crate::logging::Logger;

/// Create `<source_root>/.gldnrc.yml`.
///
/// # Errors
///
/// Returns an error if the file already exists or cannot be written.
pub fn run(global: &GlobalOpts, opts: &InitOpts, log: &Logger) -> Result<()> {
    let source_root = super::resolve_source_root(global)?;
    let path = source_root.join(CONFIG_FILE_NAME);
    if path.exists() {
        bail!("{} already exists", path.display());
    }

    let target = opts
        .target
        .clone()
        .or_else(|| std::env::var(TARGET_ENV).ok().filter(|t| !t.trim().is_empty()))
        .unwrap_or_else(|| DEFAULT_TARGET.to_string());
    let content = render_root_file(&target)?;

    if global.dry_run {
        log.dry_run(&format!("would write {} (target: {target})", path.display()));
        return Ok(());
    }
    std::fs::write(&path, content).with_context(|| format!("writing {}", path.display()))?;
    log.info(&format!("wrote {} (target: {target})", path.display()));
    Ok(())
}

/// YAML for a root file with `target` and an empty ignore list.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn render_root_file(target: &str) -> Result<String> {
    let file = RootFile {
        target: Some(target.to_string()),
        ignore: Some(Vec::new()),
    };
    serde_yaml::to_string(&file).context("serializing root configuration")
}
