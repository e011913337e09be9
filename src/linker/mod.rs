//! The linking engine.
//!
//! A [`Linker`] mirrors one application's source subtree into the target
//! root: directories become real directories, everything else becomes a
//! symlink back to the source.  [`Linker::unlink`] reverses this and
//! [`Linker::relink`] runs both in sequence.
//!
//! Runs are single-threaded and never roll back.  A conflict aborts the
//! current application and leaves whatever was already created in place.
pub mod link;
pub mod report;
pub mod translate;
pub mod unlink;
pub mod walk;

pub use report::{LinkReport, RelinkReport, UnlinkReport};
pub use translate::PathTranslator;

use std::fmt;
use std::path::PathBuf;

use crate::config::app::AppConfig;
use crate::config::ignore::IgnoreSet;
use crate::config::{CONFIG_FILE_NAME, Config};
use crate::error::LinkError;
use crate::logging::Log;

/// Links, unlinks, and relinks applications under one [`Config`].
pub struct Linker<'a> {
    config: &'a Config,
    log: &'a dyn Log,
    dry_run: bool,
}

impl fmt::Debug for Linker<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Linker")
            .field("config", &self.config)
            .field("dry_run", &self.dry_run)
            .finish_non_exhaustive()
    }
}

impl<'a> Linker<'a> {
    /// Create a linker that modifies the file system.
    #[must_use]
    pub const fn new(config: &'a Config, log: &'a dyn Log) -> Self {
        Self {
            config,
            log,
            dry_run: false,
        }
    }

    /// Report what would change without touching the file system.
    #[must_use]
    pub const fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// The configuration this linker operates on.
    #[must_use]
    pub const fn config(&self) -> &Config {
        self.config
    }

    fn translator(&self) -> PathTranslator<'_> {
        PathTranslator::new(&self.config.target_root)
    }

    /// Resolve the effective ignore patterns for `app`.
    ///
    /// # Errors
    ///
    /// Returns [`LinkError::InvalidAppName`] for a name that is not a plain
    /// directory name, or [`LinkError::Config`] if the application's
    /// `.gldnrc.yml` is unreadable or any pattern fails to compile.
    pub fn resolve_ignore(&self, app: &str) -> Result<IgnoreSet, LinkError> {
        let app_dir = self.config.app_dir(app)?;
        let app_config = AppConfig::load(&app_dir)?;
        if app_config.is_ambiguous() {
            self.log.warn(&format!(
                "{app}: both 'ignore' and 'ignore!' are set; using 'ignore!'"
            ));
        }

        let origin: PathBuf = if app_config.ignore.is_some() || app_config.ignore_override.is_some()
        {
            app_dir.join(CONFIG_FILE_NAME)
        } else {
            self.config.source_root.join(CONFIG_FILE_NAME)
        };
        Ok(IgnoreSet::resolve(
            &self.config.root_ignore,
            &app_config,
            &origin,
        )?)
    }

    /// Unlink `app`, then link it again.
    ///
    /// # Errors
    ///
    /// Propagates the first error from either half.  If unlinking fails,
    /// linking is not attempted.
    pub fn relink(&self, app: &str) -> Result<RelinkReport, LinkError> {
        let unlinked = self.unlink(app)?;
        let linked = self.link(app)?;
        Ok(RelinkReport { unlinked, linked })
    }
}
