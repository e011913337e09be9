//! Per-application configuration (`<source_root>/<app>/.gldnrc.yml`).
use serde::Deserialize;
use std::path::Path;

use super::{CONFIG_FILE_NAME, yaml_loader};
use crate::error::ConfigError;

/// Ignore settings an application may declare for itself.
///
/// `ignore` is merged with the root list; `ignore!` replaces it. The two are
/// meant to be mutually exclusive; when both are present the override wins.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct AppConfig {
    /// Additive patterns, unioned with the root list.
    #[serde(default)]
    pub ignore: Option<Vec<String>>,
    /// Overriding patterns, used instead of the root list.
    #[serde(default, rename = "ignore!")]
    pub ignore_override: Option<Vec<String>>,
}

impl AppConfig {
    /// Load the configuration file inside `app_dir`, defaulting to an empty
    /// configuration when it is absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(app_dir: &Path) -> Result<Self, ConfigError> {
        Ok(yaml_loader::load_optional(&app_dir.join(CONFIG_FILE_NAME))?.unwrap_or_default())
    }

    /// Whether both `ignore` and `ignore!` are set.
    #[must_use]
    pub const fn is_ambiguous(&self) -> bool {
        self.ignore.is_some() && self.ignore_override.is_some()
    }
}
