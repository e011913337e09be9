//! YAML configuration file parsing.
use serde::de::DeserializeOwned;
use std::path::Path;

use crate::error::ConfigError;

/// Load and deserialize a YAML file, returning `None` when it does not exist.
///
/// An empty (or whitespace-only) document deserializes to `T::default()`
/// rather than being rejected as a parse error.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] if the file exists but cannot be read, and
/// [`ConfigError::Invalid`] if it cannot be parsed.
pub fn load_optional<T>(path: &Path) -> Result<Option<T>, ConfigError>
where
    T: DeserializeOwned + Default,
{
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(ConfigError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    if content.trim().is_empty() {
        return Ok(Some(T::default()));
    }

    serde_yaml::from_str(&content)
        .map(Some)
        .map_err(|e| ConfigError::invalid(path, e.to_string()))
}

/// Load and deserialize a YAML file that must exist.
///
/// # Errors
///
/// Returns [`ConfigError::Missing`] if the file does not exist, otherwise the
/// same errors as [`load_optional`].
pub fn load_required<T>(path: &Path) -> Result<T, ConfigError>
where
    T: DeserializeOwned + Default,
{
    load_optional(path)?.ok_or_else(|| ConfigError::Missing {
        path: path.to_path_buf(),
    })
}
