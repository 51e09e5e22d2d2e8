//! Platform default config path and default-file creation.

use std::path::{Path, PathBuf};

use helix_common::ConfigError;

use crate::schema::HelixConfig;

/// Platform-specific default config path.
///
/// On macOS: `~/Library/Application Support/helix/config.toml`
/// On Linux: `~/.config/helix/config.toml`
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    let base = dirs::config_dir()
        .ok_or_else(|| ConfigError::ParseError("no config directory on this platform".into()))?;
    Ok(base.join("helix").join("config.toml"))
}

/// Write a default config file at `path`, creating parent directories.
pub fn create_default_config(path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| ConfigError::ParseError(format!("failed to create config dir: {e}")))?;
    }

    let default = HelixConfig::default();
    let content = toml::to_string_pretty(&default)
        .map_err(|e| ConfigError::ParseError(format!("failed to serialize defaults: {e}")))?;

    std::fs::write(path, content).map_err(|e| {
        ConfigError::ParseError(format!("failed to write {}: {e}", path.display()))
    })?;

    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
