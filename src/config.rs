//! Settings file handling.
//! Lets a generation run be described in a JSON or YAML file instead of
//! answering every menu interactively.

use crate::error::{Error, Result};
use crate::settings::{Database, Logger, Router};
use log::debug;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Partial settings read from a file. Absent fields fall back to command-line
/// flags, then to interactive prompts.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SettingsFile {
    pub project_name: Option<String>,
    pub project_root_dir: Option<PathBuf>,
    pub logger: Option<Logger>,
    pub database: Option<Database>,
    pub router: Option<Router>,
    pub use_consul: Option<bool>,
    pub sync_config_with_consul: Option<bool>,
    pub use_jaeger: Option<bool>,
    pub use_prometheus: Option<bool>,
    pub with_dependencies: Option<bool>,
}

/// Reads and parses a settings file.
///
/// # Errors
/// * `Error::FilesystemError` if the file cannot be read
/// * `Error::ConfigurationError` if the content is neither valid JSON nor YAML,
///   or names an unknown logger, database or router
pub fn load_settings_file<P: AsRef<Path>>(path: P) -> Result<SettingsFile> {
    let path = path.as_ref();
    debug!("Loading settings from {}", path.display());
    let content = std::fs::read_to_string(path).map_err(|e| Error::filesystem(path, e))?;
    parse_settings_file(&content)
}

/// Parses settings file content, trying JSON first and YAML second.
pub fn parse_settings_file(content: &str) -> Result<SettingsFile> {
    match serde_json::from_str(content) {
        Ok(settings) => Ok(settings),
        Err(_) => serde_yaml::from_str(content)
            .map_err(|e| Error::ConfigurationError(format!("Invalid settings file: {e}"))),
    }
}
