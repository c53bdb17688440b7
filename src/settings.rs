//! Generation settings and the feature choices they carry.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use clap::ValueEnum;
use regex::Regex;
use serde::Deserialize;

use crate::error::{Error, Result};

/// Pattern a project name must match. The name is used both as the Go module
/// path and as a directory under `cmd/`.
pub const PROJECT_NAME_PATTERN: &str = r"^[A-Za-z_][A-Za-z0-9_-]*$";

/// Logging library the generated service uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Deserialize)]
#[serde(try_from = "String")]
pub enum Logger {
    GoKit,
    Zap,
}

/// Database driver wired into the generated service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Deserialize)]
#[serde(try_from = "String")]
pub enum Database {
    None,
    Clickhouse,
    Postgresql,
}

/// HTTP router used by the transport layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Deserialize)]
#[serde(try_from = "String")]
pub enum Router {
    GorillaMux,
    Gin,
}

impl Logger {
    pub const ALL: [Logger; 2] = [Logger::GoKit, Logger::Zap];
}

impl Database {
    pub const ALL: [Database; 3] = [Database::None, Database::Clickhouse, Database::Postgresql];
}

impl Router {
    pub const ALL: [Router; 2] = [Router::GorillaMux, Router::Gin];
}

impl fmt::Display for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Logger::GoKit => write!(f, "Go Kit"),
            Logger::Zap => write!(f, "Zap"),
        }
    }
}

impl fmt::Display for Database {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Database::None => write!(f, "No database"),
            Database::Clickhouse => write!(f, "Clickhouse"),
            Database::Postgresql => write!(f, "Postgres"),
        }
    }
}

impl fmt::Display for Router {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Router::GorillaMux => write!(f, "Gorilla Mux"),
            Router::Gin => write!(f, "GIN"),
        }
    }
}

// Accepts display names as well as kebab/snake spellings, ignoring case.
fn normalize(s: &str) -> String {
    s.chars().filter(|c| !matches!(c, ' ' | '-' | '_')).collect::<String>().to_lowercase()
}

impl FromStr for Logger {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match normalize(s).as_str() {
            "gokit" => Ok(Logger::GoKit),
            "zap" => Ok(Logger::Zap),
            _ => Err(Error::ConfigurationError(format!("unknown logger '{s}'"))),
        }
    }
}

impl FromStr for Database {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match normalize(s).as_str() {
            "none" | "nodatabase" | "nodb" => Ok(Database::None),
            "clickhouse" => Ok(Database::Clickhouse),
            "postgres" | "postgresql" => Ok(Database::Postgresql),
            _ => Err(Error::ConfigurationError(format!("unknown database '{s}'"))),
        }
    }
}

impl FromStr for Router {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match normalize(s).as_str() {
            "gorillamux" | "gorilla" => Ok(Router::GorillaMux),
            "gin" => Ok(Router::Gin),
            _ => Err(Error::ConfigurationError(format!("unknown router '{s}'"))),
        }
    }
}

macro_rules! try_from_string {
    ($($ty:ty),*) => {
        $(impl TryFrom<String> for $ty {
            type Error = Error;

            fn try_from(value: String) -> Result<Self> {
                value.parse()
            }
        })*
    };
}

try_from_string!(Logger, Database, Router);

/// Input configuration for one generation run.
///
/// Built once by the front end and only ever read by the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub project_name: String,
    pub project_root_dir: PathBuf,
    pub logger: Logger,
    pub database: Database,
    pub router: Router,
    pub use_consul: bool,
    pub sync_config_with_consul: bool,
    pub use_jaeger: bool,
    pub use_prometheus: bool,
    pub with_dependencies: bool,
}

impl Settings {
    /// Creates settings with the first option of every menu and all optional
    /// features turned off.
    pub fn new<S: Into<String>, P: Into<PathBuf>>(project_name: S, project_root_dir: P) -> Self {
        Self {
            project_name: project_name.into(),
            project_root_dir: project_root_dir.into(),
            logger: Logger::GoKit,
            database: Database::None,
            router: Router::GorillaMux,
            use_consul: false,
            sync_config_with_consul: false,
            use_jaeger: false,
            use_prometheus: false,
            with_dependencies: false,
        }
    }

    /// Checks the settings for values the generator cannot work with.
    ///
    /// # Errors
    /// * `Error::ConfigurationError` if the project name is empty or not an
    ///   identifier, the root path is empty, or config sync is requested
    ///   without consul
    pub fn validate(&self) -> Result<()> {
        if self.project_name.is_empty() {
            return Err(Error::ConfigurationError("project name must not be empty".into()));
        }

        let pattern = Regex::new(PROJECT_NAME_PATTERN)
            .map_err(|e| Error::ConfigurationError(e.to_string()))?;
        if !pattern.is_match(&self.project_name) {
            return Err(Error::ConfigurationError(format!(
                "project name '{}' must match {}",
                self.project_name, PROJECT_NAME_PATTERN
            )));
        }

        if self.project_root_dir.as_os_str().is_empty() {
            return Err(Error::ConfigurationError("project root directory must be set".into()));
        }

        if self.sync_config_with_consul && !self.use_consul {
            return Err(Error::ConfigurationError(
                "syncing configuration with consul requires consul to be enabled".into(),
            ));
        }

        Ok(())
    }
}
