//! Bundled template store.
//! Every template the artifact plan can reference is compiled into the binary,
//! so lookups never touch the filesystem.

use indexmap::IndexMap;

use crate::error::{Error, Result};

/// Trait for resolving a template name to its raw text.
pub trait TemplateRepository {
    /// Returns the template text registered under `name`.
    ///
    /// # Errors
    /// * `Error::TemplateNotFound` if no template has that name
    fn lookup(&self, name: &str) -> Result<&str>;
}

macro_rules! bundle {
    ($($name:literal),* $(,)?) => {
        &[$(($name, include_str!(concat!("../templates/", $name, ".j2")))),*]
    };
}

/// Name and text of every bundled template.
pub const BUNDLED: &[(&str, &str)] = bundle![
    "gomod",
    "gitignore",
    "dockerfile",
    "makefile",
    "readme",
    "golangci_cfg",
    "errcheck_excludes",
    "main",
    "config",
    "config_yml",
    "logger",
    "tracer",
    "consul",
    "metrics",
    "app",
    "endpoint_gokit",
    "endpoint_middleware",
    "http_server_gokit",
    "http_server_gin",
    "app_test",
];

/// Read-only template store backed by a name → text map.
#[derive(Debug, Clone)]
pub struct BundledTemplates {
    templates: IndexMap<&'static str, &'static str>,
}

impl BundledTemplates {
    /// Creates a store holding the templates compiled into the binary.
    pub fn new() -> Self {
        Self::from_entries(BUNDLED)
    }

    /// Creates a store from an explicit list of `(name, text)` pairs.
    pub fn from_entries(entries: &[(&'static str, &'static str)]) -> Self {
        Self { templates: entries.iter().copied().collect() }
    }

    /// Names of all templates in the store, in registration order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.templates.keys().copied()
    }
}

impl Default for BundledTemplates {
    fn default() -> Self {
        BundledTemplates::new()
    }
}

impl TemplateRepository for BundledTemplates {
    fn lookup(&self, name: &str) -> Result<&str> {
        self.templates
            .get(name)
            .copied()
            .ok_or_else(|| Error::TemplateNotFound { name: name.to_string() })
    }
}
