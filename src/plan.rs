//! Artifact planning.
//! Decides which files a generation run produces, where they go, and which
//! directories must exist before each of them is written. Planning does no
//! I/O, so every decision here can be inspected before touching the disk.

use std::path::{Path, PathBuf};

use indexmap::IndexSet;
use log::debug;

use crate::context::build_context;
use crate::error::Result;
use crate::settings::{Router, Settings};

/// Directory that receives vendored dependencies.
pub const VENDOR_DIR: &str = "vendor";

/// A position in the fixed ordering of generated files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    ModuleDescriptor,
    GitIgnore,
    Dockerfile,
    Makefile,
    Readme,
    LinterConfig,
    LinterExcludes,
    EntryPoint,
    ConfigLoader,
    ConfigExample,
    Logger,
    Tracer,
    ServiceRegistry,
    Metrics,
    Application,
    Endpoints,
    EndpointMiddleware,
    HttpTransport,
    SmokeTest,
}

impl Slot {
    /// Every slot, in the order artifacts are planned and written.
    pub const ALL: [Slot; 19] = [
        Slot::ModuleDescriptor,
        Slot::GitIgnore,
        Slot::Dockerfile,
        Slot::Makefile,
        Slot::Readme,
        Slot::LinterConfig,
        Slot::LinterExcludes,
        Slot::EntryPoint,
        Slot::ConfigLoader,
        Slot::ConfigExample,
        Slot::Logger,
        Slot::Tracer,
        Slot::ServiceRegistry,
        Slot::Metrics,
        Slot::Application,
        Slot::Endpoints,
        Slot::EndpointMiddleware,
        Slot::HttpTransport,
        Slot::SmokeTest,
    ];

    /// Whether the slot produces a file for these settings.
    pub fn is_enabled(self, settings: &Settings) -> bool {
        match self {
            Slot::Tracer => settings.use_jaeger,
            Slot::ServiceRegistry => settings.use_consul,
            Slot::Metrics => settings.use_prometheus,
            Slot::Endpoints | Slot::EndpointMiddleware => settings.router == Router::GorillaMux,
            _ => true,
        }
    }

    /// Template the slot is rendered from.
    pub fn template_name(self, settings: &Settings) -> &'static str {
        match self {
            Slot::ModuleDescriptor => "gomod",
            Slot::GitIgnore => "gitignore",
            Slot::Dockerfile => "dockerfile",
            Slot::Makefile => "makefile",
            Slot::Readme => "readme",
            Slot::LinterConfig => "golangci_cfg",
            Slot::LinterExcludes => "errcheck_excludes",
            Slot::EntryPoint => "main",
            Slot::ConfigLoader => "config",
            Slot::ConfigExample => "config_yml",
            Slot::Logger => "logger",
            Slot::Tracer => "tracer",
            Slot::ServiceRegistry => "consul",
            Slot::Metrics => "metrics",
            Slot::Application => "app",
            Slot::Endpoints => "endpoint_gokit",
            Slot::EndpointMiddleware => "endpoint_middleware",
            Slot::HttpTransport => match settings.router {
                Router::GorillaMux => "http_server_gokit",
                Router::Gin => "http_server_gin",
            },
            Slot::SmokeTest => "app_test",
        }
    }

    /// Output path of the slot, relative to the project root.
    pub fn target_path(self, settings: &Settings) -> PathBuf {
        match self {
            Slot::ModuleDescriptor => PathBuf::from("go.mod"),
            Slot::GitIgnore => PathBuf::from(".gitignore"),
            Slot::Dockerfile => PathBuf::from("Dockerfile"),
            Slot::Makefile => PathBuf::from("Makefile"),
            Slot::Readme => PathBuf::from("README.md"),
            Slot::LinterConfig => PathBuf::from(".golangci.yml"),
            Slot::LinterExcludes => PathBuf::from(".errcheck_excludes.txt"),
            Slot::EntryPoint => Path::new("cmd").join(&settings.project_name).join("main.go"),
            Slot::ConfigLoader => PathBuf::from("internal/config/config.go"),
            Slot::ConfigExample => PathBuf::from("configs/config.yml"),
            Slot::Logger => PathBuf::from("internal/infrastructure/logger/logger.go"),
            Slot::Tracer => PathBuf::from("internal/infrastructure/tracer/jaeger.go"),
            Slot::ServiceRegistry => PathBuf::from("internal/infrastructure/consul/consul.go"),
            Slot::Metrics => PathBuf::from("internal/infrastructure/metrics/prometheus.go"),
            Slot::Application => PathBuf::from("internal/app.go"),
            Slot::Endpoints => PathBuf::from("internal/endpoint/endpoints.go"),
            Slot::EndpointMiddleware => PathBuf::from("internal/endpoint/middleware.go"),
            Slot::HttpTransport => PathBuf::from("internal/transport/http/server.go"),
            Slot::SmokeTest => PathBuf::from("test/app_test.go"),
        }
    }

    /// Go sources go through the formatter, everything else is written as rendered.
    pub fn post_format(self) -> bool {
        !matches!(
            self,
            Slot::ModuleDescriptor
                | Slot::GitIgnore
                | Slot::Dockerfile
                | Slot::Makefile
                | Slot::Readme
                | Slot::LinterConfig
                | Slot::LinterExcludes
                | Slot::ConfigExample
        )
    }
}

/// One planned output file.
#[derive(Debug, Clone, PartialEq)]
pub struct Artifact {
    pub slot: Slot,
    pub template_name: &'static str,
    /// Relative to the project root.
    pub target_path: PathBuf,
    /// Parent-first chain of directories the target lives in.
    pub required_dirs: Vec<PathBuf>,
    pub context: serde_json::Value,
    pub post_format: bool,
}

impl Artifact {
    /// Creates an artifact, deriving its required directories from the target path.
    pub fn new<P: Into<PathBuf>>(
        slot: Slot,
        template_name: &'static str,
        target_path: P,
        context: serde_json::Value,
        post_format: bool,
    ) -> Self {
        let target_path = target_path.into();
        let required_dirs = parent_dirs(&target_path);
        Self { slot, template_name, target_path, required_dirs, context, post_format }
    }
}

/// Directories and artifacts of one generation run.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Plan {
    /// Every directory to create, parents before children.
    pub directories: IndexSet<PathBuf>,
    pub artifacts: Vec<Artifact>,
}

impl Plan {
    /// Builds the plan for the given settings.
    ///
    /// # Errors
    /// * `Error::ConfigurationError` if the settings fail validation. Nothing
    ///   is planned in that case.
    pub fn new(settings: &Settings) -> Result<Self> {
        settings.validate()?;

        let context = build_context(settings);
        let mut plan = Plan::default();

        for slot in Slot::ALL.into_iter().filter(|slot| slot.is_enabled(settings)) {
            plan.push(Artifact::new(
                slot,
                slot.template_name(settings),
                slot.target_path(settings),
                context.clone(),
                slot.post_format(),
            ));
        }

        if settings.with_dependencies {
            plan.directories.insert(PathBuf::from(VENDOR_DIR));
        }

        debug!(
            "Planned {} directories and {} files.",
            plan.directories.len(),
            plan.artifacts.len()
        );

        Ok(plan)
    }

    /// Appends an artifact and registers the directories it needs.
    pub fn push(&mut self, artifact: Artifact) {
        self.directories.extend(artifact.required_dirs.iter().cloned());
        self.artifacts.push(artifact);
    }

    /// Returns the artifact planned for `slot`, if any.
    pub fn artifact(&self, slot: Slot) -> Option<&Artifact> {
        self.artifacts.iter().find(|artifact| artifact.slot == slot)
    }

    /// Whether an artifact is planned for `slot`.
    pub fn contains(&self, slot: Slot) -> bool {
        self.artifact(slot).is_some()
    }
}

fn parent_dirs(target: &Path) -> Vec<PathBuf> {
    let mut dirs: Vec<PathBuf> = target
        .parent()
        .into_iter()
        .flat_map(Path::ancestors)
        .filter(|dir| !dir.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .collect();
    dirs.reverse();
    dirs
}
