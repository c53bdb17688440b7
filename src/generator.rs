//! Generation run orchestration: plan, write, finalize.

use log::info;

use crate::error::Result;
use crate::filesystem::{Filesystem, LocalFilesystem};
use crate::finalizer::{finalize, ProcessRunner, SystemRunner};
use crate::formatter::Formatter;
use crate::plan::Plan;
use crate::renderer::MiniJinjaRenderer;
use crate::settings::Settings;
use crate::templates::{BundledTemplates, TemplateRepository};
use crate::writer::Writer;

/// Drives one generation run with the given collaborators.
pub struct Generator<'a> {
    templates: &'a dyn TemplateRepository,
    formatter: &'a dyn Formatter,
    filesystem: &'a dyn Filesystem,
    runner: &'a dyn ProcessRunner,
}

impl<'a> Generator<'a> {
    pub fn new(
        templates: &'a dyn TemplateRepository,
        formatter: &'a dyn Formatter,
        filesystem: &'a dyn Filesystem,
        runner: &'a dyn ProcessRunner,
    ) -> Self {
        Self { templates, formatter, filesystem, runner }
    }

    /// Generates the project described by `settings`.
    ///
    /// # Flow
    /// 1. Validates settings and builds the plan (no I/O on failure)
    /// 2. Creates the directory layout
    /// 3. Renders and writes every artifact
    /// 4. Vendors dependencies if requested
    pub fn run(&self, settings: &Settings) -> Result<Plan> {
        let plan = Plan::new(settings)?;
        info!(
            "Generating '{}' in '{}'.",
            settings.project_name,
            settings.project_root_dir.display()
        );

        let renderer = MiniJinjaRenderer::with_logger(settings.logger);
        Writer::new(self.templates, &renderer, self.formatter, self.filesystem)
            .apply(&plan, &settings.project_root_dir)?;

        finalize(&settings.project_root_dir, settings, self.runner)?;

        info!("Project '{}' generated.", settings.project_name);
        Ok(plan)
    }
}

/// Generates a project with the bundled templates, the local filesystem and
/// system processes, formatting Go sources with `formatter`.
pub fn run(settings: &Settings, formatter: &dyn Formatter) -> Result<Plan> {
    let templates = BundledTemplates::new();
    Generator::new(&templates, formatter, &LocalFilesystem, &SystemRunner).run(settings)
}
