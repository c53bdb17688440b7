//! Plan execution.
//! Creates the planned directory layout, then renders, formats and persists
//! every artifact in plan order.

use std::path::Path;

use log::{debug, info};

use crate::error::{Error, Result};
use crate::filesystem::Filesystem;
use crate::formatter::Formatter;
use crate::plan::{Artifact, Plan};
use crate::renderer::TemplateRenderer;
use crate::templates::TemplateRepository;

/// Writes a plan to disk using the given collaborators.
pub struct Writer<'a> {
    templates: &'a dyn TemplateRepository,
    renderer: &'a dyn TemplateRenderer,
    formatter: &'a dyn Formatter,
    filesystem: &'a dyn Filesystem,
}

impl<'a> Writer<'a> {
    pub fn new(
        templates: &'a dyn TemplateRepository,
        renderer: &'a dyn TemplateRenderer,
        formatter: &'a dyn Formatter,
        filesystem: &'a dyn Filesystem,
    ) -> Self {
        Self { templates, renderer, formatter, filesystem }
    }

    /// Applies the plan under `root_dir`.
    ///
    /// The layout phase finishes before any artifact is rendered. Nothing is
    /// rolled back on failure: directories and files written before the
    /// error stay on disk, and a re-run overwrites them.
    ///
    /// # Errors
    /// * `Error::ConfigurationError` if an artifact needs a directory the plan lacks
    /// * `Error::FilesystemError` if a directory or file cannot be created
    /// * `Error::TemplateNotFound` / `Error::TemplateError` if rendering fails
    /// * `Error::FormatError` if the formatter rejects rendered source
    pub fn apply(&self, plan: &Plan, root_dir: &Path) -> Result<()> {
        check_directories(plan)?;
        self.create_layout(plan, root_dir)?;

        for artifact in &plan.artifacts {
            self.write_artifact(artifact, root_dir)?;
        }

        Ok(())
    }

    fn create_layout(&self, plan: &Plan, root_dir: &Path) -> Result<()> {
        info!("Creating directories in '{}'.", root_dir.display());

        self.filesystem
            .create_dir(root_dir)
            .map_err(|e| Error::filesystem(root_dir, e))?;

        for dir in &plan.directories {
            let path = root_dir.join(dir);
            self.filesystem.create_dir(&path).map_err(|e| Error::filesystem(path, e))?;
        }

        Ok(())
    }

    fn write_artifact(&self, artifact: &Artifact, root_dir: &Path) -> Result<()> {
        let target = root_dir.join(&artifact.target_path);
        debug!("Rendering '{}' from template '{}'.", target.display(), artifact.template_name);

        let template = self.templates.lookup(artifact.template_name)?;
        let rendered = self.renderer.render(template, &artifact.context)?;

        let content = if artifact.post_format {
            self.formatter.format(rendered.as_bytes()).map_err(|e| Error::FormatError {
                path: artifact.target_path.clone(),
                reason: e.to_string(),
            })?
        } else {
            rendered.into_bytes()
        };

        self.filesystem
            .write_file(&target, &content)
            .map_err(|e| Error::filesystem(&target, e))?;

        info!("Created '{}'.", artifact.target_path.display());
        Ok(())
    }
}

fn check_directories(plan: &Plan) -> Result<()> {
    for artifact in &plan.artifacts {
        if let Some(dir) = artifact.required_dirs.iter().find(|dir| !plan.directories.contains(*dir)) {
            return Err(Error::ConfigurationError(format!(
                "'{}' needs directory '{}' which is not planned",
                artifact.target_path.display(),
                dir.display()
            )));
        }
    }
    Ok(())
}
