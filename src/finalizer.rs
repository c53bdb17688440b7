//! Post-generation dependency vendoring.

use std::fmt;
use std::path::Path;
use std::process::Command;

use log::info;

use crate::error::{Error, Result};
use crate::settings::Settings;

/// An external command: program plus arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl ShellCommand {
    pub fn new<S: Into<String>>(program: S, args: &[&str]) -> Self {
        Self { program: program.into(), args: args.iter().map(|a| a.to_string()).collect() }
    }

    /// `go mod vendor`, which downloads dependencies into `vendor/`.
    pub fn vendor() -> Self {
        Self::new("go", &["mod", "vendor"])
    }
}

impl fmt::Display for ShellCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// Trait for running external commands.
pub trait ProcessRunner {
    /// Runs the command in `workdir` and waits for it to finish.
    ///
    /// # Errors
    /// * `Error::FinalizeError` if the command cannot start or exits unsuccessfully
    fn run(&self, command: &ShellCommand, workdir: &Path) -> Result<()>;
}

/// Runs commands with `std::process::Command`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl ProcessRunner for SystemRunner {
    fn run(&self, command: &ShellCommand, workdir: &Path) -> Result<()> {
        let output = Command::new(&command.program)
            .args(&command.args)
            .current_dir(workdir)
            .output()
            .map_err(|e| Error::FinalizeError {
                command: command.to_string(),
                reason: e.to_string(),
            })?;

        if !output.status.success() {
            return Err(Error::FinalizeError {
                command: command.to_string(),
                reason: format!(
                    "{}: {}",
                    output.status,
                    String::from_utf8_lossy(&output.stderr).trim()
                ),
            });
        }

        Ok(())
    }
}

/// Vendors the generated project's dependencies when the settings ask for it.
///
/// Must run only after every artifact has been written. A failure leaves the
/// generated sources in place so dependencies can be fetched by hand.
pub fn finalize(root_dir: &Path, settings: &Settings, runner: &dyn ProcessRunner) -> Result<()> {
    if !settings.with_dependencies {
        return Ok(());
    }

    let command = ShellCommand::vendor();
    info!("Running '{}' in '{}'.", command, root_dir.display());
    runner.run(&command, root_dir)
}
