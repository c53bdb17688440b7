//! Error handling for the skeleton generator.
//! Defines the error taxonomy shared by the planner, renderer, writer and finalizer.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Custom error types for skeleton operations.
///
/// Every variant is fatal: the generator propagates the first error it meets
/// and never retries or downgrades it to a warning.
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid or contradictory settings, detected before any I/O happens.
    #[error("Configuration error: {0}.")]
    ConfigurationError(String),

    /// The plan referenced a template the repository does not bundle.
    #[error("Template '{name}' not found.")]
    TemplateNotFound { name: String },

    /// Malformed template, or a template referencing a key the context lacks.
    #[error("Template error: {0}.")]
    TemplateError(#[from] minijinja::Error),

    /// Rendered source was rejected by the formatter.
    #[error("Failed to format '{path}': {reason}.")]
    FormatError { path: PathBuf, reason: String },

    /// Directory or file creation failed.
    #[error("Filesystem error at '{path}': {source}.")]
    FilesystemError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The post-generation dependency step failed.
    #[error("Command '{command}' failed: {reason}.")]
    FinalizeError { command: String, reason: String },

    /// Interactive prompt could not be completed.
    #[error("Prompt error: {0}.")]
    PromptError(String),
}

impl Error {
    /// Wraps an I/O error together with the path it happened at.
    pub fn filesystem<P: Into<PathBuf>>(path: P, source: io::Error) -> Self {
        Error::FilesystemError { path: path.into(), source }
    }
}

/// Convenience type alias for Results with skeleton's Error as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{err}");
    std::process::exit(1);
}
