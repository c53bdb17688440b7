//! skeleton generates microservice project skeletons.
//! A set of feature choices is turned into a plan of directories and files,
//! each file is rendered from a bundled template, formatted, and written to
//! the target directory.

/// Command-line interface and settings resolution
pub mod cli;

/// Settings files in JSON or YAML
pub mod config;

/// Render context derived from settings
pub mod context;

/// Error types and handling for the skeleton application
pub mod error;

/// Filesystem access used while writing
pub mod filesystem;

/// Post-generation dependency vendoring
pub mod finalizer;

/// Source formatting for generated Go files
pub mod formatter;

/// Orchestration of a full generation run
pub mod generator;

/// Logger initialization for the binary
pub mod logger;

/// Artifact planning: which files exist and where
pub mod plan;

/// Interactive menus
pub mod prompt;

/// Template rendering
pub mod renderer;

/// Generation settings and feature choices
pub mod settings;

/// Bundled template store
pub mod templates;

/// Plan execution
pub mod writer;
