//! Command-line interface implementation for skeleton.
//! Provides argument parsing and turns flags, settings files and prompt
//! answers into one complete `Settings` value.

use clap::{error::ErrorKind, Args as ClapArgs, CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::{load_settings_file, SettingsFile};
use crate::error::{Error, Result};
use crate::prompt::{choose, Prompter};
use crate::settings::{Database, Logger, Router, Settings};

/// Command-line arguments structure for skeleton.
#[derive(Parser, Debug)]
#[command(author, version, about = "skeleton: microservice skeleton generator", long_about = None)]
pub struct Args {
    /// Enable verbose logging output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate skeleton code
    #[command(alias = "g")]
    Generate(GenerateArgs),
}

#[derive(ClapArgs, Debug, Default)]
pub struct GenerateArgs {
    /// Directory where the new application will be created
    #[arg(short, long, value_name = "PATH")]
    pub directory: Option<PathBuf>,

    /// Application name, also used as the Go module path
    #[arg(short, long, value_name = "NAME")]
    pub name: Option<String>,

    /// Download service dependencies into the vendor directory (`--wd` for short)
    #[arg(long, visible_alias = "wd", num_args = 0..=1, default_missing_value = "true")]
    pub with_dependencies: Option<bool>,

    /// JSON or YAML file with settings; flags take precedence over it
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Logger used by the generated service
    #[arg(long, value_enum)]
    pub logger: Option<Logger>,

    /// Database driver wired into the generated service
    #[arg(long, value_enum)]
    pub database: Option<Database>,

    /// HTTP router used by the transport layer
    #[arg(long, value_enum)]
    pub router: Option<Router>,

    /// Register the service in consul
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    pub consul: Option<bool>,

    /// Load configuration from consul KV
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    pub sync_config: Option<bool>,

    /// Set up a jaeger tracer
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    pub jaeger: Option<bool>,

    /// Expose prometheus metrics
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    pub prometheus: Option<bool>,

    /// Write Go sources without running gofmt
    #[arg(long)]
    pub no_format: bool,

    /// gofmt binary used to format Go sources
    #[arg(long, value_name = "PATH", default_value = "gofmt")]
    pub gofmt: PathBuf,
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With status code 1 and the help text if no subcommand or a required
///   argument is missing
/// * With clap's default error handling for other argument errors
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => match e.kind() {
            ErrorKind::MissingSubcommand
            | ErrorKind::MissingRequiredArgument
            | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
                if let Err(e) = Args::command().print_help() {
                    eprintln!("Failed to print help: {e}");
                }
                std::process::exit(1);
            }
            _ => e.exit(),
        },
    }
}

/// Builds complete settings from flags, the optional settings file and,
/// for anything still missing, interactive prompts.
///
/// Menus are asked in a fixed order: consul, config sync (only when consul is
/// used), jaeger, prometheus, logger, database, router. Answers are taken
/// as given; contradictory combinations are rejected later by planning.
///
/// # Errors
/// * `Error::ConfigurationError` if the directory or name is given nowhere
/// * Errors from loading the settings file or from the prompter
pub fn resolve_settings(args: &GenerateArgs, prompter: &dyn Prompter) -> Result<Settings> {
    let file = match &args.config {
        Some(path) => load_settings_file(path)?,
        None => SettingsFile::default(),
    };

    let project_root_dir = args.directory.clone().or(file.project_root_dir).ok_or_else(|| {
        Error::ConfigurationError("project directory is required (--directory)".into())
    })?;
    let project_name = args
        .name
        .clone()
        .or(file.project_name)
        .ok_or_else(|| Error::ConfigurationError("project name is required (--name)".into()))?;

    let use_consul = match args.consul.or(file.use_consul) {
        Some(value) => value,
        None => prompter.confirm("Use consul?", true)?,
    };
    let sync_config_with_consul = match args.sync_config.or(file.sync_config_with_consul) {
        Some(value) => value,
        None if use_consul => prompter.confirm("Sync config with consul?", true)?,
        None => false,
    };
    let use_jaeger = match args.jaeger.or(file.use_jaeger) {
        Some(value) => value,
        None => prompter.confirm("Use jaeger tracer?", true)?,
    };
    let use_prometheus = match args.prometheus.or(file.use_prometheus) {
        Some(value) => value,
        None => prompter.confirm("Use prometheus?", true)?,
    };
    let logger = match args.logger.or(file.logger) {
        Some(value) => value,
        None => choose(prompter, "Select logger", &Logger::ALL)?,
    };
    let database = match args.database.or(file.database) {
        Some(value) => value,
        None => choose(prompter, "Select database", &Database::ALL)?,
    };
    let router = match args.router.or(file.router) {
        Some(value) => value,
        None => choose(prompter, "Select router", &Router::ALL)?,
    };

    Ok(Settings {
        project_name,
        project_root_dir,
        logger,
        database,
        router,
        use_consul,
        sync_config_with_consul,
        use_jaeger,
        use_prometheus,
        with_dependencies: args.with_dependencies.or(file.with_dependencies).unwrap_or(true),
    })
}
