//! skeleton's main application entry point.
//! Parses arguments, collects settings and runs the generator.

use skeleton::{
    cli::{get_args, resolve_settings, Args, Commands},
    error::{default_error_handler, Result},
    formatter::{Formatter, GoFormatter, NoopFormatter},
    generator,
    logger::init_logger,
    prompt::DialoguerPrompter,
};

/// Main application entry point.
fn main() {
    let args = get_args();
    init_logger(args.verbose);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

fn run(args: Args) -> Result<()> {
    match args.command {
        Commands::Generate(generate) => {
            let prompter = DialoguerPrompter::new();
            let settings = resolve_settings(&generate, &prompter)?;

            let formatter: Box<dyn Formatter> = if generate.no_format {
                Box::new(NoopFormatter)
            } else {
                Box::new(GoFormatter::with_binary(&generate.gofmt))
            };

            let plan = generator::run(&settings, &*formatter)?;
            println!(
                "Generated {} files in {}.",
                plan.artifacts.len(),
                settings.project_root_dir.display()
            );
        }
    }

    Ok(())
}
