//! Logger setup for the skeleton binary.

/// Initializes env_logger at `Debug` when verbose and `Info` otherwise.
/// `RUST_LOG` still overrides the level for individual modules.
pub fn init_logger(verbose: bool) {
    env_logger::Builder::new()
        .filter_level(if verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .format_timestamp(None)
        .format_target(false)
        .parse_default_env()
        .init();
}
