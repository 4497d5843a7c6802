mod commands;

pub use commands::Cli;
pub use commands::Commands;

use crate::error::Result;
use crate::model::Config;

/// Merge command-line overrides into the loaded config.
pub fn resolve_config(cli: &Cli) -> Result<Config> {
    let mut config = Config::load(cli.config.as_deref())?;
    if cli.no_seed {
        config.seed = false;
    }
    if let Some(path) = &cli.log_file {
        config.log_file = Some(path.clone());
    }
    Ok(config)
}

pub fn run(cli: Cli) -> Result<()> {
    let config = resolve_config(&cli)?;

    match cli.command {
        Some(Commands::Config) => commands::config(&config),
        Some(Commands::Keys) => commands::keys(),
        Some(Commands::Board) | None => {
            crate::logging::init(config.log_file.as_deref())?;
            tracing::info!(seed = config.seed, "starting board");
            crate::tui::run_tui(config)
        }
    }
}
