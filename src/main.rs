use anyhow::Result;
use clap::Parser;
use log::{debug, info};

mod cli;

use cli::commands::{
    handle_config_command, handle_fields_command, handle_inspect_command,
    handle_normalize_command,
};
use cli::{Cli, Commands};
use optkit::config::Config;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Config decides the default log level, so load it before the logger exists
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.log_level.as_str()),
    )
    .init();

    if !config.output.color {
        colored::control::set_override(false);
    }

    info!("Starting optkit");
    debug!("Using config: {:?}", config);

    match cli.command {
        Commands::Inspect(args) => handle_inspect_command(args, &config),
        Commands::Fields(args) => handle_fields_command(args),
        Commands::Normalize(args) => handle_normalize_command(args, &config),
        Commands::Config(args) => handle_config_command(args, &config, cli.config.as_deref()),
    }
}
