use anyhow::Result;
use clap::{Args, Subcommand};
use colored::*;
use log::info;
use optkit::config::Config;
use std::path::Path;

#[derive(Args)]
pub struct ConfigCommands {
    #[command(subcommand)]
    pub command: ConfigSubcommands,
}

#[derive(Subcommand)]
pub enum ConfigSubcommands {
    /// Show the effective configuration
    Show,
    /// Print the config file location
    Path,
    /// Write a default config file
    Init {
        /// Overwrite an existing config file
        #[arg(short, long)]
        force: bool,
    },
}

pub fn handle_config_command(
    args: ConfigCommands,
    config: &Config,
    config_override: Option<&Path>,
) -> Result<()> {
    let config_path = match config_override {
        Some(path) => path.to_path_buf(),
        None => Config::get_config_path()?,
    };

    match args.command {
        ConfigSubcommands::Show => {
            println!("{}", format!("# {}", config_path.display()).dimmed());
            print!("{}", config.to_toml()?);
        }
        ConfigSubcommands::Path => {
            println!("{}", config_path.display());
        }
        ConfigSubcommands::Init { force } => {
            init_config(&config_path, force)?;
            println!(
                "✅ Wrote default config to {}",
                config_path.display().to_string().cyan()
            );
        }
    }

    Ok(())
}

/// Write the default config to `path`, refusing to overwrite unless `force` is set
pub fn init_config(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        anyhow::bail!(
            "Config file already exists: {} (use --force to overwrite)",
            path.display()
        );
    }

    info!("Writing default config to: {:?}", path);
    Config::default().save_to(path)
}
