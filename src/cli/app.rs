use super::commands::config::ConfigCommands;
use super::commands::fields::FieldsArgs;
use super::commands::inspect::InspectArgs;
use super::commands::normalize::NormalizeArgs;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "optkit")]
#[command(about = "Inspect how JSON documents decode into optional values")]
pub struct Cli {
    /// Use this config file instead of the default location
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Decode a document as an optional value and show what it holds
    Inspect(InspectArgs),
    /// List which fields of a JSON object are present
    Fields(FieldsArgs),
    /// Decode a document and print its canonical encoding
    Normalize(NormalizeArgs),
    /// Configuration management
    Config(ConfigCommands),
}
