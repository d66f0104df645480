use anyhow::{Context, Result};
use clap::Args;
use colored::*;
use log::debug;
use optkit::config::{Config, Variant};
use optkit::{Opt, Ptr, codec};
use serde_json::Value;
use std::path::PathBuf;

use super::{read_input, render};

#[derive(Args)]
pub struct InspectArgs {
    /// JSON file to read (stdin if omitted or `-`)
    pub file: Option<PathBuf>,

    /// Optional type to decode into (defaults to the configured variant)
    #[arg(short, long, value_enum)]
    pub variant: Option<Variant>,

    /// Pretty print the contained value
    #[arg(short, long)]
    pub pretty: bool,
}

pub fn handle_inspect_command(args: InspectArgs, config: &Config) -> Result<()> {
    let input = read_input(args.file.as_deref())?;
    let variant = args.variant.unwrap_or(config.default_variant);
    let pretty = args.pretty || config.output.pretty;
    debug!("Inspecting document as {:?}", variant);

    match inspect_document(&input, variant).context("Failed to inspect document")? {
        Some(value) => println!("{}: {}", "some".green().bold(), render(&value, pretty)?),
        None => println!("{}", "none".yellow().bold()),
    }

    Ok(())
}

/// Decode `input` into the given optional variant and return a copy of what it holds
pub fn inspect_document(input: &str, variant: Variant) -> Result<Option<Value>> {
    match variant {
        Variant::Value => {
            let opt: Opt<Value> = codec::decode(input)?;
            Ok(opt.into_option())
        }
        Variant::Pointer => {
            let ptr: Ptr<Value> = codec::decode(input)?;
            Ok(ptr.all().next())
        }
    }
}
