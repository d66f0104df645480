use anyhow::Result;
use clap::Args;
use log::debug;
use optkit::config::{Config, Variant};
use optkit::{Opt, Ptr, codec};
use serde_json::Value;
use std::path::PathBuf;

use super::read_input;

#[derive(Args)]
pub struct NormalizeArgs {
    /// JSON file to read (stdin if omitted or `-`)
    pub file: Option<PathBuf>,

    /// Optional type to pass the document through (defaults to the configured variant)
    #[arg(short, long, value_enum)]
    pub variant: Option<Variant>,

    /// Pretty print the output
    #[arg(short, long)]
    pub pretty: bool,
}

pub fn handle_normalize_command(args: NormalizeArgs, config: &Config) -> Result<()> {
    let input = read_input(args.file.as_deref())?;
    let variant = args.variant.unwrap_or(config.default_variant);
    let pretty = args.pretty || config.output.pretty;

    println!("{}", normalize_document(&input, variant, pretty)?);
    Ok(())
}

/// Decode `input` through the given variant and encode it again
pub fn normalize_document(input: &str, variant: Variant, pretty: bool) -> Result<String> {
    debug!("Normalizing document through {:?}", variant);

    match variant {
        Variant::Value => {
            let opt: Opt<Value> = codec::decode(input)?;
            encode(&opt, pretty)
        }
        Variant::Pointer => {
            let ptr: Ptr<Value> = codec::decode(input)?;
            encode(&ptr, pretty)
        }
    }
}

fn encode<T: serde::Serialize>(value: &T, pretty: bool) -> Result<String> {
    if pretty {
        codec::encode_pretty(value)
    } else {
        codec::encode(value)
    }
}
