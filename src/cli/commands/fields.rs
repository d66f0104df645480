use anyhow::{Context, Result};
use clap::Args;
use colored::*;
use optkit::{Opt, codec};
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::PathBuf;

use super::{read_input, render};

#[derive(Args)]
pub struct FieldsArgs {
    /// JSON object file to read (stdin if omitted or `-`)
    pub file: Option<PathBuf>,

    /// Only list fields that are present
    #[arg(long)]
    pub present_only: bool,
}

pub fn handle_fields_command(args: FieldsArgs) -> Result<()> {
    let input = read_input(args.file.as_deref())?;
    let fields = collect_fields(&input)?;

    let present = fields.values().filter(|field| field.is_some()).count();
    let absent = fields.len() - present;

    for (name, field) in &fields {
        match field.as_option() {
            Some(value) => println!(
                "  {} {} {}",
                name.cyan(),
                "present".green(),
                render(value, false)?.dimmed()
            ),
            None if !args.present_only => println!("  {} {}", name.cyan(), "absent".yellow()),
            None => {}
        }
    }

    println!();
    println!("{} present, {} absent", present, absent);
    Ok(())
}

/// Decode a JSON object into one optional value per field
pub fn collect_fields(input: &str) -> Result<BTreeMap<String, Opt<Value>>> {
    codec::decode(input).context("Expected a JSON object")
}
