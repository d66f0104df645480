pub mod config;
pub mod fields;
pub mod inspect;
pub mod normalize;

pub use config::handle_config_command;
pub use fields::handle_fields_command;
pub use inspect::handle_inspect_command;
pub use normalize::handle_normalize_command;

use anyhow::{Context, Result};
use log::debug;
use optkit::codec;
use serde_json::Value;
use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// Read a JSON document from `file`, or from stdin when it's absent or `-`
pub fn read_input(file: Option<&Path>) -> Result<String> {
    let content = match file {
        Some(path) if path != Path::new("-") => {
            if !path.exists() {
                anyhow::bail!("Input file does not exist: {}", path.display());
            }

            debug!("Reading input from: {}", path.display());
            fs::read_to_string(path)
                .with_context(|| format!("Failed to read input file: {}", path.display()))?
        }
        _ => {
            debug!("Reading input from stdin");
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read input from stdin")?;
            buf
        }
    };

    if content.trim().is_empty() {
        anyhow::bail!("Input is empty");
    }

    Ok(content)
}

/// Encode a JSON value for display
pub fn render(value: &Value, pretty: bool) -> Result<String> {
    if pretty {
        codec::encode_pretty(value)
    } else {
        codec::encode(value)
    }
}
