//! JSON helpers
//!
//! Thin wrappers around `serde_json` that attach context to failures. The
//! optional types need nothing special here; their serde impls already map
//! absence to `null`.

use anyhow::{Context, Result};
use log::trace;
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Encode `value` as compact JSON
pub fn encode<T>(value: &T) -> Result<String>
where
    T: Serialize + ?Sized,
{
    let encoded = serde_json::to_string(value).context("Failed to encode value as JSON")?;
    trace!("Encoded {} bytes of JSON", encoded.len());
    Ok(encoded)
}

/// Encode `value` as indented JSON
pub fn encode_pretty<T>(value: &T) -> Result<String>
where
    T: Serialize + ?Sized,
{
    serde_json::to_string_pretty(value).context("Failed to encode value as JSON")
}

/// Decode a JSON document into `T`
pub fn decode<T>(input: &str) -> Result<T>
where
    T: DeserializeOwned,
{
    trace!("Decoding {} bytes of JSON", input.len());
    serde_json::from_str(input).with_context(|| {
        format!(
            "Failed to decode JSON as {}",
            std::any::type_name::<T>()
        )
    })
}

/// Decode raw JSON bytes into `T`
pub fn decode_slice<T>(input: &[u8]) -> Result<T>
where
    T: DeserializeOwned,
{
    trace!("Decoding {} bytes of JSON", input.len());
    serde_json::from_slice(input).with_context(|| {
        format!(
            "Failed to decode JSON as {}",
            std::any::type_name::<T>()
        )
    })
}
