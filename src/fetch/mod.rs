// src/fetch/mod.rs

pub mod digitize;
pub mod payload;

use anyhow::{Context, Result};
use serde_json::Value;
use std::{fs, path::Path};
use tracing::info;

use crate::config::Config;

pub use digitize::DigitizeClient;
pub use payload::{html_fragments, parse_payload};

/// `.json` inputs are saved service responses and are read offline.
pub fn is_saved_response(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

/// Response payload for `input`: parsed from disk for a saved response,
/// otherwise the document is sent to the service.
pub fn load_payload(input: &Path) -> Result<Value> {
    load_payload_with(input, Config::from_env)
}

/// Same as [`load_payload`]; `config` only runs when the service is called.
pub fn load_payload_with<F>(input: &Path, config: F) -> Result<Value>
where
    F: FnOnce() -> Result<Config>,
{
    if is_saved_response(input) {
        info!(path = %input.display(), "using saved digitization response");
        let body = fs::read_to_string(input)
            .with_context(|| format!("reading {}", input.display()))?;
        return Ok(parse_payload(&body));
    }

    let document = fs::read(input).with_context(|| format!("reading {}", input.display()))?;
    let file_name = input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "document.pdf".to_string());
    DigitizeClient::new(config()?)?.digitize(document, &file_name)
}
