// src/config.rs

use anyhow::{Context, Result};
use std::env;
use url::Url;

pub const DEFAULT_ENDPOINT: &str = "https://api.upstage.ai/v1/document-digitization";
pub const DEFAULT_MODEL: &str = "document-parse-250508";

/// Settings for the digitization service, read from the environment.
#[derive(Debug, Clone)]
pub struct Config {
    /// `UPSTAGE_API_KEY`; only needed when a PDF is actually sent.
    pub api_key: Option<String>,
    /// `UPSTAGE_ENDPOINT`
    pub endpoint: Url,
    /// `UPSTAGE_MODEL`
    pub model: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`Config::from_env`] but with an injectable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let endpoint_str = non_empty("UPSTAGE_ENDPOINT").unwrap_or_else(|| DEFAULT_ENDPOINT.into());
        let endpoint = Url::parse(&endpoint_str)
            .with_context(|| format!("parsing UPSTAGE_ENDPOINT {}", endpoint_str))?;

        Ok(Self {
            api_key: non_empty("UPSTAGE_API_KEY"),
            endpoint,
            model: non_empty("UPSTAGE_MODEL").unwrap_or_else(|| DEFAULT_MODEL.into()),
        })
    }

    pub fn require_api_key(&self) -> Result<&str> {
        self.api_key
            .as_deref()
            .context("UPSTAGE_API_KEY is not set; it is required to digitize a PDF")
    }
}
