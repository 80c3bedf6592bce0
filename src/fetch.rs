//! Source loading: local file first, remote URL as fallback.

use std::fs;
use std::path::PathBuf;

use log::debug;

use crate::error::{Error, Result};

/// Upstream list fetched when no local copy is available.
pub const DEFAULT_REMOTE_URL: &str =
    "https://raw.githubusercontent.com/promptslab/Awesome-Prompt-Engineering/main/README.md";

/// Local development copy tried before the remote URL.
pub const DEFAULT_LOCAL_PATH: &str = "data.md";

/// Loads the source markdown, preferring a local file over the network.
#[derive(Debug, Clone)]
pub struct Fetcher {
    local_path: PathBuf,
    remote_url: String,
}

impl Fetcher {
    /// Create a fetcher with the default local path and remote URL.
    pub fn new() -> Self {
        Self {
            local_path: PathBuf::from(DEFAULT_LOCAL_PATH),
            remote_url: DEFAULT_REMOTE_URL.to_string(),
        }
    }

    /// Set the local file tried first.
    pub fn with_local_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.local_path = path.into();
        self
    }

    /// Set the remote fallback URL.
    pub fn with_remote_url(mut self, url: impl Into<String>) -> Self {
        self.remote_url = url.into();
        self
    }

    /// Load the source text.
    ///
    /// A missing or empty local file is expected and falls through to the
    /// remote URL; the two attempts run sequentially, never concurrently.
    pub fn load(&self) -> Result<String> {
        match fs::read_to_string(&self.local_path) {
            Ok(text) if !text.trim().is_empty() => {
                debug!("loaded local source: {}", self.local_path.display());
                return Ok(text);
            }
            Ok(_) => debug!(
                "local source {} is empty, fetching remote",
                self.local_path.display()
            ),
            Err(err) => debug!(
                "local source {} unavailable ({}), fetching remote",
                self.local_path.display(),
                err
            ),
        }

        let response = reqwest::blocking::get(&self.remote_url)?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Fetch(format!(
                "{} returned {}",
                self.remote_url, status
            )));
        }

        let text = response.text()?;
        if text.trim().is_empty() {
            return Err(Error::EmptyDocument);
        }
        Ok(text)
    }
}

impl Default for Fetcher {
    fn default() -> Self {
        Self::new()
    }
}
