use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use crate::types::FilterOptions;
use crate::Result;

pub const DEFAULT_DEBOUNCE_MS: u64 = 300;
pub const DEFAULT_MIN_QUERY_CHARS: usize = 2;
pub const DEFAULT_SIMULATED_LATENCY_MS: u64 = 500;
pub const DEFAULT_RELATED_LIMIT: usize = 3;
pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:3000";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Quiet period before a suggestion lookup runs.
    pub debounce_ms: u64,
    /// Queries shorter than this (in chars) never hit the suggestion source.
    pub min_query_chars: usize,
    /// Artificial delay the feed waits before computing a fresh result.
    pub simulated_latency_ms: u64,
    pub related_limit: usize,
    pub default_filters: FilterOptions,
    pub listen_addr: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            min_query_chars: DEFAULT_MIN_QUERY_CHARS,
            simulated_latency_ms: DEFAULT_SIMULATED_LATENCY_MS,
            related_limit: DEFAULT_RELATED_LIMIT,
            default_filters: FilterOptions::default(),
            listen_addr: DEFAULT_LISTEN_ADDR.to_string(),
        }
    }
}

impl Config {
    /// Reads a JSON config file. Missing keys take their defaults.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    pub fn simulated_latency(&self) -> Duration {
        Duration::from_millis(self.simulated_latency_ms)
    }

    pub fn with_debounce_ms(mut self, debounce_ms: u64) -> Self {
        self.debounce_ms = debounce_ms;
        self
    }

    pub fn with_simulated_latency_ms(mut self, latency_ms: u64) -> Self {
        self.simulated_latency_ms = latency_ms;
        self
    }

    pub fn with_listen_addr(mut self, addr: impl Into<String>) -> Self {
        self.listen_addr = addr.into();
        self
    }
}
