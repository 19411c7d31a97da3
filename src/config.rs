use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::constants::REGION_NAMES;
use crate::error::{BracketError, Result};

/// Pool settings read from a TOML file.
///
/// ```toml
/// name = "Office Pool"
/// cutoff = "2026-03-19T16:00:00Z"
/// regions = ["Midwest", "West", "East", "South"]
/// ```
///
/// `cutoff` must be a quoted RFC 3339 timestamp. `regions` is optional and
/// lists the four bracket quarters in bracket order.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct PoolConfig {
    pub name: String,
    pub cutoff: DateTime<Utc>,

    #[serde(default = "default_regions")]
    pub regions: Vec<String>,
}

fn default_regions() -> Vec<String> {
    REGION_NAMES.iter().map(|r| r.to_string()).collect()
}

impl PoolConfig {
    pub fn new(name: impl Into<String>, cutoff: DateTime<Utc>) -> Self {
        PoolConfig {
            name: name.into(),
            cutoff,
            regions: default_regions(),
        }
    }

    /// Read and validate a config file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: PoolConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.regions.len() != REGION_NAMES.len() {
            return Err(BracketError::Config(format!(
                "expected {} region names, got {}",
                REGION_NAMES.len(),
                self.regions.len()
            )));
        }
        if self.name.trim().is_empty() {
            return Err(BracketError::Config("pool name is empty".to_string()));
        }
        Ok(())
    }

    /// Whether participants may no longer change their picks.
    pub fn picks_locked(&self, now: DateTime<Utc>) -> bool {
        now >= self.cutoff
    }

    /// Display name of a bracket quarter.
    pub fn region_name(&self, quarter: usize) -> Option<&str> {
        self.regions.get(quarter).map(String::as_str)
    }
}
