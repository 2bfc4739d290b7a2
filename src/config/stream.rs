// src/config/stream.rs
//! Stream/engine settings loaded from TOML or JSON, then env overrides.
//!
//! Resolution order:
//! 1) $LEAD_STREAM_CONFIG_PATH (must exist)
//! 2) config/lead_stream.toml
//! 3) config/lead_stream.json
//! 4) built-in defaults
//!
//! Then `LEAD_STREAM_CAPACITY`, `LEAD_STREAM_TICK_SECS`, `LEAD_STREAM_SEED`
//! override individual fields.

use anyhow::{anyhow, bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::query::DEFAULT_PAGE_SIZE;
use crate::stream::DEFAULT_CAPACITY;
use crate::summary::DEFAULT_TARGET_VALUE;

pub const ENV_CONFIG_PATH: &str = "LEAD_STREAM_CONFIG_PATH";
pub const ENV_CAPACITY: &str = "LEAD_STREAM_CAPACITY";
pub const ENV_TICK_SECS: &str = "LEAD_STREAM_TICK_SECS";
pub const ENV_SEED: &str = "LEAD_STREAM_SEED";

pub const DEFAULT_TICK_SECS: u64 = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StreamConfig {
    /// Max leads kept; older ones are evicted.
    pub capacity: usize,
    /// Seconds between synthetic ingestions.
    pub tick_interval_secs: u64,
    /// Page size used when a query does not name one.
    pub page_size: usize,
    pub target_value: u64,
    /// Fixed RNG seed for reproducible feeds; `None` uses OS entropy.
    pub seed: Option<u64>,
    /// Start from the curated seed leads instead of an empty stream.
    pub with_seed_leads: bool,
}

impl Default for StreamConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            tick_interval_secs: DEFAULT_TICK_SECS,
            page_size: DEFAULT_PAGE_SIZE,
            target_value: DEFAULT_TARGET_VALUE,
            seed: None,
            with_seed_leads: true,
        }
    }
}

impl StreamConfig {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs(self.tick_interval_secs)
    }

    pub fn validate(&self) -> Result<()> {
        if self.capacity == 0 {
            bail!("capacity must be > 0");
        }
        if self.tick_interval_secs == 0 {
            bail!("tick_interval_secs must be > 0");
        }
        if self.page_size == 0 {
            bail!("page_size must be > 0");
        }
        if self.target_value == 0 {
            bail!("target_value must be > 0");
        }
        Ok(())
    }

    /// Apply `LEAD_STREAM_*` env overrides on top of the loaded values.
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        if let Some(v) = env_parse::<usize>(ENV_CAPACITY)? {
            self.capacity = v;
        }
        if let Some(v) = env_parse::<u64>(ENV_TICK_SECS)? {
            self.tick_interval_secs = v;
        }
        if let Some(v) = env_parse::<u64>(ENV_SEED)? {
            self.seed = Some(v);
        }
        Ok(())
    }
}

fn env_parse<T>(name: &str) -> Result<Option<T>>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(name) {
        Ok(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .with_context(|| format!("parsing {name}={raw:?}")),
        _ => Ok(None),
    }
}

/// Load from an explicit path. `.json` is read as JSON, anything else as TOML.
/// Missing keys fall back to defaults.
pub fn load_from(path: &Path) -> Result<StreamConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("reading stream config from {}", path.display()))?;
    let ext = path
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();

    let cfg: StreamConfig = if ext == "json" {
        serde_json::from_str(&content)
            .with_context(|| format!("parsing JSON config {}", path.display()))?
    } else {
        toml::from_str(&content)
            .with_context(|| format!("parsing TOML config {}", path.display()))?
    };
    cfg.validate()
        .with_context(|| format!("validating {}", path.display()))?;
    Ok(cfg)
}

/// Load using env var + fallbacks, then apply env overrides and validate.
pub fn load_default() -> Result<StreamConfig> {
    let mut cfg = if let Ok(p) = std::env::var(ENV_CONFIG_PATH) {
        let pb = PathBuf::from(p);
        if !pb.exists() {
            return Err(anyhow!(
                "{ENV_CONFIG_PATH} points to non-existent path {}",
                pb.display()
            ));
        }
        load_from(&pb)?
    } else {
        let toml_p = PathBuf::from("config/lead_stream.toml");
        let json_p = PathBuf::from("config/lead_stream.json");
        if toml_p.exists() {
            load_from(&toml_p)?
        } else if json_p.exists() {
            load_from(&json_p)?
        } else {
            StreamConfig::default()
        }
    };

    cfg.apply_env_overrides()?;
    cfg.validate()?;
    Ok(cfg)
}
