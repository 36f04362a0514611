use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Top-level worldcal configuration.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct WorldcalConfig {
    /// Document store settings.
    #[serde(default)]
    pub store: StoreToml,
}

/// The `[store]` section.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StoreToml {
    /// Primary document path.
    #[serde(default = "default_path")]
    pub path: PathBuf,

    /// Local cache path, used when the primary is unreachable.
    #[serde(default = "default_cache_path")]
    pub cache_path: PathBuf,

    /// Maximum save retries before falling back to the cache.
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,

    /// Base retry delay in milliseconds (doubles per attempt).
    #[serde(default = "default_base_delay_ms")]
    pub base_delay_ms: u64,
}

impl Default for StoreToml {
    fn default() -> Self {
        Self {
            path: default_path(),
            cache_path: default_cache_path(),
            max_retries: default_max_retries(),
            base_delay_ms: default_base_delay_ms(),
        }
    }
}

fn default_path() -> PathBuf {
    PathBuf::from("worldcal-data.json")
}
fn default_cache_path() -> PathBuf {
    PathBuf::from("worldcal-cache.json")
}
fn default_max_retries() -> u32 {
    5
}
fn default_base_delay_ms() -> u64 {
    500
}

/// Loads configuration from `path`, or returns defaults when the file
/// does not exist.
pub fn load(path: &Path) -> Result<WorldcalConfig> {
    if !path.exists() {
        return Ok(WorldcalConfig::default());
    }
    let body = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    toml::from_str(&body).with_context(|| format!("failed to parse config: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = WorldcalConfig::default();
        assert_eq!(config.store.path, PathBuf::from("worldcal-data.json"));
        assert_eq!(config.store.max_retries, 5);
        assert_eq!(config.store.base_delay_ms, 500);
    }

    #[test]
    fn empty_toml_uses_defaults() {
        let config: WorldcalConfig = toml::from_str("").unwrap();
        assert_eq!(config.store.cache_path, PathBuf::from("worldcal-cache.json"));
    }

    #[test]
    fn partial_store_section() {
        let config: WorldcalConfig = toml::from_str(
            r#"
            [store]
            path = "shared/calendar.json"
            max_retries = 2
            "#,
        )
        .unwrap();
        assert_eq!(config.store.path, PathBuf::from("shared/calendar.json"));
        assert_eq!(config.store.max_retries, 2);
        assert_eq!(config.store.base_delay_ms, 500);
    }

    #[test]
    fn unknown_fields_rejected() {
        let result: Result<WorldcalConfig, _> = toml::from_str("[calendar]\nleap_years = true\n");
        assert!(result.is_err());
    }
}
