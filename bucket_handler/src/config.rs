use anyhow::{anyhow, Result};
use tracing::Level;

pub const DEFAULT_ACTION_GROUP: &str = "storage_bucket";
pub const DEFAULT_REGION: &str = "eu-west-2";

/// Settings read once at cold start and handed to every invocation.
#[derive(Debug, Clone)]
pub struct Config {
    pub action_group: String,
    pub default_region: String,
    /// Points the S3 client at an S3-compatible endpoint instead of AWS.
    pub endpoint_url: Option<String>,
    pub log_level: Level,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            action_group: DEFAULT_ACTION_GROUP.to_string(),
            default_region: DEFAULT_REGION.to_string(),
            endpoint_url: None,
            log_level: Level::INFO,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let log_level = match var("LOG_LEVEL") {
            Some(level) => shared::log::parse_level(&level).ok_or_else(|| anyhow!("LOG_LEVEL '{}' is not a valid level", level))?,
            None => defaults.log_level,
        };

        Ok(Self {
            action_group: var("ACTION_GROUP").unwrap_or(defaults.action_group),
            default_region: var("DEFAULT_REGION").unwrap_or(defaults.default_region),
            endpoint_url: var("S3_ENDPOINT_URL"),
            log_level,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        Config::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn defaults_when_nothing_is_set() -> Result<()> {
        let config = config_from(&[])?;

        assert_eq!(config.action_group, "storage_bucket");
        assert_eq!(config.default_region, "eu-west-2");
        assert_eq!(config.endpoint_url, None);
        assert_eq!(config.log_level, Level::INFO);
        Ok(())
    }

    #[test]
    fn reads_overrides() -> Result<()> {
        let config = config_from(&[
            ("ACTION_GROUP", "buckets"),
            ("DEFAULT_REGION", "us-west-2"),
            ("S3_ENDPOINT_URL", "http://localhost:4566"),
            ("LOG_LEVEL", "debug"),
        ])?;

        assert_eq!(config.action_group, "buckets");
        assert_eq!(config.default_region, "us-west-2");
        assert_eq!(config.endpoint_url.as_deref(), Some("http://localhost:4566"));
        assert_eq!(config.log_level, Level::DEBUG);
        Ok(())
    }

    #[test]
    fn blank_values_fall_back_to_defaults() -> Result<()> {
        let config = config_from(&[("DEFAULT_REGION", "  "), ("S3_ENDPOINT_URL", "")])?;

        assert_eq!(config.default_region, "eu-west-2");
        assert_eq!(config.endpoint_url, None);
        Ok(())
    }

    #[test]
    fn rejects_unknown_log_level() {
        let err = config_from(&[("LOG_LEVEL", "loud")]).unwrap_err();

        assert!(err.to_string().contains("loud"));
    }
}
