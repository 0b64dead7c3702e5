//! Row store connection settings.
//!
//! Values are layered: an optional TOML file first, then the process
//! environment on top. The web build has no environment at runtime, so the
//! same keys are also read at compile time and used as the last fallback.

use std::fmt;
use std::path::Path;

use serde::Deserialize;
use tracing::Level;

use crate::error::ConfigError;
use crate::query::HistoryBound;

pub const DEFAULT_TABLE: &str = "job_counts";
pub const DEFAULT_LOCATION: &str = "Berlin, Germany";

const ENV_URL: &str = "SUPABASE_URL";
const ENV_KEY: &str = "SUPABASE_KEY";
const ENV_TABLE: &str = "JOB_COUNTS_TABLE";
const ENV_LOCATION: &str = "LOCATION";
const ENV_HISTORY_LIMIT: &str = "HISTORY_LIMIT";
const ENV_LOG_LEVEL: &str = "LOG_LEVEL";

/// Fully resolved settings for reading weekly rows.
#[derive(Clone, PartialEq, Eq)]
pub struct RowStoreConfig {
    /// Project base URL without a trailing slash, e.g. `https://abc.supabase.co`.
    pub url: String,
    /// Public (anon) API key sent with every request.
    pub anon_key: String,
    pub table: String,
    pub location: String,
    pub bound: HistoryBound,
    pub log_level: Level,
}

impl fmt::Debug for RowStoreConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RowStoreConfig")
            .field("url", &self.url)
            .field("anon_key", &"***")
            .field("table", &self.table)
            .field("location", &self.location)
            .field("bound", &self.bound)
            .field("log_level", &self.log_level)
            .finish()
    }
}

impl RowStoreConfig {
    /// Resolve from the environment alone (web, or desktop without a config file).
    pub fn from_env() -> Result<Self, ConfigError> {
        PartialConfig::from_env().resolve()
    }

    /// Resolve from a TOML file overlaid with the environment. A missing file is not an error.
    pub fn from_file_and_env(path: &Path) -> Result<Self, ConfigError> {
        let file = if path.exists() {
            PartialConfig::from_file(path)?
        } else {
            PartialConfig::default()
        };
        file.overlay(PartialConfig::from_env()).resolve()
    }
}

/// A possibly incomplete set of settings from one source.
#[derive(Debug, Default, Clone, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct PartialConfig {
    pub supabase_url: Option<String>,
    pub supabase_key: Option<String>,
    pub table: Option<String>,
    pub location: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub history_limit: Option<String>,
    pub log_level: Option<String>,
}

impl PartialConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| {
            std::env::var(key)
                .ok()
                .or_else(|| baked(key).map(str::to_string))
        })
    }

    /// Build from any key lookup (environment, test map, ...). Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        Self {
            supabase_url: get(ENV_URL),
            supabase_key: get(ENV_KEY),
            table: get(ENV_TABLE),
            location: get(ENV_LOCATION),
            history_limit: get(ENV_HISTORY_LIMIT),
            log_level: get(ENV_LOG_LEVEL),
        }
    }

    pub fn from_toml_str(src: &str) -> Result<Self, ConfigError> {
        toml::from_str(src).map_err(|err| ConfigError::File(err.to_string()))
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let src = std::fs::read_to_string(path)
            .map_err(|err| ConfigError::File(format!("{}: {err}", path.display())))?;
        Self::from_toml_str(&src)
    }

    /// Values present in `over` win.
    pub fn overlay(self, over: PartialConfig) -> Self {
        Self {
            supabase_url: over.supabase_url.or(self.supabase_url),
            supabase_key: over.supabase_key.or(self.supabase_key),
            table: over.table.or(self.table),
            location: over.location.or(self.location),
            history_limit: over.history_limit.or(self.history_limit),
            log_level: over.log_level.or(self.log_level),
        }
    }

    pub fn resolve(self) -> Result<RowStoreConfig, ConfigError> {
        let url = self.supabase_url.ok_or(ConfigError::Missing(ENV_URL))?;
        let url = url.trim().trim_end_matches('/').to_string();
        if !(url.starts_with("https://") || url.starts_with("http://")) {
            return Err(ConfigError::Invalid {
                key: ENV_URL,
                value: url,
            });
        }

        let anon_key = self.supabase_key.ok_or(ConfigError::Missing(ENV_KEY))?;

        let bound = match self.history_limit {
            None => HistoryBound::default(),
            Some(raw) => match raw.trim().parse::<u32>() {
                Ok(weeks) if weeks > 0 => HistoryBound::LatestWeeks(weeks),
                _ => {
                    return Err(ConfigError::Invalid {
                        key: ENV_HISTORY_LIMIT,
                        value: raw,
                    })
                }
            },
        };

        let log_level = match self.log_level {
            None => Level::INFO,
            Some(raw) => parse_level(&raw).ok_or(ConfigError::Invalid {
                key: ENV_LOG_LEVEL,
                value: raw,
            })?,
        };

        Ok(RowStoreConfig {
            url,
            anon_key: anon_key.trim().to_string(),
            table: self.table.unwrap_or_else(|| DEFAULT_TABLE.to_string()),
            location: self
                .location
                .unwrap_or_else(|| DEFAULT_LOCATION.to_string()),
            bound,
            log_level,
        })
    }
}

/// Accepts the usual tracing names plus the ingestion job's `SUCCESS`/`WARNING`/`CRITICAL`.
pub fn parse_level(raw: &str) -> Option<Level> {
    match raw.trim().to_ascii_uppercase().as_str() {
        "TRACE" => Some(Level::TRACE),
        "DEBUG" => Some(Level::DEBUG),
        "INFO" | "SUCCESS" => Some(Level::INFO),
        "WARN" | "WARNING" => Some(Level::WARN),
        "ERROR" | "CRITICAL" => Some(Level::ERROR),
        _ => None,
    }
}

fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(i64),
    }

    Ok(Option::<Raw>::deserialize(deserializer)?.map(|raw| match raw {
        Raw::Text(text) => text,
        Raw::Number(n) => n.to_string(),
    }))
}

fn baked(key: &str) -> Option<&'static str> {
    match key {
        ENV_URL => option_env!("SUPABASE_URL"),
        ENV_KEY => option_env!("SUPABASE_KEY"),
        ENV_TABLE => option_env!("JOB_COUNTS_TABLE"),
        ENV_LOCATION => option_env!("LOCATION"),
        ENV_HISTORY_LIMIT => option_env!("HISTORY_LIMIT"),
        ENV_LOG_LEVEL => option_env!("LOG_LEVEL"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> PartialConfig {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        PartialConfig::from_lookup(move |key| map.get(key).cloned())
    }

    #[test]
    fn defaults_fill_in_optional_settings() {
        let config = lookup(&[
            ("SUPABASE_URL", "https://demo.supabase.co/"),
            ("SUPABASE_KEY", "anon"),
        ])
        .resolve()
        .unwrap();

        assert_eq!(config.url, "https://demo.supabase.co");
        assert_eq!(config.table, "job_counts");
        assert_eq!(config.location, "Berlin, Germany");
        assert_eq!(config.bound, HistoryBound::SinceOneYear);
        assert_eq!(config.log_level, Level::INFO);
    }

    #[test]
    fn missing_credentials_are_reported_by_name() {
        let err = lookup(&[("SUPABASE_URL", "https://demo.supabase.co")])
            .resolve()
            .unwrap_err();
        assert_eq!(err, ConfigError::Missing("SUPABASE_KEY"));

        let err = lookup(&[("SUPABASE_URL", "   ")]).resolve().unwrap_err();
        assert_eq!(err, ConfigError::Missing("SUPABASE_URL"));
    }

    #[test]
    fn history_limit_switches_to_row_count_bound() {
        let config = lookup(&[
            ("SUPABASE_URL", "https://demo.supabase.co"),
            ("SUPABASE_KEY", "anon"),
            ("HISTORY_LIMIT", "12"),
        ])
        .resolve()
        .unwrap();
        assert_eq!(config.bound, HistoryBound::LatestWeeks(12));

        let err = lookup(&[
            ("SUPABASE_URL", "https://demo.supabase.co"),
            ("SUPABASE_KEY", "anon"),
            ("HISTORY_LIMIT", "0"),
        ])
        .resolve()
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "HISTORY_LIMIT", .. }));
    }

    #[test]
    fn url_without_scheme_is_rejected() {
        let err = lookup(&[("SUPABASE_URL", "demo.supabase.co"), ("SUPABASE_KEY", "k")])
            .resolve()
            .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "SUPABASE_URL", .. }));
    }

    #[test]
    fn environment_overrides_file_values() {
        let file = PartialConfig::from_toml_str(
            r#"
            supabase_url = "https://file.supabase.co"
            supabase_key = "file-key"
            location = "Hamburg, Germany"
            history_limit = 8
            log_level = "warning"
            "#,
        )
        .unwrap();
        let env = lookup(&[("LOCATION", "Berlin, Germany")]);

        let config = file.overlay(env).resolve().unwrap();
        assert_eq!(config.url, "https://file.supabase.co");
        assert_eq!(config.anon_key, "file-key");
        assert_eq!(config.location, "Berlin, Germany");
        assert_eq!(config.bound, HistoryBound::LatestWeeks(8));
        assert_eq!(config.log_level, Level::WARN);
    }

    #[test]
    fn unknown_file_keys_are_rejected() {
        let err = PartialConfig::from_toml_str("serp_api_key = \"x\"").unwrap_err();
        assert!(matches!(err, ConfigError::File(_)));
    }

    #[test]
    fn debug_output_masks_the_key() {
        let config = lookup(&[
            ("SUPABASE_URL", "https://demo.supabase.co"),
            ("SUPABASE_KEY", "super-secret"),
        ])
        .resolve()
        .unwrap();
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("super-secret"));
        assert!(rendered.contains("***"));
    }
}
