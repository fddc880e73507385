//! # Configuration
//!
//! Settings resolve with a fixed override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.mailerdash/config.toml` and is only ever read. A missing
//! file is not an error; every field has a default except the API token.

use log::{debug, info, warn};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::PathBuf;

use crate::api::client::DEFAULT_BASE_URL;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize)]
pub struct DashboardConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub profiles: BTreeMap<String, ProfileConfig>,
}

#[derive(Debug, Default, Deserialize)]
pub struct GeneralConfig {
    pub default_profile: Option<String>,
    pub fetch_limit: Option<usize>,
}

#[derive(Debug, Default, Clone, Deserialize)]
pub struct ProfileConfig {
    pub api_token: Option<String>,
    pub base_url: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_PROFILE: &str = "default";
/// Items fetched per view. 0 would mean "all pages".
pub const DEFAULT_FETCH_LIMIT: usize = 100;

// ============================================================================
// Resolved Config (concrete values, no Options except the token)
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub profile: String,
    pub api_token: Option<String>,
    pub base_url: String,
    pub fetch_limit: usize,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            profile: DEFAULT_PROFILE.to_string(),
            api_token: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            fetch_limit: DEFAULT_FETCH_LIMIT,
        }
    }
}

/// CLI flags that take part in resolution (None = not given).
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub profile: Option<String>,
    pub fetch_limit: Option<usize>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.mailerdash/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".mailerdash").join("config.toml"))
}

/// Load config from `~/.mailerdash/config.toml`.
///
/// A missing file yields `DashboardConfig::default()`; a malformed one is
/// `ConfigError::Parse`.
pub fn load_config() -> Result<DashboardConfig, ConfigError> {
    let Some(path) = config_path() else {
        warn!("Could not determine home directory, using default config");
        return Ok(DashboardConfig::default());
    };

    if !path.exists() {
        info!("No config file at {}, using defaults", path.display());
        return Ok(DashboardConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: DashboardConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config has {} profile(s)", config.profiles.len());
    Ok(config)
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve against the process environment.
pub fn resolve(config: &DashboardConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with(config, cli, |key| std::env::var(key).ok())
}

/// Resolve with an explicit env lookup.
pub fn resolve_with(
    config: &DashboardConfig,
    cli: &CliOverrides,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    // Profile: CLI → env → config → default
    let profile = cli
        .profile
        .clone()
        .filter(|p| !p.is_empty())
        .or_else(|| env("MAILERLITE_PROFILE"))
        .or_else(|| config.general.default_profile.clone())
        .unwrap_or_else(|| DEFAULT_PROFILE.to_string());

    let profile_config = config.profiles.get(&profile).cloned().unwrap_or_default();
    if !config.profiles.is_empty() && !config.profiles.contains_key(&profile) {
        warn!("Profile '{}' not found in config file", profile);
    }

    // Token: env → profile
    let api_token = env("MAILERLITE_API_TOKEN")
        .filter(|t| !t.is_empty())
        .or(profile_config.api_token);

    // Base URL: env → profile → default
    let base_url = env("MAILERLITE_API_BASE_URL")
        .filter(|u| !u.is_empty())
        .or(profile_config.base_url)
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    // Fetch limit: CLI → config → default
    let fetch_limit = cli
        .fetch_limit
        .or(config.general.fetch_limit)
        .unwrap_or(DEFAULT_FETCH_LIMIT);

    ResolvedConfig {
        profile,
        api_token,
        base_url,
        fetch_limit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    fn sample_config() -> DashboardConfig {
        toml::from_str(
            r#"
[general]
default_profile = "work"
fetch_limit = 50

[profiles.work]
api_token = "work-token"

[profiles.staging]
api_token = "staging-token"
base_url = "http://localhost:8080/api"
"#,
        )
        .unwrap()
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let resolved = resolve_with(&DashboardConfig::default(), &CliOverrides::default(), no_env);
        assert_eq!(resolved, ResolvedConfig::default());
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let resolved = resolve_with(&sample_config(), &CliOverrides::default(), no_env);
        assert_eq!(resolved.profile, "work");
        assert_eq!(resolved.api_token.as_deref(), Some("work-token"));
        assert_eq!(resolved.base_url, DEFAULT_BASE_URL);
        assert_eq!(resolved.fetch_limit, 50);
    }

    #[test]
    fn test_resolve_cli_wins() {
        let cli = CliOverrides {
            profile: Some("staging".to_string()),
            fetch_limit: Some(0),
        };
        let resolved = resolve_with(&sample_config(), &cli, |key| {
            (key == "MAILERLITE_PROFILE").then(|| "work".to_string())
        });
        assert_eq!(resolved.profile, "staging");
        assert_eq!(resolved.api_token.as_deref(), Some("staging-token"));
        assert_eq!(resolved.base_url, "http://localhost:8080/api");
        assert_eq!(resolved.fetch_limit, 0);
    }

    #[test]
    fn test_env_token_and_base_url_win_over_profile() {
        let resolved = resolve_with(&sample_config(), &CliOverrides::default(), |key| match key {
            "MAILERLITE_API_TOKEN" => Some("env-token".to_string()),
            "MAILERLITE_API_BASE_URL" => Some("http://env/api".to_string()),
            _ => None,
        });
        assert_eq!(resolved.api_token.as_deref(), Some("env-token"));
        assert_eq!(resolved.base_url, "http://env/api");
    }

    #[test]
    fn test_unknown_profile_has_no_token() {
        let cli = CliOverrides {
            profile: Some("nope".to_string()),
            ..Default::default()
        };
        let resolved = resolve_with(&sample_config(), &cli, no_env);
        assert_eq!(resolved.profile, "nope");
        assert!(resolved.api_token.is_none());
    }

    #[test]
    fn test_sparse_toml_parses() {
        let config: DashboardConfig = toml::from_str("[general]\nfetch_limit = 10\n").unwrap();
        assert_eq!(config.general.fetch_limit, Some(10));
        assert!(config.general.default_profile.is_none());
        assert!(config.profiles.is_empty());
    }

    #[test]
    fn test_malformed_toml_is_parse_error() {
        let err = toml::from_str::<DashboardConfig>("[general\n").map_err(ConfigError::Parse);
        assert!(err.unwrap_err().to_string().starts_with("config parse error"));
    }
}
