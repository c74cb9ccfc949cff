//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.mailgenie/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::core::tone::Tone;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct MailGenieConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub endpoint: EndpointConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub default_tone: Option<Tone>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct EndpointConfig {
    pub url: Option<String>,
    pub timeout_secs: Option<u64>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_ENDPOINT_URL: &str = "http://localhost:8080/api/email/generate";
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

// ============================================================================
// Overrides from outside the file
// ============================================================================

/// Values from `MAILGENIE_*` environment variables. Unparseable values are
/// dropped with a warning.
#[derive(Debug, Default, Clone)]
pub struct EnvOverrides {
    pub endpoint_url: Option<String>,
    pub timeout_secs: Option<u64>,
    pub tone: Option<Tone>,
}

impl EnvOverrides {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds overrides from any key lookup (the process env in production).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let timeout_secs = lookup("MAILGENIE_TIMEOUT_SECS").and_then(|raw| {
            raw.trim()
                .parse::<u64>()
                .map_err(|e| warn!("Ignoring MAILGENIE_TIMEOUT_SECS={raw:?}: {e}"))
                .ok()
        });
        let tone = lookup("MAILGENIE_TONE").and_then(|raw| {
            let tone = Tone::parse(&raw);
            if tone.is_none() {
                warn!("Ignoring MAILGENIE_TONE={raw:?}: unknown tone");
            }
            tone
        });

        Self {
            endpoint_url: lookup("MAILGENIE_ENDPOINT_URL"),
            timeout_secs,
            tone,
        }
    }
}

/// Values from CLI flags (None = not specified).
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub endpoint_url: Option<String>,
    pub timeout_secs: Option<u64>,
    pub tone: Option<Tone>,
}

// ============================================================================
// Resolved Config (concrete values, no Options except the timeout)
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub endpoint_url: String,
    /// `None` when the timeout is disabled (`timeout_secs = 0`).
    pub timeout: Option<Duration>,
    pub tone: Tone,
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

/// Returns the path to `~/.mailgenie/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".mailgenie").join("config.toml"))
}

/// Load config from `~/.mailgenie/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `MailGenieConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<MailGenieConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(MailGenieConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(MailGenieConfig::default());
    }

    load_config_from(&path)
}

/// Parse a config file at an explicit path.
pub fn load_config_from(path: &Path) -> Result<MailGenieConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: MailGenieConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

const DEFAULT_CONFIG_CONTENT: &str = r#"# MailGenie Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# default_tone = "none"          # "none", "professional", "casual", "friendly"

# [endpoint]
# url = "http://localhost:8080/api/email/generate"   # Or MAILGENIE_ENDPOINT_URL
# timeout_secs = 60                                  # 0 disables the timeout
"#;

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Failed to create config directory: {}", e);
        return;
    }
    if let Err(e) = fs::write(path, DEFAULT_CONFIG_CONTENT) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &MailGenieConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with_env(config, &EnvOverrides::from_env(), cli)
}

/// Resolution with explicit env overrides, so the precedence is testable
/// without touching the process environment.
pub fn resolve_with_env(
    config: &MailGenieConfig,
    env: &EnvOverrides,
    cli: &CliOverrides,
) -> ResolvedConfig {
    // Endpoint: CLI → env → config → default
    let endpoint_url = cli
        .endpoint_url
        .clone()
        .or_else(|| env.endpoint_url.clone())
        .or_else(|| config.endpoint.url.clone())
        .unwrap_or_else(|| DEFAULT_ENDPOINT_URL.to_string());

    // Timeout: CLI → env → config → default, 0 = disabled
    let timeout_secs = cli
        .timeout_secs
        .or(env.timeout_secs)
        .or(config.endpoint.timeout_secs)
        .unwrap_or(DEFAULT_TIMEOUT_SECS);
    let timeout = (timeout_secs > 0).then(|| Duration::from_secs(timeout_secs));

    // Tone: CLI → env → config → default
    let tone = cli
        .tone
        .or(env.tone)
        .or(config.general.default_tone)
        .unwrap_or_default();

    ResolvedConfig {
        endpoint_url,
        timeout,
        tone,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn no_env() -> EnvOverrides {
        EnvOverrides::default()
    }

    #[test]
    fn test_default_config_parses() {
        let config = MailGenieConfig::default();
        assert!(config.endpoint.url.is_none());
        assert!(config.general.default_tone.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let resolved =
            resolve_with_env(&MailGenieConfig::default(), &no_env(), &CliOverrides::default());
        assert_eq!(resolved.endpoint_url, DEFAULT_ENDPOINT_URL);
        assert_eq!(resolved.timeout, Some(Duration::from_secs(DEFAULT_TIMEOUT_SECS)));
        assert_eq!(resolved.tone, Tone::None);
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = MailGenieConfig {
            general: GeneralConfig {
                default_tone: Some(Tone::Casual),
            },
            endpoint: EndpointConfig {
                url: Some("http://example.test/generate".to_string()),
                timeout_secs: Some(5),
            },
        };
        let resolved = resolve_with_env(&config, &no_env(), &CliOverrides::default());
        assert_eq!(resolved.endpoint_url, "http://example.test/generate");
        assert_eq!(resolved.timeout, Some(Duration::from_secs(5)));
        assert_eq!(resolved.tone, Tone::Casual);
    }

    #[test]
    fn test_env_beats_config_and_cli_beats_env() {
        let config = MailGenieConfig {
            endpoint: EndpointConfig {
                url: Some("http://file.test".to_string()),
                timeout_secs: Some(5),
            },
            ..Default::default()
        };
        let env = EnvOverrides {
            endpoint_url: Some("http://env.test".to_string()),
            timeout_secs: Some(10),
            tone: Some(Tone::Friendly),
        };

        let resolved = resolve_with_env(&config, &env, &CliOverrides::default());
        assert_eq!(resolved.endpoint_url, "http://env.test");
        assert_eq!(resolved.timeout, Some(Duration::from_secs(10)));
        assert_eq!(resolved.tone, Tone::Friendly);

        let cli = CliOverrides {
            endpoint_url: Some("http://cli.test".to_string()),
            timeout_secs: None,
            tone: Some(Tone::Professional),
        };
        let resolved = resolve_with_env(&config, &env, &cli);
        assert_eq!(resolved.endpoint_url, "http://cli.test");
        assert_eq!(resolved.timeout, Some(Duration::from_secs(10)));
        assert_eq!(resolved.tone, Tone::Professional);
    }

    #[test]
    fn test_zero_timeout_disables_it() {
        let cli = CliOverrides {
            timeout_secs: Some(0),
            ..Default::default()
        };
        let resolved = resolve_with_env(&MailGenieConfig::default(), &no_env(), &cli);
        assert_eq!(resolved.timeout, None);
    }

    #[test]
    fn test_env_lookup_drops_bad_values() {
        let vars: HashMap<&str, &str> = HashMap::from([
            ("MAILGENIE_TIMEOUT_SECS", "soon"),
            ("MAILGENIE_TONE", "sarcastic"),
            ("MAILGENIE_ENDPOINT_URL", "http://env.test"),
        ]);
        let env = EnvOverrides::from_lookup(|k| vars.get(k).map(|v| v.to_string()));
        assert_eq!(env.timeout_secs, None);
        assert_eq!(env.tone, None);
        assert_eq!(env.endpoint_url.as_deref(), Some("http://env.test"));
    }

    #[test]
    fn test_env_lookup_parses_good_values() {
        let vars: HashMap<&str, &str> =
            HashMap::from([("MAILGENIE_TIMEOUT_SECS", " 15 "), ("MAILGENIE_TONE", "Casual")]);
        let env = EnvOverrides::from_lookup(|k| vars.get(k).map(|v| v.to_string()));
        assert_eq!(env.timeout_secs, Some(15));
        assert_eq!(env.tone, Some(Tone::Casual));
    }

    #[test]
    fn test_toml_parses_all_sections() {
        let toml_str = r#"
[general]
default_tone = "friendly"

[endpoint]
url = "http://192.168.1.100:8080/api/email/generate"
timeout_secs = 30
"#;
        let config: MailGenieConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.default_tone, Some(Tone::Friendly));
        assert_eq!(
            config.endpoint.url.as_deref(),
            Some("http://192.168.1.100:8080/api/email/generate")
        );
        assert_eq!(config.endpoint.timeout_secs, Some(30));
    }

    #[test]
    fn test_sparse_toml_parses() {
        let toml_str = r#"
[endpoint]
timeout_secs = 0
"#;
        let config: MailGenieConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.endpoint.timeout_secs, Some(0));
        assert!(config.endpoint.url.is_none());
        assert!(config.general.default_tone.is_none());
    }

    #[test]
    fn test_unknown_tone_is_parse_error() {
        let result: Result<MailGenieConfig, _> =
            toml::from_str("[general]\ndefault_tone = \"grumpy\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_generated_default_is_all_comments() {
        let config: MailGenieConfig = toml::from_str(DEFAULT_CONFIG_CONTENT).unwrap();
        assert!(config.endpoint.url.is_none());
        assert!(config.general.default_tone.is_none());
    }
}
