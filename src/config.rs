//! Configuration loading and management for summa.
//!
//! Loads settings from `summa.toml` with environment variable overrides for
//! sensitive data. A missing file is not an error: every section has defaults,
//! and the engine runs locally until a provider is configured.

use crate::summary::{Focus, LengthPreference, Strategy};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Provider name that keeps summarisation on-device.
pub const LOCAL_PROVIDER: &str = "local";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("missing required API key for provider: {0}")]
    MissingApiKey(String),
    #[error("unsupported provider: {0}")]
    UnsupportedProvider(String),
}

/// Summarisation defaults and limits
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Length used when a caller does not ask for one
    pub length: LengthPreference,
    /// Strategy used when a caller does not ask for one
    pub strategy: Strategy,
    /// Focus used when a caller does not ask for one
    pub focus: Focus,
    /// Deadline for a single provider call, in seconds
    pub provider_timeout_secs: u64,
}

impl EngineConfig {
    pub fn provider_timeout(&self) -> Duration {
        Duration::from_secs(self.provider_timeout_secs)
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            length: LengthPreference::Medium,
            strategy: Strategy::Extractive,
            focus: Focus::Main,
            provider_timeout_secs: 30,
        }
    }
}

/// LLM provider configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentConfig {
    /// LLM provider: "local" or "gemini"
    pub provider: String,
    /// Model identifier (e.g., "gemini-2.0-flash")
    pub model: String,
    /// System persona for the agent
    pub persona: String,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            provider: LOCAL_PROVIDER.to_string(),
            model: "gemini-2.0-flash".to_string(),
            persona: "You are a precise editor who writes faithful, plain-prose summaries."
                .to_string(),
        }
    }
}

/// API keys configuration (loaded from environment)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ApiConfig {
    #[serde(default, skip_serializing)]
    pub gemini_key: Option<String>,
}

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub engine: EngineConfig,
    #[serde(default)]
    pub agent: AgentConfig,
    #[serde(default)]
    pub api: ApiConfig,
}

impl Config {
    /// Load configuration from the default location (summa.toml in cwd or home)
    pub fn load() -> Result<Self, ConfigError> {
        match Self::find_config_file() {
            Some(path) => Self::load_from(&path),
            None => {
                let mut config = Self::default();
                config.apply_env();
                Ok(config)
            }
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config = Self::from_toml_str(&content)?;
        config.apply_env();
        Ok(config)
    }

    /// Parse configuration text without touching the environment
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Render the configuration as TOML, without secrets
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    fn apply_env(&mut self) {
        if let Ok(key) = std::env::var("GEMINI_API_KEY") {
            self.api.gemini_key = Some(key);
        }
    }

    /// Find the config file in standard locations
    fn find_config_file() -> Option<PathBuf> {
        let local_config = PathBuf::from("summa.toml");
        if local_config.exists() {
            return Some(local_config);
        }

        let home_config = dirs::home_dir()?
            .join(".config")
            .join("summa")
            .join("summa.toml");
        home_config.exists().then_some(home_config)
    }

    /// Get the API key for the configured provider
    pub fn api_key(&self) -> Result<&str, ConfigError> {
        match self.agent.provider.as_str() {
            "gemini" => self
                .api
                .gemini_key
                .as_deref()
                .ok_or_else(|| ConfigError::MissingApiKey("gemini".to_string())),
            other => Err(ConfigError::UnsupportedProvider(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn empty_file_gives_defaults() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config.engine.length, LengthPreference::Medium);
        assert_eq!(config.engine.strategy, Strategy::Extractive);
        assert_eq!(config.engine.provider_timeout(), Duration::from_secs(30));
        assert_eq!(config.agent.provider, LOCAL_PROVIDER);
    }

    #[test]
    fn partial_sections_fill_in_defaults() {
        let config = Config::from_toml_str(
            r#"
            [engine]
            length = "long"
            provider_timeout_secs = 5

            [agent]
            provider = "gemini"
            "#,
        )
        .unwrap();
        assert_eq!(config.engine.length, LengthPreference::Long);
        assert_eq!(config.engine.strategy, Strategy::Extractive);
        assert_eq!(config.engine.provider_timeout_secs, 5);
        assert_eq!(config.agent.model, "gemini-2.0-flash");
    }

    #[test]
    fn unknown_enum_names_degrade_instead_of_failing() {
        let config = Config::from_toml_str(
            r#"
            [engine]
            length = "enormous"
            strategy = "telepathic"
            focus = "sideways"
            "#,
        )
        .unwrap();
        assert_eq!(config.engine.length, LengthPreference::Medium);
        assert_eq!(config.engine.strategy, Strategy::Extractive);
        assert_eq!(config.engine.focus, Focus::Main);
    }

    #[test]
    fn example_config_parses() {
        let config = Config::from_toml_str(include_str!("../summa.example.toml")).unwrap();
        assert_eq!(config.engine.focus, Focus::Main);
        assert_eq!(config.agent.provider, LOCAL_PROVIDER);
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let result = Config::from_toml_str("[engine\nlength = ");
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn loads_from_a_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[engine]\nstrategy = \"hybrid\"").unwrap();
        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(config.engine.strategy, Strategy::Hybrid);
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = Config::load_from(&dir.path().join("absent.toml"));
        assert!(matches!(result, Err(ConfigError::ReadError(_))));
    }

    #[test]
    fn api_key_depends_on_provider() {
        let mut config = Config::default();
        assert!(matches!(
            config.api_key(),
            Err(ConfigError::UnsupportedProvider(_))
        ));

        config.agent.provider = "gemini".to_string();
        config.api.gemini_key = None;
        assert!(matches!(config.api_key(), Err(ConfigError::MissingApiKey(_))));

        config.api.gemini_key = Some("secret".to_string());
        assert_eq!(config.api_key().unwrap(), "secret");
    }

    #[test]
    fn rendered_config_omits_secrets() {
        let mut config = Config::default();
        config.api.gemini_key = Some("secret".to_string());
        let rendered = config.to_toml_string().unwrap();
        assert!(rendered.contains("[engine]"));
        assert!(!rendered.contains("secret"));
    }
}
