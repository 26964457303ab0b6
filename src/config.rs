//! Configuration loading
//!
//! Every field is optional; the defaults point at the local development
//! backends.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

pub const DEFAULT_AGENT_URL: &str = "http://localhost:8000";
pub const DEFAULT_TOOLS_URL: &str = "http://localhost:43210/api";

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub backend: BackendConfig,
    pub ui: UiConfig,
    pub log: LogConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    /// Agent server base URL
    pub agent_url: String,
    /// Tool runner base URL, including its `/api` prefix
    pub tools_url: String,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            agent_url: DEFAULT_AGENT_URL.to_string(),
            tools_url: DEFAULT_TOOLS_URL.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub width: f32,
    pub height: f32,
    /// Show the tool-runner users table below the two main panels
    pub show_tool_users: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            width: 1100.0,
            height: 860.0,
            show_tool_users: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Filter used when `RUST_LOG` is not set
    pub filter: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from the default path, falling back to defaults
    pub fn load() -> Result<Self> {
        match Self::default_config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Config::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Get the config directory path (e.g. ~/.config/mcp-console)
    pub fn config_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("mcp-console"))
    }

    /// Get the default config file path
    pub fn default_config_path() -> Option<PathBuf> {
        Self::config_dir().map(|p| p.join("config.toml"))
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults_match_local_backends() {
        let config = Config::default();
        assert_eq!(config.backend.agent_url, "http://localhost:8000");
        assert_eq!(config.backend.tools_url, "http://localhost:43210/api");
        assert!(config.ui.show_tool_users);
        assert_eq!(config.log.filter, "info");
    }

    #[test]
    fn test_partial_file() {
        let config: Config = toml::from_str(
            r#"
            [backend]
            agent_url = "http://10.0.0.5:8000"

            [ui]
            show_tool_users = false
            "#,
        )
        .unwrap();
        assert_eq!(config.backend.agent_url, "http://10.0.0.5:8000");
        assert_eq!(config.backend.tools_url, DEFAULT_TOOLS_URL);
        assert!(!config.ui.show_tool_users);
        assert_eq!(config.ui.width, 1100.0);
    }

    #[test]
    fn test_toml_round_trip() {
        let config = Config::default();
        let text = config.to_toml().unwrap();
        assert_eq!(toml::from_str::<Config>(&text).unwrap(), config);
    }

    #[test]
    fn test_load_from_reports_bad_file() {
        let path = std::env::temp_dir().join(format!("mcp-console-bad-{}.toml", std::process::id()));
        std::fs::write(&path, "[backend\nagent_url = 1").unwrap();
        let err = Config::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
        let _ = std::fs::remove_file(&path);
    }
}
