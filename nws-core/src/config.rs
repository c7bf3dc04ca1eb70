use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

/// Top-level configuration, fixed at startup and read-only afterwards.
///
/// Every field has a sensible default, so a missing config file means
/// "talk to the real weather.gov service".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the NWS REST API.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Value sent as the `User-Agent` header. The NWS API rejects
    /// requests without an identifying agent string.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://api.weather.gov".to_string()
}

fn default_user_agent() -> String {
    "nws-cli/0.1 (weather.gov query client)".to_string()
}

const fn default_timeout_secs() -> u64 {
    30
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            user_agent: default_user_agent(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Config {
    /// Load config from disk, or return the defaults if no file exists yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "nws", "nws-cli")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_weather_gov() {
        let cfg = Config::default();

        assert_eq!(cfg.base_url, "https://api.weather.gov");
        assert_eq!(cfg.timeout_secs, 30);
        assert!(cfg.user_agent.contains("nws-cli"));
    }

    #[test]
    fn partial_file_falls_back_to_field_defaults() {
        let cfg: Config = toml::from_str("base_url = \"http://localhost:9999\"")
            .expect("partial config must parse");

        assert_eq!(cfg.base_url, "http://localhost:9999");
        assert_eq!(cfg.timeout_secs, 30);
        assert!(cfg.user_agent.contains("nws-cli"));
    }

    #[test]
    fn empty_file_is_all_defaults() {
        let cfg: Config = toml::from_str("").expect("empty config must parse");

        assert_eq!(cfg.base_url, Config::default().base_url);
    }
}
