use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Proxy operating mode.
///
/// Deserializes any unrecognized value as `Disabled` so a bad config file
/// degrades to pass-through instead of routing traffic at a dead endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProxyMode {
    Enabled,
    #[default]
    Disabled,
}

impl<'de> Deserialize<'de> for ProxyMode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(match s.as_str() {
            "enabled" => ProxyMode::Enabled,
            _ => ProxyMode::Disabled,
        })
    }
}

/// Global configuration loaded from `~/.config/tpx/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProxyConfig {
    /// Whether rewriting is on at all.
    #[serde(default)]
    pub mode: ProxyMode,
    /// Root URL of the intermediary that forwards to the real image/API provider.
    pub base_url: String,
    /// Optional proxy auth token, appended to rewritten URLs as `token=`.
    #[serde(default)]
    pub auth_token: Option<String>,
}

impl Default for ProxyConfig {
    fn default() -> Self {
        Self {
            mode: ProxyMode::Disabled,
            base_url: "http://127.0.0.1:9118".to_string(),
            auth_token: None,
        }
    }
}

impl ProxyConfig {
    /// True when rewriting should actually happen: mode is enabled and a
    /// base URL is configured. An empty base URL behaves as disabled.
    pub fn is_active(&self) -> bool {
        self.mode == ProxyMode::Enabled && !self.base_url.trim().is_empty()
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("tpx")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<ProxyConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = ProxyConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: ProxyConfig = toml::from_str(&data)?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_disabled_localhost() {
        let cfg = ProxyConfig::default();
        assert_eq!(cfg.mode, ProxyMode::Disabled);
        assert_eq!(cfg.base_url, "http://127.0.0.1:9118");
        assert!(cfg.auth_token.is_none());
        assert!(!cfg.is_active());
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = ProxyConfig {
            mode: ProxyMode::Enabled,
            base_url: "https://proxy.example".to_string(),
            auth_token: Some("s3cret".to_string()),
        };
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: ProxyConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.mode, ProxyMode::Enabled);
        assert_eq!(parsed.base_url, cfg.base_url);
        assert_eq!(parsed.auth_token.as_deref(), Some("s3cret"));
    }

    #[test]
    fn config_toml_enabled() {
        let toml = r#"
            mode = "enabled"
            base_url = "https://proxy.example"
        "#;
        let cfg: ProxyConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.mode, ProxyMode::Enabled);
        assert!(cfg.auth_token.is_none());
        assert!(cfg.is_active());
    }

    #[test]
    fn unknown_mode_falls_back_to_disabled() {
        let toml = r#"
            mode = "auto"
            base_url = "https://proxy.example"
        "#;
        let cfg: ProxyConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.mode, ProxyMode::Disabled);
        assert!(!cfg.is_active());
    }

    #[test]
    fn missing_mode_defaults_to_disabled() {
        let toml = r#"
            base_url = "https://proxy.example"
        "#;
        let cfg: ProxyConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.mode, ProxyMode::Disabled);
    }

    #[test]
    fn empty_base_url_is_inactive() {
        let cfg = ProxyConfig {
            mode: ProxyMode::Enabled,
            base_url: "  ".to_string(),
            auth_token: None,
        };
        assert!(!cfg.is_active());
    }
}
