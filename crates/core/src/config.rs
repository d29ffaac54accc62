//! Client configuration — replaces a hardcoded service address.
//!
//! Loaded from `.researchscope.toml` in the working directory when present,
//! with a `RESEARCHSCOPE_URL` environment override for deployment-specific
//! endpoints. Everything falls back to defaults.

use serde::Deserialize;

/// Default Search Service address (the backend's local dev port).
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

/// How many results to request per category.
pub const DEFAULT_MAX_RESULTS: usize = 5;

const DEFAULT_TIMEOUT_SECS: u64 = 30;

const CONFIG_FILE: &str = ".researchscope.toml";

/// Runtime configuration for the Search Service client.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Base URL of the Search Service, without the `/search` path.
    pub base_url: String,
    /// `max_results` query parameter sent with every search.
    pub max_results: usize,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            max_results: DEFAULT_MAX_RESULTS,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl ClientConfig {
    /// Load configuration: file if present, then environment override.
    pub fn load() -> Self {
        let mut cfg = match std::fs::read_to_string(CONFIG_FILE) {
            Ok(content) => Self::from_toml_str(&content).unwrap_or_else(|e| {
                tracing::warn!("invalid {CONFIG_FILE}: {e}; using defaults");
                Self::default()
            }),
            Err(_) => Self::default(),
        };
        if let Ok(url) = std::env::var("RESEARCHSCOPE_URL") {
            if !url.trim().is_empty() {
                cfg.base_url = url;
            }
        }
        cfg
    }

    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sane() {
        let cfg = ClientConfig::default();
        assert_eq!(cfg.base_url, DEFAULT_BASE_URL);
        assert_eq!(cfg.max_results, 5);
        assert_eq!(cfg.timeout_secs, 30);
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let cfg =
            ClientConfig::from_toml_str(r#"base_url = "http://search.internal:9000""#).expect("parse");
        assert_eq!(cfg.base_url, "http://search.internal:9000");
        assert_eq!(cfg.max_results, DEFAULT_MAX_RESULTS);
    }

    #[test]
    fn full_toml_overrides_everything() {
        let cfg = ClientConfig::from_toml_str(
            "base_url = \"http://10.0.0.2:8000\"\nmax_results = 10\ntimeout_secs = 5\n",
        )
        .expect("parse");
        assert_eq!(cfg.base_url, "http://10.0.0.2:8000");
        assert_eq!(cfg.max_results, 10);
        assert_eq!(cfg.timeout_secs, 5);
    }

    #[test]
    fn invalid_toml_is_an_error() {
        assert!(ClientConfig::from_toml_str("base_url = [nonsense").is_err());
    }
}
