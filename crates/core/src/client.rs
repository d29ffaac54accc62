//! HTTP client for the Search Service.
//!
//! One operation: `GET {base}/search?q=...&max_results=...`. Every failure
//! (transport, non-2xx status, undecodable body) surfaces as a single
//! `anyhow::Error`; the UI reduces it to one display string.

use std::time::Duration;

use anyhow::{anyhow, Result};
use reqwest::Client;

use crate::config::ClientConfig;
use crate::types::ResearchResponse;

#[derive(Clone)]
pub struct SearchClient {
    http: Client,
    base: String,
}

impl SearchClient {
    pub fn new(config: &ClientConfig) -> Self {
        let http = Client::builder()
            .user_agent(concat!("researchscope/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .expect("reqwest client");
        Self {
            http,
            base: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Client against an explicit base URL; defaults for everything else.
    pub fn with_base(base: &str) -> Self {
        let cfg = ClientConfig {
            base_url: base.to_string(),
            ..ClientConfig::default()
        };
        Self::new(&cfg)
    }

    /// Base URL this client talks to (no trailing slash).
    pub fn base_url(&self) -> &str {
        &self.base
    }

    /// Run one search against the service and decode the response.
    pub async fn search(&self, query: &str, max_results: usize) -> Result<ResearchResponse> {
        let url = format!("{}/search", self.base);
        tracing::debug!(query, max_results, "search request");
        let resp = self
            .http
            .get(&url)
            .query(&[("q", query)])
            .query(&[("max_results", max_results)])
            .send()
            .await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(anyhow!("search service error: HTTP {}", status));
        }
        let payload = resp.json::<ResearchResponse>().await?;
        Ok(payload)
    }
}
