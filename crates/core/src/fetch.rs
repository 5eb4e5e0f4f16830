//! Page fetching.
//!
//! The transport collaborator for hosts that want one: a plain GET of a
//! resolved [`PageRequest`]. Retry, caching, and rate limiting are host
//! concerns; nothing here is consulted by the extraction pipeline, which only
//! ever sees the returned markup.

use std::time::Duration;

use reqwest::Client;

use crate::request::PageRequest;
use crate::{LegendaError, Result};

/// HTTP client configuration.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Request timeout in seconds.
    pub timeout: u64,
    /// User-Agent header sent with every request.
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout: 30,
            user_agent: "Mozilla/5.0 (compatible; legenda/0.3; +https://crates.io/crates/legenda-core)"
                .to_string(),
        }
    }
}

/// Fetches the raw markup behind a resolved request.
///
/// Applies the request's per-site headers on top of a browser-like default
/// set. Any transport failure surfaces unchanged; the caller decides whether
/// to retry.
pub async fn fetch_page(request: &PageRequest, config: &FetchConfig) -> Result<String> {
    let client = Client::builder()
        .timeout(Duration::from_secs(config.timeout))
        .build()
        .map_err(LegendaError::Http)?;

    let mut builder = client
        .get(request.url.clone())
        .header("User-Agent", &config.user_agent)
        .header(
            "Accept",
            "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
        )
        .header("Accept-Language", "en-US,en;q=0.9");

    for (name, value) in &request.headers {
        builder = builder.header(name, value);
    }

    let response = builder.send().await.map_err(|e| {
        if e.is_timeout() {
            LegendaError::Timeout { timeout: config.timeout }
        } else {
            LegendaError::Http(e)
        }
    })?;

    let body = response.error_for_status()?.text().await?;
    Ok(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_config_default() {
        let config = FetchConfig::default();
        assert_eq!(config.timeout, 30);
        assert!(config.user_agent.contains("legenda"));
    }
}
