pub mod endpoints;

use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::config::ApiConfig;
use crate::error::{ApiError, Result};
use crate::query::QueryString;

const USER_AGENT: &str = concat!("rmapi/", env!("CARGO_PKG_VERSION"));

/// HTTP client wrapper for the catalog REST API.
#[derive(Debug, Clone)]
pub struct RmHttpClient {
    client: Client,
    base_url: String,
}

impl RmHttpClient {
    /// Build a client with the configured per-request timeout.
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// GET a JSON resource relative to the API root.
    pub async fn get<T: DeserializeOwned>(&self, path: &str, query: Option<&QueryString>) -> Result<T> {
        let url = match query {
            Some(query) => format!("{}{}?{}", self.base_url, path, query),
            None => format!("{}{}", self.base_url, path),
        };
        self.get_url(&url).await
    }

    /// GET a JSON resource by absolute URL (relation links, cursors).
    ///
    /// A single attempt: transport failures and timeouts are
    /// [`ApiError::Network`], non-2xx is [`ApiError::Upstream`], and a body
    /// that does not decode as `T` is [`ApiError::Decode`].
    pub async fn get_url<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let url = Url::parse(url)?;
        let resp = self.client.get(url.clone()).send().await?;

        let status = resp.status();
        debug!(%url, status = status.as_u16(), "GET");

        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ApiError::Upstream {
                status: status.as_u16(),
                message: body,
            });
        }

        // Decoded separately so a bad body surfaces as Decode, not Network.
        let body = resp.text().await?;
        serde_json::from_str(&body).map_err(ApiError::Decode)
    }
}
