use std::time::Duration;

use crate::relation::RelationPolicy;

/// Default upstream API root.
pub const DEFAULT_BASE_URL: &str = "https://rickandmortyapi.com/api";

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Configuration for the catalog API client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// API root (e.g. `https://rickandmortyapi.com/api`); list and detail
    /// endpoints hang off it as `/<resource>` and `/<resource>/<id>`.
    pub base_url: String,
    /// Upper bound on a single outbound request, connect through body.
    pub timeout: Duration,
    /// How embedded relation links are judged present or absent.
    pub relation_policy: RelationPolicy,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.into(),
            timeout: DEFAULT_TIMEOUT,
            relation_policy: RelationPolicy::default(),
        }
    }
}

impl ApiConfig {
    /// Default configuration pointed at a different API root.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }
}
