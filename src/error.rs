use rmapi::ResourceKind;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("api error: {0}")]
    Api(#[from] rmapi::ApiError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{kind} {id} not found")]
    NotFound { kind: ResourceKind, id: u32 },

    #[error("invalid configuration: {0}")]
    Config(String),
}
