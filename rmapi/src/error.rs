use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("upstream error {status}: {message}")]
    Upstream { status: u16, message: String },

    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("malformed cursor: {0}")]
    MalformedCursor(String),

    #[error("invalid url: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl ApiError {
    /// True when the upstream answered 404.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::Upstream { status: 404, .. })
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;

/// Per-item failure marker produced by the relation resolver.
#[derive(Error, Debug)]
pub enum RelationError {
    /// The entity carries no usable link; nothing was fetched.
    #[error("no relation")]
    NoRelation,

    #[error("failed to resolve {url}: {source}")]
    ResolutionFailed {
        url: String,
        #[source]
        source: ApiError,
    },
}

/// A hydrated relation, or the reason it could not be hydrated.
pub type ResolvedRelation<T> = std::result::Result<T, RelationError>;
