pub mod client;
pub mod config;
pub mod cursor;
pub mod error;
pub mod query;
pub mod relation;
pub mod rest;
pub mod types;

// ---- Top-level re-exports for ergonomic usage ----

// Client + config
pub use client::RickAndMorty;
pub use config::ApiConfig;
pub use error::{ApiError, RelationError, ResolvedRelation, Result};

// REST client
pub use rest::RmHttpClient;

// Query building + cursor navigation
pub use cursor::extract_page;
pub use query::{FilterSet, QueryString};

// Relations
pub use relation::{RelationPolicy, RelationRef};

// Entities
pub use types::{Character, CharacterStatus, Episode, Location, NamedLink};

// Pagination
pub use types::{ListResult, Page, PageInfo};

// Resource kinds
pub use types::{Resource, ResourceKind};

// Detail views
pub use types::{CharacterDetail, EpisodeDetail, LocationDetail};
