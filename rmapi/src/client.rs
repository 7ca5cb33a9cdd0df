use tracing::{debug, warn};

use crate::config::ApiConfig;
use crate::error::{RelationError, Result};
use crate::query::{self, FilterSet};
use crate::relation::{RelationPolicy, RelationRef};
use crate::rest::RmHttpClient;
use crate::types::*;

/// Page-load entry points over the catalog API.
///
/// Every call is independent: filters and page come in as arguments and
/// nothing is kept between calls besides the connection pool.
#[derive(Debug, Clone)]
pub struct RickAndMorty {
    /// HTTP client.
    pub http_client: RmHttpClient,
    relation_policy: RelationPolicy,
}

impl RickAndMorty {
    pub fn new(config: ApiConfig) -> Result<Self> {
        let http_client = RmHttpClient::new(&config)?;
        Ok(Self {
            http_client,
            relation_policy: config.relation_policy,
        })
    }

    /// Classify raw relation links under the configured policy.
    pub fn relation_refs<S: AsRef<str>>(&self, raw: &[S]) -> Vec<RelationRef> {
        RelationRef::parse_all(raw, self.relation_policy)
    }

    // --- Lists ---

    /// Load one page of a filtered list.
    ///
    /// Any failure (transport, non-2xx, undecodable body) is logged and
    /// served as an empty page with no cursors so the caller can still render.
    pub async fn list_page<T: Resource>(&self, filters: &FilterSet, page: Page) -> ListResult<T> {
        let query = query::build(T::KIND, filters, page);

        match self.http_client.fetch_list::<T>(&query).await {
            Ok(list) => {
                debug!(
                    resource = %T::KIND,
                    %query,
                    items = list.items.len(),
                    total = list.page_info.total_count,
                    "list page loaded"
                );
                list
            }
            Err(e) => {
                warn!(resource = %T::KIND, %query, error = %e, "list fetch failed, serving empty page");
                ListResult::empty()
            }
        }
    }

    pub async fn list_characters(&self, filters: &FilterSet, page: Page) -> ListResult<Character> {
        self.list_page(filters, page).await
    }

    pub async fn list_locations(&self, filters: &FilterSet, page: Page) -> ListResult<Location> {
        self.list_page(filters, page).await
    }

    pub async fn list_episodes(&self, filters: &FilterSet, page: Page) -> ListResult<Episode> {
        self.list_page(filters, page).await
    }

    // --- Details ---

    /// Load a single entity; `None` means not found (any failure).
    pub async fn detail<T: Resource>(&self, id: u32) -> Option<T> {
        match self.http_client.fetch_detail::<T>(id).await {
            Ok(entity) => Some(entity),
            Err(e) => {
                warn!(
                    resource = %T::KIND,
                    id,
                    not_found = e.is_not_found(),
                    error = %e,
                    "detail fetch failed"
                );
                None
            }
        }
    }

    /// Character plus origin and last known location, resolved as one batch.
    pub async fn character(&self, id: u32) -> Option<CharacterDetail> {
        let character = self.detail::<Character>(id).await?;

        let refs = self.relation_refs(&[&character.origin.url, &character.location.url]);
        let mut resolved = self
            .http_client
            .resolve_many::<Location>(&refs)
            .await
            .into_iter();
        let origin = resolved.next().unwrap_or(Err(RelationError::NoRelation));
        let location = resolved.next().unwrap_or(Err(RelationError::NoRelation));

        Some(CharacterDetail {
            character,
            origin,
            location,
        })
    }

    /// Episode plus its full cast.
    pub async fn episode(&self, id: u32) -> Option<EpisodeDetail> {
        let episode = self.detail::<Episode>(id).await?;
        let refs = self.relation_refs(&episode.characters);
        let characters = self.http_client.resolve_many::<Character>(&refs).await;
        Some(EpisodeDetail { episode, characters })
    }

    /// Location plus its residents.
    pub async fn location(&self, id: u32) -> Option<LocationDetail> {
        let location = self.detail::<Location>(id).await?;
        let refs = self.relation_refs(&location.residents);
        let residents = self.http_client.resolve_many::<Character>(&refs).await;
        Some(LocationDetail {
            location,
            residents,
        })
    }
}
