//! Relation links and their resolution.
//!
//! Entities embed links to other entities as absolute detail URLs (a
//! character's origin, an episode's cast). [`RelationRef`] is one such link
//! after a presence check; [`RmHttpClient::resolve_many`] hydrates a batch of
//! them concurrently and returns one [`ResolvedRelation`] per input, in input
//! order, whatever order the fetches complete in.

use futures_util::future::join_all;
use tracing::{debug, warn};
use url::Url;

use crate::error::{RelationError, ResolvedRelation};
use crate::rest::RmHttpClient;
use crate::types::Resource;

/// Rule deciding whether a raw link string names a relation at all.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RelationPolicy {
    /// Present iff the link parses as an absolute `http`/`https` URL whose
    /// last path segment is not `null` (`.../location/null`).
    #[default]
    WellFormed,
    /// Absent iff the link is empty or contains `"null"` anywhere; anything
    /// else is fetched as-is and fails at resolution time if unusable.
    LegacySubstring,
}

/// A relation link, or the absence of one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RelationRef {
    /// No relation; never dereferenced.
    Absent,
    /// Link to another entity's detail endpoint.
    Link(String),
}

impl RelationRef {
    pub fn parse(raw: &str, policy: RelationPolicy) -> Self {
        let raw = raw.trim();
        let present = match policy {
            RelationPolicy::WellFormed => is_well_formed(raw),
            RelationPolicy::LegacySubstring => !raw.is_empty() && !raw.contains("null"),
        };

        if present {
            RelationRef::Link(raw.to_string())
        } else {
            if !raw.is_empty() {
                debug!(link = raw, ?policy, "treating link as no relation");
            }
            RelationRef::Absent
        }
    }

    pub fn parse_all<S: AsRef<str>>(raw: &[S], policy: RelationPolicy) -> Vec<Self> {
        raw.iter()
            .map(|link| Self::parse(link.as_ref(), policy))
            .collect()
    }

    pub fn is_present(&self) -> bool {
        matches!(self, RelationRef::Link(_))
    }

    pub fn url(&self) -> Option<&str> {
        match self {
            RelationRef::Link(url) => Some(url),
            RelationRef::Absent => None,
        }
    }

    /// Id of the linked entity: the trailing numeric path segment
    /// (`.../location/3` -> 3).
    pub fn id(&self) -> Option<u32> {
        let url = Url::parse(self.url()?).ok()?;
        url.path_segments()?
            .rev()
            .find(|segment| !segment.is_empty())?
            .parse()
            .ok()
    }
}

fn is_well_formed(raw: &str) -> bool {
    let Ok(url) = Url::parse(raw) else {
        return false;
    };
    if !matches!(url.scheme(), "http" | "https") || !url.has_host() {
        return false;
    }

    let last_segment = url
        .path_segments()
        .and_then(|mut segments| segments.rfind(|segment| !segment.is_empty()));
    !matches!(last_segment, Some("null"))
}

impl RmHttpClient {
    /// Resolve every reference concurrently and wait for all of them.
    ///
    /// The output has the same length and order as `refs`. `Absent` refs map
    /// to [`RelationError::NoRelation`] without a request; a failed fetch maps
    /// to [`RelationError::ResolutionFailed`] and leaves its siblings alone.
    pub async fn resolve_many<T: Resource>(&self, refs: &[RelationRef]) -> Vec<ResolvedRelation<T>> {
        let resolved = join_all(refs.iter().map(|r| self.resolve_one::<T>(r))).await;

        let failed = resolved
            .iter()
            .filter(|r| matches!(r, Err(RelationError::ResolutionFailed { .. })))
            .count();
        debug!(
            resource = %T::KIND,
            total = refs.len(),
            failed,
            "resolved relations"
        );

        resolved
    }

    /// Resolve a single reference.
    pub async fn resolve_one<T: Resource>(&self, relation: &RelationRef) -> ResolvedRelation<T> {
        let RelationRef::Link(url) = relation else {
            return Err(RelationError::NoRelation);
        };

        self.get_url::<T>(url).await.map_err(|source| {
            warn!(url = %url, error = %source, "relation resolution failed");
            RelationError::ResolutionFailed {
                url: url.clone(),
                source,
            }
        })
    }
}
