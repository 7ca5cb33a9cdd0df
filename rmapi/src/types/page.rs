use std::fmt;
use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::cursor;

/// A 1-indexed page number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Page(NonZeroU32);

impl Page {
    pub const FIRST: Page = Page(NonZeroU32::MIN);

    pub fn new(n: u32) -> Option<Self> {
        NonZeroU32::new(n).map(Page)
    }

    /// Strict parse: `Some` only for a positive decimal integer made of
    /// ASCII digits alone (no sign, no surrounding whitespace).
    pub fn parse_strict(raw: &str) -> Option<Self> {
        if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        raw.parse::<u32>().ok().and_then(Self::new)
    }

    /// Lenient parse for inbound page requests: absent or invalid input
    /// falls back to the first page.
    pub fn parse(raw: Option<&str>) -> Self {
        raw.and_then(|raw| Self::parse_strict(raw.trim()))
            .unwrap_or_default()
    }

    pub fn get(self) -> u32 {
        self.0.get()
    }
}

impl Default for Page {
    fn default() -> Self {
        Page::FIRST
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Pagination metadata of a list response (`info` in the upstream body).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageInfo {
    #[serde(rename = "count")]
    pub total_count: u32,
    #[serde(rename = "pages")]
    pub total_pages: u32,
    /// Cursor to the next page; `None` at the last page.
    pub next: Option<String>,
    /// Cursor to the previous page; `None` at the first page.
    pub prev: Option<String>,
}

impl PageInfo {
    /// Metadata of a list with nothing in it and no cursors.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn has_next(&self) -> bool {
        self.next_page().is_some()
    }

    pub fn has_prev(&self) -> bool {
        self.prev_page().is_some()
    }

    /// Target page of the `next` cursor. A malformed cursor counts as
    /// exhausted.
    pub fn next_page(&self) -> Option<Page> {
        page_or_exhausted(self.next.as_deref(), "next")
    }

    /// Target page of the `prev` cursor. A malformed cursor counts as
    /// exhausted.
    pub fn prev_page(&self) -> Option<Page> {
        page_or_exhausted(self.prev.as_deref(), "prev")
    }
}

fn page_or_exhausted(cursor_url: Option<&str>, direction: &str) -> Option<Page> {
    match cursor::extract_page(cursor_url) {
        Ok(page) => page,
        Err(e) => {
            warn!(direction, error = %e, "ignoring unusable pagination cursor");
            None
        }
    }
}

/// One page of a list endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListResult<T> {
    pub items: Vec<T>,
    pub page_info: PageInfo,
}

impl<T> ListResult<T> {
    /// The degraded result served when a list fetch fails.
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            page_info: PageInfo::empty(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Wire shape of a list response: `{ info, results }`.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiPage<T> {
    pub info: PageInfo,
    pub results: Vec<T>,
}

impl<T> From<ApiPage<T>> for ListResult<T> {
    fn from(page: ApiPage<T>) -> Self {
        Self {
            items: page.results,
            page_info: page.info,
        }
    }
}
