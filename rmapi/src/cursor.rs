//! Cursor navigation for paged lists.
//!
//! Upstream cursors are full URLs. Only the `page` query parameter is read;
//! scheme, host and path are never assumed to match the current request.

use url::form_urlencoded;

use crate::error::{ApiError, Result};
use crate::types::Page;

/// Extract the target page of a `next`/`prev` cursor.
///
/// `Ok(None)` means there is no cursor, i.e. that direction is exhausted.
///
/// # Errors
///
/// Returns [`ApiError::MalformedCursor`] when the cursor has no query, no
/// `page` parameter, or a `page` that is not a positive integer.
pub fn extract_page(cursor_url: Option<&str>) -> Result<Option<Page>> {
    let Some(cursor_url) = cursor_url else {
        return Ok(None);
    };

    let without_fragment = cursor_url.split('#').next().unwrap_or_default();
    let (_, query) = without_fragment
        .split_once('?')
        .ok_or_else(|| ApiError::MalformedCursor(cursor_url.to_string()))?;

    form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == "page")
        .and_then(|(_, value)| Page::parse_strict(&value))
        .map(Some)
        .ok_or_else(|| ApiError::MalformedCursor(cursor_url.to_string()))
}
