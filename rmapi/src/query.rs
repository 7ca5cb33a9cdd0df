//! Query builder for the paged list endpoints.
//!
//! A [`FilterSet`] is whatever the caller received (form fields, CLI flags);
//! [`build`] turns it into the canonical query string for one resource kind:
//! `page` first, then every non-empty known filter in the resource's
//! declared field order, values form-urlencoded.

use std::fmt;

use tracing::debug;
use url::form_urlencoded;

use crate::types::{Page, ResourceKind};

/// Ordered filter-field name to value mapping. An empty value means the
/// field is not applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSet {
    fields: Vec<(String, String)>,
}

impl FilterSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `field`, replacing any previous value in place.
    pub fn set(&mut self, field: impl Into<String>, value: impl Into<String>) -> &mut Self {
        let field = field.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(name, _)| *name == field) {
            Some(slot) => slot.1 = value,
            None => self.fields.push((field, value)),
        }
        self
    }

    /// Builder-style [`FilterSet::set`].
    pub fn with(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// Set `field` only when `value` is present.
    pub fn with_opt(self, field: impl Into<String>, value: Option<impl Into<String>>) -> Self {
        match value {
            Some(value) => self.with(field, value),
            None => self,
        }
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, value)| value.as_str())
    }

    /// All fields in insertion order, applied or not.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Fields that carry a value.
    pub fn active(&self) -> impl Iterator<Item = (&str, &str)> {
        self.iter().filter(|(_, value)| !value.is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.active().next().is_none()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FilterSet {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut filters = FilterSet::new();
        for (field, value) in iter {
            filters.set(field, value);
        }
        filters
    }
}

/// An encoded query component, without the leading `?`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryString(String);

impl QueryString {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for QueryString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Build the list query for `resource`.
///
/// Fields the resource does not declare are ignored (logged at `debug`).
pub fn build(resource: ResourceKind, filters: &FilterSet, page: Page) -> QueryString {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    serializer.append_pair("page", &page.to_string());

    for field in resource.filter_fields() {
        if let Some(value) = filters.get(field).filter(|v| !v.is_empty()) {
            serializer.append_pair(field, value);
        }
    }

    for (field, _) in filters.active() {
        if !resource.accepts_filter(field) {
            debug!(%resource, field, "ignoring unknown filter field");
        }
    }

    QueryString(serializer.finish())
}
