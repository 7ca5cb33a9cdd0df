use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{Resource, ResourceKind};

/// A location as returned by `/location` and `/location/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub id: u32,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub dimension: String,
    /// Detail URLs of the characters last seen here.
    pub residents: Vec<String>,
    pub url: String,
    pub created: DateTime<Utc>,
}

impl Resource for Location {
    const KIND: ResourceKind = ResourceKind::Location;
}
