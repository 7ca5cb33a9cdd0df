use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{Resource, ResourceKind};

/// An episode as returned by `/episode` and `/episode/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Episode {
    pub id: u32,
    pub name: String,
    /// Free-text air date (e.g. "December 2, 2013").
    pub air_date: String,
    /// Season/episode code (e.g. "S01E01").
    #[serde(rename = "episode")]
    pub code: String,
    /// Detail URLs of the episode's cast.
    pub characters: Vec<String>,
    pub url: String,
    pub created: DateTime<Utc>,
}

impl Resource for Episode {
    const KIND: ResourceKind = ResourceKind::Episode;
}
