use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{Resource, ResourceKind};

/// A character as returned by `/character` and `/character/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Character {
    pub id: u32,
    pub name: String,
    pub status: String,
    pub species: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub gender: String,
    /// Origin location link.
    pub origin: NamedLink,
    /// Last known location link.
    pub location: NamedLink,
    pub image: String,
    /// Detail URLs of every episode the character appears in.
    pub episode: Vec<String>,
    pub url: String,
    pub created: DateTime<Utc>,
}

impl Character {
    pub fn status(&self) -> CharacterStatus {
        CharacterStatus::from_status(&self.status)
    }
}

impl Resource for Character {
    const KIND: ResourceKind = ResourceKind::Character;
}

/// A display name paired with a relation link; `url` is empty when the
/// upstream has no target for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedLink {
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CharacterStatus {
    Alive,
    Dead,
    Unknown,
}

impl CharacterStatus {
    /// Case-insensitive; anything unrecognised is `Unknown`.
    pub fn from_status(status: &str) -> Self {
        if status.eq_ignore_ascii_case("alive") {
            CharacterStatus::Alive
        } else if status.eq_ignore_ascii_case("dead") {
            CharacterStatus::Dead
        } else {
            CharacterStatus::Unknown
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CharacterStatus::Alive => "alive",
            CharacterStatus::Dead => "dead",
            CharacterStatus::Unknown => "unknown",
        }
    }
}
