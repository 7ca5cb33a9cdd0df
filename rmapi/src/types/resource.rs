use std::fmt;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// The three list/detail endpoint families exposed by the upstream API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Character,
    Location,
    Episode,
}

impl ResourceKind {
    /// Path segment under the API root (`/character`, `/character/{id}`).
    pub fn path(self) -> &'static str {
        match self {
            ResourceKind::Character => "character",
            ResourceKind::Location => "location",
            ResourceKind::Episode => "episode",
        }
    }

    /// Filter fields accepted by the list endpoint, in declaration order.
    ///
    /// This order is the serialization order of built queries.
    pub fn filter_fields(self) -> &'static [&'static str] {
        match self {
            ResourceKind::Character => &["name", "status", "species", "type", "gender"],
            ResourceKind::Location => &["name", "type", "dimension"],
            ResourceKind::Episode => &["name", "episode"],
        }
    }

    pub fn accepts_filter(self, field: &str) -> bool {
        self.filter_fields().contains(&field)
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// An entity type served by one of the upstream endpoint families.
pub trait Resource: DeserializeOwned + Send {
    const KIND: ResourceKind;
}
