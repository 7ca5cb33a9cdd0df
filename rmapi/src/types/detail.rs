use crate::error::ResolvedRelation;
use crate::types::{Character, Episode, Location};

/// A character with its origin and last known location resolved.
#[derive(Debug)]
pub struct CharacterDetail {
    pub character: Character,
    pub origin: ResolvedRelation<Location>,
    pub location: ResolvedRelation<Location>,
}

/// An episode with its cast resolved, in the episode's own order.
#[derive(Debug)]
pub struct EpisodeDetail {
    pub episode: Episode,
    pub characters: Vec<ResolvedRelation<Character>>,
}

/// A location with its residents resolved, in the location's own order.
#[derive(Debug)]
pub struct LocationDetail {
    pub location: Location,
    pub residents: Vec<ResolvedRelation<Character>>,
}
