use clap::{Parser, Subcommand};
use rmapi::{FilterSet, Page};

/// rm-catalog: browse characters, locations and episodes of the catalog API.
#[derive(Parser, Debug)]
#[command(name = "rm-catalog", version)]
pub struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", global = true)]
    pub log_level: String,

    /// Output as JSON instead of TSV
    #[arg(long, global = true)]
    pub json: bool,

    /// API root URL (overrides RM_API_BASE_URL)
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Per-request timeout in seconds (overrides RM_API_TIMEOUT_SECS)
    #[arg(long, global = true)]
    pub timeout_secs: Option<u64>,

    /// Treat any relation link containing "null" as absent
    #[arg(long, global = true)]
    pub legacy_relations: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List characters, optionally filtered
    Characters(CharacterArgs),

    /// List locations, optionally filtered
    Locations(LocationArgs),

    /// List episodes, optionally filtered
    Episodes(EpisodeArgs),

    /// Show a character with its origin and last known location
    Character(IdArgs),

    /// Show a location with its residents
    Location(IdArgs),

    /// Show an episode with its cast
    Episode(IdArgs),
}

/// Arguments for the `characters` subcommand.
#[derive(Parser, Debug)]
pub struct CharacterArgs {
    /// Name (partial match)
    #[arg(long)]
    pub name: Option<String>,

    /// Status (alive, dead, unknown)
    #[arg(long)]
    pub status: Option<String>,

    /// Species
    #[arg(long)]
    pub species: Option<String>,

    /// Type or subspecies
    #[arg(long = "type")]
    pub kind: Option<String>,

    /// Gender (female, male, genderless, unknown)
    #[arg(long)]
    pub gender: Option<String>,

    /// Page number; anything but a positive integer means page 1
    #[arg(long)]
    pub page: Option<String>,
}

/// Arguments for the `locations` subcommand.
#[derive(Parser, Debug)]
pub struct LocationArgs {
    /// Name (partial match)
    #[arg(long)]
    pub name: Option<String>,

    /// Type (e.g. Planet, Space station)
    #[arg(long = "type")]
    pub kind: Option<String>,

    /// Dimension
    #[arg(long)]
    pub dimension: Option<String>,

    /// Page number; anything but a positive integer means page 1
    #[arg(long)]
    pub page: Option<String>,
}

/// Arguments for the `episodes` subcommand.
#[derive(Parser, Debug)]
pub struct EpisodeArgs {
    /// Name (partial match)
    #[arg(long)]
    pub name: Option<String>,

    /// Episode code (e.g. S01E01, or S01 for a whole season)
    #[arg(long)]
    pub episode: Option<String>,

    /// Page number; anything but a positive integer means page 1
    #[arg(long)]
    pub page: Option<String>,
}

/// Arguments for the detail subcommands.
#[derive(Parser, Debug)]
pub struct IdArgs {
    /// Entity id
    pub id: u32,
}

impl CharacterArgs {
    pub fn filters(&self) -> FilterSet {
        FilterSet::new()
            .with_opt("name", self.name.as_deref())
            .with_opt("status", self.status.as_deref())
            .with_opt("species", self.species.as_deref())
            .with_opt("type", self.kind.as_deref())
            .with_opt("gender", self.gender.as_deref())
    }

    pub fn page(&self) -> Page {
        Page::parse(self.page.as_deref())
    }
}

impl LocationArgs {
    pub fn filters(&self) -> FilterSet {
        FilterSet::new()
            .with_opt("name", self.name.as_deref())
            .with_opt("type", self.kind.as_deref())
            .with_opt("dimension", self.dimension.as_deref())
    }

    pub fn page(&self) -> Page {
        Page::parse(self.page.as_deref())
    }
}

impl EpisodeArgs {
    pub fn filters(&self) -> FilterSet {
        FilterSet::new()
            .with_opt("name", self.name.as_deref())
            .with_opt("episode", self.episode.as_deref())
    }

    pub fn page(&self) -> Page {
        Page::parse(self.page.as_deref())
    }
}
