mod cli;
mod error;
mod output;

use std::io::Write;
use std::time::Duration;

use clap::Parser;
use cli::{Cli, Command};
use error::CatalogError;
use rmapi::{ApiConfig, RelationPolicy, RickAndMorty};
use tracing::info;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = cli
        .log_level
        .parse::<tracing_subscriber::filter::LevelFilter>()
        .unwrap_or(tracing_subscriber::filter::LevelFilter::INFO);

    tracing_subscriber::fmt()
        .with_max_level(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let _ = dotenvy::dotenv(); // load .env if present

    let client = match build_client(&cli) {
        Ok(client) => client,
        Err(e) => {
            tracing::error!(error = %e, "startup failed");
            std::process::exit(1);
        }
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match run(&client, cli.command, cli.json, &mut out).await {
        Ok(()) => {}
        Err(e @ CatalogError::NotFound { .. }) => {
            tracing::error!(error = %e, "not found");
            std::process::exit(2);
        }
        Err(e) => {
            tracing::error!(error = %e, "rm-catalog failed");
            std::process::exit(1);
        }
    }
}

fn build_client(cli: &Cli) -> Result<RickAndMorty, CatalogError> {
    let config = api_config(cli, |key| std::env::var(key).ok())?;
    info!(
        base_url = %config.base_url,
        timeout = ?config.timeout,
        relation_policy = ?config.relation_policy,
        "rm-catalog starting"
    );
    Ok(RickAndMorty::new(config)?)
}

/// Resolve the API configuration: flags win over environment, environment
/// over defaults.
fn api_config<F>(cli: &Cli, env: F) -> Result<ApiConfig, CatalogError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = ApiConfig::default();

    if let Some(base_url) = cli.base_url.clone().or_else(|| env("RM_API_BASE_URL")) {
        config.base_url = base_url;
    }

    let timeout_secs = match cli.timeout_secs {
        Some(secs) => Some(secs),
        None => match env("RM_API_TIMEOUT_SECS") {
            Some(raw) => Some(raw.trim().parse::<u64>().map_err(|e| {
                CatalogError::Config(format!("RM_API_TIMEOUT_SECS={raw:?}: {e}"))
            })?),
            None => None,
        },
    };
    if let Some(secs) = timeout_secs {
        if secs == 0 {
            return Err(CatalogError::Config("timeout must be at least one second".into()));
        }
        config.timeout = Duration::from_secs(secs);
    }

    if cli.legacy_relations {
        config.relation_policy = RelationPolicy::LegacySubstring;
    }

    Ok(config)
}

/// Serve one page request.
async fn run<W: Write>(
    client: &RickAndMorty,
    command: Command,
    json: bool,
    out: &mut W,
) -> Result<(), CatalogError> {
    match command {
        Command::Characters(args) => {
            let page = args.page();
            let list = client.list_characters(&args.filters(), page).await;
            info!(%page, items = list.items.len(), total = list.page_info.total_count, "characters");
            output::write_list(&list, json, out)
        }

        Command::Locations(args) => {
            let page = args.page();
            let list = client.list_locations(&args.filters(), page).await;
            info!(%page, items = list.items.len(), total = list.page_info.total_count, "locations");
            output::write_list(&list, json, out)
        }

        Command::Episodes(args) => {
            let page = args.page();
            let list = client.list_episodes(&args.filters(), page).await;
            info!(%page, items = list.items.len(), total = list.page_info.total_count, "episodes");
            output::write_list(&list, json, out)
        }

        Command::Character(args) => {
            let detail = client.character(args.id).await.ok_or(CatalogError::NotFound {
                kind: rmapi::ResourceKind::Character,
                id: args.id,
            })?;
            info!(id = args.id, name = %detail.character.name, "character");
            output::write_character_detail(&detail, json, out)
        }

        Command::Location(args) => {
            let detail = client.location(args.id).await.ok_or(CatalogError::NotFound {
                kind: rmapi::ResourceKind::Location,
                id: args.id,
            })?;
            info!(id = args.id, residents = detail.residents.len(), "location");
            output::write_location_detail(&detail, json, out)
        }

        Command::Episode(args) => {
            let detail = client.episode(args.id).await.ok_or(CatalogError::NotFound {
                kind: rmapi::ResourceKind::Episode,
                id: args.id,
            })?;
            info!(id = args.id, characters = detail.characters.len(), "episode");
            output::write_episode_detail(&detail, json, out)
        }
    }
}
