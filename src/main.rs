use std::fs;

use clap::Parser;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use homefeed::cli::{Cli, Commands};
use homefeed::config::Config;
use homefeed::domain::{FeedItem, PolicyTable};
use homefeed::errors::{FeedError, FeedResult};
use homefeed::services::{find_invalid_dates, FetchService, OpmlService, PolishService};
use homefeed::sources::SourceRegistry;

fn main() {
    init_tracing();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Logs go to stderr so stdout stays clean for `--json`
fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("homefeed=info,warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_writer(std::io::stderr))
        .init();
}

fn run() -> FeedResult<()> {
    let cli = Cli::parse();

    // Only commands that read configuration load it
    match cli.command {
        Commands::Fetch { opml, limit, json } => cmd_fetch(&Config::from_env()?, opml, limit, json),
        Commands::Polish { files, limit, json } => {
            cmd_polish(&Config::from_env()?, &files, limit, json)
        }
        Commands::Check { files } => cmd_check(&files),
        Commands::Feeds => cmd_feeds(&Config::from_env()?),
        Commands::Export { output } => cmd_export(&Config::from_env()?, output),
    }
}

fn resolve_display_count(config: &Config, limit: Option<usize>) -> FeedResult<usize> {
    match limit {
        Some(0) => Err(FeedError::InvalidInput(
            "limit must be a positive number".to_string(),
        )),
        Some(n) => Ok(n),
        None => Ok(config.display_count),
    }
}

fn cmd_fetch(
    config: &Config,
    opml: Option<String>,
    limit: Option<usize>,
    json: bool,
) -> FeedResult<()> {
    let display_count = resolve_display_count(config, limit)?;

    let mut config = config.clone();
    if let Some(path) = opml {
        let content = fs::read_to_string(&path)?;
        config.feeds = OpmlService::import_feeds(&content)?;
        info!(path = %path, feeds = config.feeds.len(), "Loaded feed list from OPML");
    }

    let fetch_service = FetchService::new(SourceRegistry::from_config(&config));
    info!(sources = fetch_service.source_count(), "Fetching feeds");

    let build = fetch_service.build();
    let items = build.polished(&PolishService::with_display_count(display_count));
    info!(fetched = build.fetched_count(), shown = items.len(), "Feed list ready");

    print_items(&items, json)
}

fn cmd_polish(
    config: &Config,
    files: &[String],
    limit: Option<usize>,
    json: bool,
) -> FeedResult<()> {
    let display_count = resolve_display_count(config, limit)?;
    let collections = read_collections(files)?;

    let items = PolishService::with_display_count(display_count).polish(collections);
    print_items(&items, json)
}

fn cmd_check(files: &[String]) -> FeedResult<()> {
    let items: Vec<FeedItem> = read_collections(files)?.into_iter().flatten().collect();
    let invalid = find_invalid_dates(&items);

    if invalid.is_empty() {
        println!("All dates parse.");
        return Ok(());
    }

    println!("{} posts with unparseable dates:\n", invalid.len());
    for item in invalid {
        println!("  {} [{}]: '{}'", item.title, item.source_feed_url, item.pub_date);
    }

    Ok(())
}

fn cmd_feeds(config: &Config) -> FeedResult<()> {
    if config.feeds.is_empty() && config.posts_api_url.is_none() {
        println!("No feeds configured.");
        return Ok(());
    }

    let policies = PolicyTable::defaults();

    println!("Configured feeds:\n");
    for feed in &config.feeds {
        println!("  {} [{}]", feed.label(), feed.source_type);
        if let Some(presentation) = policies.get(&feed.url) {
            println!("    Image: {}", presentation.image_asset);
            if let Some(rewrite) = &presentation.link_rewrite {
                println!("    Links: first '{}' becomes '{}'", rewrite.from, rewrite.to);
            }
        }
        println!();
    }

    if let Some(url) = &config.posts_api_url {
        println!("  {} [posts_api]", url);
        println!();
    }

    println!("Showing up to {} posts.", config.display_count);

    Ok(())
}

fn cmd_export(config: &Config, output: Option<String>) -> FeedResult<()> {
    let opml = OpmlService::export_feeds(&config.feeds)?;

    match output {
        Some(path) => {
            fs::write(&path, &opml)?;
            println!("Exported feeds to {}", path);
        }
        None => {
            println!("{}", opml);
        }
    }

    Ok(())
}

/// One collection per file, in argument order
fn read_collections(files: &[String]) -> FeedResult<Vec<Vec<FeedItem>>> {
    files
        .iter()
        .map(|path| {
            let content = fs::read_to_string(path)?;
            serde_json::from_str::<Vec<FeedItem>>(&content)
                .map_err(|e| FeedError::InvalidInput(format!("{}: {}", path, e)))
        })
        .collect()
}

fn print_items(items: &[FeedItem], json: bool) -> FeedResult<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(items)?);
        return Ok(());
    }

    if items.is_empty() {
        println!("No posts.");
        return Ok(());
    }

    for item in items {
        println!("{}  {}", item.display_date(), item.title);
        println!("    {}", item.link);
        if let Some(img_src) = &item.img_src {
            println!("    Image: {}", img_src);
        }
        println!();
    }

    Ok(())
}
