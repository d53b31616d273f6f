//! Freeplay CLI - Browse the free-to-play catalog from a terminal

mod output;

use std::io::{self, Write};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use indicatif::{ProgressBar, ProgressStyle};

use freeplay_core::config::DIRECT_API_BASE;
use freeplay_core::{
    CatalogClient, CatalogConfig, CatalogEvent, Category, FetchStatus, Platform, SortKey,
    Variant, ViewState,
};

use output::Format;

#[derive(Parser)]
#[command(name = "freeplay-cli")]
#[command(author, version, about = "Free-to-play game catalog CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum VariantArg {
    Full,
    Compact,
}

impl From<VariantArg> for Variant {
    fn from(arg: VariantArg) -> Self {
        match arg {
            VariantArg::Full => Variant::Full,
            VariantArg::Compact => Variant::Compact,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch the catalog and print one page of results
    List {
        /// Platform filter (all, pc, browser)
        #[arg(short, long, default_value = "all")]
        platform: Platform,

        /// Category filter (e.g. mmorpg, shooter, battle-royale)
        #[arg(short, long, default_value = "all")]
        category: Category,

        /// Sort order (all, release-date, popularity, alphabetical)
        #[arg(short, long, default_value = "all")]
        sort: SortKey,

        /// Case-insensitive title search
        #[arg(long)]
        search: Option<String>,

        /// 1-based page number
        #[arg(long, default_value_t = 1)]
        page: usize,

        /// Page size and feature preset
        #[arg(long, value_enum, default_value = "full")]
        variant: VariantArg,

        /// Catalog API base URL
        #[arg(long, env = "FREEPLAY_API_BASE", default_value = DIRECT_API_BASE)]
        api_base: String,

        /// Output format
        #[arg(short, long, value_enum, default_value = "table")]
        format: Format,
    },

    /// Show accepted filter values
    Filters,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("freeplay_cli=info,freeplay_core=warn")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::List {
            platform,
            category,
            sort,
            search,
            page,
            variant,
            api_base,
            format,
        } => {
            let config = CatalogConfig::new(variant.into()).with_api_base(api_base);
            let events = [
                CatalogEvent::SetPlatform(platform),
                CatalogEvent::SetCategory(category),
                CatalogEvent::SetSort(sort),
            ];
            cmd_list(config, events, search, page, format).await?;
        }
        Commands::Filters => {
            cmd_filters(&mut io::stdout().lock())?;
        }
    }

    Ok(())
}

async fn cmd_list(
    config: CatalogConfig,
    filter_events: [CatalogEvent; 3],
    search: Option<String>,
    page: usize,
    format: Format,
) -> Result<()> {
    let client = CatalogClient::new().context("Failed to create HTTP client")?;

    // Drive the same reducer as the browser app. Only the last request
    // issued matters; earlier ones would be dropped as stale anyway.
    let (mut state, mut request) = ViewState::new(config).apply(CatalogEvent::Mounted);
    for event in filter_events {
        let (next, issued) = state.apply(event);
        state = next;
        request = issued.or(request);
    }
    let request = request.context("No catalog request was issued")?;

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .context("Invalid spinner template")?,
    );
    spinner.set_message(format!("Fetching {}", request.url));
    spinner.enable_steady_tick(Duration::from_millis(100));

    let result = client.fetch(&request).await;
    spinner.finish_and_clear();

    let (mut state, _) = state.apply(CatalogEvent::FetchCompleted { seq: request.seq, result });
    if let FetchStatus::Failed(e) = state.status() {
        anyhow::bail!("Catalog request to {} failed: {}", request.url, e);
    }

    if let Some(search) = search {
        if !state.config().capabilities.search {
            tracing::warn!("search is not available in the compact variant, ignoring --search");
        }
        state = state.apply(CatalogEvent::SetSearch(search)).0;
    }

    state = state.apply(CatalogEvent::GoToPage(page)).0;
    if state.current_page() != page && page != 1 {
        tracing::warn!(
            requested = page,
            total = state.total_pages(),
            "page out of range, showing page {}",
            state.current_page()
        );
    }

    let mut out = io::stdout().lock();
    output::render(&mut out, &state, format)?;
    out.flush()?;
    Ok(())
}

fn cmd_filters(out: &mut impl Write) -> Result<()> {
    writeln!(out, "Platforms:")?;
    for p in Platform::ALL {
        writeln!(out, "  {:<16} {}", p.as_param(), p.label())?;
    }
    writeln!(out, "\nCategories:")?;
    for c in Category::ALL {
        writeln!(out, "  {:<16} {}", c.as_param(), c.label())?;
    }
    writeln!(out, "\nSort orders:")?;
    for s in SortKey::ALL {
        writeln!(out, "  {:<16} {}", s.as_param(), s.label())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_list() {
        let cli = Cli::try_parse_from([
            "freeplay-cli", "list", "--platform", "browser", "--category", "battle-royale",
            "--sort", "popularity", "--page", "2", "--format", "csv",
        ])
        .unwrap();
        match cli.command {
            Commands::List { platform, category, sort, page, format, .. } => {
                assert_eq!(platform, Platform::Browser);
                assert_eq!(category, Category::BattleRoyale);
                assert_eq!(sort, SortKey::Popularity);
                assert_eq!(page, 2);
                assert_eq!(format, Format::Csv);
            }
            Commands::Filters => panic!("expected list"),
        }
    }

    #[test]
    fn test_cli_rejects_unknown_platform() {
        assert!(Cli::try_parse_from(["freeplay-cli", "list", "--platform", "console"]).is_err());
    }

    #[test]
    fn test_filters_listing() {
        let mut buf = Vec::new();
        cmd_filters(&mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("battle-royale"));
        assert!(text.contains("release-date"));
        assert!(text.contains("browser"));
    }
}
