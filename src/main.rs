use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use tracing::info;

use vouchboard::activity::client::EthosActivityClient;
use vouchboard::config::{self, Config};
use vouchboard::output::terminal;
use vouchboard::pipeline::load::{run_cycle, CycleOutcome};
use vouchboard::pipeline::widget::{PresentationMode, WidgetKind, WidgetSettings};
use vouchboard::ranking::loader::RankingLoader;

/// Vouchboard: recent reviews and vouches between ranked Ethos users.
///
/// Loads the leaderboard, polls the activity API for the top users and
/// writes the result as a standalone HTML widget.
#[derive(Parser)]
#[command(name = "vouchboard", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load the ranking and print it
    Ranking,

    /// Build the recent-reviews widget
    Reviews(WidgetArgs),

    /// Build the recent-vouches widget
    Vouches(WidgetArgs),
}

#[derive(Args)]
struct WidgetArgs {
    /// Maximum number of events to show (default: 5 reviews, 8 vouches)
    #[arg(long)]
    limit: Option<usize>,

    /// How many top-ranked users to poll (default: 10 reviews, 20 vouches)
    #[arg(long)]
    breadth: Option<usize>,

    /// Pause between activity requests in milliseconds (default: 300 reviews, 200 vouches)
    #[arg(long)]
    delay_ms: Option<u64>,

    /// Presentation mode (default: list for reviews, marquee for vouches)
    #[arg(long, value_enum)]
    mode: Option<PresentationMode>,

    /// Where to write the HTML page (default: reviews.html / vouches.html)
    #[arg(long)]
    out: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // VOUCHBOARD_DEBUG opens the developer debug channel; RUST_LOG still wins
    let default_filter = if config::debug_flag_enabled() {
        "vouchboard=debug"
    } else {
        "vouchboard=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Ranking => {
            let loader = RankingLoader::new()?;
            let users = loader
                .load_first(&config.ranking_sources())
                .await
                .context("Could not load the ranking from any source")?;
            terminal::display_ranking(&users);
        }

        Commands::Reviews(args) => build_widget(&config, WidgetKind::Reviews, args).await?,

        Commands::Vouches(args) => build_widget(&config, WidgetKind::Vouches, args).await?,
    }

    Ok(())
}

/// Run one load cycle for `kind` and write the page.
async fn build_widget(config: &Config, kind: WidgetKind, args: WidgetArgs) -> Result<()> {
    let settings = widget_settings(config, kind, &args);
    let out = args
        .out
        .unwrap_or_else(|| PathBuf::from(format!("{}.html", kind.noun())));

    println!("Building the {} widget...", kind.noun());

    let loader = RankingLoader::new()?;
    let fetcher = EthosActivityClient::new(&config.activity_api_url, config.page_size)?;
    let outcome = run_cycle(&loader, &config.ranking_sources(), &fetcher, &settings).await;

    match &outcome {
        CycleOutcome::Loaded { ranking, events } => {
            info!(tracked = ranking.len(), shown = events.len(), "Widget built");
            terminal::display_events(kind, events);
        }
        CycleOutcome::Failed(e) => terminal::display_failure(kind, &e.to_string()),
    }

    let page = outcome.to_page(&settings, chrono::Utc::now().timestamp_millis());
    std::fs::write(&out, page).with_context(|| format!("Failed to write {}", out.display()))?;

    println!("{} {}", "Page written to".bold(), out.display());
    Ok(())
}

fn widget_settings(config: &Config, kind: WidgetKind, args: &WidgetArgs) -> WidgetSettings {
    let mut settings = WidgetSettings::preset(kind, &config.app_url);
    if let Some(limit) = args.limit {
        settings.aggregate.max_items = limit;
    }
    if let Some(breadth) = args.breadth {
        settings.aggregate.poll_breadth = breadth;
    }
    if let Some(delay_ms) = args.delay_ms {
        settings.aggregate.poll_delay = Duration::from_millis(delay_ms);
    }
    if let Some(mode) = args.mode {
        settings.mode = mode;
    }
    settings.aggregate.show_progress = true;
    settings
}
