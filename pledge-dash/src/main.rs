//! pledge-dash - Government commitment dashboard views
//!
//! Loads the commitment table, then prints the requested dashboard view as
//! JSON on stdout for a chart or table renderer. Logs go to stderr.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Args as ClapArgs, Parser, Subcommand};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use pledge_common::config::{resolve_data_path, DashboardConfig};
use pledge_common::dates::parse_day_first;
use pledge_common::StatusBucket;
use pledge_dash::aggregate::{
    delivery_timeline, party_breakdown, summary_counts, top_categories, upcoming_due,
};
use pledge_dash::source::load_dataset;
use pledge_dash::{list_page, DashboardSnapshot, FilterConfig, SortConfig, SortDirection, SortKey};

/// Command-line arguments for pledge-dash
#[derive(Parser, Debug)]
#[command(name = "pledge-dash")]
#[command(about = "Government commitment tracker dashboard views")]
#[command(version)]
struct Args {
    /// Configuration file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Commitment data file (CSV with header row)
    #[arg(short, long)]
    data: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Status bucket counts and percentages
    Summary,
    /// Status breakdown for each tracked party
    Parties,
    /// Most common categories
    Categories {
        /// Number of categories to show (default from config)
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Monthly delivery counts with running total
    Timeline,
    /// Commitments due soonest
    Upcoming {
        /// Reference day, DD/MM/YYYY (default: today)
        #[arg(long, value_parser = parse_today)]
        today: Option<NaiveDate>,
    },
    /// Every chart view at once
    Snapshot {
        /// Reference day for upcoming due dates, DD/MM/YYYY (default: today)
        #[arg(long, value_parser = parse_today)]
        today: Option<NaiveDate>,
    },
    /// One page of the filtered and sorted commitment list
    List(ListArgs),
}

#[derive(ClapArgs, Debug)]
struct ListArgs {
    /// Case-insensitive text to search for
    #[arg(short, long, default_value = "")]
    search: String,

    /// Category to include (repeatable)
    #[arg(long = "category")]
    categories: Vec<String>,

    /// Party to include (repeatable)
    #[arg(long = "party")]
    parties: Vec<String>,

    /// Status bucket to include: not-started, in-progress, delivered, failed (repeatable)
    #[arg(long = "status")]
    statuses: Vec<StatusBucket>,

    /// Column to sort by
    #[arg(long)]
    sort: Option<SortKey>,

    /// Sort order: asc or desc
    #[arg(long, default_value = "asc")]
    order: SortDirection,

    /// Page number (1-indexed)
    #[arg(long, default_value_t = 1)]
    page: usize,

    /// Rows per page (default from config)
    #[arg(long)]
    page_size: Option<usize>,
}

impl ListArgs {
    fn filter(&self) -> FilterConfig {
        FilterConfig {
            search_text: self.search.clone(),
            categories: self.categories.iter().cloned().collect(),
            parties: self.parties.iter().cloned().collect(),
            status_buckets: self.statuses.iter().copied().collect(),
        }
    }

    fn sort(&self) -> Option<SortConfig> {
        self.sort.map(|key| SortConfig::new(key, self.order))
    }
}

fn parse_today(value: &str) -> std::result::Result<NaiveDate, String> {
    parse_day_first(value).ok_or_else(|| format!("expected DD/MM/YYYY, got '{}'", value))
}

fn today_or_now(today: Option<NaiveDate>) -> NaiveDate {
    today.unwrap_or_else(|| chrono::Local::now().date_naive())
}

fn print_json<T: Serialize>(view: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(view).context("Failed to serialize view")?;
    println!("{}", json);
    Ok(())
}

fn init_tracing(config: &DashboardConfig) {
    // RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Resolve quietly; the outcome is logged once the configured level is known
    let (config, source) = DashboardConfig::resolve(args.config.as_deref())
        .context("Failed to load configuration")?;
    init_tracing(&config);

    info!(
        "Starting pledge-dash v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );
    source.log();

    let data_path = resolve_data_path(args.data.as_deref(), &config);
    let dataset = load_dataset(&data_path)
        .with_context(|| format!("Failed to load commitments from {}", data_path.display()))?;
    info!("Loaded {} commitments", dataset.len());

    let records = dataset.records();
    match args.command {
        Command::Summary => {
            let summary = summary_counts(records);
            print_json(&serde_json::json!({
                "summary": summary,
                "percentages": summary.percentages(),
            }))
        }
        Command::Parties => print_json(&party_breakdown(records, &config.tracked_parties)),
        Command::Categories { limit } => {
            print_json(&top_categories(records, limit.unwrap_or(config.top_categories)))
        }
        Command::Timeline => print_json(&delivery_timeline(records, &config.timeline)),
        Command::Upcoming { today } => print_json(&upcoming_due(
            records,
            today_or_now(today),
            config.upcoming_limit,
        )),
        Command::Snapshot { today } => print_json(&DashboardSnapshot::compute(
            records,
            &config,
            today_or_now(today),
        )),
        Command::List(list) => {
            let page = list_page(
                records,
                &list.filter(),
                list.sort().as_ref(),
                list.page,
                list.page_size.unwrap_or(config.page_size),
            );
            if page.total_results == 0 {
                info!("No commitments match the current filters");
            }
            print_json(&page)
        }
    }
}
