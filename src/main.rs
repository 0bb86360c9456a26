use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::info;

use oceanscan::config::{Config, Credentials};
use oceanscan::expand::expander::expand_with;
use oceanscan::expand::tables::ExpansionTables;
use oceanscan::metrics::client::MetricsClient;
use oceanscan::output::{markdown, terminal};
use oceanscan::pipeline::{self, RunSettings};
use oceanscan::scoring::opportunity::{parse_conversion_rate, DEFAULT_CONVERSION_RATE};

/// Oceanscan: blue-ocean keyword discovery for Naver search.
///
/// Ranks candidate keywords by how much search demand they have compared to
/// how much content already competes for it.
#[derive(Parser)]
#[command(name = "oceanscan", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Expand a seed keyword, score every candidate and write a report
    Analyze {
        /// Seed keyword to mine
        #[arg(long, default_value = "캠핑의자")]
        seed: String,

        /// Conversion rate in (0, 1] used in the efficiency score (default: 0.05)
        #[arg(
            long,
            default_value_t = DEFAULT_CONVERSION_RATE,
            value_parser = parse_conversion_rate
        )]
        conversion_rate: f64,
    },

    /// Deep-dive the current real-time trends
    Trends {
        /// Number of trending keywords to expand (default: 5)
        #[arg(long, default_value = "5")]
        limit: usize,

        /// Conversion rate in (0, 1] used in the efficiency score (default: 0.05)
        #[arg(
            long,
            default_value_t = DEFAULT_CONVERSION_RATE,
            value_parser = parse_conversion_rate
        )]
        conversion_rate: f64,
    },

    /// Hunt a category's related keywords for blue-ocean picks
    Niche {
        /// Category or topic to hunt (e.g. "미국 주식")
        #[arg(long)]
        seed: String,

        /// Max related keywords to analyze (default: 100)
        #[arg(long, default_value_t = pipeline::niche::DEFAULT_NICHE_LIMIT)]
        limit: usize,

        /// Conversion rate in (0, 1] used in the efficiency score (default: 0.05)
        #[arg(
            long,
            default_value_t = DEFAULT_CONVERSION_RATE,
            value_parser = parse_conversion_rate
        )]
        conversion_rate: f64,
    },

    /// Preview the expansion of a seed keyword (no API calls)
    Expand {
        /// Seed keyword to expand
        #[arg(long)]
        seed: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("oceanscan=info")),
        )
        .init();

    let cli = Cli::parse();
    let tables = ExpansionTables::default();

    match cli.command {
        Commands::Analyze {
            seed,
            conversion_rate,
        } => {
            let config = Config::load()?;
            let client = connect(&config)?;
            let settings = run_settings(&config, conversion_rate);

            println!("Analyzing seed keyword: {}", seed.bold());
            terminal::display_expansion(&seed, &expand_with(&seed, &tables));

            let Some(report) =
                pipeline::analyze::run(&client, &seed, &tables, &settings).await?
            else {
                no_data("No keyword returned usable data. Check your API credentials.");
                return Ok(());
            };

            terminal::display_ranked("Recommended Keywords", &report.ranked);
            terminal::display_summary(report.analyzed, report.passed(), report.drop_rate());

            let timestamp = markdown::report_timestamp();
            let path = markdown::write_report(
                &config.reports_dir,
                &markdown::analysis_file_name(&timestamp),
                &markdown::render_analysis_report(&report, &timestamp),
            )?;
            println!("\n{}", format!("Report saved to: {}", path.display()).bold());
        }

        Commands::Trends {
            limit,
            conversion_rate,
        } => {
            let config = Config::load()?;
            let client = connect(&config)?;
            let settings = run_settings(&config, conversion_rate);

            println!("Scraping trends from {}...", config.trend_source_url);
            let trends =
                oceanscan::trends::scraper::fetch_trending_keywords(&config.trend_source_url, limit)
                    .await;
            println!("  Trends: {}", trends.join(", ").cyan());

            let Some(report) = pipeline::trends::run(&client, trends, &tables, &settings).await?
            else {
                no_data("No keyword returned usable data.");
                return Ok(());
            };

            terminal::display_ranked("Trend Opportunities", &report.opportunities);
            terminal::display_summary(
                report.analyzed,
                report.opportunities.len(),
                pipeline::analyze::drop_rate(report.analyzed, report.opportunities.len()),
            );

            let timestamp = markdown::report_timestamp();
            let path = markdown::write_report(
                &config.reports_dir,
                &markdown::deep_dive_file_name(&timestamp),
                &markdown::render_deep_dive_report(&report, &config.trend_source_url, &timestamp),
            )?;
            println!("\n{}", format!("Deep dive report saved to: {}", path.display()).bold());
        }

        Commands::Niche {
            seed,
            limit,
            conversion_rate,
        } => {
            let config = Config::load()?;
            let client = connect(&config)?;
            let settings = run_settings(&config, conversion_rate);

            println!("Hunting in category: {}", seed.bold());

            let Some(report) = pipeline::niche::run(&client, &seed, limit, &settings).await?
            else {
                no_data("No related keywords found, or the keyword tool is unavailable.");
                return Ok(());
            };

            terminal::display_ranked("Hot Topics", &report.hot_topics);
            terminal::display_ranked("Blue Ocean", &report.blue_ocean);

            let timestamp = markdown::report_timestamp();
            let path = markdown::write_report(
                &config.reports_dir,
                &markdown::niche_file_name(&seed, &timestamp),
                &markdown::render_niche_report(&report, &timestamp),
            )?;
            println!("\n{}", format!("Niche report saved to: {}", path.display()).bold());
        }

        Commands::Expand { seed } => {
            let expansion = expand_with(&seed, &tables);
            terminal::display_expansion(&seed, &expansion);
            for candidate in &expansion.candidates {
                println!("    {candidate}");
            }
        }
    }

    Ok(())
}

/// Resolve credentials and build the live metrics client.
///
/// Missing credentials are fatal here, before any network call.
fn connect(config: &Config) -> Result<MetricsClient> {
    let credentials = Credentials::resolve(&Credentials::default_sources())?;
    info!(customer = %credentials.customer_id, "Connecting to Naver APIs");
    MetricsClient::new(config, &credentials)
}

fn run_settings(config: &Config, conversion_rate: f64) -> RunSettings {
    RunSettings {
        conversion_rate,
        request_delay: config.request_delay,
    }
}

fn no_data(message: &str) {
    println!("\n{} {}", "No data:".red().bold(), message);
}
