//! Report command implementation.
//!
//! The report command:
//! 1. Fetches the external transaction history
//! 2. Fetches the internal transaction history
//! 3. Derives lifetime statistics
//! 4. Builds the cumulative daily series
//! 5. Writes the JSON report

use crate::explorer::ExplorerClient;
use crate::output::{render_summary, write_report, Report};
use crate::stats::{build_time_series, calculate_stats};
use crate::utils::config::{StatsConfig, DEFAULT_API_URL, DEFAULT_PAGE_SIZE};
use anyhow::{Context, Result};
use chrono::{NaiveDate, Utc};
use log::{debug, info};
use std::path::PathBuf;
use std::time::Instant;

/// Arguments for the report command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct ReportArgs {
    /// Explorer API base URL
    pub api_url: String,

    /// Contract address to analyze
    pub address: String,

    /// Optional explorer API key
    pub api_key: Option<String>,

    /// Output path for the JSON report
    pub output: PathBuf,

    /// First day of the series (None = contract creation default)
    pub start_date: Option<NaiveDate>,

    /// Protocol fee rate override
    pub fee_rate: Option<f64>,

    /// Records per explorer page
    pub page_size: usize,

    /// Print text summary to stdout
    pub print_summary: bool,
}

impl Default for ReportArgs {
    fn default() -> Self {
        let config = StatsConfig::default();
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            address: config.contract_address,
            api_key: None,
            output: PathBuf::from("report.json"),
            start_date: None,
            fee_rate: None,
            page_size: DEFAULT_PAGE_SIZE,
            print_summary: false,
        }
    }
}

/// Execute the report command
///
/// **Public** - main entry point called from main.rs
pub fn execute_report(args: ReportArgs) -> Result<()> {
    let start_time = Instant::now();

    let config = build_config(&args);
    let today = Utc::now().date_naive();

    info!("Starting report for contract: {}", config.contract_address);
    info!("Explorer endpoint: {}", args.api_url);

    let client = ExplorerClient::new(&args.api_url, args.api_key.clone())
        .context("Failed to create explorer client")?
        .with_page_size(args.page_size);

    info!("Step 1/5: Fetching external transactions...");
    let transactions = client
        .account_transactions(&config.contract_address)
        .context("Failed to fetch external transactions")?;

    info!("Step 2/5: Fetching internal transactions...");
    let internal_transactions = client
        .account_internal_transactions(&config.contract_address)
        .context("Failed to fetch internal transactions")?;

    debug!(
        "History fully loaded: {} external, {} internal",
        transactions.len(),
        internal_transactions.len()
    );

    info!("Step 3/5: Deriving lifetime statistics...");
    let stats = calculate_stats(&transactions, &internal_transactions, &config);

    info!(
        "Step 4/5: Building daily series ({} to {})...",
        config.series_start, today
    );
    let time_series = build_time_series(
        &transactions,
        &internal_transactions,
        config.series_start,
        today,
        &config,
    );

    info!("Step 5/5: Writing report...");
    let report = Report::new(config.contract_address.clone(), stats, time_series);
    write_report(&report, &args.output).context("Failed to write report JSON")?;

    info!("✓ Report written to: {}", args.output.display());

    if args.print_summary {
        println!("\n{}", "=".repeat(60));
        println!("CONTRACT ACTIVITY SUMMARY");
        println!("{}", "=".repeat(60));
        println!("Contract: {}", report.contract_address);
        println!("{}", render_summary(&report.stats, report.time_series.len()));
        println!("{}", "=".repeat(60));
    }

    let elapsed = start_time.elapsed();
    info!("Report completed in {:.2}s", elapsed.as_secs_f64());

    Ok(())
}

/// Merge CLI overrides into the default configuration
///
/// **Private** - internal helper for execute_report
fn build_config(args: &ReportArgs) -> StatsConfig {
    let mut config = StatsConfig {
        contract_address: args.address.clone(),
        ..StatsConfig::default()
    };
    if let Some(start) = args.start_date {
        config.series_start = start;
    }
    if let Some(rate) = args.fee_rate {
        config.fee_rate = rate;
    }
    config
}

/// Validate report arguments before doing any network work
///
/// **Public** - can be called before execute_report for early validation
pub fn validate_args(args: &ReportArgs) -> Result<()> {
    if args.api_url.is_empty() {
        anyhow::bail!("API URL cannot be empty");
    }

    if !args.api_url.starts_with("http://") && !args.api_url.starts_with("https://") {
        anyhow::bail!("API URL must start with http:// or https://");
    }

    let address = args.address.strip_prefix("0x").unwrap_or(&args.address);
    if address.len() != 40 || !address.chars().all(|c| c.is_ascii_hexdigit()) {
        anyhow::bail!("Contract address must be 20 bytes (40 hex characters)");
    }

    if args.page_size == 0 {
        anyhow::bail!("page size must be greater than 0");
    }

    if args.page_size > 10_000 {
        anyhow::bail!("page size is too large (max 10000)");
    }

    if let Some(rate) = args.fee_rate {
        if rate <= 0.0 || rate >= 1.0 {
            anyhow::bail!("fee rate must be between 0 and 1 (exclusive)");
        }
    }

    if let Some(start) = args.start_date {
        if start > Utc::now().date_naive() {
            anyhow::bail!("start date cannot be in the future");
        }
    }

    Ok(())
}
