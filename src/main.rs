//! Chiliz Pool Analytics CLI
//!
//! Derives lifetime statistics and a cumulative daily time series for a
//! betting-pool contract from its full block-explorer transaction history.

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use chz_pool_analytics::commands::{execute_report, validate_args, ReportArgs};
use chz_pool_analytics::utils::config::{
    DEFAULT_API_URL, DEFAULT_CONTRACT_ADDRESS, DEFAULT_PAGE_SIZE, SCHEMA_VERSION,
};

/// Chiliz Pool Analytics - contract statistics from explorer history
#[derive(Parser, Debug)]
#[command(name = "chz-pool")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Fetch history and generate the statistics report
    Report {
        /// Explorer API base URL
        #[arg(long, default_value = DEFAULT_API_URL)]
        api: String,

        /// Contract address to analyze
        #[arg(short, long, default_value = DEFAULT_CONTRACT_ADDRESS)]
        address: String,

        /// Explorer API key
        #[arg(long, env = "EXPLORER_API_KEY")]
        api_key: Option<String>,

        /// Output path for the JSON report
        #[arg(short, long, default_value = "report.json")]
        output: PathBuf,

        /// First day of the series, YYYY-MM-DD (defaults to contract creation)
        #[arg(long)]
        start_date: Option<NaiveDate>,

        /// Protocol fee rate used by the attribution heuristic
        #[arg(long)]
        fee_rate: Option<f64>,

        /// Records per explorer page
        #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
        page_size: usize,

        /// Print text summary to stdout
        #[arg(long)]
        summary: bool,
    },

    /// Validate a report JSON file
    Validate {
        /// Path to report JSON file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Display schema information
    Schema {
        /// Show full schema details
        #[arg(long)]
        show: bool,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Execute command
    match cli.command {
        Commands::Report {
            api,
            address,
            api_key,
            output,
            start_date,
            fee_rate,
            page_size,
            summary,
        } => {
            let args = ReportArgs {
                api_url: api,
                address,
                api_key,
                output,
                start_date,
                fee_rate,
                page_size,
                print_summary: summary,
            };

            // Validate args first
            validate_args(&args)?;

            // Execute report
            execute_report(args)?;
        }

        Commands::Validate { file } => {
            validate_report_file(file)?;
        }

        Commands::Schema { show } => {
            display_schema(show);
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}

/// Validate a report JSON file
///
/// **Private** - internal command implementation
fn validate_report_file(file_path: PathBuf) -> Result<()> {
    use chz_pool_analytics::output::read_report;

    println!("Validating report: {}", file_path.display());

    let report = read_report(&file_path)?;

    println!("✓ Valid report JSON");
    println!("  Version: {}", report.version);
    println!("  Contract: {}", report.contract_address);
    println!("  Unique Wallets: {}", report.stats.unique_wallets);
    println!("  Total Transactions: {}", report.stats.total_transactions);
    println!("  Series Points: {}", report.time_series.len());

    Ok(())
}

/// Display schema information
///
/// **Private** - internal command implementation
fn display_schema(show_details: bool) {
    println!("Chiliz Pool Analytics Report Schema");
    println!("Current Version: {}", SCHEMA_VERSION);
    println!();

    if show_details {
        println!("Schema Structure:");
        println!("  version: string             - Schema version (e.g., '1.0.0')");
        println!("  contractAddress: string     - Contract the report describes");
        println!("  generatedAt: string         - ISO 8601 timestamp");
        println!("  stats: object               - Lifetime aggregate statistics");
        println!("    uniqueWallets: number     - Distinct addresses seen");
        println!("    totalTransactions: number - External + internal count");
        println!("    totalGasUsedChz: number   - Gas spent, in CHZ");
        println!("    totalChzTransferred: number - Value moved through the contract");
        println!("    betsReceived: number      - Value received by the contract");
        println!("    winningsRedistributed: number - Outflows minus fees, floored at 0");
        println!("    feesGenerated: number     - Attributed fee portion of outflows");
        println!("  timeSeries: array           - One cumulative point per day");
        println!("    date: string              - UTC calendar day (YYYY-MM-DD)");
        println!("    uniqueWallets, transactions, gasCost, volume,");
        println!("    volumeReceived, volumeRedistributed, fees - running totals");
    } else {
        println!("Use --show for detailed schema information");
    }
}

/// Display version information
///
/// **Private** - internal command implementation
fn display_version() {
    println!("Chiliz Pool Analytics v{}", env!("CARGO_PKG_VERSION"));
    println!("Report Schema: v{}", SCHEMA_VERSION);
    println!();
    println!("Contract statistics and daily time series from explorer history.");
}
