//! Command line argument parsing for the pricewatch CLI using clap.

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Pricewatch - relevance scoring and price normalization for watch search
#[derive(Parser, Debug, Clone)]
#[command(name = "pricewatch")]
#[command(about = "Rank scraped watch listings against a search query")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct PricewatchArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl PricewatchArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Rank a listings file against a query
    Rank(RankArgs),

    /// Normalize raw price strings
    Price(PriceArgs),

    /// Classify a query's intent and show its threshold
    Intent(IntentArgs),

    /// Show the analysis of a piece of text
    Analyze(AnalyzeArgs),
}

/// Arguments for ranking listings
#[derive(Parser, Debug, Clone)]
pub struct RankArgs {
    /// Search query
    #[arg(value_name = "QUERY")]
    pub query: String,

    /// Listings file (JSON array of {name, raw_price} objects)
    #[arg(value_name = "LISTINGS_FILE")]
    pub listings_file: PathBuf,

    /// Maximum number of results to show
    #[arg(short, long)]
    pub limit: Option<usize>,

    /// Return an empty result instead of falling back to the full
    /// unfiltered set when nothing clears the threshold
    #[arg(long)]
    pub no_fallback: bool,
}

/// Arguments for price normalization
#[derive(Parser, Debug, Clone)]
pub struct PriceArgs {
    /// Raw price strings ("CA$1,299.99", "1.299,99", ...)
    #[arg(value_name = "PRICE", required = true)]
    pub prices: Vec<String>,
}

/// Arguments for intent classification
#[derive(Parser, Debug, Clone)]
pub struct IntentArgs {
    /// Search query
    #[arg(value_name = "QUERY")]
    pub query: String,
}

/// Arguments for text analysis
#[derive(Parser, Debug, Clone)]
pub struct AnalyzeArgs {
    /// Text to analyze (a query or a listing name)
    #[arg(value_name = "TEXT")]
    pub text: String,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
