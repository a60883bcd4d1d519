//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{OutputFormat, PricewatchArgs};
use crate::error::Result;
use crate::listing::{Listing, ScoredListing};
use crate::relevance::QueryIntent;

/// Result structure for the rank command.
#[derive(Debug, Serialize, Deserialize)]
pub struct RankResult {
    pub query: String,
    pub intent: QueryIntent,
    pub threshold: f64,
    /// True when nothing cleared the threshold and the full set is shown.
    pub fallback: bool,
    pub starting_from: Option<f64>,
    pub results: Vec<ScoredListing>,
    /// Populated instead of `results` on fallback.
    pub unfiltered: Vec<Listing>,
}

/// Result structure for a single price normalization.
#[derive(Debug, Serialize, Deserialize)]
pub struct PriceResult {
    pub raw: String,
    pub price: f64,
    /// False when the raw text failed to parse and `price` is the sentinel.
    pub parsed: bool,
}

/// Result structure for intent classification.
#[derive(Debug, Serialize, Deserialize)]
pub struct IntentResult {
    pub query: String,
    pub intent: QueryIntent,
    pub threshold: f64,
}

/// Result structure for text analysis.
#[derive(Debug, Serialize, Deserialize)]
pub struct AnalyzeResult {
    pub text: String,
    pub normalized: String,
    pub tokens: Vec<String>,
    pub model_tokens: Vec<String>,
    pub base_models: Vec<String>,
}

/// Output a result in the selected format.
pub fn output_result<T: Serialize>(message: &str, result: &T, args: &PricewatchArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in human-readable format.
fn output_human<T: Serialize>(message: &str, result: &T, args: &PricewatchArgs) -> Result<()> {
    if args.verbosity() > 0 && !message.is_empty() {
        println!("{message}");
        println!();
    }

    let value = serde_json::to_value(result)?;

    if std::any::type_name::<T>().contains("RankResult") {
        output_rank_result_human(&value)
    } else {
        output_generic_human(&value)
    }
}

/// Output ranked listings in human format.
fn output_rank_result_human(value: &serde_json::Value) -> Result<()> {
    let Some(obj) = value.as_object() else {
        return Ok(());
    };

    let intent = obj.get("intent").and_then(|i| i.as_str()).unwrap_or("?");
    let threshold = obj
        .get("threshold")
        .and_then(|t| t.as_f64())
        .unwrap_or(0.0);
    println!("Intent: {intent} (threshold {threshold})");

    if let Some(from) = obj.get("starting_from").and_then(|f| f.as_f64()) {
        println!("Starting from: ${from:.2}");
    }

    let fallback = obj
        .get("fallback")
        .and_then(|f| f.as_bool())
        .unwrap_or(false);

    if fallback {
        println!();
        println!("No listing cleared the threshold; showing all listings:");
        if let Some(listings) = obj.get("unfiltered").and_then(|l| l.as_array()) {
            for listing in listings {
                let name = listing.get("name").and_then(|n| n.as_str()).unwrap_or("?");
                let raw = listing
                    .get("raw_price")
                    .and_then(|p| p.as_str())
                    .unwrap_or("?");
                println!("  {name} - {raw}");
            }
        }
        return Ok(());
    }

    if let Some(results) = obj.get("results").and_then(|r| r.as_array()) {
        println!();
        for (i, result) in results.iter().enumerate() {
            let score = result
                .get("score")
                .and_then(|s| s.as_f64())
                .unwrap_or(0.0);
            let listing = result.get("listing");
            let name = listing
                .and_then(|l| l.get("name"))
                .and_then(|n| n.as_str())
                .unwrap_or("?");
            let raw = listing
                .and_then(|l| l.get("raw_price"))
                .and_then(|p| p.as_str())
                .unwrap_or("?");
            println!("{}. [{score:.2}] {name} - {raw}", i + 1);
        }

        if results.is_empty() {
            println!("No results.");
        }
    }

    Ok(())
}

/// Output generic data in human format.
fn output_generic_human(value: &serde_json::Value) -> Result<()> {
    match value {
        serde_json::Value::Object(obj) => {
            for (key, val) in obj {
                println!("{key}: {}", format_value(val));
            }
        }
        serde_json::Value::Array(arr) => {
            for item in arr {
                output_generic_human(item)?;
                println!();
            }
        }
        _ => println!("{}", format_value(value)),
    }
    Ok(())
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &PricewatchArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}

/// Format a JSON value for display.
fn format_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::Bool(b) => b.to_string(),
        serde_json::Value::Array(arr) => {
            let formatted = arr.iter().map(format_value).collect::<Vec<_>>().join(", ");
            format!("[{formatted}]")
        }
        serde_json::Value::Object(_) => "[object]".to_string(),
        serde_json::Value::Null => "null".to_string(),
    }
}
