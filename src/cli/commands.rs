//! Command implementations for the pricewatch CLI.

use std::fs::File;
use std::io::BufReader;

use log::info;

use crate::analysis::{base_model, extract_model_tokens, normalize, normalized_tokens};
use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::Result;
use crate::listing::{Listing, RawListing};
use crate::price::{normalize_price, parse_price};
use crate::relevance::{IntentClassifier, SearchOutcome, filter_results, rank_listings};

/// Execute a CLI command.
pub fn execute_command(args: &PricewatchArgs) -> Result<()> {
    match &args.command {
        Command::Rank(rank_args) => rank(rank_args, args),
        Command::Price(price_args) => price(price_args, args),
        Command::Intent(intent_args) => intent(intent_args, args),
        Command::Analyze(analyze_args) => analyze(analyze_args, args),
    }
}

/// Rank a listings file against a query.
fn rank(args: &RankArgs, cli_args: &PricewatchArgs) -> Result<()> {
    let file = File::open(&args.listings_file)?;
    let raw: Vec<RawListing> = serde_json::from_reader(BufReader::new(file))?;
    let listings: Vec<Listing> = raw.into_iter().map(Listing::from_raw).collect();
    info!(
        "ranking {} listings from {}",
        listings.len(),
        args.listings_file.display()
    );

    let classifier = IntentClassifier::new();
    let query_intent = classifier.classify(&args.query);
    let threshold = query_intent.recommended_threshold();

    let mut result = if args.no_fallback {
        let results = filter_results(&args.query, &listings);
        let starting_from = SearchOutcome::Filtered(results.clone()).starting_from();
        RankResult {
            query: args.query.clone(),
            intent: query_intent,
            threshold,
            fallback: false,
            starting_from,
            results,
            unfiltered: vec![],
        }
    } else {
        let outcome = rank_listings(&args.query, &listings);
        let starting_from = outcome.starting_from();
        match outcome {
            SearchOutcome::Filtered(results) => RankResult {
                query: args.query.clone(),
                intent: query_intent,
                threshold,
                fallback: false,
                starting_from,
                results,
                unfiltered: vec![],
            },
            SearchOutcome::Unfiltered(all) => RankResult {
                query: args.query.clone(),
                intent: query_intent,
                threshold,
                fallback: true,
                starting_from,
                results: vec![],
                unfiltered: all,
            },
        }
    };

    if let Some(limit) = args.limit {
        result.results.truncate(limit);
        result.unfiltered.truncate(limit);
    }

    output_result("Ranked listings", &result, cli_args)
}

/// Normalize one or more raw price strings.
fn price(args: &PriceArgs, cli_args: &PricewatchArgs) -> Result<()> {
    let results: Vec<PriceResult> = args
        .prices
        .iter()
        .map(|raw| PriceResult {
            raw: raw.clone(),
            price: normalize_price(raw),
            parsed: parse_price(raw).is_some(),
        })
        .collect();

    output_result("Normalized prices", &results, cli_args)
}

/// Classify a query and show its threshold.
fn intent(args: &IntentArgs, cli_args: &PricewatchArgs) -> Result<()> {
    let classifier = IntentClassifier::new();
    let query_intent = classifier.classify(&args.query);

    let result = IntentResult {
        query: args.query.clone(),
        intent: query_intent,
        threshold: query_intent.recommended_threshold(),
    };

    output_result("Query intent", &result, cli_args)
}

/// Show the analysis of a piece of text.
fn analyze(args: &AnalyzeArgs, cli_args: &PricewatchArgs) -> Result<()> {
    let model_tokens: Vec<String> = {
        let mut tokens: Vec<String> = extract_model_tokens(&args.text).into_iter().collect();
        tokens.sort();
        tokens
    };
    let base_models: Vec<String> = model_tokens.iter().map(|t| base_model(t)).collect();

    let result = AnalyzeResult {
        text: args.text.clone(),
        normalized: normalize(&args.text),
        tokens: normalized_tokens(&args.text),
        model_tokens,
        base_models,
    };

    output_result("Text analysis", &result, cli_args)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_intent_command_executes() {
        let args =
            PricewatchArgs::try_parse_from(["pricewatch", "--quiet", "intent", "seiko 5"])
                .unwrap();
        assert!(execute_command(&args).is_ok());
    }

    #[test]
    fn test_price_command_executes() {
        let args = PricewatchArgs::try_parse_from([
            "pricewatch",
            "--quiet",
            "--format",
            "json",
            "price",
            "CA$1,299.99",
        ])
        .unwrap();
        assert!(execute_command(&args).is_ok());
    }

    #[test]
    fn test_rank_command_missing_file_errors() {
        let args = PricewatchArgs::try_parse_from([
            "pricewatch",
            "rank",
            "ga2100",
            "/nonexistent/listings.json",
        ])
        .unwrap();
        assert!(execute_command(&args).is_err());
    }
}
