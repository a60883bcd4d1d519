//! Command-line interface for pricewatch.

pub mod args;
pub mod commands;
pub mod output;
