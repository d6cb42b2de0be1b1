//! Command-line arguments for the momentum scanner.
//!
//! This module defines the CLI interface using `clap`. Percent-change and volume
//! thresholds accept 1.0 to 10.0, RSI bounds 0 to 100. The API key is not a flag;
//! see `config`.
use std::time::Duration;

use clap::Parser;
use momentum_common::criteria::{RSI_MAX, RSI_MIN};
use momentum_common::{Exchange, FilterCriteria, Result};

const THRESHOLD_MIN: f64 = 1.0;
const THRESHOLD_MAX: f64 = 10.0;

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about = "Scan an exchange for momentum stocks", long_about = None)]
pub struct Args {
    /// Exchange whose listed tickers are scanned.
    #[clap(long, value_enum, ignore_case = true, default_value_t = Exchange::NASDAQ)]
    pub exchange: Exchange,

    /// Minimum percentage change (exclusive), 1.0 to 10.0.
    #[clap(long, default_value_t = 3.0, value_parser = threshold)]
    pub min_change: f64,

    /// Minimum volume as a multiple of average volume (exclusive), 1.0 to 10.0.
    #[clap(long, default_value_t = 2.0, value_parser = threshold)]
    pub volume_multiplier: f64,

    /// Lower RSI bound (inclusive), 0 to 100.
    #[clap(long, default_value_t = 30.0, value_parser = rsi_bound)]
    pub rsi_low: f64,

    /// Upper RSI bound (inclusive), 0 to 100.
    #[clap(long, default_value_t = 70.0, value_parser = rsi_bound)]
    pub rsi_high: f64,

    /// Pause after each ticker in milliseconds, to stay under the provider's rate limit.
    #[clap(long, env = "SCAN_INTERVAL_MS", default_value_t = 500)]
    pub interval_ms: u64,

    /// Print matches as JSON instead of a table.
    #[clap(long)]
    pub json: bool,
}

impl Args {
    /// Validated filter criteria built from the threshold flags.
    pub fn criteria(&self) -> Result<FilterCriteria> {
        FilterCriteria::new(
            self.min_change,
            self.volume_multiplier,
            self.rsi_low,
            self.rsi_high,
        )
    }

    /// Pause applied after each ticker.
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}

fn threshold(raw: &str) -> std::result::Result<f64, String> {
    bounded(raw, THRESHOLD_MIN, THRESHOLD_MAX)
}

fn rsi_bound(raw: &str) -> std::result::Result<f64, String> {
    bounded(raw, RSI_MIN, RSI_MAX)
}

fn bounded(raw: &str, min: f64, max: f64) -> std::result::Result<f64, String> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| format!("`{raw}` is not a number"))?;
    if (min..=max).contains(&value) {
        Ok(value)
    } else {
        Err(format!("{value} is not in {min}..={max}"))
    }
}
