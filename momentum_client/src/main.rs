//! Momentum Client — scans one exchange for stocks showing short-term momentum and
//! prints the matches as a table. For every ticker the exchange lists it fetches the
//! latest quote and the daily RSI from Financial Modeling Prep, keeps the tickers whose
//! percentage change, volume spike and RSI clear the requested thresholds, and pauses
//! between tickers to stay under the provider's rate limit.
//!
//! Usage example (CLI):
//! ```bash
//! FMP_API_KEY=... momentum_client --exchange nyse --min-change 4 --rsi-low 40 --rsi-high 65
//! ```
//!
//! The API key is read from `FMP_API_KEY` (a `.env` file in the working directory is
//! honored). Ctrl+C stops the scan before the next ticker and prints what matched so far.
#![warn(missing_docs)]
mod args;
mod config;
mod table;

use crate::args::Args;
use crate::config::ProviderConfig;
use chrono::Local;
use clap::Parser;
use log::{info, warn};
use momentum_common::{FmpClient, Result, ScanError, Scanner};
use std::io::{self, Write};
use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

fn main() -> Result<(), ScanError> {
    dotenvy::dotenv().ok();
    init_logger();
    let args = Args::parse();
    let criteria = args.criteria()?;
    let config = ProviderConfig::from_env()?;

    let shutdown = Arc::new(AtomicBool::new(false));
    {
        let shutdown = shutdown.clone();
        if let Err(e) = ctrlc::set_handler(move || {
            info!("Ctrl+C received. Stopping scan...");
            shutdown.store(true, Ordering::SeqCst);
        }) {
            warn!("Could not install Ctrl+C handler: {}", e);
        }
    }

    let client = FmpClient::new(&config.base_url, &config.api_key)?;
    let scanner = Scanner::new(client)
        .with_interval(args.interval())
        .with_stop_flag(shutdown);

    let (rsi_low, rsi_high) = criteria.rsi_band();
    info!(
        "Scan of {} started at {}: change > {}%, volume > {}x avg, RSI {}..={}",
        args.exchange,
        Local::now().format("%Y-%m-%d %H:%M:%S"),
        criteria.min_change_percent(),
        criteria.min_volume_multiplier(),
        rsi_low,
        rsi_high
    );

    let mut results = scanner.scan_exchange(args.exchange, &criteria);
    table::sort_by_change_desc(&mut results);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if args.json {
        if results.is_empty() {
            warn!("{}", table::NO_MATCHES);
        }
        table::write_json(&mut out, &results)?;
    } else {
        table::write_report(&mut out, &results)?;
    }
    out.flush()?;
    Ok(())
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}
