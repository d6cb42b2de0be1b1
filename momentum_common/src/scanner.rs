//! Sequential momentum scan over a list of tickers.
//!
//! For every ticker the scanner fetches a quote and then an RSI value from a
//! `MarketData` provider, checks them against `FilterCriteria`, and pauses for
//! a fixed interval before moving on. The pause is applied after every ticker,
//! whether it matched, was rejected or had no data, so the provider's rate
//! limit is respected. Results come back in input order, unsorted.
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration;

use log::{debug, info};

use crate::criteria::FilterCriteria;
use crate::exchange::{Exchange, Symbol};
use crate::model::ScanResult;
use crate::net::DEFAULT_REQUEST_INTERVAL;
use crate::provider::MarketData;

/// What happened to a single ticker.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// All thresholds cleared.
    Matched(ScanResult),
    /// Data was available but at least one threshold failed.
    Rejected,
    /// Quote or RSI was unavailable.
    Skipped,
}

/// Runs momentum scans against a market data provider.
pub struct Scanner<P> {
    provider: P,
    interval: Duration,
    stop: Option<Arc<AtomicBool>>,
}

impl<P: MarketData> Scanner<P> {
    /// Create a scanner pausing `DEFAULT_REQUEST_INTERVAL` between tickers.
    pub fn new(provider: P) -> Self {
        Scanner {
            provider,
            interval: DEFAULT_REQUEST_INTERVAL,
            stop: None,
        }
    }

    /// Override the pause applied after each ticker.
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Stop the scan before the next ticker once `stop` is set.
    pub fn with_stop_flag(mut self, stop: Arc<AtomicBool>) -> Self {
        self.stop = Some(stop);
        self
    }

    /// List the tickers of `exchange` and scan them.
    pub fn scan_exchange(&self, exchange: Exchange, criteria: &FilterCriteria) -> Vec<ScanResult> {
        let tickers = self.provider.list_tickers(exchange);
        info!("Scanning {} tickers from {}", tickers.len(), exchange);
        self.scan(&tickers, criteria)
    }

    /// Scan `tickers` in order and return the matches in the same order.
    pub fn scan(&self, tickers: &[Symbol], criteria: &FilterCriteria) -> Vec<ScanResult> {
        let mut results = Vec::new();
        let mut scanned = 0usize;
        let mut skipped = 0usize;

        for ticker in tickers {
            if self.stop_requested() {
                info!("Scan interrupted after {} of {} tickers", scanned, tickers.len());
                break;
            }

            match self.evaluate(ticker, criteria) {
                Outcome::Matched(result) => {
                    debug!("{}: match (change {}%, RSI {})", ticker, result.change_percent, result.rsi);
                    results.push(result);
                }
                Outcome::Rejected => debug!("{}: rejected", ticker),
                Outcome::Skipped => {
                    debug!("{}: no data, skipped", ticker);
                    skipped += 1;
                }
            }
            scanned += 1;

            thread::sleep(self.interval);
        }

        info!(
            "Scan finished: scanned={} matched={} skipped={}",
            scanned,
            results.len(),
            skipped
        );
        results
    }

    /// Fetch the quote and RSI for one ticker and apply the filter.
    pub fn evaluate(&self, ticker: &str, criteria: &FilterCriteria) -> Outcome {
        let quote = self.provider.quote(ticker);
        let rsi = self.provider.rsi(ticker);
        match (quote, rsi) {
            (Some(quote), Some(rsi)) if criteria.matches(&quote, rsi) => {
                Outcome::Matched(ScanResult::new(ticker, &quote, rsi))
            }
            (Some(_), Some(_)) => Outcome::Rejected,
            _ => Outcome::Skipped,
        }
    }

    fn stop_requested(&self) -> bool {
        self.stop
            .as_ref()
            .is_some_and(|stop| stop.load(Ordering::Relaxed))
    }
}
