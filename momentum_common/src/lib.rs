//!
//! Core of the momentum scanner shared by the CLI.
//!
//! This crate aggregates:
//! - `error` — unified error type `ScanError` used across the workspace.
//! - `result` — handy `Result<T, ScanError>` alias.
//! - `exchange` — supported exchange codes and the `Symbol` alias.
//! - `model` — quotes decoded from the provider and scan result rows.
//! - `criteria` — filter thresholds and the match predicate.
//! - `net` — provider endpoints and request constants.
//! - `provider` — the `MarketData` trait the scanner reads from.
//! - `fmp` — blocking HTTP implementation of `MarketData`.
//! - `scanner` — the sequential, rate-limited scan loop.
#![warn(missing_docs)]
pub mod criteria;
pub mod error;
pub mod exchange;
pub mod fmp;
pub mod model;
pub mod net;
pub mod provider;
pub mod result;
pub mod scanner;

pub use criteria::FilterCriteria;
pub use error::ScanError;
pub use exchange::{Exchange, Symbol};
pub use fmp::FmpClient;
pub use model::{Quote, ScanResult};
pub use provider::MarketData;
pub use result::Result;
pub use scanner::Scanner;
