//! Market data records fetched per ticker and the scan output row.
//!
//! Quotes are decoded straight from the provider's JSON via `serde`; a
//! `ScanResult` is what the scanner emits for every matching ticker.
use serde::{Deserialize, Deserializer, Serialize};

use crate::exchange::Symbol;

/// Latest quote for a single ticker.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Quote {
    /// Last traded price.
    pub price: f64,
    /// Percentage change against the previous close.
    #[serde(rename = "changesPercentage")]
    pub change_percent: f64,
    /// Volume traded in the current session.
    #[serde(deserialize_with = "volume_from_number")]
    pub volume: u64,
    /// Average daily volume.
    #[serde(rename = "avgVolume", deserialize_with = "volume_from_number")]
    pub average_volume: u64,
}

/// Matching ticker together with the values that made it match.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScanResult {
    /// Ticker symbol.
    pub ticker: Symbol,
    /// Last traded price.
    pub price: f64,
    /// Percentage change against the previous close.
    pub change_percent: f64,
    /// Volume traded in the current session.
    pub volume: u64,
    /// Average daily volume.
    pub average_volume: u64,
    /// RSI rounded to two decimals.
    pub rsi: f64,
}

impl ScanResult {
    /// Build a result row from a quote and its raw RSI value.
    pub fn new(ticker: &str, quote: &Quote, rsi: f64) -> Self {
        ScanResult {
            ticker: ticker.to_string(),
            price: quote.price,
            change_percent: quote.change_percent,
            volume: quote.volume,
            average_volume: quote.average_volume,
            rsi: round_rsi(rsi),
        }
    }
}

/// Round an RSI value to two decimal places.
pub fn round_rsi(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

// The provider occasionally reports volumes as floats (`1.2E7`).
fn volume_from_number<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = f64::deserialize(deserializer)?;
    if !raw.is_finite() {
        return Err(serde::de::Error::custom("volume is not a finite number"));
    }
    Ok(raw.max(0.0).round() as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_provider_quote() {
        let json = r#"{
            "symbol": "AAPL",
            "name": "Apple Inc.",
            "price": 189.84,
            "changesPercentage": 3.25,
            "volume": 61234567,
            "avgVolume": 5.5E7,
            "exchange": "NASDAQ"
        }"#;
        let quote: Quote = serde_json::from_str(json).unwrap();
        assert_eq!(quote.price, 189.84);
        assert_eq!(quote.change_percent, 3.25);
        assert_eq!(quote.volume, 61_234_567);
        assert_eq!(quote.average_volume, 55_000_000);
    }

    #[test]
    fn null_volume_is_rejected() {
        let json = r#"{"price": 1.0, "changesPercentage": 1.0, "volume": null, "avgVolume": 10}"#;
        assert!(serde_json::from_str::<Quote>(json).is_err());
    }

    #[test]
    fn rsi_rounds_to_two_decimals() {
        assert_eq!(round_rsi(45.6789), 45.68);
        assert_eq!(round_rsi(30.0), 30.0);
        assert_eq!(round_rsi(69.994), 69.99);
    }

    #[test]
    fn rounding_is_idempotent() {
        for raw in [0.0, 12.345, 33.333333, 49.995, 70.0049, 99.999] {
            let once = round_rsi(raw);
            assert_eq!(round_rsi(once), once, "re-rounding {raw} changed the value");
        }
    }

    #[test]
    fn result_keeps_other_fields_unrounded() {
        let quote = Quote {
            price: 10.12345,
            change_percent: 5.55555,
            volume: 2_000_000,
            average_volume: 900_000,
        };
        let row = ScanResult::new("AAA", &quote, 45.12789);
        assert_eq!(row.ticker, "AAA");
        assert_eq!(row.price, 10.12345);
        assert_eq!(row.change_percent, 5.55555);
        assert_eq!(row.rsi, 45.13);
    }
}
