//! Blocking HTTP client for the Financial Modeling Prep REST API.
//!
//! `FmpClient` exposes strict `fetch_*` methods that tell a failed call (`Err`)
//! apart from a call that simply returned no data (`Ok(None)` or an empty list).
//! Its `MarketData` implementation logs failures and degrades them to "no data",
//! which is all the scanner needs.
use log::{debug, warn};
use reqwest::Url;
use reqwest::blocking::Client;
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::error::ScanError;
use crate::exchange::{Exchange, Symbol};
use crate::model::Quote;
use crate::net::{
    DAILY_INDICATOR_PATH, QUOTE_PATH, RSI_PERIOD, RSI_TYPE, SCREENER_LIMIT, SCREENER_PATH,
};
use crate::provider::MarketData;
use crate::result::Result;

/// One row of the stock screener response; only the symbol is used.
#[derive(Debug, Deserialize)]
struct ScreenerEntry {
    symbol: Symbol,
}

/// One daily bar of the technical indicator response.
#[derive(Debug, Deserialize)]
struct IndicatorBar {
    #[serde(default)]
    rsi: Option<f64>,
}

/// Client for the three provider endpoints used by a scan.
pub struct FmpClient {
    base_url: Url,
    api_key: String,
    client: Client,
}

impl FmpClient {
    /// Create a client for `base_url` authenticating with `api_key`.
    pub fn new(base_url: &str, api_key: &str) -> Result<Self> {
        let client = Client::builder().build()?;
        Self::with_client(base_url, api_key, client)
    }

    /// Create a client reusing an already configured `reqwest` client.
    pub fn with_client(base_url: &str, api_key: &str, client: Client) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| ScanError::Config(format!("invalid provider URL {base_url}: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(ScanError::Config(format!(
                "provider URL {base_url} cannot carry a path"
            )));
        }
        if api_key.trim().is_empty() {
            return Err(ScanError::Config("API key is empty".to_string()));
        }
        Ok(FmpClient {
            base_url,
            api_key: api_key.trim().to_string(),
            client,
        })
    }

    /// Symbols listed on `exchange`, capped at the screener limit.
    pub fn fetch_tickers(&self, exchange: Exchange) -> Result<Vec<Symbol>> {
        let url = self.endpoint(SCREENER_PATH, None);
        let query = [
            ("exchange", exchange.to_string()),
            ("limit", SCREENER_LIMIT.to_string()),
        ];
        let entries: Vec<ScreenerEntry> = self.get_json(url, &query)?;
        Ok(entries.into_iter().map(|entry| entry.symbol).collect())
    }

    /// Latest quote for `symbol`; `Ok(None)` when the provider has no record.
    pub fn fetch_quote(&self, symbol: &str) -> Result<Option<Quote>> {
        let url = self.endpoint(QUOTE_PATH, Some(symbol));
        let quotes: Vec<Quote> = self.get_json(url, &[])?;
        Ok(quotes.into_iter().next())
    }

    /// RSI of the last bar returned for `symbol`.
    ///
    /// The provider's ordering is trusted: the last element is taken as the most
    /// recent bar without re-sorting by date.
    pub fn fetch_rsi(&self, symbol: &str) -> Result<Option<f64>> {
        let url = self.endpoint(DAILY_INDICATOR_PATH, Some(symbol));
        let query = [
            ("period", RSI_PERIOD.to_string()),
            ("type", RSI_TYPE.to_string()),
        ];
        let bars: Vec<IndicatorBar> = self.get_json(url, &query)?;
        Ok(bars.last().and_then(|bar| bar.rsi))
    }

    fn endpoint(&self, path: &str, symbol: Option<&str>) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty();
            segments.extend(path.split('/').filter(|s| !s.is_empty()));
            if let Some(symbol) = symbol {
                segments.push(symbol);
            }
        }
        url
    }

    fn get_json<T: DeserializeOwned>(&self, url: Url, query: &[(&str, String)]) -> Result<T> {
        let path = url.path().to_string();
        debug!("GET {}", path);
        let response = self
            .client
            .get(url)
            .query(query)
            .query(&[("apikey", self.api_key.as_str())])
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScanError::Status { status, path });
        }
        let body = response.bytes()?;
        Ok(serde_json::from_slice(&body)?)
    }
}

impl MarketData for FmpClient {
    fn list_tickers(&self, exchange: Exchange) -> Vec<Symbol> {
        match self.fetch_tickers(exchange) {
            Ok(symbols) => symbols,
            Err(e) => {
                warn!("Ticker listing for {} failed: {}", exchange, e);
                Vec::new()
            }
        }
    }

    fn quote(&self, symbol: &str) -> Option<Quote> {
        self.fetch_quote(symbol).unwrap_or_else(|e| {
            warn!("Quote for {} unavailable: {}", symbol, e);
            None
        })
    }

    fn rsi(&self, symbol: &str) -> Option<f64> {
        self.fetch_rsi(symbol).unwrap_or_else(|e| {
            warn!("RSI for {} unavailable: {}", symbol, e);
            None
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str) -> FmpClient {
        FmpClient::new(base, "secret").unwrap()
    }

    #[test]
    fn endpoint_appends_symbol_segment() {
        let c = client("https://financialmodelingprep.com");
        assert_eq!(
            c.endpoint(QUOTE_PATH, Some("AAPL")).as_str(),
            "https://financialmodelingprep.com/api/v3/quote/AAPL"
        );
        assert_eq!(
            c.endpoint(SCREENER_PATH, None).as_str(),
            "https://financialmodelingprep.com/api/v3/stock-screener"
        );
    }

    #[test]
    fn endpoint_keeps_base_path_prefix() {
        let c = client("http://localhost:8080/proxy/");
        assert_eq!(
            c.endpoint(DAILY_INDICATOR_PATH, Some("MSFT")).as_str(),
            "http://localhost:8080/proxy/api/v4/technical_indicator/daily/MSFT"
        );
    }

    #[test]
    fn endpoint_escapes_symbol() {
        let c = client("https://financialmodelingprep.com");
        assert_eq!(
            c.endpoint(QUOTE_PATH, Some("A/B")).path(),
            "/api/v3/quote/A%2FB"
        );
    }

    #[test]
    fn rejects_bad_configuration() {
        assert!(matches!(
            FmpClient::new("not a url", "key"),
            Err(ScanError::Config(_))
        ));
        assert!(matches!(
            FmpClient::new("mailto:someone@example.com", "key"),
            Err(ScanError::Config(_))
        ));
        assert!(matches!(
            FmpClient::new("https://financialmodelingprep.com", "   "),
            Err(ScanError::Config(_))
        ));
    }
}
