//! Provider endpoints and request constants.

use std::time::Duration;

/// Default base URL of the market-data provider.
pub const DEFAULT_BASE_URL: &str = "https://financialmodelingprep.com";
/// Stock screener path (ticker listing).
pub const SCREENER_PATH: &str = "/api/v3/stock-screener";
/// Quote path prefix; the ticker is appended as the last segment.
pub const QUOTE_PATH: &str = "/api/v3/quote";
/// Daily technical indicator path prefix; the ticker is appended as the last segment.
pub const DAILY_INDICATOR_PATH: &str = "/api/v4/technical_indicator/daily";
/// Maximum number of symbols requested from the screener.
pub const SCREENER_LIMIT: u32 = 50;
/// RSI lookback period in daily bars.
pub const RSI_PERIOD: u32 = 10;
/// Indicator type requested from the technical indicator endpoint.
pub const RSI_TYPE: &str = "rsi";
/// Default pause between tickers, matching the provider's rate limit.
pub const DEFAULT_REQUEST_INTERVAL: Duration = Duration::from_millis(500);
