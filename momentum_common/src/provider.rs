//! Market data provider interface used by the scanner.
//!
//! Every operation degrades instead of failing: a ticker listing that cannot be
//! fetched is empty, a quote or RSI that cannot be fetched is `None`. The
//! scanner never sees an error from a provider.

use crate::exchange::{Exchange, Symbol};
use crate::model::Quote;

/// Source of ticker listings, quotes and RSI values.
pub trait MarketData {
    /// List up to the provider's cap of symbols traded on `exchange`.
    fn list_tickers(&self, exchange: Exchange) -> Vec<Symbol>;

    /// Latest quote for `symbol`, if available.
    fn quote(&self, symbol: &str) -> Option<Quote>;

    /// Most recent daily RSI for `symbol`, if available.
    fn rsi(&self, symbol: &str) -> Option<f64>;
}

impl<T: MarketData + ?Sized> MarketData for &T {
    fn list_tickers(&self, exchange: Exchange) -> Vec<Symbol> {
        (**self).list_tickers(exchange)
    }

    fn quote(&self, symbol: &str) -> Option<Quote> {
        (**self).quote(symbol)
    }

    fn rsi(&self, symbol: &str) -> Option<f64> {
        (**self).rsi(symbol)
    }
}
