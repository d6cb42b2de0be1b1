//! Exchange codes accepted by the provider's stock screener.

use clap::ValueEnum;
use strum_macros::{Display, EnumIter, EnumString};

/// Opaque ticker symbol as returned by the screener (e.g. `AAPL`).
pub type Symbol = String;

/// Set of supported exchanges.
///
/// `Display` yields the upper-case code sent to the provider; parsing accepts
/// any casing.
#[allow(missing_docs)]
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    ValueEnum,
    Display,
    EnumString,
    EnumIter,
    Hash,
    Eq,
    PartialEq,
)]
#[clap(rename_all = "lower")]
#[strum(ascii_case_insensitive)]
pub enum Exchange {
    #[default]
    NASDAQ,
    NYSE,
    AMEX,
    LSE,
    TSX,
    EURONEXT,
    HKG,
    CRYPTO,
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn display_is_the_provider_code() {
        assert_eq!(Exchange::NASDAQ.to_string(), "NASDAQ");
        assert_eq!(Exchange::EURONEXT.to_string(), "EURONEXT");
    }

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("hkg".parse::<Exchange>().unwrap(), Exchange::HKG);
        assert_eq!("Crypto".parse::<Exchange>().unwrap(), Exchange::CRYPTO);
        assert!("NOPE".parse::<Exchange>().is_err());
    }

    #[test]
    fn closed_set_of_eight() {
        assert_eq!(Exchange::iter().count(), 8);
        assert_eq!(Exchange::default(), Exchange::NASDAQ);
    }
}
