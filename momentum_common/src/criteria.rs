//! Momentum filter criteria and the match predicate.
use crate::error::ScanError;
use crate::model::Quote;
use crate::result::Result;

/// Lowest accepted RSI bound.
pub const RSI_MIN: f64 = 0.0;
/// Highest accepted RSI bound.
pub const RSI_MAX: f64 = 100.0;

/// Thresholds a ticker must clear to be reported.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilterCriteria {
    min_change_percent: f64,
    min_volume_multiplier: f64,
    rsi_low: f64,
    rsi_high: f64,
}

impl FilterCriteria {
    /// Creates validated criteria.
    ///
    /// All values must be finite and the RSI band must satisfy
    /// `0 <= rsi_low <= rsi_high <= 100`.
    pub fn new(
        min_change_percent: f64,
        min_volume_multiplier: f64,
        rsi_low: f64,
        rsi_high: f64,
    ) -> Result<Self> {
        let values = [min_change_percent, min_volume_multiplier, rsi_low, rsi_high];
        if values.iter().any(|v| !v.is_finite()) {
            return Err(ScanError::InvalidCriteria(
                "all thresholds must be finite numbers".to_string(),
            ));
        }
        if rsi_low < RSI_MIN || rsi_high > RSI_MAX {
            return Err(ScanError::InvalidCriteria(format!(
                "RSI band {rsi_low}..{rsi_high} is outside {RSI_MIN}..{RSI_MAX}"
            )));
        }
        if rsi_low > rsi_high {
            return Err(ScanError::InvalidCriteria(format!(
                "RSI lower bound {rsi_low} is above upper bound {rsi_high}"
            )));
        }
        Ok(FilterCriteria {
            min_change_percent,
            min_volume_multiplier,
            rsi_low,
            rsi_high,
        })
    }

    /// Minimum percentage change (exclusive).
    pub fn min_change_percent(&self) -> f64 {
        self.min_change_percent
    }

    /// Minimum volume as a multiple of average volume (exclusive).
    pub fn min_volume_multiplier(&self) -> f64 {
        self.min_volume_multiplier
    }

    /// Inclusive RSI band as `(low, high)`.
    pub fn rsi_band(&self) -> (f64, f64) {
        (self.rsi_low, self.rsi_high)
    }

    /// Returns `true` when the quote and RSI clear all three thresholds.
    ///
    /// Volume and change comparisons are strict, the RSI band is inclusive.
    pub fn matches(&self, quote: &Quote, rsi: f64) -> bool {
        let volume_spike =
            quote.volume as f64 > self.min_volume_multiplier * quote.average_volume as f64;
        let change = quote.change_percent > self.min_change_percent;
        let rsi_in_band = self.rsi_low <= rsi && rsi <= self.rsi_high;
        volume_spike && change && rsi_in_band
    }
}

impl Default for FilterCriteria {
    fn default() -> Self {
        FilterCriteria {
            min_change_percent: 3.0,
            min_volume_multiplier: 2.0,
            rsi_low: 30.0,
            rsi_high: 70.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quote(change_percent: f64, volume: u64, average_volume: u64) -> Quote {
        Quote {
            price: 10.0,
            change_percent,
            volume,
            average_volume,
        }
    }

    #[test]
    fn accepts_when_all_predicates_hold() {
        let criteria = FilterCriteria::default();
        assert!(criteria.matches(&quote(5.0, 2_000_000, 900_000), 45.0));
    }

    #[test]
    fn change_equal_to_threshold_is_excluded() {
        let criteria = FilterCriteria::default();
        assert!(!criteria.matches(&quote(3.0, 2_000_000, 900_000), 45.0));
        assert!(criteria.matches(&quote(3.0001, 2_000_000, 900_000), 45.0));
    }

    #[test]
    fn volume_equal_to_multiple_is_excluded() {
        let criteria = FilterCriteria::default();
        assert!(!criteria.matches(&quote(5.0, 1_800_000, 900_000), 45.0));
        assert!(criteria.matches(&quote(5.0, 1_800_001, 900_000), 45.0));
    }

    #[test]
    fn rsi_band_is_inclusive() {
        let criteria = FilterCriteria::default();
        let q = quote(5.0, 2_000_000, 900_000);
        assert!(criteria.matches(&q, 30.0));
        assert!(criteria.matches(&q, 70.0));
        assert!(!criteria.matches(&q, 29.99));
        assert!(!criteria.matches(&q, 70.01));
    }

    #[test]
    fn zero_average_volume_needs_any_volume() {
        let criteria = FilterCriteria::default();
        assert!(criteria.matches(&quote(5.0, 1, 0), 50.0));
        assert!(!criteria.matches(&quote(5.0, 0, 0), 50.0));
    }

    #[test]
    fn rejects_inverted_rsi_band() {
        let err = FilterCriteria::new(3.0, 2.0, 70.0, 30.0).unwrap_err();
        assert!(matches!(err, ScanError::InvalidCriteria(_)));
    }

    #[test]
    fn rejects_out_of_range_and_non_finite() {
        assert!(FilterCriteria::new(3.0, 2.0, -1.0, 30.0).is_err());
        assert!(FilterCriteria::new(3.0, 2.0, 30.0, 100.5).is_err());
        assert!(FilterCriteria::new(f64::NAN, 2.0, 30.0, 70.0).is_err());
        assert!(FilterCriteria::new(3.0, f64::INFINITY, 30.0, 70.0).is_err());
    }

    #[test]
    fn degenerate_band_is_allowed() {
        let criteria = FilterCriteria::new(1.0, 1.0, 50.0, 50.0).unwrap();
        assert_eq!(criteria.rsi_band(), (50.0, 50.0));
        assert!(criteria.matches(&quote(2.0, 20, 10), 50.0));
    }
}
