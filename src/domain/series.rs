//! Monthly price series value type.

use super::error::InvestsimError;

/// An ordered sequence of monthly prices, immutable for the duration of a
/// simulation. Index 0 is the first month of the horizon, index `len() - 1`
/// the final month.
///
/// Construction enforces the series invariants: at least two months, every
/// price finite and strictly positive.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceSeries {
    prices: Vec<f64>,
}

impl PriceSeries {
    pub fn new(prices: Vec<f64>) -> Result<Self, InvestsimError> {
        if prices.len() < 2 {
            return Err(InvestsimError::InvalidSeries {
                reason: format!("need at least 2 months, got {}", prices.len()),
            });
        }
        for (month, &price) in prices.iter().enumerate() {
            if !price.is_finite() || price <= 0.0 {
                return Err(InvestsimError::InvalidSeries {
                    reason: format!("price at month {} is not positive: {}", month, price),
                });
            }
        }
        Ok(Self { prices })
    }

    /// Number of months in the horizon.
    pub fn len(&self) -> usize {
        self.prices.len()
    }

    pub fn is_empty(&self) -> bool {
        // new() rejects series shorter than 2 months
        false
    }

    /// Price at the given month index. Panics on an out-of-range month,
    /// which is a caller bug: every loop in the engine runs over `0..len()`.
    pub fn price(&self, month: usize) -> f64 {
        self.prices[month]
    }

    /// Price of the final month. Fund liquidation is always valued here.
    pub fn last(&self) -> f64 {
        self.prices[self.prices.len() - 1]
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.prices.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_series() {
        let series = PriceSeries::new(vec![100.0, 90.0, 110.0]).unwrap();
        assert_eq!(series.len(), 3);
        assert!((series.price(1) - 90.0).abs() < f64::EPSILON);
        assert!((series.last() - 110.0).abs() < f64::EPSILON);
    }

    #[test]
    fn rejects_too_short() {
        let err = PriceSeries::new(vec![100.0]).unwrap_err();
        assert!(matches!(err, InvestsimError::InvalidSeries { .. }));
        assert!(PriceSeries::new(vec![]).is_err());
    }

    #[test]
    fn rejects_non_positive_price() {
        assert!(PriceSeries::new(vec![100.0, 0.0]).is_err());
        assert!(PriceSeries::new(vec![100.0, -5.0]).is_err());
    }

    #[test]
    fn rejects_non_finite_price() {
        assert!(PriceSeries::new(vec![100.0, f64::NAN]).is_err());
        assert!(PriceSeries::new(vec![100.0, f64::INFINITY]).is_err());
    }

    #[test]
    fn iter_yields_all_prices() {
        let series = PriceSeries::new(vec![1.0, 2.0, 3.0]).unwrap();
        let collected: Vec<f64> = series.iter().collect();
        assert_eq!(collected, vec![1.0, 2.0, 3.0]);
    }
}
