//! Fund state: accumulated asset units for one price series.

use super::error::InvestsimError;
use super::schedule::CommissionSchedule;
use super::series::PriceSeries;

/// Terminal valuation of a fund or strategy run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Valuation {
    pub value: f64,
    pub profit_rate: f64,
}

impl Valuation {
    pub fn from_value(value: f64, total_contributed: f64) -> Self {
        Valuation {
            value,
            profit_rate: (value - total_contributed) / total_contributed,
        }
    }
}

/// Accumulated units of one asset. Units only ever grow: there is no sell
/// operation. Purchases convert cash to units at a given month's price, net
/// of the schedule's commission.
#[derive(Debug, Clone, PartialEq)]
pub struct Fund<'a> {
    series: &'a PriceSeries,
    units: f64,
}

impl<'a> Fund<'a> {
    pub fn new(series: &'a PriceSeries) -> Self {
        Fund { series, units: 0.0 }
    }

    pub fn series(&self) -> &'a PriceSeries {
        self.series
    }

    pub fn units(&self) -> f64 {
        self.units
    }

    /// Buy units with `investment` cash at `price`, paying the schedule's
    /// commission on the gross amount. Returns the units acquired.
    ///
    /// A negative investment or non-positive price is a caller bug and fails
    /// before any state mutation. Zero investment is a valid no-op.
    pub fn purchase(
        &mut self,
        investment: f64,
        price: f64,
        schedule: &CommissionSchedule,
    ) -> Result<f64, InvestsimError> {
        Self::check_amounts(investment, price)?;
        let rate = schedule.resolve(investment);
        let net = investment - investment * rate;
        let acquired = net / price;
        self.units += acquired;
        Ok(acquired)
    }

    /// Buy units commission-free. Used for internal transfers between funds,
    /// which are not market purchases against new cash.
    pub fn transfer_in(&mut self, amount: f64, price: f64) -> Result<f64, InvestsimError> {
        Self::check_amounts(amount, price)?;
        let acquired = amount / price;
        self.units += acquired;
        Ok(acquired)
    }

    fn check_amounts(investment: f64, price: f64) -> Result<(), InvestsimError> {
        if !investment.is_finite() || investment < 0.0 {
            return Err(InvestsimError::InvalidPurchase {
                reason: format!("negative investment amount {}", investment),
            });
        }
        if !price.is_finite() || price <= 0.0 {
            return Err(InvestsimError::InvalidPurchase {
                reason: format!("non-positive price {}", price),
            });
        }
        Ok(())
    }

    /// Liquidation value: accumulated units at the series' final price.
    /// Always the terminal price of the horizon, never the current month's.
    pub fn value(&self) -> f64 {
        self.units * self.series.last()
    }

    /// Terminal valuation against `monthly_contribution` paid over the full
    /// horizon.
    pub fn estimate(&self, monthly_contribution: f64) -> Valuation {
        Valuation::from_value(
            self.value(),
            monthly_contribution * self.series.len() as f64,
        )
    }
}
