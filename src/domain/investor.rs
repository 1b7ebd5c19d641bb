//! Two-fund investor: routes one contribution stream between a stable and a
//! volatile fund by the volatile series' dip months.

use super::error::InvestsimError;
use super::fund::{Fund, Valuation};
use super::params::SimulationParams;
use super::series::PriceSeries;
use super::timing::dip_months;

/// Coordinates a stable and a volatile fund over one shared horizon.
///
/// Each month the full contribution goes to the volatile fund if the month is
/// a dip month of the volatile series, to the stable fund otherwise. With
/// `speculative` enabled, every dip month additionally drains the stable
/// fund's entire current value into the volatile fund (commission-free, as
/// an internal transfer) and the stable fund restarts from zero units.
#[derive(Debug)]
pub struct MultiFundInvestor<'a> {
    stable: Fund<'a>,
    volatile: Fund<'a>,
    speculative: bool,
}

impl<'a> MultiFundInvestor<'a> {
    pub fn new(
        stable_series: &'a PriceSeries,
        volatile_series: &'a PriceSeries,
        speculative: bool,
    ) -> Result<Self, InvestsimError> {
        if stable_series.len() != volatile_series.len() {
            return Err(InvestsimError::InvalidParameter {
                name: "price_series".to_string(),
                reason: format!(
                    "stable and volatile series must cover the same horizon \
                     ({} vs {} months)",
                    stable_series.len(),
                    volatile_series.len()
                ),
            });
        }
        Ok(Self {
            stable: Fund::new(stable_series),
            volatile: Fund::new(volatile_series),
            speculative,
        })
    }

    /// Run the full horizon. The dip signal is computed once over the whole
    /// volatile series up front; the series is known in advance, so this is a
    /// modeling simplification rather than causal trading.
    pub fn invest(&mut self, params: &SimulationParams) -> Result<(), InvestsimError> {
        let dips = dip_months(self.volatile.series());

        for month in 0..self.stable.series().len() {
            if dips.contains(&month) {
                let price = self.volatile.series().price(month);
                if self.speculative {
                    self.reallocate(price)?;
                }
                self.volatile
                    .purchase(params.monthly_contribution, price, &params.schedule)?;
            } else {
                self.stable.purchase(
                    params.monthly_contribution,
                    self.stable.series().price(month),
                    &params.schedule,
                )?;
            }
        }

        Ok(())
    }

    /// Drain the stable fund into the volatile one at `price` and replace it
    /// with a fresh zero-balance fund.
    fn reallocate(&mut self, price: f64) -> Result<(), InvestsimError> {
        let transfer = self.stable.value();
        if transfer > 0.0 {
            self.volatile.transfer_in(transfer, price)?;
            self.stable = Fund::new(self.stable.series());
        }
        Ok(())
    }

    pub fn stable(&self) -> &Fund<'a> {
        &self.stable
    }

    pub fn volatile(&self) -> &Fund<'a> {
        &self.volatile
    }

    /// Combined terminal valuation against the full contribution stream.
    pub fn estimate(&self, monthly_contribution: f64) -> Valuation {
        let total = monthly_contribution * self.stable.series().len() as f64;
        Valuation::from_value(self.stable.value() + self.volatile.value(), total)
    }
}
