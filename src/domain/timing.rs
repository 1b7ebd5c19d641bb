//! Purchase-timing policies.
//!
//! A policy is a pure function of a full price series producing the set of
//! month indices at which a purchase fires. The signal is derived once,
//! before the accrual loop runs.

use std::collections::BTreeSet;

use super::error::InvestsimError;
use super::series::PriceSeries;

/// Months at which a purchase fires. Always contains the final month for
/// every shipped policy, which is what guarantees the accrual engine's
/// pending-cash invariant.
#[derive(Debug, Clone, PartialEq)]
pub struct TimingSignal {
    months: BTreeSet<usize>,
}

impl TimingSignal {
    pub fn contains(&self, month: usize) -> bool {
        self.months.contains(&month)
    }

    pub fn months(&self) -> impl Iterator<Item = usize> + '_ {
        self.months.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.months.len()
    }

    pub fn is_empty(&self) -> bool {
        self.months.is_empty()
    }
}

/// Months whose price is strictly lower than the prior month's price.
/// Month 0 has no prior month and is never a dip month.
pub fn dip_months(series: &PriceSeries) -> BTreeSet<usize> {
    (1..series.len())
        .filter(|&i| series.price(i) < series.price(i - 1))
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimingPolicy {
    /// Purchase every `period_length` months: at indices `period_length - 1`,
    /// `2 * period_length - 1`, ..., and always at the final index regardless
    /// of alignment. `Periodic(1)` purchases every month.
    Periodic(usize),
    /// Purchase at every dip month, plus always at the first and final month.
    /// For a monotonically non-decreasing series only those two months fire.
    DipBuy,
}

impl TimingPolicy {
    pub fn signal(&self, series: &PriceSeries) -> Result<TimingSignal, InvestsimError> {
        let n = series.len();
        let mut months: BTreeSet<usize> = match *self {
            TimingPolicy::Periodic(period_length) => {
                if period_length == 0 {
                    return Err(InvestsimError::InvalidParameter {
                        name: "period_length".to_string(),
                        reason: "must be at least 1".to_string(),
                    });
                }
                (period_length - 1..n).step_by(period_length).collect()
            }
            TimingPolicy::DipBuy => {
                let mut months = dip_months(series);
                months.insert(0);
                months
            }
        };
        months.insert(n - 1);
        Ok(TimingSignal { months })
    }
}

impl std::fmt::Display for TimingPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TimingPolicy::Periodic(period) => write!(f, "{}-month", period),
            TimingPolicy::DipBuy => write!(f, "dip-buy"),
        }
    }
}
