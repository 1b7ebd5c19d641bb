//! Accrual engine: drives one fund through the full horizon.
//!
//! Each month the fixed contribution lands in pending cash. On a trigger
//! month the whole balance is converted to units at that month's price and
//! the cash resets to zero; otherwise the balance earns one month of
//! interest. Interest accrues on idle cash only, never on deployed assets.

use super::error::InvestsimError;
use super::fund::Fund;
use super::params::SimulationParams;
use super::timing::TimingSignal;

/// Run the accrual loop over the fund's whole price series.
///
/// Every shipped policy includes the final month in its signal, so pending
/// cash must be exactly zero after the loop. A nonzero balance means the
/// signal missed the final month and is reported as an invariant violation.
pub fn run(
    fund: &mut Fund<'_>,
    signal: &TimingSignal,
    params: &SimulationParams,
) -> Result<(), InvestsimError> {
    let series = fund.series();
    let monthly_rate = params.monthly_interest_rate();
    let mut pending_cash = 0.0;

    for month in 0..series.len() {
        pending_cash += params.monthly_contribution;
        if signal.contains(month) {
            fund.purchase(pending_cash, series.price(month), &params.schedule)?;
            pending_cash = 0.0;
        } else {
            pending_cash += pending_cash * monthly_rate;
        }
    }

    if pending_cash != 0.0 {
        return Err(InvestsimError::InvariantViolation {
            reason: format!(
                "pending cash {} left after final month; timing signal did not \
                 include the final index",
                pending_cash
            ),
        });
    }

    Ok(())
}
