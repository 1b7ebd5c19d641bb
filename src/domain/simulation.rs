//! Strategy runners: one complete simulation per policy, producing a named
//! terminal valuation.

use super::accrual;
use super::error::InvestsimError;
use super::fund::{Fund, Valuation};
use super::investor::MultiFundInvestor;
use super::params::SimulationParams;
use super::series::PriceSeries;
use super::timing::TimingPolicy;

/// Outcome of one strategy over one horizon.
#[derive(Debug, Clone, PartialEq)]
pub struct StrategyResult {
    pub name: String,
    pub value: f64,
    pub profit_rate: f64,
}

impl StrategyResult {
    fn new(name: String, valuation: Valuation) -> Self {
        StrategyResult {
            name,
            value: valuation.value,
            profit_rate: valuation.profit_rate,
        }
    }
}

/// Run a single timing policy over one series through the accrual engine.
pub fn run_policy(
    series: &PriceSeries,
    policy: TimingPolicy,
    params: &SimulationParams,
) -> Result<Valuation, InvestsimError> {
    let signal = policy.signal(series)?;
    let mut fund = Fund::new(series);
    accrual::run(&mut fund, &signal, params)?;
    Ok(fund.estimate(params.monthly_contribution))
}

/// Run the two-fund allocation strategy, optionally with speculative
/// reallocation.
pub fn run_multi_fund(
    stable: &PriceSeries,
    volatile: &PriceSeries,
    speculative: bool,
    params: &SimulationParams,
) -> Result<Valuation, InvestsimError> {
    let mut investor = MultiFundInvestor::new(stable, volatile, speculative)?;
    investor.invest(params)?;
    Ok(investor.estimate(params.monthly_contribution))
}

/// Run the dip-buy policy and each periodic policy over one series,
/// labelling each result with the series name.
pub fn run_series_strategies(
    series_name: &str,
    series: &PriceSeries,
    periods: &[usize],
    params: &SimulationParams,
) -> Result<Vec<StrategyResult>, InvestsimError> {
    let mut results = Vec::with_capacity(periods.len() + 1);

    let valuation = run_policy(series, TimingPolicy::DipBuy, params)?;
    results.push(StrategyResult::new(
        format!("{} {}", series_name, TimingPolicy::DipBuy),
        valuation,
    ));

    for &period in periods {
        let policy = TimingPolicy::Periodic(period);
        let valuation = run_policy(series, policy, params)?;
        results.push(StrategyResult::new(
            format!("{} {}", series_name, policy),
            valuation,
        ));
    }

    Ok(results)
}

/// Run both two-fund variants over a stable/volatile pair.
pub fn run_pair_strategies(
    stable_name: &str,
    volatile_name: &str,
    stable: &PriceSeries,
    volatile: &PriceSeries,
    params: &SimulationParams,
) -> Result<Vec<StrategyResult>, InvestsimError> {
    let pair = format!("{}/{}", stable_name, volatile_name);
    Ok(vec![
        StrategyResult::new(
            format!("{} multi-fund", pair),
            run_multi_fund(stable, volatile, false, params)?,
        ),
        StrategyResult::new(
            format!("{} speculative", pair),
            run_multi_fund(stable, volatile, true, params)?,
        ),
    ])
}
