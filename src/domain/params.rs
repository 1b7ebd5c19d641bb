//! Run-wide simulation parameters.

use super::error::InvestsimError;
use super::schedule::CommissionSchedule;

pub const MONTHS_IN_YEAR: f64 = 12.0;

/// Immutable parameter set shared by all funds and policies in a run:
/// the commission schedule, the annual interest rate on idle cash, and the
/// fixed monthly contribution. Constructed once, passed explicitly.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationParams {
    pub schedule: CommissionSchedule,
    pub annual_interest_rate: f64,
    pub monthly_contribution: f64,
}

impl SimulationParams {
    pub fn new(
        schedule: CommissionSchedule,
        annual_interest_rate: f64,
        monthly_contribution: f64,
    ) -> Result<Self, InvestsimError> {
        if !annual_interest_rate.is_finite() || annual_interest_rate < 0.0 {
            return Err(InvestsimError::InvalidParameter {
                name: "annual_interest_rate".to_string(),
                reason: format!("must be non-negative, got {}", annual_interest_rate),
            });
        }
        if !monthly_contribution.is_finite() || monthly_contribution <= 0.0 {
            return Err(InvestsimError::InvalidParameter {
                name: "monthly_contribution".to_string(),
                reason: format!("must be positive, got {}", monthly_contribution),
            });
        }
        Ok(Self {
            schedule,
            annual_interest_rate,
            monthly_contribution,
        })
    }

    /// Interest applied to idle cash each month.
    pub fn monthly_interest_rate(&self) -> f64 {
        self.annual_interest_rate / MONTHS_IN_YEAR
    }

    /// Total contributed over a horizon of `months`.
    pub fn total_contributed(&self, months: usize) -> f64 {
        self.monthly_contribution * months as f64
    }
}
