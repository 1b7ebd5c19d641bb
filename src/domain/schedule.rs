//! Tiered transaction-commission schedule.

use super::error::InvestsimError;

/// One commission tier: the `rate` applies to any transaction amount at or
/// above `threshold`, up to the next tier's threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tier {
    pub threshold: f64,
    pub rate: f64,
}

/// Commission tiers sorted ascending by threshold.
///
/// Construction enforces the schedule invariants: a tier with threshold 0
/// must exist (so every non-negative amount resolves to exactly one rate),
/// thresholds are unique and non-negative, rates lie in `[0, 1)`.
#[derive(Debug, Clone, PartialEq)]
pub struct CommissionSchedule {
    tiers: Vec<Tier>,
}

impl CommissionSchedule {
    pub fn new(tiers: Vec<(f64, f64)>) -> Result<Self, InvestsimError> {
        if tiers.is_empty() {
            return Err(InvestsimError::InvalidSchedule {
                reason: "schedule has no tiers".to_string(),
            });
        }

        let mut tiers: Vec<Tier> = tiers
            .into_iter()
            .map(|(threshold, rate)| Tier { threshold, rate })
            .collect();
        tiers.sort_by(|a, b| a.threshold.total_cmp(&b.threshold));

        for tier in &tiers {
            if !tier.threshold.is_finite() || tier.threshold < 0.0 {
                return Err(InvestsimError::InvalidSchedule {
                    reason: format!("negative threshold {}", tier.threshold),
                });
            }
            if !tier.rate.is_finite() || tier.rate < 0.0 || tier.rate >= 1.0 {
                return Err(InvestsimError::InvalidSchedule {
                    reason: format!(
                        "rate {} for threshold {} is outside [0, 1)",
                        tier.rate, tier.threshold
                    ),
                });
            }
        }

        if tiers[0].threshold != 0.0 {
            return Err(InvestsimError::InvalidSchedule {
                reason: "no tier with threshold 0".to_string(),
            });
        }

        if tiers.windows(2).any(|w| w[0].threshold == w[1].threshold) {
            return Err(InvestsimError::InvalidSchedule {
                reason: "duplicate thresholds".to_string(),
            });
        }

        Ok(Self { tiers })
    }

    /// Resolve a non-negative transaction amount to its commission rate: the
    /// rate of the greatest threshold not exceeding the amount. The zero tier
    /// guaranteed at construction means every non-negative amount resolves.
    pub fn resolve(&self, amount: f64) -> f64 {
        debug_assert!(amount >= 0.0, "amount must be non-negative");
        let idx = self
            .tiers
            .partition_point(|tier| tier.threshold <= amount);
        // idx >= 1 because tiers[0].threshold == 0.0 <= amount
        self.tiers[idx - 1].rate
    }

    pub fn tiers(&self) -> &[Tier] {
        &self.tiers
    }
}
