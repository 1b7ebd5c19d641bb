//! Configuration validation.
//!
//! Validates all config fields before a simulation runs, so every failure
//! points at a section/key rather than surfacing mid-run.

use crate::domain::error::InvestsimError;
use crate::ports::config_port::ConfigPort;

pub fn validate_simulation_config(config: &dyn ConfigPort) -> Result<(), InvestsimError> {
    validate_interest_rate(config)?;
    validate_monthly_contribution(config)?;
    validate_periods(config)?;
    validate_commissions(config)?;
    validate_funds(config)?;
    Ok(())
}

/// Parse the `[commissions]` section into (threshold, rate) pairs. Schedule
/// invariants (zero tier, unique thresholds, rate range) are enforced by
/// `CommissionSchedule::new`; this only covers the textual form.
pub fn parse_commission_tiers(
    config: &dyn ConfigPort,
) -> Result<Vec<(f64, f64)>, InvestsimError> {
    let keys = config.get_keys("commissions");
    if keys.is_empty() {
        return Err(InvestsimError::ConfigMissing {
            section: "commissions".to_string(),
            key: "0".to_string(),
        });
    }

    let mut tiers = Vec::with_capacity(keys.len());
    for key in keys {
        let threshold: f64 = key.parse().map_err(|_| InvestsimError::ConfigInvalid {
            section: "commissions".to_string(),
            key: key.clone(),
            reason: "threshold is not a number".to_string(),
        })?;

        let value = config.get_string("commissions", &key).unwrap_or_default();
        let rate: f64 = value
            .trim()
            .parse()
            .map_err(|_| InvestsimError::ConfigInvalid {
                section: "commissions".to_string(),
                key: key.clone(),
                reason: format!("rate {:?} is not a number", value),
            })?;

        tiers.push((threshold, rate));
    }
    Ok(tiers)
}

/// Parse the periodic policy lengths, defaulting to 1 through 6 months.
pub fn parse_periods(config: &dyn ConfigPort) -> Result<Vec<usize>, InvestsimError> {
    let raw = match config.get_string("simulation", "periods") {
        Some(s) if !s.trim().is_empty() => s,
        _ => return Ok((1..=6).collect()),
    };

    let mut periods = Vec::new();
    for part in raw.split(',') {
        let period: usize =
            part.trim()
                .parse()
                .map_err(|_| InvestsimError::ConfigInvalid {
                    section: "simulation".to_string(),
                    key: "periods".to_string(),
                    reason: format!("{:?} is not a positive integer", part.trim()),
                })?;
        if period == 0 {
            return Err(InvestsimError::ConfigInvalid {
                section: "simulation".to_string(),
                key: "periods".to_string(),
                reason: "period lengths must be at least 1".to_string(),
            });
        }
        periods.push(period);
    }
    Ok(periods)
}

fn validate_interest_rate(config: &dyn ConfigPort) -> Result<(), InvestsimError> {
    let raw = config
        .get_string("simulation", "interest_rate")
        .ok_or_else(|| InvestsimError::ConfigMissing {
            section: "simulation".to_string(),
            key: "interest_rate".to_string(),
        })?;

    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| InvestsimError::ConfigInvalid {
            section: "simulation".to_string(),
            key: "interest_rate".to_string(),
            reason: "interest_rate is not a number".to_string(),
        })?;

    if !value.is_finite() || value < 0.0 {
        return Err(InvestsimError::ConfigInvalid {
            section: "simulation".to_string(),
            key: "interest_rate".to_string(),
            reason: "interest_rate must be non-negative".to_string(),
        });
    }
    Ok(())
}

fn validate_monthly_contribution(config: &dyn ConfigPort) -> Result<(), InvestsimError> {
    let raw = config
        .get_string("simulation", "monthly_contribution")
        .ok_or_else(|| InvestsimError::ConfigMissing {
            section: "simulation".to_string(),
            key: "monthly_contribution".to_string(),
        })?;

    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| InvestsimError::ConfigInvalid {
            section: "simulation".to_string(),
            key: "monthly_contribution".to_string(),
            reason: "monthly_contribution is not a number".to_string(),
        })?;

    if !value.is_finite() || value <= 0.0 {
        return Err(InvestsimError::ConfigInvalid {
            section: "simulation".to_string(),
            key: "monthly_contribution".to_string(),
            reason: "monthly_contribution must be positive".to_string(),
        });
    }
    Ok(())
}

fn validate_periods(config: &dyn ConfigPort) -> Result<(), InvestsimError> {
    parse_periods(config).map(|_| ())
}

fn validate_commissions(config: &dyn ConfigPort) -> Result<(), InvestsimError> {
    use crate::domain::schedule::CommissionSchedule;

    let tiers = parse_commission_tiers(config)?;
    CommissionSchedule::new(tiers).map_err(|e| InvestsimError::ConfigInvalid {
        section: "commissions".to_string(),
        key: "*".to_string(),
        reason: e.to_string(),
    })?;
    Ok(())
}

fn validate_funds(config: &dyn ConfigPort) -> Result<(), InvestsimError> {
    let stable = config.get_string("funds", "stable");
    let volatile = config.get_string("funds", "volatile");

    // The pair is optional; naming only one of the two is a config bug.
    match (stable, volatile) {
        (Some(s), None) if !s.trim().is_empty() => Err(InvestsimError::ConfigMissing {
            section: "funds".to_string(),
            key: "volatile".to_string(),
        }),
        (None, Some(v)) if !v.trim().is_empty() => Err(InvestsimError::ConfigMissing {
            section: "funds".to_string(),
            key: "stable".to_string(),
        }),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::file_config_adapter::FileConfigAdapter;

    fn make_config(content: &str) -> FileConfigAdapter {
        FileConfigAdapter::from_string(content).unwrap()
    }

    const VALID: &str = r#"
[simulation]
interest_rate = 0.035
monthly_contribution = 100000
periods = 1,2,3,4,5,6

[commissions]
0 = 0.014
500000 = 0.009
3000000 = 0.005

[funds]
stable = bonds
volatile = shares
"#;

    #[test]
    fn valid_config_passes() {
        let config = make_config(VALID);
        assert!(validate_simulation_config(&config).is_ok());
    }

    #[test]
    fn missing_interest_rate_fails() {
        let config = make_config("[simulation]\nmonthly_contribution = 100\n[commissions]\n0 = 0.01\n");
        let err = validate_simulation_config(&config).unwrap_err();
        assert!(matches!(err, InvestsimError::ConfigMissing { key, .. } if key == "interest_rate"));
    }

    #[test]
    fn negative_interest_rate_fails() {
        let config = make_config(
            "[simulation]\ninterest_rate = -0.01\nmonthly_contribution = 100\n[commissions]\n0 = 0.01\n",
        );
        let err = validate_simulation_config(&config).unwrap_err();
        assert!(matches!(err, InvestsimError::ConfigInvalid { key, .. } if key == "interest_rate"));
    }

    #[test]
    fn non_numeric_interest_rate_fails() {
        let config = make_config(
            "[simulation]\ninterest_rate = lots\nmonthly_contribution = 100\n[commissions]\n0 = 0.01\n",
        );
        let err = validate_simulation_config(&config).unwrap_err();
        assert!(matches!(err, InvestsimError::ConfigInvalid { key, .. } if key == "interest_rate"));
    }

    #[test]
    fn zero_contribution_fails() {
        let config = make_config(
            "[simulation]\ninterest_rate = 0.035\nmonthly_contribution = 0\n[commissions]\n0 = 0.01\n",
        );
        let err = validate_simulation_config(&config).unwrap_err();
        assert!(
            matches!(err, InvestsimError::ConfigInvalid { key, .. } if key == "monthly_contribution")
        );
    }

    #[test]
    fn missing_commissions_section_fails() {
        let config =
            make_config("[simulation]\ninterest_rate = 0.035\nmonthly_contribution = 100\n");
        let err = validate_simulation_config(&config).unwrap_err();
        assert!(matches!(err, InvestsimError::ConfigMissing { section, .. } if section == "commissions"));
    }

    #[test]
    fn commissions_without_zero_tier_fail() {
        let config = make_config(
            "[simulation]\ninterest_rate = 0.035\nmonthly_contribution = 100\n[commissions]\n500000 = 0.009\n",
        );
        let err = validate_simulation_config(&config).unwrap_err();
        assert!(matches!(err, InvestsimError::ConfigInvalid { section, .. } if section == "commissions"));
    }

    #[test]
    fn non_numeric_tier_rate_fails() {
        let config = make_config(
            "[simulation]\ninterest_rate = 0.035\nmonthly_contribution = 100\n[commissions]\n0 = cheap\n",
        );
        let err = validate_simulation_config(&config).unwrap_err();
        assert!(matches!(err, InvestsimError::ConfigInvalid { section, .. } if section == "commissions"));
    }

    #[test]
    fn periods_default_when_absent() {
        let config =
            make_config("[simulation]\ninterest_rate = 0.035\nmonthly_contribution = 100\n");
        assert_eq!(parse_periods(&config).unwrap(), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn periods_parse_comma_list() {
        let config = make_config("[simulation]\nperiods = 2, 4,6\n");
        assert_eq!(parse_periods(&config).unwrap(), vec![2, 4, 6]);
    }

    #[test]
    fn zero_period_fails() {
        let config = make_config(
            "[simulation]\ninterest_rate = 0.035\nmonthly_contribution = 100\nperiods = 1,0\n[commissions]\n0 = 0.01\n",
        );
        let err = validate_simulation_config(&config).unwrap_err();
        assert!(matches!(err, InvestsimError::ConfigInvalid { key, .. } if key == "periods"));
    }

    #[test]
    fn lone_stable_fund_fails() {
        let config = make_config(
            "[simulation]\ninterest_rate = 0.035\nmonthly_contribution = 100\n[commissions]\n0 = 0.01\n[funds]\nstable = bonds\n",
        );
        let err = validate_simulation_config(&config).unwrap_err();
        assert!(matches!(err, InvestsimError::ConfigMissing { key, .. } if key == "volatile"));
    }

    #[test]
    fn parse_commission_tiers_reads_all_tiers() {
        let config = make_config(VALID);
        let mut tiers = parse_commission_tiers(&config).unwrap();
        tiers.sort_by(|a, b| a.0.total_cmp(&b.0));
        assert_eq!(
            tiers,
            vec![(0.0, 0.014), (500_000.0, 0.009), (3_000_000.0, 0.005)]
        );
    }
}
