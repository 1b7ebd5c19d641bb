#![allow(dead_code)]

use chrono::NaiveDate;
use investsim::domain::error::InvestsimError;
use investsim::domain::params::SimulationParams;
use investsim::domain::schedule::CommissionSchedule;
use investsim::domain::series::PriceSeries;
use investsim::ports::data_port::PriceDataPort;
use std::collections::HashMap;

pub struct MockPriceDataPort {
    pub data: HashMap<String, Vec<f64>>,
    pub errors: HashMap<String, String>,
}

impl MockPriceDataPort {
    pub fn new() -> Self {
        Self {
            data: HashMap::new(),
            errors: HashMap::new(),
        }
    }

    pub fn with_series(mut self, name: &str, prices: Vec<f64>) -> Self {
        self.data.insert(name.to_string(), prices);
        self
    }

    pub fn with_error(mut self, name: &str, reason: &str) -> Self {
        self.errors.insert(name.to_string(), reason.to_string());
        self
    }
}

impl PriceDataPort for MockPriceDataPort {
    fn fetch_series(&self, name: &str) -> Result<PriceSeries, InvestsimError> {
        if let Some(reason) = self.errors.get(name) {
            return Err(InvestsimError::Data {
                reason: reason.clone(),
            });
        }
        match self.data.get(name) {
            Some(prices) => PriceSeries::new(prices.clone()),
            None => Err(InvestsimError::Data {
                reason: format!("no series named {}", name),
            }),
        }
    }

    fn list_series(&self) -> Result<Vec<String>, InvestsimError> {
        let mut names: Vec<String> = self.data.keys().cloned().collect();
        names.sort();
        Ok(names)
    }

    fn series_range(
        &self,
        name: &str,
    ) -> Result<Option<(NaiveDate, NaiveDate, usize)>, InvestsimError> {
        if let Some(reason) = self.errors.get(name) {
            return Err(InvestsimError::Data {
                reason: reason.clone(),
            });
        }
        match self.data.get(name) {
            Some(prices) if !prices.is_empty() => {
                let first = date(2020, 1, 1);
                let last = first + chrono::Months::new(prices.len() as u32 - 1);
                Ok(Some((first, last, prices.len())))
            }
            _ => Ok(None),
        }
    }
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// The tiered schedule used throughout the integration tests.
pub fn tiered_schedule() -> CommissionSchedule {
    CommissionSchedule::new(vec![(0.0, 0.014), (500_000.0, 0.009), (3_000_000.0, 0.005)])
        .unwrap()
}

pub fn flat_params(contribution: f64) -> SimulationParams {
    let schedule = CommissionSchedule::new(vec![(0.0, 0.01)]).unwrap();
    SimulationParams::new(schedule, 0.0, contribution).unwrap()
}

pub fn make_series(prices: &[f64]) -> PriceSeries {
    PriceSeries::new(prices.to_vec()).unwrap()
}
