//! Core simulation domain: price series, commissions, timing policies,
//! the accrual engine, and the multi-fund investor.

pub mod series;
pub mod schedule;
pub mod params;
pub mod timing;
pub mod fund;
pub mod accrual;
pub mod investor;
pub mod simulation;
pub mod config_validation;
pub mod error;
