//! Price data access port trait.

use crate::domain::error::InvestsimError;
use crate::domain::series::PriceSeries;
use chrono::NaiveDate;

pub trait PriceDataPort {
    fn fetch_series(&self, name: &str) -> Result<PriceSeries, InvestsimError>;

    fn list_series(&self) -> Result<Vec<String>, InvestsimError>;

    /// First date, last date, and month count of a series, if it exists.
    fn series_range(
        &self,
        name: &str,
    ) -> Result<Option<(NaiveDate, NaiveDate, usize)>, InvestsimError>;
}
