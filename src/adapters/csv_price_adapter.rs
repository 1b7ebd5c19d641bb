//! CSV price series adapter.
//!
//! Each series lives in `<base_path>/<name>.csv` with a `date,price` header.
//! Rows are one month apiece and are sorted by date before the series is
//! built, so on-disk order does not matter.

use crate::domain::error::InvestsimError;
use crate::domain::series::PriceSeries;
use crate::ports::data_port::PriceDataPort;
use chrono::NaiveDate;
use std::fs;
use std::path::PathBuf;

pub struct CsvPriceAdapter {
    base_path: PathBuf,
}

impl CsvPriceAdapter {
    pub fn new(base_path: PathBuf) -> Self {
        Self { base_path }
    }

    fn csv_path(&self, name: &str) -> PathBuf {
        self.base_path.join(format!("{}.csv", name))
    }

    fn read_rows(&self, name: &str) -> Result<Vec<(NaiveDate, f64)>, InvestsimError> {
        let path = self.csv_path(name);
        let content = fs::read_to_string(&path).map_err(|e| InvestsimError::Data {
            reason: format!("failed to read {}: {}", path.display(), e),
        })?;

        let mut rdr = csv::Reader::from_reader(content.as_bytes());
        let mut rows = Vec::new();

        for result in rdr.records() {
            let record = result.map_err(|e| InvestsimError::Data {
                reason: format!("CSV parse error in {}: {}", path.display(), e),
            })?;

            let date_str = record.get(0).ok_or_else(|| InvestsimError::Data {
                reason: "missing date column".into(),
            })?;
            let date = NaiveDate::parse_from_str(date_str, "%Y-%m-%d").map_err(|e| {
                InvestsimError::Data {
                    reason: format!("invalid date {:?}: {}", date_str, e),
                }
            })?;

            let price: f64 = record
                .get(1)
                .ok_or_else(|| InvestsimError::Data {
                    reason: "missing price column".into(),
                })?
                .parse()
                .map_err(|e| InvestsimError::Data {
                    reason: format!("invalid price value: {}", e),
                })?;

            rows.push((date, price));
        }

        rows.sort_by_key(|&(date, _)| date);
        Ok(rows)
    }
}

impl PriceDataPort for CsvPriceAdapter {
    fn fetch_series(&self, name: &str) -> Result<PriceSeries, InvestsimError> {
        let rows = self.read_rows(name)?;
        PriceSeries::new(rows.into_iter().map(|(_, price)| price).collect())
    }

    fn list_series(&self) -> Result<Vec<String>, InvestsimError> {
        let entries = fs::read_dir(&self.base_path).map_err(|e| InvestsimError::Data {
            reason: format!(
                "failed to read directory {}: {}",
                self.base_path.display(),
                e
            ),
        })?;

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| InvestsimError::Data {
                reason: format!("directory entry error: {}", e),
            })?;

            let name = entry.file_name();
            let name_str = name.to_string_lossy();
            if let Some(stem) = name_str.strip_suffix(".csv") {
                names.push(stem.to_string());
            }
        }

        names.sort();
        Ok(names)
    }

    fn series_range(
        &self,
        name: &str,
    ) -> Result<Option<(NaiveDate, NaiveDate, usize)>, InvestsimError> {
        if !self.csv_path(name).exists() {
            return Ok(None);
        }
        let rows = self.read_rows(name)?;
        match (rows.first(), rows.last()) {
            (Some(&(first, _)), Some(&(last, _))) => Ok(Some((first, last, rows.len()))),
            _ => Ok(None),
        }
    }
}
