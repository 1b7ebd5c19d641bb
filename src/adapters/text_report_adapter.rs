//! Plain-text report adapter.

use crate::domain::error::InvestsimError;
use crate::domain::simulation::StrategyResult;
use crate::ports::report_port::ReportPort;
use std::fs;
use std::path::Path;

pub struct TextReportAdapter;

impl TextReportAdapter {
    pub fn new() -> Self {
        Self
    }

    /// One line per strategy, best profit rate first.
    pub fn render(results: &[StrategyResult]) -> String {
        let mut sorted: Vec<&StrategyResult> = results.iter().collect();
        sorted.sort_by(|a, b| b.profit_rate.total_cmp(&a.profit_rate));

        let mut out = String::new();
        for result in sorted {
            out.push_str(&format!(
                "{}: {:.2} ({:.2}%)\n",
                result.name,
                result.value,
                result.profit_rate * 100.0
            ));
        }
        out
    }
}

impl Default for TextReportAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportPort for TextReportAdapter {
    fn write(
        &self,
        results: &[StrategyResult],
        output_path: &Path,
    ) -> Result<(), InvestsimError> {
        fs::write(output_path, Self::render(results))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample_results() -> Vec<StrategyResult> {
        vec![
            StrategyResult {
                name: "bonds 2-month".to_string(),
                value: 198.5,
                profit_rate: -0.0075,
            },
            StrategyResult {
                name: "shares dip-buy".to_string(),
                value: 215.0,
                profit_rate: 0.075,
            },
        ]
    }

    #[test]
    fn render_sorts_by_profit_rate_descending() {
        let rendered = TextReportAdapter::render(&sample_results());
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "shares dip-buy: 215.00 (7.50%)");
        assert_eq!(lines[1], "bonds 2-month: 198.50 (-0.75%)");
    }

    #[test]
    fn render_empty_results_is_empty() {
        assert_eq!(TextReportAdapter::render(&[]), "");
    }

    #[test]
    fn write_creates_report_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("report.txt");

        let adapter = TextReportAdapter::new();
        adapter.write(&sample_results(), &path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("shares dip-buy"));
        assert_eq!(content.lines().count(), 2);
    }
}
