//! Report generation port trait.

use crate::domain::error::InvestsimError;
use crate::domain::simulation::StrategyResult;
use std::path::Path;

/// Port for writing simulation reports. Ordering and formatting of the
/// results is the implementation's concern, not the domain's.
pub trait ReportPort {
    fn write(
        &self,
        results: &[StrategyResult],
        output_path: &Path,
    ) -> Result<(), InvestsimError>;
}
