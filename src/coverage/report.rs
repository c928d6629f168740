use serde::{Deserialize, Serialize};

use crate::errors::BadgeError;

#[derive(Debug, Serialize, Deserialize)]
pub struct CoverageReport {
    pub totals: Option<CoverageTotals>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CoverageTotals {
    pub percent_covered: Option<f64>,
}

impl CoverageReport {
    pub fn percent_covered(&self) -> Result<f64, BadgeError> {
        self.totals
            .as_ref()
            .ok_or_else(|| BadgeError::MissingField("totals".to_string()))?
            .percent_covered
            .ok_or_else(|| BadgeError::MissingField("totals.percent_covered".to_string()))
    }
}
