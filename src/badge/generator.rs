use std::{fs, path::Path};

use crate::{
    badge::{color::BadgeColor, descriptor::BadgeDescriptor, BadgeOutcome},
    coverage::report::CoverageReport,
    utils::console,
    BadgeError,
};

/// Read a coverage report, validate it and write the shields.io badge
/// descriptor to `output`. Absent `coverage_json` is not an error, the
/// previous badge (if any) is left as is.
pub fn generate(coverage_json: &Path, output: &Path) -> Result<BadgeOutcome, BadgeError> {
    if !coverage_json.exists() {
        console::warn(&format!(
            "Coverage JSON file not found at {}, skipping badge generation",
            coverage_json.display()
        ));
        return Ok(BadgeOutcome::Skipped);
    }

    console::info(&format!(
        "Generating coverage badge from {}...",
        coverage_json.display()
    ));

    let json_str = fs::read_to_string(coverage_json)?;
    let report: CoverageReport = serde_json::from_str(&json_str)?;
    let percent = report.percent_covered()?;

    // Ties round to the even integer: 84.5 -> 84, 87.5 -> 88.
    let rounded = percent.round_ties_even();
    if !(0.0..=100.0).contains(&rounded) {
        return Err(BadgeError::OutOfRange(rounded));
    }
    let coverage = rounded as u8;

    console::info(&format!("Coverage: {}%", coverage));

    let color = BadgeColor::from_coverage(coverage);

    if let Some(parent) = output.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut payload = serde_json::to_string_pretty(&BadgeDescriptor::new(coverage, color))?;
    payload.push('\n');
    fs::write(output, payload)?;

    console::info(&format!(
        "Coverage badge JSON generated at {}",
        output.display()
    ));

    Ok(BadgeOutcome::Written { coverage, color })
}
