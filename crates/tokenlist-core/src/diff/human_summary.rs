//! Human-readable summary of a change report.

use crate::diff::model::ChangeReport;
use crate::model::Version;

/// Render the lines printed after a comparison.
///
/// Informational only; the structured report is the source of truth.
pub fn render_human_summary(report: &ChangeReport, from: Version, to: Version) -> Vec<String> {
    let mut lines = Vec::new();
    if report.classification.is_change() {
        lines.push(format!(
            "Change: {} (version {} -> {})",
            report.classification, from, to
        ));
    } else {
        lines.push(format!("Change: none (version {} unchanged)", from));
    }
    lines.push(format!("   - {}", report.description));
    lines
}
