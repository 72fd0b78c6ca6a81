//! JSON output for subnet facts.

use crate::report::Report;

/// Serialize the selected facts as one JSON object.
pub fn render_json(report: &Report) -> Result<String, serde_json::Error> {
    serde_json::to_string(report)
}
