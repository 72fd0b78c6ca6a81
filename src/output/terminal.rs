//! Terminal output utilities.
//!
//! Renders a [`Report`] as `Label: value` lines, optionally with coloured labels.

use crate::report::Report;
use colored::Colorize;

/// One `Label: value` line per fact present in the report.
pub fn render_text(report: &Report, color: bool) -> String {
    report
        .entries()
        .iter()
        .map(|(fact, value)| {
            let label = format!("{}:", fact.label());
            if color {
                format!("{} {}", label.green().bold(), value)
            } else {
                format!("{label} {value}")
            }
        })
        .collect::<Vec<String>>()
        .join("\n")
}
