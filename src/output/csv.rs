//! CSV output formatting for subnet facts.

use crate::report::Report;

/// Quote a value for CSV, doubling any embedded quotes.
pub fn quote_field<T: ToString>(value: T) -> String {
    format!("\"{}\"", value.to_string().replace('"', "\"\""))
}

/// Header line of quoted keys followed by one line of quoted values.
pub fn render_csv(report: &Report) -> String {
    let entries = report.entries();
    let header = entries
        .iter()
        .map(|(fact, _)| quote_field(fact.key()))
        .collect::<Vec<String>>()
        .join(",");
    let row = entries
        .iter()
        .map(|(_, value)| quote_field(value))
        .collect::<Vec<String>>()
        .join(",");
    format!("{header}\n{row}")
}
