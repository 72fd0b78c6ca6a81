//! Output formatting for subnet facts.
//!
//! This module handles rendering a [`Report`]:
//! - [`csv`] - CSV output formatting
//! - [`json`] - JSON object output
//! - [`terminal`] - Labelled lines with optional colours

mod csv;
mod json;
mod terminal;

use crate::report::Report;
use std::error::Error;

pub use csv::{quote_field, render_csv};
pub use json::render_json;
pub use terminal::render_text;

/// Output format selectable from the command line or environment.
#[derive(clap::ValueEnum, Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Csv,
    Json,
}

/// Render a report in the requested format.
pub fn render(report: &Report, format: OutputFormat, color: bool) -> Result<String, Box<dyn Error>> {
    let out = match format {
        OutputFormat::Text => render_text(report, color),
        OutputFormat::Csv => render_csv(report),
        OutputFormat::Json => render_json(report)?,
    };
    Ok(out)
}
