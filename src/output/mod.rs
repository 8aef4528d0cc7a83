//! Output module for rendering scraped calendars
//!
//! This module handles:
//! - Rendering the dataset as text, JSON or markdown
//! - Writing the rendering to a file or stdout
//! - Computing dataset statistics

mod markdown;
pub mod stats;
mod text;

pub use markdown::format_markdown_calendar;
pub use stats::{compute_statistics, print_statistics, DatasetStatistics};
pub use text::render_text;

use crate::config::OutputFormat;
use crate::model::Dataset;
use std::io::Write;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur during output operations
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Failed to format output: {0}")]
    Format(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;

/// Formats a dataset as pretty-printed JSON, keeping calendar order
pub fn render_json(dataset: &Dataset) -> OutputResult<String> {
    Ok(serde_json::to_string_pretty(dataset)?)
}

/// Renders a dataset in the requested format
///
/// # Arguments
///
/// * `dataset` - The scraped calendar
/// * `format` - Requested rendering
/// * `landing_url` - Source landing page, shown in the markdown header
///
/// # Returns
///
/// * `Ok(String)` - The rendered dataset
/// * `Err(OutputError)` - JSON serialization failed
pub fn render(dataset: &Dataset, format: OutputFormat, landing_url: &str) -> OutputResult<String> {
    match format {
        OutputFormat::Text => Ok(render_text(dataset)),
        OutputFormat::Json => render_json(dataset),
        OutputFormat::Markdown => Ok(format_markdown_calendar(
            dataset,
            landing_url,
            chrono::Utc::now(),
        )),
    }
}

/// Writes rendered output to a file, or to stdout when no path is given
pub fn write_output(rendered: &str, path: Option<&Path>) -> OutputResult<()> {
    match path {
        Some(path) => {
            let mut file = std::fs::File::create(path)?;
            file.write_all(rendered.as_bytes())?;
            if !rendered.ends_with('\n') {
                file.write_all(b"\n")?;
            }
        }
        None => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            handle.write_all(rendered.as_bytes())?;
            if !rendered.ends_with('\n') {
                handle.write_all(b"\n")?;
            }
        }
    }
    Ok(())
}
