//! Markdown calendar generation
//!
//! This module generates a human-readable markdown report of a scraped
//! dataset: a short overview followed by one section per year and one
//! table per month.

use crate::model::Dataset;
use crate::output::stats::compute_statistics;
use chrono::{DateTime, Utc};

/// Formats a dataset as markdown
///
/// # Arguments
///
/// * `dataset` - The scraped calendar
/// * `landing_url` - The landing page the dataset came from
/// * `generated_at` - Timestamp shown in the report header
///
/// # Returns
///
/// A formatted markdown string
pub fn format_markdown_calendar(
    dataset: &Dataset,
    landing_url: &str,
    generated_at: DateTime<Utc>,
) -> String {
    let stats = compute_statistics(dataset);
    let mut md = String::new();

    // Title
    md.push_str("# Cruise Calendar\n\n");

    // Overview
    md.push_str(&format!("- **Landing Page**: {}\n", landing_url));
    md.push_str(&format!(
        "- **Generated**: {}\n",
        generated_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    md.push_str(&format!("- **Years**: {}\n", stats.years));
    md.push_str(&format!("- **Ship Calls**: {}\n", stats.visits));
    md.push_str(&format!("- **Distinct Ships**: {}\n\n", stats.distinct_ships()));

    for year in dataset.years() {
        md.push_str(&format!("## {}\n\n", year.label()));

        if year.is_empty() {
            md.push_str("_No months listed._\n\n");
            continue;
        }

        for month in year.months() {
            md.push_str(&format!("### {}\n\n", month.name()));

            if month.is_empty() {
                md.push_str("_No ship calls._\n\n");
                continue;
            }

            md.push_str("| Day | Ships |\n");
            md.push_str("|-----|-------|\n");
            for day in month.days() {
                let ships: Vec<String> = day.ships().iter().map(|s| escape_cell(s)).collect();
                md.push_str(&format!("| {} | {} |\n", escape_cell(day.day()), ships.join(", ")));
            }
            md.push('\n');
        }
    }

    md
}

/// Escapes characters that would break a markdown table cell
fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
}
