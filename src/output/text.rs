//! Plain-text rendering
//!
//! Renders the dataset as an indented tree, one line per year, month and day:
//!
//! ```text
//! 2023
//!   January
//!     1: Alpha, Beta
//! ```

use crate::model::Dataset;

/// Formats a dataset as an indented text tree
pub fn render_text(dataset: &Dataset) -> String {
    let mut out = String::new();

    if dataset.is_empty() {
        out.push_str("(no years found)\n");
        return out;
    }

    for year in dataset.years() {
        out.push_str(&format!("{}\n", display_label(year.label())));
        if year.is_empty() {
            out.push_str("  (no months)\n");
        }
        for month in year.months() {
            out.push_str(&format!("  {}\n", month.name()));
            for day in month.days() {
                out.push_str(&format!("    {}: {}\n", day.day(), day.ships().join(", ")));
            }
        }
    }

    out
}

fn display_label(label: &str) -> &str {
    if label.is_empty() {
        "(unlabelled year)"
    } else {
        label
    }
}
