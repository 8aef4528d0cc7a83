//! Statistics over a scraped dataset
//!
//! This module summarizes a [`Dataset`]: how many years, months, days and
//! ship calls it holds, which ships call most often and which days are busiest.

use crate::model::Dataset;
use std::collections::HashMap;

/// Number of busiest days kept in the summary
const BUSIEST_DAYS: usize = 5;

/// Dataset statistics summary
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DatasetStatistics {
    /// Number of years collected
    pub years: usize,

    /// Number of months across all years
    pub months: usize,

    /// Number of days with at least one listing
    pub days: usize,

    /// Total ship calls
    pub visits: usize,

    /// Calls per ship, most frequent first (ties by name)
    pub visits_per_ship: Vec<(String, usize)>,

    /// Days with the most calls as (`"Year Month Day"`, calls), busiest first
    pub busiest_days: Vec<(String, usize)>,
}

impl DatasetStatistics {
    /// Number of distinct ship names
    pub fn distinct_ships(&self) -> usize {
        self.visits_per_ship.len()
    }
}

/// Computes statistics for a dataset
///
/// # Arguments
///
/// * `dataset` - The scraped calendar
///
/// # Returns
///
/// The computed statistics; an empty dataset yields all-zero statistics
pub fn compute_statistics(dataset: &Dataset) -> DatasetStatistics {
    let mut stats = DatasetStatistics {
        years: dataset.len(),
        ..DatasetStatistics::default()
    };
    let mut per_ship: HashMap<&str, usize> = HashMap::new();
    let mut day_calls = Vec::new();

    for year in dataset.years() {
        stats.months += year.months().len();
        for month in year.months() {
            stats.days += month.days().len();
            for day in month.days() {
                stats.visits += day.ships().len();
                for ship in day.ships() {
                    *per_ship.entry(ship.as_str()).or_insert(0) += 1;
                }
                day_calls.push((
                    format!("{} {} {}", year.label(), month.name(), day.day()),
                    day.ships().len(),
                ));
            }
        }
    }

    let mut visits_per_ship: Vec<(String, usize)> = per_ship
        .into_iter()
        .map(|(ship, count)| (ship.to_string(), count))
        .collect();
    visits_per_ship.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    stats.visits_per_ship = visits_per_ship;

    // Stable sort keeps calendar order among equally busy days
    day_calls.sort_by(|a, b| b.1.cmp(&a.1));
    day_calls.retain(|(_, calls)| *calls > 0);
    day_calls.truncate(BUSIEST_DAYS);
    stats.busiest_days = day_calls;

    stats
}

/// Prints statistics to stdout in a formatted manner
///
/// # Arguments
///
/// * `stats` - The statistics to display
pub fn print_statistics(stats: &DatasetStatistics) {
    println!("=== Calendar Statistics ===\n");

    println!("Overview:");
    println!("  Years: {}", stats.years);
    println!("  Months: {}", stats.months);
    println!("  Days with listings: {}", stats.days);
    println!("  Ship calls: {}", stats.visits);
    println!("  Distinct ships: {}", stats.distinct_ships());
    println!();

    if !stats.visits_per_ship.is_empty() {
        println!("Calls per Ship:");
        for (ship, count) in &stats.visits_per_ship {
            let percentage = if stats.visits > 0 {
                (*count as f64 / stats.visits as f64) * 100.0
            } else {
                0.0
            };
            println!("  {}: {} ({:.1}%)", ship, count, percentage);
        }
        println!();
    }

    if !stats.busiest_days.is_empty() {
        println!("Busiest Days:");
        for (day, count) in &stats.busiest_days {
            println!("  - {}: {} ship(s)", day, count);
        }
        println!();
    }
}
