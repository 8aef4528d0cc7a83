//! Calendar reconstruction
//!
//! A year page publishes its calendar as one flat run of nodes: a month
//! marker, then that month's listings, then the next marker, and so on.
//! Listings carry no reference to their month, and a listing without a day
//! continues the day above it. This module rebuilds the nested calendar in
//! two passes:
//!
//! 1. [`partition_months`] splits the run at every month marker, giving each
//!    month the index range up to the next marker (or the end).
//! 2. [`reconstruct_year`] walks each range with an explicit day cursor that
//!    points at the most recently added day of the month. Listing an existing
//!    day again appends to it but leaves the cursor where it was.
//!
//! | Listing | Effect |
//! |---------|--------|
//! | day + ship | ship appended to that day; cursor moves there if the day is new |
//! | day only | day recorded; cursor moves there if the day is new |
//! | ship only | ship appended to the cursor's day; no cursor is an error |
//! | neither | skipped; cursor unchanged |

use crate::model::{CalendarNode, MonthCalendar, YearCalendar};
use crate::CruiseError;
use std::collections::HashMap;
use std::ops::Range;

/// The listings owned by one month marker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthSlice {
    /// Month name from the marker
    pub name: String,

    /// Position of the marker itself
    pub marker_index: usize,

    /// Half-open range of the month's listings: after the marker, up to the
    /// next marker or the end of the run
    pub range: Range<usize>,
}

/// Splits a year's node run into one slice per month marker
///
/// Slices are returned in marker order. A run without markers yields no
/// slices; listings before the first marker belong to no slice.
///
/// # Example
///
/// ```
/// use cruise_calendar::model::CalendarNode;
/// use cruise_calendar::scrape::partition_months;
///
/// let nodes = vec![
///     CalendarNode::month("January"),
///     CalendarNode::listing(Some("1"), Some("Alpha")),
///     CalendarNode::month("February"),
/// ];
/// let slices = partition_months(&nodes);
/// assert_eq!(slices[0].range, 1..2);
/// assert_eq!(slices[1].range, 3..3);
/// ```
pub fn partition_months(nodes: &[CalendarNode]) -> Vec<MonthSlice> {
    let markers: Vec<(usize, &str)> = nodes
        .iter()
        .enumerate()
        .filter_map(|(index, node)| node.month_name().map(|name| (index, name)))
        .collect();

    markers
        .iter()
        .enumerate()
        .map(|(k, &(marker_index, name))| {
            let end = markers
                .get(k + 1)
                .map(|&(next, _)| next)
                .unwrap_or(nodes.len());
            MonthSlice {
                name: name.to_string(),
                marker_index,
                range: marker_index + 1..end,
            }
        })
        .collect()
}

/// Rebuilds one year's `Month -> Day -> [Ship]` calendar from its node run
///
/// Months appear in first-seen order. A month name repeated later on the page
/// continues the existing month, cursor included.
///
/// # Errors
///
/// [`CruiseError::MalformedCalendar`] if a listing without a day comes before
/// any day of its month.
///
/// # Example
///
/// ```
/// use cruise_calendar::model::CalendarNode;
/// use cruise_calendar::scrape::reconstruct_year;
///
/// let nodes = vec![
///     CalendarNode::month("January"),
///     CalendarNode::listing(Some("1"), Some("Alpha")),
///     CalendarNode::listing(None, Some("Beta")),
/// ];
/// let year = reconstruct_year("2024", &nodes).unwrap();
/// assert_eq!(
///     year.month("January").unwrap().day("1").unwrap().ships(),
///     &["Alpha".to_string(), "Beta".to_string()]
/// );
/// ```
pub fn reconstruct_year(year: &str, nodes: &[CalendarNode]) -> Result<YearCalendar, CruiseError> {
    let slices = partition_months(nodes);
    let mut calendar = YearCalendar::new(year);
    let mut cursors: HashMap<String, usize> = HashMap::new();

    if let Some(first) = slices.first() {
        if first.marker_index > 0 {
            tracing::debug!(
                "{}: ignoring {} listing(s) before the first month marker",
                year,
                first.marker_index
            );
        }
    }

    for slice in &slices {
        let month = calendar.month_entry(&slice.name);
        let cursor = cursors.get(&slice.name).copied();

        if let Some(cursor) = walk_month(year, slice, nodes, month, cursor)? {
            cursors.insert(slice.name.clone(), cursor);
        }
    }

    Ok(calendar)
}

/// Applies one month's listings, returning the final day cursor
fn walk_month(
    year: &str,
    slice: &MonthSlice,
    nodes: &[CalendarNode],
    month: &mut MonthCalendar,
    mut cursor: Option<usize>,
) -> Result<Option<usize>, CruiseError> {
    for position in slice.range.clone() {
        let CalendarNode::ListingEntry { day, ship } = &nodes[position] else {
            continue;
        };

        match (day, ship) {
            (None, None) => {
                tracing::trace!("{}/{}: skipping empty listing at {}", year, slice.name, position);
            }
            (Some(day), ship) => {
                let known_days = month.days().len();
                let index = month.touch_day(day);
                if let Some(ship) = ship {
                    month.push_ship(index, ship.as_str());
                }
                if month.days().len() > known_days {
                    cursor = Some(index);
                }
            }
            (None, Some(ship)) => {
                let index = cursor.ok_or_else(|| CruiseError::MalformedCalendar {
                    year: year.to_string(),
                    month: slice.name.clone(),
                    position,
                })?;
                month.push_ship(index, ship.as_str());
            }
        }
    }

    Ok(cursor)
}
