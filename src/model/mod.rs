//! Data model for scraped port-visit calendars
//!
//! This module defines the values flowing through a scrape:
//! - [`YearEntry`]: one year linked from the landing page
//! - [`CalendarNode`]: one month marker or listing from a year page
//! - [`Dataset`]: the insertion-ordered `Year -> Month -> Day -> [Ship]` result

mod dataset;
mod node;

pub use dataset::{Dataset, DayVisits, MonthCalendar, YearCalendar};
pub use node::{CalendarNode, YearEntry};
