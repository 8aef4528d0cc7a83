//! Insertion-ordered calendar storage
//!
//! Calendar order is part of the result: years, months and days keep the
//! order in which they were first seen in the source markup, never a sorted
//! or hashed order. Each level is therefore backed by a `Vec` and looked up
//! by label.

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Ships calling on one day of a month
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayVisits {
    day: String,
    ships: Vec<String>,
}

impl DayVisits {
    /// Day label as published (e.g. "14" or "Tue 14")
    pub fn day(&self) -> &str {
        &self.day
    }

    /// Ships in listing order; duplicates are kept
    pub fn ships(&self) -> &[String] {
        &self.ships
    }
}

/// Days of one month, in first-seen order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthCalendar {
    name: String,
    days: Vec<DayVisits>,
}

impl MonthCalendar {
    /// Creates an empty month
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            days: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn days(&self) -> &[DayVisits] {
        &self.days
    }

    /// Looks up a day by label
    pub fn day(&self, label: &str) -> Option<&DayVisits> {
        self.days.iter().find(|d| d.day == label)
    }

    /// Day labels in first-seen order
    pub fn day_labels(&self) -> Vec<&str> {
        self.days.iter().map(|d| d.day.as_str()).collect()
    }

    /// Returns the position of a day, appending an empty entry on first sight
    pub fn touch_day(&mut self, label: &str) -> usize {
        match self.days.iter().position(|d| d.day == label) {
            Some(index) => index,
            None => {
                self.days.push(DayVisits {
                    day: label.to_string(),
                    ships: Vec::new(),
                });
                self.days.len() - 1
            }
        }
    }

    /// Appends a ship to the day at `index` (as returned by [`touch_day`](Self::touch_day))
    ///
    /// Out-of-range indexes are ignored.
    pub fn push_ship(&mut self, index: usize, ship: impl Into<String>) {
        if let Some(day) = self.days.get_mut(index) {
            day.ships.push(ship.into());
        }
    }

    /// Total ship calls in this month
    pub fn visit_count(&self) -> usize {
        self.days.iter().map(|d| d.ships.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

/// Months of one year, in first-seen order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearCalendar {
    label: String,
    months: Vec<MonthCalendar>,
}

impl YearCalendar {
    /// Creates an empty year
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            months: Vec::new(),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn months(&self) -> &[MonthCalendar] {
        &self.months
    }

    /// Looks up a month by name
    pub fn month(&self, name: &str) -> Option<&MonthCalendar> {
        self.months.iter().find(|m| m.name == name)
    }

    /// Month names in first-seen order
    pub fn month_names(&self) -> Vec<&str> {
        self.months.iter().map(|m| m.name.as_str()).collect()
    }

    /// Returns the named month, appending an empty one on first sight
    pub fn month_entry(&mut self, name: &str) -> &mut MonthCalendar {
        let index = match self.months.iter().position(|m| m.name == name) {
            Some(index) => index,
            None => {
                self.months.push(MonthCalendar::new(name));
                self.months.len() - 1
            }
        };
        &mut self.months[index]
    }

    /// Total ship calls in this year
    pub fn visit_count(&self) -> usize {
        self.months.iter().map(MonthCalendar::visit_count).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.months.is_empty()
    }
}

/// The complete scrape result: `Year -> Month -> Day -> [Ship]`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    years: Vec<YearCalendar>,
}

impl Dataset {
    /// Creates an empty dataset
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a year's calendar
    ///
    /// A label that is already present keeps its position and has its
    /// calendar replaced.
    pub fn insert_year(&mut self, calendar: YearCalendar) {
        match self.years.iter_mut().find(|y| y.label == calendar.label) {
            Some(existing) => *existing = calendar,
            None => self.years.push(calendar),
        }
    }

    pub fn years(&self) -> &[YearCalendar] {
        &self.years
    }

    /// Looks up a year by label
    pub fn year(&self, label: &str) -> Option<&YearCalendar> {
        self.years.iter().find(|y| y.label == label)
    }

    /// Year labels in the order they were collected
    pub fn year_labels(&self) -> Vec<&str> {
        self.years.iter().map(|y| y.label.as_str()).collect()
    }

    /// Ships calling on a given day, if that day was recorded
    pub fn ships_on(&self, year: &str, month: &str, day: &str) -> Option<&[String]> {
        self.year(year)?.month(month)?.day(day).map(DayVisits::ships)
    }

    /// Total ship calls across all years
    pub fn visit_count(&self) -> usize {
        self.years.iter().map(YearCalendar::visit_count).sum()
    }

    pub fn len(&self) -> usize {
        self.years.len()
    }

    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }
}

impl Serialize for MonthCalendar {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.days.len()))?;
        for day in &self.days {
            map.serialize_entry(&day.day, &day.ships)?;
        }
        map.end()
    }
}

impl Serialize for YearCalendar {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.months.len()))?;
        for month in &self.months {
            map.serialize_entry(&month.name, month)?;
        }
        map.end()
    }
}

impl Serialize for Dataset {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.years.len()))?;
        for year in &self.years {
            map.serialize_entry(&year.label, year)?;
        }
        map.end()
    }
}
