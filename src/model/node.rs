/// A year published on the landing page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearEntry {
    /// Digits of the anchor text; may be empty for malformed anchors
    pub year_label: String,

    /// The anchor's `href`, usually root-relative
    pub relative_link: String,
}

impl YearEntry {
    /// Builds an entry from raw anchor text and link
    ///
    /// Every non-digit character is stripped from the text. The result is not
    /// checked for plausibility.
    pub fn from_anchor(text: &str, link: &str) -> Self {
        Self {
            year_label: text.chars().filter(|c| c.is_ascii_digit()).collect(),
            relative_link: link.to_string(),
        }
    }
}

/// A month marker or listing taken from a year page, in document order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalendarNode {
    /// Starts a month; every following listing belongs to it
    MonthMarker { name: String },

    /// One calendar row
    ///
    /// A missing day means the ship belongs to the previous day of the month.
    /// Both missing marks an empty placeholder row.
    ListingEntry {
        day: Option<String>,
        ship: Option<String>,
    },
}

impl CalendarNode {
    /// Creates a month marker
    pub fn month(name: impl Into<String>) -> Self {
        Self::MonthMarker { name: name.into() }
    }

    /// Creates a listing row
    pub fn listing(day: Option<&str>, ship: Option<&str>) -> Self {
        Self::ListingEntry {
            day: day.map(str::to_string),
            ship: ship.map(str::to_string),
        }
    }

    /// Returns the month name if this is a month marker
    pub fn month_name(&self) -> Option<&str> {
        match self {
            Self::MonthMarker { name } => Some(name),
            Self::ListingEntry { .. } => None,
        }
    }
}
