//! HTML extraction for landing and year pages
//!
//! This module turns parsed documents into the values the calendar algorithm
//! works on:
//! - Year anchors on the landing page → [`YearEntry`]
//! - Month markers and listings on a year page → [`CalendarNode`]
//!
//! Nodes are classified by their class attribute only; their text is never
//! used to decide what kind of node they are.

use crate::config::{validate_selector, SelectorConfig};
use crate::model::{CalendarNode, YearEntry};
use crate::ConfigError;
use scraper::{ElementRef, Html, Selector};

/// Compiled selectors for one page layout
#[derive(Debug, Clone)]
pub struct PageSelectors {
    year_links: Selector,
    year_content: Selector,
    calendar_nodes: Selector,
    month_class: String,
    listing_day: Selector,
    listing_ship: Selector,
}

impl PageSelectors {
    /// Compiles every selector of the layout configuration
    ///
    /// # Returns
    ///
    /// * `Ok(PageSelectors)` - All selectors compiled
    /// * `Err(ConfigError)` - A selector is empty or not valid CSS
    pub fn compile(config: &SelectorConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            year_links: validate_selector(&config.year_links)?,
            year_content: validate_selector(&config.year_content)?,
            calendar_nodes: validate_selector(&config.calendar_nodes)?,
            month_class: config.month_class.clone(),
            listing_day: validate_selector(&config.listing_day)?,
            listing_ship: validate_selector(&config.listing_ship)?,
        })
    }
}

/// Extracts the published years from a landing page
///
/// Every anchor matching the year-list selector yields one entry, in document
/// order. The label is the anchor text with all non-digits removed; the link is
/// the raw `href` (empty if missing). Nothing is de-duplicated or checked.
///
/// # Example
///
/// ```
/// use cruise_calendar::config::SelectorConfig;
/// use cruise_calendar::scrape::{extract_years, PageSelectors};
/// use scraper::Html;
///
/// let html = r#"<span class="small-line-height"><a href="/a">2023</a></span>"#;
/// let selectors = PageSelectors::compile(&SelectorConfig::default()).unwrap();
/// let years = extract_years(&Html::parse_document(html), &selectors);
/// assert_eq!(years[0].year_label, "2023");
/// assert_eq!(years[0].relative_link, "/a");
/// ```
pub fn extract_years(document: &Html, selectors: &PageSelectors) -> Vec<YearEntry> {
    document
        .select(&selectors.year_links)
        .map(|anchor| {
            let text = anchor.text().collect::<String>();
            let link = anchor.value().attr("href").unwrap_or("");
            YearEntry::from_anchor(&text, link)
        })
        .collect()
}

/// Extracts month markers and listings from a year page, in document order
///
/// Only nodes inside the year content container are considered. A page
/// without the container yields no nodes.
pub fn extract_calendar_nodes(document: &Html, selectors: &PageSelectors) -> Vec<CalendarNode> {
    document
        .select(&selectors.year_content)
        .flat_map(|content| content.select(&selectors.calendar_nodes))
        .map(|element| classify_node(element, selectors))
        .collect()
}

/// Returns true if the year page has a content container at all
pub fn has_year_content(document: &Html, selectors: &PageSelectors) -> bool {
    document.select(&selectors.year_content).next().is_some()
}

/// Classifies a calendar element by its class attribute
fn classify_node(element: ElementRef<'_>, selectors: &PageSelectors) -> CalendarNode {
    let is_month = element
        .value()
        .classes()
        .any(|class| class == selectors.month_class);

    if is_month {
        let name: String = element
            .text()
            .collect::<String>()
            .chars()
            .filter(|c| *c != '\r' && *c != '\n')
            .collect();
        return CalendarNode::MonthMarker {
            name: name.trim().to_string(),
        };
    }

    CalendarNode::ListingEntry {
        day: first_text(element, &selectors.listing_day),
        ship: first_text(element, &selectors.listing_ship),
    }
}

/// Text of the first match inside `element`; blank text counts as absent
fn first_text(element: ElementRef<'_>, selector: &Selector) -> Option<String> {
    element
        .select(selector)
        .next()
        .map(|found| found.text().collect::<String>().trim().to_string())
        .filter(|text| !text.is_empty())
}
