//! URL handling module for Cruise-Calendar
//!
//! This module provides the landing-URL gate that runs before any network
//! access, and resolution of the relative year links found on a landing page.

mod matcher;
mod resolve;

// Re-export main functions
pub use matcher::is_valid_landing_url;
pub use resolve::resolve_year_url;

/// Prefix shared by every cruise-destination landing page on the live site
pub const LANDING_URL_PREFIX: &str = "https://www.cruisetimetables.com/cruises-to-";

/// Checks a landing URL against the live site's destination prefix
///
/// The comparison is an exact, case-sensitive prefix match: other schemes,
/// hosts, paths and case variants are all rejected. No network access is made.
///
/// # Examples
///
/// ```
/// use cruise_calendar::url::validate;
///
/// assert!(validate("https://www.cruisetimetables.com/cruises-to-santorini-greece.html"));
/// assert!(!validate("http://www.cruisetimetables.com/cruises-to-santorini-greece.html"));
/// assert!(!validate("https://www.cruisetimetables.com/Cruises-To-santorini-greece.html"));
/// ```
pub fn validate(url: &str) -> bool {
    is_valid_landing_url(url, LANDING_URL_PREFIX)
}
