//! Cruise-Calendar: a port-visit calendar scraper
//!
//! This crate fetches the cruise-destination pages published on
//! cruisetimetables.com and rebuilds, from their flat month/listing markup,
//! a nested `Year -> Month -> Day -> [Ship]` calendar for every year linked
//! from a landing page.

pub mod config;
pub mod model;
pub mod output;
pub mod scrape;
pub mod url;

use thiserror::Error;

/// Main error type for Cruise-Calendar operations
#[derive(Debug, Error)]
pub enum CruiseError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid landing url: {url}")]
    InvalidInput { url: String },

    #[error("Unable to reach Cruise Timetables at {url}{}: {reason}", year_context(.year))]
    UnreachableSite {
        url: String,
        year: Option<String>,
        reason: String,
    },

    #[error("Malformed calendar in {year}/{month}: listing at position {position} has no day and no earlier day to attach to")]
    MalformedCalendar {
        year: String,
        month: String,
        position: usize,
    },

    #[error("URL error: {0}")]
    Url(#[from] UrlError),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] ::url::ParseError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Output error: {0}")]
    Output(#[from] output::OutputError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CruiseError {
    /// Returns the year label whose processing failed, if the error is tied to one
    pub fn failed_year(&self) -> Option<&str> {
        match self {
            Self::UnreachableSite { year, .. } => year.as_deref(),
            Self::MalformedCalendar { year, .. } => Some(year),
            _ => None,
        }
    }
}

fn year_context(year: &Option<String>) -> String {
    match year {
        Some(year) => format!(" while collecting {}", year),
        None => String::new(),
    }
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),

    #[error("Invalid CSS selector '{selector}': {message}")]
    InvalidSelector { selector: String, message: String },
}

/// URL-specific errors
#[derive(Debug, Error)]
pub enum UrlError {
    #[error("Failed to parse URL: {0}")]
    Parse(String),

    #[error("Invalid URL scheme: {0}")]
    InvalidScheme(String),

    #[error("Missing host in URL")]
    MissingHost,
}

/// Result type alias for Cruise-Calendar operations
pub type Result<T> = std::result::Result<T, CruiseError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for URL operations
pub type UrlResult<T> = std::result::Result<T, UrlError>;

// Re-export commonly used types
pub use config::Config;
pub use model::{CalendarNode, Dataset, DayVisits, MonthCalendar, YearCalendar, YearEntry};
pub use scrape::{scrape, ScrapeSession};
pub use crate::url::{is_valid_landing_url, validate};
