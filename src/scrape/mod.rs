//! Scrape module for landing and year page processing
//!
//! This module contains the scraping pipeline, including:
//! - HTTP fetching (strict HTTP 200 success, no retries)
//! - HTML extraction of year links and calendar nodes
//! - Month/day calendar reconstruction
//! - Per-year collection and overall session orchestration

mod calendar;
mod collector;
mod fetcher;
mod parser;
mod session;

pub use calendar::{partition_months, reconstruct_year, MonthSlice};
pub use collector::YearlyVisitCollector;
pub use fetcher::{build_http_client, fetch_url, FetchResult, Fetcher, HttpFetcher};
pub use parser::{extract_calendar_nodes, extract_years, has_year_content, PageSelectors};
pub use session::{scrape, ScrapeSession};
