//! Per-year collection
//!
//! For each year found on the landing page, the collector fetches the year
//! page, extracts its calendar nodes and stores the reconstructed calendar
//! under the year label. Years are processed one at a time, in landing-page
//! order; the first failure aborts the whole collection.

use crate::model::{CalendarNode, Dataset, YearCalendar, YearEntry};
use crate::scrape::calendar::reconstruct_year;
use crate::scrape::fetcher::Fetcher;
use crate::scrape::parser::{extract_calendar_nodes, has_year_content, PageSelectors};
use crate::url::resolve_year_url;
use crate::CruiseError;
use scraper::Html;

/// Fetches and reconstructs the calendar of every listed year
pub struct YearlyVisitCollector<'a, F: Fetcher + ?Sized> {
    fetcher: &'a F,
    selectors: &'a PageSelectors,
    base_url: &'a str,
}

impl<'a, F: Fetcher + ?Sized> YearlyVisitCollector<'a, F> {
    /// Creates a collector resolving year links against `base_url`
    pub fn new(fetcher: &'a F, selectors: &'a PageSelectors, base_url: &'a str) -> Self {
        Self {
            fetcher,
            selectors,
            base_url,
        }
    }

    /// Collects every year into `dataset`, in order
    ///
    /// # Errors
    ///
    /// Stops at the first year that cannot be fetched
    /// ([`CruiseError::UnreachableSite`]) or reconstructed
    /// ([`CruiseError::MalformedCalendar`]).
    pub async fn collect(&self, years: &[YearEntry], dataset: &mut Dataset) -> Result<(), CruiseError> {
        for entry in years {
            let calendar = self.collect_year(entry).await?;
            tracing::info!(
                "{}: {} month(s), {} visit(s)",
                calendar.label(),
                calendar.months().len(),
                calendar.visit_count()
            );
            dataset.insert_year(calendar);
        }
        Ok(())
    }

    /// Fetches one year page and rebuilds its calendar
    pub async fn collect_year(&self, entry: &YearEntry) -> Result<YearCalendar, CruiseError> {
        tracing::info!("Collecting visits for {}...", entry.year_label);

        let url = resolve_year_url(self.base_url, &entry.relative_link).map_err(|e| {
            CruiseError::UnreachableSite {
                url: format!("{}{}", self.base_url, entry.relative_link.trim()),
                year: Some(entry.year_label.clone()),
                reason: e.to_string(),
            }
        })?;
        let body = self
            .fetcher
            .fetch(url.as_str())
            .await
            .into_body(url.as_str(), Some(entry.year_label.as_str()))?;

        let nodes = self.parse_year_page(&entry.year_label, &body);
        reconstruct_year(&entry.year_label, &nodes)
    }

    fn parse_year_page(&self, year: &str, body: &str) -> Vec<CalendarNode> {
        let document = Html::parse_document(body);

        if !has_year_content(&document, self.selectors) {
            tracing::warn!("{}: year page has no calendar content", year);
        }

        let nodes = extract_calendar_nodes(&document, self.selectors);
        tracing::debug!("{}: {} calendar node(s)", year, nodes.len());
        nodes
    }
}
