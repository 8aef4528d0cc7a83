//! Scrape session - top-level orchestration
//!
//! A session owns everything one scrape needs: the layout configuration, the
//! fetcher and the dataset being built. Running it performs, strictly in
//! sequence:
//!
//! 1. Landing URL check (at construction, before any I/O)
//! 2. Landing page fetch and parse
//! 3. Year extraction
//! 4. Per-year collection
//!
//! The result is all-or-nothing: either the complete [`Dataset`] is returned
//! or an error is, and no partial dataset escapes.

use crate::config::{validate, Config};
use crate::model::{Dataset, YearEntry};
use crate::scrape::collector::YearlyVisitCollector;
use crate::scrape::fetcher::{Fetcher, HttpFetcher};
use crate::scrape::parser::{extract_years, PageSelectors};
use crate::url::is_valid_landing_url;
use crate::CruiseError;
use scraper::Html;

/// One scrape of one landing page
pub struct ScrapeSession<F: Fetcher = HttpFetcher> {
    config: Config,
    selectors: PageSelectors,
    landing_url: String,
    fetcher: F,
    dataset: Dataset,
}

impl ScrapeSession<HttpFetcher> {
    /// Creates a session using a `reqwest`-backed fetcher
    ///
    /// # Errors
    ///
    /// * [`CruiseError::InvalidInput`] - The landing URL does not start with
    ///   the site's destination prefix; nothing else is done
    /// * [`CruiseError::Config`] - The configuration is invalid
    /// * [`CruiseError::Reqwest`] - The HTTP client could not be built
    pub fn new(config: Config, landing_url: &str) -> Result<Self, CruiseError> {
        check_landing_url(&config, landing_url)?;
        let fetcher = HttpFetcher::new(&config.http)?;
        Self::with_fetcher(config, landing_url, fetcher)
    }
}

impl<F: Fetcher> ScrapeSession<F> {
    /// Creates a session using the given fetcher
    pub fn with_fetcher(config: Config, landing_url: &str, fetcher: F) -> Result<Self, CruiseError> {
        check_landing_url(&config, landing_url)?;
        validate(&config)?;
        let selectors = PageSelectors::compile(&config.selectors)?;

        Ok(Self {
            config,
            selectors,
            landing_url: landing_url.to_string(),
            fetcher,
            dataset: Dataset::new(),
        })
    }

    pub fn landing_url(&self) -> &str {
        &self.landing_url
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Runs the scrape to completion and hands over the dataset
    ///
    /// # Errors
    ///
    /// * [`CruiseError::UnreachableSite`] - The landing page or a year page
    ///   did not answer HTTP 200; `year` names the failing year, if any
    /// * [`CruiseError::MalformedCalendar`] - A year page's calendar could not
    ///   be reconstructed
    pub async fn run(mut self) -> Result<Dataset, CruiseError> {
        tracing::info!("Reaching for Cruise Timetables at {}...", self.landing_url);
        let body = self
            .fetcher
            .fetch(&self.landing_url)
            .await
            .into_body(&self.landing_url, None)?;

        tracing::info!("Parsing landing page...");
        let years = self.parse_landing(&body);
        tracing::info!("Found {} year(s) on the landing page", years.len());

        let collector =
            YearlyVisitCollector::new(&self.fetcher, &self.selectors, &self.config.site.base_url);
        collector.collect(&years, &mut self.dataset).await?;

        tracing::info!(
            "Completed: {} year(s), {} visit(s)",
            self.dataset.len(),
            self.dataset.visit_count()
        );
        Ok(self.dataset)
    }

    fn parse_landing(&self, body: &str) -> Vec<YearEntry> {
        let document = Html::parse_document(body);
        extract_years(&document, &self.selectors)
    }
}

/// Rejects landing URLs outside the configured destination prefix
fn check_landing_url(config: &Config, landing_url: &str) -> Result<(), CruiseError> {
    if is_valid_landing_url(landing_url, &config.landing_url_prefix()) {
        Ok(())
    } else {
        Err(CruiseError::InvalidInput {
            url: landing_url.to_string(),
        })
    }
}

/// Scrapes a landing page with a default HTTP fetcher
///
/// # Example
///
/// ```no_run
/// use cruise_calendar::config::Config;
/// use cruise_calendar::scrape;
///
/// # async fn example() -> Result<(), cruise_calendar::CruiseError> {
/// let dataset = scrape(
///     Config::default(),
///     "https://www.cruisetimetables.com/cruises-to-santorini-greece.html",
/// )
/// .await?;
/// println!("{} years scraped", dataset.len());
/// # Ok(())
/// # }
/// ```
pub async fn scrape(config: Config, landing_url: &str) -> Result<Dataset, CruiseError> {
    ScrapeSession::new(config, landing_url)?.run().await
}
