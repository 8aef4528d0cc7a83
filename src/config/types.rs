use serde::Deserialize;

/// Main configuration structure for Cruise-Calendar
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub site: SiteConfig,
    pub selectors: SelectorConfig,
    pub http: HttpConfig,
    pub output: OutputConfig,
}

impl Config {
    /// Full prefix every landing URL must start with
    pub fn landing_url_prefix(&self) -> String {
        format!(
            "{}{}",
            self.site.base_url.trim_end_matches('/'),
            self.site.landing_prefix
        )
    }
}

/// Target site configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Scheme and host that year links are resolved against
    ///
    /// Must not carry a path: year links are site-absolute, so a path here
    /// would be dropped on resolution.
    #[serde(rename = "base-url")]
    pub base_url: String,

    /// Path prefix shared by all cruise-destination landing pages
    #[serde(rename = "landing-prefix")]
    pub landing_prefix: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: "https://www.cruisetimetables.com".to_string(),
            landing_prefix: "/cruises-to-".to_string(),
        }
    }
}

/// CSS selectors describing the page layout
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SelectorConfig {
    /// Year anchors on the landing page
    #[serde(rename = "year-links")]
    pub year_links: String,

    /// Container holding a year page's calendar
    #[serde(rename = "year-content")]
    pub year_content: String,

    /// Month markers and listings, matched together in document order
    #[serde(rename = "calendar-nodes")]
    pub calendar_nodes: String,

    /// Class that tags a calendar node as a month marker
    #[serde(rename = "month-class")]
    pub month_class: String,

    /// Day label inside a listing
    #[serde(rename = "listing-day")]
    pub listing_day: String,

    /// Ship name inside a listing
    #[serde(rename = "listing-ship")]
    pub listing_ship: String,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            year_links: "span.small-line-height a".to_string(),
            year_content: "div#idContent".to_string(),
            calendar_nodes: "div.cdy-month, div.cdy-listing".to_string(),
            month_class: "cdy-month".to_string(),
            listing_day: "div.cdy-day a".to_string(),
            listing_ship: "div.cdy-ship a".to_string(),
        }
    }
}

/// HTTP client configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Total request timeout (seconds)
    #[serde(rename = "timeout-secs")]
    pub timeout_secs: u64,

    /// Connection timeout (seconds)
    #[serde(rename = "connect-timeout-secs")]
    pub connect_timeout_secs: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 30,
            connect_timeout_secs: 10,
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Rendering used for the final dataset
    pub format: OutputFormat,

    /// File to write to; stdout when absent
    pub path: Option<String>,
}

/// Supported dataset renderings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Indented plain-text tree
    #[default]
    Text,
    /// Pretty-printed JSON object
    Json,
    /// Markdown report with one table per month
    Markdown,
}
