//! Configuration module for Cruise-Calendar
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//! Every section has built-in defaults describing the live cruisetimetables.com
//! layout, so a configuration file is only needed to override them.
//!
//! # Example
//!
//! ```no_run
//! use cruise_calendar::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("cruise.toml")).unwrap();
//! println!("Scraping from: {}", config.site.base_url);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, HttpConfig, OutputConfig, OutputFormat, SelectorConfig, SiteConfig};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash};
pub use validation::validate;
pub(crate) use validation::validate_selector;
