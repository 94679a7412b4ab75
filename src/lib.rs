//! Dealer-Reviews: scrape and rank dealership customer reviews
//!
//! This crate fetches a limited number of review pages for a car dealership
//! from the DealerRater website, extracts structured rating data from the
//! markup, blends the extracted signals into one score per review, and
//! returns the top reviews by that score.

pub mod config;
pub mod markup;
pub mod pipeline;
pub mod review;
pub mod scrape;

use thiserror::Error;

/// Main error type for scraping operations
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("connection error while requesting {url}")]
    Connection {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("request to {url} returned status {status}")]
    NonOkStatus { url: String, status: u16 },

    #[error("failed to decode json from {url}")]
    JsonDecode {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("element was not found in the document: <{tag} class=\"{class}\">{expected_value}</{tag}>")]
    ElementNotFound {
        tag: String,
        /// Class token list the lookup asked for, `"*"` when unconstrained.
        class: String,
        /// Exact text the lookup asked for, `"*"` when unconstrained.
        expected_value: String,
    },

    #[error("overall score was not found")]
    OverallScoreNotFound,

    #[error("rating could not be processed from classes {classes:?}")]
    UnableToProcessRating { classes: Vec<String> },

    #[error("http client error: {0}")]
    Client(#[from] reqwest::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("invalid dealership URL in config: {0}")]
    InvalidUrl(String),
}

/// Result type alias for scraping operations
pub type Result<T> = std::result::Result<T, ScrapeError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::{Config, ScraperConfig};
pub use pipeline::collect_top_reviews;
pub use review::{select_top, sort_reviews, RawReview, Review, SortOrder};
