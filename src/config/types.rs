use serde::Deserialize;

use crate::review::SortOrder;

/// Number of review pages scanned when not configured otherwise
pub const DEFAULT_REVIEW_PAGES: u32 = 5;

/// Number of ranked reviews returned when not configured otherwise
pub const DEFAULT_RETURNED_REVIEWS: usize = 3;

/// Dealership scraped when not configured otherwise
pub const DEFAULT_DEALERSHIP_URL: &str = "https://www.dealerrater.com/dealer/\
     McKaig-Chevrolet-Buick-A-Dealer-For-The-People-dealer-reviews-23685";

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub scraper: ScraperConfig,
}

/// Scrape behavior configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ScraperConfig {
    /// Number of review pages to scan, must be at least 1
    pub pages: u32,

    /// Number of ranked reviews to return
    pub count: usize,

    /// Dealership review URL, fetched as `{url}/page{n}/`
    #[serde(rename = "dealership-url")]
    pub dealership_url: String,

    /// Sort direction for the ranked reviews
    pub sort: SortOrder,

    /// User agent sent with every page fetch
    #[serde(rename = "user-agent")]
    pub user_agent: String,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            pages: DEFAULT_REVIEW_PAGES,
            count: DEFAULT_RETURNED_REVIEWS,
            dealership_url: DEFAULT_DEALERSHIP_URL.to_owned(),
            sort: SortOrder::default(),
            user_agent: default_user_agent(),
        }
    }
}

/// User agent carrying the crate name and version
pub fn default_user_agent() -> String {
    format!("dealer-reviews/{}", env!("CARGO_PKG_VERSION"))
}
