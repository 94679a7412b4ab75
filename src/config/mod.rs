//! Configuration
//!
//! Scrape settings come from an optional TOML file with documented defaults
//! for every key: 5 pages scanned, top 3 returned, ascending sort, the
//! default dealership URL. Verbosity is not configured here; the binary
//! derives it from explicit command-line flags.
//!
//! ```toml
//! [scraper]
//! pages = 5
//! count = 3
//! dealership-url = "https://www.dealerrater.com/dealer/..."
//! sort = "asc"
//! user-agent = "dealer-reviews/1.0.0"
//! ```

mod parser;
mod types;

pub use parser::{load_config, validate};
pub use types::{
    default_user_agent, Config, ScraperConfig, DEFAULT_DEALERSHIP_URL, DEFAULT_RETURNED_REVIEWS,
    DEFAULT_REVIEW_PAGES,
};
