//! Review scraping
//!
//! This module drives the scrape: fetching review pages over HTTP,
//! extracting one [`RawReview`](crate::RawReview) per review block, and
//! aggregating across pages with the partial-failure policy described on
//! [`ReviewScraper::scrape_reviews`].

mod aggregator;
mod extractor;
mod fetcher;

pub use aggregator::ReviewScraper;
pub use extractor::{decode_rating, extract_review, RATING_CLASS_PREFIX};
pub use fetcher::{build_http_client, get_html, get_json};
