//! Pipeline coordinator
//!
//! Ties the scraper, the scoring engine and the ranking together behind the
//! single public entry point.

use crate::config::Config;
use crate::review::{select_top, sort_reviews, Review};
use crate::scrape::ReviewScraper;
use crate::Result;

/// Scrapes, scores, sorts and truncates reviews per the configuration
///
/// Scraping failures degrade to an empty or partial list as described on
/// [`ReviewScraper::scrape_reviews`]; they are never surfaced here.
///
/// # Errors
///
/// [`ScrapeError::Client`](crate::ScrapeError::Client) when the HTTP client
/// cannot be constructed. This is the only error path.
pub async fn collect_top_reviews(config: &Config) -> Result<Vec<Review>> {
    let settings = &config.scraper;

    tracing::info!("collecting reviews for {}", settings.dealership_url);

    let scraper = ReviewScraper::new(&settings.user_agent)?;
    let scraped = scraper
        .scrape_reviews(settings.pages, &settings.dealership_url)
        .await;

    tracing::debug!("calculating scores for {} reviews", scraped.len());

    let mut reviews: Vec<Review> = scraped.into_iter().map(Review::new).collect();
    sort_reviews(&mut reviews, settings.sort);

    Ok(select_top(reviews, settings.count))
}
