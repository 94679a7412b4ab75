//! Review aggregator
//!
//! Drives extraction across a limited number of review pages. Failures are
//! never retried: when a page fetch or a review extraction fails before
//! anything was collected, the scrape degrades to an empty result; when
//! earlier pages already produced reviews, those are kept and no further
//! pages are processed.

use reqwest::Client;

use crate::markup::{Document, Query};
use crate::review::RawReview;
use crate::{Result, ScrapeError};

use super::extractor::extract_review;
use super::fetcher::{build_http_client, get_html};

/// Class signature of the subtree holding one customer's full review
const REVIEW_BLOCK_CLASS: &str = "review-entry";

/// Scrapes dealership review pages into raw review records
pub struct ReviewScraper {
    client: Client,
}

impl ReviewScraper {
    /// Creates a scraper with its own HTTP client
    ///
    /// # Errors
    ///
    /// [`ScrapeError::Client`] when the HTTP client cannot be built.
    pub fn new(user_agent: &str) -> Result<Self> {
        let client = build_http_client(user_agent)?;
        Ok(Self { client })
    }

    /// Scrapes through a limited number of review pages for a dealership
    ///
    /// Pages are fetched one after another; each fetch completes before the
    /// next page starts. The returned list may be empty (total failure) or
    /// partial (failure after earlier pages succeeded); scraping failures
    /// are logged, never surfaced to the caller.
    pub async fn scrape_reviews(&self, pages: u32, dealership_url: &str) -> Vec<RawReview> {
        tracing::debug!("starting to scrape reviews");

        let mut collected: Vec<RawReview> = Vec::new();

        for page_number in 1..=pages {
            match self.reviews_for_page(dealership_url, page_number).await {
                Ok(mut reviews) => collected.append(&mut reviews),
                Err(error) => {
                    if collected.is_empty() {
                        log_total_failure(&error);
                        return Vec::new();
                    }

                    tracing::warn!(
                        "stopping at page {page_number}, keeping {} reviews from earlier pages: {error}",
                        collected.len()
                    );
                    break;
                }
            }
        }

        tracing::debug!("finished scraping reviews");

        collected
    }

    async fn reviews_for_page(
        &self,
        dealership_url: &str,
        page_number: u32,
    ) -> Result<Vec<RawReview>> {
        tracing::debug!("fetching review page {page_number}");

        let url = page_url(dealership_url, page_number);
        let html = get_html(&self.client, &url).await?;

        let document = Document::parse(&html);
        let blocks = document
            .root()
            .find_all(&Query::tag("div").class(REVIEW_BLOCK_CLASS));

        tracing::debug!("scraping {} reviews on page {page_number}", blocks.len());

        blocks.into_iter().map(extract_review).collect()
    }
}

fn page_url(dealership_url: &str, page_number: u32) -> String {
    format!("{dealership_url}/page{page_number}/")
}

fn log_total_failure(error: &ScrapeError) {
    match error {
        ScrapeError::Connection { .. } | ScrapeError::NonOkStatus { .. } => {
            tracing::error!("it was not possible to fetch data from DealerRater");
        }
        other => tracing::error!("{other}"),
    }
}
