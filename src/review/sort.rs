//! Review ranking
//!
//! Stable sort by score plus truncation to the requested count. Direction
//! and count are independent caller inputs.

use clap::ValueEnum;
use serde::Deserialize;

use super::Review;

/// Sort direction for ranked reviews
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Increasing score
    #[default]
    Asc,
    /// Decreasing score
    Desc,
}

/// Sorts reviews by score, stably, in the given direction
pub fn sort_reviews(reviews: &mut [Review], order: SortOrder) {
    match order {
        SortOrder::Asc => reviews.sort_by(|a, b| a.score().cmp(&b.score())),
        SortOrder::Desc => reviews.sort_by(|a, b| b.score().cmp(&a.score())),
    }
}

/// Keeps the first `count` reviews of an already sorted list
///
/// Returns fewer when the list is shorter than `count`.
pub fn select_top(mut reviews: Vec<Review>, count: usize) -> Vec<Review> {
    reviews.truncate(count);
    reviews
}
