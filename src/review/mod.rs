//! Review data model
//!
//! [`RawReview`] is the transient record the extractor produces for one
//! review block. [`Review`] wraps it together with the score computed by
//! the scoring engine; once constructed it is never mutated.

mod score;
mod sort;

pub use score::{calculate_score, NEGATIVE_WORDS, POSITIVE_WORDS};
pub use sort::{select_top, sort_reviews, SortOrder};

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

/// Rating data extracted from one review block
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct RawReview {
    /// Reviewer name with the fixed "by " prefix already stripped
    pub reviewer: String,

    /// Overall score decoded from the overall-rating widget
    pub overall_score: u32,

    /// One score per staff member mentioned, in document order
    pub employee_scores: Vec<u32>,

    /// Review title and body joined with one space
    pub message: String,

    /// Whether the "Recommend Dealer" row answered yes
    pub recommend_dealer: bool,

    /// Slugified category name to score, for every named rating row other
    /// than "Recommend Dealer"
    pub specific_scores: BTreeMap<String, u32>,
}

/// A scored review
///
/// The score is computed once at construction and is never negative.
#[derive(Debug, Clone)]
pub struct Review {
    raw: RawReview,
    score: i64,
}

impl Review {
    /// Wraps a raw record, computing its score
    pub fn new(raw: RawReview) -> Self {
        let score = calculate_score(&raw);
        Self { raw, score }
    }

    pub fn reviewer(&self) -> &str {
        &self.raw.reviewer
    }

    pub fn score(&self) -> i64 {
        self.score
    }

    /// The underlying extracted record
    pub fn raw(&self) -> &RawReview {
        &self.raw
    }
}

impl fmt::Display for Review {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} scored {}", self.raw.reviewer, self.score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doge_review() -> RawReview {
        RawReview {
            reviewer: "Doge".to_owned(),
            overall_score: 40,
            employee_scores: vec![50, 30],
            message: "Amazing experience!! Wow such happy!!".to_owned(),
            recommend_dealer: true,
            specific_scores: BTreeMap::from([
                ("pricing".to_owned(), 50),
                ("customer-service".to_owned(), 10),
            ]),
        }
    }

    #[test]
    fn test_review_keeps_reviewer() {
        let review = Review::new(doge_review());
        assert_eq!(review.reviewer(), "Doge");
    }

    #[test]
    fn test_review_scores_on_construction() {
        let review = Review::new(doge_review());
        assert_eq!(review.score(), 78);
    }

    #[test]
    fn test_review_display() {
        let review = Review::new(doge_review());
        assert_eq!(review.to_string(), "Doge scored 78");
    }

    #[test]
    fn test_raw_review_serializes_with_kebab_keys() {
        let value = serde_json::to_value(doge_review()).unwrap();
        assert_eq!(value["overall-score"], 40);
        assert_eq!(value["recommend-dealer"], true);
        assert_eq!(value["specific-scores"]["pricing"], 50);
    }
}
