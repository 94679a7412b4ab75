//! Scoring engine
//!
//! Blends the extracted rating signals into one bounded integer: a flat
//! bonus for a positive recommendation, weighted means of the numeric
//! ratings, and a naive word-count sentiment term from the message text.
//! The sum is clamped at zero from below; there is no upper clamp.

use std::collections::{BTreeMap, HashSet};
use std::sync::LazyLock;

use regex::Regex;

use super::RawReview;

/// Words counting towards positive sentiment, matched as exact lowercase tokens
pub const POSITIVE_WORDS: [&str; 13] = [
    "good",
    "helpful",
    "comfortable",
    "pleasant",
    "easy",
    "excellent",
    "friendly",
    "fast",
    "happy",
    "thank",
    "nice",
    "amazing",
    "love",
];

/// Words counting towards negative sentiment, matched as exact lowercase tokens
pub const NEGATIVE_WORDS: [&str; 13] = [
    "bad",
    "hard",
    "disappointed",
    "mistake",
    "slow",
    "stupid",
    "deceitful",
    "sad",
    "pain",
    "waste",
    "furious",
    "horrible",
    "hate",
];

const RECOMMEND_DEALER_POINTS: i64 = 40;
const OVERALL_WEIGHT: f64 = 0.4;
const EMPLOYEE_WEIGHT: f64 = 0.2;
const SPECIFIC_WEIGHT: f64 = 0.4;

/// Each sentiment direction contributes at most this many points
const SENTIMENT_WORD_CAP: usize = 10;

static PUNCTUATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s]").expect("valid pattern"));

/// Computes the score of one raw review
///
/// The result is the sum of the recommendation, overall, employee,
/// sentiment and per-category terms, clamped at zero from below. Inputs are
/// trusted to be well-formed extractor output; nothing is validated here.
pub fn calculate_score(review: &RawReview) -> i64 {
    let score = recommend_points(review.recommend_dealer)
        + overall_points(review.overall_score)
        + message_points(&review.message)
        + employee_points(&review.employee_scores)
        + specific_points(&review.specific_scores);

    score.max(0)
}

fn recommend_points(recommend_dealer: bool) -> i64 {
    if recommend_dealer {
        RECOMMEND_DEALER_POINTS
    } else {
        0
    }
}

fn overall_points(overall_score: u32) -> i64 {
    (OVERALL_WEIGHT * f64::from(overall_score)).floor() as i64
}

fn employee_points(scores: &[u32]) -> i64 {
    weighted_mean_points(scores.iter().copied(), EMPLOYEE_WEIGHT)
}

fn specific_points(scores: &BTreeMap<String, u32>) -> i64 {
    weighted_mean_points(scores.values().copied(), SPECIFIC_WEIGHT)
}

/// Floors the weighted mean of a score sequence, 0 when empty
///
/// The mean is taken first (integer sum over count), the weight applied
/// after, and the floor only on the final product.
fn weighted_mean_points(scores: impl ExactSizeIterator<Item = u32>, weight: f64) -> i64 {
    let count = scores.len();

    if count == 0 {
        return 0;
    }

    let sum: u64 = scores.map(u64::from).sum();
    let mean = sum as f64 / count as f64;

    (weight * mean).floor() as i64
}

/// Counts sentiment words in the message
///
/// The message is lowercased, stripped of punctuation (every character that
/// is neither a word character nor whitespace), and split into a word set.
/// Matching is exact-token only; "not bad" still counts "bad" as negative,
/// a simplification the scoring deliberately keeps.
fn message_points(message: &str) -> i64 {
    let lowered = message.to_lowercase();
    let stripped = PUNCTUATION.replace_all(&lowered, "");
    let words: HashSet<&str> = stripped.split_whitespace().collect();

    let positive = POSITIVE_WORDS
        .iter()
        .filter(|word| words.contains(**word))
        .count()
        .min(SENTIMENT_WORD_CAP);
    let negative = NEGATIVE_WORDS
        .iter()
        .filter(|word| words.contains(**word))
        .count()
        .min(SENTIMENT_WORD_CAP);

    positive as i64 - negative as i64
}
