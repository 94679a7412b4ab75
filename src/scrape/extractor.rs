//! Rating extractor
//!
//! Turns one review block of DealerRater markup into a [`RawReview`].
//! Numeric ratings are not carried as text on the page; each rating widget
//! encodes its value as a digit run inside a CSS class token such as
//! `rating-48`. That class-name convention is effectively the wire format
//! for this site, so the decoding regex must not be loosened or tightened.

use std::sync::LazyLock;

use regex::Regex;
use scraper::Selector;
use slug::slugify;

use crate::markup::{Element, Query};
use crate::review::RawReview;
use crate::{Result, ScrapeError};

/// Class prefix carrying an encoded rating value
pub const RATING_CLASS_PREFIX: &str = "rating-";

/// Label of the ratings-table row holding the yes/no recommendation
const RECOMMEND_DEALER_LABEL: &str = "Recommend Dealer";
const RECOMMEND_YES_SLUG: &str = "yes";

/// Reviewer names are rendered with a fixed "by " prefix
const REVIEWER_PREFIX_CHARS: usize = 3;

/// Class signature of the span holding the reviewer name
const REVIEWER_NAME_CLASSES: &str = "italic font-16 bolder notranslate";

/// The single fixed selector identifying the overall-score widget
static OVERALL_SCORE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("div.rating-static.hidden-xs").expect("valid selector"));

/// Extracts the rating data of one review block
///
/// # Errors
///
/// * [`ScrapeError::ElementNotFound`] when an expected element is missing
/// * [`ScrapeError::OverallScoreNotFound`] when the overall-score widget is
///   absent
/// * [`ScrapeError::UnableToProcessRating`] when a rating widget's class
///   list does not encode a value
pub fn extract_review(block: Element<'_>) -> Result<RawReview> {
    let mut review = RawReview {
        reviewer: reviewer_name(block)?,
        overall_score: overall_score(block)?,
        employee_scores: employee_scores(block)?,
        message: message(block)?,
        recommend_dealer: false,
        specific_scores: Default::default(),
    };

    read_ratings_table(block, &mut review)?;

    Ok(review)
}

/// Decodes a numeric rating from a class-token list
///
/// Scans the tokens in attribute order for the first one matching
/// `^\W*<prefix>\D*(\d+)` and returns that token's first digit run as a
/// base-10 integer. Leading zeros are permitted. First matching token wins,
/// first digit run wins; no state is carried between calls.
///
/// # Errors
///
/// [`ScrapeError::UnableToProcessRating`] when no token encodes a value.
pub fn decode_rating(classes: &[String], prefix: &str) -> Result<u32> {
    let unprocessable = || ScrapeError::UnableToProcessRating {
        classes: classes.to_vec(),
    };

    let pattern = Regex::new(&format!(r"^\W*{}\D*(\d+)", regex::escape(prefix)))
        .map_err(|_| unprocessable())?;

    let captures = classes
        .iter()
        .find_map(|token| pattern.captures(token))
        .ok_or_else(unprocessable)?;

    captures[1].parse().map_err(|_| unprocessable())
}

fn reviewer_name(block: Element<'_>) -> Result<String> {
    let name_element = block.find_first(&Query::tag("span").class(REVIEWER_NAME_CLASSES))?;

    Ok(name_element
        .text()
        .chars()
        .skip(REVIEWER_PREFIX_CHARS)
        .collect())
}

fn overall_score(block: Element<'_>) -> Result<u32> {
    let widgets = block.select(&OVERALL_SCORE_SELECTOR);

    let widget = widgets.first().ok_or(ScrapeError::OverallScoreNotFound)?;

    decode_rating(&widget.classes(), RATING_CLASS_PREFIX)
}

fn employee_scores(block: Element<'_>) -> Result<Vec<u32>> {
    let wrapper = block.find_first(&Query::tag("div").class("employees-wrapper"))?;

    wrapper
        .find_all(&Query::tag("div").class("rating-static"))
        .iter()
        .map(|widget| decode_rating(&widget.classes(), RATING_CLASS_PREFIX))
        .collect()
}

/// Joins the review's title span and body span with one space
fn message(block: Element<'_>) -> Result<String> {
    let root = block.find_first(&Query::tag("p").class("font-16"))?;
    let title = root.find_first(&Query::tag("span").class("review-title"))?;
    let whole = root.find_first(&Query::tag("span").class("review-whole"))?;

    Ok(format!("{} {}", title.text(), whole.text()))
}

/// Walks the named-ratings table, filling the recommendation flag and the
/// per-category score map
///
/// Every row is a label cell followed by either a rating widget or, for the
/// "Recommend Dealer" row, a bold yes/no cell.
fn read_ratings_table(block: Element<'_>, review: &mut RawReview) -> Result<()> {
    let table = block.find_first(&Query::tag("div").class("review-ratings-all"))?;

    for row in table.find_all(&Query::tag("div").class("tr")) {
        let label_cell = row.find_first(&Query::tag("div").class("td"))?;
        let label = label_cell.text();
        let label = label.trim();

        if label == RECOMMEND_DEALER_LABEL {
            let answer_cell = label_cell.find_next_sibling(&Query::tag("div").class("boldest"))?;
            review.recommend_dealer = slugify(answer_cell.text()) == RECOMMEND_YES_SLUG;
        } else {
            let rating_cell =
                label_cell.find_next_sibling(&Query::tag("div").class("rating-static-indv"))?;
            let score = decode_rating(&rating_cell.classes(), RATING_CLASS_PREFIX)?;
            review.specific_scores.insert(slugify(label), score);
        }
    }

    Ok(())
}
