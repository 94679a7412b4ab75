//! Typed query layer over parsed HTML
//!
//! This module wraps the `scraper` document tree behind a small capability
//! set: find-first, find-all, select-by-selector, sibling lookup, class list
//! and text access. Lookups that come up empty fail with
//! [`ScrapeError::ElementNotFound`](crate::ScrapeError::ElementNotFound)
//! carrying the tag, class and expected text used for the search.

mod element;

pub use element::{Element, Query};

use scraper::Html;

/// A parsed HTML document
///
/// Parsing is lenient and never fails; malformed markup simply yields a tree
/// with fewer elements than the caller hoped for.
pub struct Document {
    tree: Html,
}

impl Document {
    /// Parses an HTML text blob into a traversable document
    pub fn parse(html: &str) -> Self {
        Self {
            tree: Html::parse_document(html),
        }
    }

    /// Returns the root element, the starting point for all lookups
    pub fn root(&self) -> Element<'_> {
        Element::new(self.tree.root_element())
    }
}
