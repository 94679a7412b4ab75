use scraper::{ElementRef, Selector};

use crate::{Result, ScrapeError};

/// Match criteria for element lookups
///
/// Built with the `tag` constructor plus chained refinements:
///
/// ```
/// use dealer_reviews::markup::Query;
///
/// let query = Query::tag("div").class("td small-text").attr("data-id", "1");
/// # let _ = query;
/// ```
///
/// The class criterion is a whitespace-separated token list; an element
/// matches when it carries every listed token. Tag and class comparison is
/// ASCII case-insensitive, consistent with lenient HTML parsing. The text
/// criterion requires the element's exact concatenated text.
#[derive(Debug, Clone)]
pub struct Query<'q> {
    tag: &'q str,
    class: Option<&'q str>,
    attrs: Vec<(&'q str, &'q str)>,
    text: Option<&'q str>,
}

impl<'q> Query<'q> {
    /// Starts a query matching elements with the given tag name
    pub fn tag(tag: &'q str) -> Self {
        Self {
            tag,
            class: None,
            attrs: Vec::new(),
            text: None,
        }
    }

    /// Requires every class token in the given whitespace-separated list
    pub fn class(mut self, class: &'q str) -> Self {
        self.class = Some(class);
        self
    }

    /// Requires an attribute with the exact given value
    pub fn attr(mut self, name: &'q str, value: &'q str) -> Self {
        self.attrs.push((name, value));
        self
    }

    /// Requires the element's concatenated text to equal the given value
    pub fn text(mut self, text: &'q str) -> Self {
        self.text = Some(text);
        self
    }

    /// Tag, class and attribute criteria; the text criterion is separate
    /// because single-element lookups treat it as a post-check
    fn matches_structure(&self, element: ElementRef<'_>) -> bool {
        if !element.value().name().eq_ignore_ascii_case(self.tag) {
            return false;
        }

        if let Some(class) = self.class {
            let class_attr = element.value().attr("class").unwrap_or("");
            let carries = |token: &str| {
                class_attr
                    .split_whitespace()
                    .any(|c| c.eq_ignore_ascii_case(token))
            };
            if !class.split_whitespace().all(carries) {
                return false;
            }
        }

        for (name, value) in &self.attrs {
            if element.value().attr(name) != Some(*value) {
                return false;
            }
        }

        true
    }

    fn text_matches(&self, element: ElementRef<'_>) -> bool {
        match self.text {
            Some(text) => element.text().collect::<String>() == text,
            None => true,
        }
    }

    fn not_found(&self) -> ScrapeError {
        ScrapeError::ElementNotFound {
            tag: self.tag.to_owned(),
            class: self.class.unwrap_or("*").to_owned(),
            expected_value: self.text.unwrap_or("*").to_owned(),
        }
    }
}

/// A borrowed handle to one element in a parsed document
///
/// All lookups are scoped to this element: `find_first` and `find_all`
/// search its descendants, the sibling lookups walk outward from it.
#[derive(Debug, Clone, Copy)]
pub struct Element<'a> {
    node: ElementRef<'a>,
}

impl<'a> Element<'a> {
    pub(crate) fn new(node: ElementRef<'a>) -> Self {
        Self { node }
    }

    /// Finds the first descendant matching the query, in document order
    ///
    /// # Errors
    ///
    /// [`ScrapeError::ElementNotFound`] when no descendant matches the tag,
    /// class and attribute criteria, or when the query carries a text
    /// criterion and the matched element's text differs. Later candidates
    /// are not considered in that case.
    pub fn find_first(&self, query: &Query<'_>) -> Result<Element<'a>> {
        let element = self
            .descendant_elements()
            .find(|element| query.matches_structure(element.node))
            .ok_or_else(|| query.not_found())?;

        if !query.text_matches(element.node) {
            return Err(query.not_found());
        }

        Ok(element)
    }

    /// Finds every descendant matching the query, in document order
    ///
    /// Unlike [`find_first`](Element::find_first), a text criterion filters
    /// here: only elements whose exact text equals it are returned.
    pub fn find_all(&self, query: &Query<'_>) -> Vec<Element<'a>> {
        self.descendant_elements()
            .filter(|element| {
                query.matches_structure(element.node) && query.text_matches(element.node)
            })
            .collect()
    }

    /// Returns the number of descendants matching the query
    pub fn count(&self, query: &Query<'_>) -> usize {
        self.descendant_elements()
            .filter(|element| {
                query.matches_structure(element.node) && query.text_matches(element.node)
            })
            .count()
    }

    /// Returns every descendant matching a precompiled CSS selector
    pub fn select(&self, selector: &Selector) -> Vec<Element<'a>> {
        self.node.select(selector).map(Element::new).collect()
    }

    /// Finds the first following sibling matching the query
    ///
    /// # Errors
    ///
    /// Same contract as [`find_first`](Element::find_first), scoped to the
    /// following siblings.
    pub fn find_next_sibling(&self, query: &Query<'_>) -> Result<Element<'a>> {
        let element = self
            .node
            .next_siblings()
            .filter_map(ElementRef::wrap)
            .find(|element| query.matches_structure(*element))
            .map(Element::new)
            .ok_or_else(|| query.not_found())?;

        if !query.text_matches(element.node) {
            return Err(query.not_found());
        }

        Ok(element)
    }

    /// Finds the first preceding sibling matching the query
    ///
    /// Siblings are visited nearest first.
    ///
    /// # Errors
    ///
    /// Same contract as [`find_first`](Element::find_first), scoped to the
    /// preceding siblings.
    pub fn find_previous_sibling(&self, query: &Query<'_>) -> Result<Element<'a>> {
        let element = self
            .node
            .prev_siblings()
            .filter_map(ElementRef::wrap)
            .find(|element| query.matches_structure(*element))
            .map(Element::new)
            .ok_or_else(|| query.not_found())?;

        if !query.text_matches(element.node) {
            return Err(query.not_found());
        }

        Ok(element)
    }

    /// Returns the element's class tokens in attribute order
    ///
    /// The order matters downstream: rating decoding takes the first token
    /// that encodes a value.
    pub fn classes(&self) -> Vec<String> {
        self.node
            .value()
            .attr("class")
            .map(|value| value.split_whitespace().map(str::to_owned).collect())
            .unwrap_or_default()
    }

    /// Returns the raw value of an attribute, if present
    pub fn attr(&self, name: &str) -> Option<&'a str> {
        self.node.value().attr(name)
    }

    /// Returns the element's concatenated text content
    ///
    /// Text is returned as the markup parser produced it; no entity decoding
    /// beyond the parser's own.
    pub fn text(&self) -> String {
        self.node.text().collect()
    }

    fn descendant_elements(&self) -> impl Iterator<Item = Element<'a>> + '_ {
        let own_id = self.node.id();
        self.node
            .descendants()
            .filter_map(ElementRef::wrap)
            .filter(move |element| element.id() != own_id)
            .map(Element::new)
    }
}
