//! Helpers for asserting on rendered markup.

use scraper::{ElementRef, Html, Selector};

use crate::html::Markup;

/// A parsed fragment of rendered HTML.
#[derive(Debug)]
pub(crate) struct Fragment(Html);

impl From<Markup> for Fragment {
    fn from(markup: Markup) -> Self {
        Self(Html::parse_fragment(markup.as_str()))
    }
}

impl Fragment {
    fn select(&self, selector: &str) -> impl Iterator<Item = ElementRef<'_>> {
        let selector = Selector::parse(selector).unwrap();
        self.0.select(&selector).collect::<Vec<_>>().into_iter()
    }

    fn first(&self, selector: &str) -> ElementRef<'_> {
        self.select(selector)
            .next()
            .unwrap_or_else(|| panic!("no element matches '{selector}'"))
    }

    /// Number of elements matching the selector.
    pub(crate) fn count(&self, selector: &str) -> usize {
        self.select(selector).count()
    }

    /// Classes of the first matching element, in attribute order.
    pub(crate) fn classes(&self, selector: &str) -> Vec<String> {
        self.attr(selector, "class")
            .map(|classes| classes.split_whitespace().map(str::to_string).collect())
            .unwrap_or_default()
    }

    /// Text content of the first matching element.
    pub(crate) fn text(&self, selector: &str) -> String {
        self.first(selector).text().collect()
    }

    /// Inner HTML of the first matching element.
    pub(crate) fn inner_html(&self, selector: &str) -> String {
        self.first(selector).inner_html()
    }

    /// An attribute of the first matching element.
    pub(crate) fn attr(&self, selector: &str, name: &str) -> Option<String> {
        self.first(selector).value().attr(name).map(str::to_string)
    }
}
