//! Minimal HTML building primitives.
//!
//! [`Markup`] is a fragment of trusted HTML. Text only becomes markup by
//! passing through [`Markup::text`], which escapes it, so a fragment built
//! from these primitives can be concatenated without double escaping.

use std::fmt;

use indexmap::IndexMap;

use crate::classes::ClassList;

/// Elements that never have content or a closing tag.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

/// A fragment of HTML that is safe to emit verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Markup(String);

impl Markup {
    /// An empty fragment.
    #[must_use]
    pub const fn empty() -> Self {
        Self(String::new())
    }

    /// Escapes `text` for use as element content.
    #[must_use]
    pub fn text(text: &str) -> Self {
        Self(html_escape::encode_text(text).into_owned())
    }

    /// Wraps a string that is already valid HTML.
    ///
    /// The caller is responsible for the content being safe to emit.
    #[must_use]
    pub fn raw(html: impl Into<String>) -> Self {
        Self(html.into())
    }

    /// Appends another fragment.
    pub fn push(&mut self, other: &Self) {
        self.0.push_str(&other.0);
    }

    /// Returns `true` if the fragment contains no HTML.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The HTML source of the fragment.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the fragment, returning the HTML source.
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Markup {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Markup {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Concatenates fragments, skipping the ones that are absent.
pub fn safe_join<I>(fragments: I) -> Markup
where
    I: IntoIterator,
    I::Item: Into<Option<Markup>>,
{
    fragments
        .into_iter()
        .filter_map(Into::into)
        .fold(Markup::empty(), |mut acc, fragment| {
            acc.push(&fragment);
            acc
        })
}

/// The value of a single HTML attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeValue {
    /// A regular `name="value"` attribute.
    Text(String),
    /// A boolean attribute; rendered as a bare name when `true` and omitted
    /// when `false`.
    Flag(bool),
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&String> for AttributeValue {
    fn from(value: &String) -> Self {
        Self::Text(value.clone())
    }
}

impl From<bool> for AttributeValue {
    fn from(value: bool) -> Self {
        Self::Flag(value)
    }
}

/// An ordered map of HTML attributes, excluding `class`.
///
/// Attributes keep their insertion order; setting an existing name replaces
/// its value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes(IndexMap<String, AttributeValue>);

impl Attributes {
    /// Creates an empty attribute map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets an attribute, replacing any previous value.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<AttributeValue>) {
        self.0.insert(name.into(), value.into());
    }

    /// Sets an attribute only if it has not been set already.
    pub fn set_default(&mut self, name: impl Into<String>, value: impl Into<AttributeValue>) {
        self.0.entry(name.into()).or_insert_with(|| value.into());
    }

    /// Looks up an attribute value.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&AttributeValue> {
        self.0.get(name)
    }

    /// Removes an attribute, returning its value.
    pub fn remove(&mut self, name: &str) -> Option<AttributeValue> {
        self.0.shift_remove(name)
    }

    /// Copies every attribute of `other` over this map; `other` wins on
    /// conflicts.
    pub fn merge(&mut self, other: Self) {
        self.0.extend(other.0);
    }

    /// Returns `true` if there are no attributes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the attributes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttributeValue)> {
        self.0.iter().map(|(name, value)| (name.as_str(), value))
    }

    fn write_to(&self, out: &mut String) {
        for (name, value) in &self.0 {
            if !is_valid_attribute_name(name) {
                tracing::warn!(name = name.as_str(), "dropping attribute with an invalid name");
                continue;
            }
            match value {
                AttributeValue::Text(text) => {
                    out.push(' ');
                    out.push_str(name);
                    out.push_str("=\"");
                    out.push_str(&html_escape::encode_double_quoted_attribute(text));
                    out.push('"');
                }
                AttributeValue::Flag(true) => {
                    out.push(' ');
                    out.push_str(name);
                }
                AttributeValue::Flag(false) => {}
            }
        }
    }
}

/// Builder for a single HTML element.
///
/// ```
/// use govuk_form_builder::html::{Element, Markup};
///
/// let html = Element::new("span")
///     .class("govuk-hint")
///     .attr("id", "person-name-hint")
///     .render(Markup::text("Fish & chips"));
///
/// assert_eq!(
///     html.as_str(),
///     r#"<span class="govuk-hint" id="person-name-hint">Fish &amp; chips</span>"#
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Element {
    tag: String,
    classes: ClassList,
    attributes: Attributes,
}

impl Element {
    /// Starts an element with the given tag name.
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            classes: ClassList::new(),
            attributes: Attributes::new(),
        }
    }

    /// Adds one or more whitespace separated classes.
    #[must_use]
    pub fn class(mut self, class: impl AsRef<str>) -> Self {
        self.classes.push(class);
        self
    }

    /// Adds every class of the list.
    #[must_use]
    pub fn classes(mut self, classes: &ClassList) -> Self {
        self.classes.extend(classes.iter());
        self
    }

    /// Sets an attribute. Setting `class` adds to the class list instead.
    #[must_use]
    pub fn attr(mut self, name: &str, value: impl Into<AttributeValue>) -> Self {
        match (name, value.into()) {
            ("class", AttributeValue::Text(classes)) => self.classes.push(classes),
            (name, value) => self.attributes.set(name, value),
        }
        self
    }

    /// Sets an attribute when a value is present.
    #[must_use]
    pub fn attr_opt(self, name: &str, value: Option<impl Into<AttributeValue>>) -> Self {
        match value {
            Some(value) => self.attr(name, value),
            None => self,
        }
    }

    /// Copies a set of caller supplied attributes onto the element.
    #[must_use]
    pub fn attributes(mut self, attributes: &Attributes) -> Self {
        for (name, value) in attributes.iter() {
            self = self.attr(name, value.clone());
        }
        self
    }

    /// Renders the element around `content`.
    ///
    /// Void elements ignore their content.
    #[must_use]
    pub fn render(self, content: Markup) -> Markup {
        let mut out = self.open_tag();
        if !self.is_void() {
            out.push_str(content.as_str());
            out.push_str("</");
            out.push_str(&self.tag);
            out.push('>');
        }
        Markup(out)
    }

    /// Renders the element with no content.
    #[must_use]
    pub fn render_empty(self) -> Markup {
        self.render(Markup::empty())
    }

    fn is_void(&self) -> bool {
        VOID_ELEMENTS.contains(&self.tag.as_str())
    }

    fn open_tag(&self) -> String {
        let mut out = String::with_capacity(64);
        out.push('<');
        out.push_str(&self.tag);
        if !self.classes.is_empty() {
            out.push_str(" class=\"");
            out.push_str(&html_escape::encode_double_quoted_attribute(
                &self.classes.to_string(),
            ));
            out.push('"');
        }
        self.attributes.write_to(&mut out);
        out.push('>');
        out
    }
}

/// Returns `true` if `tag` is usable as an element name.
pub(crate) fn is_valid_tag_name(tag: &str) -> bool {
    let mut chars = tag.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '-')
}

/// Returns `true` if `name` is usable as an attribute name.
pub(crate) fn is_valid_attribute_name(name: &str) -> bool {
    let mut chars = name.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | ':' | '.'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_is_escaped() {
        assert_eq!(
            Markup::text("<script>alert('x')</script>").as_str(),
            "&lt;script&gt;alert('x')&lt;/script&gt;"
        );
    }

    #[test]
    fn attribute_values_are_escaped() {
        let html = Element::new("span")
            .attr("title", r#"say "hello""#)
            .render_empty();
        assert_eq!(html.as_str(), r#"<span title="say &quot;hello&quot;"></span>"#);
    }

    #[test]
    fn void_elements_have_no_closing_tag() {
        let html = Element::new("input")
            .attr("type", "checkbox")
            .attr("checked", true)
            .attr("disabled", false)
            .render(Markup::text("ignored"));
        assert_eq!(html.as_str(), r#"<input type="checkbox" checked>"#);
    }

    #[test]
    fn class_attribute_joins_class_list() {
        let html = Element::new("div")
            .class("govuk-form-group")
            .attr("class", "extra govuk-form-group")
            .render_empty();
        assert_eq!(html.as_str(), r#"<div class="govuk-form-group extra"></div>"#);
    }

    #[test]
    fn safe_join_skips_missing_fragments() {
        let joined = safe_join([
            Some(Markup::raw("<b>a</b>")),
            None,
            Some(Markup::text("&")),
        ]);
        assert_eq!(joined.as_str(), "<b>a</b>&amp;");
    }

    #[test]
    fn later_attributes_replace_earlier_ones() {
        let mut attributes = Attributes::new();
        attributes.set("dir", "ltr");
        attributes.set_default("dir", "auto");
        attributes.set("dir", "rtl");
        assert_eq!(attributes.get("dir"), Some(&AttributeValue::from("rtl")));
    }

    #[test]
    fn tag_names_are_validated() {
        assert!(is_valid_tag_name("h1"));
        assert!(is_valid_tag_name("my-element"));
        assert!(!is_valid_tag_name(""));
        assert!(!is_valid_tag_name("1h"));
        assert!(!is_valid_tag_name("h1 onclick=alert(1)"));
    }

    #[test]
    fn attribute_names_are_validated() {
        assert!(is_valid_attribute_name("aria-describedby"));
        assert!(is_valid_attribute_name("data-module"));
        assert!(is_valid_attribute_name("xml:lang"));
        assert!(!is_valid_attribute_name(""));
        assert!(!is_valid_attribute_name("-x"));
        assert!(!is_valid_attribute_name("x onmouseover=alert(1) y"));
        assert!(!is_valid_attribute_name("x\"><script>"));
    }

    #[test]
    fn attributes_with_invalid_names_are_not_written() {
        let mut attributes = Attributes::new();
        attributes.set("x onmouseover=alert(1) y", "z");
        attributes.set("lang", "cy");

        let html = Element::new("span").attributes(&attributes).render_empty();
        assert_eq!(html.as_str(), r#"<span lang="cy"></span>"#);
    }
}
