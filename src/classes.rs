//! CSS class composition.

use std::fmt;

/// An ordered set of CSS class tokens.
///
/// Tokens keep the order they were first added in and are never repeated, so
/// base classes always come first and caller additions follow them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassList(Vec<String>);

impl ClassList {
    /// Creates an empty class list.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Merges caller supplied classes onto a set of base classes.
    ///
    /// Each item may hold several whitespace separated tokens.
    ///
    /// ```
    /// use govuk_form_builder::ClassList;
    ///
    /// let classes = ClassList::compose(["govuk-label"], ["foo bar", "govuk-label"]);
    /// assert_eq!(classes.to_string(), "govuk-label foo bar");
    /// ```
    #[must_use]
    pub fn compose<B, O>(base: B, overrides: O) -> Self
    where
        B: IntoIterator,
        B::Item: AsRef<str>,
        O: IntoIterator,
        O::Item: AsRef<str>,
    {
        let mut classes = Self::new();
        classes.extend(base);
        classes.extend(overrides);
        classes
    }

    /// Builds a list of design system classes, prefixing each suffix with the
    /// brand: `["hint", "checkboxes__hint"]` becomes
    /// `govuk-hint govuk-checkboxes__hint`.
    #[must_use]
    pub fn prefixed<I>(brand: &str, suffixes: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        suffixes
            .into_iter()
            .map(|suffix| format!("{brand}-{}", suffix.as_ref()))
            .collect()
    }

    /// Adds the tokens of a whitespace separated class string.
    pub fn push(&mut self, classes: impl AsRef<str>) {
        for token in classes.as_ref().split_whitespace() {
            if !self.contains(token) {
                self.0.push(token.to_string());
            }
        }
    }

    /// Adds every item of an iterator.
    pub fn extend<I>(&mut self, classes: I)
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        for class in classes {
            self.push(class);
        }
    }

    /// Returns `true` if the token is in the list.
    #[must_use]
    pub fn contains(&self, token: &str) -> bool {
        self.0.iter().any(|class| class == token)
    }

    /// Returns `true` if the list holds no tokens.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of tokens in the list.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterates over the tokens in order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl<S: AsRef<str>> FromIterator<S> for ClassList {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        let mut classes = Self::new();
        classes.extend(iter);
        classes
    }
}

impl fmt::Display for ClassList {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0.join(" "))
    }
}
