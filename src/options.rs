//! Caller supplied configuration for form elements.
//!
//! Every sub-element (label, hint, legend, …) accepts a [`FieldConfig`]:
//! nothing, a map of [`Options`], or a callable that renders the content
//! itself. Normalising the configuration once, at the start of a render,
//! means the renderers only ever see a fully merged options map or finished
//! markup.

use std::{fmt, rc::Rc};

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};

use crate::{
    classes::ClassList,
    error::Error,
    html::{AttributeValue, Attributes, Markup},
};

/// A single option value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    /// `true` or `false`.
    Flag(bool),
    /// A whole number, e.g. an input width.
    Integer(i64),
    /// Free text.
    Text(String),
    /// A list of strings, e.g. extra classes.
    List(Vec<String>),
    /// An explicit "no value", which still overrides a default.
    Null,
}

impl OptionValue {
    /// Returns `true` for null, empty and whitespace-only values.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Null => true,
            Self::Text(text) => text.trim().is_empty(),
            Self::List(items) => items.iter().all(|item| item.trim().is_empty()),
            Self::Flag(_) | Self::Integer(_) => false,
        }
    }
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Flag(flag) => write!(f, "{flag}"),
            Self::Integer(value) => write!(f, "{value}"),
            Self::Text(text) => f.write_str(text),
            Self::List(items) => f.write_str(&items.join(" ")),
            Self::Null => Ok(()),
        }
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<bool> for OptionValue {
    fn from(value: bool) -> Self {
        Self::Flag(value)
    }
}

impl From<i64> for OptionValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<Vec<String>> for OptionValue {
    fn from(value: Vec<String>) -> Self {
        Self::List(value)
    }
}

impl From<Vec<&str>> for OptionValue {
    fn from(value: Vec<&str>) -> Self {
        Self::List(value.into_iter().map(str::to_string).collect())
    }
}

impl<const N: usize> From<[&str; N]> for OptionValue {
    fn from(value: [&str; N]) -> Self {
        Self::List(value.into_iter().map(str::to_string).collect())
    }
}

impl<T: Into<Self>> From<Option<T>> for OptionValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

/// An ordered map of options.
///
/// Keys the element recognises (`text`, `size`, `class`, …) are consumed
/// while rendering; whatever is left over becomes HTML attributes on the
/// element.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Options(IndexMap<String, OptionValue>);

impl Options {
    /// Creates an empty options map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an option, builder style.
    ///
    /// ```
    /// use govuk_form_builder::Options;
    ///
    /// let options = Options::new()
    ///     .with("text", "Full name")
    ///     .with("size", "l")
    ///     .with("class", ["app-label"]);
    /// assert_eq!(options.len(), 3);
    /// ```
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<OptionValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Sets an option, replacing any previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<OptionValue>) {
        self.0.insert(key.into(), value.into());
    }

    /// Looks up an option.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&OptionValue> {
        self.0.get(key)
    }

    /// Removes an option, returning its value.
    pub fn remove(&mut self, key: &str) -> Option<OptionValue> {
        self.0.shift_remove(key)
    }

    /// Returns `true` if the map holds no options.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of options in the map.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterates over the options in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &OptionValue)> {
        self.0.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Shallow-merges these options over `defaults`; keys present here win,
    /// every default key not mentioned here survives.
    #[must_use]
    pub fn merged_over(self, defaults: Self) -> Self {
        let mut merged = defaults;
        merged.0.extend(self.0);
        merged
    }

    /// Removes a text option; null and absent values both read as `None`.
    pub(crate) fn take_text(
        &mut self,
        element: &'static str,
        key: &str,
    ) -> Result<Option<String>, Error> {
        match self.remove(key) {
            None | Some(OptionValue::Null) => Ok(None),
            Some(OptionValue::Text(text)) => Ok(Some(text)),
            Some(OptionValue::Integer(value)) => Ok(Some(value.to_string())),
            Some(_) => Err(Error::InvalidOption {
                element,
                option: key.to_string(),
                expected: "a string",
            }),
        }
    }

    /// Removes a boolean option, defaulting to `false`.
    pub(crate) fn take_flag(&mut self, element: &'static str, key: &str) -> Result<bool, Error> {
        match self.remove(key) {
            None | Some(OptionValue::Null) => Ok(false),
            Some(OptionValue::Flag(flag)) => Ok(flag),
            Some(_) => Err(Error::InvalidOption {
                element,
                option: key.to_string(),
                expected: "true or false",
            }),
        }
    }

    /// Removes a wrapping tag option, checking it is a usable element name.
    pub(crate) fn take_tag(
        &mut self,
        element: &'static str,
        key: &str,
    ) -> Result<Option<String>, Error> {
        match self.take_text(element, key)? {
            Some(tag) if tag.trim().is_empty() => Ok(None),
            Some(tag) if crate::html::is_valid_tag_name(&tag) => Ok(Some(tag)),
            Some(tag) => Err(Error::InvalidTag(tag, element)),
            None => Ok(None),
        }
    }

    /// Removes the `class` option. It may be a single string of
    /// whitespace-separated classes or a list.
    pub(crate) fn take_classes(&mut self, element: &'static str) -> Result<ClassList, Error> {
        match self.remove("class") {
            None | Some(OptionValue::Null) => Ok(ClassList::new()),
            Some(OptionValue::Text(classes)) => Ok([classes].into_iter().collect()),
            Some(OptionValue::List(classes)) => Ok(classes.into_iter().collect()),
            Some(_) => Err(Error::InvalidOption {
                element,
                option: "class".to_string(),
                expected: "a string or a list of strings",
            }),
        }
    }

    /// Converts the remaining options into HTML attributes.
    ///
    /// Flags become boolean attributes, lists are space-joined and nulls are
    /// dropped.
    ///
    /// # Errors
    ///
    /// Fails if a key is not a valid HTML attribute name.
    pub fn into_attributes(self, element: &'static str) -> Result<Attributes, Error> {
        let mut attributes = Attributes::new();
        for (name, value) in self.0 {
            if !crate::html::is_valid_attribute_name(&name) {
                return Err(Error::InvalidAttribute(name, element));
            }
            let value = match value {
                OptionValue::Null => continue,
                OptionValue::Flag(flag) => AttributeValue::Flag(flag),
                other => AttributeValue::Text(other.to_string()),
            };
            attributes.set(name, value);
        }
        Ok(attributes)
    }
}

impl<K: Into<String>, V: Into<OptionValue>> FromIterator<(K, V)> for Options {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

/// A callable that renders the content of an element itself.
#[derive(Clone)]
pub struct Callable(Rc<dyn Fn() -> Markup>);

impl Callable {
    /// Wraps a closure.
    pub fn new(render: impl Fn() -> Markup + 'static) -> Self {
        Self(Rc::new(render))
    }

    /// Invokes the closure.
    #[must_use]
    pub fn call(&self) -> Markup {
        (self.0)()
    }
}

impl fmt::Debug for Callable {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("Callable(..)")
    }
}

/// The configuration of one sub-element.
#[derive(Debug, Clone, Default)]
pub enum FieldConfig {
    /// Nothing supplied; the element renders with its defaults.
    #[default]
    Empty,
    /// Options merged over the element's defaults.
    Options(Options),
    /// A closure whose markup is used as the element's content, bypassing
    /// default merging.
    Callable(Callable),
    /// A plain value. Only a blank value is accepted, and reads as
    /// [`FieldConfig::Empty`].
    Scalar(String),
}

impl FieldConfig {
    /// Builds a callable configuration.
    pub fn callable(render: impl Fn() -> Markup + 'static) -> Self {
        Self::Callable(Callable::new(render))
    }

    /// Shorthand for an options map holding only `text`.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::Options(Options::new().with("text", text.into()))
    }

    /// Resolves the configuration against an element's defaults.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfigurationType`] for a non-blank scalar.
    pub(crate) fn normalize(
        self,
        element: &'static str,
        defaults: Options,
    ) -> Result<Normalized, Error> {
        match self {
            Self::Empty => Ok(Normalized::Options(defaults)),
            Self::Scalar(value) if value.trim().is_empty() => Ok(Normalized::Options(defaults)),
            Self::Scalar(_) => Err(Error::InvalidConfigurationType { element }),
            Self::Options(options) => Ok(Normalized::Options(options.merged_over(defaults))),
            Self::Callable(render) => Ok(Normalized::Rendered(render.call())),
        }
    }
}

impl From<Options> for FieldConfig {
    fn from(options: Options) -> Self {
        Self::Options(options)
    }
}

impl From<Callable> for FieldConfig {
    fn from(callable: Callable) -> Self {
        Self::Callable(callable)
    }
}

impl From<&str> for FieldConfig {
    fn from(value: &str) -> Self {
        Self::Scalar(value.to_string())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawConfig {
    Options(Options),
    Value(OptionValue),
}

impl From<RawConfig> for FieldConfig {
    fn from(raw: RawConfig) -> Self {
        match raw {
            RawConfig::Options(options) => Self::Options(options),
            RawConfig::Value(OptionValue::Null) => Self::Empty,
            RawConfig::Value(OptionValue::Text(text)) => Self::Scalar(text),
            RawConfig::Value(other) => Self::Scalar(other.to_string()),
        }
    }
}

impl<'de> Deserialize<'de> for FieldConfig {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        RawConfig::deserialize(deserializer).map(Self::from)
    }
}

/// A configuration after normalisation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Normalized {
    /// Caller options merged over the defaults.
    Options(Options),
    /// Markup produced by a callable.
    Rendered(Markup),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn legend_defaults() -> Options {
        Options::new()
            .with("text", OptionValue::Null)
            .with("tag", "h1")
            .with("size", "xl")
    }

    #[test]
    fn empty_config_yields_defaults() {
        let normalized = FieldConfig::Empty
            .normalize("legend", legend_defaults())
            .unwrap();
        assert_eq!(normalized, Normalized::Options(legend_defaults()));
    }

    #[test]
    fn blank_scalar_yields_defaults() {
        let normalized = FieldConfig::from("  ")
            .normalize("legend", legend_defaults())
            .unwrap();
        assert_eq!(normalized, Normalized::Options(legend_defaults()));
    }

    #[test]
    fn caller_options_win_and_defaults_survive() {
        let config = FieldConfig::from(Options::new().with("size", "m").with("dir", "rtl"));
        let Normalized::Options(merged) = config.normalize("legend", legend_defaults()).unwrap()
        else {
            panic!("expected options");
        };

        assert_eq!(merged.get("size"), Some(&OptionValue::from("m")));
        assert_eq!(merged.get("tag"), Some(&OptionValue::from("h1")));
        assert_eq!(merged.get("text"), Some(&OptionValue::Null));
        assert_eq!(merged.get("dir"), Some(&OptionValue::from("rtl")));
    }

    #[test]
    fn callable_bypasses_defaults() {
        let config = FieldConfig::callable(|| Markup::raw("<h2>Custom</h2>"));
        let normalized = config.normalize("legend", legend_defaults()).unwrap();
        assert_eq!(normalized, Normalized::Rendered(Markup::raw("<h2>Custom</h2>")));
    }

    #[test]
    fn non_blank_scalar_is_rejected() {
        let error = FieldConfig::from("This should fail")
            .normalize("label", Options::new())
            .unwrap_err();
        assert_eq!(error, Error::InvalidConfigurationType { element: "label" });
    }

    #[test]
    fn classes_accept_strings_and_lists() {
        let mut options = Options::new().with("class", "foo bar");
        assert_eq!(options.take_classes("label").unwrap().to_string(), "foo bar");

        let mut options = Options::new().with("class", ["foo", "bar", "foo"]);
        assert_eq!(options.take_classes("label").unwrap().to_string(), "foo bar");

        let mut options = Options::new().with("class", true);
        assert!(options.take_classes("label").is_err());
    }

    #[test]
    fn leftover_options_become_attributes() {
        let attributes = Options::new()
            .with("focusable", "false")
            .with("dir", "rtl")
            .with("hidden", true)
            .with("data-empty", OptionValue::Null)
            .into_attributes("label")
            .unwrap();

        let rendered: Vec<_> = attributes.iter().map(|(name, _)| name).collect();
        assert_eq!(rendered, vec!["focusable", "dir", "hidden"]);
        assert_eq!(attributes.get("dir"), Some(&AttributeValue::from("rtl")));
        assert_eq!(attributes.get("hidden"), Some(&AttributeValue::Flag(true)));
    }

    #[test]
    fn deserializes_from_yaml() {
        let config: FieldConfig = serde_yaml::from_str("text: Name\nsize: l\n").unwrap();
        let FieldConfig::Options(options) = config else {
            panic!("expected options");
        };
        assert_eq!(options.get("text"), Some(&OptionValue::from("Name")));

        let config: FieldConfig = serde_yaml::from_str("Just a string").unwrap();
        assert!(matches!(config, FieldConfig::Scalar(ref s) if s == "Just a string"));

        let config: FieldConfig = serde_yaml::from_str("~").unwrap();
        assert!(matches!(config, FieldConfig::Empty));
    }
}
