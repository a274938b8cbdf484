//! The objects a form is built for.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};

/// Supplies current values and validation errors for a form's attributes.
pub trait FormObject {
    /// The current value of a single-valued attribute.
    fn value(&self, attribute: &str) -> Option<String>;

    /// The current values of a multi-valued attribute, such as a set of
    /// check boxes.
    fn values(&self, attribute: &str) -> Vec<String> {
        self.value(attribute).into_iter().collect()
    }

    /// Validation error messages for an attribute, most important first.
    fn errors(&self, attribute: &str) -> &[String];
}

/// The value stored against an attribute of a [`Record`].
///
/// Numbers and booleans in a document are kept in their textual form, the
/// way they would be submitted by a browser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Value {
    /// A single value.
    One(String),
    /// Several values.
    Many(Vec<String>),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Integer(i64),
    Float(f64),
    Flag(bool),
}

impl From<Scalar> for String {
    fn from(scalar: Scalar) -> Self {
        match scalar {
            Scalar::Text(text) => text,
            Scalar::Integer(integer) => integer.to_string(),
            Scalar::Float(float) => float.to_string(),
            Scalar::Flag(flag) => flag.to_string(),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawValue {
    One(Scalar),
    Many(Vec<Scalar>),
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match RawValue::deserialize(deserializer)? {
            RawValue::One(scalar) => Self::One(scalar.into()),
            RawValue::Many(scalars) => Self::Many(scalars.into_iter().map(Into::into).collect()),
        })
    }
}

/// A plain, map backed [`FormObject`].
///
/// ```
/// use govuk_form_builder::{FormObject, Record};
///
/// let record = Record::new()
///     .with_value("name", "Ada")
///     .with_values("languages", ["english", "welsh"])
///     .with_error("email", "Enter an email address");
///
/// assert_eq!(record.value("name").as_deref(), Some("Ada"));
/// assert_eq!(record.values("languages"), vec!["english", "welsh"]);
/// assert_eq!(record.errors("email"), ["Enter an email address"]);
/// assert!(record.errors("name").is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    #[serde(default)]
    values: IndexMap<String, Value>,
    #[serde(default)]
    errors: IndexMap<String, Vec<String>>,
}

impl Record {
    /// Creates a record with no values and no errors.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a single value.
    #[must_use]
    pub fn with_value(mut self, attribute: impl Into<String>, value: impl Into<String>) -> Self {
        self.values
            .insert(attribute.into(), Value::One(value.into()));
        self
    }

    /// Sets a list of values.
    #[must_use]
    pub fn with_values<I>(mut self, attribute: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.values.insert(
            attribute.into(),
            Value::Many(values.into_iter().map(Into::into).collect()),
        );
        self
    }

    /// Appends an error message for an attribute.
    #[must_use]
    pub fn with_error(mut self, attribute: impl Into<String>, message: impl Into<String>) -> Self {
        self.errors
            .entry(attribute.into())
            .or_default()
            .push(message.into());
        self
    }
}

impl FormObject for Record {
    fn value(&self, attribute: &str) -> Option<String> {
        match self.values.get(attribute)? {
            Value::One(value) => Some(value.clone()),
            Value::Many(values) => values.first().cloned(),
        }
    }

    fn values(&self, attribute: &str) -> Vec<String> {
        match self.values.get(attribute) {
            Some(Value::One(value)) => vec![value.clone()],
            Some(Value::Many(values)) => values.clone(),
            None => Vec::new(),
        }
    }

    fn errors(&self, attribute: &str) -> &[String] {
        self.errors
            .get(attribute)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}
