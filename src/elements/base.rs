use std::fmt;

use crate::{classes::ClassList, config::Config, object::FormObject};

/// What every element knows about the field it belongs to.
#[derive(Clone, Copy)]
pub(crate) struct FieldBase<'a> {
    pub(crate) config: &'a Config,
    pub(crate) object: &'a dyn FormObject,
    pub(crate) object_name: &'a str,
    pub(crate) attribute_name: &'a str,
}

impl<'a> FieldBase<'a> {
    pub(crate) const fn new(
        config: &'a Config,
        object: &'a dyn FormObject,
        object_name: &'a str,
        attribute_name: &'a str,
    ) -> Self {
        Self {
            config,
            object,
            object_name,
            attribute_name,
        }
    }

    pub(crate) fn brand(&self) -> &'a str {
        self.config.brand()
    }

    /// Design system classes for this builder's brand.
    pub(crate) fn classes<I>(&self, suffixes: I) -> ClassList
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        ClassList::prefixed(self.brand(), suffixes)
    }

    pub(crate) fn errors(&self) -> &'a [String] {
        self.object.errors(self.attribute_name)
    }

    pub(crate) fn has_errors(&self) -> bool {
        !self.errors().is_empty()
    }

    /// The id of the form control.
    ///
    /// When the attribute has errors the id gains an `-error` suffix so the
    /// error summary can link straight to it.
    pub(crate) fn field_id(&self) -> String {
        if self.has_errors() {
            self.build_id(&["field-error"])
        } else {
            self.build_id(&["field"])
        }
    }

    pub(crate) fn hint_id(&self) -> String {
        self.build_id(&["hint"])
    }

    pub(crate) fn error_id(&self) -> String {
        self.build_id(&["error"])
    }

    pub(crate) fn supplemental_id(&self) -> String {
        self.build_id(&["supplemental"])
    }

    /// The `name` of the form control, e.g. `person[name]`.
    pub(crate) fn field_name(&self) -> String {
        format!("{}[{}]", self.object_name, self.attribute_name)
    }

    /// An id made of the object name, attribute name and `suffixes`.
    pub(crate) fn build_id(&self, suffixes: &[&str]) -> String {
        let mut parts = vec![self.object_name, self.attribute_name];
        parts.extend_from_slice(suffixes);
        build_id(&parts)
    }

    /// The attribute name as a sentence, e.g. `date_of_birth` becomes
    /// `Date of birth`.
    pub(crate) fn humanized_attribute(&self) -> String {
        humanize(self.attribute_name)
    }
}

impl fmt::Debug for FieldBase<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("FieldBase")
            .field("object_name", &self.object_name)
            .field("attribute_name", &self.attribute_name)
            .finish_non_exhaustive()
    }
}

/// Joins id parts into a lowercase, dash separated identifier.
///
/// Runs of characters that are not valid in an id collapse into a single
/// dash, and underscores become dashes, so `person[address]` and
/// `postal_code` give `person-address-postal-code`.
pub(crate) fn build_id(parts: &[&str]) -> String {
    let mut id = String::new();
    for part in parts.iter().filter(|part| !part.is_empty()) {
        if !id.is_empty() {
            id.push('-');
        }
        id.push_str(part);
    }

    let mut out = String::with_capacity(id.len());
    for c in id.chars() {
        let c = if c.is_ascii_alphanumeric() {
            c.to_ascii_lowercase()
        } else {
            '-'
        };
        if c == '-' && (out.is_empty() || out.ends_with('-')) {
            continue;
        }
        out.push(c);
    }
    while out.ends_with('-') {
        out.pop();
    }
    out
}

fn humanize(attribute: &str) -> String {
    let words = attribute
        .trim_end_matches("_id")
        .split('_')
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase();

    let mut chars = words.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}
