//! The entry point for rendering form fields.

use std::fmt;

use tracing::instrument;

use crate::{
    config::Config,
    containers::fieldset::Fieldset,
    elements::{
        base::FieldBase,
        check_boxes::{CheckBoxOption, CheckBoxes, CheckBoxesOptions},
        input::{FieldOptions, Input, InputKind},
    },
    error::Error,
    html::Markup,
    object::FormObject,
    options::FieldConfig,
};

/// Renders GOV.UK Design System form fields for one object.
///
/// ```
/// use govuk_form_builder::{FieldOptions, FormBuilder, Options, Record};
///
/// let person = Record::new().with_value("name", "Ada");
/// let builder = FormBuilder::new("person", &person);
///
/// let html = builder
///     .text_field(
///         "name",
///         FieldOptions::new().label(Options::new().with("text", "Full name").with("size", "l")),
///     )
///     .unwrap();
///
/// assert!(html.as_str().contains(r#"<label class="govuk-label govuk-label--l""#));
/// assert!(html.as_str().contains(r#"value="Ada""#));
/// ```
pub struct FormBuilder<'a> {
    object_name: String,
    object: &'a dyn FormObject,
    config: Config,
}

impl<'a> FormBuilder<'a> {
    /// Creates a builder with the default configuration.
    ///
    /// The object name prefixes every field name and id, e.g. `person`
    /// gives `person[name]` and `person-name-field`.
    pub fn new(object_name: impl Into<String>, object: &'a dyn FormObject) -> Self {
        Self {
            object_name: object_name.into(),
            object,
            config: Config::default(),
        }
    }

    /// Replaces the configuration.
    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// The builder's configuration.
    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// The name of the object the form is for.
    #[must_use]
    pub fn object_name(&self) -> &str {
        &self.object_name
    }

    fn base<'b>(&'b self, attribute: &'b str) -> FieldBase<'b> {
        FieldBase::new(&self.config, self.object, &self.object_name, attribute)
    }

    /// Renders a labelled input of the given kind.
    ///
    /// # Errors
    ///
    /// Fails if the label, hint or input options are invalid: a label or hint
    /// that is neither an options map nor a callable, an unknown size or
    /// width, or an option of the wrong type.
    #[instrument(level = "debug", skip(self, options), fields(object = %self.object_name))]
    pub fn field(
        &self,
        kind: InputKind,
        attribute: &str,
        options: FieldOptions,
    ) -> Result<Markup, Error> {
        Ok(Input::new(self.base(attribute), kind, options)?.html())
    }

    /// Renders a text input.
    ///
    /// # Errors
    ///
    /// See [`FormBuilder::field`].
    pub fn text_field(&self, attribute: &str, options: FieldOptions) -> Result<Markup, Error> {
        self.field(InputKind::Text, attribute, options)
    }

    /// Renders an email input.
    ///
    /// # Errors
    ///
    /// See [`FormBuilder::field`].
    pub fn email_field(&self, attribute: &str, options: FieldOptions) -> Result<Markup, Error> {
        self.field(InputKind::Email, attribute, options)
    }

    /// Renders a telephone number input.
    ///
    /// # Errors
    ///
    /// See [`FormBuilder::field`].
    pub fn phone_field(&self, attribute: &str, options: FieldOptions) -> Result<Markup, Error> {
        self.field(InputKind::Phone, attribute, options)
    }

    /// Renders a web address input.
    ///
    /// # Errors
    ///
    /// See [`FormBuilder::field`].
    pub fn url_field(&self, attribute: &str, options: FieldOptions) -> Result<Markup, Error> {
        self.field(InputKind::Url, attribute, options)
    }

    /// Renders a number input.
    ///
    /// # Errors
    ///
    /// See [`FormBuilder::field`].
    pub fn number_field(&self, attribute: &str, options: FieldOptions) -> Result<Markup, Error> {
        self.field(InputKind::Number, attribute, options)
    }

    /// Renders a password input.
    ///
    /// # Errors
    ///
    /// See [`FormBuilder::field`].
    pub fn password_field(&self, attribute: &str, options: FieldOptions) -> Result<Markup, Error> {
        self.field(InputKind::Password, attribute, options)
    }

    /// Renders a fieldset of check boxes for a multi-valued attribute.
    ///
    /// Boxes whose value is among the object's current values are checked.
    ///
    /// # Errors
    ///
    /// Fails if the legend or hint configuration is invalid.
    #[instrument(
        level = "debug",
        skip(self, choices, options),
        fields(object = %self.object_name, choices = choices.len())
    )]
    pub fn check_boxes_fieldset(
        &self,
        attribute: &str,
        choices: &[CheckBoxOption],
        options: CheckBoxesOptions,
    ) -> Result<Markup, Error> {
        Ok(CheckBoxes::new(self.base(attribute), options, choices)?.html())
    }

    /// Wraps the markup produced by `content` in a fieldset.
    ///
    /// `described_by` lists the ids of elements describing the group; blank
    /// ids are ignored.
    ///
    /// # Errors
    ///
    /// Fails if the legend configuration is invalid, or with whatever error
    /// `content` returns.
    #[instrument(level = "debug", skip_all, fields(object = %self.object_name))]
    pub fn fieldset<F>(
        &self,
        legend: impl Into<FieldConfig>,
        described_by: &[&str],
        content: F,
    ) -> Result<Markup, Error>
    where
        F: FnOnce(&Self) -> Result<Markup, Error>,
    {
        let fieldset = Fieldset::new(&self.config, legend.into(), described_by)?;
        Ok(fieldset.html(content(self)?))
    }
}

impl fmt::Debug for FormBuilder<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("FormBuilder")
            .field("object_name", &self.object_name)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
