use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{
    base::FieldBase, error_message::ErrorMessage, hint::Hint, label::Label,
    supplemental::Supplemental,
};
use crate::{
    classes::ClassList,
    containers::form_group::FormGroup,
    error::Error,
    html::{safe_join, Attributes, Element, Markup},
    options::{Callable, FieldConfig, Options},
    tokens::Width,
};

const ELEMENT: &str = "input";

/// The single-line input types the builder can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputKind {
    /// Free text.
    Text,
    /// An email address.
    Email,
    /// A telephone number.
    Phone,
    /// A web address.
    Url,
    /// A whole number.
    Number,
    /// A password; its current value is never rendered.
    Password,
}

impl InputKind {
    /// Every input kind.
    pub const ALL: [Self; 6] = [
        Self::Text,
        Self::Email,
        Self::Phone,
        Self::Url,
        Self::Number,
        Self::Password,
    ];

    /// The value of the input's `type` attribute.
    #[must_use]
    pub const fn input_type(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Email => "email",
            Self::Phone => "tel",
            Self::Url => "url",
            Self::Number => "number",
            Self::Password => "password",
        }
    }

    /// Attributes the kind sets unless the caller overrides them.
    fn default_attributes(self) -> Attributes {
        let mut attributes = Attributes::new();
        match self {
            Self::Email => attributes.set("spellcheck", "false"),
            Self::Phone => attributes.set("autocomplete", "tel"),
            Self::Number => attributes.set("inputmode", "numeric"),
            Self::Text | Self::Url | Self::Password => {}
        }
        attributes
    }
}

/// Configuration of a single-line input field.
///
/// ```
/// use govuk_form_builder::{FieldOptions, Options};
///
/// let options = FieldOptions::new()
///     .label(Options::new().with("text", "Postcode").with("size", "m"))
///     .hint(Options::new().with("text", "For example, SW1A 2AA"))
///     .input(Options::new().with("width", 10).with("autocomplete", "postal-code"));
/// # let _ = options;
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FieldOptions {
    /// The label configuration.
    #[serde(default)]
    pub label: FieldConfig,
    /// The hint configuration.
    #[serde(default)]
    pub hint: FieldConfig,
    /// Options for the input itself: `width`, `class` and any HTML
    /// attributes.
    #[serde(default)]
    pub input: Options,
    /// Extra content placed before the input.
    #[serde(skip)]
    pub supplemental: Option<Callable>,
}

impl FieldOptions {
    /// Options with every setting at its default.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the label configuration.
    #[must_use]
    pub fn label(mut self, label: impl Into<FieldConfig>) -> Self {
        self.label = label.into();
        self
    }

    /// Sets the hint configuration.
    #[must_use]
    pub fn hint(mut self, hint: impl Into<FieldConfig>) -> Self {
        self.hint = hint.into();
        self
    }

    /// Sets the input options.
    #[must_use]
    pub fn input(mut self, input: Options) -> Self {
        self.input = input;
        self
    }

    /// Sets the supplemental content.
    #[must_use]
    pub fn supplemental(mut self, render: impl Fn() -> Markup + 'static) -> Self {
        self.supplemental = Some(Callable::new(render));
        self
    }
}

/// A labelled single-line input inside a form group.
#[derive(Debug)]
pub(crate) struct Input<'a> {
    base: FieldBase<'a>,
    kind: InputKind,
    label: Label,
    hint: Hint,
    error: ErrorMessage,
    supplemental: Supplemental,
    width: Option<Width>,
    classes: ClassList,
    attributes: Attributes,
}

impl<'a> Input<'a> {
    pub(crate) fn new(
        base: FieldBase<'a>,
        kind: InputKind,
        options: FieldOptions,
    ) -> Result<Self, Error> {
        let label = Label::new(&base, options.label)?;
        let hint = Hint::new(&base, options.hint)?;
        let error = ErrorMessage::new(&base);
        let supplemental = Supplemental::new(&base, options.supplemental.as_ref());

        let mut input = options.input;
        let width = Width::optional(input.remove("width").as_ref())?;
        let classes = input.take_classes(ELEMENT)?;

        debug!(
            attribute = base.attribute_name,
            kind = kind.input_type(),
            "prepared input"
        );

        Ok(Self {
            base,
            kind,
            label,
            hint,
            error,
            supplemental,
            width,
            classes,
            attributes: input.into_attributes(ELEMENT)?,
        })
    }

    pub(crate) fn html(&self) -> Markup {
        let content = safe_join([
            self.label.html(self.base.brand()),
            self.hint.html(),
            self.error.html(),
            self.supplemental.html(),
            Some(self.input()),
        ]);

        FormGroup::new(self.base.brand(), self.base.has_errors()).html(content)
    }

    fn input(&self) -> Markup {
        let brand = self.base.brand();

        let mut classes = self.base.classes(["input"]);
        if self.base.has_errors() {
            classes.push(format!("{brand}-input--error"));
        }
        if let Some(width) = self.width {
            classes.push(format!("{brand}-{}", width.class_suffix()));
        }
        classes.extend(self.classes.iter());

        let value = match self.kind {
            InputKind::Password => None,
            _ => self.base.object.value(self.base.attribute_name),
        };

        let described_by = [self.hint.id(), self.error.id(), self.supplemental.id()]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>();

        let mut attributes = self.kind.default_attributes();
        attributes.merge(self.attributes.clone());

        Element::new("input")
            .classes(&classes)
            .attr("id", self.base.field_id())
            .attr("name", self.base.field_name())
            .attr("type", self.kind.input_type())
            .attr_opt("value", value)
            .attr_opt(
                "aria-describedby",
                (!described_by.is_empty()).then(|| described_by.join(" ")),
            )
            .attributes(&attributes)
            .render_empty()
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use crate::{
        testing::Fragment, FieldConfig, FieldOptions, FormBuilder, InputKind, Options, Record,
    };

    fn render(record: &Record, kind: InputKind, options: FieldOptions) -> Fragment {
        FormBuilder::new("person", record)
            .field(kind, "name", options)
            .map(Fragment::from)
            .unwrap()
    }

    #[test_case(InputKind::Text, "text")]
    #[test_case(InputKind::Email, "email")]
    #[test_case(InputKind::Phone, "tel")]
    #[test_case(InputKind::Url, "url")]
    #[test_case(InputKind::Number, "number")]
    #[test_case(InputKind::Password, "password")]
    fn renders_input_type(kind: InputKind, input_type: &str) {
        let html = render(&Record::new(), kind, FieldOptions::new());

        assert_eq!(html.attr("input", "type").as_deref(), Some(input_type));
        assert_eq!(html.attr("input", "id").as_deref(), Some("person-name-field"));
        assert_eq!(html.attr("input", "name").as_deref(), Some("person[name]"));
        assert_eq!(html.classes("input"), vec!["govuk-input"]);
        assert_eq!(html.classes("div"), vec!["govuk-form-group"]);
    }

    #[test]
    fn full_markup_of_a_plain_text_field() {
        let record = Record::new().with_value("name", "Ada");
        let html = FormBuilder::new("person", &record)
            .text_field("name", FieldOptions::new())
            .unwrap();

        assert_eq!(
            html.as_str(),
            concat!(
                r#"<div class="govuk-form-group">"#,
                r#"<label class="govuk-label" for="person-name-field">Name</label>"#,
                r#"<input class="govuk-input" id="person-name-field" name="person[name]" type="text" value="Ada">"#,
                "</div>"
            )
        );
    }

    #[test]
    fn renders_current_value_except_for_passwords() {
        let record = Record::new().with_value("name", "Ada <Lovelace>");

        let html = render(&record, InputKind::Text, FieldOptions::new());
        assert_eq!(html.attr("input", "value").as_deref(), Some("Ada <Lovelace>"));

        let html = render(&record, InputKind::Password, FieldOptions::new());
        assert_eq!(html.attr("input", "value"), None);
    }

    #[test]
    fn kind_specific_defaults_can_be_overridden() {
        let html = render(&Record::new(), InputKind::Email, FieldOptions::new());
        assert_eq!(html.attr("input", "spellcheck").as_deref(), Some("false"));

        let html = render(
            &Record::new(),
            InputKind::Phone,
            FieldOptions::new().input(Options::new().with("autocomplete", "off")),
        );
        assert_eq!(html.attr("input", "autocomplete").as_deref(), Some("off"));

        let html = render(&Record::new(), InputKind::Number, FieldOptions::new());
        assert_eq!(html.attr("input", "inputmode").as_deref(), Some("numeric"));
    }

    #[test]
    fn hint_error_and_supplemental_describe_the_input() {
        let record = Record::new().with_error("name", "Enter your name");
        let html = render(
            &record,
            InputKind::Text,
            FieldOptions::new()
                .hint(FieldConfig::text("Your full name"))
                .supplemental(|| crate::html::Markup::raw("<p>Why we ask</p>")),
        );

        assert_eq!(
            html.attr("input", "aria-describedby").as_deref(),
            Some("person-name-hint person-name-error person-name-supplemental")
        );
        assert_eq!(html.text(".govuk-hint"), "Your full name");
        assert_eq!(html.text(".govuk-error-message"), "Error: Enter your name");
        assert_eq!(html.text("#person-name-supplemental > p"), "Why we ask");
    }

    #[test]
    fn errors_mark_the_group_and_input() {
        let record = Record::new().with_error("name", "Enter your name");
        let html = render(&record, InputKind::Text, FieldOptions::new());

        assert_eq!(
            html.classes("div"),
            vec!["govuk-form-group", "govuk-form-group--error"]
        );
        assert_eq!(html.classes("input"), vec!["govuk-input", "govuk-input--error"]);
        assert_eq!(
            html.attr("input", "id").as_deref(),
            Some("person-name-field-error")
        );
        assert_eq!(
            html.attr("label", "for").as_deref(),
            Some("person-name-field-error")
        );
    }

    #[test]
    fn no_descriptors_means_no_aria_attribute() {
        let html = render(&Record::new(), InputKind::Text, FieldOptions::new());
        assert_eq!(html.attr("input", "aria-describedby"), None);
    }

    #[test_case(10, "govuk-input--width-10")]
    #[test_case(2, "govuk-input--width-2")]
    fn fixed_width(width: i64, class: &str) {
        let html = render(
            &Record::new(),
            InputKind::Text,
            FieldOptions::new().input(Options::new().with("width", width)),
        );
        assert_eq!(html.classes("input"), vec!["govuk-input", class]);
    }

    #[test]
    fn fluid_width() {
        let html = render(
            &Record::new(),
            InputKind::Text,
            FieldOptions::new().input(Options::new().with("width", "one-half")),
        );
        assert_eq!(html.classes("input"), vec!["govuk-input", "govuk-!-width-one-half"]);
    }

    #[test]
    fn invalid_width_is_rejected() {
        let record = Record::new();
        let error = FormBuilder::new("person", &record)
            .text_field(
                "name",
                FieldOptions::new().input(Options::new().with("width", "huge")),
            )
            .unwrap_err();
        assert!(error.to_string().starts_with("invalid width 'huge', must be 2, 3"));
    }

    #[test]
    fn input_classes_and_attributes_pass_through() {
        let html = render(
            &Record::new(),
            InputKind::Text,
            FieldOptions::new().input(
                Options::new()
                    .with("class", "app-input govuk-input")
                    .with("autocomplete", "name")
                    .with("disabled", true),
            ),
        );
        assert_eq!(html.classes("input"), vec!["govuk-input", "app-input"]);
        assert_eq!(html.attr("input", "autocomplete").as_deref(), Some("name"));
        assert_eq!(html.attr("input", "disabled").as_deref(), Some(""));
    }
}
