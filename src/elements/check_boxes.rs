//! Collections of check boxes sharing one attribute.

mod hint;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{
    base::FieldBase, error_message::ErrorMessage, hint::Hint as FieldHint, label::Label,
    supplemental::Supplemental,
};
use crate::{
    classes::ClassList,
    containers::{fieldset::Fieldset, form_group::FormGroup},
    error::Error,
    html::{safe_join, Element, Markup},
    options::{Callable, FieldConfig},
};

/// One choice in a check box collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckBoxOption {
    /// The submitted value.
    pub value: String,
    /// The visible label.
    pub label: String,
    /// Optional hint shown under the label.
    #[serde(default)]
    pub hint: Option<String>,
}

impl CheckBoxOption {
    /// Creates an option with no hint.
    #[must_use]
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            hint: None,
        }
    }

    /// Adds a hint.
    #[must_use]
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

/// Configuration of a check box collection.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CheckBoxesOptions {
    /// The fieldset legend.
    #[serde(default)]
    pub legend: FieldConfig,
    /// Hint for the whole collection.
    #[serde(default)]
    pub hint: FieldConfig,
    /// Render the smaller check box variant.
    #[serde(default)]
    pub small: bool,
    /// Extra content placed before the check boxes.
    #[serde(skip)]
    pub supplemental: Option<Callable>,
}

impl CheckBoxesOptions {
    /// Options with every setting at its default.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the legend configuration.
    #[must_use]
    pub fn legend(mut self, legend: impl Into<FieldConfig>) -> Self {
        self.legend = legend.into();
        self
    }

    /// Sets the hint configuration.
    #[must_use]
    pub fn hint(mut self, hint: impl Into<FieldConfig>) -> Self {
        self.hint = hint.into();
        self
    }

    /// Selects the smaller check box variant.
    #[must_use]
    pub const fn small(mut self, small: bool) -> Self {
        self.small = small;
        self
    }

    /// Sets the supplemental content.
    #[must_use]
    pub fn supplemental(mut self, render: impl Fn() -> Markup + 'static) -> Self {
        self.supplemental = Some(Callable::new(render));
        self
    }
}

#[derive(Debug)]
struct Item {
    id: String,
    value: String,
    checked: bool,
    label: Label,
    hint: hint::Hint,
}

/// A fieldset of check boxes for a multi-valued attribute.
#[derive(Debug)]
pub(crate) struct CheckBoxes<'a> {
    base: FieldBase<'a>,
    fieldset: Fieldset,
    hint: FieldHint,
    error: ErrorMessage,
    supplemental: Supplemental,
    items: Vec<Item>,
    small: bool,
}

impl<'a> CheckBoxes<'a> {
    pub(crate) fn new(
        base: FieldBase<'a>,
        options: CheckBoxesOptions,
        choices: &[CheckBoxOption],
    ) -> Result<Self, Error> {
        let hint = FieldHint::new(&base, options.hint)?;
        let error = ErrorMessage::new(&base);
        let supplemental = Supplemental::new(&base, options.supplemental.as_ref());

        let described_by = [hint.id(), error.id(), supplemental.id()];
        let fieldset = Fieldset::new(
            base.config,
            options.legend,
            described_by.into_iter().flatten(),
        )?;

        let selected = base.object.values(base.attribute_name);
        let items = choices
            .iter()
            .enumerate()
            .map(|(index, choice)| {
                // the first box takes the field id so error summaries can link to it
                let id = if index == 0 && base.has_errors() {
                    base.field_id()
                } else {
                    base.build_id(&[choice.value.as_str(), "field"])
                };
                Ok(Item {
                    label: Label::for_check_box(&base, &choice.label, id.clone())?,
                    hint: hint::Hint::new(&base, choice.hint.as_deref(), &choice.value),
                    checked: selected.contains(&choice.value),
                    value: choice.value.clone(),
                    id,
                })
            })
            .collect::<Result<Vec<_>, Error>>()?;

        debug!(
            attribute = base.attribute_name,
            items = items.len(),
            "prepared check boxes"
        );

        Ok(Self {
            base,
            fieldset,
            hint,
            error,
            supplemental,
            items,
            small: options.small,
        })
    }

    pub(crate) fn html(&self) -> Markup {
        let content = safe_join([
            self.hint.html(),
            self.error.html(),
            self.supplemental.html(),
            Some(self.check_boxes()),
        ]);

        FormGroup::new(self.base.brand(), self.base.has_errors()).html(self.fieldset.html(content))
    }

    fn name(&self) -> String {
        format!("{}[]", self.base.field_name())
    }

    fn check_boxes(&self) -> Markup {
        let mut classes = self.base.classes(["checkboxes"]);
        if self.small {
            classes.push(format!("{}-checkboxes--small", self.base.brand()));
        }

        // an empty value keeps the attribute in the submission when nothing is ticked
        let empty = Element::new("input")
            .attr("type", "hidden")
            .attr("name", self.name())
            .attr("value", "")
            .render_empty();

        let items = self.items.iter().map(|item| Some(self.item(item)));

        Element::new("div")
            .classes(&classes)
            .attr("data-module", format!("{}-checkboxes", self.base.brand()))
            .render(safe_join(std::iter::once(Some(empty)).chain(items)))
    }

    fn item(&self, item: &Item) -> Markup {
        let brand = self.base.brand();

        let input = Element::new("input")
            .classes(&ClassList::prefixed(brand, ["checkboxes__input"]))
            .attr("id", &item.id)
            .attr("name", self.name())
            .attr("type", "checkbox")
            .attr("value", &item.value)
            .attr("checked", item.checked)
            .attr_opt("aria-describedby", item.hint.id())
            .render_empty();

        Element::new("div")
            .classes(&ClassList::prefixed(brand, ["checkboxes__item"]))
            .render(safe_join([
                Some(input),
                item.label.html(brand),
                item.hint.html(),
            ]))
    }
}
