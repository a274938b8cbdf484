use tracing::debug;

use super::base::FieldBase;
use crate::{
    classes::ClassList,
    error::Error,
    html::{Attributes, Element, Markup},
    options::{FieldConfig, Normalized, OptionValue, Options},
    tokens::Size,
};

const ELEMENT: &str = "label";

#[derive(Debug, Clone)]
enum Body {
    Text { text: String, hidden: bool },
    Rendered(Markup),
}

/// A `<label>` associated with a form control.
#[derive(Debug, Clone)]
pub(crate) struct Label {
    body: Option<Body>,
    tag: Option<String>,
    classes: ClassList,
    attributes: Attributes,
    field_id: String,
}

impl Label {
    /// The label of a single-control field, pointing at the field id.
    pub(crate) fn new(base: &FieldBase<'_>, config: FieldConfig) -> Result<Self, Error> {
        Self::build(
            base,
            config,
            base.humanized_attribute(),
            base.field_id(),
            &[],
        )
    }

    /// The label of one check box in a collection.
    pub(crate) fn for_check_box(
        base: &FieldBase<'_>,
        text: &str,
        field_id: String,
    ) -> Result<Self, Error> {
        Self::build(
            base,
            FieldConfig::Empty,
            text.to_string(),
            field_id,
            &["checkboxes__label"],
        )
    }

    fn build(
        base: &FieldBase<'_>,
        config: FieldConfig,
        default_text: String,
        field_id: String,
        modifiers: &[&str],
    ) -> Result<Self, Error> {
        let defaults = Options::new()
            .with("text", default_text)
            .with("tag", OptionValue::Null)
            .with("size", OptionValue::Null)
            .with("hidden", false);

        let mut classes = base.classes(["label"]);

        match config.normalize(ELEMENT, defaults)? {
            Normalized::Rendered(markup) => {
                debug!(attribute = base.attribute_name, "label rendered by callable");
                classes.extend(base.classes(modifiers).iter());
                Ok(Self {
                    body: Some(Body::Rendered(markup)),
                    tag: None,
                    classes,
                    attributes: Attributes::new(),
                    field_id,
                })
            }
            Normalized::Options(mut options) => {
                let text = options.take_text(ELEMENT, "text")?;
                let tag = options.take_tag(ELEMENT, "tag")?;
                let size = Size::optional(options.remove("size").as_ref())?;
                let hidden = options.take_flag(ELEMENT, "hidden")?;
                let extra_classes = options.take_classes(ELEMENT)?;

                if let Some(size) = size {
                    classes.push(format!("{}-label--{size}", base.brand()));
                }
                classes.extend(base.classes(modifiers).iter());
                classes.extend(extra_classes.iter());

                let body = text
                    .filter(|text| !text.trim().is_empty())
                    .map(|text| Body::Text { text, hidden });

                Ok(Self {
                    body,
                    tag,
                    classes,
                    attributes: options.into_attributes(ELEMENT)?,
                    field_id,
                })
            }
        }
    }

    /// Renders the label, or nothing when it has no text.
    pub(crate) fn html(&self, brand: &str) -> Option<Markup> {
        let content = match self.body.as_ref()? {
            Body::Text { text, hidden: true } => Element::new("span")
                .class(format!("{brand}-visually-hidden"))
                .render(Markup::text(text)),
            Body::Text { text, hidden: false } => Markup::text(text),
            Body::Rendered(markup) => markup.clone(),
        };

        let label = Element::new("label")
            .classes(&self.classes)
            .attr("for", &self.field_id)
            .attributes(&self.attributes)
            .render(content);

        Some(match &self.tag {
            Some(tag) => Element::new(tag)
                .class(format!("{brand}-label-wrapper"))
                .render(label),
            None => label,
        })
    }
}
