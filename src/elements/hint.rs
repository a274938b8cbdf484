use super::base::FieldBase;
use crate::{
    classes::ClassList,
    error::Error,
    html::{Attributes, Element, Markup},
    options::{FieldConfig, Normalized, OptionValue, Options},
    tokens::Size,
};

const ELEMENT: &str = "hint";

/// Supporting text shown between a field's label and its control.
#[derive(Debug, Clone)]
pub(crate) struct Hint {
    content: Option<Markup>,
    classes: ClassList,
    attributes: Attributes,
    id: String,
}

impl Hint {
    pub(crate) fn new(base: &FieldBase<'_>, config: FieldConfig) -> Result<Self, Error> {
        let mut classes = base.classes(["hint"]);
        let defaults = Options::new()
            .with("text", OptionValue::Null)
            .with("size", OptionValue::Null);

        let (content, attributes) = match config.normalize(ELEMENT, defaults)? {
            Normalized::Rendered(markup) => {
                (Some(markup).filter(|m| !m.is_empty()), Attributes::new())
            }
            Normalized::Options(mut options) => {
                let text = options.take_text(ELEMENT, "text")?;
                if let Some(size) = Size::optional(options.remove("size").as_ref())? {
                    classes.push(format!("{}-hint--{size}", base.brand()));
                }
                classes.extend(options.take_classes(ELEMENT)?.iter());
                let content = text
                    .filter(|text| !text.trim().is_empty())
                    .map(|text| Markup::text(&text));
                (content, options.into_attributes(ELEMENT)?)
            }
        };

        Ok(Self {
            content,
            classes,
            attributes,
            id: base.hint_id(),
        })
    }

    pub(crate) fn html(&self) -> Option<Markup> {
        let content = self.content.clone()?;
        Some(
            Element::new("span")
                .classes(&self.classes)
                .attr("id", &self.id)
                .attributes(&self.attributes)
                .render(content),
        )
    }

    /// The id other elements use to reference the hint; `None` when no hint
    /// is rendered.
    pub(crate) fn id(&self) -> Option<String> {
        self.content.as_ref().map(|_| self.id.clone())
    }
}
