use crate::{
    elements::base::FieldBase,
    html::{Element, Markup},
};

/// Hint text for a single check box in a collection.
#[derive(Debug, Clone)]
pub(crate) struct Hint {
    text: Option<String>,
    classes: crate::ClassList,
    id: String,
}

impl Hint {
    pub(crate) fn new(base: &FieldBase<'_>, hint_text: Option<&str>, value: &str) -> Self {
        Self {
            text: hint_text
                .filter(|text| !text.trim().is_empty())
                .map(str::to_string),
            classes: base.classes(["hint", "checkboxes__hint"]),
            id: base.build_id(&[value, "hint"]),
        }
    }

    pub(crate) fn html(&self) -> Option<Markup> {
        let text = self.text.as_deref()?;
        Some(
            Element::new("span")
                .classes(&self.classes)
                .attr("id", &self.id)
                .render(Markup::text(text)),
        )
    }

    pub(crate) fn id(&self) -> Option<String> {
        self.text.as_ref().map(|_| self.id.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Config, Record};

    #[test]
    fn blank_hint_renders_nothing() {
        let config = Config::default();
        let record = Record::new();
        let base = FieldBase::new(&config, &record, "person", "languages");

        assert!(Hint::new(&base, None, "welsh").html().is_none());
        assert!(Hint::new(&base, Some(""), "welsh").html().is_none());
        assert!(Hint::new(&base, Some(""), "welsh").id().is_none());
    }

    #[test]
    fn renders_branded_classes_and_value_id() {
        let config = Config::default().with_brand("app");
        let record = Record::new();
        let base = FieldBase::new(&config, &record, "person", "languages");
        let hint = Hint::new(&base, Some("Cymraeg"), "welsh");

        assert_eq!(
            hint.html().unwrap().as_str(),
            r#"<span class="app-hint app-checkboxes__hint" id="person-languages-welsh-hint">Cymraeg</span>"#
        );
        assert_eq!(hint.id().as_deref(), Some("person-languages-welsh-hint"));
    }
}
