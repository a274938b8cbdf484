use crate::{
    classes::ClassList,
    html::{Element, Markup},
};

/// The `govuk-form-group` wrapper around a field.
#[derive(Debug, Clone)]
pub(crate) struct FormGroup {
    classes: ClassList,
}

impl FormGroup {
    pub(crate) fn new(brand: &str, has_errors: bool) -> Self {
        let mut classes = ClassList::prefixed(brand, ["form-group"]);
        if has_errors {
            classes.push(format!("{brand}-form-group--error"));
        }
        Self { classes }
    }

    pub(crate) fn html(&self, content: Markup) -> Markup {
        Element::new("div").classes(&self.classes).render(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_modifier_only_with_errors() {
        let html = FormGroup::new("govuk", false).html(Markup::empty());
        assert_eq!(html.as_str(), r#"<div class="govuk-form-group"></div>"#);

        let html = FormGroup::new("govuk", true).html(Markup::empty());
        assert_eq!(
            html.as_str(),
            r#"<div class="govuk-form-group govuk-form-group--error"></div>"#
        );
    }
}
