use super::base::FieldBase;
use crate::html::{safe_join, Element, Markup};

/// The first validation error of an attribute.
#[derive(Debug, Clone)]
pub(crate) struct ErrorMessage {
    message: Option<String>,
    prefix: String,
    brand: String,
    id: String,
}

impl ErrorMessage {
    pub(crate) fn new(base: &FieldBase<'_>) -> Self {
        Self {
            message: base.errors().first().cloned(),
            prefix: base.config.default_error_prefix().to_string(),
            brand: base.brand().to_string(),
            id: base.error_id(),
        }
    }

    pub(crate) fn html(&self) -> Option<Markup> {
        let message = self.message.as_deref()?;

        let prefix = (!self.prefix.is_empty()).then(|| {
            Element::new("span")
                .class(format!("{}-visually-hidden", self.brand))
                .render(Markup::text(&format!("{}: ", self.prefix)))
        });

        Some(
            Element::new("span")
                .class(format!("{}-error-message", self.brand))
                .attr("id", &self.id)
                .render(safe_join([prefix, Some(Markup::text(message))])),
        )
    }

    pub(crate) fn id(&self) -> Option<String> {
        self.message.as_ref().map(|_| self.id.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::Config, Record};

    #[test]
    fn no_errors_renders_nothing() {
        let config = Config::default();
        let record = Record::new();
        let error = ErrorMessage::new(&FieldBase::new(&config, &record, "person", "name"));

        assert!(error.html().is_none());
        assert!(error.id().is_none());
    }

    #[test]
    fn renders_first_message_with_hidden_prefix() {
        let config = Config::default();
        let record = Record::new()
            .with_error("name", "Enter your full name")
            .with_error("name", "Name must be 50 characters or fewer");
        let error = ErrorMessage::new(&FieldBase::new(&config, &record, "person", "name"));

        assert_eq!(
            error.html().unwrap().as_str(),
            concat!(
                r#"<span class="govuk-error-message" id="person-name-error">"#,
                r#"<span class="govuk-visually-hidden">Error: </span>Enter your full name</span>"#
            )
        );
        assert_eq!(error.id().as_deref(), Some("person-name-error"));
    }

    #[test]
    fn empty_prefix_is_omitted() {
        let config = Config::default().with_default_error_prefix("");
        let record = Record::new().with_error("name", "Enter your full name");
        let error = ErrorMessage::new(&FieldBase::new(&config, &record, "person", "name"));

        assert_eq!(
            error.html().unwrap().as_str(),
            r#"<span class="govuk-error-message" id="person-name-error">Enter your full name</span>"#
        );
    }
}
