use super::base::FieldBase;
use crate::{
    html::{Element, Markup},
    options::Callable,
};

/// Extra caller markup placed before a field's control and referenced by it.
#[derive(Debug, Clone)]
pub(crate) struct Supplemental {
    content: Option<Markup>,
    id: String,
}

impl Supplemental {
    pub(crate) fn new(base: &FieldBase<'_>, content: Option<&Callable>) -> Self {
        Self {
            content: content.map(Callable::call).filter(|markup| !markup.is_empty()),
            id: base.supplemental_id(),
        }
    }

    pub(crate) fn html(&self) -> Option<Markup> {
        let content = self.content.clone()?;
        Some(Element::new("div").attr("id", &self.id).render(content))
    }

    pub(crate) fn id(&self) -> Option<String> {
        self.content.as_ref().map(|_| self.id.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::Config, Record};

    #[test]
    fn wraps_content_in_identified_div() {
        let config = Config::default();
        let record = Record::new();
        let base = FieldBase::new(&config, &record, "person", "name");
        let callable = Callable::new(|| Markup::raw("<p>More detail</p>"));

        let supplemental = Supplemental::new(&base, Some(&callable));

        assert_eq!(
            supplemental.html().unwrap().as_str(),
            r#"<div id="person-name-supplemental"><p>More detail</p></div>"#
        );
        assert_eq!(supplemental.id().as_deref(), Some("person-name-supplemental"));
    }

    #[test]
    fn empty_content_is_dropped() {
        let config = Config::default();
        let record = Record::new();
        let base = FieldBase::new(&config, &record, "person", "name");
        let callable = Callable::new(Markup::empty);

        let supplemental = Supplemental::new(&base, Some(&callable));
        assert!(supplemental.html().is_none());
        assert!(supplemental.id().is_none());

        assert!(Supplemental::new(&base, None).html().is_none());
    }
}
