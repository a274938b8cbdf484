use tracing::debug;

use crate::{
    classes::ClassList,
    config::Config,
    error::Error,
    html::{safe_join, Attributes, Element, Markup},
    options::{FieldConfig, Normalized, OptionValue, Options},
    tokens::Size,
};

const ELEMENT: &str = "legend";

#[derive(Debug, Clone)]
enum Legend {
    Absent,
    Text {
        text: String,
        tag: Option<String>,
        size: Size,
        hidden: bool,
        classes: ClassList,
        attributes: Attributes,
    },
    Rendered(Markup),
}

/// A `<fieldset>` grouping related controls under a legend.
#[derive(Debug, Clone)]
pub(crate) struct Fieldset {
    legend: Legend,
    described_by: Option<String>,
    brand: String,
}

impl Fieldset {
    /// Prepares a fieldset.
    ///
    /// `described_by` lists the ids of hints, errors and other content that
    /// describe the group; blank entries are dropped.
    pub(crate) fn new<I>(
        config: &Config,
        legend: FieldConfig,
        described_by: I,
    ) -> Result<Self, Error>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let defaults = Options::new()
            .with("text", OptionValue::Null)
            .with("tag", config.default_legend_tag())
            .with("size", config.default_legend_size().as_str());

        let legend = match legend.normalize(ELEMENT, defaults)? {
            Normalized::Rendered(markup) if markup.is_empty() => Legend::Absent,
            Normalized::Rendered(markup) => Legend::Rendered(markup),
            Normalized::Options(mut options) => {
                let text = options.take_text(ELEMENT, "text")?;

                // the remaining options only apply to a legend that is rendered
                match text.filter(|text| !text.trim().is_empty()) {
                    Some(text) => Legend::Text {
                        text,
                        tag: options.take_tag(ELEMENT, "tag")?,
                        size: Size::required(options.remove("size").as_ref())?,
                        hidden: options.take_flag(ELEMENT, "hidden")?,
                        classes: options.take_classes(ELEMENT)?,
                        attributes: options.into_attributes(ELEMENT)?,
                    },
                    None => Legend::Absent,
                }
            }
        };

        Ok(Self {
            legend,
            described_by: descriptors(described_by),
            brand: config.brand().to_string(),
        })
    }

    /// Wraps `content` in the fieldset, after the legend.
    pub(crate) fn html(&self, content: Markup) -> Markup {
        debug!(legend = !matches!(self.legend, Legend::Absent), "rendering fieldset");

        Element::new("fieldset")
            .classes(&ClassList::prefixed(&self.brand, ["fieldset"]))
            .attr_opt("aria-describedby", self.described_by.as_deref())
            .render(safe_join([self.legend(), Some(content)]))
    }

    fn legend(&self) -> Option<Markup> {
        let brand = &self.brand;
        match &self.legend {
            Legend::Absent => None,
            Legend::Rendered(markup) => Some(
                Element::new("legend")
                    .class(format!("{brand}-fieldset__legend"))
                    .render(markup.clone()),
            ),
            Legend::Text {
                text,
                tag,
                size,
                hidden,
                classes,
                attributes,
            } => {
                let mut legend_classes = ClassList::prefixed(
                    brand,
                    ["fieldset__legend".to_string(), format!("fieldset__legend--{size}")],
                );
                if *hidden {
                    legend_classes.push(format!("{brand}-visually-hidden"));
                }
                legend_classes.extend(classes.iter());

                let content = match tag {
                    Some(tag) => Element::new(tag)
                        .class(format!("{brand}-fieldset__heading"))
                        .render(Markup::text(text)),
                    None => Markup::text(text),
                };

                Some(
                    Element::new("legend")
                        .classes(&legend_classes)
                        .attributes(attributes)
                        .render(content),
                )
            }
        }
    }
}

fn descriptors<I>(described_by: I) -> Option<String>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let ids: Vec<String> = described_by
        .into_iter()
        .map(|id| id.as_ref().trim().to_string())
        .filter(|id| !id.is_empty())
        .collect();

    (!ids.is_empty()).then(|| ids.join(" "))
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;
    use crate::testing::Fragment;

    const NO_IDS: [&str; 0] = [];

    fn fieldset(legend: FieldConfig) -> Result<Fragment, Error> {
        Fieldset::new(&Config::default(), legend, NO_IDS)
            .map(|fieldset| Fragment::from(fieldset.html(Markup::raw("<p>Children</p>"))))
    }

    #[test]
    fn wraps_children() {
        let html = fieldset(FieldConfig::Empty).unwrap();
        assert_eq!(html.classes("fieldset"), vec!["govuk-fieldset"]);
        assert_eq!(html.text("fieldset > p"), "Children");
    }

    #[test]
    fn legend_is_omitted_without_text() {
        let html = fieldset(FieldConfig::Empty).unwrap();
        assert_eq!(html.count("legend"), 0);

        let html = fieldset(FieldConfig::text("")).unwrap();
        assert_eq!(html.count("legend"), 0);
    }

    #[test]
    fn legend_uses_defaults() {
        let html = fieldset(FieldConfig::text("What is your address?")).unwrap();

        assert_eq!(
            html.classes("fieldset > legend"),
            vec!["govuk-fieldset__legend", "govuk-fieldset__legend--xl"]
        );
        assert_eq!(html.classes("legend > h1"), vec!["govuk-fieldset__heading"]);
        assert_eq!(html.text("legend > h1"), "What is your address?");
    }

    #[test]
    fn legend_comes_before_children() {
        let fieldset = Fieldset::new(&Config::default(), FieldConfig::text("Address"), NO_IDS)
            .unwrap()
            .html(Markup::raw("<p>Children</p>"));
        assert_eq!(
            fieldset.as_str(),
            concat!(
                r#"<fieldset class="govuk-fieldset">"#,
                r#"<legend class="govuk-fieldset__legend govuk-fieldset__legend--xl">"#,
                r#"<h1 class="govuk-fieldset__heading">Address</h1></legend>"#,
                "<p>Children</p></fieldset>"
            )
        );
    }

    #[test_case("xl")]
    #[test_case("l")]
    #[test_case("m")]
    #[test_case("s")]
    fn legend_size_adds_exactly_one_size_class(size: &str) {
        let legend = Options::new().with("text", "Legend").with("size", size);
        let html = fieldset(legend.into()).unwrap();
        let sizes: Vec<String> = html
            .classes("legend")
            .into_iter()
            .filter(|class| class.starts_with("govuk-fieldset__legend--"))
            .collect();
        assert_eq!(sizes, vec![format!("govuk-fieldset__legend--{size}")]);
    }

    #[test]
    fn invalid_legend_size_is_rejected() {
        let error = fieldset(Options::new().with("text", "Legend").with("size", "xxl").into())
            .unwrap_err();
        assert_eq!(error.to_string(), "invalid size 'xxl', must be xl, l, m or s");
    }

    #[test]
    fn textless_legend_ignores_its_size() {
        let html = fieldset(Options::new().with("size", "huge").into()).unwrap();
        assert_eq!(html.count("legend"), 0);
        assert_eq!(html.text("fieldset > p"), "Children");
    }

    #[test]
    fn legend_tag_can_be_overridden_or_removed() {
        let legend = Options::new().with("text", "Legend");

        let html = fieldset(legend.clone().with("tag", "h2").into()).unwrap();
        assert_eq!(html.text("legend > h2"), "Legend");

        let html = fieldset(legend.with("tag", "").into()).unwrap();
        assert_eq!(html.count("legend > *"), 0);
        assert_eq!(html.text("legend"), "Legend");
    }

    #[test]
    fn hidden_legend_is_visually_hidden() {
        let legend = Options::new().with("text", "Legend").with("hidden", true);
        let html = fieldset(legend.into()).unwrap();
        assert!(
            html.classes("legend")
                .contains(&"govuk-visually-hidden".to_string())
        );
    }

    #[test]
    fn legend_attributes_and_classes_pass_through() {
        let html = fieldset(
            Options::new()
                .with("text", "Legend")
                .with("class", "app-legend")
                .with("dir", "rtl")
                .into(),
        )
        .unwrap();
        assert!(html.classes("legend").contains(&"app-legend".to_string()));
        assert_eq!(html.attr("legend", "dir").as_deref(), Some("rtl"));
    }

    #[test]
    fn callable_legend() {
        let html = fieldset(FieldConfig::callable(|| {
            Markup::raw(r#"<span class="govuk-caption-l">Step 1</span>"#)
        }))
        .unwrap();
        assert_eq!(html.classes("legend"), vec!["govuk-fieldset__legend"]);
        assert_eq!(html.text("legend > span"), "Step 1");
    }

    #[test]
    fn empty_callable_legend_renders_no_legend() {
        let html = fieldset(FieldConfig::callable(Markup::empty)).unwrap();
        assert_eq!(html.count("legend"), 0);
    }

    #[test]
    fn described_by_filters_blank_ids() {
        let fieldset = Fieldset::new(
            &Config::default(),
            FieldConfig::Empty,
            ["person-address-hint", "", "  ", "person-address-error"],
        )
        .unwrap();
        let html = Fragment::from(fieldset.html(Markup::empty()));
        assert_eq!(
            html.attr("fieldset", "aria-describedby").as_deref(),
            Some("person-address-hint person-address-error")
        );
    }

    #[test]
    fn described_by_is_omitted_when_empty() {
        let fieldset = Fieldset::new(&Config::default(), FieldConfig::Empty, ["", ""]).unwrap();
        let html = Fragment::from(fieldset.html(Markup::empty()));
        assert_eq!(html.attr("fieldset", "aria-describedby"), None);
    }

    #[test]
    fn configured_defaults_apply() {
        let config = Config::default()
            .with_default_legend_tag("h2")
            .with_default_legend_size(Size::M);
        let fieldset = Fieldset::new(&config, FieldConfig::text("Legend"), NO_IDS).unwrap();
        let html = Fragment::from(fieldset.html(Markup::empty()));
        assert!(
            html.classes("legend")
                .contains(&"govuk-fieldset__legend--m".to_string())
        );
        assert_eq!(html.text("legend > h2"), "Legend");
    }
}
