//! Form documents: whole forms described in YAML, TOML or JSON.
//!
//! A document names the object, supplies its values and errors, and lists
//! the fields to render:
//!
//! ```yaml
//! object_name: person
//! object:
//!   values:
//!     name: Ada
//!   errors:
//!     email: [Enter an email address]
//! fields:
//!   - type: text_field
//!     attribute: name
//!     label: { text: Full name, size: l }
//!   - type: email_field
//!     attribute: email
//!     hint: { text: We will only use this to send you a receipt }
//! ```

use std::{
    ffi::OsStr,
    io,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use tracing::{debug, instrument};

use crate::{
    builder::FormBuilder,
    config::Config,
    elements::{CheckBoxOption, CheckBoxesOptions, FieldOptions, InputKind},
    error::Error,
    html::{safe_join, Element, Markup},
    object::Record,
    options::{FieldConfig, Options},
};

/// A form described as data.
#[derive(Debug, Clone, Deserialize)]
pub struct FormDocument {
    /// Prefix of every field name and id.
    pub object_name: String,
    /// Current values and validation errors.
    #[serde(default)]
    pub object: Record,
    /// When set, the fields are wrapped in a `<form>` posting here.
    #[serde(default)]
    pub action: Option<String>,
    /// The fields, in order.
    #[serde(default)]
    pub fields: Vec<FieldSpec>,
}

/// One entry in a document's field list.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FieldSpec {
    /// A text input.
    TextField(InputSpec),
    /// An email input.
    EmailField(InputSpec),
    /// A telephone number input.
    PhoneField(InputSpec),
    /// A web address input.
    UrlField(InputSpec),
    /// A number input.
    NumberField(InputSpec),
    /// A password input.
    PasswordField(InputSpec),
    /// A collection of check boxes.
    CheckBoxes(CheckBoxesSpec),
    /// A fieldset grouping nested fields.
    Fieldset(FieldsetSpec),
}

/// A single-line input entry.
#[derive(Debug, Clone, Deserialize)]
pub struct InputSpec {
    /// The attribute the input edits.
    pub attribute: String,
    /// The label configuration.
    #[serde(default)]
    pub label: FieldConfig,
    /// The hint configuration.
    #[serde(default)]
    pub hint: FieldConfig,
    /// Input options: `width`, `class` and HTML attributes.
    #[serde(default)]
    pub input: Options,
}

/// A check box collection entry.
#[derive(Debug, Clone, Deserialize)]
pub struct CheckBoxesSpec {
    /// The multi-valued attribute.
    pub attribute: String,
    /// The fieldset legend.
    #[serde(default)]
    pub legend: FieldConfig,
    /// Hint for the whole collection.
    #[serde(default)]
    pub hint: FieldConfig,
    /// Render the smaller variant.
    #[serde(default)]
    pub small: bool,
    /// The choices.
    pub options: Vec<CheckBoxOption>,
}

/// A fieldset entry.
#[derive(Debug, Clone, Deserialize)]
pub struct FieldsetSpec {
    /// The legend configuration.
    #[serde(default)]
    pub legend: FieldConfig,
    /// Ids of elements describing the group.
    #[serde(default)]
    pub described_by: Vec<String>,
    /// Nested fields.
    #[serde(default)]
    pub fields: Vec<FieldSpec>,
}

/// Errors that can occur while loading a [`FormDocument`].
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    /// The file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// The document path.
        path: PathBuf,
        /// The underlying error.
        source: io::Error,
    },

    /// The content is not a valid form document.
    #[error("failed to parse form document: {0}")]
    Parse(#[from] ParseError),

    /// The file is not a valid form document.
    #[error("failed to parse {path}: {source}")]
    ParseFile {
        /// The document path.
        path: PathBuf,
        /// The underlying error.
        source: ParseError,
    },

    /// The file extension is not one of `yaml`, `yml`, `toml` or `json`.
    #[error("unsupported document format: {0}")]
    UnsupportedFormat(PathBuf),
}

/// A document that does not deserialise in its format.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// Invalid YAML.
    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    /// Invalid TOML.
    #[error(transparent)]
    Toml(#[from] toml::de::Error),

    /// Invalid JSON.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// The serialisation formats a document can be written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// YAML (`.yaml`, `.yml`).
    Yaml,
    /// TOML (`.toml`).
    Toml,
    /// JSON (`.json`).
    Json,
}

impl Format {
    /// Picks the format from a path's extension.
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension().and_then(OsStr::to_str)? {
            "yaml" | "yml" => Some(Self::Yaml),
            "toml" => Some(Self::Toml),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

impl FormDocument {
    /// Loads a document, choosing the parser from the file extension.
    ///
    /// # Errors
    ///
    /// Returns an error if the extension is not recognised, or the file
    /// cannot be read or parsed.
    #[instrument(level = "debug")]
    pub fn load(path: &Path) -> Result<Self, DocumentError> {
        let format = Format::from_path(path)
            .ok_or_else(|| DocumentError::UnsupportedFormat(path.to_path_buf()))?;
        let content = std::fs::read_to_string(path).map_err(|source| DocumentError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content, format).map_err(|error| match error {
            DocumentError::Parse(source) => DocumentError::ParseFile {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        })
    }

    /// Parses a document from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not a valid document in `format`.
    pub fn parse(content: &str, format: Format) -> Result<Self, DocumentError> {
        let document = match format {
            Format::Yaml => serde_yaml::from_str(content).map_err(ParseError::from)?,
            Format::Toml => toml::from_str(content).map_err(ParseError::from)?,
            Format::Json => serde_json::from_str(content).map_err(ParseError::from)?,
        };
        Ok(document)
    }

    /// Renders every field of the document.
    ///
    /// # Errors
    ///
    /// Returns the first configuration error raised by any field.
    #[instrument(level = "debug", skip_all, fields(object = %self.object_name))]
    pub fn render(&self, config: &Config) -> Result<Markup, Error> {
        let builder = FormBuilder::new(&self.object_name, &self.object).with_config(config.clone());
        let fields = render_fields(&builder, &self.fields)?;
        debug!(fields = self.fields.len(), "rendered document");

        Ok(match &self.action {
            Some(action) => Element::new("form")
                .attr("action", action)
                .attr("method", "post")
                .attr("novalidate", true)
                .render(fields),
            None => fields,
        })
    }
}

fn render_fields(builder: &FormBuilder<'_>, fields: &[FieldSpec]) -> Result<Markup, Error> {
    let rendered = fields
        .iter()
        .map(|field| render_field(builder, field))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(safe_join(rendered))
}

fn render_field(builder: &FormBuilder<'_>, field: &FieldSpec) -> Result<Markup, Error> {
    let input = |kind: InputKind, spec: &InputSpec| {
        builder.field(
            kind,
            &spec.attribute,
            FieldOptions::new()
                .label(spec.label.clone())
                .hint(spec.hint.clone())
                .input(spec.input.clone()),
        )
    };

    match field {
        FieldSpec::TextField(spec) => input(InputKind::Text, spec),
        FieldSpec::EmailField(spec) => input(InputKind::Email, spec),
        FieldSpec::PhoneField(spec) => input(InputKind::Phone, spec),
        FieldSpec::UrlField(spec) => input(InputKind::Url, spec),
        FieldSpec::NumberField(spec) => input(InputKind::Number, spec),
        FieldSpec::PasswordField(spec) => input(InputKind::Password, spec),
        FieldSpec::CheckBoxes(spec) => builder.check_boxes_fieldset(
            &spec.attribute,
            &spec.options,
            CheckBoxesOptions::new()
                .legend(spec.legend.clone())
                .hint(spec.hint.clone())
                .small(spec.small),
        ),
        FieldSpec::Fieldset(spec) => {
            let described_by: Vec<&str> = spec.described_by.iter().map(String::as_str).collect();
            builder.fieldset(spec.legend.clone(), &described_by, |builder| {
                render_fields(builder, &spec.fields)
            })
        }
    }
}
