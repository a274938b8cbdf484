use std::{io, path::Path};

use serde::{Deserialize, Serialize};

use crate::tokens::Size;

/// Configuration for the form builder.
///
/// This struct holds the settings shared by every element a builder renders:
/// the class prefix and the defaults applied when a caller leaves an option
/// out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Versions", into = "Versions")]
pub struct Config {
    /// Prefix for every design system class.
    ///
    /// For example, 'govuk' produces `govuk-label`, while a service with its
    /// own branded design system might use 'app'.
    brand: String,

    /// The heading element placed inside fieldset legends, e.g. 'h1'.
    ///
    /// An empty string places legend text directly in the legend.
    default_legend_tag: String,

    /// The size applied to fieldset legends.
    default_legend_size: Size,

    /// Visually hidden text announced before error messages.
    ///
    /// Screen readers read 'Error: Enter your name'.
    default_error_prefix: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            brand: default_brand(),
            default_legend_tag: default_legend_tag(),
            default_legend_size: default_legend_size(),
            default_error_prefix: default_error_prefix(),
        }
    }
}

/// Errors that can occur while loading or saving a [`Config`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The file could not be read or written.
    #[error("failed to access config file: {0}")]
    Io(#[from] io::Error),

    /// The file was not valid configuration TOML.
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    /// The configuration could not be serialised.
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

impl Config {
    /// Loads the configuration from a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or if the TOML content is
    /// invalid.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config = toml::from_str(&content)?;
        tracing::debug!(path = %path.display(), "loaded builder config");
        Ok(config)
    }

    /// Saves the configuration to a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be serialized to TOML or if
    /// the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Returns the class prefix.
    #[must_use]
    pub fn brand(&self) -> &str {
        &self.brand
    }

    /// Returns the default legend heading tag, if any.
    #[must_use]
    pub fn default_legend_tag(&self) -> Option<&str> {
        Some(self.default_legend_tag.as_str()).filter(|tag| !tag.is_empty())
    }

    /// Returns the default legend size.
    #[must_use]
    pub const fn default_legend_size(&self) -> Size {
        self.default_legend_size
    }

    /// Returns the visually hidden error prefix.
    #[must_use]
    pub fn default_error_prefix(&self) -> &str {
        &self.default_error_prefix
    }

    /// Sets the class prefix.
    #[must_use]
    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = brand.into();
        self
    }

    /// Sets the default legend heading tag. An empty tag disables the
    /// heading.
    #[must_use]
    pub fn with_default_legend_tag(mut self, tag: impl Into<String>) -> Self {
        self.default_legend_tag = tag.into();
        self
    }

    /// Sets the default legend size.
    #[must_use]
    pub const fn with_default_legend_size(mut self, size: Size) -> Self {
        self.default_legend_size = size;
        self
    }

    /// Sets the visually hidden error prefix.
    #[must_use]
    pub fn with_default_error_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.default_error_prefix = prefix.into();
        self
    }
}

fn default_brand() -> String {
    "govuk".to_string()
}

fn default_legend_tag() -> String {
    "h1".to_string()
}

const fn default_legend_size() -> Size {
    Size::Xl
}

fn default_error_prefix() -> String {
    "Error".to_string()
}

/// The serialized versions of the configuration.
/// This allows for future changes to the configuration format and to the domain
/// type without breaking compatibility.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "_version")]
enum Versions {
    #[serde(rename = "1")]
    V1 {
        #[serde(default = "default_brand")]
        brand: String,

        #[serde(default = "default_legend_tag")]
        default_legend_tag: String,

        #[serde(default = "default_legend_size")]
        default_legend_size: Size,

        #[serde(default = "default_error_prefix")]
        default_error_prefix: String,
    },
}

impl From<Versions> for Config {
    fn from(versions: Versions) -> Self {
        match versions {
            Versions::V1 {
                brand,
                default_legend_tag,
                default_legend_size,
                default_error_prefix,
            } => Self {
                brand,
                default_legend_tag,
                default_legend_size,
                default_error_prefix,
            },
        }
    }
}

impl From<Config> for Versions {
    fn from(config: Config) -> Self {
        Self::V1 {
            brand: config.brand,
            default_legend_tag: config.default_legend_tag,
            default_legend_size: config.default_legend_size,
            default_error_prefix: config.default_error_prefix,
        }
    }
}
