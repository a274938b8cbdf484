//! GOV.UK Design System form markup
//!
//! Renders accessible, consistently-classed form fields for an object: labels,
//! hints, error messages, fieldsets and the controls themselves, with the ids
//! and `aria-describedby` wiring that connects them.

/// Trusted markup and the element builder used to produce it.
pub mod html;
pub use html::Markup;

mod classes;
pub use classes::ClassList;

mod config;
pub use config::{Config, ConfigError};

mod error;
pub use error::Error;

mod object;
pub use object::{FormObject, Record, Value};

mod options;
pub use options::{Callable, FieldConfig, OptionValue, Options};

mod tokens;
pub use tokens::{Size, Width};

pub mod elements;
pub use elements::{CheckBoxOption, CheckBoxesOptions, FieldOptions, InputKind};

mod containers;

mod builder;
pub use builder::FormBuilder;

pub mod document;
pub use document::{DocumentError, FormDocument};

#[cfg(test)]
mod testing;
