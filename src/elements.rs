//! Renderers for the parts of a form field.
//!
//! A field is composed from small, independent elements: a label, a hint,
//! an error message, optional supplemental content and the control itself.
//! Each element normalises its own configuration when it is created, so a
//! configuration error surfaces before any markup is produced.

pub(crate) mod base;
pub mod check_boxes;
mod error_message;
mod hint;
/// Single-line inputs.
pub mod input;
mod label;
mod supplemental;

pub use check_boxes::{CheckBoxOption, CheckBoxesOptions};
pub use input::{FieldOptions, InputKind};
