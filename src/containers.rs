//! Elements that wrap other elements.

pub(crate) mod fieldset;
pub(crate) mod form_group;
