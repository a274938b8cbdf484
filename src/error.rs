/// Errors raised while rendering a form element.
///
/// Every variant is fatal to the render call that produced it.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A configuration value was neither an options map, a callable nor
    /// blank.
    #[error("{element} must be a callable or an options map")]
    InvalidConfigurationType {
        /// The element the configuration was meant for, e.g. `label`.
        element: &'static str,
    },

    /// A size option outside the allowed set.
    #[error("invalid size '{value}', must be {allowed}")]
    InvalidSize {
        /// The rejected value.
        value: String,
        /// Human readable list of accepted values.
        allowed: String,
    },

    /// An input width outside the allowed set.
    #[error("invalid width '{value}', must be {allowed}")]
    InvalidWidth {
        /// The rejected value.
        value: String,
        /// Human readable list of accepted values.
        allowed: String,
    },

    /// A wrapping tag that is not a valid element name.
    #[error("invalid tag '{0}' for {1}")]
    InvalidTag(String, &'static str),

    /// A pass-through option whose key is not a valid attribute name.
    #[error("invalid attribute name '{0}' for {1}")]
    InvalidAttribute(String, &'static str),

    /// A recognised option carrying a value of the wrong type.
    #[error("{element} option '{option}' must be {expected}")]
    InvalidOption {
        /// The element being configured.
        element: &'static str,
        /// The offending option key.
        option: String,
        /// What the option accepts.
        expected: &'static str,
    },
}

/// Formats a list of accepted tokens as `a, b, c or d`.
pub(crate) fn one_of(tokens: &[&str]) -> String {
    match tokens {
        [] => String::new(),
        [only] => (*only).to_string(),
        [init @ .., last] => format!("{} or {last}", init.join(", ")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allowed_values_read_as_a_sentence() {
        assert_eq!(one_of(&["xl", "l", "m", "s", "nil"]), "xl, l, m, s or nil");
        assert_eq!(one_of(&["xl", "l"]), "xl or l");
        assert_eq!(one_of(&["xl"]), "xl");
    }

    #[test]
    fn error_display() {
        let error = Error::InvalidConfigurationType { element: "label" };
        assert_eq!(
            error.to_string(),
            "label must be a callable or an options map"
        );

        let error = Error::InvalidSize {
            value: "extra-medium".to_string(),
            allowed: one_of(&["xl", "l", "m", "s", "nil"]),
        };
        assert_eq!(
            error.to_string(),
            "invalid size 'extra-medium', must be xl, l, m, s or nil"
        );
    }
}
