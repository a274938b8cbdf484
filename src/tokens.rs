//! Closed sets of presentation tokens accepted by the design system.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    error::{one_of, Error},
    options::OptionValue,
};

/// Font size of a label or legend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Size {
    /// Extra large.
    Xl,
    /// Large.
    L,
    /// Medium.
    M,
    /// Small.
    S,
}

impl Size {
    /// Every size, largest first.
    pub const ALL: [Self; 4] = [Self::Xl, Self::L, Self::M, Self::S];

    const TOKENS: [&'static str; 4] = ["xl", "l", "m", "s"];

    /// The token used in class names, e.g. `xl`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Xl => "xl",
            Self::L => "l",
            Self::M => "m",
            Self::S => "s",
        }
    }

    /// Reads an optional label or hint size. A missing or null value means no size
    /// class.
    pub(crate) fn optional(value: Option<&OptionValue>) -> Result<Option<Self>, Error> {
        match value {
            None | Some(OptionValue::Null) => Ok(None),
            Some(OptionValue::Text(text)) => text.parse().map(Some).map_err(|_| {
                Error::InvalidSize {
                    value: text.clone(),
                    allowed: one_of(&["xl", "l", "m", "s", "nil"]),
                }
            }),
            Some(other) => Err(Error::InvalidSize {
                value: other.to_string(),
                allowed: one_of(&["xl", "l", "m", "s", "nil"]),
            }),
        }
    }

    /// Reads a mandatory legend size.
    pub(crate) fn required(value: Option<&OptionValue>) -> Result<Self, Error> {
        let invalid = |value: String| Error::InvalidSize {
            value,
            allowed: one_of(&Self::TOKENS),
        };
        match value {
            Some(OptionValue::Text(text)) => text.parse().map_err(|_| invalid(text.clone())),
            Some(other) => Err(invalid(other.to_string())),
            None => Err(invalid(String::new())),
        }
    }
}

impl FromStr for Size {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|size| size.as_str() == s)
            .ok_or_else(|| Error::InvalidSize {
                value: s.to_string(),
                allowed: one_of(&Self::TOKENS),
            })
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Width of a text input.
///
/// Fixed widths size the input to a number of characters; fluid widths size
/// it to a fraction of its container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Width {
    /// Two characters.
    Chars2,
    /// Three characters.
    Chars3,
    /// Four characters.
    Chars4,
    /// Five characters.
    Chars5,
    /// Ten characters.
    Chars10,
    /// Twenty characters.
    Chars20,
    /// Thirty characters.
    Chars30,
    /// The full width of the container.
    Full,
    /// Three quarters of the container.
    ThreeQuarters,
    /// Two thirds of the container.
    TwoThirds,
    /// Half of the container.
    OneHalf,
    /// A third of the container.
    OneThird,
    /// A quarter of the container.
    OneQuarter,
}

impl Width {
    /// Every width, fixed widths first.
    pub const ALL: [Self; 13] = [
        Self::Chars2,
        Self::Chars3,
        Self::Chars4,
        Self::Chars5,
        Self::Chars10,
        Self::Chars20,
        Self::Chars30,
        Self::Full,
        Self::ThreeQuarters,
        Self::TwoThirds,
        Self::OneHalf,
        Self::OneThird,
        Self::OneQuarter,
    ];

    /// The token callers use to request this width.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Chars2 => "2",
            Self::Chars3 => "3",
            Self::Chars4 => "4",
            Self::Chars5 => "5",
            Self::Chars10 => "10",
            Self::Chars20 => "20",
            Self::Chars30 => "30",
            Self::Full => "full",
            Self::ThreeQuarters => "three-quarters",
            Self::TwoThirds => "two-thirds",
            Self::OneHalf => "one-half",
            Self::OneThird => "one-third",
            Self::OneQuarter => "one-quarter",
        }
    }

    /// Returns `true` for widths measured in characters.
    #[must_use]
    pub const fn is_fixed(self) -> bool {
        matches!(
            self,
            Self::Chars2
                | Self::Chars3
                | Self::Chars4
                | Self::Chars5
                | Self::Chars10
                | Self::Chars20
                | Self::Chars30
        )
    }

    /// The class suffix, to be prefixed with the brand.
    ///
    /// Fixed widths use the input modifier (`input--width-20`), fluid widths
    /// use the width override (`!-width-one-half`).
    #[must_use]
    pub fn class_suffix(self) -> String {
        if self.is_fixed() {
            format!("input--width-{}", self.as_str())
        } else {
            format!("!-width-{}", self.as_str())
        }
    }

    pub(crate) fn optional(value: Option<&OptionValue>) -> Result<Option<Self>, Error> {
        match value {
            None | Some(OptionValue::Null) => Ok(None),
            Some(other) => other.to_string().parse().map(Some),
        }
    }
}

impl FromStr for Width {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|width| width.as_str() == s)
            .ok_or_else(|| Error::InvalidWidth {
                value: s.to_string(),
                allowed: one_of(&Self::ALL.map(Self::as_str)),
            })
    }
}

impl fmt::Display for Width {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
