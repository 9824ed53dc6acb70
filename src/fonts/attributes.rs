// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Properties for specifying font weight and style.

use core::fmt;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Visual weight class of a font, typically on a scale from 1 to 1000.
///
/// The default value is [`FontWeight::NORMAL`] or `400`.
///
/// Font specification documents and style resolution generally produce only
/// [`FontWeight::NORMAL`] and [`FontWeight::BOLD`]; other values are matched
/// exactly.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FontWeight(u16);

impl FontWeight {
    /// Weight value of 100.
    pub const THIN: Self = Self(100);

    /// Weight value of 300.
    pub const LIGHT: Self = Self(300);

    /// Weight value of 400. This is the default value.
    pub const NORMAL: Self = Self(400);

    /// Weight value of 500.
    pub const MEDIUM: Self = Self(500);

    /// Weight value of 700.
    pub const BOLD: Self = Self(700);

    /// Weight value of 900.
    pub const BLACK: Self = Self(900);
}

impl FontWeight {
    /// Creates a new weight attribute with the given value.
    pub fn new(weight: u16) -> Self {
        Self(weight)
    }

    /// Returns the underlying weight value.
    pub fn value(self) -> u16 {
        self.0
    }

    /// True if heavier than normal
    pub fn is_bold(self) -> bool {
        self > Self::NORMAL
    }

    /// Parses a font weight keyword or numeric value.
    ///
    /// Keywords are matched case-insensitively.
    ///
    /// # Examples
    ///
    /// ```
    /// # use timedtext_fonts::fonts::FontWeight;
    /// assert_eq!(FontWeight::parse("normal"), Some(FontWeight::NORMAL));
    /// assert_eq!(FontWeight::parse("BOLD"), Some(FontWeight::BOLD));
    /// assert_eq!(FontWeight::parse("850"), Some(FontWeight::new(850)));
    /// assert_eq!(FontWeight::parse("invalid"), None);
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        Some(match s.to_ascii_lowercase().as_str() {
            "normal" => Self::NORMAL,
            "bold" => Self::BOLD,
            _ => Self(s.parse::<u16>().ok()?),
        })
    }
}

impl Default for FontWeight {
    fn default() -> Self {
        Self::NORMAL
    }
}

impl fmt::Display for FontWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let keyword = match self.0 {
            100 => "thin",
            300 => "light",
            400 => "normal",
            500 => "medium",
            700 => "bold",
            900 => "black",
            _ => return write!(f, "{}", self.0),
        };
        write!(f, "{keyword}")
    }
}

/// Visual style or 'slope' of a font.
///
/// The default value is [`FontStyle::Normal`].
///
/// A synthetic slant (shear) is not a style: it is requested through the
/// `oblq` feature of a [`super::FontKey`].
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Default, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FontStyle {
    /// An upright or "roman" style.
    #[default]
    Normal,
    /// Generally a slanted style, originally based on semi-cursive forms.
    /// This often has a different structure from the normal style.
    Italic,
    /// Oblique (or slanted) style.
    Oblique,
}

impl FontStyle {
    /// Parses a font style keyword, case-insensitively.
    ///
    /// ```
    /// # use timedtext_fonts::fonts::FontStyle;
    /// assert_eq!(FontStyle::parse("Italic"), Some(FontStyle::Italic));
    /// assert_eq!(FontStyle::parse("slanted"), None);
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        Some(match s.trim().to_ascii_lowercase().as_str() {
            "normal" => Self::Normal,
            "italic" => Self::Italic,
            "oblique" => Self::Oblique,
            _ => return None,
        })
    }
}

impl fmt::Display for FontStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match *self {
            Self::Normal => "normal",
            Self::Italic => "italic",
            Self::Oblique => "oblique",
        };
        write!(f, "{value}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weight_display() {
        assert_eq!(FontWeight::BOLD.to_string(), "bold");
        assert_eq!(FontWeight::new(650).to_string(), "650");
        assert!(FontWeight::BOLD.is_bold());
        assert!(!FontWeight::default().is_bold());
    }

    #[test]
    fn style_round_trip() {
        for style in [FontStyle::Normal, FontStyle::Italic, FontStyle::Oblique] {
            assert_eq!(FontStyle::parse(&style.to_string()), Some(style));
        }
    }
}
