// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Font specifications
//!
//! A font specification is a catalog entry describing one font resource: the
//! family, style, weight and language it serves and the path of the font
//! file. Specifications are read from XML documents of the form:
//!
//! ```xml
//! <fonts>
//!   <font>
//!     <param name="family">Noto Sans</param>
//!     <param name="style">normal</param>
//!     <param name="weight">bold</param>
//!     <param name="language">en</param>
//!     <param name="source">NotoSans-Bold.ttf</param>
//!     <param name="forcePath">3,5-9</param>
//!   </font>
//! </fonts>
//! ```
//!
//! Elements are matched by local name (any namespace). A relative `source`
//! is resolved against the directory of the document.

use super::{FontKey, FontStyle, FontWeight, SpecificationError};
use crate::GlyphId;
use log::warn;
use smallvec::SmallVec;
use std::fmt;
use std::path::{Path, PathBuf};

/// A set of glyph indices, stored as sorted disjoint inclusive ranges
///
/// Glyphs in the set of a font's `forcePath` restriction have no character
/// representation: glyph mapping assigns them private-use code points so that
/// a renderer draws them from their outlines.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GlyphRanges(SmallVec<[(u32, u32); 4]>);

impl GlyphRanges {
    /// Parse a comma-separated list of integer ranges, e.g. `"3,5-9"`
    ///
    /// Returns `Ok(None)` for an empty string.
    pub fn parse(s: &str) -> Result<Option<Self>, SpecificationError> {
        if s.trim().is_empty() {
            return Ok(None);
        }

        let mut ranges: Vec<(u32, u32)> = Vec::new();
        for range in s.split(',') {
            let limits: SmallVec<[&str; 2]> = range.split('-').map(str::trim).collect();
            let (lower, upper) = match limits.as_slice() {
                [] => return Err(SpecificationError::InvalidRange("too few limit values")),
                [l] if l.is_empty() && range.contains('-') => {
                    return Err(SpecificationError::InvalidRange("too few limit values"))
                }
                [l] => {
                    let l = l.parse::<u32>()?;
                    (l, l)
                }
                [l1, l2] if l1.is_empty() && l2.is_empty() => {
                    return Err(SpecificationError::InvalidRange("too few limit values"))
                }
                [l1, l2] => (l1.parse::<u32>()?, l2.parse::<u32>()?),
                _ => return Err(SpecificationError::InvalidRange("too many limit values")),
            };
            if lower > upper {
                return Err(SpecificationError::InvalidRange(
                    "lower limit must be less than or equal to upper limit",
                ));
            }
            ranges.push((lower, upper));
        }

        ranges.sort_unstable();
        let mut merged: SmallVec<[(u32, u32); 4]> = SmallVec::new();
        for (lower, upper) in ranges {
            match merged.last_mut() {
                Some(last) if lower <= last.1.saturating_add(1) => last.1 = last.1.max(upper),
                _ => merged.push((lower, upper)),
            }
        }
        Ok(Some(GlyphRanges(merged)))
    }

    /// True if `glyph` is in the set
    pub fn contains(&self, glyph: GlyphId) -> bool {
        let g = u32::from(glyph.0);
        let index = self.0.partition_point(|&(_, upper)| upper < g);
        self.0.get(index).is_some_and(|&(lower, _)| lower <= g)
    }

    /// Iterate over ranges (inclusive)
    pub fn ranges(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.0.iter().copied()
    }
}

/// A font catalog entry
#[derive(Clone, Debug, PartialEq)]
pub struct FontSpecification {
    /// Family name (lower case)
    pub family: String,
    pub style: FontStyle,
    pub weight: FontWeight,
    /// Language tag (lower case); empty matches any language
    pub language: String,
    /// Path of the font resource
    pub source: Option<PathBuf>,
    /// Glyphs to render from outlines
    pub force_path: Option<GlyphRanges>,
}

impl FontSpecification {
    /// Construct without a source
    pub fn new(family: &str, style: FontStyle, weight: FontWeight, language: &str) -> Self {
        FontSpecification {
            family: family.to_lowercase(),
            style,
            weight,
            language: language.to_lowercase(),
            source: None,
            force_path: None,
        }
    }

    /// Set the source
    #[must_use]
    pub fn with_source(mut self, source: impl Into<PathBuf>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Compatibility with a key
    ///
    /// Family, style and weight must be equal. Languages must be equal unless
    /// either is empty.
    pub fn matches(&self, key: &FontKey) -> bool {
        key.family() == self.family
            && key.style() == self.style
            && key.weight() == self.weight
            && (key.language().is_empty()
                || self.language.is_empty()
                || key.language() == self.language)
    }

    /// Parse all specifications in a document
    ///
    /// `source_base` is the directory against which relative sources resolve.
    /// Entries lacking a non-empty family or source are skipped.
    pub fn from_document(
        text: &str,
        source_base: &Path,
    ) -> Result<Vec<FontSpecification>, SpecificationError> {
        let doc = roxmltree::Document::parse(text)?;
        let mut specs = Vec::new();

        for font in doc
            .descendants()
            .filter(|n| n.is_element() && n.tag_name().name() == "font")
        {
            let mut family = None;
            let mut style = FontStyle::default();
            let mut weight = FontWeight::default();
            let mut language = String::new();
            let mut source = None;
            let mut force_path = None;

            for param in font
                .descendants()
                .filter(|n| n.is_element() && n.tag_name().name() == "param")
            {
                let Some(name) = param.attribute("name") else {
                    continue;
                };
                let value: String = param
                    .descendants()
                    .filter(|n| n.is_text())
                    .filter_map(|n| n.text())
                    .collect();
                let value = value.trim();

                match name {
                    "family" => family = Some(value.to_lowercase()),
                    "style" => {
                        style = FontStyle::parse(value).unwrap_or_else(|| {
                            warn!("Unknown font style '{value}'; using '{style}'");
                            style
                        })
                    }
                    "weight" => {
                        weight = FontWeight::parse(value).unwrap_or_else(|| {
                            warn!("Unknown font weight '{value}'; using '{weight}'");
                            weight
                        })
                    }
                    "language" => language = value.to_lowercase(),
                    "source" if !value.is_empty() => {
                        let path = Path::new(value);
                        source = Some(if path.is_absolute() {
                            path.to_path_buf()
                        } else {
                            source_base.join(path)
                        });
                    }
                    "forcePath" => force_path = GlyphRanges::parse(value)?,
                    _ => (),
                }
            }

            let Some(family) = family.filter(|f| !f.is_empty()) else {
                continue;
            };
            let Some(source) = source else {
                continue;
            };

            specs.push(FontSpecification {
                family,
                style,
                weight,
                language,
                source: Some(source),
                force_path,
            });
        }

        Ok(specs)
    }
}

impl fmt::Display for FontSpecification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{},{},{},",
            self.family.to_uppercase(),
            self.style,
            self.weight
        )?;
        match &self.source {
            Some(source) => write!(f, "{}]", source.display()),
            None => write!(f, "-]"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Axis, Extent};

    #[test]
    fn parse_ranges() {
        let r = GlyphRanges::parse("3,5-9").unwrap().unwrap();
        assert!(r.contains(GlyphId(3)));
        assert!(!r.contains(GlyphId(4)));
        assert!(r.contains(GlyphId(5)));
        assert!(r.contains(GlyphId(9)));
        assert!(!r.contains(GlyphId(10)));
        assert_eq!(GlyphRanges::parse("").unwrap(), None);

        let merged = GlyphRanges::parse("7-9, 1-3,4").unwrap().unwrap();
        assert_eq!(merged.ranges().collect::<Vec<_>>(), vec![(1, 4), (7, 9)]);
    }

    #[test]
    fn parse_range_errors() {
        let err = |s| GlyphRanges::parse(s).unwrap_err().to_string();
        assert!(err("5-3").contains("lower limit"));
        assert!(err("1-2-3").contains("too many"));
        assert!(err("-").contains("too few"));
        assert!(err("x").contains("limit"));
        assert!(matches!(
            GlyphRanges::parse("1,,2"),
            Err(SpecificationError::InvalidLimit(_))
        ));
    }

    #[test]
    fn language_wildcard() {
        let spec = FontSpecification::new("Noto Sans", FontStyle::Normal, FontWeight::NORMAL, "");
        let key = FontKey::new(
            "noto sans",
            FontStyle::Normal,
            FontWeight::NORMAL,
            "en",
            Axis::Horizontal,
            Extent::splat(24.0),
            Default::default(),
        );
        assert!(spec.matches(&key));
        let ja = FontSpecification::new("noto sans", FontStyle::Normal, FontWeight::NORMAL, "ja");
        assert!(!ja.matches(&key));
        assert!(!FontSpecification::new("noto sans", FontStyle::Italic, FontWeight::NORMAL, "")
            .matches(&key));
    }

    #[test]
    fn document() {
        let text = r#"<?xml version="1.0"?>
<fonts xmlns="http://skynav.com/ns/ttpe">
  <font>
    <param name="family">Noto Sans</param>
    <param name="style">Italic</param>
    <param name="weight">bold</param>
    <param name="source">NotoSans-BoldItalic.ttf</param>
    <param name="forcePath">1-2</param>
  </font>
  <font>
    <param name="family">No Source</param>
  </font>
  <font>
    <param name="family">Absolute</param>
    <param name="language">JA</param>
    <param name="source">/fonts/a.otf</param>
  </font>
</fonts>"#;
        let specs = FontSpecification::from_document(text, Path::new("/base")).unwrap();
        assert_eq!(specs.len(), 2);
        assert_eq!(specs[0].family, "noto sans");
        assert_eq!(specs[0].style, FontStyle::Italic);
        assert_eq!(specs[0].weight, FontWeight::BOLD);
        assert_eq!(
            specs[0].source.as_deref(),
            Some(Path::new("/base/NotoSans-BoldItalic.ttf"))
        );
        assert!(specs[0].force_path.as_ref().unwrap().contains(GlyphId(2)));
        assert_eq!(specs[1].language, "ja");
        assert_eq!(specs[1].source.as_deref(), Some(Path::new("/fonts/a.otf")));
    }

    #[test]
    fn bad_force_path_fails() {
        let text = r#"<fonts><font>
            <param name="family">x</param>
            <param name="source">x.ttf</param>
            <param name="forcePath">9-1</param>
        </font></fonts>"#;
        assert!(matches!(
            FontSpecification::from_document(text, Path::new(".")),
            Err(SpecificationError::InvalidRange(_))
        ));
    }
}
