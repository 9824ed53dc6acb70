// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Glyph mapping
//!
//! This module translates text into a sequence of glyphs of one font
//! resource, with per-glyph advances and (optionally) positioning
//! adjustments. Two pipelines exist:
//!
//! -   *Simple*: each character maps directly through the character map;
//!     legacy pair kerning is applied when enabled.
//! -   *Complex*, used when the font has usable advanced layout tables:
//!     decomposition, substitution, positioning and combining mark
//!     reordering, in that order.
//!
//! This module *does not* perform line-breaking, bidi resolution or run
//! segmentation.

use crate::characters::{
    format_character, is_elidable_control, is_zero_width_whitespace, to_full_width,
    to_half_width, to_mirror,
};
use crate::fonts::feature::tag;
use crate::fonts::layout::{combining_mark_order, permute, Adjustment};
use crate::fonts::{EncodingError, FeatureArg, FeatureSet, FontFeature, GlyphRanges, Loaded};
use crate::fonts::LayoutTables;
use crate::normalize::decompose;
use crate::script::{dominant_script, DEFAULT_LANGUAGE};
use crate::{Axis, GlyphId, Range};
use log::{debug, warn};
use std::collections::{HashMap, HashSet};
use std::path::Path;

/// First code point of the private use area used for unmapped glyphs
pub const PUA_START: u32 = 0xE000;
/// End (exclusive) of the private use area used for unmapped glyphs
pub const PUA_END: u32 = 0xF8FF;
/// Character whose glyph stands in for unmapped characters
pub const MISSING_GLYPH_CHAR: char = '#';

/// True if `c` lies in the private use area used for unmapped glyphs
pub fn is_private_use(c: char) -> bool {
    (PUA_START..PUA_END).contains(&u32::from(c))
}

/// Decode UTF-16 text
///
/// Fails on an isolated surrogate, reporting its index in `text`.
pub fn decode_utf16(text: &[u16]) -> Result<String, EncodingError> {
    let mut index = 0;
    let mut out = String::with_capacity(text.len());
    for result in char::decode_utf16(text.iter().copied()) {
        match result {
            Ok(c) => {
                index += c.len_utf16();
                out.push(c);
            }
            Err(err) => {
                return Err(if (0xD800..0xDC00).contains(&err.unpaired_surrogate()) {
                    EncodingError::IsolatedHighSurrogate(index)
                } else {
                    EncodingError::IsolatedLowSurrogate(index)
                });
            }
        }
    }
    Ok(out)
}

/// Key of a glyph mapping: text and (merged) features
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct MappingKey {
    text: String,
    features: FeatureSet,
}

impl MappingKey {
    /// Construct
    pub fn new(text: impl Into<String>, features: FeatureSet) -> Self {
        MappingKey {
            text: text.into(),
            features,
        }
    }

    /// The text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The features
    pub fn features(&self) -> &FeatureSet {
        &self.features
    }

    /// Axis along which glyphs advance for a font on `axis`
    ///
    /// Vertical only when `axis` is vertical and glyphs are not rotated.
    pub fn advance_axis(&self, axis: Axis) -> Axis {
        if axis.is_vertical() && !self.features.orientation().is_rotated() {
            Axis::Vertical
        } else {
            Axis::Horizontal
        }
    }

    /// Key of the reversed mapping
    #[must_use]
    pub fn reversed(&self, mirror: bool) -> Self {
        let features = self
            .features
            .clone()
            .with(FontFeature::with_arg(tag::REVS, true))
            .with(FontFeature::with_arg(tag::MIRR, mirror));
        MappingKey::new(self.text.clone(), features)
    }

    /// True if kerning is enabled
    pub fn is_kerning_enabled(&self) -> bool {
        self.features.is_kerning_enabled()
    }
}

/// The result of mapping text to glyphs
///
/// Element `i` of [`GlyphMapping::glyphs`], [`GlyphMapping::chars`],
/// [`GlyphMapping::associations`], [`GlyphMapping::advances`] and (if
/// present) [`GlyphMapping::adjustments`] describes the same glyph.
/// Advances and adjustments are in font design units.
#[derive(Clone, Debug, PartialEq)]
pub struct GlyphMapping {
    key: MappingKey,
    axis: Axis,
    script: Option<String>,
    language: Option<String>,
    glyphs: Vec<GlyphId>,
    chars: Vec<char>,
    associations: Vec<Range>,
    advances: Vec<i32>,
    adjustments: Option<Vec<Adjustment>>,
}

impl GlyphMapping {
    /// Mapping of a font which failed to load
    ///
    /// Every character maps to glyph zero with zero advance.
    pub(crate) fn unmapped(key: MappingKey, axis: Axis) -> Self {
        let chars: Vec<char> = key.text.chars().collect();
        let n = chars.len();
        GlyphMapping {
            axis: key.advance_axis(axis),
            key,
            script: None,
            language: None,
            glyphs: vec![GlyphId::NOTDEF; n],
            chars,
            associations: (0..n).map(|i| Range::from(i..i + 1)).collect(),
            advances: vec![0; n],
            adjustments: None,
        }
    }

    /// Derive the reversed mapping
    ///
    /// All per-glyph sequences are reversed; associations continue to refer
    /// to the original text.
    pub(crate) fn reverse(&self, key: MappingKey) -> Self {
        fn rev<T: Clone>(v: &[T]) -> Vec<T> {
            v.iter().rev().cloned().collect()
        }
        GlyphMapping {
            key,
            axis: self.axis,
            script: self.script.clone(),
            language: self.language.clone(),
            glyphs: rev(&self.glyphs),
            chars: rev(&self.chars),
            associations: rev(&self.associations),
            advances: rev(&self.advances),
            adjustments: self.adjustments.as_deref().map(rev),
        }
    }

    /// The mapping key
    pub fn key(&self) -> &MappingKey {
        &self.key
    }

    /// The original text
    pub fn text(&self) -> &str {
        &self.key.text
    }

    /// The features used
    pub fn features(&self) -> &FeatureSet {
        &self.key.features
    }

    /// The axis along which [`GlyphMapping::advances`] apply
    pub fn advance_axis(&self) -> Axis {
        self.axis
    }

    /// Resolved script (complex pipeline only)
    pub fn script(&self) -> Option<&str> {
        self.script.as_deref()
    }

    /// Resolved language (complex pipeline only)
    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    /// Number of glyphs
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Glyph ids
    pub fn glyphs(&self) -> &[GlyphId] {
        &self.glyphs
    }

    /// One character per glyph
    ///
    /// Glyphs produced by substitution are represented by the character the
    /// font maps to them, or by a private use character if none.
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// [`GlyphMapping::chars`] as a string
    pub fn glyphs_as_text(&self) -> String {
        self.chars.iter().collect()
    }

    /// Range of original text characters from which each glyph derives
    pub fn associations(&self) -> &[Range] {
        &self.associations
    }

    /// Advance of each glyph, in design units
    pub fn advances(&self) -> &[i32] {
        &self.advances
    }

    /// Total advance, in design units
    pub fn advance(&self) -> i32 {
        self.advances.iter().sum()
    }

    /// Positioning adjustments, in design units
    pub fn adjustments(&self) -> Option<&[Adjustment]> {
        self.adjustments.as_deref()
    }

    /// True if any glyph is represented by a private use character
    pub fn contains_private_use(&self) -> bool {
        self.chars.iter().any(|&c| is_private_use(c))
    }
}

/// Per-resource mapping state
///
/// This records reverse (glyph to character) mappings seen while mapping,
/// private use assignments and the characters and glyphs already reported.
#[derive(Debug)]
pub(crate) struct MappingState {
    glyph_chars: HashMap<GlyphId, char>,
    missing_chars: HashSet<char>,
    pua_next: u32,
    pua_chars: HashMap<GlyphId, char>,
    pua_glyphs: HashMap<char, GlyphId>,
    pua_failures: HashSet<GlyphId>,
}

impl Default for MappingState {
    fn default() -> Self {
        MappingState {
            glyph_chars: HashMap::new(),
            missing_chars: HashSet::new(),
            pua_next: PUA_START,
            pua_chars: HashMap::new(),
            pua_glyphs: HashMap::new(),
            pua_failures: HashSet::new(),
        }
    }
}

/// Apply half-width and full-width features
fn fold_widths(chars: &mut [char], features: &FeatureSet) {
    let enabled = |t: &str| {
        features
            .get(t)
            .is_some_and(|f| f.arg(0).and_then(FeatureArg::as_bool).unwrap_or(true))
    };
    if enabled(tag::HWID) {
        chars.iter_mut().for_each(|c| *c = to_half_width(*c));
    } else if enabled(tag::FWID) {
        chars.iter_mut().for_each(|c| *c = to_full_width(*c));
    }
}

/// Union of the source ranges of characters `range`
fn origin(origins: &[Range], range: Range) -> Range {
    origins[range.to_std()]
        .iter()
        .copied()
        .reduce(Range::union)
        .unwrap_or(range)
}

/// Maps text to glyphs for one loaded font resource
pub(crate) struct Shaper<'a> {
    font: &'a Loaded,
    state: &'a mut MappingState,
    source: &'a Path,
    force_path: Option<&'a GlyphRanges>,
}

impl<'a> Shaper<'a> {
    pub fn new(
        font: &'a Loaded,
        state: &'a mut MappingState,
        source: &'a Path,
        force_path: Option<&'a GlyphRanges>,
    ) -> Self {
        Shaper {
            font,
            state,
            source,
            force_path,
        }
    }

    /// Map `key` for a font whose key axis is `axis`
    pub fn map(&mut self, axis: Axis, key: MappingKey) -> GlyphMapping {
        let axis = key.advance_axis(axis);
        let font = self.font;
        match font.tables.layout().filter(|_| font.use_layout) {
            Some(layout) => self.map_complex(layout, axis, key),
            None => self.map_simple(axis, key),
        }
    }

    fn map_simple(&mut self, axis: Axis, key: MappingKey) -> GlyphMapping {
        let mut chars: Vec<char> = key.text.chars().collect();
        fold_widths(&mut chars, &key.features);
        let glyphs = self.map_chars(&chars);

        let kerning = if axis.is_horizontal() && key.is_kerning_enabled() {
            self.font.tables.kerning(&glyphs)
        } else {
            None
        };
        let advances = self.advances(axis, &glyphs, &chars, kerning.as_deref());

        let associations = (0..chars.len()).map(|i| Range::from(i..i + 1)).collect();
        GlyphMapping {
            key,
            axis,
            script: None,
            language: None,
            glyphs,
            chars,
            associations,
            advances,
            adjustments: None,
        }
    }

    fn map_complex(
        &mut self,
        layout: &dyn LayoutTables,
        axis: Axis,
        key: MappingKey,
    ) -> GlyphMapping {
        let features = &key.features;
        let mut chars: Vec<char> = key.text.chars().collect();
        fold_widths(&mut chars, features);

        let script = match features.script() {
            Some(s) if !s.is_empty() && s != "auto" => s.to_string(),
            _ => dominant_script(&chars).tag().to_string(),
        };
        let language = match features.language() {
            Some(l) if !l.is_empty() && l != "none" => l.to_string(),
            _ => DEFAULT_LANGUAGE.to_string(),
        };

        let mut origins: Vec<Range> = (0..chars.len()).map(|i| Range::from(i..i + 1)).collect();
        decompose(&mut chars, &mut origins);
        if features.requires_mirror() {
            chars.iter_mut().for_each(|c| *c = to_mirror(*c));
        }

        let nominal = self.map_chars(&chars);
        let mut seq = layout.shape(&chars, &script, &language, features);
        for i in 0..seq.len() {
            if seq.glyphs[i].is_notdef() {
                let start = seq.associations[i].to_std().start;
                seq.glyphs[i] = nominal.get(start).copied().unwrap_or(GlyphId::NOTDEF);
                if let Some(adj) = seq.adjustments.as_mut().and_then(|a| a.get_mut(i)) {
                    *adj = Adjustment::default();
                }
            }
        }
        if let Some(adj) = seq.adjustments.as_ref() {
            if adj.len() != seq.len() {
                warn!(
                    "Dropping {} positioning adjustments for {} glyphs in font resource '{}'.",
                    adj.len(),
                    seq.len(),
                    self.source.display()
                );
                seq.adjustments = None;
            }
        }

        let substituted = layout.has_substitution();
        if substituted {
            seq.retain_glyphs(is_elidable_control);
        }

        let mut associations: Vec<Range> = seq
            .associations
            .iter()
            .map(|&range| origin(&origins, range))
            .collect();
        let mut glyphs = seq.glyphs;
        let mut adjustments = seq.adjustments;
        let mut chars = if substituted || glyphs.len() != seq.chars.len() {
            glyphs.iter().map(|&g| self.character_of(g)).collect()
        } else {
            seq.chars
        };

        if layout.has_definitions() {
            let classes = layout.glyph_classes(&glyphs);
            let widths = self.font.unscaled_widths(&glyphs);
            if let Some(order) = combining_mark_order(&classes, &widths) {
                glyphs = permute(&glyphs, &order);
                chars = permute(&chars, &order);
                associations = permute(&associations, &order);
                if let Some(adj) = adjustments.as_mut() {
                    *adj = permute(adj, &order);
                }
            }
        }

        let advances = self.advances(axis, &glyphs, &chars, None);
        GlyphMapping {
            key,
            axis,
            script: Some(script),
            language: Some(language),
            glyphs,
            chars,
            associations,
            advances,
            adjustments,
        }
    }

    fn advances(
        &self,
        axis: Axis,
        glyphs: &[GlyphId],
        chars: &[char],
        kerning: Option<&[i32]>,
    ) -> Vec<i32> {
        glyphs
            .iter()
            .zip(chars)
            .enumerate()
            .map(|(i, (&glyph, &c))| {
                if glyph.is_notdef() || is_zero_width_whitespace(c) {
                    0
                } else {
                    let kern = kerning.and_then(|k| k.get(i)).copied().unwrap_or(0);
                    self.font.advance(axis, glyph) + kern
                }
            })
            .collect()
    }

    fn missing_glyph(&self) -> GlyphId {
        self.font
            .tables
            .glyph_index(u32::from(MISSING_GLYPH_CHAR))
            .unwrap_or(GlyphId::NOTDEF)
    }

    fn map_chars(&mut self, chars: &[char]) -> Vec<GlyphId> {
        chars.iter().map(|&c| self.glyph_of(c)).collect()
    }

    /// Map a character, substituting the missing glyph
    pub fn glyph_of(&mut self, c: char) -> GlyphId {
        let glyph = self
            .font
            .tables
            .glyph_index(u32::from(c))
            .filter(|g| !g.is_notdef())
            .or_else(|| self.state.pua_glyphs.get(&c).copied());
        match glyph {
            Some(glyph) => {
                self.state.glyph_chars.insert(glyph, c);
                glyph
            }
            None => {
                if !is_zero_width_whitespace(c) && self.state.missing_chars.insert(c) {
                    warn!(
                        "No glyph mapping for character {} in font resource '{}'.",
                        format_character(c),
                        self.source.display()
                    );
                }
                self.missing_glyph()
            }
        }
    }

    /// Map a glyph back to a character
    ///
    /// Glyphs without a character (or forced to outline rendering) are
    /// assigned a private use character.
    pub fn character_of(&mut self, glyph: GlyphId) -> char {
        let found = if self.force_path.is_some_and(|ranges| ranges.contains(glyph)) {
            None
        } else {
            self.state
                .glyph_chars
                .get(&glyph)
                .copied()
                .or_else(|| self.font.tables.character(glyph))
        };
        match found {
            Some(c) if c != '\0' => c,
            _ => self.private_use_char(glyph),
        }
    }

    fn private_use_char(&mut self, glyph: GlyphId) -> char {
        if let Some(&c) = self.state.pua_chars.get(&glyph) {
            return c;
        }
        if self.state.pua_next < PUA_END {
            if let Some(c) = char::from_u32(self.state.pua_next) {
                self.state.pua_next += 1;
                self.state.pua_chars.insert(glyph, c);
                self.state.pua_glyphs.insert(c, glyph);
                debug!(
                    "No character mapping for glyph 0x{:04X} in font resource '{}', using {}.",
                    glyph.0,
                    self.source.display(),
                    format_character(c)
                );
                return c;
            }
        }
        if self.state.pua_failures.insert(glyph) {
            warn!(
                "No PUA mapping available for glyph 0x{:04X} in font resource '{}'.",
                glyph.0,
                self.source.display()
            );
        }
        MISSING_GLYPH_CHAR
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fonts::Orientation;

    fn utf16(s: &str) -> Vec<u16> {
        s.encode_utf16().collect()
    }

    #[test]
    fn decode_surrogates() {
        assert_eq!(decode_utf16(&utf16("a\u{1F600}b")).unwrap(), "a\u{1F600}b");

        let mut text = utf16("ab");
        text.push(0xD83D);
        assert_eq!(
            decode_utf16(&text),
            Err(EncodingError::IsolatedHighSurrogate(2))
        );

        let text = [0x61, 0xDE00, 0x62];
        assert_eq!(
            decode_utf16(&text),
            Err(EncodingError::IsolatedLowSurrogate(1))
        );

        let text = [0xD83D, 0x61];
        assert_eq!(
            decode_utf16(&text),
            Err(EncodingError::IsolatedHighSurrogate(0))
        );
    }

    #[test]
    fn advance_axis() {
        let key = MappingKey::new("x", FeatureSet::new());
        assert_eq!(key.advance_axis(Axis::Horizontal), Axis::Horizontal);
        assert_eq!(key.advance_axis(Axis::Vertical), Axis::Vertical);

        let rotated = FeatureSet::new().with(FontFeature::orientation(Orientation::Rotate090));
        let key = MappingKey::new("x", rotated);
        assert_eq!(key.advance_axis(Axis::Vertical), Axis::Horizontal);
    }

    #[test]
    fn reversed_key_differs() {
        let key = MappingKey::new("ab", FeatureSet::new());
        let rev = key.reversed(true);
        assert_ne!(key, rev);
        assert!(rev.features().is_reversed());
        assert!(rev.features().is_mirrored());
        assert_eq!(rev, key.reversed(true));
        assert_ne!(rev, key.reversed(false));
    }

    #[test]
    fn unmapped_and_reversed() {
        let key = MappingKey::new("abc", FeatureSet::new());
        let mapping = GlyphMapping::unmapped(key.clone(), Axis::Horizontal);
        assert_eq!(mapping.len(), 3);
        assert_eq!(mapping.advance(), 0);
        assert!(mapping.glyphs().iter().all(|g| g.is_notdef()));

        let rev = mapping.reverse(key.reversed(false));
        assert_eq!(rev.glyphs_as_text(), "cba");
        assert_eq!(rev.associations()[0], Range::from(2usize..3));
    }

    #[test]
    fn width_folding() {
        let mut chars: Vec<char> = "Ａb".chars().collect();
        let features = FeatureSet::new().with(FontFeature::new(tag::HWID));
        fold_widths(&mut chars, &features);
        assert_eq!(chars, ['A', 'b']);
    }

    #[test]
    fn private_use_range() {
        assert!(is_private_use('\u{E000}'));
        assert!(!is_private_use('\u{F8FF}'));
        assert!(!is_private_use('#'));
    }
}
