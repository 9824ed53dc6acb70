// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Advanced typographic layout
//!
//! Substitution (GSUB) and positioning (GPOS) are applied by `rustybuzz`;
//! glyph definitions (GDEF) drive the reordering of combining marks.

use super::FeatureSet;
use crate::conv::to_u32;
use crate::script::DEFAULT_LANGUAGE;
use crate::{GlyphId, Range};
use rustybuzz::{BufferClusterLevel, Direction, Feature, Language, UnicodeBuffer};
use smallvec::SmallVec;
use std::str::FromStr;
use ttf_parser::Tag;

/// Glyph class as given by a glyph definition table
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum GlyphClass {
    Base,
    Ligature,
    Mark,
    Component,
}

impl From<ttf_parser::gdef::GlyphClass> for GlyphClass {
    fn from(class: ttf_parser::gdef::GlyphClass) -> Self {
        use ttf_parser::gdef::GlyphClass as C;
        match class {
            C::Base => GlyphClass::Base,
            C::Ligature => GlyphClass::Ligature,
            C::Mark => GlyphClass::Mark,
            C::Component => GlyphClass::Component,
        }
    }
}

/// A positioning adjustment, in font design units
///
/// Offsets displace the glyph; advances are added to its nominal advance.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Adjustment {
    pub x_offset: i32,
    pub y_offset: i32,
    pub x_advance: i32,
    pub y_advance: i32,
}

impl Adjustment {
    /// True if all components are zero
    pub fn is_zero(&self) -> bool {
        *self == Adjustment::default()
    }
}

/// A sequence of shaped glyphs with associated characters
///
/// `associations[i]` is the range of `chars` from which `glyphs[i]` derives.
/// Shaping changes glyphs and associations but never `chars`. If present,
/// `adjustments` should have one element per glyph.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GlyphSequence {
    pub chars: Vec<char>,
    pub glyphs: Vec<GlyphId>,
    pub associations: Vec<Range>,
    pub adjustments: Option<Vec<Adjustment>>,
}

impl GlyphSequence {
    /// Construct with one-to-one associations
    pub fn new(chars: Vec<char>, glyphs: Vec<GlyphId>) -> Self {
        debug_assert_eq!(chars.len(), glyphs.len());
        let associations = (0..chars.len()).map(|i| Range::from(i..i + 1)).collect();
        GlyphSequence {
            chars,
            glyphs,
            associations,
            adjustments: None,
        }
    }

    /// Number of glyphs
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Characters associated with glyph `index`
    pub fn glyph_chars(&self, index: usize) -> &[char] {
        &self.chars[self.associations[index].to_std()]
    }

    /// Replace `len` glyphs at `index` with `glyphs`
    ///
    /// The replacements are associated with the union of the replaced
    /// associations. Adjustments, if any, are dropped.
    pub fn replace(&mut self, index: usize, len: usize, glyphs: &[GlyphId]) {
        let range = self.associations[index..index + len]
            .iter()
            .fold(self.associations[index], |r, &a| r.union(a));
        self.glyphs.splice(index..index + len, glyphs.iter().copied());
        self.associations
            .splice(index..index + len, glyphs.iter().map(|_| range));
        self.adjustments = None;
    }

    /// Remove glyphs whose associated characters all satisfy `elide`
    pub fn retain_glyphs(&mut self, elide: impl Fn(char) -> bool) {
        if !self.chars.iter().any(|&c| elide(c)) {
            return;
        }
        let keep: Vec<bool> = (0..self.len())
            .map(|i| !self.glyph_chars(i).iter().all(|&c| elide(c)))
            .collect();
        let mut flags = keep.iter();
        self.glyphs.retain(|_| flags.next().copied().unwrap_or(true));
        let mut flags = keep.iter();
        self.associations
            .retain(|_| flags.next().copied().unwrap_or(true));
        if let Some(adjustments) = self.adjustments.as_mut() {
            let mut flags = keep.iter();
            adjustments.retain(|_| flags.next().copied().unwrap_or(true));
        }
    }
}

/// Compute the order of glyphs after reordering combining marks
///
/// A mark (glyph class [`GlyphClass::Mark`] with non-zero width) is moved
/// before the base which precedes it. Returns `None` when nothing moves: when
/// there are no such marks or no bases.
pub fn combining_mark_order(
    classes: &[Option<GlyphClass>],
    widths: &[i32],
) -> Option<Vec<usize>> {
    let n = classes.len();
    debug_assert_eq!(widths.len(), n);
    let is_mark = |i: usize| classes[i] == Some(GlyphClass::Mark) && widths[i] != 0;
    let marks = (0..n).filter(|&i| is_mark(i)).count();
    if marks == 0 || marks == n {
        return None;
    }

    let mut order = Vec::with_capacity(n);
    let mut base = None;
    for i in 0..n {
        if is_mark(i) {
            order.push(i);
        } else if let Some(b) = base.replace(i) {
            order.push(b);
        }
    }
    order.extend(base);
    debug_assert_eq!(order.len(), n);
    Some(order)
}

/// Permute `items` into `order`
pub fn permute<T: Copy>(items: &[T], order: &[usize]) -> Vec<T> {
    order.iter().map(|&i| items[i]).collect()
}

/// Shaping features requested by `features`
///
/// Only OpenType feature tags (four lower-case letters or digits) are passed
/// on. A feature without arguments is enabled; a feature whose first argument
/// is boolean is enabled or disabled accordingly. Other features (such as
/// `oblq`) are not shaping features.
fn shaping_features(features: &FeatureSet) -> SmallVec<[Feature; 8]> {
    let mut out = SmallVec::new();
    for feature in features.iter() {
        let tag = feature.tag();
        if tag.len() != 4 || !tag.bytes().all(|b| b.is_ascii_lowercase() || b.is_ascii_digit()) {
            continue;
        }
        let value = match feature.arg(0) {
            None => 1,
            Some(arg) => match arg.as_bool() {
                Some(enabled) => u32::from(enabled),
                None => continue,
            },
        };
        out.push(Feature::new(Tag::from_bytes_lossy(tag.as_bytes()), value, ..));
    }
    out
}

/// Ranges of characters associated with each glyph, from shaping clusters
///
/// Each glyph's range extends from its cluster to the next larger cluster
/// value (or `len`).
fn cluster_ranges(clusters: &[u32], len: usize) -> Vec<Range> {
    let mut starts = clusters.to_vec();
    starts.sort_unstable();
    starts.dedup();
    clusters
        .iter()
        .map(|&start| {
            let next = starts.partition_point(|&s| s <= start);
            let end = starts.get(next).copied().unwrap_or(to_u32(len));
            Range { start, end }
        })
        .collect()
}

/// Shape `chars` left-to-right
///
/// `script` is an OpenType or ISO 15924 script tag and `language` a BCP 47
/// language tag; unrecognised values are guessed from the text. Unmapped
/// characters yield glyph zero. Adjustments are relative to the nominal
/// horizontal advance and are only computed with `positioning`.
pub fn shape(
    face: &rustybuzz::Face,
    chars: &[char],
    script: &str,
    language: &str,
    features: &FeatureSet,
    positioning: bool,
) -> GlyphSequence {
    let mut buffer = UnicodeBuffer::new();
    for (i, &c) in chars.iter().enumerate() {
        buffer.add(c, to_u32(i));
    }
    buffer.set_direction(Direction::LeftToRight);
    buffer.set_cluster_level(BufferClusterLevel::MonotoneCharacters);
    if let Ok(script) = rustybuzz::Script::from_str(script) {
        buffer.set_script(script);
    }
    if language != DEFAULT_LANGUAGE {
        if let Ok(language) = Language::from_str(language) {
            buffer.set_language(language);
        }
    }
    buffer.guess_segment_properties();

    let output = rustybuzz::shape(face, &shaping_features(features), buffer);
    let infos = output.glyph_infos();

    let glyphs: Vec<GlyphId> = infos
        .iter()
        .map(|info| u16::try_from(info.glyph_id).map_or(GlyphId::NOTDEF, GlyphId))
        .collect();
    let clusters: Vec<u32> = infos.iter().map(|info| info.cluster).collect();

    let adjustments = positioning.then(|| {
        glyphs
            .iter()
            .zip(output.glyph_positions())
            .map(|(&glyph, pos)| {
                let nominal = face.glyph_hor_advance(glyph.into()).map_or(0, i32::from);
                Adjustment {
                    x_offset: pos.x_offset,
                    y_offset: pos.y_offset,
                    x_advance: pos.x_advance - nominal,
                    y_advance: pos.y_advance,
                }
            })
            .collect()
    });

    GlyphSequence {
        chars: chars.to_vec(),
        associations: cluster_ranges(&clusters, chars.len()),
        glyphs,
        adjustments,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fonts::FontFeature;

    fn sequence(glyphs: &[u16]) -> GlyphSequence {
        let chars = (0..glyphs.len()).map(|i| char::from(b'a' + i as u8)).collect();
        GlyphSequence::new(chars, glyphs.iter().map(|&g| GlyphId(g)).collect())
    }

    #[test]
    fn replace_merges_associations() {
        let mut seq = sequence(&[1, 2, 3]);
        seq.replace(0, 2, &[GlyphId(9)]);
        assert_eq!(seq.glyphs, [GlyphId(9), GlyphId(3)]);
        assert_eq!(seq.associations[0], Range::from(0usize..2));
        assert_eq!(seq.glyph_chars(0), ['a', 'b']);

        seq.replace(1, 1, &[GlyphId(4), GlyphId(5)]);
        assert_eq!(seq.len(), 3);
        assert_eq!(seq.associations[2], Range::from(2usize..3));
    }

    #[test]
    fn elide() {
        let mut seq = GlyphSequence::new(
            vec!['a', '\u{200D}', 'b'],
            vec![GlyphId(1), GlyphId(2), GlyphId(3)],
        );
        seq.adjustments = Some(vec![
            Adjustment::default(),
            Adjustment {
                x_offset: 7,
                ..Default::default()
            },
            Adjustment::default(),
        ]);
        seq.retain_glyphs(|c| c == '\u{200D}');
        assert_eq!(seq.glyphs, [GlyphId(1), GlyphId(3)]);
        assert_eq!(seq.associations, [Range::from(0usize..1), Range::from(2usize..3)]);
        assert!(seq.adjustments.unwrap().iter().all(Adjustment::is_zero));
        assert_eq!(seq.chars.len(), 3);
    }

    #[test]
    fn ligature_with_elidable_component_stays() {
        let mut seq = sequence(&[1, 2, 3]);
        seq.chars[1] = '\u{200D}';
        seq.replace(0, 3, &[GlyphId(9)]);
        seq.retain_glyphs(|c| c == '\u{200D}');
        assert_eq!(seq.glyphs, [GlyphId(9)]);
    }

    #[test]
    fn clusters() {
        assert_eq!(
            cluster_ranges(&[0, 0, 2, 3], 5),
            [
                Range::from(0usize..2),
                Range::from(0usize..2),
                Range::from(2usize..3),
                Range::from(3usize..5),
            ]
        );
        assert!(cluster_ranges(&[], 0).is_empty());
    }

    #[test]
    fn feature_selection() {
        let features = FeatureSet::new()
            .with(FontFeature::kerning(false))
            .with(FontFeature::new("smcp"))
            .with(FontFeature::oblique(10.0))
            .with(FontFeature::script("latn"));
        let selected = shaping_features(&features);
        assert_eq!(selected.len(), 2);
        let kern = selected
            .iter()
            .find(|f| f.tag == Tag::from_bytes(b"kern"))
            .unwrap();
        assert_eq!(kern.value, 0);
        let smcp = selected
            .iter()
            .find(|f| f.tag == Tag::from_bytes(b"smcp"))
            .unwrap();
        assert_eq!(smcp.value, 1);
    }

    #[test]
    fn reorder_marks() {
        use GlyphClass::*;
        let classes = [Some(Base), Some(Mark), Some(Base), Some(Mark)];
        let order = combining_mark_order(&classes, &[500, 200, 500, 200]).unwrap();
        assert_eq!(order, [1, 0, 3, 2]);
        assert_eq!(permute(&['a', 'b', 'c', 'd'], &order), ['b', 'a', 'd', 'c']);
    }

    #[test]
    fn zero_width_marks_stay() {
        use GlyphClass::*;
        assert_eq!(combining_mark_order(&[Some(Base), Some(Mark)], &[500, 0]), None);
        assert_eq!(combining_mark_order(&[Some(Mark), Some(Mark)], &[5, 5]), None);
        let order = combining_mark_order(&[Some(Mark), None, Some(Mark)], &[5, 5, 5]).unwrap();
        assert_eq!(order, [0, 2, 1]);
    }
}
