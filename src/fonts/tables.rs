// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Font table access
//!
//! Font resources are read through a [`FontLoader`] yielding [`FontTables`].
//! The default loader, [`TtfLoader`], reads OpenType files with `ttf-parser`.

use super::layout::{self, GlyphClass, GlyphSequence};
use super::{FeatureSet, LoadError};
use crate::{Axis, GlyphId};
use bitflags::bitflags;
use std::collections::HashMap;
use std::path::Path;
use ttf_parser::{name_id, Face, PlatformId};

/// Wrapper around [`Face::parse`] yielding a face over shared `data`
///
/// # Safety
///
/// The returned face must not outlive `data`'s heap allocation.
unsafe fn parse_static(
    data: &[u8],
    index: u32,
) -> Result<Face<'static>, ttf_parser::FaceParsingError> {
    let data: &'static [u8] = std::slice::from_raw_parts(data.as_ptr(), data.len());
    Face::parse(data, index)
}

bitflags! {
    /// A set of font tables
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
    pub struct TableSet: u16 {
        /// Naming table
        const NAME = 1 << 0;
        /// OS/2 and Windows metrics
        const OS2 = 1 << 1;
        /// Unicode character to glyph map
        const CMAP = 1 << 2;
        /// Legacy kerning
        const KERN = 1 << 3;
        /// Glyph definitions
        const GDEF = 1 << 4;
        /// Glyph substitution
        const GSUB = 1 << 5;
        /// Glyph positioning
        const GPOS = 1 << 6;
        /// Vertical metrics
        const VMTX = 1 << 7;
    }
}

impl TableSet {
    /// Tables a font must have to be usable
    pub const REQUIRED: TableSet = TableSet::NAME.union(TableSet::OS2).union(TableSet::CMAP);

    /// Tables enabling advanced layout
    pub const LAYOUT: TableSet = TableSet::GSUB.union(TableSet::GPOS);
}

/// Font-wide metrics, in font design units
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Metrics {
    pub units_per_em: u16,
    /// Typographic ascender
    pub ascent: i16,
    /// Typographic descender (usually negative)
    pub descent: i16,
    /// Typographic line gap
    pub line_gap: i16,
    /// Windows ascent
    pub win_ascent: i32,
    /// Windows descent (positive)
    pub win_descent: i32,
}

impl Default for Metrics {
    fn default() -> Self {
        Metrics {
            units_per_em: 1000,
            ascent: 0,
            descent: 0,
            line_gap: 0,
            win_ascent: 0,
            win_descent: 0,
        }
    }
}

impl Metrics {
    /// Leading (inter-line gap)
    ///
    /// This is the typographic line gap, or if zero the excess of the Windows
    /// ascent plus descent over the em size (when positive).
    pub fn leading(&self) -> i32 {
        let gap = i32::from(self.line_gap);
        if gap == 0 {
            let excess = self.win_ascent + self.win_descent - i32::from(self.units_per_em);
            if excess > 0 {
                return excess;
            }
        }
        gap
    }
}

/// Loader of font resources
pub trait FontLoader {
    /// Read and parse the font resource at `source`
    fn load(&self, source: &Path) -> Result<Box<dyn FontTables>, LoadError>;
}

/// Access to the tables of a loaded font resource
pub trait FontTables {
    /// Tables present in the font
    fn tables(&self) -> TableSet;

    /// Preferred family name
    ///
    /// This is the typographic family name (Macintosh platform, Roman
    /// encoding, English) if present, otherwise the family name.
    fn family_name(&self) -> Option<String>;

    /// Font-wide metrics, if the OS/2 table is present
    fn metrics(&self) -> Option<Metrics>;

    /// Map a code point to a glyph
    fn glyph_index(&self, c: u32) -> Option<GlyphId>;

    /// Map a glyph to the lowest code point mapped to it
    fn character(&self, glyph: GlyphId) -> Option<char>;

    /// Advance of each glyph along `axis`, indexed by glyph id
    ///
    /// Returns `None` if the font has no metrics for the axis.
    fn advances(&self, axis: Axis) -> Option<Vec<u16>>;

    /// Legacy kerning of each adjacent pair
    ///
    /// Element `i` is the kerning between `glyphs[i]` and `glyphs[i + 1]`; the
    /// last element is zero. Returns `None` if the font has no horizontal
    /// kerning subtable.
    fn kerning(&self, glyphs: &[GlyphId]) -> Option<Vec<i32>>;

    /// Advanced layout tables, if present
    fn layout(&self) -> Option<&dyn LayoutTables>;
}

/// Access to advanced typographic tables
pub trait LayoutTables {
    /// True if a glyph definition table is present
    fn has_definitions(&self) -> bool;

    /// True if a substitution table is present
    fn has_substitution(&self) -> bool;

    /// True if a positioning table is present
    fn has_positioning(&self) -> bool;

    /// Glyph classes of `glyphs`
    fn glyph_classes(&self, glyphs: &[GlyphId]) -> Vec<Option<GlyphClass>>;

    /// Shape `chars` for the given script, language and features
    ///
    /// Unmapped characters yield [`GlyphId::NOTDEF`]. Adjustments are given
    /// (relative to nominal advances) only when positioning applies.
    fn shape(
        &self,
        chars: &[char],
        script: &str,
        language: &str,
        features: &FeatureSet,
    ) -> GlyphSequence;
}

/// Loader of OpenType font files
#[derive(Copy, Clone, Debug, Default)]
pub struct TtfLoader;

impl FontLoader for TtfLoader {
    fn load(&self, source: &Path) -> Result<Box<dyn FontTables>, LoadError> {
        let data = std::fs::read(source)?;
        Ok(Box::new(TtfTables::new(data, 0)?))
    }
}

/// Tables of an OpenType font, read with `ttf-parser`
///
/// The font data is owned and parsed once; character maps are extracted on
/// construction.
pub struct TtfTables {
    // Borrows from `data` so must be declared (and dropped) first
    face: rustybuzz::Face<'static>,
    #[allow(unused)]
    data: Vec<u8>,
    tables: TableSet,
    glyphs: HashMap<u32, GlyphId>,
    chars: HashMap<GlyphId, char>,
}

impl TtfTables {
    /// Construct from font data and face index
    pub fn new(data: Vec<u8>, index: u32) -> Result<Self, LoadError> {
        // Safety: the face is stored alongside `data`, whose heap allocation
        // is never mutated or freed while the face exists.
        let face = unsafe { parse_static(&data, index)? };

        let t = face.tables();
        let mut tables = TableSet::empty();
        tables.set(TableSet::NAME, t.name.is_some());
        tables.set(TableSet::OS2, t.os2.is_some());
        tables.set(TableSet::KERN, t.kern.is_some());
        tables.set(TableSet::GDEF, t.gdef.is_some());
        tables.set(TableSet::GSUB, t.gsub.is_some());
        tables.set(TableSet::GPOS, t.gpos.is_some());
        tables.set(TableSet::VMTX, t.vmtx.is_some());

        let mut glyphs = HashMap::new();
        let mut chars: HashMap<GlyphId, char> = HashMap::new();
        if let Some(cmap) = t.cmap.as_ref() {
            for subtable in cmap.subtables.into_iter().filter(|s| s.is_unicode()) {
                tables.insert(TableSet::CMAP);
                subtable.codepoints(|cp| {
                    if let Some(glyph) = subtable.glyph_index(cp) {
                        let glyph = GlyphId(glyph.0);
                        glyphs.entry(cp).or_insert(glyph);
                        if let Some(c) = char::from_u32(cp) {
                            chars
                                .entry(glyph)
                                .and_modify(|prev| *prev = (*prev).min(c))
                                .or_insert(c);
                        }
                    }
                });
            }
        }

        Ok(TtfTables {
            face: rustybuzz::Face::from_face(face),
            data,
            tables,
            glyphs,
            chars,
        })
    }
}

/// Decode a Macintosh Roman name (ASCII subset)
fn decode_mac_roman(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|&b| if b.is_ascii() { char::from(b) } else { '?' })
        .collect()
}

impl FontTables for TtfTables {
    fn tables(&self) -> TableSet {
        self.tables
    }

    fn family_name(&self) -> Option<String> {
        let face = &self.face;
        let typographic = face.names().into_iter().find(|name| {
            name.name_id == name_id::TYPOGRAPHIC_FAMILY
                && name.platform_id == PlatformId::Macintosh
                && name.encoding_id == 0
                && name.language_id == 0
        });
        if let Some(name) = typographic {
            return Some(decode_mac_roman(name.name));
        }

        let mut mac_family = None;
        for name in face.names().into_iter().filter(|n| n.name_id == name_id::FAMILY) {
            if let Some(s) = name.to_string() {
                return Some(s);
            } else if name.platform_id == PlatformId::Macintosh && name.encoding_id == 0 {
                mac_family.get_or_insert_with(|| decode_mac_roman(name.name));
            }
        }
        mac_family
    }

    fn metrics(&self) -> Option<Metrics> {
        let face = &self.face;
        let os2 = face.tables().os2.as_ref()?;
        Some(Metrics {
            units_per_em: Face::units_per_em(face),
            ascent: os2.typographic_ascender(),
            descent: os2.typographic_descender(),
            line_gap: os2.typographic_line_gap(),
            win_ascent: i32::from(os2.windows_ascender()).abs(),
            win_descent: i32::from(os2.windows_descender()).abs(),
        })
    }

    fn glyph_index(&self, c: u32) -> Option<GlyphId> {
        self.glyphs.get(&c).copied()
    }

    fn character(&self, glyph: GlyphId) -> Option<char> {
        self.chars.get(&glyph).copied()
    }

    fn advances(&self, axis: Axis) -> Option<Vec<u16>> {
        let face = &self.face;
        if axis.is_vertical() && face.tables().vmtx.is_none() {
            return None;
        }
        let advances = (0..face.number_of_glyphs())
            .map(|g| {
                let g = ttf_parser::GlyphId(g);
                match axis {
                    Axis::Horizontal => face.glyph_hor_advance(g),
                    Axis::Vertical => face.glyph_ver_advance(g),
                }
                .unwrap_or(0)
            })
            .collect();
        Some(advances)
    }

    fn kerning(&self, glyphs: &[GlyphId]) -> Option<Vec<i32>> {
        let kern = self.face.tables().kern.as_ref()?;
        let subtable = kern
            .subtables
            .into_iter()
            .find(|s| s.horizontal && !s.variable)?;
        let mut kerning = vec![0; glyphs.len()];
        for (i, pair) in glyphs.windows(2).enumerate() {
            kerning[i] = subtable
                .glyphs_kerning(pair[0].into(), pair[1].into())
                .map(i32::from)
                .unwrap_or(0);
        }
        Some(kerning)
    }

    fn layout(&self) -> Option<&dyn LayoutTables> {
        self.tables
            .intersects(TableSet::LAYOUT)
            .then_some(self as &dyn LayoutTables)
    }
}

impl LayoutTables for TtfTables {
    fn has_definitions(&self) -> bool {
        self.tables.contains(TableSet::GDEF)
    }

    fn has_substitution(&self) -> bool {
        self.tables.contains(TableSet::GSUB)
    }

    fn has_positioning(&self) -> bool {
        self.tables.contains(TableSet::GPOS)
    }

    fn glyph_classes(&self, glyphs: &[GlyphId]) -> Vec<Option<GlyphClass>> {
        let gdef = self.face.tables().gdef.as_ref();
        glyphs
            .iter()
            .map(|&g| {
                gdef.and_then(|table| table.glyph_class(g.into()))
                    .map(GlyphClass::from)
            })
            .collect()
    }

    fn shape(
        &self,
        chars: &[char],
        script: &str,
        language: &str,
        features: &FeatureSet,
    ) -> GlyphSequence {
        let positioning = self.has_positioning();
        layout::shape(&self.face, chars, script, language, features, positioning)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dejavu() -> TtfTables {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fonts/DejaVuSans.ttf");
        let data = std::fs::read(path).unwrap();
        TtfTables::new(data, 0).unwrap()
    }

    #[test]
    fn leading() {
        let mut metrics = Metrics {
            units_per_em: 1000,
            ascent: 800,
            descent: -200,
            line_gap: 90,
            win_ascent: 900,
            win_descent: 300,
        };
        assert_eq!(metrics.leading(), 90);
        metrics.line_gap = 0;
        assert_eq!(metrics.leading(), 200);
        metrics.win_descent = 0;
        assert_eq!(metrics.leading(), 0);
    }

    #[test]
    fn required_tables() {
        let tables = dejavu();
        assert!(tables.tables().contains(TableSet::REQUIRED));
        assert!(tables.layout().is_some());
    }

    #[test]
    fn cmap_round_trip() {
        let tables = dejavu();
        let glyph = tables.glyph_index(u32::from('A')).unwrap();
        assert!(!glyph.is_notdef());
        assert_eq!(tables.character(glyph), Some('A'));
        assert_eq!(tables.glyph_index(0xE000), None);
    }

    #[test]
    fn names_and_metrics() {
        let tables = dejavu();
        assert_eq!(tables.family_name().as_deref(), Some("DejaVu Sans"));
        let metrics = tables.metrics().unwrap();
        assert_eq!(metrics.units_per_em, 2048);
        assert!(metrics.ascent > 0);
        assert!(metrics.descent < 0);
        let widths = tables.advances(Axis::Horizontal).unwrap();
        let a = tables.glyph_index(u32::from('A')).unwrap();
        assert!(widths[a.get()] > 0);
    }

    #[test]
    fn shape_plain_text() {
        let tables = dejavu();
        let layout = tables.layout().unwrap();
        let seq = layout.shape(&['A', 'V'], "latn", "dflt", &FeatureSet::new());
        let a = tables.glyph_index(u32::from('A')).unwrap();
        let v = tables.glyph_index(u32::from('V')).unwrap();
        assert_eq!(seq.glyphs, [a, v]);
        assert_eq!(seq.glyph_chars(1), ['V']);
        // Adjustments are relative to nominal advances
        let adjustments = seq.adjustments.unwrap();
        assert_eq!(adjustments.len(), 2);
        assert_eq!(adjustments[1], Default::default());

        let seq = layout.shape(&['\u{E000}'], "latn", "dflt", &FeatureSet::new());
        assert_eq!(seq.glyphs, [GlyphId::NOTDEF]);
    }

    #[test]
    fn glyph_classes() {
        let tables = dejavu();
        let a = tables.glyph_index(u32::from('A')).unwrap();
        let acute = tables.glyph_index(0x0301).unwrap();
        let classes = tables.layout().unwrap().glyph_classes(&[a, acute]);
        assert_eq!(classes, [Some(GlyphClass::Base), Some(GlyphClass::Mark)]);
    }
}
