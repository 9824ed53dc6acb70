// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Font facade

use super::{
    EncodingError, FeatureSet, FontCache, FontFeature, FontKey, FontState, FontStyle, FontWeight,
    NoFontMatch, ScaledAdjustment,
};
use crate::conv::DPU;
use crate::shaper::GlyphMapping;
use crate::{Axis, Extent, GlyphId, Matrix};
use std::path::Path;
use std::rc::Rc;

/// Default line height as a multiple of the font size
pub const LINE_HEIGHT_FACTOR: f64 = 1.25;

/// A font: a [`FontKey`] bound to the state of a font resource
///
/// Fonts are obtained from a [`FontCache`], which memoizes one `Font` per
/// key. Cloning is cheap. All metrics are scaled to the key's size; a font
/// whose resource failed to load reports zero metrics.
#[derive(Clone, Debug)]
pub struct Font {
    key: FontKey,
    state: Rc<FontState>,
}

impl Font {
    pub(crate) fn new(key: FontKey, state: Rc<FontState>) -> Self {
        Font { key, state }
    }

    /// The key
    pub fn key(&self) -> &FontKey {
        &self.key
    }

    /// The shared resource state
    pub fn state(&self) -> &Rc<FontState> {
        &self.state
    }

    /// Path of the font resource, if any
    pub fn source(&self) -> Option<&Path> {
        self.state.source()
    }

    /// Family of the key (lower case)
    pub fn family(&self) -> &str {
        self.key.family()
    }

    /// Family name as recorded in the font
    pub fn preferred_family_name(&self) -> String {
        self.state.preferred_family_name(&self.key)
    }

    pub fn style(&self) -> FontStyle {
        self.key.style()
    }

    pub fn weight(&self) -> FontWeight {
        self.key.weight()
    }

    pub fn language(&self) -> &str {
        self.key.language()
    }

    pub fn features(&self) -> &FeatureSet {
        self.key.features()
    }

    pub fn feature(&self, tag: &str) -> Option<&FontFeature> {
        self.key.feature(tag)
    }

    pub fn is_kerning_enabled(&self) -> bool {
        self.key.is_kerning_enabled()
    }

    pub fn axis(&self) -> Axis {
        self.key.axis()
    }

    pub fn is_vertical(&self) -> bool {
        self.key.axis().is_vertical()
    }

    pub fn size(&self) -> Extent {
        self.key.size()
    }

    /// Font size along the writing axis
    pub fn size_along(&self, axis: Axis) -> f64 {
        self.key.size().dimension(axis)
    }

    pub fn width(&self) -> f64 {
        self.key.size().width
    }

    pub fn height(&self) -> f64 {
        self.key.size().height
    }

    /// True if width and height differ
    pub fn is_anamorphic(&self) -> bool {
        self.width() != self.height()
    }

    /// True if a synthetic oblique angle applies
    pub fn is_sheared(&self) -> bool {
        self.key.is_sheared()
    }

    /// Default line height: 1.25 times the size along the writing axis
    pub fn default_line_height(&self) -> f64 {
        self.size_along(self.axis()) * LINE_HEIGHT_FACTOR
    }

    pub fn leading(&self) -> f64 {
        self.state.leading(&self.key)
    }

    pub fn ascent(&self) -> f64 {
        self.state.ascent(&self.key)
    }

    /// Descent (usually negative)
    pub fn descent(&self) -> f64 {
        self.state.descent(&self.key)
    }

    fn merged(&self, features: &FeatureSet) -> FeatureSet {
        let mut merged = self.key.features().clone();
        merged.augment(features);
        merged
    }

    /// Map `text` to glyphs
    ///
    /// `features` are merged over the key's features. Results are cached per
    /// font resource.
    pub fn glyph_mapping(&self, text: &str, features: &FeatureSet) -> Rc<GlyphMapping> {
        self.state
            .glyph_mapping(&self.key, text, &self.merged(features))
    }

    /// Map UTF-16 `text` to glyphs
    pub fn glyph_mapping_utf16(
        &self,
        text: &[u16],
        features: &FeatureSet,
    ) -> Result<Rc<GlyphMapping>, EncodingError> {
        self.state
            .glyph_mapping_utf16(&self.key, text, &self.merged(features))
    }

    /// Reverse `mapping` (for right-to-left presentation)
    pub fn maybe_reverse(&self, mapping: &Rc<GlyphMapping>, mirror: bool) -> Rc<GlyphMapping> {
        self.state.maybe_reverse(mapping, mirror)
    }

    /// Glyph ids of `text`
    pub fn glyphs(&self, text: &str, features: &FeatureSet) -> Vec<GlyphId> {
        self.glyph_mapping(text, features).glyphs().to_vec()
    }

    /// Text of the mapped glyphs (see [`GlyphMapping::chars`])
    pub fn mapped_text(&self, text: &str, features: &FeatureSet) -> String {
        self.glyph_mapping(text, features).glyphs_as_text()
    }

    /// Map a glyph back to a character
    pub fn character(&self, glyph: GlyphId) -> Option<char> {
        self.state.character(glyph)
    }

    /// Scaled total advance of `text`
    pub fn advance(&self, text: &str, features: &FeatureSet) -> f64 {
        let mapping = self.glyph_mapping(text, features);
        self.state.scaled_advance(&self.key, &mapping)
    }

    /// Scaled advance of each glyph of `mapping`
    pub fn advances(&self, mapping: &GlyphMapping) -> Vec<f64> {
        self.state.scaled_advances(&self.key, mapping)
    }

    /// Scaled total advance of `mapping`
    pub fn mapping_advance(&self, mapping: &GlyphMapping) -> f64 {
        self.state.scaled_advance(&self.key, mapping)
    }

    /// Scaled positioning adjustments of `mapping`
    pub fn adjustments(&self, mapping: &GlyphMapping) -> Option<Vec<ScaledAdjustment>> {
        self.state.scaled_adjustments(&self.key, mapping)
    }

    /// Scaled legacy kerning of each adjacent glyph pair of `mapping`
    pub fn kerning(&self, mapping: &GlyphMapping) -> Option<Vec<f64>> {
        let kerning = self.state.kerning(mapping)?;
        let dpu = DPU::new(
            self.size_along(mapping.advance_axis()),
            self.state.units_per_em(),
        );
        Some(kerning.into_iter().map(|k| dpu.i32_to_units(k)).collect())
    }

    /// Total scaled legacy kerning of `mapping`
    ///
    /// This is included in [`Font::mapping_advance`] for mappings produced
    /// without advanced layout.
    pub fn kerning_advance(&self, mapping: &GlyphMapping) -> f64 {
        self.kerning(mapping).map_or(0.0, |k| k.iter().sum())
    }

    /// Shear factor of the synthetic oblique: `-tan(angle)`, or zero
    pub fn shear(&self) -> f64 {
        if self.is_sheared() {
            -self.key.shear_angle().to_radians().tan()
        } else {
            0.0
        }
    }

    /// Glyph transform for presentation on `axis`
    ///
    /// The shear is applied along x for horizontal text (negated for rotated
    /// glyphs) and along y for vertical text. Anamorphic scaling follows.
    /// Returns `None` if no transform is needed.
    pub fn transform(&self, axis: Axis, rotated: bool) -> Option<Matrix> {
        let mut matrix = Matrix::IDENTITY;
        if self.is_sheared() {
            matrix = match axis {
                Axis::Horizontal => matrix.shear(self.oriented_shear(rotated), 0.0),
                Axis::Vertical => matrix.shear(0.0, self.shear()),
            };
        }
        if self.is_anamorphic() && self.height() != 0.0 {
            matrix = matrix.scale(self.width() / self.height(), 1.0);
        }
        (!matrix.is_identity()).then_some(matrix)
    }

    /// Extra advance due to shear
    ///
    /// With `cross`, the advance is measured along the axis crossing `axis`.
    /// This is the height times the shear on the horizontal axis, and the
    /// width times the shear on the vertical axis.
    pub fn shear_advance(&self, axis: Axis, rotated: bool, cross: bool) -> f64 {
        if !self.is_sheared() {
            return 0.0;
        }
        match axis.cross(cross) {
            Axis::Horizontal => self.height() * self.oriented_shear(rotated),
            Axis::Vertical => self.width() * self.shear(),
        }
    }

    fn oriented_shear(&self, rotated: bool) -> f64 {
        if rotated {
            -self.shear()
        } else {
            self.shear()
        }
    }

    /// Get this font at a scaled size
    pub fn scaled(&self, cache: &mut FontCache, scale: f64) -> Result<Font, NoFontMatch> {
        cache.get_scaled_font(self, scale)
    }
}

impl PartialEq for Font {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key && Rc::ptr_eq(&self.state, &other.state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fonts::{FontLoader, FontTables, LoadError};

    struct NoLoader;
    impl FontLoader for NoLoader {
        fn load(&self, _: &Path) -> Result<Box<dyn FontTables>, LoadError> {
            Err(LoadError::NoSource)
        }
    }

    fn font(size: Extent, features: FeatureSet) -> Font {
        let key = FontKey::new(
            "sans",
            FontStyle::Normal,
            FontWeight::NORMAL,
            "",
            Axis::Horizontal,
            size,
            features,
        );
        Font::new(key, Rc::new(FontState::new(Rc::new(NoLoader), None, None)))
    }

    #[test]
    fn upright_regular_has_no_transform() {
        let f = font(Extent::splat(20.0), FeatureSet::new());
        assert_eq!(f.shear(), 0.0);
        assert!(f.transform(Axis::Horizontal, false).is_none());
        assert_eq!(f.shear_advance(Axis::Horizontal, false, false), 0.0);
        assert_eq!(f.default_line_height(), 25.0);
    }

    #[test]
    fn oblique_shear() {
        let f = font(
            Extent::new(10.0, 20.0),
            FeatureSet::new().with(FontFeature::oblique(15.0)),
        );
        let expected = -(15f64.to_radians().tan());
        assert!((f.shear() - expected).abs() < 1e-12);
        assert!((f.shear_advance(Axis::Horizontal, false, false) - 20.0 * expected).abs() < 1e-9);

        let m = f.transform(Axis::Horizontal, false).unwrap();
        assert!((m.a - 0.5).abs() < 1e-12);

        let f = font(
            Extent::splat(20.0),
            FeatureSet::new().with(FontFeature::oblique(15.0)),
        );
        let m = f.transform(Axis::Vertical, true).unwrap();
        assert_eq!(m.shear_x(), 0.0);
        assert!((m.shear_y() - expected).abs() < 1e-12);
        let m = f.transform(Axis::Horizontal, true).unwrap();
        assert!((m.shear_x() + expected).abs() < 1e-12);
        assert!((f.shear_advance(Axis::Vertical, true, true) + 20.0 * expected).abs() < 1e-9);
    }

    #[test]
    fn shear_advance_across_axis() {
        let f = font(
            Extent::new(10.0, 20.0),
            FeatureSet::new().with(FontFeature::oblique(15.0)),
        );
        let s = -(15f64.to_radians().tan());
        let close = |a: f64, b: f64| (a - b).abs() < 1e-9;
        assert!(close(f.shear_advance(Axis::Horizontal, false, true), 10.0 * s));
        assert!(close(f.shear_advance(Axis::Vertical, false, true), 20.0 * s));
        assert!(close(f.shear_advance(Axis::Vertical, false, false), 10.0 * s));
        // Rotation only affects the horizontal shear
        assert!(close(f.shear_advance(Axis::Horizontal, true, true), 10.0 * s));
        assert!(close(f.shear_advance(Axis::Horizontal, true, false), -20.0 * s));
    }
}
