// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Font resource state

use super::{
    EncodingError, FeatureSet, FontKey, FontLoader, FontTables, GlyphRanges, LoadError, Metrics,
    TableSet,
};
use crate::conv::DPU;
use crate::shaper::{decode_utf16, GlyphMapping, MappingKey, MappingState, Shaper};
use crate::{Axis, GlyphId};
use log::{debug, info, warn};
use std::cell::{OnceCell, RefCell};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::rc::Rc;

/// Load state of a font resource
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LoadState {
    /// Loading has not been attempted
    Unloaded,
    /// The resource is loaded
    Loaded,
    /// Loading failed; it is never retried
    Failed,
}

/// Loaded font resource
pub(crate) struct Loaded {
    pub tables: Box<dyn FontTables>,
    pub family_name: Option<String>,
    pub metrics: Metrics,
    pub widths: Vec<u16>,
    pub heights: Option<Vec<u16>>,
    pub use_layout: bool,
}

/// Look up a glyph's advance, clamping to the last entry
fn clamped(table: &[u16], glyph: GlyphId) -> i32 {
    table
        .get(glyph.get())
        .or(table.last())
        .map_or(0, |&v| i32::from(v))
}

impl Loaded {
    /// Unscaled advance of `glyph` along `axis`
    ///
    /// A font without vertical metrics advances one em vertically.
    pub fn advance(&self, axis: Axis, glyph: GlyphId) -> i32 {
        match (axis, self.heights.as_deref()) {
            (Axis::Horizontal, _) => clamped(&self.widths, glyph),
            (Axis::Vertical, Some(heights)) => clamped(heights, glyph),
            (Axis::Vertical, None) => i32::from(self.metrics.units_per_em),
        }
    }

    /// Unscaled advance widths of `glyphs`
    pub fn unscaled_widths(&self, glyphs: &[GlyphId]) -> Vec<i32> {
        glyphs.iter().map(|&g| clamped(&self.widths, g)).collect()
    }
}

enum Resource {
    Loaded(Loaded),
    Failed,
}

#[derive(Default)]
struct Caches {
    mappings: HashMap<MappingKey, Rc<GlyphMapping>>,
    mapping: MappingState,
}

/// A positioning adjustment scaled to presentation units
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct ScaledAdjustment {
    pub x_offset: f64,
    pub y_offset: f64,
    pub x_advance: f64,
    pub y_advance: f64,
}

/// State of one font resource
///
/// One `FontState` exists per font source and is shared by every [`Font`]
/// using that source, whatever its size or features. The resource is loaded
/// on first use; a failed load is remembered and every query then yields
/// defaults (zero metrics, family name "unknown", unmapped glyphs).
///
/// Glyph mappings are cached by text and features for the lifetime of the
/// state.
///
/// [`Font`]: super::Font
pub struct FontState {
    loader: Rc<dyn FontLoader>,
    source: Option<PathBuf>,
    force_path: Option<GlyphRanges>,
    resource: OnceCell<Resource>,
    caches: RefCell<Caches>,
}

impl std::fmt::Debug for FontState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontState")
            .field("source", &self.source)
            .field("force_path", &self.force_path)
            .field("state", &self.load_state())
            .finish_non_exhaustive()
    }
}

impl FontState {
    /// Construct (unloaded)
    pub fn new(
        loader: Rc<dyn FontLoader>,
        source: Option<PathBuf>,
        force_path: Option<GlyphRanges>,
    ) -> Self {
        FontState {
            loader,
            source,
            force_path,
            resource: OnceCell::new(),
            caches: RefCell::new(Caches::default()),
        }
    }

    /// Path of the font resource
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// Glyphs always drawn from outlines
    pub fn force_path(&self) -> Option<&GlyphRanges> {
        self.force_path.as_ref()
    }

    /// Current load state
    ///
    /// This does not trigger loading.
    pub fn load_state(&self) -> LoadState {
        match self.resource.get() {
            None => LoadState::Unloaded,
            Some(Resource::Loaded(_)) => LoadState::Loaded,
            Some(Resource::Failed) => LoadState::Failed,
        }
    }

    /// Load the resource if not yet attempted, returning the resulting state
    pub fn ensure_loaded(&self) -> LoadState {
        self.loaded();
        self.load_state()
    }

    fn loaded(&self) -> Option<&Loaded> {
        let resource = self.resource.get_or_init(|| match self.load() {
            Ok(loaded) => {
                info!("Loaded font instance '{}'", self.display_source());
                Resource::Loaded(loaded)
            }
            Err(LoadError::NoSource) => {
                debug!("Font instance has no source; using defaults");
                Resource::Failed
            }
            Err(err) => {
                warn!(
                    "Failed to load font instance '{}': {err}",
                    self.display_source()
                );
                Resource::Failed
            }
        });
        match resource {
            Resource::Loaded(loaded) => Some(loaded),
            Resource::Failed => None,
        }
    }

    fn display_source(&self) -> std::path::Display<'_> {
        self.source.as_deref().unwrap_or(Path::new("")).display()
    }

    fn load(&self) -> Result<Loaded, LoadError> {
        let source = self.source.as_deref().ok_or(LoadError::NoSource)?;
        let tables = self.loader.load(source)?;

        let present = tables.tables();
        for (table, name) in [
            (TableSet::NAME, "name"),
            (TableSet::OS2, "OS/2"),
            (TableSet::CMAP, "cmap"),
        ] {
            if !present.contains(table) {
                return Err(LoadError::MissingTable(name));
            }
        }
        let metrics = tables.metrics().ok_or(LoadError::MissingTable("OS/2"))?;

        let use_layout = match tables.layout() {
            Some(layout) if layout.has_substitution() || layout.has_positioning() => true,
            Some(_) => {
                debug!(
                    "No substitution or positioning in '{}'; advanced layout disabled",
                    source.display()
                );
                false
            }
            None => false,
        };

        Ok(Loaded {
            family_name: tables.family_name(),
            metrics,
            widths: tables.advances(Axis::Horizontal).unwrap_or_default(),
            heights: tables.advances(Axis::Vertical),
            use_layout,
            tables,
        })
    }

    /// True if the complex glyph mapping pipeline is used
    pub fn uses_layout_tables(&self) -> bool {
        self.loaded().is_some_and(|font| font.use_layout)
    }

    /// Font design units per em
    pub fn units_per_em(&self) -> u16 {
        self.loaded()
            .map_or(Metrics::default().units_per_em, |font| font.metrics.units_per_em)
    }

    fn scale(&self, key: &FontKey, axis: Axis) -> Option<(&Loaded, DPU)> {
        let font = self.loaded()?;
        let dpu = DPU::new(key.size().dimension(axis), font.metrics.units_per_em);
        Some((font, dpu))
    }

    /// Preferred family name
    ///
    /// Falls back to the family of `key` if the font has no usable name, or
    /// `"unknown"` if the font failed to load.
    pub fn preferred_family_name(&self, key: &FontKey) -> String {
        match self.loaded() {
            Some(font) => font
                .family_name
                .clone()
                .unwrap_or_else(|| key.family().to_string()),
            None => "unknown".to_string(),
        }
    }

    /// Scaled leading
    pub fn leading(&self, key: &FontKey) -> f64 {
        self.scale(key, key.axis())
            .map_or(0.0, |(font, dpu)| dpu.i32_to_units(font.metrics.leading()))
    }

    /// Scaled ascent
    pub fn ascent(&self, key: &FontKey) -> f64 {
        self.scale(key, key.axis())
            .map_or(0.0, |(font, dpu)| dpu.i16_to_units(font.metrics.ascent))
    }

    /// Scaled descent (usually negative)
    pub fn descent(&self, key: &FontKey) -> f64 {
        self.scale(key, key.axis())
            .map_or(0.0, |(font, dpu)| dpu.i16_to_units(font.metrics.descent))
    }

    /// Map `text` with `features`
    ///
    /// The result is cached: equal text and features yield the same
    /// [`Rc`]. A font which failed to load maps every character to glyph
    /// zero.
    pub fn glyph_mapping(&self, key: &FontKey, text: &str, features: &FeatureSet) -> Rc<GlyphMapping> {
        let mapping_key = MappingKey::new(text, features.clone());
        if let Some(mapping) = self.caches.borrow().mappings.get(&mapping_key) {
            return mapping.clone();
        }

        let mapping = match self.loaded() {
            Some(font) => {
                let mut caches = self.caches.borrow_mut();
                let source = self.source.as_deref().unwrap_or(Path::new(""));
                let mut shaper =
                    Shaper::new(font, &mut caches.mapping, source, self.force_path.as_ref());
                shaper.map(key.axis(), mapping_key.clone())
            }
            None => GlyphMapping::unmapped(mapping_key.clone(), key.axis()),
        };
        self.insert(mapping_key, mapping)
    }

    /// Map UTF-16 `text` with `features`
    ///
    /// Fails if `text` contains an isolated surrogate.
    pub fn glyph_mapping_utf16(
        &self,
        key: &FontKey,
        text: &[u16],
        features: &FeatureSet,
    ) -> Result<Rc<GlyphMapping>, EncodingError> {
        let text = decode_utf16(text)?;
        Ok(self.glyph_mapping(key, &text, features))
    }

    fn insert(&self, key: MappingKey, mapping: GlyphMapping) -> Rc<GlyphMapping> {
        let mapping = Rc::new(mapping);
        self.caches
            .borrow_mut()
            .mappings
            .insert(key, mapping.clone());
        mapping
    }

    /// Get the reversed form of `mapping`
    ///
    /// A mapping which is already reversed is returned as is. Reversed
    /// mappings are cached under the original features plus the reversing
    /// (and mirroring) pseudo-features.
    pub fn maybe_reverse(&self, mapping: &Rc<GlyphMapping>, mirror: bool) -> Rc<GlyphMapping> {
        if mapping.features().is_reversed() {
            return mapping.clone();
        }
        let key = mapping.key().reversed(mirror);
        if let Some(reversed) = self.caches.borrow().mappings.get(&key) {
            return reversed.clone();
        }
        let reversed = mapping.reverse(key.clone());
        self.insert(key, reversed)
    }

    /// Map a glyph back to a character
    ///
    /// Returns `None` if the font failed to load.
    pub fn character(&self, glyph: GlyphId) -> Option<char> {
        let font = self.loaded()?;
        let mut caches = self.caches.borrow_mut();
        let source = self.source.as_deref().unwrap_or(Path::new(""));
        let mut shaper = Shaper::new(font, &mut caches.mapping, source, self.force_path.as_ref());
        Some(shaper.character_of(glyph))
    }

    /// Scaled advance of each glyph of `mapping`
    ///
    /// Advances are scaled by the font size along the mapping's advance axis.
    pub fn scaled_advances(&self, key: &FontKey, mapping: &GlyphMapping) -> Vec<f64> {
        match self.scale(key, mapping.advance_axis()) {
            Some((_, dpu)) => mapping
                .advances()
                .iter()
                .map(|&a| dpu.i32_to_units(a))
                .collect(),
            None => vec![0.0; mapping.len()],
        }
    }

    /// Scaled total advance of `mapping`
    pub fn scaled_advance(&self, key: &FontKey, mapping: &GlyphMapping) -> f64 {
        self.scaled_advances(key, mapping).iter().sum()
    }

    /// Scaled positioning adjustments of `mapping`, if any
    pub fn scaled_adjustments(
        &self,
        key: &FontKey,
        mapping: &GlyphMapping,
    ) -> Option<Vec<ScaledAdjustment>> {
        let adjustments = mapping.adjustments()?;
        let (_, dpu) = self.scale(key, mapping.advance_axis())?;
        Some(
            adjustments
                .iter()
                .map(|a| ScaledAdjustment {
                    x_offset: dpu.i32_to_units(a.x_offset),
                    y_offset: dpu.i32_to_units(a.y_offset),
                    x_advance: dpu.i32_to_units(a.x_advance),
                    y_advance: dpu.i32_to_units(a.y_advance),
                })
                .collect(),
        )
    }

    /// Unscaled legacy kerning of each adjacent glyph pair of `mapping`
    ///
    /// Returns `None` when the font has no kerning or kerning does not apply
    /// (disabled, or not a horizontal mapping).
    pub fn kerning(&self, mapping: &GlyphMapping) -> Option<Vec<i32>> {
        if !mapping.advance_axis().is_horizontal() || !mapping.key().is_kerning_enabled() {
            return None;
        }
        self.loaded()?.tables.kerning(mapping.glyphs())
    }

    /// Unscaled advance widths of `glyphs`
    pub fn unscaled_widths(&self, glyphs: &[GlyphId]) -> Vec<i32> {
        match self.loaded() {
            Some(font) => font.unscaled_widths(glyphs),
            None => vec![0; glyphs.len()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_to_last() {
        let table = [10, 20, 30];
        assert_eq!(clamped(&table, GlyphId(1)), 20);
        assert_eq!(clamped(&table, GlyphId(7)), 30);
        assert_eq!(clamped(&[], GlyphId(7)), 0);
    }

    #[test]
    fn no_source_fails_once() {
        struct Never;
        impl FontLoader for Never {
            fn load(&self, _: &Path) -> Result<Box<dyn FontTables>, LoadError> {
                unreachable!()
            }
        }

        let state = FontState::new(Rc::new(Never), None, None);
        assert_eq!(state.load_state(), LoadState::Unloaded);
        let key = FontKey::plain("x", Axis::Horizontal, crate::Extent::splat(10.0));
        assert_eq!(state.ascent(&key), 0.0);
        assert_eq!(state.preferred_family_name(&key), "unknown");
        assert_eq!(state.load_state(), LoadState::Failed);

        let mapping = state.glyph_mapping(&key, "ab", key.features());
        assert_eq!(mapping.glyphs(), [GlyphId::NOTDEF; 2]);
        assert!(Rc::ptr_eq(&mapping, &state.glyph_mapping(&key, "ab", key.features())));
    }
}
