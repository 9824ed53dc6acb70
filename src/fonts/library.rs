// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Font cache

use super::{
    Catalog, FeatureSet, Font, FontKey, FontLoader, FontSpecification, FontState, FontStyle,
    FontWeight, TtfLoader,
};
use crate::{Axis, Environment, Extent};
use log::debug;
use std::collections::hash_map::{Entry, HashMap};
use std::num::ParseIntError;
use std::path::PathBuf;
use std::rc::Rc;
use thiserror::Error;

/// Font specification errors
#[derive(Error, Debug)]
pub enum SpecificationError {
    /// Malformed `forcePath` range
    #[error("invalid range syntax: {0}")]
    InvalidRange(&'static str),
    /// Malformed `forcePath` range limit
    #[error("invalid range limit: {0}")]
    InvalidLimit(#[from] ParseIntError),
    #[error("malformed font specification document")]
    Xml(#[from] roxmltree::Error),
    #[error("unable to read font specification document")]
    Io(#[from] std::io::Error),
}

/// Font resource loading errors
///
/// These are never returned from the [`FontCache`]: a resource which fails to
/// load is reported once and yields default metrics thereafter.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("font has no source")]
    NoSource,
    #[error("unable to read font file")]
    Io(#[from] std::io::Error),
    #[error("font parse error")]
    Parse(#[from] ttf_parser::FaceParsingError),
    #[error("font has no usable '{0}' table")]
    MissingTable(&'static str),
}

/// Ill-formed UTF-16 text
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodingError {
    #[error("ill-formed UTF-16 sequence, contains isolated high surrogate at index {0}")]
    IsolatedHighSurrogate(usize),
    #[error("ill-formed UTF-16 sequence, contains isolated low surrogate at index {0}")]
    IsolatedLowSurrogate(usize),
}

/// No matching font found
#[derive(Error, Debug)]
#[error("no font match")]
pub struct NoFontMatch;

/// A cache of fonts
///
/// The cache resolves font requests against a [`Catalog`] of font
/// specifications and memoizes one [`Font`] per [`FontKey`] and one
/// [`FontState`] per font resource. It is single-threaded: fonts share state
/// through [`Rc`], and callers needing parallel layout should use one cache
/// per thread.
///
/// Memoized state is never evicted individually; it grows with the number of
/// distinct keys and mapped texts until [`FontCache::clear`].
pub struct FontCache {
    env: Environment,
    loader: Rc<dyn FontLoader>,
    catalog: Catalog,
    fonts: HashMap<FontKey, Font>,
    states: HashMap<PathBuf, Rc<FontState>>,
}

impl FontCache {
    /// Construct, loading fonts with [`TtfLoader`]
    ///
    /// Call [`FontCache::maybe_load`] before use: until then the catalog is
    /// empty and all fonts are synthesized defaults.
    pub fn new(env: Environment) -> Self {
        Self::with_loader(env, Rc::new(TtfLoader))
    }

    /// Construct with a custom font loader
    pub fn with_loader(env: Environment, loader: Rc<dyn FontLoader>) -> Self {
        FontCache {
            env,
            loader,
            catalog: Catalog::new(),
            fonts: HashMap::new(),
            states: HashMap::new(),
        }
    }

    /// Use a pre-built catalog in place of the documents of the environment
    #[must_use]
    pub fn with_catalog(mut self, catalog: Catalog) -> Self {
        self.catalog = catalog;
        self
    }

    /// Access the environment
    pub fn environment(&self) -> &Environment {
        &self.env
    }

    /// Access the catalog
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Load the catalog, if not already loaded
    ///
    /// See [`Catalog::load`].
    pub fn maybe_load(&mut self) -> Result<&mut Self, SpecificationError> {
        self.catalog.load(&self.env)?;
        Ok(self)
    }

    /// Get the font for `key`
    ///
    /// Fails if no specification is compatible with `key`.
    pub fn get(&mut self, key: &FontKey) -> Result<Font, NoFontMatch> {
        if let Some(font) = self.fonts.get(key) {
            return Ok(font.clone());
        }
        let spec = self.catalog.find_specification(key).ok_or(NoFontMatch)?.clone();
        Ok(self.create(key.clone(), &spec))
    }

    fn create(&mut self, key: FontKey, spec: &FontSpecification) -> Font {
        let state = match spec.source.as_ref() {
            Some(source) => match self.states.entry(source.clone()) {
                Entry::Occupied(entry) => entry.get().clone(),
                Entry::Vacant(entry) => entry
                    .insert(Rc::new(FontState::new(
                        self.loader.clone(),
                        Some(source.clone()),
                        spec.force_path.clone(),
                    )))
                    .clone(),
            },
            None => Rc::new(FontState::new(self.loader.clone(), None, None)),
        };
        debug!("Created font {key}");
        let font = Font::new(key.clone(), state);
        self.fonts.insert(key, font.clone());
        font
    }

    /// Get a font for `key`, synthesizing one if nothing matches
    ///
    /// A synthesized font has no source; it fails to load and so reports
    /// default metrics and maps all characters to the missing glyph.
    fn get_or_synthesize(&mut self, key: FontKey) -> Font {
        match self.get(&key) {
            Ok(font) => font,
            Err(NoFontMatch) => {
                let spec = key.specification();
                self.create(key, &spec)
            }
        }
    }

    /// Get the default font
    ///
    /// This never fails.
    pub fn get_default_font(&mut self, axis: Axis, size: Extent) -> Font {
        let key = FontKey::plain(&self.env.default_family, axis, size);
        self.get_or_synthesize(key)
    }

    /// Get the last resort font
    ///
    /// This never fails.
    pub fn get_last_resort_font(&mut self, axis: Axis, size: Extent) -> Font {
        let key = FontKey::plain(&self.env.last_resort_family, axis, size);
        self.get_or_synthesize(key)
    }

    /// Map a font request to a font
    ///
    /// An exact match is tried for each family in order; failing that, the
    /// best match (see [`Catalog::find_best_match`]); failing that, the
    /// default font's specification.
    #[allow(clippy::too_many_arguments)]
    pub fn map_font<S: AsRef<str>>(
        &mut self,
        families: &[S],
        style: FontStyle,
        weight: FontWeight,
        language: &str,
        axis: Axis,
        size: Extent,
        features: FeatureSet,
    ) -> Result<Font, NoFontMatch> {
        let spec = self
            .catalog
            .find_exact_match(families, style, weight, language)
            .or_else(|| {
                self.catalog
                    .find_best_match(families, style, weight, language)
            })
            .cloned();
        let spec = match spec {
            Some(spec) => spec,
            None => {
                let default = FontKey::plain(&self.env.default_family, axis, size);
                self.catalog
                    .find_specification(&default)
                    .cloned()
                    .unwrap_or_else(|| default.specification())
            }
        };
        let key = FontKey::new(
            &spec.family,
            spec.style,
            spec.weight,
            &spec.language,
            axis,
            size,
            features,
        );
        self.get(&key)
    }

    /// Get a font with size scaled by `scale`
    pub fn get_scaled_font(&mut self, font: &Font, scale: f64) -> Result<Font, NoFontMatch> {
        self.get(&font.key().scaled(scale))
    }

    /// Get a font with width and height scaled independently
    pub fn get_scaled_font2(
        &mut self,
        font: &Font,
        scale_x: f64,
        scale_y: f64,
    ) -> Result<Font, NoFontMatch> {
        self.get(&font.key().scaled2(scale_x, scale_y))
    }

    /// Number of memoized fonts
    pub fn font_count(&self) -> usize {
        self.fonts.len()
    }

    /// Drop all memoized fonts and font states
    ///
    /// The catalog is kept.
    pub fn clear(&mut self) {
        self.fonts.clear();
        self.states.clear();
    }
}
