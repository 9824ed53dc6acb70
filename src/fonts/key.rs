// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Font identity

use super::{FeatureSet, FontFeature, FontSpecification, FontStyle, FontWeight};
use crate::{Axis, Extent};
use std::fmt;

/// Identity of a font request
///
/// A key names a family, style, weight and language together with the
/// writing axis, size and feature set. The family and language are
/// case-folded on construction. Keys on the vertical axis always carry the
/// `vert` feature.
///
/// Keys are immutable values: derived keys (e.g. [`FontKey::scaled`]) are new
/// values. Equality and hashing compare every field, including features.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FontKey {
    family: String,
    style: FontStyle,
    weight: FontWeight,
    language: String,
    axis: Axis,
    size: Extent,
    features: FeatureSet,
}

impl FontKey {
    /// Construct
    pub fn new(
        family: &str,
        style: FontStyle,
        weight: FontWeight,
        language: &str,
        axis: Axis,
        size: Extent,
        mut features: FeatureSet,
    ) -> Self {
        if axis.is_vertical() {
            features.insert(FontFeature::vertical());
        }
        FontKey {
            family: family.to_lowercase(),
            style,
            weight,
            language: language.to_lowercase(),
            axis,
            size,
            features,
        }
    }

    /// Construct a key with normal style and weight, no language and no
    /// features
    pub fn plain(family: &str, axis: Axis, size: Extent) -> Self {
        Self::new(
            family,
            FontStyle::Normal,
            FontWeight::NORMAL,
            "",
            axis,
            size,
            FeatureSet::new(),
        )
    }

    /// Derive a key with size multiplied by `scale`
    ///
    /// Features are preserved.
    #[must_use]
    pub fn scaled(&self, scale: f64) -> Self {
        self.scaled2(scale, scale)
    }

    /// Derive a key with width and height scaled independently
    #[must_use]
    pub fn scaled2(&self, scale_x: f64, scale_y: f64) -> Self {
        FontKey {
            size: self.size.scale2(scale_x, scale_y),
            ..self.clone()
        }
    }

    /// Derive a key with a new size
    ///
    /// Features are not preserved (apart from those implied by the axis).
    #[must_use]
    pub fn with_size(&self, size: Extent) -> Self {
        Self::new(
            &self.family,
            self.style,
            self.weight,
            &self.language,
            self.axis,
            size,
            FeatureSet::new(),
        )
    }

    /// The catalog entry this key would match, without a source
    pub fn specification(&self) -> FontSpecification {
        FontSpecification::new(&self.family, self.style, self.weight, &self.language)
    }

    /// Family name (lower case)
    pub fn family(&self) -> &str {
        &self.family
    }

    pub fn style(&self) -> FontStyle {
        self.style
    }

    pub fn weight(&self) -> FontWeight {
        self.weight
    }

    /// Language tag (lower case, may be empty)
    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn size(&self) -> Extent {
        self.size
    }

    pub fn features(&self) -> &FeatureSet {
        &self.features
    }

    /// Get a feature by tag
    pub fn feature(&self, tag: &str) -> Option<&FontFeature> {
        self.features.get(tag)
    }

    /// True unless the `kern` feature disables kerning
    pub fn is_kerning_enabled(&self) -> bool {
        self.features.is_kerning_enabled()
    }

    /// True if the `oblq` feature carries a non-zero angle
    pub fn is_sheared(&self) -> bool {
        self.shear_angle() != 0.0
    }

    /// Synthetic oblique angle in degrees
    pub fn shear_angle(&self) -> f64 {
        self.features.oblique_angle()
    }
}

impl fmt::Display for FontKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{},{},{},{}x{},{},{:?},{}]",
            self.family.to_uppercase(),
            self.style,
            self.weight,
            self.size.width,
            self.size.height,
            self.language.to_uppercase(),
            self.axis,
            self.features
        )
    }
}
