// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Font features
//!
//! A [`FontFeature`] is a tag plus zero or more typed arguments. Lower-case
//! tags name OpenType layout features (`kern`, `vert`, `hwid`, …) or
//! synthetic font variations (`oblq`); upper-case tags name private
//! pseudo-features which parameterize glyph mapping (`SCPT`, `LANG`, `BIDI`,
//! `ORNT`, `REVS`, `MIRR`).

use smallvec::SmallVec;
use std::borrow::Cow;
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;
use std::hash::{Hash, Hasher};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Well-known feature tags
pub mod tag {
    /// Half-width variants
    pub const HWID: &str = "hwid";
    /// Full-width variants
    pub const FWID: &str = "fwid";
    /// Kerning
    pub const KERN: &str = "kern";
    /// Synthetic oblique: argument is the slant angle in degrees
    pub const OBLQ: &str = "oblq";
    /// Ruby variants
    pub const RUBY: &str = "ruby";
    /// Vertical writing variants (rotation)
    pub const VERT: &str = "vert";
    /// Bidi embedding level
    pub const BIDI: &str = "BIDI";
    /// Resolved language
    pub const LANG: &str = "LANG";
    /// Mirrored glyphs
    pub const MIRR: &str = "MIRR";
    /// Glyph orientation
    pub const ORNT: &str = "ORNT";
    /// Reversed glyphs
    pub const REVS: &str = "REVS";
    /// Resolved script
    pub const SCPT: &str = "SCPT";
}

/// Glyph orientation relative to the writing direction
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Orientation {
    #[default]
    Rotate000,
    Rotate090,
    Rotate180,
    Rotate270,
}

impl Orientation {
    /// True if rotated by a quarter turn (either way)
    pub fn is_rotated(self) -> bool {
        matches!(self, Orientation::Rotate090 | Orientation::Rotate270)
    }
}

/// A typed feature argument
///
/// Numbers compare and hash by their bit pattern (after normalizing `-0.0`),
/// so that features can key maps.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FeatureArg {
    Bool(bool),
    Integer(i32),
    Number(f64),
    Text(String),
    Orientation(Orientation),
}

impl FeatureArg {
    fn rank(&self) -> u8 {
        match self {
            FeatureArg::Bool(_) => 0,
            FeatureArg::Integer(_) => 1,
            FeatureArg::Number(_) => 2,
            FeatureArg::Text(_) => 3,
            FeatureArg::Orientation(_) => 4,
        }
    }

    fn number_bits(x: f64) -> u64 {
        if x == 0.0 {
            0
        } else {
            x.to_bits()
        }
    }

    /// Get as a `bool`, if this is one
    pub fn as_bool(&self) -> Option<bool> {
        match *self {
            FeatureArg::Bool(b) => Some(b),
            _ => None,
        }
    }

    /// Get as an `i32`, if this is one
    pub fn as_integer(&self) -> Option<i32> {
        match *self {
            FeatureArg::Integer(i) => Some(i),
            _ => None,
        }
    }

    /// Get as an `f64` (integers convert)
    pub fn as_number(&self) -> Option<f64> {
        match *self {
            FeatureArg::Number(x) => Some(x),
            FeatureArg::Integer(i) => Some(f64::from(i)),
            _ => None,
        }
    }

    /// Get as a `&str`, if this is text
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FeatureArg::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl PartialEq for FeatureArg {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FeatureArg {}

impl PartialOrd for FeatureArg {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FeatureArg {
    fn cmp(&self, other: &Self) -> Ordering {
        use FeatureArg::*;
        match (self, other) {
            (Bool(a), Bool(b)) => a.cmp(b),
            (Integer(a), Integer(b)) => a.cmp(b),
            (Number(a), Number(b)) => {
                if Self::number_bits(*a) == Self::number_bits(*b) {
                    Ordering::Equal
                } else {
                    a.total_cmp(b)
                }
            }
            (Text(a), Text(b)) => a.cmp(b),
            (Orientation(a), Orientation(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

impl Hash for FeatureArg {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.rank().hash(state);
        match self {
            FeatureArg::Bool(b) => b.hash(state),
            FeatureArg::Integer(i) => i.hash(state),
            FeatureArg::Number(x) => Self::number_bits(*x).hash(state),
            FeatureArg::Text(s) => s.hash(state),
            FeatureArg::Orientation(o) => o.hash(state),
        }
    }
}

impl fmt::Display for FeatureArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeatureArg::Bool(b) => write!(f, "{b}"),
            FeatureArg::Integer(i) => write!(f, "{i}"),
            FeatureArg::Number(x) => write!(f, "{x}"),
            FeatureArg::Text(s) => write!(f, "{s}"),
            FeatureArg::Orientation(o) => write!(f, "{o:?}"),
        }
    }
}

impl From<bool> for FeatureArg {
    fn from(b: bool) -> Self {
        FeatureArg::Bool(b)
    }
}

impl From<i32> for FeatureArg {
    fn from(i: i32) -> Self {
        FeatureArg::Integer(i)
    }
}

impl From<f64> for FeatureArg {
    fn from(x: f64) -> Self {
        FeatureArg::Number(x)
    }
}

impl From<&str> for FeatureArg {
    fn from(s: &str) -> Self {
        FeatureArg::Text(s.to_string())
    }
}

impl From<Orientation> for FeatureArg {
    fn from(o: Orientation) -> Self {
        FeatureArg::Orientation(o)
    }
}

/// A font feature: tag and arguments
///
/// Equality, ordering and hashing are by tag then arguments.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FontFeature {
    tag: Cow<'static, str>,
    args: SmallVec<[FeatureArg; 1]>,
}

impl FontFeature {
    /// Construct a feature with no arguments
    pub fn new(tag: impl Into<Cow<'static, str>>) -> Self {
        FontFeature {
            tag: tag.into(),
            args: SmallVec::new(),
        }
    }

    /// Construct a feature with arguments
    pub fn with_args<I>(tag: impl Into<Cow<'static, str>>, args: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<FeatureArg>,
    {
        FontFeature {
            tag: tag.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Construct a feature with a single argument
    pub fn with_arg(tag: impl Into<Cow<'static, str>>, arg: impl Into<FeatureArg>) -> Self {
        Self::with_args(tag, [arg.into()])
    }

    /// Kerning on or off
    pub fn kerning(enabled: bool) -> Self {
        Self::with_arg(tag::KERN, enabled)
    }

    /// Synthetic oblique slant, in degrees
    pub fn oblique(degrees: f64) -> Self {
        Self::with_arg(tag::OBLQ, degrees)
    }

    /// Vertical writing rotation
    pub fn vertical() -> Self {
        Self::new(tag::VERT)
    }

    /// Script override (an OpenType script tag or `"auto"`)
    pub fn script(script: &str) -> Self {
        Self::with_arg(tag::SCPT, script)
    }

    /// Language override (an OpenType language tag or `"none"`)
    pub fn language(language: &str) -> Self {
        Self::with_arg(tag::LANG, language)
    }

    /// Bidi embedding level
    pub fn bidi_level(level: u8) -> Self {
        Self::with_arg(tag::BIDI, i32::from(level))
    }

    /// Glyph orientation
    pub fn orientation(orientation: Orientation) -> Self {
        Self::with_arg(tag::ORNT, orientation)
    }

    /// The feature tag
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// The feature arguments
    pub fn args(&self) -> &[FeatureArg] {
        &self.args
    }

    /// Get an argument by index
    pub fn arg(&self, index: usize) -> Option<&FeatureArg> {
        self.args.get(index)
    }

    /// True for private (upper-case) pseudo-features
    pub fn is_pseudo(&self) -> bool {
        self.tag.bytes().all(|b| !b.is_ascii_lowercase())
    }
}

impl fmt::Display for FontFeature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "['{}'", self.tag)?;
        for arg in &self.args {
            write!(f, ",{arg}")?;
        }
        write!(f, "]")
    }
}

/// An ordered set of features, at most one per tag
///
/// Inserting a feature replaces any feature with the same tag. Iteration is
/// in tag order.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FeatureSet(BTreeMap<Cow<'static, str>, FontFeature>);

impl FeatureSet {
    /// Construct an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert, replacing any feature with the same tag
    pub fn insert(&mut self, feature: FontFeature) {
        self.0.insert(feature.tag.clone(), feature);
    }

    /// Builder-style insert
    #[must_use]
    pub fn with(mut self, feature: FontFeature) -> Self {
        self.insert(feature);
        self
    }

    /// Insert all features of `other`, replacing those with the same tag
    pub fn augment(&mut self, other: &FeatureSet) {
        for feature in other.iter() {
            self.insert(feature.clone());
        }
    }

    /// Remove by tag
    pub fn remove(&mut self, tag: &str) -> Option<FontFeature> {
        self.0.remove(tag)
    }

    /// Get by tag
    pub fn get(&self, tag: &str) -> Option<&FontFeature> {
        self.0.get(tag)
    }

    /// True if a feature with this tag is present
    pub fn contains(&self, tag: &str) -> bool {
        self.0.contains_key(tag)
    }

    /// Number of features
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate in tag order
    pub fn iter(&self) -> impl Iterator<Item = &FontFeature> + '_ {
        self.0.values()
    }

    fn first_arg(&self, tag: &str) -> Option<&FeatureArg> {
        self.get(tag).and_then(|f| f.arg(0))
    }

    /// Kerning is enabled unless explicitly disabled
    pub fn is_kerning_enabled(&self) -> bool {
        self.first_arg(tag::KERN)
            .and_then(FeatureArg::as_bool)
            .unwrap_or(true)
    }

    /// Synthetic oblique angle in degrees, or zero
    pub fn oblique_angle(&self) -> f64 {
        self.first_arg(tag::OBLQ)
            .and_then(FeatureArg::as_number)
            .unwrap_or(0.0)
    }

    /// Requested script, if any
    pub fn script(&self) -> Option<&str> {
        self.first_arg(tag::SCPT).and_then(FeatureArg::as_text)
    }

    /// Requested language, if any
    pub fn language(&self) -> Option<&str> {
        self.first_arg(tag::LANG).and_then(FeatureArg::as_text)
    }

    /// Glyph orientation (default: not rotated)
    pub fn orientation(&self) -> Orientation {
        match self.first_arg(tag::ORNT) {
            Some(FeatureArg::Orientation(o)) => *o,
            _ => Orientation::default(),
        }
    }

    /// Bidi embedding level, if any
    pub fn bidi_level(&self) -> Option<u8> {
        self.first_arg(tag::BIDI)
            .and_then(FeatureArg::as_integer)
            .and_then(|level| u8::try_from(level).ok())
    }

    /// True if the bidi embedding level is right-to-left
    pub fn requires_mirror(&self) -> bool {
        self.bidi_level()
            .and_then(|level| unicode_bidi::Level::new(level).ok())
            .is_some_and(|level| level.is_rtl())
    }

    /// True if glyphs are reversed
    pub fn is_reversed(&self) -> bool {
        self.first_arg(tag::REVS)
            .and_then(FeatureArg::as_bool)
            .unwrap_or(false)
    }

    /// True if glyphs are mirrored
    pub fn is_mirrored(&self) -> bool {
        self.first_arg(tag::MIRR)
            .and_then(FeatureArg::as_bool)
            .unwrap_or(false)
    }
}

impl FromIterator<FontFeature> for FeatureSet {
    fn from_iter<T: IntoIterator<Item = FontFeature>>(iter: T) -> Self {
        let mut set = FeatureSet::new();
        for feature in iter {
            set.insert(feature);
        }
        set
    }
}

impl Extend<FontFeature> for FeatureSet {
    fn extend<T: IntoIterator<Item = FontFeature>>(&mut self, iter: T) {
        for feature in iter {
            self.insert(feature);
        }
    }
}

impl fmt::Display for FeatureSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, feature) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{feature}")?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;

    fn hash_of<T: Hash>(x: &T) -> u64 {
        let mut h = DefaultHasher::new();
        x.hash(&mut h);
        h.finish()
    }

    #[test]
    fn equality_by_tag_and_args() {
        let a = FontFeature::oblique(12.0);
        let b = FontFeature::with_arg("oblq", 12.0);
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
        assert_ne!(a, FontFeature::oblique(-12.0));
        assert_eq!(FontFeature::oblique(0.0), FontFeature::oblique(-0.0));
        assert_ne!(FontFeature::kerning(true), FontFeature::kerning(false));
    }

    #[test]
    fn set_replaces_by_tag() {
        let mut set = FeatureSet::new().with(FontFeature::kerning(true));
        set.insert(FontFeature::kerning(false));
        assert_eq!(set.len(), 1);
        assert!(!set.is_kerning_enabled());
        assert!(FeatureSet::new().is_kerning_enabled());
    }

    #[test]
    fn set_order_is_insertion_independent() {
        let a: FeatureSet = [FontFeature::vertical(), FontFeature::kerning(true)]
            .into_iter()
            .collect();
        let b: FeatureSet = [FontFeature::kerning(true), FontFeature::vertical()]
            .into_iter()
            .collect();
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
        assert_eq!(a.to_string(), "[['kern',true],['vert']]");
    }

    #[test]
    fn pseudo_features() {
        let set = FeatureSet::new()
            .with(FontFeature::bidi_level(1))
            .with(FontFeature::orientation(Orientation::Rotate090))
            .with(FontFeature::script("latn"));
        assert!(set.requires_mirror());
        assert!(set.orientation().is_rotated());
        assert_eq!(set.script(), Some("latn"));
        assert_eq!(set.language(), None);
        assert!(FontFeature::bidi_level(2).is_pseudo());
        assert!(!FontFeature::vertical().is_pseudo());
        let even = FeatureSet::new().with(FontFeature::bidi_level(2));
        assert!(!even.requires_mirror());
    }
}
