// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Simple data types

use crate::conv::{to_u32, to_usize};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Glyph identifier within a font
///
/// `GlyphId(0)` is the "missing glyph" of every font.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GlyphId(pub u16);

impl GlyphId {
    /// The "missing glyph"
    pub const NOTDEF: GlyphId = GlyphId(0);

    /// True if this is the "missing glyph"
    #[inline]
    pub fn is_notdef(self) -> bool {
        self.0 == 0
    }

    /// Get as `usize`, for indexing glyph metric arrays
    #[inline]
    pub fn get(self) -> usize {
        usize::from(self.0)
    }
}

/// Range type
///
/// Essentially this is just a `std::ops::Range<u32>`, but with convenient
/// implementations.
///
/// Note that we consider `u32` large enough for any text we wish to map.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Range {
    pub start: u32,
    pub end: u32,
}

impl Range {
    /// True if the given value is contained, inclusive of end points
    pub fn includes(&self, value: usize) -> bool {
        to_usize(self.start) <= value && value <= to_usize(self.end)
    }

    /// True if the given value is contained, exclusive of the end point
    pub fn contains(&self, value: usize) -> bool {
        to_usize(self.start) <= value && value < to_usize(self.end)
    }

    /// True if the range is empty
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Get the length of the range
    pub fn len(&self) -> usize {
        to_usize(self.end.saturating_sub(self.start))
    }

    /// Convert to a standard range
    pub fn to_std(self) -> std::ops::Range<usize> {
        to_usize(self.start)..to_usize(self.end)
    }

    /// Smallest range covering both `self` and `other`
    pub fn union(self, other: Range) -> Range {
        Range {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }
}

impl From<Range> for std::ops::Range<usize> {
    fn from(range: Range) -> std::ops::Range<usize> {
        range.to_std()
    }
}

impl From<std::ops::Range<u32>> for Range {
    fn from(range: std::ops::Range<u32>) -> Range {
        Range {
            start: range.start,
            end: range.end,
        }
    }
}

impl From<std::ops::Range<usize>> for Range {
    fn from(range: std::ops::Range<usize>) -> Range {
        Range {
            start: to_u32(range.start),
            end: to_u32(range.end),
        }
    }
}

/// Writing (block progression) axis
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Axis {
    #[default]
    Horizontal,
    Vertical,
}

impl Axis {
    /// True if vertical
    #[inline]
    pub fn is_vertical(self) -> bool {
        self == Axis::Vertical
    }

    /// True if horizontal
    #[inline]
    pub fn is_horizontal(self) -> bool {
        self == Axis::Horizontal
    }

    /// The other axis if `cross`, otherwise `self`
    #[inline]
    pub fn cross(self, cross: bool) -> Axis {
        match (self, cross) {
            (axis, false) => axis,
            (Axis::Horizontal, true) => Axis::Vertical,
            (Axis::Vertical, true) => Axis::Horizontal,
        }
    }
}

/// A two-dimensional extent: width × height
///
/// Font sizes are extents: equal components give a regular font, unequal
/// components an anamorphic (stretched or condensed) one.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Extent {
    pub width: f64,
    pub height: f64,
}

impl Extent {
    /// Construct
    #[inline]
    pub const fn new(width: f64, height: f64) -> Self {
        Extent { width, height }
    }

    /// Construct a square extent
    #[inline]
    pub const fn splat(size: f64) -> Self {
        Extent::new(size, size)
    }

    /// Get the dimension along `axis`
    ///
    /// The horizontal dimension is the width, the vertical the height.
    #[inline]
    pub fn dimension(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => self.width,
            Axis::Vertical => self.height,
        }
    }

    /// Scale both dimensions uniformly
    #[inline]
    pub fn scale(self, s: f64) -> Self {
        Extent::new(self.width * s, self.height * s)
    }

    /// Scale each dimension independently
    #[inline]
    pub fn scale2(self, sx: f64, sy: f64) -> Self {
        Extent::new(self.width * sx, self.height * sy)
    }
}

// Sizes used as map keys are compared bitwise; NaN sizes are never produced
// by construction from finite style values.
impl Eq for Extent {}

impl std::hash::Hash for Extent {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.width.to_bits().hash(state);
        self.height.to_bits().hash(state);
    }
}

/// A 2×3 affine transformation matrix
///
/// Components follow the usual `[a c e; b d f]` layout: a point `(x, y)` maps
/// to `(a·x + c·y + e, b·x + d·y + f)`. In this layout `c` is the x-shear and
/// `b` the y-shear.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Matrix {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub e: f64,
    pub f: f64,
}

impl Default for Matrix {
    fn default() -> Self {
        Matrix::IDENTITY
    }
}

impl Matrix {
    /// The identity transform
    pub const IDENTITY: Matrix = Matrix {
        a: 1.0,
        b: 0.0,
        c: 0.0,
        d: 1.0,
        e: 0.0,
        f: 0.0,
    };

    /// True if this is the identity transform
    pub fn is_identity(&self) -> bool {
        *self == Matrix::IDENTITY
    }

    /// Concatenate: `self × other` (`other` is applied first)
    pub fn concat(&self, o: &Matrix) -> Matrix {
        Matrix {
            a: self.a * o.a + self.c * o.b,
            b: self.b * o.a + self.d * o.b,
            c: self.a * o.c + self.c * o.d,
            d: self.b * o.c + self.d * o.d,
            e: self.a * o.e + self.c * o.f + self.e,
            f: self.b * o.e + self.d * o.f + self.f,
        }
    }

    /// Concatenate a shear transform
    pub fn shear(&self, shx: f64, shy: f64) -> Matrix {
        self.concat(&Matrix {
            a: 1.0,
            b: shy,
            c: shx,
            d: 1.0,
            e: 0.0,
            f: 0.0,
        })
    }

    /// Concatenate a scaling transform
    pub fn scale(&self, sx: f64, sy: f64) -> Matrix {
        self.concat(&Matrix {
            a: sx,
            b: 0.0,
            c: 0.0,
            d: sy,
            e: 0.0,
            f: 0.0,
        })
    }

    /// The x-shear component
    #[inline]
    pub fn shear_x(&self) -> f64 {
        self.c
    }

    /// The y-shear component
    #[inline]
    pub fn shear_y(&self) -> f64 {
        self.b
    }

    /// Transform a point
    pub fn apply(&self, (x, y): (f64, f64)) -> (f64, f64) {
        (
            self.a * x + self.c * y + self.e,
            self.b * x + self.d * y + self.f,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shear_then_scale() {
        let m = Matrix::IDENTITY.shear(0.5, 0.0).scale(2.0, 1.0);
        assert_eq!(m.shear_x(), 0.5);
        assert_eq!(m.shear_y(), 0.0);
        assert_eq!(m.apply((1.0, 1.0)), (2.5, 1.0));
        assert!(!m.is_identity());
        assert!(Matrix::IDENTITY.scale(1.0, 1.0).is_identity());
    }

    #[test]
    fn extent_dimensions() {
        let e = Extent::new(12.0, 24.0);
        assert_eq!(e.dimension(Axis::Horizontal), 12.0);
        assert_eq!(e.dimension(Axis::Vertical), 24.0);
        assert_eq!(e.scale(0.5), Extent::new(6.0, 12.0));
        assert_eq!(Axis::Horizontal.cross(true), Axis::Vertical);
    }
}
