// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Type conversion utilities
//!
//! Glyph and character indices are represented as `u32` instead of `usize`
//! in order to save space (a single mapping request never approaches
//! `u32::MAX` characters, so `u32` is always an appropriate index type).

use easy_cast::{Cast, Conv};

/// Convert `usize` → `u32`
///
/// This is a "safer" wrapper around `as` ensuring (on debug builds) that the
/// input value may be represented correctly by `u32`.
#[inline]
pub fn to_u32(x: usize) -> u32 {
    x.cast()
}

/// Convert `u32` → `usize`
///
/// This is a "safer" wrapper around `as` ensuring that the operation is
/// zero-extension.
#[inline]
pub fn to_usize(x: u32) -> usize {
    x.cast()
}

/// Scale factor: presentation units per font design unit
///
/// Font files express metrics in *design units* (typically 1000 or 2048 per
/// em). Multiplying by `size / units_per_em` yields presentation units for a
/// font of the given size.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DPU(pub f64);

impl DPU {
    /// Construct from a font size (presentation units per em) and the font's
    /// units per em
    ///
    /// A zero `units_per_em` yields a zero scale.
    #[inline]
    pub fn new(size: f64, units_per_em: u16) -> Self {
        if units_per_em == 0 {
            DPU(0.0)
        } else {
            DPU(size / f64::conv(units_per_em))
        }
    }

    #[inline]
    pub(crate) fn i32_to_units(self, x: i32) -> f64 {
        f64::conv(x) * self.0
    }

    #[inline]
    pub(crate) fn i16_to_units(self, x: i16) -> f64 {
        f64::conv(x) * self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dpu_scaling() {
        let dpu = DPU::new(24.0, 2048);
        assert_eq!(dpu.i32_to_units(2048), 24.0);
        assert_eq!(dpu.i16_to_units(-1024), -12.0);
        assert_eq!(DPU::new(24.0, 0).i32_to_units(500), 0.0);
    }
}
