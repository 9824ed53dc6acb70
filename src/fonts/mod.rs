// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Font selection and loading
//!
//! Fonts are managed by a [`FontCache`], constructed by the caller from an
//! [`crate::Environment`]. The cache resolves requests against a [`Catalog`]
//! of [`FontSpecification`]s and memoizes one [`Font`] per [`FontKey`].
//!
//! ### Font sizes
//!
//! A font size is an [`crate::Extent`]: the width and height of the em
//! square in presentation units. Equal components give a regular font; unequal
//! components give an *anamorphic* font, drawn with a horizontal scale of
//! `width / height`. Metrics are scaled by the size along the font's writing
//! axis; advances by the size along the mapping's advance axis.
//!
//! Font files express metrics in *design units*, of which there are
//! `units_per_em` (typically 1000 or 2048) per em. Thus a design unit value
//! `v` is `v / units_per_em × size` presentation units (see [`crate::DPU`]).
//!
//! ### Font resources
//!
//! Each distinct font file has one [`FontState`], shared by all fonts using
//! it. The file is read on first use; a file which fails to load (missing,
//! unparsable, or lacking a `name`, `OS/2` or `cmap` table) is reported once
//! and thereafter yields default metrics.

use crate::GlyphId;

mod attributes;
mod face;
pub mod feature;
mod key;
pub(crate) mod layout;
mod library;
mod resolver;
mod specification;
mod state;
mod tables;

pub use attributes::{FontStyle, FontWeight};
pub use face::{Font, LINE_HEIGHT_FACTOR};
pub use feature::{FeatureArg, FeatureSet, FontFeature, Orientation};
pub use key::FontKey;
pub use layout::{Adjustment, GlyphClass, GlyphSequence};
pub use library::{EncodingError, FontCache, LoadError, NoFontMatch, SpecificationError};
pub use resolver::Catalog;
pub use specification::{FontSpecification, GlyphRanges};
pub(crate) use state::Loaded;
pub use state::{FontState, LoadState, ScaledAdjustment};
pub use tables::{FontLoader, FontTables, LayoutTables, Metrics, TableSet, TtfLoader, TtfTables};

impl From<GlyphId> for ttf_parser::GlyphId {
    fn from(id: GlyphId) -> Self {
        ttf_parser::GlyphId(id.0)
    }
}
