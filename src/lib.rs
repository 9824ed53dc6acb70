// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Timed text font library
//!
//! Font resolution, metrics and glyph mapping for the presentation of timed
//! text (captions and subtitles).
//!
//! ```no_run
//! use timedtext_fonts::fonts::{FeatureSet, FontCache, FontStyle, FontWeight};
//! use timedtext_fonts::{Axis, Environment, Extent};
//!
//! let mut cache = FontCache::new(Environment::with_directory("fonts"));
//! cache.maybe_load().unwrap();
//! let font = cache
//!     .map_font(
//!         &["Noto Sans"],
//!         FontStyle::Normal,
//!         FontWeight::NORMAL,
//!         "en",
//!         Axis::Horizontal,
//!         Extent::splat(24.0),
//!         FeatureSet::new(),
//!     )
//!     .unwrap();
//! let mapping = font.glyph_mapping("Hello", &FeatureSet::new());
//! println!("advance: {}", font.mapping_advance(&mapping));
//! ```

#![cfg_attr(doc_cfg, feature(doc_cfg))]

mod conv;
pub use conv::{to_u32, to_usize, DPU};

mod env;
pub use env::*;

mod data;
pub use data::*;

pub mod characters;
pub mod fonts;
pub mod normalize;
pub mod script;

pub(crate) mod shaper;
pub use shaper::{decode_utf16, is_private_use, GlyphMapping, MappingKey, MISSING_GLYPH_CHAR};
