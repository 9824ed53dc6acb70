// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Font environment configuration

use crate::Extent;
use std::path::PathBuf;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration of a [`crate::fonts::FontCache`]
///
/// An `Environment` can be default-constructed; it then has no font
/// specifications and every font resolves to the default family (which fails
/// to load and yields default metrics).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Environment {
    /// Directory scanned for font specification documents
    ///
    /// Every file in this directory (not recursive) with extension `xml` is
    /// parsed, in file name order.
    pub specification_directory: Option<PathBuf>,
    /// Additional font specification documents
    ///
    /// These are parsed after the contents of
    /// [`Environment::specification_directory`].
    pub specification_files: Vec<PathBuf>,
    /// Family of the default font
    pub default_family: String,
    /// Family of the last resort font
    ///
    /// The last resort font is used to draw characters no other font maps.
    pub last_resort_family: String,
    /// Default font size (width and height of the em square)
    pub default_size: Extent,
}

impl Default for Environment {
    fn default() -> Self {
        Environment {
            specification_directory: None,
            specification_files: vec![],
            default_family: "Noto Sans".to_string(),
            last_resort_family: "Last Resort".to_string(),
            default_size: Extent::splat(24.0),
        }
    }
}

impl Environment {
    /// Construct with a specification directory
    pub fn with_directory(directory: impl Into<PathBuf>) -> Self {
        Environment {
            specification_directory: Some(directory.into()),
            ..Default::default()
        }
    }
}
