// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Font catalog
//!
//! Resolves font requests to font specifications.

use super::{FontKey, FontSpecification, FontStyle, FontWeight, SpecificationError};
use crate::Environment;
use log::{debug, info, warn};
use std::fs;
use std::path::{Path, PathBuf};

/// The set of known font specifications
///
/// The catalog is loaded at most once (see [`Catalog::load`]) and is
/// immutable thereafter.
#[derive(Debug, Default)]
pub struct Catalog {
    specifications: Vec<FontSpecification>,
    loaded: bool,
}

/// True if `path` names a font specification document
fn is_specification_document(path: &Path) -> bool {
    path.is_file()
        && path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("xml"))
}

impl Catalog {
    /// Construct an empty, unloaded catalog
    pub fn new() -> Self {
        Catalog::default()
    }

    /// Construct a loaded catalog from a list of specifications
    pub fn from_specifications(specifications: Vec<FontSpecification>) -> Self {
        Catalog {
            specifications,
            loaded: true,
        }
    }

    /// True once [`Catalog::load`] has completed
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Number of specifications
    pub fn len(&self) -> usize {
        self.specifications.len()
    }

    /// True if no specification is known
    pub fn is_empty(&self) -> bool {
        self.specifications.is_empty()
    }

    /// Access all specifications, in load order
    pub fn specifications(&self) -> &[FontSpecification] {
        &self.specifications
    }

    /// List the documents described by `env`
    ///
    /// This is the `xml` files of the specification directory, sorted by path,
    /// followed by the explicitly listed files. A path is listed at most once.
    pub fn discover(env: &Environment) -> Vec<PathBuf> {
        let mut paths = Vec::new();
        if let Some(dir) = env.specification_directory.as_deref() {
            match fs::read_dir(dir) {
                Ok(entries) => {
                    paths.extend(
                        entries
                            .filter_map(|entry| entry.ok().map(|e| e.path()))
                            .filter(|path| is_specification_document(path)),
                    );
                    paths.sort();
                }
                Err(err) => warn!(
                    "Unable to read font specification directory '{}': {err}",
                    dir.display()
                ),
            }
        }
        for path in &env.specification_files {
            if !paths.contains(path) {
                paths.push(path.clone());
            }
        }
        paths
    }

    /// Load specifications
    ///
    /// Does nothing if already loaded. Unreadable and malformed documents are
    /// reported and skipped; a malformed `forcePath` range is an error.
    pub fn load(&mut self, env: &Environment) -> Result<(), SpecificationError> {
        if self.loaded {
            return Ok(());
        }

        let mut specifications = Vec::new();
        for path in Self::discover(env) {
            match Self::load_document(&path) {
                Ok(specs) => {
                    debug!(
                        "Read {} font specifications from '{}'",
                        specs.len(),
                        path.display()
                    );
                    specifications.extend(specs);
                }
                Err(err @ (SpecificationError::Io(_) | SpecificationError::Xml(_))) => {
                    warn!(
                        "Skipping font specification document '{}': {err}",
                        path.display()
                    );
                }
                Err(err) => return Err(err),
            }
        }

        if specifications.is_empty() {
            warn!("No font specifications! No text will be rendered.");
        } else {
            info!("Loaded {} font specifications", specifications.len());
        }

        self.specifications = specifications;
        self.loaded = true;
        Ok(())
    }

    fn load_document(path: &Path) -> Result<Vec<FontSpecification>, SpecificationError> {
        let text = fs::read_to_string(path)?;
        let base = path.parent().unwrap_or_else(|| Path::new(""));
        FontSpecification::from_document(&text, base)
    }

    /// Find the first specification compatible with `key`
    ///
    /// See [`FontSpecification::matches`].
    pub fn find_specification(&self, key: &FontKey) -> Option<&FontSpecification> {
        self.specifications.iter().find(|spec| spec.matches(key))
    }

    /// Find an exact match
    ///
    /// Families are tried in order. A specification matches when its family
    /// equals the requested family ignoring case, its style and weight are
    /// equal to those requested and, if both it and the request have a
    /// language, the languages are equal.
    pub fn find_exact_match<S: AsRef<str>>(
        &self,
        families: &[S],
        style: FontStyle,
        weight: FontWeight,
        language: &str,
    ) -> Option<&FontSpecification> {
        families.iter().find_map(|family| {
            let family = family.as_ref();
            self.specifications.iter().find(|spec| {
                spec.family.eq_ignore_ascii_case(family)
                    && spec.style == style
                    && spec.weight == weight
                    && (spec.language.is_empty()
                        || language.is_empty()
                        || spec.language.eq_ignore_ascii_case(language))
            })
        })
    }

    /// Find the best available match
    ///
    /// Candidates are filtered successively by family, language, style and
    /// weight; the first candidate surviving the most filters is returned.
    /// Returns `None` only if no specification has a requested family.
    pub fn find_best_match<S: AsRef<str>>(
        &self,
        families: &[S],
        style: FontStyle,
        weight: FontWeight,
        language: &str,
    ) -> Option<&FontSpecification> {
        let by_family: Vec<&FontSpecification> = families
            .iter()
            .flat_map(|family| {
                let family = family.as_ref();
                self.specifications
                    .iter()
                    .filter(move |spec| spec.family.eq_ignore_ascii_case(family))
            })
            .collect();
        let by_language: Vec<&FontSpecification> = by_family
            .iter()
            .copied()
            .filter(|spec| {
                language.is_empty()
                    || spec.language.is_empty()
                    || spec.language.eq_ignore_ascii_case(language)
            })
            .collect();
        let by_style: Vec<&FontSpecification> = by_language
            .iter()
            .copied()
            .filter(|spec| spec.style == style)
            .collect();
        let by_weight: Vec<&FontSpecification> = by_style
            .iter()
            .copied()
            .filter(|spec| spec.weight == weight)
            .collect();

        [by_weight, by_style, by_language, by_family]
            .into_iter()
            .find_map(|list| list.first().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn spec(
        family: &str,
        style: FontStyle,
        weight: FontWeight,
        language: &str,
    ) -> FontSpecification {
        FontSpecification::new(family, style, weight, language).with_source(format!("{family}.ttf"))
    }

    fn catalog() -> Catalog {
        Catalog::from_specifications(vec![
            spec("serif", FontStyle::Normal, FontWeight::NORMAL, ""),
            spec("sans", FontStyle::Normal, FontWeight::NORMAL, ""),
            spec("sans", FontStyle::Italic, FontWeight::BOLD, ""),
            spec("sans", FontStyle::Normal, FontWeight::NORMAL, "ja"),
        ])
    }

    #[test]
    fn exact() {
        let catalog = catalog();
        let found = catalog
            .find_exact_match(&["Missing", "SANS"], FontStyle::Italic, FontWeight::BOLD, "en")
            .unwrap();
        assert_eq!(found.style, FontStyle::Italic);
        assert!(catalog
            .find_exact_match(&["sans"], FontStyle::Oblique, FontWeight::NORMAL, "")
            .is_none());
    }

    #[test]
    fn best_degrades_by_weight_first() {
        let catalog = catalog();
        let found = catalog
            .find_best_match(&["sans"], FontStyle::Italic, FontWeight::LIGHT, "en")
            .unwrap();
        assert_eq!(found.style, FontStyle::Italic);
        assert_eq!(found.weight, FontWeight::BOLD);

        let found = catalog
            .find_best_match(&["sans"], FontStyle::Oblique, FontWeight::BLACK, "ja")
            .unwrap();
        assert_eq!(found.family, "sans");

        assert!(catalog
            .find_best_match(&["mono"], FontStyle::Normal, FontWeight::NORMAL, "")
            .is_none());
    }

    #[test]
    fn best_prefers_language() {
        let catalog = Catalog::from_specifications(vec![
            spec("sans", FontStyle::Normal, FontWeight::NORMAL, "ko"),
            spec("sans", FontStyle::Normal, FontWeight::NORMAL, "ja"),
        ]);
        let found = catalog
            .find_best_match(&["sans"], FontStyle::Normal, FontWeight::NORMAL, "ja")
            .unwrap();
        assert_eq!(found.language, "ja");
    }

    #[test]
    fn discovery_and_idempotent_load() {
        let dir = tempfile::tempdir().unwrap();
        let write = |name: &str, text: &str| {
            let mut file = fs::File::create(dir.path().join(name)).unwrap();
            file.write_all(text.as_bytes()).unwrap();
        };
        write(
            "b.xml",
            r#"<fonts><font><param name="family">B</param><param name="source">b.ttf</param></font></fonts>"#,
        );
        write(
            "a.xml",
            r#"<fonts><font><param name="family">A</param><param name="source">a.ttf</param></font></fonts>"#,
        );
        write("broken.xml", "<fonts><font>");
        write("notes.txt", "not a document");

        let env = Environment::with_directory(dir.path());
        let found = Catalog::discover(&env);
        assert_eq!(found.len(), 3);

        let mut catalog = Catalog::new();
        catalog.load(&env).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.specifications()[0].family, "a");
        assert_eq!(
            catalog.specifications()[0].source.as_deref(),
            Some(dir.path().join("a.ttf").as_path())
        );

        write(
            "c.xml",
            r#"<fonts><font><param name="family">C</param><param name="source">c.ttf</param></font></fonts>"#,
        );
        catalog.load(&env).unwrap();
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn bad_range_propagates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fonts.xml");
        fs::write(
            &path,
            r#"<fonts><font><param name="family">x</param><param name="source">x.ttf</param><param name="forcePath">1-2-3</param></font></fonts>"#,
        )
        .unwrap();
        let env = Environment {
            specification_files: vec![path],
            ..Default::default()
        };
        let mut catalog = Catalog::new();
        assert!(matches!(
            catalog.load(&env),
            Err(SpecificationError::InvalidRange(_))
        ));
        assert!(!catalog.is_loaded());
    }
}
