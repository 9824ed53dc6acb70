// Resolve and map text through a real font resource
use std::path::PathBuf;
use timedtext_fonts::fonts::{FeatureSet, FontCache, FontStyle, FontWeight, LoadState};
use timedtext_fonts::{Axis, Environment, Extent};

fn font_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fonts/DejaVuSans.ttf")
}

fn environment(dir: &tempfile::TempDir) -> Environment {
    let doc = format!(
        r#"<?xml version="1.0" encoding="utf-8"?>
<fonts>
  <font>
    <param name="family">Noto Sans</param>
    <param name="source">{}</param>
  </font>
</fonts>"#,
        font_path().display()
    );
    std::fs::write(dir.path().join("fonts.xml"), doc).unwrap();
    std::fs::write(dir.path().join("ignored.txt"), "not a document").unwrap();
    Environment::with_directory(dir.path())
}

#[test]
fn map_and_measure() {
    let dir = tempfile::tempdir().unwrap();
    let mut cache = FontCache::new(environment(&dir));
    cache.maybe_load().unwrap();
    assert_eq!(cache.catalog().len(), 1);

    let font = cache
        .map_font(
            &["Noto Sans"],
            FontStyle::Normal,
            FontWeight::NORMAL,
            "en",
            Axis::Horizontal,
            Extent::splat(24.0),
            FeatureSet::new(),
        )
        .unwrap();
    assert_eq!(font.state().load_state(), LoadState::Unloaded);

    assert!(font.ascent() > 0.0);
    assert!(font.descent() < 0.0);
    assert_eq!(font.state().load_state(), LoadState::Loaded);
    assert!(font.preferred_family_name().starts_with("DejaVu Sans"));

    let mapping = font.glyph_mapping("A", &FeatureSet::new());
    assert_eq!(mapping.len(), 1);
    assert_ne!(mapping.glyphs()[0].0, 0);
    assert!(font.mapping_advance(&mapping) > 0.0);
    assert_eq!(font.character(mapping.glyphs()[0]), Some('A'));

    let wide = font.advance("AA", &FeatureSet::new());
    assert!((wide - 2.0 * font.mapping_advance(&mapping)).abs() < 1e-6);
}

#[test]
fn unknown_family_falls_back_to_default() {
    let dir = tempfile::tempdir().unwrap();
    let mut cache = FontCache::new(environment(&dir));
    cache.maybe_load().unwrap();

    let font = cache
        .map_font(
            &["Unknown Family"],
            FontStyle::Italic,
            FontWeight::BOLD,
            "",
            Axis::Horizontal,
            Extent::splat(12.0),
            FeatureSet::new(),
        )
        .unwrap();
    assert_eq!(font.family(), "noto sans");
    assert_eq!(font.source(), Some(font_path().as_path()));
}
