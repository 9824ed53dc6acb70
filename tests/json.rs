// Test serialization using json
#![cfg(feature = "serde")]

use serde::{de::Deserialize, ser::Serialize};
use std::cmp::PartialEq;
use std::fmt::Debug;
use std::path::PathBuf;
use timedtext_fonts::fonts::{Adjustment, FeatureArg, FontFeature, FontStyle, FontWeight, Orientation};
use timedtext_fonts::{Axis, Environment, Extent};

fn test<X: Debug + PartialEq + Serialize + for<'a> Deserialize<'a>>(x: X, t: &str) {
    match serde_json::to_string(&x) {
        Ok(text) => assert_eq!(text, t),
        Err(err) => panic!("Ser of '{x:?}' failed: {err}"),
    }

    match serde_json::from_str::<X>(t) {
        Ok(v) => assert_eq!(v, x),
        Err(err) => panic!("Deser of '{t}' failed: {err}"),
    }
}

#[test]
fn geometry() {
    test(Extent::new(1.0, 2.0), "{\"width\":1.0,\"height\":2.0}");
    test(Axis::Vertical, "\"Vertical\"");
}

#[test]
fn font() {
    test(FontWeight::BOLD, "700");
    test(FontStyle::Normal, "\"Normal\"");
    test(FontStyle::Oblique, "\"Oblique\"");
}

#[test]
fn features() {
    test(FeatureArg::Bool(false), "{\"Bool\":false}");
    test(
        FeatureArg::Orientation(Orientation::Rotate090),
        "{\"Orientation\":\"Rotate090\"}",
    );
    test(
        FontFeature::kerning(false),
        "{\"tag\":\"kern\",\"args\":[{\"Bool\":false}]}",
    );
    test(
        Adjustment {
            x_offset: -5,
            ..Default::default()
        },
        "{\"x_offset\":-5,\"y_offset\":0,\"x_advance\":0,\"y_advance\":0}",
    );
}

#[test]
fn environment() {
    let env: Environment = serde_json::from_str(
        r#"{"specification_directory":"/etc/fonts","default_family":"Serif"}"#,
    )
    .unwrap();
    assert_eq!(env.specification_directory, Some(PathBuf::from("/etc/fonts")));
    assert_eq!(env.default_family, "Serif");
    assert_eq!(env.last_resort_family, Environment::default().last_resort_family);
    assert!(env.specification_files.is_empty());
}
