//! XSplit presentations through the registry.

use sceneimport::interchange::{Canvas, FormatId};
use sceneimport::{Fields, FormatRegistry, ImportContext, Platform};

use crate::helpers::collection_assertions::{item_names, scene_items, source_names, vec2};
use crate::helpers::scene_fixtures::{XSPLIT_FORWARD_REFERENCE, write_temp};

fn registry() -> FormatRegistry {
    FormatRegistry::default().with_context(ImportContext::new(
        Platform::Windows,
        Canvas::new(1280, 720),
    ))
}

#[test]
fn test_detected_and_named() {
    let (_dir, path) = write_temp("Placements.bpres", XSPLIT_FORWARD_REFERENCE);
    let registry = registry();

    assert_eq!(registry.detect(&path).unwrap(), FormatId::XSplit);
    assert_eq!(
        registry.collection_name(&path, FormatId::XSplit).unwrap(),
        "XSplit Import"
    );
}

#[test]
fn test_forward_scene_reference_resolves() {
    let (_dir, path) = write_temp("Placements.bpres", XSPLIT_FORWARD_REFERENCE);
    let collection = registry().import(&path, None).unwrap();

    assert_eq!(source_names(&collection), vec!["Main", "Break", "Logo"]);
    assert_eq!(item_names(&collection, "Main"), vec!["Break", "Logo"]);
    assert_eq!(item_names(&collection, "Break"), vec!["Logo"]);
    assert_eq!(collection.current_scene(), "Main");
}

#[test]
fn test_geometry_scales_with_canvas() {
    let (_dir, path) = write_temp("Placements.bpres", XSPLIT_FORWARD_REFERENCE);
    let collection = registry().import(&path, Some("Imported")).unwrap();
    assert_eq!(collection.name(), "Imported");

    let items = scene_items(&collection, "Main");
    assert_eq!(vec2(&items[1], "pos"), (640.0, 360.0));
    assert_eq!(vec2(&items[1], "bounds"), (640.0, 360.0));
    assert_eq!(items[1].get_int("id"), 2);

    let hidden = &scene_items(&collection, "Break")[0];
    assert!(!hidden.get_bool("visible"));

    let logo = collection.source("Logo").unwrap();
    assert_eq!(logo.get_double("volume"), 1.0);
    assert_eq!(logo.get_object("settings").unwrap().get_str("file"), "C:/logo.png");
}
