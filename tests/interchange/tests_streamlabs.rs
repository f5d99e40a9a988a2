//! Streamlabs collections through the registry.

use std::fs;

use sceneimport::interchange::FormatId;
use sceneimport::{Fields, FormatRegistry, ImportContext, Platform, SceneCollection};
use tempfile::TempDir;

use crate::helpers::collection_assertions::{item_names, source_names};
use crate::helpers::scene_fixtures::STREAMLABS_FORWARD_REFERENCE;

fn registry(platform: Platform) -> FormatRegistry {
    FormatRegistry::default().with_context(ImportContext::default().with_platform(platform))
}

#[test]
fn test_forward_reference_and_manifest_name() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("c0ffee.json");
    fs::write(&path, STREAMLABS_FORWARD_REFERENCE).unwrap();
    fs::write(
        dir.path().join("manifest.json"),
        r#"{"collections": [{"id": "c0ffee", "name": "Weekend Stream"}]}"#,
    )
    .unwrap();

    let registry = registry(Platform::Windows);
    assert_eq!(registry.detect(&path).unwrap(), FormatId::Streamlabs);

    let collection = registry.import(&path, None).unwrap();
    assert_eq!(collection.name(), "Weekend Stream");
    assert_eq!(collection.current_scene(), "Live");
    assert_eq!(
        source_names(&collection),
        vec!["Camera", "Live", "Be Right Back"]
    );
    assert_eq!(item_names(&collection, "Live"), vec!["Be Right Back", "Camera"]);
}

#[test]
fn test_missing_manifest_uses_fallback_name() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("scenes.json");
    fs::write(&path, STREAMLABS_FORWARD_REFERENCE).unwrap();

    let collection = registry(Platform::Linux).import(&path, None).unwrap();
    assert_eq!(collection.name(), "Unknown Streamlabs Import");

    // Windows device ids are rewritten for the importing platform.
    let camera = collection.source("Camera").unwrap();
    assert_eq!(camera.get_str("id"), "v4l2_input");
}

#[test]
fn test_merging_twice_renames_and_relinks() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("scenes.json");
    fs::write(&path, STREAMLABS_FORWARD_REFERENCE).unwrap();
    let registry = registry(Platform::Windows);

    let mut collection = SceneCollection::new();
    registry.import_scenes(&path, None, &mut collection).unwrap();
    registry.import_scenes(&path, None, &mut collection).unwrap();

    let names = source_names(&collection);
    assert_eq!(
        names,
        vec!["Camera", "Live", "Be Right Back", "Camera 0", "Live 0", "Be Right Back 0"]
    );
    let mut unique = names.clone();
    unique.sort();
    unique.dedup();
    assert_eq!(unique.len(), names.len());

    assert_eq!(item_names(&collection, "Live"), vec!["Be Right Back", "Camera"]);
    assert_eq!(item_names(&collection, "Live 0"), vec!["Be Right Back 0", "Camera 0"]);
}
