//! OBS Classic imports through the registry.

use rstest::rstest;
use sceneimport::interchange::ImportStatus;
use sceneimport::{Fields, FormatRegistry, ImportContext, Platform, SceneCollection};

use crate::helpers::collection_assertions::{item_names, scene_items, source_names, vec2};
use crate::helpers::scene_fixtures::{
    CLASSIC_DUPLICATE_NAMES, CLASSIC_MINIMAL, CLASSIC_TEXT_COLOR, CLASSIC_TRUNCATED,
    CLASSIC_WITH_GLOBALS, write_temp,
};

fn registry(platform: Platform) -> FormatRegistry {
    FormatRegistry::default().with_context(ImportContext::default().with_platform(platform))
}

#[test]
fn test_minimal_collection_end_to_end() {
    let (_dir, path) = write_temp("Minimal.xconfig", CLASSIC_MINIMAL);
    let collection = registry(Platform::Windows).import(&path, None).unwrap();

    assert_eq!(collection.name(), "Minimal");
    assert_eq!(collection.current_scene(), "MyScene");

    let scenes: Vec<_> = collection.scenes().collect();
    assert_eq!(scenes.len(), 1);
    assert_eq!(scenes[0].get_str("name"), "MyScene");

    let items = scene_items(&collection, "MyScene");
    assert_eq!(items.len(), 1);
    let cam = &items[0];
    assert_eq!(cam.get_str("name"), "Cam");
    assert_eq!(vec2(cam, "pos"), (10.0, 20.0));
    assert_eq!(vec2(cam, "bounds"), (100.0, 50.0));
    assert_eq!(cam.get_int("bounds_type"), 2);
    assert!(cam.get_bool("visible"));
}

#[test]
fn test_duplicate_names_get_numeric_suffix() {
    let (_dir, path) = write_temp("dupes.xconfig", CLASSIC_DUPLICATE_NAMES);
    let collection = registry(Platform::Windows).import(&path, None).unwrap();

    let names = source_names(&collection);
    assert!(names.contains(&"Camera".to_string()));
    assert!(names.contains(&"Camera 0".to_string()));
    assert_eq!(item_names(&collection, "Intro"), vec!["Camera"]);
    assert_eq!(item_names(&collection, "Outro"), vec!["Game", "Camera 0"]);
}

#[rstest]
#[case(Platform::Linux, false)]
#[case(Platform::MacOs, true)]
#[case(Platform::Windows, true)]
fn test_game_capture_depends_on_platform(#[case] platform: Platform, #[case] present: bool) {
    let (_dir, path) = write_temp("dupes.xconfig", CLASSIC_DUPLICATE_NAMES);
    let collection = registry(platform).import(&path, None).unwrap();

    assert_eq!(collection.contains_source("Game"), present);
    let items = item_names(&collection, "Outro");
    assert_eq!(items.contains(&"Game".to_string()), present);
    assert!(items.contains(&"Camera 0".to_string()));
}

#[test]
fn test_colours_gain_alpha() {
    let (_dir, path) = write_temp("text.xconfig", CLASSIC_TEXT_COLOR);
    let collection = registry(Platform::Windows).import(&path, None).unwrap();

    let title = collection.source("Title").unwrap();
    assert_eq!(title.get_str("id"), "text_gdiplus");
    let settings = title.get_object("settings").unwrap();
    assert_eq!(settings.get_int("color"), 0xFF11_2233);
    assert_eq!(settings.get_int("outline_color"), 0xFF00_0000);
    assert_eq!(settings.get_str("text"), "Live");
}

#[test]
fn test_merge_into_existing_collection() {
    let (_dir, first) = write_temp("first.xconfig", CLASSIC_DUPLICATE_NAMES);
    let (_dir2, second) = write_temp("second.xconfig", CLASSIC_DUPLICATE_NAMES);
    let registry = registry(Platform::Linux);

    let mut collection = SceneCollection::new();
    registry.import_scenes(&first, None, &mut collection).unwrap();
    registry.import_scenes(&second, None, &mut collection).unwrap();

    let names = source_names(&collection);
    assert!(names.contains(&"Intro".to_string()));
    assert!(names.contains(&"Intro 0".to_string()));
    assert!(names.contains(&"Camera 1".to_string()));
    assert_eq!(collection.name(), "second");
}

#[test]
fn test_merged_globals_keep_their_own_links() {
    let (_dir, path) = write_temp("globals.xconfig", CLASSIC_WITH_GLOBALS);
    let registry = registry(Platform::Windows);

    let mut collection = SceneCollection::new();
    registry.import_scenes(&path, None, &mut collection).unwrap();
    registry.import_scenes(&path, None, &mut collection).unwrap();

    assert_eq!(source_names(&collection), vec!["Cam", "MyScene", "Cam 0", "MyScene 0"]);
    assert_eq!(item_names(&collection, "MyScene"), vec!["Cam"]);
    assert_eq!(item_names(&collection, "MyScene 0"), vec!["Cam 0"]);
}

#[test]
fn test_truncated_file_is_a_conversion_error() {
    let (_dir, path) = write_temp("broken.xconfig", "scenes : {\r\n");
    let mut collection = SceneCollection::new();
    collection.set_name("Untouched");

    let (_dir2, truncated) = write_temp("truncated.xconfig", CLASSIC_TRUNCATED);
    for path in [path, truncated] {
        let err = registry(Platform::Linux)
            .import_scenes(&path, None, &mut collection)
            .unwrap_err();
        assert_eq!(err.status(), ImportStatus::ErrorDuringConversion);
    }
    assert_eq!(collection.name(), "Untouched");
    assert!(collection.sources().is_empty());
}
