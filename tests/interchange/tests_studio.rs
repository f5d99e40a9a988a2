//! OBS Studio collections moved between operating systems.

use rstest::rstest;
use sceneimport::{Fields, FormatRegistry, ImportContext, Platform, SceneCollection};

use crate::helpers::scene_fixtures::{STUDIO_WINDOWS, write_temp};

#[rstest]
#[case(Platform::Windows, "monitor_capture", "capture_cursor")]
#[case(Platform::MacOs, "display_capture", "show_cursor")]
#[case(Platform::Linux, "xshm_input", "show_cursor")]
fn test_display_capture_per_platform(
    #[case] platform: Platform,
    #[case] id: &str,
    #[case] cursor_key: &str,
) {
    let (_dir, path) = write_temp("Main_Show.json", STUDIO_WINDOWS);
    let registry =
        FormatRegistry::default().with_context(ImportContext::default().with_platform(platform));
    let collection = registry.import(&path, None).unwrap();

    assert_eq!(collection.name(), "Main Show");
    let display = collection.source("Display").unwrap();
    assert_eq!(display.get_str("id"), id);
    assert!(display.get_object("settings").unwrap().get_bool(cursor_key));
}

#[test]
fn test_studio_replaces_previous_contents() {
    let (_dir, path) = write_temp("Main_Show.json", STUDIO_WINDOWS);
    let registry = FormatRegistry::default();

    let mut collection = SceneCollection::new();
    collection.set_name("Old");
    registry.import_scenes(&path, None, &mut collection).unwrap();

    assert_eq!(collection.name(), "Main Show");
    assert_eq!(collection.sources().len(), 2);
    assert_eq!(collection.current_scene(), "Scene");
}
