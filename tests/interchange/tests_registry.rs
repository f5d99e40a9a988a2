//! Detection, status codes and error handling of the format registry.

use std::fs;

use rstest::rstest;
use sceneimport::interchange::{FormatId, ImportError, ImportStatus};
use sceneimport::{FormatRegistry, SceneCollection};
use tempfile::TempDir;

use crate::helpers::scene_fixtures::{
    CLASSIC_MINIMAL, STREAMLABS_FORWARD_REFERENCE, STUDIO_WINDOWS, XSPLIT_FORWARD_REFERENCE,
    write_temp,
};

#[rstest]
#[case("a.json", STUDIO_WINDOWS, FormatId::Studio)]
#[case("b.json", STREAMLABS_FORWARD_REFERENCE, FormatId::Streamlabs)]
#[case("c.bpres", XSPLIT_FORWARD_REFERENCE, FormatId::XSplit)]
#[case("d.xconfig", CLASSIC_MINIMAL, FormatId::Classic)]
fn test_detect(#[case] name: &str, #[case] contents: &str, #[case] expected: FormatId) {
    let (_dir, path) = write_temp(name, contents);
    assert_eq!(FormatRegistry::default().detect(&path).unwrap(), expected);
}

#[test]
fn test_detection_ignores_extension() {
    let (_dir, path) = write_temp("scenes.txt", CLASSIC_MINIMAL);
    assert_eq!(FormatRegistry::default().detect(&path).unwrap(), FormatId::Classic);
}

#[test]
fn test_import_reports_detected_format() {
    let (_dir, path) = write_temp("x.bpres", XSPLIT_FORWARD_REFERENCE);
    let mut collection = SceneCollection::new();
    let id = FormatRegistry::default()
        .import_scenes(&path, None, &mut collection)
        .unwrap();
    assert_eq!(id, FormatId::XSplit);
}

#[test]
fn test_file_not_found() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("gone.json");

    let result = FormatRegistry::default().import(&path, None);
    assert_eq!(ImportStatus::from_result(&result), ImportStatus::FileNotFound);

    // Reading comes before the program name is checked.
    let mut collection = SceneCollection::new();
    let err = FormatRegistry::default()
        .import_scenes_as(&path, "NotAProgram", None, &mut collection)
        .unwrap_err();
    assert!(matches!(err, ImportError::FileNotFound(_)));
}

#[test]
fn test_file_not_recognized() {
    let (_dir, path) = write_temp("readme.md", "# Not a scene collection\n");
    let result = FormatRegistry::default().import(&path, None);
    assert_eq!(
        ImportStatus::from_result(&result),
        ImportStatus::FileNotRecognized
    );
}

#[test]
fn test_unknown_program_name() {
    let (_dir, path) = write_temp("d.xconfig", CLASSIC_MINIMAL);
    let mut collection = SceneCollection::new();
    let err = FormatRegistry::default()
        .import_scenes_as(&path, "Wirecast", None, &mut collection)
        .unwrap_err();

    assert!(matches!(err, ImportError::UnknownFormat(ref name) if name == "Wirecast"));
    assert_eq!(err.status(), ImportStatus::UnknownError);
    assert!(collection.sources().is_empty());
}

#[test]
fn test_wrong_program_is_a_conversion_failure() {
    let (_dir, path) = write_temp("d.xconfig", CLASSIC_MINIMAL);
    let mut collection = SceneCollection::new();
    let err = FormatRegistry::default()
        .import_scenes_as(&path, "XSplitBroadcaster", None, &mut collection)
        .unwrap_err();
    assert_eq!(err.status(), ImportStatus::ErrorDuringConversion);
}

#[test]
fn test_unreadable_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("latin1.xconfig");
    fs::write(&path, b"scenes : {\r\n  Caf\xe9 : {\r\n").unwrap();

    let result = FormatRegistry::default().import(&path, None);
    assert_eq!(ImportStatus::from_result(&result), ImportStatus::FileWontOpen);
}

#[test]
fn test_canonical_json_output() {
    let (_dir, path) = write_temp("d.xconfig", CLASSIC_MINIMAL);
    let collection = FormatRegistry::default().import(&path, None).unwrap();

    let json = collection.to_json().unwrap();
    let reparsed = SceneCollection::parse_json(&json).unwrap();
    assert_eq!(reparsed, collection);
    assert!(json.starts_with(r#"{"sources":"#));
}
