//! Locating installed scene collections.

use std::fs;
use std::path::{Path, PathBuf};

use sceneimport::project::ConfigLocator;
use sceneimport::{FormatRegistry, ImportContext, Platform};
use tempfile::TempDir;

/// Configuration roots inside a temporary directory.
struct TempRoots {
    config: PathBuf,
    program_data: PathBuf,
}

impl ConfigLocator for TempRoots {
    fn config_dir(&self) -> Option<PathBuf> {
        Some(self.config.clone())
    }

    fn program_data_dir(&self) -> Option<PathBuf> {
        Some(self.program_data.clone())
    }
}

fn touch(dir: &Path, name: &str) -> PathBuf {
    fs::create_dir_all(dir).unwrap();
    let path = dir.join(name);
    fs::write(&path, "").unwrap();
    path
}

fn installed(root: &TempDir) -> (TempRoots, Vec<PathBuf>) {
    let config = root.path().join("config");
    let program_data = root.path().join("programdata");

    let xsplit = touch(
        &program_data.join("SplitMediaLabs/XSplit/Presentation2.0"),
        "Placements.bpres",
    );
    let slobs_dir = config.join("slobs-client/SceneCollections");
    let slobs_b = touch(&slobs_dir, "b.json");
    let slobs_a = touch(&slobs_dir, "a.json");
    touch(&slobs_dir, "manifest.json");
    touch(&slobs_dir, ".hidden.json");
    let classic_dir = config.join("OBS/sceneCollection");
    let classic = touch(&classic_dir, "scenes.xconfig");
    touch(&classic_dir, "notes.txt");

    let roots = TempRoots {
        config,
        program_data,
    };
    (roots, vec![xsplit, slobs_a, slobs_b, classic])
}

fn find(platform: Platform, roots: TempRoots) -> Vec<PathBuf> {
    FormatRegistry::default()
        .with_context(ImportContext::default().with_platform(platform))
        .with_locator(roots)
        .find_files()
}

#[test]
fn test_windows_finds_every_application() {
    let root = TempDir::new().unwrap();
    let (roots, expected) = installed(&root);
    assert_eq!(find(Platform::Windows, roots), expected);
}

#[test]
fn test_macos_finds_streamlabs_only() {
    let root = TempDir::new().unwrap();
    let (roots, expected) = installed(&root);
    assert_eq!(find(Platform::MacOs, roots), expected[1..3].to_vec());
}

#[test]
fn test_linux_finds_nothing() {
    let root = TempDir::new().unwrap();
    let (roots, _) = installed(&root);
    assert!(find(Platform::Linux, roots).is_empty());
}

#[test]
fn test_missing_directories_are_skipped() {
    let root = TempDir::new().unwrap();
    let roots = TempRoots {
        config: root.path().join("nope"),
        program_data: root.path().join("nothing"),
    };
    assert!(find(Platform::Windows, roots).is_empty());
}
