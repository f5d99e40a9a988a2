//! Well-known locations where broadcasting applications keep their scene
//! files.

use std::path::{Path, PathBuf};

use super::fs::FileSystem;
use crate::base::Platform;

/// Per-user and machine-wide configuration roots.
pub trait ConfigLocator: Send + Sync {
    /// Per-user application configuration root (`%APPDATA%`,
    /// `~/Library/Application Support`, `$XDG_CONFIG_HOME`).
    fn config_dir(&self) -> Option<PathBuf>;

    /// Machine-wide application data root (`%ProgramData%`). Only Windows
    /// has one.
    fn program_data_dir(&self) -> Option<PathBuf>;
}

/// [`ConfigLocator`] for the machine the process runs on.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemLocator;

impl ConfigLocator for SystemLocator {
    fn config_dir(&self) -> Option<PathBuf> {
        dirs::config_dir()
    }

    fn program_data_dir(&self) -> Option<PathBuf> {
        std::env::var_os("ProgramData").map(PathBuf::from)
    }
}

/// Candidate-file search over a [`ConfigLocator`] and a [`FileSystem`].
#[derive(Clone, Copy)]
pub struct Locator<'a> {
    platform: Platform,
    roots: &'a dyn ConfigLocator,
    fs: &'a dyn FileSystem,
}

impl<'a> Locator<'a> {
    pub fn new(platform: Platform, roots: &'a dyn ConfigLocator, fs: &'a dyn FileSystem) -> Self {
        Self {
            platform,
            roots,
            fs,
        }
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    /// `segments` joined onto the per-user configuration root.
    pub fn config_subdir(&self, segments: &[&str]) -> Option<PathBuf> {
        self.roots.config_dir().map(|root| join_all(root, segments))
    }

    /// `segments` joined onto the machine-wide data root.
    pub fn program_data_subdir(&self, segments: &[&str]) -> Option<PathBuf> {
        self.roots.program_data_dir().map(|root| join_all(root, segments))
    }

    /// Files in `dir` ending in `.{extension}`, sorted by path.
    ///
    /// Hidden files and the names in `exclude` are skipped. A missing or
    /// unreadable directory yields no files.
    pub fn files_with_extension(&self, dir: &Path, extension: &str, exclude: &[&str]) -> Vec<PathBuf> {
        let Ok(entries) = self.fs.list_files(dir) else {
            tracing::trace!(dir = %dir.display(), "scene directory not readable");
            return Vec::new();
        };

        let mut files: Vec<PathBuf> = entries
            .into_iter()
            .filter(|path| {
                let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
                    return false;
                };
                !name.starts_with('.')
                    && !exclude.contains(&name)
                    && path.extension().and_then(|e| e.to_str()) == Some(extension)
            })
            .collect();
        files.sort();
        files
    }

    /// `dir/name` when that file exists.
    pub fn named_file(&self, dir: &Path, name: &str) -> Option<PathBuf> {
        let path = dir.join(name);
        self.fs.exists(&path).then_some(path)
    }
}

fn join_all(root: PathBuf, segments: &[&str]) -> PathBuf {
    segments.iter().fold(root, |path, segment| path.join(segment))
}
