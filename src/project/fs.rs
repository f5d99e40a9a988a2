//! Filesystem access used by detection, import and file discovery.

use std::io;
use std::path::{Path, PathBuf};

/// The filesystem operations the importers need.
///
/// Everything goes through this trait so hosts can import from virtual or
/// sandboxed storage.
pub trait FileSystem: Send + Sync {
    fn exists(&self, path: &Path) -> bool;

    /// Read a whole file as UTF-8.
    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Regular files directly inside `dir`. Directories are not listed.
    fn list_files(&self, dir: &Path) -> io::Result<Vec<PathBuf>>;
}

/// [`FileSystem`] backed by `std::fs`.
#[derive(Clone, Copy, Debug, Default)]
pub struct OsFileSystem;

impl FileSystem for OsFileSystem {
    fn exists(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn list_files(&self, dir: &Path) -> io::Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        for entry in std::fs::read_dir(dir)? {
            let entry = entry?;
            if entry.file_type()?.is_file() {
                files.push(entry.path());
            }
        }
        Ok(files)
    }
}
