//! Scene-collection import for legacy broadcast applications.
//!
//! This module turns the project files of OBS Studio, XSplit Broadcaster,
//! Streamlabs and OBS Classic into one canonical [`SceneCollection`]:
//!
//! - **Studio** - canonical JSON, translated between operating systems
//! - **XSplit** - one-tag-per-line presentation markup
//! - **Streamlabs** - JSON node tree with a separate manifest
//! - **Classic** - indented `key : value` text
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐  ┌──────────────┐  ┌──────────────┐  ┌──────────────┐
//! │    .json     │  │    .bpres    │  │ .json (SLOBS)│  │   .xconfig   │
//! └──────┬───────┘  └──────┬───────┘  └──────┬───────┘  └──────┬───────┘
//!        │                 │                 │                 │
//!        ▼                 ▼                 ▼                 ▼
//! ┌──────────────────────────────────────────────────────────────────────┐
//! │                        SceneFormat trait                             │
//! │  - check(&str) -> bool                                               │
//! │  - import(&ImportRequest, &mut SceneCollection) -> Result<()>        │
//! └──────────────────────────────────────────────────────────────────────┘
//!        │
//!        ▼
//! ┌──────────────────────────────────────────────────────────────────────┐
//! │                 FormatRegistry (detect, import, find)                │
//! │  - scratch copy per import, merged only on success                   │
//! └──────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! use sceneimport::interchange::FormatRegistry;
//!
//! let registry = FormatRegistry::default();
//! let mut collection = SceneCollection::new();
//! registry.import_scenes(path, None, &mut collection)?;
//! let json = collection.to_json_pretty()?;
//! ```

mod classic;
mod context;
mod document;
mod error;
mod format;
pub mod hotkeys;
pub mod kinds;
pub mod mapping;
pub mod resolve;
mod streamlabs;
mod studio;
mod xsplit;

use std::path::{Path, PathBuf};

pub use classic::Classic;
pub use context::{Canvas, ImportContext};
pub use document::{
    BOUNDS_STRETCH, Binding, Crop, Extent, SCENE_ID, SceneCollection, SceneItem,
    SourceDescriptor, Vec2,
};
pub use error::{ImportError, ImportStatus};
pub use format::{FormatId, ImportRequest, SceneFormat};
pub use kinds::SourceKind;
pub use streamlabs::Streamlabs;
pub use studio::{Studio, translate_for_platform};
pub use xsplit::XSplit;

use crate::project::{ConfigLocator, FileSystem, Locator, OsFileSystem, SystemLocator};

/// The built-in formats in detection order.
pub fn builtin_formats() -> Vec<Box<dyn SceneFormat>> {
    vec![
        Box::new(Studio),
        Box::new(XSplit),
        Box::new(Streamlabs),
        Box::new(Classic),
    ]
}

/// All file extensions handled by the built-in formats.
pub fn supported_extensions() -> Vec<&'static str> {
    let mut exts = Vec::new();
    for format in builtin_formats() {
        for ext in format.extensions() {
            if !exts.contains(ext) {
                exts.push(*ext);
            }
        }
    }
    exts
}

/// Detects, imports and discovers scene collections.
///
/// Formats are tried in registration order; the first whose
/// [`SceneFormat::check`] accepts a file handles it.
pub struct FormatRegistry {
    formats: Vec<Box<dyn SceneFormat>>,
    context: ImportContext,
    fs: Box<dyn FileSystem>,
    locator: Box<dyn ConfigLocator>,
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::new(builtin_formats())
    }
}

impl FormatRegistry {
    pub fn new(formats: Vec<Box<dyn SceneFormat>>) -> Self {
        Self {
            formats,
            context: ImportContext::default(),
            fs: Box::new(OsFileSystem),
            locator: Box::new(SystemLocator),
        }
    }

    pub fn with_context(mut self, context: ImportContext) -> Self {
        self.context = context;
        self
    }

    pub fn with_file_system(mut self, fs: impl FileSystem + 'static) -> Self {
        self.fs = Box::new(fs);
        self
    }

    pub fn with_locator(mut self, locator: impl ConfigLocator + 'static) -> Self {
        self.locator = Box::new(locator);
        self
    }

    pub fn context(&self) -> &ImportContext {
        &self.context
    }

    pub fn formats(&self) -> &[Box<dyn SceneFormat>] {
        &self.formats
    }

    pub fn get(&self, id: FormatId) -> Option<&dyn SceneFormat> {
        self.formats
            .iter()
            .find(|format| format.id() == id)
            .map(Box::as_ref)
    }

    /// Whole file as text, without a leading byte-order mark.
    fn read(&self, path: &Path) -> Result<String, ImportError> {
        if !self.fs.exists(path) {
            return Err(ImportError::FileNotFound(path.to_path_buf()));
        }
        let text = self
            .fs
            .read_to_string(path)
            .map_err(|err| ImportError::wont_open(path, err))?;
        Ok(match text.strip_prefix('\u{feff}') {
            Some(rest) => rest.to_string(),
            None => text,
        })
    }

    /// The format that recognises the file at `path`.
    pub fn detect(&self, path: &Path) -> Result<FormatId, ImportError> {
        let input = self.read(path)?;
        self.detect_input(&input)
            .ok_or_else(|| ImportError::FileNotRecognized(path.to_path_buf()))
    }

    /// The first format accepting `input`.
    pub fn detect_input(&self, input: &str) -> Option<FormatId> {
        self.formats
            .iter()
            .find(|format| format.check(input))
            .map(|format| format.id())
    }

    /// Display name of the collection at `path`, read as `id`.
    pub fn collection_name(&self, path: &Path, id: FormatId) -> Result<String, ImportError> {
        let format = self
            .get(id)
            .ok_or_else(|| ImportError::unknown_format(id.as_str()))?;
        let input = self.read(path)?;
        Ok(format
            .collection_name(path, &input, self.fs.as_ref())
            .unwrap_or_default())
    }

    /// Detect the format of `path` and merge it into `collection`.
    ///
    /// On failure `collection` is left exactly as it was.
    pub fn import_scenes(
        &self,
        path: &Path,
        name: Option<&str>,
        collection: &mut SceneCollection,
    ) -> Result<FormatId, ImportError> {
        let input = self.read(path)?;
        let format = self
            .formats
            .iter()
            .find(|format| format.check(&input))
            .ok_or_else(|| ImportError::FileNotRecognized(path.to_path_buf()))?;
        self.run(format.as_ref(), path, &input, name, collection)?;
        Ok(format.id())
    }

    /// Merge `path` into `collection` as the format named `program`
    /// (see [`FormatId::as_str`]), skipping detection.
    pub fn import_scenes_as(
        &self,
        path: &Path,
        program: &str,
        name: Option<&str>,
        collection: &mut SceneCollection,
    ) -> Result<(), ImportError> {
        let input = self.read(path)?;
        let id: FormatId = program.parse()?;
        let format = self
            .get(id)
            .ok_or_else(|| ImportError::unknown_format(program))?;
        self.run(format, path, &input, name, collection)
    }

    /// Import `path` into a fresh collection.
    pub fn import(&self, path: &Path, name: Option<&str>) -> Result<SceneCollection, ImportError> {
        let mut collection = SceneCollection::new();
        self.import_scenes(path, name, &mut collection)?;
        Ok(collection)
    }

    fn run(
        &self,
        format: &dyn SceneFormat,
        path: &Path,
        input: &str,
        name: Option<&str>,
        collection: &mut SceneCollection,
    ) -> Result<(), ImportError> {
        let request = ImportRequest {
            path,
            input,
            name,
            context: &self.context,
            fs: self.fs.as_ref(),
        };

        let mut scratch = collection.clone();
        format.import(&request, &mut scratch)?;

        tracing::debug!(
            format = %format.id(),
            path = %path.display(),
            sources = scratch.sources().len(),
            "imported scene collection"
        );
        *collection = scratch;
        Ok(())
    }

    /// Project files of every registered application installed on this
    /// machine.
    pub fn find_files(&self) -> Vec<PathBuf> {
        let locator = Locator::new(
            self.context.platform,
            self.locator.as_ref(),
            self.fs.as_ref(),
        );
        self.formats
            .iter()
            .flat_map(|format| format.find_files(&locator))
            .collect()
    }
}
