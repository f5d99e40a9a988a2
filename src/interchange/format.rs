//! Common trait for scene-collection formats.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use super::{ImportContext, ImportError, SceneCollection};
use crate::project::{FileSystem, Locator};

/// Identifier of a supported source application.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FormatId {
    Studio,
    XSplit,
    Streamlabs,
    Classic,
}

impl FormatId {
    pub const ALL: [FormatId; 4] = [
        FormatId::Studio,
        FormatId::XSplit,
        FormatId::Streamlabs,
        FormatId::Classic,
    ];

    /// Stable program name, as stored by hosts.
    pub fn as_str(self) -> &'static str {
        match self {
            FormatId::Studio => "OBSStudio",
            FormatId::XSplit => "XSplitBroadcaster",
            FormatId::Streamlabs => "Streamlabs",
            FormatId::Classic => "OBSClassic",
        }
    }
}

impl fmt::Display for FormatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FormatId {
    type Err = ImportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| ImportError::unknown_format(s))
    }
}

/// Everything a format needs to import one file.
#[derive(Clone, Copy)]
pub struct ImportRequest<'a> {
    pub path: &'a Path,
    /// Whole file contents.
    pub input: &'a str,
    /// Collection name chosen by the user, replacing the detected one.
    pub name: Option<&'a str>,
    pub context: &'a ImportContext,
    pub fs: &'a dyn FileSystem,
}

/// Trait for scene-collection formats.
///
/// Implementations recognise one application's project files and translate
/// them into a [`SceneCollection`].
///
/// ## Design
///
/// Formats receive file contents that have already been read, and the
/// registry hands them a scratch copy of the caller's collection. A format
/// that fails part-way therefore never leaves a half-imported document
/// behind.
pub trait SceneFormat: Send + Sync {
    fn id(&self) -> FormatId;

    /// File extension(s) the application uses.
    fn extensions(&self) -> &'static [&'static str];

    /// Whether `input` looks like this format. Must not fail.
    fn check(&self, input: &str) -> bool;

    /// Display name of the collection stored at `path`.
    fn collection_name(&self, path: &Path, input: &str, fs: &dyn FileSystem) -> Option<String>;

    /// Translate the file into `collection`.
    fn import(
        &self,
        request: &ImportRequest<'_>,
        collection: &mut SceneCollection,
    ) -> Result<(), ImportError>;

    /// Project files of this application installed on the machine.
    fn find_files(&self, locator: &Locator<'_>) -> Vec<PathBuf> {
        let _ = locator;
        Vec::new()
    }
}
