//! OBS Studio scene collections.
//!
//! These are already canonical documents. Importing one replaces the target
//! collection; the only translation needed is between the source ids of
//! different operating systems.

use std::path::Path;

use super::kinds::{SourceKind, cursor_key};
use super::{FormatId, ImportError, ImportRequest, SceneCollection, SceneFormat};
use crate::base::{Fields, Platform, Value};
use crate::project::FileSystem;

/// OBS Studio JSON collections.
#[derive(Clone, Copy, Debug, Default)]
pub struct Studio;

impl SceneFormat for Studio {
    fn id(&self) -> FormatId {
        FormatId::Studio
    }

    fn extensions(&self) -> &'static [&'static str] {
        &["json"]
    }

    fn check(&self, input: &str) -> bool {
        Value::parse_json(input).is_ok_and(|root| {
            root.as_object().is_some() && root.get("sources").and_then(Value::as_array).is_some()
        })
    }

    fn collection_name(&self, _path: &Path, input: &str, _fs: &dyn FileSystem) -> Option<String> {
        let root = Value::parse_json(input).ok()?;
        Some(root.get_str("name").to_string())
    }

    fn import(
        &self,
        request: &ImportRequest<'_>,
        collection: &mut SceneCollection,
    ) -> Result<(), ImportError> {
        let mut imported = SceneCollection::parse_json(request.input)?;
        if imported.root().get("sources").and_then(Value::as_array).is_none() {
            return Err(ImportError::invalid(
                FormatId::Studio.as_str(),
                "missing `sources` array",
            ));
        }

        if let Some(name) = request.name {
            imported.set_name(name);
        }
        translate_for_platform(&mut imported, request.context.platform);

        *collection = imported;
        Ok(())
    }
}

/// Rewrite source ids from other operating systems to `platform`'s ids.
///
/// Text and display captures keep their settings (display captures move the
/// cursor flag to `platform`'s key). Every other rewritten source gets empty
/// settings, since device and window selections do not carry across
/// machines. Kinds `platform` has no id for are left alone.
pub fn translate_for_platform(collection: &mut SceneCollection, platform: Platform) {
    for source in collection.sources_mut() {
        translate_source(source, platform);
    }
}

fn translate_source(source: &mut Value, platform: Platform) {
    let from = source.get_str("id").to_string();
    let Some(kind) = SourceKind::of_id(&from) else {
        return;
    };
    if kind.is_native(&from, platform) {
        return;
    }
    let Some(to) = kind.id(platform) else {
        return;
    };

    tracing::trace!(source = source.get_str("name"), from = %from, to, "translating source id");
    let source = source.make_object();
    source.insert("id".to_string(), Value::from(to));

    match kind {
        SourceKind::Text => {}
        SourceKind::Display => {
            let settings = source
                .entry("settings".to_string())
                .or_insert_with(Value::object)
                .make_object();
            let from_key = if from == "monitor_capture" {
                "capture_cursor"
            } else {
                "show_cursor"
            };
            if let Some(cursor) = settings.get(from_key).and_then(Value::as_bool) {
                settings.insert(cursor_key(platform).to_string(), Value::Boolean(cursor));
            }
        }
        _ => {
            source.insert("settings".to_string(), Value::object());
        }
    }
}
