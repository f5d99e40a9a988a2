//! Streamlabs OBS scene collections.
//!
//! The file is a JSON tree rooted at a `RootNode`, with `sources`, `scenes`
//! and `transitions` containers that each hold an `items` array. Records
//! reference each other by opaque ids, which are resolved back to names.

use std::path::{Path, PathBuf};

use super::document::{Crop, Extent, SCENE_ID, SceneItem, SourceDescriptor, Vec2};
use super::hotkeys::{translate_hotkeys, translate_into};
use super::resolve::{NameClaims, SourceIndex};
use super::studio::translate_for_platform;
use super::{FormatId, ImportError, ImportRequest, SceneCollection, SceneFormat};
use crate::base::text::file_stem;
use crate::base::{Fields, Object, Platform, Value};
use crate::project::{FileSystem, Locator};

const ROOT_NODE: &str = "RootNode";
const UNKNOWN_NAME: &str = "Unknown Streamlabs Import";
const MANIFEST: &str = "manifest.json";

/// Streamlabs JSON collections.
#[derive(Clone, Copy, Debug, Default)]
pub struct Streamlabs;

impl SceneFormat for Streamlabs {
    fn id(&self) -> FormatId {
        FormatId::Streamlabs
    }

    fn extensions(&self) -> &'static [&'static str] {
        &["json"]
    }

    fn check(&self, input: &str) -> bool {
        Value::parse_json(input).is_ok_and(|root| root.get_str("nodeType") == ROOT_NODE)
    }

    /// Name recorded for this collection in the `manifest.json` beside it.
    fn collection_name(&self, path: &Path, _input: &str, fs: &dyn FileSystem) -> Option<String> {
        Some(manifest_name(path, fs).unwrap_or_else(|| UNKNOWN_NAME.to_string()))
    }

    fn import(
        &self,
        request: &ImportRequest<'_>,
        collection: &mut SceneCollection,
    ) -> Result<(), ImportError> {
        let root = Value::parse_json(request.input)?;
        if root.get_str("nodeType") != ROOT_NODE {
            return Err(ImportError::invalid(
                FormatId::Streamlabs.as_str(),
                "top-level nodeType is not RootNode",
            ));
        }

        let name = match request.name {
            Some(name) => name.to_string(),
            None => manifest_name(request.path, request.fs).unwrap_or_else(|| UNKNOWN_NAME.to_string()),
        };

        translate(&root, collection);
        collection.set_name(name);
        translate_for_platform(collection, request.context.platform);
        Ok(())
    }

    fn find_files(&self, locator: &Locator<'_>) -> Vec<PathBuf> {
        if locator.platform() == Platform::Linux {
            return Vec::new();
        }
        locator
            .config_subdir(&["slobs-client", "SceneCollections"])
            .map(|dir| locator.files_with_extension(&dir, "json", &[MANIFEST]))
            .unwrap_or_default()
    }
}

fn manifest_name(path: &Path, fs: &dyn FileSystem) -> Option<String> {
    let manifest = path.parent()?.join(MANIFEST);
    if !fs.exists(&manifest) {
        return None;
    }
    let text = fs.read_to_string(&manifest).ok()?;
    let manifest = Value::parse_json(&text).ok()?;

    let stem = file_stem(path);
    manifest
        .get_array("collections")
        .iter()
        .find(|c| c.get_str("id") == stem)
        .map(|c| c.get_str("name").to_string())
}

/// `items` of one of the root's containers.
fn items<'a>(root: &'a Value, container: &str) -> &'a [Value] {
    root.get_object(container)
        .map(|c| c.get_array("items"))
        .unwrap_or_default()
}

fn translate(root: &Value, collection: &mut SceneCollection) {
    let source_items = items(root, "sources");
    let scene_items = items(root, "scenes");

    // Every record gets its final name before any item is resolved, so
    // references and hotkey owners follow renames.
    let mut names = NameClaims::new(collection);
    let mut index = SourceIndex::new();
    let mut claim = |raw: &Value| {
        let name = names.claim(raw.get_str("name"));
        index.insert(raw.get_str("id"), &name);
        name
    };
    // Sources are emitted last-first.
    let source_names: Vec<String> = source_items.iter().rev().map(&mut claim).collect();
    let scene_names: Vec<String> = scene_items.iter().map(&mut claim).collect();

    for (raw, name) in source_items.iter().rev().zip(source_names) {
        let source = translate_record(raw, name, raw.get_str("type"));
        tracing::trace!(name = %source.name, id = %source.id, "streamlabs source");
        collection.push_source(source);
    }

    let mut first_scene = None;
    for (raw, name) in scene_items.iter().zip(scene_names) {
        let mut scene = translate_record(raw, name, SCENE_ID);
        scene.private_settings = Some(Object::new());
        scene.settings = Object::new();

        let mut hotkeys = scene.hotkeys.take().unwrap_or_default();
        let placed = raw
            .get_object("sceneItems")
            .map(|c| c.get_array("items"))
            .unwrap_or_default();
        let placed_items = placed
            .iter()
            .enumerate()
            .map(|(position, item)| translate_item(item, position as i64, &index, &mut hotkeys))
            .collect();
        scene.set_items(placed_items);
        scene.hotkeys = Some(hotkeys);

        first_scene.get_or_insert_with(|| scene.name.clone());
        collection.push_source(scene);
    }

    tracing::debug!(
        sources = source_items.len(),
        scenes = scene_items.len(),
        "translated streamlabs collection"
    );

    if let Some(first) = first_scene {
        collection.set_current_scene(first);
    }
}

/// Members shared by sources and scenes.
fn translate_record(raw: &Value, name: String, id: &str) -> SourceDescriptor {
    let mut record = SourceDescriptor::new(name, id);
    record.settings = raw.get_object("settings").cloned().unwrap_or_default();

    let filters = raw
        .get_object("filters")
        .map(|c| c.get_array("items"))
        .unwrap_or_default()
        .iter()
        .cloned()
        .map(|mut filter| {
            let kind = filter.get_text("type");
            filter.set("id", kind);
            filter
        })
        .collect();
    record.filters = Some(filters);
    record.hotkeys = Some(translate_hotkeys(raw.get_object("hotkeys"), None));

    let sync = raw.get_object("syncOffset");
    let sec = sync.map_or(0, |s| s.get_int("sec"));
    let nsec = sync.map_or(0, |s| s.get_int("nsec"));
    record.sync = Some(sec.saturating_mul(1_000_000_000).saturating_add(nsec));

    record.volume = Some(raw.get_double("volume"));
    record.muted = Some(raw.get_bool("muted"));
    record.monitoring_type = Some(raw.get_int("monitoringType"));
    record
}

fn translate_item(item: &Value, id: i64, index: &SourceIndex, hotkeys: &mut Object) -> SceneItem {
    let source_id = item.get_str("sourceId");
    let name = index.resolve(source_id).map(str::to_string);
    if name.is_none() {
        tracing::warn!(source_id, "scene item references an unknown source");
    }

    if let Some(item_hotkeys) = item.get_object("hotkeys") {
        translate_into(hotkeys, item_hotkeys.get_array("items"), name.as_deref());
    }

    SceneItem {
        id,
        name,
        pos: Vec2::new(item.get_double("x"), item.get_double("y")),
        extent: Extent::Scale(Vec2::new(item.get_double("scaleX"), item.get_double("scaleY"))),
        rotation: Some(item.get_double("rotation")),
        crop: Some(
            item.get_object("crop")
                .map(|crop| Crop::from_fields(crop))
                .unwrap_or_default(),
        ),
        visible: item.get_bool("visible"),
    }
}
