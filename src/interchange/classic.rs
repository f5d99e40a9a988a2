//! OBS Classic scene collections (`.xconfig`).
//!
//! The file is read by [`crate::parser::classic`] into `globals` and
//! `scenes`, both arrays of named sources. Each entry carries a `class`, its
//! placement (`x`, `y`, `cx`, `cy`, `crop.*`) and a `data` block with the
//! class-specific settings.

use std::path::{Path, PathBuf};

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use rustc_hash::FxHashMap;

use super::document::{BOUNDS_STRETCH, Crop, Extent, SceneItem, SourceDescriptor, Vec2};
use super::kinds::{SourceKind, cursor_key};
use super::mapping::{Conv, FieldMap, apply, field, font_flags, font_style};
use super::resolve::NameClaims;
use super::{FormatId, ImportError, ImportRequest, SceneCollection, SceneFormat};
use crate::base::text::file_stem;
use crate::base::{Fields, Object, Platform, Value};
use crate::parser::classic;
use crate::project::{FileSystem, Locator};

/// OBS Classic scene collection files.
#[derive(Clone, Copy, Debug, Default)]
pub struct Classic;

impl SceneFormat for Classic {
    fn id(&self) -> FormatId {
        FormatId::Classic
    }

    fn extensions(&self) -> &'static [&'static str] {
        &["xconfig"]
    }

    fn check(&self, input: &str) -> bool {
        input.starts_with("scenes : {\r\n")
    }

    fn collection_name(&self, path: &Path, _input: &str, _fs: &dyn FileSystem) -> Option<String> {
        Some(file_stem(path))
    }

    fn import(
        &self,
        request: &ImportRequest<'_>,
        collection: &mut SceneCollection,
    ) -> Result<(), ImportError> {
        let root = classic::parse(request.input)?;

        Translator::new(request.context.platform, collection).run(&root, collection);

        let name = request
            .name
            .map_or_else(|| file_stem(request.path), str::to_string);
        collection.set_name(name);
        Ok(())
    }

    fn find_files(&self, locator: &Locator<'_>) -> Vec<PathBuf> {
        if locator.platform() != Platform::Windows {
            return Vec::new();
        }
        locator
            .config_subdir(&["OBS", "sceneCollection"])
            .map(|dir| locator.files_with_extension(&dir, "xconfig", &[]))
            .unwrap_or_default()
    }
}

/// The `class` of a legacy source.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ClassicClass {
    /// Reference to an entry of the `global sources` block.
    Global,
    Text,
    MonitorCapture,
    BitmapImage,
    BitmapTransition,
    WindowCapture,
    Browser,
    DeviceCapture,
    GraphicsCapture,
    Other,
}

impl ClassicClass {
    fn parse(class: &str) -> Self {
        match class {
            "GlobalSource" => Self::Global,
            "TextSource" => Self::Text,
            "MonitorCaptureSource" => Self::MonitorCapture,
            "BitmapImageSource" => Self::BitmapImage,
            "BitmapTransitionSource" => Self::BitmapTransition,
            "WindowCaptureSource" => Self::WindowCapture,
            "CLRBrowserSource" => Self::Browser,
            "DeviceCapture" => Self::DeviceCapture,
            "GraphicsCapture" => Self::GraphicsCapture,
            _ => Self::Other,
        }
    }
}

/// What a legacy source entry turns into.
enum Outcome {
    /// A source already in the document, placed again by name.
    Existing(String),
    New(SourceDescriptor),
    /// No counterpart on this platform; neither source nor item is emitted.
    Unsupported,
}

const TEXT_FIELDS: &[FieldMap] = &[
    field("text", "text", Conv::Str),
    field("color", "color", Conv::Color),
    field("backgroundColor", "bk_color", Conv::Color),
    field("backgroundOpacity", "bk_opacity", Conv::Int),
    field("vertical", "vertical", Conv::Flag),
    field("textOpacity", "opacity", Conv::Int),
    field("useOutline", "outline", Conv::Flag),
    field("outlineColor", "outline_color", Conv::Color),
    field("outlineOpacity", "outline_opacity", Conv::Int),
    field("useTextExtents", "extents", Conv::Flag),
    field("extentsWidth", "extents_cx", Conv::Int),
    field("extentsHeight", "extents_cy", Conv::Int),
    field("mode", "read_from_file", Conv::Flag),
    field("wrap", "extents_wrap", Conv::Flag),
    field("file", "file", Conv::Path),
];

const BROWSER_FIELDS: &[FieldMap] = &[
    field("CSS", "css", Conv::Str),
    field("Height", "height", Conv::Int),
    field("Width", "width", Conv::Int),
    field("Url", "url", Conv::Str),
];

struct Translator {
    platform: Platform,
    names: NameClaims,
    /// Global source names as written in the file, mapped to the names they were imported under.
    globals: FxHashMap<String, String>,
}

impl Translator {
    fn new(platform: Platform, collection: &SceneCollection) -> Self {
        Self {
            platform,
            names: NameClaims::new(collection),
            globals: FxHashMap::default(),
        }
    }

    fn run(mut self, root: &Value, collection: &mut SceneCollection) {
        for global in root.get_array("globals") {
            if let Outcome::New(source) = self.translate_source(global, collection) {
                self.globals
                    .insert(global.get_str("name").to_string(), source.name.clone());
                collection.push_source(source);
            }
        }

        let mut first_scene = None;
        for scene in root.get_array("scenes") {
            let name = self.names.claim(scene.get_str("name"));
            let mut items = Vec::new();

            for entry in scene.get_array("sources") {
                let placed = match self.translate_source(entry, collection) {
                    Outcome::Existing(name) => name,
                    Outcome::New(source) => {
                        let name = source.name.clone();
                        collection.push_source(source);
                        name
                    }
                    Outcome::Unsupported => continue,
                };
                // Legacy lists are top-first; the canonical order is bottom-first.
                let id = items.len() as i64 + 1;
                items.insert(0, scene_item(entry, placed, id));
            }

            tracing::debug!(scene = %name, items = items.len(), "translated classic scene");

            let mut descriptor = SourceDescriptor::scene(name.clone());
            descriptor.set_items(items);
            collection.push_source(descriptor);
            first_scene.get_or_insert(name);
        }

        if let Some(first) = first_scene {
            collection.set_current_scene(first);
        }
    }

    fn translate_source(&mut self, entry: &Value, collection: &SceneCollection) -> Outcome {
        let class = ClassicClass::parse(entry.get_str("class"));
        let name = entry.get_str("name");

        if class == ClassicClass::Global {
            if let Some(assigned) = self.globals.get(name) {
                return Outcome::Existing(assigned.clone());
            }
            if collection.contains_source(name) {
                return Outcome::Existing(name.to_string());
            }
            tracing::warn!(source = %name, "global source not found");
        }

        let data = entry.get_object("data").cloned().unwrap_or_default();
        let mut settings = Object::new();
        let Some(id) = self.translate_settings(class, &data, &mut settings) else {
            tracing::warn!(source = %name, platform = %self.platform, "unsupported classic source");
            return Outcome::Unsupported;
        };

        let name = self.names.claim(name);
        Outcome::New(SourceDescriptor::new(name, id).with_settings(settings))
    }

    /// Fill `settings` and return the source id. `None` drops the source.
    fn translate_settings(
        &self,
        class: ClassicClass,
        data: &Object,
        settings: &mut Object,
    ) -> Option<&'static str> {
        let platform = self.platform;
        let windows = platform == Platform::Windows;

        match class {
            ClassicClass::Text => {
                text_settings(data, settings);
                SourceKind::Text.id(platform)
            }
            ClassicClass::MonitorCapture => {
                if windows {
                    apply(&[field("monitor", "monitor", Conv::Int)], data, settings);
                }
                settings.insert(
                    cursor_key(platform).to_string(),
                    Value::Boolean(data.get_int("captureMouse") == 1),
                );
                SourceKind::Display.id(platform)
            }
            ClassicClass::BitmapImage => {
                apply(&[field("path", "file", Conv::Path)], data, settings);
                Some("image_source")
            }
            ClassicClass::BitmapTransition => {
                settings.insert("files".to_string(), Value::Array(slideshow_files(data)));
                Some("slideshow")
            }
            ClassicClass::WindowCapture => {
                if windows {
                    let window = format!(
                        "{}:{}:",
                        data.get_text("window"),
                        data.get_text("windowClass")
                    );
                    settings.insert("window".to_string(), Value::String(window));
                    settings.insert("priority".to_string(), Value::Integer(0));
                }
                SourceKind::Window.id(platform)
            }
            ClassicClass::Browser => {
                let browser = browser_settings(data.get_str("sourceSettings"));
                apply(BROWSER_FIELDS, &browser, settings);
                Some("browser_source")
            }
            ClassicClass::DeviceCapture => {
                if windows {
                    let device = format!(
                        "{}:{}",
                        data.get_text("deviceName"),
                        data.get_text("deviceID")
                    );
                    let resolution = format!(
                        "{}x{}",
                        data.get_int("resolutionWidth"),
                        data.get_int("resolutionHeight")
                    );
                    settings.insert("video_device_id".to_string(), Value::String(device));
                    settings.insert("resolution".to_string(), Value::String(resolution));
                }
                SourceKind::VideoDevice.id(platform)
            }
            ClassicClass::GraphicsCapture => {
                if windows {
                    let mode = if data.get_int("useHotkey") == 1 {
                        "hotkey"
                    } else {
                        "window"
                    };
                    let window = format!(
                        ":{}:{}",
                        data.get_text("windowClass"),
                        data.get_text("executable")
                    );
                    settings.insert("capture_mode".to_string(), Value::from(mode));
                    settings.insert("window".to_string(), Value::String(window));
                    apply(&[field("captureMouse", "capture_cursor", Conv::Flag)], data, settings);
                }
                SourceKind::Game.id(platform)
            }
            // Unknown classes and unresolved globals keep their place with no settings.
            ClassicClass::Global | ClassicClass::Other => Some(""),
        }
    }
}

fn scene_item(entry: &Value, name: String, id: i64) -> SceneItem {
    let crop = Crop {
        top: entry.get_int("crop.top"),
        bottom: entry.get_int("crop.bottom"),
        left: entry.get_int("crop.left"),
        right: entry.get_int("crop.right"),
    };

    SceneItem {
        id,
        name: Some(name),
        pos: Vec2::new(entry.get_double("x"), entry.get_double("y")),
        extent: Extent::Bounds {
            size: Vec2::new(entry.get_double("cx"), entry.get_double("cy")),
            bounds_type: BOUNDS_STRETCH,
        },
        rotation: None,
        crop: Some(crop),
        visible: true,
    }
}

fn text_settings(data: &Object, settings: &mut Object) {
    apply(TEXT_FIELDS, data, settings);

    let align = match data.get_int("align") {
        0 => "left",
        1 => "center",
        _ => "right",
    };
    settings.insert("align".to_string(), Value::from(align));

    let bold = data.get_int("bold") == 1;
    let italic = data.get_int("italic") == 1;
    let underline = data.get_int("underline") == 1;

    let mut font = Object::new();
    font.insert(
        "flags".to_string(),
        Value::Integer(font_flags(bold, italic, underline)),
    );
    apply(
        &[
            field("fontSize", "size", Conv::Int),
            field("font", "face", Conv::Str),
        ],
        data,
        &mut font,
    );
    font.insert("style".to_string(), Value::from(font_style(bold, italic)));
    settings.insert("font".to_string(), Value::Object(font));
}

/// `bitmap` is a single path, or an array once the key was repeated.
fn slideshow_files(data: &Object) -> Vec<Value> {
    let file = |path: String| {
        let mut entry = Object::new();
        entry.insert("value".to_string(), Value::String(path));
        Value::Object(entry)
    };

    match data.get("bitmap") {
        Some(Value::Array(paths)) => paths
            .iter()
            .map(|path| match path {
                Value::Object(_) => path.clone(),
                other => file(other.to_text()),
            })
            .collect(),
        Some(path) => vec![file(path.to_text())],
        None => vec![file(String::new())],
    }
}

/// Decode the base64 JSON blob of a browser source.
fn browser_settings(encoded: &str) -> Object {
    let decoded = match STANDARD.decode(encoded.trim()) {
        Ok(bytes) => bytes,
        Err(err) => {
            tracing::warn!(error = %err, "browser settings are not base64");
            return Object::new();
        }
    };

    match Value::parse_json(&String::from_utf8_lossy(&decoded)) {
        Ok(Value::Object(object)) => object,
        Ok(_) => Object::new(),
        Err(err) => {
            tracing::warn!(error = %err, "browser settings are not JSON");
            Object::new()
        }
    }
}
