//! XSplit Broadcaster presentations (`.bpres`).
//!
//! ```text
//! <configuration>
//!   <placement name="Scene 1" id="{...}">      ← scene
//!     <item type="4" srcid="{...}" item="C:\logo.png"
//!           pos_left="0" pos_top="0" pos_right="0.5" pos_bottom="0.5" ... />
//!   </placement>
//! </configuration>
//! ```
//!
//! Item geometry is given as fractions of the canvas. An item whose `srcid`
//! was seen before reuses that source; `type="11"` items place another scene.

use std::path::{Path, PathBuf};

use super::document::{BOUNDS_STRETCH, Extent, SceneItem, SourceDescriptor, Vec2};
use super::kinds::{SourceKind, cursor_key};
use super::mapping::{COLOR_ALPHA_BIAS, rgb_to_argb};
use super::resolve::{NameClaims, SourceIndex};
use super::{FormatId, ImportContext, ImportError, ImportRequest, SceneCollection, SceneFormat};
use crate::base::text::{
    LineReader, collapse_escaped_slashes, forward_slashes, unescape_entities,
};
use crate::base::{Fields, Object, Platform, Value};
use crate::parser::{Node, markup};
use crate::project::{FileSystem, Locator};

const DEFAULT_NAME: &str = "XSplit Import";

const SLIDESHOW_PLUGIN: &str = "html:plugin:imageslideshowplg*";
const TITLE_PLUGIN: &str = "html:plugin:titleplg*";

/// XSplit Broadcaster presentation files.
#[derive(Clone, Copy, Debug, Default)]
pub struct XSplit;

impl SceneFormat for XSplit {
    fn id(&self) -> FormatId {
        FormatId::XSplit
    }

    fn extensions(&self) -> &'static [&'static str] {
        &["bpres"]
    }

    fn check(&self, input: &str) -> bool {
        LineReader::new(input)
            .find(|line| !line.starts_with("<?xml"))
            .is_some_and(|line| line.starts_with("<configuration"))
    }

    fn collection_name(&self, _path: &Path, _input: &str, _fs: &dyn FileSystem) -> Option<String> {
        Some(DEFAULT_NAME.to_string())
    }

    fn import(
        &self,
        request: &ImportRequest<'_>,
        collection: &mut SceneCollection,
    ) -> Result<(), ImportError> {
        let root = markup::parse(request.input)?.ok_or_else(|| {
            ImportError::invalid(FormatId::XSplit.as_str(), "no configuration element")
        })?;

        Translator::new(request.context, collection).run(&root, collection);
        collection.set_name(request.name.unwrap_or(DEFAULT_NAME));
        Ok(())
    }

    fn find_files(&self, locator: &Locator<'_>) -> Vec<PathBuf> {
        if locator.platform() != Platform::Windows {
            return Vec::new();
        }
        locator
            .program_data_subdir(&["SplitMediaLabs", "XSplit", "Presentation2.0"])
            .and_then(|dir| locator.named_file(&dir, "Placements.bpres"))
            .into_iter()
            .collect()
    }
}

/// The `type` attribute of an item.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ItemType {
    /// Video playlist, network stream, NDI or media file.
    Media,
    /// DirectShow camera or WASAPI microphone.
    Device,
    Image,
    /// Display or window capture.
    Capture,
    Game,
    /// Rendered by the browser: web page, slideshow or title.
    Html,
    Scene,
    Other(i64),
}

impl From<i64> for ItemType {
    fn from(code: i64) -> Self {
        match code {
            1 => ItemType::Media,
            2 => ItemType::Device,
            4 => ItemType::Image,
            5 => ItemType::Capture,
            7 => ItemType::Game,
            8 => ItemType::Html,
            11 => ItemType::Scene,
            other => ItemType::Other(other),
        }
    }
}

struct Translator<'a> {
    context: &'a ImportContext,
    index: SourceIndex,
    names: NameClaims,
    sources: Vec<SourceDescriptor>,
}

impl<'a> Translator<'a> {
    fn new(context: &'a ImportContext, collection: &SceneCollection) -> Self {
        Self {
            context,
            index: SourceIndex::new(),
            names: NameClaims::new(collection),
            sources: Vec::new(),
        }
    }

    fn run(mut self, root: &Node, collection: &mut SceneCollection) {
        let placements: Vec<&Node> = root.children_of_kind("placement").collect();

        // All scenes exist before any item so items can reference later scenes.
        let mut scenes: Vec<SourceDescriptor> = placements
            .iter()
            .map(|placement| {
                let name = self.names.claim(&placement.attr.get_text("name"));
                self.index.insert(&placement.attr.get_text("id"), &name);
                SourceDescriptor::scene(name)
            })
            .collect();

        for (scene, placement) in scenes.iter_mut().zip(&placements) {
            let items = placement
                .children
                .iter()
                .enumerate()
                .map(|(index, item)| self.translate_item(&item.attr, index as i64 + 1))
                .collect();
            scene.set_items(items);
        }

        tracing::debug!(
            scenes = scenes.len(),
            sources = self.sources.len(),
            "translated xsplit presentation"
        );

        let first = scenes.first().map(|s| s.name.clone());
        for scene in scenes {
            collection.push_source(scene);
        }
        for source in self.sources {
            collection.push_source(source);
        }
        if let Some(first) = first {
            collection.set_current_scene(first);
        }
    }

    fn translate_item(&mut self, attr: &Object, id: i64) -> SceneItem {
        let src_id = attr.get_text("srcid");

        let name = if let Some(known) = self.index.resolve(&src_id) {
            Some(known.to_string())
        } else if ItemType::from(attr.get_int("type")) == ItemType::Scene {
            let target = attr.get_text("item");
            let scene = self.index.resolve(&target).map(str::to_string);
            if scene.is_none() {
                tracing::warn!(scene = %target, "item references an unknown scene");
            }
            scene
        } else {
            let candidate = match attr.get_text("cname") {
                cname if cname.is_empty() => attr.get_text("name"),
                cname => cname,
            };
            let name = self.names.claim(&candidate);
            let source = self.translate_source(attr, name.clone());
            self.index.insert(&src_id, &name);
            self.sources.push(source);
            Some(name)
        };

        let canvas = self.context.canvas;
        let (width, height) = (f64::from(canvas.width), f64::from(canvas.height));
        let left = attr.get_double("pos_left");
        let right = attr.get_double("pos_right");
        let top = attr.get_double("pos_top");
        let bottom = attr.get_double("pos_bottom");

        SceneItem {
            id,
            name,
            pos: Vec2::new(left * width, top * height),
            extent: Extent::Bounds {
                size: Vec2::new((right - left) * width, (bottom - top) * height),
                bounds_type: BOUNDS_STRETCH,
            },
            rotation: None,
            crop: None,
            visible: attr.get_int("visible") == 1,
        }
    }

    fn translate_source(&self, attr: &Object, name: String) -> SourceDescriptor {
        let platform = self.context.platform;
        let mut settings = Object::new();

        let id = match ItemType::from(attr.get_int("type")) {
            ItemType::Media => Some(media_source(attr, &mut settings)),
            ItemType::Device => device_source(attr, platform, &mut settings),
            ItemType::Image => {
                settings.insert(
                    "file".to_string(),
                    Value::String(forward_slashes(&attr.get_text("item"))),
                );
                Some("image_source")
            }
            ItemType::Capture => capture_source(attr, platform, &mut settings),
            ItemType::Game => game_source(attr, platform, &mut settings),
            ItemType::Html => html_source(&attr.get_text("item"), platform, &mut settings),
            ItemType::Scene | ItemType::Other(_) => None,
        };

        let (id, settings) = match id {
            Some(id) => (id, settings),
            None => {
                tracing::warn!(
                    source = %name,
                    item_type = attr.get_int("type"),
                    %platform,
                    "unsupported xsplit item"
                );
                ("", Object::new())
            }
        };
        tracing::trace!(source = %name, id, "xsplit source");

        let mut source = SourceDescriptor::new(name, id).with_settings(settings);
        source.volume = Some(attr.get_double("volume") / 100.0);
        source
    }
}

fn media_source(attr: &Object, settings: &mut Object) -> &'static str {
    let playlist = attr.get_text("FilePlaylist");
    if !playlist.is_empty() {
        settings.insert("playlist".to_string(), Value::Array(parse_playlist(&playlist)));
        if attr.get_int("OpWhenFinished") == 2 {
            settings.insert("loop".to_string(), Value::Boolean(true));
        }
        return "vlc_source";
    }

    let url = attr.get_text("item");
    match url.split_once("://") {
        Some(("smlndi", _)) => "ndi_source",
        Some(_) => {
            let input = url.split('\\').next().unwrap_or_default();
            settings.insert("input".to_string(), Value::from(input));
            settings.insert("is_local_file".to_string(), Value::Boolean(false));
            "ffmpeg_source"
        }
        None => {
            settings.insert("local_file".to_string(), Value::String(forward_slashes(&url)));
            settings.insert("is_local_file".to_string(), Value::Boolean(true));
            "ffmpeg_source"
        }
    }
}

/// `path*options|path*options|...` into `[{value: path}, ...]`.
fn parse_playlist(config: &str) -> Vec<Value> {
    config
        .split('|')
        .map(|entry| {
            let path = entry.split('*').next().unwrap_or_default();
            let mut file = Object::new();
            file.insert("value".to_string(), Value::from(path));
            Value::Object(file)
        })
        .collect()
}

fn device_source(attr: &Object, platform: Platform, settings: &mut Object) -> Option<&'static str> {
    let audio = attr.get_text("itemaudio");
    if audio.is_empty() {
        return SourceKind::VideoDevice.id(platform);
    }

    if platform == Platform::Windows {
        if let Some((_, device)) = audio.split_once("\\wave:") {
            let device_id = format!("{{0.0.1.00000000}}.{device}").to_lowercase();
            settings.insert("device_id".to_string(), Value::String(device_id));
        }
    }
    SourceKind::AudioInput.id(platform)
}

/// Attributes of the entity-escaped tag stored in an item's `item`
/// attribute.
fn embedded_attributes(attr: &Object) -> Object {
    let markup_text = unescape_entities(&attr.get_text("item"));
    match markup::parse(&markup_text) {
        Ok(Some(node)) => node.attr,
        Ok(None) => Object::new(),
        Err(err) => {
            tracing::warn!(error = %err, "unreadable capture options");
            Object::new()
        }
    }
}

fn capture_source(attr: &Object, platform: Platform, settings: &mut Object) -> Option<&'static str> {
    let options = embedded_attributes(attr);

    if !options.get_text("desktop").is_empty() {
        settings.insert(
            cursor_key(platform).to_string(),
            Value::Boolean(attr.get_int("ScrCapShowMouse") == 1),
        );
        return SourceKind::Display.id(platform);
    }

    if platform == Platform::Windows {
        let class = match options.get_text("class") {
            class if class.is_empty() => "class".to_string(),
            class => class,
        };
        let module = options.get_text("module");
        let exe = module.rsplit('\\').next().unwrap_or_default();
        let window = format!("{}:{class}:{exe}", options.get_text("window"));
        settings.insert("window".to_string(), Value::String(window));
        settings.insert("priority".to_string(), Value::Integer(2));
    }
    SourceKind::Window.id(platform)
}

fn game_source(attr: &Object, platform: Platform, settings: &mut Object) -> Option<&'static str> {
    if platform == Platform::Windows {
        let options = embedded_attributes(attr);
        let window = format!(
            "{}::{}",
            options.get_text("wndname"),
            options.get_text("imagename")
        );
        settings.insert("window".to_string(), Value::String(window));
        settings.insert("capture_mode".to_string(), Value::from("window"));
    }
    SourceKind::Game.id(platform)
}

fn html_source(plugin: &str, platform: Platform, settings: &mut Object) -> Option<&'static str> {
    if plugin.starts_with(SLIDESHOW_PLUGIN) {
        *settings = slideshow_settings(plugin);
        Some("slideshow")
    } else if plugin.starts_with(TITLE_PLUGIN) {
        *settings = text_settings(plugin);
        SourceKind::Text.id(platform)
    } else if !plugin.starts_with("html") {
        let url = plugin.split('*').next().unwrap_or_default();
        settings.insert("url".to_string(), Value::from(url));
        Some("browser_source")
    } else {
        None
    }
}

/// JSON options after the first `*` of a plugin string, with entities
/// decoded and Windows separators rewritten to `/`.
fn plugin_options(plugin: &str) -> Value {
    let Some((_, options)) = plugin.split_once('*') else {
        return Value::object();
    };
    let options = forward_slashes(&collapse_escaped_slashes(&unescape_entities(options)));
    Value::parse_json(&options).unwrap_or_else(|err| {
        tracing::warn!(error = %err, "unreadable plugin options");
        Value::object()
    })
}

fn slideshow_settings(plugin: &str) -> Object {
    let options = plugin_options(plugin);
    let files: Vec<Value> = options
        .get_array("images")
        .iter()
        .map(|image| {
            let mut file = Object::new();
            file.insert("value".to_string(), Value::String(image.to_text()));
            Value::Object(file)
        })
        .collect();

    let mut settings = Object::new();
    settings.insert("randomize".to_string(), Value::Boolean(options.get_bool("random")));
    settings.insert(
        "slide_time".to_string(),
        Value::Integer(
            options
                .get_int("delay")
                .saturating_mul(1000)
                .saturating_add(700),
        ),
    );
    settings.insert("files".to_string(), Value::Array(files));
    settings
}

fn outline_size(outline: &str) -> Option<i64> {
    match outline {
        "thinner" => Some(5),
        "thin" => Some(10),
        "thick" => Some(20),
        "thicker" => Some(40),
        _ => None,
    }
}

/// `#RRGGBB` as opaque ARGB.
fn hex_color(text: &str) -> i64 {
    let digits = text.strip_prefix('#').unwrap_or(text);
    match i64::from_str_radix(digits, 16) {
        Ok(rgb) => rgb_to_argb(rgb),
        Err(_) => COLOR_ALPHA_BIAS,
    }
}

fn text_settings(plugin: &str) -> Object {
    let options = plugin_options(plugin);
    let mut settings = Object::new();

    settings.insert("text".to_string(), Value::String(options.get_text("text")));

    let mut font = Object::new();
    font.insert("face".to_string(), Value::String(options.get_text("fontStyle")));
    font.insert("size".to_string(), Value::Integer(200));

    if let Some(size) = outline_size(options.get_str("outline")) {
        settings.insert("outline".to_string(), Value::Boolean(true));
        settings.insert("outline_size".to_string(), Value::Integer(size));
    }
    settings.insert(
        "outline_color".to_string(),
        Value::Integer(hex_color(options.get_str("outlineColor"))),
    );
    settings.insert(
        "color".to_string(),
        Value::Integer(hex_color(options.get_str("color"))),
    );
    settings.insert("align".to_string(), Value::String(options.get_text("textAlign")));

    let valign = match options.get_str("vertAlign") {
        "middle" => "center",
        other => other,
    };
    settings.insert("valign".to_string(), Value::from(valign));
    settings.insert("opacity".to_string(), Value::Integer(options.get_int("alpha")));
    settings.insert("font".to_string(), Value::Object(font));
    settings
}
